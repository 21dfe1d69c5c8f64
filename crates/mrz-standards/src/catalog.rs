#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, warn};

use mrz_core::{EncodedMrz, OutputMode, RenderError, Template, encode};
use mrz_model::{
    DocumentTypeDescriptor, FieldName, IdentityRecord, Placeholder, ReferenceData, SubTypeSource,
};

use crate::builtin::builtin_descriptors;
use crate::error::{Result, StandardsError};

/// Immutable, validated set of document-type descriptors.
///
/// Lookup is by code, case-insensitive; iteration keeps load order.
#[derive(Debug, Clone)]
pub struct Catalog {
    descriptors: Vec<DocumentTypeDescriptor>,
    by_code: BTreeMap<String, usize>,
}

impl Catalog {
    /// The built-in catalog with sub-types filled from `reference`.
    pub fn builtin(reference: &ReferenceData) -> Result<Self> {
        Self::from_descriptors(builtin_descriptors(), reference)
    }

    /// Load descriptors from a JSON array, replacing the built-in list.
    pub fn from_path(path: &Path, reference: &ReferenceData) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
        let descriptors: Vec<DocumentTypeDescriptor> =
            serde_json::from_str(&contents).map_err(|e| StandardsError::json(path, e))?;
        debug!(path = %path.display(), count = descriptors.len(), "loaded catalog file");
        Self::from_descriptors(descriptors, reference)
    }

    /// Validate `descriptors` and build the catalog.
    ///
    /// Fails on an empty or duplicate code and on any template placeholder
    /// that does not name a field or check digit.
    pub fn from_descriptors(
        descriptors: Vec<DocumentTypeDescriptor>,
        reference: &ReferenceData,
    ) -> Result<Self> {
        let mut by_code = BTreeMap::new();
        let mut validated = Vec::with_capacity(descriptors.len());

        for mut descriptor in descriptors {
            descriptor.code = descriptor.code.trim().to_string();
            if descriptor.code.is_empty() {
                return Err(StandardsError::EmptyCode);
            }
            let key = descriptor.code.to_uppercase();
            if by_code.contains_key(&key) {
                return Err(StandardsError::DuplicateCode {
                    code: descriptor.code,
                });
            }
            validate_template(&descriptor)?;
            fill_sub_types(&mut descriptor, reference);

            by_code.insert(key, validated.len());
            validated.push(descriptor);
        }

        debug!(count = validated.len(), "document type catalog built");
        Ok(Self {
            descriptors: validated,
            by_code,
        })
    }

    pub fn get(&self, code: &str) -> Option<&DocumentTypeDescriptor> {
        self.by_code
            .get(&code.trim().to_uppercase())
            .and_then(|idx| self.descriptors.get(*idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocumentTypeDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// First descriptor in catalog order, the default selection.
    pub fn first(&self) -> Option<&DocumentTypeDescriptor> {
        self.descriptors.first()
    }

    /// Encode `record` with the descriptor named by `record.doc_type`.
    ///
    /// A record without a document type encodes to `None`; an unknown code
    /// is an error.
    pub fn encode(&self, record: &IdentityRecord, mode: OutputMode) -> Result<Option<EncodedMrz>> {
        let Some(code) = record.doc_type_code() else {
            return Ok(None);
        };
        let descriptor = self
            .get(code)
            .ok_or_else(|| StandardsError::UnknownDocumentType {
                code: code.to_string(),
            })?;
        if !descriptor.accepts_sub_type(&record.doc_sub_type) {
            warn!(
                doc_type = %descriptor.code,
                "sub-type is not listed for this document type"
            );
        }
        Ok(encode(record, Some(descriptor), mode)?)
    }
}

fn validate_template(descriptor: &DocumentTypeDescriptor) -> Result<()> {
    let template = Template::parse(descriptor.template()).map_err(|err| match err {
        RenderError::UnresolvedPlaceholder { name } => StandardsError::UnresolvedPlaceholder {
            code: descriptor.code.clone(),
            placeholder: name,
        },
        source => StandardsError::InvalidTemplate {
            code: descriptor.code.clone(),
            source,
        },
    })?;

    let widths = descriptor.widths();
    for (field, width) in [
        (FieldName::DocNumber, widths.doc_number),
        (FieldName::ExtraNumber, widths.extra_number),
        (FieldName::OptNumber, widths.opt_number),
        (FieldName::Name, widths.name),
    ] {
        if width == 0 && template.references(Placeholder::Field(field)) {
            warn!(
                doc_type = %descriptor.code,
                field = %field,
                "template references a field with zero width"
            );
        }
    }
    Ok(())
}

fn fill_sub_types(descriptor: &mut DocumentTypeDescriptor, reference: &ReferenceData) {
    if !descriptor.sub_types.is_empty() {
        return;
    }
    descriptor.sub_types = match descriptor.sub_type_source {
        Some(SubTypeSource::VisaClasses) => reference.visa_classes.clone(),
        Some(SubTypeSource::States) => reference.states.clone(),
        None => return,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use mrz_model::RefEntry;

    fn reference() -> ReferenceData {
        ReferenceData {
            countries: vec![RefEntry::new("USA", "United States")],
            states: vec![RefEntry::new("NY", "New York")],
            visa_classes: vec![RefEntry::new("B2", "Temporary visitor for pleasure")],
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let catalog = Catalog::builtin(&reference()).expect("builtin catalog");
        assert_eq!(catalog.get("vn").map(|d| d.code.as_str()), Some("VN"));
        assert_eq!(catalog.get(" P ").map(|d| d.name.as_str()), Some("Passport"));
        assert!(catalog.get("ZZ").is_none());
    }

    #[test]
    fn sub_types_come_from_reference_data() {
        let catalog = Catalog::builtin(&reference()).expect("builtin catalog");
        let visa = catalog.get("VI").expect("VI");
        assert!(visa.accepts_sub_type("B2"));
        let license = catalog.get("ID").expect("ID");
        assert!(license.accepts_sub_type("ny"));
        assert!(!license.accepts_sub_type("B2"));
        assert!(catalog.get("P").expect("P").sub_types.is_empty());
    }

    #[test]
    fn rejects_unresolved_placeholder() {
        let broken =
            DocumentTypeDescriptor::new("X1", "Broken").with_template("{{docType}}{{surname}}");
        let err = Catalog::from_descriptors(vec![broken], &reference()).expect_err("invalid");
        assert!(matches!(
            err,
            StandardsError::UnresolvedPlaceholder { ref code, ref placeholder }
                if code == "X1" && placeholder == "surname"
        ));
    }

    #[test]
    fn rejects_unknown_check_digit() {
        let broken =
            DocumentTypeDescriptor::new("X2", "Broken").with_template("{{check.surname}}");
        let err = Catalog::from_descriptors(vec![broken], &reference()).expect_err("invalid");
        assert!(matches!(
            err,
            StandardsError::UnresolvedPlaceholder { ref placeholder, .. }
                if placeholder == "check.surname"
        ));
    }

    #[test]
    fn rejects_unterminated_placeholder() {
        let broken = DocumentTypeDescriptor::new("X1", "Broken").with_template("{{docType");
        let err = Catalog::from_descriptors(vec![broken], &reference()).expect_err("invalid");
        assert!(matches!(
            err,
            StandardsError::InvalidTemplate {
                source: RenderError::Syntax(_),
                ..
            }
        ));
    }

    #[test]
    fn rejects_duplicate_codes() {
        let descriptors = vec![
            DocumentTypeDescriptor::new("P", "Passport"),
            DocumentTypeDescriptor::new("p", "Passport again"),
        ];
        let err = Catalog::from_descriptors(descriptors, &reference()).expect_err("duplicate");
        assert!(matches!(err, StandardsError::DuplicateCode { ref code } if code == "p"));
    }

    #[test]
    fn rejects_empty_code() {
        let err = Catalog::from_descriptors(
            vec![DocumentTypeDescriptor::new("  ", "Nameless")],
            &reference(),
        )
        .expect_err("empty code");
        assert!(matches!(err, StandardsError::EmptyCode));
    }

    #[test]
    fn zero_width_is_allowed() {
        let descriptor = DocumentTypeDescriptor::new("Z", "Zero").with_name_length(0);
        let catalog = Catalog::from_descriptors(vec![descriptor], &reference()).expect("catalog");
        assert_eq!(catalog.len(), 1);
    }
}
