//! Document-type descriptors.
//!
//! A descriptor controls field widths, the layout template, valid
//! sub-types and the check-digit rules of one document type. Descriptors
//! are built once and shared read-only.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MrzError;
use crate::fields::CheckField;
use crate::layout::Layout;
use crate::reference::RefEntry;

pub const DEFAULT_DOC_NUMBER_LENGTH: usize = 9;
pub const DEFAULT_EXTRA_NUMBER_LENGTH: usize = 0;
pub const DEFAULT_OPT_NUMBER_LENGTH: usize = 14;
pub const DEFAULT_NAME_LENGTH: usize = 39;

pub const DEFAULT_OPT_NUMBER_LABEL: &str = "Optional no.";

/// Document-type-specific rule that recomputes `overall3` over a
/// different field ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecialCheck {
    /// Laser visa / border crossing card.
    BorderCrossingCard,
    /// Enhanced driver license (issuing state is part of the composite).
    EnhancedDriverLicense,
    /// Alien registration card (extra number check digit included).
    AlienRegistration,
}

impl SpecialCheck {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialCheck::BorderCrossingCard => "border-crossing-card",
            SpecialCheck::EnhancedDriverLicense => "enhanced-driver-license",
            SpecialCheck::AlienRegistration => "alien-registration",
        }
    }
}

impl fmt::Display for SpecialCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpecialCheck {
    type Err = MrzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "border-crossing-card" => Ok(SpecialCheck::BorderCrossingCard),
            "enhanced-driver-license" => Ok(SpecialCheck::EnhancedDriverLicense),
            "alien-registration" => Ok(SpecialCheck::AlienRegistration),
            _ => Err(MrzError::UnknownSpecialCheck {
                value: s.to_string(),
            }),
        }
    }
}

/// Reference list a descriptor draws its sub-types from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubTypeSource {
    VisaClasses,
    States,
}

/// Effective field widths of a document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldWidths {
    pub doc_number: usize,
    pub extra_number: usize,
    pub opt_number: usize,
    pub name: usize,
}

impl Default for FieldWidths {
    fn default() -> Self {
        Self {
            doc_number: DEFAULT_DOC_NUMBER_LENGTH,
            extra_number: DEFAULT_EXTRA_NUMBER_LENGTH,
            opt_number: DEFAULT_OPT_NUMBER_LENGTH,
            name: DEFAULT_NAME_LENGTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTypeDescriptor {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_number_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_number_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opt_number_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_length: Option<usize>,
    #[serde(default)]
    pub layout: Layout,
    /// Custom template replacing the layout's template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_type_source: Option<SubTypeSource>,
    /// Valid sub-types, filled from reference data when the catalog is built.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_types: Vec<RefEntry>,
    /// Literal values replacing computed check digits.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub force_check: BTreeMap<CheckField, char>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_check: Option<SpecialCheck>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opt_number_label: Option<String>,
    #[serde(default)]
    pub hide_nationality: bool,
}

impl DocumentTypeDescriptor {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            doc_number_length: None,
            extra_number_length: None,
            opt_number_length: None,
            name_length: None,
            layout: Layout::default(),
            template: None,
            sub_type_source: None,
            sub_types: Vec::new(),
            force_check: BTreeMap::new(),
            special_check: None,
            opt_number_label: None,
            hide_nationality: false,
        }
    }

    #[must_use]
    pub fn with_doc_number_length(mut self, length: usize) -> Self {
        self.doc_number_length = Some(length);
        self
    }

    #[must_use]
    pub fn with_extra_number_length(mut self, length: usize) -> Self {
        self.extra_number_length = Some(length);
        self
    }

    #[must_use]
    pub fn with_opt_number_length(mut self, length: usize) -> Self {
        self.opt_number_length = Some(length);
        self
    }

    #[must_use]
    pub fn with_name_length(mut self, length: usize) -> Self {
        self.name_length = Some(length);
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    #[must_use]
    pub fn with_sub_type_source(mut self, source: SubTypeSource) -> Self {
        self.sub_type_source = Some(source);
        self
    }

    #[must_use]
    pub fn with_force_check(mut self, field: CheckField, value: char) -> Self {
        self.force_check.insert(field, value);
        self
    }

    #[must_use]
    pub fn with_special_check(mut self, special: SpecialCheck) -> Self {
        self.special_check = Some(special);
        self
    }

    #[must_use]
    pub fn with_opt_number_label(mut self, label: impl Into<String>) -> Self {
        self.opt_number_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_hidden_nationality(mut self) -> Self {
        self.hide_nationality = true;
        self
    }

    /// Widths with unset entries replaced by the 9/0/14/39 defaults.
    ///
    /// An explicit `0` is kept as a zero width, so a catalog file that sets
    /// `nameLength: 0` drops the field rather than getting the default.
    pub fn widths(&self) -> FieldWidths {
        let defaults = FieldWidths::default();
        FieldWidths {
            doc_number: self.doc_number_length.unwrap_or(defaults.doc_number),
            extra_number: self.extra_number_length.unwrap_or(defaults.extra_number),
            opt_number: self.opt_number_length.unwrap_or(defaults.opt_number),
            name: self.name_length.unwrap_or(defaults.name),
        }
    }

    /// The template used for rendering: the custom template if set,
    /// otherwise the layout's.
    pub fn template(&self) -> &str {
        self.template
            .as_deref()
            .unwrap_or_else(|| self.layout.template())
    }

    pub fn forced_check(&self, field: CheckField) -> Option<char> {
        self.force_check.get(&field).copied()
    }

    pub fn opt_number_label(&self) -> &str {
        self.opt_number_label
            .as_deref()
            .unwrap_or(DEFAULT_OPT_NUMBER_LABEL)
    }

    /// Whether `code` is a valid sub-type. Types without a sub-type list
    /// accept only an empty sub-type.
    pub fn accepts_sub_type(&self, code: &str) -> bool {
        let code = code.trim();
        if code.is_empty() {
            return true;
        }
        self.sub_types
            .iter()
            .any(|entry| entry.code.eq_ignore_ascii_case(code))
    }
}
