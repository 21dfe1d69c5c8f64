//! One-call encoding: build the field set and render the descriptor's
//! template.

use serde::Serialize;
use tracing::debug;

use mrz_model::layout::LINE_BREAK;
use mrz_model::{DocumentTypeDescriptor, EncodedFieldSet, IdentityRecord};

use crate::error::Result;
use crate::fields::build_fields;
use crate::render::render;

/// Output form of a rendered MRZ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// `<br>` between lines and `&lt;` for filler.
    #[default]
    Markup,
    /// `\n` between lines and a literal `<`.
    Text,
}

impl OutputMode {
    pub fn is_text(self) -> bool {
        matches!(self, OutputMode::Text)
    }

    pub fn line_separator(self) -> &'static str {
        match self {
            OutputMode::Markup => LINE_BREAK,
            OutputMode::Text => "\n",
        }
    }
}

/// Result of encoding one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedMrz {
    pub fields: EncodedFieldSet,
    pub mode: OutputMode,
    pub text: String,
}

impl EncodedMrz {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split(self.mode.line_separator())
    }
}

/// Encode `record` with `descriptor`.
///
/// Returns `Ok(None)` when no descriptor is given; the caller has nothing
/// to encode yet. Errors only come from a malformed template.
pub fn encode(
    record: &IdentityRecord,
    descriptor: Option<&DocumentTypeDescriptor>,
    mode: OutputMode,
) -> Result<Option<EncodedMrz>> {
    let Some(descriptor) = descriptor else {
        return Ok(None);
    };

    let widths = descriptor.widths();
    debug!(
        doc_type = %descriptor.code,
        layout = %descriptor.layout,
        doc_number_width = widths.doc_number,
        extra_number_width = widths.extra_number,
        opt_number_width = widths.opt_number,
        name_width = widths.name,
        "encoding record"
    );

    let fields = build_fields(record, descriptor);
    let text = render(descriptor.template(), &fields, mode.is_text())?;
    Ok(Some(EncodedMrz { fields, mode, text }))
}
