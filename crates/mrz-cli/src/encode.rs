//! Output of the `encode` command.

use anyhow::{Context, Result};
use tracing::{trace, warn};

use mrz_core::OutputMode;
use mrz_model::IdentityRecord;
use mrz_standards::Catalog;

use crate::logging::redact_value;
use crate::summary::fields_table;

#[derive(Debug, Clone, Copy)]
pub struct EncodeOptions {
    pub mode: OutputMode,
    /// Append the field and check-digit table.
    pub show_fields: bool,
    /// Print the encoded MRZ as pretty JSON instead of lines.
    pub json: bool,
}

/// Encode `record` and format it for stdout.
///
/// A record without a document type yields an empty string: there is
/// nothing to encode yet, which is not an error.
///
/// # Errors
///
/// Returns an error for an unknown document type or a broken template.
pub fn encode_output(
    catalog: &Catalog,
    record: &IdentityRecord,
    options: &EncodeOptions,
) -> Result<String> {
    let Some(mrz) = catalog
        .encode(record, options.mode)
        .context("encode record")?
    else {
        warn!("record has no document type; nothing to encode");
        return Ok(String::new());
    };
    trace!(
        name = redact_value(&mrz.fields.name),
        doc_number = redact_value(&mrz.fields.doc_number),
        "encoded fields"
    );

    if options.json {
        let mut out = serde_json::to_string_pretty(&mrz).context("serialize MRZ")?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    for line in mrz.lines() {
        out.push_str(line);
        out.push('\n');
    }
    if options.show_fields {
        // encode() succeeded, so the code is known
        if let Some(descriptor) = record.doc_type_code().and_then(|code| catalog.get(code)) {
            out.push_str(&fields_table(&mrz, descriptor).to_string());
            out.push('\n');
        }
    }
    Ok(out)
}
