//! Assembling an identity record from a JSON file and command-line flags.

use std::path::Path;

use anyhow::{Context, Result, bail};

use mrz_model::{IdentityRecord, parse_date};

/// Record values given on the command line. Set values replace those read
/// from a record file.
#[derive(Debug, Clone, Default)]
pub struct RecordOverrides {
    pub doc_type: Option<String>,
    pub doc_sub_type: Option<String>,
    pub doc_number: Option<String>,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub birth_date: Option<String>,
    pub expire_date: Option<String>,
    pub issue_country: Option<String>,
    pub nationality: Option<String>,
    pub sex: Option<String>,
    pub opt_number: Option<String>,
    pub extra_number: Option<String>,
}

impl RecordOverrides {
    /// Apply every set value to `record`.
    ///
    /// # Errors
    ///
    /// Fails when a date flag is neither `YYYY-MM-DD` nor `YYYYMMDD`.
    pub fn apply(self, record: &mut IdentityRecord) -> Result<()> {
        if let Some(code) = self.doc_type {
            record.doc_type = Some(code);
        }
        let text_fields = [
            (self.doc_sub_type, &mut record.doc_sub_type),
            (self.doc_number, &mut record.doc_number),
            (self.last_name, &mut record.last_name),
            (self.first_name, &mut record.first_name),
            (self.issue_country, &mut record.issue_country),
            (self.nationality, &mut record.nationality),
            (self.sex, &mut record.sex),
            (self.opt_number, &mut record.opt_number),
            (self.extra_number, &mut record.extra_number),
        ];
        for (value, slot) in text_fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
        if let Some(raw) = self.birth_date {
            record.birth_date = Some(parse_date_flag("--birth-date", &raw)?);
        }
        if let Some(raw) = self.expire_date {
            record.expire_date = Some(parse_date_flag("--expire-date", &raw)?);
        }
        Ok(())
    }
}

fn parse_date_flag(flag: &str, raw: &str) -> Result<chrono::NaiveDate> {
    match parse_date(raw) {
        Some(date) => Ok(date),
        None => bail!("{flag}: invalid date {raw:?} (expected YYYY-MM-DD or YYYYMMDD)"),
    }
}

/// Read a record from a JSON object with camelCase keys. Unparseable dates
/// become absent dates.
pub fn load_record(path: &Path) -> Result<IdentityRecord> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read record: {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parse record: {}", path.display()))
}

/// Start from the record file if given, then apply the flags.
pub fn assemble_record(path: Option<&Path>, overrides: RecordOverrides) -> Result<IdentityRecord> {
    let mut record = match path {
        Some(path) => load_record(path)?,
        None => IdentityRecord::default(),
    };
    overrides.apply(&mut record)?;
    Ok(record)
}
