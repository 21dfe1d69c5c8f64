//! Raw identity record supplied per encode request.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Accepted input date formats, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d"];

/// Parse a calendar date from `YYYY-MM-DD` or `YYYYMMDD`.
///
/// Returns `None` for blank or invalid input; the encoder renders such
/// dates as filler.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// The raw input of one encode call. Every field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentityRecord {
    #[serde(deserialize_with = "lenient_date")]
    pub birth_date: Option<NaiveDate>,
    pub doc_number: String,
    pub doc_sub_type: String,
    /// Code of the selected document type.
    pub doc_type: Option<String>,
    #[serde(deserialize_with = "lenient_date")]
    pub expire_date: Option<NaiveDate>,
    pub extra_number: String,
    pub first_name: String,
    pub issue_country: String,
    pub last_name: String,
    pub nationality: String,
    pub opt_number: String,
    pub sex: String,
}

impl IdentityRecord {
    /// Code of the selected document type, if any non-blank one is set.
    pub fn doc_type_code(&self) -> Option<&str> {
        self.doc_type
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2000, 1, 1);
        assert_eq!(parse_date("2000-01-01"), expected);
        assert_eq!(parse_date(" 20000101 "), expected);
    }

    #[test]
    fn invalid_dates_are_none() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2000-02-30"), None);
        assert_eq!(parse_date("01/01/2000"), None);
    }

    #[test]
    fn blank_doc_type_is_absent() {
        let mut record = IdentityRecord::default();
        assert_eq!(record.doc_type_code(), None);
        record.doc_type = Some("  ".to_string());
        assert_eq!(record.doc_type_code(), None);
        record.doc_type = Some(" P ".to_string());
        assert_eq!(record.doc_type_code(), Some("P"));
    }
}
