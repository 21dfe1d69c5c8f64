//! Encoded field set produced for a single record.
//!
//! Field values are stored in text form: fixed width, uppercase ASCII, with
//! a literal `<` filler. Markup escaping is the renderer's concern.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MrzError;

/// Prefix used by templates to address check digits (`check.docNumber`).
pub const CHECK_PREFIX: &str = "check.";

/// Named data field of an MRZ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    DocType,
    DocNumber,
    BirthDate,
    IssueCountry,
    Nationality,
    Sex,
    ExpireDate,
    SubType,
    Name,
    OptNumber,
    ExtraNumber,
}

impl FieldName {
    pub const ALL: [FieldName; 11] = [
        FieldName::DocType,
        FieldName::DocNumber,
        FieldName::BirthDate,
        FieldName::IssueCountry,
        FieldName::Nationality,
        FieldName::Sex,
        FieldName::ExpireDate,
        FieldName::SubType,
        FieldName::Name,
        FieldName::OptNumber,
        FieldName::ExtraNumber,
    ];

    /// Name used in templates and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::DocType => "docType",
            FieldName::DocNumber => "docNumber",
            FieldName::BirthDate => "birthDate",
            FieldName::IssueCountry => "issueCountry",
            FieldName::Nationality => "nationality",
            FieldName::Sex => "sex",
            FieldName::ExpireDate => "expireDate",
            FieldName::SubType => "subType",
            FieldName::Name => "name",
            FieldName::OptNumber => "optNumber",
            FieldName::ExtraNumber => "extraNumber",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = MrzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| MrzError::UnknownField {
                name: s.to_string(),
            })
    }
}

/// Named check digit of an MRZ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckField {
    DocNumber,
    OptNumber,
    BirthDate,
    ExpireDate,
    ExtraNumber,
    /// Composite digit in ICAO 2-line order.
    Overall2,
    /// Composite digit in ICAO 3-line order.
    Overall3,
}

impl CheckField {
    pub const ALL: [CheckField; 7] = [
        CheckField::DocNumber,
        CheckField::OptNumber,
        CheckField::BirthDate,
        CheckField::ExpireDate,
        CheckField::ExtraNumber,
        CheckField::Overall2,
        CheckField::Overall3,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckField::DocNumber => "docNumber",
            CheckField::OptNumber => "optNumber",
            CheckField::BirthDate => "birthDate",
            CheckField::ExpireDate => "expireDate",
            CheckField::ExtraNumber => "extraNumber",
            CheckField::Overall2 => "overall2",
            CheckField::Overall3 => "overall3",
        }
    }

    /// The data field this digit protects, if it is a per-field digit.
    pub fn field(&self) -> Option<FieldName> {
        match self {
            CheckField::DocNumber => Some(FieldName::DocNumber),
            CheckField::OptNumber => Some(FieldName::OptNumber),
            CheckField::BirthDate => Some(FieldName::BirthDate),
            CheckField::ExpireDate => Some(FieldName::ExpireDate),
            CheckField::ExtraNumber => Some(FieldName::ExtraNumber),
            CheckField::Overall2 | CheckField::Overall3 => None,
        }
    }
}

impl fmt::Display for CheckField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckField {
    type Err = MrzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CheckField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| MrzError::UnknownCheckField {
                name: s.to_string(),
            })
    }
}

/// A template placeholder: either a data field or a nested check digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Field(FieldName),
    Check(CheckField),
}

impl FromStr for Placeholder {
    type Err = MrzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        match name.strip_prefix(CHECK_PREFIX) {
            Some(check) => check.parse().map(Placeholder::Check),
            None => name.parse().map(Placeholder::Field),
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placeholder::Field(field) => write!(f, "{field}"),
            Placeholder::Check(check) => write!(f, "{CHECK_PREFIX}{check}"),
        }
    }
}

/// Check digits computed for one record.
///
/// Values are chars rather than numbers because a document type may force
/// a literal filler in place of a computed digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckDigits {
    pub doc_number: char,
    pub opt_number: char,
    pub birth_date: char,
    pub expire_date: char,
    pub extra_number: char,
    pub overall2: char,
    pub overall3: char,
}

impl Default for CheckDigits {
    fn default() -> Self {
        Self {
            doc_number: '0',
            opt_number: '0',
            birth_date: '0',
            expire_date: '0',
            extra_number: '0',
            overall2: '0',
            overall3: '0',
        }
    }
}

impl CheckDigits {
    pub fn get(&self, field: CheckField) -> char {
        match field {
            CheckField::DocNumber => self.doc_number,
            CheckField::OptNumber => self.opt_number,
            CheckField::BirthDate => self.birth_date,
            CheckField::ExpireDate => self.expire_date,
            CheckField::ExtraNumber => self.extra_number,
            CheckField::Overall2 => self.overall2,
            CheckField::Overall3 => self.overall3,
        }
    }

    pub fn set(&mut self, field: CheckField, value: char) {
        let slot = match field {
            CheckField::DocNumber => &mut self.doc_number,
            CheckField::OptNumber => &mut self.opt_number,
            CheckField::BirthDate => &mut self.birth_date,
            CheckField::ExpireDate => &mut self.expire_date,
            CheckField::ExtraNumber => &mut self.extra_number,
            CheckField::Overall2 => &mut self.overall2,
            CheckField::Overall3 => &mut self.overall3,
        };
        *slot = value;
    }
}

/// Normalized, padded field values plus their check digits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedFieldSet {
    pub doc_type: String,
    pub doc_number: String,
    pub birth_date: String,
    pub issue_country: String,
    pub nationality: String,
    pub sex: String,
    pub expire_date: String,
    pub sub_type: String,
    pub name: String,
    pub opt_number: String,
    pub extra_number: String,
    pub check: CheckDigits,
}

impl EncodedFieldSet {
    pub fn field(&self, name: FieldName) -> &str {
        match name {
            FieldName::DocType => &self.doc_type,
            FieldName::DocNumber => &self.doc_number,
            FieldName::BirthDate => &self.birth_date,
            FieldName::IssueCountry => &self.issue_country,
            FieldName::Nationality => &self.nationality,
            FieldName::Sex => &self.sex,
            FieldName::ExpireDate => &self.expire_date,
            FieldName::SubType => &self.sub_type,
            FieldName::Name => &self.name,
            FieldName::OptNumber => &self.opt_number,
            FieldName::ExtraNumber => &self.extra_number,
        }
    }

    /// Field value followed by its check digit, the unit composite digits
    /// are computed over.
    pub fn with_check(&self, field: CheckField) -> String {
        let mut out = field
            .field()
            .map(|name| self.field(name).to_string())
            .unwrap_or_default();
        out.push(self.check.get(field));
        out
    }
}
