//! Fixed MRZ layouts and their templates.
//!
//! Templates are markup: `{{name}}` and `{{check.name}}` placeholders,
//! `<br>` between lines, and `&lt;` for literal filler characters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MrzError;

/// Line separator used in templates and markup output.
pub const LINE_BREAK: &str = "<br>";

/// ICAO 9303 TD3: two lines of 44 characters (passports).
pub const TEMPLATE_TD3: &str = "{{docType}}{{issueCountry}}{{name}}<br>\
{{docNumber}}{{check.docNumber}}{{nationality}}{{birthDate}}{{check.birthDate}}\
{{sex}}{{expireDate}}{{check.expireDate}}{{optNumber}}{{check.optNumber}}{{check.overall2}}";

/// Machine-readable visa: two lines of 44 characters.
pub const TEMPLATE_VISA: &str = "{{docType}}{{issueCountry}}{{name}}<br>\
{{docNumber}}{{check.docNumber}}{{nationality}}{{birthDate}}{{check.birthDate}}\
{{sex}}{{expireDate}}{{check.expireDate}}{{subType}}{{optNumber}}";

/// Laser visa / border crossing card: three lines of 30 characters.
pub const TEMPLATE_BORDER_CROSSING: &str = "{{docType}}{{issueCountry}}{{optNumber}}&lt;{{docNumber}}<br>\
{{birthDate}}{{check.birthDate}}{{sex}}{{expireDate}}{{check.expireDate}}\
{{nationality}}{{extraNumber}}{{check.overall3}}<br>\
{{name}}";

/// ICAO 9303 TD1: three lines of 30 characters (cards).
pub const TEMPLATE_TD1: &str = "{{docType}}{{issueCountry}}{{docNumber}}{{check.docNumber}}{{optNumber}}<br>\
{{birthDate}}{{check.birthDate}}{{sex}}{{expireDate}}{{check.expireDate}}\
{{nationality}}{{extraNumber}}{{check.overall3}}<br>\
{{name}}";

/// Enhanced driver license: TD1 with the issuing state on line two.
pub const TEMPLATE_ID_CARD: &str = "{{docType}}{{issueCountry}}{{docNumber}}{{check.docNumber}}{{optNumber}}<br>\
{{birthDate}}{{check.birthDate}}{{sex}}{{expireDate}}{{check.expireDate}}\
{{nationality}}{{extraNumber}}{{subType}}&lt;{{check.overall3}}<br>\
{{name}}";

/// Alien registration card: TD1 without nationality, extra number checked.
pub const TEMPLATE_ALIEN_REGISTRATION: &str = "{{docType}}{{issueCountry}}{{docNumber}}{{check.docNumber}}{{optNumber}}<br>\
{{birthDate}}{{check.birthDate}}{{sex}}{{expireDate}}{{check.expireDate}}\
{{extraNumber}}{{check.extraNumber}}{{check.overall3}}<br>\
{{name}}";

/// Named fixed layout referenced by a document-type descriptor.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    #[default]
    Td3,
    Visa,
    BorderCrossing,
    Td1,
    IdCard,
    AlienRegistration,
}

impl Layout {
    pub const ALL: [Layout; 6] = [
        Layout::Td3,
        Layout::Visa,
        Layout::BorderCrossing,
        Layout::Td1,
        Layout::IdCard,
        Layout::AlienRegistration,
    ];

    pub fn template(&self) -> &'static str {
        match self {
            Layout::Td3 => TEMPLATE_TD3,
            Layout::Visa => TEMPLATE_VISA,
            Layout::BorderCrossing => TEMPLATE_BORDER_CROSSING,
            Layout::Td1 => TEMPLATE_TD1,
            Layout::IdCard => TEMPLATE_ID_CARD,
            Layout::AlienRegistration => TEMPLATE_ALIEN_REGISTRATION,
        }
    }

    pub fn line_count(&self) -> usize {
        match self {
            Layout::Td3 | Layout::Visa => 2,
            _ => 3,
        }
    }

    /// Characters per line in text form.
    pub fn line_width(&self) -> usize {
        match self {
            Layout::Td3 | Layout::Visa => 44,
            _ => 30,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Td3 => "td3",
            Layout::Visa => "visa",
            Layout::BorderCrossing => "border-crossing",
            Layout::Td1 => "td1",
            Layout::IdCard => "id-card",
            Layout::AlienRegistration => "alien-registration",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = MrzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Layout::ALL
            .into_iter()
            .find(|layout| layout.as_str() == normalized)
            .ok_or_else(|| MrzError::UnknownLayout {
                value: s.to_string(),
            })
    }
}
