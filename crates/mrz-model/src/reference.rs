use serde::{Deserialize, Serialize};

/// A coded reference entry (country, state, visa class).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefEntry {
    pub code: String,
    pub name: String,
}

impl RefEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Reference lists consumed when building the document-type catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferenceData {
    pub countries: Vec<RefEntry>,
    pub states: Vec<RefEntry>,
    pub visa_classes: Vec<RefEntry>,
}

impl ReferenceData {
    pub fn country(&self, code: &str) -> Option<&RefEntry> {
        find_code(&self.countries, code)
    }

    pub fn state(&self, code: &str) -> Option<&RefEntry> {
        find_code(&self.states, code)
    }

    pub fn visa_class(&self, code: &str) -> Option<&RefEntry> {
        find_code(&self.visa_classes, code)
    }
}

fn find_code<'a>(entries: &'a [RefEntry], code: &str) -> Option<&'a RefEntry> {
    let code = code.trim();
    entries
        .iter()
        .find(|entry| entry.code.eq_ignore_ascii_case(code))
}
