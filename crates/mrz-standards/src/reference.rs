#![deny(unsafe_code)]

use std::path::{Path, PathBuf};

use tracing::debug;

use mrz_model::ReferenceData;

use crate::error::{Result, StandardsError};

/// Environment variable naming a reference data file that replaces the
/// bundled one.
pub const REFERENCE_DATA_ENV_VAR: &str = "MRZ_REFERENCE_DATA";

const BUNDLED_REFERENCE_DATA: &str = include_str!("../data/reference.json");
const BUNDLED_LABEL: &str = "<bundled reference.json>";

pub fn default_reference_path() -> Option<PathBuf> {
    std::env::var_os(REFERENCE_DATA_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Countries, US states and visa classes shipped with the crate.
pub fn bundled_reference_data() -> Result<ReferenceData> {
    serde_json::from_str(BUNDLED_REFERENCE_DATA)
        .map_err(|source| StandardsError::json(BUNDLED_LABEL, source))
}

pub fn load_reference_data(path: &Path) -> Result<ReferenceData> {
    let contents = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    let data: ReferenceData =
        serde_json::from_str(&contents).map_err(|e| StandardsError::json(path, e))?;
    debug!(
        path = %path.display(),
        countries = data.countries.len(),
        states = data.states.len(),
        visa_classes = data.visa_classes.len(),
        "loaded reference data"
    );
    Ok(data)
}

/// Load from `path`, else from `MRZ_REFERENCE_DATA`, else the bundled file.
pub fn resolve_reference_data(path: Option<&Path>) -> Result<ReferenceData> {
    match path.map(Path::to_path_buf).or_else(default_reference_path) {
        Some(path) => load_reference_data(&path),
        None => bundled_reference_data(),
    }
}
