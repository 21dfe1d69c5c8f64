#![deny(unsafe_code)]

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod reference;

pub use crate::builtin::builtin_descriptors;
pub use crate::catalog::Catalog;
pub use crate::error::StandardsError;
pub use crate::reference::{
    REFERENCE_DATA_ENV_VAR, bundled_reference_data, default_reference_path, load_reference_data,
    resolve_reference_data,
};
