#![deny(unsafe_code)]

use std::path::PathBuf;

use mrz_core::RenderError;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("document type {code}: template references unknown placeholder {{{{{placeholder}}}}}")]
    UnresolvedPlaceholder { code: String, placeholder: String },

    #[error("document type {code}: invalid template: {source}")]
    InvalidTemplate {
        code: String,
        #[source]
        source: RenderError,
    },

    #[error("document type code must not be empty")]
    EmptyCode,

    #[error("duplicate document type code: {code}")]
    DuplicateCode { code: String },

    #[error("unknown document type: {code}")]
    UnknownDocumentType { code: String },

    #[error("failed to render MRZ: {0}")]
    Render(#[from] RenderError),
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StandardsError>;
