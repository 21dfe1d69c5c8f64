use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MrzError {
    #[error("unknown field name: {name}")]
    UnknownField { name: String },
    #[error("unknown check digit name: {name}")]
    UnknownCheckField { name: String },
    #[error("unknown layout: {value}")]
    UnknownLayout { value: String },
    #[error("unknown special check: {value}")]
    UnknownSpecialCheck { value: String },
}

pub type Result<T> = std::result::Result<T, MrzError>;
