use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetError {
    #[error("a closed set expects non-empty member names, but you gave: {given}")]
    BadNames { given: String },
    #[error("`{name}` is not enum. Valid options are {options}.")]
    NotAMember { name: String, options: String },
    #[error("Cannot set '{key}' to non-enum value ({set})")]
    Rejected { key: String, set: String },
}

pub type Result<T> = std::result::Result<T, SetError>;
