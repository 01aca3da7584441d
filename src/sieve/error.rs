use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SieveError {
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("Unknown value '{value}' for attribute '{attribute}' (expected one of: {expected})")]
    UnknownValue {
        attribute: String,
        value: String,
        expected: String,
    },

    #[error("Cannot read catalog {}: {source}", path.display())]
    Catalog {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl SieveError {
    pub(crate) fn unknown_value(attribute: &str, value: &str, expected: &[&str]) -> Self {
        SieveError::UnknownValue {
            attribute: attribute.to_string(),
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}

pub type Result<T> = std::result::Result<T, SieveError>;
