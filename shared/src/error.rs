use thiserror::Error;
use serde::{Deserialize, Serialize};

#[derive(Debug, Error, Serialize, Deserialize)]
pub enum SharedError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Required field missing: {0}")]
    MissingField(String),
}

impl From<validator::ValidationErrors> for SharedError {
    fn from(err: validator::ValidationErrors) -> Self {
        SharedError::Validation(err.to_string())
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        SharedError::Conversion(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;
