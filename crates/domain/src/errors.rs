use thiserror::Error;

/// A single validation failure: which field was wrong, and why.
///
/// `field` is machine-readable (it matches the public request field
/// spelling); `reason` is for humans. Schema-shape failures that cannot be
/// pinned to one field carry an empty `field`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("error in field \"{field}\": {reason}")]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error(transparent)]
    InvalidField(#[from] FieldError),

    #[error("not supported: {0}")]
    NotSupported(String),

    #[error("failed with status: {0}")]
    BadStatus(String),

    #[error("Content-Type header missing from response")]
    MissingContentType,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid resolver response: {0}")]
    InvalidResponse(String),

    #[error("Failed to encode query parameters: {0}")]
    EncodeError(String),
}
