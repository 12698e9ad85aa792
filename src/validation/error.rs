//! Validation error types

use crate::state::ErrorMap;
use thiserror::Error;

/// One rule violation at one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    pub path: String,
    pub message: String,
}

/// Errors raised while building a schema
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Outcome of a failed [`Schema::validate`](super::Schema::validate)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more fields violated their rules
    #[error("{} field(s) failed validation", .0.len())]
    Failed(Vec<FieldFailure>),
    /// The value handed to the validator is not an object
    #[error("form data must be an object")]
    RootNotObject,
}

impl ValidationError {
    /// Map failures to their paths, later failures at a path win
    pub fn into_error_map(self) -> Option<ErrorMap> {
        match self {
            ValidationError::Failed(failures) => Some(
                failures
                    .into_iter()
                    .map(|f| (f.path, f.message))
                    .collect(),
            ),
            ValidationError::RootNotObject => None,
        }
    }
}
