//! Error types for the Message resource.

use crate::model::IdParseError;
use crate::validation::ValidationErrors;
use thiserror::Error;

/// Errors that can occur during message operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MessageError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Message not found")]
    NotFound(String),

    #[error(transparent)]
    InvalidId(#[from] IdParseError),

    #[error("Message store error: {0}")]
    Store(String),
}
