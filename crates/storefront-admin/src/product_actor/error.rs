//! Error types for the Product resource.

use crate::model::IdParseError;
use crate::validation::ValidationErrors;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The request body failed schema validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// No product has the requested id.
    #[error("Product not found")]
    NotFound(String),

    /// The id is not in the store's id format.
    #[error(transparent)]
    InvalidId(#[from] IdParseError),

    /// The store could not be reached or failed to persist.
    #[error("Product store error: {0}")]
    Store(String),
}
