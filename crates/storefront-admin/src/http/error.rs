//! Maps collection errors onto HTTP responses.
//!
//! Every failure leaves the API as `{"message": "..."}`: validation problems are 400,
//! unknown ids 404, and anything the store could not do (including ids in a foreign
//! format) 500.

use crate::message_actor::MessageError;
use crate::product_actor::ProductError;
use crate::validation::ValidationErrors;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// The body was not JSON at all.
    #[error("Invalid request body: {0}")]
    MalformedBody(String),
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    Message(#[from] MessageError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::Product(ProductError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::Message(MessageError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::Product(ProductError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Message(MessageError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Product(ProductError::InvalidId(_) | ProductError::Store(_))
            | Self::Message(MessageError::InvalidId(_) | MessageError::Store(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            error!(%status, error = %message, "Request failed");
        }
        (status, Json(json!({ "message": message }))).into_response()
    }
}
