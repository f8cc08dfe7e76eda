//! `/api/messages` handlers.

use super::{deleted, ApiError, AppState};
use crate::message_actor::MessageError;
use crate::model::{Message, MessageId};
use crate::validation;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use resource_actor::ResourceService;
use serde_json::Value;
use tracing::info;

fn parse_id(raw: &str) -> Result<MessageId, ApiError> {
    raw.parse::<MessageId>()
        .map_err(|e| MessageError::from(e).into())
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let Json(body) = body?;
    let draft = validation::message::create(&body)?;
    let message = state.messages.create_message(draft).await?;
    info!(id = %message.id, "Message received");
    Ok((StatusCode::CREATED, Json(message)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Message>>, ApiError> {
    Ok(Json(state.messages.list().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.messages.find_message(id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Message>, ApiError> {
    let id = parse_id(&id)?;
    let Json(body) = body?;
    let patch = validation::message::patch(&body)?;
    let message = state.messages.update_message(id, patch).await?;
    info!(%id, "Message updated");
    Ok(Json(message))
}

pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    let id = parse_id(&id)?;
    let message = state.messages.mark_read(id).await?;
    info!(%id, "Message marked read");
    Ok(Json(message))
}

pub async fn mark_replied(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    let id = parse_id(&id)?;
    let message = state.messages.mark_replied(id).await?;
    info!(%id, "Message marked replied");
    Ok(Json(message))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    state.messages.delete(id).await?;
    info!(%id, "Message deleted");
    Ok(deleted("Message"))
}
