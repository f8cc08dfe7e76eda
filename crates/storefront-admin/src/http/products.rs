//! `/api/products` handlers.

use super::{deleted, ApiError, AppState};
use crate::model::{Product, ProductId};
use crate::product_actor::ProductError;
use crate::validation;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use resource_actor::ResourceService;
use serde_json::Value;
use tracing::info;

fn parse_id(raw: &str) -> Result<ProductId, ApiError> {
    raw.parse::<ProductId>()
        .map_err(|e| ProductError::from(e).into())
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let Json(body) = body?;
    let draft = validation::product::create(&body)?;
    let product = state.products.create_product(draft).await?;
    info!(id = %product.id, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.products.list().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.products.find_product(id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id(&id)?;
    let Json(body) = body?;
    let patch = validation::product::patch(&body)?;
    let product = state.products.update_product(id, patch).await?;
    info!(%id, "Product updated");
    Ok(Json(product))
}

pub async fn mark_sold_out(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id(&id)?;
    let product = state.products.mark_sold_out(id).await?;
    info!(%id, "Product marked sold out");
    Ok(Json(product))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    state.products.delete(id).await?;
    info!(%id, "Product deleted");
    Ok(deleted("Product"))
}
