//! # HTTP API
//!
//! JSON endpoints under `/api`, one nested router per collection:
//!
//! | Route                           | Handler                       |
//! |---------------------------------|-------------------------------|
//! | `POST /products`                | [`products::create`]          |
//! | `GET /products`                 | [`products::list`]            |
//! | `GET /products/:id`             | [`products::get`]             |
//! | `PATCH /products/:id`           | [`products::update`]          |
//! | `PATCH /products/:id/soldout`   | [`products::mark_sold_out`]   |
//! | `DELETE /products/:id`          | [`products::delete`]          |
//! | `POST /messages`                | [`messages::create`]          |
//! | `GET /messages`                 | [`messages::list`]            |
//! | `GET /messages/:id`             | [`messages::get`]             |
//! | `PATCH /messages/:id`           | [`messages::update`]          |
//! | `PATCH /messages/:id/read`      | [`messages::mark_read`]       |
//! | `PATCH /messages/:id/replied`   | [`messages::mark_replied`]    |
//! | `DELETE /messages/:id`          | [`messages::delete`]          |
//!
//! Handlers validate the body, call the collection client and translate failures through
//! [`ApiError`]. Transition routes take no body.

pub mod error;
pub mod messages;
pub mod products;

pub use error::ApiError;

use crate::clients::{MessageClient, ProductClient};
use crate::lifecycle::StorefrontSystem;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, patch};
use axum::{Json, Router};
use serde_json::{json, Value};

pub const BANNER: &str = "Storefront Admin Backend API";

/// Shared handler state: one client per collection.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductClient,
    pub messages: MessageClient,
}

impl AppState {
    pub fn new(system: &StorefrontSystem) -> Self {
        Self {
            products: system.product_client.clone(),
            messages: system.message_client.clone(),
        }
    }
}

pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    let api = Router::new()
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/:id",
            get(products::get)
                .patch(products::update)
                .delete(products::delete),
        )
        .route("/products/:id/soldout", patch(products::mark_sold_out))
        .route("/messages", get(messages::list).post(messages::create))
        .route(
            "/messages/:id",
            get(messages::get)
                .patch(messages::update)
                .delete(messages::delete),
        )
        .route("/messages/:id/read", patch(messages::mark_read))
        .route("/messages/:id/replied", patch(messages::mark_replied));

    Router::new()
        .route("/", get(|| async { BANNER }))
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

fn deleted(kind: &str) -> Json<Value> {
    Json(json!({ "message": format!("{kind} deleted") }))
}
