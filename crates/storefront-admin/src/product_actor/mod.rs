//! # Product Actor
//!
//! The catalog collection: products with a name, a non-negative price, an optional
//! category and the `is_sold_out` lifecycle flag.
//!
//! ## Structure
//!
//! - [`entity`] - [`ResourceEntity`](resource_actor::ResourceEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`], the error every product operation returns
//! - [`transitions`] - [`ProductTransition`], the dedicated "mark sold out" change
//! - [`new()`] / [`open()`] - factories returning the actor and a [`ProductClient`]
//!
//! ## Usage
//!
//! ```rust
//! use storefront_admin::product_actor;
//! use storefront_admin::validation;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let draft = validation::product::create(&serde_json::json!({"name": "Mug", "price": 9.5}))?;
//!     let product = client.create_product(draft).await?;
//!     let sold_out = client.mark_sold_out(product.id).await?;
//!     assert!(sold_out.is_sold_out);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;
pub mod transitions;

pub use error::*;
pub use transitions::*;

use crate::clients::ProductClient;
use crate::model::Product;
use resource_actor::{ResourceActor, SnapshotFile, StoreError};

/// Creates an in-memory Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, inner) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(inner))
}

/// Creates a Product actor backed by `snapshot`, loading previously saved products.
pub fn open(
    buffer_size: usize,
    snapshot: SnapshotFile,
) -> Result<(ResourceActor<Product>, ProductClient), StoreError> {
    let (actor, inner) = ResourceActor::with_snapshot(buffer_size, snapshot)?;
    Ok((actor, ProductClient::new(inner)))
}
