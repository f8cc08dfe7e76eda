//! Type-safe wrappers around [`ResourceClient`](resource_actor::ResourceClient), one per
//! collection. Each turns store failures into its collection's error type.

pub mod message_client;
pub mod product_client;

pub use message_client::*;
pub use product_client::*;
