//! # Storefront Admin
//!
//! Back office for a small storefront: a product catalog and a contact-message inbox,
//! served as a JSON API under `/api`.
//!
//! - **[model]**: [`Product`](model::Product) and [`Message`](model::Message) records with
//!   their drafts and patches.
//! - **[validation]**: one validator per collection, turning request bodies into drafts.
//! - **[product_actor]** / **[message_actor]**: the store actors, built on `resource_actor`.
//! - **[clients]**: typed handles to those actors.
//! - **[lifecycle]**: starts and stops the actors, sets up tracing.
//! - **[http]**: the axum router.
//! - **[config]**: environment-driven settings.

pub mod clients;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod message_actor;
pub mod model;
pub mod product_actor;
pub mod validation;
