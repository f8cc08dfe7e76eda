//! # Resource Actor
//!
//! A small repository engine built on the **Actor Model**: each collection of records is
//! owned by one [`ResourceActor`] running in its own Tokio task, and callers reach it
//! through a cloneable [`ResourceClient`].
//!
//! ## Operations
//!
//! Every collection supports the same lifecycle, expressed as [`StoreRequest`] variants:
//!
//! | Operation    | Payload                         | Answer            |
//! |--------------|---------------------------------|-------------------|
//! | `create`     | [`ResourceEntity::Create`]      | stored record     |
//! | `list`       | none                            | records, in insertion order |
//! | `get`        | id                              | `Option<record>`  |
//! | `update`     | id + [`ResourceEntity::Update`] | updated record    |
//! | `transition` | id + [`ResourceEntity::Transition`] | updated record |
//! | `delete`     | id                              | `()`              |
//!
//! Identifiers are assigned by the actor from a monotonically increasing sequence, so
//! they stay unique for the life of the collection.
//!
//! ## Concurrency Model
//!
//! - One task per collection, requests handled one at a time (no locks).
//! - A read-modify-write request (update, transition) runs entirely inside the actor.
//! - Collections run in parallel and never share state.
//!
//! ## Durability
//!
//! By default records live in memory. [`ResourceActor::with_snapshot`] attaches a
//! [`SnapshotFile`](snapshot::SnapshotFile); the collection is then loaded at start and
//! rewritten after each mutation. See the [`snapshot`] module.
//!
//! ## Testing
//!
//! The [`mock`] module hands out a client wired to a test-owned receiver, for testing
//! domain clients without spawning an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod snapshot;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ResourceService;
pub use entity::ResourceEntity;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
pub use snapshot::SnapshotFile;
