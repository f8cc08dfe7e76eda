//! # Message Actor
//!
//! The contact inbox. Submissions arrive from the storefront's contact form and are
//! triaged by an admin with the `is_read` and `replied` flags.
//!
//! - [`entity`] - [`ResourceEntity`](resource_actor::ResourceEntity) implementation for [`Message`]
//! - [`error`] - [`MessageError`]
//! - [`transitions`] - [`MessageTransition`]: mark read, mark replied

pub mod entity;
pub mod error;
pub mod transitions;

pub use error::*;
pub use transitions::*;

use crate::clients::MessageClient;
use crate::model::Message;
use resource_actor::{ResourceActor, SnapshotFile, StoreError};

/// Creates an in-memory Message actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Message>, MessageClient) {
    let (actor, inner) = ResourceActor::new(buffer_size);
    (actor, MessageClient::new(inner))
}

/// Creates a Message actor backed by `snapshot`, loading previously saved messages.
pub fn open(
    buffer_size: usize,
    snapshot: SnapshotFile,
) -> Result<(ResourceActor<Message>, MessageClient), StoreError> {
    let (actor, inner) = ResourceActor::with_snapshot(buffer_size, snapshot)?;
    Ok((actor, MessageClient::new(inner)))
}
