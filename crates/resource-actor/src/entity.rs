//! The [`ResourceEntity`] trait: the contract a record type signs to be owned by a
//! [`ResourceActor`](crate::ResourceActor).

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored record must implement to be managed by a `ResourceActor`.
///
/// # Architecture Note
/// Every collection in the system (products, messages) satisfies the same contract,
/// so the request loop in [`ResourceActor`](crate::ResourceActor) is written once.
/// Associated types keep each collection's payloads apart: a `ProductDraft` can never
/// reach the message actor.
///
/// # Payloads
/// - [`ResourceEntity::Create`] is an already validated draft. Validation belongs to the
///   caller; by the time a draft reaches the actor it only needs an identifier.
/// - [`ResourceEntity::Update`] is a partial patch merged onto an existing record.
/// - [`ResourceEntity::Transition`] names a fixed state change (e.g. "mark read").
///
/// Records must be serializable so the actor can snapshot them to disk.
pub trait ResourceEntity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Human readable name of the collection, used in logs and error messages.
    const KIND: &'static str;

    /// The unique identifier. The actor hands out sequence numbers, so the id must be
    /// buildable from a `u32`.
    type Id: Eq
        + Hash
        + Clone
        + Send
        + Sync
        + Display
        + Debug
        + From<u32>
        + Serialize
        + DeserializeOwned
        + 'static;

    /// Validated payload for a new record.
    type Create: Send + Sync + Debug + 'static;

    /// Partial field set for the general update.
    type Update: Send + Sync + Debug + 'static;

    /// Dedicated state transitions.
    type Transition: Send + Sync + Debug + 'static;

    /// Error raised by the hooks below.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The record's identifier.
    fn id(&self) -> &Self::Id;

    /// Build the full record from a store-assigned id and a validated draft.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Merge a partial update onto the record.
    ///
    /// If this returns an error the actor restores the record to its previous state.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Apply a dedicated transition.
    fn apply_transition(&mut self, transition: Self::Transition) -> Result<(), Self::Error>;
}
