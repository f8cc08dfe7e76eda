use crate::{ResourceClient, ResourceEntity, StoreError};
use async_trait::async_trait;

/// Trait for collection-specific clients to inherit the read and delete operations.
///
/// A domain client wraps a [`ResourceClient`] and picks its own error type. Implementing
/// `inner` and `map_error` is enough to get `list`, `get` and `delete` for free; the
/// domain client then adds its own create, update and transition methods.
#[async_trait]
pub trait ResourceService<T: ResourceEntity>: Send + Sync {
    /// The collection-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map store errors to the collection error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch every record in insertion order.
    #[tracing::instrument(skip(self), fields(kind = T::KIND))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Fetch a record by id; `None` if absent.
    #[tracing::instrument(skip(self), fields(kind = T::KIND))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete a record by id.
    #[tracing::instrument(skip(self), fields(kind = T::KIND))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
