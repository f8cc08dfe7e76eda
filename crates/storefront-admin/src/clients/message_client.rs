//! # Message Client
//!
//! High-level API for the Message actor, mirroring [`ProductClient`](super::ProductClient).

use crate::message_actor::{MessageError, MessageTransition};
use crate::model::{Message, MessageDraft, MessageId, MessagePatch};
use async_trait::async_trait;
use resource_actor::{ResourceClient, ResourceService, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the Message actor.
#[derive(Clone)]
pub struct MessageClient {
    inner: ResourceClient<Message>,
}

impl MessageClient {
    pub fn new(inner: ResourceClient<Message>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ResourceService<Message> for MessageClient {
    type Error = MessageError;

    fn inner(&self) -> &ResourceClient<Message> {
        &self.inner
    }

    fn map_error(e: StoreError) -> MessageError {
        match e {
            StoreError::NotFound(id) => MessageError::NotFound(id),
            StoreError::EntityError(source) => match source.downcast::<MessageError>() {
                Ok(domain) => *domain,
                Err(other) => MessageError::Store(other.to_string()),
            },
            other => MessageError::Store(other.to_string()),
        }
    }
}

impl MessageClient {
    #[instrument(skip(self, draft), fields(email = %draft.email))]
    pub async fn create_message(&self, draft: MessageDraft) -> Result<Message, MessageError> {
        debug!("Sending request");
        self.inner.create(draft).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn find_message(&self, id: MessageId) -> Result<Message, MessageError> {
        self.get(id)
            .await?
            .ok_or_else(|| MessageError::NotFound(id.to_string()))
    }

    #[instrument(skip(self, patch))]
    pub async fn update_message(
        &self,
        id: MessageId,
        patch: MessagePatch,
    ) -> Result<Message, MessageError> {
        debug!(?patch, "Sending request");
        self.inner.update(id, patch).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn mark_read(&self, id: MessageId) -> Result<Message, MessageError> {
        self.transition(id, MessageTransition::MarkRead).await
    }

    #[instrument(skip(self))]
    pub async fn mark_replied(&self, id: MessageId) -> Result<Message, MessageError> {
        self.transition(id, MessageTransition::MarkReplied).await
    }

    async fn transition(
        &self,
        id: MessageId,
        transition: MessageTransition,
    ) -> Result<Message, MessageError> {
        debug!(?transition, "Sending request");
        self.inner
            .transition(id, transition)
            .await
            .map_err(Self::map_error)
    }
}
