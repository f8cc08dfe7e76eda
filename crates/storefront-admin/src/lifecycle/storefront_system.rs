use crate::clients::{MessageClient, ProductClient};
use crate::config::{AppConfig, MESSAGES_FILE, PRODUCTS_FILE};
use crate::model::{Message, Product};
use crate::{message_actor, product_actor};
use resource_actor::{ResourceActor, SnapshotFile, StoreError};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("could not prepare data directory {path}: {source}")]
    DataDir {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("actor task failed: {0}")]
    TaskFailed(String),
}

/// Runtime owner of the Product and Message actors.
///
/// # Example
///
/// ```ignore
/// let system = StorefrontSystem::new(32);
///
/// let product = system.product_client.create_product(draft).await?;
/// let inbox = system.message_client.list().await?;
///
/// system.shutdown().await?;
/// ```
pub struct StorefrontSystem {
    pub product_client: ProductClient,
    pub message_client: MessageClient,

    /// Task handles for the running actors, joined on shutdown.
    handles: Vec<JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Starts both actors with in-memory storage.
    pub fn new(channel_capacity: usize) -> Self {
        let (product_actor, product_client) = product_actor::new(channel_capacity);
        let (message_actor, message_client) = message_actor::new(channel_capacity);
        Self::spawn(product_actor, product_client, message_actor, message_client)
    }

    /// Starts both actors as described by `config`.
    ///
    /// With a data directory, each collection is loaded from its snapshot file (creating the
    /// directory if needed) and written back after every change.
    pub fn start(config: &AppConfig) -> Result<Self, LifecycleError> {
        let Some(dir) = &config.data_dir else {
            info!("No data directory configured, records are kept in memory");
            return Ok(Self::new(config.channel_capacity));
        };

        std::fs::create_dir_all(dir).map_err(|source| LifecycleError::DataDir {
            path: dir.display().to_string(),
            source,
        })?;
        info!(data_dir = %dir.display(), "Loading snapshots");

        let (product_actor, product_client) = product_actor::open(
            config.channel_capacity,
            SnapshotFile::new(dir.join(PRODUCTS_FILE)),
        )?;
        let (message_actor, message_client) = message_actor::open(
            config.channel_capacity,
            SnapshotFile::new(dir.join(MESSAGES_FILE)),
        )?;
        Ok(Self::spawn(
            product_actor,
            product_client,
            message_actor,
            message_client,
        ))
    }

    fn spawn(
        product_actor: ResourceActor<Product>,
        product_client: ProductClient,
        message_actor: ResourceActor<Message>,
        message_client: MessageClient,
    ) -> Self {
        let product_handle = tokio::spawn(product_actor.run());
        let message_handle = tokio::spawn(message_actor.run());
        Self {
            product_client,
            message_client,
            handles: vec![product_handle, message_handle],
        }
    }

    /// Drops this system's clients and waits for both actors to stop.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down system...");

        // Actors exit once the last sender for their channel is gone.
        drop(self.product_client);
        drop(self.message_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(LifecycleError::TaskFailed(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
