//! # Product Client
//!
//! High-level API for the Product actor. Wraps a `ResourceClient<Product>` and returns
//! [`ProductError`] everywhere, so request handlers never see a [`StoreError`].

use crate::model::{Product, ProductDraft, ProductId, ProductPatch};
use crate::product_actor::{ProductError, ProductTransition};
use async_trait::async_trait;
use resource_actor::{ResourceClient, ResourceService, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ResourceService<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: StoreError) -> ProductError {
        match e {
            StoreError::NotFound(id) => ProductError::NotFound(id),
            StoreError::EntityError(source) => match source.downcast::<ProductError>() {
                Ok(domain) => *domain,
                Err(other) => ProductError::Store(other.to_string()),
            },
            other => ProductError::Store(other.to_string()),
        }
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, draft: ProductDraft) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(draft).await.map_err(Self::map_error)
    }

    /// Like [`ResourceService::get`], but an absent product is an error.
    #[instrument(skip(self))]
    pub async fn find_product(&self, id: ProductId) -> Result<Product, ProductError> {
        self.get(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        patch: ProductPatch,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(Self::map_error)
    }

    /// Sets `is_sold_out`. There is no counterpart; see [`ProductTransition`].
    #[instrument(skip(self))]
    pub async fn mark_sold_out(&self, id: ProductId) -> Result<Product, ProductError> {
        debug!("Marking product sold out");
        self.inner
            .transition(id, ProductTransition::MarkSoldOut)
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrors;
    use resource_actor::mock::{
        create_mock_client, expect_get, expect_list, expect_transition, expect_update,
    };

    fn product(id: u32, is_sold_out: bool) -> Product {
        Product {
            id: ProductId(id),
            name: "Lamp".into(),
            price: 40.0,
            category: Some("Lighting".into()),
            is_sold_out,
        }
    }

    #[tokio::test]
    async fn test_mark_sold_out_sends_transition() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move { product_client.mark_sold_out(ProductId(4)).await });

        let (id, transition, responder) = expect_transition(&mut receiver)
            .await
            .expect("Expected Transition request");
        assert_eq!(id, ProductId(4));
        assert_eq!(transition, ProductTransition::MarkSoldOut);
        responder.send(Ok(product(4, true))).unwrap();

        let result = task.await.unwrap().unwrap();
        assert!(result.is_sold_out);
    }

    #[tokio::test]
    async fn test_find_product_maps_absent_to_not_found() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move { product_client.find_product(ProductId(9)).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, ProductId(9));
        responder.send(Ok(None)).unwrap();

        let err = task.await.unwrap().unwrap_err();
        assert_eq!(err, ProductError::NotFound("product_9".into()));
        assert_eq!(err.to_string(), "Product not found");
    }

    #[tokio::test]
    async fn test_entity_errors_keep_their_domain_type() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move {
            product_client
                .update_product(ProductId(1), ProductPatch::default())
                .await
        });

        let (_, _, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        let rejected = ProductError::from(ValidationErrors::single("Product", "price", "must not be negative"));
        responder
            .send(Err(StoreError::EntityError(Box::new(rejected.clone()))))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap_err(), rejected);
    }

    #[tokio::test]
    async fn test_list_returns_store_order_and_maps_failures() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let listing = product_client.clone();
        let task = tokio::spawn(async move { listing.list().await });
        let responder = expect_list(&mut receiver).await.expect("Expected List request");
        responder.send(Ok(vec![product(2, false), product(1, true)])).unwrap();
        let ids: Vec<_> = task.await.unwrap().unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, [ProductId(2), ProductId(1)]);

        let task = tokio::spawn(async move { product_client.list().await });
        let responder = expect_list(&mut receiver).await.expect("Expected List request");
        responder
            .send(Err(StoreError::Persistence("disk full".into())))
            .unwrap();
        assert!(matches!(
            task.await.unwrap(),
            Err(ProductError::Store(msg)) if msg.contains("disk full")
        ));
    }

    #[test]
    fn test_store_failures_become_store_errors() {
        assert_eq!(
            ProductClient::map_error(StoreError::NotFound("product_2".into())),
            ProductError::NotFound("product_2".into())
        );
        assert!(matches!(
            ProductClient::map_error(StoreError::ActorClosed),
            ProductError::Store(_)
        ));
        assert!(matches!(
            ProductClient::map_error(StoreError::EntityError(Box::new(std::io::Error::other("disk")))),
            ProductError::Store(msg) if msg == "disk"
        ));
    }
}
