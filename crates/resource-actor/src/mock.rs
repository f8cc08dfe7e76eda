//! # Mock Store
//!
//! Helpers for testing code that sits *in front of* a store (domain clients, request
//! handlers) without running a [`ResourceActor`](crate::ResourceActor).
//!
//! [`create_mock_client`] returns a real [`ResourceClient`] whose requests land on a
//! receiver owned by the test. The `expect_*` helpers pop the next request, assert its
//! kind, and hand back the payload plus the responder so the test decides the answer:
//!
//! ```rust,ignore
//! let (client, mut receiver) = create_mock_client::<Product>(10);
//! let task = tokio::spawn(async move { ProductClient::new(client).mark_sold_out(id).await });
//!
//! let (id, transition, responder) = expect_transition(&mut receiver).await.unwrap();
//! responder.send(Ok(sold_out_product)).unwrap();
//! ```
//!
//! Each helper returns `None` when the next request is of a different kind (or the
//! channel closed), which lets a test assert "this call never reached the store".

use crate::{ResourceClient, ResourceEntity, StoreError, StoreRequest};
use tokio::sync::{mpsc, oneshot};

/// Responder half handed back to the test.
pub type Responder<R> = oneshot::Sender<Result<R, StoreError>>;

/// Creates a client and the receiver its requests arrive on.
pub fn create_mock_client<T: ResourceEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next request must be a Create.
pub async fn expect_create<T: ResourceEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Create, Responder<T>)> {
    match receiver.recv().await {
        Some(StoreRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next request must be a List.
pub async fn expect_list<T: ResourceEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<Responder<Vec<T>>> {
    match receiver.recv().await {
        Some(StoreRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Next request must be a Get.
pub async fn expect_get<T: ResourceEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next request must be an Update.
pub async fn expect_update<T: ResourceEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, T::Update, Responder<T>)> {
    match receiver.recv().await {
        Some(StoreRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Next request must be a Transition.
pub async fn expect_transition<T: ResourceEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, T::Transition, Responder<T>)> {
    match receiver.recv().await {
        Some(StoreRequest::Transition {
            id,
            transition,
            respond_to,
        }) => Some((id, transition, respond_to)),
        _ => None,
    }
}

/// Next request must be a Delete.
pub async fn expect_delete<T: ResourceEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, Responder<()>)> {
    match receiver.recv().await {
        Some(StoreRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
