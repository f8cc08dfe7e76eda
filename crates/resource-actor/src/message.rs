//! Request envelope exchanged between [`ResourceClient`](crate::ResourceClient) and
//! [`ResourceActor`](crate::ResourceActor).

use crate::entity::ResourceEntity;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to the actor.
///
/// The variants are the repository operations every collection supports:
///
/// - **Create**: insert a validated draft; answers with the stored record.
/// - **List**: every record in insertion order.
/// - **Get**: one record by id, `None` if absent.
/// - **Update**: merge a partial patch; answers with the updated record.
/// - **Transition**: apply a fixed state change; answers with the updated record.
/// - **Delete**: remove permanently.
///
/// Read-modify-write operations run inside the actor, so one request never interleaves
/// with another on the same collection.
#[derive(Debug)]
pub enum StoreRequest<T: ResourceEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Transition {
        id: T::Id,
        transition: T::Transition,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
