use crate::client::ResourceClient;
use crate::entity::ResourceEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::snapshot::SnapshotFile;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that owns one collection of records.
///
/// # Architecture Note
/// This struct is the "server" half of the store. It owns the records and the receiver
/// end of the channel, and processes requests *sequentially* in [`ResourceActor::run`].
/// No `Mutex` guards the records: exclusive ownership inside one task is the guard.
///
/// # Implementation Details
///
/// - `store` maps ids to records, `order` remembers insertion order for `List`.
/// - `next_id` is a sequence counter converted into `T::Id`; it only grows.
/// - With a [`SnapshotFile`] attached, every successful mutation is written to disk
///   before the caller is answered. If the write fails the mutation is rolled back and
///   the caller gets [`StoreError::Persistence`].
///
/// ```rust
/// # use resource_actor::{ResourceActor, ResourceEntity};
/// # use serde::{Deserialize, Serialize};
/// # #[derive(Clone, Debug, Serialize, Deserialize)] struct Note { id: u32, text: String }
/// # #[derive(Debug, thiserror::Error)] #[error("never")] struct NoteError;
/// # impl ResourceEntity for Note {
/// #     const KIND: &'static str = "Note";
/// #     type Id = u32; type Create = String; type Update = String; type Transition = ();
/// #     type Error = NoteError;
/// #     fn id(&self) -> &u32 { &self.id }
/// #     fn from_create_params(id: u32, text: String) -> Result<Self, NoteError> { Ok(Self { id, text }) }
/// #     fn on_update(&mut self, text: String) -> Result<(), NoteError> { self.text = text; Ok(()) }
/// #     fn apply_transition(&mut self, _: ()) -> Result<(), NoteError> { Ok(()) }
/// # }
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run());
///
///     let note = client.create("hello".to_string()).await.unwrap();
///     assert_eq!(client.list().await.unwrap().len(), 1);
///     client.delete(note.id).await.unwrap();
/// }
/// ```
pub struct ResourceActor<T: ResourceEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    next_id: u32,
    snapshot: Option<SnapshotFile>,
}

impl<T: ResourceEntity> ResourceActor<T> {
    /// Creates an in-memory actor and its client.
    ///
    /// `buffer_size` is the channel capacity; when full, client calls wait for room.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
            snapshot: None,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Creates an actor backed by a snapshot file, loading any records already on disk.
    pub fn with_snapshot(
        buffer_size: usize,
        snapshot: SnapshotFile,
    ) -> Result<(Self, ResourceClient<T>), StoreError> {
        let (mut actor, client) = Self::new(buffer_size);
        if let Some(saved) = snapshot.load::<T>()? {
            for record in saved.records {
                let id = record.id().clone();
                if actor.store.contains_key(&id) {
                    return Err(StoreError::Persistence(format!(
                        "{}: duplicate record id {id}",
                        snapshot.path().display()
                    )));
                }
                actor.order.push(id.clone());
                actor.store.insert(id, record);
            }
            actor.next_id = saved.next_id.max(1);
        }
        info!(
            entity_type = T::KIND,
            path = %snapshot.path().display(),
            size = actor.store.len(),
            "Snapshot loaded"
        );
        actor.snapshot = Some(snapshot);
        Ok((actor, client))
    }

    /// Runs the request loop until every client has been dropped.
    pub async fn run(mut self) {
        let entity_type = T::KIND;
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params).await;
                    match &result {
                        Ok(item) => {
                            info!(entity_type, id = %item.id(), size = self.store.len(), "Created")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.list()));
                }
                StoreRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.mutate(&id, |item| item.on_update(update)).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Transition {
                    id,
                    transition,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?transition, "Transition");
                    let result = self
                        .mutate(&id, |item| item.apply_transition(transition))
                        .await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Transition ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Transition failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id).await;
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.store.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(&mut self, params: T::Create) -> Result<T, StoreError> {
        let previous_next_id = self.next_id;
        // A counter restored from an older snapshot may trail ids that are already stored.
        let mut seq = self.next_id;
        while self.store.contains_key(&T::Id::from(seq)) {
            seq += 1;
        }
        let id = T::Id::from(seq);
        let item = T::from_create_params(id.clone(), params)
            .map_err(|e| StoreError::EntityError(Box::new(e)))?;

        self.next_id = seq + 1;
        self.store.insert(id.clone(), item.clone());
        self.order.push(id.clone());

        if let Err(e) = self.persist().await {
            self.store.remove(&id);
            self.order.pop();
            self.next_id = previous_next_id;
            return Err(e);
        }
        Ok(item)
    }

    fn list(&self) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|id| self.store.get(id))
            .cloned()
            .collect()
    }

    /// Applies `change` to one record, restoring the previous state if the change or the
    /// snapshot write fails.
    async fn mutate<F>(&mut self, id: &T::Id, change: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut T) -> Result<(), T::Error>,
    {
        let item = self
            .store
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let previous = item.clone();

        if let Err(e) = change(item) {
            *item = previous;
            return Err(StoreError::EntityError(Box::new(e)));
        }
        let updated = item.clone();

        if let Err(e) = self.persist().await {
            self.store.insert(id.clone(), previous);
            return Err(e);
        }
        Ok(updated)
    }

    async fn delete(&mut self, id: &T::Id) -> Result<(), StoreError> {
        let item = self
            .store
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let position = self.order.iter().position(|k| k == id);
        if let Some(pos) = position {
            self.order.remove(pos);
        }

        if let Err(e) = self.persist().await {
            self.store.insert(id.clone(), item);
            if let Some(pos) = position {
                self.order.insert(pos, id.clone());
            }
            return Err(e);
        }
        Ok(())
    }

    async fn persist(&self) -> Result<(), StoreError> {
        let Some(snapshot) = &self.snapshot else {
            return Ok(());
        };
        let records: Vec<&T> = self
            .order
            .iter()
            .filter_map(|id| self.store.get(id))
            .collect();
        snapshot.save(self.next_id, &records).await
    }
}
