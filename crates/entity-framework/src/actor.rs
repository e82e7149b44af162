//! # Record Actor
//!
//! This module defines the `RecordActor`, an in-memory record service that
//! drives the lifecycle transitions of a [`Std`](crate::Std)-based entity and
//! plays the persistence role around them: it stores records, enforces CAS on
//! write and performs soft deletes. It processes messages sequentially, so the
//! store needs no locking.

use crate::client::RecordClient;
use crate::entity::Entity;
use crate::envelope::BulkEntity;
use crate::error::{EntityError, FrameworkError};
use crate::message::RecordRequest;
use crate::relation::RelationCheck;
use crate::time::positive;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Channel capacity used by the domain factories.
pub const DEFAULT_BUFFER_SIZE: usize = 32;

/// Shared relation-consistency collaborator injected at `run` time.
pub type SharedRelationCheck = Arc<dyn RelationCheck + Send + Sync>;

/// The generic actor that manages the records of one entity type.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `RecordActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass the relation-consistency collaborator into `actor.run(relations)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// # Write Semantics
///
/// Every transition works on a copy of the stored record and only replaces
/// the stored value once the transition, validation and CAS check have all
/// succeeded. A failed request leaves the store as it was. Every successful
/// write bumps the CAS token; a new record starts at `1`.
///
/// * **Create**: pins `type` to the entity kind, then `init`,
///   `generate_std_param`, `validate`.
/// * **View**: `update_view_param`.
/// * **Update**: if the incoming record carries a CAS token it must match the
///   stored one. An incoming id must be a UUID v4 equal to the target id.
///   Identity, `isDeleted`, `created`, `lastview` and `owner` are kept from
///   the stored record and `type` is pinned to the entity kind, then
///   `update_std_param` and `validate` run.
/// * **Delete**: sets `isDeleted` and runs `update_std_param`.
pub struct RecordActor<E: Entity> {
    receiver: mpsc::Receiver<RecordRequest<E>>,
    store: HashMap<String, E>,
}

impl<E: Entity> RecordActor<E> {
    /// Creates a new `RecordActor` and its associated `RecordClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, RecordClient<E>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        (actor, RecordClient::new(sender))
    }

    /// Runs the actor's event loop until every client is dropped.
    pub async fn run(mut self, relations: SharedRelationCheck) {
        let entity_type = E::KIND.as_str();
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RecordRequest::Create {
                    record,
                    session,
                    respond_to,
                } => {
                    debug!(entity_type, ?record, "Create");
                    let result = self.create(record, session.as_deref(), relations.as_ref());
                    match &result {
                        Ok(created) => info!(
                            entity_type,
                            id = created.id().unwrap_or_default(),
                            size = self.store.len(),
                            "Created"
                        ),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                RecordRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).map(Entity::interface);
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                RecordRequest::View {
                    id,
                    session,
                    respond_to,
                } => {
                    debug!(entity_type, %id, "View");
                    let result = self.view(&id, session.as_deref(), relations.as_ref());
                    if let Err(e) = &result {
                        warn!(entity_type, %id, error = %e, "View failed");
                    }
                    let _ = respond_to.send(result);
                }
                RecordRequest::Update {
                    id,
                    record,
                    session,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?record, "Update");
                    let result = self.update(&id, record, session.as_deref(), relations.as_ref());
                    match &result {
                        Ok(updated) => info!(entity_type, %id, cas = updated.cas(), "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                RecordRequest::Delete {
                    id,
                    session,
                    respond_to,
                } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id, session.as_deref(), relations.as_ref());
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
                RecordRequest::GetMany { ids, respond_to } => {
                    debug!(entity_type, count = ids.len(), "GetMany");
                    let items = ids.into_iter().map(|id| self.bulk_item(id)).collect();
                    let _ = respond_to.send(Ok(items));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn create(
        &mut self,
        mut record: E,
        session: Option<&str>,
        relations: &dyn RelationCheck,
    ) -> Result<E, FrameworkError> {
        record.set_kind(Some(E::KIND));
        record.init(session)?;
        record.generate_std_param(session, relations)?;
        record.validate(session, relations)?;
        record.set_cas(1);

        let id = record.id().unwrap_or_default().to_string();
        self.store.insert(id, record.clone());
        Ok(record.interface())
    }

    fn view(
        &mut self,
        id: &str,
        session: Option<&str>,
        relations: &dyn RelationCheck,
    ) -> Result<E, FrameworkError> {
        let mut record = self.stored(id)?;
        record.update_view_param(session, relations)?;
        Ok(self.commit(id, record))
    }

    fn update(
        &mut self,
        id: &str,
        mut record: E,
        session: Option<&str>,
        relations: &dyn RelationCheck,
    ) -> Result<E, FrameworkError> {
        let stored = self.stored(id)?;
        if let Some(actual) = record.cas_token() {
            if stored.cas_token() != Some(actual) {
                return Err(FrameworkError::CasMismatch {
                    id: id.to_string(),
                    expected: stored.cas_token(),
                    actual,
                });
            }
        }

        record.check_identity()?;
        if let Some(incoming) = record.id() {
            if incoming != id {
                return Err(EntityError::InvalidIdentifier(incoming.to_string()).into());
            }
        }

        record.set_id(stored.id().map(str::to_string));
        record.set_kind(Some(E::KIND));
        record.set_is_deleted(stored.is_deleted());
        record.set_created(stored.created().cloned());
        record.set_last_view(stored.last_view().cloned());
        record.set_owner(stored.owner().cloned());
        record.set_updated(None);
        record.set_cas(stored.cas());

        record.init(session)?;
        record.update_std_param(session, relations)?;
        record.validate(session, relations)?;
        Ok(self.commit(id, record))
    }

    fn delete(
        &mut self,
        id: &str,
        session: Option<&str>,
        relations: &dyn RelationCheck,
    ) -> Result<E, FrameworkError> {
        let mut record = self.stored(id)?;
        record.set_is_deleted(Some(true));
        record.set_updated(None);
        record.update_std_param(session, relations)?;
        Ok(self.commit(id, record))
    }

    fn bulk_item(&self, id: String) -> BulkEntity<E> {
        match self.store.get(&id) {
            Some(record) => {
                let cas = record.cas();
                let expiry = positive(record.expiry());
                BulkEntity::found(id, record.interface(), cas, expiry)
            }
            None => {
                let error = FrameworkError::NotFound(id.clone());
                BulkEntity::failed(id, error)
            }
        }
    }

    fn stored(&self, id: &str) -> Result<E, FrameworkError> {
        self.store
            .get(id)
            .cloned()
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))
    }

    /// Bumps the CAS token and replaces the stored record.
    fn commit(&mut self, id: &str, mut record: E) -> E {
        let next = record.cas() + 1;
        record.set_cas(next);
        self.store.insert(id.to_string(), record.clone());
        record.interface()
    }
}
