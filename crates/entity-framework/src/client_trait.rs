//! # EntityClient Trait
//!
//! Provides a common interface for entity-specific clients, adding default
//! `get`, `view`, `delete` and `get_many` methods built on top of a generic
//! `RecordClient`.
use crate::{BulkEntity, Entity, FrameworkError, RecordClient};
use async_trait::async_trait;

/// Trait for entity-specific clients to inherit the standard record operations.
///
/// Create and update stay on the concrete client, since they usually take a
/// domain payload and need specific error mapping.
///
/// # Example
///
/// ```rust
/// use entity_framework::{Entity, EntityClient, EntityKind, FrameworkError, RecordClient, Std};
/// use serde::{Deserialize, Serialize};
/// use std::ops::{Deref, DerefMut};
///
/// // 1. Define Entity
/// #[derive(Debug, Clone, Default, Serialize, Deserialize)]
/// struct Lead {
///     #[serde(flatten)]
///     std: Std,
/// }
/// impl Deref for Lead {
///     type Target = Std;
///     fn deref(&self) -> &Std { &self.std }
/// }
/// impl DerefMut for Lead {
///     fn deref_mut(&mut self) -> &mut Std { &mut self.std }
/// }
/// impl std::fmt::Display for Lead {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "Lead entity content: {:?}", self)
///     }
/// }
/// impl Entity for Lead {
///     const KIND: EntityKind = EntityKind::Lead;
/// }
///
/// #[derive(Debug)]
/// struct LeadError(String);
/// impl From<String> for LeadError {
///     fn from(s: String) -> Self { LeadError(s) }
/// }
///
/// // 2. Define Client Wrapper
/// struct LeadClient {
///     inner: RecordClient<Lead>,
/// }
///
/// // 3. Implement EntityClient
/// #[async_trait::async_trait]
/// impl EntityClient<Lead> for LeadClient {
///     type Error = LeadError;
///
///     fn inner(&self) -> &RecordClient<Lead> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         LeadError(e.to_string())
///     }
/// }
///
/// // 4. Usage
/// async fn usage(client: LeadClient) {
///     // get(), view(), delete() and get_many() are provided automatically!
///     let _ = client.get("lead-1".to_string()).await;
///     let _ = client.delete("lead-1".to_string(), None).await;
/// }
/// ```
#[async_trait]
pub trait EntityClient<E: Entity>: Send + Sync {
    /// The entity-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic RecordClient.
    fn inner(&self) -> &RecordClient<E>;

    /// Map framework errors to the specific entity error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by ID without touching its audit trail.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: String) -> Result<Option<E>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch a record by ID and stamp the view on it.
    #[tracing::instrument(skip(self))]
    async fn view(&self, id: String, session: Option<String>) -> Result<E, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().view(id, session).await.map_err(Self::map_error)
    }

    /// Soft-delete a record by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: String, session: Option<String>) -> Result<E, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id, session).await.map_err(Self::map_error)
    }

    /// Fetch several records at once. Missing ids come back as failed items.
    #[tracing::instrument(skip(self))]
    async fn get_many(&self, ids: Vec<String>) -> Result<Vec<BulkEntity<E>>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get_many(ids).await.map_err(Self::map_error)
    }
}
