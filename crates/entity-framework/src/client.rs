//! # Generic Client
//!
//! This module defines the generic client for communicating with record actors.

use crate::entity::Entity;
use crate::envelope::BulkEntity;
use crate::error::FrameworkError;
use crate::message::RecordRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `RecordActor`.
///
/// Holds only a channel sender, so it is cheap to clone and share across tasks.
#[derive(Clone)]
pub struct RecordClient<E: Entity> {
    sender: mpsc::Sender<RecordRequest<E>>,
}

impl<E: Entity> RecordClient<E> {
    pub fn new(sender: mpsc::Sender<RecordRequest<E>>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, FrameworkError>>) -> RecordRequest<E>,
    ) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, record: E, session: Option<String>) -> Result<E, FrameworkError> {
        self.request(|respond_to| RecordRequest::Create {
            record,
            session,
            respond_to,
        })
        .await
    }

    pub async fn get(&self, id: impl Into<String>) -> Result<Option<E>, FrameworkError> {
        let id = id.into();
        self.request(|respond_to| RecordRequest::Get { id, respond_to })
            .await
    }

    pub async fn view(
        &self,
        id: impl Into<String>,
        session: Option<String>,
    ) -> Result<E, FrameworkError> {
        let id = id.into();
        self.request(|respond_to| RecordRequest::View {
            id,
            session,
            respond_to,
        })
        .await
    }

    pub async fn update(
        &self,
        id: impl Into<String>,
        record: E,
        session: Option<String>,
    ) -> Result<E, FrameworkError> {
        let id = id.into();
        self.request(|respond_to| RecordRequest::Update {
            id,
            record,
            session,
            respond_to,
        })
        .await
    }

    pub async fn delete(
        &self,
        id: impl Into<String>,
        session: Option<String>,
    ) -> Result<E, FrameworkError> {
        let id = id.into();
        self.request(|respond_to| RecordRequest::Delete {
            id,
            session,
            respond_to,
        })
        .await
    }

    pub async fn get_many(&self, ids: Vec<String>) -> Result<Vec<BulkEntity<E>>, FrameworkError> {
        self.request(|respond_to| RecordRequest::GetMany { ids, respond_to })
            .await
    }
}
