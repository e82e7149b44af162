//! # User Client
//!
//! Provides a high-level API for interacting with the `User` actor.
//! It wraps a `RecordClient<User>` and keeps the shared user directory in step
//! with the users it creates.
use crate::directory::UserDirectory;
use crate::model::User;
use crate::user::UserError;
use entity_framework::{Entity, EntityClient, FrameworkError, RecordClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: RecordClient<User>,
    directory: UserDirectory,
}

impl UserClient {
    pub fn new(inner: RecordClient<User>, directory: UserDirectory) -> Self {
        Self { inner, directory }
    }
}

#[async_trait]
impl EntityClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &RecordClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        UserError::from(e)
    }
}

impl UserClient {
    /// Creates the user and registers it as a valid relation target.
    #[instrument(skip(self, user))]
    pub async fn create_user(
        &self,
        user: User,
        session: Option<String>,
    ) -> Result<User, UserError> {
        debug!(?user, "create_user called");
        let created = self.inner.create(user, session).await?;
        if let Some(id) = created.id() {
            self.directory.register(id, User::KIND);
        }
        Ok(created)
    }

    #[instrument(skip(self, user))]
    pub async fn update_user(
        &self,
        id: String,
        user: User,
        session: Option<String>,
    ) -> Result<User, UserError> {
        debug!("Sending request");
        Ok(self.inner.update(id, user, session).await?)
    }
}
