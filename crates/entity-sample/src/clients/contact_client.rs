//! # Contact Client
//!
//! Provides a high-level API for interacting with the `Contact` actor.
use crate::contact::ContactError;
use crate::model::Contact;
use entity_framework::{EntityClient, FrameworkError, RecordClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Contact actor.
#[derive(Clone)]
pub struct ContactClient {
    inner: RecordClient<Contact>,
}

impl ContactClient {
    pub fn new(inner: RecordClient<Contact>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl EntityClient<Contact> for ContactClient {
    type Error = ContactError;

    fn inner(&self) -> &RecordClient<Contact> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ContactError::from(e)
    }
}

impl ContactClient {
    #[instrument(skip(self, contact))]
    pub async fn create_contact(
        &self,
        contact: Contact,
        session: Option<String>,
    ) -> Result<Contact, ContactError> {
        debug!(?contact, "create_contact called");
        Ok(self.inner.create(contact, session).await?)
    }

    /// Replaces the contact's fields. A CAS token carried by `contact` must
    /// match the stored one.
    #[instrument(skip(self, contact))]
    pub async fn update_contact(
        &self,
        id: String,
        contact: Contact,
        session: Option<String>,
    ) -> Result<Contact, ContactError> {
        debug!(cas = contact.cas(), "Sending request");
        Ok(self.inner.update(id, contact, session).await?)
    }
}
