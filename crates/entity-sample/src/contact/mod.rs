//! # Contact Records
//!
//! Wires a [`RecordActor`] for [`Contact`] records to its domain client.
//! Contacts reference users through their audit entries, so the actor is run
//! with the shared [`UserDirectory`](crate::directory::UserDirectory) as its
//! relation-consistency collaborator.

pub mod error;

pub use error::*;

use crate::clients::ContactClient;
use crate::model::Contact;
use entity_framework::{RecordActor, DEFAULT_BUFFER_SIZE};

/// Creates a new Contact actor and its client.
pub fn new() -> (RecordActor<Contact>, ContactClient) {
    let (actor, generic_client) = RecordActor::new(DEFAULT_BUFFER_SIZE);
    let client = ContactClient::new(generic_client);

    (actor, client)
}
