//! # User Records
//!
//! Wires a [`RecordActor`] for [`User`] records to its domain client.
//!
//! ## Structure
//!
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use entity_sample::directory::UserDirectory;
//! use entity_sample::model::User;
//! use entity_sample::user;
//! use entity_framework::Entity;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let directory = UserDirectory::new();
//!     let (actor, client) = user::new(directory.clone());
//!     tokio::spawn(actor.run(Arc::new(directory.clone())));
//!
//!     let alice = User::new().with_email("alice@example.com");
//!     let created = client.create_user(alice, None).await?;
//!
//!     // Created users become valid relation targets.
//!     assert!(directory.lookup(created.id().unwrap()).is_some());
//!     Ok(())
//! }
//! ```

pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::directory::UserDirectory;
use crate::model::User;
use entity_framework::{RecordActor, DEFAULT_BUFFER_SIZE};

/// Creates a new User actor and its client.
///
/// The client registers every user it creates in `directory`.
pub fn new(directory: UserDirectory) -> (RecordActor<User>, UserClient) {
    let (actor, generic_client) = RecordActor::new(DEFAULT_BUFFER_SIZE);
    let client = UserClient::new(generic_client, directory);

    (actor, client)
}
