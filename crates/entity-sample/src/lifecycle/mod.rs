//! # System Lifecycle & Orchestration
//!
//! This module starts, wires and shuts down the record actors of the sample
//! system.
//!
//! ## The RecordSystem Pattern
//!
//! 1. **Actor Creation** - Instantiate each actor and its domain client
//! 2. **Dependency Injection** - Hand the shared [`UserDirectory`] to every
//!    actor through `run(relations)`
//! 3. **Graceful Shutdown** - Drop the clients, then await every actor task
//!
//! The directory is the only shared state. It is injected at `run` time, so
//! actors stay free of construction-order dependencies on each other.
//!
//! ## Graceful Shutdown
//!
//! Dropping every client closes the sender side of each channel;
//! `receiver.recv()` then returns `None`, the actor logs its final store size
//! and its task finishes. Clones of a client held elsewhere keep that actor
//! alive, so callers must drop their clones before `shutdown` returns.

use crate::clients::{ContactClient, UserClient};
use crate::directory::UserDirectory;
use crate::{contact, user};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// The running record system: one actor per entity kind plus the shared
/// relation directory.
pub struct RecordSystem {
    pub user_client: UserClient,
    pub contact_client: ContactClient,
    pub directory: UserDirectory,
    handles: Vec<JoinHandle<()>>,
}

impl RecordSystem {
    /// Creates and starts every actor. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let directory = UserDirectory::new();

        let (user_actor, user_client) = user::new(directory.clone());
        let (contact_actor, contact_client) = contact::new();

        let user_handle = tokio::spawn(user_actor.run(Arc::new(directory.clone())));
        let contact_handle = tokio::spawn(contact_actor.run(Arc::new(directory.clone())));

        Self {
            user_client,
            contact_client,
            directory,
            handles: vec![user_handle, contact_handle],
        }
    }

    /// Drops every client and waits for the actors to drain.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down record system");
        drop(self.user_client);
        drop(self.contact_client);

        for handle in self.handles {
            handle.await.map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}

impl Default for RecordSystem {
    fn default() -> Self {
        Self::new()
    }
}
