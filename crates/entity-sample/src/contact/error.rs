//! Error types for Contact record operations.

use entity_framework::{EntityError, FrameworkError};
use thiserror::Error;

/// Errors that can occur during contact operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ContactError {
    /// The requested contact was not found.
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// The contact was rejected by a lifecycle transition or validation.
    #[error("Contact rejected: {0}")]
    Rejected(#[from] EntityError),

    /// The stored contact changed since it was read.
    #[error("Contact conflict: {0}")]
    Conflict(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ContactError {
    fn from(msg: String) -> Self {
        ContactError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for ContactError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => ContactError::NotFound(id),
            FrameworkError::Entity(inner) => ContactError::Rejected(inner),
            conflict @ FrameworkError::CasMismatch { .. } => {
                ContactError::Conflict(conflict.to_string())
            }
            other => ContactError::ActorCommunicationError(other.to_string()),
        }
    }
}
