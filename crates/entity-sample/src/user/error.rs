//! Error types for User record operations.

use entity_framework::{EntityError, FrameworkError};
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(String),

    /// The user record was rejected by a lifecycle transition or validation.
    #[error("User rejected: {0}")]
    Rejected(#[from] EntityError),

    /// The stored user changed since it was read.
    #[error("User conflict: {0}")]
    Conflict(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for UserError {
    fn from(msg: String) -> Self {
        UserError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for UserError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            FrameworkError::Entity(inner) => UserError::Rejected(inner),
            conflict @ FrameworkError::CasMismatch { .. } => UserError::Conflict(conflict.to_string()),
            other => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}
