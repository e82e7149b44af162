//! # Errors
//!
//! [`EntityError`] is what the record contract itself can fail with: parse,
//! relation-consistency and validation failures. [`FrameworkError`] wraps it
//! for the in-memory record service, adding channel and concurrency failures.

use crate::kind::EntityKind;
use std::num::NonZeroU64;

/// Errors produced by record decoding, lifecycle transitions and validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityError {
    /// The request body did not decode. The decoder's message is not kept.
    #[error("Unable to parse request body into {kind} structure")]
    Parse { kind: EntityKind },

    /// A referenced identifier does not resolve to a record of the expected kind.
    #[error("Related record not found: {id} is not a known {kind}")]
    MissingRelation { id: String, kind: EntityKind },

    /// Any other failure reported by the relation-consistency collaborator.
    #[error("Relation consistency error: {0}")]
    Relation(String),

    /// A domain rule rejected the record.
    #[error("Validation error: {0}")]
    Validation(String),

    /// No concrete entity type is registered for this kind.
    #[error("Unsupported record kind: {0}")]
    UnsupportedKind(EntityKind),

    /// The record identity is not a UUID v4.
    #[error("Invalid record identifier: {0}")]
    InvalidIdentifier(String),
}

/// Errors that can occur within the record service.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    /// The caller's CAS token is stale.
    #[error("CAS mismatch on {id}: expected {expected:?}, got {actual}")]
    CasMismatch {
        id: String,
        expected: Option<NonZeroU64>,
        actual: NonZeroU64,
    },
    #[error(transparent)]
    Entity(#[from] EntityError),
}
