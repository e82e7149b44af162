//! # Relation Consistency
//!
//! Lifecycle transitions reference other records (the acting user, the owner).
//! Before a transition completes, every referenced identifier that is not the
//! caller's own session identity must be shown to exist as a record of the
//! expected kind. The check itself belongs to whoever owns storage; the record
//! only collects the identifiers and hands them over in one batch through
//! [`RelationCheck`].
//!
//! One transition means at most one call to the collaborator, however many
//! roles it touches.

use crate::error::EntityError;
use crate::kind::EntityKind;
use std::collections::BTreeMap;

/// Identifiers to verify, mapped to the kind each must resolve to.
pub type RelationMap = BTreeMap<String, EntityKind>;

/// External collaborator that verifies referenced identifiers exist.
///
/// Implementations return an error if any identifier is missing or resolves
/// to the wrong kind. The record never calls this with an empty map.
///
/// Closures work directly:
///
/// ```rust
/// use entity_framework::{EntityError, RelationCheck, RelationMap};
///
/// let accept_all = |_: &RelationMap| -> Result<(), EntityError> { Ok(()) };
/// assert!(accept_all.check(&RelationMap::new()).is_ok());
/// ```
pub trait RelationCheck {
    fn check(&self, relations: &RelationMap) -> Result<(), EntityError>;
}

impl<F> RelationCheck for F
where
    F: Fn(&RelationMap) -> Result<(), EntityError>,
{
    fn check(&self, relations: &RelationMap) -> Result<(), EntityError> {
        self(relations)
    }
}

/// The four actor roles an audit entry can play on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditRole {
    CreatedBy,
    UpdatedBy,
    LastViewedBy,
    Owner,
}

/// Which audit entry a date stamp targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    Created,
    Updated,
    LastView,
}
