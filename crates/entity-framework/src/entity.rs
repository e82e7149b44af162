//! # Entity Trait
//!
//! The `Entity` trait is the contract every record type (User, Contact, ...)
//! implements to be handled by the shared lifecycle code and the generic
//! `RecordActor`.
//!
//! # Architecture Note
//! A concrete entity is a [`Std`] plus its own fields. It embeds the `Std`
//! (flattened on the wire) and exposes it through `Deref`/`DerefMut`, so every
//! `Std` accessor and lifecycle transition is callable on the entity itself:
//!
//! ```rust
//! use entity_framework::{Entity, EntityKind, Std};
//! use serde::{Deserialize, Serialize};
//! use std::ops::{Deref, DerefMut};
//!
//! #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
//! struct Lead {
//!     #[serde(flatten)]
//!     std: Std,
//!     #[serde(default, skip_serializing_if = "Option::is_none")]
//!     source: Option<String>,
//! }
//!
//! impl Deref for Lead {
//!     type Target = Std;
//!     fn deref(&self) -> &Std { &self.std }
//! }
//! impl DerefMut for Lead {
//!     fn deref_mut(&mut self) -> &mut Std { &mut self.std }
//! }
//! impl std::fmt::Display for Lead {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(f, "Lead entity content: {:?}", self)
//!     }
//! }
//!
//! impl Entity for Lead {
//!     const KIND: EntityKind = EntityKind::Lead;
//! }
//!
//! let lead = Lead::new();
//! assert_eq!(lead.kind(), Some(EntityKind::Lead));
//! assert!(lead.id().is_none());
//! ```
//!
//! # Provided Methods (Hooks)
//! Every method has a default. Override [`Entity::validate`] for business
//! rules and [`Entity::interface`] when the type holds internal-only fields.

use crate::error::EntityError;
use crate::kind::EntityKind;
use crate::record::Std;
use crate::relation::RelationCheck;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::ops::DerefMut;

/// Trait that every record type implements.
///
/// The kind is fixed per type through [`Entity::KIND`]; code that must pick a
/// type at runtime matches on [`EntityKind`] instead of dispatching on an open
/// set of types.
pub trait Entity:
    DerefMut<Target = Std>
    + Default
    + Clone
    + Debug
    + Display
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// The kind tag stamped into `type`.
    const KIND: EntityKind;

    /// A fresh value with only its kind tag set.
    fn new() -> Self {
        let mut entity = Self::default();
        entity.set_kind(Some(Self::KIND));
        entity
    }

    /// Fills fields that must never stay absent. Safe to call repeatedly.
    fn init(&mut self, _session_id: Option<&str>) -> Result<(), EntityError> {
        if self.kind().is_none() {
            self.set_kind(Some(Self::KIND));
        }
        Ok(())
    }

    /// Business-rule validation. Accepts everything unless overridden.
    fn validate(
        &self,
        _session_id: Option<&str>,
        _check: &dyn RelationCheck,
    ) -> Result<(), EntityError> {
        Ok(())
    }

    /// The copy handed out for serialization.
    fn interface(&self) -> Self {
        self.clone()
    }

    /// An empty typed collection, used as a decode destination.
    fn list() -> Vec<Self> {
        Vec::new()
    }

    /// Decodes one record from JSON.
    fn from_slice(data: &[u8]) -> Result<Self, EntityError> {
        serde_json::from_slice(data).map_err(|_| EntityError::Parse { kind: Self::KIND })
    }

    /// Decodes an ordered list of records from JSON.
    fn list_from_slice(data: &[u8]) -> Result<Vec<Self>, EntityError> {
        serde_json::from_slice(data).map_err(|_| EntityError::Parse { kind: Self::KIND })
    }
}
