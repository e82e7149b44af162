//! # Entity Framework
//!
//! This crate provides the shared foundation for CRM-style business records
//! (users, contacts, customers, leads, ...). Every record embeds the same
//! standard block of fields, [`Std`], and goes through the same lifecycle:
//! it is created once, then updated or viewed any number of times, and every
//! transition leaves an audit trail of who did what and when.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Record Layer** ([`Std`], [`Entity`]) - Shared fields, audit trail and lifecycle transitions
//! 2. **Runtime Layer** ([`RecordActor`]) - Message processing, storage, CAS and soft delete
//! 3. **Interface Layer** ([`RecordClient`], [`EntityClient`]) - Type-safe communication
//!
//! The record layer is plain synchronous code and can be used without the
//! runtime. The runtime is one in-memory realization of the persistence role
//! around it.
//!
//! ## Core Abstractions
//!
//! ### [`Std`] - The Standard Block
//!
//! Identity, kind tag, soft-delete flag, four [`AuditEntry`] values
//! (`created`, `updated`, `lastview`, `owner`), the CAS token and expiry.
//! All fields are optional and absent fields are omitted from JSON.
//!
//! ```rust
//! use entity_framework::{EntityKind, RelationMap, EntityError, Std};
//!
//! let no_relations = |_: &RelationMap| -> Result<(), EntityError> { Ok(()) };
//!
//! let mut record = Std::with_kind(EntityKind::Contact);
//! record.generate_std_param(Some("u1"), &no_relations).unwrap();
//!
//! assert!(record.id().is_some());
//! assert_eq!(record.created_by_id(), Some("u1"));
//! assert_eq!(record.owner_id(), Some("u1"));
//! assert!(record.created_date().is_some());
//! ```
//!
//! ### [`RelationCheck`] - Relation Consistency
//!
//! Transitions fill missing actor ids with the session identity. Any other
//! actor id already present is sent, in one batch, to a [`RelationCheck`]
//! collaborator that verifies it refers to an existing record of the expected
//! kind. The collaborator is injected, never looked up globally.
//!
//! ### [`Entity`] - The Record Contract
//!
//! Concrete record types embed a `Std` and implement [`Entity`] with a fixed
//! [`EntityKind`]. The trait supplies `new`, `init`, `validate`, `interface`
//! and the JSON decoding helpers.
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via the `run()` method, not at
//! construction time:
//!
//! ```rust,ignore
//! let (actor, client) = RecordActor::<Contact>::new(DEFAULT_BUFFER_SIZE);
//! tokio::spawn(actor.run(Arc::new(directory.clone())));
//! ```
//!
//! ## Concurrency Model
//!
//! - The lifecycle helpers are synchronous and mutate the value they are given
//! - Each record actor runs in its own Tokio task and processes messages **sequentially**
//! - Actors for different entity types run in **parallel**
//!
//! ## Testing
//!
//! The [`mock`] module provides a [`MockRelationCheck`](mock::MockRelationCheck)
//! with queued expectations, and helpers for testing client logic against a
//! bare channel without spawning any actors.

pub mod actor;
pub mod audit;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod envelope;
pub mod error;
pub mod id;
pub mod kind;
pub mod message;
pub mod mock;
pub mod record;
pub mod relation;
pub mod time;
pub mod tracing;

// Re-export core types for convenience
pub use actor::{RecordActor, SharedRelationCheck, DEFAULT_BUFFER_SIZE};
pub use audit::{AuditEntry, AuditView};
pub use client::RecordClient;
pub use client_trait::EntityClient;
pub use entity::Entity;
pub use envelope::{BulkEntity, SearchEntity};
pub use error::{EntityError, FrameworkError};
pub use id::{generate_id, is_well_formed};
pub use kind::{EntityKind, UnknownKind};
pub use message::{RecordRequest, Response};
pub use record::Std;
pub use relation::{AuditRole, DateField, RelationCheck, RelationMap};
pub use time::{is_zero_instant, max_expiry, zero_instant};
