//! # Entity Sample
//!
//! Concrete record types and a running record system built on
//! [`entity_framework`].
//!
//! - **[model]**: [`User`](model::User), [`Contact`](model::Contact) and the
//!   kind-selected [`AnyEntity`](model::AnyEntity).
//! - **[directory]**: the [`UserDirectory`](directory::UserDirectory)
//!   relation-consistency collaborator.
//! - **[clients]**: domain wrappers around the generic record client.
//! - **[lifecycle]**: the [`RecordSystem`](lifecycle::RecordSystem) that starts
//!   and stops the actors.
//!
//! See [`entity_framework::mock`] for utilities to test clients without
//! spawning full actors.

pub mod clients;
pub mod contact;
pub mod directory;
pub mod lifecycle;
pub mod model;
pub mod user;
