//! # Domain Clients
//!
//! Type-safe wrappers around [`RecordClient`](entity_framework::RecordClient)
//! that speak in domain terms and domain errors. The shared read, view,
//! delete and bulk operations come from
//! [`EntityClient`](entity_framework::EntityClient).

pub mod contact_client;
pub mod user_client;

pub use contact_client::ContactClient;
pub use user_client::UserClient;
