//! # Domain Models
//!
//! Concrete record types. Each one embeds the shared
//! [`Std`](entity_framework::Std) block and implements
//! [`Entity`](entity_framework::Entity) with its own kind tag.

pub mod any;
pub mod contact;
pub mod user;

pub use any::AnyEntity;
pub use contact::{Address, Contact};
pub use user::User;
