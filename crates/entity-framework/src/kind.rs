//! # Record Kinds
//!
//! Every record stored by the backend carries a kind tag in its `type` field.
//! [`EntityKind`] is the closed set of tags the backend knows about; concrete
//! entity types pick one through [`Entity::KIND`](crate::Entity::KIND).

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Discriminator identifying which concrete entity a record represents.
///
/// Serialized as the lowercase tag (`"user"`, `"contact"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    User,
    Customer,
    Company,
    Contact,
    Lead,
    Prospect,
    Account,
}

impl EntityKind {
    /// All known kinds, in declaration order.
    pub const ALL: [EntityKind; 7] = [
        EntityKind::User,
        EntityKind::Customer,
        EntityKind::Company,
        EntityKind::Contact,
        EntityKind::Lead,
        EntityKind::Prospect,
        EntityKind::Account,
    ];

    /// The wire tag for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Customer => "customer",
            EntityKind::Company => "company",
            EntityKind::Contact => "contact",
            EntityKind::Lead => "lead",
            EntityKind::Prospect => "prospect",
            EntityKind::Account => "account",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known kind tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown record kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for EntityKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
