use entity_framework::{Entity, EntityKind, Std};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Represents an application user.
///
/// # Entity Framework
/// This struct implements the [`Entity`] trait, allowing it to be managed by a
/// [`RecordActor`](entity_framework::RecordActor). The standard fields live in
/// the embedded [`Std`] and are flattened into the same JSON object:
///
/// ```json
/// {"id":"...","type":"user","email":"alice@example.com","firstName":"Alice"}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    std: Std,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "firstName", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl User {
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_full_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = Some(first.into());
        self.last_name = Some(last.into());
        self
    }
}

impl Deref for User {
    type Target = Std;

    fn deref(&self) -> &Std {
        &self.std
    }
}

impl DerefMut for User {
    fn deref_mut(&mut self) -> &mut Std {
        &mut self.std
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User entity content: {:?}", self)
    }
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;
}
