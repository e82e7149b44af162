use entity_framework::{Entity, EntityKind, Std};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// A postal address attached to a [`Contact`].
///
/// `lines` and the contact's `addresses` are keyed by position; JSON carries
/// the keys as strings (`{"0": "..."}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<BTreeMap<u32, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Usage of the address: contact, delivery, invoice, ...
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Address {
    /// Builds an address from its street lines, numbered from zero.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines = (0..).zip(lines.into_iter().map(Into::into)).collect();
        Self {
            lines: Some(lines),
            ..Self::default()
        }
    }
}

/// A person the organisation is in touch with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(flatten)]
    std: Std,
    #[serde(rename = "firstName", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<BTreeMap<u32, Address>>,
}

impl Contact {
    pub fn with_full_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = Some(first.into());
        self.last_name = Some(last.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Adds `address` under the next free position.
    pub fn with_address(mut self, address: Address) -> Self {
        let addresses = self.addresses.get_or_insert_with(BTreeMap::new);
        let next = addresses.keys().next_back().map_or(0, |last| last + 1);
        addresses.insert(next, address);
        self
    }
}

impl Deref for Contact {
    type Target = Std;

    fn deref(&self) -> &Std {
        &self.std
    }
}

impl DerefMut for Contact {
    fn deref_mut(&mut self) -> &mut Std {
        &mut self.std
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact entity content: {:?}", self)
    }
}

impl Entity for Contact {
    const KIND: EntityKind = EntityKind::Contact;
}
