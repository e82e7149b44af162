//! Runtime selection of a concrete entity type by its kind tag.

use super::{Contact, User};
use entity_framework::{Entity, EntityError, EntityKind, Std};
use serde::Serialize;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// One record of any kind that has a concrete type in this crate.
///
/// Serializes as the inner record, which already carries its `type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnyEntity {
    User(User),
    Contact(Contact),
}

impl AnyEntity {
    /// A fresh record of the given kind.
    pub fn new(kind: EntityKind) -> Result<Self, EntityError> {
        match kind {
            EntityKind::User => Ok(Self::User(User::new())),
            EntityKind::Contact => Ok(Self::Contact(Contact::new())),
            other => Err(EntityError::UnsupportedKind(other)),
        }
    }

    /// Decodes one record of the given kind.
    pub fn from_slice(kind: EntityKind, data: &[u8]) -> Result<Self, EntityError> {
        match kind {
            EntityKind::User => User::from_slice(data).map(Self::User),
            EntityKind::Contact => Contact::from_slice(data).map(Self::Contact),
            other => Err(EntityError::UnsupportedKind(other)),
        }
    }

    /// Decodes a list of records of the given kind.
    pub fn list_from_slice(kind: EntityKind, data: &[u8]) -> Result<Vec<Self>, EntityError> {
        match kind {
            EntityKind::User => Ok(User::list_from_slice(data)?
                .into_iter()
                .map(Self::User)
                .collect()),
            EntityKind::Contact => Ok(Contact::list_from_slice(data)?
                .into_iter()
                .map(Self::Contact)
                .collect()),
            other => Err(EntityError::UnsupportedKind(other)),
        }
    }

    /// The kind of the concrete type, regardless of the stored `type` field.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::User(_) => User::KIND,
            Self::Contact(_) => Contact::KIND,
        }
    }

    pub fn std(&self) -> &Std {
        match self {
            Self::User(user) => user.deref(),
            Self::Contact(contact) => contact.deref(),
        }
    }

    pub fn std_mut(&mut self) -> &mut Std {
        match self {
            Self::User(user) => user.deref_mut(),
            Self::Contact(contact) => contact.deref_mut(),
        }
    }
}

impl fmt::Display for AnyEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(user) => fmt::Display::fmt(user, f),
            Self::Contact(contact) => fmt::Display::fmt(contact, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_selects_the_concrete_type() {
        let record = AnyEntity::new(EntityKind::Contact).unwrap();
        assert_eq!(record.kind(), EntityKind::Contact);
        assert_eq!(record.std().kind(), Some(EntityKind::Contact));
    }

    #[test]
    fn kinds_without_a_type_are_rejected() {
        for kind in [EntityKind::Customer, EntityKind::Lead, EntityKind::Account] {
            assert_eq!(
                AnyEntity::new(kind),
                Err(EntityError::UnsupportedKind(kind))
            );
        }
        assert_eq!(
            AnyEntity::from_slice(EntityKind::Company, b"{}"),
            Err(EntityError::UnsupportedKind(EntityKind::Company))
        );
    }

    #[test]
    fn from_slice_decodes_into_the_selected_type() {
        let record = AnyEntity::from_slice(EntityKind::User, br#"{"email":"a@b.c"}"#).unwrap();
        match &record {
            AnyEntity::User(user) => assert_eq!(user.email.as_deref(), Some("a@b.c")),
            other => panic!("expected a user, got {other}"),
        }
    }

    #[test]
    fn parse_errors_name_the_requested_kind() {
        let err = AnyEntity::list_from_slice(EntityKind::Contact, b"nope").unwrap_err();
        assert_eq!(err, EntityError::Parse { kind: EntityKind::Contact });
    }

    #[test]
    fn std_mut_reaches_the_shared_fields() {
        let mut record = AnyEntity::new(EntityKind::User).unwrap();
        record.std_mut().set_name(Some("Ada".into()));
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Ada","type":"user"}"#);
    }
}
