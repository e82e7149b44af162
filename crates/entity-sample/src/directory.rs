//! # User Directory
//!
//! The relation-consistency collaborator used by the record system. It keeps
//! the set of identifiers that are known to exist, with their kind, and
//! answers [`RelationCheck`] batches against it.
//!
//! The directory is shared: every actor receives a clone at `run` time and
//! the [`UserClient`](crate::clients::UserClient) registers each user it
//! creates, so later records can reference that user as creator or owner.

use entity_framework::{EntityError, EntityKind, RelationCheck, RelationMap};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::trace;

/// Shared registry of known record identifiers.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    known: Arc<RwLock<HashMap<String, EntityKind>>>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `id` exists as a record of `kind`.
    ///
    /// Never fails: a lock poisoned by a panicking writer still holds a
    /// consistent map, since every write is a single insert.
    pub fn register(&self, id: impl Into<String>, kind: EntityKind) {
        let id = id.into();
        trace!(%id, %kind, "Registering relation target");
        self.known
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, kind);
    }

    /// The kind `id` was registered under, if any.
    pub fn lookup(&self, id: &str) -> Option<EntityKind> {
        self.known
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .copied()
    }
}

impl RelationCheck for UserDirectory {
    /// Fails on the first identifier, in key order, that is unknown or known
    /// under another kind.
    fn check(&self, relations: &RelationMap) -> Result<(), EntityError> {
        let known = self.known.read().unwrap_or_else(PoisonError::into_inner);

        for (id, kind) in relations {
            if known.get(id) != Some(kind) {
                return Err(EntityError::MissingRelation {
                    id: id.clone(),
                    kind: *kind,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_ids_pass() {
        let directory = UserDirectory::new();
        directory.register("u1", EntityKind::User);
        directory.register("u2", EntityKind::User);

        let batch = RelationMap::from([
            ("u1".to_string(), EntityKind::User),
            ("u2".to_string(), EntityKind::User),
        ]);
        assert_eq!(directory.check(&batch), Ok(()));
    }

    #[test]
    fn first_unknown_id_is_reported() {
        let directory = UserDirectory::new();
        directory.register("b", EntityKind::User);

        let batch = RelationMap::from([
            ("a".to_string(), EntityKind::User),
            ("b".to_string(), EntityKind::User),
            ("c".to_string(), EntityKind::User),
        ]);
        assert_eq!(
            directory.check(&batch),
            Err(EntityError::MissingRelation {
                id: "a".into(),
                kind: EntityKind::User
            })
        );
    }

    #[test]
    fn wrong_kind_counts_as_missing() {
        let directory = UserDirectory::new();
        directory.register("c1", EntityKind::Contact);

        let batch = RelationMap::from([("c1".to_string(), EntityKind::User)]);
        assert!(matches!(
            directory.check(&batch),
            Err(EntityError::MissingRelation { .. })
        ));
        assert_eq!(directory.lookup("c1"), Some(EntityKind::Contact));
    }

    #[test]
    fn clones_share_the_registry() {
        let directory = UserDirectory::new();
        let clone = directory.clone();
        clone.register("u1", EntityKind::User);
        assert_eq!(directory.lookup("u1"), Some(EntityKind::User));
    }

    #[test]
    fn registration_survives_a_poisoned_lock() {
        let directory = UserDirectory::new();
        let known = directory.known.clone();
        let _ = std::thread::spawn(move || {
            let _guard = known.write().unwrap();
            panic!("writer died");
        })
        .join();
        assert!(directory.known.is_poisoned());

        directory.register("u1", EntityKind::User);
        assert_eq!(directory.lookup("u1"), Some(EntityKind::User));
        let batch = RelationMap::from([("u1".to_string(), EntityKind::User)]);
        assert_eq!(directory.check(&batch), Ok(()));
    }
}
