//! # Audit Entries
//!
//! An [`AuditEntry`] records who did something to a record and when. Every
//! [`Std`](crate::Std) carries four of them: `created`, `updated`, `lastview`
//! and `owner`, each optional as a whole and field by field.
//!
//! Reads never fail on missing data. [`AuditEntry`]'s accessors return the
//! zero value of their type, and [`AuditView`] does the same for an entry
//! that is itself absent:
//!
//! ```rust
//! use entity_framework::{AuditView, Std};
//!
//! let record = Std::default();
//! assert_eq!(record.created().id(), "");
//! ```

use crate::kind::EntityKind;
use crate::time::zero_instant;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The `(id, name, type, date)` tuple tracking one lifecycle event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Identifier of the acting user record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Kind of the acting record.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<EntityKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

impl AuditEntry {
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn kind(&self) -> Option<EntityKind> {
        self.kind
    }

    /// The event time, or the zero instant when unset.
    pub fn date(&self) -> DateTime<Utc> {
        self.date.unwrap_or_else(zero_instant)
    }
}

/// Zero-value accessors over an entry that may not exist.
pub trait AuditView {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn kind(&self) -> Option<EntityKind>;
    fn date(&self) -> DateTime<Utc>;
}

impl AuditView for Option<&AuditEntry> {
    fn id(&self) -> &str {
        self.map(AuditEntry::id).unwrap_or_default()
    }

    fn name(&self) -> &str {
        self.map(AuditEntry::name).unwrap_or_default()
    }

    fn kind(&self) -> Option<EntityKind> {
        self.and_then(AuditEntry::kind)
    }

    fn date(&self) -> DateTime<Utc> {
        self.map(AuditEntry::date).unwrap_or_else(zero_instant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::is_zero_instant;

    #[test]
    fn absent_fields_read_as_zero_values() {
        let entry = AuditEntry::default();
        assert_eq!(entry.id(), "");
        assert_eq!(entry.name(), "");
        assert_eq!(entry.kind(), None);
        assert!(is_zero_instant(&entry.date()));
    }

    #[test]
    fn absent_entry_reads_as_zero_values() {
        let entry: Option<&AuditEntry> = None;
        assert_eq!(entry.id(), "");
        assert_eq!(entry.name(), "");
        assert_eq!(entry.kind(), None);
        assert!(is_zero_instant(&entry.date()));
    }

    #[test]
    fn present_fields_are_returned() {
        let now = Utc::now();
        let entry = AuditEntry {
            id: Some("u1".into()),
            name: Some("Alice".into()),
            kind: Some(EntityKind::User),
            date: Some(now),
        };
        let view = Some(&entry);
        assert_eq!(view.id(), "u1");
        assert_eq!(view.name(), "Alice");
        assert_eq!(view.kind(), Some(EntityKind::User));
        assert_eq!(view.date(), now);
    }

    #[test]
    fn serializes_type_key_and_omits_absent_fields() {
        let entry = AuditEntry {
            id: Some("u1".into()),
            kind: Some(EntityKind::User),
            ..Default::default()
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"id":"u1","type":"user"}"#);
    }
}
