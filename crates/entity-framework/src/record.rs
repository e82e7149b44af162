//! # Std Base Record
//!
//! [`Std`] holds the fields every entity shares: identity, kind tag,
//! soft-delete flag, the four audit entries, the CAS token and expiry.
//! Concrete entities embed it (see [`Entity`](crate::Entity)) and reach its
//! accessors and lifecycle transitions through `Deref`.
//!
//! ## Lifecycle
//!
//! A record is created once and then updated or viewed any number of times:
//!
//! - [`Std::generate_std_param`] mints the identity and stamps `created`.
//! - [`Std::update_std_param`] stamps `updated`.
//! - [`Std::update_view_param`] touches `updated.date` and records the viewer.
//!
//! Each transition fills missing actor ids with the session identity and sends
//! every other actor id to the relation-consistency collaborator in a single
//! batch. Nothing is rolled back on error: a record whose transition failed
//! must be discarded, not persisted.
//!
//! ## Normalization
//!
//! A zero CAS, a non-positive expiry and a zero-instant expiry time all mean
//! "absent", whether they arrive through a setter or off the wire.

use crate::audit::AuditEntry;
use crate::error::EntityError;
use crate::id::{generate_id, is_well_formed};
use crate::kind::EntityKind;
use crate::relation::{AuditRole, DateField, RelationCheck, RelationMap};
use crate::time::{self, is_zero_instant};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;
use tracing::{debug, trace};

/// Standard properties shared by every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Std {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<EntityKind>,
    #[serde(rename = "isDeleted", default, skip_serializing_if = "Option::is_none")]
    is_deleted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created: Option<AuditEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated: Option<AuditEntry>,
    #[serde(rename = "lastview", default, skip_serializing_if = "Option::is_none")]
    last_view: Option<AuditEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    owner: Option<AuditEntry>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "time::deserialize_cas"
    )]
    cas: Option<NonZeroU64>,
    #[serde(
        rename = "expiryTime",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "time::deserialize_expiry_time"
    )]
    expiry_time: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::expiry_nanos"
    )]
    expiry: Option<Duration>,
}

impl Std {
    /// A record with only its kind tag set.
    pub fn with_kind(kind: EntityKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    // --- Lifecycle ---

    /// Mints a fresh identity and stamps the creation audit entry.
    ///
    /// Always overwrites `id`. `created.id` and `owner.id` default to
    /// `session_id` when absent; any other id they hold is verified through
    /// `check`.
    pub fn generate_std_param(
        &mut self,
        session_id: Option<&str>,
        check: &dyn RelationCheck,
    ) -> Result<(), EntityError> {
        let id = generate_id();
        trace!(%id, "minted record id");
        self.id = Some(id);

        self.set_nil_dates(&[DateField::Created]);
        self.check_ids_exist_and_set_nil_ones(
            &[AuditRole::CreatedBy, AuditRole::Owner],
            session_id,
            check,
        )
    }

    /// Stamps the update audit entry.
    pub fn update_std_param(
        &mut self,
        session_id: Option<&str>,
        check: &dyn RelationCheck,
    ) -> Result<(), EntityError> {
        self.set_nil_dates(&[DateField::Updated]);
        self.check_ids_exist_and_set_nil_ones(&[AuditRole::UpdatedBy], session_id, check)
    }

    /// Records a view.
    ///
    /// Touches `updated.date`, not `lastview.date`; only the viewer id lands
    /// in `lastview`.
    pub fn update_view_param(
        &mut self,
        session_id: Option<&str>,
        check: &dyn RelationCheck,
    ) -> Result<(), EntityError> {
        self.updated.get_or_insert_with(AuditEntry::default).date = Some(Utc::now());
        self.check_ids_exist_and_set_nil_ones(&[AuditRole::LastViewedBy], session_id, check)
    }

    /// Fails when a present id is not a UUID v4.
    pub fn check_identity(&self) -> Result<(), EntityError> {
        match self.id.as_deref() {
            Some(id) if !is_well_formed(id) => Err(EntityError::InvalidIdentifier(id.to_string())),
            _ => Ok(()),
        }
    }

    /// Stamps `now` on absent dates; a zero-instant date becomes absent.
    fn set_nil_dates(&mut self, fields: &[DateField]) {
        let now = Utc::now();
        for field in fields {
            let entry = self.date_slot(*field).get_or_insert_with(AuditEntry::default);
            match entry.date {
                None => entry.date = Some(now),
                Some(date) if is_zero_instant(&date) => entry.date = None,
                Some(_) => {}
            }
        }
    }

    /// Defaults absent actor ids to `default_id` and verifies the rest.
    ///
    /// Present ids are collected once each and sent to `check` in a single
    /// call. Empty ids are neither defaulted nor verified. An absent entry
    /// stays absent when there is no default to put in it.
    pub(crate) fn check_ids_exist_and_set_nil_ones(
        &mut self,
        roles: &[AuditRole],
        default_id: Option<&str>,
        check: &dyn RelationCheck,
    ) -> Result<(), EntityError> {
        let mut relations = RelationMap::new();
        for role in roles {
            let slot = self.role_slot(*role);
            match slot.as_ref().and_then(|entry| entry.id.clone()) {
                None => {
                    if let Some(default_id) = default_id {
                        slot.get_or_insert_with(AuditEntry::default).id = Some(default_id.to_string());
                    }
                }
                Some(id) if id.is_empty() => {}
                Some(id) => {
                    relations.entry(id).or_insert(EntityKind::User);
                }
            }
        }

        if relations.is_empty() {
            return Ok(());
        }
        debug!(count = relations.len(), "Checking relation consistency");
        check.check(&relations)
    }

    fn date_slot(&mut self, field: DateField) -> &mut Option<AuditEntry> {
        match field {
            DateField::Created => &mut self.created,
            DateField::Updated => &mut self.updated,
            DateField::LastView => &mut self.last_view,
        }
    }

    fn role_slot(&mut self, role: AuditRole) -> &mut Option<AuditEntry> {
        match role {
            AuditRole::CreatedBy => &mut self.created,
            AuditRole::UpdatedBy => &mut self.updated,
            AuditRole::LastViewedBy => &mut self.last_view,
            AuditRole::Owner => &mut self.owner,
        }
    }

    // --- Getters ---

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn kind(&self) -> Option<EntityKind> {
        self.kind
    }

    pub fn is_deleted(&self) -> Option<bool> {
        self.is_deleted
    }

    pub fn created(&self) -> Option<&AuditEntry> {
        self.created.as_ref()
    }

    pub fn updated(&self) -> Option<&AuditEntry> {
        self.updated.as_ref()
    }

    pub fn last_view(&self) -> Option<&AuditEntry> {
        self.last_view.as_ref()
    }

    pub fn owner(&self) -> Option<&AuditEntry> {
        self.owner.as_ref()
    }

    pub fn created_date(&self) -> Option<DateTime<Utc>> {
        self.created.as_ref().and_then(|entry| entry.date)
    }

    pub fn updated_date(&self) -> Option<DateTime<Utc>> {
        self.updated.as_ref().and_then(|entry| entry.date)
    }

    pub fn last_view_date(&self) -> Option<DateTime<Utc>> {
        self.last_view.as_ref().and_then(|entry| entry.date)
    }

    pub fn created_by_id(&self) -> Option<&str> {
        self.created.as_ref().and_then(|entry| entry.id.as_deref())
    }

    pub fn updated_by_id(&self) -> Option<&str> {
        self.updated.as_ref().and_then(|entry| entry.id.as_deref())
    }

    pub fn last_view_by_id(&self) -> Option<&str> {
        self.last_view.as_ref().and_then(|entry| entry.id.as_deref())
    }

    pub fn owner_id(&self) -> Option<&str> {
        self.owner.as_ref().and_then(|entry| entry.id.as_deref())
    }

    /// The CAS token, `0` when the record has none yet.
    pub fn cas(&self) -> u64 {
        self.cas.map_or(0, NonZeroU64::get)
    }

    pub fn cas_token(&self) -> Option<NonZeroU64> {
        self.cas
    }

    pub fn expiry_time(&self) -> Option<DateTime<Utc>> {
        self.expiry_time
    }

    /// The expiry duration, zero when unset.
    pub fn expiry(&self) -> Duration {
        self.expiry.unwrap_or_else(Duration::zero)
    }

    // --- Setters ---

    pub fn set_id(&mut self, value: Option<String>) {
        self.id = value;
    }

    pub fn set_name(&mut self, value: Option<String>) {
        self.name = value;
    }

    pub fn set_kind(&mut self, value: Option<EntityKind>) {
        self.kind = value;
    }

    pub fn set_is_deleted(&mut self, value: Option<bool>) {
        self.is_deleted = value;
    }

    /// Sets the CAS token; `0` clears it.
    pub fn set_cas(&mut self, value: u64) {
        self.cas = NonZeroU64::new(value);
    }

    /// Sets the expiry instant; the zero instant clears it.
    pub fn set_expiry_time(&mut self, value: DateTime<Utc>) {
        self.expiry_time = (!is_zero_instant(&value)).then_some(value);
    }

    /// Sets the expiry duration; a non-positive duration clears it.
    pub fn set_expiry(&mut self, value: Option<Duration>) {
        self.expiry = value.and_then(time::positive);
    }

    pub fn set_created_date(&mut self, value: Option<DateTime<Utc>>) {
        self.created.get_or_insert_with(AuditEntry::default).date = value;
    }

    pub fn set_updated_date(&mut self, value: Option<DateTime<Utc>>) {
        self.updated.get_or_insert_with(AuditEntry::default).date = value;
    }

    pub fn set_last_view_date(&mut self, value: Option<DateTime<Utc>>) {
        self.last_view.get_or_insert_with(AuditEntry::default).date = value;
    }

    pub fn set_created_by_id(&mut self, value: Option<String>) {
        self.created.get_or_insert_with(AuditEntry::default).id = value;
    }

    pub fn set_updated_by_id(&mut self, value: Option<String>) {
        self.updated.get_or_insert_with(AuditEntry::default).id = value;
    }

    pub fn set_last_view_by_id(&mut self, value: Option<String>) {
        self.last_view.get_or_insert_with(AuditEntry::default).id = value;
    }

    pub fn set_owner_id(&mut self, value: Option<String>) {
        self.owner.get_or_insert_with(AuditEntry::default).id = value;
    }

    pub fn set_created(&mut self, value: Option<AuditEntry>) {
        self.created = value;
    }

    pub fn set_updated(&mut self, value: Option<AuditEntry>) {
        self.updated = value;
    }

    pub fn set_last_view(&mut self, value: Option<AuditEntry>) {
        self.last_view = value;
    }

    pub fn set_owner(&mut self, value: Option<AuditEntry>) {
        self.owner = value;
    }
}
