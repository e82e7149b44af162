//! Bulk and search result carriers.
//!
//! Plain data-transfer shapes wrapped around entity state by the
//! orchestration layer. Absent fields are omitted on the wire, and `error` is
//! carried as its display string.

use crate::time::expiry_nanos;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One item of a bulk operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkEntity<T> {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub cas: u64,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "expiry_nanos"
    )]
    pub expiry: Option<Duration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> BulkEntity<T> {
    pub fn found(id: impl Into<String>, data: T, cas: u64, expiry: Option<Duration>) -> Self {
        Self {
            id: id.into(),
            data: Some(data),
            cas,
            expiry,
            error: None,
        }
    }

    pub fn failed(id: impl Into<String>, error: impl Display) -> Self {
        Self {
            id: id.into(),
            data: None,
            cas: 0,
            expiry: None,
            error: Some(error.to_string()),
        }
    }
}

/// One hit of a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEntity<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "is_zero_score")]
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> SearchEntity<T> {
    pub fn hit(score: f64, data: T) -> Self {
        Self {
            error: None,
            score,
            data: Some(data),
        }
    }
}

fn is_zero(value: &u64) -> bool {
    *value == 0
}

fn is_zero_score(score: &f64) -> bool {
    *score == 0.0
}
