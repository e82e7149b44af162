//! Timestamp sentinels and the serde adapters that keep `Std` invariants
//! intact when records come off the wire.

use chrono::{DateTime, Duration, Utc};
use std::num::NonZeroU64;

/// Unix seconds of `0001-01-01T00:00:00Z`, the wire form of "no timestamp".
pub const ZERO_INSTANT_SECS: i64 = -62_135_596_800;

/// The zero instant, `0001-01-01T00:00:00Z`.
pub fn zero_instant() -> DateTime<Utc> {
    DateTime::from_timestamp(ZERO_INSTANT_SECS, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Returns true when `t` is exactly the zero instant.
pub fn is_zero_instant(t: &DateTime<Utc>) -> bool {
    t.timestamp() == ZERO_INSTANT_SECS && t.timestamp_subsec_nanos() == 0
}

/// Longest expiry the wire format can carry (`i64::MAX` nanoseconds).
pub fn max_expiry() -> Duration {
    Duration::nanoseconds(i64::MAX)
}

/// Keeps only strictly positive durations, clamped to [`max_expiry`].
pub(crate) fn positive(duration: Duration) -> Option<Duration> {
    (duration > Duration::zero()).then(|| duration.min(max_expiry()))
}

/// Serde module for `Option<Duration>` as a count of nanoseconds.
///
/// Non-positive values decode as absent.
pub(crate) mod expiry_nanos {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(expiry: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        expiry
            .map(|d| d.num_nanoseconds().unwrap_or(i64::MAX))
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let nanos = Option::<i64>::deserialize(deserializer)?;
        Ok(nanos.map(Duration::nanoseconds).and_then(super::positive))
    }
}

/// Decodes a CAS token, treating `0` as "no token yet".
pub(crate) fn deserialize_cas<'de, D>(deserializer: D) -> Result<Option<NonZeroU64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let cas = <Option<u64> as serde::Deserialize>::deserialize(deserializer)?;
    Ok(cas.and_then(NonZeroU64::new))
}

/// Decodes an expiry instant, treating the zero instant as absent.
pub(crate) fn deserialize_expiry_time<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let at = <Option<DateTime<Utc>> as serde::Deserialize>::deserialize(deserializer)?;
    Ok(at.filter(|t| !is_zero_instant(t)))
}
