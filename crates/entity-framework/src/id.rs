//! Record identifier generation.

use uuid::{Uuid, Version};

/// Generates a random UUID v4 in its hyphenated lowercase form.
///
/// Never fails: running out of OS randomness is a panic inside `uuid`,
/// not something callers can recover from.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Returns true when `id` parses as a UUID v4.
pub fn is_well_formed(id: &str) -> bool {
    Uuid::parse_str(id)
        .map(|uuid| uuid.get_version() == Some(Version::Random))
        .unwrap_or(false)
}
