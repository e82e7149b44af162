//! # Observability & Tracing
//!
//! Structured logging for record actors and the clients that talk to them.
//!
//! The [`setup_tracing`] function installs a compact `tracing-subscriber`
//! formatter that hides the module path (`with_target(false)`). Actor logs
//! carry an `entity_type` field instead, so lines from different actors stay
//! distinguishable.
//!
//! ## Levels
//!
//! - `info`: actor start and shutdown, successful create/update/delete
//! - `warn`: rejected requests (relation failures, CAS mismatches, validation)
//! - `debug`: full payloads at request entry, relation-consistency checks
//!
//! The lifecycle helpers on [`Std`](crate::Std) never log errors themselves;
//! they return them and leave reporting to the caller.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=entity_framework=debug cargo run
//! ```
//!
//! ```text
//! INFO Actor started entity_type="user"
//! INFO Created entity_type="user" id="5f0c..." size=1
//! WARN Update failed entity_type="contact" id="9a1e..." error=CAS mismatch ...
//! ```

/// Initializes the global subscriber, filtered by `RUST_LOG`.
///
/// Panics if a global subscriber is already installed, so call it once from
/// `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
