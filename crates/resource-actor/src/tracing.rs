//! # Observability & Tracing
//!
//! Every actor logs through `tracing` with structured fields: `entity_type` names the
//! resource, `id` the entity, `size` the store size after a mutation.
//!
//! ```text
//! INFO Actor started entity_type="User"
//! INFO Created entity_type="User" id=1 size=1
//! WARN Not found entity_type="User" id=99
//! ```
//!
//! Run with `RUST_LOG=debug` to also see every request payload (`Create params=...`).

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (e.g. `"info"`) is used.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type already says where an event comes from
        .compact()
        .init();
}
