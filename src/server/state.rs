//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup, after the database is connected and
//! migrated, and cloned into each handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::util::time_slot::SlotNormalizer;

/// Shared resources for request handlers.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a pool whose clones share
/// connections, and `SlotNormalizer` is `Copy`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for survey storage.
    pub db: DatabaseConnection,

    /// Reference offset and conversion policy used for slot aggregation.
    pub normalizer: SlotNormalizer,
}

impl AppState {
    pub fn new(db: DatabaseConnection, normalizer: SlotNormalizer) -> Self {
        Self { db, normalizer }
    }
}
