//! Core domain logic for the staffing registry.
//!
//! Workers, initiatives and worker-owned locations are persisted in SQLite
//! through per-entity gateways. Workers and initiatives are linked
//! many-to-many through the assignment engine in `service::assignment`.

pub mod config;
pub mod db;
pub mod error_codes;
pub mod logging;
pub mod mapper;
pub mod model;
pub mod record;
pub mod repo;
pub mod service;
pub mod validation;

pub use config::{ConfigError, StoreConfig};
pub use db::{open_db, open_db_in_memory, Connection, DbError, DbResult};
pub use error_codes::ErrorCode;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::initiative::{Initiative, InitiativeId};
pub use model::location::{Location, LocationId};
pub use model::worker::{Worker, WorkerId};
pub use model::{is_persisted_id, EntityId, UNSAVED_ID};
pub use record::{InitiativeRecord, LocationRecord, WorkerRecord};
pub use repo::initiative_repo::{InitiativeRepository, SqliteInitiativeRepository};
pub use repo::location_repo::{LocationRepository, SqliteLocationRepository};
pub use repo::worker_repo::{SqliteWorkerRepository, WorkerRepository};
pub use repo::{GatewayResult, PersistenceFailure};
pub use service::assignment::{LinkError, LinkOutcome};
pub use service::initiative_service::InitiativeService;
pub use service::location_service::LocationService;
pub use service::worker_service::WorkerService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
