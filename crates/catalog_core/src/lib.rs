//! Core data access for the product catalog.
//! This crate owns product persistence and its use-case entry points.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, StoreError, StoreResult};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::product::{Product, ProductId};
pub use repo::product_repo::{ProductRepository, SqliteProductRepository};
pub use service::product_service::{FailureSink, LogFailureSink, ProductService};

/// Minimal health-check API for wiring probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
