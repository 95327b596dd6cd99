//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository APIs model "no row" as `Option::None`, separate from
//!   `StoreError` transport failures.

pub mod product_repo;
