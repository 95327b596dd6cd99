//! Catalog domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by core persistence and services.
//!
//! # Invariants
//! - The store is the single source of truth; in-memory values are copies.

pub mod product;
