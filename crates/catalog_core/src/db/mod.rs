//! SQLite storage bootstrap and store error surface.
//!
//! # Responsibility
//! - Open and configure SQLite connections for catalog core.
//! - Make sure the `product` table exists before data access.
//! - Define the single error kind surfaced by store interactions.
//!
//! # Invariants
//! - Schema bootstrap is idempotent and never versioned.
//! - Store errors are surfaced verbatim; "no row" is not an error.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;

pub use open::{open_db, open_db_in_memory};

pub(crate) const SCHEMA_SQL: &str = include_str!("schema.sql");

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure originating from the underlying database interaction.
#[derive(Debug)]
pub enum StoreError {
    /// Prepare, execute, connectivity or row-mapping failure.
    Sqlite(rusqlite::Error),
    /// Connection does not expose a table the repository depends on.
    MissingRequiredTable(&'static str),
    /// Connection exposes the table but one of the mapped columns is absent.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl StoreError {
    /// Returns whether the store rejected a write because of a constraint.
    ///
    /// The error kind stays the same; this only inspects the SQLite code.
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            Self::Sqlite(err) => {
                err.sqlite_error_code() == Some(rusqlite::ErrorCode::ConstraintViolation)
            }
            _ => false,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::MissingRequiredTable(_) | Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
