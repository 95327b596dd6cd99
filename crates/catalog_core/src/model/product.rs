//! Product domain model.
//!
//! # Responsibility
//! - Define the single entity persisted by catalog core.
//!
//! # Invariants
//! - `id` is assigned exactly once, by the store, at creation time.
//! - `price` is passed through unvalidated.
//! - Products are never updated or deleted through core.

use serde::{Deserialize, Serialize};

/// Store-assigned product identifier.
pub type ProductId = i64;

/// Catalog product record.
///
/// Instances are plain values: reads always return fresh copies and nothing
/// holds a reference back to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// `None` until the product has been persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    pub name: String,
    pub price: f64,
}

impl Product {
    /// Creates a product that has not been persisted yet.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
        }
    }

    /// Creates a product with a known store identity.
    ///
    /// Used by read paths mapping persisted rows.
    pub fn with_id(id: ProductId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            price,
        }
    }

    /// Returns whether the store has assigned an id to this product.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
