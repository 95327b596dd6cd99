//! Product use-case service.
//!
//! # Responsibility
//! - Provide the entry points outer layers (HTTP, CLI) call.
//! - Delegate persistence to repository implementations.
//! - Record store failures to an injected sink before forwarding them.
//!
//! # Invariants
//! - Store errors are forwarded unchanged; nothing is retried or recovered.
//! - Absence from `get_product_by_id` is never turned into an error.
//! - Sinks are only called on failure paths.

use crate::db::{StoreError, StoreResult};
use crate::model::product::{Product, ProductId};
use crate::repo::product_repo::ProductRepository;
use log::error;

/// Observability sink receiving human-readable failure messages.
pub trait FailureSink {
    fn record_failure(&self, message: &str);
}

impl<T: FailureSink + ?Sized> FailureSink for &T {
    fn record_failure(&self, message: &str) {
        (**self).record_failure(message);
    }
}

/// Default sink forwarding failures to the `log` facade at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFailureSink;

impl FailureSink for LogFailureSink {
    fn record_failure(&self, message: &str) {
        error!("{message}");
    }
}

/// Use-case service wrapper for product operations.
pub struct ProductService<R: ProductRepository, S: FailureSink = LogFailureSink> {
    repo: R,
    sink: S,
}

impl<R: ProductRepository> ProductService<R> {
    /// Creates a service that logs failures through `LogFailureSink`.
    pub fn new(repo: R) -> Self {
        Self::with_sink(repo, LogFailureSink)
    }
}

impl<R: ProductRepository, S: FailureSink> ProductService<R, S> {
    /// Creates a service recording failures to `sink`.
    pub fn with_sink(repo: R, sink: S) -> Self {
        Self { repo, sink }
    }

    /// Lists all products.
    pub fn get_products(&self) -> StoreResult<Vec<Product>> {
        self.repo
            .list_products()
            .inspect_err(|err| self.record("product_list", None, err))
    }

    /// Persists `product` and returns it with the store-assigned id.
    pub fn create_product(&self, mut product: Product) -> StoreResult<Product> {
        let id = self
            .repo
            .create_product(&product)
            .inspect_err(|err| self.record("product_create", None, err))?;

        product.id = Some(id);
        Ok(product)
    }

    /// Gets one product by id.
    ///
    /// `Ok(None)` means no product has this id.
    pub fn get_product_by_id(&self, id: ProductId) -> StoreResult<Option<Product>> {
        self.repo
            .get_product_by_id(id)
            .inspect_err(|err| self.record("product_get", Some(id), err))
    }

    fn record(&self, event: &str, id: Option<ProductId>, err: &StoreError) {
        let message = match id {
            Some(id) => {
                format!("event={event} module=service status=error product_id={id} error={err}")
            }
            None => format!("event={event} module=service status=error error={err}"),
        };
        self.sink.record_failure(&message);
    }
}
