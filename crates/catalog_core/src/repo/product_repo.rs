//! Product repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Translate list/create/get-by-id into parameterized SQL.
//! - Map result rows back into `Product` values.
//!
//! # Invariants
//! - Statements are always parameterized, never string-built from input.
//! - A missing row is `Ok(None)`, never a `StoreError`.
//! - Listing yields all rows or an error, never a partial result.
//! - Statements and cursors are released on every exit path (scoped drop).

use crate::db::{StoreError, StoreResult};
use crate::model::product::{Product, ProductId};
use rusqlite::{params, Connection, Row};

const PRODUCT_TABLE: &str = "product";
const PRODUCT_COLUMNS: [&str; 3] = ["id", "product_name", "price"];

const LIST_PRODUCTS_SQL: &str = "SELECT id, product_name, price FROM product";
const INSERT_PRODUCT_SQL: &str =
    "INSERT INTO product (product_name, price) VALUES (?1, ?2) RETURNING id";
const GET_PRODUCT_SQL: &str = "SELECT id, product_name, price FROM product WHERE id = ?1";

/// Repository interface for product persistence.
pub trait ProductRepository {
    /// Returns every stored product in store-defined order.
    fn list_products(&self) -> StoreResult<Vec<Product>>;
    /// Persists `product` and returns the store-assigned id.
    ///
    /// Any `id` already set on `product` is ignored.
    fn create_product(&self, product: &Product) -> StoreResult<ProductId>;
    /// Returns the product with `id`, or `None` when no row matches.
    fn get_product_by_id(&self, id: ProductId) -> StoreResult<Option<Product>>;
}

/// SQLite-backed product repository.
pub struct SqliteProductRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProductRepository<'conn> {
    /// Wraps a connection without inspecting its schema.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Wraps a connection after checking the `product` table shape.
    ///
    /// # Errors
    /// - `MissingRequiredTable` when `product` does not exist.
    /// - `MissingRequiredColumn` when a mapped column is absent.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        ensure_product_schema(conn)?;
        Ok(Self { conn })
    }
}

impl ProductRepository for SqliteProductRepository<'_> {
    fn list_products(&self) -> StoreResult<Vec<Product>> {
        let mut stmt = self.conn.prepare_cached(LIST_PRODUCTS_SQL)?;
        let mut rows = stmt.query([])?;
        let mut products = Vec::new();

        while let Some(row) = rows.next()? {
            products.push(parse_product_row(row)?);
        }

        Ok(products)
    }

    fn create_product(&self, product: &Product) -> StoreResult<ProductId> {
        let mut stmt = self.conn.prepare_cached(INSERT_PRODUCT_SQL)?;
        let id = stmt.query_row(params![product.name.as_str(), product.price], |row| {
            row.get::<_, ProductId>(0)
        })?;

        Ok(id)
    }

    fn get_product_by_id(&self, id: ProductId) -> StoreResult<Option<Product>> {
        let mut stmt = self.conn.prepare_cached(GET_PRODUCT_SQL)?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_product_row(row)?));
        }

        Ok(None)
    }
}

fn parse_product_row(row: &Row<'_>) -> StoreResult<Product> {
    Ok(Product::with_id(
        row.get::<_, ProductId>(0)?,
        row.get::<_, String>(1)?,
        row.get::<_, f64>(2)?,
    ))
}

fn ensure_product_schema(conn: &Connection) -> StoreResult<()> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1)")?;
    let columns = stmt
        .query_map([PRODUCT_TABLE], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    if columns.is_empty() {
        return Err(StoreError::MissingRequiredTable(PRODUCT_TABLE));
    }

    for column in PRODUCT_COLUMNS {
        if !columns.iter().any(|existing| existing == column) {
            return Err(StoreError::MissingRequiredColumn {
                table: PRODUCT_TABLE,
                column,
            });
        }
    }

    Ok(())
}
