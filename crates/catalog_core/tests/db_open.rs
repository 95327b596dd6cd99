use catalog_core::{open_db, open_db_in_memory, Product, ProductRepository, SqliteProductRepository};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_product_table() {
    let conn = open_db_in_memory().unwrap();

    assert_table_exists(&conn, "product");
    assert!(SqliteProductRepository::try_new(&conn).is_ok());
}

#[test]
fn reopening_file_database_keeps_rows_and_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");

    let conn_first = open_db(&path).unwrap();
    let first_id = SqliteProductRepository::new(&conn_first)
        .create_product(&Product::new("Widget", 9.99))
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    let repo = SqliteProductRepository::try_new(&conn_second).unwrap();
    assert_eq!(
        repo.list_products().unwrap(),
        vec![Product::with_id(first_id, "Widget", 9.99)]
    );

    let second_id = repo.create_product(&Product::new("Gadget", 2.0)).unwrap();
    assert!(second_id > first_id);
}

#[test]
fn opening_existing_product_table_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("existing.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE product (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            product_name TEXT NOT NULL,
            price NUMERIC NOT NULL
        );
        INSERT INTO product (product_name, price) VALUES ('Legacy', 4.5);",
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    let repo = SqliteProductRepository::new(&conn);
    assert_eq!(
        repo.get_product_by_id(1).unwrap(),
        Some(Product::with_id(1, "Legacy", 4.5))
    );
}

#[test]
fn opening_a_directory_returns_error() {
    let dir = tempfile::tempdir().unwrap();

    assert!(open_db(dir.path()).is_err());
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
