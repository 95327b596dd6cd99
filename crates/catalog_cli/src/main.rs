//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire connection, repository and service the way an outer layer would.
//! - Exercise list/create/get-by-id against a file or in-memory database.
//!
//! Usage: `catalog_cli [db_path]`. Set `CATALOG_LOG_DIR` to an absolute path
//! to also write rolling log files.

use catalog_core::{
    core_version, default_log_level, init_logging, open_db, open_db_in_memory, ping, Product,
    ProductService, SqliteProductRepository, StoreResult,
};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "CATALOG_LOG_DIR";

fn main() -> ExitCode {
    println!("catalog_core ping={}", ping());
    println!("catalog_core version={}", core_version());

    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        if let Err(err) = init_logging(default_log_level().as_str(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    match run(std::env::args().nth(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("store error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(db_path: Option<String>) -> StoreResult<()> {
    let conn = match db_path.as_deref() {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };
    let service = ProductService::new(SqliteProductRepository::try_new(&conn)?);

    let created = service.create_product(Product::new("Widget", 9.99))?;
    println!("created={created:?}");

    if let Some(id) = created.id {
        match service.get_product_by_id(id)? {
            Some(found) => println!("found={found:?}"),
            None => println!("found=none id={id}"),
        }
    }

    for product in service.get_products()? {
        println!("listed={product:?}");
    }

    Ok(())
}
