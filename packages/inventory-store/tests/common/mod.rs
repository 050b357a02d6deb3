//! Shared helpers for integration tests.

use inventory_store::repos::books::NewBook;
use inventory_store::{connect_store, init_storage};
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

/// Open a file-backed SQLite store in a fresh temp dir and create its tables.
///
/// Returns the temp dir alongside the engine; keep it alive for as long as
/// the connection is used.
pub async fn open_test_store() -> (TempDir, DatabaseConnection) {
    store_test_support::test_logging::init();

    let dir = TempDir::new().expect("create temp dir");
    let url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("books.db").display()
    );

    let conn = connect_store(&url).await.expect("connect to test store");
    init_storage(&conn).await.expect("initialize storage");

    (dir, conn)
}

/// A fully specified book with the given ISBN.
pub fn new_book(isbn: &str) -> NewBook {
    NewBook {
        title: "One Hundred Years of Solitude".to_string(),
        author: "Gabriel García Márquez".to_string(),
        publisher: Some("Harper".to_string()),
        isbn: isbn.to_string(),
        stock_quantity: Some(4),
        price: 14.99,
        location: "A-07".to_string(),
    }
}
