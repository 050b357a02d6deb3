#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod infra;
pub mod repos;

// Re-exports for public API
pub use config::db::{db_url, validate_test_database_url, DbProfile};
pub use db::txn::SessionFactory;
pub use error::StoreError;
pub use infra::db::{close_store, connect_store, init_storage, sanitize_db_url};
