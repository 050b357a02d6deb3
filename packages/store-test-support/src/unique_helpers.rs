//! Test helpers for generating unique test data
//!
//! ULID-backed so parallel tests and repeated runs against a shared database
//! never collide.

use ulid::Ulid;

/// Generate a unique string with the given prefix, e.g. `title-01J8…`.
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique ISBN-like digit string.
///
/// Shaped as a 13-digit `978…` number so it fits the books.isbn
/// varchar(20) column.
pub fn unique_isbn() -> String {
    let digits = Ulid::new().0 % 10_000_000_000;
    format!("978{digits:010}")
}
