//! SeaORM -> StoreError translation helpers.
//!
//! Data-access code converts `sea_orm::DbErr` into `StoreError` here. The
//! store's own error is kept verbatim as the source; classification only
//! decides which variant carries it.

use sea_orm::DbErr;
use tracing::warn;

use crate::error::StoreError;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Classify a `DbErr` raised by a read or write.
///
/// Uniqueness, nullability and check violations become
/// `StoreError::ConstraintViolation`; anything else passes through as
/// `StoreError::Db`.
pub fn classify_db_err(e: DbErr) -> StoreError {
    let error_msg = e.to_string();

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(error = %error_msg, "unique constraint violation");
        return StoreError::ConstraintViolation { source: e };
    }

    if mentions_sqlstate(&error_msg, "23502")
        || error_msg.contains("NOT NULL constraint failed")
        || error_msg.contains("null value in column")
    {
        warn!(error = %error_msg, "not-null constraint violation");
        return StoreError::ConstraintViolation { source: e };
    }

    if mentions_sqlstate(&error_msg, "23514") || error_msg.contains("CHECK constraint failed") {
        warn!(error = %error_msg, "check constraint violation");
        return StoreError::ConstraintViolation { source: e };
    }

    StoreError::Db { source: e }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;

    use super::classify_db_err;

    #[test]
    fn classifies_postgres_unique_violation() {
        let e = DbErr::Custom(
            "error returned from database: duplicate key value violates unique constraint \"ux_books_isbn\""
                .to_string(),
        );
        assert!(classify_db_err(e).is_constraint_violation());
    }

    #[test]
    fn classifies_sqlite_unique_violation() {
        let e = DbErr::Custom("UNIQUE constraint failed: books.isbn".to_string());
        assert!(classify_db_err(e).is_constraint_violation());
    }

    #[test]
    fn classifies_sqlstate_codes() {
        for code in ["23505", "23502", "23514"] {
            let e = DbErr::Custom(format!("error SQLSTATE({code})"));
            assert!(classify_db_err(e).is_constraint_violation(), "code {code}");
        }
    }

    #[test]
    fn classifies_not_null_violation() {
        let e = DbErr::Custom("NOT NULL constraint failed: books.title".to_string());
        assert!(classify_db_err(e).is_constraint_violation());

        let e = DbErr::Custom(
            "null value in column \"title\" of relation \"books\" violates not-null constraint"
                .to_string(),
        );
        assert!(classify_db_err(e).is_constraint_violation());
    }

    #[test]
    fn passes_through_other_errors() {
        let e = DbErr::Custom("connection reset by peer".to_string());
        assert!(!classify_db_err(e).is_constraint_violation());
    }
}
