use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Configuration error: {detail}")]
    Configuration { detail: String },
    #[error("Storage initialization error: {detail}")]
    StorageInitialization { detail: String },
    #[error("Constraint violation: {source}")]
    ConstraintViolation {
        #[source]
        source: DbErr,
    },
    #[error("Database error: {source}")]
    Db {
        #[from]
        source: DbErr,
    },
}

impl StoreError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Configuration {
            detail: detail.into(),
        }
    }

    pub fn storage_init(detail: impl Into<String>) -> Self {
        Self::StorageInitialization {
            detail: detail.into(),
        }
    }

    /// True when a write was rejected for breaking a declared constraint
    /// (uniqueness, non-null, check).
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }
}
