use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::error::StoreError;
use crate::infra::db_errors::classify_db_err;

/// Factory for unit-of-work sessions bound to one shared engine.
///
/// Each [`session`](Self::session) call begins a fresh transaction on a
/// connection checked out from the engine's pool. Nothing is committed
/// implicitly: every write must be committed through the session, and a
/// session discarded without commit rolls back, leaving no trace visible to
/// other sessions. Sessions are meant to be used by a single logical task and
/// scoped around one operation.
#[derive(Clone)]
pub struct SessionFactory {
    engine: DatabaseConnection,
}

impl SessionFactory {
    pub fn new(engine: DatabaseConnection) -> Self {
        Self { engine }
    }

    /// The underlying pool-backed engine handle.
    pub fn engine(&self) -> &DatabaseConnection {
        &self.engine
    }

    /// Begin a new unit of work.
    pub async fn session(&self) -> Result<DatabaseTransaction, StoreError> {
        let txn = self.engine.begin().await?;
        Ok(txn)
    }

    /// Execute a function within a fresh session:
    /// commit on Ok, roll back on Err.
    pub async fn with_session<R, F>(&self, f: F) -> Result<R, StoreError>
    where
        F: for<'a> FnOnce(
            &'a DatabaseTransaction,
        ) -> std::pin::Pin<
            Box<dyn std::future::Future<Output = Result<R, StoreError>> + 'a>,
        >,
    {
        let txn = self.session().await?;
        let out = f(&txn).await;

        match out {
            Ok(val) => {
                // Constraint checks deferred to commit surface here
                txn.commit().await.map_err(classify_db_err)?;
                Ok(val)
            }
            Err(err) => {
                // Best-effort rollback; preserve original error
                let _ = txn.rollback().await;
                Err(err)
            }
        }
    }
}
