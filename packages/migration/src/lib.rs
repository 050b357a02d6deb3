pub use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{DatabaseBackend, Statement};
pub use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseConnection};

mod m20260115_000001_create_books; // keep filename + module name in sync

/// Fixed namespace the inventory tables live under.
///
/// Applies to Postgres; SQLite has no schema support, so there the tables
/// are stored unqualified.
pub const STORE_SCHEMA: &str = "inventory";

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20260115_000001_create_books::Migration)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MigrationCommand {
    Up,
    Down,
    Status,
}

/// Run a migration command against an already-connected database.
/// Used by storage initialization and tests alike.
pub async fn migrate(db: &DatabaseConnection, command: MigrationCommand) -> Result<(), DbErr> {
    let before = storage_diagnostics(db).await?;

    tracing::info!(
        command = ?command,
        backend = %before.backend,
        database = %before.name,
        defined = before.defined,
        applied = before.applied,
        "migrate=start"
    );

    let result = match command {
        MigrationCommand::Up => Migrator::up(db, None).await,
        MigrationCommand::Down => Migrator::down(db, None).await,
        MigrationCommand::Status => Migrator::status(db).await,
    };

    match result {
        Ok(()) => {
            if !matches!(command, MigrationCommand::Status) {
                let after = storage_diagnostics(db).await?;
                tracing::info!(
                    defined = after.defined,
                    applied = after.applied,
                    "migrate=done"
                );
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(command = ?command, error = %e, "migrate=failed");
            Err(e)
        }
    }
}

#[derive(Debug)]
struct StorageDiagnostics {
    backend: String,
    name: String,
    applied: usize,
    defined: usize,
}

async fn storage_diagnostics(db: &DatabaseConnection) -> Result<StorageDiagnostics, DbErr> {
    let backend = format!("{:?}", db.get_database_backend());

    let name = match db.get_database_backend() {
        DatabaseBackend::Postgres => {
            let stmt = Statement::from_string(
                db.get_database_backend(),
                String::from("select current_database() as name"),
            );
            match db.query_one(stmt).await? {
                Some(row) => row.try_get("", "name")?,
                None => "<unknown>".to_string(),
            }
        }
        DatabaseBackend::Sqlite => {
            let stmt = Statement::from_string(
                db.get_database_backend(),
                String::from("SELECT file FROM pragma_database_list WHERE name = 'main'"),
            );
            match db.query_one(stmt).await? {
                Some(row) => match row.try_get::<String>("", "file") {
                    Ok(file) if file.is_empty() => ":memory:".to_string(),
                    Ok(file) => file,
                    Err(_) => "<unknown>".to_string(),
                },
                None => "<unknown>".to_string(),
            }
        }
        _ => "<unsupported>".to_string(),
    };

    let applied = count_applied_migrations(db).await.unwrap_or(0);
    let defined = Migrator::migrations().len();

    Ok(StorageDiagnostics {
        backend,
        name,
        applied,
        defined,
    })
}

/// Count the number of migrations that have been applied to the database.
/// Returns 0 if the migration bookkeeping table doesn't exist yet.
pub async fn count_applied_migrations(db: &DatabaseConnection) -> Result<usize, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.len()),
        Err(DbErr::Exec(_)) => Ok(0), // bookkeeping table doesn't exist yet
        Err(e) => Err(e),
    }
}
