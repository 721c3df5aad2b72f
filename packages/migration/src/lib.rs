pub use sea_orm_migration::prelude::*;
pub use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseConnection};

mod m20260702_000001_create_players; // keep filename + module name in sync

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20260702_000001_create_players::Migration)]
    }
}

#[derive(Debug)]
pub enum MigrationCommand {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

/// Run a migration command against an already-open connection.
/// Used by both the CLI and the backend bootstrap.
pub async fn migrate(db: &DatabaseConnection, command: MigrationCommand) -> Result<(), DbErr> {
    let applied_before = applied_count(db).await;
    tracing::info!(
        applied = applied_before,
        defined = Migrator::migrations().len(),
        "running migration command {command:?}"
    );

    let result = match command {
        MigrationCommand::Up => Migrator::up(db, None).await,
        MigrationCommand::Down => Migrator::down(db, None).await,
        MigrationCommand::Fresh => Migrator::fresh(db).await,
        MigrationCommand::Reset => Migrator::reset(db).await,
        MigrationCommand::Refresh => Migrator::refresh(db).await,
        MigrationCommand::Status => Migrator::status(db).await,
    };

    match result {
        Ok(()) => {
            if !matches!(command, MigrationCommand::Status) {
                tracing::info!(applied = applied_count(db).await, "{command:?} finished");
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "{command:?} failed");
            Err(e)
        }
    }
}

// The bookkeeping table may not exist yet on a fresh database.
async fn applied_count(db: &DatabaseConnection) -> usize {
    Migrator::get_applied_migrations(db)
        .await
        .map(|migrations| migrations.len())
        .unwrap_or(0)
}
