//! Database connection and bootstrap.

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbOwner, DbProfile};
use crate::error::AppError;

/// Open a connection pool for `url`.
pub async fn connect_db(url: &str) -> Result<DatabaseConnection, AppError> {
    let mut opts = ConnectOptions::new(url.to_string());
    opts.sqlx_logging(false);
    if url.starts_with("sqlite::memory:") {
        // Every pooled connection to an in-memory SQLite database sees its
        // own empty database; the pool must hold exactly one connection.
        opts.max_connections(1).min_connections(1);
    }

    Database::connect(opts)
        .await
        .map_err(|e| AppError::db(format!("failed to connect: {e}")))
}

/// Single entrypoint used by state building: connect, then migrate to head.
pub async fn bootstrap_db(
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile, owner)?;
    let conn = connect_db(&url).await?;

    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::db(format!("migration failed: {e}")))?;

    info!(profile = ?profile, "database ready");
    Ok(conn)
}
