//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return raw `sea_orm::DbErr`; the repos layer converts them into
//! `crate::errors::domain::DomainError` here, and higher layers then map
//! `DomainError` to `AppError` via `From`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind};
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Translate a `DbErr` into a `DomainError` with a stable, driver-agnostic
/// detail string.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                crate::errors::domain::NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            error!(trace_id = %trace_id, error = %msg, "database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    // Constraint violations surface differently per driver; sniff both the
    // Postgres SQLSTATE and the SQLite message text.
    if mentions_sqlstate(&msg, "23505") || msg.contains("UNIQUE constraint failed") {
        warn!(trace_id = %trace_id, error = %msg, "unique constraint violated");
        return DomainError::conflict(ConflictKind::UniqueViolation, "Unique constraint violated");
    }
    if mentions_sqlstate(&msg, "23503") || msg.contains("FOREIGN KEY constraint failed") {
        warn!(trace_id = %trace_id, error = %msg, "foreign key constraint violated");
        return DomainError::conflict(
            ConflictKind::FkViolation,
            "Foreign key constraint violated",
        );
    }
    if mentions_sqlstate(&msg, "23514") || msg.contains("CHECK constraint failed") {
        warn!(trace_id = %trace_id, error = %msg, "check constraint violated");
        return DomainError::validation("Check constraint violated");
    }

    error!(trace_id = %trace_id, error = %msg, "database error");
    DomainError::infra(InfraErrorKind::Other("DbError".into()), "Database error")
}
