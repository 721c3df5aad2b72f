#![allow(dead_code)]

pub mod factory;

use backend::infra::state::build_state;
use backend::{AppError, AppState, DbProfile};

/// Build an AppState backed by a fresh, fully-migrated test database
/// (in-memory SQLite unless TEST_DATABASE_URL points elsewhere).
pub async fn build_test_state() -> Result<AppState, AppError> {
    backend_test_support::test_logging::init();
    build_state().with_db(DbProfile::Test).build().await
}
