use std::env;

use crate::error::AppError;

/// Database profile enum for different environments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProfile {
    /// Production database profile (Postgres, assembled from env vars)
    Prod,
    /// Test database profile - in-memory SQLite unless TEST_DATABASE_URL is set
    Test,
}

/// Database owner enum for different access levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOwner {
    /// Application-level access (limited permissions)
    App,
    /// Owner-level access (full permissions for migrations)
    Owner,
}

/// Builds a database URL from environment variables based on profile and owner.
pub fn db_url(profile: DbProfile, owner: DbOwner) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => {
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = must_var("PROD_DB")?;
            let (username, password) = credentials(owner)?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbProfile::Test => {
            let url = env::var("TEST_DATABASE_URL")
                .unwrap_or_else(|_| "sqlite::memory:".to_string());
            if url.starts_with("postgres") && !has_test_db_name(&url) {
                return Err(AppError::config(format!(
                    "Test profile requires a database name ending with '_test', got: '{url}'"
                )));
            }
            Ok(url)
        }
    }
}

/// Get database credentials based on owner
fn credentials(owner: DbOwner) -> Result<(String, String), AppError> {
    match owner {
        DbOwner::App => {
            let username = must_var("APP_DB_USER")?;
            let password = must_var("APP_DB_PASSWORD")?;
            Ok((username, password))
        }
        DbOwner::Owner => {
            let username = must_var("ROSTER_OWNER_USER")?;
            let password = must_var("ROSTER_OWNER_PASSWORD")?;
            Ok((username, password))
        }
    }
}

/// Enforce the safety rule that a Postgres test database is named `*_test`.
fn has_test_db_name(url: &str) -> bool {
    url.rsplit('/')
        .next()
        .map(|name| name.split('?').next().unwrap_or(name).ends_with("_test"))
        .unwrap_or(false)
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
