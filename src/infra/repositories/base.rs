//! Base repository capability shared by all repositories.
//!
//! A repository holds zero or one client handle. Using a repository that was
//! built without one is a programmer error and surfaces as
//! `AppError::Precondition` rather than a recoverable store failure.

use sea_orm::DatabaseConnection;

use crate::errors::{AppError, AppResult};

const MISSING_CONNECTION: &str =
    "attempted to retrieve connection from a connection-less repository";

/// Holder of an optional database client handle
#[derive(Debug, Clone, Default)]
pub struct BaseRepository {
    conn: Option<DatabaseConnection>,
}

impl BaseRepository {
    /// Create a repository base, with or without a connection
    pub fn new(conn: impl Into<Option<DatabaseConnection>>) -> Self {
        Self { conn: conn.into() }
    }

    /// Borrow the connection.
    ///
    /// # Errors
    /// `AppError::Precondition` when the repository has no connection.
    pub fn connection(&self) -> AppResult<&DatabaseConnection> {
        self.conn.as_ref().ok_or_else(|| {
            tracing::error!("{}", MISSING_CONNECTION);
            AppError::precondition(MISSING_CONNECTION)
        })
    }
}
