//! Centralized error handling.
//!
//! Provides a unified error type for the entire application. Store-level
//! failures are classified on conversion so callers can match on the kind
//! (not found, uniqueness violation) without inspecting driver errors.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication
    #[error("Invalid credentials")]
    InvalidCredentials,

    // Resource errors
    #[error("{0}")]
    NotFound(String),

    #[error("{0} already exists")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    // Programmer errors
    #[error("Precondition violated: {0}")]
    Precondition(String),

    // Connection lifecycle
    #[error("Database is already connected")]
    AlreadyConnected,

    #[error("Failed to connect to database: {0}")]
    ConnectionFailure(String),

    // External service errors
    #[error("Database error")]
    Database(DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Stable error code for client-facing output
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Precondition(_) => "PRECONDITION_FAILED",
            AppError::AlreadyConnected => "ALREADY_CONNECTED",
            AppError::ConnectionFailure(_) => "CONNECTION_FAILURE",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the caller caused the error (as opposed to the process or the store)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidCredentials
                | AppError::NotFound(_)
                | AppError::Conflict(_)
                | AppError::Validation(_)
        )
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
            return AppError::Conflict(conflicting_field(&detail).to_string());
        }

        match err {
            DbErr::RecordNotFound(msg) => AppError::NotFound(msg),
            DbErr::RecordNotUpdated => AppError::NotFound("record no longer exists".to_string()),
            DbErr::Conn(e) => AppError::ConnectionFailure(e.to_string()),
            other => AppError::Database(other),
        }
    }
}

/// Best-effort name of the column behind a unique constraint message.
///
/// Postgres reports `users_email_key`, SQLite reports `users.email`.
fn conflicting_field(detail: &str) -> &'static str {
    let detail = detail.to_ascii_lowercase();
    if detail.contains("email") {
        "Email"
    } else if detail.contains("username") {
        "Username"
    } else {
        "Record"
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found<F>(self, describe: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found<F>(self, describe: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| AppError::NotFound(describe()))
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn precondition(msg: impl Into<String>) -> Self {
        AppError::Precondition(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflicting_field() {
        assert_eq!(
            conflicting_field("duplicate key value violates unique constraint \"users_email_key\""),
            "Email"
        );
        assert_eq!(conflicting_field("UNIQUE constraint failed: users.username"), "Username");
        assert_eq!(conflicting_field("UNIQUE constraint failed: tags.name"), "Record");
    }

    #[test]
    fn test_record_not_updated_is_not_found() {
        let err = AppError::from(DbErr::RecordNotUpdated);
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn test_other_db_errors_are_opaque() {
        let err = AppError::from(DbErr::Custom("boom".to_string()));
        assert!(matches!(err, AppError::Database(_)));
        assert!(!err.is_client_error());
        assert_eq!(err.user_message(), "A database error occurred");
    }

    #[test]
    fn test_option_ext() {
        let missing: Option<u8> = None;
        let err = missing
            .ok_or_not_found(|| "user with username ghost does not exist".to_string())
            .unwrap_err();
        assert_eq!(err.to_string(), "user with username ghost does not exist");
        assert!(err.is_client_error());

        assert_eq!(Some(7).ok_or_not_found(String::new).unwrap(), 7);
    }

    #[test]
    fn test_conflict_message() {
        assert_eq!(AppError::conflict("Email").to_string(), "Email already exists");
    }
}
