//! Database connection lifecycle.
//!
//! Owns the raw connection pool and the ORM client. Both are opened by
//! [`Database::connect`] and released by [`Database::disconnect`], pool first.
//! The value is created by the process entrypoint and passed down explicitly.

use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection};
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::Settings;
use crate::errors::{AppError, AppResult};

/// Pool + client pair for one process lifetime
#[derive(Debug, Default)]
pub struct Database {
    pool: Option<PgPool>,
    client: Option<DatabaseConnection>,
}

impl Database {
    /// Create an unconnected handle
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the pool and the client against `settings.database_url()`.
    ///
    /// On failure, any handle already opened is kept so that
    /// [`Database::disconnect`] can release it.
    ///
    /// # Errors
    /// - `AppError::AlreadyConnected` if either handle is still open
    /// - `AppError::ConnectionFailure` if the database is unreachable
    pub async fn connect(&mut self, settings: &Settings) -> AppResult<()> {
        if self.pool.is_some() || self.client.is_some() {
            return Err(AppError::AlreadyConnected);
        }

        tracing::info!(
            app_env = %settings.app_env,
            min = settings.min_connection_count,
            max = settings.max_connection_count,
            "Connecting to database"
        );

        let pool = PgPoolOptions::new()
            .min_connections(settings.min_connection_count)
            .max_connections(settings.max_connection_count)
            .acquire_timeout(settings.connect_timeout)
            .connect(settings.database_url())
            .await
            .map_err(|e| AppError::ConnectionFailure(e.to_string()))?;
        self.pool = Some(pool);

        let mut options = ConnectOptions::new(settings.database_url());
        options
            .min_connections(settings.min_connection_count)
            .max_connections(settings.max_connection_count)
            .connect_timeout(settings.connect_timeout)
            .acquire_timeout(settings.connect_timeout)
            .sqlx_logging(false);

        let client = SeaDatabase::connect(options)
            .await
            .map_err(|e| AppError::ConnectionFailure(e.to_string()))?;
        self.client = Some(client);

        tracing::info!("Connection established");
        Ok(())
    }

    /// Close the pool, then the client. Missing handles are skipped.
    pub async fn disconnect(&mut self) {
        tracing::info!("Closing connection to database");

        if let Some(pool) = self.pool.take() {
            pool.close().await;
        }
        if let Some(client) = self.client.take() {
            if let Err(e) = client.close().await {
                tracing::warn!("Error while closing database client: {}", e);
            }
        }

        tracing::info!("Connection closed");
    }

    /// Whether both handles are open
    pub fn is_connected(&self) -> bool {
        self.pool.is_some() && self.client.is_some()
    }

    /// Borrow the raw pool.
    ///
    /// # Errors
    /// `AppError::Precondition` before `connect` or after `disconnect`.
    pub fn pool(&self) -> AppResult<&PgPool> {
        self.pool
            .as_ref()
            .ok_or_else(|| AppError::precondition("database pool is not connected"))
    }

    /// Borrow the ORM client.
    ///
    /// # Errors
    /// `AppError::Precondition` before `connect` or after `disconnect`.
    pub fn client(&self) -> AppResult<&DatabaseConnection> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::precondition("database client is not connected"))
    }

    /// Check database connectivity through both handles.
    ///
    /// # Errors
    /// `AppError::Precondition` unless both handles are open.
    pub async fn ping(&self) -> AppResult<()> {
        if !self.is_connected() {
            return Err(AppError::precondition("database is not connected"));
        }
        sqlx::query("SELECT 1")
            .execute(self.pool()?)
            .await
            .map_err(|e| AppError::ConnectionFailure(e.to_string()))?;
        self.client()?.ping().await?;
        Ok(())
    }
}
