//! Commands module - CLI command implementations.
//!
//! Each command opens the database through the lifecycle manager, runs, and
//! always disconnects before returning.

pub mod db;
pub mod users;

use crate::config::Settings;
use crate::errors::AppResult;
use crate::infra::Database;

/// Connect, releasing any partially opened handle on failure.
pub(crate) async fn connect(settings: &Settings) -> AppResult<Database> {
    let mut db = Database::new();
    if let Err(e) = db.connect(settings).await {
        db.disconnect().await;
        return Err(e);
    }
    Ok(db)
}
