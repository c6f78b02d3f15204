//! Bulk clearing of application tables.
//!
//! Every table that may be wiped between test runs is listed explicitly in
//! [`CLEARABLE_TABLES`].

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use super::entities::UserEntity;
use crate::errors::AppResult;

/// A table whose rows can all be removed
#[async_trait]
pub trait Clearable: Send + Sync {
    /// Table name, for logging
    fn table_name(&self) -> &'static str;

    /// Delete every row, returning the number removed
    async fn delete_all(&self, db: &DatabaseConnection) -> AppResult<u64>;
}

/// The `users` table
pub struct UsersTable;

#[async_trait]
impl Clearable for UsersTable {
    fn table_name(&self) -> &'static str {
        "users"
    }

    async fn delete_all(&self, db: &DatabaseConnection) -> AppResult<u64> {
        let result = UserEntity::delete_many().exec(db).await?;
        Ok(result.rows_affected)
    }
}

/// Tables cleared by [`clear_all`], children before parents
pub static CLEARABLE_TABLES: &[&dyn Clearable] = &[&UsersTable];

/// Clear every table in [`CLEARABLE_TABLES`]. Returns the total rows removed.
pub async fn clear_all(db: &DatabaseConnection) -> AppResult<u64> {
    let mut removed = 0;
    for table in CLEARABLE_TABLES {
        let rows = table.delete_all(db).await?;
        tracing::debug!("Cleared {} rows from {}", rows, table.table_name());
        removed += rows;
    }
    Ok(removed)
}
