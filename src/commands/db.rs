//! Db command - connectivity check and table clearing.

use crate::cli::args::{DbAction, DbArgs};
use crate::config::{AppEnv, Settings};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::clear_all;

/// Execute the db command
pub async fn execute(args: DbArgs, settings: &Settings) -> AppResult<()> {
    ensure_allowed(&args.action, settings.app_env)?;

    let mut db = super::connect(settings).await?;
    let result = match args.action {
        DbAction::Check => db.ping().await.map(|_| {
            println!("database: ok");
        }),
        DbAction::Clear => match db.client() {
            Ok(client) => clear_all(client).await.map(|removed| {
                println!("removed {} rows", removed);
            }),
            Err(e) => Err(e),
        },
    };
    db.disconnect().await;

    result
}

fn ensure_allowed(action: &DbAction, app_env: AppEnv) -> AppResult<()> {
    match action {
        DbAction::Clear if app_env != AppEnv::Test => Err(AppError::validation(format!(
            "refusing to clear tables with APP_ENV={}",
            app_env
        ))),
        _ => Ok(()),
    }
}
