//! Shared fixtures for integration tests.
//!
//! Each test gets its own in-memory SQLite database with the `users` table
//! created from the SeaORM entity.

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};

use conduit_api::infra::repositories::entities::UserEntity;
use conduit_api::infra::UsersRepository;

/// Fresh database with the application schema
pub async fn setup_db() -> DatabaseConnection {
    // A single connection keeps every query on the same in-memory database
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .min_connections(1)
        .max_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("failed to open in-memory database");

    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    db.execute(backend.build(&schema.create_table_from_entity(UserEntity)))
        .await
        .expect("failed to create users table");

    db
}

/// Repository over a fresh database, plus the connection for out-of-band access
pub async fn setup_repo() -> (UsersRepository, DatabaseConnection) {
    let db = setup_db().await;
    (UsersRepository::new(db.clone()), db)
}
