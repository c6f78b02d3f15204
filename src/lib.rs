//! Conduit users backend
//!
//! Settings, database connection lifecycle, a users repository over SeaORM,
//! and the user domain model with salted password hashing.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Settings and constants
//! - **domain**: User records and credentials
//! - **services**: Registration, login and profile use cases
//! - **infra**: Connection lifecycle and repositories
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Check that the database is reachable
//! cargo run -- db check
//!
//! # Register a user
//! cargo run -- users create --username ada --email ada@x.com --password s3cret
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::{AppEnv, Settings};
pub use domain::{Credentials, User, UserInDb, UserUpdate};
pub use errors::{AppError, AppResult};
pub use infra::{Database, UserRepository, UsersRepository};
