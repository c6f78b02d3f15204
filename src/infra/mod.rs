//! Infrastructure layer - External systems integration
//!
//! - Database connection lifecycle (pool + ORM client)
//! - Repositories over the ORM client

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{BaseRepository, UserRepository, UsersRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
