//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub mod base;
pub mod cleanup;
pub mod entities;
mod user_repository;

pub use base::BaseRepository;
pub use cleanup::{clear_all, Clearable, UsersTable, CLEARABLE_TABLES};
pub use user_repository::{UserRepository, UsersRepository};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
