//! Domain layer - Core business entities and logic
//!
//! Records and value objects independent of storage concerns.

pub mod password;
pub mod user;

pub use password::Credentials;
pub use user::{User, UserInDb, UserUpdate};
