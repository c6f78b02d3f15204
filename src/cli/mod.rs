//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `db` - Connectivity check and table clearing
//! - `users` - User registration, lookup, update and login

pub mod args;

pub use args::{Cli, Commands};
