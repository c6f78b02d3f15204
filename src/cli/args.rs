//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{ArgGroup, Args, Parser, Subcommand};

/// Conduit users backend administration
#[derive(Parser, Debug)]
#[command(name = "conduit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Database connectivity and maintenance
    Db(DbArgs),

    /// Manage users
    Users(UsersArgs),
}

/// Arguments for the db command
#[derive(Parser, Debug)]
pub struct DbArgs {
    #[command(subcommand)]
    pub action: DbAction,
}

/// Database actions
#[derive(Subcommand, Debug)]
pub enum DbAction {
    /// Connect, ping and disconnect
    Check,
    /// Delete all rows from every application table (APP_ENV=test only)
    Clear,
}

/// Arguments for the users command
#[derive(Parser, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub action: UsersAction,
}

/// User actions
#[derive(Subcommand, Debug)]
pub enum UsersAction {
    /// Register a new user
    Create {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        /// Read from CONDUIT_PASSWORD when the flag is omitted
        #[arg(long, env = "CONDUIT_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Show a user by username or email
    Show(ShowArgs),
    /// Update fields of an existing user
    Update(UpdateArgs),
    /// Verify a user's credentials
    Login {
        #[arg(long)]
        email: String,
        /// Read from CONDUIT_PASSWORD when the flag is omitted
        #[arg(long, env = "CONDUIT_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

/// Lookup key for `users show`
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("key").required(true).args(["username", "email"])))]
pub struct ShowArgs {
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
}

/// Fields for `users update`. Omitted flags leave the field unchanged.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Current username of the user to update
    pub username: String,
    #[arg(long)]
    pub new_username: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// Read from CONDUIT_NEW_PASSWORD when the flag is omitted
    #[arg(long, env = "CONDUIT_NEW_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
    #[arg(long)]
    pub image: Option<String>,
}
