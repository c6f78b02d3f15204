//! User service - registration, login and profile use cases.
//!
//! Validates input, then delegates to the repository. Uniqueness is left to
//! the store.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::domain::{User, UserInDb, UserUpdate};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user
    async fn register(&self, username: &str, email: &str, password: &str) -> AppResult<UserInDb>;

    /// Authenticate by email and password
    async fn login(&self, email: &str, password: &str) -> AppResult<UserInDb>;

    /// Get a user by username
    async fn profile(&self, username: &str) -> AppResult<UserInDb>;

    /// Get a user by email
    async fn profile_by_email(&self, email: &str) -> AppResult<UserInDb>;

    /// Apply a partial update to a user.
    /// An empty update still goes to the store, so a vanished user is `NotFound`.
    async fn update_profile(&self, user: &UserInDb, changes: UserUpdate) -> AppResult<UserInDb>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn register(&self, username: &str, email: &str, password: &str) -> AppResult<UserInDb> {
        User::new(username, email).validate()?;
        if password.is_empty() {
            return Err(AppError::validation("Password must not be empty"));
        }

        let user = self.repo.create_user(username, email, password).await?;
        tracing::info!(user_id = %user.id, "Registered user {}", user.username());
        Ok(user)
    }

    async fn login(&self, email: &str, password: &str) -> AppResult<UserInDb> {
        let user = match self.repo.get_user_by_email(email).await {
            Ok(user) => user,
            Err(AppError::NotFound(_)) => return Err(AppError::InvalidCredentials),
            Err(e) => return Err(e),
        };

        if !user.check_password_async(password).await? {
            tracing::debug!(user_id = %user.id, "Rejected login with wrong password");
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }

    async fn profile(&self, username: &str) -> AppResult<UserInDb> {
        self.repo.get_user_by_username(username).await
    }

    async fn profile_by_email(&self, email: &str) -> AppResult<UserInDb> {
        self.repo.get_user_by_email(email).await
    }

    async fn update_profile(&self, user: &UserInDb, changes: UserUpdate) -> AppResult<UserInDb> {
        changes.validate()?;
        self.repo.update_user(user, changes).await
    }
}
