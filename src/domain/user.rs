//! User domain records.
//!
//! `User` is the public shape of an account. `UserInDb` composes it with the
//! store-assigned identity and the credential pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::password::Credentials;
use crate::errors::AppResult;

/// Public user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct User {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[serde(default)]
    pub bio: String,
    #[validate(url(message = "Image must be a URL"))]
    pub image: Option<String>,
}

impl User {
    /// New user with an empty bio and no image
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            bio: String::new(),
            image: None,
        }
    }
}

/// Database-backed user
#[derive(Debug, Clone, Serialize)]
pub struct UserInDb {
    pub id: Uuid,
    #[serde(flatten)]
    pub user: User,
    #[serde(skip_serializing)]
    pub credentials: Credentials,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserInDb {
    pub fn username(&self) -> &str {
        &self.user.username
    }

    pub fn email(&self) -> &str {
        &self.user.email
    }

    /// Check a plain text password against the stored salt and hash.
    pub fn check_password(&self, password: &str) -> bool {
        self.credentials.verify(password)
    }

    /// Same as [`UserInDb::check_password`], off the async executor.
    pub async fn check_password_async(&self, password: &str) -> AppResult<bool> {
        self.credentials.verify_async(password).await
    }

    /// Fresh salt and hash for a plain text password.
    pub fn generate_password_hash(password: &str) -> AppResult<Credentials> {
        Credentials::generate(password)
    }

    /// Same as [`UserInDb::generate_password_hash`], off the async executor.
    pub async fn generate_password_hash_async(password: &str) -> AppResult<Credentials> {
        Credentials::generate_async(password).await
    }
}

/// Partial update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct UserUpdate {
    #[validate(length(min = 1, message = "Username must not be empty"))]
    pub username: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: Option<String>,
    pub bio: Option<String>,
    #[validate(url(message = "Image must be a URL"))]
    pub image: Option<String>,
}

impl UserUpdate {
    pub fn bio(bio: impl Into<String>) -> Self {
        Self {
            bio: Some(bio.into()),
            ..Self::default()
        }
    }

    pub fn password(password: impl Into<String>) -> Self {
        Self {
            password: Some(password.into()),
            ..Self::default()
        }
    }

    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.bio.is_none()
            && self.image.is_none()
    }
}
