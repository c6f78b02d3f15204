//! Users repository over the SeaORM client.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    Set, Unchanged,
};
use uuid::Uuid;

use super::base::BaseRepository;
use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{UserInDb, UserUpdate};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Exact-match lookup by email; `AppError::NotFound` when absent
    async fn get_user_by_email(&self, email: &str) -> AppResult<UserInDb>;

    /// Exact-match lookup by username; `AppError::NotFound` when absent
    async fn get_user_by_username(&self, username: &str) -> AppResult<UserInDb>;

    /// Insert a user with a freshly salted password hash.
    /// A taken username or email fails with `AppError::Conflict`.
    async fn create_user(&self, username: &str, email: &str, password: &str)
        -> AppResult<UserInDb>;

    /// Apply only the provided fields to the user identified by `user.id`
    async fn update_user(&self, user: &UserInDb, changes: UserUpdate) -> AppResult<UserInDb>;
}

/// Concrete implementation of UserRepository
#[derive(Debug, Clone)]
pub struct UsersRepository {
    base: BaseRepository,
}

impl UsersRepository {
    /// Create new repository instance. Pass `None` for a connection-less repository.
    pub fn new(conn: impl Into<Option<DatabaseConnection>>) -> Self {
        Self {
            base: BaseRepository::new(conn),
        }
    }

    fn db(&self) -> AppResult<&DatabaseConnection> {
        self.base.connection()
    }
}

impl From<BaseRepository> for UsersRepository {
    fn from(base: BaseRepository) -> Self {
        Self { base }
    }
}

#[async_trait]
impl UserRepository for UsersRepository {
    async fn get_user_by_email(&self, email: &str) -> AppResult<UserInDb> {
        UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db()?)
            .await?
            .map(UserInDb::from)
            .ok_or_not_found(|| format!("user with email {} does not exist", email))
    }

    async fn get_user_by_username(&self, username: &str) -> AppResult<UserInDb> {
        UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(self.db()?)
            .await?
            .map(UserInDb::from)
            .ok_or_not_found(|| format!("user with username {} does not exist", username))
    }

    async fn create_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> AppResult<UserInDb> {
        let db = self.db()?;
        let credentials = UserInDb::generate_password_hash_async(password).await?;
        let now = Utc::now();

        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(username.to_string()),
            email: Set(email.to_string()),
            salt: Set(credentials.salt().to_string()),
            hashed_password: Set(credentials.hashed_password().to_string()),
            bio: Set(String::new()),
            image: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(db).await?;
        tracing::debug!(user_id = %model.id, "Created user {}", model.username);
        Ok(UserInDb::from(model))
    }

    async fn update_user(&self, user: &UserInDb, changes: UserUpdate) -> AppResult<UserInDb> {
        let db = self.db()?;
        if changes.is_empty() {
            tracing::debug!(user_id = %user.id, "Update without field changes only touches updated_at");
        }

        let mut active = ActiveModel {
            id: Unchanged(user.id),
            username: NotSet,
            email: NotSet,
            salt: NotSet,
            hashed_password: NotSet,
            bio: NotSet,
            image: NotSet,
            created_at: NotSet,
            updated_at: Set(Utc::now()),
        };

        if let Some(username) = changes.username {
            active.username = Set(username);
        }
        if let Some(email) = changes.email {
            active.email = Set(email);
        }
        if let Some(bio) = changes.bio {
            active.bio = Set(bio);
        }
        if let Some(image) = changes.image {
            active.image = Set(Some(image));
        }
        if let Some(password) = changes.password {
            let credentials = UserInDb::generate_password_hash_async(&password).await?;
            active.salt = Set(credentials.salt().to_string());
            active.hashed_password = Set(credentials.hashed_password().to_string());
        }

        match active.update(db).await {
            Ok(model) => {
                tracing::debug!(user_id = %model.id, "Updated user {}", model.username);
                Ok(UserInDb::from(model))
            }
            Err(DbErr::RecordNotUpdated) | Err(DbErr::RecordNotFound(_)) => {
                tracing::error!(user_id = %user.id, "User disappeared before update");
                Err(AppError::not_found(format!(
                    "user with id {} does not exist",
                    user.id
                )))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connection_less_repository_rejects_every_operation() {
        let repo = UsersRepository::from(BaseRepository::default());

        assert!(matches!(
            repo.get_user_by_email("ada@x.com").await,
            Err(AppError::Precondition(_))
        ));
        assert!(matches!(
            repo.get_user_by_username("ada").await,
            Err(AppError::Precondition(_))
        ));
        assert!(matches!(
            repo.create_user("ada", "ada@x.com", "s3cret").await,
            Err(AppError::Precondition(_))
        ));
    }
}
