//! Users command - registration, lookup, update and login.

use std::sync::Arc;

use crate::cli::args::{ShowArgs, UpdateArgs, UsersAction, UsersArgs};
use crate::config::Settings;
use crate::domain::{UserInDb, UserUpdate};
use crate::errors::{AppError, AppResult};
use crate::infra::UsersRepository;
use crate::services::{UserManager, UserService};

/// Execute the users command
pub async fn execute(args: UsersArgs, settings: &Settings) -> AppResult<()> {
    let mut db = super::connect(settings).await?;

    let result = match db.client() {
        Ok(client) => {
            let repo = Arc::new(UsersRepository::new(client.clone()));
            let service = UserManager::new(repo);
            dispatch(args.action, &service).await
        }
        Err(e) => Err(e),
    };
    db.disconnect().await;

    let user = result?;
    let rendered = serde_json::to_string_pretty(&user)
        .map_err(|e| AppError::internal(format!("Failed to render user: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}

/// Run a users action against a service
pub async fn dispatch(action: UsersAction, service: &dyn UserService) -> AppResult<UserInDb> {
    match action {
        UsersAction::Create {
            username,
            email,
            password,
        } => service.register(&username, &email, &password).await,
        UsersAction::Show(ShowArgs { username, email }) => match (username, email) {
            (Some(username), _) => service.profile(&username).await,
            (None, Some(email)) => service.profile_by_email(&email).await,
            (None, None) => Err(AppError::validation("either --username or --email is required")),
        },
        UsersAction::Update(args) => {
            let current = service.profile(&args.username).await?;
            service.update_profile(&current, changes_from(args)).await
        }
        UsersAction::Login { email, password } => service.login(&email, &password).await,
    }
}

fn changes_from(args: UpdateArgs) -> UserUpdate {
    UserUpdate {
        username: args.new_username,
        email: args.email,
        password: args.password,
        bio: args.bio,
        image: args.image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::domain::{Credentials, User};
    use crate::infra::MockUserRepository;

    fn stored_user(username: &str, email: &str) -> UserInDb {
        UserInDb {
            id: Uuid::new_v4(),
            user: User::new(username, email),
            credentials: Credentials::from_parts("salt".to_string(), "hash".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_show_by_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_user_by_email()
            .withf(|email| email == "ada@x.com")
            .returning(|email| Ok(stored_user("ada", email)));
        let service = UserManager::new(Arc::new(repo));

        let action = UsersAction::Show(ShowArgs {
            username: None,
            email: Some("ada@x.com".to_string()),
        });
        let user = dispatch(action, &service).await.unwrap();
        assert_eq!(user.username(), "ada");
    }

    #[tokio::test]
    async fn test_update_targets_current_user_with_partial_changes() {
        let current = stored_user("ada", "ada@x.com");
        let current_id = current.id;

        let mut repo = MockUserRepository::new();
        let lookup = current.clone();
        repo.expect_get_user_by_username()
            .withf(|username| username == "ada")
            .returning(move |_| Ok(lookup.clone()));
        repo.expect_update_user()
            .withf(move |target, changes| {
                target.id == current_id
                    && changes.bio.as_deref() == Some("hello")
                    && changes.username.is_none()
                    && changes.password.is_none()
            })
            .times(1)
            .returning(|target, changes| {
                let mut updated = target.clone();
                updated.user.bio = changes.bio.unwrap_or_default();
                Ok(updated)
            });
        let service = UserManager::new(Arc::new(repo));

        let action = UsersAction::Update(UpdateArgs {
            username: "ada".to_string(),
            new_username: None,
            email: None,
            password: None,
            bio: Some("hello".to_string()),
            image: None,
        });
        let user = dispatch(action, &service).await.unwrap();
        assert_eq!(user.id, current_id);
        assert_eq!(user.user.bio, "hello");
    }

    #[tokio::test]
    async fn test_update_unknown_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_user_by_username()
            .returning(|username| Err(AppError::not_found(format!("user with username {} does not exist", username))));
        repo.expect_update_user().never();
        let service = UserManager::new(Arc::new(repo));

        let action = UsersAction::Update(UpdateArgs {
            username: "ghost".to_string(),
            new_username: Some("casper".to_string()),
            email: None,
            password: None,
            bio: None,
            image: None,
        });
        assert!(matches!(dispatch(action, &service).await, Err(AppError::NotFound(_))));
    }
}
