//! User service tests over the real repository.

mod common;

use std::sync::Arc;

use conduit_api::errors::AppError;
use conduit_api::services::{UserManager, UserService};
use conduit_api::UserUpdate;

use common::setup_repo;

async fn setup_service() -> UserManager {
    let (repo, _db) = setup_repo().await;
    UserManager::new(Arc::new(repo))
}

#[tokio::test]
async fn test_register_then_login() {
    let service = setup_service().await;

    let registered = service.register("ada", "ada@x.com", "s3cret").await.unwrap();
    let logged_in = service.login("ada@x.com", "s3cret").await.unwrap();

    assert_eq!(logged_in.id, registered.id);
    assert!(matches!(
        service.login("ada@x.com", "wrong").await,
        Err(AppError::InvalidCredentials)
    ));
    assert!(matches!(
        service.login("nobody@x.com", "s3cret").await,
        Err(AppError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_login_after_password_change() {
    let service = setup_service().await;
    let user = service.register("ada", "ada@x.com", "s3cret").await.unwrap();

    service
        .update_profile(&user, UserUpdate::password("rotated"))
        .await
        .unwrap();

    assert!(service.login("ada@x.com", "s3cret").await.is_err());
    assert!(service.login("ada@x.com", "rotated").await.is_ok());
}

#[tokio::test]
async fn test_register_duplicate_is_conflict() {
    let service = setup_service().await;
    service.register("ada", "ada@x.com", "s3cret").await.unwrap();

    let err = service
        .register("ada2", "ada@x.com", "s3cret")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    assert!(err.is_client_error());
}
