//! Users service unit tests.

use std::sync::Arc;

use mockall::predicate::eq;

use common::AppError;
use domain::{CreateUserInput, UpdateUserInput, User};
use resolver_service_lib::repository::{InMemoryUserStore, MockUserRepository};
use resolver_service_lib::service::{
    canned_user, CannedUsersService, StoredUsersService, UsersService, CANNED_USER_ID,
};

fn create_input(name: &str, email: &str) -> CreateUserInput {
    CreateUserInput {
        name: name.to_string(),
        email: email.to_string(),
    }
}

fn rename(id: i32, name: &str) -> UpdateUserInput {
    UpdateUserInput {
        id,
        name: Some(name.to_string()),
        email: None,
    }
}

// =============================================================================
// Canned Service
// =============================================================================

#[tokio::test]
async fn test_canned_record_shape() {
    assert_eq!(canned_user(), User::new(12345, "name", "test@test.com"));
}

#[tokio::test]
async fn test_canned_find_all_returns_single_record() {
    let service = CannedUsersService::new();
    let users = service.find_all().await.unwrap();

    assert_eq!(users, vec![canned_user()]);
}

#[tokio::test]
async fn test_canned_create_ignores_input() {
    let service = CannedUsersService::new();
    let user = service.create(create_input("X", "y@z.com")).await.unwrap();

    assert_eq!(user.id, CANNED_USER_ID);
    assert_eq!(user, canned_user());
}

#[tokio::test]
async fn test_canned_find_one_accepts_any_id() {
    let service = CannedUsersService::new();

    for id in [0, 1, 999_999, -5] {
        assert_eq!(service.find_one(id).await.unwrap(), canned_user());
    }
}

#[tokio::test]
async fn test_canned_update_and_remove_do_not_mutate() {
    let service = CannedUsersService::new();

    let updated = service.update(7, rename(7, "Changed")).await.unwrap();
    let removed = service.remove(CANNED_USER_ID).await.unwrap();

    assert_eq!(updated, canned_user());
    assert_eq!(removed, canned_user());
    assert_eq!(service.find_all().await.unwrap(), vec![canned_user()]);
}

// =============================================================================
// Stored Service (mocked repository)
// =============================================================================

#[tokio::test]
async fn test_stored_find_one_success() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .with(eq(4))
        .returning(|id| Ok(Some(User::new(id, "Padme", "padme@example.com"))));

    let service = StoredUsersService::new(Arc::new(repo));
    let user = service.find_one(4).await.unwrap();

    assert_eq!(user.id, 4);
    assert_eq!(user.name, "Padme");
}

#[tokio::test]
async fn test_stored_find_one_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let service = StoredUsersService::new(Arc::new(repo));
    let result = service.find_one(999_999).await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_stored_remove_propagates_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_delete()
        .with(eq(3))
        .returning(|_| Err(AppError::NotFound));

    let service = StoredUsersService::new(Arc::new(repo));

    assert!(matches!(service.remove(3).await, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_stored_empty_update_reads_without_writing() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .with(eq(5))
        .times(1)
        .returning(|id| Ok(Some(User::new(id, "Mace", "mace@example.com"))));
    repo.expect_update().never();

    let service = StoredUsersService::new(Arc::new(repo));
    let empty = UpdateUserInput {
        id: 5,
        name: None,
        email: None,
    };

    assert_eq!(
        service.update(5, empty).await.unwrap(),
        User::new(5, "Mace", "mace@example.com")
    );
}

#[tokio::test]
async fn test_stored_empty_update_of_unknown_id_is_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));
    repo.expect_update().never();

    let service = StoredUsersService::new(Arc::new(repo));
    let empty = UpdateUserInput {
        id: 8,
        name: None,
        email: None,
    };

    assert!(matches!(service.update(8, empty).await, Err(AppError::NotFound)));
}

// =============================================================================
// Stored Service (in-memory repository)
// =============================================================================

fn stored() -> StoredUsersService {
    StoredUsersService::new(Arc::new(InMemoryUserStore::new()))
}

#[tokio::test]
async fn test_stored_create_assigns_distinct_ids() {
    let service = stored();
    let han = service
        .create(create_input("Han", "han@example.com"))
        .await
        .unwrap();
    let chewie = service
        .create(create_input("Chewbacca", "chewie@example.com"))
        .await
        .unwrap();

    assert_ne!(han.id, chewie.id);
    assert_eq!(service.find_all().await.unwrap(), vec![han, chewie]);
}

#[tokio::test]
async fn test_stored_update_applies_partial_fields() {
    let service = stored();
    let han = service
        .create(create_input("Han", "han@example.com"))
        .await
        .unwrap();

    let updated = service.update(han.id, rename(han.id, "Han Solo")).await.unwrap();

    assert_eq!(updated.name, "Han Solo");
    assert_eq!(updated.email, "han@example.com");
    assert_eq!(service.find_one(han.id).await.unwrap(), updated);
}

#[tokio::test]
async fn test_stored_remove_deletes_record() {
    let service = stored();
    let han = service
        .create(create_input("Han", "han@example.com"))
        .await
        .unwrap();

    let removed = service.remove(han.id).await.unwrap();

    assert_eq!(removed, han);
    assert!(service.find_all().await.unwrap().is_empty());
    assert!(matches!(service.find_one(han.id).await, Err(AppError::NotFound)));
    assert!(matches!(service.remove(han.id).await, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_stored_update_unknown_id_is_not_found() {
    let service = stored();
    let result = service.update(12, rename(12, "Ghost")).await;

    assert!(matches!(result, Err(AppError::NotFound)));
}
