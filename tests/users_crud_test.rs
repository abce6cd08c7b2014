//! End-to-end CRUD lifecycle tests for the user endpoints
//!
//! Drives the handlers through the library with an isolated database per
//! test, the same way the router invokes them.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use tempfile::TempDir;
use user_service::api::users::{
    create_user, delete_user, get_user, list_users, update_user, CreateUserRequest,
    UpdateUserRequest,
};
use user_service::error::AppError;
use user_service::users::UserDb;

async fn open_db(dir: &TempDir) -> UserDb {
    let path = dir.path().join("users.sqlite");
    UserDb::new(path.to_str().unwrap()).await.unwrap()
}

#[tokio::test]
async fn test_full_user_lifecycle() {
    let dir = TempDir::new().unwrap();
    let db = open_db(&dir).await;

    // Create
    let request = CreateUserRequest {
        first_name: "John".to_string(),
        last_name: Some("Doe".to_string()),
        date_of_birth: Some("1990-01-01T00:00:00Z".parse().unwrap()),
        ethnicity: Some("Caucasian".to_string()),
        role: Some("Patient".to_string()),
    };
    let (status, created) = create_user(State(db.clone()), Ok(Json(request)))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    let created = created.0.data;
    assert_eq!(created.first_name, "John");
    assert!(created.id > 0);

    // Read it back
    let fetched = get_user(State(db.clone()), Path(created.id)).await.unwrap();
    assert_eq!(fetched.0.data.first_name, "John");

    // Rename, everything else untouched
    let update = UpdateUserRequest {
        first_name: Some("Jonathan".to_string()),
        last_name: None,
        date_of_birth: None,
        ethnicity: None,
        role: None,
    };
    let updated = update_user(State(db.clone()), Path(created.id), Ok(Json(update)))
        .await
        .unwrap();
    let updated = updated.0.data;
    assert_eq!(updated.first_name, "Jonathan");
    assert_eq!(updated.last_name.as_deref(), Some("Doe"));
    assert_eq!(updated.created_at, created.created_at);

    // Delete, then the record is gone
    let deleted = delete_user(State(db.clone()), Path(created.id))
        .await
        .unwrap();
    assert_eq!(deleted.0.data, "User deleted successfully");

    let result = get_user(State(db.clone()), Path(created.id)).await;
    assert!(matches!(result.unwrap_err(), AppError::UserNotFound));

    let list = list_users(State(db)).await.unwrap();
    assert!(list.data.is_empty());
}

#[tokio::test]
async fn test_records_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.sqlite");

    {
        let db = UserDb::new(path.to_str().unwrap()).await.unwrap();
        let request = CreateUserRequest {
            first_name: "Ada".to_string(),
            last_name: None,
            date_of_birth: None,
            ethnicity: None,
            role: None,
        };
        create_user(State(db), Ok(Json(request))).await.unwrap();
    }

    // Re-opening runs the migration again as a no-op and keeps the data
    let db = UserDb::new(path.to_str().unwrap()).await.unwrap();
    let list = list_users(State(db)).await.unwrap();
    assert_eq!(list.data.len(), 1);
    assert_eq!(list.data[0].first_name, "Ada");
}

#[tokio::test]
async fn test_independent_stores() {
    let dir_a = TempDir::new().unwrap();
    let dir_b = TempDir::new().unwrap();
    let db_a = open_db(&dir_a).await;
    let db_b = open_db(&dir_b).await;

    let request = CreateUserRequest {
        first_name: "Grace".to_string(),
        last_name: None,
        date_of_birth: None,
        ethnicity: None,
        role: None,
    };
    create_user(State(db_a.clone()), Ok(Json(request)))
        .await
        .unwrap();

    assert_eq!(list_users(State(db_a)).await.unwrap().data.len(), 1);
    assert!(list_users(State(db_b)).await.unwrap().data.is_empty());
}
