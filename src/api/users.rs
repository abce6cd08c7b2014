//! User API handlers
//!
//! Contains HTTP request handlers for user CRUD operations.

use crate::error::AppError;
use crate::users::{User, UserDb};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Users list response
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    /// All user records
    pub data: Vec<User>,
}

/// Single user response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// The requested or affected user record
    pub data: User,
}

/// Deletion confirmation response
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    /// Confirmation message
    pub data: String,
}

/// Create user request
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Given name, must be non-empty
    pub first_name: String,
    /// Family name (optional)
    pub last_name: Option<String>,
    /// Date of birth (optional)
    pub date_of_birth: Option<DateTime<Utc>>,
    /// Self-reported ethnicity (optional)
    pub ethnicity: Option<String>,
    /// Role (optional)
    pub role: Option<String>,
}

/// Update user request
///
/// A field present in the body overwrites the stored value; an absent field
/// leaves the stored value unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    /// New given name (optional, must be non-empty when present)
    pub first_name: Option<String>,
    /// New family name (optional)
    pub last_name: Option<String>,
    /// New date of birth (optional)
    pub date_of_birth: Option<DateTime<Utc>>,
    /// New ethnicity (optional)
    pub ethnicity: Option<String>,
    /// New role (optional)
    pub role: Option<String>,
}

/// GET /v1/users - List all users
pub async fn list_users(State(db): State<UserDb>) -> Result<Json<UserListResponse>, AppError> {
    let users = db.find_all().await?;

    Ok(Json(UserListResponse { data: users }))
}

/// GET /v1/users/:id - Get a specific user
pub async fn get_user(
    State(db): State<UserDb>,
    Path(id): Path<i64>,
) -> Result<Json<UserResponse>, AppError> {
    let user = db.find_by_id(id).await?.ok_or(AppError::UserNotFound)?;

    Ok(Json(UserResponse { data: user }))
}

/// POST /v1/users - Create a new user
pub async fn create_user(
    State(db): State<UserDb>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    if request.first_name.is_empty() {
        return Err(AppError::Validation(
            "first_name must not be empty".to_string(),
        ));
    }

    let user = User::new(
        request.first_name,
        request.last_name,
        request.date_of_birth,
        request.ethnicity,
        request.role,
    );
    let user = db.insert(&user).await?;

    Ok((StatusCode::CREATED, Json(UserResponse { data: user })))
}

/// PUT /v1/users/:id - Update a user
///
/// The existence check runs before the body is parsed, so an unknown
/// identifier wins over a malformed payload.
pub async fn update_user(
    State(db): State<UserDb>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, AppError> {
    let mut user = db.find_by_id(id).await?.ok_or(AppError::UserNotFound)?;

    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    if let Some(first_name) = request.first_name {
        if first_name.is_empty() {
            return Err(AppError::Validation(
                "first_name must not be empty".to_string(),
            ));
        }
        user.first_name = first_name;
    }

    if let Some(last_name) = request.last_name {
        user.last_name = Some(last_name);
    }

    if let Some(date_of_birth) = request.date_of_birth {
        user.date_of_birth = Some(date_of_birth);
    }

    if let Some(ethnicity) = request.ethnicity {
        user.ethnicity = Some(ethnicity);
    }

    if let Some(role) = request.role {
        user.role = Some(role);
    }

    user.updated_at = Utc::now();
    db.update(&user).await?;

    let user = db.find_by_id(id).await?.ok_or(AppError::UserNotFound)?;

    Ok(Json(UserResponse { data: user }))
}

/// DELETE /v1/users/:id - Delete a user
pub async fn delete_user(
    State(db): State<UserDb>,
    Path(id): Path<i64>,
) -> Result<Json<DeletedResponse>, AppError> {
    db.find_by_id(id).await?.ok_or(AppError::UserNotFound)?;

    // The existence check and the delete are separate statements; if another
    // writer removed the row in between, report 404 rather than success.
    if !db.delete_by_id(id).await? {
        return Err(AppError::UserNotFound);
    }

    Ok(Json(DeletedResponse {
        data: "User deleted successfully".to_string(),
    }))
}
