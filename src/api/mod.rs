//! API module
//!
//! Contains HTTP request handlers for the user endpoints

pub mod users;

use crate::users::UserDb;
use axum::{routing::get, Router};

/// Build the service router with the given database handle
///
/// Exactly the five user routes; unmatched requests get the framework's
/// default not-found response.
pub fn router(db: UserDb) -> Router {
    Router::new()
        .route("/v1/users", get(users::list_users).post(users::create_user))
        .route(
            "/v1/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .with_state(db)
}
