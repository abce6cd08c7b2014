//! User data models
//!
//! Defines the persisted User record served by the user endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user record as stored in the `users` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique identifier, assigned by the store on insert
    pub id: i64,
    /// Given name, required and non-empty
    pub first_name: String,
    /// Family name
    pub last_name: Option<String>,
    /// Date of birth
    pub date_of_birth: Option<DateTime<Utc>>,
    /// Self-reported ethnicity
    pub ethnicity: Option<String>,
    /// Role of the user (e.g. "Patient")
    pub role: Option<String>,
    /// When the record was created (system-set on insert)
    pub created_at: DateTime<Utc>,
    /// When the record was last updated (system-set on insert and update)
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record ready for insertion
    ///
    /// The identifier is assigned by the store; both timestamps are set to now.
    pub fn new(
        first_name: String,
        last_name: Option<String>,
        date_of_birth: Option<DateTime<Utc>>,
        ethnicity: Option<String>,
        role: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            first_name,
            last_name,
            date_of_birth,
            ethnicity,
            role,
            created_at: now,
            updated_at: now,
        }
    }
}
