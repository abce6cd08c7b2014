//! Users module
//!
//! User record storage backed by a SQLite database.

pub mod db;
pub mod models;

pub use db::UserDb;
pub use models::User;
