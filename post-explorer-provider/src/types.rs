//! Resource types of the Remote Data Source.

use serde::{Deserialize, Serialize};

/// A user record from `GET /users`.
///
/// The API returns more fields (`username`, `address`, `company`); they are
/// ignored when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
}

/// A post record from `GET /posts` or `GET /posts/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    /// Author id (`userId` on the wire)
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    pub title: String,
    pub body: String,
}
