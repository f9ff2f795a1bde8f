//! User model and the account-related request payloads.

use crate::domain::{UserEmail, UserId};
use serde::{Deserialize, Serialize};

/// A registered user.
///
/// The password is stored in clear text and compared by equality on login —
/// preserved behavior of the system this replaces, flagged as a defect in
/// DESIGN.md. It is never serialized into responses.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct User {
    /// Unique identifier, generated by the store
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Unique login email, stored lower-cased
    pub email: UserEmail,

    /// Credential secret (clear text), excluded from all responses
    #[serde(skip_serializing)]
    pub password: String,
}

/// Body of `POST /api/users/register`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/users/login`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response: the bearer token and the user it identifies.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Body of `PUT /api/users/update-profile`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
}

/// Body of `PUT /api/users/change-password`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}
