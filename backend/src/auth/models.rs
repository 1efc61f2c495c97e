//! Data structures for authentication-related entities.
//!
//! This module defines request and response models used for data transfer
//! within the authentication flow.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request payload
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login response wrapping the issued token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    #[serde(rename = "Token")]
    pub token: String,
}

/// User information returned from the authenticated profile endpoint
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
}
