//! Handler functions for authentication-related API endpoints.
//!
//! These functions process incoming HTTP requests for user authentication,
//! parse request data, and interact with the `auth::service` for core
//! business logic.

use crate::api::common::service_error_to_http;
use crate::auth::models::{LoginRequest, LoginResponse, UserInfo};
use crate::auth::service::AuthService;
use crate::store::DynStore;
use crate::utils::jwt::{Claims, JwtUtils};
use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::Json as ResponseJson,
};
use std::sync::Arc;

/// Handle user login request
#[axum::debug_handler]
pub async fn login(
    Extension(store): Extension<DynStore>,
    Extension(jwt_utils): Extension<Arc<JwtUtils>>,
    Json(payload): Json<LoginRequest>,
) -> Result<ResponseJson<LoginResponse>, (StatusCode, String)> {
    let auth_service = AuthService::new(&store, jwt_utils);

    match auth_service.login(payload).await {
        Ok(response) => Ok(ResponseJson(response)),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Get current user information from token
#[axum::debug_handler]
pub async fn me(
    Extension(store): Extension<DynStore>,
    Extension(claims): Extension<Claims>,
) -> Result<ResponseJson<UserInfo>, (StatusCode, String)> {
    let user = match store.find_user_by_username(claims.username()).await {
        Some(user) => user,
        None => return Err((StatusCode::NOT_FOUND, "User not found".to_string())),
    };

    Ok(ResponseJson(UserInfo {
        id: user.id,
        username: user.username,
    }))
}
