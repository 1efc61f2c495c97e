//! Defines the HTTP routes specifically for authentication.
//!
//! These routes handle user login and the authenticated profile endpoint.
//! They are designed to be integrated into the main Axum router.

use crate::auth::handlers::{login, me};
use crate::auth::middleware::jwt_auth;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Creates the authentication router with all auth-related routes
pub fn auth_router() -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/me", get(me).layer(middleware::from_fn(jwt_auth)))
}
