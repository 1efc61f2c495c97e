//! Core business logic for the authentication system.

use crate::auth::models::{LoginRequest, LoginResponse};
use crate::errors::{ServiceError, ServiceResult};
use crate::store::DynStore;
use crate::utils::jwt::JwtUtils;
use bcrypt::{DEFAULT_COST, hash, verify};
use std::sync::Arc;
use validator::Validate;

/// Authentication service for handling login and token issuance
pub struct AuthService<'a> {
    store: &'a DynStore,
    jwt_utils: Arc<JwtUtils>,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService instance
    pub fn new(store: &'a DynStore, jwt_utils: Arc<JwtUtils>) -> Self {
        AuthService { store, jwt_utils }
    }

    /// Authenticate a user and issue a signed token.
    ///
    /// An unknown username and a wrong password both map to the same
    /// `Unauthorized` error, so the response does not reveal which usernames
    /// exist.
    pub async fn login(&self, login_request: LoginRequest) -> ServiceResult<LoginResponse> {
        // Validate input
        if let Err(validation_errors) = login_request.validate() {
            let error_messages: Vec<String> = validation_errors
                .field_errors()
                .into_iter()
                .flat_map(|(field, errors)| {
                    errors.iter().map(move |error| {
                        format!(
                            "{}: {}",
                            field,
                            error.message.as_ref().unwrap_or(&"Invalid value".into())
                        )
                    })
                })
                .collect();
            return Err(ServiceError::validation(error_messages.join(", ")));
        }

        let user = self
            .store
            .find_user_by_username(&login_request.username)
            .await
            .ok_or_else(|| ServiceError::unauthorized("unknown username"))?;

        if !Self::verify_password(&login_request.password, &user.password_hash)? {
            return Err(ServiceError::unauthorized("wrong password"));
        }

        let token = self.jwt_utils.generate_token(&user.username)?;

        Ok(LoginResponse { token })
    }

    /// Hash a password before it is stored
    pub fn hash_password(password: &str) -> ServiceResult<String> {
        hash(password, DEFAULT_COST)
            .map_err(|e| ServiceError::internal_error(format!("Password hashing failed: {}", e)))
    }

    /// Verify a password against the stored hash
    fn verify_password(password: &str, hash: &str) -> ServiceResult<bool> {
        verify(password, hash).map_err(|e| {
            ServiceError::internal_error(format!("Password verification failed: {}", e))
        })
    }
}
