//! Rust structs that represent records held in the rental store.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the in-memory store. Note that these may differ from API-specific
//! models.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A car in the rental inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
}

/// Payload for adding a car to the inventory.
///
/// Unknown fields are rejected at the deserialization boundary instead of
/// being silently discarded. The id is optional; the store assigns the next
/// free one when it is absent.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateCar {
    pub id: Option<i64>,

    #[validate(length(min = 1, message = "Make is required"))]
    pub make: String,

    #[validate(length(min = 1, message = "Model is required"))]
    pub model: String,

    pub year: i32,

    pub price: f64,
}

/// A registered user. Never serialized to the API, so the password hash
/// cannot leak through a response body.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

/// Seed data for inserting a user into the store.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
}
