//! Defines the HTTP routes for the car inventory.
//!
//! These routes provide the list and create endpoints over the rental
//! store. They are designed to be nested into the main Axum router.

use super::handlers::{create_car, list_cars};
use axum::{Router, routing::get};

pub fn car_router() -> Router {
    Router::new().route("/", get(list_cars).post(create_car))
}
