//! Handler functions for the car inventory API endpoints.
//!
//! These functions process requests for inventory data, delegate to the
//! `CarService`, and shape the HTTP responses.

use crate::api::common::service_error_to_http;
use crate::services::car_service::CarService;
use crate::store::DynStore;
use crate::store::models::{Car, CreateCar};
use axum::{
    extract::{Extension, Json},
    http::{StatusCode, header},
};

/// Collection path the Location header of a create response points at.
const CARS_LOCATION: &str = "/api/cars";

/// Lists all cars in the inventory.
#[axum::debug_handler]
pub async fn list_cars(Extension(store): Extension<DynStore>) -> Json<Vec<Car>> {
    let car_service = CarService::new(&store);
    Json(car_service.list_cars().await)
}

/// Adds a car to the inventory.
#[axum::debug_handler]
pub async fn create_car(
    Extension(store): Extension<DynStore>,
    Json(payload): Json<CreateCar>,
) -> Result<(StatusCode, [(header::HeaderName, &'static str); 1], Json<Car>), (StatusCode, String)>
{
    let car_service = CarService::new(&store);

    match car_service.create_car(payload).await {
        Ok(car) => {
            tracing::info!("Car {} added to inventory", car.id);
            Ok((
                StatusCode::CREATED,
                [(header::LOCATION, CARS_LOCATION)],
                Json(car),
            ))
        }
        Err(error) => Err(service_error_to_http(error)),
    }
}
