//! Car inventory business logic service.

use crate::errors::{ServiceError, ServiceResult};
use crate::store::DynStore;
use crate::store::models::{Car, CreateCar};
use validator::Validate;

/// Service for listing and adding cars in the rental inventory.
pub struct CarService<'a> {
    store: &'a DynStore,
}

impl<'a> CarService<'a> {
    /// Creates a new CarService instance.
    pub fn new(store: &'a DynStore) -> Self {
        Self { store }
    }

    /// Returns all cars currently in the inventory, in insertion order.
    pub async fn list_cars(&self) -> Vec<Car> {
        self.store.list_cars().await
    }

    /// Validates and stores a new car.
    ///
    /// # Errors
    /// Returns `ServiceError` for:
    /// - Validation failures
    /// - An explicit id that is already taken
    pub async fn create_car(&self, create_car: CreateCar) -> ServiceResult<Car> {
        // Input validation using validator crate
        if let Err(validation_errors) = create_car.validate() {
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

        self.store.create_car(create_car).await
    }
}
