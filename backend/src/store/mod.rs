//! Module for the in-memory rental store.
//!
//! This module defines the storage abstraction handlers and services work
//! against, plus the process-lifetime in-memory implementation used in
//! production. The store is injected into the router as an
//! `Extension(Arc<dyn RentalStore>)` so tests can substitute a fake.

use crate::errors::{ServiceError, ServiceResult};
use crate::store::models::{Car, CreateCar, CreateUser, User};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

pub mod models;

/// Storage operations the services depend on.
#[async_trait]
pub trait RentalStore: Send + Sync {
    /// Returns all cars in insertion order.
    async fn list_cars(&self) -> Vec<Car>;

    /// Appends a car, assigning an id when the caller did not supply one.
    async fn create_car(&self, car: CreateCar) -> ServiceResult<Car>;

    /// Looks up a user by exact username match.
    async fn find_user_by_username(&self, username: &str) -> Option<User>;
}

/// Shared handle to the store, as stored in request extensions.
pub type DynStore = Arc<dyn RentalStore>;

#[derive(Debug, Default)]
struct StoreInner {
    cars: Vec<Car>,
    users: Vec<User>,
    next_car_id: i64,
    next_user_id: i64,
}

/// In-memory, non-persistent store. Created empty at process start and lost
/// at process stop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<StoreInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a user, assigning the next free id.
    ///
    /// Not part of [`RentalStore`]: the API exposes no registration
    /// endpoint, so users only enter the store through whatever seeds it.
    pub async fn create_user(&self, user: CreateUser) -> User {
        let mut inner = self.inner.write().await;
        inner.next_user_id += 1;
        let user = User {
            id: inner.next_user_id,
            username: user.username,
            password_hash: user.password_hash,
        };
        inner.users.push(user.clone());
        user
    }
}

#[async_trait]
impl RentalStore for MemoryStore {
    async fn list_cars(&self) -> Vec<Car> {
        self.inner.read().await.cars.clone()
    }

    async fn create_car(&self, car: CreateCar) -> ServiceResult<Car> {
        let mut inner = self.inner.write().await;

        let id = match car.id {
            Some(id) => {
                if inner.cars.iter().any(|existing| existing.id == id) {
                    return Err(ServiceError::already_exists("Car", id.to_string()));
                }
                // Keep the counter ahead of explicit ids so later automatic
                // assignments cannot collide.
                inner.next_car_id = inner.next_car_id.max(id);
                id
            }
            None => {
                inner.next_car_id += 1;
                inner.next_car_id
            }
        };

        let car = Car {
            id,
            make: car.make,
            model: car.model,
            year: car.year,
            price: car.price,
        };
        inner.cars.push(car.clone());
        Ok(car)
    }

    async fn find_user_by_username(&self, username: &str) -> Option<User> {
        self.inner
            .read()
            .await
            .users
            .iter()
            .find(|user| user.username == username)
            .cloned()
    }
}
