//! Module for core business logic services.
//!
//! This module encapsulates services that perform specific business
//! operations and orchestrate interactions between the API layer and the
//! rental store.

pub mod car_service;
