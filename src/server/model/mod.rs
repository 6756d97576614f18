//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are lifted from entity
//! models by the services and transformed to DTOs at the controller boundary.

pub mod booking;
pub mod court;
pub mod time_window;
pub mod user;
