//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Concurrency**: Serializing booking creation per court and date

pub mod auth;
pub mod availability;
pub mod booking;
pub mod court;
pub mod mail;
pub mod notification;
pub mod user;

#[cfg(test)]
mod test;
