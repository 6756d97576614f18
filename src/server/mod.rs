//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for court reservations: HTTP endpoints,
//! booking rules, data access and the background sweep. The backend uses Axum as the
//! web framework and SeaORM over SQLite for storage.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Booking rules and orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations returning entity models
//! - **Model Layer** (`model/`) - Domain models, time windows and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and the authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, slot locks, sweeper)
//! - **Startup** (`startup`) - Initialization of logging, database, sessions and mail transport
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Scheduler** (`scheduler/`) - Cron job completing ended bookings and sending reminders
//! - **Util** (`util/`) - Per-slot locks serializing booking creation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** resolves the session into a typed `Caller`
//! 3. **Controller** converts DTOs to params and calls the service with the caller
//! 4. **Service** applies booking rules and orchestrates data operations
//! 5. **Data** queries the database and returns entity models
//! 6. **Service** lifts entities into domain models
//! 7. **Controller** converts domain models to DTOs and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
