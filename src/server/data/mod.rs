//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories return SeaORM entity models; services lift
//! them into domain models. Booking and court repositories accept any SeaORM
//! connection type.

pub mod booking;
pub mod court;
pub mod user;
