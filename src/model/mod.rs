//! Wire-level DTOs shared by the HTTP controllers and the OpenAPI document.
//!
//! Every DTO serializes with camelCase field names. Dates travel as `YYYY-MM-DD`
//! strings and times of day as `HH:MM` strings in the venue's local time.

pub mod api;
pub mod booking;
pub mod court;
pub mod user;
