//! SeaORM entities for the court reservation schema.

pub mod prelude;

pub mod booking;
pub mod court;
pub mod user;
