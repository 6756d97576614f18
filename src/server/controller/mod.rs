pub mod admin;
pub mod auth;
pub mod booking;
pub mod court;
pub mod health;
pub mod user;
