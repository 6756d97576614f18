//! Courtopia Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! reservation backend. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and factories for users, courts and bookings.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn books_a_court() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_booking_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let court = factory::court::create_court(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
