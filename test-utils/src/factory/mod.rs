//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each
//! entity has a `Factory` struct for customization and a `create_*` convenience function
//! for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let court = factory::court::create_court(&db).await?;
//!
//! let booking = factory::booking::BookingFactory::new(&db, &user, &court)
//!     .window(start, end)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `court` - Create court entities
//! - `booking` - Create booking entities for a user and court
//! - `helpers` - Unique id generation and dependency helpers

pub mod booking;
pub mod court;
pub mod helpers;
pub mod user;

pub use booking::create_booking;
pub use court::create_court;
pub use user::create_user;
