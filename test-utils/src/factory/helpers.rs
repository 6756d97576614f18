//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique identifiers in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and an active court, the minimum needed to insert a booking.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, court))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::court::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let court = crate::factory::court::create_court(db).await?;

    Ok((user, court))
}
