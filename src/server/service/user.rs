//! User service for profile reads and updates.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{Caller, UpdateProfileParams, User},
};

/// Service providing business logic for user profiles.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError)` - Database error or unreadable stored role
    pub async fn get_user(&self, user_id: i32) -> Result<Option<User>, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Gets the caller's own profile.
    pub async fn get_profile(&self, caller: &Caller) -> Result<User, AppError> {
        self.get_user(caller.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Updates the caller's display name and email.
    ///
    /// Existing bookings keep the email captured at creation; reminders prefer the
    /// current profile address.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated profile
    /// - `Err(AppError::Validation)` - Blank name or malformed email
    /// - `Err(AppError::NotFound)` - Caller's user record no longer exists
    pub async fn update_profile(
        &self,
        caller: &Caller,
        params: UpdateProfileParams,
        now: DateTime<Utc>,
    ) -> Result<User, AppError> {
        params.validate()?;

        let user = UserRepository::new(self.db)
            .update_profile(caller.user_id, params, now)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        User::from_entity(user)
    }
}
