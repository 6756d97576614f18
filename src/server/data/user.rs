//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles registration inserts, lookups by ID and student ID, and profile updates.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::user::{NewUser, UpdateProfileParams};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading and updating user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// The unique index on `student_id` rejects duplicates; the service checks first so
    /// the common case produces a friendly error.
    ///
    /// # Arguments
    /// - `param` - User values with an already hashed password
    /// - `now` - Timestamp recorded as created and updated time
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored user
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn create(
        &self,
        param: NewUser,
        now: DateTime<Utc>,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            student_id: ActiveValue::Set(param.student_id),
            password_hash: ActiveValue::Set(param.password_hash),
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            profile_picture: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a user by their student ID.
    ///
    /// Used for login and by the notification sweep to resolve a booking owner's
    /// current email address.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that student ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_student_id(
        &self,
        student_id: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::StudentId.eq(student_id))
            .one(self.db)
            .await
    }

    /// Updates a user's display name and email.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated user
    /// - `Ok(None)` - No user with this ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(
        &self,
        id: i32,
        param: UpdateProfileParams,
        now: DateTime<Utc>,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut user: entity::user::ActiveModel = user.into();
        user.name = ActiveValue::Set(param.name);
        user.email = ActiveValue::Set(param.email);
        user.updated_at = ActiveValue::Set(now);

        Ok(Some(user.update(self.db).await?))
    }
}
