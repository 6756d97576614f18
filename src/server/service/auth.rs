//! Registration and password login.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{NewUser, RegisterUserParams, Role, User},
};

/// Service for creating accounts and verifying credentials.
///
/// Password hashing runs on the blocking thread pool so bcrypt's work factor does not
/// stall the async runtime.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    hash_cost: u32,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            hash_cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Overrides the bcrypt work factor.
    pub fn with_hash_cost(mut self, hash_cost: u32) -> Self {
        self.hash_cost = hash_cost;
        self
    }

    /// Registers a new user with the `user` role.
    ///
    /// # Arguments
    /// - `params` - Student ID, plain password, name and optional email
    /// - `now` - Creation timestamp
    ///
    /// # Returns
    /// - `Ok(User)` - The stored user
    /// - `Err(AppError::Validation)` - Blank fields, short password or bad email
    /// - `Err(AppError::AuthErr(StudentIdTaken))` - Student ID already registered
    pub async fn register(
        &self,
        params: RegisterUserParams,
        now: DateTime<Utc>,
    ) -> Result<User, AppError> {
        params.validate()?;

        let repo = UserRepository::new(self.db);
        if repo.find_by_student_id(&params.student_id).await?.is_some() {
            return Err(AuthError::StudentIdTaken(params.student_id).into());
        }

        let password = params.password;
        let cost = self.hash_cost;
        let password_hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))??;

        let student_id = params.student_id.clone();
        let user = repo
            .create(
                NewUser {
                    student_id: params.student_id,
                    password_hash,
                    name: params.name,
                    email: params.email,
                    role: Role::User,
                },
                now,
            )
            .await
            .map_err(|e| match e.sql_err() {
                // Lost a race with a concurrent registration past the lookup above.
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AuthError::StudentIdTaken(student_id).into()
                }
                _ => AppError::from(e),
            })?;

        tracing::info!("Registered user {}", user.student_id);

        User::from_entity(user)
    }

    /// Verifies a student ID and password.
    ///
    /// Unknown student IDs and wrong passwords produce the same error.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown user or wrong password
    pub async fn login(&self, student_id: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_student_id(student_id.trim())
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let password = password.to_string();
        let hash = user.password_hash.clone();
        let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| AppError::InternalError(format!("Password check task failed: {}", e)))?
            .unwrap_or(false);

        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        User::from_entity(user)
    }
}
