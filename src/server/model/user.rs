//! User domain models and parameters.
//!
//! Provides the stored user record, the typed `Caller` identity handed to every booking
//! operation, and parameter types for registration and profile updates.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{RegisterDto, UpdateProfileDto, UserDto},
    server::error::{internal::InternalError, AppError},
};

/// Authorization role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Self::User),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// Registered user with login credentials and contact details.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Unique login key.
    pub student_id: String,
    pub password_hash: String,
    pub name: String,
    pub email: Option<String>,
    pub role: Role,
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(UnknownRole))` - Stored role is not recognized
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = Role::parse(&entity.role).ok_or(InternalError::UnknownRole {
            user_id: entity.id,
            value: entity.role.clone(),
        })?;

        Ok(Self {
            id: entity.id,
            student_id: entity.student_id,
            password_hash: entity.password_hash,
            name: entity.name,
            email: entity.email,
            role,
            profile_picture: entity.profile_picture,
            created_at: entity.created_at,
        })
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash never leaves the server.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            student_id: self.student_id,
            name: self.name,
            email: self.email,
            role: self.role.as_str().to_string(),
            profile_picture: self.profile_picture,
        }
    }

    pub fn caller(&self) -> Caller {
        Caller {
            user_id: self.id,
            student_id: self.student_id.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

/// Authenticated identity passed explicitly into core booking operations.
///
/// Resolved once per request by the auth guard; core logic never reads the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Caller {
    pub user_id: i32,
    pub student_id: String,
    pub email: Option<String>,
    pub role: Role,
}

impl Caller {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Parameters for registering a new user.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub student_id: String,
    /// Plain text password, hashed by the service before storage.
    pub password: String,
    pub name: String,
    pub email: Option<String>,
}

impl RegisterUserParams {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            student_id: dto.student_id.trim().to_string(),
            password: dto.password,
            name: dto.name.trim().to_string(),
            email: normalize_email(dto.email),
        }
    }

    /// Rejects blank identifiers and passwords shorter than 6 characters.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.student_id.is_empty() {
            return Err(AppError::Validation("Student ID is required".to_string()));
        }
        if self.name.is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }
        if self.password.chars().count() < 6 {
            return Err(AppError::Validation(
                "Password must be at least 6 characters".to_string(),
            ));
        }
        validate_email(self.email.as_deref())
    }
}

/// Row values for inserting a user once the password has been hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub student_id: String,
    pub password_hash: String,
    pub name: String,
    pub email: Option<String>,
    pub role: Role,
}

/// Parameters for updating the caller's own profile.
#[derive(Debug, Clone)]
pub struct UpdateProfileParams {
    pub name: String,
    pub email: Option<String>,
}

impl UpdateProfileParams {
    pub fn from_dto(dto: UpdateProfileDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            email: normalize_email(dto.email),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }
        validate_email(self.email.as_deref())
    }
}

/// Trims the address and treats blank input as absent.
fn normalize_email(email: Option<String>) -> Option<String> {
    email
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
}

fn validate_email(email: Option<&str>) -> Result<(), AppError> {
    match email {
        Some(email) if !email.contains('@') || email.starts_with('@') || email.ends_with('@') => {
            Err(AppError::Validation("Invalid email address".to_string()))
        }
        _ => Ok(()),
    }
}
