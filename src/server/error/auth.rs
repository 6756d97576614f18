use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    ///
    /// The caller never logged in or the session expired. Results in a 401 Unauthorized
    /// response.
    #[error("Failed to find user ID in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response so the client logs in again.
    ///
    /// # Fields
    /// - ID of the user stored in the session
    #[error("Failed to find user {0} in database")]
    UserNotInDatabase(i32),

    /// Student ID unknown or password mismatch during login.
    ///
    /// Both cases share one variant so responses do not reveal which student IDs exist.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid student ID or password")]
    InvalidCredentials,

    /// Registration attempted with a student ID that is already taken.
    ///
    /// Results in a 409 Conflict response.
    ///
    /// # Fields
    /// - The student ID that was requested
    #[error("Student ID {0} is already registered")]
    StudentIdTaken(String),

    /// The authenticated user lacks a required permission.
    ///
    /// Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Description of the denied action for the server log
    #[error("User {0} was denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized with "Please log in to continue"
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid student ID or password"
/// - `StudentIdTaken` → 409 Conflict with "Student ID is already registered"
/// - `AccessDenied` → 403 Forbidden with a generic permission message
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Please log in to continue")
            }
            Self::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid student ID or password")
            }
            Self::StudentIdTaken(_) => (StatusCode::CONFLICT, "Student ID is already registered"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
