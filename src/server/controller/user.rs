use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{UpdateProfileDto, UserDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::user::UpdateProfileParams,
        service::user::UserService, state::AppState,
    },
};

/// Tag for grouping profile endpoints in OpenAPI documentation
pub static PROFILE_TAG: &str = "profile";

/// GET /api/profile - Get the logged-in user's profile
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Caller's profile", body = UserDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db).get_profile(&caller).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// PUT /api/profile - Update the logged-in user's name and email
///
/// Bookings made before the change keep the old email; reminders use the new one.
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `400 Bad Request` - Blank name or malformed email
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    put,
    path = "/api/profile",
    tag = PROFILE_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db)
        .update_profile(&caller, UpdateProfileParams::from_dto(payload), Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
