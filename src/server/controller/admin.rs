use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingDto, SweepReportDto},
        court::{CourtDto, UpdateCourtStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::court::CourtService,
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Open or close a court for booking.
///
/// Closing a court does not cancel its existing bookings.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    patch,
    path = "/api/admin/courts/{id}/status",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Court ID")
    ),
    request_body = UpdateCourtStatusDto,
    responses(
        (status = 200, description = "Court updated", body = CourtDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Court not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_court_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCourtStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let court = CourtService::new(&state.db)
        .set_active(id, payload.is_active)
        .await?;

    Ok((StatusCode::OK, Json(court.into_dto())))
}

/// List every booking, newest first.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/bookings",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All bookings", body = Vec<BookingDto>),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_bookings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let bookings = state.booking_service().list_all(Utc::now()).await?;

    let bookings: Vec<BookingDto> = bookings
        .into_iter()
        .map(|b| b.into_dto(&state.venue))
        .collect();

    Ok((StatusCode::OK, Json(bookings)))
}

/// Run the booking sweep now instead of waiting for the schedule.
///
/// Waits for a scheduled sweep that is already running, then completes ended bookings
/// and sends due reminders.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/admin/notifications/trigger",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Sweep finished", body = SweepReportDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn trigger_notifications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    tracing::info!("Booking sweep triggered by {}", caller.student_id);

    let run = state.sweeper.run(Utc::now()).await?;

    Ok((StatusCode::OK, Json(run.into_dto())))
}
