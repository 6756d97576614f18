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
        api::{ErrorDto, MessageDto},
        booking::{BookingDto, CheckAvailabilityDto, CourtAvailabilityDto, CreateBookingDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::booking::{CourtAvailability, CreateBookingParams},
        service::availability::AvailabilityService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Book a court for the logged-in user.
///
/// Date and times are venue local. The start must be in the future, the end after the
/// start, and the booking at most two hours long. The court must exist, be active and
/// be free for the whole window.
///
/// # Access Control
/// - Logged-in user
///
/// # Returns
/// - `201 Created` - The new booking
/// - `400 Bad Request` - Invalid date or time, rule violation, or inactive court
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Unknown court number
/// - `409 Conflict` - Window overlaps an active booking
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = BookingDto),
        (status = 400, description = "Invalid booking request", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Court not found", body = ErrorDto),
        (status = 409, description = "Court already booked for the window", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let booking = state
        .booking_service()
        .create(&caller, CreateBookingParams::from_dto(payload), Utc::now())
        .await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto(&state.venue))))
}

/// List the logged-in user's bookings, newest first.
///
/// Bookings that have ended are marked completed before listing.
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "Caller's bookings", body = Vec<BookingDto>),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let bookings = state
        .booking_service()
        .list_for_caller(&caller, Utc::now())
        .await?;

    let bookings: Vec<BookingDto> = bookings
        .into_iter()
        .map(|b| b.into_dto(&state.venue))
        .collect();

    Ok((StatusCode::OK, Json(bookings)))
}

/// Check whether one court is free for a window.
///
/// # Returns
/// - `200 OK` - `isAvailable` is false when the court is inactive or taken
/// - `400 Bad Request` - Malformed date or time, or end not after start
/// - `404 Not Found` - Unknown court number
#[utoipa::path(
    post,
    path = "/api/bookings/check",
    tag = BOOKING_TAG,
    request_body = CheckAvailabilityDto,
    responses(
        (status = 200, description = "Availability of the court", body = CourtAvailabilityDto),
        (status = 400, description = "Invalid date or time", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Court not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_availability(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CheckAvailabilityDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let slot = state
        .venue
        .parse_slot(&payload.booking_date, &payload.start_time, &payload.end_time)?;
    slot.ensure_ordered()?;

    let is_available = AvailabilityService::new(&state.db)
        .check_available(payload.court_number, &slot)
        .await?;

    let availability = CourtAvailability {
        court_number: payload.court_number,
        is_available,
    };

    Ok((StatusCode::OK, Json(availability.into_dto())))
}

/// Cancel a booking.
///
/// # Access Control
/// - Owner of the booking, or an admin
///
/// # Returns
/// - `200 OK` - Booking cancelled
/// - `400 Bad Request` - Booking already cancelled
/// - `403 Forbidden` - Caller neither owns the booking nor is an admin
/// - `404 Not Found` - No booking with this ID
#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking cancelled", body = MessageDto),
        (status = 400, description = "Booking already cancelled", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to cancel this booking", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    state
        .booking_service()
        .cancel(&caller, id, Utc::now())
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Booking cancelled successfully".to_string(),
        }),
    ))
}
