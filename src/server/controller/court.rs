use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        booking::{AvailabilityDto, AvailabilityQuery},
        court::CourtDto,
    },
    server::{
        error::AppError, service::availability::AvailabilityService,
        service::court::CourtService, state::AppState,
    },
};

/// Tag for grouping court endpoints in OpenAPI documentation
pub static COURT_TAG: &str = "court";

/// List every court, ascending by court number.
///
/// Inactive courts are included so clients can show them as closed.
#[utoipa::path(
    get,
    path = "/api/courts",
    tag = COURT_TAG,
    responses(
        (status = 200, description = "All courts", body = Vec<CourtDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let courts = CourtService::new(&state.db).list().await?;

    let courts: Vec<CourtDto> = courts.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(courts)))
}

/// Availability of every active court for one window.
///
/// # Arguments
/// - `query` - Date (`YYYY-MM-DD`) plus start and end times (`HH:MM`), venue local
///
/// # Returns
/// - `200 OK` - Active courts ascending by number, each with `isAvailable`
/// - `400 Bad Request` - Malformed date or time, or end not after start
#[utoipa::path(
    get,
    path = "/api/courts/available",
    tag = COURT_TAG,
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Availability per active court", body = AvailabilityDto),
        (status = 400, description = "Invalid date or time", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_courts(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    let slot = state
        .venue
        .parse_slot(&query.date, &query.start_time, &query.end_time)?;
    slot.ensure_ordered()?;

    let courts = AvailabilityService::new(&state.db)
        .availability_for_all_active_courts(&slot)
        .await?;

    Ok((
        StatusCode::OK,
        Json(AvailabilityDto {
            booking_date: query.date,
            start_time: query.start_time,
            end_time: query.end_time,
            courts: courts.into_iter().map(|c| c.into_dto()).collect(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/courts/{id}",
    tag = COURT_TAG,
    params(
        ("id" = i32, Path, description = "Court ID")
    ),
    responses(
        (status = 200, description = "Court", body = CourtDto),
        (status = 404, description = "Court not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_court(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let court = CourtService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(court.into_dto())))
}
