use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub court_number: i32,
    /// `YYYY-MM-DD`
    pub booking_date: String,
    /// `HH:MM`, 24 hour clock
    pub start_time: String,
    /// `HH:MM`, 24 hour clock
    pub end_time: String,
}

/// Client-facing projection of a booking; never exposes owner IDs or internal flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i32,
    pub court_number: i32,
    pub booking_date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckAvailabilityDto {
    pub court_number: i32,
    pub booking_date: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourtAvailabilityDto {
    pub court_number: i32,
    pub is_available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityDto {
    pub booking_date: String,
    pub start_time: String,
    pub end_time: String,
    pub courts: Vec<CourtAvailabilityDto>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AvailabilityQuery {
    /// Day to check, `YYYY-MM-DD`
    pub date: String,
    /// Window start, `HH:MM`
    pub start_time: String,
    /// Window end, `HH:MM`
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SweepReportDto {
    pub promoted: u64,
    pub due: usize,
    pub sent: usize,
    pub failed: usize,
    pub skipped: usize,
}
