//! HTTP routes and the generated OpenAPI document.
//!
//! Handlers are registered through `utoipa-axum` so the document served at `/api/docs`
//! always matches the routes that exist.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{admin, auth, booking, court, health, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Courtopia",
        description = "Court reservation API"
    ),
    tags(
        (name = "auth", description = "Registration and session login"),
        (name = "court", description = "Courts and availability"),
        (name = "booking", description = "Creating and cancelling bookings"),
        (name = "profile", description = "The logged-in user's profile"),
        (name = "admin", description = "Administration")
    )
)]
struct ApiDoc;

/// Builds the API router with documentation, CORS and request tracing.
///
/// The session layer is added by the caller since it needs the database pool.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(court::get_courts))
        .routes(routes!(court::get_available_courts))
        .routes(routes!(court::get_court))
        .routes(routes!(booking::create_booking, booking::get_bookings))
        .routes(routes!(booking::check_availability))
        .routes(routes!(booking::cancel_booking))
        .routes(routes!(user::get_profile, user::update_profile))
        .routes(routes!(admin::update_court_status))
        .routes(routes!(admin::get_all_bookings))
        .routes(routes!(admin::trigger_notifications))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}
