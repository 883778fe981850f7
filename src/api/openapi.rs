//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{bookings, health, notifications, units};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FlexiStay API",
        version = "1.0.0",
        description = "Short-term apartment rental booking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "FlexiStay Team", email = "contact@flexistay.id")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Units
        units::list_units,
        units::get_unit,
        units::list_unit_quotes,
        // Bookings
        bookings::open_booking,
        bookings::get_current_booking,
        bookings::update_booking_field,
        bookings::get_booking_quote,
        bookings::submit_booking,
        bookings::close_booking,
        // Notifications
        notifications::stream_notifications,
    ),
    components(
        schemas(
            // Units
            crate::models::unit::Unit,
            units::UnitQuotesResponse,
            // Bookings
            crate::models::booking::BookingDraft,
            crate::models::booking::BookingSession,
            crate::models::booking::ConfirmedBooking,
            crate::models::booking::DraftField,
            crate::models::booking::Quote,
            crate::models::booking::SessionState,
            crate::models::booking::TierPrice,
            crate::models::duration::DurationTier,
            bookings::OpenBookingRequest,
            bookings::UpdateFieldRequest,
            bookings::SessionResponse,
            bookings::QuoteResponse,
            bookings::BookingConfirmation,
            // Notifications
            crate::models::notification::Notification,
            crate::models::notification::Severity,
            // Health
            health::HealthResponse,
            health::ReadyResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "units", description = "Rental unit catalog"),
        (name = "bookings", description = "Booking session management"),
        (name = "notifications", description = "Notification streaming")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
