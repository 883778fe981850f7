//! Booking session endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{BookingSession, ConfirmedBooking, DraftField, Quote, TierPrice},
};

/// Open booking request
#[derive(Deserialize, ToSchema)]
pub struct OpenBookingRequest {
    /// Unit to book; must exist and be available
    pub unit_id: i64,
}

/// Single field edit on the open draft
#[derive(Deserialize, ToSchema)]
pub struct UpdateFieldRequest {
    /// One of the seven editable draft fields
    pub field: DraftField,
    /// Raw form value; parsed per field
    pub value: String,
}

/// Booking session with the quote for its current draft
#[derive(Serialize, ToSchema)]
pub struct SessionResponse {
    pub session: BookingSession,
    pub quote: Quote,
}

/// Quote for the open draft plus all priced duration options
#[derive(Serialize, ToSchema)]
pub struct QuoteResponse {
    pub quote: Quote,
    pub options: Vec<TierPrice>,
}

/// Successful submit result
#[derive(Serialize, ToSchema)]
pub struct BookingConfirmation {
    /// Submit status
    pub status: String,
    /// The confirmed booking record
    pub booking: ConfirmedBooking,
}

/// Open a booking session for an available unit
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    request_body = OpenBookingRequest,
    responses(
        (status = 201, description = "Booking session opened", body = SessionResponse),
        (status = 404, description = "Unit not found"),
        (status = 409, description = "Unit not available, or a session is already open")
    )
)]
pub async fn open_booking(
    State(state): State<crate::AppState>,
    Json(request): Json<OpenBookingRequest>,
) -> AppResult<(StatusCode, Json<SessionResponse>)> {
    let session = state.services.bookings.open(request.unit_id).await?;
    let quote = state.services.bookings.quote().await?;

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse { session, quote }),
    ))
}

/// Get the open booking session
#[utoipa::path(
    get,
    path = "/bookings/current",
    tag = "bookings",
    responses(
        (status = 200, description = "Open session with its quote", body = SessionResponse),
        (status = 404, description = "No active booking session")
    )
)]
pub async fn get_current_booking(
    State(state): State<crate::AppState>,
) -> AppResult<Json<SessionResponse>> {
    let session = state.services.bookings.current().await?;
    let quote = state.services.bookings.quote().await?;
    Ok(Json(SessionResponse { session, quote }))
}

/// Apply one field edit to the open draft
#[utoipa::path(
    patch,
    path = "/bookings/current",
    tag = "bookings",
    request_body = UpdateFieldRequest,
    responses(
        (status = 200, description = "Updated session with its quote", body = SessionResponse),
        (status = 400, description = "Unparseable value or unknown duration tier"),
        (status = 404, description = "No active booking session"),
        (status = 409, description = "Session already confirmed")
    )
)]
pub async fn update_booking_field(
    State(state): State<crate::AppState>,
    Json(request): Json<UpdateFieldRequest>,
) -> AppResult<Json<SessionResponse>> {
    let session = state
        .services
        .bookings
        .update_field(request.field, &request.value)
        .await?;
    let quote = state.services.bookings.quote().await?;
    Ok(Json(SessionResponse { session, quote }))
}

/// Quote for the open draft
#[utoipa::path(
    get,
    path = "/bookings/current/quote",
    tag = "bookings",
    responses(
        (status = 200, description = "Quote and priced duration options", body = QuoteResponse),
        (status = 404, description = "No active booking session")
    )
)]
pub async fn get_booking_quote(
    State(state): State<crate::AppState>,
) -> AppResult<Json<QuoteResponse>> {
    let session = state.services.bookings.current().await?;
    let quote = state.services.bookings.quote().await?;
    let options = state.services.units.quote_options(session.unit_id)?;
    Ok(Json(QuoteResponse { quote, options }))
}

/// Submit the open draft
#[utoipa::path(
    post,
    path = "/bookings/current/submit",
    tag = "bookings",
    responses(
        (status = 200, description = "Booking confirmed", body = BookingConfirmation),
        (status = 400, description = "Required fields missing"),
        (status = 404, description = "No active booking session"),
        (status = 409, description = "Session already confirmed")
    )
)]
pub async fn submit_booking(
    State(state): State<crate::AppState>,
) -> AppResult<Json<BookingConfirmation>> {
    let booking = state.services.bookings.submit().await?;

    Ok(Json(BookingConfirmation {
        status: "confirmed".to_string(),
        booking,
    }))
}

/// Close the open booking session
#[utoipa::path(
    delete,
    path = "/bookings/current",
    tag = "bookings",
    responses(
        (status = 204, description = "Session closed"),
        (status = 404, description = "No active booking session")
    )
)]
pub async fn close_booking(State(state): State<crate::AppState>) -> AppResult<StatusCode> {
    state.services.bookings.close().await?;
    Ok(StatusCode::NO_CONTENT)
}
