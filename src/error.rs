//! Error types for FlexiStay server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error codes exposed in API error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    NoSuchUnit = 2,
    UnitNotAvailable = 3,
    IncompleteData = 4,
    InvalidTier = 5,
    BookingInProgress = 6,
    NoActiveBooking = 7,
    BookingAlreadyConfirmed = 8,
    BadValue = 9,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unit not available: {0}")]
    UnitNotAvailable(String),

    #[error("Please complete all required fields.")]
    IncompleteData,

    #[error("Invalid duration tier: {0}")]
    InvalidTier(String),

    #[error("A booking is already in progress")]
    BookingInProgress,

    #[error("No active booking session")]
    NoActiveBooking,

    #[error("Booking already confirmed")]
    BookingAlreadyConfirmed,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorCode::NoSuchUnit, msg.clone())
            }
            AppError::UnitNotAvailable(msg) => {
                (StatusCode::CONFLICT, ErrorCode::UnitNotAvailable, msg.clone())
            }
            AppError::IncompleteData => (
                StatusCode::BAD_REQUEST,
                ErrorCode::IncompleteData,
                self.to_string(),
            ),
            AppError::InvalidTier(_) => (
                StatusCode::BAD_REQUEST,
                ErrorCode::InvalidTier,
                self.to_string(),
            ),
            AppError::BookingInProgress => (
                StatusCode::CONFLICT,
                ErrorCode::BookingInProgress,
                self.to_string(),
            ),
            AppError::NoActiveBooking => (
                StatusCode::NOT_FOUND,
                ErrorCode::NoActiveBooking,
                self.to_string(),
            ),
            AppError::BookingAlreadyConfirmed => (
                StatusCode::CONFLICT,
                ErrorCode::BookingAlreadyConfirmed,
                self.to_string(),
            ),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
