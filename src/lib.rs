//! FlexiStay Booking Server
//!
//! A Rust implementation of the FlexiStay short-term apartment rental
//! service, providing a REST JSON API for browsing rental units and
//! driving a booking session from draft to confirmation.

use std::sync::Arc;

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
