//! API handlers for FlexiStay REST endpoints

pub mod bookings;
pub mod health;
pub mod notifications;
pub mod openapi;
pub mod units;
