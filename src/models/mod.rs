//! Data models for FlexiStay

pub mod booking;
pub mod duration;
pub mod notification;
pub mod unit;

// Re-export commonly used types
pub use booking::{BookingDraft, BookingSession, ConfirmedBooking, DraftField, Quote, SessionState, TierPrice};
pub use duration::DurationTier;
pub use notification::{Notification, Severity};
pub use unit::Unit;
