//! Booking draft, quote and confirmed booking models

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::duration::DurationTier;
use super::unit::Unit;
use crate::error::{AppError, AppResult};

/// Editable fields of a booking draft. Field edits arrive by name from
/// the form; anything outside these seven is rejected at the request
/// boundary and never reaches the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    CheckInDate,
    CheckInTime,
    Duration,
    GuestCount,
    CustomerName,
    CustomerPhone,
    CustomerEmail,
}

/// In-progress booking form state for one session.
///
/// Edits are free-form; business validation happens only at submit.
/// Guest count is intentionally not checked against unit capacity and the
/// email is never format-validated (the form collects both, the rules
/// never use them).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingDraft {
    pub check_in_date: Option<NaiveDate>,
    #[schema(value_type = String, example = "14:00:00")]
    pub check_in_time: NaiveTime,
    pub duration: DurationTier,
    pub guest_count: i32,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            check_in_date: None,
            check_in_time: NaiveTime::from_hms_opt(14, 0, 0).expect("valid time literal"),
            duration: DurationTier::default(),
            guest_count: 1,
            customer_name: String::new(),
            customer_phone: String::new(),
            customer_email: String::new(),
        }
    }
}

impl BookingDraft {
    /// Apply a single field edit. Values arrive as form strings; parsing
    /// is per-field, business validation is deferred to submit.
    pub fn set_field(&mut self, field: DraftField, value: &str) -> AppResult<()> {
        match field {
            DraftField::CheckInDate => {
                self.check_in_date = if value.is_empty() {
                    None
                } else {
                    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| {
                        AppError::BadRequest(format!("Invalid check-in date '{}': {}", value, e))
                    })?;
                    Some(date)
                };
            }
            DraftField::CheckInTime => {
                self.check_in_time = NaiveTime::parse_from_str(value, "%H:%M").map_err(|e| {
                    AppError::BadRequest(format!("Invalid check-in time '{}': {}", value, e))
                })?;
            }
            DraftField::Duration => {
                self.duration = value.parse()?;
            }
            DraftField::GuestCount => {
                self.guest_count = value.parse().map_err(|e| {
                    AppError::BadRequest(format!("Invalid guest count '{}': {}", value, e))
                })?;
            }
            DraftField::CustomerName => self.customer_name = value.to_string(),
            DraftField::CustomerPhone => self.customer_phone = value.to_string(),
            DraftField::CustomerEmail => self.customer_email = value.to_string(),
        }
        Ok(())
    }

    /// Required-field check applied at submit. All three checks feed one
    /// combined error; there are no field-level error kinds.
    pub fn validate_required(&self) -> AppResult<()> {
        let missing = self.check_in_date.is_none()
            || self.customer_name.is_empty()
            || self.customer_phone.is_empty();
        if missing {
            return Err(AppError::IncompleteData);
        }
        Ok(())
    }
}

/// Computed total price for a draft's current tier. Always derived from
/// the base price on demand, never cached across tier changes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Quote {
    pub duration: DurationTier,
    #[schema(value_type = String, example = "1.8")]
    pub multiplier: Decimal,
    #[schema(value_type = String, example = "270000")]
    pub total_price: Decimal,
}

impl Quote {
    /// Price a duration tier against a unit's base price
    pub fn compute(base_price: i64, duration: DurationTier) -> Self {
        let multiplier = duration.multiplier();
        let total_price = (Decimal::from(base_price) * multiplier).normalize();
        Self {
            duration,
            multiplier,
            total_price,
        }
    }
}

/// One priced duration option, as shown in the duration picker
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TierPrice {
    pub duration: DurationTier,
    pub label: &'static str,
    #[schema(value_type = String, example = "270000")]
    pub total_price: Decimal,
}

impl TierPrice {
    /// All four tiers priced for a unit, in ascending duration order
    pub fn options_for(base_price: i64) -> Vec<TierPrice> {
        DurationTier::ALL
            .iter()
            .map(|&duration| TierPrice {
                duration,
                label: duration.label(),
                total_price: Quote::compute(base_price, duration).total_price,
            })
            .collect()
    }
}

/// Lifecycle state of a booking session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// Draft is open for edits
    Editing,
    /// Submit succeeded; the session stays visible until auto-close
    Confirmed,
}

/// The single active booking dialog: one unit, one draft.
/// Opened only for an available unit; discarded on close.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookingSession {
    pub id: Uuid,
    pub unit_id: i64,
    pub state: SessionState,
    pub draft: BookingDraft,
    pub opened_at: DateTime<Utc>,
}

impl BookingSession {
    pub fn open(unit_id: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            unit_id,
            state: SessionState::Editing,
            draft: BookingDraft::default(),
            opened_at: Utc::now(),
        }
    }
}

/// Terminal result of a successful submit. Produced, reported, never
/// persisted.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ConfirmedBooking {
    pub id: Uuid,
    pub unit: Unit,
    pub draft: BookingDraft,
    pub quote: Quote,
    pub confirmed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_exact_totals() {
        assert_eq!(
            Quote::compute(150000, DurationTier::FourHours).total_price,
            Decimal::from(150000)
        );
        assert_eq!(
            Quote::compute(150000, DurationTier::EightHours).total_price,
            Decimal::from(270000)
        );
        assert_eq!(
            Quote::compute(150000, DurationTier::TwelveHours).total_price,
            Decimal::from(375000)
        );
        assert_eq!(
            Quote::compute(150000, DurationTier::OneDay).total_price,
            Decimal::from(600000)
        );
    }

    #[test]
    fn test_draft_defaults() {
        let draft = BookingDraft::default();
        assert!(draft.check_in_date.is_none());
        assert_eq!(draft.check_in_time.to_string(), "14:00:00");
        assert_eq!(draft.duration, DurationTier::FourHours);
        assert_eq!(draft.guest_count, 1);
    }

    #[test]
    fn test_set_field_parses_typed_values() {
        let mut draft = BookingDraft::default();
        draft.set_field(DraftField::CheckInDate, "2025-06-01").unwrap();
        draft.set_field(DraftField::CheckInTime, "16:30").unwrap();
        draft.set_field(DraftField::Duration, "12h").unwrap();
        draft.set_field(DraftField::GuestCount, "3").unwrap();

        assert_eq!(
            draft.check_in_date,
            NaiveDate::from_ymd_opt(2025, 6, 1)
        );
        assert_eq!(draft.duration, DurationTier::TwelveHours);
        assert_eq!(draft.guest_count, 3);
    }

    #[test]
    fn test_set_field_rejects_garbage() {
        let mut draft = BookingDraft::default();
        assert!(draft.set_field(DraftField::CheckInDate, "tomorrow").is_err());
        assert!(draft.set_field(DraftField::Duration, "36h").is_err());
        assert!(draft.set_field(DraftField::GuestCount, "many").is_err());
    }

    #[test]
    fn test_clearing_date_resets_to_empty() {
        let mut draft = BookingDraft::default();
        draft.set_field(DraftField::CheckInDate, "2025-06-01").unwrap();
        draft.set_field(DraftField::CheckInDate, "").unwrap();
        assert!(draft.check_in_date.is_none());
    }

    #[test]
    fn test_validate_required_combined_error() {
        let mut draft = BookingDraft::default();
        draft.set_field(DraftField::CheckInDate, "2025-06-01").unwrap();
        draft.set_field(DraftField::CustomerName, "Budi").unwrap();
        assert!(matches!(
            draft.validate_required(),
            Err(AppError::IncompleteData)
        ));

        draft.set_field(DraftField::CustomerPhone, "081234567890").unwrap();
        assert!(draft.validate_required().is_ok());
    }

    #[test]
    fn test_guest_count_and_email_never_validated() {
        let mut draft = BookingDraft::default();
        draft.set_field(DraftField::CheckInDate, "2025-06-01").unwrap();
        draft.set_field(DraftField::CustomerName, "Budi").unwrap();
        draft.set_field(DraftField::CustomerPhone, "081234567890").unwrap();
        draft.set_field(DraftField::GuestCount, "0").unwrap();
        draft.set_field(DraftField::CustomerEmail, "not-an-email").unwrap();

        assert!(draft.validate_required().is_ok());
    }
}
