//! Rental duration tiers and their price multipliers

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

use crate::error::AppError;

/// Fixed rental-length options. Every unit is priced from the same
/// four-entry multiplier table applied to its base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DurationTier {
    #[serde(rename = "4h")]
    FourHours,
    #[serde(rename = "8h")]
    EightHours,
    #[serde(rename = "12h")]
    TwelveHours,
    #[serde(rename = "24h")]
    OneDay,
}

impl DurationTier {
    /// All tiers in ascending duration order
    pub const ALL: [DurationTier; 4] = [
        DurationTier::FourHours,
        DurationTier::EightHours,
        DurationTier::TwelveHours,
        DurationTier::OneDay,
    ];

    /// Price multiplier applied to a unit's base price.
    /// The table is global and unit-independent; there is no
    /// interpolation and no tier beyond 24h.
    pub fn multiplier(&self) -> Decimal {
        match self {
            DurationTier::FourHours => Decimal::new(10, 1),
            DurationTier::EightHours => Decimal::new(18, 1),
            DurationTier::TwelveHours => Decimal::new(25, 1),
            DurationTier::OneDay => Decimal::new(40, 1),
        }
    }

    /// Wire code for this tier
    pub fn as_code(&self) -> &'static str {
        match self {
            DurationTier::FourHours => "4h",
            DurationTier::EightHours => "8h",
            DurationTier::TwelveHours => "12h",
            DurationTier::OneDay => "24h",
        }
    }

    /// Human-readable label shown in duration pickers
    pub fn label(&self) -> &'static str {
        match self {
            DurationTier::FourHours => "4 hours",
            DurationTier::EightHours => "8 hours",
            DurationTier::TwelveHours => "12 hours",
            DurationTier::OneDay => "1 day (24 hours)",
        }
    }
}

impl Default for DurationTier {
    fn default() -> Self {
        DurationTier::FourHours
    }
}

impl FromStr for DurationTier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "4h" => Ok(DurationTier::FourHours),
            "8h" => Ok(DurationTier::EightHours),
            "12h" => Ok(DurationTier::TwelveHours),
            "24h" => Ok(DurationTier::OneDay),
            other => Err(AppError::InvalidTier(other.to_string())),
        }
    }
}

impl std::fmt::Display for DurationTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_table() {
        assert_eq!(DurationTier::FourHours.multiplier(), Decimal::new(10, 1));
        assert_eq!(DurationTier::EightHours.multiplier(), Decimal::new(18, 1));
        assert_eq!(DurationTier::TwelveHours.multiplier(), Decimal::new(25, 1));
        assert_eq!(DurationTier::OneDay.multiplier(), Decimal::new(40, 1));
    }

    #[test]
    fn test_parse_codes() {
        assert_eq!("4h".parse::<DurationTier>().unwrap(), DurationTier::FourHours);
        assert_eq!("24h".parse::<DurationTier>().unwrap(), DurationTier::OneDay);
        assert!("48h".parse::<DurationTier>().is_err());
        assert!("".parse::<DurationTier>().is_err());
    }
}
