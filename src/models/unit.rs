//! Rental unit (catalog entry) model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A bookable rental unit. The catalog is seeded once at startup and is
/// immutable for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Unit {
    pub id: i64,
    pub name: String,
    /// Display type, e.g. "Studio" or "1 Bedroom"
    pub unit_type: String,
    #[serde(default)]
    pub description: String,
    /// Price for the shortest duration tier, in whole currency units
    #[validate(range(min = 0))]
    pub base_price: i64,
    /// Display label for the price basis, e.g. "per 4 hours"
    #[serde(default)]
    pub price_type: String,
    /// Maximum number of guests
    #[validate(range(min = 1))]
    pub capacity: i32,
    /// Amenity names in display order
    #[serde(default)]
    pub amenities: Vec<String>,
    pub available: bool,
}
