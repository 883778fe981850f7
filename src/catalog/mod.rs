//! In-memory unit catalog.
//!
//! The catalog is seeded once at startup from a JSON file (or the
//! built-in reference data) and never mutated afterwards. There are no
//! create/update/delete operations.

use std::collections::HashSet;
use std::path::Path;

use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::Unit;

/// Fixed, read-only list of rental units in seed order
#[derive(Debug, Clone)]
pub struct Catalog {
    units: Vec<Unit>,
}

impl Catalog {
    /// Build a catalog from seed records, enforcing the seed invariants:
    /// capacity >= 1, base_price >= 0, unique ids.
    pub fn new(units: Vec<Unit>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for unit in &units {
            unit.validate().map_err(|e| {
                AppError::BadRequest(format!("Invalid unit seed record id={}: {}", unit.id, e))
            })?;
            if !seen.insert(unit.id) {
                return Err(AppError::BadRequest(format!(
                    "Duplicate unit id {} in seed data",
                    unit.id
                )));
            }
        }
        Ok(Self { units })
    }

    /// Load the catalog from a JSON seed file
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Internal(format!("Cannot read seed file {}: {}", path.display(), e))
        })?;
        let units: Vec<Unit> = serde_json::from_str(&raw).map_err(|e| {
            AppError::BadRequest(format!("Malformed seed file {}: {}", path.display(), e))
        })?;
        let catalog = Self::new(units)?;
        tracing::info!("Loaded {} units from {}", catalog.units.len(), path.display());
        Ok(catalog)
    }

    /// Catalog built from the reference seed data
    pub fn with_default_units() -> Self {
        Self {
            units: default_units(),
        }
    }

    /// All units in seed order
    pub fn list(&self) -> &[Unit] {
        &self.units
    }

    /// Look up a unit by id
    pub fn get(&self, id: i64) -> AppResult<&Unit> {
        self.units
            .iter()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::NotFound(format!("No unit with id {}", id)))
    }
}

/// Reference seed data: the three Margonda units
pub fn default_units() -> Vec<Unit> {
    vec![
        Unit {
            id: 1,
            name: "Studio Margonda 1".to_string(),
            unit_type: "Studio".to_string(),
            description: "Cozy studio apartment perfect for short stays".to_string(),
            base_price: 150000,
            price_type: "per 4 hours".to_string(),
            capacity: 2,
            amenities: ["WiFi", "AC", "TV", "Kitchen", "Parking"]
                .map(String::from)
                .to_vec(),
            available: true,
        },
        Unit {
            id: 2,
            name: "Deluxe Margonda 2".to_string(),
            unit_type: "1 Bedroom".to_string(),
            description: "Spacious one-bedroom with modern amenities".to_string(),
            base_price: 250000,
            price_type: "per 4 hours".to_string(),
            capacity: 4,
            amenities: ["WiFi", "AC", "TV", "Kitchen", "Parking", "Balcony"]
                .map(String::from)
                .to_vec(),
            available: true,
        },
        Unit {
            id: 3,
            name: "Premium Margonda 3".to_string(),
            unit_type: "2 Bedroom".to_string(),
            description: "Luxury two-bedroom apartment with premium facilities".to_string(),
            base_price: 400000,
            price_type: "per 4 hours".to_string(),
            capacity: 6,
            amenities: ["WiFi", "AC", "TV", "Kitchen", "Parking", "Balcony", "Gym Access"]
                .map(String::from)
                .to_vec(),
            available: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_is_valid() {
        let catalog = Catalog::new(default_units()).unwrap();
        assert_eq!(catalog.list().len(), 3);
        assert_eq!(catalog.list()[0].name, "Studio Margonda 1");
    }

    #[test]
    fn test_get_unknown_id() {
        let catalog = Catalog::with_default_units();
        assert!(catalog.get(1).is_ok());
        assert!(catalog.get(99).is_err());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut units = default_units();
        units[1].id = 1;
        assert!(Catalog::new(units).is_err());
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let mut units = default_units();
        units[0].capacity = 0;
        assert!(Catalog::new(units).is_err());
    }

    #[test]
    fn test_rejects_negative_price() {
        let mut units = default_units();
        units[0].base_price = -1;
        assert!(Catalog::new(units).is_err());
    }
}
