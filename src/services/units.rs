//! Unit catalog service

use std::sync::Arc;

use crate::{
    catalog::Catalog,
    error::AppResult,
    models::{TierPrice, Unit},
};

#[derive(Clone)]
pub struct UnitsService {
    catalog: Arc<Catalog>,
}

impl UnitsService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// All units in seed order
    pub fn list_units(&self) -> Vec<Unit> {
        self.catalog.list().to_vec()
    }

    /// Get a unit by id
    pub fn get_unit(&self, id: i64) -> AppResult<Unit> {
        self.catalog.get(id).cloned()
    }

    /// All four duration tiers priced for a unit. Works for unavailable
    /// units too; this is display data, not a booking operation.
    pub fn quote_options(&self, id: i64) -> AppResult<Vec<TierPrice>> {
        let unit = self.catalog.get(id)?;
        Ok(TierPrice::options_for(unit.base_price))
    }
}
