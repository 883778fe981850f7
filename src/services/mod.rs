//! Business logic services

pub mod bookings;
pub mod notifications;
pub mod units;

use std::sync::Arc;

use crate::{catalog::Catalog, config::BookingConfig};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub units: units::UnitsService,
    pub bookings: bookings::BookingsService,
    pub notifications: notifications::NotificationsService,
}

impl Services {
    /// Create all services over the shared catalog
    pub fn new(catalog: Arc<Catalog>, booking_config: BookingConfig) -> Self {
        let notifications = notifications::NotificationsService::new();
        Self {
            units: units::UnitsService::new(Arc::clone(&catalog)),
            bookings: bookings::BookingsService::new(
                catalog,
                notifications.clone(),
                booking_config,
            ),
            notifications,
        }
    }
}
