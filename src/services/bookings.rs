//! Booking session service.
//!
//! Owns the single active booking session (the open dialog) and drives
//! the draft through edit, submit and close. Validation and pricing are
//! pure functions on the models; this service adds the session lifecycle
//! around them, including the delayed auto-close after confirmation.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::AbortHandle;
use uuid::Uuid;

use crate::{
    catalog::Catalog,
    config::BookingConfig,
    error::{AppError, AppResult},
    models::{BookingSession, ConfirmedBooking, DraftField, Quote, SessionState},
};

use super::notifications::NotificationsService;

/// The active session plus the pending auto-close task, if any
struct ActiveBooking {
    session: BookingSession,
    close_task: Option<AbortHandle>,
}

#[derive(Clone)]
pub struct BookingsService {
    catalog: Arc<Catalog>,
    notifications: NotificationsService,
    active: Arc<RwLock<Option<ActiveBooking>>>,
    auto_close: Duration,
}

impl BookingsService {
    pub fn new(
        catalog: Arc<Catalog>,
        notifications: NotificationsService,
        config: BookingConfig,
    ) -> Self {
        Self {
            catalog,
            notifications,
            active: Arc::new(RwLock::new(None)),
            auto_close: Duration::from_secs(config.auto_close_secs),
        }
    }

    /// Open a booking session for a unit.
    ///
    /// Availability is enforced here, before any draft exists; the
    /// validation and pricing functions themselves never look at it.
    /// At most one session can be open at a time.
    pub async fn open(&self, unit_id: i64) -> AppResult<BookingSession> {
        let unit = self.catalog.get(unit_id)?;
        if !unit.available {
            return Err(AppError::UnitNotAvailable(unit.name.clone()));
        }

        let mut guard = self.active.write().await;
        if guard.is_some() {
            return Err(AppError::BookingInProgress);
        }

        let session = BookingSession::open(unit_id);
        tracing::info!("Opened booking session {} for unit {}", session.id, unit_id);
        *guard = Some(ActiveBooking {
            session: session.clone(),
            close_task: None,
        });
        Ok(session)
    }

    /// The currently open session
    pub async fn current(&self) -> AppResult<BookingSession> {
        let guard = self.active.read().await;
        guard
            .as_ref()
            .map(|a| a.session.clone())
            .ok_or(AppError::NoActiveBooking)
    }

    /// Apply one field edit to the open draft. Free-form: no business
    /// validation happens here, only per-field parsing.
    pub async fn update_field(&self, field: DraftField, value: &str) -> AppResult<BookingSession> {
        let mut guard = self.active.write().await;
        let active = guard.as_mut().ok_or(AppError::NoActiveBooking)?;
        if active.session.state == SessionState::Confirmed {
            return Err(AppError::BookingAlreadyConfirmed);
        }
        active.session.draft.set_field(field, value)?;
        Ok(active.session.clone())
    }

    /// Quote for the open draft's current tier, recomputed on every call
    pub async fn quote(&self) -> AppResult<Quote> {
        let guard = self.active.read().await;
        let active = guard.as_ref().ok_or(AppError::NoActiveBooking)?;
        let unit = self.catalog.get(active.session.unit_id)?;
        Ok(Quote::compute(unit.base_price, active.session.draft.duration))
    }

    /// Validate and price the open draft.
    ///
    /// On a validation failure the session stays editable and the error
    /// notification is published. On success the confirmation is
    /// published, the session moves to `Confirmed` and is scheduled to
    /// close after the configured delay; the dialog stays visible in the
    /// success state until then.
    pub async fn submit(&self) -> AppResult<ConfirmedBooking> {
        let mut guard = self.active.write().await;
        let active = guard.as_mut().ok_or(AppError::NoActiveBooking)?;
        if active.session.state == SessionState::Confirmed {
            return Err(AppError::BookingAlreadyConfirmed);
        }

        let unit = self.catalog.get(active.session.unit_id)?.clone();

        if let Err(e) = active.session.draft.validate_required() {
            self.notifications.incomplete_data();
            return Err(e);
        }

        let quote = Quote::compute(unit.base_price, active.session.draft.duration);
        let booking = ConfirmedBooking {
            id: Uuid::new_v4(),
            draft: active.session.draft.clone(),
            quote,
            confirmed_at: chrono::Utc::now(),
            unit,
        };

        active.session.state = SessionState::Confirmed;
        tracing::info!(
            "Booking {} confirmed for unit {} (session {})",
            booking.id,
            booking.unit.id,
            active.session.id
        );
        self.notifications.booking_confirmed(&booking.unit.name);
        active.close_task = Some(self.spawn_auto_close(active.session.id));

        Ok(booking)
    }

    /// Close the open session, cancelling any pending auto-close
    pub async fn close(&self) -> AppResult<()> {
        let mut guard = self.active.write().await;
        let active = guard.take().ok_or(AppError::NoActiveBooking)?;
        if let Some(task) = active.close_task {
            task.abort();
        }
        tracing::info!("Closed booking session {}", active.session.id);
        Ok(())
    }

    /// Schedule removal of a confirmed session after the auto-close
    /// delay. The task is a no-op if that session is already gone.
    fn spawn_auto_close(&self, session_id: Uuid) -> AbortHandle {
        let active = Arc::clone(&self.active);
        let delay = self.auto_close;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut guard = active.write().await;
            if guard.as_ref().map(|a| a.session.id) == Some(session_id) {
                *guard = None;
                tracing::debug!("Booking session {} auto-closed", session_id);
            }
        });
        task.abort_handle()
    }
}
