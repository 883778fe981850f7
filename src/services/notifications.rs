//! Notification service: broadcasts user-facing notices to subscribers

use tokio::sync::broadcast;

use crate::models::{Notification, Severity};

const CHANNEL_CAPACITY: usize = 64;

#[derive(Clone)]
pub struct NotificationsService {
    sender: broadcast::Sender<Notification>,
}

impl NotificationsService {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Subscribe to the notification stream
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    /// Publish a notification to all current subscribers.
    /// Delivery is best-effort; a send with no subscribers is not an error.
    pub fn publish(&self, notification: Notification) {
        tracing::debug!(
            "Notification [{:?}]: {} - {}",
            notification.severity,
            notification.title,
            notification.description
        );
        let _ = self.sender.send(notification);
    }

    /// Confirmation notice after a successful booking submit
    pub fn booking_confirmed(&self, unit_name: &str) {
        self.publish(Notification {
            title: "Booking Confirmed".to_string(),
            description: format!(
                "Booking for {} confirmed. Your access code will be sent via WhatsApp.",
                unit_name
            ),
            severity: Severity::Info,
        });
    }

    /// Validation notice when required fields are missing at submit
    pub fn incomplete_data(&self) {
        self.publish(Notification {
            title: "Incomplete Data".to_string(),
            description: "Please complete all required fields.".to_string(),
            severity: Severity::Error,
        });
    }
}

impl Default for NotificationsService {
    fn default() -> Self {
        Self::new()
    }
}
