//! User-facing notification model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Error,
}

/// A notification surfaced to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}
