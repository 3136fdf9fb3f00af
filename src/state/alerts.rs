//! Transient notification state.

use serde::{Deserialize, Serialize};

/// Category of a pending alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Error,
    Success,
}

/// A single user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub message: String,
    pub kind: AlertKind,
}

impl Alert {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: AlertKind::Error,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: AlertKind::Success,
        }
    }
}

/// At most one pending alert, shown until explicitly removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertState {
    pending: Option<Alert>,
}

impl AlertState {
    pub fn pending(&self) -> Option<&Alert> {
        self.pending.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.pending.as_ref().map(|a| a.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }

    /// Set the pending alert, replacing any existing one.
    pub fn set(&mut self, alert: Alert) {
        self.pending = Some(alert);
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}
