use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Info => write!(f, "info"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Receives the outcome of every workspace operation.
///
/// Implementations decide how to surface it (toast, status line, log);
/// the core only reports what happened.
pub trait Notifier {
    fn notify(&mut self, severity: Severity, message: &str);
}

/// Forwards notifications to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, severity: Severity, message: &str) {
        match severity {
            Severity::Error => tracing::warn!(%severity, "{message}"),
            _ => tracing::info!(%severity, "{message}"),
        }
    }
}

/// A notification captured by [`RecordingNotifier`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

/// Keeps every notification in memory, oldest first
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    notifications: Vec<Notification>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn last(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    /// Removes and returns everything recorded so far
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, severity: Severity, message: &str) {
        self.notifications.push(Notification {
            severity,
            message: message.to_string(),
        });
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&mut self, severity: Severity, message: &str) {
        (**self).notify(severity, message);
    }
}
