//! # Common slice
//!
//! The snackbar queue shared by every feature: slices report problems
//! here and the presentation layer drains them on its own schedule.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::notify::{NotificationSink, Severity};

/// One queued notification awaiting presentation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnackbarMessage {
    /// Text shown to the user.
    pub message: String,

    /// How prominently the message should be presented.
    pub severity: Severity,
}

/// FIFO queue of user-facing notifications.
///
/// Implements [`NotificationSink`], so a slice can push failures without
/// knowing anything about presentation.
#[derive(Debug, Default)]
pub struct SnackbarQueue {
    queue: Mutex<VecDeque<SnackbarMessage>>,
}

impl SnackbarQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one message to the queue.
    pub fn enqueue<T: Into<String>>(&self, message: T, severity: Severity) {
        self.lock().push_back(SnackbarMessage {
            message: message.into(),
            severity,
        });
    }

    /// Remove and return every queued message, oldest first.
    pub fn drain(&self) -> Vec<SnackbarMessage> {
        self.lock().drain(..).collect()
    }

    /// Number of queued messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<SnackbarMessage>> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NotificationSink for SnackbarQueue {
    fn notify(&self, message: &str, severity: Severity) {
        self.enqueue(message, severity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enqueue_and_drain_preserves_order() {
        let queue = SnackbarQueue::new();
        queue.enqueue("first", Severity::Error);
        queue.enqueue("second", Severity::Info);

        let drained = queue.drain();

        assert_eq!(
            drained,
            vec![
                SnackbarMessage {
                    message: "first".to_string(),
                    severity: Severity::Error,
                },
                SnackbarMessage {
                    message: "second".to_string(),
                    severity: Severity::Info,
                },
            ]
        );
    }

    #[test]
    fn test_drain_empties_the_queue() {
        let queue = SnackbarQueue::new();
        queue.enqueue("only", Severity::Warning);

        assert_eq!(queue.len(), 1);
        assert!(!queue.is_empty());

        let _ = queue.drain();

        assert_eq!(queue.len(), 0);
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_notify_enqueues() {
        let queue = SnackbarQueue::new();
        let sink: &dyn NotificationSink = &queue;

        sink.notify("Insufficient privileges", Severity::Error);

        let drained = queue.drain();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].message, "Insufficient privileges");
        assert_eq!(drained[0].severity, Severity::Error);
    }

    #[test]
    fn test_snackbar_message_serialization() {
        let message = SnackbarMessage {
            message: "Failed to fetch user privileges".to_string(),
            severity: Severity::Error,
        };

        let json = serde_json::to_string(&message).unwrap();
        let parsed: SnackbarMessage = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, message);
        assert!(json.contains("\"severity\":\"error\""));
    }
}
