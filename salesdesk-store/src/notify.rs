//! # Notifications
//!
//! Slices never surface errors to callers directly; recoverable problems
//! are pushed through a fire-and-forget sink and rendered elsewhere.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
    Success,
}

impl Severity {
    /// Return the canonical string representation used by presentation layers.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Success => "success",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fire-and-forget sink for user-facing notifications.
///
/// Delivery is best effort; nothing is read back and a sink must never
/// block the slice that is notifying.
pub trait NotificationSink: Send + Sync {
    /// Deliver one notification.
    ///
    /// # Arguments
    ///
    /// * `message` - Human-readable notification text
    /// * `severity` - How prominently the message should be presented
    fn notify(&self, message: &str, severity: Severity);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_as_str() {
        for (severity, text) in [
            (Severity::Error, "error"),
            (Severity::Warning, "warning"),
            (Severity::Info, "info"),
            (Severity::Success, "success"),
        ] {
            assert_eq!(severity.as_str(), text);
            assert_eq!(severity.to_string(), text);
        }
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Error).unwrap();
        assert_eq!(json, "\"error\"");

        let parsed: Severity = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(parsed, Severity::Warning);
    }
}
