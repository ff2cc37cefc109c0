//! User-facing message strings shared across slices.
//!
//! Kept in one place so the apps present identical wording for the same
//! condition.

/// Progress message shown while the profile lookup is in flight.
pub const CHECKING_USER_INFO: &str = "Checking User Info";

/// Notification shown when the privilege lookup fails outright.
pub const FETCH_PRIVILEGES_FAILED: &str = "Failed to fetch user privileges";

/// Notification shown when the privilege list maps to no known role.
pub const INSUFFICIENT_PRIVILEGES: &str = "Insufficient privileges";

/// Notification shown when the profile lookup fails outright.
pub const FETCH_USER_INFO_FAILED: &str = "Failed to fetch user information";
