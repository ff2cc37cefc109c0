//! # Fetch lifecycle machine
//!
//! Every remote lookup in the store moves through the same four phases:
//! idle until first requested, loading while the call is in flight, then
//! success or failed once it settles. Slices advance by applying a
//! [`FetchEvent`] to their state; the event enum is matched exhaustively,
//! so adding a phase forces every slice to decide how to handle it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::api::ApiError;

/// Lifecycle phase of an asynchronous fetch.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    /// No fetch has been issued yet.
    #[default]
    Idle,
    /// A fetch is in flight and has not settled.
    Loading,
    /// The most recent fetch settled with a payload.
    Success,
    /// The most recent fetch settled with an error.
    Failed,
}

impl FetchStatus {
    /// Return the canonical string representation used in snapshots and logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }

    /// Whether the fetch has settled, successfully or not.
    #[must_use]
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Success | Self::Failed)
    }
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One transition of the fetch lifecycle.
#[derive(Debug)]
pub enum FetchEvent<T> {
    /// A fetch was issued; carries the progress message to show meanwhile.
    Requested {
        /// Human-readable message describing the in-flight work, if any.
        status_message: Option<String>,
    },
    /// The fetch settled and produced a payload.
    Succeeded(T),
    /// The fetch settled with an error.
    Failed(ApiError),
}

/// State that advances through the fetch lifecycle.
///
/// Implementors mutate themselves in place; `apply` never fails and never
/// suspends, so a slice's transitions stay strictly ordered even when the
/// fetch itself runs concurrently with other work.
pub trait FetchLifecycle {
    /// Payload type carried by a successful fetch.
    type Payload;

    /// Applies one lifecycle event to the state.
    fn apply(&mut self, event: FetchEvent<Self::Payload>);
}
