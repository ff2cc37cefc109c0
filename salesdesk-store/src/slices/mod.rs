//! # Slices
//!
//! Feature-scoped state slices built on
//! [`ResourceSlice`](crate::slice::ResourceSlice). Each slice owns its own
//! state, exposes a snapshot, async load and sync set operations, and the
//! selectors the apps read through.

pub mod auth;
pub mod common;
pub mod user;

pub use auth::{AuthSlice, AuthState};
pub use common::{SnackbarMessage, SnackbarQueue};
pub use user::{UserSlice, UserState};
