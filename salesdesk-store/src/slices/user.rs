//! # User slice
//!
//! Tracks the employee profile lookup for the signed-in user.

use serde::{Deserialize, Serialize};
use shared::models::UserInfo;

use crate::api::{ApiError, ApiService};
use crate::machine::{FetchEvent, FetchLifecycle, FetchStatus};
use crate::messages;
use crate::notify::NotificationSink;
use crate::slice::ResourceSlice;

/// Profile state for the signed-in employee.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserState {
    /// Lifecycle phase of the profile lookup.
    pub status: FetchStatus,

    /// Progress message for the in-flight lookup, if any.
    pub status_message: Option<String>,

    /// Rendered error from the most recent failed lookup.
    pub error_message: Option<String>,

    /// Profile record from the most recent successful lookup.
    pub user_info: Option<UserInfo>,
}

impl FetchLifecycle for UserState {
    type Payload = UserInfo;

    fn apply(&mut self, event: FetchEvent<UserInfo>) {
        match event {
            FetchEvent::Requested { status_message } => {
                self.status = FetchStatus::Loading;
                self.status_message = status_message;
            }
            FetchEvent::Succeeded(info) => {
                self.status = FetchStatus::Success;
                self.user_info = Some(info);
                self.error_message = None;
            }
            FetchEvent::Failed(error) => {
                // The previous profile stays visible while failed.
                self.status = FetchStatus::Failed;
                self.error_message = Some(error.to_string());
            }
        }
    }
}

/// Slice tracking the employee profile.
#[derive(Debug, Default)]
pub struct UserSlice {
    inner: ResourceSlice<UserState>,
}

impl UserSlice {
    /// Create a slice in the idle state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: ResourceSlice::new(UserState::default()),
        }
    }

    /// Return a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> UserState {
        self.inner.snapshot()
    }

    /// Fetch the employee profile record.
    ///
    /// Shows [`messages::CHECKING_USER_INFO`] while the lookup is in
    /// flight. Transport and decode failures settle as failed and fire one
    /// generic notification.
    ///
    /// # Arguments
    /// * `api` - Fetch collaborator to issue the lookup through
    /// * `url` - Endpoint returning the profile record
    /// * `notifier` - Sink that receives failure notifications
    pub async fn load_user_info(
        &self,
        api: &dyn ApiService,
        url: &str,
        notifier: &dyn NotificationSink,
    ) {
        self.inner
            .load(
                Some(messages::CHECKING_USER_INFO.to_string()),
                messages::FETCH_USER_INFO_FAILED,
                notifier,
                async {
                    let body = api.get_json(url).await?;
                    let info: UserInfo = serde_json::from_value(body)
                        .map_err(|error| ApiError::decode(error.to_string()))?;
                    Ok(info)
                },
            )
            .await;
    }

    /// Overwrite the profile record without a fetch.
    pub fn set_user_info(&self, info: UserInfo) {
        self.inner.set(info);
    }

    /// Replace the progress message shown for this slice.
    pub fn update_status_message<T: Into<String>>(&self, message: T) {
        let message = message.into();
        self.inner
            .update(|state| state.status_message = Some(message));
    }

    /// Selector for the profile record.
    #[must_use]
    pub fn select_user_info(&self) -> Option<UserInfo> {
        self.inner.read(|state| state.user_info.clone())
    }
}
