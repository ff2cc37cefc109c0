//! # Auth slice
//!
//! Tracks the privilege lookup for the signed-in employee and the roles
//! derived from it. Sign-in itself happens upstream; this slice only
//! receives its outcome and authorizes from the privilege list.

use serde::{Deserialize, Serialize};
use shared::models::{AuthData, PrivilegesResponse, Role, derive_roles};

use crate::api::{ApiError, ApiService};
use crate::machine::{FetchEvent, FetchLifecycle, FetchStatus};
use crate::messages;
use crate::notify::{NotificationSink, Severity};
use crate::slice::ResourceSlice;

/// Authorization state for the signed-in employee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    /// Lifecycle phase of the privilege lookup.
    pub status: FetchStatus,

    /// Session presentation mode; currently always `"active"`.
    pub mode: String,

    /// Progress message for the in-flight lookup, if any.
    pub status_message: Option<String>,

    /// Whether sign-in data has been attached to this session.
    pub is_authenticated: bool,

    /// Raw identity record handed over by the sign-in flow.
    pub user_info: Option<serde_json::Value>,

    /// Decoded ID token claims handed over by the sign-in flow.
    pub decoded_id_token: Option<serde_json::Value>,

    /// Roles derived from the privilege lookup, in rule order.
    pub roles: Vec<Role>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            status: FetchStatus::Idle,
            mode: "active".to_string(),
            status_message: None,
            is_authenticated: false,
            user_info: None,
            decoded_id_token: None,
            roles: Vec::new(),
        }
    }
}

impl FetchLifecycle for AuthState {
    type Payload = Vec<Role>;

    fn apply(&mut self, event: FetchEvent<Vec<Role>>) {
        match event {
            FetchEvent::Requested { status_message } => {
                self.status = FetchStatus::Loading;
                self.status_message = status_message;
            }
            FetchEvent::Succeeded(roles) => {
                self.status = FetchStatus::Success;
                self.roles = roles;
            }
            FetchEvent::Failed(_) => {
                // Roles keep their previous value; a failed refresh must not
                // revoke what the last successful lookup granted.
                self.status = FetchStatus::Failed;
            }
        }
    }
}

/// Slice tracking privilege-derived authorization.
#[derive(Debug, Default)]
pub struct AuthSlice {
    inner: ResourceSlice<AuthState>,
}

impl AuthSlice {
    /// Create a slice in the idle state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: ResourceSlice::new(AuthState::default()),
        }
    }

    /// Return a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        self.inner.snapshot()
    }

    /// Fetch the privilege list and derive roles from it.
    ///
    /// A derivation that matches nothing still settles as success: the
    /// slice ends with an empty role set and one insufficient-privileges
    /// notification fires. Transport and decode failures settle as failed
    /// and fire one generic notification instead.
    ///
    /// # Arguments
    /// * `api` - Fetch collaborator to issue the lookup through
    /// * `url` - Endpoint returning the privilege list
    /// * `notifier` - Sink that receives failure notifications
    pub async fn load_privileges(
        &self,
        api: &dyn ApiService,
        url: &str,
        notifier: &dyn NotificationSink,
    ) {
        self.inner
            .load(None, messages::FETCH_PRIVILEGES_FAILED, notifier, async {
                let body = api.get_json(url).await?;
                let response: PrivilegesResponse = serde_json::from_value(body)
                    .map_err(|error| ApiError::decode(error.to_string()))?;

                let roles = derive_roles(&response.privileges);
                if roles.is_empty() {
                    tracing::warn!(
                        "privilege list {:?} matched no known role",
                        response.privileges
                    );
                    notifier.notify(messages::INSUFFICIENT_PRIVILEGES, Severity::Error);
                }
                Ok(roles)
            })
            .await;
    }

    /// Attach sign-in data produced by the upstream authentication flow.
    pub fn set_user_auth_data(&self, data: AuthData) {
        self.inner.update(|state| {
            state.user_info = Some(data.user_info);
            state.decoded_id_token = Some(data.decoded_id_token);
            state.is_authenticated = true;
            state.status = FetchStatus::Success;
        });
    }

    /// Selector for the raw identity record attached at sign-in.
    #[must_use]
    pub fn select_user_info(&self) -> Option<serde_json::Value> {
        self.inner.read(|state| state.user_info.clone())
    }

    /// Selector for the derived roles.
    #[must_use]
    pub fn select_roles(&self) -> Vec<Role> {
        self.inner.read(|state| state.roles.clone())
    }
}
