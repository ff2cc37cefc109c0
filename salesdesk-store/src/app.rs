//! # Application store
//!
//! Explicitly owned root of the client state: configuration, the fetch
//! collaborator, the notification queue, and one slice per feature. Apps
//! construct one store and hand out references; nothing here is
//! process-global, so two stores never share state.

use std::fmt;
use std::sync::Arc;

use shared::config::AppConfig;
use shared::models::{AuthData, Role};

use crate::api::{ApiService, HttpApiService};
use crate::slices::auth::{AuthSlice, AuthState};
use crate::slices::common::SnackbarQueue;
use crate::slices::user::{UserSlice, UserState};

/// Root state container for one app session.
pub struct AppStore {
    config: AppConfig,
    api: Arc<dyn ApiService>,
    snackbar: SnackbarQueue,
    auth: AuthSlice,
    user: UserSlice,
}

impl AppStore {
    /// Create a store over the given configuration and fetch collaborator.
    #[must_use]
    pub fn new(config: AppConfig, api: Arc<dyn ApiService>) -> Self {
        Self {
            config,
            api,
            snackbar: SnackbarQueue::new(),
            auth: AuthSlice::new(),
            user: UserSlice::new(),
        }
    }

    /// Create a store with default configuration and the HTTP collaborator.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(AppConfig::with_defaults(), Arc::new(HttpApiService::new()))
    }

    /// The configuration this store reads endpoint URLs from.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Queue of notifications produced by the slices.
    #[must_use]
    pub fn snackbar(&self) -> &SnackbarQueue {
        &self.snackbar
    }

    /// The authorization slice.
    #[must_use]
    pub fn auth(&self) -> &AuthSlice {
        &self.auth
    }

    /// The profile slice.
    #[must_use]
    pub fn user(&self) -> &UserSlice {
        &self.user
    }

    /// Load the privilege list and derive roles from it.
    ///
    /// See [`AuthSlice::load_privileges`] for the settlement rules.
    pub async fn load_privileges(&self) {
        self.auth
            .load_privileges(
                self.api.as_ref(),
                &self.config.service_urls.privileges,
                &self.snackbar,
            )
            .await;
    }

    /// Load the employee profile record.
    ///
    /// See [`UserSlice::load_user_info`] for the settlement rules.
    pub async fn load_user_info(&self) {
        self.user
            .load_user_info(
                self.api.as_ref(),
                &self.config.service_urls.user_info,
                &self.snackbar,
            )
            .await;
    }

    /// Attach sign-in data produced by the upstream authentication flow.
    pub fn set_user_auth_data(&self, data: AuthData) {
        self.auth.set_user_auth_data(data);
    }

    /// Replace the profile slice's progress message.
    pub fn update_status_message<T: Into<String>>(&self, message: T) {
        self.user.update_status_message(message);
    }

    /// Snapshot of the authorization slice.
    #[must_use]
    pub fn auth_state(&self) -> AuthState {
        self.auth.snapshot()
    }

    /// Snapshot of the profile slice.
    #[must_use]
    pub fn user_state(&self) -> UserState {
        self.user.snapshot()
    }

    /// Selector for the raw identity record attached at sign-in.
    #[must_use]
    pub fn select_user_info(&self) -> Option<serde_json::Value> {
        self.auth.select_user_info()
    }

    /// Selector for the derived roles.
    #[must_use]
    pub fn select_roles(&self) -> Vec<Role> {
        self.auth.select_roles()
    }
}

impl fmt::Debug for AppStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppStore")
            .field("config", &self.config)
            .field("snackbar", &self.snackbar)
            .field("auth", &self.auth)
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}
