//! # Resource slice
//!
//! [`ResourceSlice`] owns one piece of fetch-lifecycle state and drives it
//! through [`FetchEvent`] transitions. The mutex is held only while an
//! event is applied, never across an await, so for a single load the
//! `Requested` transition is always observed before the terminal one.
//!
//! Overlapping loads are not guarded against: whichever load settles last
//! writes last.

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::api::ApiResult;
use crate::machine::{FetchEvent, FetchLifecycle};
use crate::notify::{NotificationSink, Severity};

/// Owner of one slice of fetch-lifecycle state.
#[derive(Debug, Default)]
pub struct ResourceSlice<S> {
    state: Mutex<S>,
}

impl<S: FetchLifecycle> ResourceSlice<S> {
    /// Create a slice starting from the given state.
    pub fn new(state: S) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    /// Return a copy of the current state.
    pub fn snapshot(&self) -> S
    where
        S: Clone,
    {
        self.lock().clone()
    }

    /// Read through the current state without copying all of it.
    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.lock())
    }

    /// Mutate the state synchronously, outside the fetch lifecycle.
    pub fn update(&self, f: impl FnOnce(&mut S)) {
        f(&mut self.lock());
    }

    /// Overwrite the payload and mark the slice successful.
    ///
    /// Equivalent to a fetch that settled immediately with `payload`; no
    /// network interaction takes place.
    pub fn set(&self, payload: S::Payload) {
        self.apply(FetchEvent::Succeeded(payload));
    }

    /// Drive one fetch through the lifecycle.
    ///
    /// Applies `Requested` before awaiting `fetch`, then applies exactly one
    /// terminal event once it settles. A failure is reported to `notifier`
    /// with `failure_notice` and is never returned to the caller.
    ///
    /// # Arguments
    /// * `status_message` - Progress message stored for the loading phase
    /// * `failure_notice` - Fixed notification text used if the fetch fails
    /// * `notifier` - Sink that receives the failure notification
    /// * `fetch` - The fetch to await; runs after the slice enters loading
    pub async fn load<F>(
        &self,
        status_message: Option<String>,
        failure_notice: &str,
        notifier: &dyn NotificationSink,
        fetch: F,
    ) where
        F: Future<Output = ApiResult<S::Payload>> + Send,
    {
        self.apply(FetchEvent::Requested { status_message });

        match fetch.await {
            Ok(payload) => self.apply(FetchEvent::Succeeded(payload)),
            Err(error) => {
                tracing::error!("{}: {}", failure_notice, error);
                notifier.notify(failure_notice, Severity::Error);
                self.apply(FetchEvent::Failed(error));
            }
        }
    }

    fn apply(&self, event: FetchEvent<S::Payload>) {
        self.lock().apply(event);
    }

    fn lock(&self) -> MutexGuard<'_, S> {
        // A poisoned slice still holds coherent state; the writer that
        // panicked applied its event atomically or not at all.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::machine::FetchStatus;
    use std::sync::Arc;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct CounterState {
        status: FetchStatus,
        status_message: Option<String>,
        value: Option<u32>,
    }

    impl FetchLifecycle for CounterState {
        type Payload = u32;

        fn apply(&mut self, event: FetchEvent<u32>) {
            match event {
                FetchEvent::Requested { status_message } => {
                    self.status = FetchStatus::Loading;
                    self.status_message = status_message;
                }
                FetchEvent::Succeeded(value) => {
                    self.status = FetchStatus::Success;
                    self.value = Some(value);
                }
                FetchEvent::Failed(_) => {
                    self.status = FetchStatus::Failed;
                }
            }
        }
    }

    #[derive(Debug, Default)]
    struct RecordingSink {
        events: Mutex<Vec<(String, Severity)>>,
    }

    impl RecordingSink {
        fn events(&self) -> Vec<(String, Severity)> {
            self.events.lock().unwrap().clone()
        }
    }

    impl NotificationSink for RecordingSink {
        fn notify(&self, message: &str, severity: Severity) {
            self.events
                .lock()
                .unwrap()
                .push((message.to_string(), severity));
        }
    }

    #[tokio::test]
    async fn test_load_success_transitions_through_loading() {
        let slice = ResourceSlice::new(CounterState::default());
        let sink = RecordingSink::default();
        assert_eq!(slice.snapshot().status, FetchStatus::Idle);

        slice
            .load(Some("Counting".to_string()), "load failed", &sink, async {
                // The loading transition must be visible before the fetch
                // resolves.
                assert_eq!(slice.snapshot().status, FetchStatus::Loading);
                assert_eq!(slice.snapshot().status_message.as_deref(), Some("Counting"));
                Ok(7)
            })
            .await;

        let state = slice.snapshot();
        assert_eq!(state.status, FetchStatus::Success);
        assert_eq!(state.value, Some(7));
        assert!(sink.events().is_empty());
    }

    #[tokio::test]
    async fn test_load_failure_notifies_and_keeps_payload() {
        let slice = ResourceSlice::new(CounterState::default());
        let sink = RecordingSink::default();
        slice.set(3);

        slice
            .load(None, "load failed", &sink, async {
                Err(ApiError::network("connection refused"))
            })
            .await;

        let state = slice.snapshot();
        assert_eq!(state.status, FetchStatus::Failed);
        assert_eq!(state.value, Some(3), "failure must not clear the payload");
        assert_eq!(
            sink.events(),
            vec![("load failed".to_string(), Severity::Error)]
        );
    }

    #[test]
    fn test_set_marks_success_and_is_idempotent() {
        let slice = ResourceSlice::new(CounterState::default());

        slice.set(42);
        let first = slice.snapshot();
        assert_eq!(first.status, FetchStatus::Success);
        assert_eq!(first.value, Some(42));

        slice.set(42);
        assert_eq!(slice.snapshot(), first);
    }

    #[test]
    fn test_update_mutates_in_place() {
        let slice = ResourceSlice::new(CounterState::default());

        slice.update(|state| state.status_message = Some("hello".to_string()));

        assert_eq!(slice.snapshot().status_message.as_deref(), Some("hello"));
        assert_eq!(slice.snapshot().status, FetchStatus::Idle);
    }

    #[test]
    fn test_read_projects_without_cloning_state() {
        let slice = ResourceSlice::new(CounterState::default());
        slice.set(9);

        let value = slice.read(|state| state.value);
        assert_eq!(value, Some(9));
    }

    #[tokio::test]
    async fn test_overlapping_loads_last_settled_wins() {
        let slice = Arc::new(ResourceSlice::new(CounterState::default()));
        let sink = Arc::new(RecordingSink::default());
        let (release_first, gate_first) = tokio::sync::oneshot::channel::<()>();

        let first = tokio::spawn({
            let slice = Arc::clone(&slice);
            let sink = Arc::clone(&sink);
            async move {
                slice
                    .load(None, "load failed", sink.as_ref(), async {
                        let _ = gate_first.await;
                        Ok(1)
                    })
                    .await;
            }
        });

        // Issued second, settles first.
        slice
            .load(None, "load failed", sink.as_ref(), async { Ok(2) })
            .await;
        assert_eq!(slice.snapshot().value, Some(2));

        release_first.send(()).unwrap();
        first.await.unwrap();

        // The stale first load settled last, so its payload wins.
        let state = slice.snapshot();
        assert_eq!(state.value, Some(1));
        assert_eq!(state.status, FetchStatus::Success);
        assert!(sink.events().is_empty());
    }
}
