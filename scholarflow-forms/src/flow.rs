// SPDX-License-Identifier: MIT OR Apache-2.0

//! Single-flight submission flow shared by the actions of a page.
//!
//! Every submission walks through the same phases:
//!
//! ```text
//! Idle → Validating → RejectedLocally
//!                   → Loading(action) → Succeeded
//!                                     → FailedRemotely
//! ```
//!
//! Only one action of a page may be loading at a time. Submissions made while another action is
//! in flight are ignored and leave the flow untouched.
use std::cell::{Cell, RefCell};
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::config::FlowConfig;
use crate::traits::{BackendError, Notifier, ToastKind};
use crate::validation::ValidationError;

/// Third-party identity providers offered on the login page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialProvider {
    Google,
    Github,
    Orcid,
}

impl SocialProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialProvider::Google => "google",
            SocialProvider::Github => "github",
            SocialProvider::Orcid => "orcid",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SocialProvider::Google => "Google",
            SocialProvider::Github => "GitHub",
            SocialProvider::Orcid => "ORCID",
        }
    }
}

/// Submission actions of login and registration pages.
///
/// The `Display` output is the loading token tag of the action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowAction {
    Credentials,
    MagicLink,
    Social(SocialProvider),
    Registration,
}

impl Display for FlowAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowAction::Credentials => write!(f, "credentials"),
            FlowAction::MagicLink => write!(f, "magic-link"),
            FlowAction::Social(provider) => write!(f, "social:{}", provider.as_str()),
            FlowAction::Registration => write!(f, "registration"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowPhase {
    Idle,
    Validating,
    Loading(FlowAction),
    RejectedLocally,
    Succeeded,
    FailedRemotely,
}

impl FlowPhase {
    /// Phases from which a new submission can start. Outcome phases count as idle, they only
    /// remember how the last submission ended.
    pub fn is_idle(&self) -> bool {
        !matches!(self, FlowPhase::Validating | FlowPhase::Loading(_))
    }
}

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("{in_flight} is already in flight")]
    Busy { in_flight: FlowAction },

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("{action} timed out after {timeout:?}")]
    TimedOut { action: FlowAction, timeout: Duration },

    #[error("{0} was cancelled")]
    Cancelled(FlowAction),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl FlowError {
    /// Failure was detected before any request was made.
    pub fn is_local(&self) -> bool {
        matches!(self, FlowError::Busy { .. } | FlowError::Invalid(_))
    }

    /// Surface the failure to the user.
    ///
    /// Ignored submissions stay silent, everything else raises a toast.
    pub fn notify(&self, notifier: &impl Notifier) {
        match self {
            FlowError::Busy { .. } => (),
            FlowError::Invalid(err) => notifier.show_toast(&err.to_string(), ToastKind::Error),
            FlowError::TimedOut { .. } => notifier.show_toast(
                "The request timed out, please try again",
                ToastKind::Error,
            ),
            FlowError::Cancelled(_) => notifier.show_toast("Request cancelled", ToastKind::Info),
            FlowError::Backend(_) => notifier.show_toast(
                "Something went wrong, please try again",
                ToastKind::Error,
            ),
        }
    }
}

/// Submission state of a single page instance.
///
/// Pages run on a single-threaded runtime: the flow is shared by reference between the futures
/// of competing actions and is not `Sync`.
#[derive(Debug)]
pub struct FormFlow {
    config: FlowConfig,
    phase: Cell<FlowPhase>,
    loading: Cell<Option<FlowAction>>,
    cancel_token: RefCell<Option<CancellationToken>>,
}

impl FormFlow {
    pub fn new(config: FlowConfig) -> Self {
        Self {
            config,
            phase: Cell::new(FlowPhase::Idle),
            loading: Cell::new(None),
            cancel_token: RefCell::new(None),
        }
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    pub fn phase(&self) -> FlowPhase {
        self.phase.get()
    }

    /// Action currently in flight, if any.
    pub fn loading(&self) -> Option<FlowAction> {
        self.loading.get()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get().is_some()
    }

    /// Abort the action in flight. Returns `false` if nothing was loading.
    pub fn cancel(&self) -> bool {
        match self.cancel_token.borrow().as_ref() {
            Some(token) => {
                debug!(action = ?self.loading.get(), "cancel in-flight action");
                token.cancel();
                true
            }
            None => false,
        }
    }

    /// Run a submission of `action`.
    ///
    /// `validate` runs synchronously and its output is handed to `request`, which is awaited
    /// under the configured request timeout. The loading token is held until the request resolves,
    /// times out or is cancelled, and is also released if the returned future is dropped.
    pub async fn run<T, R, V, F, Fut>(
        &self,
        action: FlowAction,
        validate: V,
        request: F,
    ) -> Result<R, FlowError>
    where
        V: FnOnce() -> Result<T, ValidationError>,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<R, BackendError>>,
    {
        if let Some(in_flight) = self.loading.get() {
            debug!(%action, %in_flight, "ignore submission while another action is in flight");
            return Err(FlowError::Busy { in_flight });
        }

        self.set_phase(FlowPhase::Validating);
        let input = match validate() {
            Ok(input) => input,
            Err(err) => {
                debug!(%action, %err, "submission rejected locally");
                self.set_phase(FlowPhase::RejectedLocally);
                return Err(err.into());
            }
        };

        let token = CancellationToken::new();
        let guard = LoadingGuard::acquire(self, action, token.clone());
        let timeout = self.config.request_timeout;

        let result = tokio::select! {
            _ = token.cancelled() => Err(FlowError::Cancelled(action)),
            result = tokio::time::timeout(timeout, request(input)) => match result {
                Ok(Ok(value)) => Ok(value),
                Ok(Err(err)) => Err(FlowError::Backend(err)),
                Err(_) => Err(FlowError::TimedOut { action, timeout }),
            },
        };

        drop(guard);

        match &result {
            Ok(_) => self.set_phase(FlowPhase::Succeeded),
            Err(FlowError::Cancelled(_)) => {
                debug!(%action, "submission cancelled");
                self.set_phase(FlowPhase::FailedRemotely);
            }
            Err(err) => {
                warn!(%action, %err, "submission failed");
                self.set_phase(FlowPhase::FailedRemotely);
            }
        }

        result
    }

    fn set_phase(&self, phase: FlowPhase) {
        debug!(from = ?self.phase.get(), to = ?phase, "flow phase");
        self.phase.set(phase);
    }
}

impl Default for FormFlow {
    fn default() -> Self {
        Self::new(FlowConfig::default())
    }
}

/// Holds the loading token of a flow and releases it on drop.
struct LoadingGuard<'a> {
    flow: &'a FormFlow,
}

impl<'a> LoadingGuard<'a> {
    fn acquire(flow: &'a FormFlow, action: FlowAction, token: CancellationToken) -> Self {
        flow.loading.set(Some(action));
        flow.cancel_token.replace(Some(token));
        flow.set_phase(FlowPhase::Loading(action));
        Self { flow }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flow.loading.set(None);
        self.flow.cancel_token.replace(None);

        // Submission future was dropped before it resolved.
        if let FlowPhase::Loading(_) = self.flow.phase.get() {
            self.flow.phase.set(FlowPhase::Idle);
        }
    }
}
