// SPDX-License-Identifier: MIT OR Apache-2.0

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::config::FlowConfig;
use crate::traits::{AuthBackend, AuthRequest, BackendError};

/// Stand-in authentication service which resolves every request after a fixed delay.
#[derive(Clone, Debug)]
pub struct SimulatedBackend {
    delay: Duration,
    failure: Option<String>,
}

impl SimulatedBackend {
    /// Backend accepting every request after `delay`.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            failure: None,
        }
    }

    pub fn from_config(config: &FlowConfig) -> Self {
        Self::new(config.submit_delay)
    }

    /// Reject every request with the given reason once the delay passed.
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::from_config(&FlowConfig::default())
    }
}

#[async_trait]
impl AuthBackend for SimulatedBackend {
    async fn submit(&self, request: AuthRequest) -> Result<(), BackendError> {
        debug!(request = request.kind(), delay = ?self.delay, "simulate auth request");
        tokio::time::sleep(self.delay).await;

        match &self.failure {
            Some(reason) => Err(BackendError::Rejected(reason.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::Instant;

    use crate::traits::{AuthBackend, AuthRequest, BackendError};

    use super::SimulatedBackend;

    #[tokio::test(start_paused = true)]
    async fn resolves_after_delay() {
        let backend = SimulatedBackend::new(Duration::from_millis(1500));
        let started = Instant::now();

        let result = backend
            .submit(AuthRequest::MagicLink {
                email: "jane@example.com".into(),
            })
            .await;

        assert_eq!(result, Ok(()));
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn failing_backend() {
        let backend = SimulatedBackend::new(Duration::from_millis(10)).failing("account locked");
        let result = backend
            .submit(AuthRequest::Credentials {
                email: "jane@example.com".into(),
                password: "secret".into(),
            })
            .await;

        assert_eq!(
            result,
            Err(BackendError::Rejected("account locked".to_string()))
        );
    }
}
