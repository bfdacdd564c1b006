// SPDX-License-Identifier: MIT OR Apache-2.0

//! Timing configuration for submission flows.
use std::time::Duration;

use serde::{Deserialize, Serialize};

const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration parameters for form submission flows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Delay of the simulated backend before an action resolves.
    ///
    /// Default: 1500 milliseconds.
    pub submit_delay: Duration,

    /// Maximum time an action may stay in flight before it fails.
    ///
    /// Default: 30 seconds.
    pub request_timeout: Duration,
}

impl FlowConfig {
    /// Return a default instance of `FlowConfig`.
    pub fn new() -> Self {
        Default::default()
    }

    /// Define the delay of the simulated backend in milliseconds.
    pub fn submit_delay(mut self, millis: u64) -> Self {
        self.submit_delay = Duration::from_millis(millis);
        self
    }

    /// Define the maximum number of milliseconds an action may stay in flight.
    pub fn request_timeout(mut self, millis: u64) -> Self {
        self.request_timeout = Duration::from_millis(millis);
        self
    }
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            submit_delay: SUBMIT_DELAY,
            request_timeout: REQUEST_TIMEOUT,
        }
    }
}
