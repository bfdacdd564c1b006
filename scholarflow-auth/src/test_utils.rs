// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities.
use std::cell::RefCell;
use std::rc::Rc;

use crate::Role;
use crate::traits::RoleObserver;

pub fn setup_logging() {
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }
}

/// Observer which records every role change it is notified about.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    changes: Rc<RefCell<Vec<Role>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changes(&self) -> Vec<Role> {
        self.changes.borrow().clone()
    }
}

impl RoleObserver for RecordingObserver {
    fn on_role_change(&self, role: Role) {
        self.changes.borrow_mut().push(role);
    }
}
