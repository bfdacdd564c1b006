// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities.
use std::cell::RefCell;
use std::rc::Rc;

use crate::traits::{Navigator, Notifier, ToastKind};

pub fn setup_logging() {
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }
}

/// Navigator which records every requested path.
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    paths: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.borrow_mut().push(path.to_string());
    }
}

/// Notifier which records every raised toast.
#[derive(Clone, Debug, Default)]
pub struct RecordingNotifier {
    toasts: Rc<RefCell<Vec<(String, ToastKind)>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<(String, ToastKind)> {
        self.toasts.borrow().clone()
    }

    pub fn last(&self) -> Option<(String, ToastKind)> {
        self.toasts.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn show_toast(&self, message: &str, kind: ToastKind) {
        self.toasts.borrow_mut().push((message.to_string(), kind));
    }
}
