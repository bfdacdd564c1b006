// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interfaces to the collaborators of login and registration pages.
//!
//! Pages never route or render notifications themselves, they request both through these traits.
use std::fmt::Display;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::flow::SocialProvider;

/// Requests a route change, for example `/dashboard/admin` or `/forgot-password`.
///
/// Paths are plain route identifiers and are not validated here.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate(&self, path: &str) {
        self(path)
    }
}

/// Kind of a transient notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Error,
    Success,
    Info,
}

impl Display for ToastKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ToastKind::Error => "error",
            ToastKind::Success => "success",
            ToastKind::Info => "info",
        };

        write!(f, "{}", s)
    }
}

/// Surfaces transient feedback to the user.
pub trait Notifier {
    fn show_toast(&self, message: &str, kind: ToastKind);
}

impl<F> Notifier for F
where
    F: Fn(&str, ToastKind),
{
    fn show_toast(&self, message: &str, kind: ToastKind) {
        self(message, kind)
    }
}

/// Requests sent to the authentication service once local validation passed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthRequest {
    Credentials { email: String, password: String },
    MagicLink { email: String },
    Social { provider: SocialProvider },
    Register {
        name: String,
        email: String,
        password: String,
    },
}

impl AuthRequest {
    /// Name of the request type, safe to log (never includes credentials).
    pub fn kind(&self) -> &'static str {
        match self {
            AuthRequest::Credentials { .. } => "credentials",
            AuthRequest::MagicLink { .. } => "magic_link",
            AuthRequest::Social { .. } => "social",
            AuthRequest::Register { .. } => "register",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("request was rejected: {0}")]
    Rejected(String),

    #[error("service unavailable: {0}")]
    Unavailable(String),
}

/// Authentication service resolving submitted requests.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn submit(&self, request: AuthRequest) -> Result<(), BackendError>;
}
