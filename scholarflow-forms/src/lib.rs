// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local validation and single-flight submission flows of the ScholarFlow login and registration
//! pages.
//!
//! Pages validate their input synchronously, then hand a request to an [`AuthBackend`] while a
//! [`FormFlow`] makes sure only one action per page is in flight. Outcomes are reported through
//! the [`Navigator`] and [`Notifier`] collaborators.
mod backend;
pub mod classify;
pub mod config;
pub mod flow;
mod login;
pub mod password;
mod registration;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
pub mod traits;
pub mod validation;

pub use backend::SimulatedBackend;
pub use classify::classify_email;
pub use config::FlowConfig;
pub use flow::{FlowAction, FlowError, FlowPhase, FormFlow, SocialProvider};
pub use login::{FORGOT_PASSWORD_ROUTE, LoginForm, LoginPage, validate_magic_link};
pub use registration::{ONBOARDING_ROUTE, RegistrationField, RegistrationForm, RegistrationPage};
pub use traits::{AuthBackend, AuthRequest, BackendError, Navigator, Notifier, ToastKind};
pub use validation::{FieldValidation, ValidationError};
