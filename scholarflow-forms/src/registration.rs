// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeMap;

use scholarflow_auth::{Role, User};
use serde::{Deserialize, Serialize};

use crate::config::FlowConfig;
use crate::flow::{FlowAction, FlowError, FormFlow};
use crate::password::{PasswordStrength, password_strength};
use crate::traits::{AuthBackend, AuthRequest, Navigator, Notifier, ToastKind};
use crate::validation::{
    FieldValidation, MIN_PASSWORD_LENGTH, ValidationError, require, require_email, require_match,
    require_min_length,
};

pub const ONBOARDING_ROUTE: &str = "/onboarding";

const REQUIRED: &str = "Required";
const INVALID_EMAIL: &str = "Invalid email";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationField {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Terms,
}

/// Input fields of the registration page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

impl RegistrationForm {
    /// Validate the whole form, stopping at the first failing check.
    ///
    /// Checks run in a fixed order: required fields, email format, password confirmation,
    /// password length and finally terms acceptance.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, REQUIRED)?;
        require(&self.email, REQUIRED)?;
        require(&self.password, REQUIRED)?;
        require(&self.confirm_password, REQUIRED)?;
        require_email(&self.email, INVALID_EMAIL)?;
        require_match(&self.password, &self.confirm_password)?;
        require_min_length(&self.password, MIN_PASSWORD_LENGTH)?;

        if !self.accept_terms {
            return Err(ValidationError::TermsNotAccepted);
        }

        Ok(())
    }

    /// Validity of every field on its own, as shown inline next to the inputs.
    pub fn field_results(&self) -> BTreeMap<RegistrationField, FieldValidation> {
        let terms = if self.accept_terms {
            Ok(())
        } else {
            Err(ValidationError::TermsNotAccepted)
        };

        BTreeMap::from([
            (
                RegistrationField::Name,
                FieldValidation::from(require(&self.name, REQUIRED)),
            ),
            (
                RegistrationField::Email,
                FieldValidation::from(
                    require(&self.email, REQUIRED)
                        .and_then(|_| require_email(&self.email, INVALID_EMAIL)),
                ),
            ),
            (
                RegistrationField::Password,
                FieldValidation::from(
                    require(&self.password, REQUIRED)
                        .and_then(|_| require_min_length(&self.password, MIN_PASSWORD_LENGTH)),
                ),
            ),
            (
                RegistrationField::ConfirmPassword,
                FieldValidation::from(
                    require(&self.confirm_password, REQUIRED)
                        .and_then(|_| require_match(&self.password, &self.confirm_password)),
                ),
            ),
            (RegistrationField::Terms, FieldValidation::from(terms)),
        ])
    }

    pub fn password_strength(&self) -> PasswordStrength {
        password_strength(&self.password)
    }
}

/// Registration page creating new researcher accounts.
pub struct RegistrationPage<N, T, B> {
    flow: FormFlow,
    navigator: N,
    notifier: T,
    backend: B,
}

impl<N, T, B> RegistrationPage<N, T, B>
where
    N: Navigator,
    T: Notifier,
    B: AuthBackend,
{
    pub fn new(config: FlowConfig, navigator: N, notifier: T, backend: B) -> Self {
        Self {
            flow: FormFlow::new(config),
            navigator,
            notifier,
            backend,
        }
    }

    pub fn flow(&self) -> &FormFlow {
        &self.flow
    }

    /// Create an account and continue with onboarding.
    pub async fn register(&self, form: &RegistrationForm) -> Result<User, FlowError> {
        let result = self
            .flow
            .run(
                FlowAction::Registration,
                || form.validate(),
                |_| async move {
                    let request = AuthRequest::Register {
                        name: form.name.trim().to_string(),
                        email: form.email.trim().to_string(),
                        password: form.password.clone(),
                    };
                    self.backend.submit(request).await.map(|_| {
                        User::new(form.name.trim(), form.email.trim(), Role::Researcher)
                    })
                },
            )
            .await;

        match &result {
            Ok(_) => {
                self.notifier.show_toast(
                    "Account created! Welcome to ScholarFlow.",
                    ToastKind::Success,
                );
                self.navigator.navigate(ONBOARDING_ROUTE);
            }
            Err(err) => err.notify(&self.notifier),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use rstest::rstest;
    use scholarflow_auth::Role;

    use crate::backend::SimulatedBackend;
    use crate::config::FlowConfig;
    use crate::flow::{FlowError, FlowPhase};
    use crate::test_utils::{RecordingNavigator, RecordingNotifier};
    use crate::traits::ToastKind;
    use crate::validation::{FieldValidation, ValidationError};

    use super::{RegistrationField, RegistrationForm, RegistrationPage};

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            password: "Engine#1843".into(),
            confirm_password: "Engine#1843".into(),
            accept_terms: true,
        }
    }

    #[rstest]
    #[case::missing_name(RegistrationForm { name: "".into(), ..valid_form() }, "Required")]
    #[case::missing_everything(RegistrationForm::default(), "Required")]
    #[case::bad_email(RegistrationForm { email: "ada".into(), ..valid_form() }, "Invalid email")]
    #[case::mismatch(
        RegistrationForm { confirm_password: "Engine#1844".into(), ..valid_form() },
        "Doesn't match"
    )]
    #[case::short_password(
        RegistrationForm { password: "short".into(), confirm_password: "short".into(), ..valid_form() },
        "Password must be at least 8 characters"
    )]
    #[case::terms(
        RegistrationForm { accept_terms: false, ..valid_form() },
        "Please accept the terms and conditions"
    )]
    // Format beats mismatch beats length.
    #[case::format_first(
        RegistrationForm { email: "ada".into(), password: "short".into(), ..valid_form() },
        "Invalid email"
    )]
    #[case::mismatch_before_length(
        RegistrationForm { password: "short".into(), ..valid_form() },
        "Doesn't match"
    )]
    fn first_failing_check_wins(#[case] form: RegistrationForm, #[case] message: &str) {
        assert_eq!(form.validate().unwrap_err().to_string(), message);
    }

    #[test]
    fn valid_form_passes() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn field_results_are_independent() {
        let form = RegistrationForm {
            email: "ada".into(),
            password: "short".into(),
            ..valid_form()
        };
        let results = form.field_results();

        assert_eq!(results[&RegistrationField::Name], FieldValidation::valid());
        assert_eq!(
            results[&RegistrationField::Email].message.as_deref(),
            Some("Invalid email")
        );
        assert_eq!(
            results[&RegistrationField::Password].message.as_deref(),
            Some("Password must be at least 8 characters")
        );
        assert_eq!(
            results[&RegistrationField::ConfirmPassword].message.as_deref(),
            Some("Doesn't match")
        );
        assert!(results[&RegistrationField::Terms].valid);
        assert_eq!(form.field_results(), results);
    }

    #[test]
    fn password_strength_follows_input() {
        let mut form = valid_form();
        assert_eq!(form.password_strength().label(), "Strong");

        form.password = "abc".into();
        assert_eq!(form.password_strength().label(), "Weak");
    }

    #[tokio::test(start_paused = true)]
    async fn register_creates_researcher() {
        let navigator = RecordingNavigator::new();
        let notifier = RecordingNotifier::new();
        let page = RegistrationPage::new(
            FlowConfig::default(),
            navigator.clone(),
            notifier.clone(),
            SimulatedBackend::default(),
        );

        let user = page.register(&valid_form()).await.unwrap();
        assert_eq!(user.name, "Ada Lovelace");
        assert_eq!(user.role, Role::Researcher);
        assert_eq!(navigator.paths(), vec!["/onboarding".to_string()]);
        assert_eq!(
            notifier.toasts(),
            vec![(
                "Account created! Welcome to ScholarFlow.".to_string(),
                ToastKind::Success
            )]
        );
        assert_eq!(page.flow().phase(), FlowPhase::Succeeded);
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_backend() {
        let navigator = RecordingNavigator::new();
        let notifier = RecordingNotifier::new();
        let page = RegistrationPage::new(
            FlowConfig::default(),
            navigator.clone(),
            notifier.clone(),
            SimulatedBackend::default().failing("must not be called"),
        );

        let form = RegistrationForm {
            confirm_password: "nope".into(),
            ..valid_form()
        };
        let result = page.register(&form).await;

        assert_matches!(result, Err(FlowError::Invalid(ValidationError::Mismatch)));
        assert!(navigator.paths().is_empty());
        assert_eq!(
            notifier.toasts(),
            vec![("Doesn't match".to_string(), ToastKind::Error)]
        );
    }
}
