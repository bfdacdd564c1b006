// SPDX-License-Identifier: MIT OR Apache-2.0

use scholarflow_auth::{Role, RoleContext};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::classify_email;
use crate::config::FlowConfig;
use crate::flow::{FlowAction, FlowError, FormFlow, SocialProvider};
use crate::traits::{AuthBackend, AuthRequest, Navigator, Notifier, ToastKind};
use crate::validation::{ValidationError, require, require_email};

pub const FORGOT_PASSWORD_ROUTE: &str = "/forgot-password";

/// Input fields of the login page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check the credentials and resolve the role the user signs in as.
    pub fn validate(&self) -> Result<Role, ValidationError> {
        require(&self.email, "Please enter your email")?;
        require(&self.password, "Please enter your password")?;
        classify_email(&self.email)
    }
}

/// Check the address a magic link is sent to.
pub fn validate_magic_link(email: &str) -> Result<(), ValidationError> {
    require(email, "Please enter your email")?;
    require_email(email, "Please enter a valid email address")
}

/// Login page offering credentials, magic link and social sign-in.
pub struct LoginPage<N, T, B> {
    flow: FormFlow,
    navigator: N,
    notifier: T,
    backend: B,
}

impl<N, T, B> LoginPage<N, T, B>
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

    /// Sign in with email and password.
    ///
    /// On success the resolved role is set on the given context and the user is sent to the
    /// dashboard of that role.
    pub async fn sign_in(
        &self,
        form: &LoginForm,
        context: &RoleContext<'_>,
    ) -> Result<Role, FlowError> {
        let result = self
            .flow
            .run(
                FlowAction::Credentials,
                || form.validate(),
                |role| async move {
                    let request = AuthRequest::Credentials {
                        email: form.email.trim().to_string(),
                        password: form.password.clone(),
                    };
                    self.backend.submit(request).await.map(|_| role)
                },
            )
            .await;

        match &result {
            Ok(role) => {
                debug!(role = role.as_str(), "signed in");
                context.set_role(*role);
                self.notifier.show_toast(
                    &format!("Welcome back, {}!", role.display_name()),
                    ToastKind::Success,
                );
                self.navigator.navigate(role.dashboard_route());
            }
            Err(err) => err.notify(&self.notifier),
        }

        result
    }

    /// Send a one-time sign-in link to the given address.
    pub async fn send_magic_link(&self, email: &str) -> Result<(), FlowError> {
        let result = self
            .flow
            .run(
                FlowAction::MagicLink,
                || validate_magic_link(email),
                |_| {
                    self.backend.submit(AuthRequest::MagicLink {
                        email: email.trim().to_string(),
                    })
                },
            )
            .await;

        match &result {
            Ok(()) => self.notifier.show_toast(
                &format!("Magic link sent to {}", email.trim()),
                ToastKind::Success,
            ),
            Err(err) => err.notify(&self.notifier),
        }

        result
    }

    /// Sign in through a third-party identity provider.
    pub async fn social_login(
        &self,
        provider: SocialProvider,
        context: &RoleContext<'_>,
    ) -> Result<(), FlowError> {
        let result = self
            .flow
            .run(
                FlowAction::Social(provider),
                || Ok(()),
                |_| self.backend.submit(AuthRequest::Social { provider }),
            )
            .await;

        match &result {
            Ok(()) => {
                context.set_role(Role::Researcher);
                self.notifier.show_toast(
                    &format!("Signed in with {}", provider.display_name()),
                    ToastKind::Success,
                );
                self.navigator.navigate(Role::Researcher.dashboard_route());
            }
            Err(err) => err.notify(&self.notifier),
        }

        result
    }

    pub fn forgot_password(&self) {
        self.navigator.navigate(FORGOT_PASSWORD_ROUTE);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use assert_matches::assert_matches;
    use rstest::rstest;
    use scholarflow_auth::test_utils::RecordingObserver;
    use scholarflow_auth::{Role, RoleContext, RoleProvider};

    use crate::backend::SimulatedBackend;
    use crate::config::FlowConfig;
    use crate::flow::{FlowAction, FlowError, FlowPhase, SocialProvider};
    use crate::test_utils::{RecordingNavigator, RecordingNotifier, setup_logging};
    use crate::traits::ToastKind;
    use crate::validation::ValidationError;

    use super::{LoginForm, LoginPage, validate_magic_link};

    type TestLoginPage = LoginPage<RecordingNavigator, RecordingNotifier, SimulatedBackend>;

    fn login_page(
        backend: SimulatedBackend,
    ) -> (TestLoginPage, RecordingNavigator, RecordingNotifier) {
        login_page_with(FlowConfig::default(), backend)
    }

    fn login_page_with(
        config: FlowConfig,
        backend: SimulatedBackend,
    ) -> (TestLoginPage, RecordingNavigator, RecordingNotifier) {
        setup_logging();

        let navigator = RecordingNavigator::new();
        let notifier = RecordingNotifier::new();
        let page = LoginPage::new(config, navigator.clone(), notifier.clone(), backend);
        (page, navigator, notifier)
    }

    #[rstest]
    #[case("", "secret", "Please enter your email")]
    #[case("jane@example.com", "", "Please enter your password")]
    #[case("", "", "Please enter your email")]
    #[case("not-an-email", "secret", "Please enter a valid email address")]
    fn first_failing_check_wins(
        #[case] email: &str,
        #[case] password: &str,
        #[case] message: &str,
    ) {
        let form = LoginForm::new(email, password);
        assert_eq!(form.validate().unwrap_err().to_string(), message);
        // Same input, same outcome.
        assert_eq!(form.validate(), form.validate());
    }

    #[test]
    fn magic_link_requires_well_formed_address() {
        assert_eq!(
            validate_magic_link(""),
            Err(ValidationError::Required("Please enter your email"))
        );
        assert_eq!(
            validate_magic_link("admin").unwrap_err().to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(validate_magic_link("jane@example.com"), Ok(()));
    }

    #[rstest]
    #[case("admin@example.com", Role::Admin, "/dashboard/admin")]
    #[case("admin-labs@foo.org", Role::Admin, "/dashboard/admin")]
    #[case("lead.jane@foo.org", Role::TeamLead, "/dashboard/team")]
    #[case("pro123@foo.org", Role::ProResearcher, "/dashboard/pro")]
    #[case("random.person@foo.org", Role::Researcher, "/dashboard")]
    #[tokio::test(start_paused = true)]
    async fn sign_in_routes_by_role(
        #[case] email: &str,
        #[case] role: Role,
        #[case] route: &str,
    ) {
        let (page, navigator, notifier) = login_page(SimulatedBackend::default());
        let observer = RecordingObserver::new();
        let provider = RoleProvider::default().on_role_change(observer.clone());

        let result = page
            .sign_in(&LoginForm::new(email, "secret"), &provider.context())
            .await;

        assert_eq!(result.unwrap(), role);
        assert_eq!(provider.role(), role);
        assert_eq!(observer.changes(), vec![role]);
        assert_eq!(navigator.paths(), vec![route.to_string()]);
        assert_eq!(
            notifier.last(),
            Some((
                format!("Welcome back, {}!", role.display_name()),
                ToastKind::Success
            ))
        );
        assert_eq!(page.flow().phase(), FlowPhase::Succeeded);
    }

    #[tokio::test(start_paused = true)]
    async fn unclassifiable_email_is_rejected_locally() {
        let (page, navigator, notifier) = login_page(SimulatedBackend::default());

        let result = page
            .sign_in(&LoginForm::new("not-an-email", "secret"), &RoleContext::Fallback)
            .await;

        assert_matches!(
            result,
            Err(FlowError::Invalid(ValidationError::UnclassifiableEmail))
        );
        assert!(navigator.paths().is_empty());
        assert_eq!(
            notifier.toasts(),
            vec![(
                "Please enter a valid email address".to_string(),
                ToastKind::Error
            )]
        );
        assert_eq!(page.flow().phase(), FlowPhase::RejectedLocally);
    }

    #[tokio::test(start_paused = true)]
    async fn magic_link_is_ignored_while_signing_in() {
        let (page, navigator, notifier) = login_page(SimulatedBackend::default());
        let form = LoginForm::new("admin@example.com", "secret");

        let magic_link = async {
            let result = page.send_magic_link("jane@example.com").await;
            assert_matches!(
                result,
                Err(FlowError::Busy {
                    in_flight: FlowAction::Credentials
                })
            );

            // Sign-in is still the action in flight.
            assert_eq!(
                page.flow().phase(),
                FlowPhase::Loading(FlowAction::Credentials)
            );
            assert_eq!(page.flow().loading(), Some(FlowAction::Credentials));
            assert!(notifier.toasts().is_empty());
        };

        let (sign_in, ()) = tokio::join!(page.sign_in(&form, &RoleContext::Fallback), magic_link);
        assert_eq!(sign_in.unwrap(), Role::Admin);

        // Only the sign-in produced feedback.
        assert_eq!(navigator.paths(), vec!["/dashboard/admin".to_string()]);
        assert_eq!(notifier.toasts().len(), 1);

        page.send_magic_link("jane@example.com").await.unwrap();
        assert_eq!(
            notifier.last(),
            Some((
                "Magic link sent to jane@example.com".to_string(),
                ToastKind::Success
            ))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn remote_failure_raises_error_toast() {
        let (page, navigator, notifier) =
            login_page(SimulatedBackend::new(Duration::from_millis(500)).failing("locked"));

        let result = page
            .sign_in(&LoginForm::new("jane@example.com", "secret"), &RoleContext::Fallback)
            .await;

        assert_matches!(result, Err(FlowError::Backend(_)));
        assert!(navigator.paths().is_empty());
        assert_eq!(
            notifier.last(),
            Some((
                "Something went wrong, please try again".to_string(),
                ToastKind::Error
            ))
        );
        assert!(!page.flow().is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn slow_backend_times_out() {
        let (page, navigator, notifier) = login_page_with(
            FlowConfig::new().request_timeout(100),
            SimulatedBackend::new(Duration::from_secs(5)),
        );
        assert_eq!(
            page.flow().config().request_timeout,
            Duration::from_millis(100)
        );

        let result = page
            .sign_in(&LoginForm::new("jane@example.com", "secret"), &RoleContext::Fallback)
            .await;

        assert_matches!(
            result,
            Err(FlowError::TimedOut {
                action: FlowAction::Credentials,
                ..
            })
        );
        assert!(navigator.paths().is_empty());
        assert_eq!(
            notifier.toasts(),
            vec![(
                "The request timed out, please try again".to_string(),
                ToastKind::Error
            )]
        );
        assert!(!page.flow().is_loading());
        assert_eq!(page.flow().phase(), FlowPhase::FailedRemotely);
    }

    #[tokio::test(start_paused = true)]
    async fn social_login_lands_on_researcher_dashboard() {
        let (page, navigator, notifier) = login_page(SimulatedBackend::default());

        page.social_login(SocialProvider::Orcid, &RoleContext::Fallback)
            .await
            .unwrap();

        assert_eq!(navigator.paths(), vec!["/dashboard".to_string()]);
        assert_eq!(
            notifier.last(),
            Some(("Signed in with ORCID".to_string(), ToastKind::Success))
        );
    }

    #[test]
    fn forgot_password_navigates() {
        let (page, navigator, _) = login_page(SimulatedBackend::default());
        page.forgot_password();
        assert_eq!(navigator.paths(), vec!["/forgot-password".to_string()]);
    }
}
