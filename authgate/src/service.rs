// Copyright 2024 The AuthGate Rust Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Authorization service - facade over the check chain.
//!
//! This module provides the `AuthorizationService` which acts as the main
//! entry point for authorization: it owns a built chain and the post-success
//! action, and wires them together per request.

use std::sync::Arc;

use authgate_error::CheckFailure;
use authgate_error::ConfigurationError;
use tracing::debug;

use crate::chain::check::Check;
use crate::chain::check_chain::CheckChain;
use crate::checks::attempt_count_check::AttemptCountCheck;
use crate::checks::permission_check::PermissionCheck;
use crate::checks::role_check::RoleCheck;
use crate::checks::status_check::StatusCheck;
use crate::config::AuthConfig;
use crate::context::authorization_context::AuthorizationContext;
use crate::service::post_action::PostSuccessAction;

pub mod post_action;

pub use post_action::MessageAction;

/// Authorization service - main entry point for authorization.
///
/// Owns an immutable check chain (built once, reused across requests) and the
/// post-success action. Per call: run the chain against the caller's context;
/// on the first failure return it untouched without invoking the action; when
/// every check passes, invoke the action exactly once and return its output.
///
/// # Example
///
/// ```rust
/// use authgate::config::AuthConfig;
/// use authgate::context::authorization_context::AuthorizationContext;
/// use authgate::enums::user_status::UserStatus;
/// use authgate::service::AuthorizationService;
/// use authgate::service::MessageAction;
///
/// let config = AuthConfig::default();
/// let service =
///     AuthorizationService::with_default_checks(&config, MessageAction::new("proceeding"))
///         .expect("valid configuration");
///
/// let context = AuthorizationContext::builder()
///     .status(UserStatus::Online)
///     .role("manager")
///     .permission("change", true)
///     .build()
///     .expect("complete context");
///
/// assert!(service.authorize(&context).is_ok());
/// ```
pub struct AuthorizationService<A>
where
    A: PostSuccessAction,
{
    check_chain: CheckChain,
    post_success_action: A,
}

impl<A> AuthorizationService<A>
where
    A: PostSuccessAction,
{
    /// Create a service from an already-built chain and an action.
    pub fn new(check_chain: CheckChain, post_success_action: A) -> Self {
        Self {
            check_chain,
            post_success_action,
        }
    }

    /// Create a service with the canonical chain, parameterized by `config`.
    ///
    /// Chain order is fixed: status, role, permission, attempt count — cheap
    /// identity checks run before permission checks.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if the configured role allow-list is
    /// empty. Raised here at construction; `authorize` never reports
    /// configuration problems.
    pub fn with_default_checks(
        config: &AuthConfig,
        post_success_action: A,
    ) -> Result<Self, ConfigurationError> {
        let checks: Vec<Arc<dyn Check>> = vec![
            Arc::new(StatusCheck::new()),
            Arc::new(RoleCheck::from_comma_list(config.role_allow_list.as_str())?),
            Arc::new(PermissionCheck::for_action(config.permission_action.clone())),
            Arc::new(AttemptCountCheck::with_limit(config.attempt_limit)),
        ];

        Ok(Self {
            check_chain: CheckChain::build(checks)?,
            post_success_action,
        })
    }

    /// Authorize a request.
    ///
    /// Runs the chain in order with short-circuit on the first failure. The
    /// failure propagates to the caller unchanged; the core renders nothing
    /// and never terminates the process. On success the post-success action
    /// is invoked exactly once and its output returned.
    pub fn authorize(&self, context: &AuthorizationContext) -> Result<A::Output, CheckFailure> {
        match self.check_chain.run(context) {
            Ok(()) => {
                debug!(
                    checks = self.check_chain.len(),
                    "all checks passed, invoking post-success action"
                );
                Ok(self.post_success_action.perform())
            }
            Err(failure) => {
                debug!(
                    code = failure.code(),
                    reason = failure.reason(),
                    "request rejected by check chain"
                );
                Err(failure)
            }
        }
    }

    /// The chain this service runs.
    pub fn check_chain(&self) -> &CheckChain {
        &self.check_chain
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::enums::user_status::UserStatus;

    struct CountingAction {
        invocations: Arc<AtomicUsize>,
    }

    impl PostSuccessAction for CountingAction {
        type Output = usize;

        fn perform(&self) -> usize {
            self.invocations.fetch_add(1, Ordering::SeqCst) + 1
        }
    }

    fn counting_service() -> (AuthorizationService<CountingAction>, Arc<AtomicUsize>) {
        let invocations = Arc::new(AtomicUsize::new(0));
        let action = CountingAction {
            invocations: invocations.clone(),
        };
        let service =
            AuthorizationService::with_default_checks(&AuthConfig::default(), action).unwrap();
        (service, invocations)
    }

    fn passing_context() -> AuthorizationContext {
        AuthorizationContext::builder()
            .status(UserStatus::Online)
            .role("manager")
            .permission("view", true)
            .permission("change", true)
            .permission("delete", false)
            .attempt_count(0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_all_pass_invokes_action_exactly_once() {
        let (service, invocations) = counting_service();

        let result = service.authorize(&passing_context());

        assert_eq!(result.unwrap(), 1);
        assert_eq!(invocations.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failure_does_not_invoke_action() {
        let (service, invocations) = counting_service();
        let context = AuthorizationContext::builder()
            .status(UserStatus::Offline)
            .role("manager")
            .permission("change", true)
            .build()
            .unwrap();

        let failure = service.authorize(&context).unwrap_err();

        assert_eq!(failure.code(), "status");
        assert_eq!(invocations.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_default_chain_order_reports_earliest_failure() {
        // Offline status and a disallowed role both fail; the status check
        // runs first, so its failure is the one observed.
        let (service, _) = counting_service();
        let context = AuthorizationContext::builder()
            .status(UserStatus::Offline)
            .role("guest")
            .build()
            .unwrap();

        assert_eq!(service.authorize(&context).unwrap_err().code(), "status");
    }

    #[test]
    fn test_default_chain_has_four_checks() {
        let (service, _) = counting_service();

        assert_eq!(service.check_chain().len(), 4);
    }

    #[test]
    fn test_permission_rejection_from_default_chain() {
        let (service, _) = counting_service();
        let context = AuthorizationContext::builder()
            .status(UserStatus::Online)
            .role("manager")
            .permission("change", false)
            .build()
            .unwrap();

        assert_eq!(service.authorize(&context).unwrap_err().code(), "permission");
    }

    #[test]
    fn test_attempt_limit_rejection_from_default_chain() {
        let (service, _) = counting_service();
        let context = AuthorizationContext::builder()
            .status(UserStatus::Online)
            .role("manager")
            .permission("change", true)
            .attempt_count(11)
            .build()
            .unwrap();

        assert_eq!(
            service.authorize(&context).unwrap_err().code(),
            "attempt_count"
        );
    }

    #[test]
    fn test_no_configuration_reaches_action_without_passing_checks() {
        // Whatever the config values, a service built from them always runs
        // the chain; an offline guest never reaches the action.
        let invocations = Arc::new(AtomicUsize::new(0));
        let action = CountingAction {
            invocations: invocations.clone(),
        };
        let config = AuthConfig {
            role_allow_list: cheetah_string::CheetahString::from_static_str("guest"),
            attempt_limit: u32::MAX,
            ..AuthConfig::default()
        };
        let service = AuthorizationService::with_default_checks(&config, action).unwrap();

        let context = AuthorizationContext::builder()
            .status(UserStatus::Offline)
            .role("guest")
            .permission("change", true)
            .build()
            .unwrap();

        assert_eq!(service.authorize(&context).unwrap_err().code(), "status");
        assert_eq!(invocations.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_message_action_returns_configured_message() {
        let service = AuthorizationService::with_default_checks(
            &AuthConfig::default(),
            MessageAction::new("further actions follow a passed check"),
        )
        .unwrap();

        let message = service.authorize(&passing_context()).unwrap();
        assert_eq!(message.as_str(), "further actions follow a passed check");
    }

    #[test]
    fn test_empty_role_allow_list_fails_at_construction() {
        let config = AuthConfig {
            role_allow_list: cheetah_string::CheetahString::from_static_str(" , "),
            ..AuthConfig::default()
        };
        let result = AuthorizationService::with_default_checks(
            &config,
            MessageAction::new("unreachable"),
        );

        assert!(matches!(
            result.err(),
            Some(ConfigurationError::EmptyRoleAllowList)
        ));
    }
}
