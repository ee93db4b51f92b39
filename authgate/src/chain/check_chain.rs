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

//! Check chain implementation.
//!
//! The chain owns an ordered sequence of checks and executes them with
//! ordered-AND, eager short-circuit semantics: the first failure stops the
//! traversal and no later check is evaluated. There is no aggregation of
//! multiple failures and no retry.

use std::sync::Arc;

use authgate_error::CheckFailure;
use authgate_error::ConfigurationError;

use crate::chain::check::Check;
use crate::context::authorization_context::AuthorizationContext;

/// Ordered chain of authorization checks.
///
/// The chain exclusively owns its checks as a flat sequence; no check holds a
/// pointer to its successor. Ordering is caller-specified at build time and
/// fixed for the lifetime of the chain. A built chain is reusable across many
/// authorization requests as long as its checks are stateless.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use authgate::chain::check::Check;
/// use authgate::chain::check_chain::CheckChain;
/// use authgate::checks::status_check::StatusCheck;
/// use authgate::context::authorization_context::AuthorizationContext;
/// use authgate::enums::user_status::UserStatus;
///
/// let chain = CheckChain::build(vec![Arc::new(StatusCheck::new()) as Arc<dyn Check>])
///     .expect("non-empty chain");
/// let context = AuthorizationContext::of(UserStatus::Online, "manager", 0);
/// assert!(chain.run(&context).is_ok());
/// ```
pub struct CheckChain {
    checks: Vec<Arc<dyn Check>>,
}

impl CheckChain {
    /// Build a chain from an ordered sequence of checks.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::EmptyChain` if the sequence is empty. An
    /// empty chain would vacuously pass every request, so it is rejected at
    /// construction rather than at run time.
    pub fn build(checks: Vec<Arc<dyn Check>>) -> Result<Self, ConfigurationError> {
        if checks.is_empty() {
            return Err(ConfigurationError::EmptyChain);
        }
        Ok(Self { checks })
    }

    /// Execute the chain against a context.
    ///
    /// Checks run in the order they were given to [`build`]. The first check
    /// that fails stops execution immediately and its failure is returned;
    /// later checks are not evaluated. If every check passes, returns `Ok`.
    ///
    /// The context is only borrowed for the duration of the call; no check
    /// retains a reference to it.
    ///
    /// [`build`]: CheckChain::build
    pub fn run(&self, context: &AuthorizationContext) -> Result<(), CheckFailure> {
        for check in &self.checks {
            check.evaluate(context)?;
        }
        Ok(())
    }

    /// Number of checks in the chain.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether the chain holds no checks. Always false for a built chain.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}
