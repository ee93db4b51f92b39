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

//! Request attempt limit check.

use authgate_error::CheckFailure;

use crate::chain::check::Check;
use crate::context::authorization_context::AuthorizationContext;

/// Attempt limit applied when none is configured.
pub const DEFAULT_ATTEMPT_LIMIT: u32 = 10;

/// Rejects requests whose attempt count exceeds a configured limit.
///
/// The boundary is inclusive: a count equal to the limit still passes, only
/// counts strictly greater fail.
#[derive(Debug)]
pub struct AttemptCountCheck {
    limit: u32,
}

impl AttemptCountCheck {
    /// Create an attempt check with the default limit
    /// ([`DEFAULT_ATTEMPT_LIMIT`]).
    pub fn new() -> Self {
        Self {
            limit: DEFAULT_ATTEMPT_LIMIT,
        }
    }

    /// Create an attempt check with an explicit limit.
    pub fn with_limit(limit: u32) -> Self {
        Self { limit }
    }

    /// The configured attempt limit.
    pub fn limit(&self) -> u32 {
        self.limit
    }
}

impl Default for AttemptCountCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for AttemptCountCheck {
    fn name(&self) -> &'static str {
        "attempt_count"
    }

    fn evaluate(&self, context: &AuthorizationContext) -> Result<(), CheckFailure> {
        if context.attempt_count() > self.limit {
            return Err(CheckFailure::new(
                self.name(),
                format!("request attempt limit of {} exceeded", self.limit),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::user_status::UserStatus;

    fn context_with_attempts(attempt_count: u32) -> AuthorizationContext {
        AuthorizationContext::of(UserStatus::Online, "manager", attempt_count)
    }

    #[test]
    fn test_zero_attempts_pass() {
        let check = AttemptCountCheck::new();

        assert!(check.evaluate(&context_with_attempts(0)).is_ok());
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let check = AttemptCountCheck::new();

        assert!(check.evaluate(&context_with_attempts(10)).is_ok());
        assert!(check.evaluate(&context_with_attempts(11)).is_err());
    }

    #[test]
    fn test_failure_names_the_limit() {
        let check = AttemptCountCheck::new();

        let failure = check.evaluate(&context_with_attempts(11)).unwrap_err();
        assert_eq!(failure.code(), "attempt_count");
        assert!(failure.reason().contains("10"));
    }

    #[test]
    fn test_custom_limit() {
        let check = AttemptCountCheck::with_limit(2);

        assert_eq!(check.limit(), 2);
        assert!(check.evaluate(&context_with_attempts(2)).is_ok());
        assert!(check.evaluate(&context_with_attempts(3)).is_err());
    }
}
