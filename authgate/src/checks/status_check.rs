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

//! User status check.

use authgate_error::CheckFailure;

use crate::chain::check::Check;
use crate::context::authorization_context::AuthorizationContext;
use crate::enums::user_status::UserStatus;

/// Rejects requests from users whose session is not online.
///
/// This is the cheapest identity check and conventionally runs first in the
/// canonical chain.
#[derive(Debug, Default)]
pub struct StatusCheck;

impl StatusCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Check for StatusCheck {
    fn name(&self) -> &'static str {
        "status"
    }

    fn evaluate(&self, context: &AuthorizationContext) -> Result<(), CheckFailure> {
        if context.status() != UserStatus::Online {
            return Err(CheckFailure::new(
                self.name(),
                "available only to authenticated (online) users",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_online_passes() {
        let check = StatusCheck::new();
        let context = AuthorizationContext::of(UserStatus::Online, "manager", 0);

        assert!(check.evaluate(&context).is_ok());
    }

    #[test]
    fn test_offline_fails_with_authentication_reason() {
        let check = StatusCheck::new();
        let context = AuthorizationContext::of(UserStatus::Offline, "manager", 0);

        let failure = check.evaluate(&context).unwrap_err();
        assert_eq!(failure.code(), "status");
        assert!(failure.reason().contains("authenticated"));
    }
}
