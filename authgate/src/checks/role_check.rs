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

//! Role allow-list check.

use std::collections::HashSet;

use authgate_error::CheckFailure;
use authgate_error::ConfigurationError;
use cheetah_string::CheetahString;

use crate::chain::check::Check;
use crate::context::authorization_context::AuthorizationContext;

/// Roles admitted when no explicit allow-list is configured.
pub const DEFAULT_ALLOWED_ROLES: &[&str] = &["manager", "administrator"];

/// Rejects requests whose role is not in a configured allow-list.
///
/// The allow-list is bound at construction and immutable afterwards; the
/// check itself holds no per-request state.
#[derive(Debug)]
pub struct RoleCheck {
    allowed_roles: HashSet<CheetahString>,
}

impl RoleCheck {
    /// Create a role check with the default allow-list
    /// ([`DEFAULT_ALLOWED_ROLES`]).
    pub fn new() -> Self {
        Self {
            allowed_roles: DEFAULT_ALLOWED_ROLES
                .iter()
                .map(|role| CheetahString::from(*role))
                .collect(),
        }
    }

    /// Create a role check from an explicit allow-list.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::EmptyRoleAllowList` if the list is empty;
    /// an allow-list that admits nobody is a configuration mistake, rejected
    /// at construction rather than at run time.
    pub fn with_allowed_roles(
        roles: impl IntoIterator<Item = CheetahString>,
    ) -> Result<Self, ConfigurationError> {
        let allowed_roles: HashSet<CheetahString> = roles.into_iter().collect();
        if allowed_roles.is_empty() {
            return Err(ConfigurationError::EmptyRoleAllowList);
        }
        Ok(Self { allowed_roles })
    }

    /// Create a role check from a comma-separated allow-list string.
    ///
    /// Entries are trimmed; empty entries are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::EmptyRoleAllowList` if no non-empty entry
    /// remains after parsing.
    pub fn from_comma_list(list: &str) -> Result<Self, ConfigurationError> {
        let mut allowed_roles = HashSet::new();
        for role in list.split(',') {
            let trimmed = role.trim();
            if !trimmed.is_empty() {
                allowed_roles.insert(CheetahString::from(trimmed));
            }
        }

        if allowed_roles.is_empty() {
            return Err(ConfigurationError::EmptyRoleAllowList);
        }
        Ok(Self { allowed_roles })
    }

    /// The configured allow-list.
    pub fn allowed_roles(&self) -> &HashSet<CheetahString> {
        &self.allowed_roles
    }
}

impl Default for RoleCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for RoleCheck {
    fn name(&self) -> &'static str {
        "role"
    }

    fn evaluate(&self, context: &AuthorizationContext) -> Result<(), CheckFailure> {
        if !self.allowed_roles.contains(context.role()) {
            return Err(CheckFailure::new(
                self.name(),
                format!("role '{}' is not permitted to perform this request", context.role()),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::user_status::UserStatus;

    #[test]
    fn test_default_allow_list_admits_manager_and_administrator() {
        let check = RoleCheck::new();

        for role in ["manager", "administrator"] {
            let context = AuthorizationContext::of(UserStatus::Online, role, 0);
            assert!(check.evaluate(&context).is_ok(), "role '{role}' should pass");
        }
    }

    #[test]
    fn test_guest_fails_against_default_allow_list() {
        let check = RoleCheck::new();
        let context = AuthorizationContext::of(UserStatus::Online, "guest", 0);

        let failure = check.evaluate(&context).unwrap_err();
        assert_eq!(failure.code(), "role");
        assert!(failure.reason().contains("guest"));
    }

    #[test]
    fn test_explicit_allow_list() {
        let check =
            RoleCheck::with_allowed_roles(vec![CheetahString::from("auditor")]).unwrap();

        let auditor = AuthorizationContext::of(UserStatus::Online, "auditor", 0);
        assert!(check.evaluate(&auditor).is_ok());

        let manager = AuthorizationContext::of(UserStatus::Online, "manager", 0);
        assert!(check.evaluate(&manager).is_err());
    }

    #[test]
    fn test_empty_allow_list_is_configuration_error() {
        let result = RoleCheck::with_allowed_roles(Vec::new());

        assert_eq!(result.err(), Some(ConfigurationError::EmptyRoleAllowList));
    }

    #[test]
    fn test_from_comma_list_trims_and_skips_empty_entries() {
        let check = RoleCheck::from_comma_list(" manager , administrator ,, ").unwrap();

        assert_eq!(check.allowed_roles().len(), 2);
        assert!(check.allowed_roles().contains("manager"));
        assert!(check.allowed_roles().contains("administrator"));
    }

    #[test]
    fn test_from_comma_list_all_blank_is_configuration_error() {
        let result = RoleCheck::from_comma_list(" , ,");

        assert_eq!(result.err(), Some(ConfigurationError::EmptyRoleAllowList));
    }
}
