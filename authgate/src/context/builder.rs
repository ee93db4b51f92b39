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

//! Builder for authorization contexts.
//!
//! The builder validates required fields at `build` time: a missing status or
//! role is a caller error (`ContextError`), reported before the request ever
//! reaches the check chain.

use std::collections::HashMap;

use authgate_error::ContextError;
use cheetah_string::CheetahString;

use crate::context::authorization_context::AuthorizationContext;
use crate::enums::user_status::UserStatus;

/// Builder for [`AuthorizationContext`].
///
/// # Examples
///
/// ```rust
/// use authgate::context::authorization_context::AuthorizationContext;
/// use authgate::enums::user_status::UserStatus;
///
/// let context = AuthorizationContext::builder()
///     .status(UserStatus::Online)
///     .role("manager")
///     .permission("change", true)
///     .attempt_count(0)
///     .build()
///     .expect("complete context");
/// assert_eq!(context.role().as_str(), "manager");
/// ```
#[derive(Debug, Default)]
pub struct AuthorizationContextBuilder {
    status: Option<UserStatus>,
    role: Option<CheetahString>,
    permissions: HashMap<CheetahString, bool>,
    attempt_count: u32,
    ext_info: HashMap<CheetahString, CheetahString>,
}

impl AuthorizationContextBuilder {
    /// Set the session status of the requesting user. Required.
    pub fn status(mut self, status: UserStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the role the request is made under. Required.
    pub fn role(mut self, role: impl Into<CheetahString>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Record the grant state of a single action.
    pub fn permission(mut self, action: impl Into<CheetahString>, allowed: bool) -> Self {
        self.permissions.insert(action.into(), allowed);
        self
    }

    /// Replace the full permission map.
    pub fn permissions(mut self, permissions: HashMap<CheetahString, bool>) -> Self {
        self.permissions = permissions;
        self
    }

    /// Set the number of request attempts made so far. Defaults to 0.
    pub fn attempt_count(mut self, attempt_count: u32) -> Self {
        self.attempt_count = attempt_count;
        self
    }

    /// Attach a piece of extended info for custom checks.
    pub fn ext_info(
        mut self,
        key: impl Into<CheetahString>,
        value: impl Into<CheetahString>,
    ) -> Self {
        self.ext_info.insert(key.into(), value.into());
        self
    }

    /// Build the context, validating required fields.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::MissingField` if `status` or `role` was never
    /// set. This is an integration error on the caller's side, distinct from
    /// any check failure.
    pub fn build(self) -> Result<AuthorizationContext, ContextError> {
        let status = self.status.ok_or(ContextError::MissingField("status"))?;
        let role = self.role.ok_or(ContextError::MissingField("role"))?;

        Ok(AuthorizationContext::from_parts(
            status,
            role,
            self.permissions,
            self.attempt_count,
            self.ext_info,
        ))
    }
}
