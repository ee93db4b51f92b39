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

//! Per-request authorization context.
//!
//! The context is the input record every check inspects. It is built once per
//! authorization request by the caller, borrowed by the chain during a
//! traversal, and never mutated by any check.

use std::collections::HashMap;

use cheetah_string::CheetahString;

use crate::context::builder::AuthorizationContextBuilder;
use crate::enums::user_status::UserStatus;

/// Authorization context containing all information the checks decide on.
///
/// This struct contains:
/// - Status: whether the user's session is online or offline
/// - Role: the role the user acts under (manager, administrator, guest, ...)
/// - Permissions: action-name to allowed mapping (view, change, delete, ...)
/// - Attempt count: number of request attempts made so far
/// - Extended info: additional metadata for custom checks
///
/// The context is read-only after construction; accessors only, no setters.
/// No check retains a reference to it beyond the traversal.
#[derive(Debug, Clone)]
pub struct AuthorizationContext {
    /// Session status of the requesting user
    status: UserStatus,

    /// Role the request is made under
    role: CheetahString,

    /// Permission grants by action name
    permissions: HashMap<CheetahString, bool>,

    /// Number of request attempts made so far
    attempt_count: u32,

    /// Extended information for custom check logic
    ext_info: HashMap<CheetahString, CheetahString>,
}

impl AuthorizationContext {
    /// Create a new authorization context with basic information.
    ///
    /// Permissions and extended info start empty; use [`builder`] when the
    /// request carries permission grants.
    ///
    /// # Arguments
    /// * `status` - Session status of the requesting user
    /// * `role` - Role the request is made under
    /// * `attempt_count` - Number of request attempts made so far
    ///
    /// [`builder`]: AuthorizationContext::builder
    pub fn of(status: UserStatus, role: impl Into<CheetahString>, attempt_count: u32) -> Self {
        Self {
            status,
            role: role.into(),
            permissions: HashMap::new(),
            attempt_count,
            ext_info: HashMap::new(),
        }
    }

    /// Create a builder for constructing authorization contexts.
    pub fn builder() -> AuthorizationContextBuilder {
        AuthorizationContextBuilder::default()
    }

    /// Session status of the requesting user.
    pub fn status(&self) -> UserStatus {
        self.status
    }

    /// Role the request is made under.
    pub fn role(&self) -> &CheetahString {
        &self.role
    }

    /// All permission grants carried by the request.
    pub fn permissions(&self) -> &HashMap<CheetahString, bool> {
        &self.permissions
    }

    /// Grant state for a single action, `None` if the action is not present.
    pub fn permission(&self, action: &str) -> Option<bool> {
        self.permissions.get(action).copied()
    }

    /// Number of request attempts made so far.
    pub fn attempt_count(&self) -> u32 {
        self.attempt_count
    }

    /// Extended information for custom check logic.
    pub fn ext_info(&self) -> &HashMap<CheetahString, CheetahString> {
        &self.ext_info
    }

    /// Look up a single extended info value.
    pub fn ext_info_value(&self, key: &str) -> Option<&CheetahString> {
        self.ext_info.get(key)
    }

    pub(crate) fn from_parts(
        status: UserStatus,
        role: CheetahString,
        permissions: HashMap<CheetahString, bool>,
        attempt_count: u32,
        ext_info: HashMap<CheetahString, CheetahString>,
    ) -> Self {
        Self {
            status,
            role,
            permissions,
            attempt_count,
            ext_info,
        }
    }
}
