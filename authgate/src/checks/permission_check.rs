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

//! Named permission check.

use authgate_error::CheckFailure;
use cheetah_string::CheetahString;

use crate::chain::check::Check;
use crate::context::authorization_context::AuthorizationContext;

/// Action consulted when no explicit action is configured.
pub const DEFAULT_ACTION: &str = "change";

/// Rejects requests that do not carry a `true` grant for a named action.
///
/// An action missing from the context's permission map counts as not granted;
/// absence never passes silently.
#[derive(Debug)]
pub struct PermissionCheck {
    action: CheetahString,
}

impl PermissionCheck {
    /// Create a permission check for the default action ([`DEFAULT_ACTION`]).
    pub fn new() -> Self {
        Self {
            action: CheetahString::from_static_str(DEFAULT_ACTION),
        }
    }

    /// Create a permission check for an explicit action name.
    pub fn for_action(action: impl Into<CheetahString>) -> Self {
        Self {
            action: action.into(),
        }
    }

    /// The action this check requires a grant for.
    pub fn action(&self) -> &CheetahString {
        &self.action
    }
}

impl Default for PermissionCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for PermissionCheck {
    fn name(&self) -> &'static str {
        "permission"
    }

    fn evaluate(&self, context: &AuthorizationContext) -> Result<(), CheckFailure> {
        if context.permission(self.action.as_str()) != Some(true) {
            return Err(CheckFailure::new(
                self.name(),
                format!("permission '{}' has not been granted", self.action),
            ));
        }
        Ok(())
    }
}
