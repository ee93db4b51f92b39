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

use cheetah_string::CheetahString;
use serde::Deserialize;
use serde::Serialize;

use crate::checks::attempt_count_check::DEFAULT_ATTEMPT_LIMIT;
use crate::checks::permission_check::DEFAULT_ACTION;

/// Configuration for the canonical authorization chain.
///
/// Values here parameterize the built-in checks; the chain order itself is
/// fixed (status, role, permission, attempt count — cheap identity checks
/// before permission checks) and deliberately not configurable.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Comma-separated role allow-list for the role check.
    pub role_allow_list: CheetahString,

    /// Action name the permission check requires a grant for.
    pub permission_action: CheetahString,

    /// Attempt limit for the attempt count check (inclusive boundary).
    pub attempt_limit: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            role_allow_list: CheetahString::from_static_str("manager,administrator"),
            permission_action: CheetahString::from_static_str(DEFAULT_ACTION),
            attempt_limit: DEFAULT_ATTEMPT_LIMIT,
        }
    }
}
