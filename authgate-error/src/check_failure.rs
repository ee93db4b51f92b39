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

//! Business-rule rejection raised by a check.

use thiserror::Error;

/// A check's business rule rejected the request.
///
/// Carries a stable `code` identifying the failing check (suitable for
/// programmatic handling) and a human-readable `reason`. The boundary decides
/// how to render it (HTTP 403, CLI exit code, log line); the core never does.
///
/// A `CheckFailure` is terminal for the request: the chain stops at the first
/// failure and the failure propagates to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("check '{code}' rejected the request: {reason}")]
pub struct CheckFailure {
    code: String,
    reason: String,
}

impl CheckFailure {
    /// Create a new check failure.
    ///
    /// # Arguments
    ///
    /// * `code` - Stable identifier of the failing check (e.g. `"role"`)
    /// * `reason` - Human-readable rejection reason
    pub fn new(code: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            reason: reason.into(),
        }
    }

    /// Stable identifier of the check that rejected the request.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable rejection reason.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
