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

//! Check trait for the Chain of Responsibility pattern.
//!
//! A check is a single, independently testable authorization rule. The shared
//! run-then-advance loop lives in the chain, not in each check: a check never
//! knows its neighbor and never delegates.

use authgate_error::CheckFailure;

use crate::context::authorization_context::AuthorizationContext;

/// A single unit of validation against an authorization context.
///
/// Checks are stateless or configuration-only: any allow-lists or thresholds
/// are bound at construction and immutable afterwards. A check must be pure
/// with respect to the context (no mutation, no hidden per-request state), so
/// that repeated chain runs over the same context yield the same result.
///
/// # Design Pattern
///
/// Implements the Chain of Responsibility pattern: multiple checks process an
/// authorization request in sequence with fail-fast semantics.
///
/// # Thread Safety
///
/// Implementations must be Send + Sync so a built chain can be shared across
/// threads and reused for many requests.
pub trait Check: Send + Sync {
    /// Stable identifier for this check.
    ///
    /// Used as the failure code in [`CheckFailure`] so boundaries can handle
    /// rejections programmatically.
    fn name(&self) -> &'static str;

    /// Evaluate the check against a fully-populated context.
    ///
    /// # Arguments
    ///
    /// * `context` - The authorization context containing request information
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The check passed
    /// * `Err(CheckFailure)` - The check rejected the request
    fn evaluate(&self, context: &AuthorizationContext) -> Result<(), CheckFailure>;
}
