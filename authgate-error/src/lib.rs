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

//! # AuthGate Error Handling
//!
//! This crate provides the error types used across the AuthGate
//! request-authorization pipeline.
//!
//! The taxonomy separates three concerns:
//! - **Business rejection** (`CheckFailure`): a check's rule said no. Raised
//!   during chain execution, never retried, never aggregated.
//! - **Misconfiguration** (`ConfigurationError`): a chain or check was built
//!   with invalid parameters. Raised at construction time, never during a run.
//! - **Integration error** (`ContextError`): the caller supplied an
//!   incomplete authorization context. A programmer error, not a business
//!   failure.
//!
//! ## Usage
//!
//! ```rust
//! use authgate_error::AuthGateError;
//! use authgate_error::CheckFailure;
//!
//! fn reject() -> Result<(), AuthGateError> {
//!     Err(CheckFailure::new("role", "role 'guest' is not permitted").into())
//! }
//! # assert!(reject().is_err());
//! ```

use thiserror::Error;

pub mod check_failure;
pub mod configuration_error;
pub mod context_error;

pub use check_failure::CheckFailure;
pub use configuration_error::ConfigurationError;
pub use context_error::ContextError;

/// Unified AuthGate error type.
///
/// Boundaries that want a single error type (HTTP handlers, CLI front ends)
/// can convert any of the specific errors into this enum via `From`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthGateError {
    /// A check rejected the request during chain execution.
    #[error(transparent)]
    CheckFailure(#[from] CheckFailure),

    /// A chain or check was built with invalid parameters.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The caller supplied an incomplete authorization context.
    #[error(transparent)]
    Context(#[from] ContextError),
}

/// Result alias for operations that return [`AuthGateError`].
pub type AuthGateResult<T> = Result<T, AuthGateError>;
