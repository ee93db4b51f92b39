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

//! Caller-side context construction errors.

use thiserror::Error;

/// The caller supplied an incomplete authorization context.
///
/// This is an integration error, distinct from a business rejection: the
/// request never reached the check chain. It fails fast and loud at context
/// construction instead of silently passing through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextError {
    /// A required context field was not provided to the builder.
    #[error("required context field is missing: {0}")]
    MissingField(&'static str),
}
