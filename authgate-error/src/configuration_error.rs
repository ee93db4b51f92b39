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

//! Construction-time configuration errors.

use thiserror::Error;

/// A chain or check was built with invalid parameters.
///
/// These errors are raised at construction time only; a successfully built
/// chain never produces a `ConfigurationError` during execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A check chain was built with zero checks.
    #[error("check chain must contain at least one check")]
    EmptyChain,

    /// A role check was built with an allow-list that admits nobody.
    #[error("role allow-list must contain at least one role")]
    EmptyRoleAllowList,
}
