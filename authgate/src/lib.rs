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

pub mod chain;
pub mod checks;
pub mod config;
pub mod context;
pub mod enums;
pub mod service;

// Re-export commonly used pipeline types
pub use chain::check::Check;
pub use chain::check_chain::CheckChain;
pub use checks::attempt_count_check::AttemptCountCheck;
pub use checks::permission_check::PermissionCheck;
pub use checks::role_check::RoleCheck;
pub use checks::status_check::StatusCheck;
pub use config::AuthConfig;
pub use context::authorization_context::AuthorizationContext;
pub use context::builder::AuthorizationContextBuilder;
pub use enums::user_status::UserStatus;
pub use service::post_action::MessageAction;
pub use service::post_action::PostSuccessAction;
pub use service::AuthorizationService;
