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

//! Authorization Service Examples
//!
//! This example demonstrates how to use the AuthorizationService to run a
//! request context through the canonical check chain.

use authgate::config::AuthConfig;
use authgate::context::authorization_context::AuthorizationContext;
use authgate::enums::user_status::UserStatus;
use authgate::service::AuthorizationService;
use authgate::service::MessageAction;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    // Create configuration
    let config = AuthConfig::default();

    // Create the service with the canonical chain and a post-success action
    let action = MessageAction::new("further actions follow a passed check");
    let service = AuthorizationService::with_default_checks(&config, action)?;

    // Context 1: an online manager with the 'change' permission granted
    let context1 = AuthorizationContext::builder()
        .status(UserStatus::Online)
        .role("manager")
        .permission("view", true)
        .permission("change", true)
        .permission("delete", false)
        .attempt_count(0)
        .build()?;

    match service.authorize(&context1) {
        Ok(message) => println!("✓ Authorization successful: {}", message),
        Err(e) => println!("✗ Authorization failed: {}", e),
    }

    // Context 2: a guest role is rejected by the role check
    let context2 = AuthorizationContext::builder()
        .status(UserStatus::Online)
        .role("guest")
        .permission("change", true)
        .build()?;

    match service.authorize(&context2) {
        Ok(message) => println!("✓ Authorization successful: {}", message),
        Err(e) => println!("✗ Authorization failed [{}]: {}", e.code(), e.reason()),
    }

    // Context 3: too many attempts
    let context3 = AuthorizationContext::builder()
        .status(UserStatus::Online)
        .role("administrator")
        .permission("change", true)
        .attempt_count(11)
        .build()?;

    match service.authorize(&context3) {
        Ok(message) => println!("✓ Authorization successful: {}", message),
        Err(e) => println!("✗ Authorization failed [{}]: {}", e.code(), e.reason()),
    }

    Ok(())
}
