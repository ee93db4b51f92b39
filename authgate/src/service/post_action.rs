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

//! Post-success action invoked after a fully passed chain.

use cheetah_string::CheetahString;

/// Work performed only after every check in the chain has passed.
///
/// The action is an external collaborator: the service invokes `perform`
/// exactly once per successful authorization, with no arguments beyond what
/// the action was configured with at construction. It is never invoked when
/// any check fails.
pub trait PostSuccessAction: Send + Sync {
    /// Result type produced by the action.
    type Output;

    /// Perform the downstream work.
    fn perform(&self) -> Self::Output;
}

/// Post-success action that returns a fixed message.
///
/// Convenience implementation for callers whose downstream work is simply
/// reporting that the request may proceed.
#[derive(Debug, Clone)]
pub struct MessageAction {
    message: CheetahString,
}

impl MessageAction {
    pub fn new(message: impl Into<CheetahString>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl PostSuccessAction for MessageAction {
    type Output = CheetahString;

    fn perform(&self) -> CheetahString {
        self.message.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_action_returns_message() {
        let action = MessageAction::new("request may proceed");

        assert_eq!(action.perform().as_str(), "request may proceed");
    }

    #[test]
    fn test_message_action_is_repeatable() {
        let action = MessageAction::new("request may proceed");

        assert_eq!(action.perform(), action.perform());
    }
}
