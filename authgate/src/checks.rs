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

//! Built-in authorization checks.
//!
//! Each check implements the [`Check`](crate::chain::check::Check) capability
//! independently; none of them knows about the others or about its position
//! in a chain.

pub mod attempt_count_check;
pub mod permission_check;
pub mod role_check;
pub mod status_check;
