// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Google APIs helpers.
//!
//! This crate contains a number of types and functions used in the
//! implementation of the Google APIs client libraries for Rust. Applications
//! use these types to configure clients, to set per-call options, to inspect
//! errors, and to mock the clients in their tests.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping HTTP calls.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by generated clients.
pub mod error;

/// Types to distinguish absent, null, and present fields in JSON messages.
pub mod field;

pub mod client_builder;
pub mod command;
pub mod options;
pub mod paginator;
pub mod response;
