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

//! Implementation details for the Google APIs Discovery-based clients.
//!
//! All the types, traits, and functions defined in this crate are **not**
//! intended for general use. The generated clients depend on them, and we
//! change both as needed.
//!
//! The types, traits, and functions defined in this crate are mostly
//! undocumented. This is intentional, they will change without notice.

pub mod api_header;
pub mod http;
pub mod observability;
pub mod options;
pub mod path_template;
pub mod query_parameter;
