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

//! Telemetry header helpers.

/// Generated libraries create one static instance of this struct and use it
/// to lazy initialize (via [std::sync::LazyLock]) the x-goog-api-client header
/// value.
///
/// The `name` is the crate name, and `version` is the crate version.
#[derive(Debug, PartialEq)]
pub struct XGoogApiClient {
    pub name: &'static str,
    pub library_type: &'static str,
    pub version: &'static str,
}

/// The library type for generated Discovery-based clients.
pub const APIARY: &str = "apiary";

mod build_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

impl XGoogApiClient {
    /// Format the struct as needed for the `x-goog-api-client` header.
    pub fn rest_header_value(&self) -> String {
        let gax_version = build_info::PKG_VERSION;
        format!(
            "gl-rust/{} gax/{gax_version} rest/{gax_version}-reqwest {}/{}",
            rustc_version(),
            self.library_type,
            self.version
        )
    }

    /// The default value for the `User-Agent` header.
    ///
    /// Applications may prepend their own prefix, via the client or the
    /// request options.
    pub fn user_agent(&self) -> String {
        format!("{}/{} gl-rust/{}", self.name, self.version, rustc_version())
    }
}

// Strip out the initial "rustc " string from `RUSTC_VERSION`. If not found,
// leave RUSTC_VERSION unchanged.
fn rustc_version() -> &'static str {
    build_info::RUSTC_VERSION
        .strip_prefix("rustc ")
        .unwrap_or(build_info::RUSTC_VERSION)
}
