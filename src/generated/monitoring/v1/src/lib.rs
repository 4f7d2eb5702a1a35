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
//
// Code generated by discogen. DO NOT EDIT.

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]
#![allow(rustdoc::invalid_html_tags)]

//! Google APIs Client Libraries for Rust - Stackdriver Monitoring API
//!
//! This crate contains the generated bindings for the Stackdriver Monitoring API.
//!
//! Manages your Stackdriver Monitoring data and configurations. Most
//! projects must be associated with a Stackdriver account, with a few
//! exceptions as noted on the individual method pages. The table entries
//! below are presented in alphabetical order, not in order of common
//! use. For explanations of the concepts found in the table entries,
//! read the Stackdriver Monitoring documentation.
//!
//! Start with [client::Monitoring]. Create a client with
//! [Monitoring::builder()][client::Monitoring::builder], and use the
//! methods of the client to make requests.
//!
//! More information about the service at <https://cloud.google.com/monitoring/api/>.

pub use gax::Result;
pub use gax::error::Error;

/// The request and response types used by the Stackdriver Monitoring API.
pub mod model;

/// The client for the Stackdriver Monitoring API.
pub mod client;

/// Request builders for the Stackdriver Monitoring API.
pub mod builder;

/// Traits to mock the clients in this library.
///
/// Application developers may need to implement these traits to mock the
/// clients. In other use-cases, application developers only use the clients
/// and need not be concerned with these traits or their implementations.
pub mod stub {
    pub use gax::command::{Command, Execute};
}

/// The root URL for the service.
pub const ROOT_URL: &str = "https://monitoring.googleapis.com/";

/// The service path, relative to [ROOT_URL].
pub const SERVICE_PATH: &str = "";

/// The path for batch requests, relative to [ROOT_URL].
pub const BATCH_PATH: &str = "batch";

const DEFAULT_HOST: &str = "https://monitoring.googleapis.com/";

pub(crate) mod info {
    const NAME: &str = env!("CARGO_PKG_NAME");
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub(crate) static X_GOOG_API_CLIENT: gaxi::api_header::XGoogApiClient =
        gaxi::api_header::XGoogApiClient {
            name: NAME,
            version: VERSION,
            library_type: gaxi::api_header::APIARY,
        };
    pub(crate) static INSTRUMENTATION_CLIENT_INFO: gaxi::options::InstrumentationClientInfo =
        gaxi::options::InstrumentationClientInfo {
            service_name: "monitoring",
            client_version: VERSION,
            client_artifact: NAME,
            default_host: "monitoring",
        };
}
