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

//! Response types.
//!
//! This module contains types related to service responses. Notably it
//! contains the `Response` type itself.
//!
//! # Example
//!
//! Creating a response for mocks
//!
//! ```
//! # use google_apis_gax::Result;
//! # use google_apis_gax::response::Response;
//! fn make_mock_response(body: serde_json::Value) -> Result<Response<serde_json::Value>> {
//!     Ok(Response::from(body))
//! }
//! ```

/// Represents a service response.
///
/// A response consists of a body and some metadata, currently just headers.
/// The generated clients return the body directly, this type is used by the
/// transport and in mocks of the transport.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from the body.
    pub fn from(body: T) -> Self {
        Self {
            body,
            parts: Parts::default(),
        }
    }

    /// Creates a response from the given parts.
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// Returns the headers associated with this response.
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// Returns the body associated with this response.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the response returning the metadata, and body.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    /// Consumes the response returning only its body.
    pub fn into_body(self) -> T {
        self.body
    }

    /// Converts the body, keeping the metadata.
    ///
    /// ```
    /// # use google_apis_gax::response::Response;
    /// let response = Response::from(serde_json::json!({"id": "abc"}));
    /// let response = response.try_map(|v| serde_json::from_value::<std::collections::BTreeMap<String, String>>(v))?;
    /// assert_eq!(response.body().get("id").map(String::as_str), Some("abc"));
    /// # Ok::<(), serde_json::Error>(())
    /// ```
    pub fn try_map<U, E, F>(self, f: F) -> std::result::Result<Response<U>, E>
    where
        F: FnOnce(T) -> std::result::Result<U, E>,
    {
        let body = f(self.body)?;
        Ok(Response {
            parts: self.parts,
            body,
        })
    }
}

/// Component parts of a response.
///
/// The response body and metadata.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP response headers.
    pub headers: http::HeaderMap<http::HeaderValue>,
}

impl Parts {
    /// Create a new instance.
    pub fn new() -> Self {
        Parts::default()
    }

    /// Set the headers.
    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }
}
