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

//! Describe a single HTTP request before it is executed.
//!
//! Each method in a generated client produces a [Command]: the HTTP verb, the
//! expanded path, the query parameters, the encoded request body (if any), and
//! the name of the type used to decode the response. The command is then
//! handed to an [Execute] implementation. The default implementation sends
//! the request over HTTP, tests can substitute their own.
//!
//! # Example
//! ```
//! # use google_apis_gax::command::Command;
//! let command = Command::new(http::Method::GET, "v1/albums/{+albumId}", "v1/albums/abc")
//!     .set_query("pageSize", ["10"])
//!     .set_query("pageSize", ["20"]);
//! assert_eq!(command.query_pairs().collect::<Vec<_>>(), vec![("pageSize", "20")]);
//! ```

use crate::Result;
use crate::client_builder::internal::ClientConfig;
use crate::options::RequestOptions;
use crate::response::Response;
use std::collections::BTreeMap;

/// The query parameter carrying the API key.
pub const KEY: &str = "key";
/// The query parameter carrying the quota user.
pub const QUOTA_USER: &str = "quotaUser";
/// The query parameter carrying the partial response field selector.
pub const FIELDS: &str = "fields";

/// The description of one HTTP call.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct Command {
    /// The HTTP verb.
    pub method: http::Method,
    /// The URL template, before path parameters are substituted.
    pub path_template: &'static str,
    /// The path, relative to the service base URL, with all the path
    /// parameters substituted and escaped.
    pub path: String,
    /// The query parameters. Setting a name replaces any previous values.
    pub query: BTreeMap<String, Vec<String>>,
    /// The encoded request body, if any.
    pub body: Option<serde_json::Value>,
    /// The name of the type used to decode the response.
    pub response_type: &'static str,
}

impl Command {
    /// Creates a command without query parameters or body.
    pub fn new<P: Into<String>>(method: http::Method, path_template: &'static str, path: P) -> Self {
        Self {
            method,
            path_template,
            path: path.into(),
            query: BTreeMap::new(),
            body: None,
            response_type: "serde_json::Value",
        }
    }

    /// Sets the values for a query parameter.
    ///
    /// Any previous values for `name` are replaced. An empty sequence of values
    /// leaves the command unchanged, this is how unset optional parameters
    /// are skipped.
    pub fn set_query<K, I, V>(mut self, name: K, values: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if !values.is_empty() {
            self.query.insert(name.into(), values);
        }
        self
    }

    /// Sets the request body.
    pub fn set_body<T: Into<Option<serde_json::Value>>>(mut self, v: T) -> Self {
        self.body = v.into();
        self
    }

    /// Records the type used to decode the response.
    pub fn set_response_type<T>(mut self) -> Self {
        self.response_type = std::any::type_name::<T>();
        self
    }

    /// Applies the client-wide query parameters.
    ///
    /// Sets `key` and `quotaUser` from the client configuration, when they
    /// are configured. The generated clients call this first, so any per-call
    /// values applied later take precedence.
    pub fn apply_defaults(self, config: &ClientConfig) -> Self {
        self.set_query(KEY, config.api_key.clone())
            .set_query(QUOTA_USER, config.quota_user.clone())
    }

    /// Applies the per-call query parameters.
    pub fn apply_options(self, options: &RequestOptions) -> Self {
        self.set_query(FIELDS, options.fields().clone())
            .set_query(QUOTA_USER, options.quota_user().clone())
    }

    /// Iterates over the query parameters, repeating names with multiple
    /// values.
    pub fn query_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.query
            .iter()
            .flat_map(|(k, values)| values.iter().map(move |v| (k.as_str(), v.as_str())))
    }
}

/// Executes [Command]s.
///
/// The generated clients delegate each call to an implementation of this
/// trait. The default implementation sends the request over HTTP and returns
/// the JSON response body. Applications may provide their own
/// implementation, typically a mock, when testing code that uses the clients.
///
/// Implementations must not retry the command. Errors are returned to the
/// caller unchanged.
#[async_trait::async_trait]
pub trait Execute: std::fmt::Debug + Send + Sync {
    /// Executes the command, returning the undecoded JSON response.
    async fn execute(
        &self,
        command: Command,
        options: RequestOptions,
    ) -> Result<Response<serde_json::Value>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn new() {
        let command = Command::new(http::Method::POST, "v1/albums", "v1/albums");
        assert_eq!(command.method, http::Method::POST);
        assert_eq!(command.path_template, "v1/albums");
        assert_eq!(command.path, "v1/albums");
        assert!(command.query.is_empty(), "{command:?}");
        assert_eq!(command.body, None);
    }

    #[test]
    fn set_query() {
        let command = Command::new(http::Method::GET, "v1/mediaItems:batchGet", "v1/mediaItems:batchGet")
            .set_query("mediaItemIds", ["a", "b"])
            .set_query("pageSize", Vec::<String>::new())
            .set_query("pageToken", None::<String>)
            .set_query("fields", Some("mediaItemResults"));
        let got = command.query_pairs().collect::<Vec<_>>();
        assert_eq!(
            got,
            vec![
                ("fields", "mediaItemResults"),
                ("mediaItemIds", "a"),
                ("mediaItemIds", "b"),
            ]
        );
    }

    #[test]
    fn set_body_and_response_type() {
        let command = Command::new(http::Method::POST, "v1/albums", "v1/albums")
            .set_body(json!({"album": {"title": "Trip"}}))
            .set_response_type::<serde_json::Value>();
        assert_eq!(command.body, Some(json!({"album": {"title": "Trip"}})));
        assert!(command.response_type.ends_with("Value"), "{command:?}");

        let command = command.set_body(None);
        assert_eq!(command.body, None);
    }

    #[test]
    fn defaults_then_options() {
        let config = ClientConfig {
            api_key: Some("test-api-key".into()),
            quota_user: Some("client-quota-user".into()),
            ..Default::default()
        };
        let command = Command::new(http::Method::GET, "v1/albums", "v1/albums")
            .apply_defaults(&config);
        assert_eq!(
            command.query_pairs().collect::<Vec<_>>(),
            vec![("key", "test-api-key"), ("quotaUser", "client-quota-user")]
        );

        let mut options = RequestOptions::default();
        options.set_quota_user("call-quota-user");
        options.set_fields("albums.id");
        let command = command.apply_options(&options);
        assert_eq!(
            command.query_pairs().collect::<Vec<_>>(),
            vec![
                ("fields", "albums.id"),
                ("key", "test-api-key"),
                ("quotaUser", "call-quota-user"),
            ]
        );
    }

    #[test]
    fn defaults_without_configuration() {
        let command = Command::new(http::Method::GET, "v1/albums", "v1/albums")
            .apply_defaults(&ClientConfig::default())
            .apply_options(&RequestOptions::default());
        assert!(command.query.is_empty(), "{command:?}");
    }
}
