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

/// Implements a client for the Stackdriver Monitoring API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use google_apis_monitoring_v1::client::Monitoring;
/// let client = Monitoring::builder().build().await?;
/// // use `client` to make requests to the Stackdriver Monitoring API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Manages your Stackdriver Monitoring data and configurations. Most
/// projects must be associated with a Stackdriver account, with a few
/// exceptions as noted on the individual method pages. The table entries
/// below are presented in alphabetical order, not in order of common
/// use. For explanations of the concepts found in the table entries,
/// read the Stackdriver Monitoring documentation.
///
/// # Configuration
///
/// To configure `Monitoring` use the `with_*` methods in the type returned
/// by [builder()][Monitoring::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default
///   endpoint (`https://monitoring.googleapis.com/`).
///   Applications running in restricted networks, or tests using a local
///   fake, may want to override this default.
/// * [with_access_token()]: by default this client sends no credentials.
///   Most operations require an OAuth 2.0 access token.
/// * [with_api_key()] and [with_quota_user()]: set the `key` and `quotaUser`
///   query parameters for every request.
///
/// [with_endpoint()]: super::builder::monitoring::ClientBuilder::with_endpoint
/// [with_access_token()]: super::builder::monitoring::ClientBuilder::with_access_token
/// [with_api_key()]: super::builder::monitoring::ClientBuilder::with_api_key
/// [with_quota_user()]: super::builder::monitoring::ClientBuilder::with_quota_user
///
/// # Pooling and Cloning
///
/// `Monitoring` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `Monitoring` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Monitoring {
    #[allow(dead_code)]
    stub: std::sync::Arc<dyn gax::command::Execute>,
    config: std::sync::Arc<gaxi::options::ClientConfig>,
}

impl Monitoring {
    /// Returns a builder for [Monitoring].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_apis_monitoring_v1::client::Monitoring;
    /// let client = Monitoring::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::monitoring::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::monitoring::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior. The client uses the default configuration.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: gax::command::Execute + 'static,
    {
        Self {
            stub: std::sync::Arc::new(stub),
            config: std::sync::Arc::new(gaxi::options::ClientConfig::default()),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let stub = gaxi::http::ReqwestClient::new(config.clone(), crate::DEFAULT_HOST)
            .await?
            .with_api_client(&crate::info::X_GOOG_API_CLIENT)
            .with_instrumentation(&crate::info::INSTRUMENTATION_CLIENT_INFO);
        Ok(Self {
            stub: std::sync::Arc::new(stub),
            config: std::sync::Arc::new(config),
        })
    }

    /// The API key sent with every request, if any.
    pub fn api_key(&self) -> std::option::Option<&str> {
        self.config.api_key.as_deref()
    }

    /// The quota user sent with every request, unless the request overrides it.
    pub fn quota_user(&self) -> std::option::Option<&str> {
        self.config.quota_user.as_deref()
    }

    /// The endpoint override, if any.
    ///
    /// When `None` the client uses `https://monitoring.googleapis.com/`.
    pub fn endpoint(&self) -> std::option::Option<&str> {
        self.config.endpoint.as_deref()
    }
}
