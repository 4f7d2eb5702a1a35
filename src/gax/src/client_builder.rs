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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint or provide an API key. The
//! Google APIs client libraries for Rust use a generic builder type to provide
//! such functionality. The types in this module implement the client
//! builders.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! ## Example: create a client with the default configuration.
//!
//! ```
//! # use google_apis_gax::client_builder::examples;
//! # use google_apis_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder().build().await?;
//! # Result::<()>::Ok(()) });
//! ```
//!
//! ## Example: create a client with a different endpoint
//!
//! ```
//! # use google_apis_gax::client_builder::examples;
//! # use google_apis_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_endpoint("https://private.googleapis.com")
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use google_apis_gax::client_builder::examples;
/// use google_apis_gax::client_builder::Error as Error;
/// use examples::Client; // Placeholder for examples
/// # tokio_test::block_on(async {
/// let client = match Client::builder().with_endpoint("not a url").build().await {
///     Ok(c) => c,
///     Err(e) if e.is_endpoint() => {
///         println!("the endpoint is invalid: {e}");
///         return Err(e);
///     }
///     Err(e) => {
///         println!("error during client initialization {e}");
///         return Err(e);
///     }
/// };
/// # Ok::<(), Error>(()) });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// If true, the configured endpoint is not a valid URL.
    pub fn is_endpoint(&self) -> bool {
        matches!(&self.0, ErrorKind::Endpoint(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn endpoint<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Endpoint(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
    #[error("the service endpoint is not a valid URL")]
    Endpoint(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// In the Google APIs client libraries for Rust a "client" represents a
/// connection to a specific service. Each client library defines one or more
/// client types. All the clients are initialized using a `ClientBuilder`.
///
/// Applications obtain a builder with the correct generic types using the
/// `builder()` method on each client:
/// ```
/// # use google_apis_gax::client_builder::examples;
/// # use google_apis_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let builder = Client::builder();
/// # Result::<()>::Ok(()) });
/// ```
///
/// As usual, the builder offers several method to configure the client, and a
/// `.build()` method to construct the client:
/// ```
/// # use google_apis_gax::client_builder::examples;
/// # use google_apis_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = Client::builder()
///     .with_api_key("my-api-key")
///     .with_quota_user("user-123")
///     .build().await?;
/// # Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F> {
    config: internal::ClientConfig,
    factory: F,
}

impl<F> ClientBuilder<F> {
    /// Creates a new client.
    ///
    /// ```
    /// # use google_apis_gax::client_builder::examples;
    /// # use google_apis_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// The endpoint replaces the default base URL for the service, including
    /// its service path. Typically used to point the client at a local test
    /// server or a private endpoint.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Sets the API key.
    ///
    /// The key is sent with every request as the `key` query parameter. It
    /// identifies the project and provides quota, but does not authenticate
    /// the caller.
    ///
    /// ```
    /// # use google_apis_gax::client_builder::examples;
    /// # use google_apis_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_api_key("my-api-key")
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_api_key<V: Into<String>>(mut self, v: V) -> Self {
        self.config.api_key = Some(v.into());
        self
    }

    /// Sets the default quota user.
    ///
    /// The value is sent with every request as the `quotaUser` query
    /// parameter, unless the request overrides it.
    pub fn with_quota_user<V: Into<String>>(mut self, v: V) -> Self {
        self.config.quota_user = Some(v.into());
        self
    }

    /// Sets an OAuth2 access token.
    ///
    /// The token is sent in the `Authorization` header of every request. The
    /// client libraries do not refresh the token, applications are
    /// responsible for obtaining a token with the right scopes.
    pub fn with_access_token<V: Into<String>>(mut self, v: V) -> Self {
        self.config.access_token = Some(v.into());
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    pub fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.config.user_agent = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client libraries can be dynamically instrumented with the Tokio
    /// [tracing] framework. Setting this flag enables this instrumentation.
    ///
    /// ```
    /// # use google_apis_gax::client_builder::examples;
    /// # use google_apis_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_tracing()
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }
}

#[doc(hidden)]
pub mod internal {
    use super::*;

    pub trait ClientFactory {
        type Client;
        fn build(self, config: ClientConfig) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, C>(factory: F) -> super::ClientBuilder<F>
    where
        F: ClientFactory<Client = C>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    ///
    /// A client represents a connection to a Google API. The default
    /// configuration for each client should work for most applications. But
    /// some applications may need to override the default endpoint, provide
    /// an API key or access token, and/or change other behaviors of the
    /// client.
    #[derive(Clone, Default)]
    pub struct ClientConfig {
        pub endpoint: Option<String>,
        pub api_key: Option<String>,
        pub quota_user: Option<String>,
        pub access_token: Option<String>,
        pub user_agent: Option<String>,
        pub tracing: bool,
    }

    // The secrets never appear in debug output.
    impl std::fmt::Debug for ClientConfig {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            const REDACTED: &str = "[censored]";
            f.debug_struct("ClientConfig")
                .field("endpoint", &self.endpoint)
                .field("api_key", &self.api_key.as_ref().map(|_| REDACTED))
                .field("quota_user", &self.quota_user)
                .field("access_token", &self.access_token.as_ref().map(|_| REDACTED))
                .field("user_agent", &self.user_agent)
                .field("tracing", &self.tracing)
                .finish()
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! This module contains helper types used in the rustdoc examples.
    //!
    //! The examples require relatively complex types to be useful.

    type Config = super::internal::ClientConfig;
    use super::Result;

    /// A client type for use in examples.
    ///
    /// This type is used in examples as a placeholder for a real client. It
    /// does not work, but illustrates how to use `ClientBuilder`.
    #[allow(dead_code)]
    pub struct Client(Config);
    impl Client {
        /// Create a builder to initialize new instances of this client.
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: Config) -> Result<Self> {
            if let Some(endpoint) = &config.endpoint {
                if !endpoint.contains("://") {
                    return Err(super::Error::endpoint(format!(
                        "missing scheme in {endpoint}"
                    )));
                }
            }
            Ok(Self(config))
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Client = super::Client;
            async fn build(
                self,
                config: crate::client_builder::internal::ClientConfig,
            ) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    // We use the examples as scaffolding for the tests.
    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn build_default() {
            let client = Client::builder().build().await.unwrap();
            let config = client.0;
            assert_eq!(config.endpoint, None);
            assert_eq!(config.api_key, None);
            assert_eq!(config.quota_user, None);
            assert_eq!(config.access_token, None);
            assert_eq!(config.user_agent, None);
            assert!(!config.tracing);
        }

        #[tokio::test]
        async fn endpoint() {
            let client = Client::builder()
                .with_endpoint("http://example.com")
                .build()
                .await
                .unwrap();
            let config = client.0;
            assert_eq!(config.endpoint.as_deref(), Some("http://example.com"));
        }

        #[tokio::test]
        async fn bad_endpoint() {
            let result = Client::builder().with_endpoint("example.com").build().await;
            assert!(matches!(&result, Err(e) if e.is_endpoint()));
        }

        #[tokio::test]
        async fn query_defaults() {
            let client = Client::builder()
                .with_api_key("test-api-key")
                .with_quota_user("test-quota-user")
                .build()
                .await
                .unwrap();
            let config = client.0;
            assert_eq!(config.api_key.as_deref(), Some("test-api-key"));
            assert_eq!(config.quota_user.as_deref(), Some("test-quota-user"));
        }

        #[tokio::test]
        async fn access_token_and_user_agent() {
            let client = Client::builder()
                .with_access_token("test-token")
                .with_user_agent("test-agent/1.0")
                .build()
                .await
                .unwrap();
            let config = client.0;
            assert_eq!(config.access_token.as_deref(), Some("test-token"));
            assert_eq!(config.user_agent.as_deref(), Some("test-agent/1.0"));
        }

        #[tokio::test]
        async fn tracing() {
            let client = Client::builder().with_tracing().build().await.unwrap();
            let config = client.0;
            assert!(config.tracing);
        }

        #[tokio::test]
        async fn debug_hides_secrets() {
            let client = Client::builder()
                .with_api_key("super-secret-key")
                .with_access_token("super-secret-token")
                .with_quota_user("visible-user")
                .build()
                .await
                .unwrap();
            let got = format!("{:?}", client.0);
            assert!(!got.contains("super-secret"), "{got}");
            assert!(got.contains("visible-user"), "{got}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug, thiserror::Error)]
    #[error("test-only")]
    struct TestError;

    #[test]
    fn transport() {
        let error = Error::transport(TestError);
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_endpoint(), "{error:?}");
        assert!(error.to_string().contains("transport client"), "{error}");
        let got = error.source().and_then(|e| e.downcast_ref::<TestError>());
        assert!(got.is_some(), "{error:?}");
    }

    #[test]
    fn endpoint() {
        let error = Error::endpoint(TestError);
        assert!(error.is_endpoint(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
        assert!(error.to_string().contains("endpoint"), "{error}");
        let got = error.source().and_then(|e| e.downcast_ref::<TestError>());
        assert!(got.is_some(), "{error:?}");
    }
}
