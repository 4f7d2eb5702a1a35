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

use crate::api_header::XGoogApiClient;
use crate::observability::{create_http_span, record_http_response};
use crate::options::{ClientConfig, InstrumentationClientInfo};
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::command::{Command, Execute};
use gax::error::Error;
use gax::options::RequestOptions;
use gax::response::{Parts, Response};
use tracing::Instrument;

const X_GOOG_API_CLIENT: &str = "x-goog-api-client";

/// Sends [Command]s to the service using `reqwest`.
///
/// Each command results in exactly one HTTP request. The client does not
/// retry failed requests, does not follow page tokens, and does not batch
/// commands.
#[derive(Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    endpoint: String,
    access_token: Option<String>,
    user_agent: Option<String>,
    api_client: Option<(String, String)>,
    instrumentation: Option<&'static InstrumentationClientInfo>,
    tracing: bool,
}

impl ReqwestClient {
    /// Creates a new client.
    ///
    /// The `default_endpoint` is the service base URL, including the service
    /// path. The configured endpoint, if any, replaces it.
    pub async fn new(
        config: ClientConfig,
        default_endpoint: &str,
    ) -> gax::client_builder::Result<Self> {
        let tracing = crate::options::tracing_enabled(&config);
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| default_endpoint.to_string());
        reqwest::Url::parse(&endpoint).map_err(BuilderError::endpoint)?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        Ok(Self {
            inner,
            endpoint,
            access_token: config.access_token,
            user_agent: config.user_agent,
            api_client: None,
            instrumentation: None,
            tracing,
        })
    }

    /// Sets the `x-goog-api-client` header and the default `User-Agent`.
    pub fn with_api_client(mut self, header: &XGoogApiClient) -> Self {
        self.api_client = Some((header.rest_header_value(), header.user_agent()));
        self
    }

    /// Sets the library information recorded in the tracing spans.
    pub fn with_instrumentation(mut self, info: &'static InstrumentationClientInfo) -> Self {
        self.instrumentation = Some(info);
        self
    }

    /// The service base URL used by this client.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, command: &Command) -> Result<reqwest::Url> {
        let base = self.endpoint.trim_end_matches('/');
        let path = command.path.trim_start_matches('/');
        let mut url = reqwest::Url::parse(&format!("{base}/{path}")).map_err(Error::binding)?;
        {
            let mut query = url.query_pairs_mut();
            for (name, value) in command.query_pairs() {
                query.append_pair(name, value);
            }
            query.append_pair("alt", "json");
        }
        Ok(url)
    }

    fn user_agent(&self, options: &RequestOptions) -> Option<String> {
        let parts = [
            options.user_agent().as_deref(),
            self.user_agent.as_deref(),
            self.api_client.as_ref().map(|(_, ua)| ua.as_str()),
        ];
        let value = parts.into_iter().flatten().collect::<Vec<_>>().join(" ");
        (!value.is_empty()).then_some(value)
    }

    async fn request_attempt(
        &self,
        command: Command,
        url: reqwest::Url,
        options: &RequestOptions,
        span: &tracing::Span,
    ) -> Result<Response<serde_json::Value>> {
        let mut builder = self.inner.request(command.method.clone(), url);
        if let Some(user_agent) = self.user_agent(options) {
            builder = builder.header(
                reqwest::header::USER_AGENT,
                reqwest::header::HeaderValue::from_str(&user_agent).map_err(Error::ser)?,
            );
        }
        if let Some((header, _)) = &self.api_client {
            builder = builder.header(
                X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_str(header).map_err(Error::ser)?,
            );
        }
        if let Some(token) = &self.access_token {
            let mut value = reqwest::header::HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(Error::authentication)?;
            value.set_sensitive(true);
            builder = builder.header(reqwest::header::AUTHORIZATION, value);
        }
        if let Some(timeout) = options.attempt_timeout() {
            builder = builder.timeout(*timeout);
        }
        if let Some(body) = &command.body {
            builder = builder.json(body);
        }
        let response = match builder.send().await.map_err(Self::map_send_error) {
            Ok(r) => r,
            Err(e) => {
                record_http_response(span, Err(&e));
                return Err(e);
            }
        };
        let status = response.status();
        let result = if status.is_success() {
            to_http_response(response).await
        } else {
            to_http_error(response).await
        };
        match &result {
            Ok(_) => record_http_response(span, Ok(status.as_u16())),
            Err(e) => record_http_response(span, Err(e)),
        }
        result
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

#[async_trait::async_trait]
impl Execute for ReqwestClient {
    async fn execute(
        &self,
        command: Command,
        options: RequestOptions,
    ) -> Result<Response<serde_json::Value>> {
        let url = self.url(&command)?;
        let span = if self.tracing {
            create_http_span(&command, &url, self.instrumentation)
        } else {
            tracing::Span::none()
        };
        tracing::debug!(parent: &span, method = %command.method, template = command.path_template, "sending request");
        self.request_attempt(command, url, &options, &span)
            .instrument(span.clone())
            .await
    }
}

// The access token never appears in debug output.
impl std::fmt::Debug for ReqwestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestClient")
            .field("endpoint", &self.endpoint)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[censored]"),
            )
            .field("user_agent", &self.user_agent)
            .field("instrumentation", &self.instrumentation)
            .field("tracing", &self.tracing)
            .finish()
    }
}

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    let error = match gax::error::rpc::Status::try_from(&body) {
        Ok(status) => {
            Error::service_with_http_metadata(status, Some(status_code), Some(parts.headers))
        }
        Err(_) => Error::http(status_code, parts.headers, body),
    };
    Err(error)
}

async fn to_http_response(response: reqwest::Response) -> Result<Response<serde_json::Value>> {
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    // 204 No Content, and some empty responses, have no body at all.
    let body = match body {
        content if content.iter().all(u8::is_ascii_whitespace) => {
            serde_json::Value::Object(serde_json::Map::new())
        }
        content => serde_json::from_slice(&content).map_err(Error::deser)?,
    };

    Ok(Response::from_parts(
        Parts::new().set_headers(parts.headers),
        body,
    ))
}
