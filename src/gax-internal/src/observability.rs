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

//! Tracing spans for HTTP requests.
//!
//! The attribute names follow the OpenTelemetry [semantic conventions] for
//! HTTP client spans, so a `tracing-opentelemetry` layer can export them
//! without any mapping.
//!
//! [semantic conventions]: https://opentelemetry.io/docs/specs/semconv/http/http-spans/

use crate::options::InstrumentationClientInfo;
use gax::command::Command;
use tracing::{Span, field};

pub mod keys {
    /// Span Kind for OpenTelemetry interop.
    ///
    /// Always "Client" for a span representing an outbound HTTP request.
    pub const OTEL_KIND: &str = "otel.kind";
    /// Span Name for OpenTelemetry interop.
    ///
    /// Formatted as "{http.request.method} {url.template}".
    pub const OTEL_NAME: &str = "otel.name";
    /// Span Status Code for OpenTelemetry interop.
    ///
    /// One of "UNSET", "OK", or "ERROR".
    pub const OTEL_STATUS_CODE: &str = "otel.status_code";
    pub const HTTP_REQUEST_METHOD: &str = "http.request.method";
    pub const HTTP_RESPONSE_STATUS_CODE: &str = "http.response.status_code";
    pub const SERVER_ADDRESS: &str = "server.address";
    pub const SERVER_PORT: &str = "server.port";
    /// The URL without the query string.
    ///
    /// The query may contain the API key, it is never recorded.
    pub const URL_FULL: &str = "url.full";
    pub const URL_SCHEME: &str = "url.scheme";
    pub const URL_TEMPLATE: &str = "url.template";
    pub const ERROR_TYPE: &str = "error.type";
    /// The short service name.
    ///
    /// Examples: photoslibrary, monitoring
    pub const GCP_CLIENT_SERVICE: &str = "gcp.client.service";
    pub const GCP_CLIENT_VERSION: &str = "gcp.client.version";
    pub const GCP_CLIENT_ARTIFACT: &str = "gcp.client.artifact";
    pub const GCP_CLIENT_LANGUAGE: &str = "gcp.client.language";
}

/// Values for the `error.type` attribute when there is no HTTP status.
pub mod error_type_values {
    pub const CLIENT_TIMEOUT: &str = "CLIENT_TIMEOUT";
    pub const CLIENT_CONNECTION_ERROR: &str = "CLIENT_CONNECTION_ERROR";
    pub const CLIENT_RESPONSE_DECODE_ERROR: &str = "CLIENT_RESPONSE_DECODE_ERROR";
    pub const CLIENT_REQUEST_ERROR: &str = "CLIENT_REQUEST_ERROR";
    pub const UNKNOWN: &str = "UNKNOWN";
}

/// Values for the `otel.status_code` attribute.
pub mod otel_status_codes {
    pub const OK: &str = "OK";
    pub const ERROR: &str = "ERROR";
    pub const UNSET: &str = "UNSET";
}

const OTEL_KIND_CLIENT: &str = "Client";
const GCP_CLIENT_LANGUAGE_RUST: &str = "rust";

/// Creates the span for one HTTP request.
///
/// Populates the span with the attributes available before the request is
/// sent. The response attributes are recorded by [record_http_response].
pub(crate) fn create_http_span(
    command: &Command,
    url: &reqwest::Url,
    instrumentation: Option<&'static InstrumentationClientInfo>,
) -> Span {
    use keys::*;
    let otel_name = format!("{} {}", command.method, command.path_template);
    let (service, version, artifact) = instrumentation.map_or((None, None, None), |info| {
        (
            Some(info.service_name),
            Some(info.client_version),
            Some(info.client_artifact),
        )
    });
    let mut url_full = url.clone();
    url_full.set_query(None);
    tracing::info_span!(
        "http_request",
        { OTEL_NAME } = otel_name,
        { OTEL_KIND } = OTEL_KIND_CLIENT,
        { HTTP_REQUEST_METHOD } = command.method.as_str(),
        { SERVER_ADDRESS } = url.host_str().unwrap_or(""),
        { SERVER_PORT } = url.port_or_known_default().map(|p| p as i64).unwrap_or(0),
        { URL_FULL } = url_full.as_str(),
        { URL_SCHEME } = url.scheme(),
        { URL_TEMPLATE } = command.path_template,
        { GCP_CLIENT_SERVICE } = service,
        { GCP_CLIENT_VERSION } = version,
        { GCP_CLIENT_ARTIFACT } = artifact,
        { GCP_CLIENT_LANGUAGE } = GCP_CLIENT_LANGUAGE_RUST,
        { OTEL_STATUS_CODE } = otel_status_codes::UNSET,
        { HTTP_RESPONSE_STATUS_CODE } = field::Empty,
        { ERROR_TYPE } = field::Empty,
    )
}

/// Records the outcome of the request in `span`.
pub(crate) fn record_http_response(span: &Span, result: Result<u16, &gax::error::Error>) {
    use keys::*;
    match result {
        Ok(status) => {
            span.record(HTTP_RESPONSE_STATUS_CODE, status as i64);
            span.record(OTEL_STATUS_CODE, otel_status_codes::OK);
        }
        Err(err) => {
            span.record(OTEL_STATUS_CODE, otel_status_codes::ERROR);
            if let Some(status) = err.http_status_code() {
                span.record(HTTP_RESPONSE_STATUS_CODE, status as i64);
            }
            span.record(ERROR_TYPE, error_type(err));
        }
    }
}

fn error_type(err: &gax::error::Error) -> String {
    use error_type_values::*;
    match err {
        e if e.http_status_code().is_some() => {
            e.http_status_code().map(|c| c.to_string()).unwrap_or_default()
        }
        e if e.is_timeout() => CLIENT_TIMEOUT.to_string(),
        e if e.is_io() => CLIENT_CONNECTION_ERROR.to_string(),
        e if e.is_deserialization() => CLIENT_RESPONSE_DECODE_ERROR.to_string(),
        e if e.is_serialization() || e.is_binding() || e.is_authentication() => {
            CLIENT_REQUEST_ERROR.to_string()
        }
        _ => UNKNOWN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::Error;
    use google_apis_test_utils::test_layer::TestLayer;
    use test_case::test_case;

    static INFO: InstrumentationClientInfo = InstrumentationClientInfo {
        service_name: "photoslibrary",
        client_version: "1.2.3",
        client_artifact: "google-apis-photoslibrary-v1",
        default_host: "photoslibrary",
    };

    #[test]
    fn create_span_attributes() -> anyhow::Result<()> {
        let (_guard, spans) = TestLayer::initialize();
        let command = Command::new(
            http::Method::GET,
            "v1/albums/{+albumId}",
            "v1/albums/abc",
        );
        let url = reqwest::Url::parse(
            "https://photoslibrary.googleapis.com/v1/albums/abc?key=secret&alt=json",
        )?;
        let span = create_http_span(&command, &url, Some(&INFO));
        record_http_response(&span, Ok(200));
        drop(span);

        let captured = spans.take();
        assert_eq!(captured.len(), 1, "{captured:?}");
        let got = &captured[0];
        assert_eq!(got.name, "http_request");
        let attr = |k: &str| got.attributes.get(k).map(String::as_str);
        assert_eq!(attr(keys::OTEL_NAME), Some("GET v1/albums/{+albumId}"));
        assert_eq!(attr(keys::HTTP_REQUEST_METHOD), Some("GET"));
        assert_eq!(attr(keys::URL_TEMPLATE), Some("v1/albums/{+albumId}"));
        assert_eq!(
            attr(keys::URL_FULL),
            Some("https://photoslibrary.googleapis.com/v1/albums/abc")
        );
        assert_eq!(attr(keys::SERVER_ADDRESS), Some("photoslibrary.googleapis.com"));
        assert_eq!(attr(keys::SERVER_PORT), Some("443"));
        assert_eq!(attr(keys::GCP_CLIENT_SERVICE), Some("photoslibrary"));
        assert_eq!(attr(keys::GCP_CLIENT_VERSION), Some("1.2.3"));
        assert_eq!(attr(keys::HTTP_RESPONSE_STATUS_CODE), Some("200"));
        assert_eq!(attr(keys::OTEL_STATUS_CODE), Some(otel_status_codes::OK));
        assert!(
            got.attributes.values().all(|v| !v.contains("secret")),
            "{got:?}"
        );
        Ok(())
    }

    #[test]
    fn record_error() -> anyhow::Result<()> {
        let (_guard, spans) = TestLayer::initialize();
        let command = Command::new(http::Method::POST, "v1/albums", "v1/albums");
        let url = reqwest::Url::parse("http://127.0.0.1:8080/v1/albums")?;
        let span = create_http_span(&command, &url, None);
        let err = Error::http(503, http::HeaderMap::new(), bytes::Bytes::from_static(b"try again"));
        record_http_response(&span, Err(&err));
        drop(span);

        let captured = spans.take();
        assert_eq!(captured.len(), 1, "{captured:?}");
        let got = &captured[0];
        let attr = |k: &str| got.attributes.get(k).map(String::as_str);
        assert_eq!(attr(keys::SERVER_PORT), Some("8080"));
        assert_eq!(attr(keys::HTTP_RESPONSE_STATUS_CODE), Some("503"));
        assert_eq!(attr(keys::ERROR_TYPE), Some("503"));
        assert_eq!(attr(keys::OTEL_STATUS_CODE), Some(otel_status_codes::ERROR));
        assert_eq!(attr(keys::GCP_CLIENT_SERVICE), None);
        Ok(())
    }

    #[test_case(Error::timeout("simulated"), error_type_values::CLIENT_TIMEOUT)]
    #[test_case(Error::io("simulated"), error_type_values::CLIENT_CONNECTION_ERROR)]
    #[test_case(Error::deser("simulated"), error_type_values::CLIENT_RESPONSE_DECODE_ERROR)]
    #[test_case(Error::binding("simulated"), error_type_values::CLIENT_REQUEST_ERROR)]
    #[test_case(Error::http(404, http::HeaderMap::new(), bytes::Bytes::new()), "404")]
    fn error_types(err: Error, want: &str) {
        assert_eq!(error_type(&err), want);
    }
}
