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

use super::rpc::Status;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. The service may
/// return an error, the transport may be unable to create the necessary
/// connection to make a request, the request may timeout before a response is
/// received, or the library may be unable to format the request due to
/// missing application inputs.
///
/// Most applications will just return the error or log it. Applications that
/// need to react to errors can use the predicates in this type. The
/// [is_client_error][Error::is_client_error],
/// [is_authorization_error][Error::is_authorization_error], and
/// [is_server_error][Error::is_server_error] predicates classify errors
/// reported by the service using the HTTP status code.
///
/// # Example
/// ```
/// use google_apis_gax::error::Error;
/// match example_function() {
///     Err(e) if e.is_server_error() => { println!("the service had a problem, try again {e}"); },
///     Err(e) if e.is_authorization_error() => { println!("check your credentials {e}"); },
///     Err(e) if e.is_client_error() => { println!("fix the request before trying again {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # use google_apis_gax::error::rpc::{Code, Status};
///     # Err(Error::service_with_http_metadata(
///     #     Status::default().set_code(Code::NotFound).set_message("NOT FOUND"),
///     #     Some(404),
///     #     None))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by the service.
    ///
    /// # Example
    /// ```
    /// use google_apis_gax::error::Error;
    /// use google_apis_gax::error::rpc::{Code, Status};
    /// let status = Status::default().set_code(Code::NotFound).set_message("NOT FOUND");
    /// let error = Error::service(status.clone());
    /// assert_eq!(error.status(), Some(&status));
    /// ```
    pub fn service(status: Status) -> Self {
        Self::service_with_http_metadata(status, None, None)
    }

    /// Creates a service error including the HTTP response metadata.
    pub fn service_with_http_metadata(
        status: Status,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
    ) -> Self {
        let details = ServiceDetails {
            status_code,
            headers,
            status,
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use google_apis_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. Note that the request may
    /// or may not have started, and it may or may not complete in the service.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause of this problem is setting a timeout value that is
    /// based on the observed latency when the service is not under load.
    /// Consider increasing the timeout value to handle temporary latency
    /// increases too.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error representing a deserialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use google_apis_gax::error::Error;
    /// let error = Error::deser("simulated problem");
    /// assert!(error.is_deserialization());
    /// assert!(error.source().is_some());
    /// ```
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// This is always a client-side generated error. The request completed,
    /// but the response does not match the shape the client library expects.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause for deserialization problems are bugs in the
    /// client library and (rarely) bugs in the service. Requests that use a
    /// [fields][crate::options::RequestOptionsBuilder::with_fields] selector
    /// receive partial responses, and those still decode, because all the
    /// fields in the generated types are optional.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Creates an error representing a serialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use google_apis_gax::error::Error;
    /// let error = Error::ser("simulated problem");
    /// assert!(error.is_serialization());
    /// assert!(error.source().is_some());
    /// ```
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. This error is never transient: the serialization is
    /// deterministic, and will fail on future attempts with the same input.
    ///
    /// Invalid header values, such as a user agent with control characters,
    /// are also reported as serialization errors.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Creates an error for requests that cannot be bound to a URL.
    ///
    /// # Example
    /// ```
    /// use google_apis_gax::error::Error;
    /// let error = Error::binding("missing required parameter albumId");
    /// assert!(error.is_binding());
    /// ```
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// The request is missing required path parameters.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a problem in the application. A required path
    /// parameter in the request builder was not initialized. The error source
    /// names the missing parameter.
    pub fn is_binding(&self) -> bool {
        matches!(&self.kind, ErrorKind::Binding)
    }

    /// Creates an error for a request that cannot carry its credentials.
    pub fn authentication<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// The client could not create the authentication headers.
    ///
    /// The client libraries send the access token configured via
    /// [with_access_token][crate::client_builder::ClientBuilder::with_access_token]
    /// as a bearer token. This error indicates the token cannot be used in an
    /// HTTP header.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// A problem reported by the transport layer.
    ///
    /// Use this when the HTTP response is an error, but the payload does not
    /// contain a [Status].
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: None,
        }
    }

    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include a broken connection after the request is sent, or a
    /// failure to resolve the endpoint.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        let details = TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// The request failed without receiving a full HTTP response.
    ///
    /// # Troubleshooting
    ///
    /// This indicates a problem completing the request. This type of error is
    /// rare, but includes crashes and restarts on proxies and load balancers.
    pub fn is_io(&self) -> bool {
        matches!(
        &self.kind,
        ErrorKind::Transport(d) if matches!(**d, TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        }))
    }

    /// A problem in the transport layer.
    ///
    /// Examples include errors in a proxy, load balancer, or other network
    /// element generated before the service is able to send a full response.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport(_))
    }

    /// The request was rejected as invalid, it should not be retried without
    /// modification.
    ///
    /// This is true for any HTTP status in the `4xx` range, other than `401`
    /// and `403`. Those are reported by
    /// [is_authorization_error][Error::is_authorization_error].
    ///
    /// # Example
    /// ```
    /// use google_apis_gax::error::Error;
    /// let error = Error::http(400, http::HeaderMap::new(), bytes::Bytes::from_static(b"bad"));
    /// assert!(error.is_client_error());
    /// assert!(!error.is_server_error());
    /// ```
    pub fn is_client_error(&self) -> bool {
        self.http_status_code()
            .is_some_and(|c| (400..500).contains(&c) && !is_authorization_code(c))
    }

    /// The request requires authorization, or the credentials are invalid.
    ///
    /// This is true for HTTP statuses `401` and `403`.
    pub fn is_authorization_error(&self) -> bool {
        self.http_status_code().is_some_and(is_authorization_code)
    }

    /// The service had a problem handling the request, the request may be
    /// retried.
    ///
    /// This is true for any HTTP status in the `5xx` range. The client
    /// libraries never retry requests automatically.
    pub fn is_server_error(&self) -> bool {
        self.http_status_code()
            .is_some_and(|c| (500..600).contains(&c))
    }

    /// The [Status] payload associated with this error.
    ///
    /// # Examples
    /// ```
    /// use google_apis_gax::error::{Error, rpc::{Code, Status}};
    /// let error = Error::service(Status::default().set_code(Code::NotFound));
    /// if let Some(status) = error.status() {
    ///     if status.code == Code::NotFound {
    ///         println!("cannot find the thing, more details in {:?}", status.details);
    ///     }
    /// }
    /// ```
    ///
    /// Google services return a detailed `Status` message including a numeric
    /// code for the error type, a human-readable message, and a sequence of
    /// details which may include localization messages, or more information
    /// about what caused the failure.
    pub fn status(&self) -> Option<&Status> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.as_ref().status),
            _ => None,
        }
    }

    /// The HTTP status code, if any, associated with this error.
    ///
    /// # Example
    /// ```
    /// use google_apis_gax::error::Error;
    /// let e = search_for_thing("the thing");
    /// if let Some(code) = e.http_status_code() {
    ///     if code == 404 {
    ///         println!("cannot find the thing, more details in {e}");
    ///     }
    /// }
    ///
    /// fn search_for_thing(name: &str) -> Error {
    ///     # Error::http(404, http::HeaderMap::new(), bytes::Bytes::from_static(b"NOT FOUND"))
    /// }
    /// ```
    ///
    /// Sometimes the error is generated before it reaches any Google service.
    /// For example, your proxy or the Google load balancers may generate
    /// errors without the detailed payload. In such cases the client library
    /// returns the status code, headers, and http payload.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.as_ref().status_code,
            ErrorKind::Service(d) => d.as_ref().status_code,
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.as_ref().headers.as_ref(),
            ErrorKind::Service(d) => d.as_ref().headers.as_ref(),
            _ => None,
        }
    }

    /// The payload, if any, associated with this error.
    ///
    /// Only errors without a parseable [Status] keep the payload.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            _ => None,
        }
    }
}

fn is_authorization_code(code: u16) -> bool {
    code == 401 || code == 403
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Binding, Some(e)) => {
                write!(f, "cannot find a matching binding to send the request {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the authentication headers {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the request deadline {e}")
            }
            (ErrorKind::Transport(details), _) => details.display(self.source(), f),
            (ErrorKind::Service(d), _) => {
                write!(
                    f,
                    "the service reports an error with code {} described as: {}",
                    d.status.code, d.status.message
                )
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &dyn std::error::Error)
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Binding,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Transport(Box<TransportDetails>),
    Service(Box<ServiceDetails>),
}

#[derive(Debug)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl TransportDetails {
    fn display(
        &self,
        source: Option<&(dyn StdError + 'static)>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match (source, &self) {
            (
                _,
                TransportDetails {
                    status_code: Some(code),
                    payload: Some(p),
                    ..
                },
            ) => {
                if let Ok(message) = std::str::from_utf8(p.as_ref()) {
                    write!(f, "the HTTP transport reports a [{code}] error: {message}")
                } else {
                    write!(f, "the HTTP transport reports a [{code}] error: {p:?}")
                }
            }
            (Some(source), _) => {
                write!(f, "the transport reports an error: {source}")
            }
            (None, _) => unreachable!("no Error constructor allows this"),
        }
    }
}

#[derive(Debug)]
struct ServiceDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::Code;
    use http::HeaderValue;
    use std::error::Error as StdError;
    use test_case::test_case;

    #[test]
    fn service() {
        let status = Status::default()
            .set_code(Code::NotFound)
            .set_message("NOT FOUND");
        let error = Error::service(status.clone());
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.status(), Some(&status));
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert!(error.to_string().contains(Code::NotFound.name()), "{error}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(!error.is_client_error(), "{error:?}");
    }

    #[test]
    fn service_with_http_metadata() {
        let status = Status::default()
            .set_code(Code::PermissionDenied)
            .set_message("go away");
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        let error =
            Error::service_with_http_metadata(status.clone(), Some(403), Some(headers.clone()));
        assert_eq!(error.status(), Some(&status));
        assert_eq!(error.http_status_code(), Some(403));
        assert_eq!(error.http_headers(), Some(&headers));
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(error.is_authorization_error(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
    }

    #[test]
    fn timeout() {
        let error = Error::timeout("simulated");
        assert!(error.is_timeout(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.to_string().contains("simulated"), "{error}");
        assert!(error.http_headers().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(error.status().is_none(), "{error:?}");
    }

    #[test]
    fn serialization() {
        let error = Error::ser("bad header");
        assert!(error.is_serialization(), "{error:?}");
        assert!(error.to_string().contains("bad header"), "{error}");

        let error = Error::deser("bad body");
        assert!(error.is_deserialization(), "{error:?}");
        assert!(error.to_string().contains("bad body"), "{error}");
    }

    #[test]
    fn binding() {
        let error = Error::binding("missing albumId");
        assert!(error.is_binding(), "{error:?}");
        assert!(error.to_string().contains("missing albumId"), "{error}");
        assert!(!error.is_client_error(), "{error:?}");
        let source = error.source().map(|e| e.to_string());
        assert_eq!(source.as_deref(), Some("missing albumId"));
    }

    #[test]
    fn authentication() {
        let error = Error::authentication("bad token");
        assert!(error.is_authentication(), "{error:?}");
        assert!(error.to_string().contains("bad token"), "{error}");
        assert!(!error.is_authorization_error(), "{error:?}");
    }

    #[test]
    fn http() {
        let mut headers = HeaderMap::new();
        headers.insert("x-test", HeaderValue::from_static("value"));
        let payload = bytes::Bytes::from_static(b"uh-oh");
        let error = Error::http(502, headers.clone(), payload.clone());
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(502));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(error.http_payload(), Some(&payload));
        assert!(error.to_string().contains("[502]"), "{error}");
        assert!(error.to_string().contains("uh-oh"), "{error}");
    }

    #[test]
    fn io() {
        let error = Error::io("broken pipe");
        assert!(error.is_transport(), "{error:?}");
        assert!(error.is_io(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.to_string().contains("broken pipe"), "{error}");
    }

    #[test_case(400, true, false, false)]
    #[test_case(404, true, false, false)]
    #[test_case(409, true, false, false)]
    #[test_case(429, true, false, false)]
    #[test_case(401, false, true, false)]
    #[test_case(403, false, true, false)]
    #[test_case(500, false, false, true)]
    #[test_case(503, false, false, true)]
    #[test_case(599, false, false, true)]
    fn taxonomy(code: u16, client: bool, authorization: bool, server: bool) {
        let error = Error::http(code, HeaderMap::new(), bytes::Bytes::new());
        assert_eq!(error.is_client_error(), client, "{error:?}");
        assert_eq!(error.is_authorization_error(), authorization, "{error:?}");
        assert_eq!(error.is_server_error(), server, "{error:?}");

        let status = Status::default().set_code(Code::Unknown);
        let error = Error::service_with_http_metadata(status, Some(code), None);
        assert_eq!(error.is_client_error(), client, "{error:?}");
        assert_eq!(error.is_authorization_error(), authorization, "{error:?}");
        assert_eq!(error.is_server_error(), server, "{error:?}");
    }
}
