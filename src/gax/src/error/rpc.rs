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

use crate::error::Error;
use serde::Deserialize;

/// The logical error model used by Google REST APIs.
///
/// Each [Status] contains three pieces of data: error code, error message,
/// and error details. The details are kept as generic JSON values, the client
/// libraries do not interpret them.
///
/// You can find out more about this error model and how to work with it in the
/// [API Design Guide](https://cloud.google.com/apis/design/errors).
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Status {
    /// The status code.
    pub code: Code,

    /// A developer-facing error message, which should be in English.
    pub message: String,

    /// A list of objects that carry the error details.
    pub details: Vec<serde_json::Value>,
}

impl Status {
    /// Sets the value for [code][Status::code].
    pub fn set_code<T: Into<Code>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value for [message][Status::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value for [details][Status::details].
    pub fn set_details<T, I>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<serde_json::Value>,
    {
        self.details = v.into_iter().map(|v| v.into()).collect();
        self
    }
}

/// The canonical error codes for Google APIs.
///
/// Sometimes multiple error codes may apply. Services should return the most
/// specific error code that applies. The HTTP mapping for each code is listed
/// in its description.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[non_exhaustive]
pub enum Code {
    /// Not an error; returned on success. HTTP Mapping: 200 OK
    Ok = 0,
    /// The operation was cancelled, typically by the caller. HTTP Mapping:
    /// 499 Client Closed Request
    Cancelled = 1,
    /// Unknown error, or the service did not include a code. HTTP Mapping:
    /// 500 Internal Server Error
    #[default]
    Unknown = 2,
    /// The client specified an invalid argument. HTTP Mapping: 400 Bad
    /// Request
    InvalidArgument = 3,
    /// The deadline expired before the operation could complete. HTTP
    /// Mapping: 504 Gateway Timeout
    DeadlineExceeded = 4,
    /// Some requested entity was not found. HTTP Mapping: 404 Not Found
    NotFound = 5,
    /// The entity that a client attempted to create already exists. HTTP
    /// Mapping: 409 Conflict
    AlreadyExists = 6,
    /// The caller does not have permission to execute the specified
    /// operation. HTTP Mapping: 403 Forbidden
    PermissionDenied = 7,
    /// Some resource has been exhausted, perhaps a per-user quota. HTTP
    /// Mapping: 429 Too Many Requests
    ResourceExhausted = 8,
    /// The system is not in a state required for the operation's execution.
    /// HTTP Mapping: 400 Bad Request
    FailedPrecondition = 9,
    /// The operation was aborted, typically due to a concurrency issue. HTTP
    /// Mapping: 409 Conflict
    Aborted = 10,
    /// The operation was attempted past the valid range. HTTP Mapping: 400
    /// Bad Request
    OutOfRange = 11,
    /// The operation is not implemented or is not supported. HTTP Mapping:
    /// 501 Not Implemented
    Unimplemented = 12,
    /// Internal errors in the service. HTTP Mapping: 500 Internal Server Error
    Internal = 13,
    /// The service is currently unavailable. HTTP Mapping: 503 Service
    /// Unavailable
    Unavailable = 14,
    /// Unrecoverable data loss or corruption. HTTP Mapping: 500 Internal
    /// Server Error
    DataLoss = 15,
    /// The request does not have valid authentication credentials for the
    /// operation. HTTP Mapping: 401 Unauthorized
    Unauthenticated = 16,
}

impl Code {
    /// The name of the code, as used in the `status` field of error payloads.
    pub fn name(&self) -> &str {
        match self {
            Code::Ok => "OK",
            Code::Cancelled => "CANCELLED",
            Code::Unknown => "UNKNOWN",
            Code::InvalidArgument => "INVALID_ARGUMENT",
            Code::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Code::NotFound => "NOT_FOUND",
            Code::AlreadyExists => "ALREADY_EXISTS",
            Code::PermissionDenied => "PERMISSION_DENIED",
            Code::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Code::FailedPrecondition => "FAILED_PRECONDITION",
            Code::Aborted => "ABORTED",
            Code::OutOfRange => "OUT_OF_RANGE",
            Code::Unimplemented => "UNIMPLEMENTED",
            Code::Internal => "INTERNAL",
            Code::Unavailable => "UNAVAILABLE",
            Code::DataLoss => "DATA_LOSS",
            Code::Unauthenticated => "UNAUTHENTICATED",
        }
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<&str> for Code {
    type Error = String;
    fn try_from(value: &str) -> std::result::Result<Code, Self::Error> {
        match value {
            "OK" => Ok(Code::Ok),
            "CANCELLED" => Ok(Code::Cancelled),
            "UNKNOWN" => Ok(Code::Unknown),
            "INVALID_ARGUMENT" => Ok(Code::InvalidArgument),
            "DEADLINE_EXCEEDED" => Ok(Code::DeadlineExceeded),
            "NOT_FOUND" => Ok(Code::NotFound),
            "ALREADY_EXISTS" => Ok(Code::AlreadyExists),
            "PERMISSION_DENIED" => Ok(Code::PermissionDenied),
            "RESOURCE_EXHAUSTED" => Ok(Code::ResourceExhausted),
            "FAILED_PRECONDITION" => Ok(Code::FailedPrecondition),
            "ABORTED" => Ok(Code::Aborted),
            "OUT_OF_RANGE" => Ok(Code::OutOfRange),
            "UNIMPLEMENTED" => Ok(Code::Unimplemented),
            "INTERNAL" => Ok(Code::Internal),
            "UNAVAILABLE" => Ok(Code::Unavailable),
            "DATA_LOSS" => Ok(Code::DataLoss),
            "UNAUTHENTICATED" => Ok(Code::Unauthenticated),
            _ => Err(format!("unknown status code value {value}")),
        }
    }
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: WrapperStatus,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct WrapperStatus {
    message: String,
    status: Option<String>,
    details: Vec<serde_json::Value>,
}

/// Parses the error payload returned by Google REST APIs.
///
/// The payload has the form `{"error": {"code": 404, "message": "...",
/// "status": "NOT_FOUND", "details": [...]}}`.
impl TryFrom<&bytes::Bytes> for Status {
    type Error = Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        let wrapper = serde_json::from_slice::<ErrorWrapper>(value)
            .map(|w| w.error)
            .map_err(Error::deser)?;
        let code = match wrapper.status.as_deref().map(Code::try_from) {
            Some(Ok(code)) => code,
            Some(Err(_)) | None => Code::Unknown,
        };
        Ok(Status {
            code,
            message: wrapper.message,
            details: wrapper.details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(Code::Ok)]
    #[test_case(Code::Cancelled)]
    #[test_case(Code::Unknown)]
    #[test_case(Code::InvalidArgument)]
    #[test_case(Code::DeadlineExceeded)]
    #[test_case(Code::NotFound)]
    #[test_case(Code::AlreadyExists)]
    #[test_case(Code::PermissionDenied)]
    #[test_case(Code::ResourceExhausted)]
    #[test_case(Code::FailedPrecondition)]
    #[test_case(Code::Aborted)]
    #[test_case(Code::OutOfRange)]
    #[test_case(Code::Unimplemented)]
    #[test_case(Code::Internal)]
    #[test_case(Code::Unavailable)]
    #[test_case(Code::DataLoss)]
    #[test_case(Code::Unauthenticated)]
    fn code_names(code: Code) {
        assert_eq!(Code::try_from(code.name()), Ok(code));
        assert_eq!(code.to_string(), code.name());
    }

    #[test]
    fn code_unknown_name() {
        let got = Code::try_from("NOT-A-CODE");
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn status_from_payload() -> anyhow::Result<()> {
        let detail = json!({
            "@type": "type.googleapis.com/google.rpc.BadRequest",
            "fieldViolations": [{"field": "pageSize", "description": "too large"}],
        });
        let payload = json!({"error": {
            "code": 400,
            "message": "Request contains an invalid argument.",
            "status": "INVALID_ARGUMENT",
            "details": [detail.clone()],
        }});
        let payload = bytes::Bytes::from(payload.to_string());
        let got = Status::try_from(&payload)?;
        let want = Status::default()
            .set_code(Code::InvalidArgument)
            .set_message("Request contains an invalid argument.")
            .set_details([detail]);
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn status_missing_status_name() -> anyhow::Result<()> {
        let payload = json!({"error": {"code": 500, "message": "oh no"}});
        let payload = bytes::Bytes::from(payload.to_string());
        let got = Status::try_from(&payload)?;
        assert_eq!(got.code, Code::Unknown);
        assert_eq!(got.message, "oh no");
        assert!(got.details.is_empty(), "{got:?}");
        Ok(())
    }

    #[test_case("not json")]
    #[test_case(r#"{"error": "just a string"}"#)]
    #[test_case(r#"{"message": "no wrapper"}"#)]
    fn status_bad_payload(input: &'static str) {
        let payload = bytes::Bytes::from_static(input.as_bytes());
        let got = Status::try_from(&payload);
        assert!(matches!(&got, Err(e) if e.is_deserialization()), "{got:?}");
    }
}
