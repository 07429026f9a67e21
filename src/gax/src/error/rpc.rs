// Copyright 2024 Google LLC
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
use serde::{Deserialize, Serialize};

/// The error status returned by Google REST services.
///
/// Each [Status] contains an error code, a developer-facing message, and a
/// list of details. The details are kept as raw JSON objects, each one
/// identified by its `@type` field.
///
/// You can find out more about this error model in the
/// [API Design Guide](https://cloud.google.com/apis/design/errors).
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Status {
    /// The status code.
    pub code: Code,

    /// A developer-facing error message, in English.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,

    /// Additional error information, such as `google.rpc.BadRequest`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
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

macro_rules! status_codes {
    ($($(#[$doc:meta])* $variant:ident = $value:literal, $name:literal, $http:literal;)*) => {
        /// The canonical error codes for Google APIs.
        ///
        /// Services return the most specific code that applies.
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum Code {
            $(
                $(#[$doc])*
                $variant = $value,
            )*
        }

        impl Code {
            /// The name of the code, as used in the `status` field of JSON
            /// error payloads.
            pub fn name(&self) -> &str {
                match self {
                    $( Code::$variant => $name, )*
                }
            }

            /// The HTTP status code typically associated with this code.
            pub fn http_status_code(&self) -> u16 {
                match self {
                    $( Code::$variant => $http, )*
                }
            }
        }

        impl From<i32> for Code {
            fn from(value: i32) -> Self {
                match value {
                    $( $value => Code::$variant, )*
                    _ => Code::default(),
                }
            }
        }

        impl TryFrom<&str> for Code {
            type Error = String;
            fn try_from(value: &str) -> Result<Code, Self::Error> {
                match value {
                    $( $name => Ok(Code::$variant), )*
                    _ => Err(format!("unknown status code value {value}")),
                }
            }
        }
    };
}

status_codes! {
    /// Not an error; returned on success.
    Ok = 0, "OK", 200;
    /// The operation was cancelled, typically by the caller.
    Cancelled = 1, "CANCELLED", 499;
    /// Unknown error.
    #[default]
    Unknown = 2, "UNKNOWN", 500;
    /// The client specified an invalid argument.
    InvalidArgument = 3, "INVALID_ARGUMENT", 400;
    /// The deadline expired before the operation could complete.
    DeadlineExceeded = 4, "DEADLINE_EXCEEDED", 504;
    /// Some requested entity was not found.
    NotFound = 5, "NOT_FOUND", 404;
    /// The entity the client attempted to create already exists.
    AlreadyExists = 6, "ALREADY_EXISTS", 409;
    /// The caller does not have permission to execute the operation.
    PermissionDenied = 7, "PERMISSION_DENIED", 403;
    /// Some resource has been exhausted, such as a per-user quota.
    ResourceExhausted = 8, "RESOURCE_EXHAUSTED", 429;
    /// The system is not in a state required for the operation's execution.
    FailedPrecondition = 9, "FAILED_PRECONDITION", 400;
    /// The operation was aborted, typically due to a concurrency issue.
    Aborted = 10, "ABORTED", 409;
    /// The operation was attempted past the valid range.
    OutOfRange = 11, "OUT_OF_RANGE", 400;
    /// The operation is not implemented or not enabled in this service.
    Unimplemented = 12, "UNIMPLEMENTED", 501;
    /// Internal errors.
    Internal = 13, "INTERNAL", 500;
    /// The service is currently unavailable.
    Unavailable = 14, "UNAVAILABLE", 503;
    /// Unrecoverable data loss or corruption.
    DataLoss = 15, "DATA_LOSS", 500;
    /// The request does not have valid authentication credentials.
    Unauthenticated = 16, "UNAUTHENTICATED", 401;
}

impl From<Code> for String {
    fn from(value: Code) -> String {
        value.name().to_string()
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Code {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(*self as i32)
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        i32::deserialize(deserializer).map(Code::from)
    }
}

// Google REST services wrap the status in an `error` object. The `code` field
// holds the HTTP status code and `status` holds the code name.
#[derive(Debug, Deserialize)]
struct ErrorWrapper {
    error: WrapperStatus,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WrapperStatus {
    code: u16,
    message: String,
    status: Option<String>,
    details: Vec<serde_json::Value>,
}

impl TryFrom<&bytes::Bytes> for Status {
    type Error = Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        let wrapper = serde_json::from_slice::<ErrorWrapper>(value)
            .map(|w| w.error)
            .map_err(Error::deser)?;
        let code = match wrapper.status.as_deref().map(Code::try_from) {
            Some(Ok(code)) => code,
            Some(Err(_)) | None => from_http_status_code(wrapper.code),
        };
        Ok(Status {
            code,
            message: wrapper.message,
            details: wrapper.details,
            ..Default::default()
        })
    }
}

fn from_http_status_code(value: u16) -> Code {
    match value {
        400 => Code::InvalidArgument,
        401 => Code::Unauthenticated,
        403 => Code::PermissionDenied,
        404 => Code::NotFound,
        409 => Code::Aborted,
        429 => Code::ResourceExhausted,
        499 => Code::Cancelled,
        501 => Code::Unimplemented,
        503 => Code::Unavailable,
        504 => Code::DeadlineExceeded,
        _ => Code::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;
    type Result = anyhow::Result<()>;

    #[test]
    fn setters() {
        let status = Status::default()
            .set_code(Code::InvalidArgument)
            .set_message("bad filter")
            .set_details([json!({"@type": "type.googleapis.com/google.rpc.BadRequest"})]);
        assert_eq!(status.code, Code::InvalidArgument);
        assert_eq!(status.message, "bad filter");
        assert_eq!(status.details.len(), 1);
    }

    #[test_case(Code::Ok, "OK", 0)]
    #[test_case(Code::NotFound, "NOT_FOUND", 5)]
    #[test_case(Code::PermissionDenied, "PERMISSION_DENIED", 7)]
    #[test_case(Code::Unauthenticated, "UNAUTHENTICATED", 16)]
    fn code_names(code: Code, name: &str, value: i32) -> Result {
        assert_eq!(code.name(), name);
        assert_eq!(code.to_string(), name);
        assert_eq!(String::from(code), name);
        assert_eq!(Code::try_from(name).map_err(anyhow::Error::msg)?, code);
        assert_eq!(Code::from(value), code);
        assert_eq!(serde_json::to_value(code)?, json!(value));
        assert_eq!(serde_json::from_value::<Code>(json!(value))?, code);
        Ok(())
    }

    #[test]
    fn code_unknown_values() {
        assert_eq!(Code::from(42), Code::Unknown);
        assert!(Code::try_from("NOT-A-CODE").is_err());
    }

    #[test]
    fn try_from_bytes() -> Result {
        let payload = json!({
            "error": {
                "code": 404,
                "message": "advertiser 123 not found",
                "status": "NOT_FOUND",
                "details": [
                    {"@type": "type.googleapis.com/google.rpc.ResourceInfo", "resourceName": "advertisers/123"}
                ]
            }
        });
        let bytes = bytes::Bytes::from(serde_json::to_vec(&payload)?);
        let got = Status::try_from(&bytes)?;
        let want = Status::default()
            .set_code(Code::NotFound)
            .set_message("advertiser 123 not found")
            .set_details([json!({
                "@type": "type.googleapis.com/google.rpc.ResourceInfo",
                "resourceName": "advertisers/123"
            })]);
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case(400, Code::InvalidArgument)]
    #[test_case(403, Code::PermissionDenied)]
    #[test_case(503, Code::Unavailable)]
    #[test_case(418, Code::Unknown)]
    fn try_from_bytes_without_status(http: u16, want: Code) -> Result {
        let payload = json!({"error": {"code": http, "message": "uh-oh"}});
        let bytes = bytes::Bytes::from(serde_json::to_vec(&payload)?);
        let got = Status::try_from(&bytes)?;
        assert_eq!(got.code, want);
        assert_eq!(got.message, "uh-oh");
        Ok(())
    }

    #[test]
    fn unknown_fields_roundtrip() -> Result {
        let input = json!({
            "code": 7,
            "message": "denied",
            "reason": "IAM_PERMISSION_DENIED",
            "extra": {"nested": ["a", "b"]}
        });
        let got = serde_json::from_value::<Status>(input.clone())?;
        assert_eq!(got.code, Code::PermissionDenied);
        assert_eq!(got.message, "denied");
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn try_from_bytes_error() {
        let bytes = bytes::Bytes::from_static(b"<html>Bad Gateway</html>");
        let got = Status::try_from(&bytes);
        assert!(matches!(&got, Err(e) if e.is_deserialization()), "{got:?}");
    }
}
