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

//! Helpers to format path parameters.
//!
//! Path parameters are required. Most are plain arguments of the client
//! methods, but some live inside the (optional) body of the request, such as
//! the `advertiser.advertiserId` of a `PATCH` call. The generated code
//! returns [missing] when those are not set.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

// Reserved characters in a path segment, plus the characters that are unsafe
// anywhere in a URL.
const ENCODED_CHARS: AsciiSet = CONTROLS
    .add(b' ')
    .add(b'!')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
}

/// Returns the error for a required path parameter that is not set.
pub fn missing(name: &str) -> gax::error::Error {
    gax::error::Error::binding(Error::MissingRequiredParameter(name.to_string()))
}

/// Percent-encodes `value` so it can be used as a single path segment.
///
/// # Example
/// ```
/// # use google_cloud_gax_internal::path_parameter::encode;
/// assert_eq!(encode("my-service.example.com"), "my-service.example.com");
/// assert_eq!(encode("a/b c"), "a%2Fb%20c");
/// ```
pub fn encode(value: &str) -> String {
    utf8_percent_encode(value, &ENCODED_CHARS).to_string()
}

#[cfg(test)]
mod tests {
    use super::Error;
    use std::error::Error as _;
    use test_case::test_case;

    #[test]
    fn missing() {
        let e = super::missing("advertiser.advertiser_id");
        assert!(e.is_binding(), "{e:?}");
        let fmt = format!("{e}");
        assert!(fmt.contains("advertiser.advertiser_id"), "{e:?}");
        let source = e.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::MissingRequiredParameter(p)) if p == "advertiser.advertiser_id"),
            "{e:?}"
        );
    }

    #[test_case("servicecontrol.googleapis.com", "servicecontrol.googleapis.com")]
    #[test_case("my_service-1~test", "my_service-1~test")]
    #[test_case("a/b", "a%2Fb")]
    #[test_case("a b", "a%20b")]
    #[test_case("x:check", "x%3Acheck")]
    #[test_case("100%", "100%25")]
    #[test_case("q?x=1&y=2", "q%3Fx%3D1%26y%3D2")]
    #[test_case("café", "caf%C3%A9")]
    fn encode(input: &str, want: &str) {
        assert_eq!(super::encode(input), want);
    }
}
