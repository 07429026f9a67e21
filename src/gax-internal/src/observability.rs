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
//! The attribute names follow the OpenTelemetry semantic conventions for HTTP
//! clients, so the spans are useful with any `tracing` subscriber, including
//! those exporting to OpenTelemetry.

use gax::error::Error;
use gax::options::RequestOptions;
use tracing::{Span, field};

pub(crate) const OTEL_NAME: &str = "otel.name";
pub(crate) const HTTP_REQUEST_METHOD: &str = "http.request.method";
pub(crate) const SERVER_ADDRESS: &str = "server.address";
pub(crate) const SERVER_PORT: &str = "server.port";
pub(crate) const URL_FULL: &str = "url.full";
pub(crate) const URL_TEMPLATE: &str = "url.template";
pub(crate) const HTTP_RESPONSE_STATUS_CODE: &str = "http.response.status_code";
pub(crate) const ERROR_TYPE: &str = "error.type";

/// Creates the span for a single HTTP request.
///
/// The response attributes start empty, [record_http_response] fills them.
pub(crate) fn create_http_span(request: &reqwest::Request, options: &RequestOptions) -> Span {
    let url = request.url();
    let method = request.method();
    let url_template = gax::options::internal::get_path_template(options);
    let otel_name = url_template.map_or_else(
        || method.to_string(),
        |template| format!("{method} {template}"),
    );
    tracing::info_span!(
        "http_request",
        { OTEL_NAME } = otel_name,
        { HTTP_REQUEST_METHOD } = method.as_str(),
        { SERVER_ADDRESS } = url.host_str().unwrap_or(""),
        { SERVER_PORT } = url.port_or_known_default().map(|p| p as i64).unwrap_or(0),
        { URL_FULL } = url.as_str(),
        { URL_TEMPLATE } = url_template,
        { HTTP_RESPONSE_STATUS_CODE } = field::Empty,
        { ERROR_TYPE } = field::Empty,
    )
}

/// Records the outcome of sending the request.
///
/// Called before the response body is downloaded.
pub(crate) fn record_http_response(span: &Span, result: Result<&reqwest::Response, &Error>) {
    match result {
        Ok(response) => {
            let status = response.status();
            span.record(HTTP_RESPONSE_STATUS_CODE, status.as_u16() as i64);
            if !status.is_success() {
                span.record(ERROR_TYPE, status.as_str());
            }
        }
        Err(e) => {
            span.record(ERROR_TYPE, error_type(e));
        }
    }
}

fn error_type(error: &Error) -> &'static str {
    match error {
        e if e.is_timeout() => "CLIENT_TIMEOUT",
        e if e.is_io() => "CLIENT_CONNECTION_ERROR",
        e if e.is_authentication() => "CLIENT_AUTHENTICATION_ERROR",
        e if e.is_serialization() => "CLIENT_REQUEST_ERROR",
        e if e.is_deserialization() => "CLIENT_RESPONSE_DECODE_ERROR",
        _ => "UNKNOWN",
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use http::Method;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use tracing::{Subscriber, span};
    use tracing_subscriber::{Layer, layer::Context};
    type TestResult = anyhow::Result<()>;

    type SpanMap = HashMap<String, String>;

    // Captures the attributes of each span, including those recorded after the
    // span is created.
    #[derive(Clone, Default)]
    pub(crate) struct TestLayer {
        spans: Arc<Mutex<Vec<(span::Id, SpanMap)>>>,
    }

    impl TestLayer {
        pub(crate) fn captured(&self) -> Vec<SpanMap> {
            self.spans
                .lock()
                .map(|g| g.iter().map(|(_, m)| m.clone()).collect())
                .unwrap_or_default()
        }
    }

    impl<S> Layer<S> for TestLayer
    where
        S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    {
        fn on_new_span(&self, attrs: &span::Attributes<'_>, id: &span::Id, _ctx: Context<'_, S>) {
            let mut map = HashMap::new();
            attrs.record(&mut TestVisitor(&mut map));
            if let Ok(mut g) = self.spans.lock() {
                g.push((id.clone(), map));
            }
        }

        fn on_record(&self, id: &span::Id, values: &span::Record<'_>, _ctx: Context<'_, S>) {
            if let Ok(mut g) = self.spans.lock() {
                if let Some((_, map)) = g.iter_mut().find(|(k, _)| k == id) {
                    values.record(&mut TestVisitor(map));
                }
            }
        }
    }

    struct TestVisitor<'a>(&'a mut SpanMap);

    impl tracing::field::Visit for TestVisitor<'_> {
        fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
            self.0.insert(field.name().to_string(), value.to_string());
        }

        fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
            self.0.insert(field.name().to_string(), value.to_string());
        }

        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            self.0.insert(field.name().to_string(), format!("{value:?}"));
        }
    }

    fn capture<F: FnOnce()>(f: F) -> Vec<SpanMap> {
        use tracing_subscriber::prelude::*;
        let layer = TestLayer::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());
        tracing::subscriber::with_default(subscriber, f);
        layer.captured()
    }

    #[test]
    fn span_attributes() -> TestResult {
        let request = reqwest::Request::new(
            Method::GET,
            "https://displayvideo.googleapis.com/v4/advertisers/123".parse()?,
        );
        let options = gax::options::internal::set_path_template(
            RequestOptions::default(),
            "/v4/advertisers/{advertiser_id}",
        );
        let spans = capture(|| {
            let _span = create_http_span(&request, &options);
        });
        assert_eq!(spans.len(), 1, "{spans:?}");
        let got = &spans[0];
        let want = HashMap::from([
            (OTEL_NAME, "GET /v4/advertisers/{advertiser_id}"),
            (HTTP_REQUEST_METHOD, "GET"),
            (SERVER_ADDRESS, "displayvideo.googleapis.com"),
            (SERVER_PORT, "443"),
            (URL_FULL, "https://displayvideo.googleapis.com/v4/advertisers/123"),
            (URL_TEMPLATE, "/v4/advertisers/{advertiser_id}"),
        ])
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect::<SpanMap>();
        pretty_assertions::assert_eq!(got, &want);
        Ok(())
    }

    #[test]
    fn span_without_template() -> TestResult {
        let request = reqwest::Request::new(
            Method::POST,
            "http://localhost:8080/v2/services/test:check".parse()?,
        );
        let spans = capture(|| {
            let _span = create_http_span(&request, &RequestOptions::default());
        });
        let got = &spans[0];
        assert_eq!(got.get(OTEL_NAME).map(String::as_str), Some("POST"));
        assert_eq!(got.get(SERVER_PORT).map(String::as_str), Some("8080"));
        assert!(got.get(URL_TEMPLATE).is_none(), "{got:?}");
        Ok(())
    }

    #[test]
    fn record_response() -> TestResult {
        let request = reqwest::Request::new(Method::GET, "https://example.com/v4/x".parse()?);
        let ok = reqwest::Response::from(http::Response::builder().status(200).body("")?);
        let not_found = reqwest::Response::from(http::Response::builder().status(404).body("")?);
        let spans = capture(|| {
            let span = create_http_span(&request, &RequestOptions::default());
            record_http_response(&span, Ok(&ok));
            let span = create_http_span(&request, &RequestOptions::default());
            record_http_response(&span, Ok(&not_found));
            let span = create_http_span(&request, &RequestOptions::default());
            record_http_response(&span, Err(&Error::timeout("simulated")));
        });
        assert_eq!(spans.len(), 3, "{spans:?}");
        assert_eq!(
            spans[0].get(HTTP_RESPONSE_STATUS_CODE).map(String::as_str),
            Some("200")
        );
        assert!(spans[0].get(ERROR_TYPE).is_none(), "{spans:?}");
        assert_eq!(
            spans[1].get(HTTP_RESPONSE_STATUS_CODE).map(String::as_str),
            Some("404")
        );
        assert_eq!(spans[1].get(ERROR_TYPE).map(String::as_str), Some("404"));
        assert_eq!(
            spans[2].get(ERROR_TYPE).map(String::as_str),
            Some("CLIENT_TIMEOUT")
        );
        Ok(())
    }

    #[test]
    fn error_types() {
        assert_eq!(error_type(&Error::io("reset")), "CLIENT_CONNECTION_ERROR");
        assert_eq!(error_type(&Error::ser("bad")), "CLIENT_REQUEST_ERROR");
        assert_eq!(
            error_type(&Error::deser("bad")),
            "CLIENT_RESPONSE_DECODE_ERROR"
        );
        assert_eq!(
            error_type(&Error::authentication(
                gax::error::CredentialsError::from_msg(false, "bad")
            )),
            "CLIENT_AUTHENTICATION_ERROR"
        );
        assert_eq!(error_type(&Error::binding("missing")), "UNKNOWN");
    }
}
