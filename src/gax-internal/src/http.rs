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

use crate::observability;
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::credentials::{Credentials, anonymous};
use gax::error::Error;
use gax::options::RequestOptions;
use reqwest::header::{CONTENT_TYPE, HeaderValue, USER_AGENT};
use tracing::{Instrument, Span};

/// The HTTP transport shared by all the generated clients.
///
/// Each call to [execute][ReqwestClient::execute] sends exactly one request.
/// There are no retries. Clones share the connection pool, the endpoint, and
/// the credentials.
#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    tracing: bool,
}

impl ReqwestClient {
    pub async fn new(
        config: crate::options::ClientConfig,
        default_endpoint: &str,
    ) -> gax::client_builder::Result<Self> {
        let tracing = crate::options::tracing_enabled(&config);
        let endpoint = config
            .endpoint
            .as_deref()
            .unwrap_or(default_endpoint)
            .trim_end_matches('/')
            .to_string();
        reqwest::Url::parse(&endpoint).map_err(BuilderError::transport)?;
        let cred = config
            .cred
            .unwrap_or_else(|| anonymous::Builder::new().build());
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        Ok(Self {
            inner,
            cred,
            endpoint,
            tracing,
        })
    }

    /// Starts a request for `path`, which must start with `/`.
    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner
            .request(method, format!("{}{path}", &self.endpoint))
    }

    pub async fn execute<I: serde::ser::Serialize, O: serde::de::DeserializeOwned + Default>(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<O> {
        if let Some(user_agent) = options.user_agent() {
            builder = builder.header(
                USER_AGENT,
                HeaderValue::from_str(user_agent).map_err(Error::ser)?,
            );
        }
        if let Some(body) = body {
            let payload = serde_json::to_vec(&body).map_err(Error::ser)?;
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(payload);
        }
        if let Some(timeout) = options.attempt_timeout() {
            builder = builder.timeout(*timeout);
        }
        let auth_headers = self
            .cred
            .headers()
            .await
            .map_err(Error::authentication)?;
        let request = builder.headers(auth_headers).build().map_err(Error::ser)?;

        if !self.tracing {
            return self.send(request, None).await;
        }
        let span = observability::create_http_span(&request, &options);
        let result = self
            .send(request, Some(&span))
            .instrument(span.clone())
            .await;
        if let Err(e) = &result {
            span.in_scope(|| tracing::warn!("request failed: {e}"));
        }
        result
    }

    async fn send<O: serde::de::DeserializeOwned + Default>(
        &self,
        request: reqwest::Request,
        span: Option<&Span>,
    ) -> Result<O> {
        let response = self
            .inner
            .execute(request)
            .await
            .map_err(Self::map_send_error);
        if let Some(span) = span {
            observability::record_http_response(span, response.as_ref());
        }
        let response = response?;
        if span.is_some() {
            tracing::debug!(status = response.status().as_u16(), "received response");
        }
        if !response.status().is_success() {
            return self::to_http_error(response).await;
        }
        self::to_http_response(response).await
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

/// Marks requests without a body, e.g. `None::<NoBody>`.
#[derive(serde::Serialize)]
pub struct NoBody;

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

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<O> {
    // 204 No Content has an empty body, which is not valid JSON.
    let no_content_status = response.status() == reqwest::StatusCode::NO_CONTENT;
    let body = response.bytes().await.map_err(Error::io)?;
    match body {
        content if content.is_empty() && no_content_status => Ok(O::default()),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::{Code, Status};
    use http::{HeaderMap, HeaderValue};
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    #[tokio::test]
    async fn new_endpoint() -> TestResult {
        let client = ReqwestClient::new(
            crate::options::ClientConfig::default(),
            "https://displayvideo.googleapis.com/",
        )
        .await?;
        assert_eq!(client.endpoint, "https://displayvideo.googleapis.com");
        let request = client
            .builder(reqwest::Method::GET, "/v4/advertisers".to_string())
            .build()?;
        assert_eq!(
            request.url().as_str(),
            "https://displayvideo.googleapis.com/v4/advertisers"
        );

        let mut config = crate::options::ClientConfig::default();
        config.endpoint = Some("http://127.0.0.1:8080".to_string());
        let client = ReqwestClient::new(config, "https://displayvideo.googleapis.com").await?;
        assert_eq!(client.endpoint, "http://127.0.0.1:8080");
        Ok(())
    }

    #[tokio::test]
    async fn new_bad_endpoint() {
        let mut config = crate::options::ClientConfig::default();
        config.endpoint = Some("not a url".to_string());
        let client = ReqwestClient::new(config, "https://displayvideo.googleapis.com").await;
        assert!(matches!(&client, Err(e) if e.is_transport()), "{client:?}");
    }

    #[tokio::test]
    async fn client_http_error_bytes() -> TestResult {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(400)
            .body(r#"{"error": "bad request"}"#)?;
        let response: reqwest::Response = http_resp.into();
        assert!(response.status().is_client_error());
        let err = match super::to_http_error::<()>(response).await {
            Ok(_) => anyhow::bail!("expected an error"),
            Err(e) => e,
        };
        assert_eq!(err.http_status_code(), Some(400));
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("application/json"));
        assert_eq!(err.http_headers(), Some(&want));
        assert_eq!(
            err.http_payload(),
            Some(bytes::Bytes::from(r#"{"error": "bad request"}"#)).as_ref()
        );
        assert!(err.status().is_none(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn client_error_with_status() -> TestResult {
        let body = serde_json::json!({"error": {
            "code": 404,
            "message": "Advertiser 123 was not found.",
            "status": "NOT_FOUND",
            "details": [{
                "@type": "type.googleapis.com/google.rpc.LocalizedMessage",
                "locale": "en-US",
                "message": "we searched everywhere, honest",
            }]
        }});
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(404)
            .body(body.to_string())?;
        let response: reqwest::Response = http_resp.into();
        let err = match super::to_http_error::<()>(response).await {
            Ok(_) => anyhow::bail!("expected an error"),
            Err(e) => e,
        };
        let want_status = Status::default()
            .set_code(Code::NotFound)
            .set_message("Advertiser 123 was not found.")
            .set_details([serde_json::json!({
                "@type": "type.googleapis.com/google.rpc.LocalizedMessage",
                "locale": "en-US",
                "message": "we searched everywhere, honest",
            })]);
        assert_eq!(err.status(), Some(&want_status));
        assert_eq!(err.http_status_code(), Some(404_u16));
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("application/json"));
        assert_eq!(err.http_headers(), Some(&want));
        Ok(())
    }

    #[tokio::test]
    #[test_case(reqwest::StatusCode::OK, "{}"; "200 with empty object")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, "{}"; "204 with empty object")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, ""; "204 with empty content")]
    async fn client_empty_content(code: reqwest::StatusCode, content: &str) -> TestResult {
        let response = resp_from_code_content(code, content)?;
        assert!(response.status().is_success());
        let body = super::to_http_response::<wkt::Empty>(response).await?;
        assert_eq!(body, wkt::Empty::default());
        Ok(())
    }

    #[tokio::test]
    #[test_case(reqwest::StatusCode::OK, ""; "200 with empty content")]
    #[test_case(reqwest::StatusCode::OK, "<html/>"; "200 with html")]
    async fn client_error_with_bad_content(code: reqwest::StatusCode, content: &str) -> TestResult {
        let response = resp_from_code_content(code, content)?;
        assert!(response.status().is_success());
        let response = super::to_http_response::<wkt::Empty>(response).await;
        assert!(
            matches!(&response, Err(e) if e.is_deserialization()),
            "{response:?}"
        );
        Ok(())
    }

    fn resp_from_code_content(
        code: reqwest::StatusCode,
        content: &str,
    ) -> http::Result<reqwest::Response> {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(code)
            .body(content.to_string())?;
        Ok(http_resp.into())
    }
}
