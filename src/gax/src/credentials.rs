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

//! Authentication credentials for the client libraries.
//!
//! The clients do not acquire or refresh tokens. Applications obtain an
//! OAuth2 access token or an API key by other means, and configure the client
//! with the corresponding [Credentials]. Applications with more complex needs
//! implement [CredentialsProvider] and convert it into [Credentials].
//!
//! # Example
//! ```
//! # use google_cloud_gax::credentials::access_token;
//! # tokio_test::block_on(async {
//! let credentials = access_token::Builder::new("ya29.test-only").build();
//! let headers = credentials.headers().await?;
//! assert!(headers.contains_key(http::header::AUTHORIZATION));
//! # Ok::<(), google_cloud_gax::error::CredentialsError>(()) });
//! ```

use crate::error::CredentialsError;
use http::HeaderMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, CredentialsError>;

/// The credentials used to authenticate each request.
///
/// Credentials are shared across threads and cloned with the clients that
/// hold them, hence the `Arc`.
#[derive(Clone, Debug)]
pub struct Credentials {
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers to add to each request.
    pub async fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers().await
    }
}

/// Produces the authentication headers for a request.
///
/// Applications can implement this trait in mocks, or to refresh tokens from
/// their own token source.
pub trait CredentialsProvider: std::fmt::Debug {
    /// Asynchronously constructs the auth headers.
    fn headers(&self) -> impl Future<Output = Result<HeaderMap>> + Send;
}

pub(crate) mod dynamic {
    use super::{HeaderMap, Result};

    /// A dyn-compatible, crate-private version of `CredentialsProvider`.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        async fn headers(&self) -> Result<HeaderMap>;
    }

    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self) -> Result<HeaderMap> {
            T::headers(self).await
        }
    }
}

/// Credentials that add no headers.
pub mod anonymous {
    use super::*;

    #[derive(Debug)]
    struct Anonymous;

    impl CredentialsProvider for Anonymous {
        async fn headers(&self) -> Result<HeaderMap> {
            Ok(HeaderMap::new())
        }
    }

    /// Creates credentials that send requests without authentication.
    #[derive(Debug, Default)]
    pub struct Builder;

    impl Builder {
        pub fn new() -> Self {
            Self
        }

        pub fn build(self) -> Credentials {
            Credentials::from(Anonymous)
        }
    }
}

/// Credentials from an OAuth2 access token obtained by the application.
pub mod access_token {
    use super::*;
    use http::HeaderValue;

    struct AccessToken {
        token: String,
    }

    impl std::fmt::Debug for AccessToken {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("AccessToken")
                .field("token", &"[censored]")
                .finish()
        }
    }

    impl CredentialsProvider for AccessToken {
        async fn headers(&self) -> Result<HeaderMap> {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token))
                .map_err(|e| CredentialsError::new(false, e))?;
            value.set_sensitive(true);
            Ok(HeaderMap::from_iter([(http::header::AUTHORIZATION, value)]))
        }
    }

    /// Creates credentials sending `Authorization: Bearer {token}`.
    #[derive(Debug)]
    pub struct Builder {
        token: String,
    }

    impl Builder {
        pub fn new<T: Into<String>>(token: T) -> Self {
            Self {
                token: token.into(),
            }
        }

        pub fn build(self) -> Credentials {
            Credentials::from(AccessToken { token: self.token })
        }
    }
}

/// Credentials from an API key.
pub mod api_key {
    use super::*;
    use http::{HeaderName, HeaderValue};

    const API_KEY_HEADER: &str = "x-goog-api-key";

    struct ApiKey {
        key: String,
    }

    impl std::fmt::Debug for ApiKey {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("ApiKey").field("key", &"[censored]").finish()
        }
    }

    impl CredentialsProvider for ApiKey {
        async fn headers(&self) -> Result<HeaderMap> {
            let mut value =
                HeaderValue::from_str(&self.key).map_err(|e| CredentialsError::new(false, e))?;
            value.set_sensitive(true);
            Ok(HeaderMap::from_iter([(
                HeaderName::from_static(API_KEY_HEADER),
                value,
            )]))
        }
    }

    /// Creates credentials sending `x-goog-api-key: {key}`.
    #[derive(Debug)]
    pub struct Builder {
        key: String,
    }

    impl Builder {
        pub fn new<T: Into<String>>(key: T) -> Self {
            Self { key: key.into() }
        }

        pub fn build(self) -> Credentials {
            Credentials::from(ApiKey { key: self.key })
        }
    }
}
