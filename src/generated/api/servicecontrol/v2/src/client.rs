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

use crate::builder;
use gaxi::http::ReqwestClient;

/// Implements a client for the Service Control API.
///
/// # Example
/// ```no_run
/// # async fn sample() -> anyhow::Result<()> {
/// # use google_cloud_api_servicecontrol_v2::client::ServiceController;
/// use gax::credentials::access_token;
/// let client = ServiceController::builder()
///     .with_credentials(access_token::Builder::new("ya29.token").build())
///     .build()
///     .await?;
/// let response = client.report("displayvideo.googleapis.com").send().await?;
/// println!("{response:?}");
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// Service Control API v2. Private Preview. This feature is only available
/// for approved services. Managed services use it to check whether a request
/// is admitted, and to report the telemetry and audit logs of the requests
/// they serve.
///
/// # Configuration
///
/// To configure `ServiceController` use the `with_*` methods in the type
/// returned by [builder()][ServiceController::builder]. The default
/// configuration should work for most applications. Common configuration
/// changes include
///
/// * [with_endpoint()]: by default this client uses the global default
///   endpoint (`https://servicecontrol.googleapis.com`). Applications using
///   regional endpoints or running in restricted networks (e.g. a network
///   configured with [Private Google Access with VPC Service Controls]) may
///   want to override this default.
/// * [with_credentials()]: by default this client sends anonymous requests.
///
/// [with_endpoint()]: gax::client_builder::ClientBuilder::with_endpoint
/// [with_credentials()]: gax::client_builder::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `ServiceController` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `ServiceController`
/// in an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct ServiceController {
    inner: ReqwestClient,
}

impl ServiceController {
    /// Returns a builder for [ServiceController].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_api_servicecontrol_v2::client::ServiceController;
    /// let client = ServiceController::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> ClientBuilder {
        gax::client_builder::internal::new_builder(Factory)
    }

    /// Creates a new client with the default configuration.
    pub async fn new() -> gax::client_builder::Result<Self> {
        Self::builder().build().await
    }

    async fn from_config(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = ReqwestClient::new(config, crate::DEFAULT_ENDPOINT).await?;
        Ok(Self { inner })
    }

    /// Private Preview. This feature is only available for approved services.
    ///
    /// This method provides admission control for services that are
    /// integrated with Service Control. It checks whether an operation
    /// should be allowed based on the service configuration and relevant
    /// policies. It must be called before the operation is executed.
    ///
    /// If this method returns a `status` in the response, the caller must
    /// deny the operation.
    pub fn check(&self, service_name: impl Into<String>) -> builder::Check {
        builder::Check::new(self.inner.clone()).set_service_name(service_name)
    }

    /// Private Preview. This feature is only available for approved services.
    ///
    /// This method provides telemetry reporting for services that are
    /// integrated with Service Control. It reports a list of operations that
    /// have occurred on a service. It must be called after the operations
    /// have been executed.
    pub fn report(&self, service_name: impl Into<String>) -> builder::Report {
        builder::Report::new(self.inner.clone()).set_service_name(service_name)
    }
}

/// A builder for [ServiceController].
pub type ClientBuilder =
    gax::client_builder::ClientBuilder<Factory, gaxi::options::Credentials>;

#[doc(hidden)]
pub struct Factory;
impl gax::client_builder::internal::ClientFactory for Factory {
    type Client = ServiceController;
    type Credentials = gaxi::options::Credentials;
    async fn build(
        self,
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self::Client> {
        Self::Client::from_config(config).await
    }
}
