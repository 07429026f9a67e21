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

use crate::model;
use gax::options::RequestOptions;
use gaxi::http::ReqwestClient;

/// The request builder for [ServiceController::check][crate::client::ServiceController::check] calls.
///
/// # Example
/// ```no_run
/// # use google_cloud_api_servicecontrol_v2::builder::Check;
/// # tokio_test::block_on(async {
/// use gax::options::RequestOptionsBuilder;
/// # let client = google_cloud_api_servicecontrol_v2::client::ServiceController::new().await?;
/// let builder: Check = client
///     .check("displayvideo.googleapis.com")
///     .with_attempt_timeout(std::time::Duration::from_secs(5));
/// let response = builder.send().await?;
/// # anyhow::Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct Check {
    stub: ReqwestClient,
    request: model::CheckRequest,
    options: RequestOptions,
}

impl Check {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::CheckRequest::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::CheckRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> gax::Result<model::CheckResponse> {
        let service_name = self
            .request
            .service_name
            .as_deref()
            .ok_or_else(|| gaxi::path_parameter::missing("service_name"))?;
        let path = format!(
            "/v2/services/{}:check",
            gaxi::path_parameter::encode(service_name)
        );
        let builder = self.stub.builder(reqwest::Method::POST, path);
        let options = gax::options::internal::set_path_template(
            self.options,
            "/v2/services/{serviceName}:check",
        );
        self.stub
            .execute(builder, Some(self.request), options)
            .await
    }

    /// Sets the value of [service_name][model::CheckRequest::service_name].
    pub fn set_service_name<T: Into<String>>(mut self, v: T) -> Self {
        self.request.service_name = Some(v.into());
        self
    }

    /// Sets the value of [service_config_id][model::CheckRequest::service_config_id].
    pub fn set_service_config_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request.service_config_id = Some(v.into());
        self
    }

    /// Sets the value of [attributes][model::CheckRequest::attributes].
    pub fn set_attributes<T: Into<rpc_context::model::AttributeContext>>(mut self, v: T) -> Self {
        self.request.attributes = Some(v.into());
        self
    }

    /// Sets or clears the value of [attributes][model::CheckRequest::attributes].
    pub fn set_or_clear_attributes<T: Into<rpc_context::model::AttributeContext>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.request.attributes = v.map(Into::into);
        self
    }

    /// Sets the value of [resources][model::CheckRequest::resources].
    pub fn set_resources<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<model::ResourceInfo>,
    {
        self.request.resources = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [flags][model::CheckRequest::flags].
    pub fn set_flags<T: Into<String>>(mut self, v: T) -> Self {
        self.request.flags = Some(v.into());
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for Check {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [ServiceController::report][crate::client::ServiceController::report] calls.
#[derive(Clone, Debug)]
pub struct Report {
    stub: ReqwestClient,
    request: model::ReportRequest,
    options: RequestOptions,
}

impl Report {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::ReportRequest::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::ReportRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> gax::Result<model::ReportResponse> {
        let service_name = self
            .request
            .service_name
            .as_deref()
            .ok_or_else(|| gaxi::path_parameter::missing("service_name"))?;
        let path = format!(
            "/v2/services/{}:report",
            gaxi::path_parameter::encode(service_name)
        );
        let builder = self.stub.builder(reqwest::Method::POST, path);
        let options = gax::options::internal::set_path_template(
            self.options,
            "/v2/services/{serviceName}:report",
        );
        self.stub
            .execute(builder, Some(self.request), options)
            .await
    }

    /// Sets the value of [service_name][model::ReportRequest::service_name].
    pub fn set_service_name<T: Into<String>>(mut self, v: T) -> Self {
        self.request.service_name = Some(v.into());
        self
    }

    /// Sets the value of [service_config_id][model::ReportRequest::service_config_id].
    pub fn set_service_config_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request.service_config_id = Some(v.into());
        self
    }

    /// Sets the value of [operations][model::ReportRequest::operations].
    pub fn set_operations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<rpc_context::model::AttributeContext>,
    {
        self.request.operations = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for Report {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}
