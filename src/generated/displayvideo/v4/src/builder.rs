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

/// The request builder for [DisplayVideo::list_advertisers][crate::client::DisplayVideo::list_advertisers] calls.
///
/// # Example
/// ```no_run
/// # use google_cloud_displayvideo_v4::builder::ListAdvertisers;
/// # tokio_test::block_on(async {
/// use gax::options::RequestOptionsBuilder;
/// # let client = google_cloud_displayvideo_v4::client::DisplayVideo::new().await?;
/// let builder: ListAdvertisers = client
///     .list_advertisers(123456789_i64)
///     .set_page_size(100)
///     .with_attempt_timeout(std::time::Duration::from_secs(10));
/// let response = builder.send().await?;
/// # anyhow::Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct ListAdvertisers {
    stub: ReqwestClient,
    request: model::advertisers::ListRequest,
    options: RequestOptions,
}

impl ListAdvertisers {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::advertisers::ListRequest::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::advertisers::ListRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> gax::Result<model::ListAdvertisersResponse> {
        let builder = self.stub.builder(reqwest::Method::GET, "/v4/advertisers".to_string());
        let builder = gaxi::query_parameter::add(builder, "partnerId", &self.request.partner_id);
        let builder = gaxi::query_parameter::add(builder, "pageSize", &self.request.page_size);
        let builder = gaxi::query_parameter::add(builder, "pageToken", &self.request.page_token);
        let builder = gaxi::query_parameter::add(builder, "orderBy", &self.request.order_by);
        let builder = gaxi::query_parameter::add(builder, "filter", &self.request.filter);
        let options =
            gax::options::internal::set_path_template(self.options, "/v4/advertisers");
        self.stub
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    /// Sets the value of [partner_id][model::advertisers::ListRequest::partner_id].
    pub fn set_partner_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.partner_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [partner_id][model::advertisers::ListRequest::partner_id].
    pub fn set_or_clear_partner_id<T: Into<i64>>(mut self, v: Option<T>) -> Self {
        self.request.partner_id = v.map(Into::into);
        self
    }

    /// Sets the value of [page_size][model::advertisers::ListRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.request.page_size = Some(v.into());
        self
    }

    /// Sets or clears the value of [page_size][model::advertisers::ListRequest::page_size].
    pub fn set_or_clear_page_size<T: Into<i32>>(mut self, v: Option<T>) -> Self {
        self.request.page_size = v.map(Into::into);
        self
    }

    /// Sets the value of [page_token][model::advertisers::ListRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.request.page_token = Some(v.into());
        self
    }

    /// Sets or clears the value of [page_token][model::advertisers::ListRequest::page_token].
    pub fn set_or_clear_page_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.request.page_token = v.map(Into::into);
        self
    }

    /// Sets the value of [order_by][model::advertisers::ListRequest::order_by].
    pub fn set_order_by<T: Into<String>>(mut self, v: T) -> Self {
        self.request.order_by = Some(v.into());
        self
    }

    /// Sets or clears the value of [order_by][model::advertisers::ListRequest::order_by].
    pub fn set_or_clear_order_by<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.request.order_by = v.map(Into::into);
        self
    }

    /// Sets the value of [filter][model::advertisers::ListRequest::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.request.filter = Some(v.into());
        self
    }

    /// Sets or clears the value of [filter][model::advertisers::ListRequest::filter].
    pub fn set_or_clear_filter<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.request.filter = v.map(Into::into);
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for ListAdvertisers {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [DisplayVideo::get_advertiser][crate::client::DisplayVideo::get_advertiser] calls.
#[derive(Clone, Debug)]
pub struct GetAdvertiser {
    stub: ReqwestClient,
    request: model::advertisers::GetRequest,
    options: RequestOptions,
}

impl GetAdvertiser {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::advertisers::GetRequest::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::advertisers::GetRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> gax::Result<model::Advertiser> {
        let path = format!("/v4/advertisers/{}", self.request.advertiser_id);
        let builder = self.stub.builder(reqwest::Method::GET, path);
        let options = gax::options::internal::set_path_template(
            self.options,
            "/v4/advertisers/{advertiserId}",
        );
        self.stub
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    /// Sets the value of [advertiser_id][model::advertisers::GetRequest::advertiser_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_advertiser_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.advertiser_id = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for GetAdvertiser {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [DisplayVideo::create_advertiser][crate::client::DisplayVideo::create_advertiser] calls.
#[derive(Clone, Debug)]
pub struct CreateAdvertiser {
    stub: ReqwestClient,
    request: model::advertisers::CreateRequest,
    options: RequestOptions,
}

impl CreateAdvertiser {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::advertisers::CreateRequest::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::advertisers::CreateRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> gax::Result<model::Advertiser> {
        let body = self
            .request
            .advertiser
            .ok_or_else(|| gaxi::path_parameter::missing("advertiser"))?;
        let builder = self.stub.builder(reqwest::Method::POST, "/v4/advertisers".to_string());
        let options =
            gax::options::internal::set_path_template(self.options, "/v4/advertisers");
        self.stub
            .execute(builder, Some(body), options)
            .await
    }

    /// Sets the value of [advertiser][model::advertisers::CreateRequest::advertiser].
    ///
    /// This is a **required** field for requests.
    pub fn set_advertiser<T: Into<model::Advertiser>>(mut self, v: T) -> Self {
        self.request.advertiser = Some(v.into());
        self
    }

    /// Sets or clears the value of [advertiser][model::advertisers::CreateRequest::advertiser].
    pub fn set_or_clear_advertiser<T: Into<model::Advertiser>>(mut self, v: Option<T>) -> Self {
        self.request.advertiser = v.map(Into::into);
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for CreateAdvertiser {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [DisplayVideo::patch_advertiser][crate::client::DisplayVideo::patch_advertiser] calls.
#[derive(Clone, Debug)]
pub struct PatchAdvertiser {
    stub: ReqwestClient,
    request: model::advertisers::PatchRequest,
    options: RequestOptions,
}

impl PatchAdvertiser {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::advertisers::PatchRequest::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::advertisers::PatchRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> gax::Result<model::Advertiser> {
        let advertiser_id = self
            .request
            .advertiser
            .as_ref()
            .and_then(|v| v.advertiser_id)
            .ok_or_else(|| gaxi::path_parameter::missing("advertiser.advertiser_id"))?;
        let path = format!("/v4/advertisers/{}", advertiser_id);
        let builder = self.stub.builder(reqwest::Method::PATCH, path);
        let builder = gaxi::query_parameter::add(builder, "updateMask", &self.request.update_mask);
        let options = gax::options::internal::set_path_template(
            self.options,
            "/v4/advertisers/{advertiser.advertiserId}",
        );
        self.stub
            .execute(builder, self.request.advertiser, options)
            .await
    }

    /// Sets the value of [update_mask][model::advertisers::PatchRequest::update_mask].
    pub fn set_update_mask<T: Into<String>>(mut self, v: T) -> Self {
        self.request.update_mask = Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][model::advertisers::PatchRequest::update_mask].
    pub fn set_or_clear_update_mask<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.request.update_mask = v.map(Into::into);
        self
    }

    /// Sets the value of [advertiser][model::advertisers::PatchRequest::advertiser].
    ///
    /// This is a **required** field for requests.
    pub fn set_advertiser<T: Into<model::Advertiser>>(mut self, v: T) -> Self {
        self.request.advertiser = Some(v.into());
        self
    }

    /// Sets or clears the value of [advertiser][model::advertisers::PatchRequest::advertiser].
    pub fn set_or_clear_advertiser<T: Into<model::Advertiser>>(mut self, v: Option<T>) -> Self {
        self.request.advertiser = v.map(Into::into);
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for PatchAdvertiser {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [DisplayVideo::delete_advertiser][crate::client::DisplayVideo::delete_advertiser] calls.
#[derive(Clone, Debug)]
pub struct DeleteAdvertiser {
    stub: ReqwestClient,
    request: model::advertisers::DeleteRequest,
    options: RequestOptions,
}

impl DeleteAdvertiser {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::advertisers::DeleteRequest::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::advertisers::DeleteRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> gax::Result<wkt::Empty> {
        let path = format!("/v4/advertisers/{}", self.request.advertiser_id);
        let builder = self.stub.builder(reqwest::Method::DELETE, path);
        let options = gax::options::internal::set_path_template(
            self.options,
            "/v4/advertisers/{advertiserId}",
        );
        self.stub
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    /// Sets the value of [advertiser_id][model::advertisers::DeleteRequest::advertiser_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_advertiser_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.advertiser_id = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for DeleteAdvertiser {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [DisplayVideo::audit_advertiser][crate::client::DisplayVideo::audit_advertiser] calls.
#[derive(Clone, Debug)]
pub struct AuditAdvertiser {
    stub: ReqwestClient,
    request: model::advertisers::AuditRequest,
    options: RequestOptions,
}

impl AuditAdvertiser {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::advertisers::AuditRequest::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::advertisers::AuditRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> gax::Result<model::AuditAdvertiserResponse> {
        let path = format!("/v4/advertisers/{}:audit", self.request.advertiser_id);
        let builder = self.stub.builder(reqwest::Method::GET, path);
        let builder = gaxi::query_parameter::add(builder, "readMask", &self.request.read_mask);
        let options = gax::options::internal::set_path_template(
            self.options,
            "/v4/advertisers/{advertiserId}:audit",
        );
        self.stub
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    /// Sets the value of [advertiser_id][model::advertisers::AuditRequest::advertiser_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_advertiser_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.advertiser_id = v.into();
        self
    }

    /// Sets the value of [read_mask][model::advertisers::AuditRequest::read_mask].
    pub fn set_read_mask<T: Into<String>>(mut self, v: T) -> Self {
        self.request.read_mask = Some(v.into());
        self
    }

    /// Sets or clears the value of [read_mask][model::advertisers::AuditRequest::read_mask].
    pub fn set_or_clear_read_mask<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.request.read_mask = v.map(Into::into);
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for AuditAdvertiser {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [DisplayVideo::list_campaigns][crate::client::DisplayVideo::list_campaigns] calls.
#[derive(Clone, Debug)]
pub struct ListCampaigns {
    stub: ReqwestClient,
    request: model::campaigns::ListRequest,
    options: RequestOptions,
}

impl ListCampaigns {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::campaigns::ListRequest::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::campaigns::ListRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> gax::Result<model::ListCampaignsResponse> {
        let path = format!("/v4/advertisers/{}/campaigns", self.request.advertiser_id);
        let builder = self.stub.builder(reqwest::Method::GET, path);
        let builder = gaxi::query_parameter::add(builder, "pageSize", &self.request.page_size);
        let builder = gaxi::query_parameter::add(builder, "pageToken", &self.request.page_token);
        let builder = gaxi::query_parameter::add(builder, "orderBy", &self.request.order_by);
        let builder = gaxi::query_parameter::add(builder, "filter", &self.request.filter);
        let options = gax::options::internal::set_path_template(
            self.options,
            "/v4/advertisers/{advertiserId}/campaigns",
        );
        self.stub
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    /// Sets the value of [advertiser_id][model::campaigns::ListRequest::advertiser_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_advertiser_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.advertiser_id = v.into();
        self
    }

    /// Sets the value of [page_size][model::campaigns::ListRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.request.page_size = Some(v.into());
        self
    }

    /// Sets or clears the value of [page_size][model::campaigns::ListRequest::page_size].
    pub fn set_or_clear_page_size<T: Into<i32>>(mut self, v: Option<T>) -> Self {
        self.request.page_size = v.map(Into::into);
        self
    }

    /// Sets the value of [page_token][model::campaigns::ListRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.request.page_token = Some(v.into());
        self
    }

    /// Sets or clears the value of [page_token][model::campaigns::ListRequest::page_token].
    pub fn set_or_clear_page_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.request.page_token = v.map(Into::into);
        self
    }

    /// Sets the value of [order_by][model::campaigns::ListRequest::order_by].
    pub fn set_order_by<T: Into<String>>(mut self, v: T) -> Self {
        self.request.order_by = Some(v.into());
        self
    }

    /// Sets or clears the value of [order_by][model::campaigns::ListRequest::order_by].
    pub fn set_or_clear_order_by<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.request.order_by = v.map(Into::into);
        self
    }

    /// Sets the value of [filter][model::campaigns::ListRequest::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.request.filter = Some(v.into());
        self
    }

    /// Sets or clears the value of [filter][model::campaigns::ListRequest::filter].
    pub fn set_or_clear_filter<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.request.filter = v.map(Into::into);
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for ListCampaigns {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [DisplayVideo::get_campaign][crate::client::DisplayVideo::get_campaign] calls.
#[derive(Clone, Debug)]
pub struct GetCampaign {
    stub: ReqwestClient,
    request: model::campaigns::GetRequest,
    options: RequestOptions,
}

impl GetCampaign {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::campaigns::GetRequest::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::campaigns::GetRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> gax::Result<model::Campaign> {
        let path = format!(
            "/v4/advertisers/{}/campaigns/{}",
            self.request.advertiser_id,
            self.request.campaign_id,
        );
        let builder = self.stub.builder(reqwest::Method::GET, path);
        let options = gax::options::internal::set_path_template(
            self.options,
            "/v4/advertisers/{advertiserId}/campaigns/{campaignId}",
        );
        self.stub
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    /// Sets the value of [advertiser_id][model::campaigns::GetRequest::advertiser_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_advertiser_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.advertiser_id = v.into();
        self
    }

    /// Sets the value of [campaign_id][model::campaigns::GetRequest::campaign_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_campaign_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.campaign_id = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for GetCampaign {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [DisplayVideo::create_campaign][crate::client::DisplayVideo::create_campaign] calls.
#[derive(Clone, Debug)]
pub struct CreateCampaign {
    stub: ReqwestClient,
    request: model::campaigns::CreateRequest,
    options: RequestOptions,
}

impl CreateCampaign {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::campaigns::CreateRequest::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::campaigns::CreateRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> gax::Result<model::Campaign> {
        let body = self
            .request
            .campaign
            .ok_or_else(|| gaxi::path_parameter::missing("campaign"))?;
        let path = format!("/v4/advertisers/{}/campaigns", self.request.advertiser_id);
        let builder = self.stub.builder(reqwest::Method::POST, path);
        let options = gax::options::internal::set_path_template(
            self.options,
            "/v4/advertisers/{advertiserId}/campaigns",
        );
        self.stub
            .execute(builder, Some(body), options)
            .await
    }

    /// Sets the value of [advertiser_id][model::campaigns::CreateRequest::advertiser_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_advertiser_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.advertiser_id = v.into();
        self
    }

    /// Sets the value of [campaign][model::campaigns::CreateRequest::campaign].
    ///
    /// This is a **required** field for requests.
    pub fn set_campaign<T: Into<model::Campaign>>(mut self, v: T) -> Self {
        self.request.campaign = Some(v.into());
        self
    }

    /// Sets or clears the value of [campaign][model::campaigns::CreateRequest::campaign].
    pub fn set_or_clear_campaign<T: Into<model::Campaign>>(mut self, v: Option<T>) -> Self {
        self.request.campaign = v.map(Into::into);
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for CreateCampaign {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [DisplayVideo::patch_campaign][crate::client::DisplayVideo::patch_campaign] calls.
#[derive(Clone, Debug)]
pub struct PatchCampaign {
    stub: ReqwestClient,
    request: model::campaigns::PatchRequest,
    options: RequestOptions,
}

impl PatchCampaign {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::campaigns::PatchRequest::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::campaigns::PatchRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> gax::Result<model::Campaign> {
        let campaign_id = self
            .request
            .campaign
            .as_ref()
            .and_then(|v| v.campaign_id)
            .ok_or_else(|| gaxi::path_parameter::missing("campaign.campaign_id"))?;
        let path = format!(
            "/v4/advertisers/{}/campaigns/{}",
            self.request.advertiser_id,
            campaign_id,
        );
        let builder = self.stub.builder(reqwest::Method::PATCH, path);
        let builder = gaxi::query_parameter::add(builder, "updateMask", &self.request.update_mask);
        let options = gax::options::internal::set_path_template(
            self.options,
            "/v4/advertisers/{advertiserId}/campaigns/{campaign.campaignId}",
        );
        self.stub
            .execute(builder, self.request.campaign, options)
            .await
    }

    /// Sets the value of [advertiser_id][model::campaigns::PatchRequest::advertiser_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_advertiser_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.advertiser_id = v.into();
        self
    }

    /// Sets the value of [update_mask][model::campaigns::PatchRequest::update_mask].
    pub fn set_update_mask<T: Into<String>>(mut self, v: T) -> Self {
        self.request.update_mask = Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][model::campaigns::PatchRequest::update_mask].
    pub fn set_or_clear_update_mask<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.request.update_mask = v.map(Into::into);
        self
    }

    /// Sets the value of [campaign][model::campaigns::PatchRequest::campaign].
    ///
    /// This is a **required** field for requests.
    pub fn set_campaign<T: Into<model::Campaign>>(mut self, v: T) -> Self {
        self.request.campaign = Some(v.into());
        self
    }

    /// Sets or clears the value of [campaign][model::campaigns::PatchRequest::campaign].
    pub fn set_or_clear_campaign<T: Into<model::Campaign>>(mut self, v: Option<T>) -> Self {
        self.request.campaign = v.map(Into::into);
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for PatchCampaign {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [DisplayVideo::delete_campaign][crate::client::DisplayVideo::delete_campaign] calls.
#[derive(Clone, Debug)]
pub struct DeleteCampaign {
    stub: ReqwestClient,
    request: model::campaigns::DeleteRequest,
    options: RequestOptions,
}

impl DeleteCampaign {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::campaigns::DeleteRequest::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::campaigns::DeleteRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> gax::Result<wkt::Empty> {
        let path = format!(
            "/v4/advertisers/{}/campaigns/{}",
            self.request.advertiser_id,
            self.request.campaign_id,
        );
        let builder = self.stub.builder(reqwest::Method::DELETE, path);
        let options = gax::options::internal::set_path_template(
            self.options,
            "/v4/advertisers/{advertiserId}/campaigns/{campaignId}",
        );
        self.stub
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    /// Sets the value of [advertiser_id][model::campaigns::DeleteRequest::advertiser_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_advertiser_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.advertiser_id = v.into();
        self
    }

    /// Sets the value of [campaign_id][model::campaigns::DeleteRequest::campaign_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_campaign_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.campaign_id = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for DeleteCampaign {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [DisplayVideo::list_line_items][crate::client::DisplayVideo::list_line_items] calls.
#[derive(Clone, Debug)]
pub struct ListLineItems {
    stub: ReqwestClient,
    request: model::line_items::ListRequest,
    options: RequestOptions,
}

impl ListLineItems {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::line_items::ListRequest::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::line_items::ListRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> gax::Result<model::ListLineItemsResponse> {
        let path = format!("/v4/advertisers/{}/lineItems", self.request.advertiser_id);
        let builder = self.stub.builder(reqwest::Method::GET, path);
        let builder = gaxi::query_parameter::add(builder, "pageSize", &self.request.page_size);
        let builder = gaxi::query_parameter::add(builder, "pageToken", &self.request.page_token);
        let builder = gaxi::query_parameter::add(builder, "orderBy", &self.request.order_by);
        let builder = gaxi::query_parameter::add(builder, "filter", &self.request.filter);
        let options = gax::options::internal::set_path_template(
            self.options,
            "/v4/advertisers/{advertiserId}/lineItems",
        );
        self.stub
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    /// Sets the value of [advertiser_id][model::line_items::ListRequest::advertiser_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_advertiser_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.advertiser_id = v.into();
        self
    }

    /// Sets the value of [page_size][model::line_items::ListRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.request.page_size = Some(v.into());
        self
    }

    /// Sets or clears the value of [page_size][model::line_items::ListRequest::page_size].
    pub fn set_or_clear_page_size<T: Into<i32>>(mut self, v: Option<T>) -> Self {
        self.request.page_size = v.map(Into::into);
        self
    }

    /// Sets the value of [page_token][model::line_items::ListRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.request.page_token = Some(v.into());
        self
    }

    /// Sets or clears the value of [page_token][model::line_items::ListRequest::page_token].
    pub fn set_or_clear_page_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.request.page_token = v.map(Into::into);
        self
    }

    /// Sets the value of [order_by][model::line_items::ListRequest::order_by].
    pub fn set_order_by<T: Into<String>>(mut self, v: T) -> Self {
        self.request.order_by = Some(v.into());
        self
    }

    /// Sets or clears the value of [order_by][model::line_items::ListRequest::order_by].
    pub fn set_or_clear_order_by<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.request.order_by = v.map(Into::into);
        self
    }

    /// Sets the value of [filter][model::line_items::ListRequest::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.request.filter = Some(v.into());
        self
    }

    /// Sets or clears the value of [filter][model::line_items::ListRequest::filter].
    pub fn set_or_clear_filter<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.request.filter = v.map(Into::into);
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for ListLineItems {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [DisplayVideo::get_line_item][crate::client::DisplayVideo::get_line_item] calls.
#[derive(Clone, Debug)]
pub struct GetLineItem {
    stub: ReqwestClient,
    request: model::line_items::GetRequest,
    options: RequestOptions,
}

impl GetLineItem {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::line_items::GetRequest::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::line_items::GetRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> gax::Result<model::LineItem> {
        let path = format!(
            "/v4/advertisers/{}/lineItems/{}",
            self.request.advertiser_id,
            self.request.line_item_id,
        );
        let builder = self.stub.builder(reqwest::Method::GET, path);
        let options = gax::options::internal::set_path_template(
            self.options,
            "/v4/advertisers/{advertiserId}/lineItems/{lineItemId}",
        );
        self.stub
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    /// Sets the value of [advertiser_id][model::line_items::GetRequest::advertiser_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_advertiser_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.advertiser_id = v.into();
        self
    }

    /// Sets the value of [line_item_id][model::line_items::GetRequest::line_item_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_line_item_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.line_item_id = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for GetLineItem {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [DisplayVideo::create_line_item][crate::client::DisplayVideo::create_line_item] calls.
#[derive(Clone, Debug)]
pub struct CreateLineItem {
    stub: ReqwestClient,
    request: model::line_items::CreateRequest,
    options: RequestOptions,
}

impl CreateLineItem {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::line_items::CreateRequest::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::line_items::CreateRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> gax::Result<model::LineItem> {
        let body = self
            .request
            .line_item
            .ok_or_else(|| gaxi::path_parameter::missing("line_item"))?;
        let path = format!("/v4/advertisers/{}/lineItems", self.request.advertiser_id);
        let builder = self.stub.builder(reqwest::Method::POST, path);
        let options = gax::options::internal::set_path_template(
            self.options,
            "/v4/advertisers/{advertiserId}/lineItems",
        );
        self.stub
            .execute(builder, Some(body), options)
            .await
    }

    /// Sets the value of [advertiser_id][model::line_items::CreateRequest::advertiser_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_advertiser_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.advertiser_id = v.into();
        self
    }

    /// Sets the value of [line_item][model::line_items::CreateRequest::line_item].
    ///
    /// This is a **required** field for requests.
    pub fn set_line_item<T: Into<model::LineItem>>(mut self, v: T) -> Self {
        self.request.line_item = Some(v.into());
        self
    }

    /// Sets or clears the value of [line_item][model::line_items::CreateRequest::line_item].
    pub fn set_or_clear_line_item<T: Into<model::LineItem>>(mut self, v: Option<T>) -> Self {
        self.request.line_item = v.map(Into::into);
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for CreateLineItem {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [DisplayVideo::patch_line_item][crate::client::DisplayVideo::patch_line_item] calls.
#[derive(Clone, Debug)]
pub struct PatchLineItem {
    stub: ReqwestClient,
    request: model::line_items::PatchRequest,
    options: RequestOptions,
}

impl PatchLineItem {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::line_items::PatchRequest::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::line_items::PatchRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> gax::Result<model::LineItem> {
        let line_item_id = self
            .request
            .line_item
            .as_ref()
            .and_then(|v| v.line_item_id)
            .ok_or_else(|| gaxi::path_parameter::missing("line_item.line_item_id"))?;
        let path = format!(
            "/v4/advertisers/{}/lineItems/{}",
            self.request.advertiser_id,
            line_item_id,
        );
        let builder = self.stub.builder(reqwest::Method::PATCH, path);
        let builder = gaxi::query_parameter::add(builder, "updateMask", &self.request.update_mask);
        let options = gax::options::internal::set_path_template(
            self.options,
            "/v4/advertisers/{advertiserId}/lineItems/{lineItem.lineItemId}",
        );
        self.stub
            .execute(builder, self.request.line_item, options)
            .await
    }

    /// Sets the value of [advertiser_id][model::line_items::PatchRequest::advertiser_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_advertiser_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.advertiser_id = v.into();
        self
    }

    /// Sets the value of [update_mask][model::line_items::PatchRequest::update_mask].
    pub fn set_update_mask<T: Into<String>>(mut self, v: T) -> Self {
        self.request.update_mask = Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][model::line_items::PatchRequest::update_mask].
    pub fn set_or_clear_update_mask<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.request.update_mask = v.map(Into::into);
        self
    }

    /// Sets the value of [line_item][model::line_items::PatchRequest::line_item].
    ///
    /// This is a **required** field for requests.
    pub fn set_line_item<T: Into<model::LineItem>>(mut self, v: T) -> Self {
        self.request.line_item = Some(v.into());
        self
    }

    /// Sets or clears the value of [line_item][model::line_items::PatchRequest::line_item].
    pub fn set_or_clear_line_item<T: Into<model::LineItem>>(mut self, v: Option<T>) -> Self {
        self.request.line_item = v.map(Into::into);
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for PatchLineItem {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [DisplayVideo::delete_line_item][crate::client::DisplayVideo::delete_line_item] calls.
#[derive(Clone, Debug)]
pub struct DeleteLineItem {
    stub: ReqwestClient,
    request: model::line_items::DeleteRequest,
    options: RequestOptions,
}

impl DeleteLineItem {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::line_items::DeleteRequest::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::line_items::DeleteRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> gax::Result<wkt::Empty> {
        let path = format!(
            "/v4/advertisers/{}/lineItems/{}",
            self.request.advertiser_id,
            self.request.line_item_id,
        );
        let builder = self.stub.builder(reqwest::Method::DELETE, path);
        let options = gax::options::internal::set_path_template(
            self.options,
            "/v4/advertisers/{advertiserId}/lineItems/{lineItemId}",
        );
        self.stub
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    /// Sets the value of [advertiser_id][model::line_items::DeleteRequest::advertiser_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_advertiser_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.advertiser_id = v.into();
        self
    }

    /// Sets the value of [line_item_id][model::line_items::DeleteRequest::line_item_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_line_item_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.line_item_id = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for DeleteLineItem {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [DisplayVideo::duplicate_line_item][crate::client::DisplayVideo::duplicate_line_item] calls.
#[derive(Clone, Debug)]
pub struct DuplicateLineItem {
    stub: ReqwestClient,
    request: model::line_items::DuplicateRequest,
    options: RequestOptions,
}

impl DuplicateLineItem {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::line_items::DuplicateRequest::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::line_items::DuplicateRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> gax::Result<model::DuplicateLineItemResponse> {
        let path = format!(
            "/v4/advertisers/{}/lineItems/{}:duplicate",
            self.request.advertiser_id,
            self.request.line_item_id,
        );
        let builder = self.stub.builder(reqwest::Method::POST, path);
        let options = gax::options::internal::set_path_template(
            self.options,
            "/v4/advertisers/{advertiserId}/lineItems/{lineItemId}:duplicate",
        );
        self.stub
            .execute(builder, Some(self.request.body.unwrap_or_default()), options)
            .await
    }

    /// Sets the value of [advertiser_id][model::line_items::DuplicateRequest::advertiser_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_advertiser_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.advertiser_id = v.into();
        self
    }

    /// Sets the value of [line_item_id][model::line_items::DuplicateRequest::line_item_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_line_item_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.line_item_id = v.into();
        self
    }

    /// Sets the value of [body][model::line_items::DuplicateRequest::body].
    pub fn set_body<T: Into<model::DuplicateLineItemRequest>>(mut self, v: T) -> Self {
        self.request.body = Some(v.into());
        self
    }

    /// Sets or clears the value of [body][model::line_items::DuplicateRequest::body].
    pub fn set_or_clear_body<T: Into<model::DuplicateLineItemRequest>>(mut self, v: Option<T>) -> Self {
        self.request.body = v.map(Into::into);
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for DuplicateLineItem {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [DisplayVideo::list_inventory_sources][crate::client::DisplayVideo::list_inventory_sources] calls.
#[derive(Clone, Debug)]
pub struct ListInventorySources {
    stub: ReqwestClient,
    request: model::inventory_sources::ListRequest,
    options: RequestOptions,
}

impl ListInventorySources {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::inventory_sources::ListRequest::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::inventory_sources::ListRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> gax::Result<model::ListInventorySourcesResponse> {
        let builder = self.stub.builder(reqwest::Method::GET, "/v4/inventorySources".to_string());
        let builder = gaxi::query_parameter::add(builder, "partnerId", &self.request.partner_id);
        let builder =
            gaxi::query_parameter::add(builder, "advertiserId", &self.request.advertiser_id);
        let builder = gaxi::query_parameter::add(builder, "pageSize", &self.request.page_size);
        let builder = gaxi::query_parameter::add(builder, "pageToken", &self.request.page_token);
        let builder = gaxi::query_parameter::add(builder, "orderBy", &self.request.order_by);
        let builder = gaxi::query_parameter::add(builder, "filter", &self.request.filter);
        let options =
            gax::options::internal::set_path_template(self.options, "/v4/inventorySources");
        self.stub
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    /// Sets the value of [partner_id][model::inventory_sources::ListRequest::partner_id].
    pub fn set_partner_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.partner_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [partner_id][model::inventory_sources::ListRequest::partner_id].
    pub fn set_or_clear_partner_id<T: Into<i64>>(mut self, v: Option<T>) -> Self {
        self.request.partner_id = v.map(Into::into);
        self
    }

    /// Sets the value of [advertiser_id][model::inventory_sources::ListRequest::advertiser_id].
    pub fn set_advertiser_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.advertiser_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [advertiser_id][model::inventory_sources::ListRequest::advertiser_id].
    pub fn set_or_clear_advertiser_id<T: Into<i64>>(mut self, v: Option<T>) -> Self {
        self.request.advertiser_id = v.map(Into::into);
        self
    }

    /// Sets the value of [page_size][model::inventory_sources::ListRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.request.page_size = Some(v.into());
        self
    }

    /// Sets or clears the value of [page_size][model::inventory_sources::ListRequest::page_size].
    pub fn set_or_clear_page_size<T: Into<i32>>(mut self, v: Option<T>) -> Self {
        self.request.page_size = v.map(Into::into);
        self
    }

    /// Sets the value of [page_token][model::inventory_sources::ListRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.request.page_token = Some(v.into());
        self
    }

    /// Sets or clears the value of [page_token][model::inventory_sources::ListRequest::page_token].
    pub fn set_or_clear_page_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.request.page_token = v.map(Into::into);
        self
    }

    /// Sets the value of [order_by][model::inventory_sources::ListRequest::order_by].
    pub fn set_order_by<T: Into<String>>(mut self, v: T) -> Self {
        self.request.order_by = Some(v.into());
        self
    }

    /// Sets or clears the value of [order_by][model::inventory_sources::ListRequest::order_by].
    pub fn set_or_clear_order_by<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.request.order_by = v.map(Into::into);
        self
    }

    /// Sets the value of [filter][model::inventory_sources::ListRequest::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.request.filter = Some(v.into());
        self
    }

    /// Sets or clears the value of [filter][model::inventory_sources::ListRequest::filter].
    pub fn set_or_clear_filter<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.request.filter = v.map(Into::into);
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for ListInventorySources {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [DisplayVideo::get_inventory_source][crate::client::DisplayVideo::get_inventory_source] calls.
#[derive(Clone, Debug)]
pub struct GetInventorySource {
    stub: ReqwestClient,
    request: model::inventory_sources::GetRequest,
    options: RequestOptions,
}

impl GetInventorySource {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::inventory_sources::GetRequest::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::inventory_sources::GetRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> gax::Result<model::InventorySource> {
        let path = format!("/v4/inventorySources/{}", self.request.inventory_source_id);
        let builder = self.stub.builder(reqwest::Method::GET, path);
        let builder = gaxi::query_parameter::add(builder, "partnerId", &self.request.partner_id);
        let builder =
            gaxi::query_parameter::add(builder, "advertiserId", &self.request.advertiser_id);
        let options = gax::options::internal::set_path_template(
            self.options,
            "/v4/inventorySources/{inventorySourceId}",
        );
        self.stub
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    /// Sets the value of [inventory_source_id][model::inventory_sources::GetRequest::inventory_source_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_inventory_source_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.inventory_source_id = v.into();
        self
    }

    /// Sets the value of [partner_id][model::inventory_sources::GetRequest::partner_id].
    pub fn set_partner_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.partner_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [partner_id][model::inventory_sources::GetRequest::partner_id].
    pub fn set_or_clear_partner_id<T: Into<i64>>(mut self, v: Option<T>) -> Self {
        self.request.partner_id = v.map(Into::into);
        self
    }

    /// Sets the value of [advertiser_id][model::inventory_sources::GetRequest::advertiser_id].
    pub fn set_advertiser_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.advertiser_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [advertiser_id][model::inventory_sources::GetRequest::advertiser_id].
    pub fn set_or_clear_advertiser_id<T: Into<i64>>(mut self, v: Option<T>) -> Self {
        self.request.advertiser_id = v.map(Into::into);
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for GetInventorySource {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [DisplayVideo::create_inventory_source][crate::client::DisplayVideo::create_inventory_source] calls.
#[derive(Clone, Debug)]
pub struct CreateInventorySource {
    stub: ReqwestClient,
    request: model::inventory_sources::CreateRequest,
    options: RequestOptions,
}

impl CreateInventorySource {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::inventory_sources::CreateRequest::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::inventory_sources::CreateRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> gax::Result<model::InventorySource> {
        let body = self
            .request
            .inventory_source
            .ok_or_else(|| gaxi::path_parameter::missing("inventory_source"))?;
        let builder = self.stub.builder(reqwest::Method::POST, "/v4/inventorySources".to_string());
        let builder = gaxi::query_parameter::add(builder, "partnerId", &self.request.partner_id);
        let builder =
            gaxi::query_parameter::add(builder, "advertiserId", &self.request.advertiser_id);
        let options =
            gax::options::internal::set_path_template(self.options, "/v4/inventorySources");
        self.stub
            .execute(builder, Some(body), options)
            .await
    }

    /// Sets the value of [partner_id][model::inventory_sources::CreateRequest::partner_id].
    pub fn set_partner_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.partner_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [partner_id][model::inventory_sources::CreateRequest::partner_id].
    pub fn set_or_clear_partner_id<T: Into<i64>>(mut self, v: Option<T>) -> Self {
        self.request.partner_id = v.map(Into::into);
        self
    }

    /// Sets the value of [advertiser_id][model::inventory_sources::CreateRequest::advertiser_id].
    pub fn set_advertiser_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.advertiser_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [advertiser_id][model::inventory_sources::CreateRequest::advertiser_id].
    pub fn set_or_clear_advertiser_id<T: Into<i64>>(mut self, v: Option<T>) -> Self {
        self.request.advertiser_id = v.map(Into::into);
        self
    }

    /// Sets the value of [inventory_source][model::inventory_sources::CreateRequest::inventory_source].
    ///
    /// This is a **required** field for requests.
    pub fn set_inventory_source<T: Into<model::InventorySource>>(mut self, v: T) -> Self {
        self.request.inventory_source = Some(v.into());
        self
    }

    /// Sets or clears the value of [inventory_source][model::inventory_sources::CreateRequest::inventory_source].
    pub fn set_or_clear_inventory_source<T: Into<model::InventorySource>>(mut self, v: Option<T>) -> Self {
        self.request.inventory_source = v.map(Into::into);
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for CreateInventorySource {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [DisplayVideo::patch_inventory_source][crate::client::DisplayVideo::patch_inventory_source] calls.
#[derive(Clone, Debug)]
pub struct PatchInventorySource {
    stub: ReqwestClient,
    request: model::inventory_sources::PatchRequest,
    options: RequestOptions,
}

impl PatchInventorySource {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::inventory_sources::PatchRequest::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::inventory_sources::PatchRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> gax::Result<model::InventorySource> {
        let inventory_source_id = self
            .request
            .inventory_source
            .as_ref()
            .and_then(|v| v.inventory_source_id)
            .ok_or_else(|| gaxi::path_parameter::missing("inventory_source.inventory_source_id"))?;
        let path = format!("/v4/inventorySources/{}", inventory_source_id);
        let builder = self.stub.builder(reqwest::Method::PATCH, path);
        let builder = gaxi::query_parameter::add(builder, "updateMask", &self.request.update_mask);
        let builder = gaxi::query_parameter::add(builder, "partnerId", &self.request.partner_id);
        let builder =
            gaxi::query_parameter::add(builder, "advertiserId", &self.request.advertiser_id);
        let options = gax::options::internal::set_path_template(
            self.options,
            "/v4/inventorySources/{inventorySource.inventorySourceId}",
        );
        self.stub
            .execute(builder, self.request.inventory_source, options)
            .await
    }

    /// Sets the value of [update_mask][model::inventory_sources::PatchRequest::update_mask].
    pub fn set_update_mask<T: Into<String>>(mut self, v: T) -> Self {
        self.request.update_mask = Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][model::inventory_sources::PatchRequest::update_mask].
    pub fn set_or_clear_update_mask<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.request.update_mask = v.map(Into::into);
        self
    }

    /// Sets the value of [partner_id][model::inventory_sources::PatchRequest::partner_id].
    pub fn set_partner_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.partner_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [partner_id][model::inventory_sources::PatchRequest::partner_id].
    pub fn set_or_clear_partner_id<T: Into<i64>>(mut self, v: Option<T>) -> Self {
        self.request.partner_id = v.map(Into::into);
        self
    }

    /// Sets the value of [advertiser_id][model::inventory_sources::PatchRequest::advertiser_id].
    pub fn set_advertiser_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.advertiser_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [advertiser_id][model::inventory_sources::PatchRequest::advertiser_id].
    pub fn set_or_clear_advertiser_id<T: Into<i64>>(mut self, v: Option<T>) -> Self {
        self.request.advertiser_id = v.map(Into::into);
        self
    }

    /// Sets the value of [inventory_source][model::inventory_sources::PatchRequest::inventory_source].
    ///
    /// This is a **required** field for requests.
    pub fn set_inventory_source<T: Into<model::InventorySource>>(mut self, v: T) -> Self {
        self.request.inventory_source = Some(v.into());
        self
    }

    /// Sets or clears the value of [inventory_source][model::inventory_sources::PatchRequest::inventory_source].
    pub fn set_or_clear_inventory_source<T: Into<model::InventorySource>>(mut self, v: Option<T>) -> Self {
        self.request.inventory_source = v.map(Into::into);
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for PatchInventorySource {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}
