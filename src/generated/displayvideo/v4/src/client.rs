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

/// Implements a client for the Display & Video 360 API.
///
/// # Example
/// ```no_run
/// # async fn sample() -> anyhow::Result<()> {
/// # use google_cloud_displayvideo_v4::client::DisplayVideo;
/// use gax::credentials::access_token;
/// let client = DisplayVideo::builder()
///     .with_credentials(access_token::Builder::new("ya29.token").build())
///     .build()
///     .await?;
/// let advertiser = client.get_advertiser(123456789_i64).send().await?;
/// println!("{:?}", advertiser.display_name);
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// Display & Video 360 API allows users to automate complex Display & Video
/// 360 workflows, such as creating insertion orders and setting targeting
/// options for individual line items.
///
/// # Configuration
///
/// To configure `DisplayVideo` use the `with_*` methods in the type returned
/// by [builder()][DisplayVideo::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default
///   endpoint (`https://displayvideo.googleapis.com`). Applications running
///   behind a proxy, or tests using a local server, may want to override
///   this default.
/// * [with_credentials()]: by default this client sends anonymous requests,
///   which the service rejects. Most applications configure an OAuth2 access
///   token.
///
/// [with_endpoint()]: gax::client_builder::ClientBuilder::with_endpoint
/// [with_credentials()]: gax::client_builder::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `DisplayVideo` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `DisplayVideo` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct DisplayVideo {
    inner: ReqwestClient,
}

impl DisplayVideo {
    /// Returns a builder for [DisplayVideo].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_displayvideo_v4::client::DisplayVideo;
    /// let client = DisplayVideo::builder()
    ///     .with_endpoint("https://displayvideo.googleapis.com")
    ///     .build()
    ///     .await?;
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

    /// Lists advertisers that are accessible to the current user.
    ///
    /// The order is defined by the `order_by` parameter. A single `partner_id` is
    /// required. Cross-partner listing is not supported.
    pub fn list_advertisers(&self, partner_id: impl Into<i64>) -> builder::ListAdvertisers {
        builder::ListAdvertisers::new(self.inner.clone()).set_partner_id(partner_id)
    }

    /// Gets an advertiser.
    pub fn get_advertiser(&self, advertiser_id: impl Into<i64>) -> builder::GetAdvertiser {
        builder::GetAdvertiser::new(self.inner.clone()).set_advertiser_id(advertiser_id)
    }

    /// Creates a new advertiser.
    ///
    /// Returns the newly created advertiser if successful.
    pub fn create_advertiser(&self) -> builder::CreateAdvertiser {
        builder::CreateAdvertiser::new(self.inner.clone())
    }

    /// Updates an existing advertiser.
    ///
    /// The `advertiser_id` of the advertiser in the request selects the
    /// advertiser to update. Returns the updated advertiser if successful.
    pub fn patch_advertiser(&self) -> builder::PatchAdvertiser {
        builder::PatchAdvertiser::new(self.inner.clone())
    }

    /// Deletes an advertiser.
    ///
    /// Deleting an advertiser will delete all of its child resources, for
    /// example, campaigns, insertion orders and line items. A deleted advertiser
    /// cannot be recovered.
    pub fn delete_advertiser(&self, advertiser_id: impl Into<i64>) -> builder::DeleteAdvertiser {
        builder::DeleteAdvertiser::new(self.inner.clone()).set_advertiser_id(advertiser_id)
    }

    /// Audits an advertiser.
    ///
    /// Returns the counts of used entities per resource type under the
    /// advertiser provided. Used entities count towards their respective
    /// resource limit.
    pub fn audit_advertiser(&self, advertiser_id: impl Into<i64>) -> builder::AuditAdvertiser {
        builder::AuditAdvertiser::new(self.inner.clone()).set_advertiser_id(advertiser_id)
    }

    /// Lists the campaigns of an advertiser.
    ///
    /// The order is defined by the `order_by` parameter. If a `filter` by
    /// `entity_status` is not specified, campaigns with `ENTITY_STATUS_ARCHIVED`
    /// are not included in the results.
    pub fn list_campaigns(&self, advertiser_id: impl Into<i64>) -> builder::ListCampaigns {
        builder::ListCampaigns::new(self.inner.clone()).set_advertiser_id(advertiser_id)
    }

    /// Gets a campaign.
    pub fn get_campaign(
        &self,
        advertiser_id: impl Into<i64>,
        campaign_id: impl Into<i64>,
    ) -> builder::GetCampaign {
        builder::GetCampaign::new(self.inner.clone())
            .set_advertiser_id(advertiser_id)
            .set_campaign_id(campaign_id)
    }

    /// Creates a new campaign.
    ///
    /// Returns the newly created campaign if successful.
    pub fn create_campaign(&self, advertiser_id: impl Into<i64>) -> builder::CreateCampaign {
        builder::CreateCampaign::new(self.inner.clone()).set_advertiser_id(advertiser_id)
    }

    /// Updates an existing campaign.
    ///
    /// The `campaign_id` of the campaign in the request selects the campaign to
    /// update. Returns the updated campaign if successful.
    pub fn patch_campaign(&self, advertiser_id: impl Into<i64>) -> builder::PatchCampaign {
        builder::PatchCampaign::new(self.inner.clone()).set_advertiser_id(advertiser_id)
    }

    /// Permanently deletes a campaign.
    ///
    /// Deleted campaigns cannot be recovered. The campaign should be archived
    /// before it can be deleted.
    pub fn delete_campaign(
        &self,
        advertiser_id: impl Into<i64>,
        campaign_id: impl Into<i64>,
    ) -> builder::DeleteCampaign {
        builder::DeleteCampaign::new(self.inner.clone())
            .set_advertiser_id(advertiser_id)
            .set_campaign_id(campaign_id)
    }

    /// Lists the line items of an advertiser.
    ///
    /// The order is defined by the `order_by` parameter. If a `filter` by
    /// `entity_status` is not specified, line items with `ENTITY_STATUS_ARCHIVED`
    /// are not included in the results.
    pub fn list_line_items(&self, advertiser_id: impl Into<i64>) -> builder::ListLineItems {
        builder::ListLineItems::new(self.inner.clone()).set_advertiser_id(advertiser_id)
    }

    /// Gets a line item.
    pub fn get_line_item(
        &self,
        advertiser_id: impl Into<i64>,
        line_item_id: impl Into<i64>,
    ) -> builder::GetLineItem {
        builder::GetLineItem::new(self.inner.clone())
            .set_advertiser_id(advertiser_id)
            .set_line_item_id(line_item_id)
    }

    /// Creates a new line item.
    ///
    /// Returns the newly created line item if successful.
    pub fn create_line_item(&self, advertiser_id: impl Into<i64>) -> builder::CreateLineItem {
        builder::CreateLineItem::new(self.inner.clone()).set_advertiser_id(advertiser_id)
    }

    /// Updates an existing line item.
    ///
    /// The `line_item_id` of the line item in the request selects the line item to
    /// update. Returns the updated line item if successful.
    pub fn patch_line_item(&self, advertiser_id: impl Into<i64>) -> builder::PatchLineItem {
        builder::PatchLineItem::new(self.inner.clone()).set_advertiser_id(advertiser_id)
    }

    /// Permanently deletes a line item.
    ///
    /// Deleted line items cannot be recovered. The line item should be archived
    /// before it can be deleted.
    pub fn delete_line_item(
        &self,
        advertiser_id: impl Into<i64>,
        line_item_id: impl Into<i64>,
    ) -> builder::DeleteLineItem {
        builder::DeleteLineItem::new(self.inner.clone())
            .set_advertiser_id(advertiser_id)
            .set_line_item_id(line_item_id)
    }

    /// Duplicates a line item.
    ///
    /// Returns the ID of the created line item if successful.
    pub fn duplicate_line_item(
        &self,
        advertiser_id: impl Into<i64>,
        line_item_id: impl Into<i64>,
    ) -> builder::DuplicateLineItem {
        builder::DuplicateLineItem::new(self.inner.clone())
            .set_advertiser_id(advertiser_id)
            .set_line_item_id(line_item_id)
    }

    /// Lists inventory sources that are accessible to the current user.
    ///
    /// The order is defined by the `order_by` parameter. If a `filter` by
    /// `entity_status` is not specified, inventory sources with entity status
    /// `ENTITY_STATUS_ARCHIVED` are not included in the results.
    pub fn list_inventory_sources(&self) -> builder::ListInventorySources {
        builder::ListInventorySources::new(self.inner.clone())
    }

    /// Gets an inventory source.
    pub fn get_inventory_source(
        &self,
        inventory_source_id: impl Into<i64>,
    ) -> builder::GetInventorySource {
        builder::GetInventorySource::new(self.inner.clone())
            .set_inventory_source_id(inventory_source_id)
    }

    /// Creates a new inventory source.
    ///
    /// Returns the newly created inventory source if successful.
    pub fn create_inventory_source(&self) -> builder::CreateInventorySource {
        builder::CreateInventorySource::new(self.inner.clone())
    }

    /// Updates an existing inventory source.
    ///
    /// Returns the updated inventory source if successful.
    pub fn patch_inventory_source(&self) -> builder::PatchInventorySource {
        builder::PatchInventorySource::new(self.inner.clone())
    }
}

/// A builder for [DisplayVideo].
pub type ClientBuilder = gax::client_builder::ClientBuilder<Factory, gaxi::options::Credentials>;

#[doc(hidden)]
pub struct Factory;
impl gax::client_builder::internal::ClientFactory for Factory {
    type Client = DisplayVideo;
    type Credentials = gaxi::options::Credentials;
    async fn build(
        self,
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self::Client> {
        Self::Client::from_config(config).await
    }
}
