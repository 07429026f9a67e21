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

//! Enumerated fields, such as `entity_status`, are represented as strings.
//! The service adds new values over time, and the strings round-trip values
//! this version of the library does not know about.

/// A single advertiser in Display & Video 360 (DV360).
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Advertiser {
    /// Output only. The resource name of the advertiser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Output only. The unique ID of the advertiser. Assigned by the system.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub advertiser_id: Option<i64>,

    /// Required. Immutable. The unique ID of the partner that the advertiser
    /// belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub partner_id: Option<i64>,

    /// Required. The display name of the advertiser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Required. Controls whether or not insertion orders and line items of the
    /// advertiser can spend their budgets and bid on inventory, for example
    /// `ENTITY_STATUS_ACTIVE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_status: Option<String>,

    /// Output only. The timestamp when the advertiser was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<wkt::Timestamp>,

    /// Required. General settings of the advertiser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_config: Option<AdvertiserGeneralConfig>,

    /// Required. Immutable. Ad server related settings of the advertiser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_server_config: Option<AdvertiserAdServerConfig>,

    /// Required. Creative related settings of the advertiser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creative_config: Option<AdvertiserCreativeConfig>,

    /// Integration details of the advertiser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_details: Option<IntegrationDetails>,

    /// Targeting settings related to ad serving of the advertiser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_config: Option<AdvertiserTargetingConfig>,

    /// Whether integration with Mediaocean (Prisma) is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prisma_enabled: Option<bool>,

    /// Required. Billing related settings of the advertiser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_config: Option<AdvertiserBillingConfig>,

    /// Whether this advertiser contains line items that serve European Union
    /// political ads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_eu_political_ads: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Advertiser {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][Advertiser::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [advertiser_id][Advertiser::advertiser_id].
    pub fn set_advertiser_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.advertiser_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [advertiser_id][Advertiser::advertiser_id].
    pub fn set_or_clear_advertiser_id<T: Into<i64>>(mut self, v: Option<T>) -> Self {
        self.advertiser_id = v.map(Into::into);
        self
    }

    /// Sets the value of [partner_id][Advertiser::partner_id].
    pub fn set_partner_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.partner_id = Some(v.into());
        self
    }

    /// Sets the value of [display_name][Advertiser::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [entity_status][Advertiser::entity_status].
    pub fn set_entity_status<T: Into<String>>(mut self, v: T) -> Self {
        self.entity_status = Some(v.into());
        self
    }

    /// Sets the value of [update_time][Advertiser::update_time].
    pub fn set_update_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.update_time = Some(v.into());
        self
    }

    /// Sets or clears the value of [update_time][Advertiser::update_time].
    pub fn set_or_clear_update_time<T: Into<wkt::Timestamp>>(mut self, v: Option<T>) -> Self {
        self.update_time = v.map(Into::into);
        self
    }

    /// Sets the value of [general_config][Advertiser::general_config].
    pub fn set_general_config<T: Into<AdvertiserGeneralConfig>>(mut self, v: T) -> Self {
        self.general_config = Some(v.into());
        self
    }

    /// Sets or clears the value of [general_config][Advertiser::general_config].
    pub fn set_or_clear_general_config<T: Into<AdvertiserGeneralConfig>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.general_config = v.map(Into::into);
        self
    }

    /// Sets the value of [ad_server_config][Advertiser::ad_server_config].
    pub fn set_ad_server_config<T: Into<AdvertiserAdServerConfig>>(mut self, v: T) -> Self {
        self.ad_server_config = Some(v.into());
        self
    }

    /// Sets the value of [creative_config][Advertiser::creative_config].
    pub fn set_creative_config<T: Into<AdvertiserCreativeConfig>>(mut self, v: T) -> Self {
        self.creative_config = Some(v.into());
        self
    }

    /// Sets the value of [integration_details][Advertiser::integration_details].
    pub fn set_integration_details<T: Into<IntegrationDetails>>(mut self, v: T) -> Self {
        self.integration_details = Some(v.into());
        self
    }

    /// Sets the value of [serving_config][Advertiser::serving_config].
    pub fn set_serving_config<T: Into<AdvertiserTargetingConfig>>(mut self, v: T) -> Self {
        self.serving_config = Some(v.into());
        self
    }

    /// Sets the value of [prisma_enabled][Advertiser::prisma_enabled].
    pub fn set_prisma_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.prisma_enabled = Some(v.into());
        self
    }

    /// Sets the value of [billing_config][Advertiser::billing_config].
    pub fn set_billing_config<T: Into<AdvertiserBillingConfig>>(mut self, v: T) -> Self {
        self.billing_config = Some(v.into());
        self
    }

    /// Sets the value of [contains_eu_political_ads][Advertiser::contains_eu_political_ads].
    pub fn set_contains_eu_political_ads<T: Into<String>>(mut self, v: T) -> Self {
        self.contains_eu_political_ads = Some(v.into());
        self
    }
}

/// General settings of an advertiser.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AdvertiserGeneralConfig {
    /// Required. The domain URL of the advertiser's primary website.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_url: Option<String>,

    /// Output only. The standard TZ database name of the advertiser's time
    /// zone, for example `America/New_York`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,

    /// Required. Immutable. Advertiser's currency in ISO 4217 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl AdvertiserGeneralConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [domain_url][AdvertiserGeneralConfig::domain_url].
    pub fn set_domain_url<T: Into<String>>(mut self, v: T) -> Self {
        self.domain_url = Some(v.into());
        self
    }

    /// Sets the value of [time_zone][AdvertiserGeneralConfig::time_zone].
    pub fn set_time_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.time_zone = Some(v.into());
        self
    }

    /// Sets the value of [currency_code][AdvertiserGeneralConfig::currency_code].
    pub fn set_currency_code<T: Into<String>>(mut self, v: T) -> Self {
        self.currency_code = Some(v.into());
        self
    }
}

/// Ad server related settings of an advertiser.
///
/// At most one of the configurations is set.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AdvertiserAdServerConfig {
    /// The configuration for advertisers that use third-party ad servers only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub third_party_only_config: Option<ThirdPartyOnlyConfig>,

    /// The configuration for advertisers that use both Campaign Manager 360
    /// (CM360) and third-party ad servers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cm_hybrid_config: Option<CmHybridConfig>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl AdvertiserAdServerConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [third_party_only_config][AdvertiserAdServerConfig::third_party_only_config].
    pub fn set_third_party_only_config<T: Into<ThirdPartyOnlyConfig>>(mut self, v: T) -> Self {
        self.third_party_only_config = Some(v.into());
        self
    }

    /// Sets the value of [cm_hybrid_config][AdvertiserAdServerConfig::cm_hybrid_config].
    pub fn set_cm_hybrid_config<T: Into<CmHybridConfig>>(mut self, v: T) -> Self {
        self.cm_hybrid_config = Some(v.into());
        self
    }
}

/// Settings for advertisers that use third-party ad servers only.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ThirdPartyOnlyConfig {
    /// Whether or not order ID reporting for pixels is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pixel_order_id_reporting_enabled: Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ThirdPartyOnlyConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [pixel_order_id_reporting_enabled][ThirdPartyOnlyConfig::pixel_order_id_reporting_enabled].
    pub fn set_pixel_order_id_reporting_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.pixel_order_id_reporting_enabled = Some(v.into());
        self
    }
}

/// Settings for advertisers that use both Campaign Manager 360 (CM360) and
/// third-party ad servers.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CmHybridConfig {
    /// Required. Immutable. Account ID of the CM360 Floodlight configuration
    /// linked with the DV360 advertiser.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub cm_account_id: Option<i64>,

    /// Required. Immutable. ID of the CM360 Floodlight configuration linked
    /// with the DV360 advertiser.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub cm_floodlight_config_id: Option<i64>,

    /// Output only. The set of CM360 Advertiser IDs sharing the CM360
    /// Floodlight configuration.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(as = "Vec<wkt::internal::I64>")]
    pub cm_advertiser_ids: Vec<i64>,

    /// Required. Immutable. By setting this field to `true`, you authorize
    /// the linking of the CM360 Floodlight configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cm_floodlight_linking_authorized: Option<bool>,

    /// A list of CM360 sites whose placements will be synced to DV360 as
    /// creatives.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(as = "Vec<wkt::internal::I64>")]
    pub cm_syncable_site_ids: Vec<i64>,

    /// Whether or not to report DV360 cost to CM360.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dv360_to_cm_cost_reporting_enabled: Option<bool>,

    /// Whether or not to include DV360 data in CM360 data transfer reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dv360_to_cm_data_sharing_enabled: Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl CmHybridConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [cm_account_id][CmHybridConfig::cm_account_id].
    pub fn set_cm_account_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.cm_account_id = Some(v.into());
        self
    }

    /// Sets the value of [cm_floodlight_config_id][CmHybridConfig::cm_floodlight_config_id].
    pub fn set_cm_floodlight_config_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.cm_floodlight_config_id = Some(v.into());
        self
    }

    /// Sets the value of [cm_advertiser_ids][CmHybridConfig::cm_advertiser_ids].
    pub fn set_cm_advertiser_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<i64>,
    {
        self.cm_advertiser_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [cm_floodlight_linking_authorized][CmHybridConfig::cm_floodlight_linking_authorized].
    pub fn set_cm_floodlight_linking_authorized<T: Into<bool>>(mut self, v: T) -> Self {
        self.cm_floodlight_linking_authorized = Some(v.into());
        self
    }

    /// Sets the value of [cm_syncable_site_ids][CmHybridConfig::cm_syncable_site_ids].
    pub fn set_cm_syncable_site_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<i64>,
    {
        self.cm_syncable_site_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [dv360_to_cm_cost_reporting_enabled][CmHybridConfig::dv360_to_cm_cost_reporting_enabled].
    pub fn set_dv360_to_cm_cost_reporting_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.dv360_to_cm_cost_reporting_enabled = Some(v.into());
        self
    }

    /// Sets the value of [dv360_to_cm_data_sharing_enabled][CmHybridConfig::dv360_to_cm_data_sharing_enabled].
    pub fn set_dv360_to_cm_data_sharing_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.dv360_to_cm_data_sharing_enabled = Some(v.into());
        self
    }
}

/// Creatives related settings of an advertiser.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AdvertiserCreativeConfig {
    /// An ID for configuring campaign monitoring provided by Integral Ad
    /// Service (IAS).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub ias_client_id: Option<i64>,

    /// Whether or not to disable Google's About this Ad feature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oba_compliance_disabled: Option<bool>,

    /// Whether or not the advertiser is enabled for dynamic creatives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_creative_enabled: Option<bool>,

    /// By setting this field to `true`, you, on behalf of your company,
    /// authorize Google to use video creatives associated with this DV360
    /// advertiser to provide reporting and features related to the
    /// advertiser's television campaigns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_creative_data_sharing_authorized: Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl AdvertiserCreativeConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [ias_client_id][AdvertiserCreativeConfig::ias_client_id].
    pub fn set_ias_client_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.ias_client_id = Some(v.into());
        self
    }

    /// Sets the value of [oba_compliance_disabled][AdvertiserCreativeConfig::oba_compliance_disabled].
    pub fn set_oba_compliance_disabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.oba_compliance_disabled = Some(v.into());
        self
    }

    /// Sets the value of [dynamic_creative_enabled][AdvertiserCreativeConfig::dynamic_creative_enabled].
    pub fn set_dynamic_creative_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.dynamic_creative_enabled = Some(v.into());
        self
    }

    /// Sets the value of [video_creative_data_sharing_authorized][AdvertiserCreativeConfig::video_creative_data_sharing_authorized].
    pub fn set_video_creative_data_sharing_authorized<T: Into<bool>>(mut self, v: T) -> Self {
        self.video_creative_data_sharing_authorized = Some(v.into());
        self
    }
}

/// Targeting settings related to ad serving of an advertiser.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AdvertiserTargetingConfig {
    /// Whether or not connected TV devices are exempt from viewability
    /// targeting for all video line items under the advertiser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exempt_tv_from_viewability_targeting: Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl AdvertiserTargetingConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [exempt_tv_from_viewability_targeting][AdvertiserTargetingConfig::exempt_tv_from_viewability_targeting].
    pub fn set_exempt_tv_from_viewability_targeting<T: Into<bool>>(mut self, v: T) -> Self {
        self.exempt_tv_from_viewability_targeting = Some(v.into());
        self
    }
}

/// Billing related settings of an advertiser.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AdvertiserBillingConfig {
    /// Required. The ID of a billing profile assigned to the advertiser.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub billing_profile_id: Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl AdvertiserBillingConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [billing_profile_id][AdvertiserBillingConfig::billing_profile_id].
    pub fn set_billing_profile_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.billing_profile_id = Some(v.into());
        self
    }
}

/// Integration details of an entry.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct IntegrationDetails {
    /// An external identifier to be associated with the entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_code: Option<String>,

    /// Additional details of the entry in string format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl IntegrationDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [integration_code][IntegrationDetails::integration_code].
    pub fn set_integration_code<T: Into<String>>(mut self, v: T) -> Self {
        self.integration_code = Some(v.into());
        self
    }

    /// Sets the value of [details][IntegrationDetails::details].
    pub fn set_details<T: Into<String>>(mut self, v: T) -> Self {
        self.details = Some(v.into());
        self
    }
}

/// A single campaign.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Campaign {
    /// Output only. The resource name of the campaign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Output only. The unique ID of the advertiser the campaign belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub advertiser_id: Option<i64>,

    /// Output only. The unique ID of the campaign. Assigned by the system.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub campaign_id: Option<i64>,

    /// Required. The display name of the campaign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Required. Controls whether or not the insertion orders under this
    /// campaign can spend their budgets and bid on inventory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_status: Option<String>,

    /// Output only. The timestamp when the campaign was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<wkt::Timestamp>,

    /// Required. The goal of the campaign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_goal: Option<CampaignGoal>,

    /// Required. The planned spend and duration of the campaign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_flight: Option<CampaignFlight>,

    /// Required. The frequency cap setting of the campaign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_cap: Option<FrequencyCap>,

    /// The list of budgets available to this campaign.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub campaign_budgets: Vec<CampaignBudget>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Campaign {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][Campaign::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [advertiser_id][Campaign::advertiser_id].
    pub fn set_advertiser_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.advertiser_id = Some(v.into());
        self
    }

    /// Sets the value of [campaign_id][Campaign::campaign_id].
    pub fn set_campaign_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.campaign_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [campaign_id][Campaign::campaign_id].
    pub fn set_or_clear_campaign_id<T: Into<i64>>(mut self, v: Option<T>) -> Self {
        self.campaign_id = v.map(Into::into);
        self
    }

    /// Sets the value of [display_name][Campaign::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [entity_status][Campaign::entity_status].
    pub fn set_entity_status<T: Into<String>>(mut self, v: T) -> Self {
        self.entity_status = Some(v.into());
        self
    }

    /// Sets the value of [update_time][Campaign::update_time].
    pub fn set_update_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.update_time = Some(v.into());
        self
    }

    /// Sets or clears the value of [update_time][Campaign::update_time].
    pub fn set_or_clear_update_time<T: Into<wkt::Timestamp>>(mut self, v: Option<T>) -> Self {
        self.update_time = v.map(Into::into);
        self
    }

    /// Sets the value of [campaign_goal][Campaign::campaign_goal].
    pub fn set_campaign_goal<T: Into<CampaignGoal>>(mut self, v: T) -> Self {
        self.campaign_goal = Some(v.into());
        self
    }

    /// Sets the value of [campaign_flight][Campaign::campaign_flight].
    pub fn set_campaign_flight<T: Into<CampaignFlight>>(mut self, v: T) -> Self {
        self.campaign_flight = Some(v.into());
        self
    }

    /// Sets the value of [frequency_cap][Campaign::frequency_cap].
    pub fn set_frequency_cap<T: Into<FrequencyCap>>(mut self, v: T) -> Self {
        self.frequency_cap = Some(v.into());
        self
    }

    /// Sets the value of [campaign_budgets][Campaign::campaign_budgets].
    pub fn set_campaign_budgets<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<CampaignBudget>,
    {
        self.campaign_budgets = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Settings that control the goal of a campaign.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CampaignGoal {
    /// Required. The type of the campaign goal, for example
    /// `CAMPAIGN_GOAL_TYPE_BRAND_AWARENESS`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_goal_type: Option<String>,

    /// Required. The performance goal of the campaign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_goal: Option<PerformanceGoal>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl CampaignGoal {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [campaign_goal_type][CampaignGoal::campaign_goal_type].
    pub fn set_campaign_goal_type<T: Into<String>>(mut self, v: T) -> Self {
        self.campaign_goal_type = Some(v.into());
        self
    }

    /// Sets the value of [performance_goal][CampaignGoal::performance_goal].
    pub fn set_performance_goal<T: Into<PerformanceGoal>>(mut self, v: T) -> Self {
        self.performance_goal = Some(v.into());
        self
    }
}

/// Settings that control the performance goal of a campaign.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PerformanceGoal {
    /// Required. The type of the performance goal, for example
    /// `PERFORMANCE_GOAL_TYPE_CPM`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_goal_type: Option<String>,

    /// The goal amount, in micros of the advertiser's currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub performance_goal_amount_micros: Option<i64>,

    /// The decimal representation of the goal percentage in micros.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub performance_goal_percentage_micros: Option<i64>,

    /// A key performance indicator (KPI) string, which can be empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_goal_string: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl PerformanceGoal {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [performance_goal_type][PerformanceGoal::performance_goal_type].
    pub fn set_performance_goal_type<T: Into<String>>(mut self, v: T) -> Self {
        self.performance_goal_type = Some(v.into());
        self
    }

    /// Sets the value of [performance_goal_amount_micros][PerformanceGoal::performance_goal_amount_micros].
    pub fn set_performance_goal_amount_micros<T: Into<i64>>(mut self, v: T) -> Self {
        self.performance_goal_amount_micros = Some(v.into());
        self
    }

    /// Sets the value of [performance_goal_percentage_micros][PerformanceGoal::performance_goal_percentage_micros].
    pub fn set_performance_goal_percentage_micros<T: Into<i64>>(mut self, v: T) -> Self {
        self.performance_goal_percentage_micros = Some(v.into());
        self
    }

    /// Sets the value of [performance_goal_string][PerformanceGoal::performance_goal_string].
    pub fn set_performance_goal_string<T: Into<String>>(mut self, v: T) -> Self {
        self.performance_goal_string = Some(v.into());
        self
    }
}

/// Settings that track the planned spend and duration of a campaign.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CampaignFlight {
    /// The amount the campaign is expected to spend, in micros.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub planned_spend_amount_micros: Option<i64>,

    /// Required. The dates that the campaign is expected to run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_dates: Option<DateRange>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl CampaignFlight {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [planned_spend_amount_micros][CampaignFlight::planned_spend_amount_micros].
    pub fn set_planned_spend_amount_micros<T: Into<i64>>(mut self, v: T) -> Self {
        self.planned_spend_amount_micros = Some(v.into());
        self
    }

    /// Sets the value of [planned_dates][CampaignFlight::planned_dates].
    pub fn set_planned_dates<T: Into<DateRange>>(mut self, v: T) -> Self {
        self.planned_dates = Some(v.into());
        self
    }
}

/// Settings that control how a campaign budget is allocated.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CampaignBudget {
    /// The unique ID of the campaign budget. Assigned by the system.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub budget_id: Option<i64>,

    /// Required. The display name of the budget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Required. Immutable. Specifies whether the budget is measured in
    /// currency or impressions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_unit: Option<String>,

    /// Required. The total amount the linked insertion order segments can
    /// budget, in micros.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub budget_amount_micros: Option<i64>,

    /// Required. The date range for the campaign budget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,

    /// Required. The external source of the budget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_budget_source: Option<String>,

    /// Immutable. The ID identifying this budget to the external source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_budget_id: Option<String>,

    /// Immutable. The ID used to group budgets to be included in the same
    /// invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_grouping_id: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl CampaignBudget {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [budget_id][CampaignBudget::budget_id].
    pub fn set_budget_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.budget_id = Some(v.into());
        self
    }

    /// Sets the value of [display_name][CampaignBudget::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [budget_unit][CampaignBudget::budget_unit].
    pub fn set_budget_unit<T: Into<String>>(mut self, v: T) -> Self {
        self.budget_unit = Some(v.into());
        self
    }

    /// Sets the value of [budget_amount_micros][CampaignBudget::budget_amount_micros].
    pub fn set_budget_amount_micros<T: Into<i64>>(mut self, v: T) -> Self {
        self.budget_amount_micros = Some(v.into());
        self
    }

    /// Sets the value of [date_range][CampaignBudget::date_range].
    pub fn set_date_range<T: Into<DateRange>>(mut self, v: T) -> Self {
        self.date_range = Some(v.into());
        self
    }

    /// Sets the value of [external_budget_source][CampaignBudget::external_budget_source].
    pub fn set_external_budget_source<T: Into<String>>(mut self, v: T) -> Self {
        self.external_budget_source = Some(v.into());
        self
    }

    /// Sets the value of [external_budget_id][CampaignBudget::external_budget_id].
    pub fn set_external_budget_id<T: Into<String>>(mut self, v: T) -> Self {
        self.external_budget_id = Some(v.into());
        self
    }

    /// Sets the value of [invoice_grouping_id][CampaignBudget::invoice_grouping_id].
    pub fn set_invoice_grouping_id<T: Into<String>>(mut self, v: T) -> Self {
        self.invoice_grouping_id = Some(v.into());
        self
    }
}

/// Settings that control the number of times a user may be shown with the
/// same ad during a given time period.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FrequencyCap {
    /// Whether unlimited frequency capping is applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlimited: Option<bool>,

    /// The time unit in which the frequency cap will be applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_unit: Option<String>,

    /// The number of `time_unit` the frequency cap will last.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_unit_count: Option<i32>,

    /// The maximum number of times a user may be shown the same ad during
    /// this period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_impressions: Option<i32>,

    /// The maximum number of times a user may click-through or fully view an
    /// ad during this period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_views: Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl FrequencyCap {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [unlimited][FrequencyCap::unlimited].
    pub fn set_unlimited<T: Into<bool>>(mut self, v: T) -> Self {
        self.unlimited = Some(v.into());
        self
    }

    /// Sets the value of [time_unit][FrequencyCap::time_unit].
    pub fn set_time_unit<T: Into<String>>(mut self, v: T) -> Self {
        self.time_unit = Some(v.into());
        self
    }

    /// Sets the value of [time_unit_count][FrequencyCap::time_unit_count].
    pub fn set_time_unit_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.time_unit_count = Some(v.into());
        self
    }

    /// Sets the value of [max_impressions][FrequencyCap::max_impressions].
    pub fn set_max_impressions<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_impressions = Some(v.into());
        self
    }

    /// Sets the value of [max_views][FrequencyCap::max_views].
    pub fn set_max_views<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_views = Some(v.into());
        self
    }
}

/// A single line item.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LineItem {
    /// Output only. The resource name of the line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Output only. The unique ID of the advertiser the line item belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub advertiser_id: Option<i64>,

    /// Output only. The unique ID of the campaign that the line item belongs
    /// to.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub campaign_id: Option<i64>,

    /// Required. Immutable. The unique ID of the insertion order that the line
    /// item belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub insertion_order_id: Option<i64>,

    /// Output only. The unique ID of the line item. Assigned by the system.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub line_item_id: Option<i64>,

    /// Required. The display name of the line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Required. Immutable. The type of the line item, for example
    /// `LINE_ITEM_TYPE_DISPLAY_DEFAULT`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_item_type: Option<String>,

    /// Required. Controls whether or not the line item can spend its budget
    /// and bid on inventory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_status: Option<String>,

    /// Output only. The timestamp when the line item was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<wkt::Timestamp>,

    /// The partner costs associated with the line item.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub partner_costs: Vec<PartnerCost>,

    /// Required. The start and end time of the line item's flight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight: Option<LineItemFlight>,

    /// Required. The budget allocation setting of the line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<LineItemBudget>,

    /// Required. The budget spending speed setting of the line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pacing: Option<Pacing>,

    /// Required. The impression frequency cap settings of the line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_cap: Option<FrequencyCap>,

    /// Required. The partner revenue model setting of the line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_revenue_model: Option<PartnerRevenueModel>,

    /// The IDs of the creatives associated with the line item.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(as = "Vec<wkt::internal::I64>")]
    pub creative_ids: Vec<i64>,

    /// Required. The bidding strategy of the line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid_strategy: Option<BiddingStrategy>,

    /// Integration details of the line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_details: Option<IntegrationDetails>,

    /// Output only. The warning messages generated by the line item.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warning_messages: Vec<String>,

    /// Output only. The reservation type of the line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_type: Option<String>,

    /// Whether to exclude new exchanges from automatically being targeted by
    /// the line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_new_exchanges: Option<bool>,

    /// Whether this line item will serve European Union political ads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_eu_political_ads: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl LineItem {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][LineItem::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [advertiser_id][LineItem::advertiser_id].
    pub fn set_advertiser_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.advertiser_id = Some(v.into());
        self
    }

    /// Sets the value of [campaign_id][LineItem::campaign_id].
    pub fn set_campaign_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.campaign_id = Some(v.into());
        self
    }

    /// Sets the value of [insertion_order_id][LineItem::insertion_order_id].
    pub fn set_insertion_order_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.insertion_order_id = Some(v.into());
        self
    }

    /// Sets the value of [line_item_id][LineItem::line_item_id].
    pub fn set_line_item_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.line_item_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [line_item_id][LineItem::line_item_id].
    pub fn set_or_clear_line_item_id<T: Into<i64>>(mut self, v: Option<T>) -> Self {
        self.line_item_id = v.map(Into::into);
        self
    }

    /// Sets the value of [display_name][LineItem::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [line_item_type][LineItem::line_item_type].
    pub fn set_line_item_type<T: Into<String>>(mut self, v: T) -> Self {
        self.line_item_type = Some(v.into());
        self
    }

    /// Sets the value of [entity_status][LineItem::entity_status].
    pub fn set_entity_status<T: Into<String>>(mut self, v: T) -> Self {
        self.entity_status = Some(v.into());
        self
    }

    /// Sets the value of [update_time][LineItem::update_time].
    pub fn set_update_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.update_time = Some(v.into());
        self
    }

    /// Sets the value of [partner_costs][LineItem::partner_costs].
    pub fn set_partner_costs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<PartnerCost>,
    {
        self.partner_costs = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [flight][LineItem::flight].
    pub fn set_flight<T: Into<LineItemFlight>>(mut self, v: T) -> Self {
        self.flight = Some(v.into());
        self
    }

    /// Sets the value of [budget][LineItem::budget].
    pub fn set_budget<T: Into<LineItemBudget>>(mut self, v: T) -> Self {
        self.budget = Some(v.into());
        self
    }

    /// Sets the value of [pacing][LineItem::pacing].
    pub fn set_pacing<T: Into<Pacing>>(mut self, v: T) -> Self {
        self.pacing = Some(v.into());
        self
    }

    /// Sets the value of [frequency_cap][LineItem::frequency_cap].
    pub fn set_frequency_cap<T: Into<FrequencyCap>>(mut self, v: T) -> Self {
        self.frequency_cap = Some(v.into());
        self
    }

    /// Sets the value of [partner_revenue_model][LineItem::partner_revenue_model].
    pub fn set_partner_revenue_model<T: Into<PartnerRevenueModel>>(mut self, v: T) -> Self {
        self.partner_revenue_model = Some(v.into());
        self
    }

    /// Sets the value of [creative_ids][LineItem::creative_ids].
    pub fn set_creative_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<i64>,
    {
        self.creative_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [bid_strategy][LineItem::bid_strategy].
    pub fn set_bid_strategy<T: Into<BiddingStrategy>>(mut self, v: T) -> Self {
        self.bid_strategy = Some(v.into());
        self
    }

    /// Sets the value of [integration_details][LineItem::integration_details].
    pub fn set_integration_details<T: Into<IntegrationDetails>>(mut self, v: T) -> Self {
        self.integration_details = Some(v.into());
        self
    }

    /// Sets the value of [warning_messages][LineItem::warning_messages].
    pub fn set_warning_messages<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.warning_messages = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [reservation_type][LineItem::reservation_type].
    pub fn set_reservation_type<T: Into<String>>(mut self, v: T) -> Self {
        self.reservation_type = Some(v.into());
        self
    }

    /// Sets the value of [exclude_new_exchanges][LineItem::exclude_new_exchanges].
    pub fn set_exclude_new_exchanges<T: Into<bool>>(mut self, v: T) -> Self {
        self.exclude_new_exchanges = Some(v.into());
        self
    }

    /// Sets the value of [contains_eu_political_ads][LineItem::contains_eu_political_ads].
    pub fn set_contains_eu_political_ads<T: Into<String>>(mut self, v: T) -> Self {
        self.contains_eu_political_ads = Some(v.into());
        self
    }
}

/// Settings that control a partner cost.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PartnerCost {
    /// Required. The type of the partner cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_type: Option<String>,

    /// Required. The fee type for this partner cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_type: Option<String>,

    /// The invoice type for this partner cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_type: Option<String>,

    /// The CPM fee amount in micros of the advertiser's currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub fee_amount: Option<i64>,

    /// The media fee percentage in millis (1/1000 of a percent).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub fee_percentage_millis: Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl PartnerCost {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [cost_type][PartnerCost::cost_type].
    pub fn set_cost_type<T: Into<String>>(mut self, v: T) -> Self {
        self.cost_type = Some(v.into());
        self
    }

    /// Sets the value of [fee_type][PartnerCost::fee_type].
    pub fn set_fee_type<T: Into<String>>(mut self, v: T) -> Self {
        self.fee_type = Some(v.into());
        self
    }

    /// Sets the value of [invoice_type][PartnerCost::invoice_type].
    pub fn set_invoice_type<T: Into<String>>(mut self, v: T) -> Self {
        self.invoice_type = Some(v.into());
        self
    }

    /// Sets the value of [fee_amount][PartnerCost::fee_amount].
    pub fn set_fee_amount<T: Into<i64>>(mut self, v: T) -> Self {
        self.fee_amount = Some(v.into());
        self
    }

    /// Sets the value of [fee_percentage_millis][PartnerCost::fee_percentage_millis].
    pub fn set_fee_percentage_millis<T: Into<i64>>(mut self, v: T) -> Self {
        self.fee_percentage_millis = Some(v.into());
        self
    }
}

/// Settings that control the active duration of a line item.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LineItemFlight {
    /// Required. The type of the line item's flight dates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_date_type: Option<String>,

    /// The flight start and end dates of the line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl LineItemFlight {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [flight_date_type][LineItemFlight::flight_date_type].
    pub fn set_flight_date_type<T: Into<String>>(mut self, v: T) -> Self {
        self.flight_date_type = Some(v.into());
        self
    }

    /// Sets the value of [date_range][LineItemFlight::date_range].
    pub fn set_date_range<T: Into<DateRange>>(mut self, v: T) -> Self {
        self.date_range = Some(v.into());
        self
    }
}

/// Settings that control how budget is allocated.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LineItemBudget {
    /// Required. The type of the budget allocation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_allocation_type: Option<String>,

    /// Output only. The budget unit specifies whether the budget is currency
    /// based or impression based.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_unit: Option<String>,

    /// The maximum budget amount the line item will spend, in micros.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub max_amount: Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl LineItemBudget {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [budget_allocation_type][LineItemBudget::budget_allocation_type].
    pub fn set_budget_allocation_type<T: Into<String>>(mut self, v: T) -> Self {
        self.budget_allocation_type = Some(v.into());
        self
    }

    /// Sets the value of [budget_unit][LineItemBudget::budget_unit].
    pub fn set_budget_unit<T: Into<String>>(mut self, v: T) -> Self {
        self.budget_unit = Some(v.into());
        self
    }

    /// Sets the value of [max_amount][LineItemBudget::max_amount].
    pub fn set_max_amount<T: Into<i64>>(mut self, v: T) -> Self {
        self.max_amount = Some(v.into());
        self
    }
}

/// Settings that control the rate at which a budget is spent.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Pacing {
    /// Required. The time period in which the pacing budget will be spent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pacing_period: Option<String>,

    /// Required. The type of pacing that defines how the budget amount will
    /// be spent across the `pacing_period`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pacing_type: Option<String>,

    /// Maximum currency amount to spend every day in micros of advertiser's
    /// currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub daily_max_micros: Option<i64>,

    /// Maximum number of impressions to serve every day.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub daily_max_impressions: Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Pacing {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [pacing_period][Pacing::pacing_period].
    pub fn set_pacing_period<T: Into<String>>(mut self, v: T) -> Self {
        self.pacing_period = Some(v.into());
        self
    }

    /// Sets the value of [pacing_type][Pacing::pacing_type].
    pub fn set_pacing_type<T: Into<String>>(mut self, v: T) -> Self {
        self.pacing_type = Some(v.into());
        self
    }

    /// Sets the value of [daily_max_micros][Pacing::daily_max_micros].
    pub fn set_daily_max_micros<T: Into<i64>>(mut self, v: T) -> Self {
        self.daily_max_micros = Some(v.into());
        self
    }

    /// Sets the value of [daily_max_impressions][Pacing::daily_max_impressions].
    pub fn set_daily_max_impressions<T: Into<i64>>(mut self, v: T) -> Self {
        self.daily_max_impressions = Some(v.into());
        self
    }
}

/// Settings that control how partner revenue is calculated.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PartnerRevenueModel {
    /// Required. The markup type of the partner revenue model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markup_type: Option<String>,

    /// Required. The markup amount of the partner revenue model.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub markup_amount: Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl PartnerRevenueModel {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [markup_type][PartnerRevenueModel::markup_type].
    pub fn set_markup_type<T: Into<String>>(mut self, v: T) -> Self {
        self.markup_type = Some(v.into());
        self
    }

    /// Sets the value of [markup_amount][PartnerRevenueModel::markup_amount].
    pub fn set_markup_amount<T: Into<i64>>(mut self, v: T) -> Self {
        self.markup_amount = Some(v.into());
        self
    }
}

/// Settings that determine the bid strategy.
///
/// At most one of the strategies is set.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BiddingStrategy {
    /// A strategy that uses a fixed bid price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_bid: Option<FixedBidStrategy>,

    /// A strategy that automatically adjusts the bid to optimize to your
    /// performance goal while spending the full budget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximize_spend_auto_bid: Option<MaximizeSpendBidStrategy>,

    /// A strategy that automatically adjusts the bid to meet or beat a
    /// specified performance goal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_goal_auto_bid: Option<PerformanceGoalBidStrategy>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl BiddingStrategy {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [fixed_bid][BiddingStrategy::fixed_bid].
    pub fn set_fixed_bid<T: Into<FixedBidStrategy>>(mut self, v: T) -> Self {
        self.fixed_bid = Some(v.into());
        self
    }

    /// Sets the value of [maximize_spend_auto_bid][BiddingStrategy::maximize_spend_auto_bid].
    pub fn set_maximize_spend_auto_bid<T: Into<MaximizeSpendBidStrategy>>(mut self, v: T) -> Self {
        self.maximize_spend_auto_bid = Some(v.into());
        self
    }

    /// Sets the value of [performance_goal_auto_bid][BiddingStrategy::performance_goal_auto_bid].
    pub fn set_performance_goal_auto_bid<T: Into<PerformanceGoalBidStrategy>>(
        mut self,
        v: T,
    ) -> Self {
        self.performance_goal_auto_bid = Some(v.into());
        self
    }
}

/// A strategy that uses a fixed bidding price.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FixedBidStrategy {
    /// The fixed bid amount, in micros of the advertiser's currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub bid_amount_micros: Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl FixedBidStrategy {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bid_amount_micros][FixedBidStrategy::bid_amount_micros].
    pub fn set_bid_amount_micros<T: Into<i64>>(mut self, v: T) -> Self {
        self.bid_amount_micros = Some(v.into());
        self
    }
}

/// A strategy that automatically adjusts the bid to optimize a specified
/// performance goal while spending the full budget.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MaximizeSpendBidStrategy {
    /// Required. The type of the performance goal that the bidding strategy
    /// tries to minimize while spending the full budget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_goal_type: Option<String>,

    /// The maximum average CPM that may be bid, in micros.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub max_average_cpm_bid_amount_micros: Option<i64>,

    /// The ID of the custom bidding algorithm used by this strategy.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub custom_bidding_algorithm_id: Option<i64>,

    /// Whether the strategy takes deal floor prices into account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raise_bid_for_deals: Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl MaximizeSpendBidStrategy {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [performance_goal_type][MaximizeSpendBidStrategy::performance_goal_type].
    pub fn set_performance_goal_type<T: Into<String>>(mut self, v: T) -> Self {
        self.performance_goal_type = Some(v.into());
        self
    }

    /// Sets the value of [max_average_cpm_bid_amount_micros][MaximizeSpendBidStrategy::max_average_cpm_bid_amount_micros].
    pub fn set_max_average_cpm_bid_amount_micros<T: Into<i64>>(mut self, v: T) -> Self {
        self.max_average_cpm_bid_amount_micros = Some(v.into());
        self
    }

    /// Sets the value of [custom_bidding_algorithm_id][MaximizeSpendBidStrategy::custom_bidding_algorithm_id].
    pub fn set_custom_bidding_algorithm_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.custom_bidding_algorithm_id = Some(v.into());
        self
    }

    /// Sets the value of [raise_bid_for_deals][MaximizeSpendBidStrategy::raise_bid_for_deals].
    pub fn set_raise_bid_for_deals<T: Into<bool>>(mut self, v: T) -> Self {
        self.raise_bid_for_deals = Some(v.into());
        self
    }
}

/// A strategy that automatically adjusts the bid to meet or beat a specified
/// performance goal.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PerformanceGoalBidStrategy {
    /// Required. The type of the performance goal that the bidding strategy
    /// will try to meet or beat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_goal_type: Option<String>,

    /// Required. The performance goal the bidding strategy will attempt to
    /// meet or beat, in micros of the advertiser's currency or in micro of
    /// the ROAS value.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub performance_goal_amount_micros: Option<i64>,

    /// The maximum average CPM that may be bid, in micros.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub max_average_cpm_bid_amount_micros: Option<i64>,

    /// The ID of the custom bidding algorithm used by this strategy.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub custom_bidding_algorithm_id: Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl PerformanceGoalBidStrategy {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [performance_goal_type][PerformanceGoalBidStrategy::performance_goal_type].
    pub fn set_performance_goal_type<T: Into<String>>(mut self, v: T) -> Self {
        self.performance_goal_type = Some(v.into());
        self
    }

    /// Sets the value of [performance_goal_amount_micros][PerformanceGoalBidStrategy::performance_goal_amount_micros].
    pub fn set_performance_goal_amount_micros<T: Into<i64>>(mut self, v: T) -> Self {
        self.performance_goal_amount_micros = Some(v.into());
        self
    }

    /// Sets the value of [max_average_cpm_bid_amount_micros][PerformanceGoalBidStrategy::max_average_cpm_bid_amount_micros].
    pub fn set_max_average_cpm_bid_amount_micros<T: Into<i64>>(mut self, v: T) -> Self {
        self.max_average_cpm_bid_amount_micros = Some(v.into());
        self
    }

    /// Sets the value of [custom_bidding_algorithm_id][PerformanceGoalBidStrategy::custom_bidding_algorithm_id].
    pub fn set_custom_bidding_algorithm_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.custom_bidding_algorithm_id = Some(v.into());
        self
    }
}

/// An inventory source.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InventorySource {
    /// Output only. The resource name of the inventory source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Output only. The unique ID of the inventory source. Assigned by the
    /// system.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub inventory_source_id: Option<i64>,

    /// Immutable. The ID of the guaranteed order that this inventory source
    /// belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guaranteed_order_id: Option<String>,

    /// The display name of the inventory source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Denotes the type of the inventory source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_source_type: Option<String>,

    /// Output only. The product type of the inventory source, denoting the
    /// way through which it sells inventory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_source_product_type: Option<String>,

    /// Whether the inventory source has a guaranteed or non-guaranteed
    /// delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commitment: Option<String>,

    /// The delivery method of the inventory source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_method: Option<String>,

    /// The ID in the exchange space that uniquely identifies the inventory
    /// source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal_id: Option<String>,

    /// The status settings of the inventory source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InventorySourceStatus>,

    /// The exchange to which the inventory source belongs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,

    /// Output only. The timestamp when the inventory source was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<wkt::Timestamp>,

    /// Required. The rate details of the inventory source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_details: Option<RateDetails>,

    /// The publisher/seller name of the inventory source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_name: Option<String>,

    /// The time range when this inventory source starts and stops serving.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,

    /// The partner or advertisers that have read/write access to the
    /// inventory source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_write_accessors: Option<InventorySourceAccessors>,

    /// Output only. The IDs of advertisers with read-only access to the
    /// inventory source.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(as = "Vec<wkt::internal::I64>")]
    pub read_advertiser_ids: Vec<i64>,

    /// Output only. The IDs of partners with read-only access to the
    /// inventory source.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(as = "Vec<wkt::internal::I64>")]
    pub read_partner_ids: Vec<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl InventorySource {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][InventorySource::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [inventory_source_id][InventorySource::inventory_source_id].
    pub fn set_inventory_source_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.inventory_source_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [inventory_source_id][InventorySource::inventory_source_id].
    pub fn set_or_clear_inventory_source_id<T: Into<i64>>(mut self, v: Option<T>) -> Self {
        self.inventory_source_id = v.map(Into::into);
        self
    }

    /// Sets the value of [guaranteed_order_id][InventorySource::guaranteed_order_id].
    pub fn set_guaranteed_order_id<T: Into<String>>(mut self, v: T) -> Self {
        self.guaranteed_order_id = Some(v.into());
        self
    }

    /// Sets the value of [display_name][InventorySource::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [inventory_source_type][InventorySource::inventory_source_type].
    pub fn set_inventory_source_type<T: Into<String>>(mut self, v: T) -> Self {
        self.inventory_source_type = Some(v.into());
        self
    }

    /// Sets the value of [inventory_source_product_type][InventorySource::inventory_source_product_type].
    pub fn set_inventory_source_product_type<T: Into<String>>(mut self, v: T) -> Self {
        self.inventory_source_product_type = Some(v.into());
        self
    }

    /// Sets the value of [commitment][InventorySource::commitment].
    pub fn set_commitment<T: Into<String>>(mut self, v: T) -> Self {
        self.commitment = Some(v.into());
        self
    }

    /// Sets the value of [delivery_method][InventorySource::delivery_method].
    pub fn set_delivery_method<T: Into<String>>(mut self, v: T) -> Self {
        self.delivery_method = Some(v.into());
        self
    }

    /// Sets the value of [deal_id][InventorySource::deal_id].
    pub fn set_deal_id<T: Into<String>>(mut self, v: T) -> Self {
        self.deal_id = Some(v.into());
        self
    }

    /// Sets the value of [status][InventorySource::status].
    pub fn set_status<T: Into<InventorySourceStatus>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [exchange][InventorySource::exchange].
    pub fn set_exchange<T: Into<String>>(mut self, v: T) -> Self {
        self.exchange = Some(v.into());
        self
    }

    /// Sets the value of [update_time][InventorySource::update_time].
    pub fn set_update_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.update_time = Some(v.into());
        self
    }

    /// Sets the value of [rate_details][InventorySource::rate_details].
    pub fn set_rate_details<T: Into<RateDetails>>(mut self, v: T) -> Self {
        self.rate_details = Some(v.into());
        self
    }

    /// Sets the value of [publisher_name][InventorySource::publisher_name].
    pub fn set_publisher_name<T: Into<String>>(mut self, v: T) -> Self {
        self.publisher_name = Some(v.into());
        self
    }

    /// Sets the value of [time_range][InventorySource::time_range].
    pub fn set_time_range<T: Into<TimeRange>>(mut self, v: T) -> Self {
        self.time_range = Some(v.into());
        self
    }

    /// Sets the value of [read_write_accessors][InventorySource::read_write_accessors].
    pub fn set_read_write_accessors<T: Into<InventorySourceAccessors>>(mut self, v: T) -> Self {
        self.read_write_accessors = Some(v.into());
        self
    }

    /// Sets the value of [read_advertiser_ids][InventorySource::read_advertiser_ids].
    pub fn set_read_advertiser_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<i64>,
    {
        self.read_advertiser_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [read_partner_ids][InventorySource::read_partner_ids].
    pub fn set_read_partner_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<i64>,
    {
        self.read_partner_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The status related settings of the inventory source.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InventorySourceStatus {
    /// Whether or not the inventory source is servable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_status: Option<String>,

    /// The user-provided reason for pausing this inventory source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_pause_reason: Option<String>,

    /// Output only. The status set by the seller for the inventory source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_status: Option<String>,

    /// Output only. The seller-provided reason for pausing this inventory
    /// source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_pause_reason: Option<String>,

    /// Output only. The configuration status of the inventory source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_status: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl InventorySourceStatus {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [entity_status][InventorySourceStatus::entity_status].
    pub fn set_entity_status<T: Into<String>>(mut self, v: T) -> Self {
        self.entity_status = Some(v.into());
        self
    }

    /// Sets the value of [entity_pause_reason][InventorySourceStatus::entity_pause_reason].
    pub fn set_entity_pause_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.entity_pause_reason = Some(v.into());
        self
    }
}

/// The rate related settings of the inventory source.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RateDetails {
    /// The rate type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_source_rate_type: Option<String>,

    /// The rate for the inventory source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<Money>,

    /// Required for guaranteed inventory sources. The number of impressions
    /// guaranteed by the seller.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub units_purchased: Option<i64>,

    /// Output only. The amount that the buyer has committed to spending on
    /// the inventory source up front.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_spend: Option<Money>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl RateDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [inventory_source_rate_type][RateDetails::inventory_source_rate_type].
    pub fn set_inventory_source_rate_type<T: Into<String>>(mut self, v: T) -> Self {
        self.inventory_source_rate_type = Some(v.into());
        self
    }

    /// Sets the value of [rate][RateDetails::rate].
    pub fn set_rate<T: Into<Money>>(mut self, v: T) -> Self {
        self.rate = Some(v.into());
        self
    }

    /// Sets the value of [units_purchased][RateDetails::units_purchased].
    pub fn set_units_purchased<T: Into<i64>>(mut self, v: T) -> Self {
        self.units_purchased = Some(v.into());
        self
    }

    /// Sets the value of [minimum_spend][RateDetails::minimum_spend].
    pub fn set_minimum_spend<T: Into<Money>>(mut self, v: T) -> Self {
        self.minimum_spend = Some(v.into());
        self
    }
}

/// The partner or advertisers with access to an inventory source.
///
/// At most one of the accessors is set.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InventorySourceAccessors {
    /// The partner with access to the inventory source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner: Option<PartnerAccessor>,

    /// The advertisers with access to the inventory source. All advertisers
    /// must belong to the same partner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advertisers: Option<AdvertiserAccessors>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl InventorySourceAccessors {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [partner][InventorySourceAccessors::partner].
    pub fn set_partner<T: Into<PartnerAccessor>>(mut self, v: T) -> Self {
        self.partner = Some(v.into());
        self
    }

    /// Sets the value of [advertisers][InventorySourceAccessors::advertisers].
    pub fn set_advertisers<T: Into<AdvertiserAccessors>>(mut self, v: T) -> Self {
        self.advertisers = Some(v.into());
        self
    }
}

/// The partner with access to an inventory source.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PartnerAccessor {
    /// The ID of the partner.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub partner_id: Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl PartnerAccessor {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [partner_id][PartnerAccessor::partner_id].
    pub fn set_partner_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.partner_id = Some(v.into());
        self
    }
}

/// The advertisers with access to an inventory source.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AdvertiserAccessors {
    /// The IDs of the advertisers.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(as = "Vec<wkt::internal::I64>")]
    pub advertiser_ids: Vec<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl AdvertiserAccessors {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [advertiser_ids][AdvertiserAccessors::advertiser_ids].
    pub fn set_advertiser_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<i64>,
    {
        self.advertiser_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A time range.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TimeRange {
    /// Required. The lower bound of a time range, inclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<wkt::Timestamp>,

    /// Required. The upper bound of a time range, inclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<wkt::Timestamp>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl TimeRange {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [start_time][TimeRange::start_time].
    pub fn set_start_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.start_time = Some(v.into());
        self
    }

    /// Sets the value of [end_time][TimeRange::end_time].
    pub fn set_end_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.end_time = Some(v.into());
        self
    }
}

/// Represents an amount of money with its currency type.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Money {
    /// The three-letter currency code defined in ISO 4217.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,

    /// The whole units of the amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub units: Option<i64>,

    /// Number of nano (10^-9) units of the amount. Must have the same sign as
    /// `units` when `units` is non-zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nanos: Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Money {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [currency_code][Money::currency_code].
    pub fn set_currency_code<T: Into<String>>(mut self, v: T) -> Self {
        self.currency_code = Some(v.into());
        self
    }

    /// Sets the value of [units][Money::units].
    pub fn set_units<T: Into<i64>>(mut self, v: T) -> Self {
        self.units = Some(v.into());
        self
    }

    /// Sets the value of [nanos][Money::nanos].
    pub fn set_nanos<T: Into<i32>>(mut self, v: T) -> Self {
        self.nanos = Some(v.into());
        self
    }
}

/// A whole or partial calendar date, such as a birthday.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Date {
    /// Year of the date. Must be from 1 to 9999, or 0 to specify a date
    /// without a year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// Month of a year. Must be from 1 to 12, or 0 to specify a year without
    /// a month and day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<i32>,

    /// Day of a month. Must be from 1 to 31 and valid for the year and month,
    /// or 0 to specify a year by itself or a year and month where the day
    /// isn't significant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Date {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [year][Date::year].
    pub fn set_year<T: Into<i32>>(mut self, v: T) -> Self {
        self.year = Some(v.into());
        self
    }

    /// Sets the value of [month][Date::month].
    pub fn set_month<T: Into<i32>>(mut self, v: T) -> Self {
        self.month = Some(v.into());
        self
    }

    /// Sets the value of [day][Date::day].
    pub fn set_day<T: Into<i32>>(mut self, v: T) -> Self {
        self.day = Some(v.into());
        self
    }
}

/// A date range.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DateRange {
    /// The lower bound of the date range, inclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,

    /// The upper bound of the date range, inclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DateRange {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [start_date][DateRange::start_date].
    pub fn set_start_date<T: Into<Date>>(mut self, v: T) -> Self {
        self.start_date = Some(v.into());
        self
    }

    /// Sets the value of [end_date][DateRange::end_date].
    pub fn set_end_date<T: Into<Date>>(mut self, v: T) -> Self {
        self.end_date = Some(v.into());
        self
    }
}

/// Response message for `advertisers.audit`.
///
/// Each count is the number of resources of that kind the advertiser uses,
/// all of them count against the advertiser limits.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AuditAdvertiserResponse {
    /// The number of ACTIVE, PAUSED and DRAFT line items under this
    /// advertiser.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::U64>")]
    pub used_line_items_count: Option<u64>,

    /// The number of ACTIVE, PAUSED and DRAFT insertion orders under this
    /// advertiser.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::U64>")]
    pub used_insertion_orders_count: Option<u64>,

    /// The number of ACTIVE and PAUSED campaigns under this advertiser.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::U64>")]
    pub used_campaigns_count: Option<u64>,

    /// The number of channels created under this advertiser.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::U64>")]
    pub channels_count: Option<u64>,

    /// The number of negatively targeted channels created under this
    /// advertiser.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::U64>")]
    pub negatively_targeted_channels_count: Option<u64>,

    /// The number of negative keyword lists created under this advertiser.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::U64>")]
    pub negative_keyword_lists_count: Option<u64>,

    /// The number of ad groups under this advertiser.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::U64>")]
    pub ad_groups_count: Option<u64>,

    /// The number of individually targeted ad group criteria under this
    /// advertiser.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::U64>")]
    pub ad_group_criteria_count: Option<u64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl AuditAdvertiserResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [used_line_items_count][AuditAdvertiserResponse::used_line_items_count].
    pub fn set_used_line_items_count<T: Into<u64>>(mut self, v: T) -> Self {
        self.used_line_items_count = Some(v.into());
        self
    }

    /// Sets the value of [used_insertion_orders_count][AuditAdvertiserResponse::used_insertion_orders_count].
    pub fn set_used_insertion_orders_count<T: Into<u64>>(mut self, v: T) -> Self {
        self.used_insertion_orders_count = Some(v.into());
        self
    }

    /// Sets the value of [used_campaigns_count][AuditAdvertiserResponse::used_campaigns_count].
    pub fn set_used_campaigns_count<T: Into<u64>>(mut self, v: T) -> Self {
        self.used_campaigns_count = Some(v.into());
        self
    }
}

/// Response message for `advertisers.list`.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListAdvertisersResponse {
    /// The list of advertisers. This list is absent if empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub advertisers: Vec<Advertiser>,

    /// A token to retrieve the next page of results. Pass this value in the
    /// `page_token` field in the subsequent call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListAdvertisersResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [advertisers][ListAdvertisersResponse::advertisers].
    pub fn set_advertisers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Advertiser>,
    {
        self.advertisers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListAdvertisersResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }
}

/// Response message for `campaigns.list`.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListCampaignsResponse {
    /// The list of campaigns. This list is absent if empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub campaigns: Vec<Campaign>,

    /// A token to retrieve the next page of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListCampaignsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [campaigns][ListCampaignsResponse::campaigns].
    pub fn set_campaigns<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Campaign>,
    {
        self.campaigns = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListCampaignsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }
}

/// Response message for `lineItems.list`.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListLineItemsResponse {
    /// The list of line items. This list is absent if empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub line_items: Vec<LineItem>,

    /// A token to retrieve the next page of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListLineItemsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [line_items][ListLineItemsResponse::line_items].
    pub fn set_line_items<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<LineItem>,
    {
        self.line_items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListLineItemsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }
}

/// Response message for `inventorySources.list`.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListInventorySourcesResponse {
    /// The list of inventory sources. This list is absent if empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inventory_sources: Vec<InventorySource>,

    /// A token to retrieve the next page of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListInventorySourcesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [inventory_sources][ListInventorySourcesResponse::inventory_sources].
    pub fn set_inventory_sources<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<InventorySource>,
    {
        self.inventory_sources = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListInventorySourcesResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }
}

/// The body of a `lineItems.duplicate` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DuplicateLineItemRequest {
    /// The display name of the new line item. Must be UTF-8 encoded with a
    /// maximum size of 240 bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_display_name: Option<String>,

    /// Whether this line item will serve European Union political ads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_eu_political_ads: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DuplicateLineItemRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [target_display_name][DuplicateLineItemRequest::target_display_name].
    pub fn set_target_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.target_display_name = Some(v.into());
        self
    }

    /// Sets the value of [contains_eu_political_ads][DuplicateLineItemRequest::contains_eu_political_ads].
    pub fn set_contains_eu_political_ads<T: Into<String>>(mut self, v: T) -> Self {
        self.contains_eu_political_ads = Some(v.into());
        self
    }
}

/// Response message for `lineItems.duplicate`.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DuplicateLineItemResponse {
    /// The ID of the created line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::I64>")]
    pub duplicate_line_item_id: Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DuplicateLineItemResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [duplicate_line_item_id][DuplicateLineItemResponse::duplicate_line_item_id].
    pub fn set_duplicate_line_item_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.duplicate_line_item_id = Some(v.into());
        self
    }
}

/// The parameters of the `advertisers.*` methods.
pub mod advertisers {
    use super::Advertiser;

    /// The parameters of `advertisers.list`.
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ListRequest {
        /// Required. The ID of the partner that the fetched advertisers
        /// should all belong to.
        pub partner_id: Option<i64>,
        /// Requested page size. Must be between `1` and `200`.
        pub page_size: Option<i32>,
        /// A token identifying a page of results the server should return.
        pub page_token: Option<String>,
        /// Field by which to sort the list, for example `displayName desc`.
        pub order_by: Option<String>,
        /// Allows filtering by advertiser fields.
        pub filter: Option<String>,
    }

    /// The parameters of `advertisers.get`.
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        pub advertiser_id: i64,
    }

    /// The parameters of `advertisers.create`.
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct CreateRequest {
        /// The advertiser to create, sent as the request body.
        pub advertiser: Option<Advertiser>,
    }

    /// The parameters of `advertisers.patch`.
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct PatchRequest {
        /// The advertiser to update. Its `advertiser_id` selects the
        /// advertiser and is required.
        pub advertiser: Option<Advertiser>,
        /// Required. The mask to control which fields to update, for example
        /// `displayName,entityStatus`.
        pub update_mask: Option<String>,
    }

    /// The parameters of `advertisers.delete`.
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct DeleteRequest {
        pub advertiser_id: i64,
    }

    /// The parameters of `advertisers.audit`.
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct AuditRequest {
        pub advertiser_id: i64,
        /// Optional. The specific fields to return. If no mask is specified,
        /// all fields in the response are populated.
        pub read_mask: Option<String>,
    }
}

/// The parameters of the `advertisers.campaigns.*` methods.
pub mod campaigns {
    use super::Campaign;

    /// The parameters of `advertisers.campaigns.list`.
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ListRequest {
        pub advertiser_id: i64,
        pub page_size: Option<i32>,
        pub page_token: Option<String>,
        pub order_by: Option<String>,
        pub filter: Option<String>,
    }

    /// The parameters of `advertisers.campaigns.get`.
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        pub advertiser_id: i64,
        pub campaign_id: i64,
    }

    /// The parameters of `advertisers.campaigns.create`.
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct CreateRequest {
        pub advertiser_id: i64,
        pub campaign: Option<Campaign>,
    }

    /// The parameters of `advertisers.campaigns.patch`.
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct PatchRequest {
        pub advertiser_id: i64,
        /// The campaign to update. Its `campaign_id` is required.
        pub campaign: Option<Campaign>,
        pub update_mask: Option<String>,
    }

    /// The parameters of `advertisers.campaigns.delete`.
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct DeleteRequest {
        pub advertiser_id: i64,
        pub campaign_id: i64,
    }
}

/// The parameters of the `advertisers.lineItems.*` methods.
pub mod line_items {
    use super::{DuplicateLineItemRequest, LineItem};

    /// The parameters of `advertisers.lineItems.list`.
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ListRequest {
        pub advertiser_id: i64,
        pub page_size: Option<i32>,
        pub page_token: Option<String>,
        pub order_by: Option<String>,
        pub filter: Option<String>,
    }

    /// The parameters of `advertisers.lineItems.get`.
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        pub advertiser_id: i64,
        pub line_item_id: i64,
    }

    /// The parameters of `advertisers.lineItems.create`.
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct CreateRequest {
        pub advertiser_id: i64,
        pub line_item: Option<LineItem>,
    }

    /// The parameters of `advertisers.lineItems.patch`.
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct PatchRequest {
        pub advertiser_id: i64,
        /// The line item to update. Its `line_item_id` is required.
        pub line_item: Option<LineItem>,
        pub update_mask: Option<String>,
    }

    /// The parameters of `advertisers.lineItems.delete`.
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct DeleteRequest {
        pub advertiser_id: i64,
        pub line_item_id: i64,
    }

    /// The parameters of `advertisers.lineItems.duplicate`.
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct DuplicateRequest {
        pub advertiser_id: i64,
        pub line_item_id: i64,
        pub body: Option<DuplicateLineItemRequest>,
    }
}

/// The parameters of the `inventorySources.*` methods.
///
/// Every method takes an accessor, either `partner_id` or `advertiser_id`.
pub mod inventory_sources {
    use super::InventorySource;

    /// The parameters of `inventorySources.list`.
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ListRequest {
        pub partner_id: Option<i64>,
        pub advertiser_id: Option<i64>,
        pub page_size: Option<i32>,
        pub page_token: Option<String>,
        pub order_by: Option<String>,
        pub filter: Option<String>,
    }

    /// The parameters of `inventorySources.get`.
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        pub inventory_source_id: i64,
        pub partner_id: Option<i64>,
        pub advertiser_id: Option<i64>,
    }

    /// The parameters of `inventorySources.create`.
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct CreateRequest {
        pub inventory_source: Option<InventorySource>,
        pub partner_id: Option<i64>,
        pub advertiser_id: Option<i64>,
    }

    /// The parameters of `inventorySources.patch`.
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct PatchRequest {
        /// The inventory source to update. Its `inventory_source_id` is
        /// required.
        pub inventory_source: Option<InventorySource>,
        pub update_mask: Option<String>,
        pub partner_id: Option<i64>,
        pub advertiser_id: Option<i64>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use test_case::test_case;

    type Result = anyhow::Result<()>;

    #[test]
    fn advertiser_absent_fields_stay_absent() -> Result {
        let input = Advertiser::new().set_partner_id(123456789012345_i64);
        let got = serde_json::to_value(&input)?;
        assert_eq!(got, json!({"partnerId": "123456789012345"}));
        assert_eq!(
            serde_json::to_string(&input)?,
            r#"{"partnerId":"123456789012345"}"#
        );
        Ok(())
    }

    #[test]
    fn campaign_deserialize() -> Result {
        let input = json!({
            "campaignId": "987654321098765",
            "updateTime": "2023-05-01T12:00:00Z"
        });
        let got = serde_json::from_value::<Campaign>(input)?;
        let want = Campaign::new()
            .set_campaign_id(987654321098765_i64)
            .set_update_time(wkt::Timestamp::new(1682942400, 0)?);
        assert_eq!(got, want);
        assert_eq!(got.advertiser_id, None);
        assert_eq!(got.display_name, None);
        Ok(())
    }

    #[test_case(i64::MAX, "9223372036854775807")]
    #[test_case(i64::MIN, "-9223372036854775808")]
    #[test_case(0, "0")]
    #[test_case(9007199254740993, "9007199254740993"; "above 2^53")]
    fn advertiser_id_roundtrip(id: i64, wire: &str) -> Result {
        let input = Advertiser::new().set_advertiser_id(id);
        let got = serde_json::to_value(&input)?;
        assert_eq!(got, json!({"advertiserId": wire}));
        let roundtrip = serde_json::from_value::<Advertiser>(got)?;
        assert_eq!(roundtrip, input);
        Ok(())
    }

    #[test]
    fn accepts_json_numbers() -> Result {
        let got = serde_json::from_value::<Advertiser>(json!({"advertiserId": 42}))?;
        assert_eq!(got.advertiser_id, Some(42));
        Ok(())
    }

    #[test_case(json!({"advertiserId": "12abc"}); "not a number")]
    #[test_case(json!({"advertiserId": "1.5"}); "fractional")]
    #[test_case(json!({"advertiserId": "9223372036854775808"}); "overflow")]
    #[test_case(json!({"advertiserId": ""}); "empty")]
    #[test_case(json!({"advertiserId": {"value": 1}}); "object")]
    #[test_case(json!({"updateTime": "2023-05-01"}); "date only")]
    #[test_case(json!({"updateTime": 1682942400}); "timestamp as number")]
    #[test_case(json!({"creativeIds": ["1", "two"]}); "bad array element")]
    fn malformed_input_fails(input: Value) {
        let got = serde_json::from_value::<LineItem>(input);
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn unknown_fields_roundtrip() -> Result {
        let input = json!({
            "advertiserId": "1",
            "dataAccessConfig": {"sdfConfig": {"overridePartnerSdfConfig": true}},
            "generalConfig": {"currencyCode": "USD", "newSetting": 7}
        });
        let got = serde_json::from_value::<Advertiser>(input.clone())?;
        assert_eq!(
            got.general_config
                .as_ref()
                .and_then(|c| c.currency_code.as_deref()),
            Some("USD")
        );
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn nested_and_repeated() -> Result {
        let input = json!({
            "lineItemId": "4611686018427387904",
            "creativeIds": ["1", "9223372036854775807"],
            "partnerCosts": [
                {"costType": "PARTNER_COST_TYPE_ADSERVING", "feeAmount": "100000"},
                {"costType": "PARTNER_COST_TYPE_DATA", "feePercentageMillis": "2500"}
            ],
            "bidStrategy": {"fixedBid": {"bidAmountMicros": "2500000"}},
            "flight": {
                "flightDateType": "LINE_ITEM_FLIGHT_DATE_TYPE_CUSTOM",
                "dateRange": {
                    "startDate": {"year": 2025, "month": 1, "day": 1},
                    "endDate": {"year": 2025, "month": 12, "day": 31}
                }
            },
            "warningMessages": ["NO_VALID_CREATIVE"]
        });
        let got = serde_json::from_value::<LineItem>(input.clone())?;
        let want = LineItem::new()
            .set_line_item_id(1_i64 << 62)
            .set_creative_ids([1_i64, i64::MAX])
            .set_partner_costs([
                PartnerCost::new()
                    .set_cost_type("PARTNER_COST_TYPE_ADSERVING")
                    .set_fee_amount(100000),
                PartnerCost::new()
                    .set_cost_type("PARTNER_COST_TYPE_DATA")
                    .set_fee_percentage_millis(2500),
            ])
            .set_bid_strategy(
                BiddingStrategy::new()
                    .set_fixed_bid(FixedBidStrategy::new().set_bid_amount_micros(2500000)),
            )
            .set_flight(
                LineItemFlight::new()
                    .set_flight_date_type("LINE_ITEM_FLIGHT_DATE_TYPE_CUSTOM")
                    .set_date_range(
                        DateRange::new()
                            .set_start_date(Date::new().set_year(2025).set_month(1).set_day(1))
                            .set_end_date(Date::new().set_year(2025).set_month(12).set_day(31)),
                    ),
            )
            .set_warning_messages(["NO_VALID_CREATIVE"]);
        assert_eq!(got, want);
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn inventory_source() -> Result {
        let input = InventorySource::new()
            .set_inventory_source_id(555_i64)
            .set_rate_details(
                RateDetails::new()
                    .set_inventory_source_rate_type("INVENTORY_SOURCE_RATE_TYPE_CPM_FIXED")
                    .set_rate(Money::new().set_currency_code("EUR").set_units(-3).set_nanos(-500000000))
                    .set_units_purchased(1000000),
            )
            .set_time_range(
                TimeRange::new()
                    .set_start_time(wkt::Timestamp::new(1682942400, 0)?)
                    .set_end_time(wkt::Timestamp::new(1682942400, 500_000_000)?),
            )
            .set_read_write_accessors(
                InventorySourceAccessors::new()
                    .set_advertisers(AdvertiserAccessors::new().set_advertiser_ids([7_i64, 8])),
            );
        let got = serde_json::to_value(&input)?;
        let want = json!({
            "inventorySourceId": "555",
            "rateDetails": {
                "inventorySourceRateType": "INVENTORY_SOURCE_RATE_TYPE_CPM_FIXED",
                "rate": {"currencyCode": "EUR", "units": "-3", "nanos": -500000000},
                "unitsPurchased": "1000000"
            },
            "timeRange": {
                "startTime": "2023-05-01T12:00:00Z",
                "endTime": "2023-05-01T12:00:00.500Z"
            },
            "readWriteAccessors": {"advertisers": {"advertiserIds": ["7", "8"]}}
        });
        assert_eq!(got, want);
        assert_eq!(serde_json::from_value::<InventorySource>(got)?, input);
        Ok(())
    }

    #[test]
    fn audit_counts() -> Result {
        let input = json!({
            "usedLineItemsCount": "18446744073709551615",
            "usedCampaignsCount": "12",
            "channelsCount": "0"
        });
        let got = serde_json::from_value::<AuditAdvertiserResponse>(input.clone())?;
        assert_eq!(got.used_line_items_count, Some(u64::MAX));
        assert_eq!(got.used_campaigns_count, Some(12));
        assert_eq!(got.channels_count, Some(0));
        assert_eq!(got.ad_groups_count, None);
        assert_eq!(serde_json::to_value(&got)?, input);

        let got = serde_json::from_value::<AuditAdvertiserResponse>(
            json!({"usedLineItemsCount": "-1"}),
        );
        assert!(got.is_err(), "{got:?}");
        Ok(())
    }

    #[test]
    fn list_response() -> Result {
        let input = json!({
            "advertisers": [
                {"advertiserId": "1", "displayName": "a"},
                {"advertiserId": "2", "entityStatus": "ENTITY_STATUS_PAUSED"}
            ],
            "nextPageToken": "abc"
        });
        let got = serde_json::from_value::<ListAdvertisersResponse>(input.clone())?;
        let ids = got
            .advertisers
            .iter()
            .map(|a| a.advertiser_id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![Some(1), Some(2)]);
        assert_eq!(got.next_page_token.as_deref(), Some("abc"));
        assert_eq!(serde_json::to_value(&got)?, input);

        let got = serde_json::from_value::<ListAdvertisersResponse>(json!({}))?;
        assert!(got.advertisers.is_empty());
        Ok(())
    }
}
