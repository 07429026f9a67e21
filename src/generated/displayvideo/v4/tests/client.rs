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

#[cfg(test)]
mod tests {
    use gax::credentials::access_token;
    use gax::error::rpc::Code;
    use gax::options::RequestOptionsBuilder;
    use google_cloud_displayvideo_v4::client::DisplayVideo;
    use google_cloud_displayvideo_v4::model;
    use httptest::matchers::*;
    use httptest::{Expectation, Server, all_of, responders::*};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    async fn test_client(server: &Server) -> Result<DisplayVideo> {
        let client = DisplayVideo::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn list_campaigns_without_options() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v4/advertisers/123456789/campaigns"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({
                "campaigns": [
                    {"campaignId": "987654321098765", "updateTime": "2023-05-01T12:00:00Z"},
                    {"campaignId": "9223372036854775807", "displayName": "max"}
                ]
            }))),
        );

        let client = test_client(&server).await?;
        let response = client.list_campaigns(123456789_i64).send().await?;
        let ids = response
            .campaigns
            .iter()
            .map(|c| c.campaign_id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![Some(987654321098765), Some(i64::MAX)]);
        assert_eq!(
            response.campaigns[0].update_time,
            Some(wkt::Timestamp::new(1682942400, 0)?)
        );
        assert_eq!(response.next_page_token, None);
        Ok(())
    }

    #[tokio::test]
    async fn list_advertisers_with_options() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v4/advertisers"),
                request::query(url_decoded(contains(("partnerId", "123456789012345")))),
                request::query(url_decoded(contains(("pageSize", "50")))),
                request::query(url_decoded(contains(("pageToken", "next-page")))),
                request::query(url_decoded(contains(("orderBy", "displayName desc")))),
                request::query(url_decoded(contains((
                    "filter",
                    "entityStatus=\"ENTITY_STATUS_ACTIVE\""
                )))),
                request::query(url_decoded(len(eq(5)))),
            ])
            .respond_with(json_encoded(json!({
                "advertisers": [{"advertiserId": "1", "partnerId": "123456789012345"}],
                "nextPageToken": "after-next"
            }))),
        );

        let client = test_client(&server).await?;
        let response = client
            .list_advertisers(123456789012345_i64)
            .set_page_size(50)
            .set_page_token("next-page")
            .set_order_by("displayName desc")
            .set_filter("entityStatus=\"ENTITY_STATUS_ACTIVE\"")
            .send()
            .await?;
        assert_eq!(response.advertisers.len(), 1);
        assert_eq!(response.advertisers[0].partner_id, Some(123456789012345));
        assert_eq!(response.next_page_token.as_deref(), Some("after-next"));
        Ok(())
    }

    #[tokio::test]
    async fn get_advertiser_preserves_unknown_fields() -> Result<()> {
        let body = json!({
            "advertiserId": "9223372036854775807",
            "displayName": "test-only",
            "dataAccessConfig": {"sdfConfig": {"overridePartnerSdfConfig": true}}
        });
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v4/advertisers/9223372036854775807",
            ))
            .respond_with(json_encoded(body.clone())),
        );

        let client = test_client(&server).await?;
        let response = client.get_advertiser(i64::MAX).send().await?;
        assert_eq!(response.advertiser_id, Some(i64::MAX));
        assert_eq!(serde_json::to_value(&response)?, body);
        Ok(())
    }

    #[tokio::test]
    async fn create_advertiser() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v4/advertisers"),
                request::query(url_decoded(len(eq(0)))),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({
                    "partnerId": "123456789012345",
                    "displayName": "test-only",
                    "entityStatus": "ENTITY_STATUS_ACTIVE",
                    "generalConfig": {"domainUrl": "https://example.com", "currencyCode": "USD"},
                    "billingConfig": {"billingProfileId": "42"}
                })))),
            ])
            .respond_with(json_encoded(json!({
                "advertiserId": "555",
                "partnerId": "123456789012345",
                "updateTime": "2025-01-02T03:04:05.678Z"
            }))),
        );

        let client = test_client(&server).await?;
        let response = client
            .create_advertiser()
            .set_advertiser(
                model::Advertiser::new()
                    .set_partner_id(123456789012345_i64)
                    .set_display_name("test-only")
                    .set_entity_status("ENTITY_STATUS_ACTIVE")
                    .set_general_config(
                        model::AdvertiserGeneralConfig::new()
                            .set_domain_url("https://example.com")
                            .set_currency_code("USD"),
                    )
                    .set_billing_config(
                        model::AdvertiserBillingConfig::new().set_billing_profile_id(42),
                    ),
            )
            .send()
            .await?;
        assert_eq!(response.advertiser_id, Some(555));
        assert_eq!(
            response.update_time,
            Some(wkt::Timestamp::new(1735787045, 678_000_000)?)
        );
        Ok(())
    }

    #[tokio::test]
    async fn patch_advertiser() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/v4/advertisers/777"),
                request::query(url_decoded(contains(("updateMask", "displayName,entityStatus")))),
                request::query(url_decoded(len(eq(1)))),
                request::headers(contains(("authorization", "Bearer ya29.test-only"))),
                request::body(json_decoded(eq(json!({
                    "advertiserId": "777",
                    "displayName": "renamed",
                    "entityStatus": "ENTITY_STATUS_PAUSED"
                })))),
            ])
            .respond_with(json_encoded(json!({
                "advertiserId": "777",
                "displayName": "renamed",
                "entityStatus": "ENTITY_STATUS_PAUSED"
            }))),
        );

        let client = DisplayVideo::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(access_token::Builder::new("ya29.test-only").build())
            .build()
            .await?;
        let response = client
            .patch_advertiser()
            .set_advertiser(
                model::Advertiser::new()
                    .set_advertiser_id(777)
                    .set_display_name("renamed")
                    .set_entity_status("ENTITY_STATUS_PAUSED"),
            )
            .set_update_mask("displayName,entityStatus")
            .send()
            .await?;
        assert_eq!(response.display_name.as_deref(), Some("renamed"));
        Ok(())
    }

    #[tokio::test]
    async fn patch_without_body_id_is_binding_error() -> Result<()> {
        // No expectations: any request fails the test.
        let server = Server::run();
        let client = test_client(&server).await?;

        let err = client
            .patch_advertiser()
            .set_advertiser(model::Advertiser::new().set_display_name("no id"))
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");

        let err = client.patch_campaign(1).send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");

        let err = client
            .patch_line_item(1)
            .set_line_item(model::LineItem::new().set_display_name("no id"))
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");

        let err = client
            .patch_inventory_source()
            .set_inventory_source(model::InventorySource::new())
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn create_campaign() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v4/advertisers/7/campaigns"),
                request::query(url_decoded(len(eq(0)))),
                request::body(json_decoded(eq(json!({
                    "advertiserId": "7",
                    "displayName": "spring-sale",
                    "entityStatus": "ENTITY_STATUS_PAUSED"
                })))),
            ])
            .respond_with(json_encoded(json!({
                "advertiserId": "7",
                "campaignId": "9007199254740993",
                "displayName": "spring-sale"
            }))),
        );

        let client = test_client(&server).await?;
        let response = client
            .create_campaign(7)
            .set_campaign(
                model::Campaign::new()
                    .set_advertiser_id(7)
                    .set_display_name("spring-sale")
                    .set_entity_status("ENTITY_STATUS_PAUSED"),
            )
            .send()
            .await?;
        assert_eq!(response.campaign_id, Some(9007199254740993));
        assert_eq!(response.advertiser_id, Some(7));
        Ok(())
    }

    #[tokio::test]
    async fn create_without_body_is_binding_error() -> Result<()> {
        // No expectations: any request fails the test.
        let server = Server::run();
        let client = test_client(&server).await?;

        let err = client.create_advertiser().send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(err.to_string().contains("advertiser"), "{err}");

        let err = client.create_campaign(1).send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");

        let err = client.create_line_item(1).send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");

        let err = client
            .create_inventory_source()
            .set_partner_id(2)
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn patch_campaign() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/v4/advertisers/1/campaigns/22"),
                request::query(url_decoded(contains(("updateMask", "campaignFlight")))),
                request::body(json_decoded(eq(json!({
                    "campaignId": "22",
                    "campaignFlight": {
                        "plannedSpendAmountMicros": "1500000000",
                        "plannedDates": {"startDate": {"year": 2025, "month": 3, "day": 1}}
                    }
                })))),
            ])
            .respond_with(json_encoded(json!({"campaignId": "22", "advertiserId": "1"}))),
        );

        let client = test_client(&server).await?;
        let response = client
            .patch_campaign(1)
            .set_campaign(
                model::Campaign::new().set_campaign_id(22).set_campaign_flight(
                    model::CampaignFlight::new()
                        .set_planned_spend_amount_micros(1_500_000_000_i64)
                        .set_planned_dates(model::DateRange::new().set_start_date(
                            model::Date::new().set_year(2025).set_month(3).set_day(1),
                        )),
                ),
            )
            .set_update_mask("campaignFlight")
            .send()
            .await?;
        assert_eq!(response.advertiser_id, Some(1));
        Ok(())
    }

    #[tokio::test]
    async fn delete_returns_empty() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/v4/advertisers/1/campaigns/2"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(status_code(204)),
        );
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/v4/advertisers/1/lineItems/3"))
                .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/v4/advertisers/4"))
                .respond_with(json_encoded(json!({}))),
        );

        let client = test_client(&server).await?;
        let response = client.delete_campaign(1, 2).send().await?;
        assert_eq!(response, wkt::Empty::default());
        let response = client.delete_line_item(1, 3).send().await?;
        assert_eq!(response, wkt::Empty::default());
        let response = client.delete_advertiser(4).send().await?;
        assert_eq!(response, wkt::Empty::default());
        Ok(())
    }

    #[tokio::test]
    async fn audit_advertiser() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v4/advertisers/123:audit"),
                request::query(url_decoded(contains((
                    "readMask",
                    "usedLineItemsCount,usedCampaignsCount"
                )))),
            ])
            .respond_with(json_encoded(json!({
                "usedLineItemsCount": "4500",
                "usedCampaignsCount": "18446744073709551615"
            }))),
        );

        let client = test_client(&server).await?;
        let response = client
            .audit_advertiser(123)
            .set_read_mask("usedLineItemsCount,usedCampaignsCount")
            .send()
            .await?;
        assert_eq!(response.used_line_items_count, Some(4500));
        assert_eq!(response.used_campaigns_count, Some(u64::MAX));
        assert_eq!(response.channels_count, None);
        Ok(())
    }

    #[tokio::test]
    async fn line_items() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v4/advertisers/1/lineItems"),
                request::body(json_decoded(eq(json!({
                    "insertionOrderId": "10",
                    "displayName": "li",
                    "creativeIds": ["100", "200"],
                    "bidStrategy": {"fixedBid": {"bidAmountMicros": "1000000"}}
                })))),
            ])
            .respond_with(json_encoded(json!({"lineItemId": "30", "insertionOrderId": "10"}))),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", "/v4/advertisers/1/lineItems/30"))
                .respond_with(json_encoded(json!({
                    "lineItemId": "30",
                    "warningMessages": ["NO_VALID_CREATIVE"]
                }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v4/advertisers/1/lineItems"),
                request::query(url_decoded(contains(("pageSize", "10")))),
            ])
            .respond_with(json_encoded(json!({"lineItems": [{"lineItemId": "30"}]}))),
        );

        let client = test_client(&server).await?;
        let created = client
            .create_line_item(1)
            .set_line_item(
                model::LineItem::new()
                    .set_insertion_order_id(10)
                    .set_display_name("li")
                    .set_creative_ids([100_i64, 200])
                    .set_bid_strategy(model::BiddingStrategy::new().set_fixed_bid(
                        model::FixedBidStrategy::new().set_bid_amount_micros(1_000_000),
                    )),
            )
            .send()
            .await?;
        let line_item_id = created.line_item_id.unwrap_or_default();
        assert_eq!(line_item_id, 30);

        let got = client.get_line_item(1, line_item_id).send().await?;
        assert_eq!(got.warning_messages, vec!["NO_VALID_CREATIVE".to_string()]);

        let list = client.list_line_items(1).set_page_size(10).send().await?;
        assert_eq!(list.line_items.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_line_item() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v4/advertisers/1/lineItems/30:duplicate"),
                request::query(url_decoded(len(eq(0)))),
                request::body(json_decoded(eq(json!({
                    "targetDisplayName": "copy",
                    "containsEuPoliticalAds": "DOES_NOT_CONTAIN_EU_POLITICAL_ADVERTISING"
                })))),
            ])
            .respond_with(json_encoded(json!({"duplicateLineItemId": "4611686018427387904"}))),
        );

        let client = test_client(&server).await?;
        let response = client
            .duplicate_line_item(1, 30)
            .set_body(
                model::DuplicateLineItemRequest::new()
                    .set_target_display_name("copy")
                    .set_contains_eu_political_ads("DOES_NOT_CONTAIN_EU_POLITICAL_ADVERTISING"),
            )
            .send()
            .await?;
        assert_eq!(response.duplicate_line_item_id, Some(1_i64 << 62));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_line_item_without_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v4/advertisers/1/lineItems/30:duplicate"),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({})))),
            ])
            .respond_with(json_encoded(json!({"duplicateLineItemId": "31"}))),
        );

        let client = test_client(&server).await?;
        let response = client.duplicate_line_item(1, 30).send().await?;
        assert_eq!(response.duplicate_line_item_id, Some(31));
        Ok(())
    }

    #[tokio::test]
    async fn inventory_sources() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v4/inventorySources"),
                request::query(url_decoded(contains(("advertiserId", "42")))),
                request::query(url_decoded(contains(("pageSize", "100")))),
                request::query(url_decoded(len(eq(2)))),
            ])
            .respond_with(json_encoded(json!({
                "inventorySources": [{"inventorySourceId": "7", "readAdvertiserIds": ["42"]}],
                "nextPageToken": "p2"
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v4/inventorySources/7"),
                request::query(url_decoded(contains(("partnerId", "9")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({"inventorySourceId": "7"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v4/inventorySources"),
                request::query(url_decoded(contains(("partnerId", "9")))),
                request::query(url_decoded(len(eq(1)))),
                request::body(json_decoded(eq(json!({
                    "displayName": "source",
                    "rateDetails": {"rate": {"currencyCode": "USD", "units": "2"}}
                })))),
            ])
            .respond_with(json_encoded(json!({"inventorySourceId": "8"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/v4/inventorySources/8"),
                request::query(url_decoded(contains(("updateMask", "displayName")))),
                request::query(url_decoded(contains(("partnerId", "9")))),
                request::query(url_decoded(len(eq(2)))),
            ])
            .respond_with(json_encoded(json!({"inventorySourceId": "8", "displayName": "renamed"}))),
        );

        let client = test_client(&server).await?;
        let list = client
            .list_inventory_sources()
            .set_advertiser_id(42)
            .set_page_size(100)
            .send()
            .await?;
        assert_eq!(list.inventory_sources[0].read_advertiser_ids, vec![42]);
        assert_eq!(list.next_page_token.as_deref(), Some("p2"));

        let got = client
            .get_inventory_source(7)
            .set_partner_id(9)
            .send()
            .await?;
        assert_eq!(got.inventory_source_id, Some(7));

        let created = client
            .create_inventory_source()
            .set_partner_id(9)
            .set_inventory_source(
                model::InventorySource::new()
                    .set_display_name("source")
                    .set_rate_details(model::RateDetails::new().set_rate(
                        model::Money::new().set_currency_code("USD").set_units(2),
                    )),
            )
            .send()
            .await?;
        assert_eq!(created.inventory_source_id, Some(8));

        let patched = client
            .patch_inventory_source()
            .set_inventory_source(
                model::InventorySource::new()
                    .set_inventory_source_id(8)
                    .set_display_name("renamed"),
            )
            .set_update_mask("displayName")
            .set_partner_id(9)
            .send()
            .await?;
        assert_eq!(patched.display_name.as_deref(), Some("renamed"));
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v4/advertisers/1/campaigns/2"),
                request::headers(contains(("user-agent", "test-only/1.0"))),
            ])
            .respond_with(status_code(403).body(
                json!({"error": {
                    "code": 403,
                    "message": "The caller does not have permission",
                    "status": "PERMISSION_DENIED"
                }})
                .to_string(),
            )),
        );

        let client = test_client(&server).await?;
        let err = client
            .get_campaign(1, 2)
            .with_user_agent("test-only/1.0")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(403));
        assert_eq!(err.status().map(|s| s.code), Some(Code::PermissionDenied));
        Ok(())
    }

    #[tokio::test]
    async fn http_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v4/advertisers/1"))
                .respond_with(status_code(502).body("bad gateway")),
        );

        let client = test_client(&server).await?;
        let err = client.get_advertiser(1).send().await.unwrap_err();
        assert_eq!(err.http_status_code(), Some(502));
        assert!(err.status().is_none(), "{err:?}");
        assert_eq!(
            err.http_payload().map(|p| p.as_ref()),
            Some(b"bad gateway".as_slice())
        );
        Ok(())
    }

    #[tokio::test]
    async fn malformed_response() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v4/advertisers/1"))
                .respond_with(json_encoded(json!({"advertiserId": "not-a-number"}))),
        );

        let client = test_client(&server).await?;
        let err = client.get_advertiser(1).send().await.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }
}
