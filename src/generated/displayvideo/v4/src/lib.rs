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

//! Google API Client Libraries for Rust - Display & Video 360 API
//!
//! This crate contains the client for the [Display & Video 360 API] v4. It
//! covers advertisers, campaigns, line items, and inventory sources.
//!
//! Resource IDs are 64-bit integers. They are sent as decimal strings on the
//! wire and exposed as `i64` in the [model]. Timestamps are exposed as
//! [wkt::Timestamp].
//!
//! ```no_run
//! # async fn sample() -> anyhow::Result<()> {
//! use google_cloud_displayvideo_v4::client::DisplayVideo;
//! let client = DisplayVideo::new().await?;
//! let response = client
//!     .list_campaigns(123456789_i64)
//!     .set_filter("entityStatus=\"ENTITY_STATUS_ACTIVE\"")
//!     .set_page_size(50)
//!     .send()
//!     .await?;
//! for campaign in response.campaigns {
//!     println!("{:?} {:?}", campaign.campaign_id, campaign.display_name);
//! }
//! # Ok(()) }
//! ```
//!
//! [Display & Video 360 API]: https://developers.google.com/display-video/api/reference/rest

pub use gax::Result;
pub use gax::error::Error;

/// The messages and enums that are part of this client library.
pub mod model;

/// Request builders.
pub mod builder;

/// The client for the service.
pub mod client;

pub(crate) const DEFAULT_ENDPOINT: &str = "https://displayvideo.googleapis.com";
