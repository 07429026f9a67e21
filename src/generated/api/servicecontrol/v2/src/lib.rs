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

//! Google API Client Libraries for Rust - Service Control API
//!
//! This crate contains the client for the [Service Control API] v2. Managed
//! services use it to admit requests (`check`) and to report telemetry and
//! audit logs (`report`).
//!
//! ```no_run
//! # async fn sample() -> anyhow::Result<()> {
//! use google_cloud_api_servicecontrol_v2::client::ServiceController;
//! use google_cloud_api_servicecontrol_v2::model::ResourceInfo;
//! use rpc_context::model::AttributeContext;
//! let client = ServiceController::new().await?;
//! let response = client
//!     .check("displayvideo.googleapis.com")
//!     .set_service_config_id("2025-01-01r0")
//!     .set_attributes(AttributeContext::new())
//!     .set_resources([ResourceInfo::new().set_name("advertisers/123")])
//!     .send()
//!     .await?;
//! println!("{response:?}");
//! # Ok(()) }
//! ```
//!
//! [Service Control API]: https://cloud.google.com/service-infrastructure/docs/service-control/reference/rest

pub use gax::Result;
pub use gax::error::Error;

/// The messages and enums that are part of this client library.
pub mod model;

/// Request builders.
pub mod builder;

/// The client for the service.
pub mod client;

pub(crate) const DEFAULT_ENDPOINT: &str = "https://servicecontrol.googleapis.com";
