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

//! Implementation details used by the generated `model` modules.
//!
//! Applications should not need these types directly. The generated code uses
//! them in `#[serde_as(as = ...)]` annotations, for example:
//!
//! ```
//! #[serde_with::serde_as]
//! #[derive(serde::Deserialize, serde::Serialize)]
//! #[serde(rename_all = "camelCase")]
//! struct Advertiser {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     #[serde_as(as = "Option<google_cloud_wkt::internal::I64>")]
//!     advertiser_id: Option<i64>,
//! }
//! let input = Advertiser { advertiser_id: Some(i64::MAX) };
//! let json = serde_json::to_value(&input)?;
//! assert_eq!(json, serde_json::json!({"advertiserId": "9223372036854775807"}));
//! # Ok::<(), serde_json::Error>(())
//! ```

#[macro_use]
mod visitor_64;

mod int64;
pub use int64::I64;
mod uint64;
pub use uint64::U64;
