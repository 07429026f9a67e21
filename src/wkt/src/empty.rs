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

/// The response of methods that return no data, such as `DELETE` calls.
///
/// Services return `{}` or a `204 No Content` response for these methods.
/// Any fields the service may add later are kept, so callers can inspect them
/// without upgrading the library.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[non_exhaustive]
pub struct Empty {
    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Empty {
    pub fn new() -> Self {
        Self::default()
    }
}
