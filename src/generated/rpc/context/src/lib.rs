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

//! Google API Client Libraries for Rust - RPC Audit and Logging Attributes
//!
//! This crate contains the types describing a network activity, such as an
//! HTTP request, as seen by a Google API. Services such as Service Control
//! use them to carry the attributes of the calls they admit and report.

/// The messages and enums that are part of this client library.
pub mod model;
