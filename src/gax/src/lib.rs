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

//! Google APIs helpers.
//!
//! This crate contains the types shared by all the client libraries in this
//! workspace: the error returned by every client method, the per-request
//! options, the client builder, and the authentication credentials.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping REST calls.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

pub mod client_builder;
pub mod credentials;

/// The core error types used by generated clients.
pub mod error;

pub mod options;
