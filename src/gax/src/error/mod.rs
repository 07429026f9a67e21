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

//! Errors returned by the client libraries.
//!
//! The libraries distinguish between errors detected before the request is
//! sent (e.g. a missing path parameter), errors sending the request or
//! receiving the response (e.g. the connection is dropped), and errors
//! returned by the service itself.

mod core_error;
pub use core_error::*;
mod credentials;
pub use credentials::*;

/// Error details returned by Google REST services.
pub mod rpc;
