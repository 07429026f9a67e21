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

//! Well-known wire types for Google REST APIs.
//!
//! Google REST APIs use JSON on the wire, with a couple of conventions that do
//! not map directly to JSON types:
//!
//! - 64-bit integers are sent as decimal strings. JSON numbers are IEEE 754
//!   doubles in most implementations, and lose precision above 2^53.
//! - Timestamps are sent as [RFC 3339] strings.
//!
//! This crate provides the in-memory representation for these values, and the
//! [serde] adaptors used by the generated `model` modules to convert them.
//!
//! [RFC 3339]: https://datatracker.ietf.org/doc/html/rfc3339

mod empty;
pub use crate::empty::*;
mod timestamp;
pub use crate::timestamp::*;

#[doc(hidden)]
pub mod internal;
