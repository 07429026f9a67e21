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

/// Defines a visitor for 64-bit integers sent as decimal strings.
///
/// The visitor accepts:
/// - strings containing a decimal integer, optionally signed,
/// - JSON integer numbers, which some services emit for small values.
///
/// Anything else fails with a data error: fractions, exponents, floating
/// point numbers, and values outside the range of the target type. The wire
/// value must round-trip exactly, so nothing is rounded or truncated.
macro_rules! visitor_64 {
    ($name: ident, $t: ty, $msg: literal) => {
        struct $name;

        impl serde::de::Visitor<'_> for $name {
            type Value = $t;

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                // Parsing through `i128` covers the full range of both `i64`
                // and `u64`, the range check happens in `visit_i128()`.
                let parsed = value
                    .parse::<i128>()
                    .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(value), &self))?;
                self.visit_i128(parsed)
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                self.visit_i128(value as i128)
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                self.visit_i128(value as i128)
            }

            fn visit_i128<E>(self, value: i128) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                <$t>::try_from(value).map_err(|_| {
                    E::invalid_value(serde::de::Unexpected::Other(&value.to_string()), &self)
                })
            }

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str($msg)
            }
        }
    };
}
