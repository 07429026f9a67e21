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

/// Converts `u64` fields to and from their decimal string wire format.
pub struct U64;

impl<'de> serde_with::DeserializeAs<'de, u64> for U64 {
    fn deserialize_as<D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_any(U64Visitor)
    }
}

visitor_64!(U64Visitor, u64, "a 64-bit unsigned integer as a decimal string");

impl serde_with::SerializeAs<u64> for U64 {
    fn serialize_as<S>(source: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::{Value, json};
    use serde_with::{DeserializeAs, SerializeAs};
    use test_case::test_case;

    #[test_case("0", 0; "zero string")]
    #[test_case(0, 0; "zero number")]
    #[test_case("84", 84)]
    #[test_case(84, 84; "number")]
    #[test_case("18446744073709551615", u64::MAX; "max as string")]
    #[test_case(u64::MAX, u64::MAX; "max as number")]
    fn deser_and_ser<T: serde::Serialize>(input: T, want: u64) -> Result<()> {
        let got = U64::deserialize_as(json!(input))?;
        assert_eq!(got, want);

        let serialized = U64::serialize_as(&got, serde_json::value::Serializer)?;
        assert_eq!(serialized, json!(want.to_string()));
        Ok(())
    }

    #[test_case(json!("-1"); "negative string")]
    #[test_case(json!(-1); "negative number")]
    #[test_case(json!("18446744073709551616"); "max plus one")]
    #[test_case(json!("abc"))]
    #[test_case(json!("1.5"); "fraction string")]
    #[test_case(json!(2.0); "float")]
    #[test_case(json!(null); "null")]
    #[test_case(json!({}); "object")]
    fn deser_error(input: Value) {
        let got = U64::deserialize_as(input).unwrap_err();
        assert!(got.is_data(), "{got:?}");
    }
}
