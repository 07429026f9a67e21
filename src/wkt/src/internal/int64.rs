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

/// Converts `i64` fields to and from their decimal string wire format.
pub struct I64;

impl<'de> serde_with::DeserializeAs<'de, i64> for I64 {
    fn deserialize_as<D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_any(I64Visitor)
    }
}

visitor_64!(I64Visitor, i64, "a 64-bit signed integer as a decimal string");

impl serde_with::SerializeAs<i64> for I64 {
    fn serialize_as<S>(source: &i64, serializer: S) -> Result<S::Ok, S::Error>
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
    #[test_case("-42", -42)]
    #[test_case(-42, -42; "negative number")]
    #[test_case("+7", 7; "explicit sign")]
    #[test_case("123456789012345", 123_456_789_012_345)]
    #[test_case("9223372036854775807", i64::MAX; "max as string")]
    #[test_case(i64::MAX, i64::MAX; "max as number")]
    #[test_case("-9223372036854775808", i64::MIN; "min as string")]
    #[test_case(i64::MIN, i64::MIN; "min as number")]
    // Always serialized as a string, whatever the input format.
    fn deser_and_ser<T: serde::Serialize>(input: T, want: i64) -> Result<()> {
        let got = I64::deserialize_as(json!(input))?;
        assert_eq!(got, want);

        let serialized = I64::serialize_as(&got, serde_json::value::Serializer)?;
        assert_eq!(serialized, json!(want.to_string()));
        Ok(())
    }

    #[test_case(json!(format!("{}", i64::MAX as i128 + 1)); "max plus one")]
    #[test_case(json!(format!("{}", i64::MIN as i128 - 1)); "min minus one")]
    #[test_case(json!(u64::MAX); "u64 max as number")]
    #[test_case(json!("99999999999999999999999999999999999999999"); "beyond i128")]
    #[test_case(json!("abc"))]
    #[test_case(json!(""); "empty")]
    #[test_case(json!(" 12"); "leading space")]
    #[test_case(json!("2.0"); "fraction string")]
    #[test_case(json!("5e4"); "exponent string")]
    #[test_case(json!(3e5); "float")]
    #[test_case(json!(123.4); "fractional float")]
    #[test_case(json!(true); "bool")]
    #[test_case(json!({}); "object")]
    #[test_case(json!([]); "array")]
    fn deser_error(input: Value) {
        let got = I64::deserialize_as(input).unwrap_err();
        assert!(got.is_data(), "{got:?}");
    }

    #[test]
    fn roundtrip_beyond_f64_precision() -> Result<()> {
        // 2^53 + 1 is the first integer a JSON double cannot represent.
        let input = (1_i64 << 53) + 1;
        let wire = I64::serialize_as(&input, serde_json::value::Serializer)?;
        assert_eq!(wire, json!("9007199254740993"));
        let got = I64::deserialize_as(wire)?;
        assert_eq!(got, input);
        Ok(())
    }
}
