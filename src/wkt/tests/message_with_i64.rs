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

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use std::collections::HashMap;
    use test_case::test_case;

    type Result = anyhow::Result<()>;

    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct MessageWithI64 {
        #[serde(skip_serializing_if = "Option::is_none")]
        #[serde_as(as = "Option<google_cloud_wkt::internal::I64>")]
        pub optional: Option<i64>,

        #[serde(skip_serializing_if = "Vec::is_empty")]
        #[serde_as(as = "Vec<google_cloud_wkt::internal::I64>")]
        pub repeated: Vec<i64>,

        #[serde(skip_serializing_if = "HashMap::is_empty")]
        #[serde_as(as = "HashMap<_, google_cloud_wkt::internal::I64>")]
        pub map_value: HashMap<String, i64>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub child: Option<Box<MessageWithI64>>,

        #[serde(skip_serializing_if = "Vec::is_empty")]
        pub children: Vec<MessageWithI64>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub label: Option<String>,
    }

    // 1 << 60 cannot be represented as a JSON number without loss, those are
    // IEEE 754 doubles with a 52-bit mantissa.
    const TEST_VALUE: i64 = 1_i64 << 60;

    #[test_case("123", 123)]
    #[test_case(456, 456)]
    #[test_case("-789", -789)]
    #[test_case("0", 0; "zero is not absent")]
    #[test_case(format!("{TEST_VALUE}"), TEST_VALUE)]
    #[test_case(format!("{}", i64::MAX), i64::MAX; "max")]
    #[test_case(format!("{}", i64::MIN), i64::MIN; "min")]
    fn optional<T>(input: T, want: i64) -> Result
    where
        T: serde::ser::Serialize,
    {
        let got = serde_json::from_value::<MessageWithI64>(json!({"optional": input}))?;
        assert_eq!(
            got,
            MessageWithI64 {
                optional: Some(want),
                ..Default::default()
            }
        );
        let trip = serde_json::to_value(&got)?;
        assert_eq!(trip, json!({"optional": want.to_string()}));
        Ok(())
    }

    #[test]
    fn optional_absent_stays_absent() -> Result {
        let got = serde_json::from_value::<MessageWithI64>(json!({}))?;
        assert_eq!(got.optional, None);
        assert_eq!(serde_json::to_value(&got)?, json!({}));

        let input = MessageWithI64 {
            label: Some("only label".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&input)?, json!({"label": "only label"}));
        Ok(())
    }

    #[test]
    fn repeated() -> Result {
        let input = json!({"repeated": ["1", 2, "-3", format!("{TEST_VALUE}")]});
        let got = serde_json::from_value::<MessageWithI64>(input)?;
        assert_eq!(got.repeated, vec![1, 2, -3, TEST_VALUE]);
        let trip = serde_json::to_value(&got)?;
        assert_eq!(
            trip,
            json!({"repeated": ["1", "2", "-3", TEST_VALUE.to_string()]})
        );
        Ok(())
    }

    #[test_case(json!({"repeated": []}))]
    #[test_case(json!({}))]
    fn repeated_default(input: Value) -> Result {
        let got = serde_json::from_value::<MessageWithI64>(input)?;
        assert_eq!(got, MessageWithI64::default());
        assert_eq!(serde_json::to_value(&got)?, json!({}));
        Ok(())
    }

    #[test]
    fn map_value() -> Result {
        let input = json!({"mapValue": {"a": "123", "b": 456}});
        let got = serde_json::from_value::<MessageWithI64>(input)?;
        assert_eq!(
            got.map_value,
            HashMap::from([("a".to_string(), 123), ("b".to_string(), 456)])
        );
        let trip = serde_json::to_value(&got)?;
        assert_eq!(trip, json!({"mapValue": {"a": "123", "b": "456"}}));
        Ok(())
    }

    #[test]
    fn nested() -> Result {
        let input = json!({
            "label": "parent",
            "child": {"optional": "9223372036854775807", "label": "child"},
            "children": [
                {"optional": "1"},
                {"label": "no id"},
            ],
        });
        let got = serde_json::from_value::<MessageWithI64>(input.clone())?;
        let want = MessageWithI64 {
            label: Some("parent".into()),
            child: Some(Box::new(MessageWithI64 {
                optional: Some(i64::MAX),
                label: Some("child".into()),
                ..Default::default()
            })),
            children: vec![
                MessageWithI64 {
                    optional: Some(1),
                    ..Default::default()
                },
                MessageWithI64 {
                    label: Some("no id".into()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(got, want);
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test_case(json!({"optional": "abc"}))]
    #[test_case(json!({"optional": "1.5"}))]
    #[test_case(json!({"optional": 1.5}))]
    #[test_case(json!({"optional": "9223372036854775808"}); "overflow")]
    #[test_case(json!({"repeated": ["1", "x"]}); "bad element")]
    #[test_case(json!({"child": {"optional": "x"}}); "bad nested")]
    fn malformed(input: Value) {
        let got = serde_json::from_value::<MessageWithI64>(input);
        assert!(got.is_err(), "{got:?}");
    }
}
