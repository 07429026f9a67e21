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

//! Verify fields unknown to the library survive a round trip.
//!
//! The generated messages keep any field they do not recognize in a flattened
//! map, and emit it unchanged on serialization.

#[cfg(test)]
mod tests {
    use google_cloud_wkt::Timestamp;
    use serde_json::json;

    type Result = anyhow::Result<()>;

    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct MessageWithUnknown {
        #[serde(skip_serializing_if = "Option::is_none")]
        #[serde_as(as = "Option<google_cloud_wkt::internal::I64>")]
        pub field_id: Option<i64>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub update_time: Option<Timestamp>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub nested: Option<Box<MessageWithUnknown>>,

        #[serde(flatten)]
        _unknown_fields: serde_json::Map<String, serde_json::Value>,
    }

    impl MessageWithUnknown {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_field_id<V: Into<i64>>(mut self, v: V) -> Self {
            self.field_id = Some(v.into());
            self
        }
    }

    #[test]
    fn roundtrip_from_json() -> Result {
        let input = json!({
            "fieldId": "123456789012345",
            "updateTime": "2023-05-01T12:00:00Z",
            "someFutureId": "42",
            "someFutureObject": {
                "a": 7,
                "b": "8",
            },
            "nested": {
                "fieldId": "7",
                "nestedFuture": [1, 2, 3],
            },
        });

        let message = serde_json::from_value::<MessageWithUnknown>(input.clone())?;
        assert_eq!(message.field_id, Some(123_456_789_012_345));
        assert_eq!(
            message.update_time,
            Some(Timestamp::try_from("2023-05-01T12:00:00Z")?)
        );
        assert_eq!(
            message.nested.as_ref().and_then(|n| n.field_id),
            Some(7)
        );
        let got = serde_json::to_value(message)?;
        assert_eq!(got, input);
        Ok(())
    }

    #[test]
    fn unknown_fields_are_untouched() -> Result {
        // Unknown fields that look like 64-bit integers are not transcoded.
        let input = json!({"someFutureId": "007", "other": 9007199254740993_u64});
        let message = serde_json::from_value::<MessageWithUnknown>(input.clone())?;
        assert_eq!(message.field_id, None);
        assert_eq!(serde_json::to_value(message)?, input);
        Ok(())
    }

    #[test]
    fn to_json() -> Result {
        let message = MessageWithUnknown::new().set_field_id(42);
        let got = serde_json::to_value(message)?;
        assert_eq!(got, json!({"fieldId": "42"}));
        Ok(())
    }
}
