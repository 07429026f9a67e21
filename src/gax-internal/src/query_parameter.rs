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

//! Defines traits and helpers to serialize query parameters.
//!
//! The generated request types hold query parameters as optional (or
//! repeated) fields. The generated code adds each field with [add], without
//! any conditional code: unset fields add nothing, repeated fields add one
//! parameter per element, and scalars are formatted the same way as in JSON
//! strings. In particular, 64-bit integers use their decimal representation,
//! and timestamps use RFC 3339.

/// Adds `value` to the query string in `builder`.
pub fn add<T>(builder: reqwest::RequestBuilder, name: &str, value: &T) -> reqwest::RequestBuilder
where
    T: QueryParameter,
{
    value.add(builder, name)
}

/// Types that can be used as a query parameter.
pub trait QueryParameter {
    fn add(&self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder;
}

impl<T: QueryParameter> QueryParameter for Option<T> {
    fn add(&self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        match self {
            None => builder,
            Some(v) => v.add(builder, name),
        }
    }
}

impl<T: QueryParameter> QueryParameter for Vec<T> {
    fn add(&self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        self.iter().fold(builder, |builder, v| v.add(builder, name))
    }
}

macro_rules! scalar_parameter {
    ($($t:ty),*) => {
        $(
            impl QueryParameter for $t {
                fn add(&self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
                    builder.query(&[(name, self.to_string())])
                }
            }
        )*
    };
}

scalar_parameter!(i32, i64, u32, u64, f32, f64, bool, String, wkt::Timestamp);

#[cfg(test)]
mod tests {
    use super::*;
    type TestResult = anyhow::Result<()>;

    fn split_query(r: &reqwest::Request) -> Vec<&str> {
        r.url()
            .query()
            .unwrap_or_default()
            .split("&")
            .filter(|p| !p.is_empty())
            .collect()
    }

    fn new_builder() -> anyhow::Result<reqwest::RequestBuilder> {
        Ok(reqwest::Client::builder()
            .build()?
            .get("https://test.googleapis.com/v4/unused"))
    }

    #[test]
    fn none() -> TestResult {
        let builder = add(new_builder()?, "pageSize", &None::<i32>);
        let builder = add(builder, "filter", &None::<String>);
        let request = builder.build()?;
        assert_eq!(request.url().query(), None);
        Ok(())
    }

    #[test]
    fn some() -> TestResult {
        let builder = add(new_builder()?, "partnerId", &Some(123456789012345_i64));
        let builder = add(builder, "pageSize", &Some(50_i32));
        let builder = add(builder, "filter", &Some("entityStatus=\"ENTITY_STATUS_ACTIVE\"".to_string()));
        let request = builder.build()?;
        assert_eq!(
            split_query(&request),
            vec![
                "partnerId=123456789012345",
                "pageSize=50",
                "filter=entityStatus%3D%22ENTITY_STATUS_ACTIVE%22",
            ]
        );
        Ok(())
    }

    #[test]
    fn int64_extremes() -> TestResult {
        let builder = add(new_builder()?, "max", &Some(i64::MAX));
        let builder = add(builder, "min", &Some(i64::MIN));
        let builder = add(builder, "umax", &Some(u64::MAX));
        let request = builder.build()?;
        assert_eq!(
            split_query(&request),
            vec![
                "max=9223372036854775807",
                "min=-9223372036854775808",
                "umax=18446744073709551615",
            ]
        );
        Ok(())
    }

    #[test]
    fn repeated() -> TestResult {
        let builder = add(new_builder()?, "id", &vec![1_i64, 3, 5]);
        let request = builder.build()?;
        assert_eq!(split_query(&request), vec!["id=1", "id=3", "id=5"]);

        let builder = add(new_builder()?, "id", &Vec::<i64>::new());
        let request = builder.build()?;
        assert_eq!(request.url().query(), None);
        Ok(())
    }

    #[test]
    fn scalars() -> TestResult {
        let builder = add(new_builder()?, "flag", &true);
        let builder = add(builder, "ratio", &7.5_f64);
        let builder = add(builder, "count", &42_u32);
        let request = builder.build()?;
        assert_eq!(split_query(&request), vec!["flag=true", "ratio=7.5", "count=42"]);
        Ok(())
    }

    #[test]
    fn timestamp() -> TestResult {
        let builder = add(new_builder()?, "timestamp", &Some(wkt::Timestamp::default()));
        let request = builder.build()?;
        assert_eq!(
            request.url().query(),
            Some("timestamp=1970-01-01T00%3A00%3A00Z")
        );
        Ok(())
    }
}
