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

use time::format_description::well_known::Rfc3339;

/// A point in time, independent of any time zone or calendar.
///
/// The value is stored as seconds and nanoseconds since the Unix epoch
/// (1970-01-01T00:00:00Z). Negative seconds represent times before the epoch,
/// the nanoseconds are always non-negative. The supported range is
/// `0001-01-01T00:00:00Z` to `9999-12-31T23:59:59.999999999Z`, the range that
/// can be represented as an RFC 3339 string with a four digit year.
///
/// On the wire the value is an RFC 3339 string. Any UTC offset is accepted on
/// input, the output is always in UTC with zero, three, six, or nine
/// fractional digits.
///
/// # Example
/// ```
/// # use google_cloud_wkt::Timestamp;
/// let ts = Timestamp::try_from("2023-05-01T12:00:00Z")?;
/// assert_eq!(ts.seconds(), 1_682_942_400);
/// assert_eq!(ts.to_string(), "2023-05-01T12:00:00Z");
/// # Ok::<(), google_cloud_wkt::TimestampError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub struct Timestamp {
    seconds: i64,
    nanos: i32,
}

/// Errors creating, parsing, or converting a [Timestamp].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum TimestampError {
    /// The seconds or nanoseconds are outside the supported range.
    #[error("seconds and/or nanoseconds out of range")]
    OutOfRange,

    /// The input is not a valid RFC 3339 timestamp.
    #[error("cannot parse timestamp, source={0}")]
    Parse(#[source] BoxedError),
}

type BoxedError = Box<dyn std::error::Error + Send + Sync>;
type Error = TimestampError;

const NS: i128 = 1_000_000_000;

impl Timestamp {
    /// The earliest supported value, `0001-01-01T00:00:00Z`, in seconds.
    pub const MIN_SECONDS: i64 = -62_135_596_800;

    /// The latest supported value, `9999-12-31T23:59:59Z`, in seconds.
    pub const MAX_SECONDS: i64 = 253_402_300_799;

    pub const MIN_NANOS: i32 = 0;

    pub const MAX_NANOS: i32 = 999_999_999;

    /// Creates a new timestamp, validating both components.
    pub fn new(seconds: i64, nanos: i32) -> Result<Self, Error> {
        if !(Self::MIN_SECONDS..=Self::MAX_SECONDS).contains(&seconds) {
            return Err(Error::OutOfRange);
        }
        if !(Self::MIN_NANOS..=Self::MAX_NANOS).contains(&nanos) {
            return Err(Error::OutOfRange);
        }
        Ok(Self { seconds, nanos })
    }

    /// Creates a new timestamp, normalizing the nanoseconds and saturating to
    /// the supported range.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_wkt::Timestamp;
    /// let ts = Timestamp::clamp(10, -500_000_000);
    /// assert_eq!((ts.seconds(), ts.nanos()), (9, 500_000_000));
    /// let ts = Timestamp::clamp(i64::MAX, 0);
    /// assert_eq!(ts.seconds(), Timestamp::MAX_SECONDS);
    /// ```
    pub fn clamp(seconds: i64, nanos: i32) -> Self {
        let min = Self::MIN_SECONDS as i128 * NS;
        let max = Self::MAX_SECONDS as i128 * NS + Self::MAX_NANOS as i128;
        let total = (seconds as i128 * NS + nanos as i128).clamp(min, max);
        Self {
            seconds: total.div_euclid(NS) as i64,
            nanos: total.rem_euclid(NS) as i32,
        }
    }

    /// Seconds since the Unix epoch.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Non-negative fractions of a second, at nanosecond resolution.
    pub fn nanos(&self) -> i32 {
        self.nanos
    }

    fn from_unix_nanos(total: i128) -> Result<Self, Error> {
        let seconds = i64::try_from(total.div_euclid(NS)).map_err(|_| Error::OutOfRange)?;
        Self::new(seconds, total.rem_euclid(NS) as i32)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let odt = time::OffsetDateTime::from_unix_timestamp(self.seconds)
            .map_err(|_| std::fmt::Error)?;
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            odt.year(),
            u8::from(odt.month()),
            odt.day(),
            odt.hour(),
            odt.minute(),
            odt.second()
        )?;
        match self.nanos {
            0 => {}
            n if n % 1_000_000 == 0 => write!(f, ".{:03}", n / 1_000_000)?,
            n if n % 1_000 == 0 => write!(f, ".{:06}", n / 1_000)?,
            n => write!(f, ".{n:09}")?,
        }
        f.write_str("Z")
    }
}

impl From<Timestamp> for String {
    fn from(value: Timestamp) -> Self {
        value.to_string()
    }
}

impl TryFrom<&str> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let odt = time::OffsetDateTime::parse(value, &Rfc3339)
            .map_err(|e| Error::Parse(e.into()))?;
        Self::try_from(odt)
    }
}

impl TryFrom<&String> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl std::str::FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl TryFrom<time::OffsetDateTime> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: time::OffsetDateTime) -> Result<Self, Self::Error> {
        Self::from_unix_nanos(value.unix_timestamp_nanos())
    }
}

impl TryFrom<Timestamp> for time::OffsetDateTime {
    type Error = time::error::ComponentRange;

    fn try_from(value: Timestamp) -> Result<Self, Self::Error> {
        time::OffsetDateTime::from_unix_timestamp_nanos(
            value.seconds as i128 * NS + value.nanos as i128,
        )
    }
}

impl serde::ser::Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

struct TimestampVisitor;

impl serde::de::Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string with a timestamp in RFC 3339 format")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Timestamp::try_from(value).map_err(E::custom)
    }
}

impl<'de> serde::de::Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(TimestampVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;
    type Result = anyhow::Result<()>;

    #[test]
    fn unix_epoch() -> Result {
        let ts = Timestamp::default();
        let json = serde_json::to_value(ts)?;
        assert_eq!(json, json!("1970-01-01T00:00:00Z"));
        let roundtrip = serde_json::from_value::<Timestamp>(json)?;
        assert_eq!(ts, roundtrip);
        Ok(())
    }

    #[test_case(Timestamp::MIN_SECONDS - 1, 0; "seconds below range")]
    #[test_case(Timestamp::MAX_SECONDS + 1, 0; "seconds above range")]
    #[test_case(0, -1; "nanos below range")]
    #[test_case(0, 1_000_000_000; "nanos above range")]
    fn new_out_of_range(seconds: i64, nanos: i32) {
        let got = Timestamp::new(seconds, nanos);
        assert!(matches!(got, Err(Error::OutOfRange)), "{got:?}");
    }

    #[test_case(0, 0, 0, 0; "zero")]
    #[test_case(0, 1_234_567_890, 1, 234_567_890; "nanos overflow")]
    #[test_case(0, -1_400_000_000, -2, 600_000_000; "nanos underflow")]
    #[test_case(-1, 999_999_999, -1, 999_999_999; "before epoch")]
    #[test_case(i64::MAX, 0, Timestamp::MAX_SECONDS, Timestamp::MAX_NANOS; "saturate max")]
    #[test_case(i64::MIN, 0, Timestamp::MIN_SECONDS, 0; "saturate min")]
    fn clamp(seconds: i64, nanos: i32, want_seconds: i64, want_nanos: i32) {
        let got = Timestamp::clamp(seconds, nanos);
        assert_eq!((got.seconds(), got.nanos()), (want_seconds, want_nanos));
    }

    #[test_case("0001-01-01T00:00:00Z")]
    #[test_case("0001-01-01T00:00:00.123456789Z")]
    #[test_case("1960-01-01T00:00:00.123Z")]
    #[test_case("1969-12-31T23:59:59.999999Z")]
    #[test_case("1970-01-01T00:00:00.000001Z")]
    #[test_case("2023-05-01T12:00:00Z")]
    #[test_case("2024-10-19T12:34:56.789Z")]
    #[test_case("9999-12-31T23:59:59.999999999Z")]
    fn roundtrip(input: &str) -> Result {
        let ts = serde_json::from_value::<Timestamp>(json!(input))?;
        let got = serde_json::to_value(ts)?;
        assert_eq!(got, json!(input), "{ts:?}");
        Ok(())
    }

    #[test_case("2023-05-01T12:00:00Z", 1_682_942_400, 0)]
    #[test_case("2023-05-01T14:00:00+02:00", 1_682_942_400, 0; "positive offset")]
    #[test_case("2023-05-01T07:30:00-04:30", 1_682_942_400, 0; "negative offset")]
    #[test_case("2024-10-19T12:34:56.5Z", 1_729_341_296, 500_000_000; "short fraction")]
    #[test_case("1969-12-31T23:59:59.25Z", -1, 250_000_000; "before epoch")]
    fn parse(input: &str, seconds: i64, nanos: i32) -> Result {
        let got = Timestamp::try_from(input)?;
        assert_eq!(got, Timestamp::new(seconds, nanos)?);
        Ok(())
    }

    #[test_case("2024-10-19T12:34:56.5Z", "2024-10-19T12:34:56.500Z")]
    #[test_case("2024-10-19T12:34:56.1234Z", "2024-10-19T12:34:56.123400Z")]
    #[test_case("2024-10-19T12:34:56.1234567Z", "2024-10-19T12:34:56.123456700Z")]
    #[test_case("2024-10-19T14:34:56+02:00", "2024-10-19T12:34:56Z")]
    #[test_case("2023-05-01 12:00:00Z", "2023-05-01T12:00:00Z"; "space separator")]
    fn normalized(input: &str, want: &str) -> Result {
        let got = Timestamp::try_from(input)?;
        assert_eq!(String::from(got), want);
        Ok(())
    }

    #[test_case(""; "empty")]
    #[test_case("2023-05-01"; "date only")]
    #[test_case("2023-13-01T12:00:00Z"; "bad month")]
    #[test_case("not a timestamp")]
    fn parse_error(input: &str) {
        let got = Timestamp::try_from(input);
        assert!(matches!(got, Err(Error::Parse(_))), "{got:?}");
    }

    #[test_case(json!(1_682_942_400))]
    #[test_case(json!(null))]
    #[test_case(json!({"seconds": 1}))]
    #[test_case(json!("yesterday"))]
    fn deserialize_error(input: serde_json::Value) {
        let got = serde_json::from_value::<Timestamp>(input);
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn ordering() -> Result {
        let a = Timestamp::try_from("1969-12-31T23:59:59.5Z")?;
        let b = Timestamp::try_from("1970-01-01T00:00:00Z")?;
        let c = Timestamp::try_from("1970-01-01T00:00:00.000000001Z")?;
        assert!(a < b, "{a:?} {b:?}");
        assert!(b < c, "{b:?} {c:?}");
        Ok(())
    }

    #[test]
    fn from_str() -> Result {
        let got: Timestamp = "2023-05-01T12:00:00Z".parse()?;
        assert_eq!(got.seconds(), 1_682_942_400);
        Ok(())
    }

    #[test]
    fn time_conversions() -> Result {
        use time::macros::datetime;
        let odt = datetime!(2023-05-01 12:00:00.123456789 UTC);
        let ts = Timestamp::try_from(odt)?;
        assert_eq!((ts.seconds(), ts.nanos()), (1_682_942_400, 123_456_789));
        let back = time::OffsetDateTime::try_from(ts)?;
        assert_eq!(back, odt);

        let too_early = datetime!(0000-12-31 23:59:59 UTC);
        let got = Timestamp::try_from(too_early);
        assert!(matches!(got, Err(Error::OutOfRange)), "{got:?}");
        Ok(())
    }

    #[derive(Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    struct Helper {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub update_time: Option<Timestamp>,
    }

    #[test]
    fn serialize_in_struct() -> Result {
        let input = Helper::default();
        assert_eq!(serde_json::to_value(&input)?, json!({}));

        let input = Helper {
            update_time: Some(Timestamp::new(12, 345_678_900)?),
        };
        let json = serde_json::to_value(&input)?;
        assert_eq!(json, json!({"updateTime": "1970-01-01T00:00:12.345678900Z"}));
        let parsed = serde_json::from_value::<Helper>(json)?;
        assert_eq!(parsed, input);
        Ok(())
    }
}
