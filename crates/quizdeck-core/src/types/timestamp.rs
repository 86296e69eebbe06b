// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;
use std::fmt::Formatter;

use chrono::DateTime;
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A server timestamp, normalized to naive UTC.
///
/// The server emits both naive ISO timestamps (`2024-01-01T12:00:00.123456`)
/// and RFC 3339 timestamps with an offset, depending on the column.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub fn new(ndt: NaiveDateTime) -> Self {
        Self(ndt)
    }

    pub fn into_inner(self) -> NaiveDateTime {
        self.0
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(NAIVE_FORMAT))
    }
}

impl TryFrom<String> for Timestamp {
    type Error = ErrorReport;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&value) {
            return Ok(Timestamp(dt.naive_utc()));
        }
        let ndt = NaiveDateTime::parse_from_str(&value, NAIVE_FORMAT)
            .map_err(|_| ErrorReport::new(format!("Failed to parse timestamp: '{value}'.")))?;
        Ok(Timestamp(ndt))
    }
}

impl From<Timestamp> for String {
    fn from(ts: Timestamp) -> String {
        ts.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, NAIVE_FORMAT).unwrap()
    }

    #[test]
    fn test_timestamp_to_string() {
        let ts = Timestamp(naive("2023-10-05T14:30:15.123"));
        assert_eq!(ts.to_string(), "2023-10-05T14:30:15.123");
    }

    #[test]
    fn test_parse_naive_microseconds() {
        let ts = Timestamp::try_from("2023-10-05T14:30:15.123456".to_string()).unwrap();
        assert_eq!(ts.into_inner(), naive("2023-10-05T14:30:15.123456"));
    }

    #[test]
    fn test_parse_without_fraction() {
        let ts = Timestamp::try_from("2023-10-05T14:30:15".to_string()).unwrap();
        assert_eq!(ts.into_inner(), naive("2023-10-05T14:30:15"));
    }

    #[test]
    fn test_parse_with_offset_normalizes_to_utc() {
        let ts = Timestamp::try_from("2023-10-05T23:30:15+09:00".to_string()).unwrap();
        assert_eq!(ts.into_inner(), naive("2023-10-05T14:30:15"));
    }

    #[test]
    fn test_parse_garbage() {
        let result = Timestamp::try_from("yesterday".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize() {
        let ts: Timestamp = serde_json::from_str("\"2023-10-05T14:30:15.123\"").unwrap();
        assert_eq!(ts.into_inner(), naive("2023-10-05T14:30:15.123"));
    }
}
