/*
 * Copyright 2025 Vijaykumar Singh
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Hybrid timestamps: physical milliseconds in the high bits, an 18-bit
//! logical counter in the low bits

use chrono::{DateTime, Utc};

use crate::core::errors::ValidationError;

pub const LOGICAL_BITS: u32 = 18;

/// Unix seconds of the physical component
pub fn hybridts_to_unixtime(hybridts: u64) -> u64 {
    (hybridts >> LOGICAL_BITS) / 1000
}

/// Hybrid timestamp with a zero logical counter
pub fn unixtime_to_hybridts(unixtime: u64) -> Result<u64, ValidationError> {
    unixtime
        .checked_mul(1000)
        .and_then(physical_to_hybridts)
        .ok_or(ValidationError::TimestampParam)
}

pub fn datetime_to_hybridts(datetime: DateTime<Utc>) -> Result<u64, ValidationError> {
    let millis = u64::try_from(datetime.timestamp_millis()).map_err(|_| ValidationError::TimestampParam)?;
    physical_to_hybridts(millis).ok_or(ValidationError::TimestampParam)
}

/// Parse a decimal-digit string such as `"443515248113729538"`
pub fn parse_time_param(value: &str) -> Result<u64, ValidationError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::TimestampParam);
    }
    value.parse().map_err(|_| ValidationError::TimestampParam)
}

pub fn hybridts_str_to_unixtime(hybridts: &str) -> Result<u64, ValidationError> {
    parse_time_param(hybridts).map(hybridts_to_unixtime)
}

pub fn unixtime_str_to_hybridts(unixtime: &str) -> Result<u64, ValidationError> {
    parse_time_param(unixtime).and_then(unixtime_to_hybridts)
}

fn physical_to_hybridts(millis: u64) -> Option<u64> {
    (millis.leading_zeros() >= LOGICAL_BITS).then(|| millis << LOGICAL_BITS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_hybridts_round_trip_whole_seconds() {
        let ts = unixtime_to_hybridts(1_700_000_000).unwrap();
        assert_eq!(ts, 1_700_000_000_000u64 << 18);
        assert_eq!(hybridts_to_unixtime(ts), 1_700_000_000);
    }

    #[test]
    fn test_logical_counter_is_ignored() {
        let ts = (1_000_000u64 << 18) | 0x3_FFFF;
        assert_eq!(hybridts_to_unixtime(ts), 1000);
    }

    #[test]
    fn test_string_params_must_be_digits() {
        assert_eq!(hybridts_str_to_unixtime("abc"), Err(ValidationError::TimestampParam));
        assert_eq!(hybridts_str_to_unixtime(""), Err(ValidationError::TimestampParam));
        assert_eq!(unixtime_str_to_hybridts("-1"), Err(ValidationError::TimestampParam));
        assert_eq!(unixtime_str_to_hybridts("1").unwrap(), 1000u64 << 18);
    }

    #[test]
    fn test_datetime_conversion() {
        let dt = Utc.timestamp_opt(1_600_000_000, 0).unwrap();
        assert_eq!(datetime_to_hybridts(dt).unwrap(), unixtime_to_hybridts(1_600_000_000).unwrap());
        let before_epoch = Utc.timestamp_opt(-10, 0).unwrap();
        assert!(datetime_to_hybridts(before_epoch).is_err());
    }

    #[test]
    fn test_overflow_is_rejected() {
        assert!(unixtime_to_hybridts(u64::MAX / 1000).is_err());
    }
}
