//! Arrival time and arrival record models.
//!
//! This module defines [`ArrivalTime`], a validated wall-clock time of day,
//! and [`ArrivalRecord`], the input to a single classification.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Number of minutes in a day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A wall-clock time of day in the institution's local timezone.
///
/// Values can only be built through [`ArrivalTime::new`], parsing, or a
/// [`NaiveTime`], so an `ArrivalTime` always holds `0 <= hour <= 23` and
/// `0 <= minute <= 59`. Serializes as an `"HH:MM"` string.
///
/// # Example
///
/// ```
/// use tardiness_engine::models::ArrivalTime;
///
/// let time = ArrivalTime::new(9, 30).unwrap();
/// assert_eq!(time.minutes_since_midnight(), 570);
/// assert_eq!(time.to_string(), "09:30");
///
/// assert!(ArrivalTime::new(24, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArrivalTime {
    hour: u32,
    minute: u32,
}

impl ArrivalTime {
    /// Creates an arrival time, failing with [`EngineError::InvalidTime`]
    /// when either field is out of range.
    pub fn new(hour: u32, minute: u32) -> EngineResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(EngineError::InvalidTime { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    /// Creates an arrival time from minutes since midnight.
    pub fn from_minutes(minutes: u32) -> EngineResult<Self> {
        if minutes >= MINUTES_PER_DAY {
            return Err(EngineError::InvalidTime {
                hour: minutes / 60,
                minute: minutes % 60,
            });
        }
        Ok(Self {
            hour: minutes / 60,
            minute: minutes % 60,
        })
    }

    /// The hour of day (0-23).
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// The minute of the hour (0-59).
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Minutes elapsed since local midnight.
    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

impl From<NaiveTime> for ArrivalTime {
    /// Seconds and sub-second precision are truncated.
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }
}

impl fmt::Display for ArrivalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ArrivalTime {
    type Err = EngineError;

    /// Parses `"HH:MM"` (or `"H:MM"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || EngineError::InvalidRecord {
            field: "arrival_time".to_string(),
            message: format!("expected HH:MM, got '{}'", s),
        };

        let (hour, minute) = s.trim().split_once(':').ok_or_else(malformed)?;
        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !(1..=2).contains(&hour.len()) || minute.len() != 2 || !digits(hour) || !digits(minute) {
            return Err(malformed());
        }
        let hour = hour.parse::<u32>().map_err(|_| malformed())?;
        let minute = minute.parse::<u32>().map_err(|_| malformed())?;

        Self::new(hour, minute)
    }
}

impl TryFrom<String> for ArrivalTime {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ArrivalTime> for String {
    fn from(time: ArrivalTime) -> Self {
        time.to_string()
    }
}

/// The input to a single classification.
///
/// `certificate_provided` has no default: the outcome depends on it, so
/// callers must state it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalRecord {
    /// Local wall-clock time the student arrived.
    pub arrival_time: ArrivalTime,
    /// Whether a medical certificate was presented on arrival.
    pub certificate_provided: bool,
}

impl ArrivalRecord {
    /// Creates a new arrival record.
    pub fn new(arrival_time: ArrivalTime, certificate_provided: bool) -> Self {
        Self {
            arrival_time,
            certificate_provided,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_day_bounds() {
        assert_eq!(ArrivalTime::new(0, 0).unwrap().minutes_since_midnight(), 0);
        assert_eq!(
            ArrivalTime::new(23, 59).unwrap().minutes_since_midnight(),
            1439
        );
    }

    #[test]
    fn test_new_rejects_hour_24() {
        assert_eq!(
            ArrivalTime::new(24, 0),
            Err(EngineError::InvalidTime { hour: 24, minute: 0 })
        );
    }

    #[test]
    fn test_new_rejects_minute_60() {
        assert_eq!(
            ArrivalTime::new(9, 60),
            Err(EngineError::InvalidTime { hour: 9, minute: 60 })
        );
    }

    #[test]
    fn test_from_minutes() {
        let time = ArrivalTime::from_minutes(571).unwrap();
        assert_eq!((time.hour(), time.minute()), (9, 31));
        assert!(ArrivalTime::from_minutes(MINUTES_PER_DAY).is_err());
    }

    #[test]
    fn test_from_naive_time_truncates_seconds() {
        let naive = NaiveTime::from_hms_opt(9, 30, 59).unwrap();
        assert_eq!(ArrivalTime::from(naive), ArrivalTime::new(9, 30).unwrap());
    }

    #[test]
    fn test_parse_hh_mm() {
        let time: ArrivalTime = "08:43".parse().unwrap();
        assert_eq!((time.hour(), time.minute()), (8, 43));

        let time: ArrivalTime = "8:05".parse().unwrap();
        assert_eq!(time.to_string(), "08:05");
    }

    #[test]
    fn test_parse_out_of_range_is_invalid_time() {
        assert_eq!(
            "24:00".parse::<ArrivalTime>(),
            Err(EngineError::InvalidTime { hour: 24, minute: 0 })
        );
    }

    #[test]
    fn test_parse_malformed_is_invalid_record() {
        for input in [
            "", "0930", "9:3", "ab:cd", "09:30:00", "-1:30", "09:+5", "+9:30", ":30", "009:30",
        ] {
            match input.parse::<ArrivalTime>() {
                Err(EngineError::InvalidRecord { field, .. }) => {
                    assert_eq!(field, "arrival_time", "input {:?}", input)
                }
                other => panic!("expected InvalidRecord for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_serializes_as_string() {
        let time = ArrivalTime::new(11, 33).unwrap();
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, "\"11:33\"");

        let back: ArrivalTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, time);
    }

    #[test]
    fn test_deserialize_rejects_invalid_time() {
        assert!(serde_json::from_str::<ArrivalTime>("\"25:00\"").is_err());
    }

    #[test]
    fn test_arrival_record_requires_certificate_flag() {
        let json = r#"{"arrival_time": "09:31"}"#;
        let result: Result<ArrivalRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("certificate_provided"));
    }

    #[test]
    fn test_ordering_follows_clock() {
        let early = ArrivalTime::new(8, 59).unwrap();
        let late = ArrivalTime::new(9, 0).unwrap();
        assert!(early < late);
    }
}
