//! Conversion of instants into the institution's wall-clock time.

use chrono::{DateTime, FixedOffset, Utc};

use crate::models::ArrivalTime;

/// Converts a UTC instant into a local arrival time for the given offset.
///
/// # Example
///
/// ```
/// use chrono::{FixedOffset, TimeZone, Utc};
/// use tardiness_engine::classification::local_arrival_time;
///
/// let offset = FixedOffset::west_opt(3 * 3600).unwrap(); // UTC-03:00
/// let instant = Utc.with_ymd_and_hms(2026, 3, 9, 12, 31, 0).unwrap();
/// assert_eq!(local_arrival_time(instant, offset).to_string(), "09:31");
/// ```
pub fn local_arrival_time(instant: DateTime<Utc>, offset: FixedOffset) -> ArrivalTime {
    ArrivalTime::from(instant.with_timezone(&offset).time())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_utc_offset_is_identity() {
        let instant = Utc.with_ymd_and_hms(2026, 3, 9, 8, 43, 12).unwrap();
        let local = local_arrival_time(instant, FixedOffset::east_opt(0).unwrap());
        assert_eq!(local, ArrivalTime::new(8, 43).unwrap());
    }

    #[test]
    fn test_negative_offset_wraps_to_previous_day() {
        let instant = Utc.with_ymd_and_hms(2026, 3, 9, 1, 15, 0).unwrap();
        let local = local_arrival_time(instant, FixedOffset::west_opt(3 * 3600).unwrap());
        assert_eq!(local, ArrivalTime::new(22, 15).unwrap());
    }

    #[test]
    fn test_positive_offset_with_half_hour() {
        let instant = Utc.with_ymd_and_hms(2026, 3, 9, 4, 0, 0).unwrap();
        let offset = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        assert_eq!(
            local_arrival_time(instant, offset),
            ArrivalTime::new(9, 30).unwrap()
        );
    }
}
