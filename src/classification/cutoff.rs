//! Cutoff policy.
//!
//! The cutoff is the local time of day separating on-time arrivals from late
//! ones. It is institutional configuration, injected into every
//! classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{ArrivalTime, MINUTES_PER_DAY};

/// Default cutoff: 09:30 local time.
pub const DEFAULT_CUTOFF_MINUTES: u32 = 9 * 60 + 30;

/// The time-of-day threshold, in minutes since midnight.
///
/// Arrivals exactly at the cutoff count as on time.
///
/// # Example
///
/// ```
/// use tardiness_engine::classification::CutoffPolicy;
///
/// let policy = CutoffPolicy::default();
/// assert_eq!(policy.cutoff_minutes(), 570);
///
/// let policy: CutoffPolicy = "08:15".parse().unwrap();
/// assert_eq!(policy.cutoff_minutes(), 495);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CutoffPolicy {
    cutoff_minutes: u32,
}

impl CutoffPolicy {
    /// Creates a cutoff policy.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCutoff`] if `cutoff_minutes` falls
    /// outside a single day (greater than 1439).
    pub fn new(cutoff_minutes: u32) -> EngineResult<Self> {
        if cutoff_minutes >= MINUTES_PER_DAY {
            return Err(EngineError::InvalidCutoff {
                minutes: cutoff_minutes,
            });
        }
        Ok(Self { cutoff_minutes })
    }

    /// Creates a cutoff policy from a time of day.
    pub fn from_time(time: ArrivalTime) -> Self {
        Self {
            cutoff_minutes: time.minutes_since_midnight(),
        }
    }

    /// The cutoff in minutes since midnight.
    pub fn cutoff_minutes(&self) -> u32 {
        self.cutoff_minutes
    }

    /// Returns true if an arrival at `time` is after the cutoff.
    pub fn is_late(&self, time: ArrivalTime) -> bool {
        time.minutes_since_midnight() > self.cutoff_minutes
    }
}

impl Default for CutoffPolicy {
    fn default() -> Self {
        Self {
            cutoff_minutes: DEFAULT_CUTOFF_MINUTES,
        }
    }
}

impl fmt::Display for CutoffPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}",
            self.cutoff_minutes / 60,
            self.cutoff_minutes % 60
        )
    }
}

impl FromStr for CutoffPolicy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let time: ArrivalTime = s.parse().map_err(|_| EngineError::InvalidRecord {
            field: "cutoff".to_string(),
            message: format!("expected HH:MM between 00:00 and 23:59, got '{}'", s),
        })?;
        Ok(Self::from_time(time))
    }
}

impl TryFrom<String> for CutoffPolicy {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CutoffPolicy> for String {
    fn from(policy: CutoffPolicy) -> Self {
        policy.to_string()
    }
}
