//! Request types for the Tardiness Engine API.
//!
//! This module defines the JSON request structures for the classification,
//! registration, backfill and summary endpoints.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::classification::local_arrival_time;
use crate::error::{EngineError, EngineResult};
use crate::models::{ArrivalTime, ClassificationResult, LegacyTardinessRecord};

/// Request body for `POST /classify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// Local hour of arrival.
    pub hour: u32,
    /// Local minute of arrival.
    pub minute: u32,
    /// Whether a medical certificate was presented.
    pub certificate_provided: bool,
}

/// Request body for `POST /tardiness`.
///
/// The arrival is given either as a local `arrival_time` (`"HH:MM"`) or as an
/// RFC 3339 `arrived_at` instant, which is converted with the institution's
/// timezone. Exactly one of the two must be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRequest {
    /// Identifier of the student.
    pub student_id: String,
    /// Reason given for the late arrival.
    #[serde(default)]
    pub reason: String,
    /// Local arrival time as `"HH:MM"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,
    /// Arrival instant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrived_at: Option<DateTime<Utc>>,
    /// Whether a medical certificate was presented.
    pub certificate_provided: bool,
    /// Reference to the uploaded certificate file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_file: Option<String>,
}

impl RegistrationRequest {
    /// Resolves the local arrival time.
    pub fn local_arrival_time(&self, timezone: FixedOffset) -> EngineResult<ArrivalTime> {
        match (&self.arrival_time, self.arrived_at) {
            (Some(time), None) => time.parse(),
            (None, Some(instant)) => Ok(local_arrival_time(instant, timezone)),
            (Some(_), Some(_)) => Err(EngineError::InvalidRecord {
                field: "arrival_time".to_string(),
                message: "give either arrival_time or arrived_at, not both".to_string(),
            }),
            (None, None) => Err(EngineError::InvalidRecord {
                field: "arrival_time".to_string(),
                message: "one of arrival_time or arrived_at is required".to_string(),
            }),
        }
    }
}

/// Request body for `POST /backfill`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackfillRequest {
    /// Historical rows to reclassify.
    pub records: Vec<LegacyTardinessRecord>,
}

/// Request body for `POST /summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// Classifications to aggregate.
    pub results: Vec<ClassificationResult>,
}
