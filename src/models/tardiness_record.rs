//! Tardiness record models.
//!
//! A [`TardinessRecord`] is the value a caller persists after registering an
//! arrival; a [`LegacyTardinessRecord`] is a historical row fed to backfill.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classification::{CutoffPolicy, classify_record};
use crate::error::{EngineError, EngineResult};

use super::{ArrivalRecord, ArrivalTime, ClassificationResult, Concept};

/// A registered arrival together with its classification.
///
/// The engine never stores these; the caller owns persistence. A record read
/// back from JSON must carry a concept that agrees with its certificate flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTardinessRecord")]
pub struct TardinessRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// Identifier of the student who arrived.
    pub student_id: String,
    /// Free-text reason given for the late arrival.
    pub reason: String,
    /// Local wall-clock arrival time.
    pub arrival_time: ArrivalTime,
    /// Whether a medical certificate was presented.
    pub certificate_provided: bool,
    /// Opaque reference to the uploaded certificate, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_file: Option<String>,
    /// The classification assigned to this arrival.
    pub classification: ClassificationResult,
    /// When the record was created.
    pub recorded_at: DateTime<Utc>,
}

impl TardinessRecord {
    /// Classifies `arrival` against `policy` and builds the record.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRecord`] if `student_id` is blank or a
    /// certificate file is attached to an arrival that claims no certificate.
    pub fn new(
        student_id: impl Into<String>,
        reason: impl Into<String>,
        arrival: ArrivalRecord,
        certificate_file: Option<String>,
        policy: &CutoffPolicy,
        recorded_at: DateTime<Utc>,
    ) -> EngineResult<Self> {
        let record = Self {
            id: Uuid::new_v4(),
            student_id: student_id.into(),
            reason: reason.into(),
            arrival_time: arrival.arrival_time,
            certificate_provided: arrival.certificate_provided,
            certificate_file,
            classification: classify_record(&arrival, policy),
            recorded_at,
        };
        record.validate()?;
        Ok(record)
    }

    fn validate(&self) -> EngineResult<()> {
        if self.student_id.trim().is_empty() {
            return Err(EngineError::InvalidRecord {
                field: "student_id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.certificate_file.is_some() && !self.certificate_provided {
            return Err(EngineError::InvalidRecord {
                field: "certificate_file".to_string(),
                message: "a certificate file requires certificate_provided = true".to_string(),
            });
        }
        // The cutoff in force when the record was made is unknown here, but
        // a late arrival's concept still follows from the certificate flag.
        let agrees = match self.classification.concept {
            Concept::Present => true,
            Concept::LatePresent => self.certificate_provided,
            Concept::Absent => !self.certificate_provided,
        };
        if !agrees {
            return Err(EngineError::InvalidRecord {
                field: "classification".to_string(),
                message: format!(
                    "'{}' contradicts certificate_provided = {}",
                    self.classification.concept, self.certificate_provided
                ),
            });
        }
        Ok(())
    }

    /// The arrival this record was classified from.
    pub fn arrival(&self) -> ArrivalRecord {
        ArrivalRecord::new(self.arrival_time, self.certificate_provided)
    }
}

#[derive(Deserialize)]
struct RawTardinessRecord {
    id: Uuid,
    student_id: String,
    reason: String,
    arrival_time: ArrivalTime,
    certificate_provided: bool,
    #[serde(default)]
    certificate_file: Option<String>,
    classification: ClassificationResult,
    recorded_at: DateTime<Utc>,
}

impl TryFrom<RawTardinessRecord> for TardinessRecord {
    type Error = EngineError;

    fn try_from(raw: RawTardinessRecord) -> Result<Self, Self::Error> {
        let record = Self {
            id: raw.id,
            student_id: raw.student_id,
            reason: raw.reason,
            arrival_time: raw.arrival_time,
            certificate_provided: raw.certificate_provided,
            certificate_file: raw.certificate_file,
            classification: raw.classification,
            recorded_at: raw.recorded_at,
        };
        record.validate()?;
        Ok(record)
    }
}

/// A historical tardiness row awaiting reclassification.
///
/// Older rows may predate the certificate flag; a missing flag means no
/// certificate was presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyTardinessRecord {
    /// Identifier of the student.
    pub student_id: String,
    /// Free-text reason, if one was captured.
    #[serde(default)]
    pub reason: Option<String>,
    /// Local arrival time as `"HH:MM"`. Kept raw so one malformed row does
    /// not fail the whole batch.
    pub arrival_time: String,
    /// Whether a certificate was presented, if recorded.
    #[serde(default)]
    pub certificate_provided: Option<bool>,
}

impl LegacyTardinessRecord {
    /// Converts the row into an arrival, defaulting the certificate flag to false.
    pub fn to_arrival(&self) -> EngineResult<ArrivalRecord> {
        let arrival_time: ArrivalTime = self.arrival_time.parse()?;
        Ok(ArrivalRecord::new(
            arrival_time,
            self.certificate_provided.unwrap_or(false),
        ))
    }
}
