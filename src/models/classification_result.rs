//! Classification result models.
//!
//! This module contains the [`Concept`] attendance category and the
//! [`ClassificationResult`] produced for every arrival, plus the
//! [`TardinessSummary`] aggregate used for reporting.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The attendance category assigned to an arrival.
///
/// # Example
///
/// ```
/// use tardiness_engine::models::Concept;
///
/// let json = serde_json::to_string(&Concept::LatePresent).unwrap();
/// assert_eq!(json, "\"late_present\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Concept {
    /// Arrived at or before the cutoff.
    Present,
    /// Arrived after the cutoff with a medical certificate.
    LatePresent,
    /// Arrived after the cutoff without a medical certificate.
    Absent,
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Concept::Present => write!(f, "present"),
            Concept::LatePresent => write!(f, "late_present"),
            Concept::Absent => write!(f, "absent"),
        }
    }
}

/// The outcome of classifying one arrival.
///
/// `certificate_required` is true exactly when `concept` is not
/// [`Concept::Present`]. Deserializing a pair that breaks this fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawClassificationResult")]
pub struct ClassificationResult {
    /// The attendance category.
    pub concept: Concept,
    /// Whether policy requires a certificate for this arrival.
    pub certificate_required: bool,
}

impl ClassificationResult {
    /// Result for an arrival at or before the cutoff.
    pub const PRESENT: Self = Self {
        concept: Concept::Present,
        certificate_required: false,
    };

    /// Result for a late arrival with a certificate.
    pub const LATE_PRESENT: Self = Self {
        concept: Concept::LatePresent,
        certificate_required: true,
    };

    /// Result for a late arrival without a certificate.
    pub const ABSENT: Self = Self {
        concept: Concept::Absent,
        certificate_required: true,
    };

    /// The result carrying `concept`, with the matching certificate flag.
    pub fn for_concept(concept: Concept) -> Self {
        match concept {
            Concept::Present => Self::PRESENT,
            Concept::LatePresent => Self::LATE_PRESENT,
            Concept::Absent => Self::ABSENT,
        }
    }

    /// Returns true if the arrival counts as attendance (on time or excused).
    pub fn counts_as_present(&self) -> bool {
        self.concept != Concept::Absent
    }
}

/// Wire form of [`ClassificationResult`], checked before it is accepted.
#[derive(Deserialize)]
struct RawClassificationResult {
    concept: Concept,
    certificate_required: bool,
}

impl TryFrom<RawClassificationResult> for ClassificationResult {
    type Error = EngineError;

    fn try_from(raw: RawClassificationResult) -> Result<Self, Self::Error> {
        let result = Self::for_concept(raw.concept);
        if result.certificate_required != raw.certificate_required {
            return Err(EngineError::InvalidRecord {
                field: "certificate_required".to_string(),
                message: format!(
                    "must be {} for concept '{}'",
                    result.certificate_required, raw.concept
                ),
            });
        }
        Ok(result)
    }
}

/// Aggregated counts over a set of classifications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TardinessSummary {
    /// Number of classifications considered.
    pub total: u64,
    /// Arrivals at or before the cutoff.
    pub present: u64,
    /// Late arrivals with a certificate.
    pub late_present: u64,
    /// Late arrivals without a certificate.
    pub absent: u64,
    /// Arrivals for which a certificate was required.
    pub certificates_required: u64,
}

impl TardinessSummary {
    /// Adds a single classification to the summary.
    pub fn record(&mut self, result: &ClassificationResult) {
        self.total += 1;
        match result.concept {
            Concept::Present => self.present += 1,
            Concept::LatePresent => self.late_present += 1,
            Concept::Absent => self.absent += 1,
        }
        if result.certificate_required {
            self.certificates_required += 1;
        }
    }

    /// Share of arrivals after the cutoff, between 0.0 and 1.0.
    ///
    /// An empty summary has a ratio of 0.0.
    pub fn late_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.late_present + self.absent) as f64 / self.total as f64
    }
}
