//! Backfill of historical tardiness rows.
//!
//! Historical rows go through the same [`classify`] rule as live
//! registrations. Rows are independent: a malformed row yields an error
//! outcome and the rest of the batch carries on.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::EngineError;
use crate::models::{ClassificationResult, LegacyTardinessRecord};

use super::{CutoffPolicy, classify_record};

/// The result of reclassifying one historical row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackfillOutcome {
    /// Position of the row in the input batch.
    pub index: usize,
    /// Student the row belongs to.
    pub student_id: String,
    /// The classification, or why the row could not be classified.
    #[serde(flatten)]
    pub status: BackfillStatus,
}

/// Per-row backfill status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BackfillStatus {
    /// The row was classified.
    Classified {
        /// The new classification.
        classification: ClassificationResult,
    },
    /// The row could not be classified.
    Failed {
        /// Description of the problem.
        error: String,
    },
}

impl BackfillOutcome {
    /// The classification, if the row was classified.
    pub fn classification(&self) -> Option<ClassificationResult> {
        match &self.status {
            BackfillStatus::Classified { classification } => Some(*classification),
            BackfillStatus::Failed { .. } => None,
        }
    }
}

/// Reclassifies historical rows.
///
/// A missing certificate flag counts as "no certificate".
pub fn backfill(records: &[LegacyTardinessRecord], policy: &CutoffPolicy) -> Vec<BackfillOutcome> {
    let outcomes: Vec<BackfillOutcome> = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let status = match classify_legacy(record, policy) {
                Ok(classification) => BackfillStatus::Classified { classification },
                Err(err) => {
                    warn!(
                        index,
                        student_id = %record.student_id,
                        error = %err,
                        "Skipping unclassifiable historical record"
                    );
                    BackfillStatus::Failed {
                        error: err.to_string(),
                    }
                }
            };
            BackfillOutcome {
                index,
                student_id: record.student_id.clone(),
                status,
            }
        })
        .collect();

    debug!(
        records = records.len(),
        failed = outcomes.iter().filter(|o| o.classification().is_none()).count(),
        "Backfill completed"
    );

    outcomes
}

fn classify_legacy(
    record: &LegacyTardinessRecord,
    policy: &CutoffPolicy,
) -> Result<ClassificationResult, EngineError> {
    if record.student_id.trim().is_empty() {
        return Err(EngineError::InvalidRecord {
            field: "student_id".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    let arrival = record.to_arrival()?;
    Ok(classify_record(&arrival, policy))
}
