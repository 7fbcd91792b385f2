//! Tardiness classification.
//!
//! This module holds the single decision rule shared by live registration and
//! backfill: compare the arrival against the cutoff, then let the certificate
//! flag decide between late-but-present and absent.

use crate::error::EngineResult;
use crate::models::{ArrivalRecord, ArrivalTime, ClassificationResult};

use super::CutoffPolicy;

/// Classifies an arrival against the cutoff.
///
/// # Rules
///
/// - At or before the cutoff: [`Concept::Present`], no certificate required.
/// - After the cutoff with a certificate: [`Concept::LatePresent`].
/// - After the cutoff without one: [`Concept::Absent`].
///
/// A missing certificate is a normal outcome, not an error. Whether to block
/// such a submission is decided by [`admit`](super::admit).
///
/// [`Concept::Present`]: crate::models::Concept::Present
/// [`Concept::LatePresent`]: crate::models::Concept::LatePresent
/// [`Concept::Absent`]: crate::models::Concept::Absent
///
/// # Example
///
/// ```
/// use tardiness_engine::classification::{classify, CutoffPolicy};
/// use tardiness_engine::models::{ArrivalTime, Concept};
///
/// let policy = CutoffPolicy::default();
/// let result = classify(ArrivalTime::new(11, 33).unwrap(), false, &policy);
/// assert_eq!(result.concept, Concept::Absent);
/// assert!(result.certificate_required);
/// ```
pub fn classify(
    arrival_time: ArrivalTime,
    certificate_provided: bool,
    policy: &CutoffPolicy,
) -> ClassificationResult {
    if !policy.is_late(arrival_time) {
        ClassificationResult::PRESENT
    } else if certificate_provided {
        ClassificationResult::LATE_PRESENT
    } else {
        ClassificationResult::ABSENT
    }
}

/// Classifies an [`ArrivalRecord`].
pub fn classify_record(record: &ArrivalRecord, policy: &CutoffPolicy) -> ClassificationResult {
    classify(record.arrival_time, record.certificate_provided, policy)
}

/// Validates a raw hour and minute, then classifies.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTime`](crate::error::EngineError::InvalidTime)
/// if `hour > 23` or `minute > 59`.
///
/// # Example
///
/// ```
/// use tardiness_engine::classification::{classify_raw, CutoffPolicy};
/// use tardiness_engine::error::EngineError;
///
/// let err = classify_raw(24, 0, false, &CutoffPolicy::default()).unwrap_err();
/// assert_eq!(err, EngineError::InvalidTime { hour: 24, minute: 0 });
/// ```
pub fn classify_raw(
    hour: u32,
    minute: u32,
    certificate_provided: bool,
    policy: &CutoffPolicy,
) -> EngineResult<ClassificationResult> {
    let arrival_time = ArrivalTime::new(hour, minute)?;
    Ok(classify(arrival_time, certificate_provided, policy))
}
