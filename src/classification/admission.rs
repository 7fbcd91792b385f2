//! Submission admission.
//!
//! The classifier never blocks a registration. Whether an `absent` arrival is
//! refused or stored for staff review is an institutional choice, applied on
//! top of the classification by [`admit`].

use serde::{Deserialize, Serialize};

use crate::models::{ClassificationResult, Concept};

/// What to do with a late arrival that has no certificate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPolicy {
    /// Refuse the submission.
    #[default]
    RejectAbsent,
    /// Accept the submission and store it as absent.
    StoreAsAbsent,
}

/// The admission decision for a classified submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// The submission may be stored with this classification.
    Accepted(ClassificationResult),
    /// The submission must be refused.
    Rejected {
        /// The classification that caused the rejection.
        classification: ClassificationResult,
        /// Human-readable reason for the rejection.
        reason: String,
    },
}

impl Admission {
    /// Returns true if the submission was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Admission::Accepted(_))
    }

    /// The classification, whichever way the decision went.
    pub fn classification(&self) -> ClassificationResult {
        match self {
            Admission::Accepted(classification) => *classification,
            Admission::Rejected { classification, .. } => *classification,
        }
    }
}

/// Applies a submission policy to a classification.
///
/// Only [`Concept::Absent`] under [`SubmissionPolicy::RejectAbsent`] is
/// rejected. The classification itself is never altered.
///
/// # Example
///
/// ```
/// use tardiness_engine::classification::{admit, Admission, SubmissionPolicy};
/// use tardiness_engine::models::ClassificationResult;
///
/// let decision = admit(ClassificationResult::ABSENT, SubmissionPolicy::StoreAsAbsent);
/// assert_eq!(decision, Admission::Accepted(ClassificationResult::ABSENT));
///
/// let decision = admit(ClassificationResult::ABSENT, SubmissionPolicy::RejectAbsent);
/// assert!(!decision.is_accepted());
/// ```
pub fn admit(classification: ClassificationResult, policy: SubmissionPolicy) -> Admission {
    match (classification.concept, policy) {
        (Concept::Absent, SubmissionPolicy::RejectAbsent) => Admission::Rejected {
            classification,
            reason: "a medical certificate is required for arrivals after the cutoff"
                .to_string(),
        },
        _ => Admission::Accepted(classification),
    }
}
