//! Aggregation of classifications for reporting.

use std::borrow::Borrow;

use crate::models::{ClassificationResult, TardinessSummary};

/// Counts concepts over a collection of classifications.
///
/// # Example
///
/// ```
/// use tardiness_engine::classification::summarize;
/// use tardiness_engine::models::ClassificationResult;
///
/// let summary = summarize([ClassificationResult::PRESENT, ClassificationResult::ABSENT]);
/// assert_eq!(summary.total, 2);
/// assert_eq!(summary.absent, 1);
/// ```
pub fn summarize<I>(results: I) -> TardinessSummary
where
    I: IntoIterator,
    I::Item: Borrow<ClassificationResult>,
{
    results
        .into_iter()
        .fold(TardinessSummary::default(), |mut summary, result| {
            summary.record(result.borrow());
            summary
        })
}
