//! Classification logic for the Tardiness Engine.
//!
//! This module contains the classification rule itself, the cutoff policy it
//! is evaluated against, submission admission, backfill of historical rows,
//! conversion of instants to local arrival times, and summary aggregation.

mod admission;
mod backfill;
mod classify;
mod cutoff;
mod local_time;
mod summary;

pub use admission::{Admission, SubmissionPolicy, admit};
pub use backfill::{BackfillOutcome, BackfillStatus, backfill};
pub use classify::{classify, classify_raw, classify_record};
pub use cutoff::{CutoffPolicy, DEFAULT_CUTOFF_MINUTES};
pub use local_time::local_arrival_time;
pub use summary::summarize;
