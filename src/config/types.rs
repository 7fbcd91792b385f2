//! Configuration types for tardiness classification.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the institution's YAML policy file.

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::classification::{CutoffPolicy, SubmissionPolicy};

/// Raw contents of `policy.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyFile {
    /// The institution these settings belong to.
    pub institution: String,
    /// Local cutoff time as `"HH:MM"`.
    #[serde(default)]
    pub cutoff: CutoffPolicy,
    /// Institution timezone as a fixed offset from UTC, in minutes.
    #[serde(default)]
    pub utc_offset_minutes: i32,
    /// What to do with late arrivals lacking a certificate.
    #[serde(default)]
    pub submission_policy: SubmissionPolicy,
}

/// Validated institutional policy settings.
///
/// # Example
///
/// ```
/// use tardiness_engine::config::PolicySettings;
///
/// let settings = PolicySettings::default();
/// assert_eq!(settings.cutoff().cutoff_minutes(), 570);
/// assert_eq!(settings.utc_offset_minutes(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicySettings {
    institution: String,
    cutoff: CutoffPolicy,
    timezone: FixedOffset,
    submission_policy: SubmissionPolicy,
}

impl PolicySettings {
    /// Creates settings from their component parts.
    pub fn new(
        institution: impl Into<String>,
        cutoff: CutoffPolicy,
        timezone: FixedOffset,
        submission_policy: SubmissionPolicy,
    ) -> Self {
        Self {
            institution: institution.into(),
            cutoff,
            timezone,
            submission_policy,
        }
    }

    /// Returns the institution name.
    pub fn institution(&self) -> &str {
        &self.institution
    }

    /// Returns the cutoff policy.
    pub fn cutoff(&self) -> &CutoffPolicy {
        &self.cutoff
    }

    /// Returns the institution's timezone.
    pub fn timezone(&self) -> FixedOffset {
        self.timezone
    }

    /// Returns the timezone offset from UTC, in minutes.
    pub fn utc_offset_minutes(&self) -> i32 {
        self.timezone.local_minus_utc() / 60
    }

    /// Returns the submission policy.
    pub fn submission_policy(&self) -> SubmissionPolicy {
        self.submission_policy
    }

    /// Returns a serializable view of the settings.
    pub fn view(&self) -> PolicyView {
        PolicyView {
            institution: self.institution.clone(),
            cutoff: self.cutoff,
            cutoff_minutes: self.cutoff.cutoff_minutes(),
            utc_offset_minutes: self.utc_offset_minutes(),
            submission_policy: self.submission_policy,
        }
    }
}

impl Default for PolicySettings {
    fn default() -> Self {
        Self {
            institution: "default".to_string(),
            cutoff: CutoffPolicy::default(),
            timezone: Utc.fix(),
            submission_policy: SubmissionPolicy::default(),
        }
    }
}

/// The effective policy as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyView {
    /// The institution name.
    pub institution: String,
    /// Cutoff as `"HH:MM"`.
    pub cutoff: CutoffPolicy,
    /// Cutoff in minutes since midnight.
    pub cutoff_minutes: u32,
    /// Timezone offset from UTC, in minutes.
    pub utc_offset_minutes: i32,
    /// The submission policy.
    pub submission_policy: SubmissionPolicy,
}
