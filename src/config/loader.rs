//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading institutional
//! policy settings from a YAML file.

use std::fs;
use std::path::Path;

use chrono::FixedOffset;

use crate::classification::{CutoffPolicy, SubmissionPolicy};
use crate::error::{EngineError, EngineResult};

use super::types::{PolicyFile, PolicySettings};

/// Loads and provides access to institutional policy settings.
///
/// # File Format
///
/// ```text
/// institution: "Example School"
/// cutoff: "09:30"
/// utc_offset_minutes: -180
/// submission_policy: reject_absent
/// ```
///
/// Only `institution` is required.
///
/// # Example
///
/// ```no_run
/// use tardiness_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/policy.yaml").unwrap();
/// println!("Cutoff for {}: {}", loader.settings().institution(), loader.cutoff());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    settings: PolicySettings,
}

impl ConfigLoader {
    /// Loads settings from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing ([`EngineError::ConfigNotFound`])
    /// - The file contains invalid YAML, an invalid cutoff, or an offset
    ///   beyond one day ([`EngineError::ConfigParseError`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|e| match e {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses settings from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let parse_error = |message: String| EngineError::ConfigParseError {
            path: "<inline>".to_string(),
            message,
        };

        let file: PolicyFile =
            serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?;

        let timezone = FixedOffset::east_opt(file.utc_offset_minutes.saturating_mul(60))
            .ok_or_else(|| {
                parse_error(format!(
                    "utc_offset_minutes {} must be within one day",
                    file.utc_offset_minutes
                ))
            })?;

        Ok(Self::from_settings(PolicySettings::new(
            file.institution,
            file.cutoff,
            timezone,
            file.submission_policy,
        )))
    }

    /// Wraps already-built settings.
    pub fn from_settings(settings: PolicySettings) -> Self {
        Self { settings }
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &PolicySettings {
        &self.settings
    }

    /// Returns the cutoff policy.
    pub fn cutoff(&self) -> &CutoffPolicy {
        self.settings.cutoff()
    }

    /// Returns the institution's timezone.
    pub fn timezone(&self) -> FixedOffset {
        self.settings.timezone()
    }

    /// Returns the submission policy.
    pub fn submission_policy(&self) -> SubmissionPolicy {
        self.settings.submission_policy()
    }
}
