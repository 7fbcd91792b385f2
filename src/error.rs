//! Error types for the Tardiness Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine and its collaborators can report. Attendance
//! outcomes (present, late, absent) are never errors.

use thiserror::Error;

/// The main error type for the Tardiness Engine.
///
/// # Example
///
/// ```
/// use tardiness_engine::error::EngineError;
///
/// let error = EngineError::InvalidTime { hour: 24, minute: 0 };
/// assert_eq!(error.to_string(), "Invalid arrival time 24:00: hour must be 0-23 and minute 0-59");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The arrival time is outside the valid 24-hour range.
    #[error("Invalid arrival time {hour:02}:{minute:02}: hour must be 0-23 and minute 0-59")]
    InvalidTime {
        /// The hour that was supplied.
        hour: u32,
        /// The minute that was supplied.
        minute: u32,
    },

    /// The configured cutoff does not fit inside a single day.
    #[error("Invalid cutoff {minutes}: must be between 0 and 1439 minutes since midnight")]
    InvalidCutoff {
        /// The cutoff that was supplied, in minutes since midnight.
        minutes: u32,
    },

    /// A tardiness record was missing data or contained inconsistent data.
    #[error("Invalid record field '{field}': {message}")]
    InvalidRecord {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_time_displays_padded_time() {
        let error = EngineError::InvalidTime { hour: 7, minute: 60 };
        assert_eq!(
            error.to_string(),
            "Invalid arrival time 07:60: hour must be 0-23 and minute 0-59"
        );
    }

    #[test]
    fn test_invalid_cutoff_displays_minutes() {
        let error = EngineError::InvalidCutoff { minutes: 1440 };
        assert_eq!(
            error.to_string(),
            "Invalid cutoff 1440: must be between 0 and 1439 minutes since midnight"
        );
    }

    #[test]
    fn test_invalid_record_displays_field_and_message() {
        let error = EngineError::InvalidRecord {
            field: "student_id".to_string(),
            message: "must not be empty".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid record field 'student_id': must not be empty"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/policy.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_time() -> EngineResult<()> {
            Err(EngineError::InvalidTime { hour: 25, minute: 0 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_time()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
