//! Error types for the Attendance Engine.
//!
//! The day calculation itself never fails; irregular days are reported through
//! [`crate::models::IrregularReason`]. This module covers the layers around it:
//! configuration loading, contract resolution and month assembly.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Attendance Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rules.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// Configuration parsed but contains values the engine cannot use.
    #[error("Invalid configuration for '{key}': {message}")]
    InvalidConfiguration {
        /// The offending key (notification code, rule name, ...).
        key: String,
        /// A description of the problem.
        message: String,
    },

    /// No job contract covers the staff member on the given day.
    #[error("No contract found for staff {staff_id} on {date}")]
    ContractNotFound {
        /// The staff member.
        staff_id: u32,
        /// The work day that could not be resolved.
        date: NaiveDate,
    },

    /// The work-type code of a contract is not in the work-type table.
    #[error("Unknown work type code: {code}")]
    UnknownWorkType {
        /// The contract code that was not found.
        code: u32,
    },

    /// A contract carries hours outside `0..=24`.
    #[error("Invalid {field} for staff {staff_id}: {hours} (expected 0 to 24)")]
    InvalidContractHours {
        /// The staff member.
        staff_id: u32,
        /// Which contract value was rejected.
        field: &'static str,
        /// The rejected value.
        hours: Decimal,
    },

    /// The requested range contains no attendance records.
    #[error("No attendance records for staff {staff_id} between {from} and {to}")]
    NoAttendanceRecords {
        /// The staff member.
        staff_id: u32,
        /// First day of the range.
        from: NaiveDate,
        /// Last day of the range.
        to: NaiveDate,
    },

    /// A target month string was not of the form `YYYY-MM`.
    #[error("Invalid month '{value}': expected YYYY-MM")]
    InvalidMonth {
        /// The rejected input.
        value: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/rules.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/rules.yaml"
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
    fn test_invalid_configuration_displays_key_and_message() {
        let error = EngineError::InvalidConfiguration {
            key: "21".to_string(),
            message: "time-off entries need hours".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration for '21': time-off entries need hours"
        );
    }

    #[test]
    fn test_contract_not_found_displays_staff_and_date() {
        let error = EngineError::ContractNotFound {
            staff_id: 201,
            date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "No contract found for staff 201 on 2025-12-01"
        );
    }

    #[test]
    fn test_invalid_contract_hours_displays_field_and_value() {
        let error = EngineError::InvalidContractHours {
            staff_id: 201,
            field: "holiday_hours",
            hours: Decimal::from(-5),
        };
        assert_eq!(
            error.to_string(),
            "Invalid holiday_hours for staff 201: -5 (expected 0 to 24)"
        );
    }

    #[test]
    fn test_invalid_month_displays_value() {
        let error = EngineError::InvalidMonth {
            value: "2025/12".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid month '2025/12': expected YYYY-MM");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unknown_work_type() -> EngineResult<()> {
            Err(EngineError::UnknownWorkType { code: 9 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unknown_work_type()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
