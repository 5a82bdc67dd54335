//! Notification code classification.
//!
//! The catalog maps each configured notification code to a category and,
//! for time-off codes, a fixed duration. Every part of the engine that needs
//! to know what a code means goes through here.

use chrono::Duration;
use std::collections::HashMap;

use crate::config::NotificationEntry;
use crate::error::{EngineError, EngineResult};
use crate::models::{ContractBaseline, NotificationCategory};
use crate::time_format::{daily_hours_to_duration, hours_to_duration, MAX_DAILY_HOURS};

/// Lookup table from notification code to category and nominal duration.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::NotificationCatalog;
/// use attendance_engine::config::NotificationEntry;
/// use attendance_engine::models::NotificationCategory;
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// let mut entries = HashMap::new();
/// entries.insert(
///     "10".to_string(),
///     NotificationEntry {
///         name: "Time off 1h".to_string(),
///         category: NotificationCategory::TimeOffHours,
///         hours: Some(Decimal::ONE),
///     },
/// );
/// let catalog = NotificationCatalog::new(entries).unwrap();
///
/// assert!(catalog.is_time_off("10"));
/// assert_eq!(catalog.classify(""), NotificationCategory::None);
/// assert_eq!(catalog.classify("unknown"), NotificationCategory::Other);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NotificationCatalog {
    entries: HashMap<String, NotificationEntry>,
}

impl NotificationCatalog {
    /// Builds a catalog from code entries.
    ///
    /// Any `hours` value must lie within `0..=24`. Time-off entries must carry
    /// a positive one; there is no contract-derived fallback for them.
    pub fn new(entries: HashMap<String, NotificationEntry>) -> EngineResult<Self> {
        for (code, entry) in &entries {
            if code.trim().is_empty() {
                return Err(EngineError::InvalidConfiguration {
                    key: format!("notification '{}'", entry.name),
                    message: "code must not be empty".to_string(),
                });
            }
            if let Some(hours) = entry.hours {
                if daily_hours_to_duration(hours).is_none() {
                    return Err(EngineError::InvalidConfiguration {
                        key: code.clone(),
                        message: format!(
                            "hours must be between 0 and {MAX_DAILY_HOURS}, got {hours}"
                        ),
                    });
                }
            }
            if entry.category == NotificationCategory::TimeOffHours
                && !entry.hours.is_some_and(|h| h.is_sign_positive() && !h.is_zero())
            {
                return Err(EngineError::InvalidConfiguration {
                    key: code.clone(),
                    message: "time-off entries need positive hours".to_string(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Returns the number of configured codes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no codes are configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Classifies a code. Empty codes are `None`; unknown codes are `Other`.
    pub fn classify(&self, code: &str) -> NotificationCategory {
        let code = code.trim();
        if code.is_empty() {
            return NotificationCategory::None;
        }
        self.entries
            .get(code)
            .map(|entry| entry.category)
            .unwrap_or(NotificationCategory::Other)
    }

    /// Returns true if the code is a partial-hour time-off code.
    pub fn is_time_off(&self, code: &str) -> bool {
        self.classify(code).is_time_off()
    }

    /// Returns true if the code's time is excluded from on-site time.
    pub fn is_absence_leave(&self, code: &str) -> bool {
        self.classify(code).is_absence_leave()
    }

    /// Returns the human-readable name of a configured code.
    pub fn name(&self, code: &str) -> Option<&str> {
        self.entries.get(code.trim()).map(|entry| entry.name.as_str())
    }

    /// Returns the time attributable to a notification on a given baseline.
    ///
    /// A configured `hours` value wins. Otherwise leave is valued at the
    /// contract holiday time (half of it for half days) and business trips at
    /// the contract work time (half of it for half days). Every other
    /// category is worth zero.
    pub fn nominal_duration(&self, code: &str, baseline: &ContractBaseline) -> Duration {
        let Some(entry) = self.entries.get(code.trim()) else {
            return Duration::zero();
        };
        if let Some(hours) = entry.hours {
            return hours_to_duration(hours);
        }
        match entry.category {
            NotificationCategory::FullDayLeave => baseline.contract_holiday_time,
            NotificationCategory::HalfDayLeave => baseline.contract_holiday_time / 2,
            NotificationCategory::BusinessTripFull => baseline.contract_work_time,
            NotificationCategory::BusinessTripHalf => baseline.contract_work_time / 2,
            NotificationCategory::TimeOffHours
            | NotificationCategory::None
            | NotificationCategory::Other => Duration::zero(),
        }
    }
}
