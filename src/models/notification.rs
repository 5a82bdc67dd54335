//! Notification models.
//!
//! A notification is a leave/absence/time-off declaration attached to the
//! morning or afternoon half of a shift.

use serde::{Deserialize, Serialize};

/// The category a notification code belongs to.
///
/// # Example
///
/// ```
/// use attendance_engine::models::NotificationCategory;
///
/// assert!(NotificationCategory::HalfDayLeave.is_absence_leave());
/// assert!(!NotificationCategory::Other.is_absence_leave());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationCategory {
    /// No notification was filed.
    None,
    /// Leave covering the whole day.
    FullDayLeave,
    /// Leave covering the morning or the afternoon.
    HalfDayLeave,
    /// Business trip covering the whole day.
    BusinessTripFull,
    /// Business trip covering half of the day.
    BusinessTripHalf,
    /// Partial-hour leave taken within an otherwise worked shift.
    TimeOffHours,
    /// Any other or unknown code; neither leave nor time off.
    Other,
}

impl NotificationCategory {
    /// Returns true for categories whose time is excluded from on-site time.
    pub fn is_absence_leave(self) -> bool {
        matches!(
            self,
            NotificationCategory::FullDayLeave
                | NotificationCategory::HalfDayLeave
                | NotificationCategory::BusinessTripFull
                | NotificationCategory::BusinessTripHalf
                | NotificationCategory::TimeOffHours
        )
    }

    /// Returns true for the partial-hour time-off category.
    pub fn is_time_off(self) -> bool {
        self == NotificationCategory::TimeOffHours
    }

    /// Returns true for categories that cover a whole day.
    pub fn is_full_day(self) -> bool {
        matches!(
            self,
            NotificationCategory::FullDayLeave | NotificationCategory::BusinessTripFull
        )
    }
}

/// The AM and PM notification codes filed for a day.
///
/// An empty string means no notification for that half.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPair {
    /// Notification code for the morning half.
    #[serde(default)]
    pub notification_am: String,
    /// Notification code for the afternoon half.
    #[serde(default)]
    pub notification_pm: String,
}

impl NotificationPair {
    /// Creates a notification pair from AM and PM codes.
    pub fn new(notification_am: impl Into<String>, notification_pm: impl Into<String>) -> Self {
        Self {
            notification_am: notification_am.into(),
            notification_pm: notification_pm.into(),
        }
    }

    /// Returns the AM and PM codes in that order.
    pub fn codes(&self) -> [&str; 2] {
        [&self.notification_am, &self.notification_pm]
    }
}
