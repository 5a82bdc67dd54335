//! Day calculation result models.
//!
//! This module contains the [`DayCalculationResult`] produced by the engine
//! for one staff member on one work day, and the enums describing how it was
//! derived.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::time_format::serde_hours;

/// Why a day was flagged irregular.
///
/// Irregular days are reported for review; the engine never corrects them.
///
/// # Example
///
/// ```
/// use attendance_engine::models::IrregularReason;
///
/// assert_eq!(
///     IrregularReason::NegativeOvertime.to_string(),
///     "negative_overtime"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IrregularReason {
    /// Worked less than the contract without any absence or time-off notification.
    ShortfallWithoutNotification,
    /// Overtime was requested but the clock span is below the contract,
    /// pointing at an over-reported baseline or a missing notification.
    NegativeOvertime,
}

impl IrregularReason {
    /// Returns the stable reason code.
    pub fn code(self) -> &'static str {
        match self {
            IrregularReason::ShortfallWithoutNotification => "shortfall_without_notification",
            IrregularReason::NegativeOvertime => "negative_overtime",
        }
    }
}

impl std::fmt::Display for IrregularReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Which path produced a day's total work time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TotalWorkOrigin {
    /// The contractual work time was reported.
    ContractBaseline,
    /// The observed clock span (minus rest) was reported.
    ClockDerived,
}

/// The derived time metrics for one staff member on one work day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCalculationResult {
    /// Midday rest deducted from the clock span.
    #[serde(with = "serde_hours")]
    pub normal_rest_time: Duration,
    /// A time-off-hours notification was filed for the day.
    pub time_off_flag: bool,
    /// Headline worked time, before excluding absence time.
    #[serde(with = "serde_hours")]
    pub total_work_time: Duration,
    /// Whether `total_work_time` came from the contract or the clock.
    pub total_work_origin: TotalWorkOrigin,
    /// Total work time minus approved-absence time.
    #[serde(with = "serde_hours")]
    pub real_site_time: Duration,
    /// Overtime against the contract; negative values are kept.
    #[serde(with = "serde_hours")]
    pub overtime: Duration,
    /// The irregularity found, if any.
    #[serde(default)]
    pub irregular: Option<IrregularReason>,
}

impl DayCalculationResult {
    /// Returns true if the day was flagged irregular.
    pub fn is_irregular(&self) -> bool {
        self.irregular.is_some()
    }
}
