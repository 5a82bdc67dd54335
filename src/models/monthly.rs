//! Month-keyed attendance result models.
//!
//! [`MonthlyAttendance`] is what the day record assembler produces: a header
//! describing the staff member and contract, plus one [`DayEntry`] per
//! calendar day that had a record.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ContractBaseline, DayCalculationResult};
use crate::time_format::serde_hours;

/// The header block of a month: who, on which contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceHeader {
    /// The staff member.
    pub staff_id: u32,
    /// Work-type label, e.g. "Full-time".
    pub work_type: String,
    /// Contract work time of the first day in range.
    #[serde(with = "serde_hours")]
    pub contract_work_time: Duration,
    /// Contract holiday time of the first day in range.
    #[serde(with = "serde_hours")]
    pub contract_holiday_time: Duration,
}

/// One day's raw inputs, echoed for review, and the engine's result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    /// The work day.
    pub work_day: NaiveDate,
    /// On-call flag.
    pub on_call: bool,
    /// Clock-in as `HH:MM`; `00:00` when not clocked.
    pub clock_in: String,
    /// Clock-out as `HH:MM`; `00:00` when not clocked.
    pub clock_out: String,
    /// Name of the AM notification, if any.
    pub notification_am: Option<String>,
    /// Name of the PM notification, if any.
    pub notification_pm: Option<String>,
    /// Overtime request flag.
    pub overtime_requested: bool,
    /// Free-text remark.
    pub remark: String,
    /// Work-type label of the contract covering the day.
    pub work_type: String,
    /// The baseline the day was computed against.
    pub baseline: ContractBaseline,
    /// The engine's result for the day.
    pub calculation: DayCalculationResult,
}

/// A staff member's attendance over a range, keyed by day of month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAttendance {
    /// Staff, work type and contract baselines.
    pub header: AttendanceHeader,
    /// Day entries in calendar order.
    pub days: BTreeMap<u32, DayEntry>,
}

impl MonthlyAttendance {
    /// Returns the days flagged irregular, in calendar order.
    pub fn irregular_days(&self) -> Vec<u32> {
        self.days
            .iter()
            .filter(|(_, entry)| entry.calculation.is_irregular())
            .map(|(day, _)| *day)
            .collect()
    }

    /// Sums total work time across all days.
    pub fn total_work_time(&self) -> Duration {
        self.days
            .values()
            .fold(Duration::zero(), |acc, e| acc + e.calculation.total_work_time)
    }

    /// Sums on-site time across all days.
    pub fn real_site_time(&self) -> Duration {
        self.days
            .values()
            .fold(Duration::zero(), |acc, e| acc + e.calculation.real_site_time)
    }

    /// Sums overtime across all days, negative days included.
    pub fn overtime(&self) -> Duration {
        self.days
            .values()
            .fold(Duration::zero(), |acc, e| acc + e.calculation.overtime)
    }
}
