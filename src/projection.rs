//! Compact, short-keyed rendering of a month.
//!
//! Downstream summarizers read attendance in bulk, so each day is flattened
//! into one record with two- or three-letter keys and `H:MM` durations.

use serde::{Deserialize, Serialize};

use crate::models::{IrregularReason, MonthlyAttendance};
use crate::time_format::{format_hhmm, format_signed_hhmm};

/// One day of a month, flattened and short-keyed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactDayRecord {
    /// Day of month.
    #[serde(rename = "d")]
    pub day: u32,
    /// Staff id.
    #[serde(rename = "sid")]
    pub staff_id: u32,
    /// Clock-in, `00:00` when not clocked.
    #[serde(rename = "in")]
    pub clock_in: String,
    /// Clock-out, `00:00` when not clocked.
    #[serde(rename = "out")]
    pub clock_out: String,
    /// AM notification name.
    #[serde(rename = "am", skip_serializing_if = "Option::is_none", default)]
    pub notification_am: Option<String>,
    /// PM notification name.
    #[serde(rename = "pm", skip_serializing_if = "Option::is_none", default)]
    pub notification_pm: Option<String>,
    /// Overtime request flag.
    #[serde(rename = "oa")]
    pub overtime_requested: bool,
    /// Work-type label of the day's contract.
    #[serde(rename = "typ")]
    pub work_type: String,
    /// Contract work time of the day.
    #[serde(rename = "cw")]
    pub contract_work_time: String,
    /// Contract holiday time of the day.
    #[serde(rename = "ch")]
    pub contract_holiday_time: String,
    /// Rest deducted.
    #[serde(rename = "nr")]
    pub normal_rest_time: String,
    /// Total work time.
    #[serde(rename = "wt")]
    pub total_work_time: String,
    /// On-site time.
    #[serde(rename = "rt")]
    pub real_site_time: String,
    /// Overtime, signed.
    #[serde(rename = "ot")]
    pub overtime: String,
    /// Remark.
    #[serde(rename = "rmk", skip_serializing_if = "String::is_empty", default)]
    pub remark: String,
    /// Irregular reason.
    #[serde(rename = "irr", skip_serializing_if = "Option::is_none", default)]
    pub irregular: Option<IrregularReason>,
}

/// Flattens a month into compact records, one per day in calendar order.
///
/// Zero and negative durations render as `0.0`, except overtime which keeps
/// its sign.
pub fn project_month(month: &MonthlyAttendance) -> Vec<CompactDayRecord> {
    month
        .days
        .iter()
        .map(|(day, entry)| CompactDayRecord {
            day: *day,
            staff_id: month.header.staff_id,
            clock_in: entry.clock_in.clone(),
            clock_out: entry.clock_out.clone(),
            notification_am: entry.notification_am.clone(),
            notification_pm: entry.notification_pm.clone(),
            overtime_requested: entry.overtime_requested,
            work_type: entry.work_type.clone(),
            contract_work_time: format_hhmm(entry.baseline.contract_work_time),
            contract_holiday_time: format_hhmm(entry.baseline.contract_holiday_time),
            normal_rest_time: format_hhmm(entry.calculation.normal_rest_time),
            total_work_time: format_hhmm(entry.calculation.total_work_time),
            real_site_time: format_hhmm(entry.calculation.real_site_time),
            overtime: format_signed_hhmm(entry.calculation.overtime),
            remark: entry.remark.clone(),
            irregular: entry.calculation.irregular,
        })
        .collect()
}
