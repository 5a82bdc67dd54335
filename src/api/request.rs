//! Request types for the Attendance Engine API.
//!
//! This module defines the JSON request structures for the `/calculate/*`
//! endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assembly::InMemoryAttendanceSource;
use crate::models::{
    AttendanceRecord, ClockPair, ContractBaseline, HolidayContract, JobContract,
    NotificationPair, OvertimeContext,
};
use crate::time_format::{daily_hours_to_duration, MAX_DAILY_HOURS};

fn check_hours(field: &str, hours: Decimal) -> Result<(), String> {
    match daily_hours_to_duration(hours) {
        Some(_) => Ok(()),
        None => Err(format!(
            "{field} must be between 0 and {MAX_DAILY_HOURS}, got {hours}"
        )),
    }
}

/// Request body for the `/calculate/day` endpoint.
///
/// Clock values are raw `HH:MM` strings; empty or malformed values mean "not
/// clocked". Contract hours are decimal hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCalculationRequest {
    /// Clock-in time.
    #[serde(default)]
    pub start_time: String,
    /// Clock-out time.
    #[serde(default)]
    pub end_time: String,
    /// AM notification code.
    #[serde(default)]
    pub notification_am: String,
    /// PM notification code.
    #[serde(default)]
    pub notification_pm: String,
    /// An overtime request was filed.
    #[serde(default)]
    pub overtime_requested: bool,
    /// Work on a scheduled day off.
    #[serde(default)]
    pub holiday_work: bool,
    /// On-call day.
    #[serde(default)]
    pub on_call: bool,
    /// Contract work hours for the day.
    pub contract_work_hours: Decimal,
    /// Contract holiday hours; defaults to the work hours.
    #[serde(default)]
    pub contract_holiday_hours: Option<Decimal>,
}

impl DayCalculationRequest {
    /// Checks that the contract hours are usable per-day values.
    pub fn validate(&self) -> Result<(), String> {
        check_hours("contract_work_hours", self.contract_work_hours)?;
        if let Some(hours) = self.contract_holiday_hours {
            check_hours("contract_holiday_hours", hours)?;
        }
        Ok(())
    }

    /// Returns the parsed clock pair.
    pub fn clock(&self) -> ClockPair {
        ClockPair::from_raw(&self.start_time, &self.end_time)
    }

    /// Returns the notification pair.
    pub fn notifications(&self) -> NotificationPair {
        NotificationPair::new(self.notification_am.clone(), self.notification_pm.clone())
    }

    /// Returns the overtime context.
    pub fn context(&self) -> OvertimeContext {
        OvertimeContext {
            overtime_requested: self.overtime_requested,
            holiday_work: self.holiday_work,
            on_call: self.on_call,
        }
    }

    /// Returns the contract baseline.
    pub fn baseline(&self) -> ContractBaseline {
        ContractBaseline::from_hours(
            self.contract_work_hours,
            self.contract_holiday_hours
                .unwrap_or(self.contract_work_hours),
        )
    }
}

/// Request body for the `/calculate/month` endpoints.
///
/// Carries everything the assembler would otherwise read from an attendance
/// store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthCalculationRequest {
    /// The staff member.
    pub staff_id: u32,
    /// The month to assemble, as `YYYY-MM`.
    pub target_month: String,
    /// Job contracts of the staff member.
    #[serde(default)]
    pub job_contracts: Vec<JobContract>,
    /// Holiday contracts of the staff member.
    #[serde(default)]
    pub holiday_contracts: Vec<HolidayContract>,
    /// Raw attendance records.
    #[serde(default)]
    pub records: Vec<AttendanceRecord>,
}

impl MonthCalculationRequest {
    /// Checks the hours carried by every contract in the body.
    pub fn validate(&self) -> Result<(), String> {
        for contract in &self.job_contracts {
            if let Some(hours) = contract.part_work_hours {
                check_hours("part_work_hours", hours)?;
            }
        }
        for contract in &self.holiday_contracts {
            check_hours("holiday_hours", contract.holiday_hours)?;
        }
        Ok(())
    }
}

impl From<MonthCalculationRequest> for InMemoryAttendanceSource {
    fn from(req: MonthCalculationRequest) -> Self {
        InMemoryAttendanceSource::new()
            .with_records(req.records)
            .with_job_contracts(req.job_contracts)
            .with_holiday_contracts(req.holiday_contracts)
    }
}
