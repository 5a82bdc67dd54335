//! Contract models.
//!
//! [`ContractBaseline`] is what the engine consumes. [`JobContract`] and
//! [`HolidayContract`] are the date-ranged records it is resolved from.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::time_format::{hours_to_duration, serde_hours};

/// The contractual daily work and paid-holiday durations effective for a
/// staff member on one work day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractBaseline {
    /// Expected daily work time.
    #[serde(with = "serde_hours")]
    pub contract_work_time: Duration,
    /// Paid-holiday time credited for a full day of leave.
    #[serde(with = "serde_hours")]
    pub contract_holiday_time: Duration,
}

impl ContractBaseline {
    /// Creates a baseline from two durations.
    pub fn new(contract_work_time: Duration, contract_holiday_time: Duration) -> Self {
        Self {
            contract_work_time,
            contract_holiday_time,
        }
    }

    /// Creates a baseline from decimal hours.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::ContractBaseline;
    /// use chrono::Duration;
    /// use rust_decimal::Decimal;
    ///
    /// let baseline = ContractBaseline::from_hours(Decimal::from(8), Decimal::new(75, 1));
    /// assert_eq!(baseline.contract_work_time, Duration::hours(8));
    /// assert_eq!(baseline.contract_holiday_time, Duration::minutes(450));
    /// ```
    pub fn from_hours(work_hours: Decimal, holiday_hours: Decimal) -> Self {
        Self::new(hours_to_duration(work_hours), hours_to_duration(holiday_hours))
    }
}

/// A job contract: which work type a staff member is on, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobContract {
    /// The staff member the contract belongs to.
    pub staff_id: u32,
    /// Work-type code (see `work_types.yaml`).
    pub contract_code: u32,
    /// First day the contract is effective (inclusive).
    pub start_day: NaiveDate,
    /// Last day the contract is effective (inclusive).
    pub end_day: NaiveDate,
    /// Individually agreed daily hours for part-time staff.
    #[serde(default)]
    pub part_work_hours: Option<Decimal>,
}

impl JobContract {
    /// Returns true if the contract is effective on `day`.
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start_day <= day && day <= self.end_day
    }
}

/// A paid-holiday contract, present for staff with individually agreed hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayContract {
    /// The staff member the contract belongs to.
    pub staff_id: u32,
    /// First day the contract is effective (inclusive).
    pub start_day: NaiveDate,
    /// Last day the contract is effective (inclusive).
    pub end_day: NaiveDate,
    /// Paid-holiday hours credited for a full day of leave.
    pub holiday_hours: Decimal,
}

impl HolidayContract {
    /// Returns true if the contract is effective on `day`.
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start_day <= day && day <= self.end_day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_job_contract_covers_inclusive_bounds() {
        let contract = JobContract {
            staff_id: 201,
            contract_code: 1,
            start_day: date(2025, 4, 1),
            end_day: date(2026, 3, 31),
            part_work_hours: None,
        };

        assert!(contract.covers(date(2025, 4, 1)));
        assert!(contract.covers(date(2026, 3, 31)));
        assert!(!contract.covers(date(2025, 3, 31)));
        assert!(!contract.covers(date(2026, 4, 1)));
    }

    #[test]
    fn test_holiday_contract_covers() {
        let contract = HolidayContract {
            staff_id: 201,
            start_day: date(2025, 12, 1),
            end_day: date(2025, 12, 15),
            holiday_hours: Decimal::from(6),
        };

        assert!(contract.covers(date(2025, 12, 10)));
        assert!(!contract.covers(date(2025, 12, 16)));
    }

    #[test]
    fn test_baseline_serializes_as_decimal_hours() {
        let baseline = ContractBaseline::new(Duration::minutes(450), Duration::hours(6));
        let json = serde_json::to_string(&baseline).unwrap();
        assert_eq!(
            json,
            r#"{"contract_work_time":"7.5","contract_holiday_time":"6"}"#
        );
    }

    #[test]
    fn test_job_contract_deserialization() {
        let json = r#"{
            "staff_id": 305,
            "contract_code": 2,
            "start_day": "2025-04-01",
            "end_day": "2026-03-31",
            "part_work_hours": "5.5"
        }"#;

        let contract: JobContract = serde_json::from_str(json).unwrap();
        assert_eq!(contract.contract_code, 2);
        assert_eq!(contract.part_work_hours, Some(Decimal::new(55, 1)));
    }
}
