//! Attendance data sources.
//!
//! The assembler reads raw records and contracts through the
//! [`AttendanceSource`] trait, so the same code runs against an in-memory
//! fixture or a database-backed implementation.

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, HolidayContract, JobContract};

/// Supplies raw attendance records and contracts for a staff member.
pub trait AttendanceSource {
    /// Returns the staff member's records with `from <= work_day <= to`,
    /// ordered by work day.
    fn attendance(
        &self,
        staff_id: u32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>>;

    /// Returns every job contract of the staff member.
    fn job_contracts(&self, staff_id: u32) -> EngineResult<Vec<JobContract>>;

    /// Returns every holiday contract of the staff member.
    fn holiday_contracts(&self, staff_id: u32) -> EngineResult<Vec<HolidayContract>>;
}

/// An [`AttendanceSource`] backed by vectors.
///
/// # Example
///
/// ```
/// use attendance_engine::assembly::{AttendanceSource, InMemoryAttendanceSource};
/// use attendance_engine::models::AttendanceRecord;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
/// let record: AttendanceRecord =
///     serde_json::from_str(r#"{"staff_id": 201, "work_day": "2025-12-01"}"#).unwrap();
///
/// let source = InMemoryAttendanceSource::new().with_records(vec![record]);
/// assert_eq!(source.attendance(201, day, day).unwrap().len(), 1);
/// assert!(source.attendance(202, day, day).unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryAttendanceSource {
    records: Vec<AttendanceRecord>,
    job_contracts: Vec<JobContract>,
    holiday_contracts: Vec<HolidayContract>,
}

impl InMemoryAttendanceSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds attendance records.
    pub fn with_records(mut self, records: impl IntoIterator<Item = AttendanceRecord>) -> Self {
        self.records.extend(records);
        self
    }

    /// Adds job contracts.
    pub fn with_job_contracts(
        mut self,
        contracts: impl IntoIterator<Item = JobContract>,
    ) -> Self {
        self.job_contracts.extend(contracts);
        self
    }

    /// Adds holiday contracts.
    pub fn with_holiday_contracts(
        mut self,
        contracts: impl IntoIterator<Item = HolidayContract>,
    ) -> Self {
        self.holiday_contracts.extend(contracts);
        self
    }
}

impl AttendanceSource for InMemoryAttendanceSource {
    fn attendance(
        &self,
        staff_id: u32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        let mut records: Vec<AttendanceRecord> = self
            .records
            .iter()
            .filter(|r| r.staff_id == staff_id && from <= r.work_day && r.work_day <= to)
            .cloned()
            .collect();
        // Stable, so duplicates of a day keep their insertion order.
        records.sort_by_key(|r| r.work_day);
        Ok(records)
    }

    fn job_contracts(&self, staff_id: u32) -> EngineResult<Vec<JobContract>> {
        Ok(self
            .job_contracts
            .iter()
            .filter(|c| c.staff_id == staff_id)
            .cloned()
            .collect())
    }

    fn holiday_contracts(&self, staff_id: u32) -> EngineResult<Vec<HolidayContract>> {
        Ok(self
            .holiday_contracts
            .iter()
            .filter(|c| c.staff_id == staff_id)
            .cloned()
            .collect())
    }
}
