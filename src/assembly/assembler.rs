//! Month assembly.
//!
//! The [`DayRecordAssembler`] turns a staff member's raw records for a range
//! into a [`MonthlyAttendance`]: it resolves the baseline per day, runs the
//! engine once per day and echoes the raw inputs next to each result.

use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, HashMap};
use tracing::{info, warn};

use super::{AttendanceSource, ResolvedContract, month_range, resolve_baseline};
use crate::calculation::TimeCalculationEngine;
use crate::config::{AttendanceConfig, WorkType};
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceHeader, AttendanceRecord, DayEntry, MonthlyAttendance};
use crate::time_format::format_clock_time;

/// Builds month structures from an [`AttendanceSource`].
///
/// # Example
///
/// ```no_run
/// use attendance_engine::assembly::{DayRecordAssembler, InMemoryAttendanceSource};
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/attendance")?;
/// let assembler = DayRecordAssembler::from_config(loader.config());
/// let source = InMemoryAttendanceSource::new();
///
/// let month = assembler.assemble_month(&source, 201, "2025-12")?;
/// println!("{} irregular days", month.irregular_days().len());
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DayRecordAssembler {
    engine: TimeCalculationEngine,
    work_types: HashMap<u32, WorkType>,
}

impl DayRecordAssembler {
    /// Creates an assembler from an engine and a work-type table.
    pub fn new(engine: TimeCalculationEngine, work_types: HashMap<u32, WorkType>) -> Self {
        Self { engine, work_types }
    }

    /// Creates an assembler from a loaded configuration.
    pub fn from_config(config: &AttendanceConfig) -> Self {
        Self::new(
            TimeCalculationEngine::from_config(config),
            config.work_types().clone(),
        )
    }

    /// Returns the engine used for each day.
    pub fn engine(&self) -> &TimeCalculationEngine {
        &self.engine
    }

    /// Assembles a `YYYY-MM` month.
    pub fn assemble_month<S: AttendanceSource + ?Sized>(
        &self,
        source: &S,
        staff_id: u32,
        target_month: &str,
    ) -> EngineResult<MonthlyAttendance> {
        let (from, to) = month_range(target_month)?;
        self.assemble(source, staff_id, from, to)
    }

    /// Assembles the records of `staff_id` between `from` and `to` inclusive.
    ///
    /// Days are keyed by day of month, so the range is expected to lie within
    /// one month. The header is taken from the first record. When a day
    /// appears more than once, the last record wins.
    pub fn assemble<S: AttendanceSource + ?Sized>(
        &self,
        source: &S,
        staff_id: u32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<MonthlyAttendance> {
        let records = source.attendance(staff_id, from, to)?;
        let Some(first) = records.first() else {
            warn!(staff_id, %from, %to, "No attendance records in range");
            return Err(EngineError::NoAttendanceRecords { staff_id, from, to });
        };

        let job_contracts = source.job_contracts(staff_id)?;
        let holiday_contracts = source.holiday_contracts(staff_id)?;

        let header_contract = resolve_baseline(
            staff_id,
            first.work_day,
            &job_contracts,
            &holiday_contracts,
            &self.work_types,
        )?;
        let header = AttendanceHeader {
            staff_id,
            work_type: header_contract.work_type,
            contract_work_time: header_contract.baseline.contract_work_time,
            contract_holiday_time: header_contract.baseline.contract_holiday_time,
        };

        let mut days = BTreeMap::new();
        for record in &records {
            let resolved = resolve_baseline(
                staff_id,
                record.work_day,
                &job_contracts,
                &holiday_contracts,
                &self.work_types,
            )?;
            let entry = self.day_entry(record, resolved);

            if days.insert(record.work_day.day(), entry).is_some() {
                warn!(
                    staff_id,
                    work_day = %record.work_day,
                    "Duplicate attendance record, keeping the last one"
                );
            }
        }

        let month = MonthlyAttendance { header, days };

        info!(
            staff_id,
            %from,
            %to,
            days = month.days.len(),
            irregular_days = month.irregular_days().len(),
            "Assembled attendance"
        );

        Ok(month)
    }

    fn day_entry(&self, record: &AttendanceRecord, resolved: ResolvedContract) -> DayEntry {
        let calculation = self.engine.compute(
            &record.clock,
            &record.notifications,
            &record.context,
            &resolved.baseline,
        );

        DayEntry {
            work_day: record.work_day,
            on_call: record.context.on_call,
            clock_in: format_clock_time(record.clock.start_time),
            clock_out: format_clock_time(record.clock.end_time),
            notification_am: self.notification_name(record, &record.notifications.notification_am),
            notification_pm: self.notification_name(record, &record.notifications.notification_pm),
            overtime_requested: record.context.overtime_requested,
            remark: record.remark.clone(),
            work_type: resolved.work_type,
            baseline: resolved.baseline,
            calculation,
        }
    }

    /// Unknown codes are echoed as-is.
    fn notification_name(&self, record: &AttendanceRecord, code: &str) -> Option<String> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        match self.engine.catalog().name(code) {
            Some(name) => Some(name.to_string()),
            None => {
                warn!(
                    staff_id = record.staff_id,
                    work_day = %record.work_day,
                    code,
                    "Unknown notification code"
                );
                Some(code.to_string())
            }
        }
    }
}
