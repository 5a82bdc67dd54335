//! Contract baseline resolution.
//!
//! Joins a staff member's date-ranged job and holiday contracts into the
//! single [`ContractBaseline`] the engine needs for one work day.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::config::WorkType;
use crate::error::{EngineError, EngineResult};
use crate::models::{ContractBaseline, HolidayContract, JobContract};
use crate::time_format::daily_hours_to_duration;

/// A baseline together with the work-type label it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContract {
    /// Work-type label, e.g. "Part-time".
    pub work_type: String,
    /// The baseline effective on the day.
    pub baseline: ContractBaseline,
}

/// Resolves the baseline for `staff_id` on `day`.
///
/// The covering job contract decides the work type; when several cover the
/// day the one that started last wins. If a holiday contract also covers the
/// day, the staff member has individually agreed hours: the work time is the
/// job contract's `part_work_hours` (or the work type's hours when unset) and
/// the holiday time is the holiday contract's. Otherwise both values are the
/// work type's standard hours.
///
/// Contract hours outside `0..=24` fail with
/// [`EngineError::InvalidContractHours`].
pub fn resolve_baseline(
    staff_id: u32,
    day: NaiveDate,
    job_contracts: &[JobContract],
    holiday_contracts: &[HolidayContract],
    work_types: &HashMap<u32, WorkType>,
) -> EngineResult<ResolvedContract> {
    let job = job_contracts
        .iter()
        .filter(|c| c.staff_id == staff_id && c.covers(day))
        .max_by_key(|c| c.start_day)
        .ok_or(EngineError::ContractNotFound {
            staff_id,
            date: day,
        })?;

    let work_type = work_types
        .get(&job.contract_code)
        .ok_or(EngineError::UnknownWorkType {
            code: job.contract_code,
        })?;

    let holiday = holiday_contracts
        .iter()
        .filter(|c| c.staff_id == staff_id && c.covers(day))
        .max_by_key(|c| c.start_day);

    let baseline = match holiday {
        Some(holiday) => {
            let work_time = match job.part_work_hours {
                Some(hours) => contract_hours(staff_id, "part_work_hours", hours)?,
                None => work_type.work_time(),
            };
            let holiday_time = contract_hours(staff_id, "holiday_hours", holiday.holiday_hours)?;
            ContractBaseline::new(work_time, holiday_time)
        }
        None => ContractBaseline::new(work_type.work_time(), work_type.work_time()),
    };

    Ok(ResolvedContract {
        work_type: work_type.name.clone(),
        baseline,
    })
}

fn contract_hours(
    staff_id: u32,
    field: &'static str,
    hours: Decimal,
) -> EngineResult<Duration> {
    daily_hours_to_duration(hours).ok_or(EngineError::InvalidContractHours {
        staff_id,
        field,
        hours,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn work_types() -> HashMap<u32, WorkType> {
        let mut types = HashMap::new();
        types.insert(
            1,
            WorkType {
                name: "Full-time".to_string(),
                work_hours: dec("8"),
            },
        );
        types.insert(
            2,
            WorkType {
                name: "Part-time".to_string(),
                work_hours: dec("6"),
            },
        );
        types
    }

    fn job(code: u32, start: NaiveDate, end: NaiveDate, part: Option<&str>) -> JobContract {
        JobContract {
            staff_id: 201,
            contract_code: code,
            start_day: start,
            end_day: end,
            part_work_hours: part.map(dec),
        }
    }

    fn holiday(start: NaiveDate, end: NaiveDate, hours: &str) -> HolidayContract {
        HolidayContract {
            staff_id: 201,
            start_day: start,
            end_day: end,
            holiday_hours: dec(hours),
        }
    }

    #[test]
    fn test_standard_contract_uses_work_type_hours() {
        let jobs = vec![job(1, date(4, 1), date(12, 31), None)];
        let resolved = resolve_baseline(201, date(12, 1), &jobs, &[], &work_types()).unwrap();

        assert_eq!(resolved.work_type, "Full-time");
        assert_eq!(resolved.baseline.contract_work_time, Duration::hours(8));
        assert_eq!(resolved.baseline.contract_holiday_time, Duration::hours(8));
    }

    #[test]
    fn test_part_time_contract_with_holiday_contract() {
        let jobs = vec![job(2, date(4, 1), date(12, 31), Some("5.5"))];
        let holidays = vec![holiday(date(4, 1), date(12, 31), "5")];
        let resolved =
            resolve_baseline(201, date(12, 1), &jobs, &holidays, &work_types()).unwrap();

        assert_eq!(resolved.work_type, "Part-time");
        assert_eq!(resolved.baseline.contract_work_time, Duration::minutes(330));
        assert_eq!(resolved.baseline.contract_holiday_time, Duration::hours(5));
    }

    #[test]
    fn test_holiday_contract_without_part_hours_falls_back_to_work_type() {
        let jobs = vec![job(2, date(4, 1), date(12, 31), None)];
        let holidays = vec![holiday(date(4, 1), date(12, 31), "5")];
        let resolved =
            resolve_baseline(201, date(12, 1), &jobs, &holidays, &work_types()).unwrap();

        assert_eq!(resolved.baseline.contract_work_time, Duration::hours(6));
        assert_eq!(resolved.baseline.contract_holiday_time, Duration::hours(5));
    }

    #[test]
    fn test_holiday_contract_outside_day_is_ignored() {
        let jobs = vec![job(2, date(4, 1), date(12, 31), Some("5.5"))];
        let holidays = vec![holiday(date(4, 1), date(11, 30), "5")];
        let resolved =
            resolve_baseline(201, date(12, 1), &jobs, &holidays, &work_types()).unwrap();

        assert_eq!(resolved.baseline.contract_work_time, Duration::hours(6));
        assert_eq!(resolved.baseline.contract_holiday_time, Duration::hours(6));
    }

    #[test]
    fn test_latest_covering_contract_wins() {
        let jobs = vec![
            job(1, date(4, 1), date(12, 31), None),
            job(2, date(12, 15), date(12, 31), None),
        ];
        let before = resolve_baseline(201, date(12, 14), &jobs, &[], &work_types()).unwrap();
        let after = resolve_baseline(201, date(12, 15), &jobs, &[], &work_types()).unwrap();

        assert_eq!(before.work_type, "Full-time");
        assert_eq!(after.work_type, "Part-time");
    }

    #[test]
    fn test_no_covering_contract_fails() {
        let jobs = vec![job(1, date(4, 1), date(11, 30), None)];

        match resolve_baseline(201, date(12, 1), &jobs, &[], &work_types()) {
            Err(EngineError::ContractNotFound { staff_id, date: d }) => {
                assert_eq!(staff_id, 201);
                assert_eq!(d, date(12, 1));
            }
            other => panic!("Expected ContractNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_other_staff_contract_is_ignored() {
        let mut other = job(1, date(4, 1), date(12, 31), None);
        other.staff_id = 999;

        assert!(matches!(
            resolve_baseline(201, date(12, 1), &[other], &[], &work_types()),
            Err(EngineError::ContractNotFound { .. })
        ));
    }

    #[test]
    fn test_unknown_work_type_fails() {
        let jobs = vec![job(42, date(4, 1), date(12, 31), None)];

        assert!(matches!(
            resolve_baseline(201, date(12, 1), &jobs, &[], &work_types()),
            Err(EngineError::UnknownWorkType { code: 42 })
        ));
    }

    #[test]
    fn test_negative_holiday_hours_fail() {
        let jobs = vec![job(2, date(4, 1), date(12, 31), Some("5.5"))];
        let holidays = vec![holiday(date(4, 1), date(12, 31), "-5")];

        match resolve_baseline(201, date(12, 1), &jobs, &holidays, &work_types()) {
            Err(EngineError::InvalidContractHours {
                staff_id,
                field,
                hours,
            }) => {
                assert_eq!(staff_id, 201);
                assert_eq!(field, "holiday_hours");
                assert_eq!(hours, dec("-5"));
            }
            other => panic!("Expected InvalidContractHours, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_part_work_hours_fail() {
        let jobs = vec![job(2, date(4, 1), date(12, 31), Some("10000000000000"))];
        let holidays = vec![holiday(date(4, 1), date(12, 31), "5")];

        assert!(matches!(
            resolve_baseline(201, date(12, 1), &jobs, &holidays, &work_types()),
            Err(EngineError::InvalidContractHours {
                field: "part_work_hours",
                ..
            })
        ));
    }

}
