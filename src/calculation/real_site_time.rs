//! On-site ("real") time calculation.
//!
//! Real site time is the total work time minus the time attributable to
//! approved absences. When the total was taken from the clock span and a
//! time-off code was filed, the time off is already missing from the span;
//! [`TimeOffDeductionPolicy`] decides whether it is subtracted again.

use chrono::Duration;

use super::NotificationCatalog;
use crate::config::TimeOffDeductionPolicy;
use crate::models::{ContractBaseline, NotificationCategory, NotificationPair, TotalWorkOrigin};

/// Computes the on-site time for a day.
///
/// A full-day code filed in both halves is counted once.
pub fn calculate_real_site_time(
    total_work_time: Duration,
    origin: TotalWorkOrigin,
    notifications: &NotificationPair,
    catalog: &NotificationCatalog,
    baseline: &ContractBaseline,
    policy: TimeOffDeductionPolicy,
) -> Duration {
    let skip_time_off = origin == TotalWorkOrigin::ClockDerived
        && policy == TimeOffDeductionPolicy::SkipWhenClockDerived;

    let mut deducted: Option<(&str, NotificationCategory)> = None;
    let mut real = total_work_time;

    for code in notifications.codes() {
        let category = catalog.classify(code);
        if !category.is_absence_leave() {
            continue;
        }
        if category.is_time_off() && skip_time_off {
            continue;
        }
        if category.is_full_day()
            && deducted.is_some_and(|(prev, prev_cat)| prev == code.trim() && prev_cat == category)
        {
            continue;
        }
        real -= catalog.nominal_duration(code, baseline);
        deducted = Some((code.trim(), category));
    }

    real
}
