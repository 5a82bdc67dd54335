//! The per-day time calculation engine.

use tracing::debug;

use super::{
    NotificationCatalog, NotificationSummary, RestTimeRule, calculate_overtime,
    calculate_real_site_time, decide_total_work_time,
};
use crate::config::{AttendanceConfig, TimeOffDeductionPolicy};
use crate::models::{
    ClockPair, ContractBaseline, DayCalculationResult, NotificationPair, OvertimeContext,
};

/// Derives the time metrics for one staff member on one work day.
///
/// The engine holds only read-only configuration. [`compute`](Self::compute)
/// is a pure function of its arguments, so one engine can be shared across
/// threads and reused for every staff member and day.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::TimeCalculationEngine;
/// use attendance_engine::models::{ClockPair, ContractBaseline, NotificationPair, OvertimeContext};
/// use chrono::Duration;
///
/// let engine = TimeCalculationEngine::default();
/// let result = engine.compute(
///     &ClockPair::from_raw("09:00", "18:00"),
///     &NotificationPair::default(),
///     &OvertimeContext::regular(),
///     &ContractBaseline::new(Duration::hours(8), Duration::hours(8)),
/// );
///
/// assert_eq!(result.normal_rest_time, Duration::hours(1));
/// assert_eq!(result.total_work_time, Duration::hours(8));
/// assert!(!result.is_irregular());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimeCalculationEngine {
    catalog: NotificationCatalog,
    rest_rule: RestTimeRule,
    time_off_policy: TimeOffDeductionPolicy,
}

impl TimeCalculationEngine {
    /// Creates an engine from its parts.
    pub fn new(
        catalog: NotificationCatalog,
        rest_rule: RestTimeRule,
        time_off_policy: TimeOffDeductionPolicy,
    ) -> Self {
        Self {
            catalog,
            rest_rule,
            time_off_policy,
        }
    }

    /// Creates an engine from a loaded configuration.
    pub fn from_config(config: &AttendanceConfig) -> Self {
        Self::new(
            config.catalog().clone(),
            *config.rest_rule(),
            config.time_off_deduction(),
        )
    }

    /// Returns the notification catalog.
    pub fn catalog(&self) -> &NotificationCatalog {
        &self.catalog
    }

    /// Returns the rest-time rule.
    pub fn rest_rule(&self) -> &RestTimeRule {
        &self.rest_rule
    }

    /// Returns the time-off deduction policy.
    pub fn time_off_policy(&self) -> TimeOffDeductionPolicy {
        self.time_off_policy
    }

    /// Computes the derived metrics for one day.
    ///
    /// Never fails. Missing or reversed clock times degrade to zero or
    /// negative spans, unknown notification codes are ignored, and any
    /// inconsistency is reported through
    /// [`DayCalculationResult::irregular`].
    pub fn compute(
        &self,
        clock: &ClockPair,
        notifications: &NotificationPair,
        context: &OvertimeContext,
        baseline: &ContractBaseline,
    ) -> DayCalculationResult {
        let rest = self
            .rest_rule
            .applicable_rest(clock.start_time, clock.end_time);
        let clock_derived = clock.raw_span() - rest;

        let [am, pm] = notifications.codes();
        let summary = NotificationSummary {
            time_off: self.catalog.is_time_off(am) || self.catalog.is_time_off(pm),
            absence: self.catalog.is_absence_leave(am) || self.catalog.is_absence_leave(pm),
        };

        let decision =
            decide_total_work_time(clock_derived, summary, clock, context, baseline);
        let overtime = calculate_overtime(decision.total_work_time, context, baseline);
        let real_site_time = calculate_real_site_time(
            decision.total_work_time,
            decision.origin,
            notifications,
            &self.catalog,
            baseline,
            self.time_off_policy,
        );

        let irregular = decision.irregular.or(overtime.irregular);

        debug!(
            clock_derived_minutes = clock_derived.num_minutes(),
            total_work_minutes = decision.total_work_time.num_minutes(),
            origin = ?decision.origin,
            irregular = ?irregular,
            "Computed day"
        );

        DayCalculationResult {
            normal_rest_time: rest,
            time_off_flag: summary.time_off,
            total_work_time: decision.total_work_time,
            total_work_origin: decision.origin,
            real_site_time,
            overtime: overtime.overtime,
            irregular,
        }
    }
}
