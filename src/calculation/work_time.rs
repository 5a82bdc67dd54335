//! Total work time decision.
//!
//! Decides whether a day reports the contractual work time or the observed
//! clock span, and whether a shortfall against the contract is irregular.

use chrono::Duration;

use crate::models::{ClockPair, ContractBaseline, IrregularReason, OvertimeContext, TotalWorkOrigin};

/// The outcome of the total work time decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotalWorkDecision {
    /// The total work time to report.
    pub total_work_time: Duration,
    /// Which path produced it.
    pub origin: TotalWorkOrigin,
    /// Set when the shortfall is not explained by any notification.
    pub irregular: Option<IrregularReason>,
}

/// What the day's notifications say about a shortfall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationSummary {
    /// At least one notification is a time-off-hours code.
    pub time_off: bool,
    /// At least one notification is an absence/time-off category.
    pub absence: bool,
}

/// Decides the total work time for a day.
///
/// With an overtime request the clock span is always trusted. Otherwise the
/// contract work time is reported unless the clock span falls short of it:
/// - time off filed: the shortfall is the time off, report the clock span;
/// - other absence filed: the contract stands;
/// - holiday work, or on call without a clock-in: nothing was expected, report
///   the clock span;
/// - nothing filed: report the clock span and flag the day.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{decide_total_work_time, NotificationSummary};
/// use attendance_engine::models::{
///     ClockPair, ContractBaseline, IrregularReason, OvertimeContext, TotalWorkOrigin,
/// };
/// use chrono::Duration;
///
/// let clock = ClockPair::from_raw("09:00", "16:30");
/// let baseline = ContractBaseline::new(Duration::hours(8), Duration::hours(8));
/// let none = NotificationSummary { time_off: false, absence: false };
///
/// let decision = decide_total_work_time(
///     Duration::minutes(390),
///     none,
///     &clock,
///     &OvertimeContext::regular(),
///     &baseline,
/// );
/// assert_eq!(decision.total_work_time, Duration::minutes(390));
/// assert_eq!(decision.origin, TotalWorkOrigin::ClockDerived);
/// assert_eq!(decision.irregular, Some(IrregularReason::ShortfallWithoutNotification));
/// ```
pub fn decide_total_work_time(
    clock_derived: Duration,
    notifications: NotificationSummary,
    clock: &ClockPair,
    context: &OvertimeContext,
    baseline: &ContractBaseline,
) -> TotalWorkDecision {
    let from_clock = |irregular| TotalWorkDecision {
        total_work_time: clock_derived,
        origin: TotalWorkOrigin::ClockDerived,
        irregular,
    };

    if context.overtime_requested {
        return from_clock(None);
    }

    let contract = TotalWorkDecision {
        total_work_time: baseline.contract_work_time,
        origin: TotalWorkOrigin::ContractBaseline,
        irregular: None,
    };

    if clock_derived >= baseline.contract_work_time {
        return contract;
    }

    if notifications.time_off {
        return from_clock(None);
    }
    if notifications.absence {
        return contract;
    }
    if context.holiday_work || (context.on_call && clock.start_time.is_none()) {
        return from_clock(None);
    }

    from_clock(Some(IrregularReason::ShortfallWithoutNotification))
}
