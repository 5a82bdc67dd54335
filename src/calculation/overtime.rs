//! Overtime calculation.

use chrono::Duration;

use crate::models::{ContractBaseline, IrregularReason, OvertimeContext};

/// The overtime for a day and whether it is irregular.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OvertimeResult {
    /// Overtime against the contract; may be negative.
    pub overtime: Duration,
    /// `NegativeOvertime` when the value is below zero.
    pub irregular: Option<IrregularReason>,
}

/// Computes overtime from the total work time.
///
/// Without an overtime request the result is zero. With one it is
/// `total_work_time - contract_work_time`; a negative value is reported
/// unchanged and flagged.
pub fn calculate_overtime(
    total_work_time: Duration,
    context: &OvertimeContext,
    baseline: &ContractBaseline,
) -> OvertimeResult {
    if !context.overtime_requested {
        return OvertimeResult {
            overtime: Duration::zero(),
            irregular: None,
        };
    }

    let overtime = total_work_time - baseline.contract_work_time;
    let irregular = (overtime < Duration::zero()).then_some(IrregularReason::NegativeOvertime);

    OvertimeResult {
        overtime,
        irregular,
    }
}
