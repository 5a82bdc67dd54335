//! Overtime context model.

use serde::{Deserialize, Serialize};

/// The per-day flags that change how the clock span is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeContext {
    /// An overtime request was filed for the day.
    #[serde(default)]
    pub overtime_requested: bool,
    /// The day is a scheduled day off that was worked.
    #[serde(default)]
    pub holiday_work: bool,
    /// The staff member was on call; an absent clock-in is expected.
    #[serde(default)]
    pub on_call: bool,
}

impl OvertimeContext {
    /// A regular day: no overtime request, not a holiday, not on call.
    pub fn regular() -> Self {
        Self::default()
    }

    /// A day with an overtime request.
    pub fn overtime() -> Self {
        Self {
            overtime_requested: true,
            ..Self::default()
        }
    }
}
