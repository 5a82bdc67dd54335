//! Midday rest-time rule.
//!
//! The nominal rest deduction models a midday break. It applies only to
//! shifts that start before the midday boundary and end after it.

use chrono::{Duration, NaiveTime};

/// Default nominal rest: one hour.
pub const DEFAULT_NOMINAL_REST_MINUTES: i64 = 60;

/// Default midday boundary: 13:00.
pub const DEFAULT_MIDDAY_HOUR: u32 = 13;

/// The configured rest-time rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestTimeRule {
    nominal_rest: Duration,
    midday: NaiveTime,
}

impl Default for RestTimeRule {
    fn default() -> Self {
        Self {
            nominal_rest: Duration::minutes(DEFAULT_NOMINAL_REST_MINUTES),
            midday: default_midday(),
        }
    }
}

impl RestTimeRule {
    /// Creates a rule with the given nominal rest and midday boundary.
    pub fn new(nominal_rest: Duration, midday: NaiveTime) -> Self {
        Self {
            nominal_rest,
            midday,
        }
    }

    /// Returns the nominal rest deduction.
    pub fn nominal_rest(&self) -> Duration {
        self.nominal_rest
    }

    /// Returns the midday boundary.
    pub fn midday(&self) -> NaiveTime {
        self.midday
    }

    /// Returns the rest to deduct for a clock pair under this rule.
    pub fn applicable_rest(&self, start: Option<NaiveTime>, end: Option<NaiveTime>) -> Duration {
        match (start, end) {
            (Some(start), Some(end)) if start < self.midday && end > self.midday => {
                self.nominal_rest
            }
            _ => Duration::zero(),
        }
    }
}

fn default_midday() -> NaiveTime {
    NaiveTime::from_hms_opt(DEFAULT_MIDDAY_HOUR, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Returns `nominal_rest` if the shift crosses 13:00, zero otherwise.
///
/// A missing start or end means the crossing cannot be evaluated, so no rest
/// is deducted.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::applicable_rest;
/// use chrono::{Duration, NaiveTime};
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0);
///
/// assert_eq!(applicable_rest(t(9, 0), t(18, 0), Duration::hours(1)), Duration::hours(1));
/// assert_eq!(applicable_rest(t(13, 0), t(20, 0), Duration::hours(1)), Duration::zero());
/// assert_eq!(applicable_rest(t(8, 0), t(12, 30), Duration::hours(1)), Duration::zero());
/// ```
pub fn applicable_rest(
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
    nominal_rest: Duration,
) -> Duration {
    RestTimeRule::new(nominal_rest, default_midday()).applicable_rest(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, m, 0)
    }

    fn one_hour() -> Duration {
        Duration::hours(1)
    }

    #[test]
    fn test_shift_crossing_midday_gets_rest() {
        assert_eq!(applicable_rest(t(9, 0), t(18, 0), one_hour()), one_hour());
    }

    #[test]
    fn test_shift_starting_at_midday_gets_none() {
        assert_eq!(
            applicable_rest(t(13, 0), t(20, 0), one_hour()),
            Duration::zero()
        );
    }

    #[test]
    fn test_morning_shift_gets_none() {
        assert_eq!(
            applicable_rest(t(8, 0), t(12, 30), one_hour()),
            Duration::zero()
        );
    }

    #[test]
    fn test_shift_ending_exactly_at_midday_gets_none() {
        assert_eq!(
            applicable_rest(t(8, 0), t(13, 0), one_hour()),
            Duration::zero()
        );
    }

    #[test]
    fn test_one_minute_either_side_of_midday() {
        assert_eq!(applicable_rest(t(12, 59), t(13, 1), one_hour()), one_hour());
    }

    #[test]
    fn test_missing_times_get_none() {
        assert_eq!(applicable_rest(None, t(18, 0), one_hour()), Duration::zero());
        assert_eq!(applicable_rest(t(9, 0), None, one_hour()), Duration::zero());
        assert_eq!(applicable_rest(None, None, one_hour()), Duration::zero());
    }

    #[test]
    fn test_reversed_pair_gets_none() {
        assert_eq!(
            applicable_rest(t(18, 0), t(9, 0), one_hour()),
            Duration::zero()
        );
    }

    #[test]
    fn test_configured_boundary_and_rest() {
        let rule = RestTimeRule::new(Duration::minutes(45), NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        assert_eq!(rule.applicable_rest(t(9, 0), t(12, 30)), Duration::minutes(45));
        assert_eq!(rule.applicable_rest(t(12, 0), t(17, 0)), Duration::zero());
    }

    #[test]
    fn test_default_rule() {
        let rule = RestTimeRule::default();
        assert_eq!(rule.nominal_rest(), one_hour());
        assert_eq!(rule.midday(), NaiveTime::from_hms_opt(13, 0, 0).unwrap());
    }
}
