//! Clock pair model.
//!
//! A day's start and end wall-clock values as recorded by attendance hardware
//! or self-report. Either side may be missing.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::time_format::{parse_clock_time, serde_clock};

/// A day's clock-in and clock-out times.
///
/// Both values are same-day local times. A reversed pair is not rejected; it
/// produces a negative raw span that the engine surfaces as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockPair {
    /// Clock-in time, `None` when not clocked.
    #[serde(with = "serde_clock", default)]
    pub start_time: Option<NaiveTime>,
    /// Clock-out time, `None` when not clocked.
    #[serde(with = "serde_clock", default)]
    pub end_time: Option<NaiveTime>,
}

impl ClockPair {
    /// Creates a clock pair from already parsed times.
    pub fn new(start_time: Option<NaiveTime>, end_time: Option<NaiveTime>) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    /// Creates a clock pair from raw `HH:MM` strings.
    ///
    /// Empty or malformed values are treated as "not clocked".
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::ClockPair;
    /// use chrono::Duration;
    ///
    /// let clock = ClockPair::from_raw("09:00", "18:00");
    /// assert_eq!(clock.raw_span(), Duration::hours(9));
    ///
    /// let on_call = ClockPair::from_raw("", "");
    /// assert_eq!(on_call.raw_span(), Duration::zero());
    /// ```
    pub fn from_raw(start_time: &str, end_time: &str) -> Self {
        Self::new(parse_clock_time(start_time), parse_clock_time(end_time))
    }

    /// Returns `end - start` when both are present, zero otherwise.
    pub fn raw_span(&self) -> Duration {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => end - start,
            _ => Duration::zero(),
        }
    }

    /// Returns true if both a start and an end time were recorded.
    pub fn is_complete(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_raw_span_full_day() {
        let clock = ClockPair::new(Some(time(9, 0)), Some(time(18, 0)));
        assert_eq!(clock.raw_span(), Duration::hours(9));
        assert!(clock.is_complete());
    }

    #[test]
    fn test_raw_span_missing_side_is_zero() {
        assert_eq!(
            ClockPair::new(None, Some(time(18, 0))).raw_span(),
            Duration::zero()
        );
        assert_eq!(
            ClockPair::new(Some(time(9, 0)), None).raw_span(),
            Duration::zero()
        );
        assert!(!ClockPair::default().is_complete());
    }

    #[test]
    fn test_reversed_pair_yields_negative_span() {
        let clock = ClockPair::new(Some(time(18, 0)), Some(time(9, 0)));
        assert_eq!(clock.raw_span(), Duration::hours(-9));
    }

    #[test]
    fn test_from_raw_degrades_malformed_input() {
        let clock = ClockPair::from_raw("9:xx", "17:30");
        assert_eq!(clock.start_time, None);
        assert_eq!(clock.end_time, Some(time(17, 30)));
    }

    #[test]
    fn test_clock_pair_deserialization() {
        let json = r#"{"start_time": "08:45", "end_time": ""}"#;
        let clock: ClockPair = serde_json::from_str(json).unwrap();
        assert_eq!(clock.start_time, Some(time(8, 45)));
        assert_eq!(clock.end_time, None);

        let clock: ClockPair = serde_json::from_str("{}").unwrap();
        assert_eq!(clock, ClockPair::default());
    }

    #[test]
    fn test_clock_pair_serialization() {
        let clock = ClockPair::new(Some(time(9, 0)), None);
        let json = serde_json::to_string(&clock).unwrap();
        assert_eq!(json, r#"{"start_time":"09:00","end_time":""}"#);
    }
}
