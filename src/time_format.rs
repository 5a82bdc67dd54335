//! Conversions between the engine's internal durations and their external forms.
//!
//! Durations are `chrono::Duration` everywhere inside the crate. Decimal hours
//! (configuration, API payloads) and `H:MM` strings (compact projection) only
//! exist at the edges, and this module is the single place that converts
//! between them.

use chrono::{Duration, NaiveTime, Timelike};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const MINUTES_PER_HOUR: i64 = 60;

/// Upper bound for any per-day hours value (contract, work type, notification).
pub const MAX_DAILY_HOURS: i64 = 24;

/// Converts decimal hours into a duration, rounded to the nearest minute.
///
/// Values whose minute count does not fit a `Duration` degrade to zero. Inputs
/// that come from outside the crate go through [`daily_hours_to_duration`].
///
/// # Example
///
/// ```
/// use attendance_engine::time_format::hours_to_duration;
/// use chrono::Duration;
/// use rust_decimal::Decimal;
///
/// assert_eq!(hours_to_duration(Decimal::new(75, 1)), Duration::minutes(450));
/// ```
pub fn hours_to_duration(hours: Decimal) -> Duration {
    hours
        .checked_mul(Decimal::from(MINUTES_PER_HOUR))
        .and_then(|minutes| minutes.round().to_i64())
        .and_then(Duration::try_minutes)
        .unwrap_or_else(Duration::zero)
}

/// Converts a per-day hours value, accepting only `0..=24`.
///
/// # Example
///
/// ```
/// use attendance_engine::time_format::daily_hours_to_duration;
/// use chrono::Duration;
/// use rust_decimal::Decimal;
///
/// assert_eq!(daily_hours_to_duration(Decimal::from(8)), Some(Duration::hours(8)));
/// assert_eq!(daily_hours_to_duration(Decimal::from(-1)), None);
/// assert_eq!(daily_hours_to_duration(Decimal::from(10_000_000_000_000i64)), None);
/// ```
pub fn daily_hours_to_duration(hours: Decimal) -> Option<Duration> {
    (!hours.is_sign_negative() && hours <= Decimal::from(MAX_DAILY_HOURS))
        .then(|| hours_to_duration(hours))
}

/// Converts a duration into decimal hours, rounded to two decimal places.
///
/// # Example
///
/// ```
/// use attendance_engine::time_format::duration_to_hours;
/// use chrono::Duration;
/// use rust_decimal::Decimal;
///
/// assert_eq!(duration_to_hours(Duration::minutes(390)), Decimal::new(65, 1));
/// ```
pub fn duration_to_hours(duration: Duration) -> Decimal {
    (Decimal::from(duration.num_minutes()) / Decimal::from(MINUTES_PER_HOUR))
        .round_dp(2)
        .normalize()
}

/// Formats a duration as `H:MM`.
///
/// Zero and negative durations render as `0.0`, matching the attendance
/// sheets this output is compared against.
pub fn format_hhmm(duration: Duration) -> String {
    let minutes = duration.num_minutes();
    if minutes <= 0 {
        return "0.0".to_string();
    }
    format!("{}:{:02}", minutes / MINUTES_PER_HOUR, minutes % MINUTES_PER_HOUR)
}

/// Formats a duration as `H:MM`, keeping a leading `-` for negative values.
///
/// Used for overtime, where a negative figure is meaningful.
pub fn format_signed_hhmm(duration: Duration) -> String {
    let minutes = duration.num_minutes();
    if minutes == 0 {
        return "0.0".to_string();
    }
    let sign = if minutes < 0 { "-" } else { "" };
    let abs = minutes.abs();
    format!(
        "{}{}:{:02}",
        sign,
        abs / MINUTES_PER_HOUR,
        abs % MINUTES_PER_HOUR
    )
}

/// Parses a wall-clock value such as `9:00`, `09:00` or `09:00:00`.
///
/// Empty or unparseable input yields `None` ("not clocked").
pub fn parse_clock_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// Formats a clock value as `HH:MM`; an absent value renders as `00:00`.
pub fn format_clock_time(time: Option<NaiveTime>) -> String {
    match time {
        Some(t) => format!("{:02}:{:02}", t.hour(), t.minute()),
        None => "00:00".to_string(),
    }
}

/// Serde adapter storing a `Duration` as decimal hours.
pub mod serde_hours {
    use chrono::Duration;
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{duration_to_hours, hours_to_duration};

    /// Serializes a duration as decimal hours.
    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        Serialize::serialize(&duration_to_hours(*value), serializer)
    }

    /// Deserializes decimal hours (string or number) into a duration.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        <Decimal as Deserialize>::deserialize(deserializer).map(hours_to_duration)
    }
}

/// Serde adapter storing an optional clock value as `HH:MM`, empty when absent.
pub mod serde_clock {
    use chrono::{NaiveTime, Timelike};
    use serde::{Deserialize, Deserializer, Serializer};

    use super::parse_clock_time;

    /// Serializes the clock value as `HH:MM`, or an empty string when absent.
    pub fn serialize<S: Serializer>(
        value: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(t) => serializer.serialize_str(&format!("{:02}:{:02}", t.hour(), t.minute())),
            None => serializer.serialize_str(""),
        }
    }

    /// Deserializes `HH:MM`; empty, null or unparseable values become `None`.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse_clock_time))
    }
}
