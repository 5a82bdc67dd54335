//! Calendar month ranges.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// Returns the first and last day of a `YYYY-MM` month.
///
/// # Examples
///
/// ```
/// use attendance_engine::assembly::month_range;
/// use chrono::NaiveDate;
///
/// let (from, to) = month_range("2024-02").unwrap();
/// assert_eq!(from, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
/// assert_eq!(to, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
///
/// assert!(month_range("2024-13").is_err());
/// ```
pub fn month_range(target_month: &str) -> EngineResult<(NaiveDate, NaiveDate)> {
    let invalid = || EngineError::InvalidMonth {
        value: target_month.to_string(),
    };

    let (year, month) = target_month.trim().split_once('-').ok_or_else(invalid)?;
    if year.len() != 4 || month.len() != 2 {
        return Err(invalid());
    }
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let last = next_month
        .and_then(|d| d.pred_opt())
        .ok_or_else(invalid)?;

    Ok((first, last))
}
