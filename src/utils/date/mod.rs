// Date utility functions
// Day-equality, label formatting and month arithmetic shared by the picker

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt::Write;

/// Label used when a date cannot be rendered with the configured format.
pub const FORMAT_FALLBACK: &str = "ERROR";

/// Two dates are the same day when year, month and day match.
/// Time-of-day is ignored.
pub fn is_same_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.day() == b.day() && a.month() == b.month() && a.year() == b.year()
}

/// Midnight of the given day, the value a calendar cell click produces.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Format a date for display. Falls back to [`FORMAT_FALLBACK`] when the
/// format string contains a specifier chrono cannot render.
pub fn format_label(date: NaiveDateTime, format: &str) -> String {
    let mut label = String::new();
    match write!(label, "{}", date.format(format)) {
        Ok(()) => label,
        Err(_) => {
            log::warn!("Invalid date label format {:?}", format);
            FORMAT_FALLBACK.to_string()
        }
    }
}

/// Parse text typed into the filter input.
///
/// Tries the display format first, then ISO (`2025-03-14`), then
/// day-first (`14/03/2025`).
pub fn parse_typed_date(text: &str, display_format: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    [display_format, "%Y-%m-%d", "%d/%m/%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .map(start_of_day)
}

/// Shift a date by the given number of months, clamping the day.
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let total_months = (date.year() * 12) + (date.month() as i32 - 1) + delta;
    let new_year = total_months.div_euclid(12);
    let new_month = (total_months.rem_euclid(12) + 1) as u32;
    let max_day = days_in_month(new_year, new_month);
    let day = date.day().min(max_day);
    NaiveDate::from_ymd_opt(new_year, new_month, day).unwrap_or(date)
}

/// Get the number of days in a given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// First cell of a six-week month grid.
///
/// # Arguments
/// * `month` - Any date inside the month being displayed
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn month_grid_start(month: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let first_of_month = month.with_day(1).unwrap_or(month);
    let weekday = first_of_month.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64).rem_euclid(7);
    first_of_month - Duration::days(offset)
}

/// Short weekday names starting from `first_day_of_week`.
pub fn weekday_headers(first_day_of_week: u8) -> [&'static str; 7] {
    const NAMES: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
    let mut headers = NAMES;
    headers.rotate_left(first_day_of_week as usize % 7);
    headers
}
