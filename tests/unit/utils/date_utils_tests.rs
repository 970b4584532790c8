// Unit tests for date helpers
// Parameterized over formats and month boundaries

use chrono::{NaiveDate, NaiveDateTime};
use date_multiselect::utils::date::{
    days_in_month, format_label, parse_typed_date, shift_month, FORMAT_FALLBACK,
};
use test_case::test_case;

fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test_case(2025, 1, 31; "january")]
#[test_case(2025, 2, 28; "february common year")]
#[test_case(2024, 2, 29; "february leap year")]
#[test_case(2025, 4, 30; "april")]
#[test_case(2025, 12, 31; "december")]
fn test_days_in_month(year: i32, month: u32, expected: u32) {
    assert_eq!(days_in_month(year, month), expected);
}

#[test_case("%d %b. %Y", "14 Feb. 2025"; "default label")]
#[test_case("%Y-%m-%d", "2025-02-14"; "iso")]
#[test_case("%d/%m/%Y", "14/02/2025"; "day first")]
#[test_case("%Q", FORMAT_FALLBACK; "invalid specifier")]
fn test_format_label(format: &str, expected: &str) {
    assert_eq!(format_label(midnight(2025, 2, 14), format), expected);
}

#[test_case("14 Feb. 2025"; "display format")]
#[test_case("2025-02-14"; "iso")]
#[test_case("14/02/2025"; "day first")]
#[test_case("  2025-02-14  "; "surrounding whitespace")]
fn test_parse_typed_date(text: &str) {
    assert_eq!(
        parse_typed_date(text, "%d %b. %Y"),
        Some(midnight(2025, 2, 14))
    );
}

#[test_case(""; "empty")]
#[test_case("tomorrow"; "word")]
#[test_case("2025-02-30"; "impossible day")]
fn test_parse_typed_date_rejects(text: &str) {
    assert_eq!(parse_typed_date(text, "%d %b. %Y"), None);
}

#[test]
fn test_shift_month_across_year() {
    let nov = NaiveDate::from_ymd_opt(2025, 11, 30).unwrap();
    assert_eq!(
        shift_month(nov, 3),
        NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()
    );
    assert_eq!(
        shift_month(nov, -12),
        NaiveDate::from_ymd_opt(2024, 11, 30).unwrap()
    );
}
