// Test fixtures - reusable test data
// Provides consistent dates and controls across test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use date_multiselect::form::SequentialIds;
use date_multiselect::ui_egui::date_multiselect::DateMultiselect;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Jan 1, 2025 at midnight
    pub fn jan_1_2025() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    /// Returns Feb 14, 2025 at 14:00 (Valentine's Day)
    pub fn valentine_2025() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 2, 14)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap()
    }

    /// Same day as [`valentine_2025`], early morning
    pub fn valentine_2025_morning() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 2, 14)
            .unwrap()
            .and_hms_opt(6, 45, 0)
            .unwrap()
    }

    /// Returns Dec 31, 2025 at 23:59 (New Year's Eve)
    pub fn new_years_eve_2025() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }
}

/// A fresh, unbound picker with default settings.
pub fn picker() -> DateMultiselect {
    DateMultiselect::new(&mut SequentialIds::new())
}
