// Property-based tests for selection behaviour
// Random day offsets and times exercise toggle and assignment rules

use chrono::{Duration, NaiveDate, NaiveDateTime};
use date_multiselect::form::{FormFieldControl, SequentialIds};
use date_multiselect::models::selection::{SelectedDateItem, SelectionStore};
use date_multiselect::ui_egui::date_multiselect::DateMultiselect;
use proptest::prelude::*;
use std::collections::HashMap;

const FMT: &str = "%d %b %Y";

fn date_from(offset: i64, minutes: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        + Duration::days(offset)
        + Duration::minutes(minutes)
}

fn dates_strategy() -> impl Strategy<Value = Vec<NaiveDateTime>> {
    prop::collection::vec((0..120i64, 0..1440i64), 0..40)
        .prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(d, m)| date_from(d, m))
                .collect::<Vec<_>>()
        })
}

proptest! {
    /// Property: toggling the same day twice keeps the same set of days,
    /// and leaves the list untouched when the day was not selected
    #[test]
    fn prop_toggle_pair_is_identity(
        seed in dates_strategy(),
        offset in 0..120i64,
        first_minutes in 0..1440i64,
        second_minutes in 0..1440i64,
    ) {
        let mut control = DateMultiselect::new(&mut SequentialIds::new());
        control.select_values(&seed);
        let before = control.selected_items().to_vec();
        let target = date_from(offset, first_minutes);
        let was_selected = control.is_selected(&target);

        control.pick(target);
        control.pick(date_from(offset, second_minutes));

        if was_selected {
            let days = |items: &[SelectedDateItem]| {
                let mut days: Vec<NaiveDate> = items.iter().map(|i| i.value.date()).collect();
                days.sort();
                days
            };
            prop_assert_eq!(days(control.selected_items()), days(before.as_slice()));
        } else {
            prop_assert_eq!(control.selected_items(), before.as_slice());
        }
    }

    /// Property: value is None exactly when the list is empty
    #[test]
    fn prop_value_none_iff_empty(dates in dates_strategy()) {
        let mut store = SelectionStore::new();
        store.set_all(&dates, FMT);
        prop_assert_eq!(store.value().is_none(), store.is_empty());
    }

    /// Property: at most one entry per day, and a day survives an
    /// assignment iff it appeared an odd number of times
    #[test]
    fn prop_assignment_follows_parity(dates in dates_strategy()) {
        let mut store = SelectionStore::new();
        store.set_all(&dates, FMT);

        let mut counts: HashMap<NaiveDate, usize> = HashMap::new();
        for date in &dates {
            *counts.entry(date.date()).or_default() += 1;
        }

        let selected: Vec<NaiveDate> = store.items().iter().map(|i| i.value.date()).collect();
        let mut unique = selected.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), selected.len());

        for (day, count) in counts {
            prop_assert_eq!(selected.contains(&day), count % 2 == 1);
        }
    }

    /// Property: distinct days keep their application order
    #[test]
    fn prop_distinct_days_keep_order(offsets in prop::collection::btree_set(0..365i64, 0..30)) {
        let mut shuffled: Vec<NaiveDateTime> = offsets.iter().rev().map(|d| date_from(*d, 30)).collect();
        let mid = shuffled.len() / 2;
        shuffled.rotate_left(mid);

        let mut control = DateMultiselect::new(&mut SequentialIds::new());
        control.set_value(Some(&shuffled));

        prop_assert_eq!(control.selected_items().len(), shuffled.len());
        if shuffled.is_empty() {
            prop_assert!(control.empty());
        } else {
            prop_assert_eq!(control.value(), Some(shuffled));
        }
    }
}
