// Selection model
// Ordered list of selected days backing the picker's form value

use chrono::NaiveDateTime;

use crate::utils::date::{format_label, is_same_day};

/// A single selected day together with its rendered label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedDateItem {
    pub value: NaiveDateTime,
    pub display_label: String,
}

impl SelectedDateItem {
    pub fn new(value: NaiveDateTime, label_format: &str) -> Self {
        Self {
            value,
            display_label: format_label(value, label_format),
        }
    }

    /// Day-equality with another item; time-of-day is ignored.
    pub fn same_day(&self, other: &NaiveDateTime) -> bool {
        is_same_day(&self.value, other)
    }
}

/// Insertion-ordered set of selected days.
///
/// At most one item exists per calendar day. Mutation goes through
/// [`SelectionStore::toggle`] only, so adding an already-selected day
/// removes it instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    items: Vec<SelectedDateItem>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[SelectedDateItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn position(&self, date: &NaiveDateTime) -> Option<usize> {
        self.items.iter().position(|item| {
            let same = item.same_day(date);
            log::trace!("compare {} with {}: {}", item.value, date, same);
            same
        })
    }

    pub fn is_selected(&self, date: &NaiveDateTime) -> bool {
        self.position(date).is_some()
    }

    /// Append `item` if its day is absent, otherwise remove the entry for
    /// that day. Always changes the list, so always returns `true`.
    pub fn toggle(&mut self, item: SelectedDateItem) -> bool {
        match self.position(&item.value) {
            Some(index) => {
                self.items.remove(index);
            }
            None => self.items.push(item),
        }
        true
    }

    /// Toggle every date in order. Equal days inside `dates` cancel
    /// pairwise.
    pub fn set_all(&mut self, dates: &[NaiveDateTime], label_format: &str) {
        for date in dates {
            self.toggle(SelectedDateItem::new(*date, label_format));
        }
    }

    /// Toggle every item off, front first.
    pub fn clear_all(&mut self) -> bool {
        let changed = !self.items.is_empty();
        while let Some(first) = self.items.first().cloned() {
            self.toggle(first);
        }
        changed
    }

    /// `None` when nothing is selected, otherwise the raw values in list
    /// order.
    pub fn value(&self) -> Option<Vec<NaiveDateTime>> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.items.iter().map(|item| item.value).collect())
    }

    /// Assign an external value. `None` is treated as an empty sequence.
    /// The existing selection is not cleared first: assigned days that are
    /// already selected are toggled off.
    pub fn set_value(&mut self, value: Option<&[NaiveDateTime]>, label_format: &str) {
        self.set_all(value.unwrap_or(&[]), label_format);
    }
}
