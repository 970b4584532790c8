//! Calendar cell styling hook.
//!
//! The calendar asks for a class per cell; the theme turns the class into
//! colors.

use chrono::NaiveDateTime;

use crate::models::selection::SelectionStore;

/// Calendar view currently displayed by the popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarView {
    Month,
    Year,
    MultiYear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellClass {
    #[default]
    None,
    Selected,
}

impl CellClass {
    /// Class name as exposed to stylesheet-style theming.
    pub fn as_str(&self) -> &'static str {
        match self {
            CellClass::None => "",
            CellClass::Selected => "date-is-selected",
        }
    }
}

/// Only day cells in the month view are marked.
pub fn cell_class(selection: &SelectionStore, cell: &NaiveDateTime, view: CalendarView) -> CellClass {
    match view {
        CalendarView::Month if selection.is_selected(cell) => CellClass::Selected,
        _ => CellClass::None,
    }
}
