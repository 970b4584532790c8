//! Multi-date picker form control.
//!
//! `DateMultiselect` owns the selection list and the popover state, and
//! implements both halves of the form-control contract. Every user action
//! is an explicit command method that returns whether the selection
//! changed; the host is told through the registered on-change callback and
//! form fields through [`StateChanges`].

mod cell_class;
mod popover;
mod render;

pub use cell_class::{cell_class, CalendarView, CellClass};
pub use popover::PopoverState;

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::form::{
    ControlValueAccessor, FormControl, FormFieldControl, IdGenerator, OnChange, OnTouched,
    StateChanges,
};
use crate::models::control::ControlInternalState;
use crate::models::selection::{SelectedDateItem, SelectionStore};
use crate::models::settings::PickerSettings;
use crate::utils::date::parse_typed_date;

pub type DateList = Vec<NaiveDateTime>;

pub const CONTROL_TYPE: &str = "date";

pub struct DateMultiselect {
    id: String,
    selection: SelectionStore,
    internal: ControlInternalState,
    label_format: String,
    first_day_of_week: u8,
    popover_offset_y: f32,
    popover: PopoverState,
    filter_text: String,
    filter_enabled: bool,
    focused: bool,
    touched: bool,
    described_by: Vec<String>,
    user_aria_described_by: Option<String>,
    state_changes: StateChanges,
    on_change: OnChange<DateList>,
    on_touched: OnTouched,
    ng_control: Option<FormControl<DateList>>,
    /// Calendar cells must be redrawn on the next frame
    calendar_dirty: bool,
}

impl std::fmt::Debug for DateMultiselect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateMultiselect")
            .field("id", &self.id)
            .field("selection", &self.selection)
            .field("internal", &self.internal)
            .field("popover", &self.popover)
            .field("filter_text", &self.filter_text)
            .field("focused", &self.focused)
            .field("touched", &self.touched)
            .finish_non_exhaustive()
    }
}

impl DateMultiselect {
    pub fn new(ids: &mut dyn IdGenerator) -> Self {
        Self::with_settings(ids, &PickerSettings::default())
    }

    pub fn with_settings(ids: &mut dyn IdGenerator, settings: &PickerSettings) -> Self {
        let id = ids.next_id(CONTROL_TYPE);
        log::debug!("Creating date multiselect {}", id);
        Self {
            id,
            selection: SelectionStore::new(),
            internal: ControlInternalState::with_placeholder(settings.placeholder.clone()),
            label_format: settings.label_format.clone(),
            first_day_of_week: settings.first_day_of_week % 7,
            popover_offset_y: settings.popover_offset_y,
            popover: PopoverState::default(),
            filter_text: String::new(),
            filter_enabled: true,
            focused: false,
            touched: false,
            described_by: Vec::new(),
            user_aria_described_by: None,
            state_changes: StateChanges::new(),
            on_change: Box::new(|_| {}),
            on_touched: Box::new(|| {}),
            ng_control: None,
            calendar_dirty: false,
        }
    }

    /// Bind to a host form control: the control adopts its value and
    /// disabled flag and reports changes back to it.
    pub fn attach(&mut self, form_control: FormControl<DateList>) {
        self.ng_control = Some(form_control.clone());
        form_control.bind(self);
    }

    /// Apply value/disabled changes the host made since the last frame.
    pub fn sync_from_host(&mut self) -> usize {
        match self.ng_control.clone() {
            Some(form_control) => form_control.sync_view(self),
            None => 0,
        }
    }

    pub fn form_control(&self) -> Option<&FormControl<DateList>> {
        self.ng_control.as_ref()
    }

    // ----- configuration -----

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.internal.placeholder = placeholder.into();
        self.state_changes.next();
    }

    pub fn set_required(&mut self, required: bool) {
        self.internal.required = required;
        self.state_changes.next();
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.internal.disabled = disabled;
        self.filter_enabled = !disabled;
        self.state_changes.next();
    }

    pub fn set_user_aria_described_by(&mut self, ids: impl Into<String>) {
        self.user_aria_described_by = Some(ids.into());
    }

    /// Described-by ids set by the form field, falling back to the ids the
    /// user supplied.
    pub fn described_by(&self) -> Vec<String> {
        if !self.described_by.is_empty() {
            return self.described_by.clone();
        }
        self.user_aria_described_by
            .iter()
            .flat_map(|ids| ids.split_whitespace().map(str::to_string))
            .collect()
    }

    /// Hover text for the field: the described-by ids, if any.
    pub fn hover_text(&self) -> Option<String> {
        let ids = self.described_by();
        if ids.is_empty() {
            None
        } else {
            Some(ids.join(" "))
        }
    }

    // ----- queries -----

    pub fn selected_items(&self) -> &[SelectedDateItem] {
        self.selection.items()
    }

    pub fn has_selected_data(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn is_selected(&self, date: &NaiveDateTime) -> bool {
        self.selection.is_selected(date)
    }

    /// Styling hook queried for every calendar cell.
    pub fn cell_class(&self, cell: &NaiveDateTime, view: CalendarView) -> CellClass {
        cell_class(&self.selection, cell, view)
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        if self.filter_enabled {
            self.filter_text = text.into();
        }
    }

    pub fn filter_enabled(&self) -> bool {
        self.filter_enabled
    }

    pub fn touched(&self) -> bool {
        self.touched
    }

    pub fn popover(&self) -> &PopoverState {
        &self.popover
    }

    pub fn is_open(&self) -> bool {
        self.popover.is_open()
    }

    pub fn label_format(&self) -> &str {
        &self.label_format
    }

    pub fn first_day_of_week(&self) -> u8 {
        self.first_day_of_week
    }

    pub fn popover_offset_y(&self) -> f32 {
        self.popover_offset_y
    }

    /// Returns and clears the pending calendar refresh flag.
    pub fn take_calendar_refresh(&mut self) -> bool {
        std::mem::take(&mut self.calendar_dirty)
    }

    // ----- selection commands -----

    /// Toggle one item. No-op when disabled. Reports the new value to the
    /// host and marks the calendar for redraw.
    pub fn toggle_selection(&mut self, item: SelectedDateItem) -> bool {
        if self.internal.disabled {
            return false;
        }

        self.selection.toggle(item);
        let value = self.selection.value();
        (self.on_change)(value);
        self.calendar_dirty = true;
        true
    }

    /// Toggle the day a calendar cell (or typed text) refers to.
    pub fn pick(&mut self, date: NaiveDateTime) -> bool {
        let item = SelectedDateItem::new(date, &self.label_format);
        self.toggle_selection(item)
    }

    /// Pick each date in order. Equal days cancel pairwise.
    pub fn select_values(&mut self, dates: &[NaiveDateTime]) -> bool {
        dates
            .iter()
            .fold(false, |changed, date| self.pick(*date) || changed)
    }

    pub fn value(&self) -> Option<DateList> {
        self.selection.value()
    }

    /// Assign a value. `None` counts as an empty list. Dates are toggled on
    /// top of the current selection.
    pub fn set_value(&mut self, value: Option<&[NaiveDateTime]>) -> bool {
        let changed = self.select_values(value.unwrap_or(&[]));
        self.state_changes.next();
        changed
    }

    /// Toggle every selected item off, then reset the filter input.
    pub fn clear_selection(&mut self) -> bool {
        let mut changed = false;
        while let Some(first) = self.selection.items().first().cloned() {
            if !self.toggle_selection(first) {
                break;
            }
            changed = true;
        }
        self.clear_filter();
        changed
    }

    /// Remove the item behind a chip.
    pub fn remove(&mut self, item: SelectedDateItem) -> bool {
        let changed = self.toggle_selection(item);
        self.clear_filter();
        changed
    }

    /// Separator key pressed in the filter input. Text that parses as a date
    /// toggles that day; the filter is cleared either way.
    pub fn add(&mut self, text: &str) -> bool {
        log::debug!("add {:?}", text);
        let changed = match parse_typed_date(text, &self.label_format) {
            Some(date) => self.pick(date),
            None => false,
        };
        self.clear_filter();
        changed
    }

    /// Filter text containing separators. Every comma-terminated entry is
    /// added; text after the last comma stays in the filter.
    pub fn add_separated(&mut self, text: &str) -> bool {
        let Some((complete, rest)) = text.rsplit_once(',') else {
            return false;
        };
        let rest = rest.trim_start().to_string();

        let mut changed = false;
        for entry in complete.split(',') {
            changed |= self.add(entry);
        }
        self.filter_text = rest;
        changed
    }

    /// Empty the filter input and reopen the popover.
    pub fn clear_filter(&mut self) {
        self.filter_text.clear();
        self.on_container_click();
    }

    // ----- popover / focus -----

    /// Close the popover.
    pub fn apply(&mut self) {
        self.popover.close();
    }

    fn initial_viewing_month(&self) -> NaiveDate {
        self.selection
            .items()
            .last()
            .map(|item| item.value.date())
            .unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn on_focus_in(&mut self) {
        if !self.focused {
            self.focused = true;
            self.state_changes.next();
        }
    }

    /// Focus left one of the control's widgets. `focus_moved_inside` is true
    /// when another widget of this control received it.
    pub fn on_focus_out(&mut self, focus_moved_inside: bool) {
        if focus_moved_inside {
            return;
        }
        self.touched = true;
        self.focused = false;
        (self.on_touched)();
        self.state_changes.next();
    }
}

impl ControlValueAccessor<DateList> for DateMultiselect {
    fn write_value(&mut self, value: Option<DateList>) {
        self.set_value(value.as_deref());
    }

    fn register_on_change(&mut self, on_change: OnChange<DateList>) {
        self.on_change = on_change;
    }

    fn register_on_touched(&mut self, on_touched: OnTouched) {
        self.on_touched = on_touched;
    }

    fn set_disabled_state(&mut self, disabled: bool) {
        self.set_disabled(disabled);
    }
}

impl FormFieldControl<DateList> for DateMultiselect {
    fn value(&self) -> Option<DateList> {
        self.selection.value()
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn placeholder(&self) -> &str {
        &self.internal.placeholder
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn empty(&self) -> bool {
        self.selection.is_empty()
    }

    fn required(&self) -> bool {
        self.internal.required
    }

    fn disabled(&self) -> bool {
        self.internal.disabled
    }

    fn error_state(&self) -> bool {
        self.ng_control
            .as_ref()
            .map(|control| control.invalid() && self.touched)
            .unwrap_or(false)
    }

    fn control_type(&self) -> &'static str {
        CONTROL_TYPE
    }

    fn set_described_by_ids(&mut self, ids: &[String]) {
        self.described_by = ids.to_vec();
    }

    fn on_container_click(&mut self) {
        log::debug!("Container click on {}", self.id);
        let month = self.initial_viewing_month();
        self.popover.open(month);
    }

    fn state_changes(&mut self) -> &mut StateChanges {
        &mut self.state_changes
    }
}

impl Drop for DateMultiselect {
    fn drop(&mut self) {
        self.state_changes.complete();
    }
}
