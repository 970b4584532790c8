#[path = "app/lifecycle.rs"]
mod lifecycle;

use crate::form::FormControl;
use crate::models::settings::PickerSettings;
use crate::ui_egui::date_multiselect::{DateList, DateMultiselect};
use crate::ui_egui::theme::PickerTheme;

/// Root shell: one date multiselect bound to a required form field that
/// starts with today selected.
pub struct MultiselectApp {
    /// Configuration loaded at startup
    settings: PickerSettings,
    /// Host-side model of the "days selected" field
    days_selected: FormControl<DateList>,
    picker: DateMultiselect,
    /// Currently applied theme colors
    active_theme: PickerTheme,
}

impl eframe::App for MultiselectApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_update(ctx);
    }
}

impl MultiselectApp {
    pub fn settings(&self) -> &PickerSettings {
        &self.settings
    }

    pub fn days_selected(&self) -> &FormControl<DateList> {
        &self.days_selected
    }

    pub fn picker(&self) -> &DateMultiselect {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut DateMultiselect {
        &mut self.picker
    }

    pub fn active_theme(&self) -> &PickerTheme {
        &self.active_theme
    }
}
