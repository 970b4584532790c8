use super::MultiselectApp;
use crate::form::{ControlStatus, FormControl, FormFieldControl, SequentialIds, Validator, Validators};
use crate::models::settings::PickerSettings;
use crate::services::settings::{load_settings_or_default, SettingsService};
use crate::ui_egui::date_multiselect::{DateList, DateMultiselect};
use crate::ui_egui::theme::PickerTheme;
use chrono::Local;

impl MultiselectApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_service = SettingsService::from_project_dirs();
        let settings = load_settings_or_default(&settings_service);
        log::info!(
            "Loaded settings from {}: theme={}, first_day_of_week={}",
            settings_service.path().display(),
            settings.theme,
            settings.first_day_of_week
        );

        let app = Self::from_settings(settings);
        app.active_theme.apply_to_context(&cc.egui_ctx);
        app
    }

    /// Build the shell without a window. The form field is seeded with
    /// today before the picker is bound to it.
    pub fn from_settings(settings: PickerSettings) -> Self {
        let validators: Vec<Validator<DateList>> = if settings.required {
            vec![Validators::required::<DateList>]
        } else {
            Vec::new()
        };
        let days_selected = FormControl::new(None, validators);
        days_selected.set_value(Some(vec![Local::now().naive_local()]));

        let mut ids = SequentialIds::new();
        let mut picker = DateMultiselect::with_settings(&mut ids, &settings);
        picker.set_required(settings.required);
        picker.set_user_aria_described_by(format!("{}-hint", picker.id()));
        picker.attach(days_selected.clone());

        Self {
            active_theme: PickerTheme::from_name(&settings.theme),
            settings,
            days_selected,
            picker,
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Date multiselect");
            ui.add_space(8.0);

            self.picker.ui(ui, &self.active_theme);

            ui.add_space(8.0);
            self.render_status(ui);
        });
    }

    fn render_status(&mut self, ui: &mut egui::Ui) {
        let status = self.days_selected.status();
        let (text, color) = match status {
            ControlStatus::Valid => ("Valid", self.active_theme.today_text),
            ControlStatus::Invalid => ("Invalid", self.active_theme.error_border),
            ControlStatus::Disabled => ("Disabled", self.active_theme.text_secondary),
        };

        ui.horizontal(|ui| {
            ui.label("Status:");
            ui.colored_label(color, text);
            if self.picker.error_state() {
                for error in self.days_selected.errors() {
                    ui.colored_label(self.active_theme.error_border, error.to_string());
                }
            }
        });

        let count = self
            .days_selected
            .value()
            .map(|dates| dates.len())
            .unwrap_or(0);
        ui.label(format!(
            "{} day{} selected · touched: {} · dirty: {}",
            count,
            if count == 1 { "" } else { "s" },
            self.days_selected.touched(),
            self.days_selected.dirty()
        ));

        ui.horizontal(|ui| {
            let mut disabled = self.days_selected.disabled();
            if ui.checkbox(&mut disabled, "Disabled").changed() {
                if disabled {
                    self.days_selected.disable();
                } else {
                    self.days_selected.enable();
                }
            }
            if ui.button("Reset to today").clicked() {
                self.reset_to_today();
            }
        });
    }

    /// Clear the picker and select only today again.
    pub fn reset_to_today(&mut self) {
        self.picker.clear_selection();
        self.picker.apply();
        self.days_selected
            .reset(Some(vec![Local::now().naive_local()]));
    }
}
