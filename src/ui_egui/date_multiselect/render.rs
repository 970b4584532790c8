//! egui rendering for the date multiselect field and its calendar popover.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use egui::{Button, RichText, Stroke, TextEdit};

use super::{CalendarView, DateMultiselect};
use crate::form::FormFieldControl;
use crate::models::selection::SelectedDateItem;
use crate::ui_egui::theme::PickerTheme;
use crate::utils::date::{month_grid_start, start_of_day, weekday_headers};

/// User input collected while drawing, applied once the frame's widgets
/// are laid out.
#[derive(Debug, Clone, PartialEq)]
enum FieldAction {
    Remove(SelectedDateItem),
    Add(String),
    AddSeparated(String),
    ClearAll,
    ContainerClick,
    Pick(NaiveDateTime),
    ShiftMonth(i32),
    ViewMonth(NaiveDate),
    Apply,
}

impl DateMultiselect {
    /// Draw the field and, when open, the calendar popover below it.
    pub fn ui(&mut self, ui: &mut egui::Ui, theme: &PickerTheme) -> egui::Response {
        self.sync_from_host();
        self.popover.begin_frame();

        let field_id = egui::Id::new(&self.id);
        let input_id = field_id.with("input");
        let float_label = self.should_label_float();
        let disabled = self.internal.disabled;
        let required = self.internal.required;
        let placeholder = self.internal.placeholder.clone();
        let focus_due = self.popover.take_due_focus();
        let has_selection = self.has_selected_data();
        let stroke = if self.error_state() {
            Stroke::new(1.5, theme.error_border)
        } else {
            ui.visuals().widgets.inactive.bg_stroke
        };

        let mut actions = Vec::new();

        let field = egui::Frame::group(ui.style()).stroke(stroke).show(ui, |ui| {
            ui.set_min_width(260.0);

            if float_label {
                let label = if required {
                    format!("{} *", placeholder)
                } else {
                    placeholder.clone()
                };
                ui.label(RichText::new(label).small().color(theme.text_secondary));
            }

            ui.horizontal_wrapped(|ui| {
                for item in self.selection.items() {
                    let chip = Button::new(RichText::new(format!("{} ✖", item.display_label)).small())
                        .fill(theme.chip_background)
                        .rounding(8.0);
                    if ui.add_enabled(!disabled, chip).on_hover_text("Remove").clicked() {
                        actions.push(FieldAction::Remove(item.clone()));
                    }
                }

                let hint = if float_label { "" } else { placeholder.as_str() };
                let input = ui.add_enabled(
                    self.filter_enabled,
                    TextEdit::singleline(&mut self.filter_text)
                        .id(input_id)
                        .hint_text(hint)
                        .desired_width(110.0),
                );
                if focus_due {
                    input.request_focus();
                }

                // Enter and comma act as separator keys
                if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    actions.push(FieldAction::Add(self.filter_text.clone()));
                } else if self.filter_text.contains(',') {
                    actions.push(FieldAction::AddSeparated(self.filter_text.clone()));
                }

                if has_selection
                    && ui
                        .add_enabled(!disabled, Button::new("✖").small())
                        .on_hover_text("Clear all")
                        .clicked()
                {
                    actions.push(FieldAction::ClearAll);
                }

                input.has_focus()
            })
            .inner
        });

        let input_has_focus = field.inner;
        let field_rect = field.response.rect;

        let clicked_in_field = ui.input(|i| {
            i.pointer.primary_clicked()
                && i.pointer
                    .interact_pos()
                    .map_or(false, |pos| field_rect.contains(pos))
        });
        if clicked_in_field && actions.is_empty() && !disabled {
            actions.push(FieldAction::ContainerClick);
        }

        if self.popover.is_open() {
            let pos = field_rect.left_bottom() + egui::vec2(0.0, self.popover_offset_y);
            let popover = egui::Window::new("Select dates")
                .id(field_id.with("popover"))
                .title_bar(false)
                .collapsible(false)
                .resizable(false)
                .fixed_pos(pos)
                .show(ui.ctx(), |ui| self.render_calendar(ui, theme));

            if let Some(popover) = popover {
                actions.extend(popover.inner.unwrap_or_default());

                let window_rect = popover.response.rect;
                let clicked_outside = ui.input(|i| {
                    i.pointer.any_click()
                        && i.pointer.interact_pos().map_or(false, |pos| {
                            !window_rect.contains(pos) && !field_rect.contains(pos)
                        })
                });
                if clicked_outside {
                    actions.push(FieldAction::Apply);
                }
            }
        }

        for action in actions {
            self.handle_action(action);
        }

        let control_has_focus = input_has_focus || self.popover.is_open();
        if control_has_focus && !self.focused {
            self.on_focus_in();
        } else if !control_has_focus && self.focused {
            self.on_focus_out(false);
        }

        if self.take_calendar_refresh() || self.popover.focus_scheduled() {
            ui.ctx().request_repaint();
        }

        match self.hover_text() {
            Some(text) => field.response.on_hover_text(text),
            None => field.response,
        }
    }

    fn handle_action(&mut self, action: FieldAction) {
        match action {
            FieldAction::Remove(item) => {
                self.remove(item);
            }
            FieldAction::Add(text) => {
                self.add(&text);
            }
            FieldAction::AddSeparated(text) => {
                self.add_separated(&text);
            }
            FieldAction::ClearAll => {
                self.clear_selection();
            }
            FieldAction::ContainerClick => self.on_container_click(),
            FieldAction::Pick(date) => {
                self.pick(date);
            }
            FieldAction::ShiftMonth(delta) => self.popover.shift_viewing_month(delta),
            FieldAction::ViewMonth(month) => self.popover.set_viewing_month(month),
            FieldAction::Apply => self.apply(),
        }
    }

    fn render_calendar(&self, ui: &mut egui::Ui, theme: &PickerTheme) -> Vec<FieldAction> {
        let today = Local::now().date_naive();
        let viewing = self.popover.viewing_month().unwrap_or(today);
        let mut actions = Vec::new();

        ui.set_max_width(240.0);
        self.render_calendar_header(ui, viewing, today, &mut actions);
        ui.separator();
        self.render_calendar_grid(ui, viewing, today, theme, &mut actions);
        ui.separator();

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("{} selected", self.selection.len()))
                    .small()
                    .color(theme.text_secondary),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Apply").clicked() {
                    actions.push(FieldAction::Apply);
                }
            });
        });

        actions
    }

    /// Month/Year header with year and month navigation arrows.
    fn render_calendar_header(
        &self,
        ui: &mut egui::Ui,
        viewing: NaiveDate,
        today: NaiveDate,
        actions: &mut Vec<FieldAction>,
    ) {
        ui.horizontal(|ui| {
            if ui.small_button("◀◀").on_hover_text("Previous year").clicked() {
                actions.push(FieldAction::ShiftMonth(-12));
            }
            if ui.small_button("◀").on_hover_text("Previous month").clicked() {
                actions.push(FieldAction::ShiftMonth(-1));
            }

            ui.with_layout(
                egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                |ui| {
                    let header = format!("{}", viewing.format("%B %Y"));
                    if ui
                        .selectable_label(false, &header)
                        .on_hover_text("Click to go to today")
                        .clicked()
                    {
                        actions.push(FieldAction::ViewMonth(today));
                    }
                },
            );

            if ui.small_button("▶").on_hover_text("Next month").clicked() {
                actions.push(FieldAction::ShiftMonth(1));
            }
            if ui.small_button("▶▶").on_hover_text("Next year").clicked() {
                actions.push(FieldAction::ShiftMonth(12));
            }
        });
    }

    /// Day-of-week headers and 6-row calendar grid.
    fn render_calendar_grid(
        &self,
        ui: &mut egui::Ui,
        viewing: NaiveDate,
        today: NaiveDate,
        theme: &PickerTheme,
        actions: &mut Vec<FieldAction>,
    ) {
        let disabled = self.internal.disabled;

        egui::Grid::new(egui::Id::new(&self.id).with("calendar_grid"))
            .num_columns(7)
            .spacing([4.0, 2.0])
            .min_col_width(26.0)
            .show(ui, |ui| {
                for name in weekday_headers(self.first_day_of_week) {
                    ui.label(RichText::new(name).small().strong());
                }
                ui.end_row();

                let mut current = month_grid_start(viewing, self.first_day_of_week);
                for _week in 0..6 {
                    for _day in 0..7 {
                        let cell = start_of_day(current);
                        let class = self.cell_class(&cell, CalendarView::Month);
                        let (fill, text_color) = theme.cell_colors(class);

                        let mut text = RichText::new(current.day().to_string());
                        text = if fill.is_some() {
                            text.color(text_color).strong()
                        } else if current == today {
                            text.color(theme.today_text).strong()
                        } else if current.month() != viewing.month() {
                            text.color(theme.text_secondary)
                        } else {
                            text.color(text_color)
                        };

                        let button = match fill {
                            Some(fill) => Button::new(text).fill(fill),
                            None => Button::new(text).frame(false),
                        }
                        .min_size(egui::vec2(26.0, 20.0));

                        if ui
                            .add_enabled(!disabled, button)
                            .on_hover_text(current.format("%A %d %B %Y").to_string())
                            .clicked()
                        {
                            actions.push(FieldAction::Pick(cell));
                        }

                        current += chrono::Duration::days(1);
                    }
                    ui.end_row();

                    // Stop if we've gone past this month
                    if current.month() != viewing.month() && current.day() > 7 {
                        break;
                    }
                }
            });
    }
}
