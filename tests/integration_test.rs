// Integration tests for binding the picker to a host form control
mod fixtures;

use date_multiselect::form::{
    ControlValueAccessor, FormControl, FormFieldControl, SequentialIds, ValidationError,
    Validators,
};
use date_multiselect::models::settings::PickerSettings;
use date_multiselect::ui_egui::date_multiselect::{CalendarView, CellClass, DateList, DateMultiselect};
use fixtures::{dates, picker};
use pretty_assertions::assert_eq;
use std::cell::Cell;
use std::rc::Rc;

fn required_field(value: Option<DateList>) -> FormControl<DateList> {
    FormControl::new(value, vec![Validators::required::<DateList>])
}

#[test]
fn test_bind_seeds_selection_from_form_value() {
    let form = required_field(Some(vec![dates::jan_1_2025(), dates::valentine_2025()]));
    let mut control = picker();
    control.attach(form.clone());

    assert_eq!(
        control.value(),
        Some(vec![dates::jan_1_2025(), dates::valentine_2025()])
    );
    assert!(form.valid());
    assert!(!form.dirty());
}

#[test]
fn test_user_toggle_updates_form_value() {
    let form = required_field(None);
    let mut control = picker();
    control.attach(form.clone());
    assert!(form.invalid());

    control.pick(dates::new_years_eve_2025());
    control.pick(dates::leap_day_2024());

    assert_eq!(
        form.value(),
        Some(vec![dates::new_years_eve_2025(), dates::leap_day_2024()])
    );
    assert!(form.valid());
    assert!(form.dirty());

    control.pick(dates::leap_day_2024());
    control.pick(dates::new_years_eve_2025());
    assert_eq!(form.value(), None);
    assert_eq!(form.errors(), vec![ValidationError::Required]);
}

#[test]
fn test_host_set_value_applies_on_next_sync() {
    let form = required_field(None);
    let mut control = picker();
    control.attach(form.clone());

    form.set_value(Some(vec![dates::valentine_2025()]));
    assert!(control.empty());

    assert_eq!(control.sync_from_host(), 1);
    assert_eq!(control.value(), Some(vec![dates::valentine_2025()]));
}

#[test]
fn test_host_disable_blocks_toggles() {
    let form = required_field(Some(vec![dates::jan_1_2025()]));
    let mut control = picker();
    control.attach(form.clone());

    form.disable();
    control.sync_from_host();
    assert!(control.disabled());
    assert!(!control.pick(dates::valentine_2025()));
    assert_eq!(control.value(), Some(vec![dates::jan_1_2025()]));

    form.enable();
    control.sync_from_host();
    assert!(control.pick(dates::valentine_2025()));
    assert_eq!(control.selected_items().len(), 2);
}

#[test]
fn test_form_disabled_before_binding() {
    let form = required_field(None);
    form.disable();
    let mut control = picker();
    control.attach(form);
    assert!(control.disabled());
}

#[test]
fn test_duplicate_days_in_assignment_cancel() {
    let mut control = picker();
    control.write_value(Some(vec![
        dates::valentine_2025(),
        dates::valentine_2025_morning(),
    ]));
    assert!(control.empty());
    assert_eq!(control.value(), None);

    control.write_value(Some(vec![
        dates::valentine_2025(),
        dates::valentine_2025_morning(),
        dates::valentine_2025(),
    ]));
    assert_eq!(control.value(), Some(vec![dates::valentine_2025()]));
}

#[test]
fn test_cell_hook_marks_selected_days_in_month_view() {
    let mut control = picker();
    control.pick(dates::valentine_2025());

    assert_eq!(
        control.cell_class(&dates::valentine_2025_morning(), CalendarView::Month),
        CellClass::Selected
    );
    assert_eq!(
        control.cell_class(&dates::jan_1_2025(), CalendarView::Month),
        CellClass::None
    );
    assert_eq!(
        control.cell_class(&dates::valentine_2025(), CalendarView::Year),
        CellClass::None
    );
}

#[test]
fn test_state_changes_on_configuration() {
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    let mut control = picker();
    control
        .state_changes()
        .subscribe(move || counter.set(counter.get() + 1));

    control.set_placeholder("Holidays");
    control.set_required(true);
    control.set_disabled_state(true);
    control.write_value(None);

    assert_eq!(hits.get(), 4);
    assert_eq!(control.placeholder(), "Holidays");
    assert!(control.required());
}

#[test]
fn test_each_control_gets_its_own_id() {
    let mut ids = SequentialIds::new();
    let a = DateMultiselect::new(&mut ids);
    let b = DateMultiselect::with_settings(&mut ids, &PickerSettings::default());
    assert_eq!(a.id(), "date-0");
    assert_eq!(b.id(), "date-1");
    assert_eq!(a.control_type(), "date");
}

#[test]
fn test_settings_carry_into_control() {
    let settings = PickerSettings {
        placeholder: "Fechas".to_string(),
        label_format: "%Y-%m-%d".to_string(),
        first_day_of_week: 1,
        ..PickerSettings::default()
    };
    let mut control = DateMultiselect::with_settings(&mut SequentialIds::new(), &settings);
    control.pick(dates::leap_day_2024());

    assert_eq!(control.placeholder(), "Fechas");
    assert_eq!(control.first_day_of_week(), 1);
    assert_eq!(control.selected_items()[0].display_label, "2024-02-29");
}
