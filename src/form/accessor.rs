//! Form-control contract.
//!
//! [`ControlValueAccessor`] is the value-binding half: the host pushes values
//! and the disabled flag in, the control reports changes and touches out.
//! [`FormFieldControl`] is the presentation half a form field reads to draw
//! labels, error styling and floating placeholders.

use super::state_changes::StateChanges;

pub type OnChange<T> = Box<dyn FnMut(Option<T>)>;
pub type OnTouched = Box<dyn FnMut()>;

pub trait ControlValueAccessor<T> {
    /// Host to view: assign a new model value.
    fn write_value(&mut self, value: Option<T>);

    /// Called by the control whenever the user changes the value.
    fn register_on_change(&mut self, on_change: OnChange<T>);

    /// Called by the control when it loses focus.
    fn register_on_touched(&mut self, on_touched: OnTouched);

    fn set_disabled_state(&mut self, disabled: bool);
}

pub trait FormFieldControl<T> {
    fn value(&self) -> Option<T>;

    /// Element id, unique per control instance.
    fn id(&self) -> &str;

    fn placeholder(&self) -> &str;

    fn focused(&self) -> bool;

    fn empty(&self) -> bool;

    /// Label floats above the field when focused or holding a value.
    fn should_label_float(&self) -> bool {
        self.focused() || !self.empty()
    }

    fn required(&self) -> bool;

    fn disabled(&self) -> bool;

    fn error_state(&self) -> bool;

    /// Kind of control, used as the id prefix.
    fn control_type(&self) -> &'static str;

    /// Ids of hint/error elements describing this control.
    fn set_described_by_ids(&mut self, ids: &[String]);

    /// The field container was clicked outside the control's own widgets.
    fn on_container_click(&mut self);

    fn state_changes(&mut self) -> &mut StateChanges;
}
