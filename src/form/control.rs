//! Host-side form control.
//!
//! A `FormControl` owns the model value and its validation status. It is a
//! cheap handle (`Rc<RefCell<..>>`) shared between the form owner and the
//! bound control. Model-to-view updates are queued and applied by the
//! control at the start of its next frame via [`FormControl::sync_view`].

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use thiserror::Error;

use super::accessor::ControlValueAccessor;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("a value is required")]
    Required,
}

/// Values that can be checked for emptiness by [`Validators::required`].
pub trait FormValue: Clone + 'static {
    fn is_empty_value(&self) -> bool {
        false
    }
}

impl<T: Clone + 'static> FormValue for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl FormValue for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

pub type Validator<T> = fn(Option<&T>) -> Option<ValidationError>;

pub struct Validators;

impl Validators {
    pub fn required<T: FormValue>(value: Option<&T>) -> Option<ValidationError> {
        match value {
            Some(v) if !v.is_empty_value() => None,
            _ => Some(ValidationError::Required),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlStatus {
    Valid,
    Invalid,
    Disabled,
}

/// Model-to-view command queued for the bound control.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand<T> {
    WriteValue(Option<T>),
    SetDisabled(bool),
}

struct Inner<T> {
    value: Option<T>,
    validators: Vec<Validator<T>>,
    errors: Vec<ValidationError>,
    disabled: bool,
    touched: bool,
    dirty: bool,
    bound: bool,
    pending: VecDeque<HostCommand<T>>,
}

impl<T: FormValue> Inner<T> {
    fn validate(&mut self) {
        let value = self.value.as_ref();
        self.errors = self
            .validators
            .iter()
            .filter_map(|validator| validator(value))
            .collect();
    }

    fn queue(&mut self, command: HostCommand<T>) {
        if self.bound {
            self.pending.push_back(command);
        }
    }
}

pub struct FormControl<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for FormControl<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for FormControl<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("FormControl")
            .field("value", &inner.value)
            .field("errors", &inner.errors)
            .field("disabled", &inner.disabled)
            .field("touched", &inner.touched)
            .field("dirty", &inner.dirty)
            .finish()
    }
}

impl<T: FormValue> FormControl<T> {
    pub fn new(value: Option<T>, validators: Vec<Validator<T>>) -> Self {
        let mut inner = Inner {
            value,
            validators,
            errors: Vec::new(),
            disabled: false,
            touched: false,
            dirty: false,
            bound: false,
            pending: VecDeque::new(),
        };
        inner.validate();
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    pub fn value(&self) -> Option<T> {
        self.inner.borrow().value.clone()
    }

    /// Set the model value and forward it to the bound control.
    pub fn set_value(&self, value: Option<T>) {
        let mut inner = self.inner.borrow_mut();
        inner.value = value.clone();
        inner.validate();
        inner.queue(HostCommand::WriteValue(value));
    }

    /// Reset to `value`, clearing touched/dirty.
    pub fn reset(&self, value: Option<T>) {
        self.set_value(value);
        let mut inner = self.inner.borrow_mut();
        inner.touched = false;
        inner.dirty = false;
    }

    pub fn disable(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.disabled = true;
        inner.queue(HostCommand::SetDisabled(true));
    }

    pub fn enable(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.disabled = false;
        inner.queue(HostCommand::SetDisabled(false));
    }

    pub fn status(&self) -> ControlStatus {
        let inner = self.inner.borrow();
        if inner.disabled {
            ControlStatus::Disabled
        } else if inner.errors.is_empty() {
            ControlStatus::Valid
        } else {
            ControlStatus::Invalid
        }
    }

    pub fn valid(&self) -> bool {
        self.status() == ControlStatus::Valid
    }

    pub fn invalid(&self) -> bool {
        self.status() == ControlStatus::Invalid
    }

    pub fn disabled(&self) -> bool {
        self.inner.borrow().disabled
    }

    pub fn errors(&self) -> Vec<ValidationError> {
        self.inner.borrow().errors.clone()
    }

    pub fn touched(&self) -> bool {
        self.inner.borrow().touched
    }

    pub fn dirty(&self) -> bool {
        self.inner.borrow().dirty
    }

    pub fn has_validator(&self, validator: Validator<T>) -> bool {
        self.inner
            .borrow()
            .validators
            .iter()
            .any(|v| *v as usize == validator as usize)
    }

    /// Wire a control to this form control: push the current value and
    /// disabled flag, and register change/touch callbacks.
    pub fn bind(&self, accessor: &mut dyn ControlValueAccessor<T>) {
        let (value, disabled) = {
            let mut inner = self.inner.borrow_mut();
            inner.bound = true;
            inner.pending.clear();
            (inner.value.clone(), inner.disabled)
        };

        accessor.write_value(value);

        let on_change = Rc::clone(&self.inner);
        accessor.register_on_change(Box::new(move |value| {
            let mut inner = on_change.borrow_mut();
            inner.value = value;
            inner.dirty = true;
            inner.validate();
        }));

        let on_touched = Rc::clone(&self.inner);
        accessor.register_on_touched(Box::new(move || {
            on_touched.borrow_mut().touched = true;
        }));

        if disabled {
            accessor.set_disabled_state(true);
        }
    }

    /// Apply queued model-to-view commands to the bound control.
    /// Returns how many were applied.
    pub fn sync_view(&self, accessor: &mut dyn ControlValueAccessor<T>) -> usize {
        let pending: Vec<HostCommand<T>> = self.inner.borrow_mut().pending.drain(..).collect();
        let applied = pending.len();
        for command in pending {
            match command {
                HostCommand::WriteValue(value) => accessor.write_value(value),
                HostCommand::SetDisabled(disabled) => accessor.set_disabled_state(disabled),
            }
        }
        applied
    }
}
