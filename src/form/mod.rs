//! Form layer the picker plugs into.
//!
//! Provides the control contract traits, the host-side [`FormControl`]
//! with validators, a state-change observer, and control id generation.

mod accessor;
mod control;
mod id;
mod state_changes;

pub use accessor::{ControlValueAccessor, FormFieldControl, OnChange, OnTouched};
pub use control::{
    ControlStatus, FormControl, FormValue, HostCommand, ValidationError, Validator, Validators,
};
pub use id::{IdGenerator, SequentialIds};
pub use state_changes::{StateChanges, SubscriptionId};

#[cfg(test)]
pub use id::MockIdGenerator;
