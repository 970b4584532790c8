// Control configuration mirror
// Placeholder/required/disabled as seen by the surrounding form field

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlInternalState {
    pub placeholder: String,
    pub required: bool,
    pub disabled: bool,
}

impl ControlInternalState {
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }
}
