// Settings module
// Picker configuration loaded from settings.toml

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    pub placeholder: String,
    pub required: bool,
    /// chrono format string used for chip labels
    pub label_format: String,
    pub first_day_of_week: u8,
    pub theme: String,
    /// Vertical gap between the field and the calendar popover, in points
    pub popover_offset_y: f32,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            placeholder: "Select dates".to_string(),
            required: true,
            label_format: "%d %b. %Y".to_string(),
            first_day_of_week: 0, // Sunday
            theme: "light".to_string(),
            popover_offset_y: 8.0,
        }
    }
}

impl PickerSettings {
    pub fn is_dark(&self) -> bool {
        self.theme.eq_ignore_ascii_case("dark")
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.first_day_of_week > 6 {
            return Err(format!(
                "first_day_of_week must be 0-6, got {}",
                self.first_day_of_week
            ));
        }

        if !["light", "dark"]
            .iter()
            .any(|t| self.theme.eq_ignore_ascii_case(t))
        {
            return Err(format!("Unknown theme '{}'", self.theme));
        }

        if self.label_format.trim().is_empty() {
            return Err("label_format cannot be empty".to_string());
        }

        if !self.popover_offset_y.is_finite() || self.popover_offset_y < 0.0 {
            return Err("popover_offset_y must be a non-negative number".to_string());
        }

        Ok(())
    }
}
