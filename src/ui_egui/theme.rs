//! Theme module for the date picker
//!
//! Defines the PickerTheme palette and maps calendar cell classes to
//! colors.

use egui::Color32;

use super::date_multiselect::CellClass;

/// Colors used by the field, chips and calendar popover
#[derive(Debug, Clone, PartialEq)]
pub struct PickerTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Calendar grid background color
    pub calendar_background: Color32,

    /// Selected day fill
    pub selected_background: Color32,

    /// Text on a selected day
    pub selected_text: Color32,

    /// Today's date text color
    pub today_text: Color32,

    /// Chip background
    pub chip_background: Color32,

    /// Field outline when the bound form control is invalid and touched
    pub error_border: Color32,

    /// Primary text color (headings, dates)
    pub text_primary: Color32,

    /// Days outside the viewed month
    pub text_secondary: Color32,
}

impl PickerTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            calendar_background: Color32::from_rgb(255, 255, 255),
            selected_background: Color32::from_rgb(63, 81, 181),
            selected_text: Color32::WHITE,
            today_text: Color32::from_rgb(50, 150, 50),
            chip_background: Color32::from_rgb(224, 224, 224),
            error_border: Color32::from_rgb(200, 40, 40),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(150, 150, 150),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            calendar_background: Color32::from_rgb(40, 40, 40),
            selected_background: Color32::from_rgb(121, 134, 203),
            selected_text: Color32::from_rgb(20, 20, 20),
            today_text: Color32::from_rgb(110, 200, 110),
            chip_background: Color32::from_rgb(66, 66, 66),
            error_border: Color32::from_rgb(255, 110, 110),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(120, 120, 120),
        }
    }

    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("dark") {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Fill and text color for a calendar cell. `None` fill means the
    /// default widget background.
    pub fn cell_colors(&self, class: CellClass) -> (Option<Color32>, Color32) {
        match class {
            CellClass::Selected => (Some(self.selected_background), self.selected_text),
            CellClass::None => (None, self.text_primary),
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.calendar_background;
        visuals.panel_fill = self.app_background;
        visuals.selection.bg_fill = self.selected_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}
