use crate::models::settings::PickerSettings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.toml";

/// Reads and writes the picker configuration file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service pointing at the platform config directory, or the working
    /// directory when no home directory can be resolved.
    pub fn from_project_dirs() -> Self {
        let path = match ProjectDirs::from("com", "Ken24T", "DateMultiselect") {
            Some(dirs) => dirs.config_dir().join(SETTINGS_FILE),
            None => PathBuf::from(SETTINGS_FILE),
        };
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings. A missing file yields the defaults.
    pub fn get(&self) -> Result<PickerSettings> {
        if !self.path.exists() {
            log::info!("No settings file at {}, using defaults", self.path.display());
            return Ok(PickerSettings::default());
        }

        let raw = std::fs::read_to_string(&self.path)
            .context(format!("Failed to read settings from {}", self.path.display()))?;
        let settings: PickerSettings = toml::from_str(&raw)
            .context(format!("Failed to parse settings in {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        Ok(settings)
    }

    /// Write settings, creating the parent directory if needed.
    pub fn update(&self, settings: &PickerSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).context("Failed to create config directory")?;
            }
        }

        let raw = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        std::fs::write(&self.path, raw)
            .context(format!("Failed to write settings to {}", self.path.display()))?;
        Ok(())
    }
}

/// Load settings, falling back to defaults with a warning.
pub fn load_settings_or_default(settings_service: &SettingsService) -> PickerSettings {
    match settings_service.get() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings: {:#}, using defaults", e);
            PickerSettings::default()
        }
    }
}
