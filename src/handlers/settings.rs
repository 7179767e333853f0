//! Settings handlers
//!
//! Settings mutate in place and persist immediately, matching the way
//! the settings screen saves on every change.

use crate::DashboardHandler;
use crate::model::{FontScale, Theme};
use anyhow::Result;

impl DashboardHandler {
    /// Render the current settings
    pub fn handle_show_settings(&self) -> Result<String> {
        let s = &self.data.settings;
        Ok(format!(
            "Theme: {}\nNotifications: {}\nFont scale: {}",
            s.theme,
            if s.notifications { "on" } else { "off" },
            s.font_scale
        ))
    }

    pub fn handle_set_theme(&mut self, theme: Theme) -> Result<String> {
        self.data.settings.theme = theme;
        self.save_data()?;
        Ok(format!("Theme set to {}", theme))
    }

    pub fn handle_set_notifications(&mut self, enabled: bool) -> Result<String> {
        self.data.settings.notifications = enabled;
        self.save_data()?;
        Ok(format!(
            "Notifications {}",
            if enabled { "enabled" } else { "disabled" }
        ))
    }

    pub fn handle_set_font_scale(&mut self, font_scale: FontScale) -> Result<String> {
        self.data.settings.font_scale = font_scale;
        self.save_data()?;
        Ok(format!("Font scale set to {}", font_scale))
    }
}
