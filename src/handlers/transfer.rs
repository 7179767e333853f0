//! Export and import handlers

use crate::DashboardHandler;
use crate::storage::Storage;
use anyhow::Result;
use std::path::Path;

impl DashboardHandler {
    /// Write the current in-memory document verbatim to `path`
    pub fn handle_export(&self, path: &Path) -> Result<String> {
        Storage::export_to(&self.data, path)?;
        Ok(format!("Exported data to {}", path.display()))
    }

    /// Replace the in-memory document with the one at `path` and persist
    ///
    /// The imported document goes through the normalization pass before
    /// it is adopted, so legacy entries and missing fields are upgraded
    /// the same way a regular load upgrades them.
    pub fn handle_import(&mut self, path: &Path) -> Result<String> {
        self.data = Storage::import_from(path)?;
        self.save_data()?;
        Ok(format!(
            "Imported {} project(s) from {}",
            self.data.project_count(),
            path.display()
        ))
    }
}
