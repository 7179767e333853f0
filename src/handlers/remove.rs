//! Remove and reset handlers

use crate::DashboardHandler;
use anyhow::Result;

impl DashboardHandler {
    /// Delete the first project with the given name and persist
    ///
    /// A missing name is not an error; the collection is simply left
    /// unchanged.
    pub fn handle_remove(&mut self, name: &str) -> Result<String> {
        let Some(index) = self.data.find_by_name(name) else {
            return Ok(format!("No project named '{}'", name));
        };
        let target = self.data.projects[index].clone();
        let _ = self.data.delete_project(&target);
        self.save_data()?;
        Ok(format!("Removed project '{}'", name))
    }

    /// Clear the entire project collection and persist
    pub fn handle_reset(&mut self) -> Result<String> {
        let count = self.data.project_count();
        self.data.reset_projects();
        self.save_data()?;
        Ok(format!("Removed all {} project(s)", count))
    }
}
