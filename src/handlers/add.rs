//! Add handler

use crate::DashboardHandler;
use crate::model::Recurrence;
use crate::validation;
use anyhow::Result;

impl DashboardHandler {
    /// Create a new project and persist the document
    ///
    /// The due date is raw user input; anything that is not a real
    /// `YYYY-MM-DD` calendar date is stored as empty. An empty name is
    /// rejected and leaves the collection unchanged.
    pub fn handle_add(
        &mut self,
        name: &str,
        category: &str,
        due_date: &str,
        recurrence: Recurrence,
    ) -> Result<String> {
        let due = validation::parse_due_date(due_date);
        let project = self.data.add_project(name, category, due, recurrence)?;
        let message = format!("Added project '{}'", project.name);
        self.save_data()?;
        Ok(message)
    }
}
