//! Edit handler

use crate::DashboardHandler;
use crate::model::{ProjectEdit, ProjectStatus, Recurrence, local_timestamp_now};
use anyhow::{Result, bail};

impl DashboardHandler {
    /// Edit the first project with the given name and persist the document
    ///
    /// Fields left as `None` keep their current value. Every successful
    /// edit appends a history entry with the before/after snapshots.
    #[allow(clippy::too_many_arguments)]
    pub fn handle_edit(
        &mut self,
        target: &str,
        name: Option<String>,
        category: Option<String>,
        due_date: Option<String>,
        recurrence: Option<Recurrence>,
        status: Option<ProjectStatus>,
    ) -> Result<String> {
        let Some(index) = self.data.find_by_name(target) else {
            bail!("no project named '{}'", target);
        };

        let current = &self.data.projects[index];
        let edit = ProjectEdit {
            name: name.unwrap_or_else(|| current.name.clone()),
            category: category.unwrap_or_else(|| current.category.clone()),
            due_date: due_date.unwrap_or_else(|| {
                current
                    .due_date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default()
            }),
            recurrence: recurrence.unwrap_or(current.recurrence),
            status: status.unwrap_or(current.status),
        };

        let project = self.data.edit_project(index, edit, local_timestamp_now())?;
        let message = format!(
            "Updated project '{}' ({} history entries)",
            project.name,
            project.history.len()
        );
        self.save_data()?;
        Ok(message)
    }
}
