//! List handler

use crate::DashboardHandler;
use crate::query::{self, ProjectQuery};
use anyhow::Result;

impl DashboardHandler {
    /// Render the filtered/sorted project list
    pub fn handle_list(&self, query: &ProjectQuery) -> Result<String> {
        let view = query::run(&self.data.projects, query);
        if view.is_empty() {
            return Ok("No projects found".to_string());
        }

        let mut result = format!("Found {} project(s):\n\n", view.len());
        for project in view {
            let due = project
                .due_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "No Due Date".to_string());
            result.push_str(&format!(
                "{} {} - Due: {} [{}] [{}]\n",
                project.emoji, project.name, due, project.status, project.recurrence
            ));
        }
        Ok(result)
    }
}
