use crate::model::project::{HistoryEntry, Project, ProjectStatus, Recurrence};
use crate::model::settings::Settings;
use crate::validation;
use anyhow::{Result, bail};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The root persisted document: the project collection plus settings
///
/// One instance is owned by the running application and passed by
/// reference to every consumer; there is no ambient global copy.
/// Mutations do not persist by themselves - the caller decides when
/// to write the document back through [`crate::storage::Storage`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppData {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub settings: Settings,
    /// Unknown top-level fields (for example legacy `rewards` or
    /// `current_week` keys), round-tripped on save
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Replacement field values for [`AppData::edit_project`]
///
/// `due_date` is the raw user input; it is validated during the edit and
/// coerced to empty when it is not a real `YYYY-MM-DD` calendar date.
#[derive(Debug, Clone)]
pub struct ProjectEdit {
    pub name: String,
    pub category: String,
    pub due_date: String,
    pub recurrence: Recurrence,
    pub status: ProjectStatus,
}

impl AppData {
    /// Create an empty document with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new project to the collection
    ///
    /// The name is trimmed and must be non-empty; the project starts as
    /// Not Started with an empty history. Returns a reference to the
    /// stored record. Does not save.
    pub fn add_project(
        &mut self,
        name: &str,
        category: &str,
        due_date: Option<chrono::NaiveDate>,
        recurrence: Recurrence,
    ) -> Result<&Project> {
        let name = validation::validate_name(name)?;
        self.projects
            .push(Project::new(name, category, due_date, recurrence));
        Ok(self.projects.last().expect("just pushed"))
    }

    /// Apply an edit to the project at `index` and record it in history
    ///
    /// The name is trimmed and must be non-empty. The due date is coerced
    /// to empty when invalid rather than rejected. A history entry with
    /// the pre- and post-edit snapshots is appended, stamped with
    /// `timestamp`.
    pub fn edit_project(
        &mut self,
        index: usize,
        edit: ProjectEdit,
        timestamp: NaiveDateTime,
    ) -> Result<&Project> {
        let name = validation::validate_name(&edit.name)?;
        let Some(project) = self.projects.get_mut(index) else {
            bail!("no project at index {index}");
        };

        let old = project.snapshot();
        project.name = name;
        project.category = edit.category;
        project.recurrence = edit.recurrence;
        project.status = edit.status;
        project.due_date = validation::parse_due_date(&edit.due_date);
        let new = project.snapshot();

        project.history.push(HistoryEntry {
            timestamp,
            old,
            new,
        });
        Ok(&self.projects[index])
    }

    /// Remove the first project structurally equal to `project`
    ///
    /// Returns the removed record, or `None` when no match exists
    /// (absence is not an error).
    pub fn delete_project(&mut self, project: &Project) -> Option<Project> {
        if let Some(pos) = self.projects.iter().position(|p| p == project) {
            Some(self.projects.remove(pos))
        } else {
            tracing::warn!(name = %project.name, "delete: no matching project");
            None
        }
    }

    /// Clear the entire project collection
    pub fn reset_projects(&mut self) {
        self.projects.clear();
    }

    /// Index of the first project with the given name
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.projects.iter().position(|p| p.name == name)
    }

    /// Total number of projects
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// Number of completed projects
    pub fn completed_count(&self) -> usize {
        self.projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Completed)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::project::local_timestamp_now;

    fn edit_for(project: &Project) -> ProjectEdit {
        ProjectEdit {
            name: project.name.clone(),
            category: project.category.clone(),
            due_date: project
                .due_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            recurrence: project.recurrence,
            status: project.status,
        }
    }

    #[test]
    fn test_add_project_defaults() {
        let mut data = AppData::new();
        let project = data
            .add_project("Zine", "Art", None, Recurrence::Monthly)
            .unwrap();
        assert_eq!(project.name, "Zine");
        assert_eq!(project.category, "Art");
        assert_eq!(project.status, ProjectStatus::NotStarted);
        assert!(project.history.is_empty());
        assert_eq!(data.projects.len(), 1);
    }

    #[test]
    fn test_add_project_trims_name() {
        let mut data = AppData::new();
        let project = data
            .add_project("  Zine  ", "General", None, Recurrence::None)
            .unwrap();
        assert_eq!(project.name, "Zine");
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let mut data = AppData::new();
        assert!(data.add_project("", "General", None, Recurrence::None).is_err());
        assert!(
            data.add_project("   ", "General", None, Recurrence::None)
                .is_err()
        );
        assert!(data.projects.is_empty());
    }

    #[test]
    fn test_edit_appends_history_entry() {
        let mut data = AppData::new();
        data.add_project("Zine", "General", None, Recurrence::None)
            .unwrap();

        let mut edit = edit_for(&data.projects[0]);
        edit.status = ProjectStatus::InProgress;
        data.edit_project(0, edit, local_timestamp_now()).unwrap();

        let project = &data.projects[0];
        assert_eq!(project.status, ProjectStatus::InProgress);
        assert_eq!(project.history.len(), 1);
        let entry = &project.history[0];
        assert_eq!(entry.old.status, ProjectStatus::NotStarted);
        assert_eq!(entry.new.status, ProjectStatus::InProgress);
    }

    #[test]
    fn test_edit_rejects_empty_name_without_mutating() {
        let mut data = AppData::new();
        data.add_project("Zine", "General", None, Recurrence::None)
            .unwrap();

        let mut edit = edit_for(&data.projects[0]);
        edit.name = "  ".to_string();
        assert!(data.edit_project(0, edit, local_timestamp_now()).is_err());
        assert_eq!(data.projects[0].name, "Zine");
        assert!(data.projects[0].history.is_empty());
    }

    #[test]
    fn test_edit_coerces_invalid_due_date_to_empty() {
        let mut data = AppData::new();
        data.add_project("Zine", "General", None, Recurrence::None)
            .unwrap();

        let mut edit = edit_for(&data.projects[0]);
        edit.due_date = "2024-02-30".to_string();
        data.edit_project(0, edit, local_timestamp_now()).unwrap();
        assert_eq!(data.projects[0].due_date, None);

        let mut edit = edit_for(&data.projects[0]);
        edit.due_date = "not-a-date".to_string();
        data.edit_project(0, edit, local_timestamp_now()).unwrap();
        assert_eq!(data.projects[0].due_date, None);
    }

    #[test]
    fn test_delete_removes_first_structural_match() {
        let mut data = AppData::new();
        data.add_project("Zine", "General", None, Recurrence::None)
            .unwrap();
        data.add_project("Zine", "General", None, Recurrence::None)
            .unwrap();

        let target = data.projects[0].clone();
        assert!(data.delete_project(&target).is_some());
        assert_eq!(data.projects.len(), 1);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut data = AppData::new();
        data.add_project("Zine", "General", None, Recurrence::None)
            .unwrap();

        let ghost = Project::new("Ghost", "General", None, Recurrence::None);
        assert!(data.delete_project(&ghost).is_none());
        assert_eq!(data.projects.len(), 1);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut data = AppData::new();
        data.add_project("A", "General", None, Recurrence::None).unwrap();
        data.add_project("B", "General", None, Recurrence::None).unwrap();
        data.reset_projects();
        assert!(data.projects.is_empty());
    }
}
