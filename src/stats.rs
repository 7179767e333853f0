//! Aggregate statistics over the project collection
//!
//! Streaks count completed projects sharing a name and recurrence value.
//! Since each project is a single record rather than a per-occurrence
//! log, a distinct (name, recurrence) pair contributes at most one
//! increment per stored record.

use crate::model::{AppData, ProjectStatus, Recurrence};
use chrono::{Days, NaiveDate};
use std::collections::BTreeMap;

/// Aggregated dashboard statistics
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    /// Projects with a due date inside [today - 7d, today]
    pub due_last_week: usize,
    /// Completed-occurrence counts keyed by (name, recurrence),
    /// recurring projects only
    pub streaks: BTreeMap<(String, Recurrence), u32>,
}

/// Compute statistics for the given reference date
pub fn compute_stats(data: &AppData, today: NaiveDate) -> Stats {
    let week_ago = today
        .checked_sub_days(Days::new(7))
        .unwrap_or(NaiveDate::MIN);

    let mut stats = Stats {
        total: data.projects.len(),
        ..Default::default()
    };

    for project in &data.projects {
        if project.status == ProjectStatus::Completed {
            stats.completed += 1;
            if project.recurrence != Recurrence::None {
                *stats
                    .streaks
                    .entry((project.name.clone(), project.recurrence))
                    .or_insert(0) += 1;
            }
        }
        if let Some(due) = project.due_date
            && due >= week_ago
            && due <= today
        {
            stats.due_last_week += 1;
        }
    }

    stats
}

/// One-line completion summary for the home view
pub fn progress_summary(data: &AppData) -> String {
    let total = data.project_count();
    if total == 0 {
        "No projects yet! 📋".to_string()
    } else {
        format!("{}/{} projects completed 📈", data.completed_count(), total)
    }
}

/// Render statistics as the multi-line dashboard summary
pub fn format_stats(stats: &Stats) -> String {
    let streak_text = if stats.streaks.is_empty() {
        "No streaks yet 📉".to_string()
    } else {
        stats
            .streaks
            .iter()
            .map(|((name, recurrence), count)| {
                format!("{} 📈 {} {} streak", name, count, recurrence)
            })
            .collect::<Vec<_>>()
            .join("\n")
    };
    format!(
        "Total Projects: {} 📋\nCompleted: {} ✅\nProjects Due Last Week: {} 📅\nStreaks:\n{}",
        stats.total, stats.completed, stats.due_last_week, streak_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Project;

    fn today() -> NaiveDate {
        "2024-03-15".parse().unwrap()
    }

    fn project(name: &str, status: ProjectStatus, due: Option<&str>, rec: Recurrence) -> Project {
        let mut p = Project::new(name, "General", None, rec);
        p.status = status;
        p.due_date = due.map(|d| d.parse().unwrap());
        p
    }

    #[test]
    fn test_counts() {
        let mut data = AppData::new();
        data.projects.push(project(
            "A",
            ProjectStatus::Completed,
            None,
            Recurrence::None,
        ));
        // due 3 days ago, inside the week window
        data.projects.push(project(
            "B",
            ProjectStatus::NotStarted,
            Some("2024-03-12"),
            Recurrence::None,
        ));
        data.projects
            .push(project("C", ProjectStatus::InProgress, None, Recurrence::None));

        let stats = compute_stats(&data, today());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.due_last_week, 1);
    }

    #[test]
    fn test_week_window_is_inclusive() {
        let mut data = AppData::new();
        data.projects.push(project(
            "Edge low",
            ProjectStatus::NotStarted,
            Some("2024-03-08"),
            Recurrence::None,
        ));
        data.projects.push(project(
            "Edge high",
            ProjectStatus::NotStarted,
            Some("2024-03-15"),
            Recurrence::None,
        ));
        data.projects.push(project(
            "Too old",
            ProjectStatus::NotStarted,
            Some("2024-03-07"),
            Recurrence::None,
        ));
        data.projects.push(project(
            "Future",
            ProjectStatus::NotStarted,
            Some("2024-03-16"),
            Recurrence::None,
        ));
        assert_eq!(compute_stats(&data, today()).due_last_week, 2);
    }

    #[test]
    fn test_streaks_count_completed_recurring_only() {
        let mut data = AppData::new();
        data.projects.push(project(
            "Sketch",
            ProjectStatus::Completed,
            None,
            Recurrence::Daily,
        ));
        data.projects.push(project(
            "Sketch",
            ProjectStatus::Completed,
            None,
            Recurrence::Daily,
        ));
        data.projects.push(project(
            "One-off",
            ProjectStatus::Completed,
            None,
            Recurrence::None,
        ));
        data.projects.push(project(
            "Open",
            ProjectStatus::NotStarted,
            None,
            Recurrence::Weekly,
        ));

        let stats = compute_stats(&data, today());
        assert_eq!(stats.streaks.len(), 1);
        assert_eq!(
            stats.streaks[&("Sketch".to_string(), Recurrence::Daily)],
            2
        );
    }

    #[test]
    fn test_progress_summary() {
        let mut data = AppData::new();
        assert_eq!(progress_summary(&data), "No projects yet! 📋");
        data.projects.push(project(
            "A",
            ProjectStatus::Completed,
            None,
            Recurrence::None,
        ));
        data.projects
            .push(project("B", ProjectStatus::NotStarted, None, Recurrence::None));
        assert_eq!(progress_summary(&data), "1/2 projects completed 📈");
    }

    #[test]
    fn test_format_stats_without_streaks() {
        let stats = Stats {
            total: 2,
            completed: 1,
            due_last_week: 0,
            streaks: BTreeMap::new(),
        };
        let text = format_stats(&stats);
        assert!(text.contains("Total Projects: 2 📋"));
        assert!(text.contains("No streaks yet 📉"));
    }
}
