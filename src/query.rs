//! Filter, search, and sort over the project collection
//!
//! Pure functions over an immutable document; a view is recomputed from
//! scratch on every call. Filters AND together; sorts are stable so ties
//! keep their stored order.

use crate::model::{Project, ProjectStatus, Recurrence};
use chrono::NaiveDate;
use std::str::FromStr;

/// Status facet of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// No status filtering
    #[default]
    All,
    /// Not Started or In Progress
    Active,
    /// Completed only
    Completed,
}

impl StatusFilter {
    fn matches(self, status: ProjectStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status.is_active(),
            StatusFilter::Completed => status == ProjectStatus::Completed,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(StatusFilter::All),
            "Active" => Ok(StatusFilter::Active),
            "Completed" => Ok(StatusFilter::Completed),
            _ => Err(format!(
                "Invalid status filter '{}'. Valid options are: All, Active, Completed",
                s
            )),
        }
    }
}

/// Recurrence facet of a query: everything, or one exact cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecurrenceFilter {
    #[default]
    All,
    Only(Recurrence),
}

impl RecurrenceFilter {
    fn matches(self, recurrence: Recurrence) -> bool {
        match self {
            RecurrenceFilter::All => true,
            RecurrenceFilter::Only(wanted) => recurrence == wanted,
        }
    }
}

impl FromStr for RecurrenceFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(RecurrenceFilter::All);
        }
        s.parse::<Recurrence>().map(RecurrenceFilter::Only)
    }
}

/// Sort key for a query result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Case-insensitive lexicographic on name
    #[default]
    Name,
    /// By due date; projects without one sort after all real dates
    Date,
    /// Not Started < In Progress < Completed
    Status,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Name" => Ok(SortBy::Name),
            "Date" => Ok(SortBy::Date),
            "Status" => Ok(SortBy::Status),
            _ => Err(format!(
                "Invalid sort key '{}'. Valid options are: Name, Date, Status",
                s
            )),
        }
    }
}

/// A complete filtered/sorted view specification
#[derive(Debug, Clone, Default)]
pub struct ProjectQuery {
    /// Case-insensitive substring match on name; empty disables
    pub search_text: String,
    pub status: StatusFilter,
    pub recurrence: RecurrenceFilter,
    pub sort_by: SortBy,
}

/// Projects without a due date sort after every real date
fn empty_date_sentinel() -> NaiveDate {
    NaiveDate::from_ymd_opt(9999, 12, 31).expect("valid sentinel date")
}

/// Keep only projects matching the status filter
pub fn apply_status_filter(projects: &mut Vec<&Project>, filter: StatusFilter) {
    projects.retain(|p| filter.matches(p.status));
}

/// Keep only projects matching the recurrence filter
pub fn apply_recurrence_filter(projects: &mut Vec<&Project>, filter: RecurrenceFilter) {
    projects.retain(|p| filter.matches(p.recurrence));
}

/// Keep only projects whose name contains the search text
/// (case-insensitive; empty search keeps everything)
pub fn apply_search_filter(projects: &mut Vec<&Project>, search_text: &str) {
    if search_text.is_empty() {
        return;
    }
    let needle = search_text.to_lowercase();
    projects.retain(|p| p.name.to_lowercase().contains(&needle));
}

/// Stable-sort projects by the given key
pub fn sort_projects(projects: &mut [&Project], sort_by: SortBy) {
    match sort_by {
        SortBy::Name => projects.sort_by_key(|p| p.name.to_lowercase()),
        SortBy::Date => {
            projects.sort_by_key(|p| p.due_date.unwrap_or_else(empty_date_sentinel))
        }
        SortBy::Status => projects.sort_by_key(|p| p.status.rank()),
    }
}

/// Run a query against the project collection
pub fn run<'a>(projects: &'a [Project], query: &ProjectQuery) -> Vec<&'a Project> {
    let mut view: Vec<&Project> = projects.iter().collect();
    apply_status_filter(&mut view, query.status);
    apply_recurrence_filter(&mut view, query.recurrence);
    apply_search_filter(&mut view, &query.search_text);
    sort_projects(&mut view, query.sort_by);
    view
}
