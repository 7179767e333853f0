use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default category for newly created projects.
pub const DEFAULT_CATEGORY: &str = "General";

/// Default decorative tag for newly created projects (pin glyph).
pub const DEFAULT_EMOJI: &str = "📌";

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Get the current timestamp in local timezone (for history entries)
pub fn local_timestamp_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Progress status of a project
///
/// Serialized with the human-readable names the data file uses
/// ("Not Started", "In Progress", "Completed").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// Work has not begun
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    /// Work is underway
    #[serde(rename = "In Progress")]
    InProgress,
    /// Project is finished
    Completed,
}

impl ProjectStatus {
    /// Fixed rank used for status sorting: Not Started < In Progress < Completed
    pub fn rank(self) -> u8 {
        match self {
            ProjectStatus::NotStarted => 0,
            ProjectStatus::InProgress => 1,
            ProjectStatus::Completed => 2,
        }
    }

    /// Whether the project counts as active (not yet completed)
    pub fn is_active(self) -> bool {
        !matches!(self, ProjectStatus::Completed)
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Not Started" => Ok(ProjectStatus::NotStarted),
            "In Progress" => Ok(ProjectStatus::InProgress),
            "Completed" => Ok(ProjectStatus::Completed),
            _ => Err(format!(
                "Invalid status '{}'. Valid options are: Not Started, In Progress, Completed",
                s
            )),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProjectStatus::NotStarted => "Not Started",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
        };
        f.write_str(s)
    }
}

/// Recurrence cadence of a project
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Recurrence {
    /// One-off project
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

impl FromStr for Recurrence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(Recurrence::None),
            "Daily" => Ok(Recurrence::Daily),
            "Weekly" => Ok(Recurrence::Weekly),
            "Monthly" => Ok(Recurrence::Monthly),
            _ => Err(format!(
                "Invalid recurrence '{}'. Valid options are: None, Daily, Weekly, Monthly",
                s
            )),
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Recurrence::None => "None",
            Recurrence::Daily => "Daily",
            Recurrence::Weekly => "Weekly",
            Recurrence::Monthly => "Monthly",
        };
        f.write_str(s)
    }
}

/// Serde helpers for the due-date convention of the data file:
/// `None` is stored as the empty string, and anything that does not
/// parse as a real `YYYY-MM-DD` calendar date is coerced to `None`.
pub(crate) mod due_date_serde {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(crate::validation::parse_due_date(&raw))
    }
}

/// A single tracked project
///
/// `name` is the identity key within the list; duplicates are permitted
/// and are told apart only by position. Unknown fields from older or
/// richer data files are preserved in `extra` and round-tripped on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project name (required, effectively the identity key)
    pub name: String,
    /// Free-text category
    #[serde(default = "default_category")]
    pub category: String,
    /// Progress status
    #[serde(default)]
    pub status: ProjectStatus,
    /// Decorative tag shown next to the name
    #[serde(default = "default_emoji")]
    pub emoji: String,
    /// Optional due date; stored as "" when absent
    #[serde(default, with = "due_date_serde")]
    pub due_date: Option<NaiveDate>,
    /// Recurrence cadence
    #[serde(default)]
    pub recurrence: Recurrence,
    /// Edit history, appended on every edit, never pruned
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    /// Unknown fields, passed through transparently on save
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_emoji() -> String {
    DEFAULT_EMOJI.to_string()
}

impl Project {
    /// Create a project with the given fields and the documented defaults
    /// (status Not Started, pin emoji, empty history).
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        due_date: Option<NaiveDate>,
        recurrence: Recurrence,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            status: ProjectStatus::NotStarted,
            emoji: DEFAULT_EMOJI.to_string(),
            due_date,
            recurrence,
            history: Vec::new(),
            extra: serde_json::Map::new(),
        }
    }

    /// Capture an immutable snapshot of the current field values
    /// (everything except the history itself).
    pub fn snapshot(&self) -> ProjectSnapshot {
        ProjectSnapshot {
            name: self.name.clone(),
            category: self.category.clone(),
            status: self.status,
            emoji: self.emoji.clone(),
            due_date: self.due_date,
            recurrence: self.recurrence,
        }
    }
}

/// Field values of a project at a point in time, without the history
///
/// Used for the `old`/`new` sides of a [`HistoryEntry`]; keeping history
/// out of the snapshot keeps the type non-recursive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default = "default_emoji")]
    pub emoji: String,
    #[serde(default, with = "due_date_serde")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub recurrence: Recurrence,
}

/// One edit of a project: when it happened, and the full field values
/// before and after
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Local timestamp of the edit (ISO-8601)
    pub timestamp: NaiveDateTime,
    /// Snapshot before the edit was applied
    pub old: ProjectSnapshot,
    /// Snapshot after the edit was applied
    pub new: ProjectSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_status_serialized_names() {
        assert_eq!(
            serde_json::to_string(&ProjectStatus::NotStarted).unwrap(),
            "\"Not Started\""
        );
        assert_eq!(
            serde_json::to_string(&ProjectStatus::InProgress).unwrap(),
            "\"In Progress\""
        );
        assert_eq!(
            serde_json::to_string(&ProjectStatus::Completed).unwrap(),
            "\"Completed\""
        );
    }

    #[test]
    fn test_status_from_str_round_trip() {
        for status in [
            ProjectStatus::NotStarted,
            ProjectStatus::InProgress,
            ProjectStatus::Completed,
        ] {
            let parsed: ProjectStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("not started".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn test_status_rank_order() {
        assert!(ProjectStatus::NotStarted.rank() < ProjectStatus::InProgress.rank());
        assert!(ProjectStatus::InProgress.rank() < ProjectStatus::Completed.rank());
    }

    #[test]
    fn test_recurrence_from_str() {
        assert_eq!("Weekly".parse::<Recurrence>().unwrap(), Recurrence::Weekly);
        assert!("weekly".parse::<Recurrence>().is_err());
    }

    #[test]
    fn test_project_defaults_backfilled_on_deserialize() {
        let project: Project = serde_json::from_str(r#"{"name": "Sketchbook"}"#).unwrap();
        assert_eq!(project.name, "Sketchbook");
        assert_eq!(project.category, DEFAULT_CATEGORY);
        assert_eq!(project.status, ProjectStatus::NotStarted);
        assert_eq!(project.emoji, DEFAULT_EMOJI);
        assert_eq!(project.due_date, None);
        assert_eq!(project.recurrence, Recurrence::None);
        assert!(project.history.is_empty());
    }

    #[test]
    fn test_due_date_empty_string_is_none() {
        let project: Project =
            serde_json::from_str(r#"{"name": "A", "due_date": ""}"#).unwrap();
        assert_eq!(project.due_date, None);
    }

    #[test]
    fn test_due_date_invalid_calendar_date_coerced_to_none() {
        let project: Project =
            serde_json::from_str(r#"{"name": "A", "due_date": "2024-02-30"}"#).unwrap();
        assert_eq!(project.due_date, None);
    }

    #[test]
    fn test_due_date_serializes_none_as_empty_string() {
        let project = Project::new("A", DEFAULT_CATEGORY, None, Recurrence::None);
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["due_date"], "");
    }

    #[test]
    fn test_due_date_serializes_date_as_iso() {
        let due = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        let project = Project::new("A", DEFAULT_CATEGORY, Some(due), Recurrence::None);
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["due_date"], "2024-01-08");
    }

    #[test]
    fn test_unknown_fields_round_trip() {
        let raw = r#"{"name": "A", "color": "teal"}"#;
        let project: Project = serde_json::from_str(raw).unwrap();
        assert_eq!(project.extra["color"], "teal");
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["color"], "teal");
    }

    #[test]
    fn test_snapshot_excludes_history() {
        let mut project = Project::new("A", "Work", None, Recurrence::Daily);
        let entry = HistoryEntry {
            timestamp: local_timestamp_now(),
            old: project.snapshot(),
            new: project.snapshot(),
        };
        project.history.push(entry);
        let snap = project.snapshot();
        assert_eq!(snap.name, "A");
        assert_eq!(snap.category, "Work");
        assert_eq!(snap.recurrence, Recurrence::Daily);
    }
}
