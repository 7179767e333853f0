//! Domain models for the creative dashboard
//!
//! This module contains the core data structures and their implementations.
//! It is split into submodules for better organization:
//! - `project`: project records, status/recurrence enums, edit history
//! - `settings`: application settings (theme, notifications, font scale)
//! - `app_data`: the root persisted document and its mutations

mod app_data;
mod project;
mod settings;

pub use app_data::{AppData, ProjectEdit};
pub use project::{
    DEFAULT_CATEGORY, DEFAULT_EMOJI, HistoryEntry, Project, ProjectSnapshot, ProjectStatus,
    Recurrence, local_date_today, local_timestamp_now,
};
pub use settings::{FontScale, Settings, Theme};
