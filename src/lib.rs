//! Creative Dashboard core library
//!
//! Tracks creative projects - name, category, status, due date,
//! recurrence, and a full edit history - in a single JSON document.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Handler layer**: [`DashboardHandler`] - one method per user
//!   operation, used by the CLI binary
//! - **Domain layer**: `model`, `query`, `notify`, `stats` - the project
//!   store and its pure query/aggregation functions
//! - **Persistence layer**: `storage` + `normalize` - JSON file I/O and
//!   the load-time normalization pass
//!
//! # Example
//!
//! ```no_run
//! use creative_dashboard::DashboardHandler;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut handler = DashboardHandler::new("app_data.json");
//!     let msg = handler.handle_add("Mural", "Art", "2026-10-01", "Weekly".parse().unwrap())?;
//!     println!("{msg}");
//!     Ok(())
//! }
//! ```

pub mod handlers;
pub mod model;
pub mod normalize;
pub mod notify;
pub mod query;
pub mod stats;
pub mod storage;
pub mod validation;

use anyhow::Result;

// Re-export commonly used types
pub use model::{
    AppData, FontScale, HistoryEntry, Project, ProjectEdit, ProjectSnapshot, ProjectStatus,
    Recurrence, Settings, Theme,
};
pub use notify::{ConsoleNotifier, DueNotice, Notifier};
pub use query::{ProjectQuery, RecurrenceFilter, SortBy, StatusFilter};
pub use stats::Stats;
pub use storage::Storage;

/// Owner of the in-memory document and its storage
///
/// Constructed once at startup and passed by reference to every consumer
/// that needs it; there is no ambient global state. Load failures degrade
/// to an empty default document (logged); every other operation returns
/// an explicit `Result` and leaves the policy to the caller.
pub struct DashboardHandler {
    pub(crate) data: AppData,
    pub(crate) storage: Storage,
}

impl DashboardHandler {
    /// Open the data file at `path`, falling back to an empty document
    /// when it is missing or unreadable
    pub fn new(path: impl AsRef<std::path::Path>) -> Self {
        let storage = Storage::new(path);
        let data = storage.load_or_default();
        Self { data, storage }
    }

    /// Read access to the in-memory document
    pub fn data(&self) -> &AppData {
        &self.data
    }

    /// Persist the in-memory document
    pub(crate) fn save_data(&self) -> Result<()> {
        self.storage.save(&self.data)
    }
}
