//! Stats handler

use crate::DashboardHandler;
use crate::stats;
use anyhow::Result;
use chrono::NaiveDate;

impl DashboardHandler {
    /// Render the home summary plus the statistics screen text
    pub fn handle_stats(&self, today: NaiveDate) -> Result<String> {
        let summary = stats::progress_summary(&self.data);
        let computed = stats::compute_stats(&self.data, today);
        Ok(format!("{}\n\n{}", summary, stats::format_stats(&computed)))
    }
}
