//! Notification-check handler

use crate::DashboardHandler;
use crate::notify::{self, Notifier};
use anyhow::Result;
use chrono::NaiveDate;

impl DashboardHandler {
    /// Run one due-date check for `today` and dispatch through `notifier`
    pub fn handle_notify(&self, today: NaiveDate, notifier: &dyn Notifier) -> Result<String> {
        let fired = notify::dispatch_due_notices(&self.data, today, notifier);
        Ok(format!("{} notification(s) dispatched", fired))
    }
}
