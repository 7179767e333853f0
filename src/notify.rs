//! Due-date notification scheduling
//!
//! The core decides when a notification fires and with what text; the
//! actual delivery channel is behind the [`Notifier`] trait. Thresholds
//! are exact (7, 2, or 0 whole days before the due date) with no catch-up
//! for missed days and no memory of notifications already sent: a check
//! repeated on a threshold day fires again, and a check skipped past one
//! misses it. That matches the original behavior and is accepted.

use crate::model::AppData;
use chrono::NaiveDate;

/// Title used for every dashboard notification
pub const NOTIFY_TITLE: &str = "Creative Dashboard";

/// How long a notification stays on screen, in seconds
pub const NOTIFY_TIMEOUT_SECS: u32 = 10;

/// A notification that should fire for a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueNotice {
    pub name: String,
    pub due_date: NaiveDate,
    /// Whole days until due: 7, 2, or 0
    pub days_left: i64,
}

impl DueNotice {
    /// Render the notification body text
    pub fn message(&self) -> String {
        let due = self.due_date.format("%Y-%m-%d");
        match self.days_left {
            7 => format!("'{}' is due in 1 week ({})", self.name, due),
            2 => format!("'{}' is due in 2 days ({})", self.name, due),
            _ => format!("'{}' is due today ({})", self.name, due),
        }
    }
}

/// External channel capable of showing a titled, timed notification
pub trait Notifier {
    fn notify(&self, title: &str, message: &str, timeout_secs: u32);
}

/// Notifier that prints to stdout (the CLI delivery channel)
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, message: &str, _timeout_secs: u32) {
        println!("[{}] {}", title, message);
    }
}

/// Compute the notices that should fire for `today`
///
/// Projects without a due date are skipped. Emits one notice per project
/// whose due date is exactly 7, 2, or 0 days away.
pub fn due_notices(data: &AppData, today: NaiveDate) -> Vec<DueNotice> {
    let mut notices = Vec::new();
    for project in &data.projects {
        let Some(due_date) = project.due_date else {
            continue;
        };
        let days_left = due_date.signed_duration_since(today).num_days();
        if matches!(days_left, 7 | 2 | 0) {
            notices.push(DueNotice {
                name: project.name.clone(),
                due_date,
                days_left,
            });
        }
    }
    notices
}

/// Run one notification check and dispatch through the given channel
///
/// Respects the notifications setting: when disabled, nothing fires.
/// Returns the number of notifications dispatched.
pub fn dispatch_due_notices(data: &AppData, today: NaiveDate, notifier: &dyn Notifier) -> usize {
    if !data.settings.notifications {
        tracing::info!("notifications disabled, skipping check");
        return 0;
    }
    let notices = due_notices(data, today);
    for notice in &notices {
        tracing::info!(name = %notice.name, days_left = notice.days_left, "due notification");
        notifier.notify(NOTIFY_TITLE, &notice.message(), NOTIFY_TIMEOUT_SECS);
    }
    notices.len()
}
