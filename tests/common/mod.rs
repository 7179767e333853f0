//! Common test utilities for integration tests

use creative_dashboard::DashboardHandler;
use tempfile::TempDir;

/// Create a handler backed by a data file inside a fresh temp directory
pub fn temp_handler() -> (DashboardHandler, TempDir) {
    let dir = TempDir::new().unwrap();
    let handler = DashboardHandler::new(dir.path().join("app_data.json"));
    (handler, dir)
}

/// Reopen a handler against the same temp directory
#[allow(dead_code)]
pub fn reopen(dir: &TempDir) -> DashboardHandler {
    DashboardHandler::new(dir.path().join("app_data.json"))
}
