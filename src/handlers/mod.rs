//! User-operation handlers for the dashboard CLI
//!
//! Each handler is in a separate file for better organization; all are
//! methods on [`crate::DashboardHandler`] returning the rendered output
//! as a string, leaving printing and exit codes to the binary.

pub mod add;
pub mod edit;
pub mod list;
pub mod notify;
pub mod remove;
pub mod settings;
pub mod stats;
pub mod transfer;
