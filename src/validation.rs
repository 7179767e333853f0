//! Validation helpers shared by the store mutations and the CLI
//!
//! This module contains the name and due-date validation logic. Names are
//! a hard requirement (rejected with an error); due dates are soft
//! (coerced to empty when malformed, per the data-file convention).

use anyhow::{Result, bail};
use chrono::NaiveDate;

/// Trim a project name and reject it when empty
///
/// # Arguments
/// * `name` - Raw user input
///
/// # Returns
/// The trimmed name, or an error for empty/whitespace-only input
pub fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        bail!("project name cannot be empty");
    }
    Ok(trimmed.to_string())
}

/// Check that a string has the `YYYY-MM-DD` shape (digits and dashes in
/// the right positions). Shape alone is not enough; the caller still has
/// to parse it as a calendar date.
pub fn is_date_shaped(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 10 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}

/// Parse a raw due-date string under the data-file convention
///
/// Empty input means "no due date". Anything else must have the
/// `YYYY-MM-DD` shape and parse as a real calendar date; otherwise it is
/// coerced to `None` with a warning, never kept malformed.
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    if raw.is_empty() {
        return None;
    }
    if !is_date_shaped(raw) {
        tracing::warn!(input = %raw, "due date is not YYYY-MM-DD, storing empty");
        return None;
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            tracing::warn!(input = %raw, "due date is not a valid calendar date, storing empty");
            None
        }
    }
}
