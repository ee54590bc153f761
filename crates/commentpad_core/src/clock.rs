//! Wall-clock helpers.
//!
//! # Responsibility
//! - Provide epoch-millisecond readings for id generation.
//! - Format the human-readable creation timestamp stored on comments.

use chrono::Local;

/// Display format for comment creation timestamps.
///
/// The value is presentation data; it never participates in ordering.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Returns the current wall-clock time in epoch milliseconds.
pub fn now_epoch_millis() -> i64 {
    Local::now().timestamp_millis()
}

/// Returns the current local time formatted for display on a comment.
pub fn display_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
