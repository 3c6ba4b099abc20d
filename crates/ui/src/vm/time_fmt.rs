use chrono::Duration;

/// Formats a run length as `m:ss`; negative durations read as zero.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.num_seconds().max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
