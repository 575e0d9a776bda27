//! Timestamp formatting for console display and SubRip output.

/// Formats a seconds offset as `HH:MM:SS`, discarding sub-second precision.
///
/// Negative inputs are clamped to zero.
pub fn format_display(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Formats a seconds offset as `HH:MM:SS,mmm`.
///
/// The comma separator is SubRip convention. The offset is rounded to the
/// nearest millisecond; negative inputs are clamped to zero.
pub fn format_subtitle(seconds: f64) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1000;
    let millis = total_ms % 1000;
    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}
