//! Utility functions for common operations.

use std::time::Duration;

/// Format duration as MM:SS
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Make free text safe to embed in a single file name component.
///
/// Path separators and control characters become `_`; an empty result
/// becomes `Unknown`.
pub fn sanitize_file_component(text: &str) -> String {
    let cleaned: String = text
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        "Unknown".to_string()
    } else {
        cleaned
    }
}

/// Truncate to `max_chars` characters, marking the cut with "..."
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let keep = max_chars.saturating_sub(3);
        let truncated: String = text.chars().take(keep).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}
