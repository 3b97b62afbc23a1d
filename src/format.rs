//! Display helpers.

/// Render a minute count as `"45min"`, `"2h"` or `"2h 15min"`.
pub fn format_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours == 0 {
        format!("{}min", mins)
    } else if mins == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}min", hours, mins)
    }
}
