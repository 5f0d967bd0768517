/// Format a Unix timestamp (seconds) as a `HH:MM` axis label using UTC
/// components. Plain integer math keeps the scene builder free of any
/// browser time API.
pub fn format_time_label(timestamp_secs: u64) -> String {
    let secs_of_day = timestamp_secs % 86_400;
    format!("{:02}:{:02}", secs_of_day / 3_600, (secs_of_day % 3_600) / 60)
}

/// `HH:MM:SS` variant for the header clock.
pub fn format_clock(timestamp_secs: u64) -> String {
    let secs_of_day = timestamp_secs % 86_400;
    format!(
        "{:02}:{:02}:{:02}",
        secs_of_day / 3_600,
        (secs_of_day % 3_600) / 60,
        secs_of_day % 60
    )
}
