use chrono::{DateTime, Local, TimeZone, Timelike, Utc};

/// Formato "HH:MM:SS" del indicador "Last updated" (hora local)
pub fn format_last_updated(instant: DateTime<Utc>) -> String {
    format_clock(&instant.with_timezone(&Local))
}

pub fn format_clock<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        instant.hour(),
        instant.minute(),
        instant.second()
    )
}
