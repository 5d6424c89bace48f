//! Timestamped state snapshots printed to stdout

use crate::state::AppState;
use anyhow::{Context, Result};
use chrono::{DateTime, Local, TimeZone};

const TIMESTAMP_FORMAT: &str = "%a %b %-d %Y %-I:%M:%S";

/// e.g. "Tue Oct 6 2026 3:04:05"
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Render a labelled snapshot of the whole tree
pub fn render_snapshot(label: &str, state: &AppState) -> Result<String> {
    let json = serde_json::to_string_pretty(state).context("Failed to serialize state")?;
    Ok(format!("{} {} {}", format_timestamp(&Local::now()), label, json))
}

pub fn print_snapshot(label: &str, state: &AppState) -> Result<()> {
    println!("{}", render_snapshot(label, state)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_timestamp() {
        let at = Utc.with_ymd_and_hms(2026, 10, 6, 15, 4, 5).unwrap();
        assert_eq!(format_timestamp(&at), "Tue Oct 6 2026 3:04:05");
    }

    #[test]
    fn test_render_snapshot_includes_label_and_state() {
        let mut state = AppState::default();
        state.items.push("apple".to_string());

        let line = render_snapshot("new state", &state).unwrap();

        assert!(line.contains(" new state {"));
        assert!(line.contains("\"apple\""));
    }
}
