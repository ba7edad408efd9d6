//! Display formatting for stopwatch, countdown and wall clock values
//!
//! Every string the panels show goes through this module. The functions are
//! pure and total: callers clamp inputs to non-negative values before they
//! get here.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Hour convention for the wall clock panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockFormat {
    #[default]
    TwentyFourHour,
    TwelveHour,
}

impl ClockFormat {
    /// The other convention
    pub fn toggle(self) -> Self {
        match self {
            ClockFormat::TwentyFourHour => ClockFormat::TwelveHour,
            ClockFormat::TwelveHour => ClockFormat::TwentyFourHour,
        }
    }

    /// Label for the toggle control
    pub fn toggle_label(self) -> &'static str {
        match self {
            ClockFormat::TwentyFourHour => "Switch to 12h",
            ClockFormat::TwelveHour => "Switch to 24h",
        }
    }
}

/// Format stopwatch elapsed time as `HH:MM:SS`.
///
/// Milliseconds are floored to whole seconds. Hours are unbounded and
/// widen past two digits when needed.
///
/// # Examples
/// ```
/// use ora_simulator::utils::format::format_chrono;
/// assert_eq!(format_chrono(0), "00:00:00");
/// assert_eq!(format_chrono(61_999), "00:01:01");
/// assert_eq!(format_chrono(360_000_000), "100:00:00");
/// ```
pub fn format_chrono(elapsed_ms: u64) -> String {
    let total_seconds = elapsed_ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format countdown remaining time as `MM:SS`.
///
/// # Examples
/// ```
/// use ora_simulator::utils::format::format_countdown;
/// assert_eq!(format_countdown(70), "01:10");
/// assert_eq!(format_countdown(5), "00:05");
/// ```
pub fn format_countdown(remaining_sec: u32) -> String {
    let minutes = remaining_sec / 60;
    let seconds = remaining_sec % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

/// Parse a `H+:MM:SS` stopwatch display back into whole seconds.
///
/// Returns `None` for anything [`format_chrono`] could not have produced.
pub fn parse_chrono(display: &str) -> Option<u64> {
    let mut parts = display.split(':');
    let hours = parse_field(parts.next()?, None)?;
    let minutes = parse_field(parts.next()?, Some(60))?;
    let seconds = parse_field(parts.next()?, Some(60))?;
    if parts.next().is_some() {
        return None;
    }
    Some(hours * 3600 + minutes * 60 + seconds)
}

fn parse_field(field: &str, limit: Option<u64>) -> Option<u64> {
    if field.len() < 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if limit.is_some() && field.len() != 2 {
        return None;
    }
    let value: u64 = field.parse().ok()?;
    match limit {
        Some(limit) if value >= limit => None,
        _ => Some(value),
    }
}

/// Format a time of day for the wall clock panel
pub fn format_wall_time(time: &NaiveTime, format: ClockFormat) -> String {
    match format {
        ClockFormat::TwentyFourHour => time.format("%H:%M:%S").to_string(),
        ClockFormat::TwelveHour => time.format("%I:%M:%S %p").to_string(),
    }
}

/// Format a calendar date in long form, e.g. `Wednesday, October 14, 2026`
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_chrono_shaped(s: &str) -> bool {
        let parts: Vec<&str> = s.split(':').collect();
        parts.len() == 3
            && parts.iter().all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
            && parts[1].len() == 2
            && parts[2].len() == 2
    }

    #[test]
    fn chrono_floors_to_whole_seconds() {
        assert_eq!(format_chrono(999), "00:00:00");
        assert_eq!(format_chrono(1_000), "00:00:01");
        assert_eq!(format_chrono(3_599_999), "00:59:59");
        assert_eq!(format_chrono(3_600_000), "01:00:00");
    }

    #[test]
    fn chrono_display_reparses_to_same_seconds() {
        let samples = [0u64, 1, 999, 59_000, 61_500, 3_600_000, 86_399_999, 400_000_123];
        for ms in samples {
            let shown = format_chrono(ms);
            assert!(is_chrono_shaped(&shown), "bad shape: {}", shown);
            assert_eq!(parse_chrono(&shown), Some(ms / 1000), "for {}", ms);
        }
    }

    #[test]
    fn countdown_is_two_by_two_under_an_hour() {
        for sec in (0..3600).step_by(37) {
            let shown = format_countdown(sec);
            assert_eq!(shown.len(), 5, "{}", shown);
            assert_eq!(&shown[2..3], ":");
        }
        assert_eq!(format_countdown(3599), "59:59");
        assert_eq!(format_countdown(3600), "60:00");
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert_eq!(parse_chrono("1:00:00"), None);
        assert_eq!(parse_chrono("00:60:00"), None);
        assert_eq!(parse_chrono("00:00"), None);
        assert_eq!(parse_chrono("00:00:00:00"), None);
        assert_eq!(parse_chrono("aa:00:00"), None);
    }

    #[test]
    fn wall_time_respects_format() {
        let time = NaiveTime::from_hms_opt(14, 5, 9).unwrap();
        assert_eq!(format_wall_time(&time, ClockFormat::TwentyFourHour), "14:05:09");
        assert_eq!(format_wall_time(&time, ClockFormat::TwelveHour), "02:05:09 PM");
    }

    #[test]
    fn date_is_long_form() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        assert_eq!(format_date(&date), "Wednesday, October 14, 2026");
    }

    #[test]
    fn clock_format_toggles_back_and_forth() {
        let format = ClockFormat::default();
        assert_eq!(format.toggle(), ClockFormat::TwelveHour);
        assert_eq!(format.toggle().toggle(), format);
    }
}
