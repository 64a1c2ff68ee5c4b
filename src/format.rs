use chrono::{Datelike, Duration as ChronoDuration, NaiveDate};

use crate::constants::WEEKDAYS;

pub fn format_date_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses a `YYYY-MM-DD` string into a calendar date.
///
/// Malformed components fall back defensively (month/day to 1, year to
/// 1970) instead of failing; validated inputs never reach the fallback.
pub fn parse_date_iso(date_iso: &str) -> NaiveDate {
    let mut parts = date_iso.split('-');
    let year: i32 = parts.next().and_then(|p| p.parse().ok()).unwrap_or(1970);
    let month: u32 = parts.next().and_then(|p| p.parse().ok()).unwrap_or(1);
    let day: u32 = parts.next().and_then(|p| p.parse().ok()).unwrap_or(1);

    NaiveDate::from_ymd_opt(year, month, day)
        .or_else(|| NaiveDate::from_ymd_opt(year, 1, 1))
        .unwrap_or_default()
}

pub fn shift_date(date_iso: &str, offset_days: i64) -> String {
    format_date_iso(parse_date_iso(date_iso) + ChronoDuration::days(offset_days))
}

fn format_date_slash(date_iso: &str) -> String {
    date_iso.replace('-', "/")
}

/// `YYYY/MM/DD (Www)` display label for a day header.
pub fn format_date_label(date_iso: &str) -> String {
    let date = parse_date_iso(date_iso);
    let weekday = WEEKDAYS[date.weekday().num_days_from_sunday() as usize];
    format!("{} ({})", format_date_slash(date_iso), weekday)
}

pub fn format_start_time(hour: u32, minute: u32) -> String {
    format!("{:02}:{:02}", hour, minute)
}

/// Duration as `H:MM` with unpadded hours.
pub fn format_duration(duration_minutes: u32) -> String {
    format!("{}:{:02}", duration_minutes / 60, duration_minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_iso_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        assert_eq!(format_date_iso(date), "2026-08-05");
    }

    #[test]
    fn test_parse_date_iso_round_trip() {
        let date = parse_date_iso("2026-08-29");
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 8, 29).unwrap());
        assert_eq!(format_date_iso(date), "2026-08-29");
    }

    #[test]
    fn test_parse_date_iso_malformed_falls_back() {
        assert_eq!(
            parse_date_iso("2026"),
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
        );
        assert_eq!(
            parse_date_iso("2026-13-40"),
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
        );
        assert_eq!(
            parse_date_iso("garbage"),
            NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_shift_date_rolls_over_month_and_year() {
        assert_eq!(shift_date("2026-08-31", 1), "2026-09-01");
        assert_eq!(shift_date("2026-12-31", 1), "2027-01-01");
        assert_eq!(shift_date("2026-01-01", -1), "2025-12-31");
        assert_eq!(shift_date("2026-03-01", -1), "2026-02-28");
    }

    #[test]
    fn test_shift_date_leap_year() {
        assert_eq!(shift_date("2028-02-28", 1), "2028-02-29");
        assert_eq!(shift_date("2028-03-01", -1), "2028-02-29");
    }

    #[test]
    fn test_format_date_label_includes_weekday() {
        // 2026-08-29 is a Saturday.
        assert_eq!(format_date_label("2026-08-29"), "2026/08/29 (Sat)");
        // 2026-08-30 is a Sunday.
        assert_eq!(format_date_label("2026-08-30"), "2026/08/30 (Sun)");
    }

    #[test]
    fn test_format_start_time_zero_pads() {
        assert_eq!(format_start_time(0, 0), "00:00");
        assert_eq!(format_start_time(8, 5), "08:05");
        assert_eq!(format_start_time(23, 59), "23:59");
    }

    #[test]
    fn test_format_duration_hours_unpadded() {
        assert_eq!(format_duration(420), "7:00");
        assert_eq!(format_duration(30), "0:30");
        assert_eq!(format_duration(15), "0:15");
        assert_eq!(format_duration(1440), "24:00");
    }
}
