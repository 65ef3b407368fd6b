//! Wall-clock snapshot shown in the top-right corner

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

/// Weekday, ISO date, 24-hour time
pub const CLOCK_FORMAT: &str = "%A, %Y-%m-%d %H:%M:%S";

pub fn format_clock<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    time.format(CLOCK_FORMAT).to_string()
}

/// Current local date and time, e.g. `Monday, 2024-01-15 09:05:03`
pub fn local_now() -> String {
    format_clock(&Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_format_clock() {
        let time = Utc.with_ymd_and_hms(2024, 1, 15, 9, 5, 3).unwrap();
        assert_eq!(format_clock(&time), "Monday, 2024-01-15 09:05:03");
    }

    #[test]
    fn test_format_clock_uses_24_hour_time() {
        let time = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_clock(&time), "Sunday, 2023-12-31 23:59:59");
    }

    #[test]
    fn test_format_clock_keeps_offset_local_time() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let time = offset.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap();
        assert_eq!(format_clock(&time), "Thursday, 2024-02-29 00:00:00");
    }

    #[test]
    fn test_local_now_shape() {
        let now = local_now();
        let (weekday, rest) = now.split_once(", ").unwrap();
        assert!(weekday.ends_with("day"));
        assert_eq!(rest.len(), "2024-01-15 09:05:03".len());
    }
}
