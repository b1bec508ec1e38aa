//! Utilities for date formatting
//!
//! Provides consistent date formatting across the application

use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};

/// Today's date in the visitor's time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// "2024-03-15" -> "15 Mar 2024"
pub fn format_day(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

/// Format a UTC timestamp as its calendar date, e.g. "15 Mar 2024"
pub fn format_date(datetime: &DateTime<Utc>) -> String {
    format_day(datetime.date_naive())
}

/// "1 – 4 Mar 2024", "28 Feb – 2 Mar 2024" or "30 Dec 2024 – 2 Jan 2025"
pub fn format_stay(check_in: NaiveDate, check_out: NaiveDate) -> String {
    if check_in.year() != check_out.year() {
        format!("{} – {}", format_day(check_in), format_day(check_out))
    } else if check_in.month() != check_out.month() {
        format!(
            "{} – {}",
            check_in.format("%-d %b"),
            format_day(check_out)
        )
    } else {
        format!("{} – {}", check_in.day(), format_day(check_out))
    }
}

/// "March 2024"
pub fn format_month(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_format_day() {
        assert_eq!(format_day(d(2024, 3, 15)), "15 Mar 2024");
        assert_eq!(format_day(d(2024, 3, 5)), "5 Mar 2024");
    }

    #[test]
    fn test_format_date() {
        let dt = "2024-03-15T14:02:26.123Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(format_date(&dt), "15 Mar 2024");
    }

    #[test]
    fn test_format_stay() {
        assert_eq!(format_stay(d(2024, 3, 1), d(2024, 3, 4)), "1 – 4 Mar 2024");
        assert_eq!(format_stay(d(2024, 2, 28), d(2024, 3, 2)), "28 Feb – 2 Mar 2024");
        assert_eq!(
            format_stay(d(2024, 12, 30), d(2025, 1, 2)),
            "30 Dec 2024 – 2 Jan 2025"
        );
    }

    #[test]
    fn test_format_month() {
        assert_eq!(format_month(d(2024, 3, 1)), "March 2024");
    }
}
