//! Strict parsing and formatting for manually entered dates and times.
//!
//! The wire format for dates is exactly `DD-MM-YYYY`: two digits, two
//! digits, four digits, dash-separated. Anything else, including ISO
//! `YYYY-MM-DD` and unpadded components, is rejected. Times are `HH:MM`.

use chrono::{Datelike, NaiveDate, NaiveTime};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DateParseError {
    #[error("expected DD-MM-YYYY")]
    MalformedDate,
    #[error("expected HH:MM")]
    MalformedTime,
    #[error("no such date")]
    NoSuchDate,
    #[error("no such time")]
    NoSuchTime,
}

pub fn parse_date(text: &str) -> Result<NaiveDate, DateParseError> {
    let mut parts = text.split('-');
    let (Some(day), Some(month), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(DateParseError::MalformedDate);
    };

    if day.len() != 2 || month.len() != 2 || year.len() != 4 {
        return Err(DateParseError::MalformedDate);
    }

    let day = digits(day).ok_or(DateParseError::MalformedDate)?;
    let month = digits(month).ok_or(DateParseError::MalformedDate)?;
    let year = digits(year).ok_or(DateParseError::MalformedDate)?;

    if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
        return Err(DateParseError::NoSuchDate);
    }

    // from_ymd_opt applies month lengths and leap-year rules.
    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or(DateParseError::NoSuchDate)
}

pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}-{:02}-{:04}", date.day(), date.month(), date.year())
}

pub fn parse_time(text: &str) -> Result<NaiveTime, DateParseError> {
    let mut parts = text.split(':');
    let (Some(hour), Some(minute), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(DateParseError::MalformedTime);
    };

    if hour.len() != 2 || minute.len() != 2 {
        return Err(DateParseError::MalformedTime);
    }

    let hour = digits(hour).ok_or(DateParseError::MalformedTime)?;
    let minute = digits(minute).ok_or(DateParseError::MalformedTime)?;

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or(DateParseError::NoSuchTime)
}

pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

fn digits(component: &str) -> Option<u32> {
    if component.bytes().all(|b| b.is_ascii_digit()) {
        component.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn parse_valid_date() {
        assert_eq!(parse_date("08-04-2025"), Ok(date(2025, 4, 8)));
    }

    #[test]
    fn parse_rejects_day_out_of_range() {
        assert_eq!(parse_date("32-01-2025"), Err(DateParseError::NoSuchDate));
    }

    #[test]
    fn parse_rejects_zero_components() {
        assert_eq!(parse_date("00-00-2025"), Err(DateParseError::NoSuchDate));
    }

    #[test]
    fn parse_rejects_iso_order() {
        assert_eq!(parse_date("2025-04-08"), Err(DateParseError::MalformedDate));
    }

    #[test]
    fn parse_rejects_unpadded_components() {
        assert_eq!(parse_date("8-4-2025"), Err(DateParseError::MalformedDate));
    }

    #[test]
    fn parse_rejects_non_numeric_components() {
        assert_eq!(parse_date("ab-04-2025"), Err(DateParseError::MalformedDate));
    }

    #[test]
    fn parse_rejects_wrong_token_count() {
        assert_eq!(parse_date("08-04"), Err(DateParseError::MalformedDate));
        assert_eq!(parse_date("08-04-2025-01"), Err(DateParseError::MalformedDate));
    }

    #[test]
    fn parse_rejects_surrounding_whitespace() {
        assert_eq!(parse_date(" 08-04-2025"), Err(DateParseError::MalformedDate));
    }

    #[test]
    fn parse_rejects_nonexistent_day_in_month() {
        assert_eq!(parse_date("31-04-2025"), Err(DateParseError::NoSuchDate));
    }

    #[test]
    fn parse_applies_leap_year_rules() {
        assert_eq!(parse_date("29-02-2024"), Ok(date(2024, 2, 29)));
        assert_eq!(parse_date("29-02-2025"), Err(DateParseError::NoSuchDate));
    }

    #[test]
    fn format_zero_pads_day_and_month() {
        assert_eq!(format_date(date(2025, 4, 8)), "08-04-2025");
    }

    #[test]
    fn round_trip_leap_day() {
        let leap = date(2024, 2, 29);
        assert_eq!(parse_date(&format_date(leap)), Ok(leap));
    }

    #[test]
    fn parse_valid_time() {
        assert_eq!(parse_time("09:30"), Ok(NaiveTime::from_hms_opt(9, 30, 0).unwrap()));
    }

    #[test]
    fn parse_time_rejects_unpadded_hour() {
        assert_eq!(parse_time("9:30"), Err(DateParseError::MalformedTime));
    }

    #[test]
    fn parse_time_rejects_out_of_range() {
        assert_eq!(parse_time("24:00"), Err(DateParseError::NoSuchTime));
        assert_eq!(parse_time("12:60"), Err(DateParseError::NoSuchTime));
    }

    #[test]
    fn parse_time_rejects_missing_minutes() {
        assert_eq!(parse_time("12"), Err(DateParseError::MalformedTime));
    }

    #[test]
    fn format_time_is_zero_padded() {
        assert_eq!(format_time(NaiveTime::from_hms_opt(7, 5, 0).unwrap()), "07:05");
    }

    proptest! {
        #[test]
        fn round_trip_any_valid_date(year in 1900i32..2200, month in 1u32..=12, day in 1u32..=31) {
            if let Some(d) = NaiveDate::from_ymd_opt(year, month, day) {
                prop_assert_eq!(parse_date(&format_date(d)), Ok(d));
            }
        }

        #[test]
        fn round_trip_any_valid_time(hour in 0u32..24, minute in 0u32..60) {
            let t = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
            prop_assert_eq!(parse_time(&format_time(t)), Ok(t));
        }
    }
}
