use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("regex compiles"));

// Hour-only forms like "2pm" or "7 AM"; chrono needs an explicit minute.
static HOUR_AMPM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(\d{1,2})\s*([ap])\.?m\.?$").expect("regex compiles"));

// Tried in order; formats with an AM/PM marker must come first so that
// "2:00 PM" is not cut short by the plain 24-hour patterns.
const TIME_FORMATS: [&str; 4] = ["%I:%M %p", "%I:%M%p", "%H:%M:%S", "%H:%M"];

const DATE_FORMATS: [&str; 8] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m/%d/%y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Sort key for the date column. Parsed days order chronologically and sort
/// ahead of unparseable values, which order lexicographically among
/// themselves. The displayed text is always the raw input, never this key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum DateKey {
    Day(NaiveDate),
    Raw(String),
}

/// Sort key for the time column, clock order with a raw-string fallback.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimeKey {
    Clock(NaiveTime),
    Raw(String),
}

pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let trimmed = raw.trim();
    if let Some(time) = TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
    {
        return Some(time);
    }

    let caps = HOUR_AMPM.captures(trimmed)?;
    let hour: u32 = caps[1].parse().ok()?;
    if !(1..=12).contains(&hour) {
        return None;
    }
    let hour24 = match caps[2].to_ascii_lowercase().as_str() {
        "p" => hour % 12 + 12,
        _ => hour % 12,
    };
    NaiveTime::from_hms_opt(hour24, 0, 0)
}

/// Canonical 12-hour display form with a leading zero and uppercase marker,
/// e.g. "14:00" -> "02:00 PM". Values that do not parse as a time of day
/// pass through unchanged; a bad time never aborts the build.
pub fn normalize_time(raw: &str) -> String {
    match parse_time(raw) {
        Some(time) => time.format("%I:%M %p").to_string(),
        None => raw.to_string(),
    }
}

pub fn time_key(display: &str) -> TimeKey {
    match parse_time(display) {
        Some(time) => TimeKey::Clock(time),
        None => TimeKey::Raw(display.to_string()),
    }
}

pub fn date_key(raw: &str) -> DateKey {
    let trimmed = raw.trim();
    for format in DATE_FORMATS {
        if let Ok(day) = NaiveDate::parse_from_str(trimmed, format) {
            return DateKey::Day(day);
        }
    }
    // Values like "Fri, 2024-01-05" still carry a usable day.
    if let Some(found) = ISO_DATE.find(trimmed)
        && let Ok(day) = NaiveDate::parse_from_str(found.as_str(), "%Y-%m-%d")
    {
        return DateKey::Day(day);
    }
    DateKey::Raw(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_time_24_hour() {
        assert_eq!(normalize_time("14:00"), "02:00 PM");
        assert_eq!(normalize_time("9:05"), "09:05 AM");
        assert_eq!(normalize_time("00:30"), "12:30 AM");
    }

    #[test]
    fn test_normalize_time_12_hour() {
        assert_eq!(normalize_time("2:00 PM"), "02:00 PM");
        assert_eq!(normalize_time("9:00 am"), "09:00 AM");
        assert_eq!(normalize_time("12:15 pm"), "12:15 PM");
    }

    #[test]
    fn test_normalize_time_compact_forms() {
        assert_eq!(normalize_time("2pm"), "02:00 PM");
        assert_eq!(normalize_time("7 AM"), "07:00 AM");
        assert_eq!(normalize_time(" 6:30PM "), "06:30 PM");
    }

    #[test]
    fn test_normalize_time_unparseable_passes_through() {
        assert_eq!(normalize_time("noonish"), "noonish");
        assert_eq!(normalize_time(""), "");
        assert_eq!(normalize_time("25:99"), "25:99");
    }

    #[test]
    fn test_time_key_clock_order() {
        assert!(time_key("09:00 AM") < time_key("02:00 PM"));
        assert!(time_key("12:00 AM") < time_key("12:00 PM"));
        // Unparseable values sort after every real clock time.
        assert!(time_key("11:59 PM") < time_key("noonish"));
    }

    #[test]
    fn test_date_key_formats() {
        let day = DateKey::Day(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(date_key("2024-01-05"), day);
        assert_eq!(date_key("01/05/2024"), day);
        assert_eq!(date_key("Jan 5, 2024"), day);
        assert_eq!(date_key("5 January 2024"), day);
    }

    #[test]
    fn test_date_key_embedded_iso_date() {
        let day = DateKey::Day(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(date_key("Fri, 2024-01-05"), day);
    }

    #[test]
    fn test_date_key_raw_fallback_orders_last() {
        assert_eq!(date_key("someday"), DateKey::Raw("someday".to_string()));
        assert!(date_key("2024-01-05") < date_key("2024-01-06"));
        assert!(date_key("2099-12-31") < date_key("aaa"));
        assert!(date_key("aaa") < date_key("bbb"));
    }
}
