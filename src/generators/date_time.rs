use std::fmt::Write;

use chrono::{DateTime as Instant, Utc};
use rand::Rng;

use crate::extension::{DateTimeExtension, Extension};
use crate::helper::random_element;

const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

const CENTURIES: &[&str] = &[
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV",
    "XV", "XVI", "XVII", "XVIII", "XIX", "XX", "XXI",
];

const TIMEZONES: &[&str] = &[
    "Africa/Cairo", "Africa/Johannesburg", "Africa/Lagos", "America/Argentina/Buenos_Aires",
    "America/Chicago", "America/Los_Angeles", "America/Mexico_City", "America/New_York",
    "America/Sao_Paulo", "America/Toronto", "Asia/Dubai", "Asia/Kolkata", "Asia/Seoul",
    "Asia/Shanghai", "Asia/Singapore", "Asia/Tokyo", "Atlantic/Reykjavik", "Australia/Sydney",
    "Europe/Berlin", "Europe/Istanbul", "Europe/London", "Europe/Madrid", "Europe/Moscow",
    "Europe/Paris", "Pacific/Auckland", "Pacific/Honolulu", "UTC",
];

/// Random instants, by default between the Unix epoch and now.
#[derive(Debug, Default, Clone, Copy)]
pub struct DateTime;

impl DateTime {
    pub fn new() -> Self {
        Self
    }

    /// The Unix epoch (`DateTime<Utc>` defaults to it).
    fn epoch() -> Instant<Utc> {
        Instant::<Utc>::default()
    }

    /// Formats with `format`, falling back to `fallback` if the pattern is invalid.
    fn format(instant: Instant<Utc>, format: &str, fallback: &str) -> String {
        let mut out = String::new();
        if write!(out, "{}", instant.format(format)).is_ok() {
            return out;
        }
        instant.format(fallback).to_string()
    }
}

impl Extension for DateTime {}

impl DateTimeExtension for DateTime {
    fn date_time(&self, until: Option<Instant<Utc>>) -> Instant<Utc> {
        self.date_time_between(Self::epoch(), until.unwrap_or_else(Utc::now))
    }

    fn date_time_between(&self, from: Instant<Utc>, until: Instant<Utc>) -> Instant<Utc> {
        let (lo, hi) = if from <= until { (from, until) } else { (until, from) };
        let seconds = rand::thread_rng().gen_range(lo.timestamp()..=hi.timestamp());
        Instant::<Utc>::from_timestamp(seconds, 0).unwrap_or(lo)
    }

    fn unix_time(&self, until: Option<Instant<Utc>>) -> i64 {
        self.date_time(until).timestamp()
    }

    fn date(&self, format: &str, until: Option<Instant<Utc>>) -> String {
        Self::format(self.date_time(until), format, DEFAULT_DATE_FORMAT)
    }

    fn time(&self, format: &str, until: Option<Instant<Utc>>) -> String {
        Self::format(self.date_time(until), format, DEFAULT_TIME_FORMAT)
    }

    fn am_pm(&self) -> &'static str {
        random_element(&["am", "pm"])
    }

    fn day_of_month(&self) -> String {
        format!("{:02}", rand::thread_rng().gen_range(1..=31))
    }

    fn day_of_week(&self) -> &'static str {
        random_element(&[
            "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
        ])
    }

    fn month(&self) -> String {
        format!("{:02}", rand::thread_rng().gen_range(1..=12))
    }

    fn month_name(&self) -> &'static str {
        random_element(&[
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December",
        ])
    }

    fn year(&self) -> String {
        self.date("%Y", None)
    }

    fn century(&self) -> &'static str {
        random_element(CENTURIES)
    }

    fn timezone(&self) -> &'static str {
        random_element(TIMEZONES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn between_respects_bounds_in_either_order() {
        let generator = DateTime::new();
        let a = Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2001, 12, 31, 23, 59, 59).unwrap();
        for _ in 0..20 {
            let x = generator.date_time_between(b, a);
            assert!(a <= x && x <= b);
        }
    }

    #[test]
    fn date_time_never_exceeds_until() {
        let until = Utc.with_ymd_and_hms(1999, 6, 1, 12, 0, 0).unwrap();
        let x = DateTime::new().date_time(Some(until));
        assert!(x <= until);
        assert!(x >= DateTime::epoch());
    }

    #[test]
    fn invalid_format_falls_back() {
        let out = DateTime::new().date("%Q", None);
        assert_eq!(out.len(), "2000-01-01".len());
    }

    #[test]
    fn calendar_parts_are_padded() {
        let generator = DateTime::new();
        assert_eq!(generator.day_of_month().len(), 2);
        assert_eq!(generator.month().len(), 2);
        assert!(CENTURIES.contains(&generator.century()));
    }
}
