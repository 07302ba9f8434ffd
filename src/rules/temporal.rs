// src/rules/temporal.rs

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

use crate::common::ValidationResult;

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$").expect("time pattern compiles")
});

const LOCAL_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// A parsed date field: either a bare calendar day or a local timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateValue {
    Day(NaiveDate),
    At(NaiveDateTime),
}

impl DateValue {
    pub fn date(&self) -> NaiveDate {
        match self {
            DateValue::Day(day) => *day,
            DateValue::At(at) => at.date(),
        }
    }

    /// Timestamps compare exactly; anything involving a bare day compares by day.
    pub fn compare(&self, other: &DateValue) -> Ordering {
        match (self, other) {
            (DateValue::At(a), DateValue::At(b)) => a.cmp(b),
            _ => self.date().cmp(&other.date()),
        }
    }
}

/// Parses `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM[:SS]` (local) or RFC 3339.
/// RFC 3339 values are moved into the local timezone.
pub fn parse_date_value(value: &str) -> Option<DateValue> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(day) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(DateValue::Day(day));
    }

    for format in LOCAL_DATETIME_FORMATS {
        if let Ok(at) = NaiveDateTime::parse_from_str(value, format) {
            return Some(DateValue::At(at));
        }
    }

    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|at| DateValue::At(at.with_timezone(&Local).naive_local()))
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn validate_date(date: &str) -> ValidationResult {
    if date.trim().is_empty() {
        return ValidationResult::fail("Date is required");
    }

    if parse_date_value(date).is_none() {
        return ValidationResult::fail("Please enter a valid date");
    }

    ValidationResult::ok()
}

pub fn validate_future_date(date: &str) -> ValidationResult {
    validate_future_date_as_of(date, today())
}

/// Today's date passes; only days strictly before `today` fail.
pub fn validate_future_date_as_of(date: &str, today: NaiveDate) -> ValidationResult {
    let result = validate_date(date);
    if !result.is_valid() {
        return result;
    }

    match parse_date_value(date) {
        Some(parsed) if parsed.date() >= today => ValidationResult::ok(),
        Some(_) => ValidationResult::fail("Date cannot be in the past"),
        None => ValidationResult::fail("Please enter a valid date"),
    }
}

pub fn validate_time(time: &str) -> ValidationResult {
    if time.trim().is_empty() {
        return ValidationResult::fail("Time is required");
    }

    if !TIME_RE.is_match(time) {
        return ValidationResult::fail("Please enter a valid time in HH:MM format");
    }

    ValidationResult::ok()
}

/// Minutes since midnight for a strict `HH:MM` value.
pub fn time_to_minutes(time: &str) -> Option<u32> {
    let captures = TIME_RE.captures(time)?;
    let hours: u32 = captures.get(1)?.as_str().parse().ok()?;
    let minutes: u32 = captures.get(2)?.as_str().parse().ok()?;
    Some(hours * 60 + minutes)
}
