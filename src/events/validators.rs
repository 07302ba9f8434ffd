// src/events/validators.rs

use chrono::NaiveDate;
use std::cmp::Ordering;
use tracing::debug;

use super::models::*;
use crate::common::{AggregateResult, Blank, NumericInput, ValidationResult, Validator};
use crate::rules::temporal::today as local_today;
use crate::rules::{
    parse_date_value, time_to_minutes, validate_future_date_as_of, validate_number,
    validate_text_length, validate_time, DateValue, LengthOptions, NumberOptions,
};

pub const END_TIME_AFTER_START: &str = "End time must be after start time";
pub const START_DATE_IN_PAST: &str = "Start date cannot be in the past";
pub const END_DATE_BEFORE_START: &str = "End date cannot be before start date";
pub const DEADLINE_AFTER_START: &str = "Registration deadline cannot be after the event start date";

const MIN_CAPACITY: f64 = 1.0;
const MAX_CAPACITY: f64 = 10000.0;

fn name_bounds() -> LengthOptions {
    LengthOptions::required(3, 100)
}

fn venue_bounds() -> LengthOptions {
    LengthOptions::required(3, 200)
}

fn description_bounds() -> LengthOptions {
    LengthOptions::required(10, 2000)
}

// ============================================================================
// Event Form Validator
// ============================================================================

/// Client-side rules for the event creation form.
///
/// "Today" is read from the local clock on every call unless pinned with
/// [`EventFormValidator::as_of`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EventFormValidator {
    today: Option<NaiveDate>,
}

impl EventFormValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_of(today: NaiveDate) -> Self {
        Self { today: Some(today) }
    }
}

impl Validator<EventForm> for EventFormValidator {
    fn validate(&self, data: &EventForm) -> AggregateResult {
        let mut result = AggregateResult::new();
        let today = self.today.unwrap_or_else(local_today);

        result.record(
            "name",
            validate_text_length(&data.name, "Event name", name_bounds()),
        );
        result.record("date", validate_future_date_as_of(&data.date, today));

        let start_ok = result.record("startTime", validate_time(&data.start_time));
        let end_ok = result.record("endTime", validate_time(&data.end_time));

        // Ordering is only meaningful once both times parse
        if start_ok && end_ok {
            if let (Some(start), Some(end)) = (
                time_to_minutes(&data.start_time),
                time_to_minutes(&data.end_time),
            ) {
                if end <= start {
                    result.add_error("endTime", END_TIME_AFTER_START);
                }
            }
        }

        result.record(
            "venue",
            validate_text_length(&data.venue, "Venue", venue_bounds()),
        );
        result.record(
            "description",
            validate_text_length(&data.description, "Description", description_bounds()),
        );

        if let Some(capacity) = supplied(data.capacity.as_ref()) {
            result.record("capacity", validate_capacity(capacity));
        }

        if !result.is_valid() {
            debug!(
                form = "event",
                error_count = result.errors().len(),
                "Event form failed validation"
            );
        }

        result
    }
}

pub fn validate_event_form(form: &EventForm) -> AggregateResult {
    EventFormValidator::new().validate(form)
}

// ============================================================================
// Event Payload Validator
// ============================================================================

/// Rules the API applies before persisting an event.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventPayloadValidator {
    today: Option<NaiveDate>,
}

impl EventPayloadValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_of(today: NaiveDate) -> Self {
        Self { today: Some(today) }
    }
}

impl Validator<EventPayload> for EventPayloadValidator {
    fn validate(&self, data: &EventPayload) -> AggregateResult {
        let mut result = AggregateResult::new();
        let today = self.today.unwrap_or_else(local_today);

        result.record(
            "title",
            validate_text_length(&data.title, "Title", name_bounds()),
        );
        result.record(
            "description",
            validate_text_length(&data.description, "Description", description_bounds()),
        );
        result.record(
            "venue",
            validate_text_length(&data.venue, "Venue", venue_bounds()),
        );

        // Validate start date; keep the parsed value for the range checks even if it is in the past
        let start = if data.start_date.trim().is_empty() {
            result.add_error("startDate", "Start date is required");
            None
        } else {
            match parse_date_value(&data.start_date) {
                None => {
                    result.add_error("startDate", "Start date must be a valid date");
                    None
                }
                Some(start) => {
                    if start.date() < today {
                        result.add_error("startDate", START_DATE_IN_PAST);
                    }
                    Some(start)
                }
            }
        };

        // Validate end date if provided
        if let Some(end_date) = supplied_text(data.end_date.as_deref()) {
            match parse_date_value(end_date) {
                None => result.add_error("endDate", "End date must be a valid date"),
                Some(end) => {
                    if lands_on(start.as_ref(), &end, Ordering::Less) {
                        result.add_error("endDate", END_DATE_BEFORE_START);
                    }
                }
            }
        }

        // Validate registration deadline if provided
        if let Some(deadline) = supplied_text(data.registration_deadline.as_deref()) {
            match parse_date_value(deadline) {
                None => result.add_error(
                    "registrationDeadline",
                    "Registration deadline must be a valid date",
                ),
                Some(deadline) => {
                    if lands_on(start.as_ref(), &deadline, Ordering::Greater) {
                        result.add_error("registrationDeadline", DEADLINE_AFTER_START);
                    }
                }
            }
        }

        if let Some(capacity) = supplied(data.capacity.as_ref()) {
            result.record("capacity", validate_capacity(capacity));
        }

        if !result.is_valid() {
            debug!(
                form = "event_payload",
                title = %data.title,
                error_count = result.errors().len(),
                "Event payload failed validation"
            );
        }

        result
    }
}

pub fn validate_event_payload(payload: &EventPayload) -> AggregateResult {
    EventPayloadValidator::new().validate(payload)
}

// ============================================================================
// Helper Functions
// ============================================================================

fn validate_capacity(capacity: &NumericInput) -> ValidationResult {
    validate_number(
        Some(capacity),
        "Capacity",
        NumberOptions::integer_between(MIN_CAPACITY, MAX_CAPACITY),
    )
}

fn supplied(value: Option<&NumericInput>) -> Option<&NumericInput> {
    value.filter(|v| !v.is_blank())
}

fn supplied_text(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_blank())
}

/// True when the start is known and `value` falls on the `side` of it.
fn lands_on(start: Option<&DateValue>, value: &DateValue, side: Ordering) -> bool {
    start.map_or(false, |start| value.compare(start) == side)
}
