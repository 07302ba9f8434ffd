// src/events/tests/validators_tests.rs

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use chrono::NaiveDate;

    use crate::common::{ensure_valid, parse_json, NumericInput, Validator};
    use crate::events::models::*;
    use crate::events::validators::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    fn valid_form() -> EventForm {
        EventForm {
            name: "Rust Meetup".to_string(),
            date: "2026-06-20".to_string(),
            start_time: "10:00".to_string(),
            end_time: "12:30".to_string(),
            venue: "Main Auditorium".to_string(),
            description: "An evening of talks about systems programming.".to_string(),
            capacity: Some(NumericInput::Number(150.0)),
        }
    }

    fn valid_payload() -> EventPayload {
        EventPayload {
            title: "Tech Fest".to_string(),
            description: "Annual technical festival with workshops.".to_string(),
            venue: "Block C".to_string(),
            start_date: "2026-07-01T09:00".to_string(),
            end_date: Some("2026-07-03T18:00".to_string()),
            registration_deadline: Some("2026-06-28".to_string()),
            capacity: Some(NumericInput::Number(500.0)),
        }
    }

    // ============================================================================
    // Event form
    // ============================================================================

    #[test]
    fn test_event_form_valid_data() {
        let result = EventFormValidator::as_of(today()).validate(&valid_form());
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_event_form_end_time_before_start() {
        let form = EventForm {
            start_time: "10:00".to_string(),
            end_time: "09:00".to_string(),
            ..valid_form()
        };

        let result = EventFormValidator::as_of(today()).validate(&form);
        assert!(!result.is_valid());
        assert_eq!(result.error("endTime"), Some(END_TIME_AFTER_START));
        assert_eq!(result.error("startTime"), None);
    }

    #[test]
    fn test_event_form_equal_times_rejected() {
        let form = EventForm {
            start_time: "10:00".to_string(),
            end_time: "10:00".to_string(),
            ..valid_form()
        };

        let result = EventFormValidator::as_of(today()).validate(&form);
        assert_eq!(result.error("endTime"), Some(END_TIME_AFTER_START));
    }

    #[test]
    fn test_event_form_ordering_skipped_when_time_invalid() {
        let form = EventForm {
            start_time: "9:00".to_string(),
            end_time: "08:00".to_string(),
            ..valid_form()
        };

        let result = EventFormValidator::as_of(today()).validate(&form);
        assert_eq!(
            result.error("startTime"),
            Some("Please enter a valid time in HH:MM format")
        );
        assert_eq!(result.error("endTime"), None);
    }

    #[test]
    fn test_event_form_reports_every_failing_field() {
        let form = EventForm {
            name: "Hi".to_string(),
            date: "2026-06-14".to_string(),
            start_time: String::new(),
            end_time: "25:00".to_string(),
            venue: String::new(),
            description: "Too short".to_string(),
            capacity: Some(NumericInput::from("0")),
        };

        let result = EventFormValidator::as_of(today()).validate(&form);
        assert!(!result.is_valid());
        assert_eq!(
            result.error("name"),
            Some("Event name must be at least 3 characters")
        );
        assert_eq!(result.error("date"), Some("Date cannot be in the past"));
        assert_eq!(result.error("startTime"), Some("Time is required"));
        assert_eq!(
            result.error("endTime"),
            Some("Please enter a valid time in HH:MM format")
        );
        assert_eq!(result.error("venue"), Some("Venue is required"));
        assert_eq!(
            result.error("description"),
            Some("Description must be at least 10 characters")
        );
        assert_eq!(result.error("capacity"), Some("Capacity must be at least 1"));
        assert_eq!(result.errors().len(), 7);
    }

    #[test]
    fn test_event_form_capacity_only_checked_when_supplied() {
        let validator = EventFormValidator::as_of(today());

        let without = EventForm {
            capacity: None,
            ..valid_form()
        };
        assert!(validator.validate(&without).is_valid());

        let blank = EventForm {
            capacity: Some(NumericInput::from("  ")),
            ..valid_form()
        };
        assert!(validator.validate(&blank).is_valid());

        let fractional = EventForm {
            capacity: Some(NumericInput::from("10.5")),
            ..valid_form()
        };
        assert_eq!(
            validator.validate(&fractional).error("capacity"),
            Some("Capacity must be a whole number")
        );

        let huge = EventForm {
            capacity: Some(NumericInput::Number(10001.0)),
            ..valid_form()
        };
        assert_eq!(
            validator.validate(&huge).error("capacity"),
            Some("Capacity must be at most 10000")
        );
    }

    #[test]
    fn test_event_form_deserializes_camel_case() {
        let form: EventForm = parse_json(
            r#"{
                "name": "Hack Night",
                "date": "2026-06-15",
                "startTime": "18:00",
                "endTime": "23:59",
                "venue": "Lab 4",
                "description": "Bring a laptop and an idea.",
                "capacity": "40"
            }"#,
        )
        .unwrap();

        assert_eq!(form.start_time, "18:00");
        assert_eq!(form.capacity, Some(NumericInput::Text("40".to_string())));
        assert!(EventFormValidator::as_of(today()).validate(&form).is_valid());
    }

    #[test]
    fn test_event_form_is_idempotent() {
        let validator = EventFormValidator::as_of(today());
        let form = EventForm {
            end_time: "08:00".to_string(),
            ..valid_form()
        };
        assert_eq!(validator.validate(&form), validator.validate(&form));
    }

    // ============================================================================
    // Event payload
    // ============================================================================

    #[test]
    fn test_event_payload_valid_data() {
        let result = EventPayloadValidator::as_of(today()).validate(&valid_payload());
        assert!(result.is_valid(), "unexpected errors: {:?}", result.errors());
    }

    #[test]
    fn test_event_payload_past_start_date() {
        let payload = EventPayload {
            start_date: "2026-06-01".to_string(),
            end_date: None,
            registration_deadline: None,
            ..valid_payload()
        };

        let result = EventPayloadValidator::as_of(today()).validate(&payload);
        assert_eq!(result.error("startDate"), Some(START_DATE_IN_PAST));
    }

    #[test]
    fn test_event_payload_start_today_is_allowed() {
        let payload = EventPayload {
            start_date: "2026-06-15T08:00".to_string(),
            end_date: None,
            registration_deadline: None,
            ..valid_payload()
        };

        assert!(EventPayloadValidator::as_of(today()).validate(&payload).is_valid());
    }

    #[test]
    fn test_event_payload_end_before_start() {
        let payload = EventPayload {
            end_date: Some("2026-06-30".to_string()),
            ..valid_payload()
        };

        let result = EventPayloadValidator::as_of(today()).validate(&payload);
        assert_eq!(result.error("endDate"), Some(END_DATE_BEFORE_START));
    }

    #[test]
    fn test_event_payload_same_day_end_compares_timestamps() {
        let validator = EventPayloadValidator::as_of(today());

        let earlier = EventPayload {
            end_date: Some("2026-07-01T08:00".to_string()),
            ..valid_payload()
        };
        assert_eq!(
            validator.validate(&earlier).error("endDate"),
            Some(END_DATE_BEFORE_START)
        );

        // A bare day on the start day is not before the start
        let same_day = EventPayload {
            end_date: Some("2026-07-01".to_string()),
            ..valid_payload()
        };
        assert!(validator.validate(&same_day).is_valid());
    }

    #[test]
    fn test_event_payload_deadline_after_start() {
        let payload = EventPayload {
            registration_deadline: Some("2026-07-02".to_string()),
            ..valid_payload()
        };

        let result = EventPayloadValidator::as_of(today()).validate(&payload);
        assert_eq!(result.error("registrationDeadline"), Some(DEADLINE_AFTER_START));
    }

    #[test]
    fn test_event_payload_unparseable_dates() {
        let payload = EventPayload {
            start_date: "soon".to_string(),
            end_date: Some("later".to_string()),
            registration_deadline: Some("2026-02-31".to_string()),
            ..valid_payload()
        };

        let result = EventPayloadValidator::as_of(today()).validate(&payload);
        assert_eq!(result.error("startDate"), Some("Start date must be a valid date"));
        assert_eq!(result.error("endDate"), Some("End date must be a valid date"));
        assert_eq!(
            result.error("registrationDeadline"),
            Some("Registration deadline must be a valid date")
        );
    }

    #[test]
    fn test_event_payload_missing_start_skips_range_checks() {
        let payload = EventPayload {
            start_date: "  ".to_string(),
            end_date: Some("2020-01-01".to_string()),
            ..valid_payload()
        };

        let result = EventPayloadValidator::as_of(today()).validate(&payload);
        assert_eq!(result.error("startDate"), Some("Start date is required"));
        assert_eq!(result.error("endDate"), None);
    }

    #[test]
    fn test_event_payload_rejection_maps_to_bad_request() {
        let payload: EventPayload = parse_json(
            r#"{
                "title": "Past Event",
                "description": "This one already happened, sadly.",
                "venue": "Hall A",
                "startDate": "2026-01-10",
                "endDate": "2026-01-09"
            }"#,
        )
        .unwrap();

        let result = EventPayloadValidator::as_of(today()).validate(&payload);
        let err = ensure_valid(result, "create_event").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }
}
