use booking_engine::parser::{parse, parse_office_hours, parse_request};
use booking_engine::BookingError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

fn datetime(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

// ============================================================================
// Whole input
// ============================================================================

#[test]
fn parse_office_hours_and_requests_in_input_order() {
    let input = "0900 1730\n\
                 2011-03-17 10:17:06 EMP001\n\
                 2011-03-21 09:00 2\n\
                 2011-03-16 12:34:56 EMP002\n\
                 2011-03-22 14:00 3\n";

    let parsed = parse(input).unwrap();

    assert_eq!(parsed.office_hours.open(), time(9, 0));
    assert_eq!(parsed.office_hours.close(), time(17, 30));
    assert_eq!(parsed.requests.len(), 2);

    let first = &parsed.requests[0];
    assert_eq!(first.employee_id(), "EMP001");
    assert_eq!(first.submitted_at(), datetime("2011-03-17 10:17:06"));
    assert_eq!(first.meeting_start(), datetime("2011-03-21 09:00:00"));
    assert_eq!(first.meeting_end(), datetime("2011-03-21 11:00:00"));

    let second = &parsed.requests[1];
    assert_eq!(second.employee_id(), "EMP002");
    assert_eq!(second.meeting_end(), datetime("2011-03-22 17:00:00"));
}

#[test]
fn parse_empty_input_fails() {
    assert!(matches!(parse(""), Err(BookingError::EmptyInput)));
}

#[test]
fn parse_blank_lines_only_fails() {
    assert!(matches!(parse("\n\n"), Err(BookingError::EmptyInput)));
}

#[test]
fn parse_unpaired_submission_line_fails() {
    let input = "0900 1730\n\
                 2011-03-17 10:17:06 EMP001\n\
                 2011-03-21 09:00 2\n\
                 2011-03-16 12:34:56 EMP002\n";

    let err = parse(input).unwrap_err();

    assert!(
        matches!(err, BookingError::UnpairedRequest { line: 4 }),
        "got {err:?}"
    );
}

#[test]
fn parse_blank_line_between_requests_fails() {
    let input = "0900 1730\n\
                 2011-03-17 10:17:06 EMP001\n\
                 \n\
                 2011-03-21 09:00 2\n";

    assert!(parse(input).is_err());
}

#[test]
fn parse_meeting_crossing_midnight_rolls_date() {
    let input = "0900 1730\n\
                 2011-03-17 10:17:06 EMP001\n\
                 2011-03-21 23:00 2\n";

    let parsed = parse(input).unwrap();

    assert_eq!(
        parsed.requests[0].meeting_end(),
        datetime("2011-03-22 01:00:00")
    );
}

// ============================================================================
// Office hours line
// ============================================================================

#[test]
fn office_hours_wrong_width_fails() {
    for line in ["900 1730", "0900 17300", "09001730", " 0900 1730"] {
        let result = parse_office_hours(line, 1);
        assert!(
            matches!(result, Err(BookingError::OfficeHours { line: 1, .. })),
            "{line:?} gave {result:?}"
        );
    }
}

#[test]
fn office_hours_with_colon_fails() {
    assert!(parse_office_hours("09:0 1730", 1).is_err());
}

#[test]
fn office_hours_out_of_range_fails() {
    let result = parse_office_hours("0900 2500", 1);
    assert!(
        matches!(
            result,
            Err(BookingError::InvalidNumber { field: "time", .. })
        ),
        "got {result:?}"
    );
}

#[test]
fn office_hours_closing_before_opening_fails() {
    let result = parse_office_hours("1730 0900", 1);
    assert!(
        matches!(result, Err(BookingError::OfficeHours { .. })),
        "got {result:?}"
    );
}

// ============================================================================
// Submission and meeting lines
// ============================================================================

#[test]
fn submission_with_short_seconds_fails() {
    let result = parse_request("2011-03-16 09:28:3 EMP003", "2011-03-21 09:30 1", 2);
    assert!(
        matches!(result, Err(BookingError::Submission { line: 2, .. })),
        "got {result:?}"
    );
}

#[test]
fn submission_with_long_employee_id_fails() {
    // Width is right, but the date lost a digit to the id.
    let result = parse_request("2011-03-16 09:28:3 EMP0031", "2011-03-21 09:30 1", 2);
    assert!(matches!(result, Err(BookingError::Submission { .. })));
}

#[test]
fn submission_with_slashed_date_fails() {
    let result = parse_request("2011/03/16 09:28:23 EMP003", "2011-03-21 09:30 1", 2);
    assert!(matches!(result, Err(BookingError::Submission { .. })));
}

#[test]
fn meeting_with_unpadded_hour_fails() {
    let result = parse_request("2011-03-16 09:28:23 EMP003", "2011-03-21 9:30 1", 2);
    assert!(
        matches!(result, Err(BookingError::Meeting { line: 3, .. })),
        "got {result:?}"
    );
}

#[test]
fn meeting_with_non_numeric_duration_fails() {
    let result = parse_request("2011-03-16 09:28:23 EMP003", "2011-03-21 09:30 x", 2);
    assert!(matches!(result, Err(BookingError::Meeting { .. })));
}

#[test]
fn meeting_with_impossible_date_fails() {
    let result = parse_request("2011-03-16 09:28:23 EMP003", "2011-02-30 09:30 1", 2);
    assert!(
        matches!(
            result,
            Err(BookingError::InvalidNumber {
                line: 3,
                field: "date",
                ..
            })
        ),
        "got {result:?}"
    );
}

#[test]
fn request_parses_all_fields() {
    let request = parse_request("2011-03-16 09:28:23 EMP003", "2011-03-21 09:30 1", 2).unwrap();

    assert_eq!(request.employee_id(), "EMP003");
    assert_eq!(request.submitted_at(), datetime("2011-03-16 09:28:23"));
    assert_eq!(
        request.day(),
        NaiveDate::from_ymd_opt(2011, 3, 21).unwrap()
    );
    assert_eq!(request.meeting_end(), datetime("2011-03-21 10:30:00"));
}

#[test]
fn error_messages_name_the_line() {
    let err = parse("0900 1730\n2011-03-16 09:28:3 EMP003\n2011-03-21 09:30 1\n").unwrap_err();
    assert!(
        err.to_string().starts_with("submission error at line 2"),
        "got {err}"
    );
}
