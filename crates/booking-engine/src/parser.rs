//! Booking input parser -- converts raw text into office hours and requests.
//!
//! The input is line oriented:
//!
//! ```text
//! 0900 1730                      office open and close, 24h, no colon
//! 2011-03-17 10:17:06 EMP001     submission time and employee id
//! 2011-03-21 09:00 2             meeting start and duration in hours
//! ...                            further submission/meeting pairs
//! ```
//!
//! Every line has a fixed width. Each line is split into space-separated
//! tokens, the token count is checked, and every token is matched against a
//! layout of digit positions and literal separators before any number is
//! converted. Line numbers in errors are 1-based.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::booking::{BookingRequest, OfficeHours};
use crate::error::{BookingError, Result};

/// Width of an employee id in a submission line.
pub const EMPLOYEE_ID_WIDTH: usize = 6;

/// Width of the office hours line, `HHMM HHMM`.
pub const OFFICE_HOURS_WIDTH: usize = 9;

/// Width of a submission line, `YYYY-MM-DD HH:MM:SS EMPID`.
pub const SUBMISSION_WIDTH: usize = 20 + EMPLOYEE_ID_WIDTH;

/// Width of a meeting line, `YYYY-MM-DD HH:MM D`.
pub const MEETING_WIDTH: usize = 18;

// Token layouts: `9` marks an ASCII digit, anything else must match literally.
const CLOCK_LAYOUT: &str = "9999";
const DATE_LAYOUT: &str = "9999-99-99";
const SECONDS_LAYOUT: &str = "99:99:99";
const MINUTES_LAYOUT: &str = "99:99";
const DURATION_LAYOUT: &str = "9";

/// Office hours plus the requests in the order they appeared in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub office_hours: OfficeHours,
    pub requests: Vec<BookingRequest>,
}

/// Parse the whole input.
///
/// # Errors
///
/// Returns [`BookingError::EmptyInput`] when there are no lines, and a
/// line-specific variant for the first line that breaks the format. No
/// partial result is returned.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> Result<ParsedInput> {
    let lines = split_lines(input);
    let Some((header, body)) = lines.split_first() else {
        return Err(BookingError::EmptyInput);
    };

    let office_hours = parse_office_hours(header, 1)?;

    let mut requests = Vec::with_capacity(body.len() / 2);
    for (pair_idx, pair) in body.chunks(2).enumerate() {
        // Line 1 is the header; pair `n` starts at line 2 + 2n.
        let submission_line = 2 + pair_idx * 2;
        let [submission, meeting] = pair else {
            return Err(BookingError::UnpairedRequest {
                line: submission_line,
            });
        };
        requests.push(parse_request(submission, meeting, submission_line)?);
    }

    tracing::debug!(count = requests.len(), "parsed booking requests");
    Ok(ParsedInput {
        office_hours,
        requests,
    })
}

/// Split on `\n`, strip a trailing `\r` from each line and drop trailing empty lines.
fn split_lines(input: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = input
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Parse the `HHMM HHMM` office hours line.
pub fn parse_office_hours(line: &str, line_no: usize) -> Result<OfficeHours> {
    let err = |message: String| BookingError::OfficeHours {
        line: line_no,
        message,
    };

    check_width(line, OFFICE_HOURS_WIDTH).map_err(err)?;
    let [open, close] = tokens::<2>(line).map_err(err)?;
    for token in [open, close] {
        check_layout(token, CLOCK_LAYOUT).map_err(err)?;
    }

    let open = clock_time(open, line_no)?;
    let close = clock_time(close, line_no)?;
    OfficeHours::new(open, close).ok_or_else(|| {
        err(format!(
            "opening time {} is not before closing time {}",
            open.format("%H:%M"),
            close.format("%H:%M")
        ))
    })
}

/// Parse one submission line and the meeting line that follows it.
///
/// `line_no` is the line number of the submission line.
pub fn parse_request(submission: &str, meeting: &str, line_no: usize) -> Result<BookingRequest> {
    let (submitted_at, employee_id) = parse_submission(submission, line_no)?;
    let (meeting_start, hours) = parse_meeting(meeting, line_no + 1)?;
    Ok(BookingRequest::new(
        employee_id,
        submitted_at,
        meeting_start,
        Duration::hours(hours),
    ))
}

fn parse_submission(line: &str, line_no: usize) -> Result<(NaiveDateTime, &str)> {
    let err = |message: String| BookingError::Submission {
        line: line_no,
        message,
    };

    check_width(line, SUBMISSION_WIDTH).map_err(err)?;
    let [date, time, employee_id] = tokens::<3>(line).map_err(err)?;
    check_layout(date, DATE_LAYOUT).map_err(err)?;
    check_layout(time, SECONDS_LAYOUT).map_err(err)?;
    if employee_id.chars().count() != EMPLOYEE_ID_WIDTH {
        return Err(err(format!(
            "employee id '{employee_id}' must be {EMPLOYEE_ID_WIDTH} characters"
        )));
    }

    let date = calendar_date(date, line_no)?;
    let time = time_of_day(
        number(&time[0..2], "hour", line_no)?,
        number(&time[3..5], "minute", line_no)?,
        number(&time[6..8], "second", line_no)?,
        time,
        line_no,
    )?;
    Ok((date.and_time(time), employee_id))
}

fn parse_meeting(line: &str, line_no: usize) -> Result<(NaiveDateTime, i64)> {
    let err = |message: String| BookingError::Meeting {
        line: line_no,
        message,
    };

    check_width(line, MEETING_WIDTH).map_err(err)?;
    let [date, time, duration] = tokens::<3>(line).map_err(err)?;
    check_layout(date, DATE_LAYOUT).map_err(err)?;
    check_layout(time, MINUTES_LAYOUT).map_err(err)?;
    check_layout(duration, DURATION_LAYOUT).map_err(err)?;

    let date = calendar_date(date, line_no)?;
    let time = time_of_day(
        number(&time[0..2], "hour", line_no)?,
        number(&time[3..5], "minute", line_no)?,
        0,
        time,
        line_no,
    )?;
    let hours = number(duration, "duration", line_no)?;
    Ok((date.and_time(time), i64::from(hours)))
}

fn check_width(line: &str, width: usize) -> std::result::Result<(), String> {
    let actual = line.chars().count();
    if actual == width {
        Ok(())
    } else {
        Err(format!(
            "expected {width} characters, found {actual} in '{line}'"
        ))
    }
}

/// Split on single spaces into exactly `N` non-empty tokens.
fn tokens<const N: usize>(line: &str) -> std::result::Result<[&str; N], String> {
    let parts: Vec<&str> = line.split(' ').collect();
    if parts.iter().any(|part| part.is_empty()) {
        return Err(format!("unexpected spacing in '{line}'"));
    }
    <[&str; N]>::try_from(parts.as_slice())
        .map_err(|_| format!("expected {N} fields, found {} in '{line}'", parts.len()))
}

/// Match `token` against `layout`, where `9` stands for any ASCII digit.
fn check_layout(token: &str, layout: &str) -> std::result::Result<(), String> {
    let matches = token.len() == layout.len()
        && token.bytes().zip(layout.bytes()).all(|(t, l)| match l {
            b'9' => t.is_ascii_digit(),
            _ => t == l,
        });
    if matches {
        Ok(())
    } else {
        Err(format!("'{token}' does not match {}", layout.replace('9', "d")))
    }
}

fn number(digits: &str, field: &'static str, line_no: usize) -> Result<u32> {
    digits.parse().map_err(|_| BookingError::InvalidNumber {
        line: line_no,
        field,
        value: digits.to_string(),
    })
}

/// `HHMM` → time of day.
fn clock_time(token: &str, line_no: usize) -> Result<NaiveTime> {
    time_of_day(
        number(&token[0..2], "hour", line_no)?,
        number(&token[2..4], "minute", line_no)?,
        0,
        token,
        line_no,
    )
}

fn time_of_day(
    hour: u32,
    minute: u32,
    second: u32,
    token: &str,
    line_no: usize,
) -> Result<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| BookingError::InvalidNumber {
        line: line_no,
        field: "time",
        value: token.to_string(),
    })
}

/// `YYYY-MM-DD` → calendar date.
fn calendar_date(token: &str, line_no: usize) -> Result<NaiveDate> {
    let year = number(&token[0..4], "year", line_no)?;
    let month = number(&token[5..7], "month", line_no)?;
    let day = number(&token[8..10], "day", line_no)?;
    let year = i32::try_from(year).map_err(|_| BookingError::InvalidNumber {
        line: line_no,
        field: "year",
        value: token[0..4].to_string(),
    })?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| BookingError::InvalidNumber {
        line: line_no,
        field: "date",
        value: token.to_string(),
    })
}
