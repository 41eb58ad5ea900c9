//! Calendar output -- accepted bookings to day-grouped text or JSON.
//!
//! Text output prints a `YYYY-MM-DD` line before the first meeting of each day,
//! followed by one `HH:MM HH:MM EMPID` line per meeting. Every line ends in
//! `\n`; an empty schedule renders as the empty string.

use chrono::NaiveDate;
use serde::Serialize;

use crate::booking::BookingRequest;
use crate::error::Result;
use crate::schedule::AcceptedSchedule;

const DAY_FORMAT: &str = "%Y-%m-%d";
const CLOCK_FORMAT: &str = "%H:%M";

/// Render bookings, already ordered by meeting start, as calendar text.
///
/// The day header is emitted whenever a booking's start date differs from the
/// last header written.
pub fn render(bookings: &[BookingRequest]) -> String {
    let mut out = String::new();
    let mut current_day: Option<NaiveDate> = None;

    for booking in bookings {
        let day = booking.day();
        if current_day != Some(day) {
            out.push_str(&format!("{}\n", day.format(DAY_FORMAT)));
            current_day = Some(day);
        }
        out.push_str(&format!(
            "{} {} {}\n",
            booking.meeting_start().format(CLOCK_FORMAT),
            booking.meeting_end().format(CLOCK_FORMAT),
            booking.employee_id()
        ));
    }

    out
}

#[derive(Serialize)]
struct JsonCalendar {
    days: Vec<JsonDay>,
}

#[derive(Serialize)]
struct JsonDay {
    date: String,
    meetings: Vec<JsonMeeting>,
}

#[derive(Serialize)]
struct JsonMeeting {
    start: String,
    end: String,
    employee_id: String,
}

/// Render a schedule as pretty-printed JSON with the same grouping as [`render`].
///
/// ```json
/// {"days": [{"date": "2011-03-21",
///            "meetings": [{"start": "09:00", "end": "11:00", "employee_id": "EMP002"}]}]}
/// ```
pub fn render_json(schedule: &AcceptedSchedule) -> Result<String> {
    let calendar = JsonCalendar {
        days: schedule
            .days()
            .into_iter()
            .map(|day| JsonDay {
                date: day.date.format(DAY_FORMAT).to_string(),
                meetings: day
                    .bookings
                    .iter()
                    .map(|b| JsonMeeting {
                        start: b.meeting_start().format(CLOCK_FORMAT).to_string(),
                        end: b.meeting_end().format(CLOCK_FORMAT).to_string(),
                        employee_id: b.employee_id().to_string(),
                    })
                    .collect(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&calendar)?)
}
