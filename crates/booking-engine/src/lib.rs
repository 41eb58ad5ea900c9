//! # booking-engine
//!
//! Turns a list of meeting room booking requests into a conflict-free calendar.
//!
//! Requests are granted first come, first served: they are processed in the
//! order they were submitted (not the order they appear in the input), any
//! request with part of its meeting outside office hours is dropped, and any
//! request overlapping an already granted meeting is dropped. Granted meetings
//! are printed in start order, grouped by day.
//!
//! ## Quick start
//!
//! ```rust
//! let input = "0900 1730\n\
//!              2011-03-17 10:17:06 EMP001\n\
//!              2011-03-21 09:00 2\n\
//!              2011-03-16 12:34:56 EMP002\n\
//!              2011-03-21 09:00 2\n";
//!
//! let calendar = booking_engine::generate_calendar(input).unwrap();
//! assert_eq!(calendar, "2011-03-21\n09:00 11:00 EMP002\n");
//! ```
//!
//! ## Modules
//!
//! - [`parser`] -- Raw text → office hours and booking requests
//! - [`booking`] -- `OfficeHours` and `BookingRequest` value types
//! - [`schedule`](mod@schedule) -- Office-hours filtering and first-come-first-served overlap resolution
//! - [`render`](mod@render) -- Accepted bookings → day-grouped text or JSON
//! - [`error`] -- Error types

pub mod booking;
pub mod error;
pub mod parser;
pub mod render;
pub mod schedule;

pub use booking::{BookingRequest, OfficeHours};
pub use error::BookingError;
pub use parser::{parse, ParsedInput};
pub use render::{render, render_json};
pub use schedule::{AcceptedSchedule, DaySchedule, Scheduler};

/// Parse `input` and compute the accepted schedule.
///
/// # Errors
///
/// Returns a [`BookingError`] if the input is empty or breaks the line format.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn schedule(input: &str) -> error::Result<AcceptedSchedule> {
    let ParsedInput {
        office_hours,
        requests,
    } = parse(input)?;

    let mut scheduler = Scheduler::new(office_hours);
    for request in requests {
        scheduler.add_request(request);
    }

    let accepted = scheduler.compute_accepted();
    tracing::debug!(
        candidates = scheduler.candidates().len(),
        accepted = accepted.len(),
        "computed accepted schedule"
    );
    Ok(accepted)
}

/// Produce the day-grouped calendar text for `input`.
///
/// This is the whole pipeline: parse, filter by office hours, resolve overlaps
/// by submission time, render. Each call is independent.
///
/// # Errors
///
/// Returns a [`BookingError`] if the input is empty or breaks the line format.
/// Requests that cannot be granted are left out of the output, not reported.
pub fn generate_calendar(input: &str) -> error::Result<String> {
    Ok(schedule(input)?.render())
}
