//! Office hours and booking requests.
//!
//! Both types are plain values built once by the parser and never mutated.
//! All comparisons are on naive (timezone-free) dates and times.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// The daily time-of-day window every meeting must fit inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OfficeHours {
    open: NaiveTime,
    close: NaiveTime,
}

impl OfficeHours {
    /// Build an office-hours window. Returns `None` unless `open < close`.
    pub fn new(open: NaiveTime, close: NaiveTime) -> Option<Self> {
        (open < close).then_some(Self { open, close })
    }

    pub fn open(&self) -> NaiveTime {
        self.open
    }

    pub fn close(&self) -> NaiveTime {
        self.close
    }

    /// Whether the whole of `[meeting_start, meeting_end)` lies within office hours.
    ///
    /// Only the time of day is compared: the start must be at or after `open`
    /// and the end at or before `close`. A meeting that ends on a later date
    /// than it starts runs through midnight and is never contained.
    pub fn contains(&self, request: &BookingRequest) -> bool {
        request.meeting_start.date() == request.meeting_end.date()
            && request.meeting_start.time() >= self.open
            && request.meeting_end.time() <= self.close
    }
}

/// One parsed booking request: who asked, when they asked, and for which slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    employee_id: String,
    submitted_at: NaiveDateTime,
    meeting_start: NaiveDateTime,
    meeting_end: NaiveDateTime,
}

impl BookingRequest {
    /// Build a request whose meeting runs for `duration` from `meeting_start`.
    pub fn new(
        employee_id: impl Into<String>,
        submitted_at: NaiveDateTime,
        meeting_start: NaiveDateTime,
        duration: Duration,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            submitted_at,
            meeting_start,
            meeting_end: meeting_start + duration,
        }
    }

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub fn submitted_at(&self) -> NaiveDateTime {
        self.submitted_at
    }

    pub fn meeting_start(&self) -> NaiveDateTime {
        self.meeting_start
    }

    pub fn meeting_end(&self) -> NaiveDateTime {
        self.meeting_end
    }

    /// The calendar day the meeting starts on.
    pub fn day(&self) -> NaiveDate {
        self.meeting_start.date()
    }

    /// Whether two meetings overlap.
    ///
    /// Meetings are half-open intervals `[start, end)`, so they overlap iff
    /// `a.start < b.end && b.start < a.end`. Meetings sharing a start time
    /// always overlap, including zero-hour ones. A meeting ending exactly when
    /// another starts does not overlap it.
    pub fn overlaps(&self, other: &BookingRequest) -> bool {
        self.meeting_start == other.meeting_start
            || (self.meeting_start < other.meeting_end && other.meeting_start < self.meeting_end)
    }
}
