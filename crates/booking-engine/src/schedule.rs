//! First-come-first-served selection of bookings.
//!
//! The [`Scheduler`] filters requests against office hours as they arrive, then
//! resolves overlaps in submission order: a request is granted unless it
//! overlaps a booking that was submitted earlier and already granted. Later
//! submissions never evict earlier ones.

use chrono::NaiveDate;
use serde::Serialize;

use crate::booking::{BookingRequest, OfficeHours};

/// Holds office hours and the in-hours requests of one scheduling run.
#[derive(Debug, Clone)]
pub struct Scheduler {
    office_hours: OfficeHours,
    candidates: Vec<BookingRequest>,
}

impl Scheduler {
    pub fn new(office_hours: OfficeHours) -> Self {
        Self {
            office_hours,
            candidates: Vec::new(),
        }
    }

    pub fn office_hours(&self) -> OfficeHours {
        self.office_hours
    }

    /// Requests retained so far, in the order they were added.
    pub fn candidates(&self) -> &[BookingRequest] {
        &self.candidates
    }

    /// Offer a request to the store.
    ///
    /// Requests with any part outside office hours are dropped immediately and
    /// `false` is returned. Everything else is kept for [`compute_accepted`].
    ///
    /// [`compute_accepted`]: Scheduler::compute_accepted
    pub fn add_request(&mut self, request: BookingRequest) -> bool {
        if !self.office_hours.contains(&request) {
            tracing::debug!(
                employee = request.employee_id(),
                start = %request.meeting_start(),
                end = %request.meeting_end(),
                "dropping request outside office hours"
            );
            return false;
        }
        self.candidates.push(request);
        true
    }

    /// Resolve overlaps and return the granted bookings ordered by meeting start.
    ///
    /// Candidates are visited in ascending submission time. The sort is stable,
    /// so two candidates sharing a submission time keep the order they were
    /// added in and the first one added wins. Each candidate is granted unless
    /// it overlaps a booking granted before it.
    pub fn compute_accepted(&self) -> AcceptedSchedule {
        let mut by_submission: Vec<&BookingRequest> = self.candidates.iter().collect();
        by_submission.sort_by_key(|r| r.submitted_at());

        let mut accepted: Vec<BookingRequest> = Vec::new();
        for candidate in by_submission {
            if let Some(winner) = accepted.iter().find(|a| a.overlaps(candidate)) {
                tracing::debug!(
                    employee = candidate.employee_id(),
                    start = %candidate.meeting_start(),
                    blocked_by = winner.employee_id(),
                    "dropping request overlapping an earlier submission"
                );
                continue;
            }
            accepted.push(candidate.clone());
        }

        // Granted meetings never share a start time.
        accepted.sort_by_key(|r| r.meeting_start());

        AcceptedSchedule { bookings: accepted }
    }
}

/// The granted bookings of one run, ordered by meeting start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AcceptedSchedule {
    bookings: Vec<BookingRequest>,
}

/// The bookings of a single calendar day, borrowed from an [`AcceptedSchedule`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySchedule<'a> {
    pub date: NaiveDate,
    pub bookings: &'a [BookingRequest],
}

impl AcceptedSchedule {
    pub fn bookings(&self) -> &[BookingRequest] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn into_bookings(self) -> Vec<BookingRequest> {
        self.bookings
    }

    /// Group the bookings into consecutive runs sharing a start date.
    pub fn days(&self) -> Vec<DaySchedule<'_>> {
        self.bookings
            .chunk_by(|a, b| a.day() == b.day())
            .map(|run| DaySchedule {
                date: run[0].day(),
                bookings: run,
            })
            .collect()
    }

    /// Render the schedule in the day-grouped text format.
    pub fn render(&self) -> String {
        crate::render::render(&self.bookings)
    }
}
