use log::{debug, trace};
use thiserror::Error;

use crate::schedule::{LeaveCalendar, WorkWindow};
use crate::time::DateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the required time must be a non-negative number of hours, but was {hours}")]
pub struct InvalidDuration {
    hours: i64,
}

impl InvalidDuration {
    /// Checks that `hours` is a valid amount of work.
    pub fn check(hours: i64) -> Result<u64, Self> {
        u64::try_from(hours).map_err(|_| Self { hours })
    }

    #[must_use]
    pub const fn hours(&self) -> i64 {
        self.hours
    }
}

/// Computes when `required_hours` of work are done, if work starts at `start`
/// and only happens inside the daily `window`, never on days of leave.
///
/// The start day contributes the part of its window that is left after `start`.
/// Every following day that is not a leave day contributes one complete window.
/// For windows crossing midnight a following day starts at `00:00`, so one
/// iteration counts exactly one night of work.
///
/// The result is always on a later day than `start` (unless no work is required):
/// a task that fits into the rest of the start day is reported at the beginning
/// of the next day's window. That day is not checked against `leaves`, neither
/// is the start day itself.
///
/// # Errors
///
/// Fails if `required_hours` is negative.
///
/// # Note
///
/// This does not terminate if `leaves` contains every day after `start`.
pub fn compute_completion<L: LeaveCalendar>(
    start: DateTime,
    required_hours: i64,
    window: &WorkWindow,
    leaves: &L,
) -> Result<DateTime, InvalidDuration> {
    let required = InvalidDuration::check(required_hours)?;

    if required == 0 {
        return Ok(start);
    }

    let first_day = u64::from(window.hours_available(start.hour()));
    debug!(
        "{} hours available on {} in the window {}",
        first_day,
        start.date(),
        window
    );

    let mut remaining = required.saturating_sub(first_day);
    let full_day = u64::from(window.full_day_hours());
    let mut cursor = start.next_day_at(window.next_window_start_hour());

    while remaining > 0 {
        if leaves.is_on_leave(cursor.date()) {
            trace!("{} is a day of leave, skipping", cursor.date());
            cursor = cursor.next_day_at(window.next_window_start_hour());
            continue;
        }

        if remaining <= full_day {
            trace!("finishing the last {} hours on {}", remaining, cursor.date());
            // remaining < 24, because a window has at most 23 hours
            return Ok(cursor.advance_hours(remaining as u32));
        }

        remaining -= full_day;
        trace!(
            "worked {} hours on {}, {} hours remaining",
            full_day,
            cursor.date(),
            remaining
        );

        cursor = cursor.next_day_at(window.next_window_start_hour());
    }

    Ok(cursor)
}
