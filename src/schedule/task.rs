use core::fmt;

use serde::Serialize;

use crate::schedule::{compute_completion, InvalidDuration, LeaveSet, WorkWindow};
use crate::time::DateTime;

/// Everything needed to estimate when a piece of work is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    start: DateTime,
    hours: u32,
    window: WorkWindow,
    leaves: LeaveSet,
}

impl Task {
    #[must_use]
    pub const fn new(start: DateTime, hours: u32, window: WorkWindow, leaves: LeaveSet) -> Self {
        Self {
            start,
            hours,
            window,
            leaves,
        }
    }

    #[must_use]
    pub const fn start(&self) -> DateTime {
        self.start
    }

    #[must_use]
    pub const fn hours(&self) -> u32 {
        self.hours
    }

    #[must_use]
    pub const fn window(&self) -> &WorkWindow {
        &self.window
    }

    #[must_use]
    pub const fn leaves(&self) -> &LeaveSet {
        &self.leaves
    }

    pub fn completion(&self) -> Result<Completion, InvalidDuration> {
        let finished = compute_completion(
            self.start,
            i64::from(self.hours),
            &self.window,
            &self.leaves,
        )?;

        Ok(Completion {
            start: self.start,
            hours: self.hours,
            finished,
        })
    }
}

/// The result of a task estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Completion {
    start: DateTime,
    hours: u32,
    #[serde(rename = "completion")]
    finished: DateTime,
}

impl Completion {
    #[must_use]
    pub const fn start(&self) -> DateTime {
        self.start
    }

    #[must_use]
    pub const fn hours(&self) -> u32 {
        self.hours
    }

    #[must_use]
    pub const fn finished(&self) -> DateTime {
        self.finished
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self.finished.date();
        let time = self.finished.time();

        writeln!(
            f,
            "Task Completion Date: {:02}/{:02}/{:04}",
            date.day(),
            date.month().as_usize(),
            date.year().as_usize()
        )?;
        write!(f, "Task Completion Time: {}", time)
    }
}
