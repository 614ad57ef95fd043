use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::max;
use crate::time::Hour;

const HOURS_PER_DAY: u32 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the working hours cannot start and end at the same time ({start}), nobody works 24 hours straight")]
pub struct InvalidWindow {
    start: Hour,
}

/// The hours of the day in which work is done, for example `09:00-17:00`.
///
/// A window whose end is before its start (like `23:00-07:00`) continues past
/// midnight into the following calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWindow", into = "RawWindow")]
pub struct WorkWindow {
    start: Hour,
    end: Hour,
}

#[derive(Serialize, Deserialize)]
struct RawWindow {
    start: Hour,
    end: Hour,
}

impl WorkWindow {
    pub const fn new(start: Hour, end: Hour) -> Result<Self, InvalidWindow> {
        if start.as_u8() == end.as_u8() {
            return Err(InvalidWindow { start });
        }

        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(&self) -> Hour {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> Hour {
        self.end
    }

    #[must_use]
    pub const fn crosses_midnight(&self) -> bool {
        self.end.as_u8() < self.start.as_u8()
    }

    /// Returns how many hours are left in today's window when starting at `current`.
    ///
    /// For a window that crosses midnight only the hours until midnight are counted,
    /// the part after midnight belongs to the next calendar day.
    #[must_use]
    pub const fn hours_available(&self, current: Hour) -> u32 {
        let current = current.as_u32();
        let start = self.start.as_u32();
        let end = self.end.as_u32();

        if self.crosses_midnight() {
            HOURS_PER_DAY - max!(current, start)
        } else if current >= end {
            0
        } else {
            end - max!(current, start)
        }
    }

    /// The number of hours in one complete window, including the part after midnight.
    #[must_use]
    pub const fn full_day_hours(&self) -> u32 {
        let start = self.start.as_u32();
        let end = self.end.as_u32();

        if self.crosses_midnight() {
            end + (HOURS_PER_DAY - start)
        } else {
            end - start
        }
    }

    /// The hour at which work resumes on the following calendar day.
    #[must_use]
    pub const fn next_window_start_hour(&self) -> Hour {
        if self.crosses_midnight() {
            Hour::MIDNIGHT
        } else {
            self.start
        }
    }
}

impl TryFrom<RawWindow> for WorkWindow {
    type Error = InvalidWindow;

    fn try_from(raw: RawWindow) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl From<WorkWindow> for RawWindow {
    fn from(window: WorkWindow) -> Self {
        Self {
            start: window.start,
            end: window.end,
        }
    }
}

impl fmt::Display for WorkWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
