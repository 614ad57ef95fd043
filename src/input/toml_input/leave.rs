use serde::Deserialize;
use thiserror::Error;

use crate::schedule::LeaveSet;
use crate::time::Date;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("the leave from {start} to {end} ends before it starts")]
pub struct InvalidLeaveRange {
    start: Date,
    end: Date,
}

#[derive(Deserialize)]
struct RawLeaveRange {
    start: Date,
    end: Date,
}

/// A block of consecutive days of leave, both ends included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawLeaveRange")]
pub struct LeaveRange {
    start: Date,
    end: Date,
}

impl LeaveRange {
    pub fn new(start: Date, end: Date) -> Result<Self, InvalidLeaveRange> {
        if end < start {
            return Err(InvalidLeaveRange { start, end });
        }

        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }
}

impl TryFrom<RawLeaveRange> for LeaveRange {
    type Error = InvalidLeaveRange;

    fn try_from(raw: RawLeaveRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

/// The `[leave]` section of a task file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Leave {
    #[serde(default)]
    dates: Vec<Date>,
    #[serde(default)]
    ranges: Vec<LeaveRange>,
}

impl Leave {
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.dates.iter().copied()
    }

    pub fn ranges(&self) -> impl Iterator<Item = &LeaveRange> + '_ {
        self.ranges.iter()
    }

    #[must_use]
    pub fn to_leave_set(&self) -> LeaveSet {
        let mut leaves = LeaveSet::from_iter(self.dates());

        for range in self.ranges() {
            leaves.insert_range(range.start(), range.end());
        }

        leaves
    }
}
