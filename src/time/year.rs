use derive_more::{Display, From};

use crate::iter_const;
use crate::time::Month;

/// Days per month in a common year, starting with january.
const DAYS_IN_COMMON_MONTH: [usize; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A year of the gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Display, From)]
#[display("{}", _0)]
pub struct Year(usize);

impl Year {
    #[must_use]
    pub const fn new(year: usize) -> Self {
        Self(year)
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// Every fourth year is a leap year, except for centuries not divisible by 400.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        let year = self.0;

        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[must_use]
    pub const fn number_of_days_in_month(&self, month: Month) -> usize {
        let days = DAYS_IN_COMMON_MONTH[month.as_usize() - 1];

        if month.is_eq(&Month::February) && self.is_leap_year() {
            days + 1
        } else {
            days
        }
    }

    /// Returns the number of days that have passed at the end of each month.
    ///
    /// Index `0` is always `0`, index `12` is the number of days in the year,
    /// so `cumulative_days()[month - 1]` is the number of days before `month`.
    #[must_use]
    pub const fn cumulative_days(&self) -> [usize; 13] {
        let mut result = [0; 13];

        iter_const!(for month in 1,..13 => {
            result[month] = result[month - 1] + self.number_of_days_in_month(Month::new(month));
        });

        result
    }

    #[must_use]
    pub const fn days(&self) -> usize {
        self.cumulative_days()[12]
    }

    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}
