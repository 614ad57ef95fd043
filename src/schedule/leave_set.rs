use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::time::Date;

/// Tells on which days no work is done at all.
pub trait LeaveCalendar {
    #[must_use]
    fn is_on_leave(&self, date: Date) -> bool;
}

/// Allows closures like `|date| date.day() == 1` to be used as a calendar.
impl<F> LeaveCalendar for F
where
    F: Fn(Date) -> bool,
{
    fn is_on_leave(&self, date: Date) -> bool {
        self(date)
    }
}

/// A set of full days of leave.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeaveSet {
    dates: HashSet<Date>,
}

impl LeaveSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a day of leave, returns `false` if it was already present.
    pub fn insert(&mut self, date: Date) -> bool {
        self.dates.insert(date)
    }

    /// Adds every day from `start` to `end` (inclusive).
    pub fn insert_range(&mut self, start: Date, end: Date) {
        self.dates.extend(start.iter_until(end));
    }

    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.dates.contains(&date)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns the days of leave in chronological order.
    #[must_use]
    pub fn sorted(&self) -> Vec<Date> {
        let mut dates = self.dates.iter().copied().collect::<Vec<_>>();
        dates.sort_unstable();
        dates
    }
}

impl LeaveCalendar for LeaveSet {
    fn is_on_leave(&self, date: Date) -> bool {
        self.contains(date)
    }
}

impl FromIterator<Date> for LeaveSet {
    fn from_iter<T: IntoIterator<Item = Date>>(iter: T) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

impl Extend<Date> for LeaveSet {
    fn extend<T: IntoIterator<Item = Date>>(&mut self, iter: T) {
        self.dates.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::date;

    #[test]
    fn test_contains_ignores_duplicates() {
        let mut leaves = LeaveSet::new();
        assert!(leaves.insert(date!(2022:12:19)));
        assert!(!leaves.insert(date!(2022:12:19)));

        assert_eq!(leaves.len(), 1);
        assert!(leaves.contains(date!(2022:12:19)));
        assert!(!leaves.contains(date!(2022:12:20)));
    }

    #[test]
    fn test_insert_range() {
        let mut leaves = LeaveSet::new();
        leaves.insert_range(date!(2022:12:30), date!(2023:01:02));

        assert_eq!(
            leaves.sorted(),
            vec![
                date!(2022:12:30),
                date!(2022:12:31),
                date!(2023:01:01),
                date!(2023:01:02),
            ]
        );
    }

    #[test]
    fn test_closure_calendar() {
        let first_of_month = |date: Date| date.day() == 1;

        assert!(first_of_month.is_on_leave(date!(2023:01:01)));
        assert!(!first_of_month.is_on_leave(date!(2023:01:02)));
    }

    #[test]
    fn test_deserialize() {
        #[derive(Debug, Deserialize)]
        struct Leave {
            dates: LeaveSet,
        }

        let leave: Leave = serde_json::from_str(r#"{ "dates": ["2022-12-19", "2022-12-24"] }"#)
            .expect("leave dates should parse");

        assert_eq!(
            leave.dates,
            LeaveSet::from_iter([date!(2022:12:24), date!(2022:12:19)])
        );
    }
}
