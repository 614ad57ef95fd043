use core::fmt;
use core::str::FromStr;

use serde::{de, Deserialize, Serialize};
use thiserror::Error;

use crate::time::{Date, Hour, InvalidDate, InvalidTime, TimeOfDay};

/// A point in local time with second precision.
///
/// The value is immutable, the `advance_*` functions return new instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct DateTime {
    date: Date,
    time: TimeOfDay,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDateTime {
    #[error(transparent)]
    Date(#[from] InvalidDate),
    #[error(transparent)]
    Time(#[from] InvalidTime),
    #[error("\"{input}\" is not a valid date-time. Expected format: \"YYYY-MM-DD[THH:MM[:SS]]\"")]
    Malformed { input: String },
}

impl DateTime {
    #[must_use]
    pub const fn new(date: Date, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    /// Midnight at the start of `date`.
    #[must_use]
    pub const fn start_of(date: Date) -> Self {
        Self::new(date, TimeOfDay::MIDNIGHT)
    }

    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    #[must_use]
    pub const fn time(&self) -> TimeOfDay {
        self.time
    }

    #[must_use]
    pub const fn hour(&self) -> Hour {
        self.time.hour()
    }

    /// The same day at `hour:00:00`.
    #[must_use]
    pub const fn at_hour(&self, hour: Hour) -> Self {
        Self::new(self.date, TimeOfDay::at_hour(hour))
    }

    /// The following calendar day at `hour:00:00`.
    #[must_use]
    pub const fn next_day_at(&self, hour: Hour) -> Self {
        Self::new(self.date.next_day(), TimeOfDay::at_hour(hour))
    }

    /// Moves the instant `hours` forward, carrying into following days.
    ///
    /// Minutes and seconds are kept.
    #[must_use]
    pub const fn advance_hours(&self, hours: u32) -> Self {
        let total = self.time.hour().as_u32() as usize + hours as usize;

        // the hour is reduced modulo 24, minute and second come from a valid time
        let time = unsafe {
            TimeOfDay::new_unchecked((total % 24) as u8, self.time.minute(), self.time.second())
        };

        Self::new(self.date.add_days(total / 24), time)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

impl FromStr for DateTime {
    type Err = InvalidDateTime;

    /// Parses `YYYY-MM-DDTHH:MM:SS`, a space may be used instead of the `T`.
    /// Seconds and minutes are optional, a plain date means midnight.
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let string = string.trim();

        match string.split_once(['T', ' ']) {
            Some((date, time)) => {
                let time = if time.contains(':') {
                    time.parse::<TimeOfDay>()?
                } else {
                    // a bare hour like `2022-12-17T22`
                    let hour = time.parse::<u8>().map_err(|_| InvalidDateTime::Malformed {
                        input: string.to_string(),
                    })?;
                    TimeOfDay::new(hour, 0, 0)?
                };

                Ok(Self::new(date.parse()?, time))
            }
            None => Ok(Self::start_of(string.parse()?)),
        }
    }
}

impl From<DateTime> for String {
    fn from(value: DateTime) -> Self {
        value.to_string()
    }
}

impl TryFrom<toml::value::Datetime> for DateTime {
    type Error = InvalidDateTime;

    fn try_from(value: toml::value::Datetime) -> Result<Self, Self::Error> {
        let input = value.to_string();
        let date = value
            .date
            .ok_or(InvalidDateTime::Malformed { input })?;

        let time = value
            .time
            .map_or(Ok(TimeOfDay::MIDNIGHT), TimeOfDay::try_from)?;

        Ok(Self::new(Date::try_from(date)?, time))
    }
}

impl<'de> Deserialize<'de> for DateTime {
    /// Accepts a native TOML date-time (`2022-12-17T22:00:00`, offset ignored)
    /// or a string in the same format.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        match toml::Value::deserialize(deserializer)? {
            toml::Value::Datetime(datetime) => Self::try_from(datetime).map_err(de::Error::custom),
            toml::Value::String(text) => text.parse().map_err(de::Error::custom),
            other => Err(de::Error::invalid_type(
                de::Unexpected::Other(other.type_str()),
                &"a date-time",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::{date, hour, time_of_day};

    #[test]
    fn test_advance_hours_same_day() {
        let start = DateTime::new(date!(2022:12:17), time_of_day!(22:15:30));

        assert_eq!(start.advance_hours(0), start);
        assert_eq!(
            start.advance_hours(1),
            DateTime::new(date!(2022:12:17), time_of_day!(23:15:30))
        );
    }

    #[test]
    fn test_advance_hours_rolls_over() {
        let start = DateTime::new(date!(2022:12:31), time_of_day!(22:00:00));

        assert_eq!(
            start.advance_hours(2),
            DateTime::start_of(date!(2023:01:01))
        );
        assert_eq!(
            start.advance_hours(24 * 2 + 3),
            DateTime::new(date!(2023:01:03), time_of_day!(01:00:00))
        );
    }

    #[test]
    fn test_next_day_at() {
        let start = DateTime::new(date!(2024:02:28), time_of_day!(17:45:12));

        assert_eq!(
            start.next_day_at(hour!(9)),
            DateTime::new(date!(2024:02:29), time_of_day!(09:00:00))
        );
        assert_eq!(
            start.next_day_at(Hour::MIDNIGHT).next_day_at(Hour::MIDNIGHT),
            DateTime::start_of(date!(2024:03:01))
        );
    }

    #[test]
    fn test_ordering() {
        let earlier = DateTime::new(date!(2022:12:17), time_of_day!(23:00:00));
        let later = DateTime::new(date!(2022:12:18), time_of_day!(01:00:00));

        assert!(earlier < later);
        assert!(earlier.at_hour(hour!(22)) < earlier);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "2022-12-17T22:00:00".parse::<DateTime>(),
            Ok(DateTime::new(date!(2022:12:17), time_of_day!(22:00:00)))
        );
        assert_eq!(
            "2022-12-17 22:30".parse::<DateTime>(),
            Ok(DateTime::new(date!(2022:12:17), time_of_day!(22:30:00)))
        );
        assert_eq!(
            "2022-12-17T22".parse::<DateTime>(),
            Ok(DateTime::new(date!(2022:12:17), time_of_day!(22:00:00)))
        );
        assert_eq!(
            "2022-12-17".parse::<DateTime>(),
            Ok(DateTime::start_of(date!(2022:12:17)))
        );
        assert!("2022-12-17T25:00:00".parse::<DateTime>().is_err());
        assert!("yesterday".parse::<DateTime>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            DateTime::new(date!(2022:12:21), time_of_day!(01:00:00)).to_string(),
            "2022-12-21T01:00:00"
        );
    }

    #[test]
    fn test_deserialize_toml() {
        #[derive(Debug, Deserialize)]
        struct Task {
            start: DateTime,
        }

        let task: Task = toml::from_str("start = 2022-12-17T22:00:00").unwrap();
        assert_eq!(
            task.start,
            DateTime::new(date!(2022:12:17), time_of_day!(22:00:00))
        );

        let task: Task = toml::from_str("start = 2022-12-17").unwrap();
        assert_eq!(task.start, DateTime::start_of(date!(2022:12:17)));

        let task: Task = toml::from_str("start = \"2022-12-17 22:00\"").unwrap();
        assert_eq!(
            task.start,
            DateTime::new(date!(2022:12:17), time_of_day!(22:00:00))
        );
    }
}
