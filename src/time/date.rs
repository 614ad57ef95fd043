use core::fmt;
use core::ops::Add;
use core::str::FromStr;

use serde::{de, Deserialize, Serialize};
use thiserror::Error;

use crate::time::{Month, Year};
use crate::utils::StrExt;

#[macro_export]
macro_rules! date {
    ($year:literal : $month:literal : $day:literal) => {{
        const _YEAR: $crate::time::Year = $crate::time::Year::new($year);
        static_assertions::const_assert!($month >= 1 && $month <= 12);

        const _MONTH: $crate::time::Month = $crate::time::Month::new($month);

        // validate the day
        static_assertions::const_assert!($day != 0);
        static_assertions::const_assert!($day <= _YEAR.number_of_days_in_month(_MONTH));

        unsafe { $crate::time::Date::new_unchecked(_YEAR, _MONTH, $day) }
    }};
}

/// A calendar day without a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct Date {
    year: Year,
    month: Month,
    day: usize,
}

impl Date {
    pub fn new(year: impl Into<Year>, month: Month, day: usize) -> Result<Self, InvalidDate> {
        let year = year.into();
        if year.number_of_days_in_month(month) < day || day == 0 {
            return Err(InvalidDate::InvalidDay { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    #[doc(hidden)]
    #[must_use]
    pub const unsafe fn new_unchecked(year: Year, month: Month, day: usize) -> Self {
        Self { year, month, day }
    }

    #[must_use]
    const fn from_ordinal(year: Year, ordinal: u16) -> Self {
        if year.days() < ordinal as usize || ordinal == 0 {
            const_panic::concat_panic!(
                "Invalid ordinal `",
                ordinal,
                "` for year ",
                year.as_usize(),
                " with ",
                year.days(),
                " days."
            );
        }

        let cumulative_days = year.cumulative_days();

        // bounded by the 12 months of the year
        let mut current_month = Month::January;
        while !current_month.is_eq(&Month::December)
            && cumulative_days[current_month.as_usize()] < ordinal as usize
        {
            current_month = current_month.next();
        }

        let day = ordinal as usize - cumulative_days[current_month.as_usize() - 1];

        Self {
            year,
            month: current_month,
            day,
        }
    }
}

impl Date {
    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> usize {
        self.day
    }

    #[must_use]
    const fn ordinal(&self) -> u16 {
        // -1 to get the index of the previous month, january has the number 1
        let days_before_month = self.year().cumulative_days()[self.month().as_usize() - 1];

        (days_before_month + self.day()) as u16
    }

    #[must_use]
    pub const fn add_days(self, days: usize) -> Self {
        let mut ordinal = self.ordinal() as usize + days;
        let mut year = self.year();

        // TODO: jump over whole 400 year cycles for very large offsets
        while ordinal > year.days() {
            ordinal -= year.days();
            year = year.next();
        }

        Self::from_ordinal(year, ordinal as u16)
    }

    /// Returns the following calendar day, rolling over months and years.
    #[must_use]
    pub const fn next_day(self) -> Self {
        self.add_days(1)
    }

    /// Returns an iterator over all dates from `self` to `end` (inclusive).
    ///
    /// The iterator is empty if `end` is before `self`.
    pub fn iter_until(self, end: Self) -> impl Iterator<Item = Self> + Clone {
        std::iter::successors(Some(self), |date| Some(date.next_day()))
            .take_while(move |date| *date <= end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDate {
    #[error("\"{input}\" is not valid date. Expected format: \"YYYY-MM-DD\"")]
    ParseDateError { input: String },
    #[error("{day:02} is not a valid day for {year:04}-{month:02}")]
    InvalidDay {
        year: Year,
        month: Month,
        day: usize,
    },
}

impl Add<usize> for Date {
    type Output = Self;

    fn add(self, days: usize) -> Self::Output {
        self.add_days(days)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.as_usize(),
            self.month.as_usize(),
            self.day
        )
    }
}

fn parse_or_err(input: &str) -> Result<usize, InvalidDate> {
    input
        .trim()
        .parse::<usize>()
        .map_err(|_| InvalidDate::ParseDateError {
            input: input.to_string(),
        })
}

impl FromStr for Date {
    type Err = InvalidDate;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        if let [Some(year), Some(month), Some(day)] = string.split_exact::<3>("-") {
            let year = Year::new(parse_or_err(year)?);
            let month =
                Month::try_from(parse_or_err(month)?).map_err(|_| InvalidDate::ParseDateError {
                    input: string.to_string(),
                })?;
            let day = parse_or_err(day)?;

            Self::new(year, month, day)
        } else {
            Err(InvalidDate::ParseDateError {
                input: string.to_string(),
            })
        }
    }
}

impl TryFrom<String> for Date {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

impl From<Date> for String {
    fn from(date: Date) -> Self {
        date.to_string()
    }
}

impl TryFrom<toml::value::Date> for Date {
    type Error = InvalidDate;

    fn try_from(date: toml::value::Date) -> Result<Self, Self::Error> {
        let month =
            Month::try_from(date.month as usize).map_err(|_| InvalidDate::ParseDateError {
                input: date.to_string(),
            })?;

        Self::new(Year::new(date.year as usize), month, date.day as usize)
    }
}

impl<'de> Deserialize<'de> for Date {
    /// Accepts a native TOML date (`2022-12-19`) or a string in the same format.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        match toml::Value::deserialize(deserializer)? {
            toml::Value::Datetime(toml::value::Datetime {
                date: Some(date),
                time: None,
                offset: None,
            }) => Self::try_from(date).map_err(de::Error::custom),
            toml::Value::String(text) => text.parse().map_err(de::Error::custom),
            other => Err(de::Error::invalid_type(
                de::Unexpected::Other(other.type_str()),
                &"a date like 2022-12-19",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_date_to_string() {
        assert_eq!(
            Date::new(Year::new(2022), Month::January, 31).map(|d| d.to_string()),
            Ok("2022-01-31".to_string())
        );
    }

    #[test]
    fn test_serialize_keeps_large_years() {
        let date = Date::new(Year::new(70_000), Month::January, 1).unwrap();

        assert_eq!(
            serde_json::to_value(date).unwrap(),
            serde_json::json!("70000-01-01")
        );
        assert_eq!("70000-01-01".parse::<Date>(), Ok(date));
    }

    #[test]
    fn test_invalid_day() {
        assert_eq!(
            Date::new(Year::new(2023), Month::February, 29),
            Err(InvalidDate::InvalidDay {
                year: Year::new(2023),
                month: Month::February,
                day: 29,
            })
        );
        assert!(Date::new(Year::new(2024), Month::February, 29).is_ok());
        assert!(Date::new(Year::new(2024), Month::March, 0).is_err());
    }

    #[test]
    fn test_add_day() {
        assert_eq!(date!(2022:01:01).add_days(1), date!(2022:01:02));
        assert_eq!(date!(2022:01:01).add_days(30), date!(2022:01:31));
        assert_eq!(date!(2022:01:01).add_days(31), date!(2022:02:01));
        assert_eq!(date!(2022:01:01).add_days(58), date!(2022:02:28));
        assert_eq!(date!(2022:01:01).add_days(59), date!(2022:03:01));

        assert_eq!(date!(2022:12:24).add_days(8), date!(2023:01:01));
        assert_eq!(date!(2022:12:24).add_days(8 + 365), date!(2024:01:01));
    }

    #[test]
    fn test_next_day() {
        assert_eq!(date!(2022:12:31).next_day(), date!(2023:01:01));
        assert_eq!(date!(2024:02:28).next_day(), date!(2024:02:29));
        assert_eq!(date!(2024:02:29).next_day(), date!(2024:03:01));
        assert_eq!(date!(2023:02:28).next_day(), date!(2023:03:01));
        assert_eq!(date!(2022:04:30).next_day(), date!(2022:05:01));
    }

    #[test]
    fn test_next_day_walks_every_day() {
        let mut date = date!(2020:01:01);
        let mut days = 0;
        while date != date!(2024:01:01) {
            date = date.next_day();
            days += 1;
        }

        assert_eq!(days, 366 + 365 + 365 + 365);
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(date!(2022:01:01).ordinal(), 1);
        assert_eq!(date!(2022:02:01).ordinal(), 32);
        assert_eq!(date!(2022:02:05).ordinal(), 36);
        assert_eq!(date!(2022:12:31).ordinal(), 365);
        assert_eq!(date!(2024:12:31).ordinal(), 366);

        for year in (2020..=2030).map(Year::new) {
            let mut current_ordinal = 0;
            for month in Month::months() {
                for day in 1..=year.number_of_days_in_month(month) {
                    current_ordinal += 1;
                    let date = Date::new(year, month, day).unwrap();

                    assert_eq!(date.ordinal(), current_ordinal);
                    assert_eq!(Date::from_ordinal(year, current_ordinal), date);
                }
            }
        }
    }

    #[test]
    fn test_iter_until() {
        assert_eq!(
            date!(2022:12:30)
                .iter_until(date!(2023:01:02))
                .collect::<Vec<_>>(),
            vec![
                date!(2022:12:30),
                date!(2022:12:31),
                date!(2023:01:01),
                date!(2023:01:02),
            ]
        );

        assert_eq!(
            date!(2022:12:30).iter_until(date!(2022:12:30)).count(),
            1
        );
        assert_eq!(
            date!(2022:12:30).iter_until(date!(2022:12:29)).count(),
            0
        );
    }

    #[test]
    fn test_deserialize() {
        #[derive(Debug, Deserialize)]
        struct Leave {
            dates: Vec<Date>,
        }

        let leave: Leave = toml::from_str("dates = [2022-12-19, \"2022-12-24\"]").unwrap();
        assert_eq!(leave.dates, vec![date!(2022:12:19), date!(2022:12:24)]);

        assert!(toml::from_str::<Leave>("dates = [2022-12-19T10:00:00]").is_err());
        assert!(toml::from_str::<Leave>("dates = [2022-02-30]").is_err());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("2022-12-19".parse::<Date>(), Ok(date!(2022:12:19)));
        assert_eq!(
            "2022-13-19".parse::<Date>(),
            Err(InvalidDate::ParseDateError {
                input: "2022-13-19".to_string()
            })
        );
        assert_eq!(
            "2022/12/19".parse::<Date>(),
            Err(InvalidDate::ParseDateError {
                input: "2022/12/19".to_string()
            })
        );
    }
}
