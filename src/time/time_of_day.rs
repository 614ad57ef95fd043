use std::str::FromStr;

use derive_more::Display;
use serde::{de, ser, Deserialize, Serialize};
use thiserror::Error;

use crate::time::Hour;

#[macro_export]
macro_rules! time_of_day {
    ( $hour:literal : $minute:literal : $second:literal ) => {{
        static_assertions::const_assert!($hour < 24);
        static_assertions::const_assert!($minute < 60);
        static_assertions::const_assert!($second < 60);

        unsafe { $crate::time::TimeOfDay::new_unchecked($hour, $minute, $second) }
    }};
}

#[derive(Debug, Copy, Clone, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("{:02}:{:02}:{:02}", hour, minute, second)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidTime {
    #[error("Time is not valid: {hour:02}:{minute:02}:{second:02}")]
    OutOfRange { hour: u8, minute: u8, second: u8 },
    #[error("\"{input}\" is not a valid time. Expected format: \"HH:MM[:SS]\"")]
    ParseTimeError { input: String },
}

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, InvalidTime> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(InvalidTime::OutOfRange {
                hour,
                minute,
                second,
            });
        }

        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// # Safety
    ///
    /// `hour` must be less than 24, `minute` and `second` less than 60.
    #[doc(hidden)]
    #[must_use]
    pub const unsafe fn new_unchecked(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// The full hour `hour:00:00`.
    #[must_use]
    pub const fn at_hour(hour: Hour) -> Self {
        Self {
            hour: hour.as_u8(),
            minute: 0,
            second: 0,
        }
    }

    #[must_use]
    pub const fn hour(&self) -> Hour {
        // validated on construction
        unsafe { Hour::new_unchecked(self.hour) }
    }

    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    #[must_use]
    pub const fn second(&self) -> u8 {
        self.second
    }
}

fn parse_or_err(input: &str, part: &str) -> Result<u8, InvalidTime> {
    part.trim()
        .parse::<u8>()
        .map_err(|_| InvalidTime::ParseTimeError {
            input: input.to_string(),
        })
}

impl FromStr for TimeOfDay {
    type Err = InvalidTime;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let mut parts = string.split(':');

        let (Some(hour), Some(minute)) = (parts.next(), parts.next()) else {
            return Err(InvalidTime::ParseTimeError {
                input: string.to_string(),
            });
        };
        let second = parts.next();

        if parts.next().is_some() {
            return Err(InvalidTime::ParseTimeError {
                input: string.to_string(),
            });
        }

        Self::new(
            parse_or_err(string, hour)?,
            parse_or_err(string, minute)?,
            second.map_or(Ok(0), |second| parse_or_err(string, second))?,
        )
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

impl TryFrom<toml::value::Time> for TimeOfDay {
    type Error = InvalidTime;

    fn try_from(time: toml::value::Time) -> Result<Self, Self::Error> {
        // sub-second precision is dropped
        Self::new(time.hour, time.minute, time.second)
    }
}
