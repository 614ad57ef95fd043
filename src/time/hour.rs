use core::fmt;
use core::str::FromStr;

use serde::{de, Deserialize, Serialize};
use thiserror::Error;

#[macro_export]
macro_rules! hour {
    ( $hour:literal ) => {{
        static_assertions::const_assert!($hour < 24);

        unsafe { $crate::time::Hour::new_unchecked($hour) }
    }};
}

/// An hour of the day in 24-hour notation, `0..=23`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct Hour(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} is not an hour of the day, expected a number between 0 and 23")]
pub struct InvalidHour(pub u32);

impl Hour {
    pub const MIDNIGHT: Self = Self(0);

    pub const fn new(hour: u32) -> Result<Self, InvalidHour> {
        if hour > 23 {
            return Err(InvalidHour(hour));
        }

        Ok(Self(hour as u8))
    }

    /// # Safety
    ///
    /// `hour` must be less than 24, the window arithmetic relies on it.
    ///
    /// ```compile_fail
    /// let hour = task_eta::time::Hour::new_unchecked(30);
    /// ```
    #[doc(hidden)]
    #[must_use]
    pub const unsafe fn new_unchecked(hour: u8) -> Self {
        Self(hour)
    }

    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn as_u32(&self) -> u32 {
        self.0 as u32
    }
}

impl From<Hour> for u8 {
    fn from(hour: Hour) -> Self {
        hour.as_u8()
    }
}

impl TryFrom<u32> for Hour {
    type Error = InvalidHour;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

/// The half of the day a 12-hour clock reading belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Am,
    Pm,
}

impl FromStr for Period {
    type Err = ();

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        if string.eq_ignore_ascii_case("am") {
            Ok(Self::Am)
        } else if string.eq_ignore_ascii_case("pm") {
            Ok(Self::Pm)
        } else {
            Err(())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidClockHour {
    #[error("\"{input}\" is not a 12 hour time. Expected format: \"HH AM/PM\"")]
    Malformed { input: String },
    #[error("{hour} is not a valid hour on a 12 hour clock, expected a number between 1 and 12")]
    HourOutOfRange { hour: u32 },
    #[error("\"{period}\" is neither AM nor PM")]
    InvalidPeriod { period: String },
}

/// Converts a reading of a 12-hour clock like `"11 PM"` to a 24-hour [`Hour`].
///
/// The hour must be between 1 and 12 and the period either `AM` or `PM`
/// (case-insensitive). `12 AM` is midnight and `12 PM` is noon.
pub fn parse_twelve_hour(input: &str) -> Result<Hour, InvalidClockHour> {
    let malformed = || InvalidClockHour::Malformed {
        input: input.to_string(),
    };

    let mut parts = input.split_whitespace();
    let (Some(hour), Some(period), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };

    let hour = hour.parse::<u32>().map_err(|_| malformed())?;
    if !(1..=12).contains(&hour) {
        return Err(InvalidClockHour::HourOutOfRange { hour });
    }

    let period = period
        .parse::<Period>()
        .map_err(|()| InvalidClockHour::InvalidPeriod {
            period: period.to_string(),
        })?;

    let hour = match period {
        Period::Am => hour % 12,
        Period::Pm => hour % 12 + 12,
    };

    Ok(Hour(hour as u8))
}

impl<'de> Deserialize<'de> for Hour {
    /// Accepts either a number in 24-hour notation or a 12-hour string like `"07 AM"`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawHour {
            Number(u32),
            Clock(String),
        }

        match RawHour::deserialize(deserializer)? {
            RawHour::Number(hour) => Hour::new(hour).map_err(de::Error::custom),
            RawHour::Clock(input) => parse_twelve_hour(&input).map_err(de::Error::custom),
        }
    }
}
