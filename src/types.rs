use crate::DateError;
use crate::consts::{
    DAYS_IN_COMMON_YEAR, DAYS_IN_FULL_MONTH, DAYS_IN_MONTH, LEAP_YEAR_CYCLE, LEAP_YEAR_REMAINDER, MAX_MONTH, MAX_YEAR,
    MESKEREM, MIN_DAY, MONTH_NAMES, NEW_YEAR_GREGORIAN_DAY, NEW_YEAR_GREGORIAN_MONTH, PAGUME,
    PAGUME_DAYS, PAGUME_DAYS_LEAP, YEAR_OFFSET,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::num::NonZeroU16;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9991)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's positive and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is < 1 or > `MAX_YEAR`.
    pub fn new(value: i32) -> Result<Self, DateError> {
        u16::try_from(value)
            .ok()
            .filter(|y| *y <= MAX_YEAR)
            .and_then(NonZeroU16::new)
            .map(Self)
            .ok_or(DateError::InvalidYear(value))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether this is a leap year (`year % 4 == 3`)
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.0.get() as i32)
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(i32::from(value))
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=13)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Amharic name of the month
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.0.get() as usize]
    }

    /// Returns true for Pagume
    pub const fn is_pagume(self) -> bool {
        self.0.get() == PAGUME
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: i32, month: Month) -> Result<Self, DateError> {
        let invalid = DateError::InvalidDay {
            year,
            month: month.get(),
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;

        if value > days_in_month(year, month.get()) {
            return Err(invalid);
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Without year/month context only the 30-day ceiling can be checked
        if value < MIN_DAY || value > DAYS_IN_MONTH[1] {
            return Err(DateError::InvalidDay {
                year: 0,
                month: 0,
                day: value,
            });
        }
        NonZeroU8::new(value).map(Self).ok_or(DateError::InvalidDay {
            year: 0,
            month: 0,
            day: value,
        })
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Ethiopian leap years are those one short of a multiple of four (…, 2011, 2015, 2019, …)
pub const fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == LEAP_YEAR_REMAINDER
}

/// Gregorian day on which Ethiopian `year` begins (always September 11)
pub(crate) fn new_year_gregorian(year: i32) -> Option<NaiveDate> {
    year.checked_add(YEAR_OFFSET).and_then(|gregorian_year| {
        NaiveDate::from_ymd_opt(gregorian_year, NEW_YEAR_GREGORIAN_MONTH, NEW_YEAR_GREGORIAN_DAY)
    })
}

/// Length of Pagume.
///
/// Six days in leap years. With the new year fixed on September 11, a common
/// year whose span covers February 29 also has 366 days, and the extra day is
/// Pagume 6.
pub fn pagume_days(year: i32) -> u8 {
    if is_leap_year(year) {
        return PAGUME_DAYS_LEAP;
    }

    let span = new_year_gregorian(year)
        .zip(year.checked_add(1).and_then(new_year_gregorian))
        .map(|(start, next)| next.signed_duration_since(start).num_days());

    match span {
        Some(days) if days > i64::from(DAYS_IN_COMMON_YEAR) => PAGUME_DAYS_LEAP,
        _ => PAGUME_DAYS,
    }
}

/// Days in `month` of `year`, or 0 when the month does not exist
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        PAGUME => pagume_days(year),
        MESKEREM..PAGUME => DAYS_IN_MONTH[month as usize],
        _ => 0,
    }
}

pub fn days_in_year(year: i32) -> u16 {
    u16::from(DAYS_IN_FULL_MONTH) * u16::from(PAGUME - 1) + u16::from(pagume_days(year))
}
