mod appointment;
mod consts;
mod convert;
mod prelude;
mod types;

#[cfg(test)]
mod test_utils;

pub use appointment::{AppointmentDate, AppointmentDateError, status_label};
pub use consts::*;
pub use convert::{current_ethiopian_date, ethiopian_to_gregorian, gregorian_to_ethiopian};
pub use types::{Day, Month, Year, days_in_month, days_in_year, pagume_days};

use crate::prelude::*;
use chrono::NaiveDate;
use std::convert::TryFrom;
use std::str::FromStr;

/// A date in the Ethiopian calendar.
///
/// The fields are public and unchecked so that conversion arithmetic can run
/// on already-validated or deliberately out-of-range values (`day` 31 simply
/// rolls into the next month). Use [`EthiopianDate::new`] or
/// [`EthiopianDate::validate`] where the input comes from a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}/{:02}/{}", day, month, year)]
pub struct EthiopianDate {
    pub year:  i32,
    pub month: u8,
    pub day:   u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {month:02}/{year}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Date out of representable range: {_0}")]
    OutOfRange(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl EthiopianDate {
    /// Creates a date after checking year, month and day against the calendar
    ///
    /// # Errors
    /// Returns `InvalidYear`, `InvalidMonth` or `InvalidDay` for the first component out of range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let year_typed = Year::new(year)?;
        let month_typed = Month::new(month)?;
        let day_typed = Day::new(day, year, month_typed)?;
        Ok(Self::from_typed(year_typed, month_typed, day_typed))
    }

    /// Creates a date from components that are already validated
    pub fn from_typed(year: Year, month: Month, day: Day) -> Self {
        Self {
            year:  i32::from(year.get()),
            month: month.get(),
            day:   day.get(),
        }
    }

    /// Checks every component against the calendar.
    ///
    /// # Errors
    /// Same as [`EthiopianDate::new`].
    pub fn validate(&self) -> Result<(), DateError> {
        Self::new(self.year, self.month, self.day).map(|_| ())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Returns the Year type if the year is in range
    pub fn year_typed(&self) -> Result<Year, DateError> {
        Year::new(self.year)
    }

    /// Returns the Month type if the month is in range
    pub fn month_typed(&self) -> Result<Month, DateError> {
        Month::new(self.month)
    }

    /// Returns the Day type if the day exists in this month
    pub fn day_typed(&self) -> Result<Day, DateError> {
        Day::new(self.day, self.year, self.month_typed()?)
    }

    pub fn is_leap_year(&self) -> bool {
        is_ethiopian_leap_year(self.year)
    }

    /// 1-based position of the day within its year, counted without range checks
    pub fn ordinal(&self) -> i64 {
        convert::days_from_new_year(self) + 1
    }

    /// Amharic month name, empty when the month is out of range
    pub fn month_name(&self) -> &'static str {
        ethiopian_month_name(self.month)
    }

    /// Renders as `"<MonthName> <day>, <year>"`, e.g. `"መስከረም 1, 2016"`
    pub fn with_month_name(&self) -> String {
        format!("{} {}, {}", self.month_name(), self.day, self.year)
    }

    /// Gregorian date of the same day.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result cannot be represented.
    pub fn to_gregorian(&self) -> Result<NaiveDate, DateError> {
        ethiopian_to_gregorian(self)
    }

    pub fn from_gregorian(date: NaiveDate) -> Self {
        gregorian_to_ethiopian(date)
    }

    /// Today's date, read from the local clock
    pub fn today() -> Self {
        current_ethiopian_date()
    }
}

impl From<NaiveDate> for EthiopianDate {
    fn from(date: NaiveDate) -> Self {
        gregorian_to_ethiopian(date)
    }
}

impl TryFrom<EthiopianDate> for NaiveDate {
    type Error = DateError;

    fn try_from(date: EthiopianDate) -> Result<Self, Self::Error> {
        ethiopian_to_gregorian(&date)
    }
}

impl FromStr for EthiopianDate {
    type Err = DateError;

    /// Parses `DD/MM/YYYY` positionally. Only the shape is checked, not the calendar range.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        match parts.as_slice() {
            [day, month, year] => Ok(Self {
                year:  Self::parse_field(year)?,
                month: Self::parse_field(month)?,
                day:   Self::parse_field(day)?,
            }),
            _ => Err(DateError::InvalidFormat(format!(
                "Expected 2 {} separators, found {}",
                DATE_SEPARATOR,
                parts.len() - 1
            ))),
        }
    }
}

impl EthiopianDate {
    /// Helper to parse a numeric field with better error messages
    fn parse_field<T: FromStr>(s: &str) -> Result<T, DateError> {
        s.parse::<T>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl serde::Serialize for EthiopianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for EthiopianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let date: Self = s.parse().map_err(serde::de::Error::custom)?;
        date.validate().map_err(serde::de::Error::custom)?;
        Ok(date)
    }
}

pub const fn is_ethiopian_leap_year(year: i32) -> bool {
    types::is_leap_year(year)
}

/// Formats as zero-padded `DD/MM/YYYY`
pub fn format_ethiopian_date(date: &EthiopianDate) -> String {
    date.to_string()
}

/// Parses `DD/MM/YYYY` without checking the calendar range.
///
/// # Errors
/// Returns `DateError::EmptyInput` or `DateError::InvalidFormat` for malformed strings.
pub fn parse_ethiopian_date(s: &str) -> Result<EthiopianDate, DateError> {
    s.parse()
}

/// Amharic name of `month` (1..=13), or `""` when out of range
pub fn ethiopian_month_name(month: u8) -> &'static str {
    Month::new(month).map_or("", Month::name)
}

pub fn ethiopian_date_with_month_name(date: &EthiopianDate) -> String {
    date.with_month_name()
}

/// Today's date as `DD/MM/YYYY`, the default for date entry forms
pub fn today_ethiopian_date_string() -> String {
    format_ethiopian_date(&current_ethiopian_date())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::eth;

    #[test]
    fn test_new_valid() {
        let date = EthiopianDate::new(2016, 3, 5).unwrap();
        assert_eq!(date, eth(2016, 3, 5));
        assert!(date.is_valid());
    }

    #[test]
    fn test_new_invalid_components() {
        assert!(matches!(
            EthiopianDate::new(0, 1, 1),
            Err(DateError::InvalidYear(0))
        ));
        assert!(matches!(
            EthiopianDate::new(2016, 14, 1),
            Err(DateError::InvalidMonth(14))
        ));
        assert!(matches!(
            EthiopianDate::new(2016, 1, 31),
            Err(DateError::InvalidDay { .. })
        ));
        assert!(matches!(
            EthiopianDate::new(2017, 13, 6),
            Err(DateError::InvalidDay {
                year: 2017,
                month: 13,
                day: 6
            })
        ));
        assert!(EthiopianDate::new(2015, 13, 6).is_ok());
        assert!(EthiopianDate::new(2016, 13, 6).is_ok());
        assert!(matches!(
            EthiopianDate::new(9992, 1, 1),
            Err(DateError::InvalidYear(9992))
        ));
    }

    #[test]
    fn test_unchecked_literal_is_allowed() {
        let date = eth(2016, 14, 35);
        assert!(!date.is_valid());
        assert!(date.month_typed().is_err());
        assert!(eth(2016, 1, 31).day_typed().is_err());
    }

    #[test]
    fn test_typed_accessors() {
        let date = eth(2016, 13, 5);
        assert_eq!(date.year_typed().unwrap().get(), 2016);
        assert!(date.month_typed().unwrap().is_pagume());
        assert_eq!(date.day_typed().unwrap().get(), 5);
    }

    #[test]
    fn test_leap_year() {
        assert!(is_ethiopian_leap_year(2015));
        assert!(!is_ethiopian_leap_year(2016));
        assert!(eth(2011, 1, 1).is_leap_year());
    }

    #[test]
    fn test_format() {
        assert_eq!(format_ethiopian_date(&eth(2016, 3, 5)), "05/03/2016");
        assert_eq!(eth(2016, 12, 30).to_string(), "30/12/2016");
        assert_eq!(eth(802, 1, 1).to_string(), "01/01/802");
    }

    #[test]
    fn test_parse() {
        let date = parse_ethiopian_date("05/03/2016").unwrap();
        assert_eq!(date.day, 5);
        assert_eq!(date.month, 3);
        assert_eq!(date.year, 2016);
    }

    #[test]
    fn test_parse_with_whitespace_and_unpadded() {
        assert_eq!(" 5 / 3 / 2016 ".parse::<EthiopianDate>().unwrap(), eth(2016, 3, 5));
    }

    #[test]
    fn test_parse_does_not_check_range() {
        assert_eq!(parse_ethiopian_date("35/14/2016").unwrap(), eth(2016, 14, 35));
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(parse_ethiopian_date(""), Err(DateError::EmptyInput)));
        assert!(matches!(
            parse_ethiopian_date("05/2016"),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_ethiopian_date("05/03/2016/1"),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_ethiopian_date("aa/03/2016"),
            Err(DateError::InvalidFormat(_))
        ));
        // Larger than a u8 day field
        assert!(matches!(
            parse_ethiopian_date("300/03/2016"),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_ethiopian_date("2016-03-05"),
            Err(DateError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_format_parse_idempotent() {
        for input in ["05/03/2016", "01/01/2000", "06/13/2015", "30/12/1999"] {
            let once = parse_ethiopian_date(input).unwrap().to_string();
            let twice = parse_ethiopian_date(&once).unwrap().to_string();
            assert_eq!(once, input);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_month_names() {
        assert_eq!(ethiopian_month_name(1), "መስከረም");
        assert_eq!(ethiopian_month_name(13), "ጳጉሜን");
        assert_eq!(ethiopian_month_name(0), "");
        assert_eq!(ethiopian_month_name(14), "");
    }

    #[test]
    fn test_with_month_name() {
        assert_eq!(
            ethiopian_date_with_month_name(&eth(2016, 1, 1)),
            "መስከረም 1, 2016"
        );
        assert_eq!(eth(2018, 4, 1).with_month_name(), "ታኅሣሥ 1, 2018");
        // Out-of-range month renders with an empty name
        assert_eq!(eth(2016, 14, 5).with_month_name(), " 5, 2016");
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(eth(2016, 1, 1).ordinal(), 1);
        assert_eq!(eth(2016, 2, 1).ordinal(), 31);
        assert_eq!(eth(2016, 13, 5).ordinal(), 365);
        assert_eq!(eth(2015, 13, 6).ordinal(), 366);
    }

    #[test]
    fn test_ordering() {
        assert!(eth(2015, 13, 6) < eth(2016, 1, 1));
        assert!(eth(2016, 1, 30) < eth(2016, 2, 1));
        assert!(eth(2016, 2, 1) < eth(2016, 2, 2));
    }

    #[test]
    fn test_serde_string_format() {
        let date = eth(2016, 3, 5);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""05/03/2016""#);
        let parsed: EthiopianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_serde_validation() {
        // 2017 has no Pagume 6
        let result: Result<EthiopianDate, _> = serde_json::from_str(r#""06/13/2017""#);
        assert!(result.is_err());

        let result: Result<EthiopianDate, _> = serde_json::from_str(r#""06/13/2015""#);
        assert!(result.is_ok());

        let result: Result<EthiopianDate, _> = serde_json::from_str(r#""06/13/2016""#);
        assert!(result.is_ok());

        let result: Result<EthiopianDate, _> = serde_json::from_str(r#""01/14/2016""#);
        assert!(result.is_err());

        let result: Result<EthiopianDate, _> = serde_json::from_str(r#""not a date""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            DateError::InvalidMonth(14).to_string(),
            "Invalid month: 14 (must be 1-13)"
        );
        assert_eq!(
            DateError::InvalidDay {
                year: 2016,
                month: 13,
                day: 6
            }
            .to_string(),
            "Invalid day 6 for month 13/2016"
        );
        assert_eq!(DateError::EmptyInput.to_string(), "Empty date string");
    }

    #[test]
    fn test_gregorian_trait_conversions() {
        let date = eth(2016, 1, 1);
        let greg: NaiveDate = date.try_into().unwrap();
        assert_eq!(greg, crate::test_utils::greg(2023, 9, 11));
        assert_eq!(EthiopianDate::from(greg), date);
        assert_eq!(EthiopianDate::from_gregorian(greg), date);
        assert_eq!(date.to_gregorian().unwrap(), greg);
    }

    #[test]
    fn test_today_string_shape() {
        let today = today_ethiopian_date_string();
        let parsed = parse_ethiopian_date(&today).unwrap();
        assert_eq!(parsed, current_ethiopian_date());
        assert_eq!(parsed.to_string(), today);
    }
}
