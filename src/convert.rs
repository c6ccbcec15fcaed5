//! Conversion between Ethiopian and Gregorian dates.
//!
//! Every Ethiopian year is anchored on Gregorian September 11. The shift of the
//! new year to September 12 ahead of Gregorian leap years is not modelled, so
//! Pagume 6 of a leap year lands on the next year's Meskerem 1 when converted
//! back, and a common year whose span covers February 29 gets a Pagume 6.

use chrono::{Datelike, Local, NaiveDate, TimeDelta};

use crate::consts::{DAYS_IN_FULL_MONTH, MESKEREM, PAGUME, YEAR_OFFSET};
use crate::types::{days_in_month, new_year_gregorian, pagume_days};
use crate::{DateError, EthiopianDate};

/// Converts a Gregorian date to the Ethiopian calendar. Total over `NaiveDate`.
pub fn gregorian_to_ethiopian(date: NaiveDate) -> EthiopianDate {
    let current = date.year() - YEAR_OFFSET;

    // Before September 11 the date still belongs to the year that began last September
    let (year, new_year) = match new_year_gregorian(current) {
        Some(new_year) if date >= new_year => (current, new_year),
        _ => {
            let previous = current - 1;
            // Only the earliest representable months lack a previous new year
            (previous, new_year_gregorian(previous).unwrap_or(NaiveDate::MIN))
        }
    };

    from_day_offset(year, date.signed_duration_since(new_year).num_days())
}

/// Converts an Ethiopian date to the Gregorian calendar.
///
/// Month and day are not range-checked: day 31 rolls into the following month,
/// day 0 is the last day of the previous one.
///
/// # Errors
/// Returns `DateError::OutOfRange` when the result is outside what `NaiveDate` can hold.
pub fn ethiopian_to_gregorian(date: &EthiopianDate) -> Result<NaiveDate, DateError> {
    let out_of_range = || DateError::OutOfRange(date.to_string());

    let new_year = new_year_gregorian(date.year).ok_or_else(out_of_range)?;

    TimeDelta::try_days(days_from_new_year(date))
        .and_then(|delta| new_year.checked_add_signed(delta))
        .ok_or_else(out_of_range)
}

/// Today's Ethiopian date according to the local clock
pub fn current_ethiopian_date() -> EthiopianDate {
    gregorian_to_ethiopian(Local::now().date_naive())
}

/// Zero-based count of days between Meskerem 1 and `date`, without range checks
pub(crate) fn days_from_new_year(date: &EthiopianDate) -> i64 {
    let preceding: i64 = (MESKEREM..date.month)
        .map(|month| i64::from(permissive_month_length(date.year, month)))
        .sum();
    preceding + i64::from(date.day) - 1
}

/// Walks the month table; anything left after Nehase belongs to Pagume.
fn from_day_offset(year: i32, offset: i64) -> EthiopianDate {
    let mut remaining = offset;
    for month in MESKEREM..PAGUME {
        let length = i64::from(days_in_month(year, month));
        if remaining < length {
            return EthiopianDate {
                year,
                month,
                day: day_from_remainder(remaining),
            };
        }
        remaining -= length;
    }

    EthiopianDate {
        year,
        month: PAGUME,
        day: day_from_remainder(remaining),
    }
}

fn day_from_remainder(remaining: i64) -> u8 {
    // below 6 for every offset inside one new-year span
    u8::try_from(remaining + 1).unwrap_or(u8::MAX)
}

/// Month length used by conversion arithmetic: months past Pagume count as full months
fn permissive_month_length(year: i32, month: u8) -> u8 {
    if month == PAGUME {
        pagume_days(year)
    } else {
        DAYS_IN_FULL_MONTH
    }
}
