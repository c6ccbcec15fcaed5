use chrono::NaiveDate;

use crate::EthiopianDate;

/// Unchecked Ethiopian date literal
pub(crate) const fn eth(year: i32, month: u8, day: u8) -> EthiopianDate {
    EthiopianDate { year, month, day }
}

pub(crate) fn greg(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
