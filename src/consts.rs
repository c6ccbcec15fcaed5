/// Number of months in an Ethiopian year (twelve full months plus Pagume)
pub const MAX_MONTH: u8 = 13;

/// First month of the year (Meskerem)
pub const MESKEREM: u8 = 1;
/// The short thirteenth month (Pagume)
pub const PAGUME: u8 = 13;

/// First day of a month
pub const MIN_DAY: u8 = 1;

/// Every month except Pagume has exactly 30 days
pub const DAYS_IN_FULL_MONTH: u8 = 30;
/// Days in Pagume for common years
pub const PAGUME_DAYS: u8 = 5;
/// Days in Pagume for leap years, and for common years whose span covers February 29
pub const PAGUME_DAYS_LEAP: u8 = 6;

/// Days in each month (index 0 is unused, months are 1-indexed)
/// Pagume shows 5 days (common year default)
pub const DAYS_IN_MONTH: [u8; 14] = [
    0, // index 0 unused (months are 1-indexed)
    30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, // Meskerem..Nehase
    5,  // Pagume (common year, adjusted by pagume_days)
];

/// Days in a year without a sixth Pagume day
pub(crate) const DAYS_IN_COMMON_YEAR: u16 = 365;

/// Amharic month names (index 0 is unused, months are 1-indexed)
pub const MONTH_NAMES: [&str; 14] = [
    "",
    "መስከረም",
    "ጥቅምት",
    "ሕዳር",
    "ታኅሣሥ",
    "ጥር",
    "የካቲት",
    "መጋቢት",
    "ሚያዝያ",
    "ግንቦት",
    "ሰኔ",
    "ሐምሌ",
    "ነሐሴ",
    "ጳጉሜን",
];

/// Ethiopian year `n` starts in Gregorian year `n + YEAR_OFFSET`
pub const YEAR_OFFSET: i32 = 7;

/// Gregorian month of the Ethiopian new year (September)
pub const NEW_YEAR_GREGORIAN_MONTH: u32 = 9;
/// Gregorian day of the Ethiopian new year.
/// Fixed at the 11th; the shift to the 12th before Gregorian leap years is not applied.
pub const NEW_YEAR_GREGORIAN_DAY: u32 = 11;

/// Leap years recur every 4 years...
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// ...on the year whose remainder is 3
pub(crate) const LEAP_YEAR_REMAINDER: i32 = 3;

/// Field separator of the stored `DD/MM/YYYY` form
pub const DATE_SEPARATOR: char = '/';

/// Maximum valid year (inclusive). Pagume of this year still ends in Gregorian 9999,
/// so every valid date has a four-digit `YYYY-MM-DD` counterpart.
pub const MAX_YEAR: u16 = 9999 - YEAR_OFFSET as u16 - 1;

