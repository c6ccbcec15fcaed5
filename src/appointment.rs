use std::sync::LazyLock;

use chrono::NaiveDate;
use regex_lite::Regex;
use serde::Serialize;

use crate::{DateError, EthiopianDate, parse_ethiopian_date};

/// Shape accepted from date entry forms: two-digit day and month, four-digit year
#[allow(clippy::expect_used)]
static DATE_INPUT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").expect("date input pattern compiles"));

/// A booked or rescheduled appointment day in both calendars.
///
/// Appointments keep the Ethiopian string the citizen entered alongside the
/// Gregorian `YYYY-MM-DD` it converts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppointmentDate {
    #[serde(rename = "date_ethiopian")]
    ethiopian: EthiopianDate,
    #[serde(rename = "date_gregorian")]
    gregorian: NaiveDate,
}

/// Error type for dates entered in booking and reschedule forms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppointmentDateError {
    /// No date was entered.
    #[error("Missing required date")]
    MissingDate,

    /// Input is not `DD/MM/YYYY`.
    #[error("Invalid date format. Use DD/MM/YYYY")]
    InvalidFormat { input: String },

    /// Input has the right shape but is not a date in the calendar.
    #[error("Invalid Ethiopian date")]
    InvalidDate(#[from] DateError),
}

impl AppointmentDateError {
    /// HTTP status to answer with; every variant is a client error
    pub const fn status_code(&self) -> u16 {
        400
    }

    /// Message shown to the person who entered the date
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::MissingDate => "Missing required date",
            Self::InvalidFormat { .. } => "Invalid date format. Use DD/MM/YYYY",
            Self::InvalidDate(_) => "Invalid Ethiopian date",
        }
    }
}

impl AppointmentDate {
    /// Validates the date a citizen requested when booking.
    ///
    /// # Errors
    /// Returns `AppointmentDateError` if the input is empty, not `DD/MM/YYYY`,
    /// or not a day of the Ethiopian calendar.
    pub fn from_requested(input: &str) -> Result<Self, AppointmentDateError> {
        Self::from_input(input, "requested")
    }

    /// Validates the new date an administrator picked when rescheduling.
    ///
    /// # Errors
    /// Same as [`AppointmentDate::from_requested`].
    pub fn from_rescheduled(input: &str) -> Result<Self, AppointmentDateError> {
        Self::from_input(input, "rescheduled")
    }

    fn from_input(input: &str, kind: &'static str) -> Result<Self, AppointmentDateError> {
        let input = input.trim();
        if input.is_empty() {
            tracing::warn!(kind, "Appointment date missing");
            return Err(AppointmentDateError::MissingDate);
        }

        if !DATE_INPUT_PATTERN.is_match(input) {
            tracing::warn!(kind, input, "Appointment date does not match DD/MM/YYYY");
            return Err(AppointmentDateError::InvalidFormat {
                input: input.to_owned(),
            });
        }

        let checked = parse_ethiopian_date(input).and_then(|ethiopian| {
            ethiopian.validate()?;
            Ok(Self {
                ethiopian,
                gregorian: ethiopian.to_gregorian()?,
            })
        });

        match checked {
            Ok(date) => {
                tracing::debug!(
                    kind,
                    ethiopian = %date.ethiopian,
                    gregorian = %date.gregorian,
                    "Appointment date accepted"
                );
                Ok(date)
            }
            Err(err) => {
                tracing::warn!(kind, input, error = %err, "Appointment date rejected");
                Err(err.into())
            }
        }
    }

    pub const fn ethiopian(&self) -> EthiopianDate {
        self.ethiopian
    }

    pub const fn gregorian(&self) -> NaiveDate {
        self.gregorian
    }

    /// Stored form of the Ethiopian date, `DD/MM/YYYY`
    pub fn ethiopian_string(&self) -> String {
        self.ethiopian.to_string()
    }

    /// Stored form of the Gregorian date, `YYYY-MM-DD`
    pub fn gregorian_iso(&self) -> String {
        self.gregorian.format("%Y-%m-%d").to_string()
    }

    /// Label shown on the status page, e.g. `"ሕዳር 5, 2016"`
    pub fn label(&self) -> String {
        self.ethiopian.with_month_name()
    }
}

/// Renders a stored `DD/MM/YYYY` date for display.
///
/// Stored values are shown as they are when they cannot be parsed; an
/// out-of-range month renders with an empty name.
pub fn status_label(stored: &str) -> String {
    match parse_ethiopian_date(stored) {
        Ok(date) => date.with_month_name(),
        Err(err) => {
            tracing::warn!(stored, error = %err, "Stored appointment date is malformed");
            stored.to_owned()
        }
    }
}
