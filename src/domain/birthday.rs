//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual format birthdays are entered and displayed in.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2})\.(\d{2})\.(\d{4})$").expect("Failed to compile birthday regex")
});

/// A calendar date parsed from `DD.MM.YYYY`.
///
/// Only the date is kept; there is no time-of-day or timezone component.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("12.06.1990").unwrap();
/// assert_eq!(birthday.format(), "12.06.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// The day and month must be two digits and the year four, so that
    /// [`Birthday::format`] reproduces the input exactly.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text does not match the
    /// format or does not name a real calendar date (e.g. `31.04.2020`).
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        let invalid = || ValidationError::InvalidBirthday(raw.to_string());

        let caps = BIRTHDAY_REGEX.captures(raw).ok_or_else(invalid)?;
        let day: u32 = caps[1].parse().map_err(|_| invalid())?;
        let month: u32 = caps[2].parse().map_err(|_| invalid())?;
        let year: i32 = caps[3].parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Wrap an already-valid date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Render back to `DD.MM.YYYY`.
    pub fn format(&self) -> String {
        self.0.format(BIRTHDAY_FORMAT).to_string()
    }

    /// The date this birthday falls on in `year`.
    ///
    /// A 29 February birthday is observed on 1 March in non-leap years.
    pub fn anniversary_in(&self, year: i32) -> NaiveDate {
        self.0.with_year(year).unwrap_or_else(|| {
            NaiveDate::from_ymd_opt(year, 3, 1).unwrap_or(self.0)
        })
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.format().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}
