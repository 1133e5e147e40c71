//! Upcoming birthday calculation.
//!
//! Finds contacts whose next birthday falls within a window of days starting
//! today. Birthdays landing on a weekend are congratulated on the following
//! Monday, but whether a contact is included is decided by the real date.

use crate::domain::{Birthday, ContactName};
use crate::repositories::ContactDirectory;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

/// Size of the look-ahead window in days, inclusive of both ends.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: i64 = 7;

/// Display format of congratulation dates.
pub const CONGRATULATION_DATE_FORMAT: &str = "%Y.%m.%d";

/// A contact to congratulate and the (weekday) date to do it on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: ContactName,
    #[serde(serialize_with = "serialize_congratulation_date")]
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// Congratulation date as `YYYY.MM.DD`.
    pub fn formatted_date(&self) -> String {
        self.congratulation_date
            .format(CONGRATULATION_DATE_FORMAT)
            .to_string()
    }
}

fn serialize_congratulation_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&date.format(CONGRATULATION_DATE_FORMAT))
}

/// Contacts with a birthday within [`DEFAULT_BIRTHDAY_WINDOW_DAYS`] of `today`.
pub fn upcoming_birthdays(directory: &ContactDirectory, today: NaiveDate) -> Vec<UpcomingBirthday> {
    upcoming_birthdays_within(directory, today, DEFAULT_BIRTHDAY_WINDOW_DAYS)
}

/// Contacts whose next birthday is between 0 and `window_days` days from `today`.
///
/// The directory is only read. Results follow directory iteration order.
pub fn upcoming_birthdays_within(
    directory: &ContactDirectory,
    today: NaiveDate,
    window_days: i64,
) -> Vec<UpcomingBirthday> {
    directory
        .iter()
        .filter_map(|record| {
            let birthday = record.birthday?;
            let next = next_anniversary(birthday.date(), today);
            let days_until = (next - today).num_days();

            if !(0..=window_days).contains(&days_until) {
                return None;
            }

            Some(UpcomingBirthday {
                name: record.name.clone(),
                congratulation_date: shift_weekend_to_monday(next),
            })
        })
        .collect()
}

/// The first anniversary of `birth_date` on or after `today`.
pub fn next_anniversary(birth_date: NaiveDate, today: NaiveDate) -> NaiveDate {
    let birthday = Birthday::from_date(birth_date);
    let this_year = birthday.anniversary_in(today.year());

    if this_year < today {
        birthday.anniversary_in(today.year() + 1)
    } else {
        this_year
    }
}

/// Move Saturday and Sunday forward to the next Monday.
pub fn shift_weekend_to_monday(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}
