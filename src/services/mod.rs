//! Service layer.
//!
//! Date-dependent business logic that sits on top of the contact directory.

pub mod birthday_service;
pub mod clock;

pub use birthday_service::{
    upcoming_birthdays, upcoming_birthdays_within, UpcomingBirthday,
    DEFAULT_BIRTHDAY_WINDOW_DAYS,
};
pub use clock::{Clock, FixedClock, SystemClock};
