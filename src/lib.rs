//! Contact Assistant - an interactive command-line address book.
//!
//! Keeps contacts with their phone numbers and birthdays in memory and answers
//! text commands such as `add`, `change`, `phone`, `all` and `birthdays`.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact record
//! - **repositories**: The in-memory contact directory
//! - **services**: Upcoming-birthday calculation and the clock it reads
//! - **commands**: Input parsing, dispatch and reply formatting
//! - **config**: Configuration from environment variables
//! - **error**: Error types

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use commands::{Assistant, Reply};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, ContactError};
pub use models::ContactRecord;
pub use repositories::{ContactDirectory, UpsertOutcome};
pub use services::{upcoming_birthdays, Clock, FixedClock, SystemClock, UpcomingBirthday};
