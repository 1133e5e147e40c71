//! Contact record: one name, its phone numbers and an optional birthday.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{ContactError, ContactResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry in the address book.
///
/// Phones keep insertion order and may repeat. The birthday stays unset until
/// [`ContactRecord::set_birthday`] is called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: ContactName,

    #[serde(default)]
    pub phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Append a phone number. Duplicates are kept.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Remove every phone equal to `value`. Missing numbers are ignored.
    pub fn remove_phone(&mut self, value: &str) {
        self.phones.retain(|p| p.as_str() != value);
    }

    /// Replace the first phone equal to `old_value` with `new_value`, in place.
    ///
    /// # Errors
    ///
    /// - `ContactError::Validation` if `new_value` is not ten digits
    /// - `ContactError::NotFound` if no phone equals `old_value`
    pub fn edit_phone(&mut self, old_value: &str, new_value: &str) -> ContactResult<()> {
        let replacement = PhoneNumber::new(new_value)?;

        let slot = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old_value)
            .ok_or_else(|| Self::phone_not_found(old_value))?;

        *slot = replacement;
        Ok(())
    }

    /// Look up a phone by its digits.
    pub fn find_phone(&self, value: &str) -> ContactResult<&PhoneNumber> {
        self.phones
            .iter()
            .find(|p| p.as_str() == value)
            .ok_or_else(|| Self::phone_not_found(value))
    }

    /// Set or overwrite the birthday.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Phones joined with `"; "`.
    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Human-readable summary, e.g.
    /// `Contact name: Ann, phones: 0501234567, Birthday: 12.06.1990`.
    pub fn describe(&self) -> String {
        let birthday = self
            .birthday
            .map(|b| format!(", Birthday: {}", b.format()))
            .unwrap_or_default();

        format!(
            "Contact name: {}, phones: {}{}",
            self.name,
            self.phones_joined(),
            birthday
        )
    }

    fn phone_not_found(value: &str) -> ContactError {
        ContactError::NotFound(format!("Phone number {}", value))
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
