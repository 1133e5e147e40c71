//! ContactName value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The name a contact is filed under.
///
/// The original spelling is kept for display, while lookups go through
/// [`ContactName::key`], which folds case.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::ContactName;
///
/// let name = ContactName::new("Ann").unwrap();
/// assert_eq!(name.as_str(), "Ann");
/// assert_eq!(name.key(), ContactName::key_for("ANN"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName, validating that it's not empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty or whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Case-folded form used as the directory key.
    pub fn key(&self) -> String {
        Self::key_for(&self.0)
    }

    /// Case-folded form of an arbitrary lookup string.
    pub fn key_for(name: &str) -> String {
        name.to_lowercase()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
