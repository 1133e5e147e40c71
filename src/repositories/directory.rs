use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{ContactError, ContactResult};
use crate::models::ContactRecord;
use std::collections::BTreeMap;

/// Result of [`ContactDirectory::upsert_contact`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new record was created with the given phone.
    Added,
    /// A record with that name was already present and was left untouched.
    AlreadyExists,
}

/// In-memory address book keyed by case-folded contact name.
///
/// At most one record exists per case-insensitive name. Iteration follows the
/// folded key order, which is stable between calls as long as the directory is
/// not mutated.
#[derive(Debug, Clone, Default)]
pub struct ContactDirectory {
    records: BTreeMap<String, ContactRecord>,
}

impl ContactDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::Duplicate` if a record with the same name
    /// (ignoring case) is already stored.
    pub fn add(&mut self, record: ContactRecord) -> ContactResult<()> {
        let key = record.name.key();
        if self.records.contains_key(&key) {
            return Err(ContactError::Duplicate(record.name.into_inner()));
        }

        tracing::debug!(name = %record.name, "Adding contact");
        self.records.insert(key, record);
        Ok(())
    }

    /// Case-insensitive lookup. Absence is not an error.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(&ContactName::key_for(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(&ContactName::key_for(name))
    }

    /// Like [`find_mut`](Self::find_mut) but reports a missing contact as an error.
    pub fn get_mut(&mut self, name: &str) -> ContactResult<&mut ContactRecord> {
        self.find_mut(name)
            .ok_or_else(|| ContactError::NotFound(format!("Contact '{}'", name)))
    }

    /// Remove the matching record if present.
    pub fn remove(&mut self, name: &str) -> Option<ContactRecord> {
        let removed = self.records.remove(&ContactName::key_for(name));
        if removed.is_some() {
            tracing::debug!(name, "Removed contact");
        }
        removed
    }

    /// Create a contact with a single phone unless the name is already taken.
    ///
    /// An existing contact is never modified: the phone is not appended and is
    /// not even validated.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::Validation` if a new contact would be created
    /// with an empty name or an invalid phone.
    pub fn upsert_contact(&mut self, name: &str, phone: &str) -> ContactResult<UpsertOutcome> {
        if self.find(name).is_some() {
            tracing::debug!(name, "Contact already exists, leaving it unchanged");
            return Ok(UpsertOutcome::AlreadyExists);
        }

        let mut record = ContactRecord::new(ContactName::new(name)?);
        record.add_phone(PhoneNumber::new(phone)?);
        self.add(record)?;

        Ok(UpsertOutcome::Added)
    }

    /// All records in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> + Clone + '_ {
        self.records.values()
    }

    /// `(name, phones, birthday)` for every record.
    ///
    /// The iterator is lazy and can be cloned to walk the entries again.
    pub fn list_all(
        &self,
    ) -> impl Iterator<Item = (&ContactName, &[PhoneNumber], Option<&Birthday>)> + Clone + '_ {
        self.iter()
            .map(|r| (&r.name, r.phones.as_slice(), r.birthday.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
