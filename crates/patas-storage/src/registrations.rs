//! Persisted registration records
//!
//! Submitted volunteer registrations accumulate under a single storage key as
//! a JSON array. Each record is the field-name to value mapping collected from
//! the form at submission time. Appends are read-then-write over the full
//! array, the same shape the site keeps in local storage.

use std::collections::BTreeMap;

use crate::store::LocalStore;
use crate::Result;

pub const REGISTRATIONS_KEY: &str = "patasAmigasRegistrations";

pub type RegistrationRecord = BTreeMap<String, String>;

pub struct RegistrationStore {
    store: LocalStore,
}

impl RegistrationStore {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// All persisted registrations, oldest first. A missing key is an empty
    /// list, not an error.
    pub fn all(&self) -> Result<Vec<RegistrationRecord>> {
        match self.store.get_item(REGISTRATIONS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Append one record to the persisted list.
    pub fn append(&self, record: RegistrationRecord) -> Result<()> {
        let mut registrations = self.all()?;
        registrations.push(record);

        let raw = serde_json::to_string(&registrations)?;
        self.store.set_item(REGISTRATIONS_KEY, &raw)?;

        tracing::info!(count = registrations.len(), "Saved registration");

        Ok(())
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.all()?.len())
    }
}

impl Clone for RegistrationStore {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}
