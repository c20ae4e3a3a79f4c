use crate::error::Result;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Key holding the JSON array of person records.
pub const PEOPLE_LIST_KEY: &str = "peopleList";
/// Key holding the profile picture data URI.
pub const PROFILE_PICTURE_KEY: &str = "profilePicture";
/// Where an unreadable `peopleList` payload is parked instead of being lost.
pub const PEOPLE_LIST_CORRUPT_KEY: &str = "peopleList.corrupt";

/// Synchronous string storage shared by the record and image stores.
///
/// `set` must replace the whole value in one step: readers never observe a
/// partially written snapshot.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Process-local store for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryKv {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let kv = Self::new();
        kv.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        kv
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
