use crate::error::{Result, StoreError};
use crate::kv::{KeyValueStore, PEOPLE_LIST_CORRUPT_KEY, PEOPLE_LIST_KEY};
use peoplebook_core::time::now_millis;
use peoplebook_core::{validate, FieldErrors, PageWindow, PersonDraft, PersonId, PersonRecord};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Owns the person directory. Every mutation rewrites the full `peopleList`
/// snapshot before returning; if that write fails the in-memory collection
/// stays authoritative and the next write retries the whole snapshot.
pub struct RecordStore<'a, K: KeyValueStore + ?Sized> {
    kv: &'a K,
    records: Vec<PersonRecord>,
    last_minted: Option<i64>,
    dirty: bool,
}

impl<'a, K: KeyValueStore + ?Sized> RecordStore<'a, K> {
    /// Reads the persisted directory. A missing, unreadable or corrupt
    /// snapshot yields an empty directory.
    pub fn load(kv: &'a K) -> Self {
        let records = match kv.get(PEOPLE_LIST_KEY) {
            Ok(Some(raw)) => parse_snapshot(kv, &raw),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(error = %err, "failed to read people list, starting empty");
                Vec::new()
            }
        };
        debug!(count = records.len(), "people list loaded");
        Self {
            kv,
            records,
            last_minted: None,
            dirty: false,
        }
    }

    pub fn validate(&self, draft: &PersonDraft) -> FieldErrors {
        validate(draft)
    }

    pub fn upsert(&mut self, draft: PersonDraft) -> Result<PersonRecord> {
        self.upsert_at(now_millis(), draft)
    }

    /// Commits a draft. A draft whose id matches a stored record replaces
    /// that record in place, every field included; a draft without an id is
    /// appended under a freshly minted id.
    pub fn upsert_at(&mut self, now_ms: i64, draft: PersonDraft) -> Result<PersonRecord> {
        let errors = validate(&draft);
        if !errors.is_empty() {
            return Err(StoreError::Validation(errors));
        }

        let record = match draft.id {
            Some(id) => {
                let record = draft.into_record(id);
                match self.records.iter_mut().find(|existing| existing.id == id) {
                    Some(slot) => {
                        *slot = record.clone();
                        debug!(%id, "record replaced");
                    }
                    None => {
                        self.records.push(record.clone());
                        debug!(%id, "record appended with caller id");
                    }
                }
                record
            }
            None => {
                let id = self.mint_id(now_ms)?;
                let record = draft.into_record(id);
                self.records.push(record.clone());
                debug!(%id, "record created");
                record
            }
        };

        self.persist()?;
        Ok(record)
    }

    /// Removes the record with `id`. Returns `false` without writing when no
    /// such record exists.
    pub fn delete(&mut self, id: PersonId) -> Result<bool> {
        let Some(index) = self.records.iter().position(|record| record.id == id) else {
            return Ok(false);
        };
        self.records.remove(index);
        debug!(%id, "record deleted");
        self.persist()?;
        Ok(true)
    }

    pub fn find_by_id(&self, id: PersonId) -> Option<PersonRecord> {
        self.records.iter().find(|record| record.id == id).cloned()
    }

    pub fn list(&self) -> Vec<PersonRecord> {
        self.records.clone()
    }

    pub fn records(&self) -> &[PersonRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn page(&self, page_number: usize, page_size: usize) -> PageWindow<PersonRecord> {
        PageWindow::from_slice(&self.records, page_number, page_size)
    }

    /// True when the last write failed and memory is ahead of storage.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn flush(&mut self) -> Result<()> {
        self.persist()
    }

    fn mint_id(&mut self, now_ms: i64) -> Result<PersonId> {
        let floor = self
            .records
            .iter()
            .map(|record| record.id.as_i64())
            .chain(self.last_minted)
            .max();
        let next = match floor {
            None => Some(now_ms),
            Some(floor) => floor.checked_add(1).map(|above| above.max(now_ms)),
        };
        let id = match next {
            Some(id) => {
                self.last_minted = Some(id);
                id
            }
            None => self.highest_unused_id()?,
        };
        Ok(PersonId::from_i64(id))
    }

    // Ids have reached i64::MAX; reuse the highest gap instead of wrapping.
    fn highest_unused_id(&self) -> Result<i64> {
        let taken: HashSet<i64> = self.records.iter().map(|record| record.id.as_i64()).collect();
        (i64::MIN..=i64::MAX)
            .rev()
            .find(|candidate| !taken.contains(candidate))
            .ok_or(StoreError::IdSpaceExhausted)
    }

    fn persist(&mut self) -> Result<()> {
        let written = serde_json::to_string(&self.records)
            .map_err(StoreError::from)
            .and_then(|payload| self.kv.set(PEOPLE_LIST_KEY, &payload));
        match written {
            Ok(()) => {
                self.dirty = false;
                debug!(count = self.records.len(), "people list persisted");
                Ok(())
            }
            Err(err) => {
                self.dirty = true;
                warn!(error = %err, "failed to persist people list");
                Err(err)
            }
        }
    }
}

fn parse_snapshot<K: KeyValueStore + ?Sized>(kv: &K, raw: &str) -> Vec<PersonRecord> {
    let parsed: Vec<PersonRecord> = match serde_json::from_str(raw) {
        Ok(records) => records,
        Err(err) => {
            warn!(error = %err, "people list is corrupt, starting empty");
            if let Err(err) = kv.set(PEOPLE_LIST_CORRUPT_KEY, raw) {
                warn!(error = %err, "failed to keep corrupt people list");
            }
            return Vec::new();
        }
    };

    let mut seen = HashSet::with_capacity(parsed.len());
    let mut records = Vec::with_capacity(parsed.len());
    for record in parsed {
        if seen.insert(record.id) {
            records.push(record);
        } else {
            warn!(id = %record.id, "dropping duplicate record id from people list");
        }
    }
    records
}
