//! Generic in-memory entity store.
//!
//! One `EntityStore` per record type: an ordered map from ID to record and
//! the next ID to hand out, both behind a single lock so every operation is
//! one critical section.

use std::collections::BTreeMap;

use chrono::Utc;
use parking_lot::RwLock;

use crate::config::FIRST_RECORD_ID;
use crate::domain::Entity;
use crate::errors::{AppResult, OptionExt};

struct Inner<E> {
    /// IDs only ever grow, so key order is insertion order.
    records: BTreeMap<i64, E>,
    next_id: i64,
}

/// Volatile CRUD storage for a single entity type.
pub struct EntityStore<E: Entity> {
    inner: RwLock<Inner<E>>,
}

impl<E: Entity> Default for EntityStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> EntityStore<E> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: BTreeMap::new(),
                next_id: FIRST_RECORD_ID,
            }),
        }
    }

    /// Create a store pre-populated through the regular create path, so
    /// seeds consume IDs from the same counter as later records.
    pub fn seeded(seeds: impl IntoIterator<Item = E::Create>) -> Self {
        let store = Self::new();
        for input in seeds {
            store.create(input);
        }
        tracing::debug!(entity = E::KIND, count = store.len(), "store seeded");
        store
    }

    /// Insert a new record, assigning its ID and creation timestamp.
    pub fn create(&self, input: E::Create) -> E {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;

        let record = E::from_create(id, Utc::now(), input);
        inner.records.insert(id, record.clone());

        tracing::debug!(entity = E::KIND, id, "record created");
        record
    }

    /// All records in insertion order.
    pub fn get_all(&self) -> Vec<E> {
        self.inner.read().records.values().cloned().collect()
    }

    pub fn get(&self, id: i64) -> AppResult<E> {
        self.inner
            .read()
            .records
            .get(&id)
            .cloned()
            .ok_or_not_found(E::KIND, id)
    }

    /// Merge a partial update into an existing record.
    pub fn update(&self, id: i64, update: E::Update) -> AppResult<E> {
        let mut inner = self.inner.write();
        let record = inner.records.get_mut(&id).ok_or_not_found(E::KIND, id)?;
        record.apply(update);

        tracing::debug!(entity = E::KIND, id, "record updated");
        Ok(record.clone())
    }

    /// Remove a record. Its ID is never handed out again.
    pub fn delete(&self, id: i64) -> AppResult<()> {
        self.inner
            .write()
            .records
            .remove(&id)
            .ok_or_not_found(E::KIND, id)?;

        tracing::debug!(entity = E::KIND, id, "record deleted");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
