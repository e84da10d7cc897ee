use chrono::{DateTime, Utc};
use std::collections::HashSet;

use crate::errors::CoreError;
use crate::models::budget::Budget;
use crate::models::category::Category;
use crate::models::debt::Debt;
use crate::models::expense::Expense;

/// A flat record with an integer id, unique within its collection.
pub trait Record: Clone {
    /// Entity name used in errors and logs.
    const ENTITY: &'static str;

    fn id(&self) -> u32;
}

/// A record with a designated timestamp that listings sort by (newest first).
pub trait Timestamped: Record {
    fn timestamp(&self) -> DateTime<Utc>;
}

/// In-memory, insertion-ordered collection that only ever hands out clones.
///
/// Ids are assigned as `max(existing ids, 0) + 1`, so deleting the current
/// maximum lets its id be handed out again, while deleting anything below
/// it never does. Once `u32::MAX` is taken the lowest free id is used.
#[derive(Debug, Clone, Default)]
pub struct Collection<T> {
    records: Vec<T>,
}

impl<T: Record> Collection<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    /// Clones of every record in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<T> {
        self.records.clone()
    }

    #[must_use]
    pub fn next_id(&self) -> u32 {
        let max = self.records.iter().map(Record::id).max().unwrap_or(0);
        max.checked_add(1).unwrap_or_else(|| self.lowest_free_id())
    }

    fn lowest_free_id(&self) -> u32 {
        let used: HashSet<u32> = self.records.iter().map(Record::id).collect();
        (1..u32::MAX).find(|id| !used.contains(id)).unwrap_or(u32::MAX)
    }

    pub fn get(&self, id: u32) -> Result<T, CoreError> {
        self.records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| CoreError::not_found(T::ENTITY, id))
    }

    /// Build a record under the next id, append it, and return a clone.
    pub fn insert_with(&mut self, build: impl FnOnce(u32) -> T) -> T {
        let record = build(self.next_id());
        self.records.push(record.clone());
        record
    }

    /// Mutate the record in place and return a clone of the result.
    pub fn update_with(&mut self, id: u32, change: impl FnOnce(&mut T)) -> Result<T, CoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| CoreError::not_found(T::ENTITY, id))?;
        change(record);
        Ok(record.clone())
    }

    pub fn remove(&mut self, id: u32) -> Result<T, CoreError> {
        let idx = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| CoreError::not_found(T::ENTITY, id))?;
        Ok(self.records.remove(idx))
    }
}

impl<T: Timestamped> Collection<T> {
    /// Clones sorted newest first. Equal timestamps keep insertion order.
    #[must_use]
    pub fn sorted_newest_first(&self) -> Vec<T> {
        let mut records = self.records.clone();
        records.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        records
    }
}

// ── Record impls ────────────────────────────────────────────────────

impl Record for Expense {
    const ENTITY: &'static str = "Expense";

    fn id(&self) -> u32 {
        self.id
    }
}

impl Timestamped for Expense {
    fn timestamp(&self) -> DateTime<Utc> {
        self.date
    }
}

impl Record for Debt {
    const ENTITY: &'static str = "Debt";

    fn id(&self) -> u32 {
        self.id
    }
}

impl Timestamped for Debt {
    fn timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Record for Budget {
    const ENTITY: &'static str = "Budget";

    fn id(&self) -> u32 {
        self.id
    }
}

impl Timestamped for Budget {
    fn timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Record for Category {
    const ENTITY: &'static str = "Category";

    fn id(&self) -> u32 {
        self.id
    }
}
