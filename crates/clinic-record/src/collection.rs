//! Ordered record collections
//!
//! Provides [`Collection<R>`], an insertion-ordered persistent sequence.
//! Cloning is O(1) and structural sharing keeps earlier snapshots valid after
//! a delete, so views can hold a snapshot without copying records.

use crate::id::RecordId;
use crate::record::Record;
use im::Vector;
use serde::{Deserialize, Serialize};

/// Ordered sequence of records
///
/// # Invariants
/// - Insertion order is preserved by every operation
/// - Never mutated in place by readers; `without` returns a new snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<R: Clone> {
    records: Vector<R>,
}

impl<R: Clone> Collection<R> {
    /// Create empty collection
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vector::new(),
        }
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if collection is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at position
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&R> {
        self.records.get(index)
    }

    /// Iterate in insertion order
    #[inline]
    pub fn iter(&self) -> im::vector::Iter<'_, R> {
        self.records.iter()
    }

    /// Copy records out into a plain vector
    #[must_use]
    pub fn to_vec(&self) -> Vec<R> {
        self.records.iter().cloned().collect()
    }
}

impl<R: Record> Collection<R> {
    /// Position of the record with `id`
    #[must_use]
    pub fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    /// Find record by id
    #[must_use]
    pub fn find(&self, id: &RecordId) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Check if a record with `id` exists
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &RecordId) -> bool {
        self.position(id).is_some()
    }

    /// All ids in insertion order
    #[must_use]
    pub fn ids(&self) -> Vec<RecordId> {
        self.records.iter().map(|record| record.id().clone()).collect()
    }

    /// New snapshot with the record matching `id` removed
    ///
    /// An absent id yields an identical snapshot.
    #[must_use]
    pub fn without(&self, id: &RecordId) -> Self {
        match self.position(id) {
            Some(index) => {
                let mut records = self.records.clone();
                records.remove(index);
                Self { records }
            }
            None => self.clone(),
        }
    }
}

impl<R: Clone> Default for Collection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Clone> FromIterator<R> for Collection<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<R: Clone> From<Vec<R>> for Collection<R> {
    fn from(records: Vec<R>) -> Self {
        records.into_iter().collect()
    }
}

impl<'a, R: Clone> IntoIterator for &'a Collection<R> {
    type Item = &'a R;
    type IntoIter = im::vector::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
