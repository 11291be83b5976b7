//! Record store
//!
//! Owns the collection shown by a view. Deletes are the only mutation; each
//! one swaps in a new snapshot so readers holding the old one are unaffected.

use crate::collection::Collection;
use crate::id::RecordId;
use crate::record::Record;
use crate::source::{RecordSource, SourceError};
use std::collections::HashSet;

/// In-memory owner of a record collection
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore<R: Record> {
    records: Collection<R>,
}

impl<R: Record> RecordStore<R> {
    /// Create store over an existing collection
    ///
    /// Ids are assumed unique; use [`RecordStore::from_source`] to have them
    /// checked.
    #[inline]
    #[must_use]
    pub fn new(records: Collection<R>) -> Self {
        Self { records }
    }

    /// Load records from a source
    ///
    /// # Errors
    /// Returns the source's error, or [`SourceError::DuplicateId`] when two
    /// records share an id
    pub fn from_source<S: RecordSource<R> + ?Sized>(source: &S) -> Result<Self, SourceError> {
        let records = source.load()?;

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(SourceError::DuplicateId(record.id().clone()));
            }
        }

        tracing::debug!(kind = R::KIND, count = records.len(), "loaded records");
        Ok(Self::new(records.into()))
    }

    /// Full ordered collection
    #[inline]
    #[must_use]
    pub fn get_all(&self) -> &Collection<R> {
        &self.records
    }

    /// Record by id
    #[inline]
    #[must_use]
    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.records.find(id)
    }

    /// Check if a record with `id` exists
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &RecordId) -> bool {
        self.records.contains(id)
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if store is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove the record with `id`, returning the new collection
    ///
    /// Deleting an absent id is a no-op.
    pub fn delete(&mut self, id: &RecordId) -> &Collection<R> {
        if self.records.contains(id) {
            self.records = self.records.without(id);
            tracing::debug!(kind = R::KIND, %id, remaining = self.records.len(), "deleted record");
        }
        &self.records
    }

    /// Remove every listed record, ignoring absent ids
    ///
    /// Returns the number of records removed.
    pub fn delete_many<'a, I>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = &'a RecordId>,
    {
        let doomed: HashSet<&RecordId> = ids.into_iter().collect();
        let before = self.records.len();

        self.records = self
            .records
            .iter()
            .filter(|record| !doomed.contains(record.id()))
            .cloned()
            .collect();

        let removed = before - self.records.len();
        if removed > 0 {
            tracing::debug!(kind = R::KIND, removed, remaining = self.records.len(), "deleted records");
        }
        removed
    }

    /// Consume store, returning the collection
    #[inline]
    #[must_use]
    pub fn into_collection(self) -> Collection<R> {
        self.records
    }
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new(Collection::new())
    }
}

impl<R: Record> From<Vec<R>> for RecordStore<R> {
    fn from(records: Vec<R>) -> Self {
        Self::new(records.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;
    use crate::testing::{ticket, Ticket, Triage};

    fn store() -> RecordStore<Ticket> {
        RecordStore::from(vec![
            ticket("a", Triage::Open),
            ticket("b", Triage::Closed),
            ticket("c", Triage::Open),
            ticket("d", Triage::Closed),
        ])
    }

    #[test]
    fn get_all_is_side_effect_free() {
        let s = store();
        let first = s.get_all().clone();
        let second = s.get_all().clone();
        assert_eq!(first, second);
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn delete_removes_only_match() {
        let mut s = store();
        let remaining = s.delete(&RecordId::new("c")).ids();
        assert_eq!(
            remaining,
            vec![RecordId::new("a"), RecordId::new("b"), RecordId::new("d")]
        );
        assert!(!s.contains(&RecordId::new("c")));
    }

    #[test]
    fn delete_absent_is_noop() {
        let mut s = store();
        let before = s.get_all().clone();
        s.delete(&RecordId::new("nope"));
        assert_eq!(s.get_all(), &before);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut s = store();
        s.delete(&RecordId::new("a"));
        let once = s.get_all().clone();
        s.delete(&RecordId::new("a"));
        assert_eq!(s.get_all(), &once);
    }

    #[test]
    fn delete_many_counts_removed() {
        let mut s = store();
        let ids = [RecordId::new("a"), RecordId::new("zz"), RecordId::new("d")];
        assert_eq!(s.delete_many(&ids), 2);
        assert_eq!(s.get_all().ids(), vec![RecordId::new("b"), RecordId::new("c")]);
    }

    #[test]
    fn from_source_rejects_duplicates() {
        let source = StaticSource::new(vec![ticket("a", Triage::Open), ticket("a", Triage::Closed)]);
        let err = RecordStore::from_source(&source).unwrap_err();
        assert_eq!(err, SourceError::DuplicateId(RecordId::new("a")));
    }

    #[test]
    fn get_by_id() {
        let s = store();
        assert_eq!(s.get(&RecordId::new("b")).map(|t| t.status), Some(Triage::Closed));
        assert!(s.get(&RecordId::new("x")).is_none());
    }
}
