//! Record sources
//!
//! The store never knows where records come from. A [`RecordSource`] is the
//! injected capability that supplies the initial collection: generated
//! fixtures in tests, a backend adapter in production.

use crate::id::RecordId;

/// Supplier of the initial record set
///
/// Loading is synchronous. A source backed by an asynchronous fetch must
/// resolve it before handing records to the store.
pub trait RecordSource<R> {
    /// Load all records in display order
    ///
    /// # Errors
    /// Returns error if the underlying data is unavailable
    fn load(&self) -> Result<Vec<R>, SourceError>;
}

impl<R, S: RecordSource<R> + ?Sized> RecordSource<R> for &S {
    fn load(&self) -> Result<Vec<R>, SourceError> {
        (**self).load()
    }
}

/// Source over an in-memory list
#[derive(Debug, Clone, Default)]
pub struct StaticSource<R> {
    records: Vec<R>,
}

impl<R> StaticSource<R> {
    /// Wrap records
    #[inline]
    #[must_use]
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }
}

impl<R: Clone> RecordSource<R> for StaticSource<R> {
    fn load(&self) -> Result<Vec<R>, SourceError> {
        Ok(self.records.clone())
    }
}

/// Errors raised while loading records
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// Backing data could not be produced
    #[error("record source unavailable: {0}")]
    Unavailable(String),

    /// Two records share an id
    #[error("duplicate record id: {0}")]
    DuplicateId(RecordId),
}
