//! Seeded fixture generation
//!
//! Stand-in for a backend: records are generated from a seeded RNG so the same
//! `(count, seed)` always yields the same collection.

use chrono::{DateTime, Duration, Utc};
use clinic_record::{RecordId, RecordSource, SourceError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::marker::PhantomData;

/// Fixture timestamps are offsets from this instant (2025-01-06T09:00:00Z)
const ANCHOR_SECS: i64 = 1_736_154_000;

/// Records that can be generated as fixtures
pub trait Generate: Sized {
    /// Build the `index`-th fixture record
    fn generate(rng: &mut StdRng, index: usize) -> Self;
}

/// Record source producing `count` generated records
#[derive(Debug, Clone, Copy)]
pub struct FixtureSource<R> {
    count: usize,
    seed: u64,
    _record: PhantomData<fn() -> R>,
}

impl<R: Generate> FixtureSource<R> {
    /// Create source for `count` records from `seed`
    #[inline]
    #[must_use]
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            _record: PhantomData,
        }
    }

    /// Number of records produced
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Generate the records
    #[must_use]
    pub fn generate(&self) -> Vec<R> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..self.count).map(|index| R::generate(&mut rng, index)).collect()
    }
}

impl<R: Generate> RecordSource<R> for FixtureSource<R> {
    fn load(&self) -> Result<Vec<R>, SourceError> {
        let records = self.generate();
        tracing::debug!(count = records.len(), seed = self.seed, "generated fixtures");
        Ok(records)
    }
}

/// Fixed reference instant for generated dates
#[must_use]
pub fn anchor() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(ANCHOR_SECS)
}

/// UUID record id drawn from `rng`
pub(crate) fn fixture_id(rng: &mut StdRng) -> RecordId {
    RecordId::from_uuid(uuid::Builder::from_random_bytes(rng.random()).into_uuid())
}

/// Uniform pick from a non-empty pool
pub(crate) fn pick<T: Copy>(rng: &mut StdRng, pool: &[T]) -> T {
    pool[rng.random_range(0..pool.len())]
}

pub(crate) const FIRST_NAMES: &[&str] = &[
    "Amelia", "Noah", "Sofia", "Liam", "Maya", "Ethan", "Chloe", "Lucas", "Ava", "Mateo", "Zara",
    "Oliver", "Hana", "Elijah", "Nadia", "Samuel",
];

pub(crate) const LAST_NAMES: &[&str] = &[
    "Johnson", "Chen", "Rodriguez", "Okafor", "Novak", "Patel", "Schmidt", "Tanaka", "Moreau",
    "Haddad", "Silva", "Kowalski", "Nguyen", "Fischer",
];

pub(crate) fn full_name(rng: &mut StdRng) -> (&'static str, &'static str) {
    (pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}
