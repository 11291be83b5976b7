//! Status filter tabs
//!
//! Partitions a collection by record status. Tab order is fixed by the status
//! declaration, not by the data, so tabs never jump around as counts change.

use clinic_record::{Collection, LabelVariant, Record, RecordId, RecordStatus, StatusColor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

/// Wire value of the synthetic "every record" tab
pub const ALL_FILTER: &str = "all";

/// Active tab of a list view
///
/// `Unmatched` carries a filter value that named no known status. It is kept
/// instead of rejected so the view stays renderable; it matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StatusFilter<S> {
    /// Every record
    All,
    /// Records with this status
    Status(S),
    /// Unknown filter value
    Unmatched(String),
}

impl<S> Default for StatusFilter<S> {
    fn default() -> Self {
        Self::All
    }
}

impl<S> From<S> for StatusFilter<S> {
    fn from(status: S) -> Self {
        Self::Status(status)
    }
}

impl<S: RecordStatus> StatusFilter<S> {
    /// Parse a tab value coming from the rendering layer
    ///
    /// Never fails: unknown values become [`StatusFilter::Unmatched`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == ALL_FILTER {
            return Self::All;
        }
        match S::parse(value) {
            Some(status) => Self::Status(status),
            None => {
                tracing::warn!(value, "unknown status filter, matching nothing");
                Self::Unmatched(value.to_string())
            }
        }
    }

    /// Every selectable filter in tab order: `All` first, then each status
    #[must_use]
    pub fn options() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(S::ALL.iter().copied().map(Self::Status))
            .collect()
    }

    /// Wire value
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_FILTER,
            Self::Status(status) => status.as_str(),
            Self::Unmatched(value) => value,
        }
    }

    /// Tab label
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Status(status) => status.label(),
            Self::Unmatched(value) => value,
        }
    }

    /// Check whether a record status passes this filter
    #[inline]
    #[must_use]
    pub fn matches(&self, status: S) -> bool {
        match self {
            Self::All => true,
            Self::Status(wanted) => *wanted == status,
            Self::Unmatched(_) => false,
        }
    }

    /// Badge color of this tab
    #[must_use]
    pub fn color(&self) -> StatusColor {
        match self {
            Self::Status(status) => status.color(),
            Self::All => StatusColor::Warning,
            Self::Unmatched(_) => StatusColor::Default,
        }
    }

    /// Badge variant given the currently active tab
    ///
    /// `All` and the active tab are filled, the rest soft.
    #[must_use]
    pub fn label_variant(&self, active: &Self) -> LabelVariant {
        if matches!(self, Self::All) || self == active {
            LabelVariant::Filled
        } else {
            LabelVariant::Soft
        }
    }
}

impl<S: RecordStatus> Display for StatusFilter<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<S: RecordStatus> Serialize for StatusFilter<S> {
    fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, S: RecordStatus> Deserialize<'de> for StatusFilter<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}

/// Record count behind one tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(bound(serialize = "S: RecordStatus"))]
pub struct FilterCount<S> {
    /// Tab filter
    pub filter: StatusFilter<S>,
    /// Matching records
    pub count: usize,
}

/// Count records per tab in a single scan
///
/// Returned in declaration order with `All` first; `All` counts the whole
/// collection.
#[must_use]
pub fn available_filters<R: Record>(collection: &Collection<R>) -> Vec<FilterCount<R::Status>> {
    let mut counts: HashMap<R::Status, usize> = HashMap::new();
    for record in collection {
        *counts.entry(record.status()).or_default() += 1;
    }

    StatusFilter::options()
        .into_iter()
        .map(|filter| {
            let count = match &filter {
                StatusFilter::All => collection.len(),
                StatusFilter::Status(status) => counts.get(status).copied().unwrap_or(0),
                StatusFilter::Unmatched(_) => 0,
            };
            FilterCount { filter, count }
        })
        .collect()
}

/// Records passing `filter`, in collection order
#[must_use]
pub fn apply<'a, R: Record>(
    collection: &'a Collection<R>,
    filter: &StatusFilter<R::Status>,
) -> Vec<&'a R> {
    collection
        .iter()
        .filter(|record| filter.matches(record.status()))
        .collect()
}

/// Ids of the records passing `filter`, in collection order
#[must_use]
pub fn filtered_ids<R: Record>(
    collection: &Collection<R>,
    filter: &StatusFilter<R::Status>,
) -> Vec<RecordId> {
    apply(collection, filter)
        .into_iter()
        .map(|record| record.id().clone())
        .collect()
}
