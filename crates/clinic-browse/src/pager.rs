//! Pagination
//!
//! Computes the visible window of a filtered sequence. Out of range pages are
//! legal: a filter or delete can shrink the sequence under a stale page index,
//! and the result is simply an empty page.

use crate::error::BrowseError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::num::NonZeroUsize;

const DEFAULT_ROWS_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(size) => size,
    None => unreachable!(),
};

/// Rows per page (always positive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Rows per page when nothing else is configured
    pub const DEFAULT: Self = Self(DEFAULT_ROWS_PER_PAGE);

    /// Create page size, `None` for zero
    #[inline]
    #[must_use]
    pub fn new(rows: usize) -> Option<Self> {
        NonZeroUsize::new(rows).map(Self)
    }

    /// Rows per page
    #[inline]
    #[must_use]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for PageSize {
    type Error = BrowseError;

    fn try_from(rows: usize) -> Result<Self, Self::Error> {
        Self::new(rows).ok_or(BrowseError::InvalidPageSize(rows))
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

/// Page index and size of a list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PageState {
    index: usize,
    size: PageSize,
}

impl PageState {
    /// First page with `size` rows
    #[inline]
    #[must_use]
    pub fn new(size: PageSize) -> Self {
        Self { index: 0, size }
    }

    /// Zero-based page index
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Rows per page
    #[inline]
    #[must_use]
    pub fn size(&self) -> PageSize {
        self.size
    }

    /// Offset of the first row of this page
    #[inline]
    #[must_use]
    pub fn offset(&self) -> usize {
        self.index.saturating_mul(self.size.get())
    }

    /// Same size, different page
    #[inline]
    #[must_use]
    pub fn go_to(self, index: usize) -> Self {
        Self { index, ..self }
    }

    /// New size, back on the first page
    ///
    /// The old offset means nothing at a different granularity.
    #[inline]
    #[must_use]
    pub fn change_rows_per_page(self, size: PageSize) -> Self {
        Self::new(size)
    }

    /// Number of pages needed for `len` rows (zero when empty)
    #[inline]
    #[must_use]
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.size.get())
    }
}

/// One page of a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    visible: &'a [T],
    padding: usize,
    total: usize,
    state: PageState,
}

impl<'a, T> Page<'a, T> {
    /// Rows on this page
    #[inline]
    #[must_use]
    pub fn visible(&self) -> &'a [T] {
        self.visible
    }

    /// Number of visible rows
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// Check if page shows no rows
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Filler rows keeping a short last page at full height
    #[inline]
    #[must_use]
    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Height of the filler block in pixels
    #[inline]
    #[must_use]
    pub fn padding_height(&self, row_height: u32) -> usize {
        self.padding.saturating_mul(row_height as usize)
    }

    /// Length of the whole sequence
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Page state this page was cut with
    #[inline]
    #[must_use]
    pub fn state(&self) -> PageState {
        self.state
    }

    /// Footer range for this page
    #[must_use]
    pub fn displayed_rows(&self) -> DisplayedRows {
        DisplayedRows::new(self.state, self.total)
    }
}

/// Cut one page out of `sequence`
///
/// `visible` is `sequence[i*p .. i*p+p]` clipped to bounds. Padding is only
/// computed past the first page: `max(0, (i+1)*p - len)`.
#[must_use]
pub fn slice<T>(sequence: &[T], state: PageState) -> Page<'_, T> {
    let len = sequence.len();
    let size = state.size.get();
    let start = state.offset().min(len);
    let end = state.offset().saturating_add(size).min(len);

    let padding = if state.index > 0 {
        state
            .index
            .saturating_add(1)
            .saturating_mul(size)
            .saturating_sub(len)
    } else {
        0
    };

    Page {
        visible: &sequence[start..end],
        padding,
        total: len,
        state,
    }
}

/// "from–to of count" footer range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayedRows {
    /// One-based first row (zero when the sequence is empty)
    pub from: usize,
    /// One-based last row
    pub to: usize,
    /// Sequence length
    pub count: usize,
}

impl DisplayedRows {
    /// Range for `state` over `count` rows
    #[must_use]
    pub fn new(state: PageState, count: usize) -> Self {
        let from = if count == 0 {
            0
        } else {
            state.offset().saturating_add(1)
        };
        let to = state
            .index
            .saturating_add(1)
            .saturating_mul(state.size.get())
            .min(count);
        Self { from, to, count }
    }
}

impl Display for DisplayedRows {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}\u{2013}{} of {}", self.from, self.to, self.count)
    }
}
