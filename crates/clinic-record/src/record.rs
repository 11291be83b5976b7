//! Record and status traits
//!
//! Defines [`Record`], the shape every browsable entity conforms to, and
//! [`RecordStatus`], the closed enumeration a record is partitioned by.

use crate::id::RecordId;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for browsable records
///
/// The browser core depends only on `id` and `status`; every other field is
/// domain data carried through untouched.
///
/// # Contract
/// - `id` is unique within any collection the record belongs to
/// - `status` is always a member of `Self::Status::ALL`
pub trait Record: Clone + Debug + 'static {
    /// Closed status enumeration for this record kind
    type Status: RecordStatus;

    /// Record kind identifier (`appointment`, `patient`, ...)
    const KIND: &'static str;

    /// Unique identifier
    fn id(&self) -> &RecordId;

    /// Current status
    fn status(&self) -> Self::Status;
}

/// Closed status enumeration
///
/// `ALL` fixes the tab order: tabs are rendered in declaration order, never in
/// an order derived from the data.
pub trait RecordStatus: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Every status, in declaration order
    const ALL: &'static [Self];

    /// Stable lower-case wire value
    fn as_str(&self) -> &'static str;

    /// Human readable tab label
    fn label(&self) -> &'static str;

    /// Badge color for this status
    fn color(&self) -> StatusColor;

    /// Parse a wire value
    ///
    /// Returns `None` for anything outside the enumeration, including the
    /// synthetic `"all"` filter value.
    #[must_use]
    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|status| status.as_str() == value)
    }
}

/// Badge color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    /// Neutral
    #[default]
    Default,
    /// Brand primary
    Primary,
    /// Brand secondary
    Secondary,
    /// Informational
    Info,
    /// Positive outcome
    Success,
    /// Needs attention
    Warning,
    /// Negative outcome
    Error,
}

impl StatusColor {
    /// Palette key used by the theming layer
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusColor::Default => "default",
            StatusColor::Primary => "primary",
            StatusColor::Secondary => "secondary",
            StatusColor::Info => "info",
            StatusColor::Success => "success",
            StatusColor::Warning => "warning",
            StatusColor::Error => "error",
        }
    }
}

/// Badge fill style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelVariant {
    /// Solid background
    Filled,
    /// Border only
    Outlined,
    /// Tinted background
    #[default]
    Soft,
    /// Inverted contrast
    Inverted,
}
