//! Clinic Record Browser
//!
//! Tabbed, paginated, selectable list views over clinic record collections.
//!
//! # Core Concepts
//!
//! - [`StatusFilter`]: Active tab; [`available_filters`] counts records per tab
//! - [`PageState`] / [`slice`]: Visible window with last-page padding
//! - [`Selection`]: Checked rows, reconciled against the current tab
//! - [`RecordBrowser`]: Per-view state whose handlers keep the above consistent
//! - [`BrowserConfig`]: Rows-per-page defaults and row heights
//!
//! Every operation is synchronous and runs to completion; nothing here blocks
//! or performs I/O.
//!
//! # Example
//!
//! ```rust,ignore
//! use clinic_browse::{BrowserConfig, RecordBrowser};
//! use clinic_domain::{Appointment, AppointmentStatus, FixtureSource};
//!
//! let source = FixtureSource::<Appointment>::new(10, 42);
//! let mut view = RecordBrowser::from_source(&source, &BrowserConfig::default())?;
//!
//! view.apply_filter(AppointmentStatus::Confirmed);
//! view.toggle_all(true);
//!
//! let frame = view.render();
//! println!("{} rows, {}", frame.rows.len(), frame.pagination.displayed);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod browser;
mod config;
mod error;
mod filter;
mod pager;
mod selection;

// Re-exports
pub use browser::{HeaderCheckbox, Pagination, RecordBrowser, Row, Tab, ViewModel};
pub use config::BrowserConfig;
pub use error::{BrowseError, ConfigError};
pub use filter::{apply, available_filters, filtered_ids, FilterCount, StatusFilter, ALL_FILTER};
pub use pager::{slice, DisplayedRows, Page, PageSize, PageState};
pub use selection::Selection;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for building list views
    pub use crate::{
        BrowserConfig, PageSize, PageState, RecordBrowser, Selection, StatusFilter, ViewModel,
    };
    pub use clinic_record::prelude::*;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
