//! Error types for list views
//!
//! Browsing itself is fail-soft. Errors only arise at construction
//! boundaries:
//! - Loading records from a source
//! - Parsing or validating view configuration
//! - A zero rows-per-page request

use clinic_record::SourceError;

/// Main browser error type
#[derive(Debug, thiserror::Error)]
pub enum BrowseError {
    /// Rows per page must be positive
    #[error("invalid page size: {0} (must be at least 1)")]
    InvalidPageSize(usize),

    /// View configuration rejected
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Record source failed
    #[error("record source failed: {0}")]
    Source(#[from] SourceError),
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML could not be parsed
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A page size of zero was configured
    #[error("rows per page must be at least 1")]
    ZeroPageSize,

    /// No rows-per-page choices offered
    #[error("rows per page options are empty")]
    EmptyOptions,

    /// Default page size missing from the offered choices
    #[error("default rows per page {default} is not one of {options:?}")]
    DefaultNotOffered {
        /// Configured default
        default: usize,
        /// Offered choices
        options: Vec<usize>,
    },

    /// Row height of zero pixels
    #[error("row height must be at least 1px")]
    ZeroRowHeight,
}
