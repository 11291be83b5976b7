//! List view configuration
//!
//! Defaults mirror the dashboard tables: five rows per page, a 5/10/25 rows
//! selector and 53px rows (33px when dense).

use crate::error::ConfigError;
use crate::pager::PageSize;
use serde::{Deserialize, Serialize};

/// Configuration shared by every list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Rows per page on mount
    pub default_rows_per_page: usize,
    /// Choices offered by the rows-per-page selector
    pub rows_per_page_options: Vec<usize>,
    /// Row height in pixels
    pub row_height_px: u32,
    /// Row height in pixels in dense mode
    pub dense_row_height_px: u32,
    /// Dense table rows
    pub dense: bool,
}

impl BrowserConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate TOML
    ///
    /// Missing keys take their defaults.
    ///
    /// # Errors
    /// Returns error if the document is malformed or fails [`validate`](Self::validate)
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// With default rows per page
    #[inline]
    #[must_use]
    pub fn with_rows_per_page(mut self, rows: usize) -> Self {
        self.default_rows_per_page = rows;
        self
    }

    /// With rows-per-page choices
    #[inline]
    #[must_use]
    pub fn with_rows_per_page_options(mut self, options: Vec<usize>) -> Self {
        self.rows_per_page_options = options;
        self
    }

    /// With dense rows
    #[inline]
    #[must_use]
    pub fn with_dense(mut self, dense: bool) -> Self {
        self.dense = dense;
        self
    }

    /// Effective row height
    #[inline]
    #[must_use]
    pub fn row_height(&self) -> u32 {
        if self.dense {
            self.dense_row_height_px
        } else {
            self.row_height_px
        }
    }

    /// Default page size
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroPageSize`] for a zero default
    pub fn page_size(&self) -> Result<PageSize, ConfigError> {
        PageSize::new(self.default_rows_per_page).ok_or(ConfigError::ZeroPageSize)
    }

    /// Check configuration invariants
    ///
    /// # Errors
    /// Returns error if a size or height is zero, no options are offered, or
    /// the default is not among the options
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.page_size()?;

        if self.rows_per_page_options.is_empty() {
            return Err(ConfigError::EmptyOptions);
        }
        if self.rows_per_page_options.contains(&0) {
            return Err(ConfigError::ZeroPageSize);
        }
        if !self.rows_per_page_options.contains(&self.default_rows_per_page) {
            return Err(ConfigError::DefaultNotOffered {
                default: self.default_rows_per_page,
                options: self.rows_per_page_options.clone(),
            });
        }
        if self.row_height_px == 0 || self.dense_row_height_px == 0 {
            return Err(ConfigError::ZeroRowHeight);
        }
        Ok(())
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            default_rows_per_page: PageSize::DEFAULT.get(),
            rows_per_page_options: vec![5, 10, 25],
            row_height_px: 53,
            dense_row_height_px: 33,
            dense: false,
        }
    }
}
