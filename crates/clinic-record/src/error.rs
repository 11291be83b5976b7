//! Error types for record parsing

/// Errors related to record values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// Status string outside the closed enumeration
    #[error("unknown {kind} status: {value}")]
    UnknownStatus {
        /// Record kind the status was parsed for
        kind: &'static str,
        /// Offending value
        value: String,
    },
}

impl RecordError {
    /// Create unknown status error
    #[inline]
    pub fn unknown_status(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownStatus {
            kind,
            value: value.into(),
        }
    }
}
