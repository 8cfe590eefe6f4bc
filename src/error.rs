//! Error taxonomy for loading and aggregating chamber tables.

use polars::prelude::PolarsError;

/// Errors produced while turning one (state, chamber) source table into a summary.
#[derive(Debug, thiserror::Error)]
pub enum ChamberError {
    /// No source table, an ambiguous match, or an unreadable file.
    #[error("No source table for {zid}: {reason}")]
    NotFound { zid: String, reason: String },

    /// The table exists but is missing columns or holds values that cannot be interpreted.
    #[error("Malformed input: {detail}")]
    MalformedInput { detail: String },

    /// A district recorded no votes for either major party.
    #[error("District '{district}' has no recorded two-party votes")]
    DivisionByZero { district: String },
}

impl ChamberError {
    pub(crate) fn not_found(zid: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::NotFound { zid: zid.into(), reason: reason.into() }
    }

    pub(crate) fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedInput { detail: detail.into() }
    }

    /// True if the pair was skipped for lack of data rather than bad data.
    #[inline]
    pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound { .. }) }
}

impl From<PolarsError> for ChamberError {
    fn from(err: PolarsError) -> Self {
        Self::malformed(err.to_string())
    }
}
