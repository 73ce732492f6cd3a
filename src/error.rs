//! Error types for the nowcast-news library.

use thiserror::Error;

/// Result type alias for news-tracking operations.
pub type Result<T> = std::result::Result<T, NewsError>;

/// Errors that can occur while building periods or resolving updates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NewsError {
    /// No reporting frequency has the given number of periods per year.
    #[error("invalid frequency: {periods_per_year} periods per year")]
    InvalidFrequency { periods_per_year: u32 },

    /// Period position does not exist at the requested frequency.
    #[error("invalid period position: {position} (frequency has {periods_per_year} periods per year)")]
    InvalidPeriod {
        position: u32,
        periods_per_year: u32,
    },

    /// The update already carries an observation/forecast pair.
    #[error("update already resolved")]
    AlreadyResolved,

    /// Update id does not refer to an entry of this log.
    #[error("unknown update: {index} (log holds {len})")]
    UnknownUpdate { index: usize, len: usize },
}
