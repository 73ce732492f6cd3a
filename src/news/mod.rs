//! Tracking of data-release news across a nowcasting run.
//!
//! As the estimation process discovers that a new observation became
//! available for a series, it registers the release in an [`UpdateLog`] and
//! later attaches the realized and forecast values. Reporting code then
//! summarizes the run: the earliest and latest touched period at any
//! reporting frequency, and the contiguous calendar span covered by the
//! whole batch.
//!
//! # Example
//!
//! ```
//! use nowcast_news::core::{Frequency, Period};
//! use nowcast_news::news::UpdateLog;
//!
//! let mut log = UpdateLog::new();
//! let id = log.register(Period::monthly(2024, 1)?, 0);
//! log.register(Period::monthly(2024, 3)?, 1);
//! log.resolve(id, 1.2, 1.0)?;
//!
//! // Both monthly releases fall into the same quarter.
//! let domain = log.updates_domain(Frequency::Quarterly).unwrap();
//! assert_eq!(domain.len(), 1);
//! assert_eq!(domain.start(), Period::quarterly(2024, 1)?);
//! # Ok::<(), nowcast_news::NewsError>(())
//! ```

mod updates;

pub use updates::{Update, UpdateId, UpdateLog};
