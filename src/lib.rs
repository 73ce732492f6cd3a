//! # nowcast-news
//!
//! Tracking and cross-frequency aggregation of "information updates"
//! ("news") for dynamic-factor nowcasting pipelines.
//!
//! For each data release of a modeled series, the [`news::UpdateLog`]
//! records the calendar period and series identity in discovery order.
//! Estimation code attaches realized and forecast values to each entry;
//! reporting code queries the earliest/latest update re-expressed at an
//! arbitrary reporting frequency and the contiguous calendar span covered
//! by the batch, even when the contributing series have mixed native
//! frequencies (e.g. monthly indicators feeding a quarterly target).
//!
//! Model estimation, chart rendering, and table export live in the
//! surrounding layers; this crate only owns the update records and the
//! calendar arithmetic behind the queries.

pub mod core;
pub mod error;
pub mod news;

pub use error::{NewsError, Result};

pub mod prelude {
    pub use crate::core::{Frequency, Period, PeriodRange};
    pub use crate::error::{NewsError, Result};
    pub use crate::news::{Update, UpdateId, UpdateLog};
}
