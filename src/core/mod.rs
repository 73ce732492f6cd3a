//! Core calendar data structures for news tracking.

mod frequency;
mod period;
mod range;

pub use frequency::Frequency;
pub use period::Period;
pub use range::PeriodRange;
