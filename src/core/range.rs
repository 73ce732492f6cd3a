//! Contiguous spans of periods at one frequency.

use crate::core::{Frequency, Period};
use std::fmt;

/// A contiguous, possibly empty span of periods at a single frequency.
///
/// The span covers `len` consecutive periods starting at `start`; it carries
/// no values, only the calendar extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodRange {
    start: Period,
    len: usize,
}

impl PeriodRange {
    /// Span of `len` periods beginning at `start`.
    pub fn new(start: Period, len: usize) -> PeriodRange {
        PeriodRange { start, len }
    }

    /// The frequency shared by every period of the span.
    pub fn frequency(&self) -> Frequency {
        self.start.frequency()
    }

    /// First period of the span.
    pub fn start(&self) -> Period {
        self.start
    }

    /// Last period of the span (inclusive); equals `start` for length 1
    /// and, by convention, for an empty span.
    pub fn end(&self) -> Period {
        match self.len {
            0 => self.start,
            len => self
                .start
                .checked_add(len as i64 - 1)
                .unwrap_or(self.start),
        }
    }

    /// Number of periods in the span.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the span covers no periods.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the span contains `period`.
    ///
    /// Always false for a period at another frequency.
    pub fn contains(&self, period: &Period) -> bool {
        if period.frequency() != self.frequency() {
            return false;
        }
        let offset = period.offset_from(&self.start);
        offset >= 0 && (offset as usize) < self.len
    }

    /// Iterates over the member periods in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = Period> + '_ {
        let start = self.start;
        (0..self.len as i64).filter_map(move |i| start.checked_add(i))
    }
}

impl fmt::Display for PeriodRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.len {
            0 => write!(f, "[empty {} span]", self.frequency()),
            1 => write!(f, "[{}]", self.start),
            _ => write!(f, "[{}..{}]", self.start, self.end()),
        }
    }
}
