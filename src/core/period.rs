//! Calendar periods tagged with a reporting frequency.

use crate::core::Frequency;
use crate::error::{NewsError, Result};
use chrono::{Datelike, NaiveDate};
use std::cmp::Ordering;
use std::fmt;

/// A calendar position at a given reporting frequency.
///
/// Internally a period is the pair `(frequency, index)` where
/// `index = year * periods_per_year + position`, so periods at the same
/// frequency are totally ordered by their index. Periods at different
/// frequencies are not directly comparable; re-express one side with
/// [`Period::at_frequency`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    frequency: Frequency,
    index: i64,
}

impl Period {
    /// Creates the period at `frequency` for the given year and
    /// zero-based position within that year.
    pub fn new(frequency: Frequency, year: i32, position: u32) -> Result<Period> {
        let periods_per_year = frequency.periods_per_year();
        if position >= periods_per_year {
            return Err(NewsError::InvalidPeriod {
                position,
                periods_per_year,
            });
        }
        Ok(Period {
            frequency,
            index: year as i64 * periods_per_year as i64 + position as i64,
        })
    }

    /// Monthly period from a 1-based calendar month.
    pub fn monthly(year: i32, month: u32) -> Result<Period> {
        if month == 0 {
            return Err(NewsError::InvalidPeriod {
                position: 0,
                periods_per_year: 12,
            });
        }
        Period::new(Frequency::Monthly, year, month - 1)
    }

    /// Quarterly period from a 1-based quarter.
    pub fn quarterly(year: i32, quarter: u32) -> Result<Period> {
        if quarter == 0 {
            return Err(NewsError::InvalidPeriod {
                position: 0,
                periods_per_year: 4,
            });
        }
        Period::new(Frequency::Quarterly, year, quarter - 1)
    }

    /// Yearly period covering the whole calendar year.
    pub fn yearly(year: i32) -> Period {
        Period {
            frequency: Frequency::Yearly,
            index: year as i64,
        }
    }

    /// The period of `frequency` containing the given calendar day.
    pub fn from_date(frequency: Frequency, date: NaiveDate) -> Period {
        let months_per_period = frequency.months_per_period() as i64;
        let position = date.month0() as i64 / months_per_period;
        Period {
            frequency,
            index: date.year() as i64 * frequency.periods_per_year() as i64 + position,
        }
    }

    /// The reporting frequency of this period.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// The calendar year this period starts in.
    pub fn year(&self) -> i32 {
        self.index
            .div_euclid(self.frequency.periods_per_year() as i64) as i32
    }

    /// Zero-based position within the year.
    pub fn position(&self) -> u32 {
        self.index
            .rem_euclid(self.frequency.periods_per_year() as i64) as u32
    }

    /// First calendar month covered by the period, as `year * 12 + month0`.
    fn first_month(&self) -> i64 {
        self.index * self.frequency.months_per_period() as i64
    }

    /// Last calendar month covered by the period, as `year * 12 + month0`.
    fn last_month(&self) -> i64 {
        self.first_month() + self.frequency.months_per_period() as i64 - 1
    }

    /// First calendar day of the period.
    ///
    /// # Panics
    ///
    /// Panics if the period's year falls outside chrono's representable
    /// date range.
    pub fn first_day(&self) -> NaiveDate {
        let month = self.first_month();
        let (year, month0) = (month.div_euclid(12) as i32, month.rem_euclid(12) as u32);
        NaiveDate::from_ymd_opt(year, month0 + 1, 1)
            .expect("period year outside supported calendar range")
    }

    /// Last calendar day of the period.
    ///
    /// # Panics
    ///
    /// Panics if the period's year falls outside chrono's representable
    /// date range.
    pub fn last_day(&self) -> NaiveDate {
        let month = self.last_month();
        let (year, month0) = (month.div_euclid(12) as i32, month.rem_euclid(12) as u32);
        NaiveDate::from_ymd_opt(year, month0 + 1, days_in_month(year, month0))
            .expect("period year outside supported calendar range")
    }

    /// Re-expresses this period at another frequency.
    ///
    /// A period at the same frequency is returned unchanged; otherwise the
    /// result is the target-frequency period containing this period's last
    /// calendar day. The mapping is deliberately lossy: distinct native
    /// periods whose last days share a target period collapse into it.
    pub fn at_frequency(&self, target: Frequency) -> Period {
        if target == self.frequency {
            return *self;
        }
        let month = self.last_month();
        let (year, month0) = (month.div_euclid(12), month.rem_euclid(12));
        let position = month0 / target.months_per_period() as i64;
        Period {
            frequency: target,
            index: year * target.periods_per_year() as i64 + position,
        }
    }

    /// The immediately following period at the same frequency.
    pub fn next(&self) -> Period {
        Period {
            frequency: self.frequency,
            index: self.index + 1,
        }
    }

    /// The period `offset` steps away, or `None` on index overflow.
    pub fn checked_add(&self, offset: i64) -> Option<Period> {
        Some(Period {
            frequency: self.frequency,
            index: self.index.checked_add(offset)?,
        })
    }

    /// Signed distance from `other` to `self`, in periods.
    ///
    /// Both periods must share a frequency; the distance between periods of
    /// different frequencies is meaningless.
    pub fn offset_from(&self, other: &Period) -> i64 {
        debug_assert_eq!(self.frequency, other.frequency);
        self.index - other.index
    }
}

impl PartialOrd for Period {
    /// Chronological order, defined only between periods of one frequency.
    fn partial_cmp(&self, other: &Period) -> Option<Ordering> {
        if self.frequency == other.frequency {
            Some(self.index.cmp(&other.index))
        } else {
            None
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year();
        let position = self.position() + 1;
        match self.frequency {
            Frequency::Yearly => write!(f, "{year}"),
            Frequency::HalfYearly => write!(f, "{year}H{position}"),
            Frequency::QuadriMonthly => write!(f, "{year}T{position}"),
            Frequency::Quarterly => write!(f, "{year}Q{position}"),
            Frequency::BiMonthly => write!(f, "{year}B{position}"),
            Frequency::Monthly => write!(f, "{year}-{position:02}"),
        }
    }
}

/// Day count of the given zero-based month, leap-year aware.
fn days_in_month(year: i32, month0: u32) -> u32 {
    match month0 {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        _ => {
            if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) {
                29
            } else {
                28
            }
        }
    }
}
