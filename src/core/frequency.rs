//! Reporting frequencies for regular calendar periods.

use crate::error::{NewsError, Result};
use std::fmt;

/// Periodicity of a regularly spaced series.
///
/// Only frequencies whose period length divides the year into whole months
/// are representable, so every period starts and ends on month boundaries
/// and re-expressing a period at another frequency is always well defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Frequency {
    /// One period per year.
    Yearly,
    /// Two periods per year (semesters).
    HalfYearly,
    /// Three periods per year (four-month spans).
    QuadriMonthly,
    /// Four periods per year.
    Quarterly,
    /// Six periods per year (two-month spans).
    BiMonthly,
    /// Twelve periods per year.
    Monthly,
}

impl Frequency {
    /// All frequencies, coarsest first.
    pub const ALL: [Frequency; 6] = [
        Frequency::Yearly,
        Frequency::HalfYearly,
        Frequency::QuadriMonthly,
        Frequency::Quarterly,
        Frequency::BiMonthly,
        Frequency::Monthly,
    ];

    /// Number of periods in one calendar year.
    pub fn periods_per_year(self) -> u32 {
        match self {
            Frequency::Yearly => 1,
            Frequency::HalfYearly => 2,
            Frequency::QuadriMonthly => 3,
            Frequency::Quarterly => 4,
            Frequency::BiMonthly => 6,
            Frequency::Monthly => 12,
        }
    }

    /// Number of calendar months covered by one period.
    pub fn months_per_period(self) -> u32 {
        12 / self.periods_per_year()
    }
}

impl TryFrom<u32> for Frequency {
    type Error = NewsError;

    /// Builds a frequency from its periods-per-year count.
    fn try_from(periods_per_year: u32) -> Result<Self> {
        match periods_per_year {
            1 => Ok(Frequency::Yearly),
            2 => Ok(Frequency::HalfYearly),
            3 => Ok(Frequency::QuadriMonthly),
            4 => Ok(Frequency::Quarterly),
            6 => Ok(Frequency::BiMonthly),
            12 => Ok(Frequency::Monthly),
            _ => Err(NewsError::InvalidFrequency { periods_per_year }),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Yearly => "yearly",
            Frequency::HalfYearly => "half-yearly",
            Frequency::QuadriMonthly => "quadri-monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::BiMonthly => "bi-monthly",
            Frequency::Monthly => "monthly",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periods_and_months_are_consistent() {
        for freq in Frequency::ALL {
            assert_eq!(freq.periods_per_year() * freq.months_per_period(), 12);
        }
    }

    #[test]
    fn try_from_round_trips_valid_counts() {
        for freq in Frequency::ALL {
            assert_eq!(Frequency::try_from(freq.periods_per_year()), Ok(freq));
        }
    }

    #[test]
    fn try_from_rejects_non_divisors_of_twelve() {
        for count in [0, 5, 7, 8, 13, 52, 365] {
            assert_eq!(
                Frequency::try_from(count),
                Err(NewsError::InvalidFrequency {
                    periods_per_year: count
                })
            );
        }
    }

    #[test]
    fn display_names_are_stable() {
        assert_eq!(Frequency::Monthly.to_string(), "monthly");
        assert_eq!(Frequency::Quarterly.to_string(), "quarterly");
        assert_eq!(Frequency::Yearly.to_string(), "yearly");
    }
}
