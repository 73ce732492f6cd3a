//! Insertion-ordered log of data-release updates.

use crate::core::{Frequency, Period, PeriodRange};
use crate::error::{NewsError, Result};
use std::fmt;

/// One data release for one series of the model.
///
/// Identity (period and series) is fixed at registration. The observed and
/// forecast values are attached later by the estimation process through
/// [`Update::resolve`], at most once; until then both read as NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    period: Period,
    series: usize,
    values: Option<(f64, f64)>,
}

impl Update {
    fn new(period: Period, series: usize) -> Update {
        Update {
            period,
            series,
            values: None,
        }
    }

    /// Native-frequency period of the release.
    pub fn period(&self) -> Period {
        self.period
    }

    /// Index of the series within the model's ordering.
    pub fn series(&self) -> usize {
        self.series
    }

    /// The realized value, NaN while unresolved.
    pub fn observation(&self) -> f64 {
        self.values.map_or(f64::NAN, |(y, _)| y)
    }

    /// The previously forecast value, NaN while unresolved.
    pub fn forecast(&self) -> f64 {
        self.values.map_or(f64::NAN, |(_, fy)| fy)
    }

    /// The news content of the release: observation minus forecast.
    ///
    /// Recomputed on every call, NaN while unresolved.
    pub fn news(&self) -> f64 {
        self.observation() - self.forecast()
    }

    /// Whether the observation/forecast pair has been attached.
    pub fn is_resolved(&self) -> bool {
        self.values.is_some()
    }

    /// Attaches the observed and forecast values, once.
    pub fn resolve(&mut self, observation: f64, forecast: f64) -> Result<()> {
        if self.values.is_some() {
            return Err(NewsError::AlreadyResolved);
        }
        self.values = Some((observation, forecast));
        Ok(())
    }
}

impl fmt::Display for Update {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "var:{}\t{}\t{}\t{}",
            self.series,
            self.period,
            self.observation(),
            self.forecast()
        )
    }
}

/// Handle to an update registered in an [`UpdateLog`].
///
/// Returned by [`UpdateLog::register`] and redeemed against the same log to
/// read or resolve the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UpdateId(usize);

/// Append-only, insertion-ordered collection of updates for one run.
///
/// The log records updates in discovery order, never merges or removes
/// entries, and answers frequency-aware extremum queries by re-expressing
/// every update's period at the requested frequency.
#[derive(Debug, Clone, Default)]
pub struct UpdateLog {
    updates: Vec<Update>,
}

impl UpdateLog {
    /// Creates an empty log for a fresh nowcasting run.
    pub fn new() -> UpdateLog {
        UpdateLog::default()
    }

    /// Appends an unresolved update for `(period, series)`.
    ///
    /// Insertion order is preserved and significant: it reflects discovery
    /// order during the run, not chronological period order. The series id
    /// is stored as-is; range checking belongs to the caller.
    pub fn register(&mut self, period: Period, series: usize) -> UpdateId {
        let id = UpdateId(self.updates.len());
        self.updates.push(Update::new(period, series));
        id
    }

    /// The update behind `id`.
    pub fn update(&self, id: UpdateId) -> Result<&Update> {
        self.updates.get(id.0).ok_or(NewsError::UnknownUpdate {
            index: id.0,
            len: self.updates.len(),
        })
    }

    /// Mutable access to the update behind `id`, for resolution.
    pub fn update_mut(&mut self, id: UpdateId) -> Result<&mut Update> {
        let len = self.updates.len();
        self.updates
            .get_mut(id.0)
            .ok_or(NewsError::UnknownUpdate { index: id.0, len })
    }

    /// Attaches observation and forecast to the update behind `id`.
    pub fn resolve(&mut self, id: UpdateId, observation: f64, forecast: f64) -> Result<()> {
        self.update_mut(id)?.resolve(observation, forecast)
    }

    /// Read-only view of all updates in insertion order.
    pub fn updates(&self) -> &[Update] {
        &self.updates
    }

    /// Number of registered updates.
    pub fn len(&self) -> usize {
        self.updates.len()
    }

    /// Whether no update has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    /// Chronologically earliest update period, re-expressed at `frequency`.
    ///
    /// `None` when the log is empty. Conversion is applied independently to
    /// every update on every call; nothing is cached.
    pub fn earliest_update(&self, frequency: Frequency) -> Option<Period> {
        self.converted_periods(frequency)
            .reduce(|lo, p| if p < lo { p } else { lo })
    }

    /// Chronologically latest update period, re-expressed at `frequency`.
    pub fn latest_update(&self, frequency: Frequency) -> Option<Period> {
        self.converted_periods(frequency)
            .reduce(|hi, p| if p > hi { p } else { hi })
    }

    /// Contiguous span from the earliest to the latest converted period.
    ///
    /// The span is the convex hull of the converted periods: it does not
    /// reflect gaps. `None` when the log is empty.
    pub fn updates_domain(&self, frequency: Frequency) -> Option<PeriodRange> {
        let mut periods = self.converted_periods(frequency);
        let first = periods.next()?;
        let (first, last) = periods.fold((first, first), |(lo, hi), p| {
            (
                if p < lo { p } else { lo },
                if p > hi { p } else { hi },
            )
        });
        Some(PeriodRange::new(first, last.offset_from(&first) as usize + 1))
    }

    fn converted_periods(&self, frequency: Frequency) -> impl Iterator<Item = Period> + '_ {
        self.updates
            .iter()
            .map(move |u| u.period().at_frequency(frequency))
    }
}
