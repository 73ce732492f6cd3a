//! Property-based tests for the update log.
//!
//! These tests verify invariants that should hold for all valid inputs,
//! using randomly generated update batches with mixed native frequencies.

use nowcast_news::core::{Frequency, Period};
use nowcast_news::news::UpdateLog;
use proptest::prelude::*;

/// Strategy for an arbitrary reporting frequency.
fn frequency_strategy() -> impl Strategy<Value = Frequency> {
    prop::sample::select(Frequency::ALL.to_vec())
}

/// Strategy for a period at an arbitrary frequency within a realistic
/// year range.
fn period_strategy() -> impl Strategy<Value = Period> {
    (frequency_strategy(), 1990..2035i32).prop_flat_map(|(freq, year)| {
        (0..freq.periods_per_year()).prop_map(move |position| {
            Period::new(freq, year, position).unwrap()
        })
    })
}

/// Strategy for a batch of (period, series) registrations.
fn batch_strategy() -> impl Strategy<Value = Vec<(Period, usize)>> {
    prop::collection::vec((period_strategy(), 0..50usize), 1..40)
}

fn build_log(batch: &[(Period, usize)]) -> UpdateLog {
    let mut log = UpdateLog::new();
    for &(period, series) in batch {
        log.register(period, series);
    }
    log
}

proptest! {
    #[test]
    fn earliest_never_exceeds_latest(
        batch in batch_strategy(),
        target in frequency_strategy(),
    ) {
        let log = build_log(&batch);
        let first = log.earliest_update(target).unwrap();
        let last = log.latest_update(target).unwrap();
        prop_assert!(first <= last);
        prop_assert_eq!(first.frequency(), target);
        prop_assert_eq!(last.frequency(), target);
    }

    #[test]
    fn domain_is_the_closed_span_of_the_extrema(
        batch in batch_strategy(),
        target in frequency_strategy(),
    ) {
        let log = build_log(&batch);
        let first = log.earliest_update(target).unwrap();
        let last = log.latest_update(target).unwrap();

        let domain = log.updates_domain(target).unwrap();
        prop_assert_eq!(domain.start(), first);
        prop_assert_eq!(domain.end(), last);
        prop_assert_eq!(domain.len() as i64, last.offset_from(&first) + 1);
    }

    #[test]
    fn domain_contains_every_converted_period(
        batch in batch_strategy(),
        target in frequency_strategy(),
    ) {
        let log = build_log(&batch);
        let domain = log.updates_domain(target).unwrap();
        for update in log.updates() {
            prop_assert!(domain.contains(&update.period().at_frequency(target)));
        }
    }

    #[test]
    fn updates_keep_registration_order(batch in batch_strategy()) {
        let log = build_log(&batch);
        prop_assert_eq!(log.len(), batch.len());
        for (update, &(period, series)) in log.updates().iter().zip(&batch) {
            prop_assert_eq!(update.period(), period);
            prop_assert_eq!(update.series(), series);
        }
    }

    #[test]
    fn queries_are_idempotent_without_new_registrations(
        batch in batch_strategy(),
        target in frequency_strategy(),
    ) {
        let log = build_log(&batch);
        let first = log.earliest_update(target);
        let last = log.latest_update(target);
        let domain = log.updates_domain(target);

        prop_assert_eq!(log.earliest_update(target), first);
        prop_assert_eq!(log.latest_update(target), last);
        prop_assert_eq!(log.updates_domain(target), domain);
    }

    #[test]
    fn news_equals_observation_minus_forecast(
        period in period_strategy(),
        observation in -1e6..1e6f64,
        forecast in -1e6..1e6f64,
    ) {
        let mut log = UpdateLog::new();
        let id = log.register(period, 0);
        prop_assert!(log.update(id).unwrap().news().is_nan());

        log.resolve(id, observation, forecast).unwrap();
        let update = log.update(id).unwrap();
        prop_assert_eq!(update.news(), observation - forecast);
    }

    #[test]
    fn conversion_matches_last_day_containment(
        period in period_strategy(),
        target in frequency_strategy(),
    ) {
        let converted = period.at_frequency(target);
        prop_assert_eq!(converted, Period::from_date(target, period.last_day()));
        // Converting an already-converted period is a no-op.
        prop_assert_eq!(converted.at_frequency(target), converted);
    }

    #[test]
    fn conversion_preserves_order_up_to_merging(
        a in period_strategy(),
        b in period_strategy(),
        target in frequency_strategy(),
    ) {
        // Same-frequency periods that are ordered stay weakly ordered
        // after conversion; distinct periods may merge but never swap.
        if a.frequency() == b.frequency() && a <= b {
            prop_assert!(a.at_frequency(target) <= b.at_frequency(target));
        }
    }
}

#[test]
fn empty_log_is_absent_on_every_query() {
    let log = UpdateLog::new();
    for target in Frequency::ALL {
        assert_eq!(log.earliest_update(target), None);
        assert_eq!(log.latest_update(target), None);
        assert_eq!(log.updates_domain(target), None);
    }
}
