use chrono::NaiveDate;
use itertools::{Itertools, MinMaxResult};
use serde::Serialize;

use crate::core::{condition::Condition, sample::HourlySample, series::Series};

/// Aggregate statistics for one day bucket.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DailySummary {
    pub max_wave_height: f64,
    pub min_wave_height: f64,
    pub avg_wave_height: f64,

    /// `None` when no sample carried a swell height.
    pub max_swell_height: Option<f64>,

    /// `None` when no sample carried a swell period.
    pub avg_swell_period: Option<f64>,

    /// All samples in the bucket, including those with absent measurements.
    pub sample_count: usize,

    pub good_hours: usize,
    pub ok_hours: usize,
    pub bad_hours: usize,

    pub best_condition: Condition,
}

/// Summarises each day bucket. Days whose samples all lack a wave height
/// produce no entry at all, so a date present in the grouped input may be
/// absent here.
#[must_use]
pub fn summarize(
    buckets: &Series<NaiveDate, Vec<HourlySample>>,
) -> Series<NaiveDate, DailySummary> {
    buckets
        .iter()
        .filter_map(|(date, samples)| {
            DailySummary::from_samples(samples).map(|summary| (*date, summary))
        })
        .collect()
}

impl DailySummary {
    /// Returns `None` when no sample has a present wave height.
    #[must_use]
    pub fn from_samples(samples: &[HourlySample]) -> Option<Self> {
        let wave_heights: Vec<f64> =
            samples.iter().filter_map(|sample| sample.wave_height).collect();
        let (min_wave_height, max_wave_height) = match wave_heights.iter().copied().minmax() {
            MinMaxResult::NoElements => return None,
            MinMaxResult::OneElement(only) => (only, only),
            MinMaxResult::MinMax(min, max) => (min, max),
        };

        let swell_periods: Vec<f64> =
            samples.iter().filter_map(|sample| sample.swell_period).collect();
        let condition_counts = samples.iter().map(|sample| sample.condition).counts();
        let count_of =
            |condition| condition_counts.get(&condition).copied().unwrap_or_default();
        let good_hours = count_of(Condition::Good);
        let ok_hours = count_of(Condition::Ok);

        Some(Self {
            max_wave_height,
            min_wave_height,
            avg_wave_height: mean(&wave_heights),
            max_swell_height: samples
                .iter()
                .filter_map(|sample| sample.swell_height)
                .reduce(f64::max),
            avg_swell_period: (!swell_periods.is_empty()).then(|| mean(&swell_periods)),
            sample_count: samples.len(),
            good_hours,
            ok_hours,
            bad_hours: count_of(Condition::Bad),
            best_condition: if good_hours > 0 {
                Condition::Good
            } else if ok_hours > 0 {
                Condition::Ok
            } else {
                Condition::Bad
            },
        })
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    use super::*;
    use crate::core::condition::classify;

    fn sample(
        wave_height: Option<f64>,
        swell_height: Option<f64>,
        swell_period: Option<f64>,
    ) -> HourlySample {
        let timestamp = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
            .and_utc();
        HourlySample {
            timestamp,
            hour: 12,
            wave_height,
            wave_direction: None,
            wind_wave_height: None,
            wind_wave_direction: None,
            swell_height,
            swell_direction: None,
            swell_period,
            condition: classify(wave_height, swell_height, swell_period),
        }
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(summarize(&Series::new()).is_empty());
    }

    #[test]
    fn test_day_without_wave_heights_is_omitted() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let buckets = vec![(date, vec![sample(None, Some(1.0), Some(8.0)), sample(None, None, None)])];
        assert!(summarize(&buckets).is_empty());
    }

    #[test]
    fn test_wave_statistics() {
        let samples = [
            sample(Some(0.8), Some(0.6), Some(6.0)),
            sample(Some(1.6), Some(1.2), Some(8.0)),
            sample(Some(1.2), None, None),
        ];
        let summary = DailySummary::from_samples(&samples).unwrap();
        assert_abs_diff_eq!(summary.min_wave_height, 0.8);
        assert_abs_diff_eq!(summary.max_wave_height, 1.6);
        assert_abs_diff_eq!(summary.avg_wave_height, 1.2, epsilon = 1e-9);
        assert!(summary.min_wave_height <= summary.avg_wave_height);
        assert!(summary.avg_wave_height <= summary.max_wave_height);
    }

    #[test]
    fn test_sample_count_includes_absent_rows() {
        let samples = [
            sample(Some(1.0), Some(0.8), Some(7.5)),
            sample(None, None, None),
            sample(None, None, None),
        ];
        let summary = DailySummary::from_samples(&samples).unwrap();
        assert_eq!(summary.sample_count, 3);
    }

    #[test]
    fn test_swell_fallbacks_are_independent() {
        // Wave heights exist, swell heights exist, but no sample has a period:
        let samples = [sample(Some(1.0), Some(0.9), None), sample(Some(1.1), None, None)];
        let summary = DailySummary::from_samples(&samples).unwrap();
        assert_eq!(summary.max_swell_height, Some(0.9));
        assert_eq!(summary.avg_swell_period, None);

        // And the other way around:
        let samples = [sample(Some(1.0), None, Some(8.0))];
        let summary = DailySummary::from_samples(&samples).unwrap();
        assert_eq!(summary.max_swell_height, None);
        assert_eq!(summary.avg_swell_period, Some(8.0));
    }

    #[test]
    fn test_unknown_contributes_to_no_count() {
        let samples = [
            sample(Some(1.5), Some(1.2), Some(8.0)), // Good
            sample(Some(0.6), Some(0.6), Some(6.0)), // OK
            sample(Some(0.1), Some(0.3), Some(5.0)), // Bad
            sample(Some(1.5), None, Some(8.0)),      // Unknown
        ];
        let summary = DailySummary::from_samples(&samples).unwrap();
        assert_eq!(summary.good_hours, 1);
        assert_eq!(summary.ok_hours, 1);
        assert_eq!(summary.bad_hours, 1);
        assert_eq!(summary.sample_count, 4);
        assert_eq!(
            summary.sample_count - summary.good_hours - summary.ok_hours - summary.bad_hours,
            1,
        );
    }

    #[test]
    fn test_best_condition_precedence() {
        let good_day = [sample(Some(1.5), Some(1.2), Some(8.0)), sample(Some(0.1), Some(0.3), Some(5.0))];
        assert_eq!(DailySummary::from_samples(&good_day).unwrap().best_condition, Condition::Good);

        let ok_day = [sample(Some(0.6), Some(0.6), Some(6.0)), sample(Some(0.1), Some(0.3), Some(5.0))];
        assert_eq!(DailySummary::from_samples(&ok_day).unwrap().best_condition, Condition::Ok);

        let bad_day = [sample(Some(0.1), Some(0.3), Some(5.0))];
        assert_eq!(DailySummary::from_samples(&bad_day).unwrap().best_condition, Condition::Bad);

        // All-Unknown days still summarise as Bad when a wave height exists:
        let unknown_day = [sample(Some(1.0), None, None)];
        assert_eq!(DailySummary::from_samples(&unknown_day).unwrap().best_condition, Condition::Bad);
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let buckets = vec![(
            date,
            vec![sample(Some(1.0), Some(0.8), Some(7.5)), sample(Some(2.0), None, Some(9.0))],
        )];
        assert_eq!(summarize(&buckets), summarize(&buckets));
    }
}
