//! Descriptive statistics and calendar resampling — pure functions.
//!
//! Every statistic is missing-value aware: `None` observations are excluded
//! from count, mean, median, std, and quartiles, never treated as zero.

use crate::domain::{IndexDay, MonthlyPoint};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rolling window for the index benchmark, in months (proxy for S-1 to S+2).
pub const ROLLING_WINDOW_MONTHS: usize = 3;

/// Descriptive statistics over the observed (non-missing) values of a sample.
///
/// Mirrors the count / mean / std / min / 25% / 50% / 75% / max layout of a
/// standard describe table. `std` uses the unbiased N-1 denominator and is
/// absent for samples with fewer than two observations; the order statistics
/// are absent for empty samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

/// Compute descriptive statistics over a sample with possible gaps.
pub fn describe(values: &[Option<f64>]) -> Summary {
    let mut observed: Vec<f64> = values.iter().filter_map(|v| *v).collect();
    observed.sort_by(|a, b| a.total_cmp(b));

    let count = observed.len();
    if count == 0 {
        return Summary {
            count: 0,
            mean: None,
            std: None,
            min: None,
            q25: None,
            median: None,
            q75: None,
            max: None,
        };
    }

    let mean = observed.iter().sum::<f64>() / count as f64;
    Summary {
        count,
        mean: Some(mean),
        std: sample_std(&observed, mean),
        min: Some(observed[0]),
        q25: Some(percentile(&observed, 0.25)),
        median: Some(percentile(&observed, 0.5)),
        q75: Some(percentile(&observed, 0.75)),
        max: Some(observed[count - 1]),
    }
}

/// Sample standard deviation (N-1 denominator). `None` below two observations.
fn sample_std(observed: &[f64], mean: f64) -> Option<f64> {
    let n = observed.len();
    if n < 2 {
        return None;
    }
    let ss: f64 = observed.iter().map(|v| (v - mean) * (v - mean)).sum();
    Some((ss / (n - 1) as f64).sqrt())
}

/// Linearly interpolated percentile over a sorted sample.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = q * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Resample daily index observations into per-month totals with a trailing
/// rolling sum attached.
///
/// Daily changes within a calendar month are SUMMED, not averaged — the
/// additive convention inherited from the source data. The rolling value is
/// the sum of the current and two preceding monthly totals; the first two
/// months of any series have no rolling value.
pub fn monthly_series(days: &[IndexDay]) -> Vec<MonthlyPoint> {
    let mut buckets: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for day in days {
        if let Some(change) = day.pct_change {
            *buckets
                .entry((day.date.year(), day.date.month()))
                .or_insert(0.0) += change;
        }
    }

    let totals: Vec<((i32, u32), f64)> = buckets.into_iter().collect();
    let rolling = rolling_sum(
        &totals.iter().map(|(_, t)| *t).collect::<Vec<f64>>(),
        ROLLING_WINDOW_MONTHS,
    );

    totals
        .into_iter()
        .zip(rolling)
        .map(|(((year, month), total), rolling_3mo)| MonthlyPoint {
            // first of month is always a valid date
            month: NaiveDate::from_ymd_opt(year, month, 1).unwrap(),
            total,
            rolling_3mo,
        })
        .collect()
}

/// Trailing rolling sum over a fixed window.
///
/// Positions with fewer than `window` prior data points are `None`, not zero.
pub fn rolling_sum(values: &[f64], window: usize) -> Vec<Option<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(i, _)| {
            if i + 1 < window {
                None
            } else {
                Some(values[i + 1 - window..=i].iter().sum())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().map(|v| Some(*v)).collect()
    }

    #[test]
    fn describe_basic_sample() {
        let s = describe(&some(&[1.0, 2.0, 3.0, 4.0]));
        assert_eq!(s.count, 4);
        assert_eq!(s.mean, Some(2.5));
        assert_eq!(s.min, Some(1.0));
        assert_eq!(s.median, Some(2.5));
        assert_eq!(s.max, Some(4.0));
        // sample std of 1..4 is sqrt(5/3)
        let std = s.std.unwrap();
        assert!((std - (5.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn describe_interpolates_quartiles() {
        let s = describe(&some(&[1.0, 2.0, 3.0, 4.0]));
        assert_eq!(s.q25, Some(1.75));
        assert_eq!(s.q75, Some(3.25));
    }

    #[test]
    fn describe_empty_sample_is_all_absent() {
        let s = describe(&[None, None]);
        assert_eq!(s.count, 0);
        assert_eq!(s.mean, None);
        assert_eq!(s.std, None);
        assert_eq!(s.median, None);
    }

    #[test]
    fn describe_singleton_has_no_std() {
        let s = describe(&some(&[7.0]));
        assert_eq!(s.count, 1);
        assert_eq!(s.mean, Some(7.0));
        assert_eq!(s.std, None);
        assert_eq!(s.min, Some(7.0));
        assert_eq!(s.max, Some(7.0));
    }

    #[test]
    fn missing_values_are_excluded_not_zeroed() {
        let with_gap = describe(&[Some(5.0), None, Some(5.0), Some(5.0)]);
        let without = describe(&some(&[5.0, 5.0, 5.0]));
        assert_eq!(with_gap, without);
        assert_eq!(with_gap.count, 3);
        assert_eq!(with_gap.mean, Some(5.0));
    }

    fn day(y: i32, m: u32, d: u32, change: f64) -> IndexDay {
        IndexDay {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            pct_change: Some(change),
        }
    }

    #[test]
    fn monthly_totals_sum_within_calendar_month() {
        let days = vec![
            day(2021, 3, 1, 1.0),
            day(2021, 3, 15, 2.0),
            day(2021, 3, 30, -0.5),
        ];
        let series = monthly_series(&days);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].month, NaiveDate::from_ymd_opt(2021, 3, 1).unwrap());
        assert!((series[0].total - 2.5).abs() < 1e-12);
        assert_eq!(series[0].rolling_3mo, None);
    }

    #[test]
    fn monthly_skips_missing_daily_changes() {
        let days = vec![
            day(2021, 3, 1, 1.0),
            IndexDay {
                date: NaiveDate::from_ymd_opt(2021, 3, 2).unwrap(),
                pct_change: None,
            },
            day(2021, 3, 3, 2.0),
        ];
        let series = monthly_series(&days);
        assert!((series[0].total - 3.0).abs() < 1e-12);
    }

    #[test]
    fn rolling_undefined_for_first_two_months() {
        let days = vec![
            day(2021, 1, 15, 1.0),
            day(2021, 2, 15, 2.0),
            day(2021, 3, 15, 3.0),
            day(2021, 4, 15, 4.0),
        ];
        let series = monthly_series(&days);
        assert_eq!(series.len(), 4);
        assert_eq!(series[0].rolling_3mo, None);
        assert_eq!(series[1].rolling_3mo, None);
        assert_eq!(series[2].rolling_3mo, Some(6.0));
        assert_eq!(series[3].rolling_3mo, Some(9.0));
    }

    #[test]
    fn months_are_ordered_across_year_boundaries() {
        let days = vec![day(2022, 1, 5, 4.0), day(2021, 12, 5, 3.0), day(2021, 11, 5, 2.0)];
        let series = monthly_series(&days);
        let months: Vec<NaiveDate> = series.iter().map(|p| p.month).collect();
        assert_eq!(
            months,
            vec![
                NaiveDate::from_ymd_opt(2021, 11, 1).unwrap(),
                NaiveDate::from_ymd_opt(2021, 12, 1).unwrap(),
                NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            ]
        );
        assert_eq!(series[2].rolling_3mo, Some(9.0));
    }

    #[test]
    fn rolling_sum_windowing() {
        assert_eq!(
            rolling_sum(&[1.0, 2.0, 3.0, 4.0], 3),
            vec![None, None, Some(6.0), Some(9.0)]
        );
        assert_eq!(rolling_sum(&[], 3), Vec::<Option<f64>>::new());
    }
}
