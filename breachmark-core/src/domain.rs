//! Domain types — cohorts, firm records, and the index benchmark series.
//!
//! Missing values are `Option::None` throughout. A cell that was empty or
//! unparseable in the source export stays absent; it is never coerced to
//! zero and never represented by a NaN sentinel.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The grouping key for every aggregate statistic: breached firms vs. their
/// matched controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cohort {
    Breached,
    Control,
}

impl Cohort {
    /// Display label used in console tables and chart axes.
    pub fn label(&self) -> &'static str {
        match self {
            Cohort::Breached => "Breached Firms",
            Cohort::Control => "Control Firms",
        }
    }
}

impl fmt::Display for Cohort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One firm's long-term revenue levels, as loaded from the source file.
///
/// `S - 1` is the baseline one period before the breach event (or the
/// matched reference point for controls); `S + 1` and `S + 2` are one and
/// two periods after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongTermRow {
    pub ticker: String,
    pub s_minus_1: Option<f64>,
    pub s_plus_1: Option<f64>,
    pub s_plus_2: Option<f64>,
}

/// A long-term row plus its derived percentage changes.
///
/// Produced by [`crate::metrics::derive`]; the derived fields are `None`
/// whenever the baseline is missing or zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongTermRecord {
    pub ticker: String,
    pub s_minus_1: Option<f64>,
    pub s_plus_1: Option<f64>,
    pub s_plus_2: Option<f64>,
    pub change_s1_pct: Option<f64>,
    pub change_s2_pct: Option<f64>,
}

/// One firm's short-term stock reaction: a pre-computed percentage change
/// around the event day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortTermRecord {
    pub ticker: String,
    pub pct_change: Option<f64>,
}

/// One trading day of the market index benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexDay {
    pub date: NaiveDate,
    pub pct_change: Option<f64>,
}

/// One calendar month of the index benchmark after resampling.
///
/// `total` sums the month's observed daily changes; `rolling_3mo` is the
/// trailing sum over this month and the two preceding months, absent until
/// three months of data exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: NaiveDate,
    pub total: f64,
    pub rolling_3mo: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cohort_labels_match_report_headers() {
        assert_eq!(Cohort::Breached.label(), "Breached Firms");
        assert_eq!(Cohort::Control.label(), "Control Firms");
        assert_eq!(format!("{}", Cohort::Control), "Control Firms");
    }
}
