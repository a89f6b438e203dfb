//! Breachmark Core — breach-impact analysis pipeline.
//!
//! This crate contains the full analysis library:
//! - Domain types (cohorts, long-term and short-term records, index series)
//! - Delimited-text loading with delimiter sniffing and Latin-1 decoding
//! - Normalization of display-formatted numeric strings
//! - Percentage-change metrics over the S-1 baseline
//! - Missing-value-aware descriptive statistics and monthly resampling
//! - Reporting (console summaries and chart rendering)

pub mod data;
pub mod domain;
pub mod metrics;
pub mod normalize;
pub mod report;
pub mod stats;
