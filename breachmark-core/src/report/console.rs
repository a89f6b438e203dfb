//! Console summaries — section renderers that return plain text.
//!
//! Rendering is separated from printing so the binary owns all console I/O
//! and tests can assert on the exact text. Numbers are rounded to two
//! decimals at formatting time only; absent statistics print as `NaN`,
//! matching how a missing standard deviation or quartile reads in a
//! describe table.

use crate::domain::Cohort;
use crate::stats::Summary;
use std::fmt::Write;

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "NaN".to_string(),
    }
}

/// Render one describe block: count, mean, std, min, quartiles, max.
pub fn describe_block(label: &str, summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{label}:");
    let _ = writeln!(out, "  count  {:>10}", summary.count);
    let _ = writeln!(out, "  mean   {:>10}", fmt_opt(summary.mean));
    let _ = writeln!(out, "  std    {:>10}", fmt_opt(summary.std));
    let _ = writeln!(out, "  min    {:>10}", fmt_opt(summary.min));
    let _ = writeln!(out, "  25%    {:>10}", fmt_opt(summary.q25));
    let _ = writeln!(out, "  50%    {:>10}", fmt_opt(summary.median));
    let _ = writeln!(out, "  75%    {:>10}", fmt_opt(summary.q75));
    let _ = writeln!(out, "  max    {:>10}", fmt_opt(summary.max));
    out
}

/// Long-term section: `Change S+2 (%)` describe per cohort.
pub fn long_term_section(breached: &Summary, control: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n--- Long-Term Financial Impact ---");
    out.push_str(&describe_block("Breached Firms (S+2)", breached));
    out.push('\n');
    out.push_str(&describe_block("Control Firms (S+2)", control));
    out
}

/// Short-term section: per-cohort mean / median / std / count table.
pub fn short_term_section(groups: &[(Cohort, Summary)]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n--- Short-Term Stock Performance ---");
    let _ = writeln!(
        out,
        "{:<16}{:>10}{:>10}{:>10}{:>8}",
        "Group", "mean", "median", "std", "count"
    );
    for (cohort, summary) in groups {
        let _ = writeln!(
            out,
            "{:<16}{:>10}{:>10}{:>10}{:>8}",
            cohort.label(),
            fmt_opt(summary.mean),
            fmt_opt(summary.median),
            fmt_opt(summary.std),
            summary.count
        );
    }
    out
}

/// Rolling 3-month index summary section.
pub fn rolling_section(summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n--- S&P 500 3-Month Rolling Summary ---");
    out.push_str(&describe_block("Rolling 3-month % change", summary));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::describe;

    fn row<'a>(block: &'a str, stat: &str) -> Vec<&'a str> {
        block
            .lines()
            .find(|l| l.trim_start().starts_with(stat))
            .unwrap_or_else(|| panic!("no '{stat}' row in:\n{block}"))
            .split_whitespace()
            .collect()
    }

    #[test]
    fn describe_block_rounds_to_two_decimals() {
        let summary = describe(&[Some(1.0), Some(2.0), Some(3.0)]);
        let block = describe_block("Sample", &summary);
        assert!(block.contains("Sample:"));
        assert_eq!(row(&block, "count"), vec!["count", "3"]);
        assert_eq!(row(&block, "mean"), vec!["mean", "2.00"]);
        assert_eq!(row(&block, "std"), vec!["std", "1.00"]);
    }

    #[test]
    fn missing_statistics_print_as_nan() {
        let summary = describe(&[Some(7.0)]);
        let block = describe_block("One", &summary);
        assert_eq!(row(&block, "std"), vec!["std", "NaN"]);
    }

    #[test]
    fn short_term_table_has_one_row_per_cohort() {
        let groups = vec![
            (Cohort::Breached, describe(&[Some(1.0)])),
            (Cohort::Control, describe(&[Some(-2.0)])),
        ];
        let section = short_term_section(&groups);
        assert!(section.contains("--- Short-Term Stock Performance ---"));
        assert!(section.contains("Breached Firms"));
        assert!(section.contains("Control Firms"));
        assert!(section.contains("1.00"));
        assert!(section.contains("-2.00"));
    }

    #[test]
    fn sections_carry_their_headers() {
        let s = describe(&[Some(1.0), Some(2.0)]);
        assert!(long_term_section(&s, &s).contains("--- Long-Term Financial Impact ---"));
        assert!(rolling_section(&s).contains("--- S&P 500 3-Month Rolling Summary ---"));
    }
}
