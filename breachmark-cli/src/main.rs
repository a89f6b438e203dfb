//! Breachmark — one-shot breach-impact analysis run.
//!
//! Reads the five fixed input files, prints grouped descriptive statistics
//! to the console, and writes four chart images to the working directory.
//! There are no flags and no configuration: every filename, column name,
//! window size, and rounding precision is a constant of the pipeline.

use anyhow::{Context, Result};
use breachmark_core::data::{load_index, load_long_term, load_short_term};
use breachmark_core::domain::Cohort;
use breachmark_core::report::{charts, console};
use breachmark_core::{metrics, stats};

// Input files, as exported for the study.
const LT_BREACHED_FILE: &str = "Long term financial data breached firms thesis IM correct.csv";
const LT_CONTROL_FILE: &str = "Long term financial data control firms thesis IM correct.csv";
const ST_BREACHED_FILE: &str = "Short term financial data breached firms thesis IM correct.csv";
const ST_CONTROL_FILE: &str = "Short term financial data control firms thesis IM correct.csv";
const INDEX_FILE: &str = "S&P500 market index thesis IM correct.csv";

// Output charts.
const ST_BOXPLOT: &str = "short_term_comparison_boxplot.png";
const LT_BOXPLOT: &str = "long_term_comparison_boxplot.png";
const INDEX_TREND: &str = "sp500_index_trend.png";
const ROLLING_TREND: &str = "sp500_rolling_3mo_trend.png";

fn main() -> Result<()> {
    // ── Long-term revenue trajectory ─────────────────────────────────
    let lt_breached: Vec<_> = load_long_term(LT_BREACHED_FILE)
        .with_context(|| format!("loading '{LT_BREACHED_FILE}'"))?
        .into_iter()
        .map(metrics::derive)
        .collect();
    let lt_control: Vec<_> = load_long_term(LT_CONTROL_FILE)
        .with_context(|| format!("loading '{LT_CONTROL_FILE}'"))?
        .into_iter()
        .map(metrics::derive)
        .collect();

    let breached_s2: Vec<_> = lt_breached.iter().map(|r| r.change_s2_pct).collect();
    let control_s2: Vec<_> = lt_control.iter().map(|r| r.change_s2_pct).collect();
    print!(
        "{}",
        console::long_term_section(&stats::describe(&breached_s2), &stats::describe(&control_s2))
    );

    // ── Short-term stock reaction ────────────────────────────────────
    let st_breached = load_short_term(ST_BREACHED_FILE)
        .with_context(|| format!("loading '{ST_BREACHED_FILE}'"))?;
    let st_control = load_short_term(ST_CONTROL_FILE)
        .with_context(|| format!("loading '{ST_CONTROL_FILE}'"))?;

    let st_breached_changes: Vec<_> = st_breached.iter().map(|r| r.pct_change).collect();
    let st_control_changes: Vec<_> = st_control.iter().map(|r| r.pct_change).collect();
    let groups = [
        (Cohort::Breached, stats::describe(&st_breached_changes)),
        (Cohort::Control, stats::describe(&st_control_changes)),
    ];
    print!("{}", console::short_term_section(&groups));

    // ── Cohort comparison charts ─────────────────────────────────────
    let st_breached_obs: Vec<f64> = st_breached.iter().filter_map(|r| r.pct_change).collect();
    let st_control_obs: Vec<f64> = st_control.iter().filter_map(|r| r.pct_change).collect();
    charts::save_cohort_boxplot(
        ST_BOXPLOT,
        "Short-Term Stock Price Change: Breached vs Control Firms",
        "Daily % Change in Stock Price",
        &st_breached_obs,
        &st_control_obs,
    )?;
    println!("Saved: {ST_BOXPLOT}");

    let lt_breached_obs: Vec<f64> = lt_breached.iter().filter_map(|r| r.change_s2_pct).collect();
    let lt_control_obs: Vec<f64> = lt_control.iter().filter_map(|r| r.change_s2_pct).collect();
    charts::save_cohort_boxplot(
        LT_BOXPLOT,
        "Long-Term Revenue Change (S+2 vs. S-1): Breached vs Control Firms",
        "Revenue % Change (S+2)",
        &lt_breached_obs,
        &lt_control_obs,
    )?;
    println!("Saved: {LT_BOXPLOT}");

    // ── Market index benchmark ───────────────────────────────────────
    let index = load_index(INDEX_FILE).with_context(|| format!("loading '{INDEX_FILE}'"))?;

    let daily: Vec<_> = index
        .iter()
        .filter_map(|d| d.pct_change.map(|c| (d.date, c)))
        .collect();
    charts::save_line_plot(
        INDEX_TREND,
        "S&P 500 Daily Percentage Change Over Time",
        "Daily % Change",
        &daily,
        (1200, 500),
    )?;
    println!("Saved: {INDEX_TREND}");

    let monthly = stats::monthly_series(&index);
    let rolling_points: Vec<_> = monthly
        .iter()
        .filter_map(|p| p.rolling_3mo.map(|r| (p.month, r)))
        .collect();
    charts::save_line_plot(
        ROLLING_TREND,
        "S&P 500 Rolling 3-Month Performance (Proxy for S-1 to S+2)",
        "3-Month % Change",
        &rolling_points,
        (1000, 500),
    )?;
    println!("Saved: {ROLLING_TREND}");

    let rolling_values: Vec<_> = monthly.iter().map(|p| p.rolling_3mo).collect();
    print!("{}", console::rolling_section(&stats::describe(&rolling_values)));

    Ok(())
}
