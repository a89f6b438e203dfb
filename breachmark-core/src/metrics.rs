//! Percentage-change metrics — pure functions over optional observations.

use crate::domain::{LongTermRecord, LongTermRow};

/// Percentage change from `start` to `end`: `(end - start) / start * 100`.
///
/// Missing-aware: the result is `None` when either operand is absent or the
/// baseline is zero. A zero baseline makes the change undefined; it must
/// propagate as missing, never as an error and never as `0.0`.
pub fn pct_change(start: Option<f64>, end: Option<f64>) -> Option<f64> {
    match (start, end) {
        (Some(s), Some(e)) if s != 0.0 => Some((e - s) / s * 100.0),
        _ => None,
    }
}

/// Derive both change horizons from the `S - 1` baseline.
///
/// The two horizons are independent: a missing `S + 1` leaves `S + 2`'s
/// change intact and vice versa.
pub fn derive(row: LongTermRow) -> LongTermRecord {
    let change_s1_pct = pct_change(row.s_minus_1, row.s_plus_1);
    let change_s2_pct = pct_change(row.s_minus_1, row.s_plus_2);
    LongTermRecord {
        ticker: row.ticker,
        s_minus_1: row.s_minus_1,
        s_plus_1: row.s_plus_1,
        s_plus_2: row.s_plus_2,
        change_s1_pct,
        change_s2_pct,
    }
}
