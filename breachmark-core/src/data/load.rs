//! Typed loaders: raw tables into domain records.
//!
//! Schema checks happen here — a missing expected column aborts the run
//! with a descriptive error instead of surfacing later as a bad aggregate.

use super::table::read_table;
use super::DataError;
use crate::domain::{IndexDay, LongTermRow, ShortTermRecord};
use crate::normalize::{parse_level, parse_percent};
use chrono::NaiveDate;
use std::path::Path;

const COL_TICKER: &str = "Ticker";
const COL_S_MINUS_1: &str = "S - 1";
const COL_S_PLUS_1: &str = "S + 1";
const COL_S_PLUS_2: &str = "S + 2";
const COL_PCT_CHANGE: &str = "Percentage change";
const COL_DATE: &str = "Date";

/// Source date format, e.g. `03-Mar-2021`.
const DATE_FORMAT: &str = "%d-%b-%Y";

/// Load a long-term financial file: one row per firm, three revenue levels.
pub fn load_long_term(path: impl AsRef<Path>) -> Result<Vec<LongTermRow>, DataError> {
    let table = read_table(path)?;
    let ticker = table.column_index(COL_TICKER)?;
    let s_minus_1 = table.column_index(COL_S_MINUS_1)?;
    let s_plus_1 = table.column_index(COL_S_PLUS_1)?;
    let s_plus_2 = table.column_index(COL_S_PLUS_2)?;

    Ok(table
        .rows()
        .iter()
        .map(|row| LongTermRow {
            ticker: row[ticker].trim().to_string(),
            s_minus_1: parse_level(&row[s_minus_1]),
            s_plus_1: parse_level(&row[s_plus_1]),
            s_plus_2: parse_level(&row[s_plus_2]),
        })
        .collect())
}

/// Load a short-term stock file: one row per firm, one display-formatted
/// percentage change.
pub fn load_short_term(path: impl AsRef<Path>) -> Result<Vec<ShortTermRecord>, DataError> {
    let table = read_table(path)?;
    let ticker = table.column_index(COL_TICKER)?;
    let pct = table.column_index(COL_PCT_CHANGE)?;

    Ok(table
        .rows()
        .iter()
        .map(|row| ShortTermRecord {
            ticker: row[ticker].trim().to_string(),
            pct_change: parse_percent(&row[pct]),
        })
        .collect())
}

/// Load the market index benchmark series, sorted by date.
///
/// Rows whose date does not parse are dropped from the series rather than
/// aborting the load.
pub fn load_index(path: impl AsRef<Path>) -> Result<Vec<IndexDay>, DataError> {
    let table = read_table(path)?;
    let date = table.column_index(COL_DATE)?;
    let pct = table.column_index(COL_PCT_CHANGE)?;

    let mut days: Vec<IndexDay> = table
        .rows()
        .iter()
        .filter_map(|row| {
            let date = NaiveDate::parse_from_str(row[date].trim(), DATE_FORMAT).ok()?;
            Some(IndexDay {
                date,
                pct_change: parse_percent(&row[pct]),
            })
        })
        .collect();
    days.sort_by_key(|d| d.date);
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn long_term_rows_normalize_levels() {
        let file = write_temp(b"Ticker;S - 1;S + 1;S + 2\nABC;1,000;1,100X;\n");
        let rows = load_long_term(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].ticker, "ABC");
        assert_eq!(rows[0].s_minus_1, Some(1000.0));
        assert_eq!(rows[0].s_plus_1, Some(1100.0));
        assert_eq!(rows[0].s_plus_2, None);
    }

    #[test]
    fn long_term_missing_column_fails_fast() {
        let file = write_temp(b"Ticker;S - 1;S + 1\nABC;1;2\n");
        let err = load_long_term(file.path()).unwrap_err();
        assert!(err.to_string().contains("S + 2"));
    }

    #[test]
    fn short_term_rows_normalize_percentages() {
        let file = write_temp(b"Ticker;Percentage change\nABC;+1,5%\nDEF;-2,0%\nGHI;bad\n");
        let rows = load_short_term(file.path()).unwrap();
        assert_eq!(rows[0].pct_change, Some(1.5));
        assert_eq!(rows[1].pct_change, Some(-2.0));
        assert_eq!(rows[2].pct_change, None);
    }

    #[test]
    fn index_drops_bad_dates_and_sorts() {
        let file = write_temp(
            b"Date;Percentage change\n05-Mar-2021;+0,5%\nnot-a-date;+9,9%\n01-Mar-2021;-1,0%\n",
        );
        let days = load_index(file.path()).unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2021, 3, 1).unwrap());
        assert_eq!(days[0].pct_change, Some(-1.0));
        assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2021, 3, 5).unwrap());
    }

    #[test]
    fn index_keeps_rows_with_missing_change() {
        let file = write_temp(b"Date;Percentage change\n02-Mar-2021;\n");
        let days = load_index(file.path()).unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].pct_change, None);
    }
}
