//! Raw table reading: Latin-1 decode, delimiter sniffing, best-effort rows.

use super::DataError;
use std::path::{Path, PathBuf};

/// An untyped table: trimmed header names plus string rows.
///
/// Every row is guaranteed to have exactly one cell per header; rows that
/// arrived with a different field count were dropped at read time.
#[derive(Debug, Clone)]
pub struct RawTable {
    path: PathBuf,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// The source path, for diagnostics.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Index of a named column, failing fast when the schema does not match.
    pub fn column_index(&self, name: &str) -> Result<usize, DataError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DataError::MissingColumn {
                column: name.to_string(),
                path: self.path.clone(),
            })
    }

    /// All cells of a named column, in row order.
    pub fn column(&self, name: &str) -> Result<Vec<&str>, DataError> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }
}

/// Read a delimited text file into a [`RawTable`].
///
/// The file is decoded as Latin-1 (every byte is a valid code point, so
/// legacy exports never abort the load), the delimiter is sniffed from the
/// header line, header names are whitespace-trimmed, and rows whose field
/// count differs from the header are skipped silently.
pub fn read_table(path: impl AsRef<Path>) -> Result<RawTable, DataError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = encoding_rs::mem::decode_latin1(&bytes);

    let header_line = text.lines().next().ok_or_else(|| DataError::EmptyTable {
        path: path.to_path_buf(),
    })?;
    let delimiter = sniff_delimiter(header_line);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|_| DataError::EmptyTable {
            path: path.to_path_buf(),
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        // Best-effort partial load: malformed rows are dropped, not fatal.
        let Ok(record) = record else { continue };
        if record.len() != headers.len() {
            continue;
        }
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    Ok(RawTable {
        path: path.to_path_buf(),
        headers,
        rows,
    })
}

/// Pick the field delimiter by counting candidates in the header line.
///
/// Comma wins ties so that plain CSV stays the default; semicolon and tab
/// cover the spreadsheet exports observed in the source data.
fn sniff_delimiter(header_line: &str) -> u8 {
    let comma = header_line.matches(',').count();
    let semicolon = header_line.matches(';').count();
    let tab = header_line.matches('\t').count();

    if semicolon > comma && semicolon >= tab {
        b';'
    } else if tab > comma {
        b'\t'
    } else {
        b','
    }
}
