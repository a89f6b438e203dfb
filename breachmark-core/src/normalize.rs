//! Normalization of display-formatted numeric strings.
//!
//! The source exports store numbers the way a spreadsheet displays them:
//! thousands separators, a trailing `X` data-quality flag on level values,
//! comma decimal points and explicit signs on percentages. Both parsers map
//! empty or still-unparseable input to `None` — zero is a legitimate value
//! and must never stand in for absent data.

/// Parse a thousands-grouped level value such as `"1,234"` or `"12,500X"`.
///
/// Order matters: grouping commas are removed first, then trailing flag
/// characters, then an empty remainder is treated as missing.
pub fn parse_level(raw: &str) -> Option<f64> {
    let cleaned = raw.replace(',', "");
    let cleaned = cleaned.trim().trim_end_matches('X').trim_end();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Parse a display-formatted percentage such as `"+2,5%"` or `"-0.8%"`.
///
/// Comma decimal separators become periods before the leading `+` and the
/// trailing `%` are stripped.
pub fn parse_percent(raw: &str) -> Option<f64> {
    let cleaned = raw.replace(',', ".");
    let cleaned = cleaned
        .trim()
        .trim_start_matches('+')
        .trim_end_matches('%')
        .trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}
