//! Reads a camp activity export into a [`Roster`].
//!
//! The export is a ragged spreadsheet dump. Rows come in four shapes,
//! recognised by their first cell:
//!
//! ```text
//! Cabin 3,,,                          <- cabin title (second cell empty)
//! Period,Mary,John,Ann                <- header: camper names by column
//! 1,Horse Lovers,Extreme Combo,Canoe  <- period row: activity per camper
//! ,,,                                 <- blank, ignored
//! ```
//!
//! The scan keeps two pieces of running state (the latest cabin title and
//! the latest header) and pivots each period row into the roster.

use csv::{ReaderBuilder, Trim};
use std::path::Path;

use crate::config::InputConfig;
use crate::error::{ParseError, ParseResult};
use crate::models::{participant_label, Roster};

/// Parsed roster with metadata about the input.
#[derive(Debug, Clone)]
pub struct ParsedRoster {
    pub roster: Roster,
    /// Detected encoding
    pub encoding: String,
    /// Detected or configured delimiter
    pub delimiter: char,
    pub stats: ScanStats,
}

/// Counters collected during the scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Rows delivered by the CSV reader
    pub rows: usize,
    /// Period rows pivoted into the roster
    pub period_rows: usize,
    /// Non-blank rows that matched no known shape, or period rows before any header
    pub skipped_rows: usize,
    /// Participant assignments recorded
    pub assignments: usize,
}

/// Shape of a single input row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Blank,
    Header,
    Period,
    Cabin,
    Unrecognized,
}

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" | "" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes to a string, dropping a leading byte-order mark.
///
/// Unknown encodings fall back to lossy UTF-8.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    let decoded = match encoding.to_lowercase().as_str() {
        "iso-8859-1" | "latin-1" | "latin1" => encoding_rs::ISO_8859_15.decode(bytes).0.into_owned(),
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned(),
        _ => String::from_utf8_lossy(bytes).into_owned(),
    };
    match decoded.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => decoded,
    }
}

/// Detect the delimiter by counting candidates over the first non-empty lines.
///
/// Falls back to a comma when no candidate appears. Ties go to the
/// earlier candidate, so comma wins.
pub fn detect_delimiter(content: &str) -> char {
    let sample: Vec<&str> = content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(5)
        .collect();

    let separators = [',', ';', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count: usize = sample.iter().map(|l| l.matches(sep).count()).sum();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Split CSV text into trimmed rows. Rows may have any length.
pub fn read_rows(content: &str, delimiter: char) -> ParseResult<Vec<Vec<String>>> {
    let delimiter = u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(ParseError::Delimiter(delimiter))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .delimiter(delimiter)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Decide what a row is. Checks run in order: blank, header, period, cabin.
pub fn classify_row(row: &[String], config: &InputConfig) -> RowKind {
    if row.iter().all(|c| c.is_empty()) {
        return RowKind::Blank;
    }
    let first = row.first().map(String::as_str).unwrap_or("");
    if first.contains(config.header_marker.as_str()) {
        RowKind::Header
    } else if config.periods.iter().any(|p| p == first) {
        RowKind::Period
    } else if !first.is_empty() && row.get(1).map_or(true, |c| c.is_empty()) {
        RowKind::Cabin
    } else {
        RowKind::Unrecognized
    }
}

/// Pivot rows into a roster in a single forward pass.
///
/// Period rows are read against the most recent header: column 0 is the
/// period id, every other non-empty header cell names a camper whose
/// activity sits in the same column. Missing or empty activity cells mean
/// the camper has no assignment in that period.
pub fn scan_rows<I>(rows: I, config: &InputConfig) -> (Roster, ScanStats)
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut roster = Roster::new(config.periods.iter().cloned());
    let mut stats = ScanStats::default();
    let mut cabin: Option<String> = None;
    let mut header: Option<Vec<String>> = None;

    for (line, row) in rows.into_iter().enumerate() {
        stats.rows += 1;
        match classify_row(&row, config) {
            RowKind::Blank => {}
            RowKind::Header => header = Some(row),
            RowKind::Cabin => cabin = row.into_iter().next(),
            RowKind::Unrecognized => {
                stats.skipped_rows += 1;
                log::debug!("row {}: unrecognized first cell {:?}, skipped", line + 1, row.first());
            }
            RowKind::Period => {
                let Some(names) = header.as_ref() else {
                    stats.skipped_rows += 1;
                    log::debug!("row {}: period row before any header, skipped", line + 1);
                    continue;
                };
                let Some(group) = roster.group_mut(&row[0]) else {
                    continue;
                };
                stats.period_rows += 1;

                let tag = if config.cabin_tags { cabin.as_deref() } else { None };
                for (column, name) in names.iter().enumerate().skip(1) {
                    if name.is_empty() {
                        continue;
                    }
                    let activity = row.get(column).map(String::as_str).unwrap_or("");
                    if activity.is_empty() {
                        continue;
                    }
                    group.push_participant(activity, participant_label(name, tag));
                    stats.assignments += 1;
                }
            }
        }
    }

    (roster, stats)
}

/// Parse export bytes with encoding detection.
pub fn parse_roster_bytes(bytes: &[u8], config: &InputConfig) -> ParseResult<ParsedRoster> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    let delimiter = config
        .delimiter
        .unwrap_or_else(|| detect_delimiter(&content));

    log::debug!("encoding={} delimiter={:?}", encoding, delimiter);

    let rows = read_rows(&content, delimiter)?;
    let (roster, stats) = scan_rows(rows, config);

    log::debug!(
        "scanned {} rows: {} period rows, {} skipped, {} assignments",
        stats.rows,
        stats.period_rows,
        stats.skipped_rows,
        stats.assignments
    );

    Ok(ParsedRoster {
        roster,
        encoding,
        delimiter,
        stats,
    })
}

/// Parse an export file.
pub fn parse_roster_file<P: AsRef<Path>>(path: P, config: &InputConfig) -> ParseResult<ParsedRoster> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_roster_bytes(&bytes, config)
}
