//! High-level pipeline API: activity export in, roster files out.
//!
//! # Example
//!
//! ```rust,ignore
//! use roster::{run, RosterConfig};
//! use std::path::Path;
//!
//! let mut config = RosterConfig::default();
//! config.enable_summary(None);
//! let summary = run(Path::new("activities.csv"), &config)?;
//! println!("Wrote {} tables", summary.tables.len());
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use super::counts::annotate_counts;
use crate::config::{OutputConfig, RosterConfig};
use crate::error::{PipelineResult, WriteError};
use crate::logs::{log_info, log_success, log_success_indent, LogEntry, CONSOLE};
use crate::models::Roster;
use crate::parser::{parse_roster_bytes, parse_roster_file, ParsedRoster, ScanStats};
use crate::writer::{write_period_table, write_report};

/// Result of a complete run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub encoding: String,
    pub delimiter: char,
    pub stats: ScanStats,
    /// Period tables written, in period order
    pub tables: Vec<PathBuf>,
    /// Text report, if one was written
    pub report: Option<PathBuf>,
}

/// Run the whole pipeline on an export file.
///
/// 1. Parse the export into a roster
/// 2. Annotate activity labels with counts (if configured)
/// 3. Write one table per known period
/// 4. Write the text report (if configured)
pub fn run(input: &Path, config: &RosterConfig) -> PipelineResult<RunSummary> {
    config.validate()?;
    log_info(format!("📖 Reading {}", input.display()));
    let parsed = parse_roster_file(input, &config.input)?;
    finish(parsed, config)
}

/// Same as [`run`], from bytes already in memory.
pub fn run_bytes(bytes: &[u8], config: &RosterConfig) -> PipelineResult<RunSummary> {
    config.validate()?;
    let parsed = parse_roster_bytes(bytes, &config.input)?;
    finish(parsed, config)
}

/// Parse an export and apply post-processing, without writing anything.
pub fn load_roster(input: &Path, config: &RosterConfig) -> PipelineResult<ParsedRoster> {
    config.validate()?;
    let parsed = parse_roster_file(input, &config.input)?;
    post_process(parsed, config)
}

fn post_process(mut parsed: ParsedRoster, config: &RosterConfig) -> PipelineResult<ParsedRoster> {
    if config.output.count_annotations {
        parsed.roster = annotate_counts(parsed.roster)?;
    }
    Ok(parsed)
}

fn finish(parsed: ParsedRoster, config: &RosterConfig) -> PipelineResult<RunSummary> {
    log_success(format!("Detected encoding: {}", parsed.encoding));
    log_success(format!("Separator: '{}'", format_delimiter(parsed.delimiter)));
    print_scan_stats(&parsed.stats);

    let parsed = post_process(parsed, config)?;
    if config.output.count_annotations {
        log_info("🔢 Activity labels annotated with participant counts");
    }

    let (tables, report) = write_outputs(&parsed.roster, &config.output)?;

    Ok(RunSummary {
        encoding: parsed.encoding,
        delimiter: parsed.delimiter,
        stats: parsed.stats,
        tables,
        report,
    })
}

/// Write every period table and, if configured, the report.
///
/// Each file is written and closed before the next one is opened.
pub fn write_outputs(
    roster: &Roster,
    output: &OutputConfig,
) -> PipelineResult<(Vec<PathBuf>, Option<PathBuf>)> {
    fs::create_dir_all(&output.dir).map_err(|source| WriteError::Io {
        path: output.dir.clone(),
        source,
    })?;

    log_info(format!("💾 Writing period tables to {}", output.dir.display()));
    let mut tables = Vec::new();
    for (period, group) in roster.iter() {
        let path = output.table_path(period);
        write_period_table(&path, group)?;
        log_success_indent(
            format!(
                "Period {}: {} activities, {} rows → {}",
                period,
                group.len(),
                group.row_count(),
                path.display()
            ),
            1,
        );
        tables.push(path);
    }

    let report = match output.summary_path() {
        Some(path) => {
            write_report(&path, roster)?;
            log_success(format!("Summary written to {}", path.display()));
            Some(path)
        }
        None => None,
    };

    Ok((tables, report))
}

/// Format delimiter for display
fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "TAB".to_string(),
        c => c.to_string(),
    }
}

/// Console lines summarising a scan. Skipped rows stay out of the console.
fn scan_stats_entries(stats: &ScanStats) -> Vec<LogEntry> {
    vec![
        LogEntry::success(format!("Read {} rows", stats.rows)),
        LogEntry::info(format!("{} period rows", stats.period_rows)).with_indent(1),
        LogEntry::info(format!("{} camper assignments", stats.assignments)).with_indent(1),
    ]
}

fn print_scan_stats(stats: &ScanStats) {
    for entry in scan_stats_entries(stats) {
        CONSOLE.log(entry);
    }
    log::debug!("{} rows skipped", stats.skipped_rows);
}
