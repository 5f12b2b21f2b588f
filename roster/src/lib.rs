//! # Roster - camp activity export to per-period rosters
//!
//! Turns a spreadsheet export of campers and their activity choices into
//! one roster table per period, plus an optional plain-text summary.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌─────────────┐     ┌──────────────────┐
//! │ activities   │────▶│   Parser    │────▶│   Counts    │────▶│ period_N tables  │
//! │ .csv export  │     │ (row scan)  │     │ (optional)  │     │ + summary report │
//! └──────────────┘     └─────────────┘     └─────────────┘     └──────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use roster::{run, RosterConfig};
//!
//! let summary = run("activities.csv".as_ref(), &RosterConfig::default())?;
//! println!("{} assignments", summary.stats.assignments);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per layer
//! - [`models`] - Roster and activity groups
//! - [`parser`] - Export reading and pivot scan
//! - [`transform`] - Count annotation and the run pipeline
//! - [`writer`] - Period tables and the text report
//! - [`config`] - TOML configuration
//! - [`logs`] - Console progress log

// Core modules
pub mod error;
pub mod models;

// Configuration
pub mod config;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Output
pub mod writer;

// Console
pub mod logs;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConfigError, ParseError, PipelineError, TransformError, WriteError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{participant_label, Activity, ActivityGroup, Roster};

// =============================================================================
// Re-exports - Configuration
// =============================================================================

pub use config::{load_config, parse_config, InputConfig, OutputConfig, RosterConfig};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{
    classify_row,
    decode_content,
    detect_delimiter,
    detect_encoding,
    parse_roster_bytes,
    parse_roster_file,
    read_rows,
    scan_rows,
    ParsedRoster,
    RowKind,
    ScanStats,
};

// =============================================================================
// Re-exports - Transformation
// =============================================================================

pub use transform::counts::{annotate_counts, annotate_group, has_count_annotation};
pub use transform::pipeline::{load_roster, run, run_bytes, write_outputs, RunSummary};

// =============================================================================
// Re-exports - Writers
// =============================================================================

pub use writer::{render_report, write_period_table, write_report, write_table};
