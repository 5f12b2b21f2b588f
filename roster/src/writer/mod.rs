//! Output writers.
//!
//! - [`table`] - one CSV roster per period
//! - [`report`] - plain-text summary of every period

pub mod report;
pub mod table;

pub use report::{render_report, write_report};
pub use table::{write_period_table, write_table};
