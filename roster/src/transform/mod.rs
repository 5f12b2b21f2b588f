//! Transformation module.
//!
//! - Counts: participant-count annotation of activity labels
//! - Pipeline: parse, annotate and write in one run

pub mod counts;
pub mod pipeline;

pub use counts::{annotate_counts, has_count_annotation};
pub use pipeline::*;
