//! Participant-count annotation of activity labels.
//!
//! ```text
//! Horse Lovers     : [Mary, John]   →   Horse Lovers - 2 : [Mary, John]
//! Canoe - 12       : [Ann]          →   Canoe - 12       : [Ann]
//! ```
//!
//! Labels that already end in a count are kept as they are. Each period
//! group is rebuilt into a fresh [`ActivityGroup`], then swapped in.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{TransformError, TransformResult};
use crate::models::{ActivityGroup, Roster};

static COUNT_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" - \d+$").expect("count suffix pattern is valid"));

/// Whether a label already ends in `" - <n>"`.
pub fn has_count_annotation(label: &str) -> bool {
    COUNT_SUFFIX.is_match(label)
}

/// Label with its participant count appended.
pub fn annotated_label(label: &str, count: usize) -> String {
    format!("{} - {}", label, count)
}

/// Annotate one period's activities.
///
/// Fails when two activities end up under the same label, e.g. `Canoe`
/// with three campers next to an input label `Canoe - 3`.
pub fn annotate_group(period: &str, group: ActivityGroup) -> TransformResult<ActivityGroup> {
    let mut annotated = ActivityGroup::new();

    for activity in group {
        let label = if has_count_annotation(&activity.label) {
            activity.label
        } else {
            annotated_label(&activity.label, activity.participants.len())
        };

        if annotated.contains(&label) {
            return Err(TransformError::LabelCollision {
                period: period.to_string(),
                label,
            });
        }
        annotated.insert(label, activity.participants);
    }

    Ok(annotated)
}

/// Annotate every period of a roster.
pub fn annotate_counts(roster: Roster) -> TransformResult<Roster> {
    let periods = roster
        .into_periods()
        .into_iter()
        .map(|(period, group)| {
            let group = annotate_group(&period, group)?;
            Ok((period, group))
        })
        .collect::<TransformResult<Vec<_>>>()?;

    Ok(Roster::from_periods(periods))
}
