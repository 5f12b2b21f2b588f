//! Domain models for the roster pipeline.
//!
//! - [`Roster`] - one [`ActivityGroup`] per known period
//! - [`ActivityGroup`] - activity label → participants, in arrival order
//! - [`participant_label`] - display string for a camper, optionally cabin-tagged

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::HashMap;

// =============================================================================
// Participant labels
// =============================================================================

/// Build the display label for a camper.
///
/// With a cabin the label is `"Mary (Cabin 3)"`, otherwise just `"Mary"`.
pub fn participant_label(name: &str, cabin: Option<&str>) -> String {
    match cabin {
        Some(cabin) if !cabin.is_empty() => format!("{} ({})", name, cabin),
        _ => name.to_string(),
    }
}

// =============================================================================
// Activity Group
// =============================================================================

/// A single activity and the participants assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub label: String,
    pub participants: Vec<String>,
}

/// Activities of one period, keyed by label.
///
/// Keeps an explicit entry vector for ordering and a label index for
/// lookups. Key order is the order in which activities were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityGroup {
    entries: Vec<Activity>,
    index: HashMap<String, usize>,
}

impl ActivityGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a participant to an activity, creating the activity on first use.
    pub fn push_participant(&mut self, activity: &str, participant: impl Into<String>) {
        let participant = participant.into();
        match self.index.get(activity) {
            Some(&i) => self.entries[i].participants.push(participant),
            None => {
                self.index.insert(activity.to_string(), self.entries.len());
                self.entries.push(Activity {
                    label: activity.to_string(),
                    participants: vec![participant],
                });
            }
        }
    }

    /// Set the participant list of an activity.
    ///
    /// An existing label keeps its position and its list is replaced;
    /// a new label is appended. Returns the replaced list, if any.
    pub fn insert(&mut self, label: impl Into<String>, participants: Vec<String>) -> Option<Vec<String>> {
        let label = label.into();
        match self.index.get(&label) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].participants, participants)),
            None => {
                self.index.insert(label.clone(), self.entries.len());
                self.entries.push(Activity { label, participants });
                None
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.index
            .get(label)
            .map(|&i| self.entries[i].participants.as_slice())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Number of activities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Activities in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.entries.iter()
    }

    /// Activity labels in key order.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|a| a.label.as_str()).collect()
    }

    /// Rows needed to lay the group out as a table: the longest participant list.
    pub fn row_count(&self) -> usize {
        self.entries
            .iter()
            .map(|a| a.participants.len())
            .max()
            .unwrap_or(0)
    }

    /// Cell at `row` under the activity at `column`, or `""` past the end of its list.
    pub fn cell(&self, column: usize, row: usize) -> &str {
        self.entries
            .get(column)
            .and_then(|a| a.participants.get(row))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Total participant assignments across all activities.
    pub fn assignment_count(&self) -> usize {
        self.entries.iter().map(|a| a.participants.len()).sum()
    }
}

impl IntoIterator for ActivityGroup {
    type Item = Activity;
    type IntoIter = std::vec::IntoIter<Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for ActivityGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for activity in &self.entries {
            map.serialize_entry(&activity.label, &activity.participants)?;
        }
        map.end()
    }
}

// =============================================================================
// Roster
// =============================================================================

/// All periods of a run, each with its activity group.
///
/// Holds exactly one slot per known period, sorted ascending by numeric
/// value; ids that are not numbers sort after numeric ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    periods: Vec<(String, ActivityGroup)>,
}

impl Roster {
    /// Create an empty roster with one slot per distinct period id.
    pub fn new<I, S>(periods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ids: Vec<String> = Vec::new();
        for id in periods {
            let id = id.into();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Self::from_periods(ids.into_iter().map(|id| (id, ActivityGroup::new())).collect())
    }

    /// Build a roster from prepared period slots, restoring period order.
    pub fn from_periods(mut periods: Vec<(String, ActivityGroup)>) -> Self {
        periods.sort_by(|(a, _), (b, _)| period_sort_key(a).cmp(&period_sort_key(b)));
        Self { periods }
    }

    pub fn into_periods(self) -> Vec<(String, ActivityGroup)> {
        self.periods
    }

    pub fn is_known_period(&self, id: &str) -> bool {
        self.periods.iter().any(|(p, _)| p == id)
    }

    pub fn group(&self, period: &str) -> Option<&ActivityGroup> {
        self.periods.iter().find(|(p, _)| p == period).map(|(_, g)| g)
    }

    pub fn group_mut(&mut self, period: &str) -> Option<&mut ActivityGroup> {
        self.periods
            .iter_mut()
            .find(|(p, _)| p == period)
            .map(|(_, g)| g)
    }

    /// Periods in ascending order with their groups.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActivityGroup)> {
        self.periods.iter().map(|(p, g)| (p.as_str(), g))
    }

    pub fn period_ids(&self) -> Vec<&str> {
        self.periods.iter().map(|(p, _)| p.as_str()).collect()
    }

    pub fn total_assignments(&self) -> usize {
        self.periods.iter().map(|(_, g)| g.assignment_count()).sum()
    }
}

impl Serialize for Roster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.periods.len()))?;
        for (period, group) in &self.periods {
            map.serialize_entry(period, group)?;
        }
        map.end()
    }
}

fn period_sort_key(id: &str) -> (u64, &str) {
    (id.parse::<u64>().unwrap_or(u64::MAX), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_label_with_cabin() {
        assert_eq!(participant_label("Mary", Some("Cabin 3")), "Mary (Cabin 3)");
        assert_eq!(participant_label("Mary", None), "Mary");
        assert_eq!(participant_label("Mary", Some("")), "Mary");
    }

    #[test]
    fn test_group_preserves_arrival_order() {
        let mut group = ActivityGroup::new();
        group.push_participant("Horse Lovers", "Mary");
        group.push_participant("Extreme Combo", "John");
        group.push_participant("Horse Lovers", "Ann");

        assert_eq!(group.labels(), vec!["Horse Lovers", "Extreme Combo"]);
        assert_eq!(group.get("Horse Lovers").unwrap(), ["Mary", "Ann"]);
        assert_eq!(group.row_count(), 2);
        assert_eq!(group.assignment_count(), 3);
    }

    #[test]
    fn test_cell_pads_short_columns() {
        let mut group = ActivityGroup::new();
        group.push_participant("Archery", "Mary");
        group.push_participant("Archery", "John");
        group.push_participant("Canoe", "Ann");

        assert_eq!(group.cell(0, 1), "John");
        assert_eq!(group.cell(1, 1), "");
        assert_eq!(group.cell(5, 0), "");
    }

    #[test]
    fn test_insert_keeps_position() {
        let mut group = ActivityGroup::new();
        group.push_participant("A", "x");
        group.push_participant("B", "y");

        let old = group.insert("A", vec!["z".to_string()]);
        assert_eq!(old, Some(vec!["x".to_string()]));
        assert_eq!(group.labels(), vec!["A", "B"]);
        assert!(group.insert("C", vec![]).is_none());
        assert_eq!(group.len(), 3);
    }

    #[test]
    fn test_empty_group_has_no_rows() {
        let group = ActivityGroup::new();
        assert!(group.is_empty());
        assert_eq!(group.row_count(), 0);
    }

    #[test]
    fn test_roster_sorts_periods_numerically() {
        let roster = Roster::new(["10", "2", "1", "2", "evening"]);
        assert_eq!(roster.period_ids(), vec!["1", "2", "10", "evening"]);
        assert!(roster.is_known_period("10"));
        assert!(!roster.is_known_period("5"));
    }

    #[test]
    fn test_roster_serializes_in_order() {
        let mut roster = Roster::new(["1", "2"]);
        let group = roster.group_mut("1").unwrap();
        group.push_participant("Zip Line", "Mary");
        group.push_participant("Archery", "John");

        let json = serde_json::to_string(&roster).unwrap();
        assert_eq!(
            json,
            r#"{"1":{"Zip Line":["Mary"],"Archery":["John"]},"2":{}}"#
        );
    }
}
