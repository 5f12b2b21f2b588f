//! Plain-text summary of all periods.
//!
//! ```text
//! Period 1
//! ========
//! Horse Lovers - 1
//! Mary (Cabin 1)
//!
//! Extreme Combo - 1
//! John (Cabin 1)
//!
//!
//! Period 2
//! ...
//! ```
//!
//! Every period is followed by one blank line, so an empty period shows up
//! only as spacing.

use std::fs;
use std::path::Path;

use crate::error::{WriteError, WriteResult};
use crate::models::Roster;

/// Render the report for a roster.
pub fn render_report(roster: &Roster) -> String {
    let mut out = String::new();

    for (period, group) in roster.iter() {
        if !group.is_empty() {
            let title = format!("Period {}", period);
            let underline = "=".repeat(title.chars().count());
            push_line(&mut out, &title);
            push_line(&mut out, &underline);

            for activity in group.iter() {
                push_line(&mut out, &activity.label);
                for participant in &activity.participants {
                    push_line(&mut out, participant);
                }
                out.push('\n');
            }
        }
        out.push('\n');
    }

    out
}

/// Write the report to `path`.
pub fn write_report(path: &Path, roster: &Roster) -> WriteResult<()> {
    fs::write(path, render_report(roster)).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_layout() {
        let mut roster = Roster::new(["1", "2", "3"]);
        let p1 = roster.group_mut("1").unwrap();
        p1.push_participant("Horse Lovers - 1", "Mary");
        p1.push_participant("Extreme Combo - 1", "John");
        let p3 = roster.group_mut("3").unwrap();
        p3.push_participant("Canoe - 2", "Ann");
        p3.push_participant("Canoe - 2", "Bo");

        let expected = "\
Period 1
========
Horse Lovers - 1
Mary

Extreme Combo - 1
John



Period 3
========
Canoe - 2
Ann
Bo


";
        assert_eq!(render_report(&roster), expected);
    }

    #[test]
    fn test_empty_roster_is_only_spacing() {
        let roster = Roster::new(["1", "2", "3", "4"]);
        assert_eq!(render_report(&roster), "\n\n\n\n");
    }

    #[test]
    fn test_periods_in_numeric_order() {
        let mut roster = Roster::new(["10", "2"]);
        roster.group_mut("10").unwrap().push_participant("Archery", "Mary");
        roster.group_mut("2").unwrap().push_participant("Canoe", "John");

        let report = render_report(&roster);
        let p2 = report.find("Period 2").unwrap();
        let p10 = report.find("Period 10").unwrap();
        assert!(p2 < p10);
    }
}
