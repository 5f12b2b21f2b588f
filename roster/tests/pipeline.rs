//! End-to-end runs over realistic exports.

use roster::{load_roster, run, PipelineError, RosterConfig, TransformError};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

const EXPORT: &str = "\
Cabin Bluejay,,,,
Period,Mary,John,,Ann
1,Horse Lovers,Extreme Combo,,Horse Lovers
2,Archery,Archery,,Canoe
3,Canoe,,,
,,,,
Cabin Cardinal,,,,
Period,Bo,Cy
1,Extreme Combo,Horse Lovers
2,Archery
Lunch,Pizza,Pizza
";

fn write_input(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("activities.csv");
    fs::write(&path, content).unwrap();
    path
}

fn config_for(dir: &Path) -> RosterConfig {
    let mut config = RosterConfig::default();
    config.output.dir = dir.to_path_buf();
    config
}

fn read_table(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .unwrap();
    let header = reader.headers().unwrap().iter().map(str::to_string).collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    (header, rows)
}

#[test]
fn test_tables_match_parsed_roster() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, EXPORT);
    let config = config_for(&dir.path().join("out"));

    let parsed = load_roster(&input, &config).unwrap();
    let summary = run(&input, &config).unwrap();
    assert_eq!(summary.tables.len(), 4);

    for (period, group) in parsed.roster.iter() {
        let path = config.output.table_path(period);
        if group.is_empty() {
            assert_eq!(fs::read(&path).unwrap().len(), 0, "period {}", period);
            continue;
        }

        let (header, rows) = read_table(&path);
        assert_eq!(header, group.labels());
        assert_eq!(rows.len(), group.row_count());

        for (column, activity) in group.iter().enumerate() {
            for (row, participant) in activity.participants.iter().enumerate() {
                assert_eq!(&rows[row][column], participant);
            }
            for row in &rows[activity.participants.len()..] {
                assert_eq!(row[column], "");
            }
        }
    }
}

#[test]
fn test_export_pivot() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, EXPORT);
    let parsed = load_roster(&input, &config_for(dir.path())).unwrap();
    let roster = &parsed.roster;

    let p1 = roster.group("1").unwrap();
    assert_eq!(p1.labels(), vec!["Horse Lovers", "Extreme Combo"]);
    assert_eq!(p1.get("Horse Lovers").unwrap(), ["Mary", "Ann", "Cy"]);
    assert_eq!(p1.get("Extreme Combo").unwrap(), ["John", "Bo"]);

    let p2 = roster.group("2").unwrap();
    assert_eq!(p2.get("Archery").unwrap(), ["Mary", "John", "Bo"]);
    assert_eq!(p2.get("Canoe").unwrap(), ["Ann"]);

    assert_eq!(roster.group("3").unwrap().get("Canoe").unwrap(), ["Mary"]);
    assert!(roster.group("4").unwrap().is_empty());

    assert_eq!(parsed.stats.skipped_rows, 1);
    assert_eq!(parsed.stats.assignments, 10);
}

#[test]
fn test_summary_variant() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, EXPORT);
    let mut config = config_for(dir.path());
    config.enable_summary(Some(PathBuf::from("summary.txt")));

    let summary = run(&input, &config).unwrap();
    assert_eq!(summary.report, Some(dir.path().join("summary.txt")));

    let (header, rows) = read_table(&config.output.table_path("2"));
    assert_eq!(header, vec!["Archery - 3", "Canoe - 1"]);
    assert_eq!(rows[0], vec!["Mary (Cabin Bluejay)", "Ann (Cabin Bluejay)"]);
    assert_eq!(rows[2], vec!["Bo (Cabin Cardinal)", ""]);

    let report = fs::read_to_string(dir.path().join("summary.txt")).unwrap();
    let expected_tail = "\
Period 3
========
Canoe - 1
Mary (Cabin Bluejay)


\n";
    assert!(report.ends_with(expected_tail), "report was:\n{}", report);
    assert!(report.starts_with("Period 1\n========\nHorse Lovers - 3\n"));
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, EXPORT);

    let mut first = config_for(&dir.path().join("a"));
    first.enable_summary(None);
    let mut second = config_for(&dir.path().join("b"));
    second.enable_summary(None);

    let a = run(&input, &first).unwrap();
    let b = run(&input, &second).unwrap();
    run(&input, &second).unwrap();

    for (left, right) in a.tables.iter().zip(&b.tables) {
        assert_eq!(fs::read(left).unwrap(), fs::read(right).unwrap());
    }
    assert_eq!(
        fs::read(a.report.unwrap()).unwrap(),
        fs::read(b.report.unwrap()).unwrap()
    );
}

#[test]
fn test_count_collision_aborts_run() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "Period,Mary,John\n1,Canoe - 1,Canoe\n");
    let mut config = config_for(dir.path());
    config.output.count_annotations = true;

    let err = run(&input, &config).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Transform(TransformError::LabelCollision { .. })
    ));
}

#[test]
fn test_custom_periods_and_pattern() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "Period,Mary\nA,Archery\nB,Canoe\n1,Ignored\n");
    let mut config = config_for(dir.path());
    config.input.periods = vec!["A".into(), "B".into()];
    config.output.file_pattern = "block-{period}.csv".into();

    let summary = run(&input, &config).unwrap();
    assert_eq!(
        summary.tables,
        vec![dir.path().join("block-A.csv"), dir.path().join("block-B.csv")]
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("block-B.csv")).unwrap(),
        "Canoe\nMary\n"
    );
}
