//! Per-period roster tables.
//!
//! Activities become columns and participants fill the rows beneath them:
//!
//! ```text
//! Horse Lovers,Extreme Combo
//! Mary,John
//! Ann,
//! ```

use csv::Writer;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::{WriteError, WriteResult};
use crate::models::ActivityGroup;

/// Write a group as CSV.
///
/// The header is the activity labels in key order. There are exactly
/// [`ActivityGroup::row_count`] body rows; shorter columns are padded with
/// empty cells. An empty group writes nothing.
pub fn write_table<W: io::Write>(writer: W, group: &ActivityGroup) -> WriteResult<()> {
    if group.is_empty() {
        return Ok(());
    }

    let mut wtr = Writer::from_writer(writer);
    write_rows(&mut wtr, group)?;
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Create (or truncate) `path` and write the group's table into it.
pub fn write_period_table(path: &Path, group: &ActivityGroup) -> WriteResult<()> {
    let io_error = |source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    if group.is_empty() {
        return Ok(());
    }

    let mut wtr = Writer::from_writer(file);
    write_rows(&mut wtr, group)?;
    wtr.flush().map_err(io_error)
}

fn write_rows<W: io::Write>(wtr: &mut Writer<W>, group: &ActivityGroup) -> csv::Result<()> {
    wtr.write_record(group.labels())?;
    for row in 0..group.row_count() {
        wtr.write_record((0..group.len()).map(|column| group.cell(column, row)))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(group: &ActivityGroup) -> String {
        let mut buf = Vec::new();
        write_table(&mut buf, group).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_columns_and_padding() {
        let mut group = ActivityGroup::new();
        group.push_participant("Horse Lovers", "Mary");
        group.push_participant("Extreme Combo", "John");
        group.push_participant("Horse Lovers", "Ann");

        assert_eq!(render(&group), "Horse Lovers,Extreme Combo\nMary,John\nAnn,\n");
    }

    #[test]
    fn test_quotes_labels_with_commas() {
        let mut group = ActivityGroup::new();
        group.push_participant("Arts, Crafts", "Mary (Cabin 1)");

        assert_eq!(render(&group), "\"Arts, Crafts\"\nMary (Cabin 1)\n");
    }

    #[test]
    fn test_empty_group_writes_nothing() {
        assert_eq!(render(&ActivityGroup::new()), "");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_flush_failure_keeps_the_path() {
        let path = Path::new("/dev/full");
        if !path.exists() {
            return;
        }
        let mut group = ActivityGroup::new();
        group.push_participant("Archery", "Mary");

        match write_period_table(path, &group).unwrap_err() {
            WriteError::Io { path, .. } => assert_eq!(path, Path::new("/dev/full")),
            other => panic!("expected an io error, got {:?}", other),
        }
    }
}
