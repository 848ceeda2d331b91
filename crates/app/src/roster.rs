//! Loading the gradebook roster from CSV.

use anyhow::{bail, Context, Result};
use gradevox_match::StudentData;
use std::path::Path;
use tracing::info;

/// Load roster rows from a CSV file.
///
/// The header row must contain `first_name` and `last_name` columns
/// (case-insensitive); every cell of a row is retained as `row_data` so
/// the caller can write scores back into the right sheet row later.
pub fn load_roster(path: &Path) -> Result<Vec<StudentData>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening roster {}", path.display()))?;

    let headers = reader.headers().context("reading roster header row")?.clone();
    let first_idx = column(&headers, "first_name")?;
    let last_idx = column(&headers, "last_name")?;

    let mut students = Vec::new();
    for record in reader.records() {
        let record = record.context("reading roster row")?;
        let first = record.get(first_idx).unwrap_or("").trim();
        let last = record.get(last_idx).unwrap_or("").trim();
        if first.is_empty() && last.is_empty() {
            continue;
        }
        let row_data = record.iter().map(str::to_string).collect();
        students.push(StudentData::new(first, last, row_data));
    }

    info!(target: "roster", students = students.len(), "roster loaded");
    Ok(students)
}

fn column(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    match headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name)) {
        Some(idx) => Ok(idx),
        None => bail!("roster is missing a `{name}` column"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_students_and_keeps_row_data() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "first_name,last_name,section").unwrap();
        writeln!(file, "Juan,Capuras,7A").unwrap();
        writeln!(file, "John,Smith,7B").unwrap();
        writeln!(file, ",,").unwrap();

        let students = load_roster(file.path()).unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].full_name, "Juan Capuras");
        assert_eq!(students[0].row_data, vec!["Juan", "Capuras", "7A"]);
    }

    #[test]
    fn missing_name_column_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name,section").unwrap();
        writeln!(file, "Juan Capuras,7A").unwrap();

        let err = load_roster(file.path()).unwrap_err();
        assert!(err.to_string().contains("first_name"));
    }
}
