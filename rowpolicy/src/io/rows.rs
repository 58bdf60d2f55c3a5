//! Row snapshot files and render reports.
//!
//! A snapshot is a JSON array of rows: `[{"id": "r1", "state": "editing"}]`.
//! `state` may be omitted, which means the row is in its default state.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One row as handed over by the table owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RowSnapshot {
    pub id: String,
    /// Raw lifecycle label; kept verbatim so reports can echo unknown labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Load and validate a row snapshot file.
pub fn load_rows(path: &Path) -> Result<Vec<RowSnapshot>> {
    debug!(path = %path.display(), "loading rows");
    let contents =
        fs::read_to_string(path).with_context(|| format!("read rows {}", path.display()))?;
    let rows: Vec<RowSnapshot> = serde_json::from_str(&contents)
        .with_context(|| format!("parse rows {}", path.display()))?;
    validate_rows(&rows).with_context(|| format!("validate rows {}", path.display()))?;
    debug!(count = rows.len(), "rows loaded");
    Ok(rows)
}

/// Write rows to disk as pretty JSON.
#[cfg(any(test, feature = "test-support"))]
pub fn write_rows(path: &Path, rows: &[RowSnapshot]) -> Result<()> {
    validate_rows(rows)?;
    write_report(path, &rows)
}

/// Serialize `value` to pretty-printed JSON with trailing newline.
pub fn write_report<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    debug!(path = %path.display(), "writing report");
    let mut buf = serde_json::to_string_pretty(value).context("serialize json")?;
    buf.push('\n');
    super::write_atomic(path, &buf)
}

fn validate_rows(rows: &[RowSnapshot]) -> Result<()> {
    let mut seen = HashSet::new();
    for (index, row) in rows.iter().enumerate() {
        if row.id.trim().is_empty() {
            return Err(anyhow!("row {} has an empty id", index));
        }
        if !seen.insert(row.id.as_str()) {
            return Err(anyhow!("duplicate row id '{}'", row.id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::row;

    #[test]
    fn load_rows_accepts_missing_state() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("rows.json");
        fs::write(&path, r#"[{"id": "a", "state": "editing"}, {"id": "b"}]"#).expect("write");

        let rows = load_rows(&path).expect("load");
        assert_eq!(rows, vec![row("a", Some("editing")), row("b", None)]);
    }

    #[test]
    fn write_then_load_rows() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("nested").join("rows.json");
        let rows = vec![row("a", Some("deleting")), row("b", Some("archived"))];
        write_rows(&path, &rows).expect("write");
        assert_eq!(load_rows(&path).expect("load"), rows);
    }

    #[test]
    fn duplicate_ids_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("rows.json");
        fs::write(&path, r#"[{"id": "a"}, {"id": "a", "state": "updated"}]"#).expect("write");

        let err = load_rows(&path).expect_err("duplicate");
        assert!(format!("{:#}", err).contains("duplicate row id 'a'"));
    }

    #[test]
    fn empty_id_rejected() {
        let err = validate_rows(&[row("a", None), row("  ", None)]).expect_err("empty id");
        assert_eq!(err.to_string(), "row 1 has an empty id");
    }

    #[test]
    fn malformed_json_names_the_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("rows.json");
        fs::write(&path, "{not json").expect("write");

        let err = load_rows(&path).expect_err("parse");
        assert!(err.to_string().starts_with("parse rows"));
    }
}
