//! Test-only helpers for constructing row snapshots.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::io::rows::{RowSnapshot, write_rows};

/// Create a row with an optional raw state label.
pub fn row(id: &str, state: Option<&str>) -> RowSnapshot {
    RowSnapshot {
        id: id.to_string(),
        state: state.map(str::to_string),
    }
}

/// One row per lifecycle state plus an unrecognized label, ids `r1`..`r6`.
///
/// `r1` carries no state so it exercises the default.
pub fn sample_rows() -> Vec<RowSnapshot> {
    vec![
        row("r1", None),
        row("r2", Some("editing")),
        row("r3", Some("changed")),
        row("r4", Some("deleting")),
        row("r5", Some("updated")),
        row("r6", Some("archived")),
    ]
}

/// Write `rows` to `<dir>/rows.json` and return the path.
pub fn write_rows_file(dir: &Path, rows: &[RowSnapshot]) -> Result<PathBuf> {
    let path = dir.join("rows.json");
    write_rows(&path, rows)?;
    Ok(path)
}

/// Temporary working directory for CLI tests.
pub struct TestDir {
    temp: tempfile::TempDir,
}

impl TestDir {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write `contents` to `rowpolicy.toml` in the directory.
    pub fn write_config(&self, contents: &str) -> Result<PathBuf> {
        let path = self.path().join(crate::io::config::CONFIG_FILE);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}
