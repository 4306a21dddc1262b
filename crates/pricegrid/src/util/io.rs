//! I/O utility functions

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Sibling path used while writing `path`, e.g. `grid.csv` -> `grid.csv.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("export"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write content to a file using the write-then-rename pattern.
///
/// A reader never observes a partially written export: the content lands in
/// a temporary sibling first and is renamed over the target.
///
/// # Example
/// ```ignore
/// atomic_write(Path::new("pricing-grid-export.csv"), &csv)?;
/// ```
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = temp_path_for(path);
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path).inspect_err(|_| {
        let _ = fs::remove_file(&temp_path);
    })
}
