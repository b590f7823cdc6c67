//! Pre-mutation backups.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Copy `path` to a `.bak` sibling and return the backup path.
///
/// An existing backup from an earlier run is overwritten: the backup always
/// holds the immediately prior contents, which is what recovery from the
/// last upstream reset needs.
pub fn backup_file(path: &Path) -> io::Result<PathBuf> {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bak");
    let backup_path = PathBuf::from(name);
    fs::copy(path, &backup_path)?;
    Ok(backup_path)
}
