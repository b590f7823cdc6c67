use std::fs;
use std::io;
use std::path::Path;

/// Write contents to a file atomically: write a temp sibling, then rename it
/// over the target. An interrupted run never leaves a half-written target.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    write_and_rename(path, contents, false)
}

/// Like `write_atomic`, but the execute bits are set on the temp file before
/// the rename, so the target is never visible without them.
pub fn write_atomic_executable(path: &Path, contents: &str) -> io::Result<()> {
    write_and_rename(path, contents, true)
}

fn write_and_rename(path: &Path, contents: &str, executable: bool) -> io::Result<()> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let result = fs::write(&tmp_path, contents)
        .and_then(|_| {
            if executable {
                set_executable(&tmp_path)
            } else {
                Ok(())
            }
        })
        .and_then(|_| fs::rename(&tmp_path, path));
    if result.is_err() {
        // Don't leave the temp file behind on a failed write or rename
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

/// Add the execute bits to a file's current mode.
#[cfg(unix)]
pub fn set_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(perms.mode() | 0o111);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
pub fn set_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}
