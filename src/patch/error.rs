use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for patch operations. Every variant carries the target path so
/// per-file failures can be reported without extra context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// A target that must pre-exist (config.jsonc, style.css) is absent
    MissingTarget(PathBuf),
    /// The target exists but lacks the expected insertion anchor
    MalformedTarget { file: PathBuf, reason: String },
    /// Filesystem permission error on read, backup, or write
    PermissionDenied(PathBuf),
    /// Backup, write, or rename failed
    WriteFailed { file: PathBuf, reason: String },
    /// Any other I/O error
    Io { file: PathBuf, reason: String },
}

impl PatchError {
    /// Classify an I/O error raised while reading `file`.
    pub fn from_read(file: &Path, err: io::Error) -> PatchError {
        match err.kind() {
            io::ErrorKind::NotFound => PatchError::MissingTarget(file.to_path_buf()),
            io::ErrorKind::PermissionDenied => PatchError::PermissionDenied(file.to_path_buf()),
            _ => PatchError::Io {
                file: file.to_path_buf(),
                reason: err.to_string(),
            },
        }
    }

    /// Classify an I/O error raised while backing up or writing `file`.
    pub fn from_write(file: &Path, err: io::Error) -> PatchError {
        match err.kind() {
            io::ErrorKind::PermissionDenied => PatchError::PermissionDenied(file.to_path_buf()),
            _ => PatchError::WriteFailed {
                file: file.to_path_buf(),
                reason: err.to_string(),
            },
        }
    }

    pub fn file(&self) -> &Path {
        match self {
            PatchError::MissingTarget(file) => file,
            PatchError::MalformedTarget { file, .. } => file,
            PatchError::PermissionDenied(file) => file,
            PatchError::WriteFailed { file, .. } => file,
            PatchError::Io { file, .. } => file,
        }
    }
}

impl fmt::Display for PatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchError::MissingTarget(file) => {
                write!(f, "required file not found: '{}'", file.display())
            }
            PatchError::MalformedTarget { file, reason } => {
                write!(f, "'{}' is malformed: {}", file.display(), reason)
            }
            PatchError::PermissionDenied(file) => {
                write!(f, "permission denied: '{}'", file.display())
            }
            PatchError::WriteFailed { file, reason } => {
                write!(f, "write failed for '{}': {}", file.display(), reason)
            }
            PatchError::Io { file, reason } => {
                write!(f, "I/O error for '{}': {}", file.display(), reason)
            }
        }
    }
}

impl std::error::Error for PatchError {}
