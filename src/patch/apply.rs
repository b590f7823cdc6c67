//! Apply the three customisations to a set of targets.
//!
//! Each target is handled in isolation: an error on one is recorded in the
//! report and the remaining targets still run. Presence is re-derived from
//! file content on every run, so a config regenerated by an upstream update
//! is detected and re-patched without any external state.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::patch::backup::backup_file;
use crate::patch::config;
use crate::patch::error::PatchError;
use crate::patch::report::{Outcome, Report, TargetReport};
use crate::patch::script;
use crate::patch::style;
use crate::patch::targets::Targets;
use crate::utils::fs::{write_atomic, write_atomic_executable};

type TargetResult = Result<(Outcome, Option<PathBuf>), PatchError>;

/// Apply all three targets in fixed order: config, style, script.
pub fn apply(targets: &Targets) -> Report {
    let mut report = Report::default();
    report
        .targets
        .push(entry(&targets.config, apply_config(&targets.config)));
    report
        .targets
        .push(entry(&targets.style, apply_style(&targets.style)));
    report
        .targets
        .push(entry(&targets.script, apply_script(&targets.script)));
    report
}

/// Run the detection pass only, reporting what `apply` would do.
/// No file is written and no backup is created.
pub fn preview(targets: &Targets) -> Report {
    let mut report = Report::default();
    report
        .targets
        .push(entry(&targets.config, preview_config(&targets.config)));
    report
        .targets
        .push(entry(&targets.style, preview_style(&targets.style)));
    report
        .targets
        .push(entry(&targets.script, preview_script(&targets.script)));
    report
}

fn entry(path: &Path, result: TargetResult) -> TargetReport {
    match result {
        Ok((outcome, backup)) => TargetReport {
            file: path.to_path_buf(),
            result: Ok(outcome),
            backup,
        },
        Err(e) => TargetReport {
            file: path.to_path_buf(),
            result: Err(e),
            backup: None,
        },
    }
}

fn apply_config(path: &Path) -> TargetResult {
    let content = fs::read_to_string(path).map_err(|e| PatchError::from_read(path, e))?;
    let state = config::inspect(path, &content)?;
    if state.configured() {
        return Ok((Outcome::Unchanged, None));
    }

    let patched = config::insert(path, &content, state)?;
    let backup = backup_file(path).map_err(|e| PatchError::from_write(path, e))?;
    write_atomic(path, &patched).map_err(|e| PatchError::from_write(path, e))?;
    Ok((Outcome::Patched, Some(backup)))
}

fn apply_style(path: &Path) -> TargetResult {
    let content = fs::read_to_string(path).map_err(|e| PatchError::from_read(path, e))?;
    if style::has_rule(&content) {
        return Ok((Outcome::Unchanged, None));
    }

    let backup = backup_file(path).map_err(|e| PatchError::from_write(path, e))?;
    write_atomic(path, &style::append_rule(&content))
        .map_err(|e| PatchError::from_write(path, e))?;
    Ok((Outcome::Patched, Some(backup)))
}

fn apply_script(path: &Path) -> TargetResult {
    let desired = script::content();
    match fs::read(path) {
        Ok(existing) if script::is_current(&existing) => Ok((Outcome::Unchanged, None)),
        Ok(_) => {
            // Existing script with drifted content: back up, then rewrite
            let backup = backup_file(path).map_err(|e| PatchError::from_write(path, e))?;
            write_script(path, &desired)?;
            Ok((Outcome::Patched, Some(backup)))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| PatchError::from_write(path, e))?;
            }
            write_script(path, &desired)?;
            Ok((Outcome::Created, None))
        }
        Err(e) => Err(PatchError::from_read(path, e)),
    }
}

fn write_script(path: &Path, content: &str) -> Result<(), PatchError> {
    // Execute bits go on before the rename: the script is never visible
    // without them
    write_atomic_executable(path, content).map_err(|e| PatchError::from_write(path, e))
}

fn preview_config(path: &Path) -> TargetResult {
    let content = fs::read_to_string(path).map_err(|e| PatchError::from_read(path, e))?;
    let state = config::inspect(path, &content)?;
    if state.configured() {
        Ok((Outcome::Unchanged, None))
    } else {
        Ok((Outcome::Patched, None))
    }
}

fn preview_style(path: &Path) -> TargetResult {
    let content = fs::read_to_string(path).map_err(|e| PatchError::from_read(path, e))?;
    if style::has_rule(&content) {
        Ok((Outcome::Unchanged, None))
    } else {
        Ok((Outcome::Patched, None))
    }
}

fn preview_script(path: &Path) -> TargetResult {
    match fs::read(path) {
        Ok(existing) if script::is_current(&existing) => Ok((Outcome::Unchanged, None)),
        Ok(_) => Ok((Outcome::Patched, None)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok((Outcome::Created, None)),
        Err(e) => Err(PatchError::from_read(path, e)),
    }
}
