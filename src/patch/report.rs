//! Per-target outcomes of a run.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Value, json};

use crate::patch::error::PatchError;

/// Result of one target in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Customisation already present, nothing written
    Unchanged,
    /// Fragment inserted into an existing file
    Patched,
    /// File did not exist and was generated
    Created,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::Unchanged => "unchanged",
            Outcome::Patched => "patched",
            Outcome::Created => "created",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone)]
pub struct TargetReport {
    pub file: PathBuf,
    pub result: Result<Outcome, PatchError>,
    /// Backup written for this target, when a mutation occurred
    pub backup: Option<PathBuf>,
}

/// Ordered per-target results: config, style, script.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub targets: Vec<TargetReport>,
}

impl Report {
    pub fn has_failures(&self) -> bool {
        self.targets.iter().any(|t| t.result.is_err())
    }

    /// True when any target was (or would be) mutated.
    pub fn any_changed(&self) -> bool {
        self.targets
            .iter()
            .any(|t| matches!(t.result, Ok(Outcome::Patched | Outcome::Created)))
    }

    /// Machine-readable form for `--json` output.
    pub fn to_json(&self) -> Value {
        let entries: Vec<Value> = self
            .targets
            .iter()
            .map(|t| match &t.result {
                Ok(outcome) => json!({
                    "file": t.file.display().to_string(),
                    "status": outcome,
                    "backup": t.backup.as_ref().map(|b| b.display().to_string()),
                }),
                Err(e) => json!({
                    "file": t.file.display().to_string(),
                    "status": "failed",
                    "reason": e.to_string(),
                }),
            })
            .collect();
        Value::Array(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn report_with(results: Vec<Result<Outcome, PatchError>>) -> Report {
        Report {
            targets: results
                .into_iter()
                .map(|result| TargetReport {
                    file: PathBuf::from("file"),
                    result,
                    backup: None,
                })
                .collect(),
        }
    }

    #[test]
    fn all_unchanged_reports_no_changes() {
        let report = report_with(vec![Ok(Outcome::Unchanged), Ok(Outcome::Unchanged)]);
        assert!(!report.any_changed());
        assert!(!report.has_failures());
    }

    #[test]
    fn patched_counts_as_changed() {
        let report = report_with(vec![Ok(Outcome::Unchanged), Ok(Outcome::Patched)]);
        assert!(report.any_changed());
    }

    #[test]
    fn failure_is_detected() {
        let report = report_with(vec![
            Ok(Outcome::Patched),
            Err(PatchError::MissingTarget(PathBuf::from("style.css"))),
        ]);
        assert!(report.has_failures());
    }

    #[test]
    fn json_form_carries_status_and_reason() {
        let report = Report {
            targets: vec![
                TargetReport {
                    file: PathBuf::from("config.jsonc"),
                    result: Ok(Outcome::Patched),
                    backup: Some(PathBuf::from("config.jsonc.bak")),
                },
                TargetReport {
                    file: PathBuf::from("style.css"),
                    result: Err(PatchError::MissingTarget(Path::new("style.css").into())),
                    backup: None,
                },
            ],
        };

        let json = report.to_json();
        assert_eq!(json[0]["status"], "patched");
        assert_eq!(json[0]["backup"], "config.jsonc.bak");
        assert_eq!(json[1]["status"], "failed");
        assert!(json[1]["reason"].as_str().unwrap().contains("style.css"));
    }
}
