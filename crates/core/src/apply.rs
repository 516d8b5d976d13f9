use crate::planner::{PlannedRename, RenamePlan};
use crate::record::is_same_file;
use std::fmt;
use std::fs;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Success { from: String, to: String },
    Failed { from: String, reason: String },
}

impl RenameOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RenameOutcome::Success { .. })
    }
}

impl fmt::Display for RenameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameOutcome::Success { from, to } => write!(f, "Success: {} -> {}", from, to),
            RenameOutcome::Failed { from, reason } => write!(f, "Failed: {} - {}", from, reason),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyResult {
    pub outcomes: Vec<RenameOutcome>,
    pub applied: usize,
    pub failed: usize,
    pub unchanged: usize,
}

/// Renames every entry in plan order. A failing entry is recorded and the
/// rest still run; nothing is rolled back.
pub fn apply_plan(plan: &RenamePlan) -> ApplyResult {
    let mut result = ApplyResult::default();

    for entry in &plan.entries {
        let outcome = match rename_entry(entry) {
            Ok(()) => {
                if entry.changed {
                    result.applied += 1;
                } else {
                    result.unchanged += 1;
                }
                RenameOutcome::Success {
                    from: entry.record.original_name.clone(),
                    to: entry.new_name.clone(),
                }
            }
            Err(err) => {
                tracing::warn!(
                    from = %entry.record.path.display(),
                    to = %entry.target_path.display(),
                    error = %err,
                    "rename failed"
                );
                result.failed += 1;
                RenameOutcome::Failed {
                    from: entry.record.original_name.clone(),
                    reason: err.to_string(),
                }
            }
        };
        result.outcomes.push(outcome);
    }

    tracing::info!(
        applied = result.applied,
        failed = result.failed,
        unchanged = result.unchanged,
        "rename pass finished"
    );
    result
}

fn rename_entry(entry: &PlannedRename) -> io::Result<()> {
    if !entry.changed {
        return Ok(());
    }
    // fs::rename replaces an existing file on Unix; never let it. A target that
    // resolves to the source itself (case-only rename on a case-insensitive
    // filesystem) is not another file.
    if fs::symlink_metadata(&entry.target_path).is_ok()
        && !is_same_file(&entry.record.path, &entry.target_path)
    {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "destination already exists",
        ));
    }
    fs::rename(&entry.record.path, &entry.target_path)
}
