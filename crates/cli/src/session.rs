use crate::prompt::Prompter;
use anyhow::Result;
use chrono::{DateTime, Local};
use clipsorter_core::{
    apply_plan, discover_files, generate_plan, AuditLog, DateMode, DiscoveryOptions,
    RenameSettings, Scheme,
};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    NoFiles,
    Cancelled,
    Completed {
        log_path: PathBuf,
        applied: usize,
        failed: usize,
    },
}

pub fn read_settings<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<RenameSettings> {
    let prefix = prompter.ask("Enter prefix for files (e.g., 'DayZ'): ")?;

    prompter.say("\nSelect naming scheme:")?;
    prompter.say("1. Numerical (1, 2, 3...)")?;
    prompter.say("2. Alphabetical (AA, AB, AC...)")?;
    prompter.say("3. Mixed alphanumeric (A0, A1... A9, B0...)")?;
    let scheme = Scheme::from_choice(&prompter.ask("Enter choice (1-3): ")?);

    let date_specific = prompter.confirm("\nUse date-specific naming? (y/n): ")?;
    let include_year =
        date_specific && prompter.confirm("Include year in date format? (y/n): ")?;

    Ok(RenameSettings::new(
        &prefix,
        scheme,
        DateMode::from_toggles(date_specific, include_year),
    ))
}

/// Runs one interactive pass over `dir`. `clock` is read once, after the
/// renames are confirmed, to stamp the rename log.
pub fn run_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    dir: &Path,
    options: &DiscoveryOptions,
    clock: impl FnOnce() -> DateTime<Local>,
) -> Result<SessionOutcome> {
    prompter.say("=== Video Clip Renaming Tool ===")?;
    let settings = read_settings(prompter)?;
    tracing::debug!(?settings, "settings read");

    prompter.say(&format!("\nUsing current directory: {}", dir.display()))?;
    let discovery = discover_files(dir, options)?;
    for skipped in &discovery.skipped {
        prompter.say(&format!("Error processing {}: {}", skipped.name, skipped.reason))?;
    }

    if discovery.records.is_empty() {
        prompter.say("No files found in directory!")?;
        return Ok(SessionOutcome::NoFiles);
    }

    let plan = generate_plan(dir, discovery.records, &settings)?;
    tracing::info!(
        planned = plan.stats.planned,
        groups = plan.stats.groups,
        unchanged = plan.stats.unchanged,
        "plan ready"
    );

    prompter.say("\n=== Renaming Preview ===")?;
    for line in plan.preview_lines() {
        prompter.say(&line)?;
    }

    let collisions = plan.collisions()?;
    if !collisions.is_empty() {
        prompter.say(&format!(
            "\nWarning: {} file(s) cannot be renamed and will be logged as failed:",
            collisions.len()
        ))?;
        for collision in &collisions {
            prompter.say(&format!("  {}", collision))?;
        }
    }

    if !prompter.confirm("\nProceed with renaming? (y/n): ")? {
        prompter.say("Cancelled.")?;
        return Ok(SessionOutcome::Cancelled);
    }

    let started = clock();
    let result = apply_plan(&plan);
    let log = AuditLog::new(&started, &settings, result.outcomes);
    let log_path = log.write_to(dir)?;

    prompter.say(&format!(
        "\nRenaming complete! Log saved to {}",
        log_path.display()
    ))?;
    if result.failed > 0 {
        prompter.say(&format!(
            "{} renamed, {} failed (see log)",
            result.applied, result.failed
        ))?;
    }

    Ok(SessionOutcome::Completed {
        log_path,
        applied: result.applied,
        failed: result.failed,
    })
}
