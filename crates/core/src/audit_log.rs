use crate::apply::RenameOutcome;
use crate::settings::RenameSettings;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

#[derive(Debug, Clone)]
pub struct AuditLog {
    pub timestamp: DateTime<Local>,
    pub prefix: String,
    pub scheme_label: &'static str,
    pub date_label: &'static str,
    pub outcomes: Vec<RenameOutcome>,
}

pub fn log_file_name(now: &DateTime<Local>) -> String {
    format!("rename_log_{}.txt", now.format(TIMESTAMP_FORMAT))
}

impl AuditLog {
    pub fn new(
        now: &DateTime<Local>,
        settings: &RenameSettings,
        outcomes: Vec<RenameOutcome>,
    ) -> Self {
        Self {
            timestamp: *now,
            prefix: settings.prefix.clone(),
            scheme_label: settings.scheme.label(),
            date_label: settings.date_mode.label(),
            outcomes,
        }
    }

    pub fn file_name(&self) -> String {
        log_file_name(&self.timestamp)
    }

    pub fn render(&self) -> String {
        let mut lines = vec![
            "Rename Log:".to_string(),
            format!("Timestamp: {}", self.timestamp.format(TIMESTAMP_FORMAT)),
            format!("Prefix: {}", self.prefix),
            format!("Scheme: {}", self.scheme_label),
            format!("Date Format: {}", self.date_label),
            String::new(),
            "Operations:".to_string(),
        ];
        lines.extend(self.outcomes.iter().map(ToString::to_string));
        lines.join("\n")
    }

    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name());
        fs::write(&path, self.render())
            .with_context(|| format!("could not write rename log: {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            entries = self.outcomes.len(),
            "rename log written"
        );
        Ok(path)
    }
}
