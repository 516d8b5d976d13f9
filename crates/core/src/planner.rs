use crate::grouping::{group_records, sort_records};
use crate::record::{is_same_file, FileRecord};
use crate::sequence::sequence_token;
use crate::settings::RenameSettings;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    pub record: FileRecord,
    pub group_key: String,
    /// 1-based position within the group.
    pub position: usize,
    /// Exact target file name, original extension bytes included.
    pub new_file_name: OsString,
    /// Display form of `new_file_name` for the preview and the log.
    pub new_name: String,
    pub target_path: PathBuf,
    pub changed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameStats {
    pub planned: usize,
    pub groups: usize,
    pub unchanged: usize,
}

#[derive(Debug, Clone)]
pub struct RenamePlan {
    pub directory: PathBuf,
    pub settings: RenameSettings,
    /// Global modification-time order.
    pub entries: Vec<PlannedRename>,
    pub stats: RenameStats,
}

/// A rename whose target name will already be taken when its turn comes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub original: String,
    pub new_name: String,
}

impl std::fmt::Display for Collision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {}: destination already exists",
            self.original, self.new_name
        )
    }
}

pub fn generate_plan(
    directory: &Path,
    mut records: Vec<FileRecord>,
    settings: &RenameSettings,
) -> Result<RenamePlan> {
    sort_records(&mut records);
    let groups = group_records(&records, settings.date_mode);

    let mut assigned: Vec<Option<(String, usize, OsString)>> = vec![None; records.len()];
    for group in &groups {
        for (offset, &index) in group.members.iter().enumerate() {
            let token = sequence_token(offset, settings.scheme)
                .with_context(|| format!("cannot number group {}", group.key))?;
            let stem = compose_stem(
                &settings.prefix,
                settings.date_mode.is_enabled().then_some(group.key.as_str()),
                &token,
            );
            let file_name = with_extension(stem, records[index].extension());
            assigned[index] = Some((group.key.clone(), offset + 1, file_name));
        }
    }

    let mut stats = RenameStats {
        groups: groups.len(),
        ..RenameStats::default()
    };
    let mut entries = Vec::with_capacity(records.len());
    for (record, slot) in records.into_iter().zip(assigned) {
        let (group_key, position, new_file_name) =
            slot.context("record was not assigned to any group")?;
        let new_name = new_file_name.to_string_lossy().to_string();
        let target_path = directory.join(&new_file_name);
        let changed = record.file_name() != Some(new_file_name.as_os_str());
        if !changed {
            stats.unchanged += 1;
        }
        stats.planned += 1;
        tracing::debug!(
            from = %record.original_name,
            to = %new_name,
            %group_key,
            position,
            "planned"
        );
        entries.push(PlannedRename {
            record,
            group_key,
            position,
            new_file_name,
            new_name,
            target_path,
            changed,
        });
    }

    Ok(RenamePlan {
        directory: directory.to_path_buf(),
        settings: settings.clone(),
        entries,
        stats,
    })
}

/// Name without the extension: `{prefix}-{key}-{token}` or `{prefix}-{token}`.
pub fn compose_stem(prefix: &str, group_key: Option<&str>, token: &str) -> String {
    match group_key {
        Some(key) => format!("{}-{}-{}", prefix, key, token),
        None => format!("{}-{}", prefix, token),
    }
}

fn with_extension(stem: String, extension: Option<&OsStr>) -> OsString {
    let mut name = OsString::from(stem);
    if let Some(ext) = extension {
        name.push(".");
        name.push(ext);
    }
    name
}

impl RenamePlan {
    pub fn preview_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| format!("{} -> {}", entry.record.original_name, entry.new_name))
            .collect()
    }

    /// Replays the plan against the current directory listing, in execution
    /// order, and returns every rename `apply_plan` would refuse. Names are not
    /// altered to avoid them.
    pub fn collisions(&self) -> Result<Vec<Collision>> {
        let mut occupied = existing_names(&self.directory)?;
        let mut collisions = Vec::new();

        for entry in self.entries.iter().filter(|e| e.changed) {
            if occupied.contains(&entry.new_file_name)
                && !is_same_file(&entry.record.path, &entry.target_path)
            {
                collisions.push(Collision {
                    original: entry.record.original_name.clone(),
                    new_name: entry.new_name.clone(),
                });
                continue;
            }
            if let Some(original) = entry.record.file_name() {
                occupied.remove(original);
            }
            occupied.insert(entry.new_file_name.clone());
        }

        Ok(collisions)
    }
}

fn existing_names(dir: &Path) -> Result<HashSet<OsString>> {
    let mut names = HashSet::new();
    for entry in
        fs::read_dir(dir).with_context(|| format!("could not read directory: {}", dir.display()))?
    {
        let entry = entry.with_context(|| format!("could not read entry in {}", dir.display()))?;
        names.insert(entry.file_name());
    }
    Ok(names)
}
