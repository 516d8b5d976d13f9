use crate::record::{is_same_file, FileRecord};
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const DEFAULT_EXCLUDED_EXTENSIONS: &[&str] = &["py", "txt"];

#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// Extensions without the dot, compared case-insensitively.
    pub excluded_extensions: Vec<String>,
    pub excluded_paths: Vec<PathBuf>,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            excluded_extensions: DEFAULT_EXCLUDED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            excluded_paths: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryStats {
    pub scanned: usize,
    pub non_files: usize,
    pub excluded: usize,
    pub unreadable: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Discovery {
    pub records: Vec<FileRecord>,
    pub skipped: Vec<SkippedFile>,
    pub stats: DiscoveryStats,
}

pub fn discover_files(dir: &Path, options: &DiscoveryOptions) -> Result<Discovery> {
    fs::read_dir(dir).with_context(|| format!("could not read directory: {}", dir.display()))?;

    let mut stats = DiscoveryStats::default();
    let mut skipped = Vec::new();
    let mut records = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        stats.scanned += 1;
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().unwrap_or(dir).to_path_buf();
                skipped.push(skipped_file(&path, &io::Error::from(err)));
                continue;
            }
        };

        let path = entry.path();
        // Symlinks count as what they point to.
        let metadata = if entry.path_is_symlink() {
            fs::metadata(path)
        } else {
            entry.metadata().map_err(io::Error::from)
        };
        let metadata = match metadata {
            Ok(metadata) => metadata,
            Err(err) => {
                skipped.push(skipped_file(path, &err));
                continue;
            }
        };

        if !metadata.is_file() {
            stats.non_files += 1;
            continue;
        }
        if is_excluded(path, options) {
            tracing::debug!(path = %path.display(), "excluded");
            stats.excluded += 1;
            continue;
        }
        match metadata.modified() {
            Ok(modified) => records.push(FileRecord::new(path.to_path_buf(), modified)),
            Err(err) => skipped.push(skipped_file(path, &err)),
        }
    }
    stats.unreadable = skipped.len();

    tracing::info!(
        scanned = stats.scanned,
        eligible = records.len(),
        excluded = stats.excluded,
        unreadable = stats.unreadable,
        "discovery finished"
    );

    Ok(Discovery {
        records,
        skipped,
        stats,
    })
}

/// Reads modification times for `paths`. Files whose metadata cannot be read
/// are returned as skipped and do not stop the rest.
pub fn collect_records(paths: Vec<PathBuf>) -> (Vec<FileRecord>, Vec<SkippedFile>) {
    let mut records = Vec::with_capacity(paths.len());
    let mut skipped = Vec::new();

    for path in paths {
        match fs::metadata(&path).and_then(|meta| meta.modified()) {
            Ok(modified) => records.push(FileRecord::new(path, modified)),
            Err(err) => skipped.push(skipped_file(&path, &err)),
        }
    }

    (records, skipped)
}

fn skipped_file(path: &Path, err: &io::Error) -> SkippedFile {
    let name = path
        .file_name()
        .map(|v| v.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    tracing::warn!(%name, error = %err, "could not read file metadata");
    SkippedFile {
        name,
        reason: err.to_string(),
    }
}

fn is_excluded(path: &Path, options: &DiscoveryOptions) -> bool {
    let by_extension = path
        .extension()
        .map(|ext| {
            let ext = ext.to_string_lossy();
            options.excluded_extensions.iter().any(|excluded| {
                excluded
                    .trim_start_matches('.')
                    .eq_ignore_ascii_case(&ext)
            })
        })
        .unwrap_or(false);

    by_extension || options.excluded_paths.iter().any(|p| p == path || is_same_file(p, path))
}
