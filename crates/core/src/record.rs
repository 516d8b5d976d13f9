use chrono::{DateTime, Local};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Display form of the file name. Lossy for non-UTF-8 names.
    pub original_name: String,
    pub path: PathBuf,
    pub modified: SystemTime,
    pub modified_local: DateTime<Local>,
}

impl FileRecord {
    pub fn new(path: PathBuf, modified: SystemTime) -> Self {
        let original_name = path
            .file_name()
            .map(|v| v.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            original_name,
            modified_local: DateTime::from(modified),
            modified,
            path,
        }
    }

    pub fn file_name(&self) -> Option<&OsStr> {
        self.path.file_name()
    }

    /// Raw extension without the dot, bytes untouched.
    pub fn extension(&self) -> Option<&OsStr> {
        self.path.extension()
    }
}

/// True when both paths resolve to the same filesystem object. Missing paths
/// are never the same.
pub(crate) fn is_same_file(a: &Path, b: &Path) -> bool {
    let (Ok(meta_a), Ok(meta_b)) = (fs::metadata(a), fs::metadata(b)) else {
        return false;
    };
    same_identity(a, &meta_a, b, &meta_b)
}

#[cfg(unix)]
fn same_identity(_: &Path, meta_a: &fs::Metadata, _: &Path, meta_b: &fs::Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    meta_a.dev() == meta_b.dev() && meta_a.ino() == meta_b.ino()
}

#[cfg(not(unix))]
fn same_identity(a: &Path, _: &fs::Metadata, b: &Path, _: &fs::Metadata) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => {
            a.to_string_lossy().to_lowercase() == b.to_string_lossy().to_lowercase()
        }
        _ => false,
    }
}
