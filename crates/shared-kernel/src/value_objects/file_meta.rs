// crates/shared-kernel/src/value_objects/file_meta.rs
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::{FileExtension, FileName, FilePath, FileSize};

/// Identifying metadata for one file, produced by whoever enumerates the
/// codebase. Analysis only reads `path` and `ext`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    /// Record id assigned by a persistence layer, if any.
    #[serde(default)]
    pub id: Option<u64>,
    pub path: FilePath,
    pub name: FileName,
    pub dir: FilePath,
    pub ext: FileExtension,
    pub size: FileSize,
    pub mtime: Option<DateTime<Local>>,
}

impl FileMeta {
    /// Builds metadata from a path alone; size and mtime stay unknown.
    pub fn from_path(path: impl Into<FilePath>) -> Self {
        let path = path.into();
        Self {
            id: None,
            name: path.file_name().unwrap_or_else(|| FileName::from("")),
            dir: path.parent_dir().unwrap_or_else(|| FilePath::from(".")),
            ext: path.extension(),
            size: FileSize::default(),
            mtime: None,
            path,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}
