//! Working directory file system operations

use crate::errors::{IoResultExt, ObjectError, Result};
use bytes::Bytes;
use std::path::Path;

/// Entry names never considered part of the workspace
const IGNORED_PATHS: [&str; 3] = [".git", ".", ".."];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
    vit_dir: String,
}

impl Workspace {
    pub fn new(path: Box<Path>, vit_dir: String) -> Self {
        Workspace { path, vit_dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// List the immediate regular files of the workspace root
    ///
    /// Returns file names relative to the root. Subdirectories are skipped
    /// entirely, not recursed into — one tree object describes a single
    /// directory level, a known scope limitation of the current format.
    /// The repository metadata directory and other non-regular entries are
    /// skipped the same way.
    pub fn list_regular_files(&self) -> Result<Vec<String>> {
        let mut files = Vec::new();

        for entry in std::fs::read_dir(&self.path).with_path(&*self.path)? {
            let entry = entry.with_path(&*self.path)?;

            // names that are not valid UTF-8 cannot be recorded as tree entries
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if self.is_ignored(name) {
                continue;
            }

            let file_type = entry.file_type().with_path(entry.path())?;
            if !file_type.is_file() {
                continue;
            }

            files.push(name.to_string());
        }

        Ok(files)
    }

    /// Read the full byte content of a regular file in the workspace
    pub fn read_file(&self, file_path: &Path) -> Result<Bytes> {
        let file_path = self.path.join(file_path);

        let metadata = std::fs::metadata(&file_path).with_path(&file_path)?;
        if !metadata.is_file() {
            return Err(ObjectError::UnsupportedEntry(file_path));
        }

        let content = std::fs::read(&file_path).with_path(&file_path)?;

        Ok(Bytes::from(content))
    }

    fn is_ignored(&self, name: &str) -> bool {
        name == self.vit_dir || IGNORED_PATHS.contains(&name)
    }
}
