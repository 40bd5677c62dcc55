//! High-level repository handle
//!
//! Wires the areas together with concrete paths and owns the output writer
//! commands print through. The metadata directory name is an explicit
//! configuration value here — nothing below `Repository` consults a global,
//! so two instances with different names never share state.

use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Conventional name of the repository metadata directory
pub const DEFAULT_VIT_DIR: &str = ".vit";

pub struct Repository {
    path: Box<Path>,
    vit_dir: String,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    /// Open a repository rooted at `path` with the conventional metadata
    /// directory name
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        Self::with_vit_dir(path, DEFAULT_VIT_DIR, writer)
    }

    /// Open a repository with an explicit metadata directory name
    pub fn with_vit_dir(
        path: &str,
        vit_dir: &str,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        if !Path::new(path).exists() {
            std::fs::create_dir_all(path)?;
        }
        let path = Path::new(path).canonicalize()?;

        let database = Database::new(path.join(vit_dir).join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path(), vit_dir.to_string());
        let refs = Refs::new(path.join(vit_dir).into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            vit_dir: vit_dir.to_string(),
            writer: RefCell::new(writer),
            database,
            workspace,
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn vit_dir(&self) -> &str {
        &self.vit_dir
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}
