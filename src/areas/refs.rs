//! References
//!
//! The current scope stores no refs yet: `refs/` is created empty and HEAD
//! is a fixed symbolic pointer at the default branch. The on-disk layout is
//! kept so future ref storage lands in the reserved place.

use crate::errors::{IoResultExt, Result};
use derive_new::new;
use std::path::Path;

/// Branch the placeholder HEAD points at
const DEFAULT_BRANCH: &str = "main";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository metadata directory (typically `.vit`)
    path: Box<Path>,
}

impl Refs {
    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join("HEAD").into_boxed_path()
    }

    /// Write the placeholder HEAD pointer
    ///
    /// The file content is exactly `ref: refs/heads/main\n`; other tools
    /// reading the repository rely on those bytes.
    pub fn init_head(&self) -> Result<()> {
        let head_path = self.head_path();
        std::fs::write(&head_path, format!("ref: refs/heads/{DEFAULT_BRANCH}\n"))
            .with_path(&*head_path)?;

        Ok(())
    }
}
