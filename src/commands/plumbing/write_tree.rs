use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use anyhow::Context;
use std::io::Write;

impl Repository {
    /// Snapshot the workspace root's immediate files as a tree object
    ///
    /// Every file becomes a blob before the tree referencing it is written.
    /// An unreadable file aborts the whole build; no partial tree is stored.
    pub fn write_tree(&mut self) -> anyhow::Result<()> {
        let mut entries: Vec<(String, ObjectId)> = Vec::new();

        for file_name in self.workspace().list_regular_files()? {
            let content = self
                .workspace()
                .read_file(file_name.as_ref())
                .with_context(|| format!("Failed to read {file_name}"))?;

            let object_id = self.database().store(&Blob::new(content))?;
            entries.push((file_name, object_id));
        }

        let tree = Tree::build(entries);
        let tree_id = self.database().store(&tree)?;

        writeln!(self.writer(), "{tree_id}")?;

        Ok(())
    }
}
