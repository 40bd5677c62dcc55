use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use anyhow::Context;
use std::io::Write;

impl Repository {
    pub fn hash_object(&mut self, object_path: &str) -> anyhow::Result<()> {
        let object_data = self
            .workspace()
            .read_file(object_path.as_ref())
            .with_context(|| format!("Failed to read {object_path}"))?;
        let blob = Blob::new(object_data);

        let object_id = self.database().store(&blob)?;

        writeln!(self.writer(), "{object_id}")?;

        Ok(())
    }
}
