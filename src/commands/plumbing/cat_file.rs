use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

/// Projection of a stored object requested by `cat-file`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatFileMode {
    /// `-t`: the object's kind
    Kind,
    /// `-s`: the decimal payload length
    Size,
    /// `-p`: the raw payload bytes — tree payloads included, no pretty-printing
    Payload,
}

impl Repository {
    pub fn cat_file(&mut self, object_id: &str, mode: CatFileMode) -> anyhow::Result<()> {
        let object_id = ObjectId::try_parse(object_id.to_string())?;
        let (object_type, payload) = self.database().load(&object_id)?;

        match mode {
            CatFileMode::Kind => writeln!(self.writer(), "{object_type}")?,
            CatFileMode::Size => writeln!(self.writer(), "{}", payload.len())?,
            CatFileMode::Payload => self.writer().write_all(&payload)?,
        }

        Ok(())
    }
}
