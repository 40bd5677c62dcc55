//! Tree object
//!
//! Trees represent one directory snapshot level: a sorted list of
//! (name, object id) references to blobs. The current scope records
//! immediate regular files only — no subdirectory entries.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <name>\0<20-byte-sha1>`
//!
//! Entries are ordered by ascending byte comparison of their names, so two
//! trees holding the same (name, id) pairs serialize identically no matter
//! in which order the filesystem enumerated the files.

use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{ObjectError, Result};
use bytes::Bytes;
use std::collections::BTreeMap;
use std::io::BufRead;

/// File mode recorded for every tree entry
///
/// Only regular files are representable in this scope.
pub const REGULAR_FILE_MODE: &str = "100644";

/// Tree object representing a directory snapshot
///
/// Entries are keyed by file name in a `BTreeMap`, which makes the
/// serialization order a structural property rather than something callers
/// have to remember to enforce. Names are unique within one tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: BTreeMap<String, ObjectId>,
}

impl Tree {
    /// Build a tree from (name, object id) pairs
    ///
    /// Pairs may arrive in any order; the map sorts them by name.
    pub fn build(entries: impl IntoIterator<Item = (String, ObjectId)>) -> Self {
        Tree {
            entries: entries.into_iter().collect(),
        }
    }

    /// Iterate entries in serialization (name) order
    pub fn entries(&self) -> impl Iterator<Item = (&String, &ObjectId)> {
        self.entries.iter()
    }
}

impl Packable for Tree {
    fn serialize(&self) -> Result<Bytes> {
        let mut content_bytes = Vec::new();
        for (name, object_id) in &self.entries {
            content_bytes.extend_from_slice(format!("{REGULAR_FILE_MODE} {name}").as_bytes());
            content_bytes.push(0);
            object_id.write_raw_to(&mut content_bytes)?;
        }

        let header = format!("{} {}\0", self.object_type().as_str(), content_bytes.len());

        let mut tree_bytes = Vec::with_capacity(header.len() + content_bytes.len());
        tree_bytes.extend_from_slice(header.as_bytes());
        tree_bytes.extend_from_slice(&content_bytes);

        Ok(Bytes::from(tree_bytes))
    }
}

impl Unpackable for Tree {
    fn deserialize(mut reader: impl BufRead) -> Result<Self> {
        let mut entries = BTreeMap::new();

        // Reuse scratch buffers to reduce allocs
        let mut mode_bytes = Vec::new();
        let mut name_bytes = Vec::new();

        loop {
            mode_bytes.clear();
            let n = reader
                .read_until(b' ', &mut mode_bytes)
                .map_err(|source| ObjectError::CorruptObject(source.to_string()))?;
            if n == 0 {
                break; // clean EOF: no more entries
            }
            if mode_bytes.pop() != Some(b' ') {
                return Err(ObjectError::CorruptObject(
                    "unexpected EOF in entry mode".to_string(),
                ));
            }

            let mode = std::str::from_utf8(&mode_bytes)
                .map_err(|_| ObjectError::CorruptObject("entry mode is not ASCII".to_string()))?;
            if mode != REGULAR_FILE_MODE {
                return Err(ObjectError::CorruptObject(format!(
                    "unsupported entry mode: {mode}"
                )));
            }

            name_bytes.clear();
            let n = reader
                .read_until(b'\0', &mut name_bytes)
                .map_err(|source| ObjectError::CorruptObject(source.to_string()))?;
            if n == 0 || name_bytes.pop() != Some(b'\0') {
                return Err(ObjectError::CorruptObject(
                    "unexpected EOF in entry name".to_string(),
                ));
            }
            let name = std::str::from_utf8(&name_bytes)
                .map_err(|_| {
                    ObjectError::CorruptObject("entry name is not valid UTF-8".to_string())
                })?
                .to_owned();

            let object_id = ObjectId::read_raw_from(&mut reader)?;
            entries.insert(name, object_id);
        }

        Ok(Tree { entries })
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }
}
