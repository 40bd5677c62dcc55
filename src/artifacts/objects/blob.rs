//! Blob object
//!
//! Blobs store file content. They contain only the raw file bytes, without
//! any metadata like filename or permissions (those live in trees).
//!
//! ## Format
//!
//! On disk: `blob <size>\0<content>`
//! In memory: just the content bytes

use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{ObjectError, Result};
use bytes::Bytes;
use derive_new::new;
use std::io::BufRead;

/// Blob object representing file content
///
/// Blobs are the fundamental unit of file storage. Each unique file content
/// is stored once, identified by its SHA-1 hash. Content is an opaque byte
/// sequence; nothing here assumes UTF-8.
#[derive(Debug, Clone, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> Result<Bytes> {
        let header = format!("{} {}\0", self.object_type().as_str(), self.content.len());

        let mut blob_bytes = Vec::with_capacity(header.len() + self.content.len());
        blob_bytes.extend_from_slice(header.as_bytes());
        blob_bytes.extend_from_slice(&self.content);

        Ok(Bytes::from(blob_bytes))
    }
}

impl Unpackable for Blob {
    fn deserialize(mut reader: impl BufRead) -> Result<Self> {
        let mut content = Vec::new();
        reader
            .read_to_end(&mut content)
            .map_err(|source| ObjectError::CorruptObject(source.to_string()))?;

        Ok(Self::new(Bytes::from(content)))
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }
}
