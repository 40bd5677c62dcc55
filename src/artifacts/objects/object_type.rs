use crate::errors::{ObjectError, Result};
use std::io::BufRead;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Blob,
    Tree,
}

impl ObjectType {
    pub fn as_str(&self) -> &str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Tree => "tree",
        }
    }

    /// Parse the `<kind> <size>\0` header off the front of a decoded object
    ///
    /// Leaves the reader positioned at the first payload byte. The declared
    /// size is returned for validation against the actual payload length.
    pub fn parse_header(reader: &mut impl BufRead) -> Result<(ObjectType, usize)> {
        let mut kind_bytes = Vec::new();
        reader
            .read_until(b' ', &mut kind_bytes)
            .map_err(|source| ObjectError::MalformedHeader(source.to_string()))?;

        if kind_bytes.pop() != Some(b' ') {
            return Err(ObjectError::MalformedHeader(
                "missing space separator after object kind".to_string(),
            ));
        }

        let kind = std::str::from_utf8(&kind_bytes).map_err(|_| {
            ObjectError::MalformedHeader("object kind is not valid UTF-8".to_string())
        })?;
        let object_type = ObjectType::try_from(kind)?;

        let mut size_bytes = Vec::new();
        reader
            .read_until(b'\0', &mut size_bytes)
            .map_err(|source| ObjectError::MalformedHeader(source.to_string()))?;

        if size_bytes.pop() != Some(b'\0') {
            return Err(ObjectError::MalformedHeader(
                "missing NUL terminator after object size".to_string(),
            ));
        }

        let size = std::str::from_utf8(&size_bytes)
            .ok()
            .and_then(|size| size.parse::<usize>().ok())
            .ok_or_else(|| {
                ObjectError::MalformedHeader(format!(
                    "object size is not a decimal number: {}",
                    String::from_utf8_lossy(&size_bytes)
                ))
            })?;

        Ok((object_type, size))
    }
}

impl TryFrom<&str> for ObjectType {
    type Error = ObjectError;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            "blob" => Ok(ObjectType::Blob),
            "tree" => Ok(ObjectType::Tree),
            _ => Err(ObjectError::MalformedHeader(format!(
                "unknown object kind: {value}"
            ))),
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
