//! vit object types and operations
//!
//! All content is stored as objects identified by SHA-1 hashes. Two types
//! exist in the current scope:
//!
//! - **Blob**: File content (raw bytes)
//! - **Tree**: Directory listing (names and object IDs, fixed file mode)
//!
//! All objects serialize to the object format `<type> <size>\0<content>`.

pub mod blob;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
