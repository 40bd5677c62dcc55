//! vit command implementations
//!
//! Commands are organized into two categories following Git's architecture:
//!
//! - `plumbing`: low-level object manipulation (hash-object, cat-file, write-tree)
//! - `porcelain`: user-facing workflow commands (init)
//!
//! Each command is an `impl Repository` block that writes its user-visible
//! output to the repository's injected writer and returns errors for the
//! binary to surface.

pub mod plumbing;
pub mod porcelain;
