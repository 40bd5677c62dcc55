//! Content-addressed object storage for the vit version-control tool
//!
//! Objects (blobs and trees) are serialized as `<kind> <size>\0<payload>`,
//! addressed by the SHA-1 digest of that buffer, and stored zlib-compressed
//! under `objects/<first-2-chars>/<remaining-38-chars>`.
//!
//! The crate is organized as follows:
//!
//! - `areas`: the on-disk areas of a repository (object database, refs, workspace)
//! - `artifacts`: the object model (blobs, trees, object ids)
//! - `commands`: the operations exposed by the CLI, implemented on `Repository`
//! - `errors`: typed errors returned below the command boundary

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
