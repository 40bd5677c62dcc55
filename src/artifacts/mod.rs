//! vit data structures
//!
//! This module contains the core object model:
//!
//! - `objects`: object types (blob, tree) and their identifiers

pub mod objects;
