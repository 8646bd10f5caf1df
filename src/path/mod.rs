//! Property Path Resolver subsystem
//!
//! Dot-delimited property addressing shared by the filter compiler and the
//! sort clause builder. Resolution validates every segment against the
//! entity type's field definitions and fails fast on the first miss.

mod errors;
mod resolver;

pub use errors::{PathError, PathResult};
pub use resolver::{resolve, ResolvedPath};
