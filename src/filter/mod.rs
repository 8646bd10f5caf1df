//! Filter expression and sort specification ASTs
//!
//! Immutable trees constructed by the caller per query, consumed by one
//! compile+execute cycle. All translation semantics live in the compiler.

mod ast;
mod sort;

pub use ast::{CompareOp, Filter};
pub use sort::{SortDirection, SortKey, SortSpec};
