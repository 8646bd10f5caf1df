//! lazyquery - A filter-compiling, lazily paged query and batch mutation engine
//!
//! Compiles filter trees into executable predicates, serves deterministic
//! paged windows over a transactional entity store, and applies batched
//! add/modify/remove mutations with all-or-nothing semantics.

pub mod compiler;
pub mod filter;
pub mod observability;
pub mod path;
pub mod provider;
pub mod query;
pub mod schema;
pub mod store;
