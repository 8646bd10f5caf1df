//! Filter Expression Compiler subsystem
//!
//! Recursive-descent translation of filter trees into executable
//! predicates over entity records.
//!
//! # Translation rules
//!
//! - `And`/`Or` with one child compile to the child directly
//! - `And`/`Or` with two or more children fold left into a binary tree
//! - `Contains` rewrites to case-insensitive `Like` with `%` on both sides
//! - Case-insensitive matching is symmetric: pattern lowered at compile
//!   time, field value lowered at match time
//! - `In` translates to a membership predicate
//!
//! The compiler fails fast with no partial predicate returned; the filter
//! enum's exhaustive match is the extension guard, so an unhandled filter
//! kind is a compile error in this crate rather than a runtime fallthrough.

mod compile;
mod errors;
mod like;
mod ordering;
mod predicate;

pub use compile::{compile, compile_filters};
pub use errors::{CompileError, CompileResult};
pub use like::like_match;
pub use ordering::{compare_values, is_orderable, kind_name};
pub use predicate::Predicate;
