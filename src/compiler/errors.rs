//! # Filter Compiler Errors
//!
//! Error types for filter-to-predicate translation. The compiler fails
//! fast: no partial predicate is ever returned.

use thiserror::Error;

use crate::path::PathError;

/// Result type for compilation
pub type CompileResult<T> = Result<T, CompileError>;

/// Filter translation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// A property path in the filter or sort could not be resolved
    #[error(transparent)]
    Path(#[from] PathError),

    /// A comparison operand is not an orderable value
    #[error("operand of kind '{value_kind}' is not comparable for operator '{op}' on property '{property}'")]
    IncomparableOperand {
        /// Dotted property path
        property: String,
        /// Operator name
        op: &'static str,
        /// JSON kind of the offending operand
        value_kind: &'static str,
    },

    /// An operand's kind does not match the property's declared type
    #[error("operand of kind '{value_kind}' does not match property '{property}' of type '{field_type}'")]
    OperandTypeMismatch {
        /// Dotted property path
        property: String,
        /// Declared field type
        field_type: &'static str,
        /// JSON kind of the offending operand
        value_kind: &'static str,
    },

    /// A pattern operator was applied to a non-string property
    #[error("pattern operator '{op}' requires a string property, but '{property}' is of type '{field_type}'")]
    PatternOnNonText {
        /// Dotted property path
        property: String,
        /// Operator name
        op: &'static str,
        /// Declared field type
        field_type: &'static str,
    },

    /// An `and`/`or` node had no children
    ///
    /// Composite nodes are n-ary but must be non-empty; an unrestricted
    /// query is expressed with an empty top-level filter list instead.
    #[error("composite filter '{kind}' has no children")]
    EmptyComposite {
        /// The composite kind (`and` or `or`)
        kind: &'static str,
    },
}
