//! # Property Path Errors
//!
//! Error types for dotted property path resolution.

use thiserror::Error;

/// Result type for path resolution
pub type PathResult<T> = Result<T, PathError>;

/// Property path resolution errors
///
/// Resolution is left-to-right and fails fast on the first bad segment,
/// so every variant names the segment that could not be resolved and the
/// type it was resolved against.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Segment does not exist on the type reached by the previous segment
    #[error("unknown property segment '{segment}' on type '{resolved_against}'")]
    UnknownSegment {
        /// The offending path segment
        segment: String,
        /// The type the segment was resolved against
        resolved_against: String,
    },

    /// An intermediate segment landed on a non-object field
    #[error("property segment '{segment}' on type '{resolved_against}' is a {field_type}, not an object, and cannot be navigated into")]
    NotNavigable {
        /// The segment that was navigated into
        segment: String,
        /// The type the segment was resolved against
        resolved_against: String,
        /// The scalar type that blocked navigation
        field_type: &'static str,
    },

    /// The path string itself is malformed (empty, or an empty segment)
    #[error("malformed property path '{path}'")]
    Malformed {
        /// The full path string
        path: String,
    },
}
