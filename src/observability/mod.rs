//! Observability subsystem
//!
//! Structured, synchronous JSON logging with deterministic output.
//! Observability is read-only: no side effects on execution, no
//! background threads.

mod logger;

pub use logger::{Logger, Severity};
