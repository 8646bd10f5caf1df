//! Query windows
//!
//! An offset+limit pair describing one page of a filtered, sorted result
//! set.

use serde::{Deserialize, Serialize};

/// One page of a result set: `count` rows starting at `start_index`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryWindow {
    /// Zero-based index of the first row
    pub start_index: usize,
    /// Maximum number of rows to return
    pub count: usize,
}

impl QueryWindow {
    pub fn new(start_index: usize, count: usize) -> Self {
        Self { start_index, count }
    }

    /// Returns true for the zero-row size probe
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
