//! Entity type model for lazyquery
//!
//! Entity types describe the record shapes the engine queries and mutates.
//! The property path resolver walks these definitions; the batch mutator
//! uses the declared identity field as its is-new test.

mod types;

pub use types::{EntityType, FieldDef, FieldType};
