//! Query session subsystem
//!
//! Caller-facing surface over the entity provider: `QueryDefinition`
//! declares what to query and how, `EntityQuery` runs one query
//! lifecycle with size caching and batched mutation.

mod definition;
mod entity_query;

pub use definition::QueryDefinition;
pub use entity_query::EntityQuery;
