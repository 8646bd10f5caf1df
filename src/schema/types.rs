//! Entity type definitions
//!
//! An entity type names a record shape and its identity field. Field
//! definitions may nest, which is what gives dotted property paths
//! something to resolve against.
//!
//! Supported field types:
//! - string: UTF-8 string
//! - int: 64-bit signed integer
//! - bool: Boolean
//! - float: 64-bit floating point
//! - object: Nested object with field schema
//! - array: Homogeneous array with element type

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Supported field types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Int,
    /// Boolean
    Bool,
    /// 64-bit floating point
    Float,
    /// Nested object with its own field schema
    Object {
        /// Nested field definitions
        fields: HashMap<String, FieldDef>,
    },
    /// Homogeneous array with single element type
    Array {
        /// Element type (boxed to allow recursive types)
        #[serde(rename = "element_type")]
        element_type: Box<FieldType>,
    },
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Bool => "bool",
            FieldType::Float => "float",
            FieldType::Object { .. } => "object",
            FieldType::Array { .. } => "array",
        }
    }

    /// Returns the nested field definitions if this is an object type
    pub fn nested_fields(&self) -> Option<&HashMap<String, FieldDef>> {
        match self {
            FieldType::Object { fields } => Some(fields),
            _ => None,
        }
    }
}

/// A single field definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field data type
    #[serde(flatten)]
    pub field_type: FieldType,
    /// Whether field must be present
    pub required: bool,
}

impl FieldDef {
    /// Create a required string field
    pub fn required_string() -> Self {
        Self {
            field_type: FieldType::String,
            required: true,
        }
    }

    /// Create an optional string field
    pub fn optional_string() -> Self {
        Self {
            field_type: FieldType::String,
            required: false,
        }
    }

    /// Create a required int field
    pub fn required_int() -> Self {
        Self {
            field_type: FieldType::Int,
            required: true,
        }
    }

    /// Create an optional int field
    pub fn optional_int() -> Self {
        Self {
            field_type: FieldType::Int,
            required: false,
        }
    }

    /// Create a required bool field
    pub fn required_bool() -> Self {
        Self {
            field_type: FieldType::Bool,
            required: true,
        }
    }

    /// Create a required float field
    pub fn required_float() -> Self {
        Self {
            field_type: FieldType::Float,
            required: true,
        }
    }

    /// Create a required object field
    pub fn required_object(fields: HashMap<String, FieldDef>) -> Self {
        Self {
            field_type: FieldType::Object { fields },
            required: true,
        }
    }

    /// Create an optional object field
    pub fn optional_object(fields: HashMap<String, FieldDef>) -> Self {
        Self {
            field_type: FieldType::Object { fields },
            required: false,
        }
    }
}

/// An entity type: named record shape with an identity field
///
/// The identity field is how the engine decides whether a record has ever
/// been persisted. A record whose identity field is absent or null is new.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityType {
    /// Type name (used in error messages and as the store namespace)
    pub name: String,
    /// Field holding the store-assigned identity
    pub identity_field: String,
    /// Field definitions
    pub fields: HashMap<String, FieldDef>,
}

impl EntityType {
    /// Creates an entity type with the conventional `_id` identity field
    pub fn new(name: impl Into<String>, fields: HashMap<String, FieldDef>) -> Self {
        Self {
            name: name.into(),
            identity_field: "_id".to_string(),
            fields,
        }
    }

    /// Creates an entity type with an explicit identity field
    pub fn with_identity_field(
        name: impl Into<String>,
        identity_field: impl Into<String>,
        fields: HashMap<String, FieldDef>,
    ) -> Self {
        Self {
            name: name.into(),
            identity_field: identity_field.into(),
            fields,
        }
    }

    /// Returns the identity value of a record, if it has one
    pub fn identity_of<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        match record.get(&self.identity_field) {
            Some(Value::Null) | None => None,
            Some(v) => Some(v),
        }
    }

    /// Returns true if the record has never been assigned a store identity
    ///
    /// This is the capability the batch mutator uses to decide that a
    /// record created and deleted in the same edit session has nothing to
    /// delete.
    pub fn is_new_entity(&self, record: &Value) -> bool {
        self.identity_of(record).is_none()
    }
}
