//! Dotted property path resolution
//!
//! A property path addresses a (possibly nested) field relative to an
//! entity type: `"address.city"` navigates the `address` object field and
//! lands on its `city` field. Every segment must exist on the type reached
//! by the previous segment; resolution fails fast on the first miss.

use serde_json::Value;

use crate::schema::{EntityType, FieldDef, FieldType};

use super::errors::{PathError, PathResult};

/// A resolved property path
///
/// Holds the validated segments and the field type the path terminates on.
/// Resolved paths are immutable and safe to share between the filter
/// compiler and the sort clause builder within one query cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPath {
    segments: Vec<String>,
    terminal_type: FieldType,
}

impl ResolvedPath {
    /// Returns the path segments in navigation order
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the field type the path terminates on
    pub fn terminal_type(&self) -> &FieldType {
        &self.terminal_type
    }

    /// Returns the dotted form of the path
    pub fn dotted(&self) -> String {
        self.segments.join(".")
    }

    /// Navigates a record along this path
    ///
    /// Returns `None` when any step is absent or null; the caller decides
    /// what absence means (comparisons treat it as no-match, null tests as
    /// a match).
    pub fn lookup<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        let mut current = record;
        for segment in &self.segments {
            match current.get(segment) {
                Some(Value::Null) | None => return None,
                Some(next) => current = next,
            }
        }
        Some(current)
    }
}

/// Resolves a dotted path string against an entity type
///
/// Splits on `.`; the first segment resolves against the root type, each
/// later segment against the object type the previous segment landed on.
pub fn resolve(entity_type: &EntityType, path: &str) -> PathResult<ResolvedPath> {
    if path.is_empty() {
        return Err(PathError::Malformed {
            path: path.to_string(),
        });
    }

    let mut segments = Vec::new();
    let mut fields = &entity_type.fields;
    let mut resolved_against = entity_type.name.clone();
    let mut terminal: Option<&FieldDef> = None;

    let parts: Vec<&str> = path.split('.').collect();
    let last = parts.len() - 1;

    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() {
            return Err(PathError::Malformed {
                path: path.to_string(),
            });
        }

        let def = fields
            .get(*part)
            .ok_or_else(|| PathError::UnknownSegment {
                segment: (*part).to_string(),
                resolved_against: resolved_against.clone(),
            })?;

        segments.push((*part).to_string());

        if i < last {
            // Intermediate segments must be navigable objects
            fields = def.field_type.nested_fields().ok_or_else(|| {
                PathError::NotNavigable {
                    segment: (*part).to_string(),
                    resolved_against: resolved_against.clone(),
                    field_type: def.field_type.type_name(),
                }
            })?;
            resolved_against = format!("{}.{}", resolved_against, part);
        } else {
            terminal = Some(def);
        }
    }

    // parts is non-empty, so the loop set the terminal definition
    let terminal_type = terminal
        .map(|def| def.field_type.clone())
        .ok_or_else(|| PathError::Malformed {
            path: path.to_string(),
        })?;

    Ok(ResolvedPath {
        segments,
        terminal_type,
    })
}
