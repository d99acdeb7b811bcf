// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for IFC data representation
//!
//! This module defines the fundamental types used throughout the IFC parsing system.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe entity identifier
///
/// Wraps the raw STEP instance number (e.g., #123 becomes EntityId(123))
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize, Default)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        EntityId(id)
    }
}

impl From<EntityId> for u32 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

/// IFC entity type name
///
/// STEP files spell type names in upper case (`IFCWALL`) while schemas and
/// requirement authors use the canonical spelling (`IfcWall`). The name is
/// stored upper-cased so both spellings compare equal; the canonical
/// spelling is recovered through [`crate::Schema::canonical_name`].
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Default)]
pub struct IfcType(String);

impl IfcType {
    /// Parse a type name string into an IfcType
    pub fn parse(s: &str) -> Self {
        IfcType(s.trim().to_ascii_uppercase())
    }

    /// Upper-cased type name as it appears in STEP files
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this type has the given name (case-insensitive)
    pub fn is(&self, name: &str) -> bool {
        self.0.eq_ignore_ascii_case(name.trim())
    }
}

impl FromStr for IfcType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for IfcType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decoded attribute value
///
/// Represents any value that can appear in an IFC entity's attribute list.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum AttributeValue {
    /// Null value ($)
    #[default]
    Null,
    /// Derived value (*)
    Derived,
    /// Entity reference (#123)
    EntityRef(EntityId),
    /// Boolean value (.T. / .F.)
    Bool(bool),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// String value
    String(String),
    /// Enumeration value (.VALUE.)
    Enum(String),
    /// List of values
    List(Vec<AttributeValue>),
    /// Typed value like IFCLABEL('text')
    TypedValue(String, Vec<AttributeValue>),
}

impl AttributeValue {
    /// Try to get as entity reference
    pub fn as_entity_ref(&self) -> Option<EntityId> {
        match self {
            AttributeValue::EntityRef(id) => Some(*id),
            _ => None,
        }
    }

    /// Try to get as string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            AttributeValue::TypedValue(_, args) if !args.is_empty() => args[0].as_string(),
            _ => None,
        }
    }

    /// Try to get as float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttributeValue::Float(f) => Some(*f),
            AttributeValue::Integer(i) => Some(*i as f64),
            AttributeValue::TypedValue(_, args) if !args.is_empty() => args[0].as_float(),
            _ => None,
        }
    }

    /// Try to get as enum string
    pub fn as_enum(&self) -> Option<&str> {
        match self {
            AttributeValue::Enum(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as list
    pub fn as_list(&self) -> Option<&[AttributeValue]> {
        match self {
            AttributeValue::List(list) => Some(list),
            _ => None,
        }
    }

    /// All entity references held directly or in a (flat) list
    pub fn entity_refs(&self) -> Vec<EntityId> {
        match self {
            AttributeValue::EntityRef(id) => vec![*id],
            AttributeValue::List(items) => items.iter().filter_map(|v| v.as_entity_ref()).collect(),
            _ => Vec::new(),
        }
    }

    /// Unwrap a typed value (`IFCLABEL('x')` -> `'x'`)
    pub fn wrapped(&self) -> &AttributeValue {
        match self {
            AttributeValue::TypedValue(_, args) if args.len() == 1 => args[0].wrapped(),
            other => other,
        }
    }

    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }

    /// Whether the value counts as present for "has a value" checks
    ///
    /// Null, derived, empty strings, zero, false and empty lists are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            AttributeValue::Null | AttributeValue::Derived => false,
            AttributeValue::Bool(b) => *b,
            AttributeValue::Integer(i) => *i != 0,
            AttributeValue::Float(f) => *f != 0.0,
            AttributeValue::String(s) => !s.is_empty(),
            AttributeValue::Enum(_) | AttributeValue::EntityRef(_) => true,
            AttributeValue::List(items) => !items.is_empty(),
            AttributeValue::TypedValue(_, _) => true,
        }
    }

    /// Plain-text form of the value, `None` for null and derived values
    ///
    /// Reals keep a trailing `.0` when integral so that `100.` reads `100.0`.
    /// Null list members read `null`.
    pub fn to_text(&self) -> Option<String> {
        match self {
            AttributeValue::Null | AttributeValue::Derived => None,
            AttributeValue::Bool(true) => Some("True".to_string()),
            AttributeValue::Bool(false) => Some("False".to_string()),
            AttributeValue::Integer(i) => Some(i.to_string()),
            AttributeValue::Float(f) => Some(format_real(*f)),
            AttributeValue::String(s) | AttributeValue::Enum(s) => Some(s.clone()),
            AttributeValue::EntityRef(id) => Some(id.to_string()),
            AttributeValue::TypedValue(_, args) => match args.as_slice() {
                [single] => single.to_text(),
                _ => Some(join_values(args)),
            },
            AttributeValue::List(items) => Some(join_values(items)),
        }
    }
}

fn join_values(values: &[AttributeValue]) -> String {
    let parts: Vec<String> = values
        .iter()
        .map(|v| v.to_text().unwrap_or_else(|| "null".to_string()))
        .collect();
    format!("({})", parts.join(", "))
}

fn format_real(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Decoded IFC entity
///
/// Represents a fully decoded IFC entity with its ID, type, and attribute values.
#[derive(Clone, Debug)]
pub struct DecodedEntity {
    /// Entity ID
    pub id: EntityId,
    /// Entity type
    pub ifc_type: IfcType,
    /// Attribute values in order
    pub attributes: Vec<AttributeValue>,
}

impl DecodedEntity {
    /// Get attribute at index
    pub fn get(&self, index: usize) -> Option<&AttributeValue> {
        self.attributes.get(index)
    }

    /// Get entity reference at index
    pub fn get_ref(&self, index: usize) -> Option<EntityId> {
        self.get(index).and_then(|v| v.as_entity_ref())
    }

    /// Get string at index
    pub fn get_string(&self, index: usize) -> Option<&str> {
        self.get(index).and_then(|v| v.as_string())
    }

    /// Get enum string at index
    pub fn get_enum(&self, index: usize) -> Option<&str> {
        self.get(index).and_then(|v| v.as_enum())
    }
}

impl fmt::Display for DecodedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.id, self.ifc_type)
    }
}

/// Model metadata extracted from IFC header
#[derive(Clone, Debug, Default)]
pub struct ModelMetadata {
    /// IFC schema identifier from FILE_SCHEMA (e.g., "IFC2X3", "IFC4")
    pub schema_version: String,
    /// Originating system (CAD application)
    pub originating_system: Option<String>,
    /// Preprocessor version
    pub preprocessor_version: Option<String>,
    /// File name from header
    pub file_name: Option<String>,
    /// File description (view definitions)
    pub file_description: Option<String>,
    /// Author
    pub author: Option<String>,
    /// Organization
    pub organization: Option<String>,
    /// Timestamp
    pub timestamp: Option<String>,
}
