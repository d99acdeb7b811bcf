// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity hierarchy and attribute layout for the supported IFC schemas
//!
//! STEP instances are positional: `#5=IFCWALL('guid',#2,'W-01',$,...)`. The
//! schema tables give each position its attribute name, link every entity to
//! its supertype and declare the inverse relationships that the resolver
//! computes at load time. The product, element, spatial and representation
//! item hierarchies are tabulated; an untabulated type is an instance of
//! itself only, and reads the `IfcRoot` attributes by position when its first
//! attribute is a GlobalId.

use crate::{AttributeValue, DecodedEntity, IfcType};
use std::collections::HashMap;
use tables::*;

mod tables;

/// Explicit (stored) attributes of one entity type
#[derive(Debug)]
pub struct EntityDef {
    /// Canonical type name, e.g. `IfcWall`
    pub name: &'static str,
    /// Direct supertype
    pub supertype: Option<&'static str>,
    /// Attributes introduced by this type, in STEP order
    pub attributes: &'static [&'static str],
}

/// An inverse relationship computed from a forward reference
///
/// `HasSubContexts` on a context is every sub-context whose `ParentContext`
/// points at it.
#[derive(Debug)]
pub struct InverseDef {
    /// Types that expose the inverse
    pub owners: &'static [&'static str],
    /// Inverse attribute name
    pub name: &'static str,
    /// Type holding the forward reference (subtypes included)
    pub source: &'static str,
    /// Forward attribute on `source` (single reference or list)
    pub attribute: &'static str,
}

/// Schema families with distinct attribute layouts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaFamily {
    /// IFC2X3 (TC1)
    Ifc2x3,
    /// IFC4 and its addenda IFC4X1 and IFC4X2
    Ifc4,
    /// IFC4X3, where `IfcBuildingElement` is named `IfcBuiltElement`
    Ifc4x3,
}

impl SchemaFamily {
    /// Select the family for a FILE_SCHEMA identifier
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        let upper = identifier.trim().to_ascii_uppercase();
        if upper.starts_with("IFC2X3") {
            Some(SchemaFamily::Ifc2x3)
        } else if upper.starts_with("IFC4X3") {
            Some(SchemaFamily::Ifc4x3)
        } else if upper.starts_with("IFC4") {
            Some(SchemaFamily::Ifc4)
        } else {
            None
        }
    }

    fn layers(self) -> Vec<&'static [EntityDef]> {
        let mut layers = vec![COMMON];
        match self {
            SchemaFamily::Ifc2x3 => layers.push(IFC2X3),
            SchemaFamily::Ifc4 | SchemaFamily::Ifc4x3 => {
                layers.push(IFC4_CORE);
                layers.extend(IFC4_PREDEFINED.iter().copied());
            }
        }
        if self == SchemaFamily::Ifc4x3 {
            layers.push(IFC4X3_CORE);
            layers.extend(IFC4X3_PREDEFINED.iter().copied());
        }
        layers
    }

    fn renames(self) -> &'static [(&'static str, &'static str)] {
        match self {
            SchemaFamily::Ifc4x3 => IFC4X3_RENAMES,
            _ => &[],
        }
    }

    fn inverses(self) -> &'static [InverseDef] {
        match self {
            SchemaFamily::Ifc2x3 => IFC2X3_INVERSES,
            SchemaFamily::Ifc4 | SchemaFamily::Ifc4x3 => IFC4_INVERSES,
        }
    }
}

static NULL: AttributeValue = AttributeValue::Null;

/// Attributes read from an untabulated type that carries a GlobalId
static ROOT_ATTRIBUTES: &[&str] = &["GlobalId", "OwnerHistory", "Name", "Description"];

/// Whether `value` has the shape of a compressed IFC GlobalId
fn is_global_id(value: &str) -> bool {
    value.len() == 22
        && value.starts_with(['0', '1', '2', '3'])
        && value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'$')
}

struct EntityEntry {
    name: &'static str,
    supertype: Option<usize>,
    attributes: Vec<&'static str>,
}

/// Attribute layout and inheritance for one schema family
pub struct Schema {
    identifier: String,
    family: SchemaFamily,
    entries: Vec<EntityEntry>,
    by_name: HashMap<String, usize>,
    inverses: &'static [InverseDef],
}

impl Schema {
    /// Build the schema for a FILE_SCHEMA identifier
    ///
    /// Returns `None` for identifiers outside the IFC2X3 / IFC4 / IFC4X3 families.
    pub fn for_identifier(identifier: &str) -> Option<Self> {
        let family = SchemaFamily::from_identifier(identifier)?;
        let renames = family.renames();
        let rename = |name: &'static str| {
            renames
                .iter()
                .find(|(from, _)| *from == name)
                .map_or(name, |(_, to)| *to)
        };

        let mut defs: Vec<(&'static str, &'static EntityDef)> = Vec::new();
        let mut by_name: HashMap<String, usize> = HashMap::new();
        for def in family.layers().into_iter().flatten() {
            let name = rename(def.name);
            let key = name.to_ascii_uppercase();
            match by_name.get(&key) {
                Some(&index) => defs[index] = (name, def),
                None => {
                    by_name.insert(key, defs.len());
                    defs.push((name, def));
                }
            }
        }

        let supertypes: Vec<Option<usize>> = defs
            .iter()
            .map(|(_, def)| {
                def.supertype
                    .and_then(|s| by_name.get(&rename(s).to_ascii_uppercase()).copied())
            })
            .collect();

        let entries = defs
            .iter()
            .enumerate()
            .map(|(index, (name, _))| {
                let mut chain = vec![index];
                let mut current = supertypes[index];
                while let Some(parent) = current {
                    if chain.contains(&parent) {
                        break;
                    }
                    chain.push(parent);
                    current = supertypes[parent];
                }
                let attributes = chain
                    .iter()
                    .rev()
                    .flat_map(|&i| defs[i].1.attributes.iter().copied())
                    .collect();
                EntityEntry {
                    name,
                    supertype: supertypes[index],
                    attributes,
                }
            })
            .collect();

        Some(Self {
            identifier: identifier.trim().to_ascii_uppercase(),
            family,
            entries,
            by_name,
            inverses: family.inverses(),
        })
    }

    /// Keep these tables but report `identifier` as the file's schema
    ///
    /// Used when a file with an unsupported FILE_SCHEMA is read with the
    /// tables of a fallback schema.
    pub fn with_identifier(mut self, identifier: &str) -> Self {
        self.identifier = identifier.trim().to_ascii_uppercase();
        self
    }

    /// Schema identifier as declared in the file header
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Schema family
    pub fn family(&self) -> SchemaFamily {
        self.family
    }

    fn entry(&self, name: &str) -> Option<&EntityEntry> {
        self.by_name
            .get(&name.trim().to_ascii_uppercase())
            .map(|&index| &self.entries[index])
    }

    /// Check if the type is tabulated in this schema
    pub fn is_known(&self, ifc_type: &IfcType) -> bool {
        self.by_name.contains_key(ifc_type.as_str())
    }

    /// Canonical spelling of a type name (`IFCWALL` -> `IfcWall`)
    ///
    /// Types outside the tables keep their STEP spelling.
    pub fn canonical_name<'a>(&'a self, ifc_type: &'a IfcType) -> &'a str {
        self.by_name
            .get(ifc_type.as_str())
            .map(|&index| self.entries[index].name)
            .unwrap_or_else(|| ifc_type.as_str())
    }

    /// Whether `ifc_type` is `class` or one of its (transitive) subtypes
    pub fn is_subtype_of(&self, ifc_type: &IfcType, class: &str) -> bool {
        if ifc_type.is(class) {
            return true;
        }
        let Some(target) = self.by_name.get(&class.trim().to_ascii_uppercase()).copied() else {
            return false;
        };
        let mut current = self.by_name.get(ifc_type.as_str()).copied();
        while let Some(index) = current {
            if index == target {
                return true;
            }
            current = self.entries[index].supertype;
        }
        false
    }

    /// Flattened attribute names of a type, supertype attributes first
    pub fn attribute_names(&self, ifc_type: &IfcType) -> &[&'static str] {
        self.entry(ifc_type.as_str())
            .map(|entry| entry.attributes.as_slice())
            .unwrap_or(&[])
    }

    /// Position of a named attribute (names are case-sensitive)
    pub fn attribute_index(&self, ifc_type: &IfcType, name: &str) -> Option<usize> {
        self.attribute_names(ifc_type).iter().position(|attr| *attr == name)
    }

    /// Whether an entity derives from `IfcRoot`
    ///
    /// Untabulated types count when their first attribute is a GlobalId.
    pub fn is_rooted(&self, entity: &DecodedEntity) -> bool {
        if self.is_known(&entity.ifc_type) {
            self.is_subtype_of(&entity.ifc_type, "IfcRoot")
        } else {
            entity
                .get(0)
                .and_then(|v| v.as_string())
                .is_some_and(is_global_id)
        }
    }

    /// Named attribute of an entity
    ///
    /// `None` when the type has no such attribute; a declared attribute that
    /// the instance does not spell out reads as null.
    pub fn attribute<'e>(&self, entity: &'e DecodedEntity, name: &str) -> Option<&'e AttributeValue> {
        let index = match self.attribute_index(&entity.ifc_type, name) {
            Some(index) => index,
            None if !self.is_known(&entity.ifc_type) && self.is_rooted(entity) => {
                ROOT_ATTRIBUTES.iter().position(|attr| *attr == name)?
            }
            None => return None,
        };
        Some(entity.get(index).unwrap_or(&NULL))
    }

    /// All inverse relationship definitions
    pub fn inverses(&self) -> &'static [InverseDef] {
        self.inverses
    }

    /// Inverse definition by name, if the type exposes it
    pub fn inverse(&self, ifc_type: &IfcType, name: &str) -> Option<&'static InverseDef> {
        self.inverses.iter().find(|inverse| {
            inverse.name == name
                && inverse
                    .owners
                    .iter()
                    .any(|owner| self.is_subtype_of(ifc_type, owner))
        })
    }
}

impl std::fmt::Debug for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field("identifier", &self.identifier)
            .field("family", &self.family)
            .field("entities", &self.entries.len())
            .finish()
    }
}
