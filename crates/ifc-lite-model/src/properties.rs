// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property and quantity access for IFC entities

use crate::{AttributeValue, EntityId};
use serde::{Deserialize, Serialize};

/// Kind of an IfcProperty
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKind {
    /// IfcPropertySingleValue
    SingleValue,
    /// IfcPropertyEnumeratedValue
    EnumeratedValue,
    /// IfcPropertyBoundedValue
    BoundedValue,
    /// IfcPropertyListValue
    ListValue,
    /// Any other IfcProperty subtype (tables, references, complex properties)
    Other,
}

/// A single property with its decoded value
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    /// Entity id of the property instance
    pub id: EntityId,
    /// Property name
    pub name: String,
    /// Property kind
    pub kind: PropertyKind,
    /// Nominal value (single-value properties only)
    pub nominal_value: Option<AttributeValue>,
    /// Property value as formatted string
    pub value: String,
}

impl Property {
    /// Text form of the nominal value, if this is a single-value property with a value
    pub fn nominal_text(&self) -> Option<String> {
        self.nominal_value.as_ref().and_then(|v| v.to_text())
    }
}

/// A property set containing multiple properties
#[derive(Clone, Debug, PartialEq)]
pub struct PropertySet {
    /// Entity id of the IfcPropertySet
    pub id: EntityId,
    /// Property set name (e.g., "Pset_WallCommon")
    pub name: String,
    /// Properties in this set
    pub properties: Vec<Property>,
}

impl PropertySet {
    /// Get a property by name
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// Quantity types supported in IFC
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityType {
    /// Linear measurement (IfcQuantityLength)
    Length,
    /// Area measurement (IfcQuantityArea)
    Area,
    /// Volume measurement (IfcQuantityVolume)
    Volume,
    /// Count (IfcQuantityCount)
    Count,
    /// Weight/mass measurement (IfcQuantityWeight)
    Weight,
    /// Time measurement (IfcQuantityTime)
    Time,
}

impl QuantityType {
    /// Quantity type of an IfcQuantity* entity name
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "IFCQUANTITYLENGTH" => Some(QuantityType::Length),
            "IFCQUANTITYAREA" => Some(QuantityType::Area),
            "IFCQUANTITYVOLUME" => Some(QuantityType::Volume),
            "IFCQUANTITYCOUNT" => Some(QuantityType::Count),
            "IFCQUANTITYWEIGHT" => Some(QuantityType::Weight),
            "IFCQUANTITYTIME" => Some(QuantityType::Time),
            _ => None,
        }
    }

    /// Attribute holding the measured value
    pub fn value_attribute(&self) -> &'static str {
        match self {
            QuantityType::Length => "LengthValue",
            QuantityType::Area => "AreaValue",
            QuantityType::Volume => "VolumeValue",
            QuantityType::Count => "CountValue",
            QuantityType::Weight => "WeightValue",
            QuantityType::Time => "TimeValue",
        }
    }
}

/// A measured quantity
#[derive(Clone, Debug, PartialEq)]
pub struct Quantity {
    /// Quantity name
    pub name: String,
    /// Numeric value, `None` when the file leaves it unset
    pub value: Option<f64>,
    /// Type of quantity
    pub quantity_type: QuantityType,
}

/// A quantity set (IfcElementQuantity)
#[derive(Clone, Debug, PartialEq)]
pub struct QuantitySet {
    /// Entity id of the IfcElementQuantity
    pub id: EntityId,
    /// Quantity set name (e.g., "Qto_WallBaseQuantities")
    pub name: String,
    /// Quantities in this set
    pub quantities: Vec<Quantity>,
}

impl QuantitySet {
    /// Get a quantity by name
    pub fn get(&self, name: &str) -> Option<&Quantity> {
        self.quantities.iter().find(|q| q.name == name)
    }
}

/// Property and quantity reader trait
///
/// Property sets come from IfcPropertySet entities linked via IfcRelDefinesByProperties.
/// Quantities come from IfcElementQuantity entities linked the same way. Sets are
/// returned in relationship order and names are compared case-sensitively.
///
/// # Example
///
/// ```ignore
/// use ifc_lite_model::{PropertyReader, EntityId};
///
/// fn fire_rating(props: &dyn PropertyReader, wall_id: EntityId) -> Option<String> {
///     props
///         .property(wall_id, "Pset_WallCommon", "FireRating")
///         .and_then(|p| p.nominal_text())
/// }
/// ```
pub trait PropertyReader: Send + Sync {
    /// All property sets defining an entity
    fn property_sets(&self, id: EntityId) -> Vec<PropertySet>;

    /// All quantity sets defining an entity
    fn quantity_sets(&self, id: EntityId) -> Vec<QuantitySet>;

    /// First property set with the given name
    fn property_set(&self, id: EntityId, pset_name: &str) -> Option<PropertySet> {
        self.property_sets(id)
            .into_iter()
            .find(|pset| pset.name == pset_name)
    }

    /// Property by set name and property name
    fn property(&self, id: EntityId, pset_name: &str, property_name: &str) -> Option<Property> {
        self.property_set(id, pset_name)?.get(property_name).cloned()
    }

    /// Quantity by set name and quantity name
    ///
    /// Every quantity set carrying the name is searched, not just the first.
    fn quantity(&self, id: EntityId, qto_name: &str, quantity_name: &str) -> Option<Quantity> {
        self.quantity_sets(id)
            .into_iter()
            .filter(|qset| qset.name == qto_name)
            .find_map(|qset| qset.get(quantity_name).cloned())
    }
}
