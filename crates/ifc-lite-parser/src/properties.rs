// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! PropertyReader trait implementation

use crate::resolver::ResolverImpl;
use ifc_lite_model::{
    AttributeValue, DecodedEntity, EntityId, EntityResolver, Property, PropertyKind,
    PropertyReader, PropertySet, Quantity, QuantitySet, QuantityType, Schema,
};
use std::sync::Arc;

/// Property reader implementation
///
/// Walks `IsDefinedBy` -> `RelatingPropertyDefinition` on demand; the
/// relationship index itself lives in the resolver.
pub struct PropertyReaderImpl {
    resolver: Arc<ResolverImpl>,
}

impl PropertyReaderImpl {
    /// Create a new property reader
    pub fn new(resolver: Arc<ResolverImpl>) -> Self {
        Self { resolver }
    }

    fn schema(&self) -> &Schema {
        self.resolver.schema()
    }

    /// Property definitions attached to an entity, in relationship order
    fn definitions(&self, id: EntityId, class: &str) -> Vec<Arc<DecodedEntity>> {
        let schema = self.schema();
        self.resolver
            .inverse(id, "IsDefinedBy")
            .iter()
            .filter_map(|rel| {
                let definition = schema.attribute(rel, "RelatingPropertyDefinition")?;
                self.resolver.resolve_ref(definition)
            })
            .filter(|definition| schema.is_subtype_of(&definition.ifc_type, class))
            .collect()
    }

    fn name_of(&self, entity: &DecodedEntity) -> Option<String> {
        self.schema()
            .attribute(entity, "Name")
            .and_then(|v| v.as_string())
            .map(str::to_string)
    }

    /// Referenced members of a set (`HasProperties`, `Quantities`)
    fn members(&self, set: &DecodedEntity, attribute: &str) -> Vec<Arc<DecodedEntity>> {
        self.schema()
            .attribute(set, attribute)
            .map(|v| self.resolver.resolve_ref_list(v))
            .unwrap_or_default()
    }

    /// Extract a single property from an IfcProperty entity
    fn extract_single_property(&self, prop: &DecodedEntity) -> Option<Property> {
        let schema = self.schema();
        let name = self.name_of(prop)?;
        let attr = |name: &str| schema.attribute(prop, name).filter(|v| !v.is_null());

        let (kind, nominal_value, value) = if prop.ifc_type.is("IfcPropertySingleValue") {
            let nominal = attr("NominalValue").cloned();
            let value = nominal.as_ref().map(format_value).unwrap_or_default();
            (PropertyKind::SingleValue, nominal, value)
        } else if prop.ifc_type.is("IfcPropertyEnumeratedValue") {
            let value = attr("EnumerationValues").map(format_list).unwrap_or_default();
            (PropertyKind::EnumeratedValue, None, value)
        } else if prop.ifc_type.is("IfcPropertyBoundedValue") {
            let upper = attr("UpperBoundValue").map(format_value);
            let lower = attr("LowerBoundValue").map(format_value);
            let value = match (lower, upper) {
                (Some(l), Some(u)) => format!("{} - {}", l, u),
                (Some(l), None) => format!(">= {}", l),
                (None, Some(u)) => format!("<= {}", u),
                (None, None) => String::new(),
            };
            (PropertyKind::BoundedValue, None, value)
        } else if prop.ifc_type.is("IfcPropertyListValue") {
            let value = attr("ListValues").map(format_list).unwrap_or_default();
            (PropertyKind::ListValue, None, value)
        } else {
            (PropertyKind::Other, None, String::new())
        };

        Some(Property {
            id: prop.id,
            name,
            kind,
            nominal_value,
            value,
        })
    }

    /// Extract a single quantity from an IfcQuantity entity
    fn extract_single_quantity(&self, qty: &DecodedEntity) -> Option<Quantity> {
        let name = self.name_of(qty)?;
        let quantity_type = QuantityType::from_type_name(qty.ifc_type.as_str())?;
        let value = self
            .schema()
            .attribute(qty, quantity_type.value_attribute())
            .and_then(|v| v.as_float());

        Some(Quantity {
            name,
            value,
            quantity_type,
        })
    }
}

/// Format an attribute value as a string
fn format_value(attr: &AttributeValue) -> String {
    attr.to_text().unwrap_or_default()
}

fn format_list(attr: &AttributeValue) -> String {
    match attr {
        AttributeValue::List(items) => items
            .iter()
            .map(format_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => format_value(other),
    }
}

impl PropertyReader for PropertyReaderImpl {
    fn property_sets(&self, id: EntityId) -> Vec<PropertySet> {
        self.definitions(id, "IfcPropertySet")
            .iter()
            .map(|pset| PropertySet {
                id: pset.id,
                name: self.name_of(pset).unwrap_or_default(),
                properties: self
                    .members(pset, "HasProperties")
                    .iter()
                    .filter_map(|prop| self.extract_single_property(prop))
                    .collect(),
            })
            .collect()
    }

    fn quantity_sets(&self, id: EntityId) -> Vec<QuantitySet> {
        self.definitions(id, "IfcElementQuantity")
            .iter()
            .map(|qset| QuantitySet {
                id: qset.id,
                name: self.name_of(qset).unwrap_or_default(),
                quantities: self
                    .members(qset, "Quantities")
                    .iter()
                    .filter_map(|qty| self.extract_single_quantity(qty))
                    .collect(),
            })
            .collect()
    }
}
