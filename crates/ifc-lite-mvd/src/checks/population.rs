// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Checks over every instance of a class
//!
//! Instances are visited in id order and the first failing one is reported.

use super::{display_value, search_regex, split_path};
use crate::access::ModelAccess;
use crate::{CheckError, EvaluationContext, Result};
use ifc_lite_model::{DecodedEntity, PropertyKind};

/// At least one `class` instance exists
pub fn type_exists(ctx: &EvaluationContext, class: &str) -> Result<()> {
    if ctx.access().by_type(class)?.is_empty() {
        Err(CheckError::absent(format!("There are no {} elements", class)))
    } else {
        Ok(())
    }
}

/// No `class` instance exists
pub fn type_absent(ctx: &EvaluationContext, class: &str) -> Result<()> {
    let access = ctx.access();
    let elements = access.by_type(class)?;
    match elements.first() {
        None => Ok(()),
        Some(first) => Err(CheckError::mismatch(format!(
            "There are {} {} elements, starting with {}",
            elements.len(),
            class,
            access.describe(first)
        ))),
    }
}

/// Every `class` instance has a Name found by `pattern`
pub fn name_pattern(ctx: &EvaluationContext, class: &str, pattern: &str) -> Result<()> {
    let regex = search_regex(pattern)?;
    let access = ctx.access();
    for element in access.by_type(class)? {
        let name = access.attribute(&element, "Name")?.and_then(|v| v.to_text());
        match name {
            Some(name) if regex.is_match(&name) => {}
            Some(name) => {
                return Err(CheckError::mismatch(format!(
                    "The element {} has a name of \"{}\" which does not match \"{}\"",
                    access.describe(&element),
                    name,
                    pattern
                )))
            }
            None => {
                return Err(CheckError::absent(format!(
                    "The element {} has no name",
                    access.describe(&element)
                )))
            }
        }
    }
    Ok(())
}

/// Every represented `class` instance has an item of one of the `/`-separated classes
///
/// Mapped items are followed one level into their representation map.
pub fn representation_kind(ctx: &EvaluationContext, class: &str, allowed: &str) -> Result<()> {
    let access = ctx.access();
    let allowed: Vec<&str> = allowed.split('/').map(str::trim).collect();
    let matches = |item: &DecodedEntity| -> Result<bool> {
        for kind in &allowed {
            if access.is_instance_of(item, kind)? {
                return Ok(true);
            }
        }
        Ok(false)
    };

    for element in access.by_type(class)? {
        let Some(shape) = access.follow(&element, "Representation")? else {
            continue;
        };
        let mut found = false;
        for representation in access.follow_list(&shape, "Representations")? {
            for item in access.follow_list(&representation, "Items")? {
                found |= if access.is_instance_of(&item, "IfcMappedItem")? {
                    mapped_items_match(access, &item, &matches)?
                } else {
                    matches(&item)?
                };
            }
        }
        if !found {
            return Err(CheckError::mismatch(format!(
                "The element {} has no {} representation",
                access.describe(&element),
                allowed.join("/")
            )));
        }
    }
    Ok(())
}

fn mapped_items_match(
    access: &ModelAccess,
    item: &DecodedEntity,
    matches: &dyn Fn(&DecodedEntity) -> Result<bool>,
) -> Result<bool> {
    let Some(source) = access.follow(item, "MappingSource")? else {
        return Ok(false);
    };
    let Some(mapped) = access.follow(&source, "MappedRepresentation")? else {
        return Ok(false);
    };
    let mut found = false;
    for inner in access.follow_list(&mapped, "Items")? {
        found |= matches(&inner)?;
    }
    Ok(found)
}

/// Every `class` instance has a value for `attribute`
pub fn attribute_present(ctx: &EvaluationContext, class: &str, attribute: &str) -> Result<()> {
    let access = ctx.access();
    for element in access.by_type(class)? {
        let value = access.require_attribute(&element, attribute)?;
        if !value.is_truthy() {
            return Err(CheckError::absent(format!(
                "The element {} has no value for {}",
                access.describe(&element),
                attribute
            )));
        }
    }
    Ok(())
}

/// Every `class` instance has the property at `property_path`
pub fn property_present(ctx: &EvaluationContext, class: &str, property_path: &str) -> Result<()> {
    let (pset_name, property_name) = split_path(property_path)?;
    let access = ctx.access();
    for element in access.by_type(class)? {
        if access.property(&element, pset_name, property_name)?.is_none() {
            return Err(missing_property(access, &element, property_path));
        }
    }
    Ok(())
}

fn missing_property(access: &ModelAccess, element: &DecodedEntity, path: &str) -> CheckError {
    CheckError::absent(format!(
        "The element {} has no {} property",
        access.describe(element),
        path
    ))
}

/// Every `class` instance has a single-value property at `property_path` found by `pattern`
pub fn property_value_pattern(
    ctx: &EvaluationContext,
    class: &str,
    property_path: &str,
    pattern: &str,
) -> Result<()> {
    let (pset_name, property_name) = split_path(property_path)?;
    let regex = search_regex(pattern)?;
    let access = ctx.access();
    for element in access.by_type(class)? {
        let property = access
            .property(&element, pset_name, property_name)?
            .ok_or_else(|| missing_property(access, &element, property_path))?;
        if property.kind != PropertyKind::SingleValue {
            return Err(CheckError::mismatch(format!(
                "The {} property of element {} is not a single value",
                property_path,
                access.describe(&element)
            )));
        }
        match property.nominal_text() {
            Some(text) if regex.is_match(&text) => {}
            text => {
                return Err(CheckError::mismatch(format!(
                    "The {} property of element {} has a value of \"{}\" which does not match \"{}\"",
                    property_path,
                    access.describe(&element),
                    text.as_deref().unwrap_or("null"),
                    pattern
                )))
            }
        }
    }
    Ok(())
}

/// Every `class` instance has an `attribute` whose text is found by `pattern`
pub fn attribute_pattern(
    ctx: &EvaluationContext,
    class: &str,
    attribute: &str,
    pattern: &str,
) -> Result<()> {
    let regex = search_regex(pattern)?;
    let access = ctx.access();
    for element in access.by_type(class)? {
        let value = access.require_attribute(&element, attribute)?;
        match value.to_text() {
            Some(text) if regex.is_match(&text) => {}
            _ => {
                return Err(CheckError::mismatch(format!(
                    "The {} of element {} is \"{}\" which does not match \"{}\"",
                    attribute,
                    access.describe(&element),
                    display_value(Some(value)),
                    pattern
                )))
            }
        }
    }
    Ok(())
}

/// Every `class` instance has its `attributes` tuple listed in `list_file`
pub fn reference_list(
    ctx: &mut EvaluationContext,
    class: &str,
    attributes: &str,
    list_file: &str,
) -> Result<()> {
    let names: Vec<&str> = attributes.split(',').map(str::trim).collect();
    let list = ctx.reference_list(list_file)?;
    let access = ctx.access();

    for element in access.by_type(class)? {
        let failed = || {
            let guid = access
                .attribute(&element, "GlobalId")
                .ok()
                .flatten()
                .and_then(|v| v.to_text())
                .unwrap_or_else(|| access.describe(&element));
            CheckError::mismatch(format!("Failed at element {}", guid))
        };

        let mut tuple = Vec::with_capacity(names.len());
        for name in &names {
            match access.attribute(&element, name)?.and_then(|v| v.to_text()) {
                Some(text) => tuple.push(text),
                None => return Err(failed()),
            }
        }
        if !list.contains(&tuple) {
            return Err(failed());
        }
    }
    Ok(())
}

/// Every `class` instance has `quantity_name` in a quantity set named `qto_name`
pub fn quantity_present(
    ctx: &EvaluationContext,
    class: &str,
    qto_name: &str,
    quantity_name: &str,
) -> Result<()> {
    let access = ctx.access();
    for element in access.by_type(class)? {
        if access.quantity(&element, qto_name, quantity_name)?.is_none() {
            return Err(CheckError::absent(format!(
                "The element {} has no {}.{} quantity",
                access.describe(&element),
                qto_name,
                quantity_name
            )));
        }
    }
    Ok(())
}

/// Some `class` instance has `attribute` equal to `expected`
pub fn any_attribute_equals(
    ctx: &EvaluationContext,
    class: &str,
    attribute: &str,
    expected: &str,
) -> Result<()> {
    let access = ctx.access();
    for element in access.by_type(class)? {
        let text = access.attribute(&element, attribute)?.and_then(|v| v.to_text());
        if text.as_deref() == Some(expected) {
            return Ok(());
        }
    }
    Err(CheckError::mismatch(format!(
        "No {} element has a {} of \"{}\"",
        class, attribute, expected
    )))
}

/// Every building has an address
pub fn buildings_have_address(ctx: &EvaluationContext) -> Result<()> {
    let access = ctx.access();
    for building in access.by_type("IfcBuilding")? {
        let has_address = access
            .attribute(&building, "BuildingAddress")?
            .is_some_and(|v| v.is_truthy());
        if !has_address {
            return Err(CheckError::absent(format!(
                "The building \"{}\" has no address.",
                display_value(access.attribute(&building, "Name")?)
            )));
        }
    }
    Ok(())
}
