// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Model access facade
//!
//! Every lookup a check performs goes through [`ModelAccess`], which turns
//! "no model loaded", "no such entity" and "no such attribute" into
//! [`CheckError`]s with a uniform wording.

use crate::{CheckError, Result};
use ifc_lite_model::{
    AttributeValue, DecodedEntity, EntityId, IfcModel, IfcParser, Property, PropertySet,
    Quantity,
};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// How a requirement names an element
///
/// All-digit tokens (optionally prefixed with `#`) are STEP instance ids;
/// anything else is a `GlobalId`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElementRef {
    /// STEP instance id
    Id(EntityId),
    /// IfcRoot GlobalId
    GlobalId(String),
}

impl FromStr for ElementRef {
    type Err = std::convert::Infallible;

    fn from_str(token: &str) -> std::result::Result<Self, Self::Err> {
        let token = token.trim();
        let digits = token.strip_prefix('#').unwrap_or(token);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(id) = digits.parse::<u32>() {
                return Ok(ElementRef::Id(EntityId(id)));
            }
        }
        Ok(ElementRef::GlobalId(token.to_string()))
    }
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementRef::Id(id) => write!(f, "{}", id),
            ElementRef::GlobalId(guid) => f.write_str(guid),
        }
    }
}

/// Read-only access to the active model
pub struct ModelAccess {
    parser: Box<dyn IfcParser>,
    model: Option<Arc<dyn IfcModel>>,
}

impl ModelAccess {
    /// Create a facade that loads files with `parser`
    pub fn new(parser: Box<dyn IfcParser>) -> Self {
        Self {
            parser,
            model: None,
        }
    }

    /// Parse the file at `path` and make it the active model
    ///
    /// On failure the previously active model stays in place.
    pub fn load(&mut self, locator: &str, path: &Path) -> Result<Arc<dyn IfcModel>> {
        let model = self.parser.open(path).map_err(|source| CheckError::Load {
            locator: locator.to_string(),
            source,
        })?;
        log::info!(
            "loaded {} ({} schema, {} entities)",
            path.display(),
            model.schema().identifier(),
            model.resolver().entity_count()
        );
        self.model = Some(Arc::clone(&model));
        Ok(model)
    }

    /// Make an already parsed model the active one
    pub fn set_model(&mut self, model: Arc<dyn IfcModel>) {
        self.model = Some(model);
    }

    /// Drop the active model
    pub fn unload(&mut self) {
        self.model = None;
    }

    /// Whether a model is active
    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    /// The active model
    pub fn model(&self) -> Result<&dyn IfcModel> {
        self.model.as_deref().ok_or(CheckError::NotLoaded)
    }

    /// FILE_SCHEMA identifier of the active model
    pub fn schema_identifier(&self) -> Result<&str> {
        Ok(self.model()?.schema().identifier())
    }

    /// Entity by STEP id
    pub fn by_id(&self, id: EntityId) -> Result<Arc<DecodedEntity>> {
        self.model()?
            .resolver()
            .get(id)
            .ok_or_else(|| CheckError::NotFound(id.to_string()))
    }

    /// Entity named by an element reference
    pub fn by_ref(&self, element: &ElementRef) -> Result<Arc<DecodedEntity>> {
        match element {
            ElementRef::Id(id) => self.by_id(*id),
            ElementRef::GlobalId(guid) => self
                .model()?
                .resolver()
                .by_global_id(guid)
                .ok_or_else(|| CheckError::NotFound(guid.clone())),
        }
    }

    /// All instances of `class` including subtypes, in id order
    pub fn by_type(&self, class: &str) -> Result<Vec<Arc<DecodedEntity>>> {
        Ok(self.model()?.resolver().instances_of(class))
    }

    /// Whether `entity` is `class` or one of its subtypes
    pub fn is_instance_of(&self, entity: &DecodedEntity, class: &str) -> Result<bool> {
        Ok(self.model()?.schema().is_subtype_of(&entity.ifc_type, class))
    }

    /// Canonical type name of an entity (`IfcWall`)
    pub fn type_name(&self, entity: &DecodedEntity) -> Result<String> {
        Ok(self.model()?.schema().canonical_name(&entity.ifc_type).to_string())
    }

    /// Short description used in diagnostics, e.g. `#12=IfcWall('2O2Fr$t4X7Zf8NOew3FLOH')`
    pub fn describe(&self, entity: &DecodedEntity) -> String {
        let Ok(model) = self.model() else {
            return entity.to_string();
        };
        let schema = model.schema();
        let name = schema.canonical_name(&entity.ifc_type);
        match schema.attribute(entity, "GlobalId").and_then(|v| v.as_string()) {
            Some(guid) => format!("{}={}('{}')", entity.id, name, guid),
            None => format!("{}={}", entity.id, name),
        }
    }

    /// Named attribute of an entity
    ///
    /// `None` when the entity's type has no attribute of that name; a declared
    /// but unset attribute reads as [`AttributeValue::Null`].
    pub fn attribute<'e>(
        &self,
        entity: &'e DecodedEntity,
        name: &str,
    ) -> Result<Option<&'e AttributeValue>> {
        Ok(self.model()?.schema().attribute(entity, name))
    }

    /// Named attribute that must be declared by the entity's type
    pub fn require_attribute<'e>(
        &self,
        entity: &'e DecodedEntity,
        name: &str,
    ) -> Result<&'e AttributeValue> {
        self.attribute(entity, name)?.ok_or_else(|| {
            CheckError::absent(format!("The element {} has no {} attribute", self.describe(entity), name))
        })
    }

    /// Entity referenced by a single-valued attribute
    pub fn follow(&self, entity: &DecodedEntity, name: &str) -> Result<Option<Arc<DecodedEntity>>> {
        let model = self.model()?;
        Ok(self
            .attribute(entity, name)?
            .and_then(|value| model.resolver().resolve_ref(value)))
    }

    /// Entities referenced by a list-valued attribute
    pub fn follow_list(&self, entity: &DecodedEntity, name: &str) -> Result<Vec<Arc<DecodedEntity>>> {
        let model = self.model()?;
        Ok(self
            .attribute(entity, name)?
            .map(|value| model.resolver().resolve_ref_list(value))
            .unwrap_or_default())
    }

    /// Entities reached through an inverse relationship
    pub fn inverse(&self, entity: &DecodedEntity, name: &str) -> Result<Vec<Arc<DecodedEntity>>> {
        Ok(self.model()?.resolver().inverse(entity.id, name))
    }

    /// The model's IfcProject (first by id)
    pub fn project(&self) -> Result<Arc<DecodedEntity>> {
        self.by_type("IfcProject")?
            .into_iter()
            .next()
            .ok_or_else(|| CheckError::absent("The model has no IfcProject"))
    }

    /// First property set named `pset_name` defining `entity`
    pub fn property_set(&self, entity: &DecodedEntity, pset_name: &str) -> Result<Option<PropertySet>> {
        Ok(self.model()?.properties().property_set(entity.id, pset_name))
    }

    /// Property `property_name` of the first set named `pset_name`
    pub fn property(
        &self,
        entity: &DecodedEntity,
        pset_name: &str,
        property_name: &str,
    ) -> Result<Option<Property>> {
        Ok(self
            .model()?
            .properties()
            .property(entity.id, pset_name, property_name))
    }

    /// Quantity `quantity_name` from any quantity set named `qto_name`
    pub fn quantity(
        &self,
        entity: &DecodedEntity,
        qto_name: &str,
        quantity_name: &str,
    ) -> Result<Option<Quantity>> {
        Ok(self
            .model()?
            .properties()
            .quantity(entity.id, qto_name, quantity_name))
    }

    /// Representation contexts of the project
    pub fn representation_contexts(&self) -> Result<Vec<Arc<DecodedEntity>>> {
        let project = self.project()?;
        self.follow_list(&project, "RepresentationContexts")
    }

    /// Sub-context of a project context matching all three descriptors
    pub fn sub_context(
        &self,
        identifier: &str,
        context_type: &str,
        target_view: &str,
    ) -> Result<Option<Arc<DecodedEntity>>> {
        let text = |entity: &DecodedEntity, name: &str| -> Result<Option<String>> {
            Ok(self.attribute(entity, name)?.and_then(|v| v.to_text()))
        };

        for context in self.representation_contexts()? {
            for sub in self.inverse(&context, "HasSubContexts")? {
                if text(&sub, "ContextIdentifier")?.as_deref() == Some(identifier)
                    && text(&sub, "ContextType")?.as_deref() == Some(context_type)
                    && text(&sub, "TargetView")?.as_deref() == Some(target_view)
                {
                    return Ok(Some(sub));
                }
            }
        }
        Ok(None)
    }
}

impl Default for ModelAccess {
    fn default() -> Self {
        Self::new(Box::new(ifc_lite_parser::StepParser::new()))
    }
}

impl fmt::Debug for ModelAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelAccess")
            .field(
                "schema",
                &self.model.as_ref().map(|m| m.schema().identifier().to_string()),
            )
            .finish()
    }
}
