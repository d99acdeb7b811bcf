// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity resolution trait for looking up and resolving IFC entities

use crate::{AttributeValue, DecodedEntity, EntityId};
use std::sync::Arc;

/// Entity lookup and reference resolution
///
/// This trait provides the core functionality for accessing IFC entities,
/// resolving entity references and walking inverse relationships.
/// Implementations should provide O(1) lookup by entity ID.
///
/// # Example
///
/// ```ignore
/// use ifc_lite_model::{EntityResolver, EntityId};
///
/// fn sub_contexts(resolver: &dyn EntityResolver, context: EntityId) -> usize {
///     resolver.inverse(context, "HasSubContexts").len()
/// }
/// ```
pub trait EntityResolver: Send + Sync {
    /// Get entity by ID
    ///
    /// Returns the decoded entity if it exists, wrapped in an Arc for
    /// efficient sharing.
    fn get(&self, id: EntityId) -> Option<Arc<DecodedEntity>>;

    /// Resolve an entity reference from an attribute value
    fn resolve_ref(&self, attr: &AttributeValue) -> Option<Arc<DecodedEntity>> {
        match attr {
            AttributeValue::EntityRef(id) => self.get(*id),
            _ => None,
        }
    }

    /// Resolve a list of entity references
    ///
    /// Non-reference items are skipped; a single reference resolves to a
    /// one-element list.
    fn resolve_ref_list(&self, attr: &AttributeValue) -> Vec<Arc<DecodedEntity>> {
        attr.entity_refs()
            .into_iter()
            .filter_map(|id| self.get(id))
            .collect()
    }

    /// Entities whose type is exactly `type_name` (case-insensitive)
    fn entities_of_type(&self, type_name: &str) -> Vec<Arc<DecodedEntity>>;

    /// Entities of `class` or any of its subtypes, in ascending id order
    fn instances_of(&self, class: &str) -> Vec<Arc<DecodedEntity>>;

    /// Entity by its `GlobalId` attribute
    fn by_global_id(&self, global_id: &str) -> Option<Arc<DecodedEntity>>;

    /// Entities referring to `id` through the named inverse relationship
    ///
    /// Returns an empty list when the entity has no such inverse.
    fn inverse(&self, id: EntityId, name: &str) -> Vec<Arc<DecodedEntity>>;

    /// Get all entity IDs in the model
    fn all_ids(&self) -> Vec<EntityId>;

    /// Get total entity count
    fn entity_count(&self) -> usize {
        self.all_ids().len()
    }
}
