// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! EntityResolver trait implementation

use crate::scanner::{EntityIndex, EntityScanner, TypeIndex};
use crate::tokenizer::parse_entity_at;
use ifc_lite_model::{DecodedEntity, EntityId, EntityResolver, IfcType, Schema};
use rustc_hash::FxHashMap;
use std::sync::{Arc, OnceLock, RwLock};

/// Inverse relationship index: (target id, inverse name) -> referring ids
type InverseIndex = FxHashMap<(u32, &'static str), Vec<EntityId>>;

/// Thread-safe entity resolver implementation
///
/// Entities are decoded lazily from the owned file content. Inverse
/// relationships declared by the schema are indexed once at construction.
pub struct ResolverImpl {
    /// Raw IFC content (owned for thread safety)
    content: String,
    /// Entity ID -> (start, end) byte offsets
    index: EntityIndex,
    /// Decoded entity cache (thread-safe)
    cache: RwLock<FxHashMap<u32, Arc<DecodedEntity>>>,
    /// Type -> entity IDs index
    type_index: TypeIndex,
    /// Schema used for subtype checks and named attributes
    schema: Arc<Schema>,
    /// Computed inverse relationships
    inverses: InverseIndex,
    /// GlobalId -> entity, built on first lookup
    global_ids: OnceLock<FxHashMap<String, EntityId>>,
}

impl ResolverImpl {
    /// Index `content` and compute the schema's inverse relationships
    pub fn new(content: String, schema: Arc<Schema>) -> Self {
        let (index, type_index) = EntityScanner::build_indexes(&content);
        let mut resolver = Self {
            content,
            index,
            cache: RwLock::new(FxHashMap::default()),
            type_index,
            schema,
            inverses: InverseIndex::default(),
            global_ids: OnceLock::new(),
        };
        resolver.inverses = resolver.build_inverses();
        resolver
    }

    /// Get raw content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Schema the resolver interprets entities with
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    fn build_inverses(&self) -> InverseIndex {
        let mut inverses = InverseIndex::default();
        for def in self.schema.inverses() {
            for source in self.instances_of(def.source) {
                let Some(value) = self.schema.attribute(&source, def.attribute) else {
                    continue;
                };
                for target in value.entity_refs() {
                    let referrers = inverses.entry((target.0, def.name)).or_default();
                    if !referrers.contains(&source.id) {
                        referrers.push(source.id);
                    }
                }
            }
        }
        inverses
    }

    /// Decode and cache an entity
    fn decode_and_cache(&self, id: u32) -> Option<Arc<DecodedEntity>> {
        {
            let cache = self.cache.read().ok()?;
            if let Some(cached) = cache.get(&id) {
                return Some(Arc::clone(cached));
            }
        }

        let (start, end) = self.index.get(&id)?;

        let entity = parse_entity_at(&self.content, *start, *end).ok()?;
        let arc = Arc::new(entity);

        if let Ok(mut cache) = self.cache.write() {
            cache.insert(id, Arc::clone(&arc));
        }

        Some(arc)
    }

    /// Entities of types the schema does not tabulate
    fn untabulated(&self) -> Vec<Arc<DecodedEntity>> {
        let mut ids: Vec<u32> = self
            .type_index
            .iter()
            .filter(|(ifc_type, _)| !self.schema.is_known(ifc_type))
            .flat_map(|(_, ids)| ids.iter().copied())
            .collect();
        ids.sort_unstable();
        ids.into_iter().filter_map(|id| self.get(EntityId(id))).collect()
    }

    fn build_global_ids(&self) -> FxHashMap<String, EntityId> {
        let mut global_ids = FxHashMap::default();
        for entity in self.instances_of("IfcRoot").into_iter().chain(self.untabulated()) {
            if let Some(guid) = self
                .schema
                .attribute(&entity, "GlobalId")
                .and_then(|v| v.as_string())
            {
                global_ids.entry(guid.to_string()).or_insert(entity.id);
            }
        }
        global_ids
    }
}

impl EntityResolver for ResolverImpl {
    fn get(&self, id: EntityId) -> Option<Arc<DecodedEntity>> {
        self.decode_and_cache(id.0)
    }

    fn entities_of_type(&self, type_name: &str) -> Vec<Arc<DecodedEntity>> {
        self.type_index
            .get(&IfcType::parse(type_name))
            .map(|ids| ids.iter().filter_map(|id| self.get(EntityId(*id))).collect())
            .unwrap_or_default()
    }

    fn instances_of(&self, class: &str) -> Vec<Arc<DecodedEntity>> {
        let mut ids: Vec<u32> = self
            .type_index
            .iter()
            .filter(|(ifc_type, _)| self.schema.is_subtype_of(ifc_type, class))
            .flat_map(|(_, ids)| ids.iter().copied())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids.into_iter().filter_map(|id| self.get(EntityId(id))).collect()
    }

    fn by_global_id(&self, global_id: &str) -> Option<Arc<DecodedEntity>> {
        let id = *self
            .global_ids
            .get_or_init(|| self.build_global_ids())
            .get(global_id)?;
        self.get(id)
    }

    fn inverse(&self, id: EntityId, name: &str) -> Vec<Arc<DecodedEntity>> {
        let Some(entity) = self.get(id) else {
            return Vec::new();
        };
        let Some(def) = self.schema.inverse(&entity.ifc_type, name) else {
            return Vec::new();
        };
        self.inverses
            .get(&(id.0, def.name))
            .map(|ids| ids.iter().filter_map(|id| self.get(*id)).collect())
            .unwrap_or_default()
    }

    fn all_ids(&self) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self.index.keys().map(|&id| EntityId(id)).collect();
        ids.sort_unstable();
        ids
    }

    fn entity_count(&self) -> usize {
        self.index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_IFC: &str = r#"ISO-10303-21;
HEADER;
FILE_SCHEMA(('IFC4'));
ENDSEC;
DATA;
#1=IFCPROJECT('0YvctVUKr0kugbFTf53O9L',$,'Project',$,$,$,$,(#10),$);
#4=IFCWALL('2O2Fr$t4X7Zf8NOew3FLOH',$,'Wall 1',$,$,$,$,$,$);
#5=IFCWALLSTANDARDCASE('1kTvXnbbzCWw8lcMd1dR4o',$,'Wall 2',$,$,$,$,$,$);
#6=IFCSLAB('3vB2YO$MX4xv5uCqZZG05x',$,'Slab',$,$,$,$,$,.FLOOR.);
#10=IFCGEOMETRICREPRESENTATIONCONTEXT($,'Model',3,1.E-05,#11,$);
#11=IFCAXIS2PLACEMENT3D(#12,$,$);
#12=IFCCARTESIANPOINT((0.,0.,0.));
#13=IFCGEOMETRICREPRESENTATIONSUBCONTEXT('Body','Model',*,*,*,*,#10,$,.MODEL_VIEW.,$);
#14=IFCGEOMETRICREPRESENTATIONSUBCONTEXT('Axis','Model',*,*,*,*,#10,$,.GRAPH_VIEW.,$);
#20=IFCMAPCONVERSION(#10,#21,0.,0.,0.,$,$,$);
#21=IFCPROJECTEDCRS('EPSG:7856',$,$,$,$,$,$);
#30=IFCPROPERTYSET('1Xb0T0NVD3Ax3Gt6YPvAB1',$,'Pset_WallCommon',$,(#31));
#31=IFCPROPERTYSINGLEVALUE('IsExternal',$,IFCBOOLEAN(.T.),$);
#32=IFCRELDEFINESBYPROPERTIES('2Rk8P$6qP1uBgd0Lx_c0a6',$,$,$,(#4,#5),#30);
#40=IFCFOOTING('0FtgZ7x9v3Hf9Mlgq6Pn1a',$,'F-01',$,$,$,$,$,.PAD_FOOTING.);
#41=IFCVENDORPRODUCT('1Vnd0r9Prod8ctXyZ_ab$c',$,'V-01');
ENDSEC;
END-ISO-10303-21;
"#;

    fn resolver() -> ResolverImpl {
        let schema = Arc::new(Schema::for_identifier("IFC4").unwrap());
        ResolverImpl::new(TEST_IFC.to_string(), schema)
    }

    #[test]
    fn test_resolver_get() {
        let resolver = resolver();
        let entity = resolver.get(EntityId(1)).unwrap();
        assert_eq!(entity.id, EntityId(1));
        assert!(resolver.get(EntityId(999)).is_none());
        assert_eq!(resolver.entity_count(), 16);
    }

    #[test]
    fn test_entities_of_type_is_exact() {
        let resolver = resolver();
        let walls = resolver.entities_of_type("IfcWall");
        assert_eq!(walls.len(), 1);
        assert_eq!(walls[0].id, EntityId(4));
    }

    #[test]
    fn test_instances_of_includes_subtypes_in_id_order() {
        let resolver = resolver();
        let ids: Vec<EntityId> = resolver.instances_of("IfcWall").iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![EntityId(4), EntityId(5)]);

        let elements = resolver.instances_of("IfcBuildingElement");
        assert_eq!(elements.len(), 4);
        assert!(resolver.instances_of("IfcDoor").is_empty());
    }

    #[test]
    fn test_by_global_id() {
        let resolver = resolver();
        let slab = resolver.by_global_id("3vB2YO$MX4xv5uCqZZG05x").unwrap();
        assert_eq!(slab.id, EntityId(6));
        assert!(resolver.by_global_id("missing").is_none());

        let footing = resolver.by_global_id("0FtgZ7x9v3Hf9Mlgq6Pn1a").unwrap();
        assert_eq!(footing.id, EntityId(40));
        let vendor = resolver.by_global_id("1Vnd0r9Prod8ctXyZ_ab$c").unwrap();
        assert_eq!(vendor.id, EntityId(41));
    }

    #[test]
    fn test_inverse_relationships() {
        let resolver = resolver();

        let subs: Vec<EntityId> = resolver
            .inverse(EntityId(10), "HasSubContexts")
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(subs, vec![EntityId(13), EntityId(14)]);

        let ops = resolver.inverse(EntityId(10), "HasCoordinateOperation");
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].id, EntityId(20));

        let rels = resolver.inverse(EntityId(5), "IsDefinedBy");
        assert_eq!(rels.len(), 1);
        assert_eq!(rels[0].id, EntityId(32));

        assert!(resolver.inverse(EntityId(6), "IsDefinedBy").is_empty());
        assert!(resolver.inverse(EntityId(4), "HasSubContexts").is_empty());
    }

    #[test]
    fn test_resolver_thread_safe() {
        use std::thread;

        let resolver = Arc::new(resolver());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let resolver = Arc::clone(&resolver);
                thread::spawn(move || {
                    for id in [1, 4, 5, 6] {
                        assert!(resolver.get(EntityId(id)).is_some());
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
