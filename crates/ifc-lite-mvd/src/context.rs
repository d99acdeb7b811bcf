// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Evaluation context threaded through every check

use crate::access::ModelAccess;
use crate::bookmarks::Bookmarks;
use crate::config::EngineConfig;
use crate::reference::{ReferenceList, ReferenceLists, ReferenceSource};
use crate::Result;
use ifc_lite_model::{DecodedEntity, IfcModel};
use ifc_lite_parser::StepParser;
use std::sync::Arc;

/// State owned by one scenario run
///
/// Holds the active model, the bookmarks recorded against it and the
/// reference lists read while checking it. Loading a new model clears the
/// bookmarks and any cached lists; a failed load leaves everything as it was.
#[derive(Debug)]
pub struct EvaluationContext {
    config: EngineConfig,
    access: ModelAccess,
    bookmarks: Bookmarks,
    references: ReferenceLists,
}

impl EvaluationContext {
    /// Create a context with no model loaded
    pub fn new(config: EngineConfig) -> Self {
        let mut parser = StepParser::new();
        if let Some(schema) = &config.fallback_schema {
            parser = parser.with_fallback_schema(schema.clone());
        }
        let references = ReferenceLists::new(
            Box::new(crate::reference::CsvReferenceSource),
            config.cache_reference_lists,
        );
        Self {
            access: ModelAccess::new(Box::new(parser)),
            bookmarks: Bookmarks::new(),
            references,
            config,
        }
    }

    /// Replace the reference list source
    pub fn with_reference_source(mut self, source: Box<dyn ReferenceSource>) -> Self {
        self.references = ReferenceLists::new(source, self.config.cache_reference_lists);
        self
    }

    /// Engine settings
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Model access facade
    pub fn access(&self) -> &ModelAccess {
        &self.access
    }

    /// Bookmarks recorded for the active model
    pub fn bookmarks(&self) -> &Bookmarks {
        &self.bookmarks
    }

    /// Mutable bookmarks for the active model
    pub fn bookmarks_mut(&mut self) -> &mut Bookmarks {
        &mut self.bookmarks
    }

    /// Load the model at `locator`, resolved against the configured base directory
    pub fn load(&mut self, locator: &str) -> Result<Arc<dyn IfcModel>> {
        let path = self.config.resolve(locator);
        let model = self.access.load(locator, &path)?;
        self.bookmarks.clear();
        self.references.clear();
        Ok(model)
    }

    /// Make an already parsed model active
    pub fn set_model(&mut self, model: Arc<dyn IfcModel>) {
        self.access.set_model(model);
        self.bookmarks.clear();
        self.references.clear();
    }

    /// Drop the model, bookmarks and cached lists
    pub fn reset(&mut self) {
        self.access.unload();
        self.bookmarks.clear();
        self.references.clear();
    }

    /// Entity recorded under bookmark `key`
    pub fn bookmarked(&self, key: &str) -> Result<Arc<DecodedEntity>> {
        let id = self.bookmarks.get(key)?;
        self.access.by_id(id)
    }

    /// Reference list at `locator`, resolved against the configured base directory
    pub fn reference_list(&mut self, locator: &str) -> Result<Arc<ReferenceList>> {
        let path = self.config.resolve(locator);
        self.references.get(&path)
    }

    /// Whether the active model takes the legacy geolocation branch
    pub fn is_legacy_schema(&self) -> Result<bool> {
        let identifier = self.access.schema_identifier()?;
        Ok(self.config.is_legacy_schema(identifier))
    }
}

impl Default for EvaluationContext {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
