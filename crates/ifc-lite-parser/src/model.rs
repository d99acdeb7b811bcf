// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ParsedModel - Main IFC model implementation

use crate::properties::PropertyReaderImpl;
use crate::resolver::ResolverImpl;
use crate::scanner::{data_section_start, parse_header};

use ifc_lite_model::{
    EntityResolver, IfcModel, ModelMetadata, ParseError, PropertyReader, Result, Schema,
};
use std::sync::Arc;

/// Parsed IFC model implementing the `IfcModel` trait
///
/// This is the main entry point for accessing IFC data. It provides access
/// to entities and properties through trait objects.
pub struct ParsedModel {
    /// Entity resolver for lookups
    resolver: Arc<ResolverImpl>,
    /// Property reader
    properties: PropertyReaderImpl,
    /// Schema tables selected from FILE_SCHEMA
    schema: Arc<Schema>,
    /// File metadata
    metadata: ModelMetadata,
}

impl ParsedModel {
    /// Parse IFC content and create a model
    ///
    /// `fallback_schema` names the tables to use when FILE_SCHEMA is not a
    /// supported schema; without it such files are rejected.
    pub fn parse(content: &str, fallback_schema: Option<&str>) -> Result<Self> {
        if !content.trim_start().starts_with("ISO-10303-21") {
            return Err(ParseError::format("missing ISO-10303-21 signature"));
        }

        let metadata = parse_header(content);
        if metadata.schema_version.is_empty() {
            return Err(ParseError::InvalidHeader("missing FILE_SCHEMA".to_string()));
        }
        if data_section_start(content).is_none() {
            return Err(ParseError::format("missing DATA section"));
        }

        let schema = match Schema::for_identifier(&metadata.schema_version) {
            Some(schema) => schema,
            None => fallback_schema
                .and_then(Schema::for_identifier)
                .map(|schema| schema.with_identifier(&metadata.schema_version))
                .ok_or_else(|| ParseError::UnsupportedSchema(metadata.schema_version.clone()))?,
        };
        let schema = Arc::new(schema);

        let resolver = Arc::new(ResolverImpl::new(content.to_string(), Arc::clone(&schema)));
        let properties = PropertyReaderImpl::new(Arc::clone(&resolver));

        log::debug!(
            "parsed {} model with {} entities",
            metadata.schema_version,
            resolver.entity_count()
        );

        Ok(Self {
            resolver,
            properties,
            schema,
            metadata,
        })
    }

    /// Get the resolver
    pub fn resolver_arc(&self) -> Arc<ResolverImpl> {
        self.resolver.clone()
    }
}

impl IfcModel for ParsedModel {
    fn resolver(&self) -> &dyn EntityResolver {
        self.resolver.as_ref()
    }

    fn properties(&self) -> &dyn PropertyReader {
        &self.properties
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}
