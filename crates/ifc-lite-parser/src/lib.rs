// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC-Lite Parser - STEP parser for IFC models
//!
//! This crate provides a fast, memory-efficient parser for IFC (STEP) files.
//! It implements the traits defined in `ifc-lite-model` for a clean abstraction.
//!
//! # Features
//!
//! - **Fast tokenization** using `nom` combinators
//! - **SIMD-accelerated scanning** using `memchr`
//! - **Lazy entity decoding** - only parse entities when needed
//! - **Inverse relationships** computed once from the schema tables
//!
//! # Example
//!
//! ```ignore
//! use ifc_lite_parser::StepParser;
//! use ifc_lite_model::IfcParser;
//!
//! let parser = StepParser::new();
//! let model = parser.parse(ifc_content)?;
//!
//! let walls = model.resolver().instances_of("IfcWall");
//! println!("Found {} walls", walls.len());
//! ```

mod model;
mod properties;
mod resolver;
mod scanner;
mod tokenizer;

pub use model::ParsedModel;
pub use properties::PropertyReaderImpl;
pub use resolver::ResolverImpl;
pub use scanner::{parse_header, EntityScanner};
pub use tokenizer::{decode_string, parse_entity, Token};

use ifc_lite_model::{IfcModel, IfcParser, Result};
use std::sync::Arc;

/// Main STEP/IFC parser implementing `IfcParser` trait
///
/// This is the entry point for parsing IFC files. It creates a `ParsedModel`
/// that provides access to all IFC data through the trait interfaces.
#[derive(Clone, Debug, Default)]
pub struct StepParser {
    /// Schema tables to use when FILE_SCHEMA names an unsupported schema
    pub fallback_schema: Option<String>,
}

impl StepParser {
    /// Create a new parser with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Read files with unsupported schemas using the given schema's tables
    pub fn with_fallback_schema(mut self, schema: impl Into<String>) -> Self {
        self.fallback_schema = Some(schema.into());
        self
    }
}

impl IfcParser for StepParser {
    fn parse(&self, content: &str) -> Result<Arc<dyn IfcModel>> {
        ParsedModel::parse(content, self.fallback_schema.as_deref())
            .map(|m| Arc::new(m) as Arc<dyn IfcModel>)
    }
}

/// Quick parse function for simple use cases
pub fn parse(content: &str) -> Result<Arc<dyn IfcModel>> {
    StepParser::new().parse(content)
}
