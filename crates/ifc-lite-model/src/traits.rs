// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core traits for IFC parsing
//!
//! These traits define the main abstractions for working with IFC data.

use crate::{EntityResolver, ModelMetadata, PropertyReader, Result, Schema};
use std::path::Path;
use std::sync::Arc;

/// Main parsing interface - entry point for parsing IFC content
///
/// Implementations of this trait provide the ability to parse IFC file content
/// and return a model that can be queried through various trait interfaces.
///
/// # Example
///
/// ```ignore
/// use ifc_lite_model::{IfcParser, IfcModel};
///
/// let model = parser.parse(ifc_content)?;
/// println!("Schema: {}", model.metadata().schema_version);
/// ```
pub trait IfcParser: Send + Sync {
    /// Parse IFC content and return a model
    ///
    /// # Arguments
    /// * `content` - The IFC file content as a string
    ///
    /// # Returns
    /// An `Arc<dyn IfcModel>` on success, or a `ParseError` on failure
    fn parse(&self, content: &str) -> Result<Arc<dyn IfcModel>>;

    /// Read and parse an IFC file from disk
    ///
    /// Content that is not valid UTF-8 is read as ISO-8859-1.
    fn open(&self, path: &Path) -> Result<Arc<dyn IfcModel>> {
        let bytes = std::fs::read(path)?;
        self.parse(&decode_step_bytes(bytes))
    }
}

/// Decode STEP file bytes, falling back to ISO-8859-1 for non UTF-8 exports
pub fn decode_step_bytes(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(err) => err.into_bytes().into_iter().map(char::from).collect(),
    }
}

/// Core model interface - read-only access to a parsed IFC model
///
/// The model is thread-safe (`Send + Sync`) so a loaded model can be shared
/// freely; it is never mutated after parsing.
pub trait IfcModel: Send + Sync {
    /// Get entity resolver for entity lookups and reference resolution
    fn resolver(&self) -> &dyn EntityResolver;

    /// Get property reader for accessing property sets and quantities
    fn properties(&self) -> &dyn PropertyReader;

    /// Schema tables matching the file's FILE_SCHEMA
    fn schema(&self) -> &Schema;

    /// Get file metadata (schema version, originating system, etc.)
    fn metadata(&self) -> &ModelMetadata;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode_step_bytes("Geb\u{e4}ude".as_bytes().to_vec()), "Geb\u{e4}ude");
    }

    #[test]
    fn test_decode_latin1() {
        let bytes = b"#1=IFCWALL('x',$,'Geb\xe4ude');".to_vec();
        assert_eq!(decode_step_bytes(bytes), "#1=IFCWALL('x',$,'Geb\u{e4}ude');");
    }
}
