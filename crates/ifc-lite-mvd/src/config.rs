// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Engine configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings shared by every requirement evaluated in a run
///
/// All fields have defaults, so an empty JSON object is a valid configuration.
///
/// ```ignore
/// let config = EngineConfig::from_json(r#"{ "base_dir": "models" }"#)?
///     .with_cache_reference_lists(true);
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Schemas whose geolocation lives in `EPset_MapConversion` / `EPset_ProjectedCRS`
    pub legacy_schemas: Vec<String>,
    /// Bookmark key written by the geolocation check
    pub geolocation_bookmark: String,
    /// Directory that relative model and list locators are resolved against
    pub base_dir: Option<PathBuf>,
    /// Keep parsed reference lists for the lifetime of the loaded model
    pub cache_reference_lists: bool,
    /// Schema tables for files whose FILE_SCHEMA is not supported
    pub fallback_schema: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            legacy_schemas: vec!["IFC2X3".to_string()],
            geolocation_bookmark: "geolocation".to_string(),
            base_dir: None,
            cache_reference_lists: false,
            fallback_schema: None,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON text
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Read a JSON configuration file
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content).map_err(std::io::Error::other)
    }

    /// Set the schemas treated as legacy for geolocation
    pub fn with_legacy_schemas<I, S>(mut self, schemas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.legacy_schemas = schemas.into_iter().map(Into::into).collect();
        self
    }

    /// Set the geolocation bookmark key
    pub fn with_geolocation_bookmark(mut self, key: impl Into<String>) -> Self {
        self.geolocation_bookmark = key.into();
        self
    }

    /// Set the base directory for relative locators
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Set whether reference lists are cached
    pub fn with_cache_reference_lists(mut self, enabled: bool) -> Self {
        self.cache_reference_lists = enabled;
        self
    }

    /// Set the fallback schema for unsupported FILE_SCHEMA identifiers
    pub fn with_fallback_schema(mut self, schema: impl Into<String>) -> Self {
        self.fallback_schema = Some(schema.into());
        self
    }

    /// Whether a schema identifier takes the legacy geolocation branch
    pub fn is_legacy_schema(&self, identifier: &str) -> bool {
        self.legacy_schemas
            .iter()
            .any(|legacy| legacy.eq_ignore_ascii_case(identifier.trim()))
    }

    /// Resolve a locator against `base_dir`
    pub fn resolve(&self, locator: &str) -> PathBuf {
        let path = Path::new(locator);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}
