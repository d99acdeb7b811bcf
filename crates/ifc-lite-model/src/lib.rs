// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC-Lite Model - Shared types, schema tables and traits for IFC models
//!
//! This crate provides the core abstractions for reading IFC (Industry Foundation Classes)
//! models. It defines traits that parser backends implement, so that consumers such as
//! the model-view-definition checker work with IFC data in a backend-agnostic way.
//!
//! # Architecture
//!
//! - [`IfcParser`] - Entry point for parsing IFC content
//! - [`IfcModel`] - Read-only access to a parsed IFC model
//! - [`EntityResolver`] - Entity lookup, type queries and inverse relationships
//! - [`PropertyReader`] - Access to property sets and quantity sets
//! - [`Schema`] - Entity hierarchy and named attribute layout
//!
//! # Example
//!
//! ```ignore
//! use ifc_lite_model::{IfcParser, IfcModel};
//!
//! let model = parser.parse(ifc_content)?;
//! for wall in model.resolver().instances_of("IfcWall") {
//!     let name = model.schema().attribute(&wall, "Name");
//!     println!("{}: {:?}", wall, name);
//! }
//! ```

pub mod error;
pub mod properties;
pub mod resolver;
pub mod schema;
pub mod traits;
pub mod types;

// Re-export all public types
pub use error::*;
pub use properties::*;
pub use resolver::*;
pub use schema::*;
pub use traits::*;
pub use types::*;
