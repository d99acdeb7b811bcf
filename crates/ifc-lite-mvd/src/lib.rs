// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # IFC-Lite MVD
//!
//! Checks IFC models against Model View Definition requirements written as
//! natural-language sentences.
//!
//! Each sentence is matched against a [`Registry`] of patterns. The matching
//! binding's [`Check`] runs against an [`EvaluationContext`] holding the
//! loaded model, bookmarks recorded by earlier requirements and reference
//! lists read from disk.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ifc_lite_mvd::{Engine, EngineConfig};
//!
//! let mut engine = Engine::new(EngineConfig::new().with_base_dir("models"))?;
//! let verdicts = engine.run_scenario([
//!     r#"The IFC file "hospital.ifc" must be provided"#,
//!     "IFC data must use the IFC4 schema",
//!     "the project should have geolocation data",
//!     r#"the geolocated datum has an Eastings of "334000.0""#,
//! ]);
//! for verdict in &verdicts {
//!     println!("{}", serde_json::to_string(verdict)?);
//! }
//! ```
//!
//! ## Vocabulary
//!
//! [`Registry::standard`] binds the project setup, element, population,
//! property and geolocation sentences. Additional sentences are added with
//! [`Registry::bind_parse`] or [`Registry::bind_regex`] and a
//! [`Check::Custom`] handler.

pub mod access;
pub mod bookmarks;
pub mod checks;
pub mod config;
pub mod context;
pub mod error;
pub mod matcher;
pub mod pattern;
pub mod reference;
pub mod registry;

pub use access::{ElementRef, ModelAccess};
pub use bookmarks::Bookmarks;
pub use config::EngineConfig;
pub use context::EvaluationContext;
pub use error::{CheckError, ErrorCategory, Result};
pub use matcher::{Engine, Outcome, Verdict};
pub use pattern::{Dialect, Params, Pattern};
pub use reference::{CsvReferenceSource, ReferenceList, ReferenceLists, ReferenceSource};
pub use registry::{Binding, Check, Handler, Registry};
