// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Requirement vocabulary
//!
//! A [`Registry`] is an ordered table of [`Binding`]s, each pairing a
//! [`Pattern`] with the [`Check`] it triggers. Resolution takes the first
//! binding whose pattern matches the whole sentence.

use crate::pattern::{Params, Pattern};
use crate::{CheckError, EvaluationContext, Result};

/// Handler signature for vocabulary outside the built-in checks
pub type Handler = fn(&mut EvaluationContext, &Params) -> Result<()>;

/// What a binding evaluates
#[derive(Clone, Copy, Debug)]
pub enum Check {
    /// Load the model named by `{file}`
    LoadModel,
    /// Always passes (exemptions and explanatory sentences)
    Pass,
    /// Schema identifier equals `{schema}`
    Schema,
    /// Fixed project attribute equals `{value}`
    ProjectAttribute(&'static str),
    /// Project attribute `{attribute_name}` equals `{attribute_value}`
    ProjectNamedAttribute,
    /// A project sub-context with the given identifier, type and target view exists
    SubContext {
        /// ContextIdentifier
        identifier: &'static str,
        /// ContextType
        context_type: &'static str,
        /// TargetView
        target_view: &'static str,
    },
    /// Element `{id}` has exactly type `{ifc_class}`
    ElementIsExactly,
    /// Element `{id}` is an instance of `{ifc_class}`
    ElementIsA,
    /// Element `{id}` has predefined type `{predefined_type}`
    ElementPredefinedType,
    /// Element `{id}` does not exist
    ElementAbsent,
    /// At least one `{ifc_class}` exists
    TypeExists,
    /// No `{ifc_class}` exists
    TypeAbsent,
    /// Every `{ifc_class}` name matches `{pattern}`
    NamePattern,
    /// Every represented `{ifc_class}` has a `{representation_class}` item
    RepresentationKind,
    /// Every `{ifc_class}` has a value for `{attribute}`
    AttributePresent,
    /// Every `{ifc_class}` has property `{property_path}`
    PropertyPresent,
    /// Every `{ifc_class}` has property `{property_path}` matching `{pattern}`
    PropertyValuePattern,
    /// Every `{ifc_class}` attribute `{attribute}` matches `{pattern}`
    AttributePattern,
    /// Every `{ifc_class}` attribute tuple `{attributes}` is listed in `{list_file}`
    ReferenceList,
    /// Every `{ifc_class}` has quantity `{qto_name}.{quantity_name}`
    QuantityPresent,
    /// The project is geolocated
    GeolocationPresent,
    /// The geolocation uses CRS `{crs_name}`
    GeolocationCrs,
    /// The geolocated datum attribute `{attribute}` reads `{value}`
    DatumAttribute,
    /// Some `{ifc_class}` has `{attribute_name}` equal to `{attribute_value}`
    AnyAttributeEquals,
    /// Every building has an address
    BuildingsHaveAddress,
    /// User supplied handler
    Custom(Handler),
}

/// A pattern bound to a check
#[derive(Clone, Debug)]
pub struct Binding {
    /// Sentence pattern
    pub pattern: Pattern,
    /// Check triggered by the pattern
    pub check: Check,
}

/// Ordered requirement vocabulary
#[derive(Clone, Debug, Default)]
pub struct Registry {
    bindings: Vec<Binding>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a binding
    pub fn bind(&mut self, pattern: Pattern, check: Check) -> &mut Self {
        self.bindings.push(Binding { pattern, check });
        self
    }

    /// Append a parse-dialect binding
    pub fn bind_parse(&mut self, pattern: &str, check: Check) -> Result<&mut Self> {
        Ok(self.bind(Pattern::parse(pattern)?, check))
    }

    /// Append a regex-dialect binding
    pub fn bind_regex(&mut self, pattern: &str, check: Check) -> Result<&mut Self> {
        Ok(self.bind(Pattern::regex(pattern)?, check))
    }

    /// Bindings in resolution order
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// First binding matching `sentence` with its parameters
    pub fn resolve(&self, sentence: &str) -> Result<(&Binding, Params)> {
        let sentence = sentence.trim();
        self.bindings
            .iter()
            .find_map(|binding| binding.pattern.captures(sentence).map(|p| (binding, p)))
            .ok_or_else(|| CheckError::Undefined(sentence.to_string()))
    }

    /// Indices of every binding matching `sentence`
    pub fn matching(&self, sentence: &str) -> Vec<usize> {
        let sentence = sentence.trim();
        self.bindings
            .iter()
            .enumerate()
            .filter(|(_, binding)| binding.pattern.is_match(sentence))
            .map(|(index, _)| index)
            .collect()
    }

    /// The Model View Definition vocabulary
    pub fn standard() -> Result<Self> {
        let mut registry = Self::new();

        // Project setup
        registry
            .bind_parse(r#"The IFC file "{file}" must be provided"#, Check::LoadModel)?
            .bind_parse(r#"The IFC file "{file}" is exempt from being provided"#, Check::Pass)?
            .bind_parse("No further requirements are specified because {reason}", Check::Pass)?
            .bind_parse("IFC data must use the {schema:S} schema", Check::Schema)?
            .bind_parse(
                r#"The project name, code, or short identifier must be "{value}""#,
                Check::ProjectAttribute("Name"),
            )?
            .bind_parse(
                r#"The project must have a longer form name of "{value}""#,
                Check::ProjectAttribute("LongName"),
            )?
            .bind_parse(
                r#"The project must be described as "{value}""#,
                Check::ProjectAttribute("Description"),
            )?
            .bind_parse(
                r#"The project must be categorised under "{value}""#,
                Check::ProjectAttribute("ObjectType"),
            )?
            .bind_parse(
                r#"The project must contain information about the "{value}" phase"#,
                Check::ProjectAttribute("Phase"),
            )?;

        for (sentence, identifier) in [
            ("the shape of objects", "Body"),
            ("clearance zones", "Clearance"),
            ("the center of gravity of objects", "CoG"),
            ("the object bounding boxes", "Box"),
        ] {
            registry.bind_parse(
                &format!("The project must contain 3D geometry representing {}", sentence),
                Check::SubContext {
                    identifier,
                    context_type: "Model",
                    target_view: "MODEL_VIEW",
                },
            )?;
        }

        // Elements
        registry
            .bind_parse("The element {id:S} is an {ifc_class:w} only", Check::ElementIsExactly)?
            .bind_parse("The element {id:S} is an {ifc_class:w}", Check::ElementIsA)?
            .bind_parse(
                "The element {id:S} is further defined as a {predefined_type:w}",
                Check::ElementPredefinedType,
            )?
            .bind_parse("The element {id:S} should not exist because {reason}", Check::ElementAbsent)?
            .bind_parse("there is at least one {ifc_class:w} element", Check::TypeExists)?
            .bind_parse("there are no {ifc_class:w} elements because {reason}", Check::TypeAbsent)?
            .bind_parse(
                r#"all {ifc_class:w} elements have a name matching the pattern "{pattern}""#,
                Check::NamePattern,
            )?
            .bind_parse(
                "all {ifc_class:w} elements have an {representation_class:S} representation",
                Check::RepresentationKind,
            )?;

        // Attributes and properties
        registry
            .bind_regex(
                r"all (?P<ifc_class>\w+) elements have an? (?P<attribute>[A-Z]\w*) attribute",
                Check::AttributePresent,
            )?
            .bind_regex(
                r"all (?P<ifc_class>\w+) elements have an? (?P<property_path>\w+\.\w+) property",
                Check::PropertyPresent,
            )?
            .bind_regex(
                r#"all (?P<ifc_class>\w+) elements have an? (?P<property_path>\w+\.\w+) property value matching the pattern "(?P<pattern>.*)""#,
                Check::PropertyValuePattern,
            )?
            .bind_regex(
                r#"all (?P<ifc_class>\w+) elements have an? (?P<attribute>[A-Z]\w*) matching the pattern "(?P<pattern>.*)""#,
                Check::AttributePattern,
            )?
            .bind_regex(
                r#"all (?P<ifc_class>\w+) elements have an? (?P<attributes>[A-Z]\w*(?:,\s*[A-Z]\w*)*) taken from the list in "(?P<list_file>.*)""#,
                Check::ReferenceList,
            )?
            .bind_parse(
                "all {ifc_class:w} elements have a {qto_name:w}.{quantity_name:w} quantity",
                Check::QuantityPresent,
            )?;

        // Geolocation
        registry
            .bind_parse("the project should have geolocation data", Check::GeolocationPresent)?
            .bind_parse(r#"the project geolocation uses the "{crs_name}" CRS"#, Check::GeolocationCrs)?
            .bind_regex(
                r#"the geolocated datum has an? (?P<attribute>[A-Z]\w*) of "(?P<value>.*)""#,
                Check::DatumAttribute,
            )?;

        // Generic attribute values
        registry
            .bind_parse(
                r#"the project has a {attribute_name:w} attribute with a value of "{attribute_value}""#,
                Check::ProjectNamedAttribute,
            )?
            .bind_parse(
                r#"there is an {ifc_class:w} element with a {attribute_name:w} attribute with a value of "{attribute_value}""#,
                Check::AnyAttributeEquals,
            )?
            .bind_parse("all buildings have an address", Check::BuildingsHaveAddress)?;

        Ok(registry)
    }
}
