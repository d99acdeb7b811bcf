// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Built-in requirement checks
//!
//! Every check has the same shape: resolve what the requirement names
//! through the [`EvaluationContext`], compare, and return the first failure.
//! The typed functions can be called directly; [`run`] unpacks captured
//! sentence parameters for them.

pub mod element;
pub mod geolocation;
pub mod population;
pub mod project;

use crate::pattern::Params;
use crate::registry::Check;
use crate::{CheckError, EvaluationContext, Result};
use ifc_lite_model::AttributeValue;
use regex::Regex;

/// Evaluate `check` with parameters captured from a sentence
pub fn run(check: &Check, ctx: &mut EvaluationContext, params: &Params) -> Result<()> {
    match check {
        Check::LoadModel => project::load_model(ctx, params.get("file")?),
        Check::Pass => Ok(()),
        Check::Schema => project::schema(ctx, params.get("schema")?),
        Check::ProjectAttribute(attribute) => {
            project::project_attribute(ctx, attribute, params.get("value")?)
        }
        Check::ProjectNamedAttribute => project::project_attribute(
            ctx,
            params.get("attribute_name")?,
            params.get("attribute_value")?,
        ),
        Check::SubContext {
            identifier,
            context_type,
            target_view,
        } => project::sub_context(ctx, identifier, context_type, target_view),
        Check::ElementIsExactly => {
            element::is_exactly(ctx, params.get("id")?, params.get("ifc_class")?)
        }
        Check::ElementIsA => element::is_a(ctx, params.get("id")?, params.get("ifc_class")?),
        Check::ElementPredefinedType => {
            element::predefined_type(ctx, params.get("id")?, params.get("predefined_type")?)
        }
        Check::ElementAbsent => element::must_not_exist(ctx, params.get("id")?),
        Check::TypeExists => population::type_exists(ctx, params.get("ifc_class")?),
        Check::TypeAbsent => population::type_absent(ctx, params.get("ifc_class")?),
        Check::NamePattern => {
            population::name_pattern(ctx, params.get("ifc_class")?, params.get("pattern")?)
        }
        Check::RepresentationKind => population::representation_kind(
            ctx,
            params.get("ifc_class")?,
            params.get("representation_class")?,
        ),
        Check::AttributePresent => {
            population::attribute_present(ctx, params.get("ifc_class")?, params.get("attribute")?)
        }
        Check::PropertyPresent => population::property_present(
            ctx,
            params.get("ifc_class")?,
            params.get("property_path")?,
        ),
        Check::PropertyValuePattern => population::property_value_pattern(
            ctx,
            params.get("ifc_class")?,
            params.get("property_path")?,
            params.get("pattern")?,
        ),
        Check::AttributePattern => population::attribute_pattern(
            ctx,
            params.get("ifc_class")?,
            params.get("attribute")?,
            params.get("pattern")?,
        ),
        Check::ReferenceList => population::reference_list(
            ctx,
            params.get("ifc_class")?,
            params.get("attributes")?,
            params.get("list_file")?,
        ),
        Check::QuantityPresent => population::quantity_present(
            ctx,
            params.get("ifc_class")?,
            params.get("qto_name")?,
            params.get("quantity_name")?,
        ),
        Check::GeolocationPresent => geolocation::present(ctx),
        Check::GeolocationCrs => geolocation::crs(ctx, params.get("crs_name")?),
        Check::DatumAttribute => {
            geolocation::datum_attribute(ctx, params.get("attribute")?, params.get("value")?)
        }
        Check::AnyAttributeEquals => population::any_attribute_equals(
            ctx,
            params.get("ifc_class")?,
            params.get("attribute_name")?,
            params.get("attribute_value")?,
        ),
        Check::BuildingsHaveAddress => population::buildings_have_address(ctx),
        Check::Custom(handler) => handler(ctx, params),
    }
}

/// Compile a pattern taken from a requirement (unanchored search)
pub(crate) fn search_regex(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| CheckError::invalid_pattern(pattern, e))
}

/// Diagnostic form of an optional value
pub(crate) fn display_value(value: Option<&AttributeValue>) -> String {
    value
        .and_then(|v| v.to_text())
        .unwrap_or_else(|| "null".to_string())
}

/// Split `Pset_Name.PropertyName`
pub(crate) fn split_path(path: &str) -> Result<(&str, &str)> {
    path.split_once('.')
        .filter(|(set, name)| !set.is_empty() && !name.is_empty() && !name.contains('.'))
        .ok_or_else(|| CheckError::invalid_pattern(path, "expected <set>.<name>"))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::EvaluationContext;
    use ifc_lite_model::IfcParser;
    use ifc_lite_parser::StepParser;

    /// Context with `content` as its active model
    pub fn context(content: &str) -> EvaluationContext {
        let mut ctx = EvaluationContext::default();
        ctx.set_model(StepParser::new().parse(content).unwrap());
        ctx
    }

    /// Wrap DATA records into a file for `schema`
    pub fn step(schema: &str, data: &str) -> String {
        format!(
            "ISO-10303-21;\nHEADER;\nFILE_DESCRIPTION(('ViewDefinition [ReferenceView]'),'2;1');\nFILE_SCHEMA(('{}'));\nENDSEC;\nDATA;\n{}\nENDSEC;\nEND-ISO-10303-21;\n",
            schema, data
        )
    }
}
