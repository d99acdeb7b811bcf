// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Checks on single elements named by id or GlobalId

use super::display_value;
use crate::access::ElementRef;
use crate::{CheckError, EvaluationContext, Result};
use ifc_lite_model::DecodedEntity;
use std::sync::Arc;

/// Object type that lets a user-defined element pass the predefined type check
const USERDEFINED_OBJECT_TYPE: &str = "predefined_type";

fn lookup(ctx: &EvaluationContext, token: &str) -> Result<Arc<DecodedEntity>> {
    let element = match token.parse::<ElementRef>() {
        Ok(element) => element,
        Err(never) => match never {},
    };
    ctx.access().by_ref(&element)
}

fn wrong_type(ctx: &EvaluationContext, entity: &DecodedEntity, class: &str) -> Result<CheckError> {
    let access = ctx.access();
    Ok(CheckError::mismatch(format!(
        "The element {} is an {} instead of {}.",
        access.describe(entity),
        access.type_name(entity)?,
        class
    )))
}

/// Element `id` has exactly the type `class`
pub fn is_exactly(ctx: &EvaluationContext, id: &str, class: &str) -> Result<()> {
    let entity = lookup(ctx, id)?;
    if entity.ifc_type.is(class) {
        Ok(())
    } else {
        Err(wrong_type(ctx, &entity, class)?)
    }
}

/// Element `id` is a `class` or one of its subtypes
pub fn is_a(ctx: &EvaluationContext, id: &str, class: &str) -> Result<()> {
    let entity = lookup(ctx, id)?;
    if ctx.access().is_instance_of(&entity, class)? {
        Ok(())
    } else {
        Err(wrong_type(ctx, &entity, class)?)
    }
}

/// Element `id` has the predefined type `expected`
pub fn predefined_type(ctx: &EvaluationContext, id: &str, expected: &str) -> Result<()> {
    let access = ctx.access();
    let entity = lookup(ctx, id)?;
    let predefined = access.attribute(&entity, "PredefinedType")?;
    let object_type = access.attribute(&entity, "ObjectType")?;

    let predefined_text = predefined.and_then(|v| v.to_text());
    if predefined_text.as_deref() == Some(expected) {
        return Ok(());
    }
    if predefined_text.as_deref() == Some("USERDEFINED")
        && object_type.and_then(|v| v.to_text()).as_deref() == Some(USERDEFINED_OBJECT_TYPE)
    {
        return Ok(());
    }

    Err(CheckError::mismatch(format!(
        "The element {} has a predefined type of {} and an object type of {} instead of {}.",
        access.describe(&entity),
        display_value(predefined),
        display_value(object_type),
        expected
    )))
}

/// Element `id` is not in the model
pub fn must_not_exist(ctx: &EvaluationContext, id: &str) -> Result<()> {
    match lookup(ctx, id) {
        Ok(entity) => Err(CheckError::mismatch(format!(
            "This element {} should be reevaluated.",
            ctx.access().describe(&entity)
        ))),
        Err(CheckError::NotFound(_)) => Ok(()),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::fixtures::{context, step};
    use crate::ErrorCategory;

    const DATA: &str = r#"#1=IFCPROJECT('0YvctVUKr0kugbFTf53O9L',$,'Project',$,$,$,$,$,$);
#2=IFCWALLSTANDARDCASE('2O2Fr$t4X7Zf8NOew3FLOH',$,'W-01',$,$,$,$,$,.SHEAR.);
#3=IFCSLAB('1kTvXnbbzCWw8lcMd1dR4o',$,'S-01',$,'predefined_type',$,$,$,.USERDEFINED.);
#4=IFCSLAB('3vB2YO$MX4xv5uCqZZG05x',$,'S-02',$,'Landing',$,$,$,.USERDEFINED.);"#;

    #[test]
    fn test_exact_type() {
        let ctx = context(&step("IFC4", DATA));
        assert!(is_exactly(&ctx, "2", "IfcWallStandardCase").is_ok());
        assert!(is_exactly(&ctx, "#2", "IFCWALLSTANDARDCASE").is_ok());

        let err = is_exactly(&ctx, "2", "IfcWall").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Mismatch);
        assert_eq!(
            err.to_string(),
            "The element #2=IfcWallStandardCase('2O2Fr$t4X7Zf8NOew3FLOH') is an IfcWallStandardCase instead of IfcWall."
        );
    }

    #[test]
    fn test_exact_and_polymorphic_disagree_on_subtypes() {
        let ctx = context(&step("IFC4", DATA));
        assert!(is_exactly(&ctx, "2", "IfcWall").is_err());
        assert!(is_a(&ctx, "2", "IfcWall").is_ok());
        assert!(is_a(&ctx, "2O2Fr$t4X7Zf8NOew3FLOH", "IfcBuildingElement").is_ok());
        assert!(is_a(&ctx, "2", "IfcSlab").is_err());
    }

    #[test]
    fn test_missing_element() {
        let ctx = context(&step("IFC4", DATA));
        let err = is_a(&ctx, "99", "IfcWall").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.to_string(), "The element with #99 could not be found.");
    }

    #[test]
    fn test_predefined_type() {
        let ctx = context(&step("IFC4", DATA));
        assert!(predefined_type(&ctx, "2", "SHEAR").is_ok());
        assert!(predefined_type(&ctx, "3", "LANDING").is_ok());

        let err = predefined_type(&ctx, "4", "LANDING").unwrap_err();
        assert_eq!(
            err.to_string(),
            "The element #4=IfcSlab('3vB2YO$MX4xv5uCqZZG05x') has a predefined type of USERDEFINED and an object type of Landing instead of LANDING."
        );
        assert!(predefined_type(&ctx, "2", "PARTITIONING").is_err());
    }

    #[test]
    fn test_must_not_exist() {
        let ctx = context(&step("IFC4", DATA));
        assert!(must_not_exist(&ctx, "42").is_ok());
        assert!(must_not_exist(&ctx, "0000000000000000000000").is_ok());

        let err = must_not_exist(&ctx, "2").unwrap_err();
        assert_eq!(
            err.to_string(),
            "This element #2=IfcWallStandardCase('2O2Fr$t4X7Zf8NOew3FLOH') should be reevaluated."
        );

        let unloaded = EvaluationContext::default();
        assert!(matches!(must_not_exist(&unloaded, "2"), Err(CheckError::NotLoaded)));
    }

    #[test]
    fn test_checks_are_idempotent() {
        let ctx = context(&step("IFC4", DATA));
        let first = is_a(&ctx, "2", "IfcSlab").unwrap_err().to_string();
        let second = is_a(&ctx, "2", "IfcSlab").unwrap_err().to_string();
        assert_eq!(first, second);
    }
}
