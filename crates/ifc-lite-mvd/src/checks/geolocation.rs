// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geolocation checks
//!
//! Legacy schemas carry georeferencing in the `EPset_MapConversion` and
//! `EPset_ProjectedCRS` property sets of each site. Later schemas attach an
//! `IfcCoordinateOperation` to the model context; [`present`] bookmarks it so
//! the CRS and datum checks can read it back.

use super::display_value;
use crate::{CheckError, EvaluationContext, Result};

const MAP_CONVERSION_PSET: &str = "EPset_MapConversion";
const PROJECTED_CRS_PSET: &str = "EPset_ProjectedCRS";

/// The project carries geolocation data
pub fn present(ctx: &mut EvaluationContext) -> Result<()> {
    if ctx.is_legacy_schema()? {
        let access = ctx.access();
        for site in access.by_type("IfcSite")? {
            if access.property_set(&site, MAP_CONVERSION_PSET)?.is_none() {
                return Err(CheckError::absent(format!(
                    "The site {} has no {} property set",
                    access.describe(&site),
                    MAP_CONVERSION_PSET
                )));
            }
        }
        return Ok(());
    }

    let operation = {
        let access = ctx.access();
        let mut found = None;
        for context in access.representation_contexts()? {
            if !access.is_instance_of(&context, "IfcGeometricRepresentationContext")? {
                continue;
            }
            let context_type = access.attribute(&context, "ContextType")?.and_then(|v| v.to_text());
            if context_type.as_deref() != Some("Model") {
                continue;
            }
            if let Some(operation) = access.inverse(&context, "HasCoordinateOperation")?.first() {
                found = Some(operation.id);
                break;
            }
        }
        found
    };

    match operation {
        Some(id) => {
            let key = ctx.config().geolocation_bookmark.clone();
            ctx.bookmarks_mut().set(key, id);
            Ok(())
        }
        None => Err(CheckError::absent(
            "The project has no Model context with a coordinate operation",
        )),
    }
}

/// The geolocation uses the CRS named `expected`
pub fn crs(ctx: &EvaluationContext, expected: &str) -> Result<()> {
    let access = ctx.access();
    let mismatch = |actual: &str| {
        CheckError::mismatch(format!(
            "We expected a CRS of \"{}\" but instead got \"{}\"",
            expected, actual
        ))
    };

    if ctx.is_legacy_schema()? {
        for site in access.by_type("IfcSite")? {
            let property = access
                .property(&site, PROJECTED_CRS_PSET, "Name")?
                .ok_or_else(|| {
                    CheckError::absent(format!(
                        "The site {} has no {}.Name property",
                        access.describe(&site),
                        PROJECTED_CRS_PSET
                    ))
                })?;
            let actual = property.nominal_text();
            if actual.as_deref() != Some(expected) {
                return Err(mismatch(actual.as_deref().unwrap_or("null")));
            }
        }
        return Ok(());
    }

    let operation = ctx.bookmarked(&ctx.config().geolocation_bookmark)?;
    let target = access.follow(&operation, "TargetCRS")?.ok_or_else(|| {
        CheckError::absent(format!(
            "The coordinate operation {} has no target CRS",
            access.describe(&operation)
        ))
    })?;
    let actual = access.attribute(&target, "Name")?;
    if actual.and_then(|v| v.to_text()).as_deref() == Some(expected) {
        Ok(())
    } else {
        Err(mismatch(&display_value(actual)))
    }
}

/// The geolocated datum's `attribute` reads `expected`
pub fn datum_attribute(ctx: &EvaluationContext, attribute: &str, expected: &str) -> Result<()> {
    let access = ctx.access();
    let actual = if ctx.is_legacy_schema()? {
        let site = access
            .by_type("IfcSite")?
            .into_iter()
            .next()
            .ok_or_else(|| CheckError::absent("The model has no IfcSite"))?;
        let property = access
            .property(&site, MAP_CONVERSION_PSET, attribute)?
            .ok_or_else(|| {
                CheckError::absent(format!(
                    "The site {} has no {}.{} property",
                    access.describe(&site),
                    MAP_CONVERSION_PSET,
                    attribute
                ))
            })?;
        property.nominal_text()
    } else {
        let operation = ctx.bookmarked(&ctx.config().geolocation_bookmark)?;
        access.require_attribute(&operation, attribute)?.to_text()
    };

    let actual = actual.unwrap_or_else(|| "null".to_string());
    if actual == expected {
        Ok(())
    } else {
        Err(CheckError::mismatch(format!("The value was {}", actual)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::fixtures::{context, step};
    use crate::ErrorCategory;
    use ifc_lite_model::EntityId;

    const MODERN: &str = r#"#1=IFCPROJECT('0YvctVUKr0kugbFTf53O9L',$,'Project',$,$,$,$,(#9,#10),$);
#9=IFCGEOMETRICREPRESENTATIONCONTEXT($,'Plan',2,1.E-05,$,$);
#10=IFCGEOMETRICREPRESENTATIONCONTEXT($,'Model',3,1.E-05,$,$);
#20=IFCMAPCONVERSION(#10,#21,334000.,6250000.,12.5,1.,0.,$);
#21=IFCPROJECTEDCRS('EPSG:7856','GDA2020 / MGA zone 56','GDA2020',$,$,$,$);"#;

    const LEGACY: &str = r#"#1=IFCPROJECT('0YvctVUKr0kugbFTf53O9L',$,'Project',$,$,$,$,$,$);
#2=IFCSITE('1Xb0T0NVD3Ax3Gt6YPvAB1',$,'Site',$,$,$,$,$,.ELEMENT.,$,$,$,$,$);
#30=IFCPROPERTYSET('2Rk8P$6qP1uBgd0Lx_c0a6',$,'EPset_MapConversion',$,(#31));
#31=IFCPROPERTYSINGLEVALUE('Eastings',$,IFCLENGTHMEASURE(334000.),$);
#32=IFCPROPERTYSET('3Kf0Ws8m96sgFEqbSVvPqE',$,'EPset_ProjectedCRS',$,(#33));
#33=IFCPROPERTYSINGLEVALUE('Name',$,IFCLABEL('EPSG:7856'),$);
#34=IFCRELDEFINESBYPROPERTIES('0w3LFfKSz4Ax5Kw9bYrsN_',$,$,$,(#2),#30);
#35=IFCRELDEFINESBYPROPERTIES('1kTvXnbbzCWw8lcMd1dR4o',$,$,$,(#2),#32);"#;

    #[test]
    fn test_modern_geolocation_bookmarks_operation() {
        let mut ctx = context(&step("IFC4", MODERN));
        present(&mut ctx).unwrap();
        assert_eq!(ctx.bookmarks().get("geolocation").unwrap(), EntityId(20));

        assert!(crs(&ctx, "EPSG:7856").is_ok());
        let err = crs(&ctx, "EPSG:28356").unwrap_err();
        assert_eq!(err.to_string(), "We expected a CRS of \"EPSG:28356\" but instead got \"EPSG:7856\"");

        assert!(datum_attribute(&ctx, "Eastings", "334000.0").is_ok());
        assert!(datum_attribute(&ctx, "OrthogonalHeight", "12.5").is_ok());
        let err = datum_attribute(&ctx, "Northings", "0.0").unwrap_err();
        assert_eq!(err.to_string(), "The value was 6250000.0");
        assert_eq!(datum_attribute(&ctx, "Scale", "1.0").unwrap_err().to_string(), "The value was null");
    }

    #[test]
    fn test_modern_without_operation() {
        let data = MODERN.replace("#20=IFCMAPCONVERSION(#10,", "#20=IFCMAPCONVERSION(#9,");
        let mut ctx = context(&step("IFC4", &data));
        assert_eq!(present(&mut ctx).unwrap_err().category(), ErrorCategory::AbsentValue);
        assert!(ctx.bookmarks().is_empty());
    }

    #[test]
    fn test_datum_without_bookmark() {
        let ctx = context(&step("IFC4", MODERN));
        assert!(matches!(
            datum_attribute(&ctx, "Eastings", "334000.0"),
            Err(CheckError::BookmarkMissing(ref key)) if key == "geolocation"
        ));
        assert!(matches!(crs(&ctx, "EPSG:7856"), Err(CheckError::BookmarkMissing(_))));
    }

    #[test]
    fn test_legacy_geolocation() {
        let mut ctx = context(&step("IFC2X3", LEGACY));
        present(&mut ctx).unwrap();
        assert!(ctx.bookmarks().is_empty());
        assert!(crs(&ctx, "EPSG:7856").is_ok());
        assert!(crs(&ctx, "EPSG:28356").is_err());
        assert!(datum_attribute(&ctx, "Eastings", "334000.0").is_ok());
        assert!(datum_attribute(&ctx, "Northings", "1.0").is_err());
    }

    #[test]
    fn test_legacy_site_without_map_conversion() {
        let data = LEGACY.replace("(#2),#30", "(#1),#30");
        let mut ctx = context(&step("IFC2X3", &data));
        let err = present(&mut ctx).unwrap_err();
        assert!(err.to_string().contains("EPset_MapConversion"));
    }
}
