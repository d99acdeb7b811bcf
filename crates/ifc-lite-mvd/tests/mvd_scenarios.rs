// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Whole scenarios evaluated against models written to disk

use ifc_lite_mvd::{Engine, EngineConfig, ErrorCategory, Outcome, Verdict};
use tempfile::TempDir;

const HOSPITAL: &str = r#"ISO-10303-21;
HEADER;
FILE_DESCRIPTION(('ViewDefinition [ReferenceView_V1.2]'),'2;1');
FILE_NAME('hospital.ifc','2024-05-01T09:30:00',('Architect'),('Studio'),'ifc-lite','ifc-lite','');
FILE_SCHEMA(('IFC4'));
ENDSEC;
DATA;
#1=IFCPROJECT('0YvctVUKr0kugbFTf53O9L',$,'P-001','Stage 2 model','Healthcare','Hospital Extension','Design',(#10),$);
#10=IFCGEOMETRICREPRESENTATIONCONTEXT($,'Model',3,1.E-05,$,$);
#11=IFCGEOMETRICREPRESENTATIONSUBCONTEXT('Body','Model',*,*,*,*,#10,$,.MODEL_VIEW.,$);
#12=IFCGEOMETRICREPRESENTATIONSUBCONTEXT('Box','Model',*,*,*,*,#10,$,.MODEL_VIEW.,$);
#20=IFCMAPCONVERSION(#10,#21,334000.,6250000.,12.5,1.,0.,$);
#21=IFCPROJECTEDCRS('EPSG:7856','GDA2020 / MGA zone 56','GDA2020',$,$,$,$);
#30=IFCSITE('1Xb0T0NVD3Ax3Gt6YPvAB1',$,'Site',$,$,$,$,$,.ELEMENT.,$,$,$,$,$);
#31=IFCBUILDING('0yf_M5JZv9QQXly4dq_zvI',$,'Main',$,$,$,$,$,.ELEMENT.,$,$,#32);
#32=IFCPOSTALADDRESS($,$,$,$,('1 Main St'),$,'Town',$,'1000','AU');
#40=IFCWALLSTANDARDCASE('2O2Fr$t4X7Zf8NOew3FLOH',$,'W-01',$,$,$,$,'A',.SOLIDWALL.);
#41=IFCWALL('3vB2YO$MX4xv5uCqZZG05x',$,'W-02',$,$,$,$,'B',.PARTITIONING.);
#42=IFCSLAB('1kTvXnbbzCWw8lcMd1dR4o',$,'S-01',$,'predefined_type',$,$,$,.USERDEFINED.);
#50=IFCPROPERTYSET('2Rk8P$6qP1uBgd0Lx_c0a6',$,'Pset_WallCommon',$,(#51));
#51=IFCPROPERTYSINGLEVALUE('FireRating',$,IFCLABEL('EI60'),$);
#52=IFCRELDEFINESBYPROPERTIES('3Kf0Ws8m96sgFEqbSVvPqE',$,$,$,(#40,#41),#50);
#53=IFCELEMENTQUANTITY('0w3LFfKSz4Ax5Kw9bYrsN_',$,'Qto_WallBaseQuantities',$,$,(#54));
#54=IFCQUANTITYLENGTH('Length',$,$,4500.,$);
#55=IFCRELDEFINESBYPROPERTIES('1hqIFTRjfV6AWq_bMtnZwI',$,$,$,(#40,#41),#53);
ENDSEC;
END-ISO-10303-21;
"#;

const LEGACY: &str = r#"ISO-10303-21;
HEADER;
FILE_DESCRIPTION(('ViewDefinition [CoordinationView_V2.0]'),'2;1');
FILE_NAME('legacy.ifc','2019-01-01T00:00:00',(''),(''),'','','');
FILE_SCHEMA(('IFC2X3'));
ENDSEC;
DATA;
#1=IFCPROJECT('0YvctVUKr0kugbFTf53O9L',$,'Legacy',$,$,$,$,$,$);
#2=IFCSITE('1Xb0T0NVD3Ax3Gt6YPvAB1',$,'Site',$,$,$,$,$,.ELEMENT.,$,$,$,$,$);
#30=IFCPROPERTYSET('2Rk8P$6qP1uBgd0Lx_c0a6',$,'EPset_MapConversion',$,(#31,#32));
#31=IFCPROPERTYSINGLEVALUE('Eastings',$,IFCLENGTHMEASURE(334000.),$);
#32=IFCPROPERTYSINGLEVALUE('Scale',$,IFCREAL(1.),$);
#33=IFCPROPERTYSET('3Kf0Ws8m96sgFEqbSVvPqE',$,'EPset_ProjectedCRS',$,(#34));
#34=IFCPROPERTYSINGLEVALUE('Name',$,IFCLABEL('EPSG:7856'),$);
#35=IFCRELDEFINESBYPROPERTIES('0w3LFfKSz4Ax5Kw9bYrsN_',$,$,$,(#2),#30);
#36=IFCRELDEFINESBYPROPERTIES('1kTvXnbbzCWw8lcMd1dR4o',$,$,$,(#2),#33);
ENDSEC;
END-ISO-10303-21;
"#;

const FOUNDATIONS: &str = r#"ISO-10303-21;
HEADER;
FILE_DESCRIPTION(('ViewDefinition [ReferenceView_V1.2]'),'2;1');
FILE_NAME('foundations.ifc','2024-05-01T09:30:00',(''),(''),'','','');
FILE_SCHEMA(('IFC4'));
ENDSEC;
DATA;
#1=IFCPROJECT('0YvctVUKr0kugbFTf53O9L',$,'P-002',$,$,$,$,$,$);
#2=IFCFOOTING('0FtgZ7x9v3Hf9Mlgq6Pn1a',$,'F-01',$,$,$,$,$,.PAD_FOOTING.);
#3=IFCSLABSTANDARDCASE('1kTvXnbbzCWw8lcMd1dR4o',$,'S-01',$,$,$,$,$,.FLOOR.);
#4=IFCSANITARYTERMINAL('3vB2YO$MX4xv5uCqZZG05x',$,'WC-01',$,$,$,$,$,.TOILETPAN.);
ENDSEC;
END-ISO-10303-21;
"#;

fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("hospital.ifc"), HOSPITAL).unwrap();
    std::fs::write(dir.path().join("legacy.ifc"), LEGACY).unwrap();
    std::fs::write(dir.path().join("no-body.ifc"), HOSPITAL.replace("('Body'", "('Axis'")).unwrap();
    std::fs::write(
        dir.path().join("renamed.ifc"),
        HOSPITAL.replace("'W-02'", "'Wall01'"),
    )
    .unwrap();
    std::fs::write(dir.path().join("foundations.ifc"), FOUNDATIONS).unwrap();
    std::fs::write(dir.path().join("cis2.ifc"), LEGACY.replace("'IFC2X3'", "'CIS2'")).unwrap();
    let latin1: Vec<u8> = HOSPITAL
        .replace("'Main'", "'Geb\u{e4}ude'")
        .chars()
        .map(|c| c as u8)
        .collect();
    std::fs::write(dir.path().join("latin1.ifc"), latin1).unwrap();
    std::fs::write(dir.path().join("walls.csv"), "W-01,A\nW-02,B\n").unwrap();
    std::fs::write(dir.path().join("walls-strict.csv"), "W-01,A\nW-02,9\n").unwrap();
    dir
}

fn engine(dir: &TempDir) -> Engine {
    Engine::new(EngineConfig::new().with_base_dir(dir.path())).unwrap()
}

fn failure(verdict: &Verdict) -> (ErrorCategory, &str) {
    match &verdict.outcome {
        Outcome::Failed { category, message } => (*category, message.as_str()),
        other => panic!("expected failure for {:?}, got {:?}", verdict.sentence, other),
    }
}

#[test]
fn test_full_scenario_passes() {
    let dir = workspace();
    let mut engine = engine(&dir);
    let verdicts = engine.run_scenario([
        r#"The IFC file "hospital.ifc" must be provided"#,
        "IFC data must use the IFC4 schema",
        r#"The project name, code, or short identifier must be "P-001""#,
        r#"The project must have a longer form name of "Hospital Extension""#,
        r#"The project must be described as "Stage 2 model""#,
        r#"The project must be categorised under "Healthcare""#,
        r#"The project must contain information about the "Design" phase"#,
        "The project must contain 3D geometry representing the shape of objects",
        "The project must contain 3D geometry representing the object bounding boxes",
        "The element 40 is an IfcWallStandardCase only",
        "The element 2O2Fr$t4X7Zf8NOew3FLOH is an IfcWall",
        "The element #41 is further defined as a PARTITIONING",
        "The element 42 is further defined as a LANDING",
        "The element 99 should not exist because it was demolished",
        "there is at least one IfcWall element",
        "there are no IfcDoor elements because the model is structural",
        r#"all IfcWall elements have a name matching the pattern "^W-[0-9]+$""#,
        "all IfcWall elements have a Tag attribute",
        "all IfcWall elements have a Pset_WallCommon.FireRating property",
        r#"all IfcWall elements have a Pset_WallCommon.FireRating property value matching the pattern "^EI[0-9]+$""#,
        r#"all IfcWall elements have a Name matching the pattern "^W-""#,
        r#"all IfcWall elements have a Name,Tag taken from the list in "walls.csv""#,
        "all IfcWall elements have a Qto_WallBaseQuantities.Length quantity",
        "the project should have geolocation data",
        r#"the project geolocation uses the "EPSG:7856" CRS"#,
        r#"the geolocated datum has an Eastings of "334000.0""#,
        r#"the geolocated datum has a OrthogonalHeight of "12.5""#,
        r#"the project has a Phase attribute with a value of "Design""#,
        r#"there is an IfcSite element with a Name attribute with a value of "Site""#,
        "all buildings have an address",
        "No further requirements are specified because this is a test",
    ]);

    for verdict in &verdicts {
        assert!(verdict.outcome.is_passed(), "{:?}", verdict);
    }
    assert_eq!(verdicts.len(), 31);
}

#[test]
fn test_schema_mismatch_names_both_schemas() {
    let dir = workspace();
    let mut engine = engine(&dir);
    let verdicts = engine.run_scenario([
        r#"The IFC file "hospital.ifc" must be provided"#,
        "IFC data must use the IFC2X3 schema",
    ]);
    let (category, message) = failure(&verdicts[1]);
    assert_eq!(category, ErrorCategory::Mismatch);
    assert!(message.contains("IFC2X3") && message.contains("IFC4"));
}

#[test]
fn test_exact_and_polymorphic_type_checks_disagree() {
    let dir = workspace();
    let mut engine = engine(&dir);
    engine.check(r#"The IFC file "hospital.ifc" must be provided"#).unwrap();

    assert!(engine.check("The element 40 is an IfcWall only").is_err());
    assert!(engine.check("The element 40 is an IfcWall").is_ok());
    assert!(engine.check("The element 40 is an IfcSlab").is_err());
}

#[test]
fn test_repeated_checks_are_identical() {
    let dir = workspace();
    let mut engine = engine(&dir);
    engine.check(r#"The IFC file "hospital.ifc" must be provided"#).unwrap();

    let sentence = "The element 41 is an IfcSlab";
    assert_eq!(engine.evaluate(sentence), engine.evaluate(sentence));
    let sentence = "there is at least one IfcWall element";
    assert_eq!(engine.evaluate(sentence), engine.evaluate(sentence));
}

#[test]
fn test_datum_requires_geolocation_bookmark() {
    let dir = workspace();
    let mut engine = engine(&dir);
    let verdicts = engine.run_scenario([
        r#"The IFC file "hospital.ifc" must be provided"#,
        r#"the geolocated datum has an Eastings of "334000.0""#,
        "the project should have geolocation data",
        r#"the geolocated datum has an Eastings of "334000.0""#,
        r#"the geolocated datum has a Northings of "1.0""#,
    ]);
    let (category, message) = failure(&verdicts[1]);
    assert_eq!(category, ErrorCategory::AbsentValue);
    assert!(message.contains("geolocation"));
    assert!(verdicts[2].outcome.is_passed());
    assert!(verdicts[3].outcome.is_passed());
    assert_eq!(failure(&verdicts[4]).1, "The value was 6250000.0");
}

#[test]
fn test_loading_a_new_model_clears_bookmarks() {
    let dir = workspace();
    let mut engine = engine(&dir);
    let verdicts = engine.run_scenario([
        r#"The IFC file "hospital.ifc" must be provided"#,
        "the project should have geolocation data",
        r#"The IFC file "no-body.ifc" must be provided"#,
        r#"the project geolocation uses the "EPSG:7856" CRS"#,
    ]);
    assert!(verdicts[2].outcome.is_passed());
    assert_eq!(failure(&verdicts[3]).0, ErrorCategory::AbsentValue);
}

#[test]
fn test_legacy_geolocation() {
    let dir = workspace();
    let mut engine = engine(&dir);
    let verdicts = engine.run_scenario([
        r#"The IFC file "legacy.ifc" must be provided"#,
        "IFC data must use the IFC2X3 schema",
        "the project should have geolocation data",
        r#"the project geolocation uses the "EPSG:7856" CRS"#,
        r#"the geolocated datum has an Eastings of "334000.0""#,
        r#"the geolocated datum has a Scale of "1.0""#,
    ]);
    for verdict in &verdicts {
        assert!(verdict.outcome.is_passed(), "{:?}", verdict);
    }
    assert!(engine.context().bookmarks().is_empty());
}

#[test]
fn test_reference_list_membership() {
    let dir = workspace();
    let mut engine = engine(&dir);
    let verdicts = engine.run_scenario([
        r#"The IFC file "hospital.ifc" must be provided"#,
        r#"all IfcWall elements have a Name, Tag taken from the list in "walls.csv""#,
        r#"all IfcWall elements have a Name, Tag taken from the list in "walls-strict.csv""#,
        r#"all IfcWall elements have a Name, Tag taken from the list in "missing.csv""#,
    ]);
    assert!(verdicts[1].outcome.is_passed());
    assert_eq!(
        failure(&verdicts[2]),
        (ErrorCategory::Mismatch, "Failed at element 3vB2YO$MX4xv5uCqZZG05x")
    );
    assert_eq!(failure(&verdicts[3]).0, ErrorCategory::AbsentValue);
}

#[test]
fn test_missing_subcontext_names_all_parameters() {
    let dir = workspace();
    let mut engine = engine(&dir);
    let verdicts = engine.run_scenario([
        r#"The IFC file "no-body.ifc" must be provided"#,
        "The project must contain 3D geometry representing the shape of objects",
    ]);
    let (category, message) = failure(&verdicts[1]);
    assert_eq!(category, ErrorCategory::AbsentValue);
    assert_eq!(
        message,
        "The subcontext with identifier Body, type Model, and target view MODEL_VIEW could not be found"
    );
}

#[test]
fn test_name_pattern_names_offending_element() {
    let dir = workspace();
    let mut engine = engine(&dir);
    let verdicts = engine.run_scenario([
        r#"The IFC file "renamed.ifc" must be provided"#,
        r#"all IfcWall elements have a name matching the pattern "^W-[0-9]+$""#,
    ]);
    let (category, message) = failure(&verdicts[1]);
    assert_eq!(category, ErrorCategory::Mismatch);
    assert!(message.contains("#41=IfcWall('3vB2YO$MX4xv5uCqZZG05x')"));
    assert!(message.contains("Wall01"));
}

#[test]
fn test_missing_element_is_local_failure() {
    let dir = workspace();
    let mut engine = engine(&dir);
    let verdicts = engine.run_scenario([
        r#"The IFC file "hospital.ifc" must be provided"#,
        "The element 77 is an IfcWall",
        "there is at least one IfcSlab element",
    ]);
    assert_eq!(
        failure(&verdicts[1]),
        (ErrorCategory::NotFound, "The element with #77 could not be found.")
    );
    assert!(verdicts[2].outcome.is_passed());
}

#[test]
fn test_failed_load_keeps_previous_model() {
    let dir = workspace();
    let mut engine = engine(&dir);
    engine.check(r#"The IFC file "hospital.ifc" must be provided"#).unwrap();
    assert!(engine.check(r#"The IFC file "absent.ifc" must be provided"#).is_err());
    assert!(engine.check("IFC data must use the IFC4 schema").is_ok());
}

#[test]
fn test_scenarios_start_fresh() {
    let dir = workspace();
    let mut engine = engine(&dir);
    engine.run_scenario([r#"The IFC file "hospital.ifc" must be provided"#]);

    let verdicts = engine.run_scenario(["IFC data must use the IFC4 schema"]);
    assert_eq!(failure(&verdicts[0]).0, ErrorCategory::Setup);
}

#[test]
fn test_element_classes_beyond_walls_and_slabs() {
    let dir = workspace();
    let mut engine = engine(&dir);
    let verdicts = engine.run_scenario([
        r#"The IFC file "foundations.ifc" must be provided"#,
        "all IfcFooting elements have a Name attribute",
        r#"all IfcFooting elements have a name matching the pattern "^F-""#,
        "The element 2 is further defined as a PAD_FOOTING",
        "there is at least one IfcSlab element",
        "there is at least one IfcBuildingElement element",
        "there is at least one IfcFlowTerminal element",
        "The element 3 is an IfcSlab",
        "The element 1kTvXnbbzCWw8lcMd1dR4o is an IfcSlabStandardCase only",
    ]);
    for verdict in &verdicts {
        assert!(verdict.outcome.is_passed(), "{:?}", verdict);
    }

    let verdict = engine.evaluate("The element 0FtgZ7x9v3Hf9Mlgq6Pn1a should not exist because it was removed");
    assert_eq!(
        failure(&verdict),
        (
            ErrorCategory::Mismatch,
            "This element #2=IfcFooting('0FtgZ7x9v3Hf9Mlgq6Pn1a') should be reevaluated."
        )
    );
}

#[test]
fn test_fallback_schema_reports_file_schema() {
    let dir = workspace();
    let mut engine = Engine::new(
        EngineConfig::new()
            .with_base_dir(dir.path())
            .with_fallback_schema("IFC2X3"),
    )
    .unwrap();
    let verdicts = engine.run_scenario([
        r#"The IFC file "cis2.ifc" must be provided"#,
        "IFC data must use the CIS2 schema",
        r#"the project has a Name attribute with a value of "Legacy""#,
    ]);
    for verdict in &verdicts {
        assert!(verdict.outcome.is_passed(), "{:?}", verdict);
    }

    let binding = engine.evaluate("IFC data must use the IFC2X3 schema");
    let (category, message) = failure(&binding);
    assert_eq!(category, ErrorCategory::Mismatch);
    assert!(message.contains("CIS2"));
}

#[test]
fn test_latin1_model_loads() {
    let dir = workspace();
    let mut engine = engine(&dir);
    let verdicts = engine.run_scenario([
        r#"The IFC file "latin1.ifc" must be provided"#,
        "IFC data must use the IFC4 schema",
        "there is an IfcBuilding element with a Name attribute with a value of \"Geb\u{e4}ude\"",
    ]);
    for verdict in &verdicts {
        assert!(verdict.outcome.is_passed(), "{:?}", verdict);
    }
}

#[test]
fn test_report_serializes_to_json() {
    let dir = workspace();
    let mut engine = engine(&dir);
    let verdicts = engine.run_scenario([
        r#"The IFC file "hospital.ifc" must be provided"#,
        "there is at least one IfcDoor element",
    ]);
    let report = serde_json::to_value(&verdicts).unwrap();
    assert_eq!(report[0]["status"], "passed");
    assert_eq!(report[1]["status"], "failed");
    assert_eq!(report[1]["category"], "AbsentValue");
}
