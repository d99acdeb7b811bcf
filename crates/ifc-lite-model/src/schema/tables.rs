// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity tables per schema family
//!
//! `COMMON` holds layouts shared by every family. The family tables replace
//! common entries by name and add their own; IFC4X3 is layered on top of
//! IFC4. Leaf types may list fewer attributes than the schema declares,
//! intermediate types always list all of theirs so that subtype positions
//! stay aligned.

use super::{EntityDef, InverseDef};

macro_rules! entity {
    ($name:literal, [$($attr:literal),* $(,)?]) => {
        EntityDef { name: $name, supertype: None, attributes: &[$($attr),*] }
    };
    ($name:literal, $super:literal, [$($attr:literal),* $(,)?]) => {
        EntityDef { name: $name, supertype: Some($super), attributes: &[$($attr),*] }
    };
}

/// Leaf types adding only `PredefinedType` under one supertype
macro_rules! predefined {
    ($super:literal: $($name:literal),* $(,)?) => {
        [$(entity!($name, $super, ["PredefinedType"])),*]
    };
}

pub(super) static COMMON: &[EntityDef] = &[
    // kernel
    entity!("IfcRoot", ["GlobalId", "OwnerHistory", "Name", "Description"]),
    entity!("IfcObjectDefinition", "IfcRoot", []),
    entity!("IfcObject", "IfcObjectDefinition", ["ObjectType"]),
    entity!("IfcProduct", "IfcObject", ["ObjectPlacement", "Representation"]),
    entity!("IfcActor", "IfcObject", ["TheActor"]),
    entity!("IfcGroup", "IfcObject", []),
    entity!("IfcSystem", "IfcGroup", []),
    entity!("IfcTypeObject", "IfcObjectDefinition", ["ApplicableOccurrence", "HasPropertySets"]),
    entity!("IfcTypeProduct", "IfcTypeObject", ["RepresentationMaps", "Tag"]),
    entity!("IfcElementType", "IfcTypeProduct", ["ElementType"]),
    entity!("IfcBuildingElementType", "IfcElementType", []),
    entity!("IfcDistributionElementType", "IfcElementType", []),
    entity!("IfcFurnishingElementType", "IfcElementType", []),
    // spatial structure
    entity!("IfcSite", "IfcSpatialStructureElement", [
        "RefLatitude", "RefLongitude", "RefElevation", "LandTitleNumber", "SiteAddress",
    ]),
    entity!("IfcBuilding", "IfcSpatialStructureElement", [
        "ElevationOfRefHeight", "ElevationOfTerrain", "BuildingAddress",
    ]),
    entity!("IfcBuildingStorey", "IfcSpatialStructureElement", ["Elevation"]),
    // elements
    entity!("IfcElement", "IfcProduct", ["Tag"]),
    entity!("IfcBuildingElement", "IfcElement", []),
    entity!("IfcWallStandardCase", "IfcWall", []),
    entity!("IfcSlab", "IfcBuildingElement", ["PredefinedType"]),
    entity!("IfcCovering", "IfcBuildingElement", ["PredefinedType"]),
    entity!("IfcRailing", "IfcBuildingElement", ["PredefinedType"]),
    entity!("IfcFooting", "IfcBuildingElement", ["PredefinedType"]),
    entity!("IfcPile", "IfcBuildingElement", ["PredefinedType", "ConstructionType"]),
    entity!("IfcElementAssembly", "IfcElement", ["AssemblyPlace", "PredefinedType"]),
    entity!("IfcElementComponent", "IfcElement", []),
    entity!("IfcFurnishingElement", "IfcElement", []),
    entity!("IfcVirtualElement", "IfcElement", []),
    entity!("IfcDistributionElement", "IfcElement", []),
    entity!("IfcDistributionFlowElement", "IfcDistributionElement", []),
    entity!("IfcFlowTerminal", "IfcDistributionFlowElement", []),
    entity!("IfcFlowSegment", "IfcDistributionFlowElement", []),
    entity!("IfcFlowFitting", "IfcDistributionFlowElement", []),
    entity!("IfcFlowController", "IfcDistributionFlowElement", []),
    entity!("IfcFlowMovingDevice", "IfcDistributionFlowElement", []),
    entity!("IfcFlowStorageDevice", "IfcDistributionFlowElement", []),
    entity!("IfcFlowTreatmentDevice", "IfcDistributionFlowElement", []),
    entity!("IfcEnergyConversionDevice", "IfcDistributionFlowElement", []),
    entity!("IfcFeatureElement", "IfcElement", []),
    entity!("IfcFeatureElementSubtraction", "IfcFeatureElement", []),
    entity!("IfcFeatureElementAddition", "IfcFeatureElement", []),
    entity!("IfcReinforcingElement", "IfcElementComponent", ["SteelGrade"]),
    entity!("IfcReinforcingMesh", "IfcReinforcingElement", []),
    entity!("IfcTendon", "IfcReinforcingElement", []),
    entity!("IfcTendonAnchor", "IfcReinforcingElement", []),
    entity!("IfcDiscreteAccessory", "IfcElementComponent", []),
    entity!("IfcFastener", "IfcElementComponent", []),
    // other products
    entity!("IfcAnnotation", "IfcProduct", []),
    entity!("IfcPort", "IfcProduct", []),
    entity!("IfcProxy", "IfcProduct", ["ProxyType", "Tag"]),
    entity!("IfcStructuralItem", "IfcProduct", []),
    entity!("IfcStructuralMember", "IfcStructuralItem", []),
    entity!("IfcStructuralCurveMember", "IfcStructuralMember", ["PredefinedType"]),
    entity!("IfcStructuralSurfaceMember", "IfcStructuralMember", ["PredefinedType", "Thickness"]),
    entity!("IfcStructuralConnection", "IfcStructuralItem", ["AppliedCondition"]),
    entity!("IfcStructuralPointConnection", "IfcStructuralConnection", []),
    entity!("IfcStructuralCurveConnection", "IfcStructuralConnection", []),
    entity!("IfcStructuralSurfaceConnection", "IfcStructuralConnection", []),
    entity!("IfcStructuralActivity", "IfcProduct", ["AppliedLoad", "GlobalOrLocal"]),
    // relationships
    entity!("IfcRelationship", "IfcRoot", []),
    entity!("IfcRelConnects", "IfcRelationship", []),
    entity!("IfcRelContainedInSpatialStructure", "IfcRelConnects", [
        "RelatedElements", "RelatingStructure",
    ]),
    entity!("IfcRelVoidsElement", "IfcRelConnects", [
        "RelatingBuildingElement", "RelatedOpeningElement",
    ]),
    entity!("IfcRelFillsElement", "IfcRelConnects", [
        "RelatingOpeningElement", "RelatedBuildingElement",
    ]),
    entity!("IfcRelAssociates", "IfcRelationship", ["RelatedObjects"]),
    entity!("IfcRelAssociatesMaterial", "IfcRelAssociates", ["RelatingMaterial"]),
    entity!("IfcRelAssigns", "IfcRelationship", ["RelatedObjects", "RelatedObjectsType"]),
    // properties and quantities
    entity!("IfcPropertyDefinition", "IfcRoot", []),
    entity!("IfcPropertySetDefinition", "IfcPropertyDefinition", []),
    entity!("IfcPropertySet", "IfcPropertySetDefinition", ["HasProperties"]),
    entity!("IfcSimpleProperty", "IfcProperty", []),
    entity!("IfcPropertySingleValue", "IfcSimpleProperty", ["NominalValue", "Unit"]),
    entity!("IfcPropertyEnumeratedValue", "IfcSimpleProperty", [
        "EnumerationValues", "EnumerationReference",
    ]),
    entity!("IfcPropertyListValue", "IfcSimpleProperty", ["ListValues", "Unit"]),
    entity!("IfcPhysicalQuantity", ["Name", "Description"]),
    entity!("IfcPhysicalSimpleQuantity", "IfcPhysicalQuantity", ["Unit"]),
    // representation
    entity!("IfcRepresentationContext", ["ContextIdentifier", "ContextType"]),
    entity!("IfcGeometricRepresentationContext", "IfcRepresentationContext", [
        "CoordinateSpaceDimension", "Precision", "WorldCoordinateSystem", "TrueNorth",
    ]),
    entity!("IfcGeometricRepresentationSubContext", "IfcGeometricRepresentationContext", [
        "ParentContext", "TargetScale", "TargetView", "UserDefinedTargetView",
    ]),
    entity!("IfcProductRepresentation", ["Name", "Description", "Representations"]),
    entity!("IfcProductDefinitionShape", "IfcProductRepresentation", []),
    entity!("IfcRepresentation", [
        "ContextOfItems", "RepresentationIdentifier", "RepresentationType", "Items",
    ]),
    entity!("IfcShapeModel", "IfcRepresentation", []),
    entity!("IfcShapeRepresentation", "IfcShapeModel", []),
    entity!("IfcTopologyRepresentation", "IfcShapeModel", []),
    entity!("IfcRepresentationMap", ["MappingOrigin", "MappedRepresentation"]),
    entity!("IfcObjectPlacement", []),
    entity!("IfcLocalPlacement", "IfcObjectPlacement", ["PlacementRelTo", "RelativePlacement"]),
    entity!("IfcGridPlacement", "IfcObjectPlacement", [
        "PlacementLocation", "PlacementRefDirection",
    ]),
    // representation items
    entity!("IfcRepresentationItem", []),
    entity!("IfcGeometricRepresentationItem", "IfcRepresentationItem", []),
    entity!("IfcTopologicalRepresentationItem", "IfcRepresentationItem", []),
    entity!("IfcStyledItem", "IfcRepresentationItem", ["Item", "Styles", "Name"]),
    entity!("IfcMappedItem", "IfcRepresentationItem", ["MappingSource", "MappingTarget"]),
    entity!("IfcSolidModel", "IfcGeometricRepresentationItem", []),
    entity!("IfcSweptAreaSolid", "IfcSolidModel", ["SweptArea", "Position"]),
    entity!("IfcExtrudedAreaSolid", "IfcSweptAreaSolid", ["ExtrudedDirection", "Depth"]),
    entity!("IfcRevolvedAreaSolid", "IfcSweptAreaSolid", ["Axis", "Angle"]),
    entity!("IfcSurfaceCurveSweptAreaSolid", "IfcSweptAreaSolid", [
        "Directrix", "StartParam", "EndParam", "ReferenceSurface",
    ]),
    entity!("IfcSweptDiskSolid", "IfcSolidModel", [
        "Directrix", "Radius", "InnerRadius", "StartParam", "EndParam",
    ]),
    entity!("IfcCsgSolid", "IfcSolidModel", ["TreeRootExpression"]),
    entity!("IfcManifoldSolidBrep", "IfcSolidModel", ["Outer"]),
    entity!("IfcFacetedBrep", "IfcManifoldSolidBrep", []),
    entity!("IfcFacetedBrepWithVoids", "IfcFacetedBrep", ["Voids"]),
    entity!("IfcHalfSpaceSolid", "IfcGeometricRepresentationItem", ["BaseSurface", "AgreementFlag"]),
    entity!("IfcBoxedHalfSpace", "IfcHalfSpaceSolid", ["Enclosure"]),
    entity!("IfcPolygonalBoundedHalfSpace", "IfcHalfSpaceSolid", ["Position", "PolygonalBoundary"]),
    entity!("IfcBooleanResult", "IfcGeometricRepresentationItem", [
        "Operator", "FirstOperand", "SecondOperand",
    ]),
    entity!("IfcBooleanClippingResult", "IfcBooleanResult", []),
    entity!("IfcCsgPrimitive3D", "IfcGeometricRepresentationItem", ["Position"]),
    entity!("IfcBlock", "IfcCsgPrimitive3D", ["XLength", "YLength", "ZLength"]),
    entity!("IfcRectangularPyramid", "IfcCsgPrimitive3D", ["XLength", "YLength", "Height"]),
    entity!("IfcRightCircularCone", "IfcCsgPrimitive3D", ["Height", "BottomRadius"]),
    entity!("IfcRightCircularCylinder", "IfcCsgPrimitive3D", ["Height", "Radius"]),
    entity!("IfcSphere", "IfcCsgPrimitive3D", ["Radius"]),
    entity!("IfcBoundingBox", "IfcGeometricRepresentationItem", ["Corner", "XDim", "YDim", "ZDim"]),
    entity!("IfcFaceBasedSurfaceModel", "IfcGeometricRepresentationItem", ["FbsmFaces"]),
    entity!("IfcShellBasedSurfaceModel", "IfcGeometricRepresentationItem", ["SbsmBoundary"]),
    entity!("IfcGeometricSet", "IfcGeometricRepresentationItem", ["Elements"]),
    entity!("IfcGeometricCurveSet", "IfcGeometricSet", []),
    entity!("IfcAnnotationFillArea", "IfcGeometricRepresentationItem", [
        "OuterBoundary", "InnerBoundaries",
    ]),
    entity!("IfcTextLiteral", "IfcGeometricRepresentationItem", ["Literal", "Placement", "Path"]),
    entity!("IfcCurve", "IfcGeometricRepresentationItem", []),
    entity!("IfcBoundedCurve", "IfcCurve", []),
    entity!("IfcPolyline", "IfcBoundedCurve", ["Points"]),
    entity!("IfcTrimmedCurve", "IfcBoundedCurve", [
        "BasisCurve", "Trim1", "Trim2", "SenseAgreement", "MasterRepresentation",
    ]),
    entity!("IfcCompositeCurve", "IfcBoundedCurve", ["Segments", "SelfIntersect"]),
    entity!("IfcBSplineCurve", "IfcBoundedCurve", [
        "Degree", "ControlPointsList", "CurveForm", "ClosedCurve", "SelfIntersect",
    ]),
    entity!("IfcBSplineCurveWithKnots", "IfcBSplineCurve", [
        "KnotMultiplicities", "Knots", "KnotSpec",
    ]),
    entity!("IfcConic", "IfcCurve", ["Position"]),
    entity!("IfcCircle", "IfcConic", ["Radius"]),
    entity!("IfcEllipse", "IfcConic", ["SemiAxis1", "SemiAxis2"]),
    entity!("IfcLine", "IfcCurve", ["Pnt", "Dir"]),
    entity!("IfcOffsetCurve2D", "IfcCurve", ["BasisCurve", "Distance", "SelfIntersect"]),
    entity!("IfcCompositeCurveSegment", "IfcGeometricRepresentationItem", [
        "Transition", "SameSense", "ParentCurve",
    ]),
    entity!("IfcPoint", "IfcGeometricRepresentationItem", []),
    entity!("IfcCartesianPoint", "IfcPoint", ["Coordinates"]),
    entity!("IfcDirection", "IfcGeometricRepresentationItem", ["DirectionRatios"]),
    entity!("IfcVector", "IfcGeometricRepresentationItem", ["Orientation", "Magnitude"]),
    entity!("IfcPlacement", "IfcGeometricRepresentationItem", ["Location"]),
    entity!("IfcAxis1Placement", "IfcPlacement", ["Axis"]),
    entity!("IfcAxis2Placement2D", "IfcPlacement", ["RefDirection"]),
    entity!("IfcAxis2Placement3D", "IfcPlacement", ["Axis", "RefDirection"]),
    entity!("IfcCartesianTransformationOperator", "IfcGeometricRepresentationItem", [
        "Axis1", "Axis2", "LocalOrigin", "Scale",
    ]),
    entity!("IfcCartesianTransformationOperator2D", "IfcCartesianTransformationOperator", []),
    entity!("IfcCartesianTransformationOperator2DnonUniform", "IfcCartesianTransformationOperator2D", [
        "Scale2",
    ]),
    entity!("IfcCartesianTransformationOperator3D", "IfcCartesianTransformationOperator", ["Axis3"]),
    entity!("IfcCartesianTransformationOperator3DnonUniform", "IfcCartesianTransformationOperator3D", [
        "Scale2", "Scale3",
    ]),
    entity!("IfcSurface", "IfcGeometricRepresentationItem", []),
    entity!("IfcElementarySurface", "IfcSurface", ["Position"]),
    entity!("IfcPlane", "IfcElementarySurface", []),
    entity!("IfcBoundedSurface", "IfcSurface", []),
    entity!("IfcCurveBoundedPlane", "IfcBoundedSurface", [
        "BasisSurface", "OuterBoundary", "InnerBoundaries",
    ]),
    entity!("IfcConnectedFaceSet", "IfcTopologicalRepresentationItem", ["CfsFaces"]),
    entity!("IfcClosedShell", "IfcConnectedFaceSet", []),
    entity!("IfcOpenShell", "IfcConnectedFaceSet", []),
    entity!("IfcFace", "IfcTopologicalRepresentationItem", ["Bounds"]),
    entity!("IfcFaceSurface", "IfcFace", ["FaceSurface", "SameSense"]),
    entity!("IfcFaceBound", "IfcTopologicalRepresentationItem", ["Bound", "Orientation"]),
    entity!("IfcFaceOuterBound", "IfcFaceBound", []),
    entity!("IfcLoop", "IfcTopologicalRepresentationItem", []),
    entity!("IfcPolyLoop", "IfcLoop", ["Polygon"]),
    entity!("IfcVertex", "IfcTopologicalRepresentationItem", []),
    entity!("IfcVertexPoint", "IfcVertex", ["VertexGeometry"]),
    entity!("IfcEdge", "IfcTopologicalRepresentationItem", ["EdgeStart", "EdgeEnd"]),
    // profiles
    entity!("IfcProfileDef", ["ProfileType", "ProfileName"]),
    entity!("IfcArbitraryClosedProfileDef", "IfcProfileDef", ["OuterCurve"]),
    entity!("IfcArbitraryProfileDefWithVoids", "IfcArbitraryClosedProfileDef", ["InnerCurves"]),
    entity!("IfcArbitraryOpenProfileDef", "IfcProfileDef", ["Curve"]),
    entity!("IfcDerivedProfileDef", "IfcProfileDef", ["ParentProfile", "Operator", "Label"]),
    entity!("IfcCompositeProfileDef", "IfcProfileDef", ["Profiles", "Label"]),
    entity!("IfcParameterizedProfileDef", "IfcProfileDef", ["Position"]),
    entity!("IfcRectangleProfileDef", "IfcParameterizedProfileDef", ["XDim", "YDim"]),
    entity!("IfcRectangleHollowProfileDef", "IfcRectangleProfileDef", [
        "WallThickness", "InnerFilletRadius", "OuterFilletRadius",
    ]),
    entity!("IfcCircleProfileDef", "IfcParameterizedProfileDef", ["Radius"]),
    entity!("IfcCircleHollowProfileDef", "IfcCircleProfileDef", ["WallThickness"]),
    entity!("IfcEllipseProfileDef", "IfcParameterizedProfileDef", ["SemiAxis1", "SemiAxis2"]),
    entity!("IfcIShapeProfileDef", "IfcParameterizedProfileDef", [
        "OverallWidth", "OverallDepth", "WebThickness", "FlangeThickness", "FilletRadius",
    ]),
    entity!("IfcLShapeProfileDef", "IfcParameterizedProfileDef", []),
    entity!("IfcTShapeProfileDef", "IfcParameterizedProfileDef", []),
    entity!("IfcUShapeProfileDef", "IfcParameterizedProfileDef", []),
    entity!("IfcCShapeProfileDef", "IfcParameterizedProfileDef", []),
    entity!("IfcZShapeProfileDef", "IfcParameterizedProfileDef", []),
    // resources
    entity!("IfcAddress", ["Purpose", "Description", "UserDefinedPurpose"]),
    entity!("IfcPostalAddress", "IfcAddress", [
        "InternalLocation", "AddressLines", "PostalBox", "Town", "Region", "PostalCode", "Country",
    ]),
    entity!("IfcUnitAssignment", ["Units"]),
];

pub(super) static IFC2X3: &[EntityDef] = &[
    entity!("IfcProject", "IfcObject", [
        "LongName", "Phase", "RepresentationContexts", "UnitsInContext",
    ]),
    entity!("IfcControl", "IfcObject", []),
    entity!("IfcProcess", "IfcObject", []),
    entity!("IfcResource", "IfcObject", []),
    entity!("IfcZone", "IfcGroup", []),
    entity!("IfcSpatialStructureElement", "IfcProduct", ["LongName", "CompositionType"]),
    entity!("IfcSpace", "IfcSpatialStructureElement", [
        "InteriorOrExteriorSpace", "ElevationWithFlooring",
    ]),
    entity!("IfcWall", "IfcBuildingElement", []),
    entity!("IfcCurtainWall", "IfcBuildingElement", []),
    entity!("IfcBeam", "IfcBuildingElement", []),
    entity!("IfcColumn", "IfcBuildingElement", []),
    entity!("IfcMember", "IfcBuildingElement", []),
    entity!("IfcPlate", "IfcBuildingElement", []),
    entity!("IfcDoor", "IfcBuildingElement", ["OverallHeight", "OverallWidth"]),
    entity!("IfcWindow", "IfcBuildingElement", ["OverallHeight", "OverallWidth"]),
    entity!("IfcRoof", "IfcBuildingElement", ["ShapeType"]),
    entity!("IfcStair", "IfcBuildingElement", ["ShapeType"]),
    entity!("IfcStairFlight", "IfcBuildingElement", [
        "NumberOfRiser", "NumberOfTreads", "RiserHeight", "TreadLength",
    ]),
    entity!("IfcRamp", "IfcBuildingElement", ["ShapeType"]),
    entity!("IfcRampFlight", "IfcBuildingElement", []),
    entity!("IfcBuildingElementProxy", "IfcBuildingElement", ["CompositionType"]),
    entity!("IfcBuildingElementComponent", "IfcBuildingElement", []),
    entity!("IfcBuildingElementPart", "IfcBuildingElementComponent", []),
    entity!("IfcReinforcingElement", "IfcBuildingElementComponent", ["SteelGrade"]),
    entity!("IfcReinforcingBar", "IfcReinforcingElement", [
        "NominalDiameter", "CrossSectionArea", "BarLength", "BarRole", "BarSurface",
    ]),
    entity!("IfcMechanicalFastener", "IfcFastener", ["NominalDiameter", "NominalLength"]),
    entity!("IfcDistributionControlElement", "IfcDistributionElement", ["ControlElementId"]),
    entity!("IfcElectricDistributionPoint", "IfcFlowController", [
        "DistributionPointFunction", "UserDefinedFunction",
    ]),
    entity!("IfcElectricalElement", "IfcElement", []),
    entity!("IfcEquipmentElement", "IfcElement", []),
    entity!("IfcTransportElement", "IfcElement", [
        "OperationType", "CapacityByWeight", "CapacityByNumber",
    ]),
    entity!("IfcOpeningElement", "IfcFeatureElementSubtraction", []),
    entity!("IfcEdgeFeature", "IfcFeatureElementSubtraction", ["FeatureLength"]),
    entity!("IfcChamferEdgeFeature", "IfcEdgeFeature", []),
    entity!("IfcRoundedEdgeFeature", "IfcEdgeFeature", []),
    entity!("IfcProjectionElement", "IfcFeatureElementAddition", []),
    entity!("IfcGrid", "IfcProduct", ["UAxes", "VAxes", "WAxes"]),
    entity!("IfcDistributionPort", "IfcPort", ["FlowDirection"]),
    entity!("IfcWallType", "IfcBuildingElementType", ["PredefinedType"]),
    entity!("IfcSlabType", "IfcBuildingElementType", ["PredefinedType"]),
    entity!("IfcBeamType", "IfcBuildingElementType", ["PredefinedType"]),
    entity!("IfcColumnType", "IfcBuildingElementType", ["PredefinedType"]),
    entity!("IfcRelDefines", "IfcRelationship", ["RelatedObjects"]),
    entity!("IfcRelDefinesByProperties", "IfcRelDefines", ["RelatingPropertyDefinition"]),
    entity!("IfcRelDefinesByType", "IfcRelDefines", ["RelatingType"]),
    entity!("IfcRelDecomposes", "IfcRelationship", ["RelatingObject", "RelatedObjects"]),
    entity!("IfcRelAggregates", "IfcRelDecomposes", []),
    entity!("IfcRelNests", "IfcRelDecomposes", []),
    entity!("IfcElementQuantity", "IfcPropertySetDefinition", [
        "MethodOfMeasurement", "Quantities",
    ]),
    entity!("IfcProperty", ["Name", "Description"]),
    entity!("IfcPropertyBoundedValue", "IfcSimpleProperty", [
        "UpperBoundValue", "LowerBoundValue", "Unit",
    ]),
    entity!("IfcQuantityLength", "IfcPhysicalSimpleQuantity", ["LengthValue"]),
    entity!("IfcQuantityArea", "IfcPhysicalSimpleQuantity", ["AreaValue"]),
    entity!("IfcQuantityVolume", "IfcPhysicalSimpleQuantity", ["VolumeValue"]),
    entity!("IfcQuantityCount", "IfcPhysicalSimpleQuantity", ["CountValue"]),
    entity!("IfcQuantityWeight", "IfcPhysicalSimpleQuantity", ["WeightValue"]),
    entity!("IfcQuantityTime", "IfcPhysicalSimpleQuantity", ["TimeValue"]),
];

pub(super) static IFC4_CORE: &[EntityDef] = &[
    entity!("IfcContext", "IfcObjectDefinition", [
        "ObjectType", "LongName", "Phase", "RepresentationContexts", "UnitsInContext",
    ]),
    entity!("IfcProject", "IfcContext", []),
    entity!("IfcProjectLibrary", "IfcContext", []),
    entity!("IfcControl", "IfcObject", ["Identification"]),
    entity!("IfcProcess", "IfcObject", ["Identification", "LongDescription"]),
    entity!("IfcResource", "IfcObject", ["Identification", "LongDescription"]),
    entity!("IfcZone", "IfcSystem", ["LongName"]),
    entity!("IfcBuildingSystem", "IfcSystem", ["PredefinedType", "LongName"]),
    entity!("IfcDistributionSystem", "IfcSystem", ["LongName", "PredefinedType"]),
    entity!("IfcDistributionCircuit", "IfcDistributionSystem", []),
    entity!("IfcSpatialElement", "IfcProduct", ["LongName"]),
    entity!("IfcSpatialStructureElement", "IfcSpatialElement", ["CompositionType"]),
    entity!("IfcSpace", "IfcSpatialStructureElement", ["PredefinedType", "ElevationWithFlooring"]),
    entity!("IfcSpatialZone", "IfcSpatialElement", ["PredefinedType"]),
    entity!("IfcExternalSpatialStructureElement", "IfcSpatialElement", []),
    entity!("IfcExternalSpatialElement", "IfcExternalSpatialStructureElement", ["PredefinedType"]),
    entity!("IfcDoor", "IfcBuildingElement", [
        "OverallHeight", "OverallWidth", "PredefinedType", "OperationType",
        "UserDefinedOperationType",
    ]),
    entity!("IfcWindow", "IfcBuildingElement", [
        "OverallHeight", "OverallWidth", "PredefinedType", "PartitioningType",
        "UserDefinedPartitioningType",
    ]),
    entity!("IfcStairFlight", "IfcBuildingElement", [
        "NumberOfRisers", "NumberOfTreads", "RiserHeight", "TreadLength", "PredefinedType",
    ]),
    entity!("IfcBeamStandardCase", "IfcBeam", []),
    entity!("IfcColumnStandardCase", "IfcColumn", []),
    entity!("IfcMemberStandardCase", "IfcMember", []),
    entity!("IfcPlateStandardCase", "IfcPlate", []),
    entity!("IfcSlabStandardCase", "IfcSlab", []),
    entity!("IfcSlabElementedCase", "IfcSlab", []),
    entity!("IfcWallElementedCase", "IfcWall", []),
    entity!("IfcDoorStandardCase", "IfcDoor", []),
    entity!("IfcWindowStandardCase", "IfcWindow", []),
    entity!("IfcOpeningStandardCase", "IfcOpeningElement", []),
    entity!("IfcCivilElement", "IfcElement", []),
    entity!("IfcDistributionControlElement", "IfcDistributionElement", []),
    entity!("IfcReinforcingBar", "IfcReinforcingElement", [
        "NominalDiameter", "CrossSectionArea", "BarLength", "PredefinedType", "BarSurface",
    ]),
    entity!("IfcMechanicalFastener", "IfcElementComponent", [
        "NominalDiameter", "NominalLength", "PredefinedType",
    ]),
    entity!("IfcGrid", "IfcProduct", ["UAxes", "VAxes", "WAxes", "PredefinedType"]),
    entity!("IfcDistributionPort", "IfcPort", ["FlowDirection", "PredefinedType", "SystemType"]),
    entity!("IfcSpatialElementType", "IfcTypeProduct", ["ElementType"]),
    entity!("IfcRelDefines", "IfcRelationship", []),
    entity!("IfcRelDefinesByProperties", "IfcRelDefines", [
        "RelatedObjects", "RelatingPropertyDefinition",
    ]),
    entity!("IfcRelDefinesByType", "IfcRelDefines", ["RelatedObjects", "RelatingType"]),
    entity!("IfcRelDecomposes", "IfcRelationship", []),
    entity!("IfcRelAggregates", "IfcRelDecomposes", ["RelatingObject", "RelatedObjects"]),
    entity!("IfcRelNests", "IfcRelDecomposes", ["RelatingObject", "RelatedObjects"]),
    entity!("IfcQuantitySet", "IfcPropertySetDefinition", []),
    entity!("IfcElementQuantity", "IfcQuantitySet", ["MethodOfMeasurement", "Quantities"]),
    entity!("IfcPropertyAbstraction", []),
    entity!("IfcProperty", "IfcPropertyAbstraction", ["Name", "Description"]),
    entity!("IfcPropertyBoundedValue", "IfcSimpleProperty", [
        "UpperBoundValue", "LowerBoundValue", "Unit", "SetPointValue",
    ]),
    entity!("IfcQuantityLength", "IfcPhysicalSimpleQuantity", ["LengthValue", "Formula"]),
    entity!("IfcQuantityArea", "IfcPhysicalSimpleQuantity", ["AreaValue", "Formula"]),
    entity!("IfcQuantityVolume", "IfcPhysicalSimpleQuantity", ["VolumeValue", "Formula"]),
    entity!("IfcQuantityCount", "IfcPhysicalSimpleQuantity", ["CountValue", "Formula"]),
    entity!("IfcQuantityWeight", "IfcPhysicalSimpleQuantity", ["WeightValue", "Formula"]),
    entity!("IfcQuantityTime", "IfcPhysicalSimpleQuantity", ["TimeValue", "Formula"]),
    entity!("IfcExtrudedAreaSolidTapered", "IfcExtrudedAreaSolid", ["EndSweptArea"]),
    entity!("IfcRevolvedAreaSolidTapered", "IfcRevolvedAreaSolid", ["EndSweptArea"]),
    entity!("IfcFixedReferenceSweptAreaSolid", "IfcSweptAreaSolid", [
        "Directrix", "StartParam", "EndParam", "FixedReference",
    ]),
    entity!("IfcSweptDiskSolidPolygonal", "IfcSweptDiskSolid", ["FilletRadius"]),
    entity!("IfcAdvancedBrep", "IfcManifoldSolidBrep", []),
    entity!("IfcAdvancedBrepWithVoids", "IfcAdvancedBrep", ["Voids"]),
    entity!("IfcAdvancedFace", "IfcFaceSurface", []),
    entity!("IfcIndexedPolyCurve", "IfcBoundedCurve", ["Points", "Segments", "SelfIntersect"]),
    entity!("IfcCartesianPointList", "IfcGeometricRepresentationItem", []),
    entity!("IfcCartesianPointList2D", "IfcCartesianPointList", ["CoordList"]),
    entity!("IfcCartesianPointList3D", "IfcCartesianPointList", ["CoordList"]),
    entity!("IfcTessellatedItem", "IfcGeometricRepresentationItem", []),
    entity!("IfcTessellatedFaceSet", "IfcTessellatedItem", ["Coordinates"]),
    entity!("IfcTriangulatedFaceSet", "IfcTessellatedFaceSet", [
        "Normals", "Closed", "CoordIndex", "PnIndex",
    ]),
    entity!("IfcPolygonalFaceSet", "IfcTessellatedFaceSet", ["Closed", "Faces", "PnIndex"]),
    entity!("IfcIndexedPolygonalFace", "IfcTessellatedItem", ["CoordIndex"]),
    entity!("IfcCoordinateOperation", ["SourceCRS", "TargetCRS"]),
    entity!("IfcMapConversion", "IfcCoordinateOperation", [
        "Eastings", "Northings", "OrthogonalHeight", "XAxisAbscissa", "XAxisOrdinate", "Scale",
    ]),
    entity!("IfcCoordinateReferenceSystem", ["Name", "Description", "GeodeticDatum", "VerticalDatum"]),
    entity!("IfcProjectedCRS", "IfcCoordinateReferenceSystem", ["MapProjection", "MapZone", "MapUnit"]),
];

/// IFC4 types that add only `PredefinedType`, grouped by supertype
pub(super) static IFC4_PREDEFINED: &[&[EntityDef]] = &[
    &predefined!("IfcBuildingElement":
        "IfcWall", "IfcCurtainWall", "IfcBeam", "IfcColumn", "IfcMember", "IfcPlate",
        "IfcRoof", "IfcStair", "IfcRamp", "IfcRampFlight", "IfcChimney",
        "IfcShadingDevice", "IfcBuildingElementProxy",
    ),
    &predefined!("IfcElement": "IfcGeographicElement", "IfcTransportElement"),
    &predefined!("IfcFurnishingElement": "IfcFurniture", "IfcSystemFurnitureElement"),
    &predefined!("IfcElementComponent":
        "IfcBuildingElementPart", "IfcDiscreteAccessory", "IfcFastener",
        "IfcVibrationIsolator",
    ),
    &predefined!("IfcFeatureElementSubtraction": "IfcOpeningElement", "IfcVoidingFeature"),
    &predefined!("IfcFeatureElementAddition": "IfcProjectionElement"),
    &predefined!("IfcFeatureElement": "IfcSurfaceFeature"),
    &predefined!("IfcDistributionFlowElement": "IfcDistributionChamberElement"),
    &predefined!("IfcDistributionControlElement":
        "IfcActuator", "IfcAlarm", "IfcController", "IfcFlowInstrument",
        "IfcProtectiveDeviceTrippingUnit", "IfcSensor", "IfcUnitaryControlElement",
    ),
    &predefined!("IfcFlowTerminal":
        "IfcAirTerminal", "IfcAudioVisualAppliance", "IfcCommunicationsAppliance",
        "IfcElectricAppliance", "IfcFireSuppressionTerminal", "IfcLamp", "IfcLightFixture",
        "IfcMedicalDevice", "IfcOutlet", "IfcSanitaryTerminal", "IfcSpaceHeater",
        "IfcStackTerminal", "IfcWasteTerminal",
    ),
    &predefined!("IfcFlowSegment":
        "IfcCableCarrierSegment", "IfcCableSegment", "IfcDuctSegment", "IfcPipeSegment",
    ),
    &predefined!("IfcFlowFitting":
        "IfcCableCarrierFitting", "IfcCableFitting", "IfcDuctFitting", "IfcJunctionBox",
        "IfcPipeFitting",
    ),
    &predefined!("IfcFlowController":
        "IfcAirTerminalBox", "IfcDamper", "IfcElectricDistributionBoard",
        "IfcElectricTimeControl", "IfcFlowMeter", "IfcProtectiveDevice", "IfcSwitchingDevice",
        "IfcValve",
    ),
    &predefined!("IfcFlowMovingDevice": "IfcCompressor", "IfcFan", "IfcPump"),
    &predefined!("IfcFlowStorageDevice": "IfcElectricFlowStorageDevice", "IfcTank"),
    &predefined!("IfcFlowTreatmentDevice": "IfcDuctSilencer", "IfcFilter", "IfcInterceptor"),
    &predefined!("IfcEnergyConversionDevice":
        "IfcAirToAirHeatRecovery", "IfcBoiler", "IfcBurner", "IfcChiller", "IfcCoil",
        "IfcCondenser", "IfcCooledBeam", "IfcCoolingTower", "IfcElectricGenerator",
        "IfcElectricMotor", "IfcEngine", "IfcEvaporativeCooler", "IfcEvaporator",
        "IfcHeatExchanger", "IfcHumidifier", "IfcMotorConnection", "IfcSolarDevice",
        "IfcTransformer", "IfcTubeBundle", "IfcUnitaryEquipment",
    ),
    &predefined!("IfcBuildingElementType":
        "IfcWallType", "IfcSlabType", "IfcBeamType", "IfcColumnType", "IfcMemberType",
        "IfcPlateType", "IfcCoveringType", "IfcRailingType", "IfcFootingType",
        "IfcBuildingElementProxyType",
    ),
];

/// IFC4X3 layouts layered over IFC4
pub(super) static IFC4X3_CORE: &[EntityDef] = &[
    entity!("IfcObjectPlacement", ["PlacementRelTo"]),
    entity!("IfcLocalPlacement", "IfcObjectPlacement", ["RelativePlacement"]),
    entity!("IfcAnnotation", "IfcProduct", ["PredefinedType"]),
    entity!("IfcFacility", "IfcSpatialStructureElement", []),
    entity!("IfcBuilding", "IfcFacility", [
        "ElevationOfRefHeight", "ElevationOfTerrain", "BuildingAddress",
    ]),
    entity!("IfcFacilityPart", "IfcSpatialStructureElement", ["UsageType"]),
    entity!("IfcPositioningElement", "IfcProduct", []),
    entity!("IfcLinearPositioningElement", "IfcPositioningElement", []),
    entity!("IfcGrid", "IfcPositioningElement", ["UAxes", "VAxes", "WAxes", "PredefinedType"]),
    entity!("IfcDeepFoundation", "IfcBuildingElement", []),
    entity!("IfcPile", "IfcDeepFoundation", ["PredefinedType", "ConstructionType"]),
    entity!("IfcEarthworksElement", "IfcBuildingElement", []),
    entity!("IfcKerb", "IfcBuildingElement", []),
    entity!("IfcGeotechnicalElement", "IfcElement", []),
    entity!("IfcGeotechnicalAssembly", "IfcGeotechnicalElement", []),
    entity!("IfcBorehole", "IfcGeotechnicalAssembly", []),
    entity!("IfcGeomodel", "IfcGeotechnicalAssembly", []),
    entity!("IfcGeoslice", "IfcGeotechnicalAssembly", []),
];

pub(super) static IFC4X3_PREDEFINED: &[&[EntityDef]] = &[
    &predefined!("IfcBuildingElement":
        "IfcBearing", "IfcCourse", "IfcMooringDevice", "IfcNavigationElement",
        "IfcPavement", "IfcRail", "IfcTrackElement",
    ),
    &predefined!("IfcDeepFoundation": "IfcCaissonFoundation"),
    &predefined!("IfcEarthworksElement": "IfcEarthworksFill", "IfcReinforcedSoil"),
    &predefined!("IfcFacility": "IfcBridge", "IfcRoad", "IfcRailway", "IfcMarineFacility"),
    &predefined!("IfcFacilityPart":
        "IfcBridgePart", "IfcRoadPart", "IfcRailwayPart", "IfcFacilityPartCommon",
        "IfcMarinePart",
    ),
    &predefined!("IfcLinearPositioningElement": "IfcAlignment"),
    &predefined!("IfcPositioningElement": "IfcReferent"),
    &predefined!("IfcGeotechnicalElement": "IfcGeotechnicalStratum"),
    &predefined!("IfcElementComponent": "IfcSign"),
    &predefined!("IfcFlowTerminal": "IfcSignal"),
];

/// Entity names that IFC4X3 spells differently
pub(super) static IFC4X3_RENAMES: &[(&str, &str)] = &[
    ("IfcBuildingElement", "IfcBuiltElement"),
    ("IfcBuildingElementType", "IfcBuiltElementType"),
];

pub(super) static IFC2X3_INVERSES: &[InverseDef] = &[
    InverseDef {
        owners: &["IfcObject"],
        name: "IsDefinedBy",
        source: "IfcRelDefinesByProperties",
        attribute: "RelatedObjects",
    },
    InverseDef {
        owners: &["IfcGeometricRepresentationContext"],
        name: "HasSubContexts",
        source: "IfcGeometricRepresentationSubContext",
        attribute: "ParentContext",
    },
];

pub(super) static IFC4_INVERSES: &[InverseDef] = &[
    InverseDef {
        owners: &["IfcObject", "IfcContext"],
        name: "IsDefinedBy",
        source: "IfcRelDefinesByProperties",
        attribute: "RelatedObjects",
    },
    InverseDef {
        owners: &["IfcGeometricRepresentationContext"],
        name: "HasSubContexts",
        source: "IfcGeometricRepresentationSubContext",
        attribute: "ParentContext",
    },
    InverseDef {
        owners: &["IfcGeometricRepresentationContext", "IfcCoordinateReferenceSystem"],
        name: "HasCoordinateOperation",
        source: "IfcCoordinateOperation",
        attribute: "SourceCRS",
    },
];
