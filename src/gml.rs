//! GML (Geography Markup Language) geometry subset
//!
//! The geometries that occur in descriptions of places: points, line
//! strings, polygons with their rings, and the curve family used for
//! arc-based ring boundaries. Coordinates may be given as `pos`/`posList`
//! (GML 3) or `coordinates`/`coord` (deprecated GML 2 forms); all four
//! are bound so that either generation of document parses.

use std::fmt;

use crate::binding::{
    atom_opt, atom_req, attr_opt, bind_choice, choice_opt, choice_vec, elem_opt, elem_opt_boxed,
    elem_vec, group_field, text_field, BindRecord, FieldBinding, Root,
};
use crate::error::{Error, Result};
use crate::namespaces::{QName, GML_NAMESPACE};
use crate::xlink;
use crate::xsdt::{self, Atom};

const fn q(local: &'static str) -> QName {
    QName::namespaced(GML_NAMESPACE, local)
}

/// A whitespace-separated list of doubles, kept in lexical form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoubleList(pub String);

impl Atom for DoubleList {
    const TYPE_NAME: &'static str = "gml:doubleList";

    fn from_lexical(text: &str) -> Result<Self> {
        for token in text.split_whitespace() {
            if token.parse::<f64>().is_err() {
                return Err(Error::lexical(Self::TYPE_NAME, text));
            }
        }
        Ok(Self(text.split_whitespace().collect::<Vec<_>>().join(" ")))
    }

    fn to_lexical(&self) -> String {
        self.0.clone()
    }
}

impl DoubleList {
    /// The coordinate values as numbers
    pub fn values(&self) -> Vec<f64> {
        self.0
            .split_whitespace()
            .filter_map(|t| t.parse().ok())
            .collect()
    }
}

impl From<&str> for DoubleList {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for DoubleList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A whitespace-separated list of NCNames (axis and unit labels)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NCNameList(pub String);

impl Atom for NCNameList {
    const TYPE_NAME: &'static str = "gml:NCNameList";

    fn from_lexical(text: &str) -> Result<Self> {
        for token in text.split_whitespace() {
            xsdt::NCName::from_lexical(token)?;
        }
        Ok(Self(text.split_whitespace().collect::<Vec<_>>().join(" ")))
    }

    fn to_lexical(&self) -> String {
        self.0.clone()
    }
}

impl From<&str> for NCNameList {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A curve interpolation identifier (e.g. `circularArc3Points`), kept
/// open since the GML code list is extensible
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurveInterpolation(pub String);

impl Atom for CurveInterpolation {
    const TYPE_NAME: &'static str = "gml:CurveInterpolationType";

    fn from_lexical(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::lexical(Self::TYPE_NAME, text));
        }
        Ok(Self(trimmed.to_string()))
    }

    fn to_lexical(&self) -> String {
        self.0.clone()
    }
}

impl From<&str> for CurveInterpolation {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

xsdt::closed_enum! {
    /// Orientation of an orientable curve relative to its base curve
    pub enum Sign("gml:SignType") {
        /// Same orientation as the base curve
        Plus => "+",
        /// Reversed orientation
        Minus => "-",
    }
}

/// The spatial-reference attribute group carried by geometries and
/// direct positions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SrsReference {
    /// `srsName` attribute - the coordinate reference system
    pub srs_name: Option<xsdt::AnyUri>,
    /// `srsDimension` attribute
    pub srs_dimension: Option<xsdt::PositiveInteger>,
    /// `axisLabels` attribute
    pub axis_labels: Option<NCNameList>,
    /// `uomLabels` attribute
    pub uom_labels: Option<NCNameList>,
}

impl BindRecord for SrsReference {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        attr_opt!(SrsReference, srs_name, QName::local("srsName")),
        attr_opt!(SrsReference, srs_dimension, QName::local("srsDimension")),
        attr_opt!(SrsReference, axis_labels, QName::local("axisLabels")),
        attr_opt!(SrsReference, uom_labels, QName::local("uomLabels")),
    ];
}

/// `gml:metaDataProperty` - metadata attached by reference
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaDataProperty {
    /// The XLink simple-link attribute group
    pub link: xlink::SimpleLink,
    /// `about` attribute
    pub about: Option<xsdt::AnyUri>,
}

impl BindRecord for MetaDataProperty {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        group_field!(MetaDataProperty, link, xlink::SimpleLink),
        attr_opt!(MetaDataProperty, about, QName::local("about")),
    ];
}

/// A term with an optional `codeSpace` qualifying authority
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Code {
    /// Character content
    pub value: xsdt::String,
    /// `codeSpace` attribute
    pub code_space: Option<xsdt::AnyUri>,
}

impl BindRecord for Code {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        text_field!(Code, value),
        attr_opt!(Code, code_space, QName::local("codeSpace")),
    ];
}

/// Text that may instead point elsewhere via XLink
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringOrRef {
    /// Character content
    pub value: xsdt::String,
    /// The XLink simple-link attribute group
    pub link: xlink::SimpleLink,
    /// `remoteSchema` attribute
    pub remote_schema: Option<xsdt::AnyUri>,
}

impl BindRecord for StringOrRef {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        text_field!(StringOrRef, value),
        group_field!(StringOrRef, link, xlink::SimpleLink),
        attr_opt!(StringOrRef, remote_schema, QName::local("remoteSchema")),
    ];
}

/// The standard-object group every GML object carries: metadata,
/// description, and names
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StandardObjectProperties {
    /// `metaDataProperty` children
    pub meta_data_properties: Vec<MetaDataProperty>,
    /// `description` child
    pub description: Option<StringOrRef>,
    /// `name` children
    pub names: Vec<Code>,
}

impl BindRecord for StandardObjectProperties {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(
            StandardObjectProperties,
            meta_data_properties,
            q("metaDataProperty"),
            MetaDataProperty
        ),
        elem_opt!(
            StandardObjectProperties,
            description,
            q("description"),
            StringOrRef
        ),
        elem_vec!(StandardObjectProperties, names, q("name"), Code),
    ];
}

/// The group shared by all geometries: standard object properties plus
/// identification and spatial reference attributes. `gid` is the
/// deprecated GML 2 identifier, kept for old documents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryProperties {
    /// The standard-object group
    pub standard: StandardObjectProperties,
    /// `id` attribute
    pub id: Option<xsdt::Id>,
    /// `gid` attribute (deprecated)
    pub gid: Option<xsdt::String>,
    /// The spatial-reference attribute group
    pub srs: SrsReference,
}

impl BindRecord for GeometryProperties {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        group_field!(GeometryProperties, standard, StandardObjectProperties),
        attr_opt!(GeometryProperties, id, QName::local("id")),
        attr_opt!(GeometryProperties, gid, QName::local("gid")),
        group_field!(GeometryProperties, srs, SrsReference),
    ];
}

/// `gml:pos` - a direct position, one coordinate tuple
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectPosition {
    /// The coordinate values
    pub value: DoubleList,
    /// The spatial-reference attribute group
    pub srs: SrsReference,
}

impl BindRecord for DirectPosition {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        text_field!(DirectPosition, value),
        group_field!(DirectPosition, srs, SrsReference),
    ];
}

/// `gml:coordinates` - coordinate tuples in a single string (deprecated
/// GML 2 form)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coordinates {
    /// Character content
    pub value: xsdt::String,
    /// `decimal` attribute - the decimal separator, "." by default
    pub decimal: Option<xsdt::String>,
    /// `cs` attribute - the coordinate separator, "," by default
    pub cs: Option<xsdt::String>,
    /// `ts` attribute - the tuple separator, " " by default
    pub ts: Option<xsdt::String>,
}

impl BindRecord for Coordinates {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        text_field!(Coordinates, value),
        attr_opt!(Coordinates, decimal, QName::local("decimal")),
        attr_opt!(Coordinates, cs, QName::local("cs")),
        attr_opt!(Coordinates, ts, QName::local("ts")),
    ];
}

/// `gml:coord` - one coordinate tuple as explicit X/Y/Z elements
/// (deprecated GML 2 form)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coord {
    /// `X` child
    pub x: xsdt::Decimal,
    /// `Y` child
    pub y: Option<xsdt::Decimal>,
    /// `Z` child
    pub z: Option<xsdt::Decimal>,
}

impl BindRecord for Coord {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        atom_req!(Coord, x, q("X")),
        atom_opt!(Coord, y, q("Y")),
        atom_opt!(Coord, z, q("Z")),
    ];
}

/// `gml:Point`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Point {
    /// The shared geometry group
    pub geometry: GeometryProperties,
    /// `pos` child
    pub pos: Option<DirectPosition>,
    /// `coordinates` child (deprecated)
    pub coordinates: Option<Coordinates>,
    /// `coord` child (deprecated)
    pub coord: Option<Coord>,
}

impl BindRecord for Point {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        group_field!(Point, geometry, GeometryProperties),
        elem_opt!(Point, pos, q("pos"), DirectPosition),
        elem_opt!(Point, coordinates, q("coordinates"), Coordinates),
        elem_opt!(Point, coord, q("coord"), Coord),
    ];
}

impl Root for Point {
    const ROOT: QName = q("Point");
}

/// `gml:pointProperty` - a point in place or by reference
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointProperty {
    /// `Point` child
    pub point: Option<Point>,
    /// The XLink simple-link attribute group
    pub link: xlink::SimpleLink,
    /// `remoteSchema` attribute
    pub remote_schema: Option<xsdt::AnyUri>,
}

impl BindRecord for PointProperty {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_opt!(PointProperty, point, q("Point"), Point),
        group_field!(PointProperty, link, xlink::SimpleLink),
        attr_opt!(PointProperty, remote_schema, QName::local("remoteSchema")),
    ];
}

/// `gml:LineString` - a curve with linear interpolation between the
/// listed positions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineString {
    /// The shared geometry group
    pub geometry: GeometryProperties,
    /// `pos` children
    pub poses: Vec<DirectPosition>,
    /// `posList` child
    pub pos_list: Option<DirectPosition>,
    /// `coordinates` child (deprecated)
    pub coordinates: Option<Coordinates>,
    /// `coord` children (deprecated)
    pub coords: Vec<Coord>,
}

impl BindRecord for LineString {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        group_field!(LineString, geometry, GeometryProperties),
        elem_vec!(LineString, poses, q("pos"), DirectPosition),
        elem_opt!(LineString, pos_list, q("posList"), DirectPosition),
        elem_opt!(LineString, coordinates, q("coordinates"), Coordinates),
        elem_vec!(LineString, coords, q("coord"), Coord),
    ];
}

impl Root for LineString {
    const ROOT: QName = q("LineString");
}

/// `gml:LinearRing` - a closed ring with linear interpolation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearRing {
    /// The shared geometry group
    pub geometry: GeometryProperties,
    /// `pos` children
    pub poses: Vec<DirectPosition>,
    /// `posList` child
    pub pos_list: Option<DirectPosition>,
    /// `coordinates` child (deprecated)
    pub coordinates: Option<Coordinates>,
    /// `coord` children (deprecated)
    pub coords: Vec<Coord>,
}

impl BindRecord for LinearRing {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        group_field!(LinearRing, geometry, GeometryProperties),
        elem_vec!(LinearRing, poses, q("pos"), DirectPosition),
        elem_opt!(LinearRing, pos_list, q("posList"), DirectPosition),
        elem_opt!(LinearRing, coordinates, q("coordinates"), Coordinates),
        elem_vec!(LinearRing, coords, q("coord"), Coord),
    ];
}

bind_choice! {
    /// The ring forms a polygon boundary may take
    pub enum RingChoice {
        /// A `LinearRing`
        Linear(LinearRing) => q("LinearRing"),
        /// A `Ring` assembled from curve members
        Ring(Ring) => q("Ring"),
    }
}

/// A polygon boundary property holding one ring
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RingProperty {
    /// The ring itself
    pub ring: Option<RingChoice>,
}

impl BindRecord for RingProperty {
    const FIELDS: &'static [FieldBinding<Self>] = &[choice_opt!(RingProperty, ring, RingChoice)];
}

/// `gml:Ring` - a closed boundary assembled from curve members
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ring {
    /// The shared geometry group
    pub geometry: GeometryProperties,
    /// `curveMember` children
    pub curve_members: Vec<CurveProperty>,
}

impl BindRecord for Ring {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        group_field!(Ring, geometry, GeometryProperties),
        elem_vec!(Ring, curve_members, q("curveMember"), CurveProperty),
    ];
}

bind_choice! {
    /// The curve forms a curve property may hold
    pub enum CurveChoice {
        /// A `LineString`
        LineString(LineString) => q("LineString"),
        /// A `CompositeCurve`
        Composite(CompositeCurve) => q("CompositeCurve"),
        /// A `Curve` built from segments
        Curve(Curve) => q("Curve"),
        /// An `OrientableCurve`
        Orientable(OrientableCurve) => q("OrientableCurve"),
    }
}

/// A curve in place or by reference
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveProperty {
    /// The curve itself
    pub curve: Option<CurveChoice>,
    /// The XLink simple-link attribute group
    pub link: xlink::SimpleLink,
    /// `remoteSchema` attribute
    pub remote_schema: Option<xsdt::AnyUri>,
}

impl BindRecord for CurveProperty {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        choice_opt!(CurveProperty, curve, CurveChoice),
        group_field!(CurveProperty, link, xlink::SimpleLink),
        attr_opt!(CurveProperty, remote_schema, QName::local("remoteSchema")),
    ];
}

/// `gml:CompositeCurve` - curve members joined end to end
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompositeCurve {
    /// The shared geometry group
    pub geometry: GeometryProperties,
    /// `curveMember` children
    pub curve_members: Vec<CurveProperty>,
}

impl BindRecord for CompositeCurve {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        group_field!(CompositeCurve, geometry, GeometryProperties),
        elem_vec!(
            CompositeCurve,
            curve_members,
            q("curveMember"),
            CurveProperty
        ),
    ];
}

/// `gml:OrientableCurve` - a base curve with a traversal direction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrientableCurve {
    /// The shared geometry group
    pub geometry: GeometryProperties,
    /// `baseCurve` child
    pub base_curve: Option<Box<CurveProperty>>,
    /// `orientation` attribute
    pub orientation: Option<Sign>,
}

impl BindRecord for OrientableCurve {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        group_field!(OrientableCurve, geometry, GeometryProperties),
        elem_opt_boxed!(OrientableCurve, base_curve, q("baseCurve"), CurveProperty),
        attr_opt!(OrientableCurve, orientation, QName::local("orientation")),
    ];
}

/// `gml:Curve` - a curve built from typed segments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    /// The shared geometry group
    pub geometry: GeometryProperties,
    /// `segments` child
    pub segments: Option<CurveSegments>,
}

impl BindRecord for Curve {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        group_field!(Curve, geometry, GeometryProperties),
        elem_opt!(Curve, segments, q("segments"), CurveSegments),
    ];
}

/// `gml:segments` - the segment list of a curve
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveSegments {
    /// The segments in traversal order
    pub segments: Vec<SegmentChoice>,
}

impl BindRecord for CurveSegments {
    const FIELDS: &'static [FieldBinding<Self>] =
        &[choice_vec!(CurveSegments, segments, SegmentChoice)];
}

bind_choice! {
    /// Curve segment alternatives
    pub enum SegmentChoice {
        /// An `ArcString` of one or more circular arcs
        ArcString(ArcString) => q("ArcString"),
        /// A single `Arc`
        Arc(ArcString) => q("Arc"),
    }
}

/// The attribute group shared by curve segments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentProperties {
    /// `numDerivativesAtStart` attribute
    pub num_derivatives_at_start: Option<xsdt::Integer>,
    /// `numDerivativesAtEnd` attribute
    pub num_derivatives_at_end: Option<xsdt::Integer>,
    /// `numDerivativeInterior` attribute
    pub num_derivative_interior: Option<xsdt::Integer>,
}

impl BindRecord for SegmentProperties {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        attr_opt!(
            SegmentProperties,
            num_derivatives_at_start,
            QName::local("numDerivativesAtStart")
        ),
        attr_opt!(
            SegmentProperties,
            num_derivatives_at_end,
            QName::local("numDerivativesAtEnd")
        ),
        attr_opt!(
            SegmentProperties,
            num_derivative_interior,
            QName::local("numDerivativeInterior")
        ),
    ];
}

/// `gml:ArcString` (and `gml:Arc`, which shares the shape with `numArc`
/// fixed to one)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArcString {
    /// The shared segment group
    pub segment: SegmentProperties,
    /// `pos` children
    pub poses: Vec<DirectPosition>,
    /// `posList` child
    pub pos_list: Option<DirectPosition>,
    /// `coordinates` child (deprecated)
    pub coordinates: Option<Coordinates>,
    /// `pointProperty` children
    pub point_properties: Vec<PointProperty>,
    /// `pointRep` children (deprecated alias of `pointProperty`)
    pub point_reps: Vec<PointProperty>,
    /// `interpolation` attribute, `circularArc3Points` if absent
    pub interpolation: Option<CurveInterpolation>,
    /// `numArc` attribute
    pub num_arc: Option<xsdt::Integer>,
}

impl BindRecord for ArcString {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        group_field!(ArcString, segment, SegmentProperties),
        elem_vec!(ArcString, poses, q("pos"), DirectPosition),
        elem_opt!(ArcString, pos_list, q("posList"), DirectPosition),
        elem_opt!(ArcString, coordinates, q("coordinates"), Coordinates),
        elem_vec!(ArcString, point_properties, q("pointProperty"), PointProperty),
        elem_vec!(ArcString, point_reps, q("pointRep"), PointProperty),
        attr_opt!(ArcString, interpolation, QName::local("interpolation")),
        attr_opt!(ArcString, num_arc, QName::local("numArc")),
    ];
}

/// `gml:Polygon` - a surface patch bounded by an exterior ring and any
/// number of interior rings. The `outerBoundaryIs`/`innerBoundaryIs`
/// spellings are the deprecated GML 2 forms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    /// The shared geometry group
    pub geometry: GeometryProperties,
    /// `exterior` child
    pub exterior: Option<RingProperty>,
    /// `outerBoundaryIs` child (deprecated)
    pub outer_boundary: Option<RingProperty>,
    /// `interior` children
    pub interiors: Vec<RingProperty>,
    /// `innerBoundaryIs` children (deprecated)
    pub inner_boundaries: Vec<RingProperty>,
}

impl BindRecord for Polygon {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        group_field!(Polygon, geometry, GeometryProperties),
        elem_opt!(Polygon, exterior, q("exterior"), RingProperty),
        elem_opt!(Polygon, outer_boundary, q("outerBoundaryIs"), RingProperty),
        elem_vec!(Polygon, interiors, q("interior"), RingProperty),
        elem_vec!(Polygon, inner_boundaries, q("innerBoundaryIs"), RingProperty),
    ];
}

impl Root for Polygon {
    const ROOT: QName = q("Polygon");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{marshal, unmarshal};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_point_pos_roundtrip() {
        let point = Point {
            geometry: GeometryProperties {
                srs: SrsReference {
                    srs_name: Some("urn:ogc:def:crs:EPSG::4326".into()),
                    ..Default::default()
                },
                ..Default::default()
            },
            pos: Some(DirectPosition {
                value: "52.5200 13.4050".into(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let xml = marshal(&point).unwrap();
        assert!(xml.starts_with(
            "<Point xmlns=\"http://www.opengis.net/gml\" srsName=\"urn:ogc:def:crs:EPSG::4326\">"
        ));
        assert!(xml.contains("<pos>52.5200 13.4050</pos>"));

        let parsed: Point = unmarshal(&xml).unwrap();
        assert_eq!(point, parsed);
        assert_eq!(
            parsed.pos.unwrap().value.values(),
            vec![52.52, 13.405]
        );
    }

    #[test]
    fn test_polygon_exterior_linear_ring() {
        let xml = r#"<Polygon xmlns="http://www.opengis.net/gml">
            <name>site boundary</name>
            <exterior>
                <LinearRing>
                    <posList>0 0 0 1 1 1 1 0 0 0</posList>
                </LinearRing>
            </exterior>
        </Polygon>"#;
        let polygon: Polygon = unmarshal(xml).unwrap();
        assert_eq!(polygon.geometry.standard.names[0].value.as_str(), "site boundary");
        match polygon.exterior.unwrap().ring {
            Some(RingChoice::Linear(ring)) => {
                assert_eq!(ring.pos_list.unwrap().value.values().len(), 10);
            }
            other => panic!("expected a linear ring, got {:?}", other),
        }
    }

    #[test]
    fn test_gml2_coordinates_still_parse() {
        let xml = r#"<LineString xmlns="http://www.opengis.net/gml" gid="ls1">
            <coordinates cs="," ts=" ">0,0 10,10</coordinates>
        </LineString>"#;
        let line: LineString = unmarshal(xml).unwrap();
        assert_eq!(line.geometry.gid.unwrap().as_str(), "ls1");
        let coords = line.coordinates.unwrap();
        assert_eq!(coords.cs.unwrap().as_str(), ",");
        assert_eq!(coords.value.as_str(), "0,0 10,10");
    }

    #[test]
    fn test_orientable_curve_reverses_base() {
        let curve = OrientableCurve {
            orientation: Some(Sign::Minus),
            base_curve: Some(Box::new(CurveProperty {
                curve: Some(CurveChoice::LineString(LineString {
                    pos_list: Some(DirectPosition {
                        value: "0 0 5 5".into(),
                        ..Default::default()
                    }),
                    ..Default::default()
                })),
                ..Default::default()
            })),
            ..Default::default()
        };
        let xml = crate::binding::marshal_fragment(&curve, q("OrientableCurve")).unwrap();
        assert!(xml.contains("orientation=\"-\""));
        assert!(xml.contains("<baseCurve><LineString><posList>0 0 5 5</posList></LineString></baseCurve>"));

        let parsed: OrientableCurve =
            crate::binding::unmarshal_fragment(&xml, q("OrientableCurve")).unwrap();
        assert_eq!(curve, parsed);
    }

    #[test]
    fn test_arc_and_arc_string_dispatch() {
        let xml = r#"<Curve xmlns="http://www.opengis.net/gml">
            <segments>
                <Arc><posList>0 0 1 1 2 0</posList></Arc>
                <ArcString numArc="2" interpolation="circularArc3Points">
                    <posList>0 0 1 1 2 0 3 -1 4 0</posList>
                </ArcString>
            </segments>
        </Curve>"#;
        let curve: Curve = crate::binding::unmarshal_fragment(xml, q("Curve")).unwrap();
        let segments = curve.segments.unwrap().segments;
        assert_eq!(segments.len(), 2);
        assert!(matches!(segments[0], SegmentChoice::Arc(_)));
        match &segments[1] {
            SegmentChoice::ArcString(arc) => {
                assert_eq!(arc.num_arc.unwrap().0, 2);
                assert_eq!(
                    arc.interpolation.as_ref().unwrap().0,
                    "circularArc3Points"
                );
            }
            other => panic!("expected an arc string, got {:?}", other),
        }
    }
}
