//! Measurements: dimensions, size, shape, scale, and format

use crate::binding::{
    attr_opt, elem_opt, elem_req, elem_vec, group_field, BindRecord, FieldBinding,
};
use crate::namespaces::QName;
use crate::xsdt;

use super::{q, Text};

/// `lido:objectMeasurementsWrap`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementsWrap {
    /// `objectMeasurementsSet` children
    pub sets: Vec<MeasurementsSet>,
}

impl BindRecord for MeasurementsWrap {
    const FIELDS: &'static [FieldBinding<Self>] = &[elem_vec!(
        MeasurementsWrap,
        sets,
        q("objectMeasurementsSet"),
        MeasurementsSet
    )];
}

/// `lido:objectMeasurementsSet` - display and index elements for one
/// object measurement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementsSet {
    /// `displayObjectMeasurements` children, repeated for language variants
    pub display_measurements: Vec<Text>,
    /// `objectMeasurements` child
    pub measurements: Option<Measurements>,
    /// `sortorder` attribute
    pub sort_order: Option<xsdt::Integer>,
}

impl BindRecord for MeasurementsSet {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(
            MeasurementsSet,
            display_measurements,
            q("displayObjectMeasurements"),
            Text
        ),
        elem_opt!(
            MeasurementsSet,
            measurements,
            q("objectMeasurements"),
            Measurements
        ),
        attr_opt!(MeasurementsSet, sort_order, QName::local("sortorder")),
    ];
}

/// `lido:objectMeasurements` - structured measurement information about
/// the dimensions, size, or scale of the object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurements {
    /// `formatMeasurements` children - technical formats, e.g. VHS, IMAX
    pub formats: Vec<ExtentMeasurement>,
    /// `shapeMeasurements` children - e.g. oval, round, irregular
    pub shapes: Vec<ExtentMeasurement>,
    /// `scaleMeasurements` children - e.g. 1 inch = 1 foot, life-size
    pub scales: Vec<ExtentMeasurement>,
    /// `measurementsSet` children - one aspect each, e.g. width
    pub sets: Vec<AspectMeasurements>,
    /// `extentMeasurements` children - the part being measured
    pub extents: Vec<ExtentMeasurement>,
    /// `qualifierMeasurements` children - e.g. approximate, framed
    pub qualifiers: Vec<ExtentMeasurement>,
}

impl BindRecord for Measurements {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(
            Measurements,
            formats,
            q("formatMeasurements"),
            ExtentMeasurement
        ),
        elem_vec!(
            Measurements,
            shapes,
            q("shapeMeasurements"),
            ExtentMeasurement
        ),
        elem_vec!(
            Measurements,
            scales,
            q("scaleMeasurements"),
            ExtentMeasurement
        ),
        elem_vec!(Measurements, sets, q("measurementsSet"), AspectMeasurements),
        elem_vec!(
            Measurements,
            extents,
            q("extentMeasurements"),
            ExtentMeasurement
        ),
        elem_vec!(
            Measurements,
            qualifiers,
            q("qualifierMeasurements"),
            ExtentMeasurement
        ),
    ];
}

/// A text measurement qualifier with a presentation order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtentMeasurement {
    /// The text content and its source attributes
    pub text: Text,
    /// `sortorder` attribute
    pub sort_order: Option<xsdt::Integer>,
}

impl BindRecord for ExtentMeasurement {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        group_field!(ExtentMeasurement, text, Text),
        attr_opt!(ExtentMeasurement, sort_order, QName::local("sortorder")),
    ];
}

/// `lido:measurementsSet` - type, unit, and value for one aspect of the
/// object (e.g. width). All three sub-elements are mandatory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AspectMeasurements {
    /// `measurementType` children - e.g. height, width, depth, diameter
    pub types: Vec<Text>,
    /// `measurementUnit` children - e.g. cm, mm, g, kb
    pub units: Vec<Text>,
    /// `measurementValue` child - whole number or decimal fraction
    pub value: Text,
    /// `sortorder` attribute
    pub sort_order: Option<xsdt::Integer>,
}

impl BindRecord for AspectMeasurements {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(AspectMeasurements, types, q("measurementType"), Text),
        elem_vec!(AspectMeasurements, units, q("measurementUnit"), Text),
        elem_req!(AspectMeasurements, value, q("measurementValue"), Text),
        attr_opt!(AspectMeasurements, sort_order, QName::local("sortorder")),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{marshal_fragment, unmarshal_fragment};
    use pretty_assertions::assert_eq;

    fn aspect(kind: &str, unit: &str, value: &str) -> AspectMeasurements {
        AspectMeasurements {
            types: vec![Text::new(kind)],
            units: vec![Text::new(unit)],
            value: Text::new(value),
            ..Default::default()
        }
    }

    #[test]
    fn test_measurements_roundtrip() {
        let wrap = MeasurementsWrap {
            sets: vec![MeasurementsSet {
                display_measurements: vec![Text::new("203 x 314 cm")],
                measurements: Some(Measurements {
                    sets: vec![aspect("height", "cm", "203"), aspect("width", "cm", "314")],
                    ..Default::default()
                }),
                ..Default::default()
            }],
        };

        let xml = marshal_fragment(&wrap, q("objectMeasurementsWrap")).unwrap();
        assert!(xml.contains("<displayObjectMeasurements>203 x 314 cm</displayObjectMeasurements>"));
        assert!(xml.contains(
            "<measurementType>height</measurementType>\
             <measurementUnit>cm</measurementUnit>\
             <measurementValue>203</measurementValue>"
        ));

        let parsed: MeasurementsWrap =
            unmarshal_fragment(&xml, q("objectMeasurementsWrap")).unwrap();
        assert_eq!(wrap, parsed);
    }
}
