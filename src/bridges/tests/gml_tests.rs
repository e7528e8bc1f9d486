//! Tests for the GML bridge

use crate::bridges::tests::test_utils::{assert_close, bridge_context};
use crate::srs::constants::{params, projections, wkt};
use crate::srs::errors::SrsError;
use crate::srs::model::SpatialReference;

fn utm_11n() -> SpatialReference {
    let mut srs = SpatialReference::new();
    srs.set_utm(11, true).unwrap();
    srs.set_well_known_geog_cs("WGS84").unwrap();
    srs.set_authority("PROJCS", "EPSG", 32611).unwrap();
    srs
}

#[test]
fn test_export_geographic() {
    let ctx = bridge_context();
    let srs = SpatialReference::from_wkt(wkt::WGS84).unwrap();

    let xml = srs.export_to_xml(&ctx).unwrap();

    assert!(xml.starts_with("<gml:GeographicCRS gml:id=\"ogrcrs1\""));
    assert!(xml.contains("<gml:srsName>WGS 84</gml:srsName>"));
    assert!(xml.contains("<gml:srsID xlink:href=\"urn:ogc:def:crs:EPSG::4326\"/>"));
    assert!(xml.contains("<gml:csID xlink:href=\"urn:ogc:def:cs:EPSG::6402\"/>"));
    assert!(xml.contains("<gml:datumName>WGS_1984</gml:datumName>"));
    assert!(xml.contains(">6378137</gml:semiMajorAxis>"));
    assert!(xml.contains(">298.257223563</gml:inverseFlattening>"));
}

#[test]
fn test_export_ids_increase() {
    let ctx = bridge_context();
    let srs = SpatialReference::from_wkt(wkt::WGS84).unwrap();

    let first = srs.export_to_xml(&ctx).unwrap();
    let second = srs.export_to_xml(&ctx).unwrap();

    // Root, ellipsoidal CS, two axes, datum, meridian, ellipsoid
    assert!(first.contains("gml:id=\"ogrcrs7\""));
    assert!(!first.contains("gml:id=\"ogrcrs8\""));
    assert!(second.starts_with("<gml:GeographicCRS gml:id=\"ogrcrs8\""));
}

#[test]
fn test_export_projected_conversion() {
    let ctx = bridge_context();
    let xml = utm_11n().export_to_xml(&ctx).unwrap();

    assert!(xml.starts_with("<gml:ProjectedCRS"));
    assert!(xml.contains("<gml:baseCRS>"));
    assert!(xml.contains("<gml:usesMethod xlink:href=\"urn:ogc:def:method:EPSG::9807\"/>"));
    assert!(xml.contains("<gml:valueOfParameter xlink:href=\"urn:ogc:def:parameter:EPSG::8802\"/>"));
    assert!(xml.contains(">-117</gml:value>"));
    assert!(xml.contains(">0.9996</gml:value>"));
    assert!(xml.contains("<gml:csID xlink:href=\"urn:ogc:def:cs:EPSG::4400\"/>"));
}

#[test]
fn test_export_unhandled_method_leaves_conversion_empty() {
    let ctx = bridge_context();
    let mut srs = SpatialReference::new();
    srs.set_mollweide(0.0, 0.0, 0.0).unwrap();
    srs.set_well_known_geog_cs("WGS84").unwrap();

    let xml = srs.export_to_xml(&ctx).unwrap();
    assert!(xml.contains("<gml:definedByConversion/>"));
}

#[test]
fn test_export_local_is_unsupported() {
    let ctx = bridge_context();
    let mut srs = SpatialReference::new();
    srs.set_local_cs("Site grid").unwrap();

    assert!(srs.export_to_xml(&ctx).unwrap_err().is_unsupported_srs());
}

#[test]
fn test_projected_round_trip() {
    let ctx = bridge_context();
    let xml = utm_11n().export_to_xml(&ctx).unwrap();

    let mut srs = SpatialReference::new();
    srs.import_from_xml(&ctx, &xml).unwrap();

    assert!(srs.is_projected());
    assert_eq!(srs.get_attr_value("PROJECTION", 0), Some(projections::TRANSVERSE_MERCATOR));
    assert_close(srs.get_norm_proj_parm(params::CENTRAL_MERIDIAN, 0.0), -117.0);
    assert_close(srs.get_proj_parm(params::SCALE_FACTOR, 0.0), 0.9996);
    assert_close(srs.get_norm_proj_parm(params::FALSE_EASTING, 0.0), 500000.0);
    assert_close(srs.get_semi_major(), 6378137.0);
    assert_close(srs.get_inv_flattening(), 298.257223563);
    assert_eq!(srs.get_authority_code(Some("PROJCS")), Some("32611"));
    assert_eq!(srs.get_authority_code(Some("GEOGCS")), Some("4326"));
    assert_eq!(srs.get_authority_code(Some("SPHEROID")), Some("7030"));
    assert_eq!(srs.get_utm_zone(), Some((11, true)));
}

#[test]
fn test_import_geographic_by_code_space() {
    let ctx = bridge_context();
    let xml = r#"<?xml version="1.0"?>
<gml:GeographicCRS xmlns:gml="http://www.opengis.net/gml">
  <gml:srsName>WGS 84</gml:srsName>
  <gml:srsID>
    <gml:name codeSpace="urn:ogc:def:crs:EPSG:">4326</gml:name>
  </gml:srsID>
</gml:GeographicCRS>"#;

    let mut srs = SpatialReference::new();
    srs.import_from_xml(&ctx, xml).unwrap();

    assert!(srs.is_geographic());
    assert_eq!(srs.get_authority_code(Some("GEOGCS")), Some("4326"));
    assert_close(srs.get_semi_major(), 6378137.0);
}

#[test]
fn test_import_inline_datum() {
    let ctx = bridge_context();
    let xml = r#"<GeographicCRS>
  <srsName>Pulkovo</srsName>
  <usesGeodeticDatum>
    <GeodeticDatum>
      <datumName>Pulkovo_1942</datumName>
      <usesPrimeMeridian>
        <PrimeMeridian>
          <meridianName>Greenwich</meridianName>
          <greenwichLongitude><angle>0</angle></greenwichLongitude>
        </PrimeMeridian>
      </usesPrimeMeridian>
      <usesEllipsoid>
        <Ellipsoid>
          <ellipsoidName>Krassowsky 1940</ellipsoidName>
          <semiMajorAxis>6378245</semiMajorAxis>
          <secondDefiningParameter><inverseFlattening>298.3</inverseFlattening></secondDefiningParameter>
        </Ellipsoid>
      </usesEllipsoid>
    </GeodeticDatum>
  </usesGeodeticDatum>
</GeographicCRS>"#;

    let mut srs = SpatialReference::new();
    srs.import_from_xml(&ctx, xml).unwrap();

    assert_eq!(srs.get_attr_value("GEOGCS", 0), Some("Pulkovo"));
    assert_eq!(srs.get_attr_value("DATUM", 0), Some("Pulkovo_1942"));
    assert_close(srs.get_semi_major(), 6378245.0);
    assert_close(srs.get_inv_flattening(), 298.3);
    assert_eq!(srs.get_angular_units().0, "degree");
}

#[test]
fn test_import_missing_flattening_is_corrupt() {
    let ctx = bridge_context();
    let xml = "<GeographicCRS><srsName>x</srsName><usesGeodeticDatum><GeodeticDatum><datumName>d</datumName></GeodeticDatum></usesGeodeticDatum></GeographicCRS>";

    let mut srs = SpatialReference::new();
    let result = srs.import_from_xml(&ctx, xml);

    assert!(matches!(result, Err(SrsError::CorruptData(_))));
    assert!(srs.root().is_none());
}

#[test]
fn test_import_lcc_is_not_recognised() {
    let ctx = bridge_context();
    let mut source = SpatialReference::new();
    source.set_lcc1sp(45.0, 3.0, 1.0, 700000.0, 6600000.0).unwrap();
    source.set_well_known_geog_cs("WGS84").unwrap();
    let xml = source.export_to_xml(&ctx).unwrap();
    assert!(xml.contains("urn:ogc:def:method:EPSG::9801"));

    let mut srs = SpatialReference::new();
    match srs.import_from_xml(&ctx, &xml) {
        Err(SrsError::CorruptData(message)) => assert!(message.contains("not recognised")),
        other => panic!("unexpected result {:?}", other),
    }
    assert!(srs.root().is_none());
}

#[test]
fn test_import_malformed_xml() {
    let ctx = bridge_context();
    let mut srs = SpatialReference::new();

    let result = srs.import_from_xml(&ctx, "<gml:GeographicCRS><gml:srsName>x</gml:srsName>");
    assert!(matches!(result, Err(SrsError::CorruptData(_))));
}

#[test]
fn test_import_without_crs_element() {
    let ctx = bridge_context();
    let mut srs = SpatialReference::new();

    assert!(srs.import_from_xml(&ctx, "<Other/>").unwrap_err().is_unsupported_srs());
}
