//! Tests for definition equivalence

use crate::srs::constants::{params, wkt};
use crate::srs::model::SpatialReference;

fn utm(zone: i32) -> SpatialReference {
    let mut srs = SpatialReference::new();
    srs.set_utm(zone, true).unwrap();
    srs.set_well_known_geog_cs("WGS84").unwrap();
    srs
}

#[test]
fn test_identical_definitions() {
    assert!(utm(11).is_same(&utm(11)));
    assert!(SpatialReference::new().is_same(&SpatialReference::new()));
    assert!(!SpatialReference::new().is_same(&utm(11)));
}

#[test]
fn test_names_are_ignored() {
    let a = utm(11);
    let mut b = utm(11);
    b.set_node("PROJCS", "Some other name").unwrap();
    b.set_authority("PROJCS", "EPSG", 32611).unwrap();

    assert!(a.is_same(&b));
}

#[test]
fn test_parameter_change_is_detected() {
    let a = utm(11);
    let mut b = utm(11);
    b.set_proj_parm(params::FALSE_EASTING, 500001.0).unwrap();
    assert!(!a.is_same(&b));

    // Within relative tolerance
    let mut c = utm(11);
    c.set_proj_parm(params::FALSE_EASTING, 500000.000001).unwrap();
    assert!(a.is_same(&c));

    assert!(!utm(11).is_same(&utm(12)));
}

#[test]
fn test_linear_units_must_match() {
    let a = utm(11);
    let mut b = utm(11);
    b.set_linear_units("Foot", 0.3048).unwrap();

    assert!(!a.is_same(&b));
}

#[test]
fn test_geographic_parts() {
    let wgs84 = SpatialReference::from_wkt(wkt::WGS84).unwrap();
    let mut nad27 = SpatialReference::new();
    nad27.set_well_known_geog_cs("NAD27").unwrap();
    assert!(!wgs84.is_same_geog_cs(&nad27));
    assert!(!wgs84.is_same(&nad27));

    // Zero Bursa-Wolf parameters equal absent ones
    let mut shifted = SpatialReference::from_wkt(wkt::WGS84).unwrap();
    shifted.set_towgs84([0.0; 7]).unwrap();
    assert!(wgs84.is_same_geog_cs(&shifted));

    shifted.set_towgs84([1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
    assert!(!wgs84.is_same_geog_cs(&shifted));
}

#[test]
fn test_geographic_differs_from_projected() {
    let wgs84 = SpatialReference::from_wkt(wkt::WGS84).unwrap();
    assert!(!wgs84.is_same(&utm(11)));
}

#[test]
fn test_vertical_parts() {
    let mut a = SpatialReference::from_wkt(wkt::WGS84).unwrap();
    a.set_vert_cs("EGM96 geoid height", "EGM96 geoid", 2005).unwrap();
    let mut b = SpatialReference::from_wkt(wkt::WGS84).unwrap();
    b.set_vert_cs("EGM96 height", "EGM96 geoid", 2005).unwrap();
    assert!(a.is_same_vert_cs(&b));
    assert!(a.is_same(&b));

    let mut c = SpatialReference::from_wkt(wkt::WGS84).unwrap();
    c.set_vert_cs("NAVD88 height", "NAVD88", 2005).unwrap();
    assert!(!a.is_same(&c));
}
