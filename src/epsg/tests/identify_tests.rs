//! Tests for EPSG identification

use crate::srs::constants::wkt;
use crate::srs::errors::SrsError;
use crate::srs::model::SpatialReference;

#[test]
fn test_geog_code_from_authority_and_names() {
    let srs = SpatialReference::from_wkt(wkt::WGS72).unwrap();
    assert_eq!(srs.get_epsg_geog_cs(), 4322);

    let srs = SpatialReference::from_wkt(
        "GEOGCS[\"GCS_North_American_1983\",DATUM[\"D_North_American_1983\",SPHEROID[\"GRS_1980\",6378137,298.257222101]],PRIMEM[\"Greenwich\",0],UNIT[\"Degree\",0.0174532925199433]]",
    )
    .unwrap();
    assert_eq!(srs.get_epsg_geog_cs(), 4269);

    let srs = SpatialReference::from_wkt(
        "GEOGCS[\"WGS 84\",DATUM[\"WGS_1984\",SPHEROID[\"WGS 84\",6378137,298.257223563]],PRIMEM[\"Greenwich\",0],UNIT[\"degree\",0.0174532925199433]]",
    )
    .unwrap();
    assert_eq!(srs.get_epsg_geog_cs(), 4326);
}

#[test]
fn test_geog_code_from_datum_authority() {
    let srs = SpatialReference::from_wkt(
        "GEOGCS[\"ETRS89\",DATUM[\"European_Terrestrial_Reference_System_1989\",SPHEROID[\"GRS 1980\",6378137,298.257222101],AUTHORITY[\"EPSG\",\"6258\"]],PRIMEM[\"Greenwich\",0],UNIT[\"degree\",0.0174532925199433]]",
    )
    .unwrap();
    assert_eq!(srs.get_epsg_geog_cs(), 4258);

    let srs = SpatialReference::from_wkt(
        "GEOGCS[\"Unknown\",DATUM[\"Local\",SPHEROID[\"Sphere\",6371000,0]],PRIMEM[\"Greenwich\",0],UNIT[\"degree\",0.0174532925199433]]",
    )
    .unwrap();
    assert_eq!(srs.get_epsg_geog_cs(), -1);
}

#[test]
fn test_auto_identify_utm() {
    let mut srs = SpatialReference::new();
    srs.set_well_known_geog_cs("WGS84").unwrap();
    srs.set_utm(11, true).unwrap();
    srs.auto_identify_epsg().unwrap();
    assert_eq!(srs.get_authority_code(Some("PROJCS")), Some("32611"));

    let mut srs = SpatialReference::new();
    srs.set_well_known_geog_cs("WGS84").unwrap();
    srs.set_utm(33, false).unwrap();
    srs.auto_identify_epsg().unwrap();
    assert_eq!(srs.get_authority_code(Some("PROJCS")), Some("32733"));

    let mut srs = SpatialReference::new();
    srs.set_well_known_geog_cs("NAD27").unwrap();
    srs.set_utm(11, true).unwrap();
    srs.auto_identify_epsg().unwrap();
    assert_eq!(srs.get_authority_code(Some("PROJCS")), Some("26711"));
}

#[test]
fn test_auto_identify_outside_nad27_zones_fails() {
    let mut srs = SpatialReference::new();
    srs.set_well_known_geog_cs("NAD27").unwrap();
    srs.set_utm(2, true).unwrap();

    assert!(matches!(srs.auto_identify_epsg(), Err(SrsError::UnsupportedSrs(_))));
    assert_eq!(srs.get_authority_code(Some("PROJCS")), None);
}

#[test]
fn test_auto_identify_antarctic_polar_stereographic() {
    let mut srs = SpatialReference::new();
    srs.set_well_known_geog_cs("WGS84").unwrap();
    srs.set_ps(-71.0, 0.0, 1.0, 0.0, 0.0).unwrap();
    srs.auto_identify_epsg().unwrap();

    assert_eq!(srs.get_authority_code(Some("PROJCS")), Some("3031"));
}

#[test]
fn test_auto_identify_geographic_by_name() {
    let mut srs = SpatialReference::from_wkt(
        "GEOGCS[\"NAD27\",DATUM[\"North_American_Datum_1927\",SPHEROID[\"Clarke 1866\",6378206.4,294.978698213898]],PRIMEM[\"Greenwich\",0],UNIT[\"degree\",0.0174532925199433]]",
    )
    .unwrap();
    srs.auto_identify_epsg().unwrap();

    assert_eq!(srs.get_authority_code(Some("GEOGCS")), Some("4267"));
}

#[test]
fn test_northing_easting_order() {
    let srs = SpatialReference::from_wkt(
        "PROJCS[\"x\",GEOGCS[\"WGS 84\",DATUM[\"WGS_1984\",SPHEROID[\"WGS 84\",6378137,298.257223563]],PRIMEM[\"Greenwich\",0],UNIT[\"degree\",0.0174532925199433]],PROJECTION[\"Transverse_Mercator\"],UNIT[\"metre\",1],AXIS[\"Northing\",NORTH],AXIS[\"Easting\",EAST],AUTHORITY[\"EPSG\",\"3006\"]]",
    )
    .unwrap();
    assert!(srs.epsg_treats_as_northing_easting());
    assert!(!srs.epsg_treats_as_lat_long());
}

#[test]
fn test_geog_code_zero_authority_is_returned_verbatim() {
    // A stored code of 0 is not the "unknown" sentinel
    let srs = SpatialReference::from_wkt(
        "GEOGCS[\"Custom\",DATUM[\"Custom_Datum\",SPHEROID[\"Custom\",6378137,298.257223563]],PRIMEM[\"Greenwich\",0],UNIT[\"degree\",0.0174532925199433],AUTHORITY[\"EPSG\",\"0\"]]",
    )
    .unwrap();
    assert_eq!(srs.get_epsg_geog_cs(), 0);

    let srs = SpatialReference::from_wkt(
        "GEOGCS[\"Custom\",DATUM[\"Custom_Datum\",SPHEROID[\"Custom\",6378137,298.257223563]],PRIMEM[\"Greenwich\",0],UNIT[\"degree\",0.0174532925199433]]",
    )
    .unwrap();
    assert_eq!(srs.get_epsg_geog_cs(), -1);
}
