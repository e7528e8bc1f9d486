//! Tests for the definition model

use std::sync::Arc;
use std::thread;

use crate::srs::constants::wkt;
use crate::srs::model::{AxisOrientation, SpatialReference};

const UTM_11N: &str = "PROJCS[\"WGS 84 / UTM zone 11N\",GEOGCS[\"WGS 84\",DATUM[\"WGS_1984\",SPHEROID[\"WGS 84\",6378137,298.257223563,AUTHORITY[\"EPSG\",\"7030\"]],AUTHORITY[\"EPSG\",\"6326\"]],PRIMEM[\"Greenwich\",0],UNIT[\"degree\",0.0174532925199433],AUTHORITY[\"EPSG\",\"4326\"]],PROJECTION[\"Transverse_Mercator\"],PARAMETER[\"latitude_of_origin\",0],PARAMETER[\"central_meridian\",-117],PARAMETER[\"scale_factor\",0.9996],PARAMETER[\"false_easting\",500000],PARAMETER[\"false_northing\",0],UNIT[\"metre\",1,AUTHORITY[\"EPSG\",\"9001\"]],AUTHORITY[\"EPSG\",\"32611\"]]";

#[test]
fn test_classification() {
    let geog = SpatialReference::from_wkt(wkt::WGS84).unwrap();
    assert!(geog.is_geographic());
    assert!(!geog.is_projected());

    let proj = SpatialReference::from_wkt(UTM_11N).unwrap();
    assert!(proj.is_projected());
    assert!(!proj.is_geographic());

    let empty = SpatialReference::new();
    assert!(!empty.is_geographic() && !empty.is_projected() && !empty.is_local());
    assert_eq!(empty.export_to_wkt(), "");
}

#[test]
fn test_authority_lookup() {
    let srs = SpatialReference::from_wkt(UTM_11N).unwrap();

    assert_eq!(srs.get_authority_name(None), Some("EPSG"));
    assert_eq!(srs.get_authority_code(None), Some("32611"));
    assert_eq!(srs.get_authority_code(Some("GEOGCS")), Some("4326"));
    assert_eq!(srs.get_authority_code(Some("DATUM")), Some("6326"));
    assert_eq!(srs.get_authority_code(Some("PRIMEM")), None);
}

#[test]
fn test_set_authority_replaces_existing() {
    let mut srs = SpatialReference::from_wkt(UTM_11N).unwrap();

    srs.set_authority("PROJCS", "ESRI", 102000).unwrap();
    assert_eq!(srs.get_authority_name(None), Some("ESRI"));
    assert_eq!(srs.get_authority_code(None), Some("102000"));
    assert_eq!(srs.export_to_wkt().matches("32611").count(), 0);

    assert!(srs.set_authority("VERT_CS", "EPSG", 5703).is_err());
}

#[test]
fn test_extensions() {
    let mut srs = SpatialReference::from_wkt(wkt::WGS84).unwrap();
    assert_eq!(srs.get_extension(None, "PROJ4"), None);

    srs.set_extension(None, "PROJ4", "+proj=longlat").unwrap();
    srs.set_extension(None, "PROJ4", "+proj=longlat +datum=WGS84").unwrap();

    assert_eq!(srs.get_extension(None, "PROJ4"), Some("+proj=longlat +datum=WGS84"));
    assert_eq!(srs.export_to_wkt().matches("EXTENSION").count(), 1);
}

#[test]
fn test_axes() {
    let mut srs = SpatialReference::from_wkt(wkt::WGS84).unwrap();
    assert_eq!(srs.get_axis(Some("GEOGCS"), 0), None);

    srs.set_axes("GEOGCS", "Lat", AxisOrientation::North, "Long", AxisOrientation::East)
        .unwrap();

    assert_eq!(srs.get_axis(Some("GEOGCS"), 0), Some(("Lat", AxisOrientation::North)));
    assert_eq!(srs.get_axis(Some("GEOGCS"), 1), Some(("Long", AxisOrientation::East)));
    assert_eq!(srs.get_axis(Some("GEOGCS"), 2), None);

    // Replacing keeps exactly two axes
    srs.set_axes("GEOGCS", "E", AxisOrientation::East, "N", AxisOrientation::North)
        .unwrap();
    assert_eq!(srs.export_to_wkt().matches("AXIS").count(), 2);
}

#[test]
fn test_unknown_axis_orientation_reads_as_other() {
    let srs = SpatialReference::from_wkt(
        "LOCAL_CS[\"grid\",UNIT[\"Meter\",1],AXIS[\"x\",SIDEWAYS],AXIS[\"y\",UP]]",
    )
    .unwrap();

    assert_eq!(srs.get_axis(None, 0), Some(("x", AxisOrientation::Other)));
    assert_eq!(srs.get_axis(None, 1), Some(("y", AxisOrientation::Up)));
}

#[test]
fn test_towgs84_precedes_datum_authority() {
    let mut srs = SpatialReference::from_wkt(wkt::WGS84).unwrap();
    assert!(srs.get_towgs84().is_err());

    srs.set_towgs84([1.0, 2.0, 3.0, 0.5, 0.0, 0.0, 1.25]).unwrap();

    assert_eq!(srs.get_towgs84().unwrap(), [1.0, 2.0, 3.0, 0.5, 0.0, 0.0, 1.25]);
    let wkt = srs.export_to_wkt();
    let towgs84 = wkt.find("TOWGS84").unwrap();
    let datum_authority = wkt.find("AUTHORITY[\"EPSG\",\"6326\"]").unwrap();
    assert!(towgs84 < datum_authority);
}

#[test]
fn test_spheroid_values() {
    let srs = SpatialReference::from_wkt(wkt::WGS84).unwrap();
    assert_eq!(srs.get_semi_major(), 6378137.0);
    assert_eq!(srs.get_inv_flattening(), 298.257223563);
    assert!((srs.get_semi_minor() - 6356752.314245).abs() < 0.001);

    let local = SpatialReference::from_wkt("LOCAL_CS[\"grid\"]").unwrap();
    assert_eq!(local.get_semi_major(), 6378137.0);
}

#[test]
fn test_set_node_creates_path() {
    let mut srs = SpatialReference::new();

    srs.set_node("PROJCS", "My projection").unwrap();
    srs.set_node("PROJCS|PROJECTION", "Mercator_1SP").unwrap();
    assert_eq!(srs.export_to_wkt(), "PROJCS[\"My projection\",PROJECTION[\"Mercator_1SP\"]]");

    // An existing leaf is overwritten in place
    srs.set_node("PROJCS|PROJECTION", "Transverse_Mercator").unwrap();
    srs.set_node("PROJCS", "Renamed").unwrap();
    assert_eq!(srs.export_to_wkt(), "PROJCS[\"Renamed\",PROJECTION[\"Transverse_Mercator\"]]");

    // A different root replaces the tree
    srs.set_node_f64("GEOGCS", 2.0).unwrap();
    assert_eq!(srs.export_to_wkt(), "GEOGCS[2]");
}

#[test]
fn test_set_node_overwrites_first_child() {
    let mut srs = SpatialReference::new();

    // The first child of PROJCS is the PROJECTION node, so its value changes
    srs.set_node("PROJCS|PROJECTION", "Mercator_1SP").unwrap();
    srs.set_node("PROJCS", "My projection").unwrap();
    assert_eq!(srs.export_to_wkt(), "PROJCS[My projection[\"Mercator_1SP\"]]");
    assert!(srs.get_attr_node("PROJECTION").is_none());
}

#[test]
fn test_import_failure_leaves_model_empty() {
    let mut srs = SpatialReference::from_wkt(wkt::WGS84).unwrap();

    assert!(srs.import_from_wkt("GEOGCS[\"broken\"").is_err());
    assert!(srs.root().is_none());
}

#[test]
fn test_strip_vertical() {
    let mut srs = SpatialReference::from_wkt(
        "COMPD_CS[\"WGS 84 + EGM96\",GEOGCS[\"WGS 84\",DATUM[\"WGS_1984\",SPHEROID[\"WGS 84\",6378137,298.257223563]],PRIMEM[\"Greenwich\",0],UNIT[\"degree\",0.0174532925199433]],VERT_CS[\"EGM96 geoid height\",VERT_DATUM[\"EGM96 geoid\",2005],UNIT[\"metre\",1]]]",
    )
    .unwrap();
    assert!(srs.is_compound());
    assert!(srs.is_geographic());
    assert!(srs.is_vertical());

    srs.strip_vertical();

    assert_eq!(srs.root_value(), Some("GEOGCS"));
    assert!(!srs.is_vertical());
}

#[test]
fn test_strip_ct_parms() {
    let mut srs = SpatialReference::from_wkt(UTM_11N).unwrap();
    srs.set_towgs84([0.0; 7]).unwrap();
    srs.set_axes("PROJCS", "E", AxisOrientation::East, "N", AxisOrientation::North)
        .unwrap();

    srs.strip_ct_parms();

    let wkt = srs.export_to_wkt();
    assert!(!wkt.contains("AUTHORITY"));
    assert!(!wkt.contains("TOWGS84"));
    assert!(!wkt.contains("AXIS"));
    assert!(wkt.contains("Transverse_Mercator"));

    let mut local = SpatialReference::from_wkt("LOCAL_CS[\"grid\"]").unwrap();
    local.strip_ct_parms();
    assert!(local.root().is_none());
}

#[test]
fn test_fixup_adds_default_units() {
    let mut srs = SpatialReference::new();
    srs.set_proj_cs("bare").unwrap();
    srs.set_geog_cs(Some("g"), Some("d"), Some("s"), 6378137.0, 298.257223563, None, 0.0, None)
        .unwrap();
    srs.get_attr_node_mut("GEOGCS").unwrap().strip_nodes("UNIT");

    srs.fixup().unwrap();

    assert_eq!(srs.get_linear_units(), ("Meter", 1.0));
    assert_eq!(srs.get_angular_units().0, "degree");
}

#[test]
fn test_clone_geog_cs() {
    let srs = SpatialReference::from_wkt(UTM_11N).unwrap();
    let geog = srs.clone_geog_cs().unwrap();
    assert_eq!(geog.root_value(), Some("GEOGCS"));
    assert_eq!(geog.get_authority_code(None), Some("4326"));

    let geocentric = SpatialReference::from_wkt(
        "GEOCCS[\"WGS 84\",DATUM[\"WGS_1984\",SPHEROID[\"WGS 84\",6378137,298.257223563]],PRIMEM[\"Greenwich\",0],UNIT[\"Meter\",1]]",
    )
    .unwrap();
    let geog = geocentric.clone_geog_cs().unwrap();
    assert_eq!(geog.get_attr_value("GEOGCS", 0), Some("unnamed"));
    assert_eq!(geog.get_attr_value("DATUM", 0), Some("WGS_1984"));
    assert_eq!(geog.get_angular_units().0, "degree");

    assert!(SpatialReference::new().clone_geog_cs().is_none());
}

#[test]
fn test_clone_is_deep_and_resets_reference_count() {
    let srs = SpatialReference::from_wkt(wkt::WGS84).unwrap();
    srs.reference();
    assert_eq!(srs.reference_count(), 2);

    let mut copy = srs.clone();
    assert_eq!(copy.reference_count(), 1);

    copy.set_node("GEOGCS", "renamed").unwrap();
    assert_eq!(srs.get_attr_value("GEOGCS", 0), Some("WGS 84"));
}

#[test]
fn test_reference_counting_across_threads() {
    let srs = Arc::new(SpatialReference::from_wkt(wkt::WGS84).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let srs = Arc::clone(&srs);
            thread::spawn(move || {
                for _ in 0..100 {
                    srs.reference();
                    srs.dereference();
                }
                srs.reference();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(srs.reference_count(), 9);
    for _ in 0..8 {
        srs.dereference();
    }
    assert!(SpatialReference::release(srs));
}
