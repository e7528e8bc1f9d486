//! Tests for building definitions from EPSG codes

use crate::epsg::dictionary::MemoryDictionary;
use crate::epsg::resolver::{ellipsoid_info, epsg_wgs84_transform};
use crate::epsg::tests::test_utils::{sample_context, sample_dictionary};
use crate::srs::constants::{params, projections};
use crate::srs::context::SrsContext;
use crate::srs::errors::SrsError;
use crate::srs::model::{AxisOrientation, SpatialReference};

#[test]
fn test_ellipsoid_info_derives_inverse_flattening() {
    let dictionary = sample_dictionary();

    let (name, a, rf) = ellipsoid_info(&dictionary, 7030).unwrap();
    assert_eq!(name, "WGS 84");
    assert_eq!(a, 6378137.0);
    assert_eq!(rf, 298.257223563);

    let (name, a, rf) = ellipsoid_info(&dictionary, 7008).unwrap();
    assert_eq!(name, "Clarke 1866");
    assert_eq!(a, 6378206.4);
    assert!((rf - 294.978698213898).abs() < 1e-6);

    assert!(matches!(ellipsoid_info(&dictionary, 1), Err(SrsError::UnsupportedSrs(_))));
}

#[test]
fn test_wgs84_transform_negates_coordinate_frame_rotations() {
    let dictionary = sample_dictionary();

    let transform = epsg_wgs84_transform(&dictionary, 4807).unwrap();
    assert_eq!(transform, ["-168", "-60", "320", "-1.5", "0.25", "-2", "0"].map(String::from));

    let transform = epsg_wgs84_transform(&dictionary, 4269).unwrap();
    assert!(transform.iter().all(|value| value == "0"));

    // No transformation method recorded
    assert_eq!(epsg_wgs84_transform(&dictionary, 4326), None);
}

#[test]
fn test_geographic_with_epsg_axes() {
    let ctx = sample_context();
    let mut srs = SpatialReference::new();
    srs.import_from_epsga(&ctx, 4326).unwrap();

    assert!(srs.is_geographic());
    assert_eq!(srs.get_attr_value("GEOGCS", 0), Some("WGS 84"));
    assert_eq!(srs.get_attr_value("DATUM", 0), Some("WGS_1984"));
    assert_eq!(srs.get_attr_value("SPHEROID", 0), Some("WGS 84"));
    assert_eq!(srs.get_authority_code(Some("GEOGCS")), Some("4326"));
    assert_eq!(srs.get_authority_code(Some("DATUM")), Some("6326"));
    assert_eq!(srs.get_authority_code(Some("SPHEROID")), Some("7030"));
    assert_eq!(srs.get_authority_code(Some("PRIMEM")), Some("8901"));
    assert_eq!(srs.get_authority_code(Some("GEOGCS|UNIT")), Some("9122"));

    assert_eq!(srs.get_axis(Some("GEOGCS"), 0), Some(("Latitude", AxisOrientation::North)));
    assert_eq!(srs.get_axis(Some("GEOGCS"), 1), Some(("Longitude", AxisOrientation::East)));
    assert!(srs.epsg_treats_as_lat_long());
}

#[test]
fn test_import_from_epsg_strips_geographic_axes() {
    let ctx = sample_context();
    let mut srs = SpatialReference::new();
    srs.import_from_epsg(&ctx, 4326).unwrap();

    assert_eq!(srs.get_axis(Some("GEOGCS"), 0), None);
    assert!(!srs.epsg_treats_as_lat_long());
    assert_eq!(srs.get_authority_code(Some("GEOGCS")), Some("4326"));
}

#[test]
fn test_geographic_with_datum_shift() {
    let ctx = sample_context();
    let mut srs = SpatialReference::new();
    srs.import_from_epsg(&ctx, 4269).unwrap();

    assert_eq!(srs.get_attr_value("DATUM", 0), Some("North_American_Datum_1983"));
    assert_eq!(srs.get_towgs84().unwrap(), [0.0; 7]);
}

#[test]
fn test_geographic_in_grads_with_paris_meridian() {
    let ctx = sample_context();
    let mut srs = SpatialReference::new();
    srs.import_from_epsg(&ctx, 4807).unwrap();

    let (pm_name, pm_offset) = srs.get_prime_meridian();
    assert_eq!(pm_name, "Paris");
    assert!((pm_offset - 2.33722917).abs() < 1e-8);

    let (unit_name, in_radians) = srs.get_angular_units();
    assert_eq!(unit_name, "grad");
    assert!((in_radians - 0.0174532925199433 * 0.9).abs() < 1e-15);

    let towgs84 = srs.get_towgs84().unwrap();
    assert_eq!(towgs84[3], -1.5);
    assert_eq!(towgs84[5], -2.0);
}

#[test]
fn test_4979_reads_as_4326_with_its_own_code() {
    let ctx = sample_context();
    let mut srs = SpatialReference::new();
    srs.import_from_epsg(&ctx, 4979).unwrap();

    assert_eq!(srs.get_attr_value("GEOGCS", 0), Some("WGS 84"));
    assert_eq!(srs.get_authority_code(Some("GEOGCS")), Some("4979"));
}

#[test]
fn test_projected_utm() {
    let ctx = sample_context();
    let mut srs = SpatialReference::new();
    srs.import_from_epsg(&ctx, 32611).unwrap();

    assert!(srs.is_projected());
    assert_eq!(srs.get_attr_value("PROJCS", 0), Some("WGS 84 / UTM zone 11N"));
    assert_eq!(srs.get_attr_value("PROJECTION", 0), Some(projections::TRANSVERSE_MERCATOR));
    assert_eq!(srs.get_proj_parm(params::CENTRAL_MERIDIAN, 0.0), -117.0);
    assert_eq!(srs.get_proj_parm(params::SCALE_FACTOR, 0.0), 0.9996);
    assert_eq!(srs.get_proj_parm(params::FALSE_EASTING, 0.0), 500000.0);
    assert_eq!(srs.get_utm_zone(), Some((11, true)));
    assert_eq!(srs.get_authority_code(Some("PROJCS")), Some("32611"));
    assert_eq!(srs.get_authority_code(Some("PROJCS|UNIT")), Some("9001"));

    // Easting/northing axes are kept
    assert_eq!(srs.get_axis(Some("PROJCS"), 0), Some(("Easting", AxisOrientation::East)));
    assert!(!srs.epsg_treats_as_northing_easting());
}

#[test]
fn test_projected_lcc_in_us_feet_with_axis_table() {
    let ctx = sample_context();
    let mut srs = SpatialReference::new();
    srs.import_from_epsg(&ctx, 2227).unwrap();

    assert_eq!(srs.get_attr_value("PROJECTION", 0), Some(projections::LAMBERT_CONFORMAL_CONIC_2SP));

    let (unit_name, in_meters) = srs.get_linear_units();
    assert_eq!(unit_name, "US survey foot");
    assert!((in_meters - 0.3048006096012192).abs() < 1e-15);

    assert!((srs.get_proj_parm(params::STANDARD_PARALLEL_1, 0.0) - (38.0 + 26.0 / 60.0)).abs() < 1e-9);
    assert!((srs.get_proj_parm(params::STANDARD_PARALLEL_2, 0.0) - (37.0 + 4.0 / 60.0)).abs() < 1e-9);
    assert!((srs.get_proj_parm(params::LATITUDE_OF_ORIGIN, 0.0) - 36.5).abs() < 1e-9);
    assert!((srs.get_proj_parm(params::CENTRAL_MERIDIAN, 0.0) + 120.5).abs() < 1e-9);

    // Stored in feet, normalized to meters
    assert!((srs.get_proj_parm(params::FALSE_EASTING, 0.0) - 6561666.667).abs() < 1e-3);
    assert!((srs.get_norm_proj_parm(params::FALSE_EASTING, 0.0) - 2000000.0).abs() < 1e-2);

    // Axis records are reordered by coord_axis_order
    assert_eq!(srs.get_axis(Some("PROJCS"), 0), Some(("X", AxisOrientation::East)));
    assert_eq!(srs.get_axis(Some("PROJCS"), 1), Some(("Y", AxisOrientation::North)));
}

#[test]
fn test_projected_polar_stereographic_variant_b() {
    let ctx = sample_context();
    let mut srs = SpatialReference::new();
    srs.import_from_epsg(&ctx, 3031).unwrap();

    assert_eq!(srs.get_attr_value("PROJECTION", 0), Some(projections::POLAR_STEREOGRAPHIC));
    assert_eq!(srs.get_proj_parm(params::LATITUDE_OF_ORIGIN, 0.0), -71.0);
    assert_eq!(srs.get_proj_parm(params::SCALE_FACTOR, 0.0), 1.0);
}

#[test]
fn test_vertical() {
    let ctx = sample_context();
    let mut srs = SpatialReference::new();
    srs.import_from_epsg(&ctx, 5703).unwrap();

    assert!(srs.is_vertical());
    assert_eq!(srs.get_attr_value("VERT_CS", 0), Some("NAVD88 height"));
    assert_eq!(srs.get_attr_value("VERT_DATUM", 1), Some("2005"));
    assert_eq!(srs.get_extension(Some("VERT_CS|VERT_DATUM"), "PROJ4_GRIDS"), Some("g2012a_conus.gtx"));
    assert_eq!(srs.get_authority_code(Some("VERT_CS|VERT_DATUM")), Some("5103"));
    assert_eq!(srs.get_authority_code(Some("VERT_CS")), Some("5703"));
    assert_eq!(srs.get_linear_units().1, 1.0);
}

#[test]
fn test_compound() {
    let ctx = sample_context();
    let mut srs = SpatialReference::new();
    srs.import_from_epsg(&ctx, 5498).unwrap();

    assert!(srs.is_compound());
    assert_eq!(srs.get_attr_value("COMPD_CS", 0), Some("NAD83 + NAVD88 height"));
    assert_eq!(srs.get_authority_code(Some("GEOGCS")), Some("4269"));
    assert_eq!(srs.get_authority_code(Some("VERT_CS")), Some("5703"));
    assert_eq!(srs.get_authority_code(None), Some("5498"));
}

#[test]
fn test_geocentric() {
    let ctx = sample_context();
    let mut srs = SpatialReference::new();
    srs.import_from_epsg(&ctx, 4978).unwrap();

    assert!(srs.is_geocentric());
    assert_eq!(srs.get_attr_value("DATUM", 0), Some("WGS_1984"));
    assert_eq!(srs.get_attr_value("SPHEROID", 1), Some("6378137"));
    assert_eq!(srs.get_axis(Some("GEOCCS"), 2), Some(("Geocentric Z", AxisOrientation::North)));
    assert_eq!(srs.get_authority_code(Some("GEOCCS")), Some("4978"));
    assert_eq!(srs.get_authority_code(Some("GEOCCS|UNIT")), Some("9001"));
}

#[test]
fn test_wkt_dictionary_fallback_gains_authority() {
    let ctx = sample_context();
    let mut srs = SpatialReference::new();
    srs.import_from_epsg(&ctx, 900913).unwrap();

    assert_eq!(srs.get_attr_value("PROJCS", 0), Some("Google Maps Global Mercator"));
    assert_eq!(srs.get_authority_name(Some("PROJCS")), Some("EPSG"));
    assert_eq!(srs.get_authority_code(Some("PROJCS")), Some("900913"));
}

#[test]
fn test_unknown_code_leaves_model_empty() {
    let ctx = sample_context();
    let mut srs = SpatialReference::from_wkt(crate::srs::constants::wkt::WGS84).unwrap();

    assert!(matches!(srs.import_from_epsg(&ctx, 12345), Err(SrsError::UnsupportedSrs(_))));
    assert!(srs.root().is_none());

    // Known projected code with an unsupported method
    assert!(matches!(srs.import_from_epsg(&ctx, 2000), Err(SrsError::UnsupportedSrs(_))));
    assert!(srs.root().is_none());
}

#[test]
fn test_missing_tables_fail() {
    let ctx = SrsContext::new(Box::new(MemoryDictionary::new()));
    let mut srs = SpatialReference::new();

    assert!(matches!(srs.import_from_epsg(&ctx, 4326), Err(SrsError::Failure(_))));
}

#[test]
fn test_forced_kind_does_not_fall_through() {
    let ctx = sample_context();
    let mut srs = SpatialReference::new();

    assert!(srs.import_from_epsga_internal(&ctx, 32611, Some("GEOGCS")).is_err());
    assert!(srs.root().is_none());

    srs.import_from_epsga_internal(&ctx, 32611, Some("PROJCS")).unwrap();
    assert!(srs.is_projected());
}

#[test]
fn test_state_plane() {
    let ctx = sample_context();
    let mut srs = SpatialReference::new();
    srs.set_state_plane(&ctx, 403, true, None).unwrap();

    assert_eq!(srs.get_authority_code(Some("PROJCS")), Some("2227"));
    assert_eq!(srs.get_linear_units().0, "US survey foot");
}

#[test]
fn test_state_plane_unit_override_keeps_false_origin() {
    let ctx = sample_context();
    let mut srs = SpatialReference::new();
    srs.set_state_plane(&ctx, 403, true, Some(("Meter", 1.0))).unwrap();

    assert_eq!(srs.get_linear_units(), ("Meter", 1.0));
    assert!((srs.get_proj_parm(params::FALSE_EASTING, 0.0) - 2000000.0).abs() < 1e-2);
    assert_eq!(srs.get_authority_code(Some("PROJCS")), None);
}

#[test]
fn test_state_plane_unknown_zone_builds_local_cs() {
    let ctx = sample_context();
    let mut srs = SpatialReference::new();

    assert!(matches!(srs.set_state_plane(&ctx, 9999, false, None), Err(SrsError::Failure(_))));
    assert!(srs.is_local());
    assert_eq!(srs.get_attr_value("LOCAL_CS", 0), Some("State Plane Zone 9999 / NAD27"));
    assert_eq!(srs.get_linear_units().0, "Foot_US");
}
