//! Tests for PROJ string import

use crate::bridges::proj4::ProjTokens;
use crate::bridges::tests::test_utils::{assert_close, bridge_context};
use crate::srs::constants::{params, projections, units};
use crate::srs::context::SrsContext;
use crate::srs::errors::SrsError;
use crate::srs::model::SpatialReference;

fn import(proj4: &str) -> SpatialReference {
    let mut srs = SpatialReference::new();
    srs.import_from_proj4(&SrsContext::default(), proj4).unwrap();
    srs
}

#[test]
fn test_tokens_split_only_at_boundaries() {
    let tokens = ProjTokens::parse("+proj=tmerc +south +lat_0=1e+5  +k=0.5");

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens.get("PROJ"), Some("tmerc"));
    assert_eq!(tokens.get("south"), Some("yes"));
    assert_eq!(tokens.get("lat_0"), Some("1e+5"));
    assert!(!tokens.has("x_0"));
}

#[test]
fn test_tokens_scale_factor_alias() {
    let tokens = ProjTokens::parse("+proj=tmerc +k_0=0.9996");

    assert_close(tokens.number("k", 1.0), 0.9996);
    assert_close(tokens.number("x_0", 250.0), 250.0);
}

#[test]
fn test_import_utm_on_wgs84() {
    let srs = import("+proj=utm +zone=11 +datum=WGS84");

    assert!(srs.is_projected());
    assert_eq!(srs.get_attr_value("PROJECTION", 0), Some(projections::TRANSVERSE_MERCATOR));
    assert_close(srs.get_norm_proj_parm(params::LATITUDE_OF_ORIGIN, -1.0), 0.0);
    assert_close(srs.get_norm_proj_parm(params::CENTRAL_MERIDIAN, 0.0), -117.0);
    assert_close(srs.get_proj_parm(params::SCALE_FACTOR, 0.0), 0.9996);
    assert_close(srs.get_norm_proj_parm(params::FALSE_EASTING, 0.0), 500000.0);
    assert_close(srs.get_norm_proj_parm(params::FALSE_NORTHING, -1.0), 0.0);
    assert_close(srs.get_semi_major(), 6378137.0);
    assert_close(srs.get_inv_flattening(), 298.257223563);
    assert_eq!(srs.get_utm_zone(), Some((11, true)));
    assert_eq!(srs.get_linear_units(), (units::METER, 1.0));
}

#[test]
fn test_import_utm_zone_out_of_range() {
    let mut srs = SpatialReference::new();

    let result = srs.import_from_proj4(&SrsContext::default(), "+proj=utm +zone=999999999 +datum=WGS84");
    assert!(matches!(result, Err(SrsError::Failure(_))));
    assert!(srs.root().is_none());

    let result = srs.import_from_proj4(&SrsContext::default(), "+proj=utm +datum=WGS84");
    assert!(matches!(result, Err(SrsError::Failure(_))));
}

#[test]
fn test_import_southern_utm() {
    let srs = import("+proj=utm +zone=33 +south +ellps=GRS80");

    assert_eq!(srs.get_utm_zone(), Some((33, false)));
    assert_close(srs.get_inv_flattening(), 298.257222101);
}

#[test]
fn test_import_geographic_with_ellipsoid() {
    let srs = import("+proj=longlat +ellps=intl +no_defs");

    assert!(srs.is_geographic());
    assert_close(srs.get_semi_major(), 6378388.0);
    assert_close(srs.get_inv_flattening(), 297.0);
}

#[test]
fn test_import_raw_axes() {
    let srs = import("+proj=longlat +a=6378137 +b=6356752.314245");

    assert_close(srs.get_semi_major(), 6378137.0);
    assert!((srs.get_inv_flattening() - 298.257223563).abs() < 1e-4);
}

#[test]
fn test_import_sphere_radius() {
    let srs = import("+proj=longlat +R=6371000");

    assert_close(srs.get_semi_major(), 6371000.0);
    assert_close(srs.get_inv_flattening(), 0.0);
}

#[test]
fn test_import_three_parameter_towgs84() {
    let srs = import("+proj=longlat +ellps=intl +towgs84=-87,-98,-121");

    assert_eq!(srs.get_towgs84().unwrap(), [-87.0, -98.0, -121.0, 0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn test_import_nadgrids_extension() {
    let srs = import("+proj=longlat +ellps=clrk66 +nadgrids=conus");

    assert_eq!(srs.get_extension(Some("DATUM"), "PROJ4_GRIDS"), Some("conus"));
}

#[test]
fn test_import_us_feet_rescales_offsets() {
    let srs = import("+proj=tmerc +lat_0=0 +lon_0=-120 +k=1 +x_0=1000 +y_0=0 +ellps=GRS80 +units=us-ft");

    let (name, factor) = srs.get_linear_units();
    assert!(name.contains("Foot"));
    assert!((factor - 0.3048006096012192).abs() < 1e-12);
    assert!((srs.get_norm_proj_parm(params::FALSE_EASTING, 0.0) - 1000.0).abs() < 1e-6);
    assert!((srs.get_proj_parm(params::FALSE_EASTING, 0.0) - 1000.0 / factor).abs() < 1e-6);
}

#[test]
fn test_import_geoidgrids_builds_compound() {
    let srs = import("+proj=longlat +datum=WGS84 +geoidgrids=egm96_15.gtx +vunits=m");

    assert!(srs.is_compound());
    assert_eq!(srs.get_extension(Some("VERT_DATUM"), "PROJ4_GRIDS"), Some("egm96_15.gtx"));
    assert_eq!(srs.get_attr_value("COMPD_CS", 0), Some("WGS 84 + Unnamed Vertical Datum"));
}

#[test]
fn test_import_wktext_keeps_definition() {
    let definition = "+proj=merc +a=6378137 +b=6378137 +lat_ts=0 +lon_0=0 +x_0=0 +y_0=0 +k=1 +units=m +nadgrids=@null +wktext +no_defs";
    let srs = import(definition);

    assert_eq!(srs.get_extension(Some("PROJCS"), "PROJ4"), Some(definition));
    assert_eq!(srs.export_to_proj4(&SrsContext::default()).unwrap(), definition);
}

#[test]
fn test_import_init_epsg_uses_dictionary() {
    let ctx = bridge_context();
    let mut srs = SpatialReference::new();
    srs.import_from_proj4(&ctx, "+init=epsg:900913").unwrap();

    assert!(srs.is_projected());
    assert_eq!(srs.get_attr_value("PROJECTION", 0), Some(projections::MERCATOR_1SP));
}

#[test]
fn test_import_without_proj_is_corrupt() {
    let mut srs = SpatialReference::new();
    let result = srs.import_from_proj4(&SrsContext::default(), "+ellps=WGS84 +no_defs");

    assert!(matches!(result, Err(SrsError::CorruptData(_))));
}

#[test]
fn test_import_unknown_projection_is_rejected() {
    let mut srs = SpatialReference::new();
    let result = srs.import_from_proj4(&SrsContext::default(), "+proj=nosuch +ellps=WGS84");

    assert!(matches!(result, Err(SrsError::CorruptData(_))));
}
