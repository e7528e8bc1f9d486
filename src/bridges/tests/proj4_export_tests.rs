//! Tests for PROJ string export

use crate::io::NativeProjection;
use crate::srs::constants::{projections, wkt};
use crate::srs::context::SrsContext;
use crate::srs::model::SpatialReference;

/// Projection library stub that only knows datum shifts
struct ShiftOnly;

impl NativeProjection for ShiftOnly {
    fn normalize(&self, _proj_string: &str) -> Option<String> {
        None
    }

    fn wgs84_transform(&self, gcs_code: i32) -> Option<[f64; 7]> {
        (gcs_code == 4999).then_some([1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 0.0])
    }
}

fn export(srs: &SpatialReference) -> String {
    srs.export_to_proj4(&SrsContext::default()).unwrap()
}

#[test]
fn test_export_utm_round_trip() {
    let ctx = SrsContext::default();
    let mut srs = SpatialReference::new();
    srs.import_from_proj4(&ctx, "+proj=utm +zone=11 +datum=WGS84").unwrap();

    assert_eq!(
        srs.export_to_proj4(&ctx).unwrap(),
        "+proj=utm +zone=11 +datum=WGS84 +units=m +no_defs"
    );
}

#[test]
fn test_export_southern_utm() {
    let mut srs = SpatialReference::new();
    srs.set_utm(33, false).unwrap();
    srs.set_well_known_geog_cs("WGS84").unwrap();

    assert_eq!(export(&srs), "+proj=utm +zone=33 +south +datum=WGS84 +units=m +no_defs");
}

#[test]
fn test_export_geographic() {
    let srs = SpatialReference::from_wkt(wkt::WGS84).unwrap();

    assert_eq!(export(&srs), "+proj=longlat +datum=WGS84 +no_defs");
}

#[test]
fn test_export_transverse_mercator_with_ellipsoid() {
    let mut srs = SpatialReference::new();
    srs.set_tm(0.0, 9.0, 1.0, 500000.0, 0.0).unwrap();
    srs.set_geog_cs(Some("unnamed"), Some("unknown"), Some("intl"), 6378388.0, 297.0, None, 0.0, None)
        .unwrap();
    srs.set_linear_units("Meter", 1.0).unwrap();

    assert_eq!(
        export(&srs),
        "+proj=tmerc +lat_0=0 +lon_0=9 +k=1 +x_0=500000 +y_0=0 +ellps=intl +units=m +no_defs"
    );
}

#[test]
fn test_export_towgs84_replaces_datum() {
    let srs = SpatialReference::from_wkt(
        "GEOGCS[\"unnamed\",DATUM[\"unknown\",SPHEROID[\"intl\",6378388,297],TOWGS84[-87,-98,-121,0,0,0,0]],PRIMEM[\"Greenwich\",0],UNIT[\"degree\",0.0174532925199433]]",
    )
    .unwrap();

    assert_eq!(export(&srs), "+proj=longlat +ellps=intl +towgs84=-87,-98,-121,0,0,0,0 +no_defs");
}

#[test]
fn test_export_raw_axes_for_unknown_ellipsoid() {
    let srs = SpatialReference::from_wkt(
        "GEOGCS[\"unnamed\",DATUM[\"unknown\",SPHEROID[\"odd\",6000000,300]],PRIMEM[\"Greenwich\",0],UNIT[\"degree\",0.0174532925199433]]",
    )
    .unwrap();

    let proj4 = export(&srs);
    assert!(proj4.starts_with("+proj=longlat +a=6000000 +b="));
    assert!(proj4.ends_with(" +no_defs"));
}

#[test]
fn test_export_native_bursa_wolf_fallback() {
    let ctx = SrsContext::default().with_native(Box::new(ShiftOnly));
    let srs = SpatialReference::from_wkt(
        "GEOGCS[\"Local\",DATUM[\"Local_Datum\",SPHEROID[\"intl\",6378388,297]],PRIMEM[\"Greenwich\",0],UNIT[\"degree\",0.0174532925199433],AUTHORITY[\"EPSG\",\"4999\"]]",
    )
    .unwrap();

    assert_eq!(
        srs.export_to_proj4(&ctx).unwrap(),
        "+proj=longlat +ellps=intl +towgs84=1,2,3,0,0,0,0 +no_defs"
    );
}

#[test]
fn test_export_named_prime_meridian() {
    let ctx = SrsContext::default();
    let mut srs = SpatialReference::new();
    srs.import_from_proj4(&ctx, "+proj=longlat +ellps=clrk80 +pm=paris").unwrap();

    let proj4 = srs.export_to_proj4(&ctx).unwrap();
    assert!(proj4.contains("+pm=paris"), "{}", proj4);
}

#[test]
fn test_export_local_is_empty() {
    let mut srs = SpatialReference::new();
    srs.set_local_cs("Site grid").unwrap();

    assert_eq!(export(&srs), "");
}

#[test]
fn test_export_empty_is_unsupported() {
    let srs = SpatialReference::new();

    assert!(srs.export_to_proj4(&SrsContext::default()).unwrap_err().is_unsupported_srs());
}

#[test]
fn test_export_laborde_is_unsupported() {
    let mut srs = SpatialReference::new();
    srs.set_projection(projections::LABORDE_OBLIQUE_MERCATOR).unwrap();
    srs.set_well_known_geog_cs("WGS84").unwrap();

    assert!(srs.export_to_proj4(&SrsContext::default()).unwrap_err().is_unsupported_srs());
}
