//! Tests for unit normalization of projection parameters

use crate::srs::constants::{params, units};
use crate::srs::model::SpatialReference;
use crate::srs::norm::{is_angular_parameter, is_linear_parameter, is_longitude_parameter};

const NTF_LAMBERT: &str = "PROJCS[\"NTF (Paris) / Lambert zone II\",GEOGCS[\"NTF (Paris)\",DATUM[\"Nouvelle_Triangulation_Francaise_Paris\",SPHEROID[\"Clarke 1880 (IGN)\",6378249.2,293.4660212936269]],PRIMEM[\"Paris\",2.33722917],UNIT[\"grad\",0.01570796326794897]],PROJECTION[\"Lambert_Conformal_Conic_1SP\"],PARAMETER[\"latitude_of_origin\",52],PARAMETER[\"central_meridian\",0],PARAMETER[\"scale_factor\",0.99987742],PARAMETER[\"false_easting\",600000],PARAMETER[\"false_northing\",2200000],UNIT[\"metre\",1]]";

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_parameter_kinds() {
    assert!(is_angular_parameter("latitude_of_origin"));
    assert!(is_angular_parameter("Longitude_Of_Center"));
    assert!(is_angular_parameter("standard_parallel_2"));
    assert!(is_angular_parameter("azimuth"));
    assert!(!is_angular_parameter("scale_factor"));

    assert!(is_longitude_parameter("central_meridian"));
    assert!(!is_longitude_parameter("latitude_of_origin"));

    assert!(is_linear_parameter("false_easting"));
    assert!(is_linear_parameter("satellite_height"));
    assert!(!is_linear_parameter("central_meridian"));
}

#[test]
fn test_grad_parameters_normalize_to_degrees() {
    let srs = SpatialReference::from_wkt(NTF_LAMBERT).unwrap();

    let info = srs.norm_info();
    assert!(close(info.to_degrees, 0.9));
    assert!(close(info.from_greenwich, 2.33722917));

    assert!(close(srs.get_norm_proj_parm(params::LATITUDE_OF_ORIGIN, 0.0), 46.8));
    assert!(close(srs.get_norm_proj_parm(params::FALSE_EASTING, 0.0), 600000.0));
    // Unitless parameters pass through
    assert_eq!(srs.get_norm_proj_parm(params::SCALE_FACTOR, 0.0), 0.99987742);
    // Defaults are returned as given
    assert_eq!(srs.get_norm_proj_parm(params::STANDARD_PARALLEL_1, 7.0), 7.0);
}

#[test]
fn test_set_norm_proj_parm_stores_raw_grads() {
    let mut srs = SpatialReference::from_wkt(NTF_LAMBERT).unwrap();

    srs.set_norm_proj_parm(params::LATITUDE_OF_ORIGIN, 45.0).unwrap();

    assert!(close(srs.get_proj_parm(params::LATITUDE_OF_ORIGIN, 0.0), 50.0));
    assert!(close(srs.get_norm_proj_parm(params::LATITUDE_OF_ORIGIN, 0.0), 45.0));
}

#[test]
fn test_linear_units_in_feet() {
    let mut srs = SpatialReference::new();
    srs.set_tm(0.0, 0.0, 1.0, 0.0, 0.0).unwrap();
    srs.set_linear_units(units::US_FOOT, units::US_FOOT_CONV).unwrap();

    srs.set_norm_proj_parm(params::FALSE_EASTING, 1000.0).unwrap();

    assert!(close(srs.get_proj_parm(params::FALSE_EASTING, 0.0), 1000.0 / units::US_FOOT_CONV));
    assert!(close(srs.get_norm_proj_parm(params::FALSE_EASTING, 0.0), 1000.0));
    let (name, factor) = srs.get_linear_units();
    assert_eq!(name, units::US_FOOT);
    assert!(close(factor, units::US_FOOT_CONV));
}

#[test]
fn test_changing_units_rescales_parameters() {
    let mut srs = SpatialReference::new();
    srs.set_tm(0.0, 9.0, 0.9996, 304800.0, 0.0).unwrap();
    srs.set_linear_units(units::METER, 1.0).unwrap();

    srs.set_linear_units_and_update_parameters(units::FOOT, units::FOOT_CONV)
        .unwrap();

    assert!(close(srs.get_proj_parm(params::FALSE_EASTING, 0.0), 1000000.0));
    assert_eq!(srs.get_proj_parm(params::CENTRAL_MERIDIAN, 0.0), 9.0);
    assert_eq!(srs.get_linear_units().0, units::FOOT);

    assert!(srs.set_linear_units_and_update_parameters("nothing", 0.0).is_err());
}

#[test]
fn test_cache_follows_unit_changes() {
    let mut srs = SpatialReference::from_wkt(NTF_LAMBERT).unwrap();
    assert!(close(srs.norm_info().to_degrees, 0.9));

    srs.set_angular_units(units::DEGREE, units::DEGREE_CONV).unwrap();

    assert_eq!(srs.norm_info().to_degrees, 1.0);
    assert_eq!(srs.get_norm_proj_parm(params::LATITUDE_OF_ORIGIN, 0.0), 52.0);
}

#[test]
fn test_prime_meridian() {
    let srs = SpatialReference::from_wkt(NTF_LAMBERT).unwrap();
    assert_eq!(srs.get_prime_meridian(), ("Paris", 2.33722917));

    let empty = SpatialReference::new();
    assert_eq!(empty.get_prime_meridian(), ("Greenwich", 0.0));
}

#[test]
fn test_target_linear_units() {
    let srs = SpatialReference::from_wkt(
        "COMPD_CS[\"x\",LOCAL_CS[\"grid\",UNIT[\"Meter\",1]],VERT_CS[\"h\",VERT_DATUM[\"d\",2005],UNIT[\"Foot_US\",0.3048006096012192]]]",
    )
    .unwrap();

    assert_eq!(srs.get_target_linear_units(Some("VERT_CS")), ("Foot_US", 0.3048006096012192));
    assert_eq!(srs.get_target_linear_units(Some("LOCAL_CS")), ("Meter", 1.0));
}
