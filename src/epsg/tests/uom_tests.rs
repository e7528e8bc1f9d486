//! Tests for EPSG unit and datum name helpers

use crate::epsg::dictionary::MemoryDictionary;
use crate::epsg::tests::test_utils::sample_dictionary;
use crate::epsg::uom::{angle_string_to_degrees, massage_datum_name, uom_angle_info, uom_length_info};

#[test]
fn test_packed_sexagesimal_angles() {
    assert!((angle_string_to_degrees("38.26", 9110) - (38.0 + 26.0 / 60.0)).abs() < 1e-12);
    assert!((angle_string_to_degrees("-120.3", 9110) + 120.5).abs() < 1e-12);
    assert!((angle_string_to_degrees("52.0615", 9110) - (52.0 + 6.0 / 60.0 + 15.0 / 3600.0)).abs() < 1e-12);
    assert!((angle_string_to_degrees("4.213045", 9110) - (4.0 + 21.0 / 60.0 + 30.45 / 3600.0)).abs() < 1e-12);

    // A single minutes digit is a tens digit
    assert!((angle_string_to_degrees("1.5", 9110) - (1.0 + 50.0 / 60.0)).abs() < 1e-12);
    assert_eq!(angle_string_to_degrees("45", 9110), 45.0);
}

#[test]
fn test_other_angle_units() {
    assert!((angle_string_to_degrees("100", 9105) - 90.0).abs() < 1e-12);
    assert!((angle_string_to_degrees("50", 9106) - 45.0).abs() < 1e-12);
    assert!((angle_string_to_degrees("3.14159265358979", 9101) - 180.0).abs() < 1e-9);
    assert!((angle_string_to_degrees("30", 9103) - 0.5).abs() < 1e-12);
    assert!((angle_string_to_degrees("36", 9104) - 0.01).abs() < 1e-12);
    assert_eq!(angle_string_to_degrees("-71", 9102), -71.0);
}

#[test]
fn test_uom_angle_info() {
    let dictionary = sample_dictionary();

    assert_eq!(uom_angle_info(&dictionary, 9122), Some(("degree".to_string(), 1.0)));
    assert_eq!(uom_angle_info(&dictionary, 0), None);

    let (name, in_degrees) = uom_angle_info(&dictionary, 9105).unwrap();
    assert_eq!(name, "grad");
    assert_eq!(in_degrees, 0.9);

    // Built-in fallback without a record
    let (name, in_degrees) = uom_angle_info(&MemoryDictionary::new(), 9104).unwrap();
    assert_eq!(name, "arc-second");
    assert!((in_degrees - 1.0 / 3600.0).abs() < 1e-15);
    assert_eq!(uom_angle_info(&MemoryDictionary::new(), 9999), None);
}

#[test]
fn test_uom_length_info() {
    let dictionary = sample_dictionary();

    assert_eq!(uom_length_info(&dictionary, 9001), Some(("metre".to_string(), 1.0)));

    let (name, in_meters) = uom_length_info(&dictionary, 9003).unwrap();
    assert_eq!(name, "US survey foot");
    assert!((in_meters - 0.3048006096012192).abs() < 1e-15);

    assert_eq!(uom_length_info(&dictionary, 9002), Some(("foot".to_string(), 0.3048)));
    assert_eq!(uom_length_info(&dictionary, 9999), None);
}

#[test]
fn test_massage_datum_name() {
    assert_eq!(massage_datum_name("North American Datum 1983"), "North_American_Datum_1983");
    assert_eq!(massage_datum_name("World Geodetic System 1984"), "WGS_1984");
    assert_eq!(massage_datum_name("European Terrestrial Reference System 89"), "European_Reference_System_1989");
    assert_eq!(
        massage_datum_name("Nouvelle Triangulation Francaise (Paris)"),
        "Nouvelle_Triangulation_Francaise_Paris"
    );
    assert_eq!(massage_datum_name("ITRF2008+"), "ITRF2008+");
    assert_eq!(massage_datum_name("Foo -- Bar"), "Foo_Bar");
}
