//! Shared fixtures for the bridge tests

use crate::epsg::dictionary::{MemoryDictionary, Record};
use crate::epsg::tables;
use crate::srs::context::SrsContext;
use crate::srs::shared::GmlContext;

fn gcs(code: &str, name: &str, datum: &str, datum_name: &str, ellipsoid: &str) -> Record {
    Record::new()
        .with("COORD_REF_SYS_CODE", code)
        .with("COORD_REF_SYS_NAME", name)
        .with("DATUM_CODE", datum)
        .with("DATUM_NAME", datum_name)
        .with("PRIME_MERIDIAN_CODE", "8901")
        .with("ELLIPSOID_CODE", ellipsoid)
        .with("UOM_CODE", "9122")
        .with("COORD_SYS_CODE", "6422")
        .with("DEPRECATED", "0")
}

/// Geographic systems for WGS 84 and Pulkovo 1942 with their ellipsoids
pub fn bridge_dictionary() -> MemoryDictionary {
    let mut dictionary = MemoryDictionary::new();

    for (code, name, a, rf) in [
        ("7030", "WGS 84", "6378137", "298.257223563"),
        ("7024", "Krassowsky 1940", "6378245", "298.3"),
    ] {
        dictionary.insert(
            tables::ELLIPSOID,
            Record::new()
                .with("ELLIPSOID_CODE", code)
                .with("ELLIPSOID_NAME", name)
                .with("SEMI_MAJOR_AXIS", a)
                .with("INV_FLATTENING", rf)
                .with("UOM_CODE", "9001"),
        );
    }

    dictionary.insert(tables::GCS, gcs("4326", "WGS 84", "6326", "World Geodetic System 1984", "7030"));
    dictionary.insert(tables::GCS, gcs("4284", "Pulkovo 1942", "6284", "Pulkovo 1942", "7024"));

    dictionary.insert_wkt(
        tables::EPSG_WKT_FILE,
        "900913",
        "PROJCS[\"Google Maps Global Mercator\",GEOGCS[\"WGS 84\",DATUM[\"WGS_1984\",SPHEROID[\"WGS 84\",6378137,298.257223563]],PRIMEM[\"Greenwich\",0],UNIT[\"degree\",0.0174532925199433]],PROJECTION[\"Mercator_1SP\"],PARAMETER[\"central_meridian\",0],PARAMETER[\"scale_factor\",1],PARAMETER[\"false_easting\",0],PARAMETER[\"false_northing\",0],UNIT[\"Meter\",1]]",
    );

    dictionary
}

/// A context over the bridge dictionary with its own GML id counter
pub fn bridge_context() -> SrsContext {
    SrsContext::new(Box::new(bridge_dictionary())).with_gml(GmlContext::starting_at(1))
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
