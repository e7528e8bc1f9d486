//! Shared fixtures for the EPSG tests

use crate::epsg::dictionary::{MemoryDictionary, Record};
use crate::epsg::tables;
use crate::srs::context::SrsContext;

fn gcs(code: &str, name: &str, datum: &str, datum_name: &str, pm: &str, ellipsoid: &str, uom: &str, csc: &str) -> Record {
    Record::new()
        .with("COORD_REF_SYS_CODE", code)
        .with("COORD_REF_SYS_NAME", name)
        .with("DATUM_CODE", datum)
        .with("DATUM_NAME", datum_name)
        .with("PRIME_MERIDIAN_CODE", pm)
        .with("ELLIPSOID_CODE", ellipsoid)
        .with("UOM_CODE", uom)
        .with("COORD_SYS_CODE", csc)
        .with("DEPRECATED", "0")
}

fn pcs(code: &str, name: &str, uom: &str, geog: &str, csc: &str, method: &str, parms: &[(&str, &str, &str)]) -> Record {
    let mut record = Record::new()
        .with("COORD_REF_SYS_CODE", code)
        .with("COORD_REF_SYS_NAME", name)
        .with("UOM_CODE", uom)
        .with("SOURCE_GEOGCRS_CODE", geog)
        .with("COORD_SYS_CODE", csc)
        .with("COORD_OP_METHOD_CODE", method)
        .with("DEPRECATED", "0");

    for (i, (id, value, parm_uom)) in parms.iter().enumerate() {
        record.set(&format!("PARAMETER_CODE_{}", i + 1), id);
        record.set(&format!("PARAMETER_VALUE_{}", i + 1), value);
        record.set(&format!("PARAMETER_UOM_{}", i + 1), parm_uom);
    }
    record
}

fn axis(csc: &str, name_code: &str, orientation: &str, abbreviation: &str, order: &str) -> Record {
    Record::new()
        .with("COORD_SYS_CODE", csc)
        .with("coord_axis_name_code", name_code)
        .with("coord_axis_orientation", orientation)
        .with("coord_axis_abbreviation", abbreviation)
        .with("coord_axis_order", order)
}

/// A small EPSG dictionary covering each kind of coordinate system
pub fn sample_dictionary() -> MemoryDictionary {
    let mut dictionary = MemoryDictionary::new();

    dictionary.insert(
        tables::UNIT_OF_MEASURE,
        Record::new()
            .with("UOM_CODE", "9003")
            .with("UNIT_OF_MEAS_NAME", "US survey foot")
            .with("FACTOR_B", "12")
            .with("FACTOR_C", "39.37"),
    );
    dictionary.insert(
        tables::UNIT_OF_MEASURE,
        Record::new()
            .with("UOM_CODE", "9105")
            .with("UNIT_OF_MEAS_NAME", "grad")
            .with("FACTOR_B", "3.14159265358979")
            .with("FACTOR_C", "200"),
    );

    for (code, name, a, rf, b) in [
        ("7030", "WGS 84", "6378137", "298.257223563", ""),
        ("7019", "GRS 1980", "6378137", "298.257222101", ""),
        ("7008", "Clarke 1866", "6378206.4", "", "6356583.8"),
        ("7011", "Clarke 1880 (IGN)", "6378249.2", "", "6356515"),
    ] {
        dictionary.insert(
            tables::ELLIPSOID,
            Record::new()
                .with("ELLIPSOID_CODE", code)
                .with("ELLIPSOID_NAME", name)
                .with("SEMI_MAJOR_AXIS", a)
                .with("INV_FLATTENING", rf)
                .with("SEMI_MINOR_AXIS", b)
                .with("UOM_CODE", "9001"),
        );
    }

    dictionary.insert(
        tables::PRIME_MERIDIAN,
        Record::new()
            .with("PRIME_MERIDIAN_CODE", "8903")
            .with("PRIME_MERIDIAN_NAME", "Paris")
            .with("GREENWICH_LONGITUDE", "2.5969213")
            .with("UOM_CODE", "9105"),
    );

    dictionary.insert(
        tables::GCS,
        gcs("4326", "WGS 84", "6326", "World Geodetic System 1984", "8901", "7030", "9122", "6422"),
    );
    dictionary.insert(
        tables::GCS,
        gcs("4269", "NAD83", "6269", "North American Datum 1983", "8901", "7019", "9122", "6422")
            .with("COORD_OP_METHOD_CODE", "9603")
            .with("DX", "0")
            .with("DY", "0")
            .with("DZ", "0"),
    );
    dictionary.insert(
        tables::GCS,
        gcs("4267", "NAD27", "6267", "North American Datum 1927", "8901", "7008", "9122", "6422"),
    );
    dictionary.insert(
        tables::GCS,
        gcs("4807", "NTF (Paris)", "6807", "Nouvelle Triangulation Francaise (Paris)", "8903", "7011", "9105", "6403")
            .with("COORD_OP_METHOD_CODE", "9607")
            .with("DX", "-168")
            .with("DY", "-60")
            .with("DZ", "320")
            .with("RX", "1.5")
            .with("RY", "-0.25")
            .with("RZ", "+2"),
    );

    dictionary.insert(
        tables::PCS,
        pcs(
            "32611",
            "WGS 84 / UTM zone 11N",
            "9001",
            "4326",
            "4400",
            "9807",
            &[
                ("8801", "0", "9102"),
                ("8802", "-117", "9102"),
                ("8805", "0.9996", "9201"),
                ("8806", "500000", "9001"),
                ("8807", "0", "9001"),
            ],
        ),
    );
    dictionary.insert(
        tables::PCS,
        pcs(
            "2227",
            "NAD83 / California zone 3 (ftUS)",
            "9003",
            "4269",
            "4497",
            "9802",
            &[
                ("8821", "36.3", "9110"),
                ("8822", "-120.3", "9110"),
                ("8823", "38.26", "9110"),
                ("8824", "37.04", "9110"),
                ("8826", "6561666.667", "9003"),
                ("8827", "1640416.667", "9003"),
            ],
        ),
    );
    dictionary.insert(
        tables::PCS,
        pcs(
            "3031",
            "WGS 84 / Antarctic Polar Stereographic",
            "9001",
            "4326",
            "4400",
            "9829",
            &[("8832", "-71", "9102"), ("8833", "0", "9102"), ("8806", "0", "9001"), ("8807", "0", "9001")],
        ),
    );
    dictionary.insert(
        tables::PCS,
        pcs("2000", "Anguilla 1957 / British West Indies Grid", "9001", "4326", "4400", "9999", &[]),
    );

    // Order 2 first, to exercise reordering
    dictionary.insert(tables::COORDINATE_AXIS, axis("4497", "9907", "north", "Y", "2"));
    dictionary.insert(tables::COORDINATE_AXIS, axis("4497", "9906", "east", "X", "1"));

    dictionary.insert(
        tables::VERTCS,
        Record::new()
            .with("COORD_REF_SYS_CODE", "5703")
            .with("COORD_REF_SYS_NAME", "NAVD88 height")
            .with("DATUM_CODE", "5103")
            .with("DATUM_NAME", "North American Vertical Datum 1988")
            .with("UOM_CODE", "9001")
            .with("COORD_OP_METHOD_CODE_1", "9665")
            .with("PARM_1_1", "g2012a_conus.gtx"),
    );

    dictionary.insert(
        tables::COMPDCS,
        Record::new()
            .with("COORD_REF_SYS_CODE", "5498")
            .with("COORD_REF_SYS_NAME", "NAD83 + NAVD88 height")
            .with("CMPD_HORIZCRS_CODE", "4269")
            .with("CMPD_VERTCRS_CODE", "5703"),
    );

    dictionary.insert(
        tables::GEOCCS,
        Record::new()
            .with("COORD_REF_SYS_CODE", "4978")
            .with("COORD_REF_SYS_NAME", "WGS 84")
            .with("DATUM_CODE", "6326")
            .with("DATUM_NAME", "World Geodetic System 1984")
            .with("ELLIPSOID_CODE", "7030")
            .with("PRIME_MERIDIAN_CODE", "8901")
            .with("UOM_CODE", "9001"),
    );

    dictionary.insert(tables::STATEPLANE, Record::new().with("ID", "403").with("EPSG_PCS_CODE", "2227"));

    dictionary.insert_wkt(
        tables::EPSG_WKT_FILE,
        "900913",
        "PROJCS[\"Google Maps Global Mercator\",GEOGCS[\"WGS 84\",DATUM[\"WGS_1984\",SPHEROID[\"WGS 84\",6378137,298.257223563]],PRIMEM[\"Greenwich\",0],UNIT[\"degree\",0.0174532925199433]],PROJECTION[\"Mercator_1SP\"],PARAMETER[\"central_meridian\",0],PARAMETER[\"scale_factor\",1],PARAMETER[\"false_easting\",0],PARAMETER[\"false_northing\",0],UNIT[\"Meter\",1]]",
    );

    dictionary
}

pub fn sample_context() -> SrsContext {
    SrsContext::new(Box::new(sample_dictionary()))
}
