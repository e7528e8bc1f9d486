//! Static lookup tables
//!
//! Ellipsoids, datum keywords, prime meridians, linear units and the
//! Panorama code tables are read from `srs_tables.toml`, embedded at build
//! time and parsed once.

use lazy_static::lazy_static;

use crate::srs::errors::{SrsError, SrsResult};
use crate::utils::dms::dms_to_decimal;
use crate::srs::model::inv_flattening_from_semi_minor;

lazy_static! {
    static ref SRS_TABLES: SrsTables = {
        let content = include_str!("../../srs_tables.toml");
        SrsTables::from_str(content).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse SRS lookup tables: {}", e);
                SrsTables::default()
            })
    };
}

/// The parsed lookup tables
pub fn tables() -> &'static SrsTables {
    &SRS_TABLES
}

/// A named PROJ ellipsoid
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipsoid {
    /// PROJ `+ellps=` keyword
    pub key: String,
    pub semi_major: f64,
    /// Inverse flattening, when the table gives it directly
    pub inv_flattening: Option<f64>,
    /// Semi-minor axis, when the table gives it instead
    pub semi_minor: Option<f64>,
    pub description: String,
}

impl Ellipsoid {
    /// Inverse flattening, derived from the semi-minor axis if needed
    pub fn inv_flattening(&self) -> f64 {
        match (self.inv_flattening, self.semi_minor) {
            (Some(rf), _) => rf,
            (None, Some(b)) => inv_flattening_from_semi_minor(self.semi_major, b),
            (None, None) => 0.0,
        }
    }
}

/// A PROJ datum keyword and its EPSG equivalents
#[derive(Debug, Clone, PartialEq)]
pub struct ProjDatum {
    /// PROJ `+datum=` keyword
    pub proj: String,
    /// WKT datum name
    pub wkt: String,
    /// EPSG geographic CS imported for the keyword
    pub gcs: i32,
    /// EPSG datum code
    pub datum: i32,
}

/// A prime meridian known to PROJ
#[derive(Debug, Clone, PartialEq)]
pub struct PrimeMeridian {
    pub proj: String,
    pub wkt: String,
    /// Offset from Greenwich as DMS text
    pub offset: String,
    /// EPSG prime meridian code
    pub code: i32,
}

impl PrimeMeridian {
    pub fn offset_degrees(&self) -> f64 {
        dms_to_decimal(&self.offset)
    }
}

/// A linear unit with its WKT and PROJ names
#[derive(Debug, Clone, PartialEq)]
pub struct LinearUnit {
    pub wkt: String,
    /// Meters per unit
    pub factor: f64,
    pub proj: String,
}

/// A Panorama ellipsoid slot
#[derive(Debug, Clone, PartialEq)]
pub struct PanoramaEllipsoid {
    pub index: i64,
    /// EPSG ellipsoid code
    pub epsg: i32,
    pub name: String,
    pub semi_major: f64,
    pub inv_flattening: f64,
}

/// All lookup tables
#[derive(Debug, Default)]
pub struct SrsTables {
    pub ellipsoids: Vec<Ellipsoid>,
    pub datums: Vec<ProjDatum>,
    pub prime_meridians: Vec<PrimeMeridian>,
    pub linear_units: Vec<LinearUnit>,
    /// Panorama datum index to EPSG geographic CS, zero where unmapped
    pub panorama_datums: Vec<i32>,
    pub panorama_ellipsoids: Vec<PanoramaEllipsoid>,
}

fn get_str(row: &toml::Value, key: &str) -> Option<String> {
    row.get(key).and_then(|v| v.as_str()).map(str::to_string)
}

fn get_f64(row: &toml::Value, key: &str) -> Option<f64> {
    row.get(key)
        .and_then(|v| v.as_float().or_else(|| v.as_integer().map(|i| i as f64)))
}

fn get_i64(row: &toml::Value, key: &str) -> Option<i64> {
    row.get(key).and_then(|v| v.as_integer())
}

fn rows<'a>(toml_value: &'a toml::Value, name: &str) -> &'a [toml::Value] {
    toml_value
        .get(name)
        .and_then(|v| v.as_array())
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

impl SrsTables {
    /// Parse the tables from a TOML string
    pub fn from_str(content: &str) -> SrsResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(SrsError::CorruptData(format!("Failed to parse TOML: {}", e))),
        };

        let mut tables = SrsTables::default();

        for row in rows(&toml_value, "ellipsoids") {
            if let (Some(key), Some(semi_major)) = (get_str(row, "key"), get_f64(row, "a")) {
                tables.ellipsoids.push(Ellipsoid {
                    key,
                    semi_major,
                    inv_flattening: get_f64(row, "rf"),
                    semi_minor: get_f64(row, "b"),
                    description: get_str(row, "description").unwrap_or_default(),
                });
            }
        }

        for row in rows(&toml_value, "datums") {
            if let (Some(proj), Some(wkt), Some(gcs), Some(datum)) =
                (get_str(row, "proj"), get_str(row, "wkt"), get_i64(row, "gcs"), get_i64(row, "datum"))
            {
                tables.datums.push(ProjDatum { proj, wkt, gcs: gcs as i32, datum: datum as i32 });
            }
        }

        for row in rows(&toml_value, "prime_meridians") {
            if let (Some(proj), Some(wkt), Some(offset), Some(code)) =
                (get_str(row, "proj"), get_str(row, "wkt"), get_str(row, "offset"), get_i64(row, "code"))
            {
                tables.prime_meridians.push(PrimeMeridian { proj, wkt, offset, code: code as i32 });
            }
        }

        for row in rows(&toml_value, "linear_units") {
            if let (Some(wkt), Some(factor), Some(proj)) =
                (get_str(row, "wkt"), get_f64(row, "factor"), get_str(row, "proj"))
            {
                tables.linear_units.push(LinearUnit { wkt, factor, proj });
            }
        }

        if let Some(panorama) = toml_value.get("panorama") {
            if let Some(datums) = panorama.get("datums").and_then(|v| v.as_array()) {
                tables.panorama_datums = datums
                    .iter()
                    .map(|v| v.as_integer().unwrap_or(0) as i32)
                    .collect();
            }

            for row in rows(panorama, "ellipsoids") {
                if let (Some(index), Some(epsg), Some(name), Some(a), Some(rf)) = (
                    get_i64(row, "index"),
                    get_i64(row, "epsg"),
                    get_str(row, "name"),
                    get_f64(row, "a"),
                    get_f64(row, "rf"),
                ) {
                    tables.panorama_ellipsoids.push(PanoramaEllipsoid {
                        index,
                        epsg: epsg as i32,
                        name,
                        semi_major: a,
                        inv_flattening: rf,
                    });
                }
            }
        }

        Ok(tables)
    }

    /// Ellipsoid by its PROJ keyword
    pub fn ellipsoid(&self, key: &str) -> Option<&Ellipsoid> {
        self.ellipsoids.iter().find(|e| e.key.eq_ignore_ascii_case(key))
    }

    /// Datum by its PROJ keyword
    pub fn datum_by_proj(&self, keyword: &str) -> Option<&ProjDatum> {
        self.datums.iter().find(|d| d.proj.eq_ignore_ascii_case(keyword))
    }

    /// Datum by WKT name or EPSG datum code
    pub fn datum_by_wkt_or_code(&self, wkt_name: &str, datum_code: i32) -> Option<&ProjDatum> {
        self.datums
            .iter()
            .find(|d| d.datum == datum_code || d.wkt.eq_ignore_ascii_case(wkt_name))
    }

    pub fn prime_meridian_by_proj(&self, name: &str) -> Option<&PrimeMeridian> {
        self.prime_meridians.iter().find(|pm| pm.proj.eq_ignore_ascii_case(name))
    }

    pub fn prime_meridian_by_code(&self, code: i32) -> Option<&PrimeMeridian> {
        self.prime_meridians.iter().find(|pm| pm.code == code)
    }

    /// Prime meridian whose offset matches `degrees` within 1e-10
    pub fn prime_meridian_by_offset(&self, degrees: f64) -> Option<&PrimeMeridian> {
        self.prime_meridians
            .iter()
            .find(|pm| (degrees - pm.offset_degrees()).abs() < 1e-10)
    }

    /// Linear unit matching the WKT name, or else the factor within 1e-8
    pub fn linear_unit_by_factor_or_name(&self, factor: f64, name: Option<&str>) -> Option<&LinearUnit> {
        self.linear_units.iter().find(|unit| {
            name.map_or(false, |name| unit.wkt.eq_ignore_ascii_case(name)) || (factor - unit.factor).abs() < 0.00000001
        })
    }

    /// Linear unit by its PROJ `+units=` keyword
    pub fn linear_unit_by_proj(&self, keyword: &str) -> Option<&LinearUnit> {
        self.linear_units.iter().find(|unit| unit.proj.eq_ignore_ascii_case(keyword))
    }

    /// EPSG geographic CS for a Panorama datum index, `None` when unmapped
    pub fn panorama_datum_gcs(&self, index: i64) -> Option<i32> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i > 0)
            .and_then(|i| self.panorama_datums.get(i))
            .copied()
            .filter(|&code| code != 0)
    }

    pub fn panorama_ellipsoid(&self, index: i64) -> Option<&PanoramaEllipsoid> {
        self.panorama_ellipsoids.iter().find(|e| e.index == index)
    }
}
