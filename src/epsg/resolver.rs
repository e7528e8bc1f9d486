//! EPSG code resolution
//!
//! A code is tried as a geographic, projected, vertical, compound and
//! geocentric system in turn. Each attempt reads its records from the
//! dictionary (override table first) and reports `UnsupportedSrs` when the
//! code is not of that kind, which moves the search on to the next kind.

use log::{debug, error, warn};

use crate::epsg::dictionary::{Dictionary, Record};
use crate::epsg::tables;
use crate::epsg::uom::{angle_string_to_degrees, massage_datum_name, uom_angle_info, uom_length_info};
use crate::node::SrsNode;
use crate::srs::constants::{params, projections, units};
use crate::srs::context::SrsContext;
use crate::srs::errors::{SrsError, SrsResult};
use crate::srs::model::{inv_flattening_from_semi_minor, AxisOrientation, SpatialReference};
use crate::utils::number_format::{atof, atoi, print_double};

/// EPSG projection parameter codes
mod parm {
    pub const CO_LAT_CONE_AXIS: i32 = 1036;
    pub const NAT_ORIGIN_LAT: i32 = 8801;
    pub const NAT_ORIGIN_LONG: i32 = 8802;
    pub const NAT_ORIGIN_SCALE_FACTOR: i32 = 8805;
    pub const FALSE_EASTING: i32 = 8806;
    pub const FALSE_NORTHING: i32 = 8807;
    pub const PROJ_CENTER_LAT: i32 = 8811;
    pub const PROJ_CENTER_LONG: i32 = 8812;
    pub const AZIMUTH: i32 = 8813;
    pub const ANGLE_RECTIFIED_TO_SKEWED_GRID: i32 = 8814;
    pub const INITIAL_LINE_SCALE_FACTOR: i32 = 8815;
    pub const PROJ_CENTER_EASTING: i32 = 8816;
    pub const PROJ_CENTER_NORTHING: i32 = 8817;
    pub const PSEUDO_STD_PARALLEL_LAT: i32 = 8818;
    pub const PSEUDO_STD_PARALLEL_SCALE_FACTOR: i32 = 8819;
    pub const FALSE_ORIGIN_LAT: i32 = 8821;
    pub const FALSE_ORIGIN_LONG: i32 = 8822;
    pub const STD_PARALLEL_1_LAT: i32 = 8823;
    pub const STD_PARALLEL_2_LAT: i32 = 8824;
    pub const FALSE_ORIGIN_EASTING: i32 = 8826;
    pub const FALSE_ORIGIN_NORTHING: i32 = 8827;
    pub const SPHERICAL_ORIGIN_LAT: i32 = 8828;
    pub const SPHERICAL_ORIGIN_LONG: i32 = 8829;
    pub const POLAR_LAT_STD_PARALLEL: i32 = 8832;
    pub const POLAR_LONG_ORIGIN: i32 = 8833;
}

/// PROJ definition attached to the spherical Mercator methods
const SPHERICAL_MERCATOR_PROJ4: &str =
    "+proj=merc +a=6378137 +b=6378137 +lat_ts=0.0 +lon_0=0.0 +x_0=0.0 +y_0=0 +k=1.0 +units=m +nadgrids=@null +wktext +no_defs";

/// Bursa-Wolf column names, in coefficient order
const BURSA_WOLF_COLUMNS: [&str; 7] = ["DX", "DY", "DZ", "RX", "RY", "RZ", "DS"];

fn find_crs(dictionary: &dyn Dictionary, override_table: Option<&str>, table: &str, code: i32) -> Option<Record> {
    let key = code.to_string();
    override_table
        .and_then(|override_table| dictionary.find(override_table, "COORD_REF_SYS_CODE", &key))
        .or_else(|| dictionary.find(table, "COORD_REF_SYS_CODE", &key))
}

fn code_field(record: &Record, column: &str) -> i32 {
    atoi(record.field_or_empty(column))
}

/// A positive code, or zero
fn positive_code(record: &Record, column: &str) -> i32 {
    code_field(record, column).max(0)
}

/// CRS name with a deprecation marker
fn crs_name(record: &Record) -> String {
    let mut name = record.field_or_empty("COORD_REF_SYS_NAME").to_string();
    if record.field_or_empty("DEPRECATED").starts_with('1') {
        name.push_str(" (deprecated)");
    }
    name
}

fn not_found(kind: &str, code: i32) -> SrsError {
    SrsError::UnsupportedSrs(format!("No {} record for EPSG code {}", kind, code))
}

/// Name, semi-major axis (meters) and inverse flattening of an EPSG ellipsoid
///
/// A missing inverse flattening is derived from the semi-minor axis.
///
/// # Returns
/// `UnsupportedSrs` if the ellipsoid has no record or a zero semi-major axis
pub fn ellipsoid_info(dictionary: &dyn Dictionary, code: i32) -> SrsResult<(String, f64, f64)> {
    let record = dictionary
        .find(tables::ELLIPSOID, "ELLIPSOID_CODE", &code.to_string())
        .ok_or_else(|| not_found("ellipsoid", code))?;

    let mut semi_major = atof(record.field_or_empty("SEMI_MAJOR_AXIS"));
    if semi_major == 0.0 {
        return Err(not_found("ellipsoid", code));
    }

    let to_meters = uom_length_info(dictionary, code_field(&record, "UOM_CODE"))
        .map(|(_, factor)| factor)
        .unwrap_or(1.0);
    semi_major *= to_meters;

    let mut inv_flattening = atof(record.field_or_empty("INV_FLATTENING"));
    if inv_flattening == 0.0 {
        let semi_minor = atof(record.field_or_empty("SEMI_MINOR_AXIS")) * to_meters;
        inv_flattening = inv_flattening_from_semi_minor(semi_major, semi_minor);
    }

    Ok((record.field_or_empty("ELLIPSOID_NAME").to_string(), semi_major, inv_flattening))
}

/// Name and Greenwich offset in degrees of an EPSG prime meridian
fn pm_info(dictionary: &dyn Dictionary, code: i32) -> Option<(String, f64)> {
    if code == 7022 || code == 8901 {
        return Some(("Greenwich".to_string(), 0.0));
    }

    let record = dictionary.find(tables::PRIME_MERIDIAN, "PRIME_MERIDIAN_CODE", &code.to_string())?;
    let uom = code_field(&record, "UOM_CODE");
    if uom < 1 {
        return None;
    }

    let offset = angle_string_to_degrees(record.field_or_empty("GREENWICH_LONGITUDE"), uom);
    Some((record.field_or_empty("PRIME_MERIDIAN_NAME").to_string(), offset))
}

/// The codes a geographic CS record refers to
struct GcsInfo {
    name: String,
    datum_code: i32,
    datum_name: String,
    pm_code: i32,
    ellipsoid_code: i32,
    uom_angle: i32,
    coord_sys_code: i32,
}

fn gcs_info(dictionary: &dyn Dictionary, code: i32) -> Option<GcsInfo> {
    let record = find_crs(dictionary, Some(tables::GCS_OVERRIDE), tables::GCS, code)?;

    let datum_code = code_field(&record, "DATUM_CODE");
    let pm_code = code_field(&record, "PRIME_MERIDIAN_CODE");
    let ellipsoid_code = code_field(&record, "ELLIPSOID_CODE");
    let uom_angle = code_field(&record, "UOM_CODE");
    if datum_code < 1 || pm_code < 1 || ellipsoid_code < 1 || uom_angle < 1 {
        return None;
    }

    Some(GcsInfo {
        name: crs_name(&record),
        datum_code,
        datum_name: record.field_or_empty("DATUM_NAME").to_string(),
        pm_code,
        ellipsoid_code,
        uom_angle,
        coord_sys_code: code_field(&record, "COORD_SYS_CODE"),
    })
}

/// The codes a projected CS record refers to
struct PcsInfo {
    name: String,
    uom_length: i32,
    geog_cs: i32,
    coord_sys_code: i32,
    towgs84: Option<[f64; 7]>,
}

fn pcs_info(dictionary: &dyn Dictionary, code: i32) -> Option<PcsInfo> {
    let record = find_crs(dictionary, Some(tables::PCS_OVERRIDE), tables::PCS, code)?;

    let towgs84 = if record.field_or_empty("DX").is_empty() {
        None
    } else {
        let mut coefficients = [0.0; 7];
        for (slot, column) in coefficients.iter_mut().zip(BURSA_WOLF_COLUMNS.iter()) {
            *slot = atof(record.field_or_empty(column));
        }
        Some(coefficients)
    };

    Some(PcsInfo {
        name: crs_name(&record),
        uom_length: positive_code(&record, "UOM_CODE"),
        geog_cs: positive_code(&record, "SOURCE_GEOGCRS_CODE"),
        coord_sys_code: code_field(&record, "COORD_SYS_CODE"),
        towgs84,
    })
}

/// Projection method and its parameters, normalized to degrees and meters
struct ProjParms {
    method: i32,
    ids: [i32; 7],
    values: [f64; 7],
}

impl ProjParms {
    /// Value of a parameter by EPSG code, with the method defaults
    fn fetch(&self, id: i32) -> f64 {
        let default = match id {
            parm::NAT_ORIGIN_SCALE_FACTOR | parm::INITIAL_LINE_SCALE_FACTOR | parm::PSEUDO_STD_PARALLEL_SCALE_FACTOR => 1.0,
            parm::ANGLE_RECTIFIED_TO_SKEWED_GRID => 90.0,
            _ => 0.0,
        };

        self.ids
            .iter()
            .position(|&candidate| candidate == id)
            .map_or(default, |index| self.values[index])
    }
}

fn proj_trf_info(dictionary: &dyn Dictionary, code: i32) -> Option<ProjParms> {
    let record = find_crs(dictionary, Some(tables::PCS_OVERRIDE), tables::PCS, code)?;

    let method = code_field(&record, "COORD_OP_METHOD_CODE");
    if method == 0 {
        return None;
    }

    let mut parms = ProjParms { method, ids: [0; 7], values: [0.0; 7] };

    for i in 0..7 {
        let id = code_field(&record, &format!("PARAMETER_CODE_{}", i + 1));
        let mut uom = code_field(&record, &format!("PARAMETER_UOM_{}", i + 1));
        let value = record.field_or_empty(&format!("PARAMETER_VALUE_{}", i + 1));

        // Scale factors with a non-scale unit are taken as unity-based
        if matches!(
            id,
            parm::NAT_ORIGIN_SCALE_FACTOR | parm::INITIAL_LINE_SCALE_FACTOR | parm::PSEUDO_STD_PARALLEL_SCALE_FACTOR
        ) && uom < 9200
        {
            uom = 9201;
        }

        parms.ids[i] = id;
        parms.values[i] = if (9100..9200).contains(&uom) {
            angle_string_to_degrees(value, uom)
        } else if uom > 9000 && uom < 9100 {
            let in_meters = uom_length_info(dictionary, uom).map_or(1.0, |(_, factor)| factor);
            atof(value) * in_meters
        } else if value.is_empty() {
            0.0
        } else {
            if uom != 9201 {
                debug!("Non-unity scale factor units (uom = {})", uom);
            }
            atof(value)
        };
    }

    Some(parms)
}

/// Bursa-Wolf parameters toward WGS84 stored with a geographic CS
///
/// Only the 9603, 9606 and 9607 methods are used; 9607 rotations are
/// negated into the 9606 convention. Empty values read as `"0"`.
///
/// # Returns
/// The seven coefficients as text, or `None`
pub fn epsg_wgs84_transform(dictionary: &dyn Dictionary, gcs_code: i32) -> Option<[String; 7]> {
    let record = find_crs(dictionary, Some(tables::GCS_OVERRIDE), tables::GCS, gcs_code)?;

    let method = code_field(&record, "COORD_OP_METHOD_CODE");
    if method != 9603 && method != 9606 && method != 9607 {
        return None;
    }

    record.field("DX")?;

    let mut transform: [String; 7] = Default::default();
    for (slot, column) in transform.iter_mut().zip(BURSA_WOLF_COLUMNS.iter()) {
        let value = record.field_or_empty(column);
        *slot = if value.is_empty() { "0".to_string() } else { value.to_string() };
    }

    if method == 9607 {
        for rotation in transform.iter_mut().skip(3).take(3) {
            *rotation = negate_string(rotation);
        }
    }

    Some(transform)
}

fn negate_string(value: &str) -> String {
    if value == "0" {
        value.to_string()
    } else if let Some(positive) = value.strip_prefix('-') {
        positive.to_string()
    } else if let Some(magnitude) = value.strip_prefix('+') {
        format!("-{}", magnitude)
    } else {
        format!("-{}", value)
    }
}

/// Orientation of a coordinate_axis record, by keyword or axis name code
fn axis_orientation(record: &Record) -> AxisOrientation {
    match AxisOrientation::from_wkt(record.field_or_empty("coord_axis_orientation")) {
        Some(orientation) if orientation != AxisOrientation::Other => orientation,
        _ => match code_field(record, "coord_axis_name_code") {
            9907 => AxisOrientation::North,
            9909 => AxisOrientation::South,
            9906 => AxisOrientation::East,
            9908 => AxisOrientation::West,
            _ => AxisOrientation::Other,
        },
    }
}

fn expand_axis_abbreviation(abbreviation: &str) -> &str {
    match abbreviation.to_ascii_uppercase().as_str() {
        "N" => "Northing",
        "E" => "Easting",
        "S" => "Southing",
        "W" => "Westing",
        _ => abbreviation,
    }
}

impl SpatialReference {
    fn set_epsg_axis_info(&mut self, dictionary: &dyn Dictionary, target_key: &str, coord_sys_code: i32) -> SrsResult<()> {
        if (4400..=4410).contains(&coord_sys_code) {
            return self.set_axes(target_key, "Easting", AxisOrientation::East, "Northing", AxisOrientation::North);
        }

        if (6400..=6423).contains(&coord_sys_code) {
            return self.set_axes(target_key, "Latitude", AxisOrientation::North, "Longitude", AxisOrientation::East);
        }

        let records = dictionary.scan(tables::COORDINATE_AXIS, "COORD_SYS_CODE", &coord_sys_code.to_string());
        let (mut first, mut second) = match (records.first(), records.get(1)) {
            (Some(first), Some(second)) => (first, second),
            _ => {
                return Err(SrsError::Failure(format!(
                    "Failed to find entries for COORD_SYS_CODE {} in coordinate_axis",
                    coord_sys_code
                )))
            }
        };

        let columns = ["coord_axis_orientation", "coord_axis_abbreviation", "coord_axis_order", "coord_axis_name_code"];
        if columns.iter().any(|column| first.field(column).is_none() || second.field(column).is_none()) {
            return Err(SrsError::Failure(format!(
                "Axis records appear incomplete for COORD_SYS_CODE {} in coordinate_axis",
                coord_sys_code
            )));
        }

        if code_field(second, "coord_axis_order") < code_field(first, "coord_axis_order") {
            std::mem::swap(&mut first, &mut second);
        }

        self.set_axes(
            target_key,
            expand_axis_abbreviation(first.field_or_empty("coord_axis_abbreviation")),
            axis_orientation(first),
            expand_axis_abbreviation(second.field_or_empty("coord_axis_abbreviation")),
            axis_orientation(second),
        )
    }

    fn set_epsg_geog_cs(&mut self, dictionary: &dyn Dictionary, code: i32) -> SrsResult<()> {
        let gcs = gcs_info(dictionary, code).ok_or_else(|| not_found("geographic CS", code))?;
        let (pm_name, pm_offset) =
            pm_info(dictionary, gcs.pm_code).ok_or_else(|| not_found("prime meridian", gcs.pm_code))?;
        let datum_name = massage_datum_name(&gcs.datum_name);
        let (ellipsoid_name, semi_major, inv_flattening) = ellipsoid_info(dictionary, gcs.ellipsoid_code)?;

        let (angle_name, in_degrees, uom_angle) = match uom_angle_info(dictionary, gcs.uom_angle) {
            Some((name, in_degrees)) => (name, in_degrees, gcs.uom_angle),
            None => ("degree".to_string(), 1.0, -1),
        };
        let in_radians = if in_degrees == 1.0 {
            units::DEGREE_CONV
        } else {
            units::DEGREE_CONV * in_degrees
        };

        self.set_geog_cs(
            Some(&gcs.name),
            Some(&datum_name),
            Some(&ellipsoid_name),
            semi_major,
            inv_flattening,
            Some(&pm_name),
            pm_offset,
            Some((&angle_name, in_radians)),
        )?;

        if let Some(transform) = epsg_wgs84_transform(dictionary, code) {
            let leaves: Vec<&str> = transform.iter().map(String::as_str).collect();
            if let Some(datum) = self.get_attr_node_mut("DATUM") {
                datum.add_child(SrsNode::with_leaves("TOWGS84", &leaves));
            }
        }

        self.set_authority("GEOGCS", "EPSG", code)?;
        self.set_authority("DATUM", "EPSG", gcs.datum_code)?;
        self.set_authority("SPHEROID", "EPSG", gcs.ellipsoid_code)?;
        self.set_authority("PRIMEM", "EPSG", gcs.pm_code)?;

        if uom_angle > 0 {
            self.set_authority("GEOGCS|UNIT", "EPSG", uom_angle)?;
        }

        if gcs.coord_sys_code > 0 {
            if let Err(e) = self.set_epsg_axis_info(dictionary, "GEOGCS", gcs.coord_sys_code) {
                debug!("Axis order of EPSG:{} left unset: {}", code, e);
            }
        }

        Ok(())
    }

    fn set_epsg_proj_cs(&mut self, dictionary: &dyn Dictionary, code: i32) -> SrsResult<()> {
        let pcs = pcs_info(dictionary, code).ok_or_else(|| not_found("projected CS", code))?;

        self.set_node("PROJCS", &pcs.name)?;
        self.set_epsg_geog_cs(dictionary, pcs.geog_cs)?;

        if let Some(towgs84) = pcs.towgs84 {
            self.set_towgs84(towgs84)?;
        }

        let (length_name, in_meters) =
            uom_length_info(dictionary, pcs.uom_length).ok_or_else(|| not_found("unit of measure", pcs.uom_length))?;
        self.set_linear_units(&length_name, in_meters)?;
        self.set_authority("PROJCS|UNIT", "EPSG", pcs.uom_length)?;

        let parms = proj_trf_info(dictionary, code).ok_or_else(|| not_found("projection", code))?;
        let fp = |id: i32| parms.fetch(id);

        match parms.method {
            9801 | 9817 => self.set_lcc1sp(
                fp(parm::NAT_ORIGIN_LAT),
                fp(parm::NAT_ORIGIN_LONG),
                fp(parm::NAT_ORIGIN_SCALE_FACTOR),
                fp(parm::FALSE_EASTING),
                fp(parm::FALSE_NORTHING),
            )?,
            9802 => self.set_lcc(
                fp(parm::STD_PARALLEL_1_LAT),
                fp(parm::STD_PARALLEL_2_LAT),
                fp(parm::FALSE_ORIGIN_LAT),
                fp(parm::FALSE_ORIGIN_LONG),
                fp(parm::FALSE_ORIGIN_EASTING),
                fp(parm::FALSE_ORIGIN_NORTHING),
            )?,
            9803 => self.set_lccb(
                fp(parm::STD_PARALLEL_1_LAT),
                fp(parm::STD_PARALLEL_2_LAT),
                fp(parm::FALSE_ORIGIN_LAT),
                fp(parm::FALSE_ORIGIN_LONG),
                fp(parm::FALSE_ORIGIN_EASTING),
                fp(parm::FALSE_ORIGIN_NORTHING),
            )?,
            9805 => self.set_mercator_2sp(
                fp(parm::STD_PARALLEL_1_LAT),
                fp(parm::NAT_ORIGIN_LAT),
                fp(parm::NAT_ORIGIN_LONG),
                fp(parm::FALSE_EASTING),
                fp(parm::FALSE_NORTHING),
            )?,
            9804 | 9841 | 1024 => {
                self.set_mercator(
                    fp(parm::NAT_ORIGIN_LAT),
                    fp(parm::NAT_ORIGIN_LONG),
                    fp(parm::NAT_ORIGIN_SCALE_FACTOR),
                    fp(parm::FALSE_EASTING),
                    fp(parm::FALSE_NORTHING),
                )?;

                if parms.method == 1024 || parms.method == 9841 {
                    self.set_extension(Some("PROJCS"), "PROJ4", SPHERICAL_MERCATOR_PROJ4)?;
                }
            }
            9806 => self.set_cs(
                fp(parm::NAT_ORIGIN_LAT),
                fp(parm::NAT_ORIGIN_LONG),
                fp(parm::FALSE_EASTING),
                fp(parm::FALSE_NORTHING),
            )?,
            9807 => self.set_tm(
                fp(parm::NAT_ORIGIN_LAT),
                fp(parm::NAT_ORIGIN_LONG),
                fp(parm::NAT_ORIGIN_SCALE_FACTOR),
                fp(parm::FALSE_EASTING),
                fp(parm::FALSE_NORTHING),
            )?,
            9808 => self.set_tmso(
                fp(parm::NAT_ORIGIN_LAT),
                fp(parm::NAT_ORIGIN_LONG),
                fp(parm::NAT_ORIGIN_SCALE_FACTOR),
                fp(parm::FALSE_EASTING),
                fp(parm::FALSE_NORTHING),
            )?,
            9809 => self.set_os(
                fp(parm::NAT_ORIGIN_LAT),
                fp(parm::NAT_ORIGIN_LONG),
                fp(parm::NAT_ORIGIN_SCALE_FACTOR),
                fp(parm::FALSE_EASTING),
                fp(parm::FALSE_NORTHING),
            )?,
            9810 => self.set_ps(
                fp(parm::NAT_ORIGIN_LAT),
                fp(parm::NAT_ORIGIN_LONG),
                fp(parm::NAT_ORIGIN_SCALE_FACTOR),
                fp(parm::FALSE_EASTING),
                fp(parm::FALSE_NORTHING),
            )?,
            9811 => self.set_nzmg(
                fp(parm::NAT_ORIGIN_LAT),
                fp(parm::NAT_ORIGIN_LONG),
                fp(parm::FALSE_EASTING),
                fp(parm::FALSE_NORTHING),
            )?,
            9812 | 9813 => {
                self.set_hom(
                    fp(parm::PROJ_CENTER_LAT),
                    fp(parm::PROJ_CENTER_LONG),
                    fp(parm::AZIMUTH),
                    fp(parm::ANGLE_RECTIFIED_TO_SKEWED_GRID),
                    fp(parm::INITIAL_LINE_SCALE_FACTOR),
                    fp(parm::FALSE_EASTING),
                    fp(parm::FALSE_NORTHING),
                )?;

                if parms.method == 9813 {
                    if let Some(method) = self.get_attr_node_mut("PROJECTION").and_then(|node| node.child_mut(0)) {
                        method.set_value(projections::LABORDE_OBLIQUE_MERCATOR);
                    }
                }
            }
            9814 => self.set_soc(
                fp(parm::PROJ_CENTER_LAT),
                fp(parm::PROJ_CENTER_LONG),
                fp(parm::FALSE_EASTING),
                fp(parm::FALSE_NORTHING),
            )?,
            9815 => self.set_homac(
                fp(parm::PROJ_CENTER_LAT),
                fp(parm::PROJ_CENTER_LONG),
                fp(parm::AZIMUTH),
                fp(parm::ANGLE_RECTIFIED_TO_SKEWED_GRID),
                fp(parm::INITIAL_LINE_SCALE_FACTOR),
                fp(parm::PROJ_CENTER_EASTING),
                fp(parm::PROJ_CENTER_NORTHING),
            )?,
            9816 => self.set_tmg(
                fp(parm::FALSE_ORIGIN_LAT),
                fp(parm::FALSE_ORIGIN_LONG),
                fp(parm::FALSE_ORIGIN_EASTING),
                fp(parm::FALSE_ORIGIN_NORTHING),
            )?,
            9818 => self.set_polyconic(
                fp(parm::NAT_ORIGIN_LAT),
                fp(parm::NAT_ORIGIN_LONG),
                fp(parm::FALSE_EASTING),
                fp(parm::FALSE_NORTHING),
            )?,
            1041 | 9819 => {
                let mut center_long = fp(parm::PROJ_CENTER_LONG);
                if center_long == 0.0 {
                    center_long = fp(parm::POLAR_LONG_ORIGIN);
                }

                let mut azimuth = fp(parm::CO_LAT_CONE_AXIS);
                if azimuth == 0.0 {
                    azimuth = fp(parm::AZIMUTH);
                }

                self.set_krovak(
                    fp(parm::PROJ_CENTER_LAT),
                    center_long,
                    azimuth,
                    fp(parm::PSEUDO_STD_PARALLEL_LAT),
                    fp(parm::PSEUDO_STD_PARALLEL_SCALE_FACTOR),
                    fp(parm::PROJ_CENTER_EASTING),
                    fp(parm::PROJ_CENTER_NORTHING),
                )?
            }
            9820 | 1027 => self.set_laea(
                fp(parm::NAT_ORIGIN_LAT),
                fp(parm::NAT_ORIGIN_LONG),
                fp(parm::FALSE_EASTING),
                fp(parm::FALSE_NORTHING),
            )?,
            9821 => self.set_laea(
                fp(parm::SPHERICAL_ORIGIN_LAT),
                fp(parm::SPHERICAL_ORIGIN_LONG),
                fp(parm::FALSE_EASTING),
                fp(parm::FALSE_NORTHING),
            )?,
            9822 => self.set_acea(
                fp(parm::STD_PARALLEL_1_LAT),
                fp(parm::STD_PARALLEL_2_LAT),
                fp(parm::FALSE_ORIGIN_LAT),
                fp(parm::FALSE_ORIGIN_LONG),
                fp(parm::FALSE_ORIGIN_EASTING),
                fp(parm::FALSE_ORIGIN_NORTHING),
            )?,
            9823 | 9842 | 1028 | 1029 => {
                self.set_equirectangular(fp(parm::NAT_ORIGIN_LAT), fp(parm::NAT_ORIGIN_LONG), 0.0, 0.0)?
            }
            9829 => self.set_ps(
                fp(parm::POLAR_LAT_STD_PARALLEL),
                fp(parm::POLAR_LONG_ORIGIN),
                1.0,
                fp(parm::FALSE_EASTING),
                fp(parm::FALSE_NORTHING),
            )?,
            9834 | 9835 => self.set_cea(
                fp(parm::STD_PARALLEL_1_LAT),
                fp(parm::NAT_ORIGIN_LONG),
                fp(parm::FALSE_EASTING),
                fp(parm::FALSE_NORTHING),
            )?,
            method => {
                debug!("No WKT support for projection method {}.", method);
                return Err(SrsError::UnsupportedSrs(format!("EPSG projection method {}", method)));
            }
        }

        self.set_authority("PROJCS", "EPSG", code)?;

        if pcs.coord_sys_code > 0 {
            if let Err(e) = self.set_epsg_axis_info(dictionary, "PROJCS", pcs.coord_sys_code) {
                debug!("Axis order of EPSG:{} left unset: {}", code, e);
            }
        }

        Ok(())
    }

    fn set_epsg_vert_cs(&mut self, dictionary: &dyn Dictionary, code: i32) -> SrsResult<()> {
        let record = find_crs(dictionary, Some(tables::VERTCS_OVERRIDE), tables::VERTCS, code)
            .ok_or_else(|| not_found("vertical CS", code))?;

        self.set_vert_cs(
            record.field_or_empty("COORD_REF_SYS_NAME"),
            record.field_or_empty("DATUM_NAME"),
            2005,
        )?;

        if record.field_or_empty("COORD_OP_METHOD_CODE_1").eq_ignore_ascii_case("9665") {
            self.set_extension(Some("VERT_CS|VERT_DATUM"), "PROJ4_GRIDS", record.field_or_empty("PARM_1_1"))?;
        }

        self.set_authority("VERT_CS|VERT_DATUM", "EPSG", code_field(&record, "DATUM_CODE"))?;

        let uom_code = code_field(&record, "UOM_CODE");
        match uom_length_info(dictionary, uom_code) {
            Some((name, in_meters)) => {
                self.set_target_linear_units(Some("VERT_CS"), &name, in_meters)?;
                self.set_authority("VERT_CS|UNIT", "EPSG", uom_code)?;
            }
            None => error!("Failed to lookup UOM CODE {}", uom_code),
        }

        self.set_authority("VERT_CS", "EPSG", code)
    }

    fn set_epsg_compd_cs(&mut self, dictionary: &dyn Dictionary, code: i32) -> SrsResult<()> {
        let record = find_crs(dictionary, None, tables::COMPDCS, code).ok_or_else(|| not_found("compound CS", code))?;

        let horizontal_code = code_field(&record, "CMPD_HORIZCRS_CODE");
        let vertical_code = code_field(&record, "CMPD_VERTCRS_CODE");

        self.set_node("COMPD_CS", record.field_or_empty("COORD_REF_SYS_NAME"))?;

        let mut horizontal = SpatialReference::new();
        if horizontal.set_epsg_proj_cs(dictionary, horizontal_code).is_err() {
            horizontal.clear();
            horizontal.set_epsg_geog_cs(dictionary, horizontal_code)?;
        }

        let mut vertical = SpatialReference::new();
        vertical.set_epsg_vert_cs(dictionary, vertical_code)?;

        let root = self
            .root_mut()
            .ok_or_else(|| SrsError::Failure("COMPD_CS root vanished".to_string()))?;
        for part in [horizontal.take_root(), vertical.take_root()].into_iter().flatten() {
            root.add_child(part);
        }

        self.set_authority("COMPD_CS", "EPSG", code)
    }

    fn set_epsg_geoc_cs(&mut self, dictionary: &dyn Dictionary, code: i32) -> SrsResult<()> {
        let record = find_crs(dictionary, None, tables::GEOCCS, code).ok_or_else(|| not_found("geocentric CS", code))?;

        self.clear();
        self.set_geoc_cs(&crs_name(&record))?;

        let datum_code = code_field(&record, "DATUM_CODE");
        let datum_name = massage_datum_name(record.field_or_empty("DATUM_NAME"));
        let ellipsoid_code = code_field(&record, "ELLIPSOID_CODE");
        let pm_code = code_field(&record, "PRIME_MERIDIAN_CODE");

        let (pm_name, pm_offset) = pm_info(dictionary, pm_code).ok_or_else(|| not_found("prime meridian", pm_code))?;
        let (ellipsoid_name, semi_major, inv_flattening) = ellipsoid_info(dictionary, ellipsoid_code)?;

        let mut spheroid = SrsNode::new("SPHEROID");
        spheroid.add_child(SrsNode::new(&ellipsoid_name));
        spheroid.add_child(SrsNode::new(&print_double(semi_major)));
        spheroid.add_child(SrsNode::new(&print_double(inv_flattening)));

        let mut datum = SrsNode::new("DATUM");
        datum.add_child(SrsNode::new(&datum_name));
        datum.add_child(spheroid);

        let offset_text = if pm_offset == 0.0 { "0".to_string() } else { print_double(pm_offset) };
        let prime_meridian = SrsNode::with_leaves("PRIMEM", &[&pm_name, &offset_text]);

        {
            let root = self
                .root_mut()
                .ok_or_else(|| SrsError::Failure("GEOCCS root vanished".to_string()))?;
            root.add_child(datum);
            root.add_child(prime_meridian);
        }

        let uom_length = code_field(&record, "UOM_CODE");
        let (length_name, in_meters) =
            uom_length_info(dictionary, uom_length).ok_or_else(|| not_found("unit of measure", uom_length))?;
        self.set_linear_units(&length_name, in_meters)?;
        self.set_authority("GEOCCS|UNIT", "EPSG", uom_length)?;

        {
            let root = self
                .root_mut()
                .ok_or_else(|| SrsError::Failure("GEOCCS root vanished".to_string()))?;
            for (name, orientation) in [
                ("Geocentric X", AxisOrientation::Other),
                ("Geocentric Y", AxisOrientation::Other),
                ("Geocentric Z", AxisOrientation::North),
            ] {
                root.add_child(SrsNode::with_leaves("AXIS", &[name, orientation.as_wkt()]));
            }
        }

        self.set_authority("DATUM", "EPSG", datum_code)?;
        self.set_authority("SPHEROID", "EPSG", ellipsoid_code)?;
        self.set_authority("PRIMEM", "EPSG", pm_code)?;
        self.set_authority("GEOCCS", "EPSG", code)
    }

    /// Initialize from an EPSG code without EPSG axis order
    ///
    /// Axes are stripped from the geographic part, and from a projected
    /// system whose EPSG order is northing/easting.
    pub fn import_from_epsg(&mut self, ctx: &SrsContext, code: i32) -> SrsResult<()> {
        self.import_from_epsga(ctx, code)?;

        if let Some(geogcs) = self.get_attr_node_mut("GEOGCS") {
            geogcs.strip_nodes("AXIS");
        }

        if self.get_attr_node("PROJCS").is_some() && self.epsg_treats_as_northing_easting() {
            if let Some(projcs) = self.get_attr_node_mut("PROJCS") {
                projcs.strip_nodes("AXIS");
            }
        }

        Ok(())
    }

    /// Initialize from an EPSG code, keeping the EPSG axis order
    pub fn import_from_epsga(&mut self, ctx: &SrsContext, code: i32) -> SrsResult<()> {
        self.import_from_epsga_internal(ctx, code, None)
    }

    /// EPSG import, optionally restricted to `GEOGCS` or `PROJCS`
    ///
    /// # Arguments
    /// * `ctx` - Collaborators holding the dictionary
    /// * `code` - EPSG code; 4979 reads as 4326
    /// * `srs_type` - Kind to try first, failing without fallthrough
    ///
    /// # Returns
    /// `UnsupportedSrs` if no table, the WKT dictionary nor the native
    /// projection library knows the code. The model is empty on failure.
    pub(crate) fn import_from_epsga_internal(&mut self, ctx: &SrsContext, code: i32, srs_type: Option<&str>) -> SrsResult<()> {
        let result = self.resolve_epsg(ctx, code, srs_type);
        if result.is_err() {
            self.clear();
        }
        result
    }

    fn resolve_epsg(&mut self, ctx: &SrsContext, code_in: i32, srs_type: Option<&str>) -> SrsResult<()> {
        let code = if code_in == 4979 { 4326 } else { code_in };
        let dictionary = ctx.dictionary.as_ref();

        self.clear();

        if !dictionary.is_available() {
            error!(
                "Unable to open EPSG support tables. Provide a dictionary containing the gcs table."
            );
            return Err(SrsError::Failure("EPSG support tables are not available".to_string()));
        }

        let forced = srs_type.filter(|kind| kind.eq_ignore_ascii_case("GEOGCS") || kind.eq_ignore_ascii_case("PROJCS"));
        let mut result = match forced {
            Some(kind) if kind.eq_ignore_ascii_case("PROJCS") => self.set_epsg_proj_cs(dictionary, code),
            _ => self.set_epsg_geog_cs(dictionary, code),
        };
        if forced.is_some() && result.is_err() {
            return result;
        }

        let fallbacks: [fn(&mut SpatialReference, &dyn Dictionary, i32) -> SrsResult<()>; 4] = [
            SpatialReference::set_epsg_proj_cs,
            SpatialReference::set_epsg_vert_cs,
            SpatialReference::set_epsg_compd_cs,
            SpatialReference::set_epsg_geoc_cs,
        ];
        for fallback in fallbacks {
            if !matches!(&result, Err(e) if e.is_unsupported_srs()) {
                break;
            }
            self.clear();
            result = fallback(self, dictionary, code);
        }

        if matches!(&result, Err(e) if e.is_unsupported_srs()) {
            self.clear();
            result = self.import_from_dict(ctx, tables::EPSG_WKT_FILE, &code.to_string());
        }

        if matches!(&result, Err(e) if e.is_unsupported_srs()) {
            if let Some(native) = ctx.native.as_ref() {
                if let Some(normalized) = native.normalize(&format!("+init=epsg:{}", code)) {
                    if normalized.contains("proj=") {
                        self.clear();
                        result = self.import_from_proj4(ctx, &normalized);
                    }
                }
            }
        }

        if let Err(e) = result {
            if e.is_unsupported_srs() {
                error!(
                    "EPSG PCS/GCS code {} not found in EPSG support files. Is this a valid EPSG coordinate system?",
                    code
                );
            }
            return Err(e);
        }

        let authority_key = if self.is_projected() { "PROJCS" } else { "GEOGCS" };
        if self.get_authority_name(Some(authority_key)).is_none() || code != code_in {
            if self.is_projected() {
                self.set_authority("PROJCS", "EPSG", code_in)?;
            } else if self.is_geographic() {
                self.set_authority("GEOGCS", "EPSG", code_in)?;
            }
        }

        self.fixup_ordering();
        Ok(())
    }

    /// Initialize from the supplementary WKT dictionary
    ///
    /// # Returns
    /// `UnsupportedSrs` when `file` has no entry for `code`
    pub fn import_from_dict(&mut self, ctx: &SrsContext, file: &str, code: &str) -> SrsResult<()> {
        let wkt = ctx
            .dictionary
            .lookup_wkt(file, code)
            .ok_or_else(|| SrsError::UnsupportedSrs(format!("No entry {} in {}", code, file)))?;

        self.import_from_wkt(&wkt)
    }

    /// Set a US State Plane zone
    ///
    /// # Arguments
    /// * `ctx` - Collaborators holding the dictionary
    /// * `zone` - State plane zone number
    /// * `nad83` - NAD83 zone when true, NAD27 otherwise
    /// * `override_units` - Linear unit name and meters per unit replacing
    ///   the zone's own units
    ///
    /// # Returns
    /// `Failure` when the zone is unknown, after building a minimal local
    /// system so the caller still has a usable definition
    pub fn set_state_plane(
        &mut self,
        ctx: &SrsContext,
        zone: i32,
        nad83: bool,
        override_units: Option<(&str, f64)>,
    ) -> SrsResult<()> {
        if !nad83 && zone > i32::MAX - 10000 {
            return Err(SrsError::Failure(format!("State plane zone {} out of range", zone)));
        }

        let adjusted_id = if nad83 { zone } else { zone + 10000 };
        let pcs_code = ctx
            .dictionary
            .find(tables::STATEPLANE, "ID", &adjusted_id.to_string())
            .map_or(0, |record| code_field(&record, "EPSG_PCS_CODE"));

        if pcs_code < 1 {
            warn!(
                "Unable to find state plane zone in stateplane, likely because the EPSG dictionary is incomplete. \
                 Using incomplete definition of state plane zone."
            );

            self.clear();
            if nad83 {
                self.set_local_cs(&format!("State Plane Zone {} / NAD83", zone))?;
                self.set_linear_units(units::METER, 1.0)?;
            } else {
                self.set_local_cs(&format!("State Plane Zone {} / NAD27", zone))?;
                self.set_linear_units(units::US_FOOT, units::US_FOOT_CONV)?;
            }

            return Err(SrsError::Failure(format!("State plane zone {} not found", zone)));
        }

        self.import_from_epsg(ctx, pcs_code)?;

        if let Some((unit_name, unit_factor)) = override_units {
            if unit_factor != 0.0 && (unit_factor - self.get_linear_units().1).abs() > 0.0000000001 {
                let false_easting = self.get_norm_proj_parm(params::FALSE_EASTING, 0.0);
                let false_northing = self.get_norm_proj_parm(params::FALSE_NORTHING, 0.0);

                self.set_linear_units(unit_name, unit_factor)?;

                self.set_norm_proj_parm(params::FALSE_EASTING, false_easting)?;
                self.set_norm_proj_parm(params::FALSE_NORTHING, false_northing)?;

                if let Some(projcs) = self.get_attr_node_mut("PROJCS") {
                    if let Some(index) = projcs.find_child("AUTHORITY") {
                        projcs.destroy_child(index);
                    }
                }
            }
        }

        Ok(())
    }
}
