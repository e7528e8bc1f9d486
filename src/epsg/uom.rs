//! EPSG unit-of-measure helpers
//!
//! Unit codes, angle strings and datum names as stored in the EPSG
//! dictionary are turned into the names and factors the model expects.

use std::f64::consts::PI;

use log::debug;

use crate::epsg::dictionary::Dictionary;
use crate::epsg::tables;
use crate::utils::number_format::{atof, atoi};

/// Angular unit codes that are plain degrees
const DEGREE_CODES: [i32; 5] = [9102, 9107, 9108, 9110, 9122];

/// Datum names that EPSG and the WKT convention spell differently
const DATUM_EQUIVALENCES: [(&str, &str); 5] = [
    ("Militar_Geographische_Institut", "Militar_Geographische_Institute"),
    ("World_Geodetic_System_1984", "WGS_1984"),
    ("WGS_72_Transit_Broadcast_Ephemeris", "WGS_1972_Transit_Broadcast_Ephemeris"),
    ("World_Geodetic_System_1972", "WGS_1972"),
    ("European_Terrestrial_Reference_System_89", "European_Reference_System_1989"),
];

/// Convert an EPSG angle string to decimal degrees
///
/// # Arguments
/// * `text` - Value as stored in the dictionary
/// * `uom` - EPSG unit of measure code of the value
///
/// # Returns
/// The angle in degrees. Code 9110 is packed sexagesimal `DDD.MMSSsss`.
pub fn angle_string_to_degrees(text: &str, uom: i32) -> f64 {
    match uom {
        9110 => sexagesimal_to_degrees(text),
        9105 | 9106 => 180.0 * (atof(text) / 200.0),
        9101 => 180.0 * (atof(text) / PI),
        9103 => atof(text) / 60.0,
        9104 => atof(text) / 3600.0,
        _ => atof(text),
    }
}

fn sexagesimal_to_degrees(text: &str) -> f64 {
    let mut angle = f64::from(atoi(text).abs());

    if let Some(dot) = text.find('.') {
        let digits: Vec<char> = text[dot + 1..].chars().collect();
        let padded = |index: usize| match digits.get(index) {
            Some(c) if c.is_ascii_digit() => *c,
            _ => '0',
        };

        if !digits.is_empty() {
            let minutes: String = [digits[0], padded(1)].iter().collect();
            angle += f64::from(atoi(&minutes)) / 60.0;
        }

        if digits.len() > 2 {
            let mut seconds: String = [digits[2], padded(3)].iter().collect();
            if digits.get(3).map_or(false, char::is_ascii_digit) {
                seconds.push('.');
                seconds.extend(digits.iter().skip(4));
            }
            angle += atof(&seconds) / 3600.0;
        }
    }

    if text.starts_with('-') {
        -angle
    } else {
        angle
    }
}

/// Name and size in degrees of an EPSG angular unit
///
/// Degree-like codes short-circuit without touching the dictionary.
pub fn uom_angle_info(dictionary: &dyn Dictionary, code: i32) -> Option<(String, f64)> {
    if code <= 0 {
        return None;
    }

    if DEGREE_CODES.contains(&code) {
        return Some(("degree".to_string(), 1.0));
    }

    if let Some(record) = dictionary.find(tables::UNIT_OF_MEASURE, "UOM_CODE", &code.to_string()) {
        let name = record.field_or_empty("UNIT_OF_MEAS_NAME").to_string();
        let factor_b = atof(record.field_or_empty("FACTOR_B"));
        let factor_c = atof(record.field_or_empty("FACTOR_C"));

        let mut in_degrees = 0.0;
        if factor_c != 0.0 {
            in_degrees = (factor_b / factor_c) * (180.0 / PI);
        }

        // Grads are stored with a rounded radian factor
        if code == 9105 {
            in_degrees = 180.0 / 200.0;
        }

        return Some((name, in_degrees));
    }

    let (name, in_degrees) = match code {
        9101 => ("radian", 180.0 / PI),
        9103 => ("arc-minute", 1.0 / 60.0),
        9104 => ("arc-second", 1.0 / 3600.0),
        9105 => ("grad", 180.0 / 200.0),
        9106 => ("gon", 180.0 / 200.0),
        9109 => ("microradian", 180.0 / (PI * 1_000_000.0)),
        _ => return None,
    };
    Some((name.to_string(), in_degrees))
}

/// Name and size in meters of an EPSG linear unit
pub fn uom_length_info(dictionary: &dyn Dictionary, code: i32) -> Option<(String, f64)> {
    if code == 9001 {
        return Some(("metre".to_string(), 1.0));
    }

    match dictionary.find(tables::UNIT_OF_MEASURE, "UOM_CODE", &code.to_string()) {
        Some(record) => {
            let factor_b = atof(record.field_or_empty("FACTOR_B"));
            let factor_c = atof(record.field_or_empty("FACTOR_C"));
            let in_meters = if factor_c > 0.0 { factor_b / factor_c } else { 0.0 };
            Some((record.field_or_empty("UNIT_OF_MEAS_NAME").to_string(), in_meters))
        }
        None => match code {
            9002 => Some(("foot".to_string(), 0.3048)),
            9003 => Some(("US survey foot".to_string(), 12.0 / 39.37)),
            _ => {
                debug!("No unit of measure record for code {}", code);
                None
            }
        },
    }
}

/// Rewrite an EPSG datum name into the underscore form used in WKT
///
/// Runs of characters other than letters, digits and `+` collapse to a
/// single underscore, a trailing underscore is dropped, and a handful of
/// names are replaced by their conventional spelling.
pub fn massage_datum_name(name: &str) -> String {
    let mut massaged = String::with_capacity(name.len());

    for c in name.chars() {
        let c = if c.is_ascii_alphanumeric() || c == '+' { c } else { '_' };
        if c == '_' && massaged.ends_with('_') {
            continue;
        }
        massaged.push(c);
    }

    if massaged.ends_with('_') {
        massaged.pop();
    }

    for (epsg_name, wkt_name) in DATUM_EQUIVALENCES.iter() {
        if massaged.eq_ignore_ascii_case(epsg_name) {
            return wkt_name.to_string();
        }
    }

    massaged
}
