//! EPSG identification of hand-built definitions

use crate::srs::constants::{params, projections};
use crate::srs::errors::{SrsError, SrsResult};
use crate::srs::model::SpatialReference;
use crate::utils::number_format::atoi;

/// Whether either name contains one of `needles`
fn mentions(names: [&str; 2], needles: &[&str]) -> bool {
    names.iter().any(|name| needles.iter().any(|needle| name.contains(needle)))
}

impl SpatialReference {
    /// EPSG code of the geographic part, guessed from names if needed
    ///
    /// # Returns
    /// The code, or -1 when it cannot be determined
    pub fn get_epsg_geog_cs(&self) -> i32 {
        if self
            .get_authority_name(Some("GEOGCS"))
            .map_or(false, |name| name.eq_ignore_ascii_case("EPSG"))
        {
            if let Some(code) = self.get_authority_code(Some("GEOGCS")) {
                return atoi(code);
            }
        }

        let (geogcs, datum) = match (self.get_attr_value("GEOGCS", 0), self.get_attr_value("DATUM", 0)) {
            (Some(geogcs), Some(datum)) => (geogcs, datum),
            _ => return -1,
        };

        let names = [geogcs, datum];
        let is_wgs = mentions(names, &["WGS", "World Geodetic System", "World_Geodetic_System"]);
        let is_nad = mentions(names, &["NAD", "North American", "North_American"]);

        let named = |year: &str| mentions(names, &[year]);

        if is_wgs && named("84") {
            return 4326;
        }
        if is_wgs && named("72") {
            return 4322;
        }
        if is_nad && named("83") {
            return 4269;
        }
        if is_nad && named("27") {
            return 4267;
        }

        // Derive from an EPSG datum code on Greenwich
        if self
            .get_authority_name(Some("GEOGCS|DATUM"))
            .map_or(false, |name| name.eq_ignore_ascii_case("EPSG"))
            && self.get_prime_meridian().1 == 0.0
        {
            if let Some(datum_code) = self.get_authority_code(Some("GEOGCS|DATUM")).map(atoi) {
                if (6000..=6999).contains(&datum_code) {
                    return datum_code - 2000;
                }
            }
        }

        -1
    }

    /// Add EPSG authorities to parts that can be recognised
    ///
    /// Covers the common geographic systems, UTM zones on WGS84, WGS72,
    /// NAD27 and NAD83, and the WGS84 Arctic and Antarctic polar
    /// stereographic systems.
    ///
    /// # Returns
    /// `UnsupportedSrs` when the top-level system ends up without a code
    pub fn auto_identify_epsg(&mut self) -> SrsResult<()> {
        if (self.is_projected() || self.is_geographic()) && self.get_authority_code(Some("GEOGCS")).is_none() {
            let gcs = self.get_epsg_geog_cs();
            if gcs != -1 {
                self.set_authority("GEOGCS", "EPSG", gcs)?;
            }
        }

        if self.is_projected() && self.get_authority_code(Some("PROJCS")).is_none() {
            if let Some(pcs) = self.guess_projected_code() {
                self.set_authority("PROJCS", "EPSG", pcs)?;
            }
        }

        let identified = if self.is_projected() {
            self.get_authority_code(Some("PROJCS")).is_some()
        } else if self.is_geographic() {
            self.get_authority_code(Some("GEOGCS")).is_some()
        } else {
            false
        };

        if identified {
            Ok(())
        } else {
            Err(SrsError::UnsupportedSrs("No EPSG code could be identified".to_string()))
        }
    }

    fn guess_projected_code(&self) -> Option<i32> {
        let geog_code = if self
            .get_authority_name(Some("PROJCS|GEOGCS"))
            .map_or(false, |name| name.eq_ignore_ascii_case("EPSG"))
        {
            self.get_authority_code(Some("PROJCS|GEOGCS")).map(atoi)
        } else {
            None
        };

        if let Some((zone, north)) = self.get_utm_zone() {
            return match (geog_code, north) {
                (Some(4326), true) => Some(32600 + zone),
                (Some(4326), false) => Some(32700 + zone),
                (Some(4267), true) if (3..=22).contains(&zone) => Some(26700 + zone),
                (Some(4269), true) if (3..=23).contains(&zone) => Some(26900 + zone),
                (Some(4322), true) => Some(32200 + zone),
                (Some(4322), false) => Some(32300 + zone),
                _ => None,
            };
        }

        let is_polar_stereographic = self
            .get_attr_value("PROJECTION", 0)
            .map_or(false, |projection| projection.eq_ignore_ascii_case(projections::POLAR_STEREOGRAPHIC));

        if is_polar_stereographic && geog_code == Some(4326) {
            let close = |value: f64, expected: f64| (value - expected).abs() < 1e-15;
            let latitude = self.get_norm_proj_parm(params::LATITUDE_OF_ORIGIN, 0.0);

            if close(latitude.abs(), 71.0)
                && close(self.get_norm_proj_parm(params::CENTRAL_MERIDIAN, 0.0), 0.0)
                && close(self.get_proj_parm(params::SCALE_FACTOR, 1.0), 1.0)
                && close(self.get_norm_proj_parm(params::FALSE_EASTING, 1.0), 0.0)
                && close(self.get_norm_proj_parm(params::FALSE_NORTHING, 1.0), 0.0)
                && close(self.get_linear_units().1, 1.0)
            {
                return Some(if latitude > 0.0 { 3995 } else { 3031 });
            }
        }

        None
    }

    /// Whether EPSG defines this geographic system with latitude first
    pub fn epsg_treats_as_lat_long(&self) -> bool {
        if !self.is_geographic() {
            return false;
        }

        self.first_axis_points_north("GEOGCS")
    }

    /// Whether EPSG defines this projected system with northing first
    pub fn epsg_treats_as_northing_easting(&self) -> bool {
        if !self.is_projected() {
            return false;
        }

        self.first_axis_points_north("PROJCS")
    }

    fn first_axis_points_north(&self, key: &str) -> bool {
        if !self
            .get_authority_name(Some(key))
            .map_or(false, |name| name.eq_ignore_ascii_case("EPSG"))
        {
            return false;
        }

        self.get_attr_node(key)
            .and_then(|node| node.children().iter().find(|child| child.value_is("AXIS")))
            .and_then(|axis| axis.child_value(1))
            .map_or(false, |orientation| orientation.eq_ignore_ascii_case("NORTH"))
    }
}
