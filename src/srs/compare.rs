//! Equivalence tests between two definitions

use crate::srs::constants::units;
use crate::srs::model::SpatialReference;
use crate::utils::number_format::atof;

/// Relative tolerance for projection parameters
const PARAMETER_TOLERANCE: f64 = 1e-8;

fn towgs84_or_zero(srs: &SpatialReference) -> [f64; 7] {
    srs.get_towgs84().unwrap_or([0.0; 7])
}

fn parameters_match(a: f64, b: f64) -> bool {
    (a - b).abs() <= PARAMETER_TOLERANCE * a.abs().max(1.0)
}

impl SpatialReference {
    /// Whether the geographic parts describe the same system
    ///
    /// A datum name or spheroid value missing on either side is treated as
    /// compatible. Missing Bursa-Wolf parameters count as zeros.
    pub fn is_same_geog_cs(&self, other: &SpatialReference) -> bool {
        if let (Some(this_datum), Some(other_datum)) =
            (self.get_attr_value("DATUM", 0), other.get_attr_value("DATUM", 0))
        {
            if !this_datum.eq_ignore_ascii_case(other_datum) {
                return false;
            }
        }

        let this_towgs84 = towgs84_or_zero(self);
        let other_towgs84 = towgs84_or_zero(other);
        if this_towgs84
            .iter()
            .zip(other_towgs84.iter())
            .any(|(a, b)| (a - b).abs() > 0.00001)
        {
            return false;
        }

        let this_pm = atof(self.get_attr_value("PRIMEM", 1).unwrap_or("0.0"));
        let other_pm = atof(other.get_attr_value("PRIMEM", 1).unwrap_or("0.0"));
        if this_pm != other_pm {
            return false;
        }

        let this_unit = atof(self.get_attr_value("GEOGCS|UNIT", 1).unwrap_or(units::DEGREE_CONV_TEXT));
        let other_unit = atof(other.get_attr_value("GEOGCS|UNIT", 1).unwrap_or(units::DEGREE_CONV_TEXT));
        if (this_unit - other_unit).abs() > 0.00000001 {
            return false;
        }

        if let (Some(a), Some(b)) = (self.get_attr_value("SPHEROID", 1), other.get_attr_value("SPHEROID", 1)) {
            if (atof(a) - atof(b)).abs() > 0.01 {
                return false;
            }
        }

        if let (Some(a), Some(b)) = (self.get_attr_value("SPHEROID", 2), other.get_attr_value("SPHEROID", 2)) {
            if (atof(a) - atof(b)).abs() > 0.0001 {
                return false;
            }
        }

        true
    }

    /// Whether the vertical parts describe the same system
    ///
    /// Both sides need a vertical datum.
    pub fn is_same_vert_cs(&self, other: &SpatialReference) -> bool {
        match (self.get_attr_value("VERT_DATUM", 0), other.get_attr_value("VERT_DATUM", 0)) {
            (Some(a), Some(b)) if a.eq_ignore_ascii_case(b) => {}
            _ => return false,
        }

        let this_unit = atof(self.get_attr_value("VERT_CS|UNIT", 1).unwrap_or("1.0"));
        let other_unit = atof(other.get_attr_value("VERT_CS|UNIT", 1).unwrap_or("1.0"));
        (this_unit - other_unit).abs() <= 0.00000001
    }

    /// Whether two definitions describe the same coordinate system
    ///
    /// Two undefined models are the same. Names other than the datum's
    /// are ignored.
    pub fn is_same(&self, other: &SpatialReference) -> bool {
        let (this_root, other_root) = match (self.root(), other.root()) {
            (None, None) => return true,
            (Some(a), Some(b)) => (a, b),
            _ => return false,
        };

        if !self.is_same_geog_cs(other) {
            return false;
        }

        if !this_root.value_is(other_root.value()) {
            return false;
        }

        if self.is_projected() {
            match (self.get_attr_value("PROJECTION", 0), other.get_attr_value("PROJECTION", 0)) {
                (Some(a), Some(b)) if a.eq_ignore_ascii_case(b) => {}
                _ => return false,
            }

            if let Some(projcs) = self.get_attr_node("PROJCS") {
                let parameters_differ = projcs
                    .children()
                    .iter()
                    .filter(|child| child.value_is("PARAMETER") && child.child_count() == 2)
                    .filter_map(|child| child.child_value(0))
                    .any(|name| !parameters_match(self.get_proj_parm(name, 0.0), other.get_proj_parm(name, 0.0)));
                if parameters_differ {
                    return false;
                }
            }
        }

        if self.is_local() || self.is_projected() {
            let this_units = self.get_linear_units().1;
            if this_units != 0.0 {
                let ratio = other.get_linear_units().1 / this_units;
                if !(0.9999999999..=1.000000001).contains(&ratio) {
                    return false;
                }
            }
        }

        if self.is_vertical() && !self.is_same_vert_cs(other) {
            return false;
        }

        true
    }
}
