//! Unit bookkeeping for projection parameters
//!
//! Parameters are stored in the units of the definition (the `GEOGCS`
//! angular unit and the projected linear unit). The helpers here convert
//! between those raw values and degrees/meters.

use std::sync::PoisonError;

use crate::node::SrsNode;
use crate::srs::constants::units;
use crate::srs::errors::{SrsError, SrsResult};
use crate::srs::model::SpatialReference;
use crate::utils::number_format::{atof, print_double, print_node_value};

/// Normalization factors derived from a definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormInfo {
    /// Degrees per angular unit
    pub to_degrees: f64,
    /// Meters per linear unit
    pub to_meter: f64,
    /// Prime meridian offset from Greenwich
    pub from_greenwich: f64,
}

/// Whether a parameter holds an angle
pub fn is_angular_parameter(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower.starts_with("long")
        || lower.starts_with("lati")
        || lower == "central_meridian"
        || lower.starts_with("standard_parallel")
        || lower == "azimuth"
        || lower == "rectified_grid_angle"
}

/// Whether a parameter holds a longitude
pub fn is_longitude_parameter(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower.starts_with("long") || lower == "central_meridian"
}

/// Whether a parameter holds a length
pub fn is_linear_parameter(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower.starts_with("false_") || lower == "satellite_height"
}

impl SpatialReference {
    /// Normalization factors, computed on first use after a mutation
    pub fn norm_info(&self) -> NormInfo {
        let mut cache = self.norm_cache().lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(info) = *cache {
            return info;
        }

        let mut to_degrees = self.get_angular_units().1 / units::DEGREE_CONV;
        if (to_degrees - 1.0).abs() < 0.000000001 {
            to_degrees = 1.0;
        }

        let info = NormInfo {
            to_degrees,
            to_meter: self.get_linear_units().1,
            from_greenwich: self.get_prime_meridian().1,
        };
        *cache = Some(info);
        info
    }

    /// Angular unit of the geographic part
    ///
    /// # Returns
    /// Unit name and radians per unit; degrees when there is no `GEOGCS`
    pub fn get_angular_units(&self) -> (&str, f64) {
        let geog = match self.get_attr_node("GEOGCS") {
            Some(geog) => geog,
            None => return (units::DEGREE, units::DEGREE_CONV),
        };

        geog.children()
            .iter()
            .find(|child| child.value_is("UNIT") && child.child_count() >= 2)
            .map(|unit| (unit.child_value(0).unwrap_or(units::DEGREE), atof(unit.child_value(1).unwrap_or(""))))
            .unwrap_or((units::DEGREE, 1.0))
    }

    /// Set the angular unit of the geographic part
    ///
    /// # Arguments
    /// * `name` - Unit name
    /// * `in_radians` - Radians per unit
    pub fn set_angular_units(&mut self, name: &str, in_radians: f64) -> SrsResult<()> {
        let geog = self
            .get_attr_node_mut("GEOGCS")
            .ok_or_else(|| SrsError::Failure("No GEOGCS node for angular units".to_string()))?;

        set_unit_child(geog, name, &print_double(in_radians), false)
    }

    /// Linear unit of the projected, local, geocentric or vertical system
    pub fn get_linear_units(&self) -> (&str, f64) {
        self.get_target_linear_units(None)
    }

    /// Linear unit of the node found by `target`
    ///
    /// # Arguments
    /// * `target` - Search path; `None` picks `PROJCS`, `LOCAL_CS`, `GEOCCS`
    ///   or `VERT_CS`, in that order
    ///
    /// # Returns
    /// Unit name and meters per unit; `("unknown", 1.0)` without a unit
    pub fn get_target_linear_units(&self, target: Option<&str>) -> (&str, f64) {
        let node = match self.linear_units_path(target).and_then(|path| self.root()?.node_at_path(&path)) {
            Some(node) => node,
            None => return ("unknown", 1.0),
        };

        node.children()
            .iter()
            .find(|child| child.value_is("UNIT") && child.child_count() >= 2)
            .map(|unit| (unit.child_value(0).unwrap_or("unknown"), atof(unit.child_value(1).unwrap_or(""))))
            .unwrap_or(("unknown", 1.0))
    }

    fn linear_units_path(&self, target: Option<&str>) -> Option<Vec<usize>> {
        match target {
            Some(target) => self.attr_path(target),
            None => self
                .attr_path("PROJCS")
                .or_else(|| self.attr_path("LOCAL_CS"))
                .or_else(|| self.attr_path("GEOCCS"))
                .or_else(|| if self.is_vertical() { self.attr_path("VERT_CS") } else { None }),
        }
    }

    /// Set the linear unit of the default target node
    pub fn set_linear_units(&mut self, name: &str, in_meters: f64) -> SrsResult<()> {
        self.set_target_linear_units(None, name, in_meters)
    }

    /// Set the linear unit of the node found by `target`
    ///
    /// An existing unit is renamed in place and loses its authority.
    ///
    /// # Arguments
    /// * `target` - Search path, or `None` for the default target
    /// * `name` - Unit name
    /// * `in_meters` - Meters per unit
    pub fn set_target_linear_units(&mut self, target: Option<&str>, name: &str, in_meters: f64) -> SrsResult<()> {
        let path = self
            .linear_units_path(target)
            .ok_or_else(|| SrsError::Failure(format!("No {} node for linear units", target.unwrap_or("target"))))?;

        let node = self
            .root_mut()
            .and_then(|root| root.node_at_path_mut(&path))
            .ok_or_else(|| SrsError::Failure("Linear units target vanished".to_string()))?;

        set_unit_child(node, name, &print_node_value(in_meters), true)
    }

    /// Change the linear unit and rescale linear parameters to match
    pub fn set_linear_units_and_update_parameters(&mut self, name: &str, in_meters: f64) -> SrsResult<()> {
        if in_meters == 0.0 {
            return Err(SrsError::Failure("Linear unit factor cannot be zero".to_string()));
        }

        let old_in_meters = self.get_linear_units().1;
        if in_meters == old_in_meters || self.get_attr_node("PROJCS").is_none() {
            return self.set_linear_units(name, in_meters);
        }

        let linear_params: Vec<String> = self
            .get_attr_node("PROJCS")
            .map(|projcs| {
                projcs
                    .children()
                    .iter()
                    .filter(|child| child.value_is("PARAMETER") && child.child_count() > 1)
                    .filter_map(|child| child.child_value(0))
                    .filter(|name| is_linear_parameter(name))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        for param in linear_params {
            let old_value = self.get_proj_parm(&param, 0.0);
            self.set_proj_parm(&param, old_value * old_in_meters / in_meters)?;
        }

        self.set_linear_units(name, in_meters)
    }

    /// Prime meridian name and offset, Greenwich when unset or zero
    pub fn get_prime_meridian(&self) -> (&str, f64) {
        if let Some(primem) = self.get_attr_node("PRIMEM") {
            if primem.child_count() >= 2 {
                let offset = atof(primem.child_value(1).unwrap_or(""));
                if offset != 0.0 {
                    return (primem.child_value(0).unwrap_or(""), offset);
                }
            }
        }
        (crate::srs::constants::PM_GREENWICH, 0.0)
    }

    /// A projection parameter converted to degrees or meters
    ///
    /// # Returns
    /// The normalized value, or `None` when the parameter is absent
    pub fn norm_proj_parm(&self, name: &str) -> Option<f64> {
        let info = self.norm_info();
        let mut value = self.proj_parm(name)?;

        if info.to_degrees != 1.0 && is_angular_parameter(name) {
            value *= info.to_degrees;
        }
        if info.to_meter != 1.0 && is_linear_parameter(name) {
            return Some(value * info.to_meter);
        }
        Some(value)
    }

    /// `norm_proj_parm` with a default returned unadjusted when absent
    pub fn get_norm_proj_parm(&self, name: &str, default: f64) -> f64 {
        self.norm_proj_parm(name).unwrap_or(default)
    }

    /// Store a projection parameter given in degrees or meters
    ///
    /// # Arguments
    /// * `name` - Parameter name
    /// * `value` - Value in degrees (angular) or meters (linear)
    pub fn set_norm_proj_parm(&mut self, name: &str, value: f64) -> SrsResult<()> {
        let info = self.norm_info();
        let mut raw = value;

        if (info.to_degrees != 1.0 || info.from_greenwich != 0.0) && is_angular_parameter(name) {
            raw /= info.to_degrees;
        } else if info.to_meter != 1.0 && is_linear_parameter(name) {
            raw /= info.to_meter;
        }

        self.set_proj_parm(name, raw)
    }
}

fn set_unit_child(node: &mut SrsNode, name: &str, value: &str, drop_authority: bool) -> SrsResult<()> {
    match node.find_child("UNIT") {
        Some(index) => {
            let unit = node
                .child_mut(index)
                .ok_or_else(|| SrsError::Failure("UNIT node vanished".to_string()))?;
            if unit.child_count() < 2 {
                return Err(SrsError::Failure("UNIT node has too few children".to_string()));
            }
            if let Some(unit_name) = unit.child_mut(0) {
                unit_name.set_value(name);
            }
            if let Some(unit_value) = unit.child_mut(1) {
                unit_value.set_value(value);
            }
            if drop_authority {
                if let Some(authority) = unit.find_child("AUTHORITY") {
                    unit.destroy_child(authority);
                }
            }
        }
        None => node.add_child(SrsNode::with_leaves("UNIT", &[name, value])),
    }
    Ok(())
}
