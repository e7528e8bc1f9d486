//! Builders for coordinate system subtrees
//!
//! Each builder assembles or amends part of the tree. A bare `GEOGCS` root
//! is promoted into the geographic base of a new `PROJCS` or `GEOCCS`;
//! other incompatible roots make the builder fail.

use log::debug;

use crate::node::SrsNode;
use crate::srs::constants::{self, units, wkt};
use crate::srs::errors::{SrsError, SrsResult};
use crate::srs::model::SpatialReference;
use crate::utils::number_format::{atof, print_double};

impl SpatialReference {
    /// Set the geographic coordinate system
    ///
    /// Replaces an existing geographic root, or the `GEOGCS` of a projected
    /// system. On a geocentric system only the datum and prime meridian
    /// are taken over.
    ///
    /// # Arguments
    /// * `geog_name` - Name of the system, "unnamed" when `None`
    /// * `datum_name` - Datum name, "unknown" when `None`
    /// * `spheroid_name` - Ellipsoid name, "unnamed" when `None`
    /// * `semi_major` - Semi-major axis in meters
    /// * `inv_flattening` - Inverse flattening, zero for a sphere
    /// * `pm_name` - Prime meridian name, Greenwich when `None`
    /// * `pm_offset` - Prime meridian offset in the angular unit
    /// * `angular_units` - Unit name and radians per unit, degrees when `None`
    #[allow(clippy::too_many_arguments)]
    pub fn set_geog_cs(
        &mut self,
        geog_name: Option<&str>,
        datum_name: Option<&str>,
        spheroid_name: Option<&str>,
        semi_major: f64,
        inv_flattening: f64,
        pm_name: Option<&str>,
        pm_offset: f64,
        angular_units: Option<(&str, f64)>,
    ) -> SrsResult<()> {
        self.invalidate_norm_info();

        if self.is_geocentric() {
            let mut geog = SpatialReference::new();
            geog.set_geog_cs(
                geog_name,
                datum_name,
                spheroid_name,
                semi_major,
                inv_flattening,
                pm_name,
                pm_offset,
                angular_units,
            )?;
            return self.copy_geog_cs_from(&geog);
        }

        self.remove_geog_cs()?;

        let (unit_name, unit_radians) = angular_units.unwrap_or((units::DEGREE, units::DEGREE_CONV));

        let mut spheroid = SrsNode::new("SPHEROID");
        spheroid.add_child(SrsNode::new(spheroid_name.unwrap_or("unnamed")));
        spheroid.add_child(SrsNode::new(&print_double(semi_major)));
        spheroid.add_child(SrsNode::new(&print_double(inv_flattening)));

        let mut datum = SrsNode::new("DATUM");
        datum.add_child(SrsNode::new(datum_name.unwrap_or("unknown")));
        datum.add_child(spheroid);

        let pm_value = if pm_offset == 0.0 { "0".to_string() } else { print_double(pm_offset) };
        let primem = SrsNode::with_leaves("PRIMEM", &[pm_name.unwrap_or(constants::PM_GREENWICH), &pm_value]);

        let unit = SrsNode::with_leaves("UNIT", &[unit_name, &print_double(unit_radians)]);

        let mut geog = SrsNode::new("GEOGCS");
        geog.add_child(SrsNode::new(geog_name.unwrap_or("unnamed")));
        geog.add_child(datum);
        geog.add_child(primem);
        geog.add_child(unit);

        self.attach_geog_cs(geog);
        Ok(())
    }

    /// Drop the current geographic part so a new one can be attached
    fn remove_geog_cs(&mut self) -> SrsResult<()> {
        if self.get_attr_node("GEOGCS").is_none() {
            return Ok(());
        }

        if self.root().map_or(false, |root| root.value_is("GEOGCS")) {
            self.clear();
            return Ok(());
        }

        let projcs = self
            .get_attr_node_mut("PROJCS")
            .ok_or_else(|| SrsError::Failure("GEOGCS found outside a PROJCS".to_string()))?;
        match projcs.find_child("GEOGCS") {
            Some(index) => {
                projcs.destroy_child(index);
                Ok(())
            }
            None => Err(SrsError::Failure("GEOGCS found outside a PROJCS".to_string())),
        }
    }

    /// Insert a `GEOGCS` under a `PROJCS` root, or make it the root
    fn attach_geog_cs(&mut self, geog: SrsNode) {
        match self.root_mut() {
            Some(root) if root.value_is("PROJCS") => root.insert_child(geog, 1),
            _ => self.set_root(Some(geog)),
        }
    }

    /// Set a well-known geographic system by name
    ///
    /// Accepts `WGS84`, `WGS72`, `NAD27`, `NAD83` and the `CRS84`/`CRS:84`
    /// style aliases. EPSG codes go through the resolver.
    pub fn set_well_known_geog_cs(&mut self, name: &str) -> SrsResult<()> {
        let definition = match name.to_ascii_uppercase().as_str() {
            "WGS84" | "CRS84" | "CRS:84" => wkt::WGS84,
            "WGS72" => wkt::WGS72,
            "NAD27" | "CRS27" | "CRS:27" => wkt::NAD27,
            "NAD83" | "CRS83" | "CRS:83" => wkt::NAD83,
            _ => {
                return Err(SrsError::Failure(format!(
                    "'{}' is not a well-known geographic coordinate system",
                    name
                )))
            }
        };

        let well_known = SpatialReference::from_wkt(definition)?;
        self.copy_geog_cs_from(&well_known)
    }

    /// Copy the geographic part of another definition into this one
    ///
    /// A geocentric target receives copies of the source's `DATUM` and
    /// `PRIMEM` instead.
    pub fn copy_geog_cs_from(&mut self, source: &SpatialReference) -> SrsResult<()> {
        self.invalidate_norm_info();

        if self.is_geocentric() {
            let datum = source.get_attr_node("DATUM").cloned();
            let primem = source.get_attr_node("PRIMEM").cloned();

            let root = self
                .root_mut()
                .ok_or_else(|| SrsError::Failure("Geocentric root vanished".to_string()))?;
            for name in ["DATUM", "PRIMEM"] {
                if let Some(index) = root.find_child(name) {
                    root.destroy_child(index);
                }
            }

            return match (datum, primem) {
                (Some(datum), Some(primem)) => {
                    root.insert_child(datum, 1);
                    root.insert_child(primem, 2);
                    Ok(())
                }
                _ => Err(SrsError::Failure("Source has no DATUM or PRIMEM".to_string())),
            };
        }

        self.remove_geog_cs()?;

        let geog = source
            .get_attr_node("GEOGCS")
            .cloned()
            .ok_or_else(|| SrsError::Failure("Source has no GEOGCS".to_string()))?;
        self.attach_geog_cs(geog);
        Ok(())
    }

    /// Make this a local coordinate system
    pub fn set_local_cs(&mut self, name: &str) -> SrsResult<()> {
        if self.get_attr_node("LOCAL_CS").is_none() {
            if let Some(root) = self.root_value() {
                debug!(
                    "set_local_cs({}) failed: an incompatible root node ({}) already exists.",
                    name, root
                );
                return Err(SrsError::Failure(format!("Incompatible root node {}", root)));
            }
        }
        self.set_node("LOCAL_CS", name)
    }

    /// Make this a geocentric coordinate system
    ///
    /// A geographic root contributes its datum and prime meridian.
    pub fn set_geoc_cs(&mut self, name: &str) -> SrsResult<()> {
        let geog = if self.root().map_or(false, |root| root.value_is("GEOGCS")) {
            self.take_root()
        } else {
            None
        };

        if self.get_attr_node("GEOCCS").is_none() {
            if let Some(root) = self.root_value() {
                debug!(
                    "set_geoc_cs({}) failed: an incompatible root node ({}) already exists.",
                    name, root
                );
                return Err(SrsError::Failure(format!("Incompatible root node {}", root)));
            }
        }

        self.set_node("GEOCCS", name)?;

        if let Some(geog) = geog {
            if let (Some(datum), Some(primem)) = (geog.get_node("DATUM"), geog.get_node("PRIMEM")) {
                if let Some(root) = self.root_mut() {
                    root.insert_child(datum.clone(), 1);
                    root.insert_child(primem.clone(), 2);
                }
            }
        }
        Ok(())
    }

    /// Set the vertical coordinate system
    ///
    /// A horizontal definition is wrapped into a `COMPD_CS` with the new
    /// vertical part; anything else that is not vertical is discarded.
    ///
    /// # Arguments
    /// * `vert_cs_name` - Name of the vertical system
    /// * `vert_datum_name` - Name of the vertical datum
    /// * `vert_datum_type` - Datum type code, 2005 for geoid-based heights
    pub fn set_vert_cs(&mut self, vert_cs_name: &str, vert_datum_name: &str, vert_datum_type: i32) -> SrsResult<()> {
        let horizontal_root = self
            .root()
            .map_or(false, |root| root.value_is("PROJCS") || root.value_is("GEOGCS"));
        if horizontal_root {
            if let Some(horizontal) = self.take_root() {
                let mut compound = SrsNode::new("COMPD_CS");
                compound.add_child(horizontal);
                self.set_root(Some(compound));
            }
        } else if !self.is_compound() && self.get_attr_node("VERT_CS").is_none() {
            self.clear();
        }

        let mut vert_datum = SrsNode::new("VERT_DATUM");
        vert_datum.add_child(SrsNode::new(vert_datum_name));
        vert_datum.add_child(SrsNode::new(&vert_datum_type.to_string()));

        let mut children = vec![SrsNode::new(vert_cs_name), vert_datum];
        children.push(SrsNode::with_leaves("AXIS", &["Up", "UP"]));

        if let Some(vert_cs) = self.get_attr_node_mut("VERT_CS") {
            vert_cs.clear_children();
            for child in children {
                vert_cs.add_child(child);
            }
            return Ok(());
        }

        let mut vert_cs = SrsNode::new("VERT_CS");
        for child in children {
            vert_cs.add_child(child);
        }

        match self.root_mut() {
            Some(root) if root.value_is("COMPD_CS") => root.add_child(vert_cs),
            _ => self.set_root(Some(vert_cs)),
        }
        Ok(())
    }

    /// Build a compound system from a horizontal and a vertical definition
    pub fn set_compound_cs(
        &mut self,
        name: &str,
        horizontal: &SpatialReference,
        vertical: &SpatialReference,
    ) -> SrsResult<()> {
        if !vertical.is_vertical() {
            return Err(SrsError::Failure(
                "set_compound_cs() fails, vertical component is not VERT_CS.".to_string(),
            ));
        }
        if !horizontal.is_projected() && !horizontal.is_geographic() {
            return Err(SrsError::Failure(
                "set_compound_cs() fails, horizontal component is not PROJCS or GEOGCS.".to_string(),
            ));
        }

        let (horizontal_root, vertical_root) = match (horizontal.root(), vertical.root()) {
            (Some(h), Some(v)) => (h.clone(), v.clone()),
            _ => return Err(SrsError::Failure("Compound components must be defined".to_string())),
        };

        let mut compound = SrsNode::new("COMPD_CS");
        compound.add_child(SrsNode::new(name));
        compound.add_child(horizontal_root);
        compound.add_child(vertical_root);

        self.clear();
        self.set_root(Some(compound));
        Ok(())
    }

    /// Make this a projected system named `name`
    ///
    /// A geographic root becomes the projected system's `GEOGCS`.
    pub fn set_proj_cs(&mut self, name: &str) -> SrsResult<()> {
        let geog = if self.root().map_or(false, |root| root.value_is("GEOGCS")) {
            self.take_root()
        } else {
            None
        };

        if self.get_attr_node("PROJCS").is_none() {
            if let Some(root) = self.root_value() {
                debug!(
                    "set_proj_cs({}) failed: an incompatible root node ({}) already exists.",
                    name, root
                );
                return Err(SrsError::Failure(format!("Incompatible root node {}", root)));
            }
        }

        self.set_node("PROJCS", name)?;

        if let (Some(geog), Some(root)) = (geog, self.root_mut()) {
            root.insert_child(geog, 1);
        }
        Ok(())
    }

    /// Set the projection method, creating an "unnamed" `PROJCS` if needed
    pub fn set_projection(&mut self, projection: &str) -> SrsResult<()> {
        let geog = if self.root().map_or(false, |root| root.value_is("GEOGCS")) {
            self.take_root()
        } else {
            None
        };

        if self.get_attr_node("PROJCS").is_none() {
            self.set_node("PROJCS", "unnamed")?;
        }

        self.set_node("PROJCS|PROJECTION", projection)?;

        if let (Some(geog), Some(root)) = (geog, self.root_mut()) {
            root.insert_child(geog, 1);
        }
        Ok(())
    }

    /// Store a projection parameter in raw units
    pub fn set_proj_parm(&mut self, name: &str, value: f64) -> SrsResult<()> {
        let projcs = self
            .get_attr_node_mut("PROJCS")
            .ok_or_else(|| SrsError::Failure(format!("No PROJCS node for parameter {}", name)))?;

        let text = print_double(value);
        let existing = projcs.children().iter().position(|child| {
            child.value_is("PARAMETER")
                && child.child_count() == 2
                && child.child(0).map_or(false, |param_name| param_name.value_is(name))
        });

        match existing.and_then(|index| projcs.child_mut(index)).and_then(|param| param.child_mut(1)) {
            Some(value_node) => value_node.set_value(&text),
            None => projcs.add_child(SrsNode::with_leaves("PARAMETER", &[name, &text])),
        }
        Ok(())
    }

    /// Index of a parameter within `projcs`
    ///
    /// `latitude_of_origin` also matches `latitude_of_center`, and
    /// `central_meridian` also matches `longitude_of_center` and
    /// `longitude_of_origin`.
    pub fn find_proj_parm(name: &str, projcs: &SrsNode) -> Option<usize> {
        let direct = projcs.children().iter().position(|child| {
            child.value_is("PARAMETER")
                && child.child_count() == 2
                && child.child(0).map_or(false, |param_name| param_name.value_is(name))
        });
        if direct.is_some() {
            return direct;
        }

        if name.eq_ignore_ascii_case(constants::params::LATITUDE_OF_ORIGIN) {
            return Self::find_proj_parm(constants::params::LATITUDE_OF_CENTER, projcs);
        }
        if name.eq_ignore_ascii_case(constants::params::CENTRAL_MERIDIAN) {
            return Self::find_proj_parm(constants::params::LONGITUDE_OF_CENTER, projcs)
                .or_else(|| Self::find_proj_parm(constants::params::LONGITUDE_OF_ORIGIN, projcs));
        }
        None
    }

    /// Raw value of a projection parameter, `None` when absent
    pub fn proj_parm(&self, name: &str) -> Option<f64> {
        let projcs = self.get_attr_node("PROJCS")?;
        let index = Self::find_proj_parm(name, projcs)?;
        projcs.child(index)?.child_value(1).map(atof)
    }

    /// Raw value of a projection parameter, or `default` when absent
    pub fn get_proj_parm(&self, name: &str, default: f64) -> f64 {
        self.proj_parm(name).unwrap_or(default)
    }
}
