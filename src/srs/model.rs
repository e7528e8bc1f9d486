//! The coordinate system model
//!
//! A `SpatialReference` owns at most one node tree. The value of the root
//! node decides what kind of system it describes (`GEOGCS`, `PROJCS`,
//! `GEOCCS`, `VERT_CS`, `COMPD_CS` or `LOCAL_CS`). Builders, bridges and the
//! EPSG resolver all work by editing that tree.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, info};

use crate::node::SrsNode;
use crate::srs::errors::{SrsError, SrsResult};
use crate::srs::norm::NormInfo;
use crate::utils::number_format::{atof, print_double, print_node_value};

/// Orientation of a coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    Other,
    North,
    South,
    East,
    West,
    Up,
    Down,
}

impl AxisOrientation {
    /// Keyword written into `AXIS` nodes
    pub fn as_wkt(&self) -> &'static str {
        match self {
            AxisOrientation::Other => "OTHER",
            AxisOrientation::North => "NORTH",
            AxisOrientation::South => "SOUTH",
            AxisOrientation::East => "EAST",
            AxisOrientation::West => "WEST",
            AxisOrientation::Up => "UP",
            AxisOrientation::Down => "DOWN",
        }
    }

    /// Parse an orientation keyword, case-insensitively
    pub fn from_wkt(text: &str) -> Option<Self> {
        [
            AxisOrientation::Other,
            AxisOrientation::North,
            AxisOrientation::South,
            AxisOrientation::East,
            AxisOrientation::West,
            AxisOrientation::Up,
            AxisOrientation::Down,
        ]
        .into_iter()
        .find(|orientation| orientation.as_wkt().eq_ignore_ascii_case(text))
    }
}

/// A coordinate reference system definition
#[derive(Debug)]
pub struct SpatialReference {
    /// Root of the definition tree, `None` when undefined
    root: Option<SrsNode>,
    /// Number of external holders
    ref_count: AtomicI32,
    /// Cached unit normalization factors, cleared on every mutation
    norm_cache: Mutex<Option<NormInfo>>,
}

impl Default for SpatialReference {
    fn default() -> Self {
        SpatialReference {
            root: None,
            ref_count: AtomicI32::new(1),
            norm_cache: Mutex::new(None),
        }
    }
}

impl Clone for SpatialReference {
    /// Deep copy of the tree; the copy starts with its own reference count
    fn clone(&self) -> Self {
        SpatialReference {
            root: self.root.clone(),
            ref_count: AtomicI32::new(1),
            norm_cache: Mutex::new(None),
        }
    }
}

impl SpatialReference {
    /// Create an empty (undefined) reference system
    pub fn new() -> Self {
        SpatialReference::default()
    }

    /// Create a reference system from WKT text
    ///
    /// # Arguments
    /// * `wkt` - WKT definition
    ///
    /// # Returns
    /// The populated model, or the parse error
    pub fn from_wkt(wkt: &str) -> SrsResult<Self> {
        let mut srs = SpatialReference::new();
        srs.import_from_wkt(wkt)?;
        Ok(srs)
    }

    /// Register another holder; returns the new count
    pub fn reference(&self) -> i32 {
        self.ref_count.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Drop a holder; returns the new count
    pub fn dereference(&self) -> i32 {
        let current = self.ref_count.load(Ordering::SeqCst);
        if current <= 0 {
            debug!(
                "dereference() called on an object with refcount {}, likely already destroyed!",
                current
            );
        }
        self.ref_count.fetch_sub(1, Ordering::SeqCst) - 1
    }

    /// Current number of holders
    pub fn reference_count(&self) -> i32 {
        self.ref_count.load(Ordering::SeqCst)
    }

    /// Release one holder's handle
    ///
    /// # Returns
    /// `true` when this was the last holder and the model should be destroyed
    pub fn release(this: Arc<Self>) -> bool {
        let remaining = this.dereference();
        drop(this);
        remaining <= 0
    }

    /// Discard the whole definition
    pub fn clear(&mut self) {
        self.root = None;
        self.invalidate_norm_info();
    }

    pub(crate) fn invalidate_norm_info(&mut self) {
        *self.norm_cache.get_mut().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub(crate) fn norm_cache(&self) -> &Mutex<Option<NormInfo>> {
        &self.norm_cache
    }

    /// Root node of the definition
    pub fn root(&self) -> Option<&SrsNode> {
        self.root.as_ref()
    }

    /// Mutable root node; any edit through it drops the cached norm info
    pub fn root_mut(&mut self) -> Option<&mut SrsNode> {
        self.invalidate_norm_info();
        self.root.as_mut()
    }

    /// Replace the root node
    pub fn set_root(&mut self, root: Option<SrsNode>) {
        self.invalidate_norm_info();
        self.root = root;
    }

    /// Take the root out of the model, leaving it empty
    pub fn take_root(&mut self) -> Option<SrsNode> {
        self.invalidate_norm_info();
        self.root.take()
    }

    /// Value of the root node, if any
    pub fn root_value(&self) -> Option<&str> {
        self.root.as_ref().map(|root| root.value())
    }

    /// Child-index path to the node named by a `|`-separated search path
    pub(crate) fn attr_path(&self, path: &str) -> Option<Vec<usize>> {
        let root = self.root.as_ref()?;
        let mut node = root;
        let mut full_path = Vec::new();
        let mut steps = 0;

        for token in path.split('|').filter(|token| !token.is_empty()) {
            let sub_path = node.find_node_path(token)?;
            node = node.node_at_path(&sub_path)?;
            full_path.extend(sub_path);
            steps += 1;
        }

        if steps == 0 {
            return None;
        }
        Some(full_path)
    }

    /// Find a node by a `|`-separated search path such as `"PROJCS|UNIT"`
    ///
    /// Each component is searched for with `SrsNode::get_node` starting
    /// from the previous hit.
    pub fn get_attr_node(&self, path: &str) -> Option<&SrsNode> {
        let node_path = self.attr_path(path)?;
        self.root.as_ref()?.node_at_path(&node_path)
    }

    /// Mutable counterpart of `get_attr_node`
    pub fn get_attr_node_mut(&mut self, path: &str) -> Option<&mut SrsNode> {
        let node_path = self.attr_path(path)?;
        self.invalidate_norm_info();
        self.root.as_mut()?.node_at_path_mut(&node_path)
    }

    /// Value of child `child` of the node found by `path`
    pub fn get_attr_value(&self, path: &str, child: usize) -> Option<&str> {
        self.get_attr_node(path)?.child_value(child)
    }

    /// Node named by `key`, or the root when `key` is `None`
    pub(crate) fn target_node(&self, key: Option<&str>) -> Option<&SrsNode> {
        match key {
            Some(key) => self.get_attr_node(key),
            None => self.root.as_ref(),
        }
    }

    pub(crate) fn target_node_mut(&mut self, key: Option<&str>) -> Option<&mut SrsNode> {
        match key {
            Some(key) => self.get_attr_node_mut(key),
            None => self.root_mut(),
        }
    }

    /// Set the value of a node addressed by an exact path, creating the
    /// path as needed
    ///
    /// The first path component is the root. When the current root has a
    /// different value it is replaced. Later components are matched
    /// against immediate children only. The value becomes (or replaces)
    /// the first child of the final node.
    ///
    /// # Arguments
    /// * `path` - `|`-separated path, e.g. `"PROJCS|PROJECTION"`
    /// * `value` - New value for the first child of the final node
    pub fn set_node(&mut self, path: &str, value: &str) -> SrsResult<()> {
        let tokens: Vec<&str> = path.split('|').filter(|token| !token.is_empty()).collect();
        let first = match tokens.first() {
            Some(first) => *first,
            None => return Err(SrsError::Failure(format!("Empty node path '{}'", path))),
        };

        self.invalidate_norm_info();

        let replace_root = match &self.root {
            Some(root) => !root.value_is(first),
            None => true,
        };
        if replace_root {
            self.root = Some(SrsNode::new(first));
        }

        let mut node = match self.root.as_mut() {
            Some(root) => root,
            None => return Err(SrsError::Failure("Missing root node".to_string())),
        };

        for token in &tokens[1..] {
            let index = match node.children().iter().position(|child| child.value_is(token)) {
                Some(index) => index,
                None => {
                    node.add_child(SrsNode::new(token));
                    node.child_count() - 1
                }
            };
            node = match node.child_mut(index) {
                Some(child) => child,
                None => return Err(SrsError::Failure(format!("Lost node {} in path", token))),
            };
        }

        match node.child_mut(0) {
            Some(first_child) => first_child.set_value(value),
            None => node.add_child(SrsNode::new(value)),
        }

        Ok(())
    }

    /// `set_node` with a numeric value, written without a fraction when integral
    pub fn set_node_f64(&mut self, path: &str, value: f64) -> SrsResult<()> {
        self.set_node(path, &print_node_value(value))
    }

    /// Replace the model with a WKT definition
    ///
    /// Text following the first definition that mentions `VERTCS` is
    /// parsed as an extra child of the root. On failure the model is
    /// left empty.
    ///
    /// # Arguments
    /// * `wkt` - WKT text
    pub fn import_from_wkt(&mut self, wkt: &str) -> SrsResult<()> {
        self.clear();

        let mut root = SrsNode::default();
        let remainder = root.import_from_wkt(wkt)?;

        if !remainder.is_empty() && remainder.contains("VERTCS") {
            let extra_text = remainder.strip_prefix(',').unwrap_or(&remainder);
            let mut extra = SrsNode::default();
            extra.import_from_wkt(extra_text)?;
            root.add_child(extra);
        }

        self.root = Some(root);
        Ok(())
    }

    /// Single-line WKT, empty when the model is undefined
    pub fn export_to_wkt(&self) -> String {
        match &self.root {
            Some(root) => root.export_to_wkt(),
            None => String::new(),
        }
    }

    /// Indented WKT
    ///
    /// # Arguments
    /// * `simplify` - Drop `AXIS`, `AUTHORITY` and `EXTENSION` nodes first
    pub fn export_to_pretty_wkt(&self, simplify: bool) -> String {
        let root = match &self.root {
            Some(root) => root,
            None => return String::new(),
        };

        if simplify {
            let mut simple = root.clone();
            simple.strip_nodes("AXIS");
            simple.strip_nodes("AUTHORITY");
            simple.strip_nodes("EXTENSION");
            return simple.export_to_pretty_wkt(1);
        }

        root.export_to_pretty_wkt(1)
    }

    /// Log the pretty WKT of this definition
    pub fn dump_readable(&self) {
        for line in self.export_to_pretty_wkt(false).lines() {
            info!("{}", line);
        }
    }

    pub fn is_compound(&self) -> bool {
        self.root.as_ref().map_or(false, |root| root.value_is("COMPD_CS"))
    }

    /// `PROJCS`, or a compound system with a projected part
    pub fn is_projected(&self) -> bool {
        match &self.root {
            Some(root) if root.value_is("PROJCS") => true,
            Some(root) if root.value_is("COMPD_CS") => self.get_attr_node("PROJCS").is_some(),
            _ => false,
        }
    }

    /// `GEOGCS`, or a compound system whose horizontal part is geographic
    pub fn is_geographic(&self) -> bool {
        match &self.root {
            Some(root) if root.value_is("GEOGCS") => true,
            Some(root) if root.value_is("COMPD_CS") => {
                self.get_attr_node("GEOGCS").is_some() && self.get_attr_node("PROJCS").is_none()
            }
            _ => false,
        }
    }

    pub fn is_geocentric(&self) -> bool {
        self.root.as_ref().map_or(false, |root| root.value_is("GEOCCS"))
    }

    pub fn is_local(&self) -> bool {
        self.root.as_ref().map_or(false, |root| root.value_is("LOCAL_CS"))
    }

    /// `VERT_CS`, or a compound system with a vertical part
    pub fn is_vertical(&self) -> bool {
        match &self.root {
            Some(root) if root.value_is("VERT_CS") => true,
            Some(root) if root.value_is("COMPD_CS") => self.get_attr_node("VERT_CS").is_some(),
            _ => false,
        }
    }

    /// Attach an `AUTHORITY` node to the node found by `key`
    ///
    /// Any existing authority on that node is replaced.
    ///
    /// # Arguments
    /// * `key` - Search path of the target node, e.g. `"GEOGCS"` or `"PROJCS|UNIT"`
    /// * `authority` - Authority name, e.g. `"EPSG"`
    /// * `code` - Authority code
    pub fn set_authority(&mut self, key: &str, authority: &str, code: i32) -> SrsResult<()> {
        let node = self
            .get_attr_node_mut(key)
            .ok_or_else(|| SrsError::Failure(format!("No {} node to attach an authority to", key)))?;

        if let Some(index) = node.find_child("AUTHORITY") {
            node.destroy_child(index);
        }

        node.add_child(SrsNode::with_leaves("AUTHORITY", &[authority, &code.to_string()]));
        Ok(())
    }

    fn authority_child(&self, key: Option<&str>, child: usize) -> Option<&str> {
        let node = self.target_node(key)?;
        let authority = node.child(node.find_child("AUTHORITY")?)?;
        if authority.child_count() < 2 {
            return None;
        }
        authority.child_value(child)
    }

    /// Authority name of the node found by `key` (the root when `None`)
    pub fn get_authority_name(&self, key: Option<&str>) -> Option<&str> {
        self.authority_child(key, 0)
    }

    /// Authority code of the node found by `key` (the root when `None`)
    pub fn get_authority_code(&self, key: Option<&str>) -> Option<&str> {
        self.authority_child(key, 1)
    }

    /// Value of the `EXTENSION` named `name` on the node found by `key`
    ///
    /// The last matching extension wins.
    pub fn get_extension(&self, key: Option<&str>, name: &str) -> Option<&str> {
        let node = self.target_node(key)?;
        node.children()
            .iter()
            .rev()
            .find(|child| {
                child.value_is("EXTENSION") && child.child_count() >= 2 && child.child(0).map_or(false, |c| c.value_is(name))
            })
            .and_then(|extension| extension.child_value(1))
    }

    /// Set or append an `EXTENSION[name, value]` on the node found by `key`
    pub fn set_extension(&mut self, key: Option<&str>, name: &str, value: &str) -> SrsResult<()> {
        let node = self
            .target_node_mut(key)
            .ok_or_else(|| SrsError::Failure(format!("No {} node for extension {}", key.unwrap_or("root"), name)))?;

        let existing = node.children().iter().rposition(|child| {
            child.value_is("EXTENSION") && child.child_count() >= 2 && child.child(0).map_or(false, |c| c.value_is(name))
        });

        match existing {
            Some(index) => {
                if let Some(value_node) = node.child_mut(index).and_then(|extension| extension.child_mut(1)) {
                    value_node.set_value(value);
                }
            }
            None => node.add_child(SrsNode::with_leaves("EXTENSION", &[name, value])),
        }

        Ok(())
    }

    /// The `index`-th axis of the node found by `key` (the root when `None`)
    ///
    /// # Returns
    /// Axis name and orientation; unknown orientations read as `Other`
    pub fn get_axis(&self, key: Option<&str>, index: usize) -> Option<(&str, AxisOrientation)> {
        let node = self.target_node(key)?;
        let axis = node
            .children()
            .iter()
            .filter(|child| child.value_is("AXIS") && child.child_count() >= 2)
            .nth(index)?;

        let name = axis.child_value(0)?;
        let orientation_text = axis.child_value(1)?;
        let orientation = AxisOrientation::from_wkt(orientation_text).unwrap_or_else(|| {
            debug!("Unrecognised orientation value '{}'.", orientation_text);
            AxisOrientation::Other
        });

        Some((name, orientation))
    }

    /// Replace all axes of the node found by `key` with two new ones
    pub fn set_axes(
        &mut self,
        key: &str,
        x_name: &str,
        x_orientation: AxisOrientation,
        y_name: &str,
        y_orientation: AxisOrientation,
    ) -> SrsResult<()> {
        let node = self
            .get_attr_node_mut(key)
            .ok_or_else(|| SrsError::Failure(format!("No {} node to set axes on", key)))?;

        while let Some(index) = node.find_child("AXIS") {
            node.destroy_child(index);
        }

        node.add_child(SrsNode::with_leaves("AXIS", &[x_name, x_orientation.as_wkt()]));
        node.add_child(SrsNode::with_leaves("AXIS", &[y_name, y_orientation.as_wkt()]));
        Ok(())
    }

    /// Set the Bursa-Wolf parameters of the datum
    ///
    /// The `TOWGS84` node is placed before the datum's `AUTHORITY`.
    ///
    /// # Arguments
    /// * `coefficients` - dx, dy, dz (m), ex, ey, ez (arc-seconds), ppm
    pub fn set_towgs84(&mut self, coefficients: [f64; 7]) -> SrsResult<()> {
        let datum = self
            .get_attr_node_mut("DATUM")
            .ok_or_else(|| SrsError::Failure("No DATUM node for TOWGS84".to_string()))?;

        if let Some(index) = datum.find_child("TOWGS84") {
            datum.destroy_child(index);
        }

        let position = datum.find_child("AUTHORITY").unwrap_or(datum.child_count());
        let values: Vec<String> = coefficients.iter().map(|value| print_double(*value)).collect();
        let leaves: Vec<&str> = values.iter().map(String::as_str).collect();
        datum.insert_child(SrsNode::with_leaves("TOWGS84", &leaves), position);
        Ok(())
    }

    /// The seven Bursa-Wolf parameters, zero-filled
    pub fn get_towgs84(&self) -> SrsResult<[f64; 7]> {
        let node = self
            .get_attr_node("TOWGS84")
            .ok_or_else(|| SrsError::Failure("No TOWGS84 node".to_string()))?;

        let mut coefficients = [0.0; 7];
        for (slot, child) in coefficients.iter_mut().zip(node.children()) {
            *slot = atof(child.value());
        }
        Ok(coefficients)
    }

    /// Semi-major axis in meters, WGS84 when no spheroid is present
    pub fn get_semi_major(&self) -> f64 {
        self.spheroid_value(1).unwrap_or(crate::srs::constants::WGS84_SEMIMAJOR)
    }

    /// Inverse flattening, WGS84 when no spheroid is present
    pub fn get_inv_flattening(&self) -> f64 {
        self.spheroid_value(2).unwrap_or(crate::srs::constants::WGS84_INVFLATTENING)
    }

    /// Semi-minor axis derived from the semi-major axis and inverse flattening
    pub fn get_semi_minor(&self) -> f64 {
        semi_minor_from_inv_flattening(self.get_semi_major(), self.get_inv_flattening())
    }

    fn spheroid_value(&self, index: usize) -> Option<f64> {
        let spheroid = self.get_attr_node("SPHEROID")?;
        if spheroid.child_count() < 3 {
            return None;
        }
        spheroid.child_value(index).map(atof)
    }

    /// Turn a compound system into its horizontal part
    pub fn strip_vertical(&mut self) {
        let horizontal = match &self.root {
            Some(root) if root.value_is("COMPD_CS") => root.child(1).cloned(),
            _ => return,
        };
        self.set_root(horizontal);
    }

    /// Remove nodes that only matter for coordinate transformation
    ///
    /// Authorities, `TOWGS84`, axes and extensions are dropped after
    /// stripping any vertical part. A local system becomes undefined.
    pub fn strip_ct_parms(&mut self) {
        self.strip_vertical();

        if self.is_local() {
            self.clear();
            return;
        }

        if let Some(root) = self.root_mut() {
            for name in ["AUTHORITY", "TOWGS84", "AXIS", "EXTENSION"] {
                root.strip_nodes(name);
            }
        }
    }

    /// Put children of well-known nodes into canonical order
    pub fn fixup_ordering(&mut self) {
        if let Some(root) = self.root_mut() {
            root.fixup_ordering();
        }
    }

    /// Add missing default units, then fix ordering
    pub fn fixup(&mut self) -> SrsResult<()> {
        let linear_target = ["PROJCS", "LOCAL_CS", "GEOCCS"]
            .iter()
            .find_map(|key| self.get_attr_node(key));
        if let Some(node) = linear_target {
            if node.find_child("UNIT").is_none() {
                self.set_linear_units(crate::srs::constants::units::METER, 1.0)?;
            }
        }

        if let Some(node) = self.get_attr_node("GEOGCS") {
            if node.find_child("UNIT").is_none() {
                self.set_angular_units(
                    crate::srs::constants::units::DEGREE,
                    crate::srs::constants::units::DEGREE_CONV,
                )?;
            }
        }

        self.fixup_ordering();
        Ok(())
    }

    /// A new model holding only the geographic part of this one
    ///
    /// A geocentric system yields an "unnamed" geographic system built from
    /// its datum and prime meridian, in degrees.
    pub fn clone_geog_cs(&self) -> Option<SpatialReference> {
        if self.is_geocentric() {
            let datum = self.get_attr_node("DATUM")?;
            let prime_meridian = self.get_attr_node("PRIMEM")?;

            let mut geog = SrsNode::new("GEOGCS");
            geog.add_child(SrsNode::new("unnamed"));
            geog.add_child(datum.clone());
            geog.add_child(prime_meridian.clone());

            let mut srs = SpatialReference::new();
            srs.set_root(Some(geog));
            srs.set_angular_units(crate::srs::constants::units::DEGREE, crate::srs::constants::units::DEGREE_CONV)
                .ok()?;
            return Some(srs);
        }

        let geog = self.get_attr_node("GEOGCS")?;
        let mut srs = SpatialReference::new();
        srs.set_root(Some(geog.clone()));
        Some(srs)
    }
}

/// Semi-minor axis from semi-major axis and inverse flattening; a zero
/// inverse flattening means a sphere
pub fn semi_minor_from_inv_flattening(semi_major: f64, inv_flattening: f64) -> f64 {
    if inv_flattening.abs() < 1e-15 {
        semi_major
    } else {
        semi_major * (1.0 - 1.0 / inv_flattening)
    }
}

/// Inverse flattening from the two semi-axes; equal axes mean a sphere
pub fn inv_flattening_from_semi_minor(semi_major: f64, semi_minor: f64) -> f64 {
    if (semi_major - semi_minor).abs() < 1e-8 {
        0.0
    } else {
        semi_major / (semi_major - semi_minor)
    }
}
