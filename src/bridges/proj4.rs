//! PROJ string import
//!
//! Parses `+key=value` strings into the model: prime meridian, projection
//! method with its parameters, datum or ellipsoid, datum shifts, units
//! and an optional synthesized vertical system for `+geoidgrids`.

use lazy_static::lazy_static;
use log::{debug, error, warn};
use regex::Regex;

use crate::node::SrsNode;
use crate::srs::constants::{self, datums, units};
use crate::srs::context::SrsContext;
use crate::srs::errors::{SrsError, SrsResult};
use crate::srs::model::{inv_flattening_from_semi_minor, SpatialReference};
use crate::srs::norm::is_linear_parameter;
use crate::srs::tables::tables;
use crate::utils::dms::dms_to_decimal;
use crate::utils::number_format::{atof, atoi};

/// Datum keywords that map straight onto a built-in geographic system
const WELL_KNOWN_DATUMS: [&str; 4] = ["NAD27", "NAD83", "WGS84", "WGS72"];

lazy_static! {
    /// A `+` opening the string or following whitespace, then the token
    static ref TOKEN_PATTERN: Regex = Regex::new(r"(?:^|\s)\+(\S*)").unwrap();
}

/// Key/value pairs of a PROJ string, in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjTokens {
    pairs: Vec<(String, String)>,
}

impl ProjTokens {
    /// Split a PROJ string into tokens
    ///
    /// A token starts at a `+` that opens the string or follows
    /// whitespace, and runs to the next whitespace. Flags without `=` get
    /// the value `yes`.
    pub fn parse(text: &str) -> Self {
        let pairs = TOKEN_PATTERN
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|token| token.as_str())
            .filter(|token| !token.is_empty())
            .map(|token| match token.split_once('=') {
                Some((key, value)) => (key.to_string(), value.to_string()),
                None => (token.to_string(), "yes".to_string()),
            })
            .collect();

        ProjTokens { pairs }
    }

    /// Value of the first token named `key`, matched case-insensitively
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Numeric value of `key` in decimal degrees or plain units
    ///
    /// `k` falls back to `k_0`.
    pub fn number(&self, key: &str, default: f64) -> f64 {
        let value = match self.get(key) {
            Some(value) => Some(value),
            None if key == "k" => self.get("k_0"),
            None => None,
        };
        value.map_or(default, dms_to_decimal)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Replace control characters a file read may leave in the string
fn clean_proj_string(text: &str) -> String {
    text.chars()
        .map(|c| if matches!(c, '\r' | '\n' | '\t') { ' ' } else { c })
        .collect()
}

/// Unit name and meters-per-unit for a `to_meter`/`vto_meter` value
fn unit_from_factor(text: &str) -> (String, String) {
    match tables().linear_unit_by_factor_or_name(atof(text), Some(text)) {
        Some(unit) => (unit.wkt.clone(), unit.factor.to_string()),
        None => ("unknown".to_string(), text.to_string()),
    }
}

impl SpatialReference {
    /// Initialize from a PROJ string
    ///
    /// The string is first offered to the native projection library for
    /// normalization. A bare `+init=epsg:<code>` goes through the EPSG
    /// resolver; trailing `+` overrides are applied on top of its result.
    ///
    /// # Arguments
    /// * `ctx` - Collaborators for EPSG lookups and normalization
    /// * `proj4` - The PROJ definition, e.g. `+proj=utm +zone=11 +datum=WGS84`
    ///
    /// # Returns
    /// `CorruptData` when no projection is named or it is not supported,
    /// `UnsupportedSrs` when no ellipsoid can be derived
    pub fn import_from_proj4(&mut self, ctx: &SrsContext, proj4: &str) -> SrsResult<()> {
        self.clear();

        let cleaned = clean_proj_string(proj4);

        // Overrides after an EPSG init mean the code no longer applies
        let mut set_authority_code = true;
        if let Some(position) = cleaned.find("init=epsg:") {
            if cleaned[position..].contains('+') {
                set_authority_code = false;
            }
        }

        let mut normalized = ctx
            .native
            .as_ref()
            .and_then(|native| native.normalize(&cleaned))
            .unwrap_or_else(|| cleaned.clone());

        if cleaned.contains("+no_off") && !normalized.contains("+no_off") {
            normalized.push_str(" +no_off");
        } else if cleaned.contains("+no_uoff") && !normalized.contains("+no_uoff") {
            normalized.push_str(" +no_uoff");
        }

        let mut epsg_base = false;
        if let Some(position) = normalized.find("init=epsg:") {
            if !normalized.contains("proj=") {
                let number = &normalized[position + "init=epsg:".len()..];
                let result = self.import_from_epsg(ctx, atoi(number));
                if result.is_err() || !number.contains('+') {
                    return result;
                }
                if let Some(root) = self.root_mut() {
                    if let Some(index) = root.find_child("AUTHORITY") {
                        root.destroy_child(index);
                    }
                }
                epsg_base = true;
            }
        }

        let tokens = ProjTokens::parse(&normalized);

        let (pm_name, pm_offset) = prime_meridian(&tokens);

        let mut add_proj4_extension = false;
        if !epsg_base {
            let projection = match tokens.get("proj") {
                Some(projection) => projection.to_string(),
                None => {
                    debug!("Can't find +proj= in:\n{}", proj4);
                    return Err(SrsError::CorruptData(format!("No +proj= in '{}'", proj4)));
                }
            };
            add_proj4_extension = self.set_projection_from_tokens(&projection, &tokens, proj4)?;
        }

        let explicit_datum = ["datum", "ellps", "a", "R"].iter().any(|key| tokens.has(key));
        if !epsg_base || explicit_datum {
            self.set_datum_from_tokens(ctx, &tokens, proj4, &pm_name, pm_offset)?;
        }

        if let Some(towgs84) = tokens.get("towgs84") {
            let is_wgs84 = tokens.get("datum").map_or(false, |datum| datum.eq_ignore_ascii_case("WGS84"));
            if !(is_wgs84 && towgs84 == "0,0,0") {
                let values: Vec<f64> = towgs84.split(',').filter(|v| !v.is_empty()).map(atof).collect();
                if values.len() >= 7 {
                    self.set_towgs84([values[0], values[1], values[2], values[3], values[4], values[5], values[6]])?;
                } else if values.len() >= 3 {
                    self.set_towgs84([values[0], values[1], values[2], 0.0, 0.0, 0.0, 0.0])?;
                } else {
                    warn!("Seemingly corrupt +towgs84 option ({}), ignoring.", towgs84);
                }
            }
        }

        if let Some(grids) = tokens.get("nadgrids") {
            self.set_extension(Some("DATUM"), "PROJ4_GRIDS", grids)?;
            self.fixup_ordering();
        }

        if self.is_projected() || self.is_local() || self.is_geocentric() {
            self.set_units_from_tokens(&tokens)?;
        }

        if self.get_linear_units().1 != 1.0 && self.is_projected() {
            self.rescale_linear_parameters()?;
        }

        if let Some(grids) = tokens.get("geoidgrids") {
            self.add_geoid_vertical(grids, &tokens)?;
        }

        if proj4.contains("wktext") || add_proj4_extension {
            let root = self.root_value().unwrap_or_default().to_string();
            self.set_extension(Some(&root), "PROJ4", proj4)?;
        }

        // Keep an init= authority such as IGNF when nothing overrides it
        if set_authority_code {
            if let Some((authority, code)) = tokens.get("init").and_then(|init| init.split_once(':')) {
                if let Some(root) = self.root_mut() {
                    if root.find_child("AUTHORITY").is_none() {
                        root.add_child(SrsNode::with_leaves(
                            "AUTHORITY",
                            &[&authority.to_ascii_uppercase(), code],
                        ));
                    }
                }
            }
        }

        Ok(())
    }

    /// Dispatch `+proj=` onto a projection setter
    ///
    /// # Returns
    /// Whether the original string must be kept as a `PROJ4` extension
    fn set_projection_from_tokens(&mut self, projection: &str, tokens: &ProjTokens, proj4: &str) -> SrsResult<bool> {
        let n = |key: &str, default: f64| tokens.number(key, default);
        let lower = projection.to_ascii_lowercase();
        let mut add_extension = false;

        match lower.as_str() {
            "longlat" | "latlong" | "lonlat" | "latlon" => {}
            "geocent" => self.set_geoc_cs("Geocentric")?,
            "bonne" => self.set_bonne(n("lat_1", 0.0), n("lon_0", 0.0), n("x_0", 0.0), n("y_0", 0.0))?,
            "cass" => self.set_cs(n("lat_0", 0.0), n("lon_0", 0.0), n("x_0", 0.0), n("y_0", 0.0))?,
            "nzmg" => self.set_nzmg(
                n("lat_0", -41.0),
                n("lon_0", 173.0),
                n("x_0", 2510000.0),
                n("y_0", 6023150.0),
            )?,
            "cea" => self.set_cea(n("lat_ts", 0.0), n("lon_0", 0.0), n("x_0", 0.0), n("y_0", 0.0))?,
            "tmerc" => {
                let args = (n("lat_0", 0.0), n("lon_0", 0.0), n("k", 1.0), n("x_0", 0.0), n("y_0", 0.0));
                if tokens.get("axis") == Some("wsu") {
                    self.set_tmso(args.0, args.1, args.2, args.3, args.4)?;
                } else {
                    self.set_tm(args.0, args.1, args.2, args.3, args.4)?;
                }
            }
            "etmerc" if !tokens.has("axis") => {
                self.set_tm(n("lat_0", 0.0), n("lon_0", 0.0), n("k", 1.0), n("x_0", 0.0), n("y_0", 0.0))?;
                add_extension = true;
            }
            "utm" => self.set_utm(atoi(tokens.get("zone").unwrap_or("0")), !tokens.has("south"))?,
            "merc" => {
                if tokens.number("lat_ts", 1000.0) < 999.0 {
                    self.set_mercator_2sp(n("lat_ts", 0.0), 0.0, n("lon_0", 0.0), n("x_0", 0.0), n("y_0", 0.0))?;
                } else {
                    self.set_mercator(0.0, n("lon_0", 0.0), n("k", 1.0), n("x_0", 0.0), n("y_0", 0.0))?;
                }
            }
            "stere" if (n("lat_0", 0.0) - 90.0).abs() < 0.001 => {
                self.set_ps(n("lat_ts", 90.0), n("lon_0", 0.0), n("k", 1.0), n("x_0", 0.0), n("y_0", 0.0))?
            }
            "stere" if (n("lat_0", 0.0) + 90.0).abs() < 0.001 => {
                self.set_ps(n("lat_ts", -90.0), n("lon_0", 0.0), n("k", 1.0), n("x_0", 0.0), n("y_0", 0.0))?
            }
            "sterea" => self.set_os(n("lat_0", 0.0), n("lon_0", 0.0), n("k", 1.0), n("x_0", 0.0), n("y_0", 0.0))?,
            "stere" => {
                self.set_stereographic(n("lat_0", 0.0), n("lon_0", 0.0), n("k", 1.0), n("x_0", 0.0), n("y_0", 0.0))?
            }
            "eqc" => {
                if n("lat_ts", 0.0) != 0.0 {
                    self.set_equirectangular2(n("lat_0", 0.0), n("lon_0", 0.0), n("lat_ts", 0.0), n("x_0", 0.0), n("y_0", 0.0))?;
                } else {
                    self.set_equirectangular(n("lat_0", 0.0), n("lon_0", 0.0), n("x_0", 0.0), n("y_0", 0.0))?;
                }
            }
            "gstmerc" => self.set_gauss_schreiber_tmercator(
                n("lat_0", -21.116666667),
                n("lon_0", 55.53333333309),
                n("k_0", 1.0),
                n("x_0", 160000.000),
                n("y_0", 50000.000),
            )?,
            "gnom" => self.set_gnomonic(n("lat_0", 0.0), n("lon_0", 0.0), n("x_0", 0.0), n("y_0", 0.0))?,
            "ortho" => self.set_orthographic(n("lat_0", 0.0), n("lon_0", 0.0), n("x_0", 0.0), n("y_0", 0.0))?,
            "laea" => self.set_laea(n("lat_0", 0.0), n("lon_0", 0.0), n("x_0", 0.0), n("y_0", 0.0))?,
            "aeqd" => self.set_ae(n("lat_0", 0.0), n("lon_0", 0.0), n("x_0", 0.0), n("y_0", 0.0))?,
            "eqdc" => self.set_ec(
                n("lat_1", 0.0),
                n("lat_2", 0.0),
                n("lat_0", 0.0),
                n("lon_0", 0.0),
                n("x_0", 0.0),
                n("y_0", 0.0),
            )?,
            "mill" => self.set_mc(n("lat_0", 0.0), n("lon_0", 0.0), n("x_0", 0.0), n("y_0", 0.0))?,
            "moll" => self.set_mollweide(n("lon_0", 0.0), n("x_0", 0.0), n("y_0", 0.0))?,
            "eck1" | "eck2" | "eck3" | "eck4" | "eck5" | "eck6" => {
                let variation = atoi(&lower[3..]);
                self.set_eckert(variation, n("lon_0", 0.0), n("x_0", 0.0), n("y_0", 0.0))?
            }
            "poly" => self.set_polyconic(n("lat_0", 0.0), n("lon_0", 0.0), n("x_0", 0.0), n("y_0", 0.0))?,
            "aea" => self.set_acea(
                n("lat_1", 0.0),
                n("lat_2", 0.0),
                n("lat_0", 0.0),
                n("lon_0", 0.0),
                n("x_0", 0.0),
                n("y_0", 0.0),
            )?,
            "robin" => self.set_robinson(n("lon_0", 0.0), n("x_0", 0.0), n("y_0", 0.0))?,
            "vandg" => self.set_vdg(n("lon_0", 0.0), n("x_0", 0.0), n("y_0", 0.0))?,
            "sinu" => self.set_sinusoidal(n("lon_0", 0.0), n("x_0", 0.0), n("y_0", 0.0))?,
            "gall" => self.set_gs(n("lon_0", 0.0), n("x_0", 0.0), n("y_0", 0.0))?,
            "goode" => self.set_gh(n("lon_0", 0.0), n("x_0", 0.0), n("y_0", 0.0))?,
            "igh" => self.set_igh()?,
            "geos" => {
                self.set_geos(n("lon_0", 0.0), n("h", 35785831.0), n("x_0", 0.0), n("y_0", 0.0))?;
                if tokens.get("sweep") == Some("x") {
                    add_extension = true;
                }
            }
            "lcc" => {
                if n("lat_0", 0.0) == n("lat_1", 0.0) && !tokens.has("lat_2") {
                    self.set_lcc1sp(n("lat_0", 0.0), n("lon_0", 0.0), n("k_0", 1.0), n("x_0", 0.0), n("y_0", 0.0))?;
                } else {
                    self.set_lcc(
                        n("lat_1", 0.0),
                        n("lat_2", 0.0),
                        n("lat_0", 0.0),
                        n("lon_0", 0.0),
                        n("x_0", 0.0),
                        n("y_0", 0.0),
                    )?;
                }
            }
            "omerc" => {
                let alpha = n("alpha", 0.0);
                let args = (
                    n("lat_0", 0.0),
                    n("lonc", 0.0),
                    alpha,
                    n("gamma", alpha),
                    n("k", 1.0),
                    n("x_0", 0.0),
                    n("y_0", 0.0),
                );
                if tokens.has("no_uoff") || tokens.has("no_off") {
                    self.set_hom(args.0, args.1, args.2, args.3, args.4, args.5, args.6)?;
                } else {
                    self.set_homac(args.0, args.1, args.2, args.3, args.4, args.5, args.6)?;
                }
            }
            "somerc" => self.set_homac(
                n("lat_0", 0.0),
                n("lon_0", 0.0),
                90.0,
                90.0,
                n("k", 1.0),
                n("x_0", 0.0),
                n("y_0", 0.0),
            )?,
            "krovak" => self.set_krovak(
                n("lat_0", 0.0),
                n("lon_0", 0.0),
                n("alpha", 0.0),
                0.0,
                n("k", 1.0),
                n("x_0", 0.0),
                n("y_0", 0.0),
            )?,
            "iwm_p" => self.set_iwm_polyconic(
                n("lat_1", 0.0),
                n("lat_2", 0.0),
                n("lon_0", 0.0),
                n("x_0", 0.0),
                n("y_0", 0.0),
            )?,
            "wag1" | "wag2" | "wag4" | "wag5" | "wag6" | "wag7" => {
                let variation = atoi(&lower[3..]);
                self.set_wagner(variation, 0.0, n("x_0", 0.0), n("y_0", 0.0))?
            }
            "wag3" => self.set_wagner(3, n("lat_ts", 0.0), n("x_0", 0.0), n("y_0", 0.0))?,
            "qsc" => self.set_qsc(n("lat_0", 0.0), n("lon_0", 0.0))?,
            "tpeqd" => self.set_tped(
                n("lat_1", 0.0),
                n("lon_1", 0.0),
                n("lat_2", 0.0),
                n("lon_2", 0.0),
                n("x_0", 0.0),
                n("y_0", 0.0),
            )?,
            _ if proj4.contains("wktext") => self.set_projection("custom_proj4")?,
            _ => {
                debug!("Unsupported projection: {}", projection);
                return Err(SrsError::CorruptData(format!("Unsupported projection: {}", projection)));
            }
        }

        Ok(add_extension)
    }

    /// Resolve `+datum`, `+ellps` or the raw ellipsoid axes
    fn set_datum_from_tokens(
        &mut self,
        ctx: &SrsContext,
        tokens: &ProjTokens,
        proj4: &str,
        pm_name: &str,
        pm_offset: f64,
    ) -> SrsResult<()> {
        let mut fully_defined = false;

        if let Some(datum) = tokens.get("datum") {
            if is_well_known_datum(datum) && pm_offset == 0.0 {
                self.set_well_known_geog_cs(datum)?;
                fully_defined = true;
            } else if let Some(entry) = tables().datum_by_proj(datum) {
                let mut geog = SpatialReference::new();
                match geog.import_from_epsg(ctx, entry.gcs) {
                    Ok(()) => {
                        self.copy_geog_cs_from(&geog)?;
                        fully_defined = true;
                    }
                    Err(e) => debug!("Datum {} not resolved through EPSG:{}: {}", datum, entry.gcs, e),
                }
            }
        }

        if fully_defined {
            return Ok(());
        }

        if let Some(ellipsoid) = tokens.get("ellps").and_then(|key| tables().ellipsoid(key)) {
            return self.set_geog_cs(
                Some(&ellipsoid.description),
                Some("unknown"),
                Some(&ellipsoid.key),
                ellipsoid.semi_major,
                ellipsoid.inv_flattening(),
                Some(pm_name),
                pm_offset,
                None,
            );
        }

        let mut semi_major = tokens.number("a", 0.0);
        let mut semi_minor = -1.0;
        let mut inv_flattening = -1.0;

        if semi_major == 0.0 {
            semi_major = tokens.number("R", 0.0);
            if semi_major != 0.0 {
                inv_flattening = 0.0;
            } else {
                debug!("Can't find ellipse definition, default to WGS84:\n{}", proj4);
                semi_major = constants::WGS84_SEMIMAJOR;
                inv_flattening = constants::WGS84_INVFLATTENING;
            }
        } else {
            semi_minor = tokens.number("b", -1.0);
            inv_flattening = tokens.number("rf", -1.0);
            if semi_minor == -1.0 && inv_flattening == -1.0 {
                let flattening = tokens.number("f", -1.0);
                if flattening == 0.0 {
                    semi_minor = semi_major;
                } else if flattening != -1.0 {
                    inv_flattening = 1.0 / flattening;
                }
            }
        }

        if semi_minor == -1.0 && inv_flattening == -1.0 {
            debug!("Can't find ellipse definition in:\n{}", proj4);
            return Err(SrsError::UnsupportedSrs(format!("No ellipsoid definition in '{}'", proj4)));
        }

        if inv_flattening == -1.0 {
            inv_flattening = inv_flattening_from_semi_minor(semi_major, semi_minor);
        }

        self.set_geog_cs(
            Some("unnamed ellipse"),
            Some("unknown"),
            Some("unnamed"),
            semi_major,
            inv_flattening,
            Some(pm_name),
            pm_offset,
            None,
        )
    }

    /// Apply `+to_meter` or `+units`, defaulting to meters
    fn set_units_from_tokens(&mut self, tokens: &ProjTokens) -> SrsResult<()> {
        if let Some(to_meter) = tokens.get("to_meter").filter(|value| atof(value) > 0.0) {
            let factor = atof(to_meter);
            return match tables().linear_unit_by_factor_or_name(factor, Some(to_meter)) {
                Some(unit) => self.set_linear_units(&unit.wkt, unit.factor),
                None => self.set_linear_units("unknown", factor),
            };
        }

        if let Some(keyword) = tokens.get("units") {
            return match tables().linear_unit_by_proj(keyword) {
                Some(unit) => self.set_linear_units(&unit.wkt, unit.factor),
                None => self.set_linear_units(keyword, 1.0),
            };
        }

        let has_unit = self
            .root()
            .and_then(|root| root.get_node(self.linear_units_owner()))
            .map_or(false, |node| node.find_child("UNIT").is_some());
        if has_unit {
            Ok(())
        } else {
            self.set_linear_units(units::METER, 1.0)
        }
    }

    fn linear_units_owner(&self) -> &'static str {
        if self.is_projected() {
            "PROJCS"
        } else if self.is_geocentric() {
            "GEOCCS"
        } else {
            "LOCAL_CS"
        }
    }

    /// Restate meter-valued linear parameters in the current linear unit
    fn rescale_linear_parameters(&mut self) -> SrsResult<()> {
        let names: Vec<String> = self
            .get_attr_node("PROJCS")
            .map(|projcs| {
                projcs
                    .children()
                    .iter()
                    .filter(|child| child.value_is("PARAMETER") && child.child_count() == 2)
                    .filter_map(|child| child.child_value(0))
                    .filter(|name| is_linear_parameter(name))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        for name in names {
            let meters = self.get_proj_parm(&name, 0.0);
            self.set_norm_proj_parm(&name, meters)?;
        }
        Ok(())
    }

    /// Wrap the horizontal system into a compound one with a vertical
    /// system referencing the geoid grids
    fn add_geoid_vertical(&mut self, grids: &str, tokens: &ProjTokens) -> SrsResult<()> {
        let horizontal = match self.take_root() {
            Some(root) => root,
            None => {
                error!("No horizontal system to attach +geoidgrids to");
                return Err(SrsError::Failure("No horizontal system for +geoidgrids".to_string()));
            }
        };
        self.clear();

        let name = format!("{} + Unnamed Vertical Datum", horizontal.child_value(0).unwrap_or(""));

        let mut vert_datum = SrsNode::with_leaves("VERT_DATUM", &["Unnamed", "2005"]);
        vert_datum.add_child(SrsNode::with_leaves("EXTENSION", &["PROJ4_GRIDS", grids]));

        let mut vert_cs = SrsNode::new("VERT_CS");
        vert_cs.add_child(SrsNode::new("Unnamed"));
        vert_cs.add_child(vert_datum);

        let unit = if let Some(to_meter) = tokens.get("vto_meter").filter(|value| atof(value) > 0.0) {
            Some(unit_from_factor(to_meter))
        } else {
            tokens.get("vunits").map(|keyword| match tables().linear_unit_by_proj(keyword) {
                Some(unit) => (unit.wkt.clone(), unit.factor.to_string()),
                None => ("unknown".to_string(), keyword.to_string()),
            })
        };
        if let Some((unit_name, unit_factor)) = unit {
            vert_cs.add_child(SrsNode::with_leaves("UNIT", &[&unit_name, &unit_factor]));
        }
        vert_cs.add_child(SrsNode::with_leaves("AXIS", &["Up", "UP"]));

        let mut compound = SrsNode::new("COMPD_CS");
        compound.add_child(SrsNode::new(&name));
        compound.add_child(horizontal);
        compound.add_child(vert_cs);

        self.set_root(Some(compound));
        Ok(())
    }
}

/// Prime meridian name and offset in degrees from `+pm`
fn prime_meridian(tokens: &ProjTokens) -> (String, f64) {
    let value = match tokens.get("pm") {
        Some(value) => value,
        None => return (constants::PM_GREENWICH.to_string(), 0.0),
    };

    if let Some(pm) = tables().prime_meridian_by_proj(value) {
        return (pm.wkt.clone(), pm.offset_degrees());
    }

    if atof(value) != 0.0 || value.starts_with('0') {
        return ("unnamed".to_string(), dms_to_decimal(value));
    }

    (constants::PM_GREENWICH.to_string(), 0.0)
}

/// Whether the datum keyword names a built-in geographic system
fn is_well_known_datum(name: &str) -> bool {
    WELL_KNOWN_DATUMS.iter().any(|known| known.eq_ignore_ascii_case(name))
}

/// Datum keyword for a WKT datum name or EPSG datum code
pub(crate) fn datum_keyword(name: &str, code: i32) -> Option<&'static str> {
    if name.eq_ignore_ascii_case(datums::NAD27) || code == 6267 {
        Some("NAD27")
    } else if name.eq_ignore_ascii_case(datums::NAD83) || code == 6269 {
        Some("NAD83")
    } else if name.eq_ignore_ascii_case(datums::WGS84) || code == 6326 {
        Some("WGS84")
    } else {
        None
    }
}
