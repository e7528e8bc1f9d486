//! Definitions from free-form user input
//!
//! `set_from_user_input` sniffs the text and hands it to the matching
//! importer: WKT, EPSG codes, OGC URNs and URLs, WMS AUTO codes, PROJ
//! strings, remote URLs or a file holding any of those.

use std::fs::File;
use std::io::Read;

use log::{debug, error};

use crate::node::SrsNode;
use crate::srs::constants::{units, WKT_ROOT_KEYWORDS};
use crate::srs::context::SrsContext;
use crate::srs::errors::{SrsError, SrsResult};
use crate::srs::model::SpatialReference;
use crate::utils::number_format::{atof, atoi};

/// Largest definition file read by `set_from_user_input`
const MAX_INPUT_FILE_BYTES: u64 = 100_000;

/// Timeout handed to the HTTP collaborator for URL import
const URL_TIMEOUT: u64 = 10;

const URN_PREFIXES: [&str; 5] = [
    "urn:ogc:def:crs:",
    "urn:ogc:def:crs,crs:",
    "urn:x-ogc:def:crs:",
    "urn:opengis:crs:",
    "urn:opengis:def:crs:",
];

const CRS_URL_PREFIXES: [&str; 3] = [
    "http://opengis.net/def/crs",
    "http://www.opengis.net/def/crs",
    "www.opengis.net/def/crs",
];

/// Case-insensitive prefix test
fn starts_with_ci(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.is_char_boundary(prefix.len())
        && text[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// `text` without `prefix`, matched case-insensitively
fn strip_prefix_ci<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    if starts_with_ci(text, prefix) {
        Some(&text[prefix.len()..])
    } else {
        None
    }
}

fn is_wkt(text: &str) -> bool {
    WKT_ROOT_KEYWORDS.iter().any(|keyword| starts_with_ci(text, keyword))
}

fn is_proj4(text: &str) -> bool {
    text.contains("+proj") || text.contains("+init")
}

/// Skip `authority:[version]:` and return (authority, code)
///
/// An `authority:code` form without the version field is accepted too.
fn split_urn_part(text: &str) -> (&str, &str) {
    let (authority, rest) = text.split_once(':').unwrap_or((text, ""));
    match rest.split_once(':') {
        Some((_version, code)) => (authority, code),
        None => (authority, rest),
    }
}

/// Wrap a horizontal and a vertical root into a `COMPD_CS`
fn compound_root(horizontal: SrsNode, vertical: SrsNode) -> SrsNode {
    let name = format!(
        "{} + {}",
        horizontal.child_value(0).unwrap_or(""),
        vertical.child_value(0).unwrap_or("")
    );

    let mut compound = SrsNode::new("COMPD_CS");
    compound.add_child(SrsNode::new(&name));
    compound.add_child(horizontal);
    compound.add_child(vertical);
    compound
}

impl SpatialReference {
    /// Set the definition from any supported user input
    ///
    /// # Arguments
    /// * `ctx` - Collaborators for EPSG, URL and PROJ lookups
    /// * `definition` - WKT, `EPSG:n`, a URN or URL, `AUTO:...`, a PROJ
    ///   string, a well-known name, or the path of a file holding one
    ///
    /// # Returns
    /// The error of the importer the input was dispatched to; an
    /// unreadable file is `CorruptData`
    pub fn set_from_user_input(&mut self, ctx: &SrsContext, definition: &str) -> SrsResult<()> {
        let definition = match strip_prefix_ci(definition, "ESRI::") {
            Some(rest) => {
                debug!("ESRI:: prefix dropped; the definition is read without ESRI dialect morphing");
                rest
            }
            None => definition,
        };

        if is_wkt(definition) {
            return self.import_from_wkt(definition);
        }

        if starts_with_ci(definition, "EPSG:") || starts_with_ci(definition, "EPSGA:") {
            return self.import_from_epsg_user_input(ctx, definition);
        }

        if URN_PREFIXES.iter().any(|prefix| starts_with_ci(definition, prefix)) {
            return self.import_from_urn(ctx, definition);
        }

        if CRS_URL_PREFIXES.iter().any(|prefix| starts_with_ci(definition, prefix)) {
            return self.import_from_crs_url(ctx, definition);
        }

        if starts_with_ci(definition, "AUTO:") {
            return self.import_from_wms_auto(definition);
        }

        if let Some(name) = strip_prefix_ci(definition, "OGC:") {
            return self.set_well_known_geog_cs_with_context(ctx, name);
        }

        if starts_with_ci(definition, "CRS:") {
            return self.set_well_known_geog_cs_with_context(ctx, definition);
        }

        if let Some(rest) = strip_prefix_ci(definition, "DICT:") {
            if let Some((file, code)) = rest.split_once(',') {
                return self.import_from_dict(ctx, file, code);
            }
        }

        if ["NAD27", "NAD83", "WGS84", "WGS72"]
            .iter()
            .any(|name| definition.eq_ignore_ascii_case(name))
        {
            self.clear();
            return self.set_well_known_geog_cs(definition);
        }

        if is_proj4(definition) {
            return self.import_from_proj4(ctx, definition);
        }

        if starts_with_ci(definition, "IGNF:") {
            return self.import_from_proj4(ctx, &format!("+init={}", definition));
        }

        if starts_with_ci(definition, "http://") {
            return self.import_from_url(ctx, definition);
        }

        if definition.eq_ignore_ascii_case("osgb:BNG") {
            return self.import_from_epsg(ctx, 27700);
        }

        self.import_from_file(ctx, definition)
    }

    /// `EPSG:h[+v]` and `EPSGA:h[+v]`
    fn import_from_epsg_user_input(&mut self, ctx: &SrsContext, definition: &str) -> SrsResult<()> {
        match strip_prefix_ci(definition, "EPSGA:") {
            Some(code) => self.import_from_epsga(ctx, atoi(code))?,
            None => {
                let code = strip_prefix_ci(definition, "EPSG:").unwrap_or(definition);
                self.import_from_epsg(ctx, atoi(code))?
            }
        }

        let vertical_code = match definition.split_once('+') {
            Some((_, vertical_code)) => atoi(vertical_code),
            None => return Ok(()),
        };

        let mut vertical = SpatialReference::new();
        vertical.import_from_epsg(ctx, vertical_code)?;

        if let (Some(horizontal), Some(vertical)) = (self.take_root(), vertical.take_root()) {
            self.set_root(Some(compound_root(horizontal, vertical)));
        }
        Ok(())
    }

    /// Set a well-known geographic system, resolving `EPSG:n` and
    /// `EPSGA:n` through the dictionary
    ///
    /// # Returns
    /// `Failure` when an EPSG code does not name a geographic system
    pub fn set_well_known_geog_cs_with_context(&mut self, ctx: &SrsContext, name: &str) -> SrsResult<()> {
        let mut well_known = SpatialReference::new();

        if let Some(code) = strip_prefix_ci(name, "EPSG:") {
            well_known.import_from_epsg(ctx, atoi(code))?;
        } else if let Some(code) = strip_prefix_ci(name, "EPSGA:") {
            well_known.import_from_epsga(ctx, atoi(code))?;
        } else {
            return self.set_well_known_geog_cs(name);
        }

        if !well_known.is_geographic() {
            return Err(SrsError::Failure(format!("{} is not a geographic coordinate system", name)));
        }

        self.copy_geog_cs_from(&well_known)
    }

    /// Initialize from an OGC URN such as `urn:ogc:def:crs:EPSG::4326`
    ///
    /// EPSG codes keep their EPSG axis order. A `crs,crs:` URN with a
    /// second component yields a compound system.
    pub fn import_from_urn(&mut self, ctx: &SrsContext, urn: &str) -> SrsResult<()> {
        let rest = URN_PREFIXES
            .iter()
            .find_map(|prefix| strip_prefix_ci(urn, prefix))
            .ok_or_else(|| SrsError::Failure(format!("URN {} not a supported format.", urn)))?;

        self.clear();

        let (authority, code) = split_urn_part(rest);

        let (first_code, second) = match code.split_once(',') {
            Some((first_code, second)) => (first_code, second),
            None => return self.import_from_urn_part(ctx, authority, code, urn),
        };

        let second = second
            .strip_prefix("crs:")
            .ok_or_else(|| SrsError::Failure(format!("URN {} not a supported format.", urn)))?;

        self.import_from_urn_part(ctx, authority, first_code, urn)?;

        let (vertical_authority, vertical_code) = split_urn_part(second);
        let mut vertical = SpatialReference::new();
        vertical.import_from_urn_part(ctx, vertical_authority, vertical_code, urn)?;

        if let (Some(horizontal), Some(vertical)) = (self.take_root(), vertical.take_root()) {
            self.set_root(Some(compound_root(horizontal, vertical)));
        }
        Ok(())
    }

    fn import_from_urn_part(&mut self, ctx: &SrsContext, authority: &str, code: &str, urn: &str) -> SrsResult<()> {
        if starts_with_ci(authority, "EPSG") {
            return self.import_from_epsga(ctx, atoi(code));
        }

        if starts_with_ci(authority, "IAU") {
            return self.import_from_dict(ctx, "IAU2000.wkt", code);
        }

        if !starts_with_ci(authority, "OGC") {
            error!("URN {} has unrecognised authority.", urn);
            return Err(SrsError::Failure(format!("URN {} has unrecognised authority", urn)));
        }

        if ["CRS84", "CRS83", "CRS27"].iter().any(|name| starts_with_ci(code, name)) {
            return self.set_well_known_geog_cs(&code[..5]);
        }

        // AUTO42001:99:8888 becomes AUTO:42001,99,8888
        if let Some(auto) = strip_prefix_ci(code, "AUTO") {
            if auto.len() > 96 {
                return Err(SrsError::Failure(format!("URN {} is too long", urn)));
            }
            return self.import_from_wms_auto(&format!("AUTO:{}", auto.replace(':', ",")));
        }

        error!("URN {} value not supported.", urn);
        Err(SrsError::Failure(format!("URN {} value not supported", urn)))
    }

    /// Initialize from an OGC CRS URL
    ///
    /// Accepts `http://opengis.net/def/crs/AUTHORITY/VERSION/CODE` and the
    /// compound form `http://opengis.net/def/crs-compound?1=URL1&2=URL2`.
    pub fn import_from_crs_url(&mut self, ctx: &SrsContext, url: &str) -> SrsResult<()> {
        let rest = CRS_URL_PREFIXES
            .iter()
            .find_map(|prefix| strip_prefix_ci(url, prefix))
            .ok_or_else(|| SrsError::Failure(format!("URL {} not a supported format.", url)))?;

        self.clear();

        if let Some(components) = strip_prefix_ci(rest, "-compound?1=") {
            return self.import_from_compound_crs_url(ctx, components);
        }

        let path = rest.strip_prefix('/').unwrap_or(rest);
        let (authority, after_authority) = path.split_once('/').unwrap_or((path, ""));
        let code = after_authority
            .split_once('/')
            .map_or(after_authority, |(_version, code)| code);

        self.import_from_urn_part(ctx, authority, code, url)
    }

    fn import_from_compound_crs_url(&mut self, ctx: &SrsContext, components: &str) -> SrsResult<()> {
        let mut urls = Vec::new();
        let mut rest = components;
        let mut index = 2;

        loop {
            let separator = format!("&{}=", index);
            match rest.find(&separator) {
                Some(end) => {
                    urls.push(&rest[..end]);
                    rest = &rest[end + separator.len()..];
                    index += 1;
                }
                None => {
                    if index == 2 {
                        error!("Compound CRS URLs must have at least two component CRSs.");
                        return Err(SrsError::Failure(
                            "Compound CRS URLs must have at least two component CRSs".to_string(),
                        ));
                    }
                    urls.push(rest);
                    break;
                }
            }
        }

        let mut compound = SrsNode::new("COMPD_CS");
        let mut names = Vec::new();

        for component_url in urls {
            let mut component = SpatialReference::new();
            component.import_from_crs_url(ctx, component_url)?;

            if let Some(root) = component.take_root() {
                names.push(root.child_value(0).unwrap_or("").to_string());
                compound.add_child(root);
            }
        }

        compound.insert_child(SrsNode::new(&names.join(" + ")), 0);
        self.set_root(Some(compound));
        Ok(())
    }

    /// Initialize from a WMS `AUTO:proj_id,units_id,ref_long,ref_lat` code
    ///
    /// The units id may be left out (metres), and the latitude is optional
    /// for Mollweide (42005).
    pub fn import_from_wms_auto(&mut self, definition: &str) -> SrsResult<()> {
        let body = strip_prefix_ci(definition, "AUTO:").unwrap_or(definition);
        let tokens: Vec<&str> = body.split(',').map(str::trim).filter(|token| !token.is_empty()).collect();

        let first = tokens.first().map_or(0, |token| atoi(token));
        let (proj_id, units_id, ref_long, ref_lat) = match tokens.len() {
            4 => (first, atoi(tokens[1]), atof(tokens[2]), atof(tokens[3])),
            3 if first == 42005 => (first, atoi(tokens[1]), atof(tokens[2]), 0.0),
            3 => (first, 9001, atof(tokens[1]), atof(tokens[2])),
            2 if first == 42005 => (first, 9001, atof(tokens[1]), 0.0),
            _ => {
                error!(
                    "AUTO projection has wrong number of arguments, expected \
                     AUTO:proj_id,units_id,ref_long,ref_lat or AUTO:proj_id,ref_long,ref_lat"
                );
                return Err(SrsError::Failure(format!("Malformed AUTO definition {}", definition)));
            }
        };

        self.clear();

        match proj_id {
            42001 => self.set_utm((((ref_long + 180.0) / 6.0).floor() as i32).saturating_add(1), ref_lat >= 0.0)?,
            42002 => self.set_tm(0.0, ref_long, 0.9996, 500000.0, if ref_lat >= 0.0 { 0.0 } else { 10000000.0 })?,
            42003 => self.set_orthographic(ref_lat, ref_long, 0.0, 0.0)?,
            42004 => self.set_equirectangular(ref_lat, ref_long, 0.0, 0.0)?,
            42005 => self.set_mollweide(ref_long, 0.0, 0.0)?,
            _ => {
                error!("Unsupported projection id in import_from_wms_auto(): {}", proj_id);
                return Err(SrsError::Failure(format!("Unsupported AUTO projection id {}", proj_id)));
            }
        }

        match units_id {
            9001 => self.set_linear_units(units::METER, 1.0)?,
            9002 => self.set_linear_units("Foot", units::FOOT_CONV)?,
            9003 => self.set_linear_units("US survey foot", units::US_FOOT_CONV)?,
            _ => {
                error!("Unsupported units code ({}).", units_id);
                return Err(SrsError::Failure(format!("Unsupported AUTO units code {}", units_id)));
            }
        }

        self.set_authority("PROJCS|UNIT", "EPSG", units_id)?;
        self.set_well_known_geog_cs("WGS84")
    }

    /// Fetch a definition over HTTP and set it from the response body
    ///
    /// # Returns
    /// `UnsupportedOperation` without an HTTP collaborator, `Failure` on a
    /// transport error, a non-success status, an empty body, or a body
    /// that is itself a URL
    pub fn import_from_url(&mut self, ctx: &SrsContext, url: &str) -> SrsResult<()> {
        if !starts_with_ci(url, "http://") {
            error!("The given string is not recognized as a URL starting with 'http://' -- {}", url);
            return Err(SrsError::Failure(format!("{} is not an http:// URL", url)));
        }

        let client = ctx
            .http
            .as_ref()
            .ok_or_else(|| SrsError::UnsupportedOperation("No HTTP client configured".to_string()))?;

        let response = client
            .fetch(url, &[("Accept", "application/x-ogcwkt")], URL_TIMEOUT)
            .map_err(|e| SrsError::Failure(format!("Fetching {} failed: {}", url, e)))?;

        if response.body.is_empty() {
            error!("No data was returned from the given URL");
            return Err(SrsError::Failure(format!("No data returned from {}", url)));
        }

        if !response.is_success() {
            error!("HTTP request for {} failed with status {}", url, response.status);
            return Err(SrsError::Failure(format!("HTTP status {} from {}", response.status, url)));
        }

        if starts_with_ci(&response.body, "http://") {
            error!(
                "The data that was downloaded also starts with 'http://' and cannot be passed into \
                 set_from_user_input. Is this really a spatial reference definition?"
            );
            return Err(SrsError::Failure(format!("{} returned another URL", url)));
        }

        self.set_from_user_input(ctx, &response.body)
            .map_err(|e| SrsError::Failure(format!("Definition from {} not understood: {}", url, e)))
    }

    /// Read a definition from a file and import it by its content
    fn import_from_file(&mut self, ctx: &SrsContext, path: &str) -> SrsResult<()> {
        let file = File::open(path).map_err(|e| SrsError::CorruptData(format!("Cannot open {}: {}", path, e)))?;

        let mut buffer = String::new();
        file.take(MAX_INPUT_FILE_BYTES)
            .read_to_string(&mut buffer)
            .map_err(|e| SrsError::CorruptData(format!("Cannot read {}: {}", path, e)))?;

        if buffer.len() as u64 >= MAX_INPUT_FILE_BYTES - 1 {
            debug!(
                "set_from_user_input({}), opened file but it is too large for our generous buffer. \
                 Is it really just a WKT definition?",
                path
            );
            return Err(SrsError::Failure(format!("{} is too large for a definition", path)));
        }

        let content = buffer.trim_start_matches([' ', '\n']);

        if content.starts_with('<') {
            self.import_from_xml(ctx, content)
        } else if is_proj4(&buffer) && !buffer.contains("EXTENSION") && !buffer.contains("extension") {
            self.import_from_proj4(ctx, content)
        } else {
            let content = strip_prefix_ci(content, "ESRI::").unwrap_or(content);
            self.import_from_wkt(content)
        }
    }
}
