//! GML coordinate reference system bridge
//!
//! Handles a constrained subset of the GML 3 CRS vocabulary: geographic
//! systems, and projected systems whose conversion is Transverse Mercator
//! or Lambert Conformal Conic 1SP. Documents are read into a small element
//! tree with `quick-xml` and written back through its indenting writer.

use log::{debug, error, warn};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::node::SrsNode;
use crate::srs::constants::{self, params};
use crate::srs::context::SrsContext;
use crate::srs::errors::{SrsError, SrsResult};
use crate::srs::model::SpatialReference;
use crate::srs::projections::ProjectionMethod;
use crate::utils::number_format::{atof, atoi, format_g16};

const UOM_DEGREE: &str = "urn:ogc:def:uom:EPSG::9102";
const UOM_METER: &str = "urn:ogc:def:uom:EPSG::9001";
const UOM_UNITY: &str = "urn:ogc:def:uom:EPSG::9201";

const GML_NAMESPACE: &str = "http://www.opengis.net/gml";
const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

/// EPSG method code for Transverse Mercator
const METHOD_TRANSVERSE_MERCATOR: i32 = 9807;
/// EPSG method code for Lambert Conformal Conic 1SP
const METHOD_LCC_1SP: i32 = 9801;

/// Kind of measure a conversion parameter carries
#[derive(Debug, Clone, Copy, PartialEq)]
enum Measure {
    Angular,
    Linear,
    Unitless,
}

impl Measure {
    fn uom(self) -> &'static str {
        match self {
            Measure::Angular => UOM_DEGREE,
            Measure::Linear => UOM_METER,
            Measure::Unitless => UOM_UNITY,
        }
    }
}

/// Parameters written for both exportable conversions: measure, default,
/// EPSG parameter code and WKT parameter name
const CONVERSION_PARAMETERS: [(Measure, f64, i32, &str); 5] = [
    (Measure::Angular, 0.0, 8801, params::LATITUDE_OF_ORIGIN),
    (Measure::Angular, 0.0, 8802, params::CENTRAL_MERIDIAN),
    (Measure::Unitless, 1.0, 8805, params::SCALE_FACTOR),
    (Measure::Linear, 0.0, 8806, params::FALSE_EASTING),
    (Measure::Linear, 0.0, 8807, params::FALSE_NORTHING),
];

#[derive(Debug, Clone, Copy)]
enum Axis {
    Latitude,
    Longitude,
    Easting,
    Northing,
}

/// One element of a GML document
///
/// Parsed elements keep only their local name; attributes keep their
/// full qualified key.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlElement>,
    text: String,
}

/// Part of a qualified name after the namespace prefix
fn local_name(name: &str) -> &str {
    match name.rfind(':') {
        Some(index) => &name[index + 1..],
        None => name,
    }
}

impl XmlElement {
    fn new(name: &str) -> Self {
        XmlElement {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn with_attribute(mut self, key: &str, value: &str) -> Self {
        self.attributes.push((key.to_string(), value.to_string()));
        self
    }

    fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    fn push(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    fn name_is(&self, name: &str) -> bool {
        local_name(&self.name).eq_ignore_ascii_case(name)
    }

    fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name_is(name))
    }

    /// Descendant reached through a `.`-separated chain of child names
    fn path(&self, path: &str) -> Option<&XmlElement> {
        path.split('.').try_fold(self, |element, step| element.child(step))
    }

    /// Attribute matched by its local name
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name) || local_name(key).eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Text content of the descendant at `path`, when it has any
    fn value_at(&self, path: &str) -> Option<&str> {
        self.path(path).map(|element| element.text.as_str()).filter(|text| !text.is_empty())
    }
}

/// Parse a document into a synthetic root whose children are the
/// top-level elements
fn parse_document(xml: &str) -> SrsResult<XmlElement> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let corrupt = |reason: String| {
        error!("Failed to parse GML: {}", reason);
        SrsError::CorruptData(format!("Failed to parse GML: {}", reason))
    };

    let mut stack = vec![XmlElement::default()];
    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => stack.push(element_from_start(&start).map_err(corrupt)?),
            Ok(Event::Empty(start)) => {
                let element = element_from_start(&start).map_err(corrupt)?;
                if let Some(parent) = stack.last_mut() {
                    parent.push(element);
                }
            }
            Ok(Event::End(_)) => {
                let element = stack.pop().ok_or_else(|| corrupt("unbalanced end tag".to_string()))?;
                match stack.last_mut() {
                    Some(parent) => parent.push(element),
                    None => return Err(corrupt("unbalanced end tag".to_string())),
                }
            }
            Ok(Event::Text(text)) => {
                let text = text.unescape().map_err(|e| corrupt(e.to_string()))?;
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&text);
                }
            }
            Ok(Event::CData(data)) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(corrupt(e.to_string())),
        }
    }

    if stack.len() != 1 {
        return Err(corrupt("unclosed element".to_string()));
    }
    stack.pop().ok_or_else(|| corrupt("empty document".to_string()))
}

fn element_from_start(start: &BytesStart<'_>) -> Result<XmlElement, String> {
    let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
    let mut element = XmlElement::new(&name);
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| e.to_string())?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute.unescape_value().map_err(|e| e.to_string())?;
        element.attributes.push((key, value.into_owned()));
    }
    Ok(element)
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> SrsResult<()> {
    writer
        .write_event(event)
        .map_err(|e| SrsError::Failure(format!("Failed to write GML: {}", e)))
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &XmlElement) -> SrsResult<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() && element.text.is_empty() {
        return write_event(writer, Event::Empty(start));
    }

    write_event(writer, Event::Start(start))?;
    if !element.text.is_empty() {
        write_event(writer, Event::Text(BytesText::new(&element.text)))?;
    }
    for child in &element.children {
        write_element(writer, child)?;
    }
    write_event(writer, Event::End(BytesEnd::new(element.name.as_str())))
}

fn serialize(root: &XmlElement) -> SrsResult<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_element(&mut writer, root)?;
    let mut xml = String::from_utf8(writer.into_inner())
        .map_err(|e| SrsError::Failure(format!("GML output is not UTF-8: {}", e)))?;
    xml.push('\n');
    Ok(xml)
}

/// `urn:ogc:def:<type>:<authority>:<version>:<code>`, with the code left
/// empty when zero
fn urn(object_type: &str, authority: &str, version: &str, code: i32) -> String {
    let mut urn = format!("urn:ogc:def:{}:{}:{}:", object_type, authority, version);
    if code != 0 {
        urn.push_str(&code.to_string());
    }
    urn
}

/// Split an OGC URN into object type, authority and code
fn parse_urn(urn: &str) -> Option<(&str, &str, &str)> {
    const PREFIX: &str = "urn:ogc:def:";
    if !urn.get(..PREFIX.len()).map_or(false, |prefix| prefix.eq_ignore_ascii_case(PREFIX)) {
        return None;
    }

    let mut parts = urn[PREFIX.len()..].splitn(4, ':');
    let object_type = parts.next()?;
    let authority = parts.next()?;
    let _version = parts.next()?;
    Some((object_type, authority, parts.next().unwrap_or("")))
}

fn element_with_urn(name: &str, authority: &str, object_type: &str, code: i32) -> XmlElement {
    XmlElement::new(name).with_attribute("xlink:href", &urn(object_type, authority, "", code))
}

fn gml_id(ctx: &SrsContext) -> String {
    format!("ogrcrs{}", ctx.gml.next_id())
}

/// Identification element for the `AUTHORITY` child of `node`
fn authority_element(node: &SrsNode, tag: &str, object_type: &str) -> Option<XmlElement> {
    let authority = node.child(node.find_child("AUTHORITY")?)?;
    if authority.child_count() < 2 {
        return None;
    }

    let code_space = authority.child_value(0)?;
    let code = atoi(authority.child_value(1)?);
    if code == 0 {
        return Some(XmlElement::new(tag));
    }
    Some(element_with_urn(tag, code_space, object_type, code))
}

fn axis_element(ctx: &SrsContext, axis: Axis) -> XmlElement {
    let (uom, name, code, abbreviation, direction) = match axis {
        Axis::Latitude => (UOM_DEGREE, "Geodetic latitude", 9901, "Lat", "north"),
        Axis::Longitude => (UOM_DEGREE, "Geodetic longitude", 9902, "Lon", "east"),
        Axis::Easting => (UOM_METER, "Easting", 9906, "E", "east"),
        Axis::Northing => (UOM_METER, "Northing", 9907, "N", "north"),
    };

    let axis = XmlElement::new("gml:CoordinateSystemAxis")
        .with_attribute("gml:id", &gml_id(ctx))
        .with_attribute("gml:uom", uom)
        .with_child(XmlElement::new("gml:name").with_text(name))
        .with_child(element_with_urn("gml:axisID", "EPSG", "axis", code))
        .with_child(XmlElement::new("gml:axisAbbrev").with_text(abbreviation))
        .with_child(XmlElement::new("gml:axisDirection").with_text(direction));

    XmlElement::new("gml:usesAxis").with_child(axis)
}

/// Authority name and code from an identification element
///
/// Reads `<name codeSpace="...">code</name>` children as well as an
/// `xlink:href` URN on the element itself.
fn xml_authority(parent: &XmlElement, key: &str) -> Option<(String, i32)> {
    let id = parent.path(key)?;

    if let Some(name) = id.child("name") {
        let code_space = name.attribute("codeSpace")?;
        let code = atoi(&name.text);
        return match parse_urn(code_space) {
            Some((_, authority, _)) => Some((authority.to_string(), code)),
            None => Some((code_space.to_string(), code)),
        };
    }

    let (_, authority, code) = parse_urn(id.attribute("href")?)?;
    Some((authority.to_string(), atoi(code)))
}

/// EPSG code of an object referenced by URN or given as plain text
///
/// # Returns
/// The code, or 0 when the reference is absent or of another kind
fn epsg_object_code(node: Option<&XmlElement>, object_type: &str) -> i32 {
    let node = match node {
        Some(node) => node,
        None => return 0,
    };

    if let Some(href) = node.attribute("href") {
        if href.get(..4).map_or(false, |prefix| prefix.eq_ignore_ascii_case("urn:")) {
            return match parse_urn(href) {
                Some((kind, authority, code))
                    if authority.eq_ignore_ascii_case("EPSG") && kind.eq_ignore_ascii_case(object_type) && !code.is_empty() =>
                {
                    atoi(code)
                }
                _ => 0,
            };
        }
    }

    if node.text.is_empty() {
        0
    } else {
        atoi(&node.text)
    }
}

/// Numeric text at `path` below `node`, or `default`
fn numeric_value(node: Option<&XmlElement>, path: &str, default: f64) -> f64 {
    node.and_then(|node| node.value_at(path)).map_or(default, atof)
}

fn conversion_parameter(conversion: &XmlElement, code: i32, default: f64) -> f64 {
    conversion
        .children
        .iter()
        .filter(|child| child.name_is("usesParameterValue"))
        .find(|child| epsg_object_code(child.child("valueOfParameter"), "parameter") == code)
        .map_or(default, |child| numeric_value(Some(child), "value", default))
}

impl SpatialReference {
    /// Export as a GML coordinate reference system document
    ///
    /// Only geographic and projected systems can be written. Each element
    /// that carries a `gml:id` draws it from `ctx.gml`.
    pub fn export_to_xml(&self, ctx: &SrsContext) -> SrsResult<String> {
        let mut root = if self.is_projected() {
            self.proj_cs_to_xml(ctx)?
        } else if self.is_geographic() {
            self.geog_cs_to_xml(ctx)?
        } else {
            return Err(SrsError::UnsupportedSrs(
                "Only geographic and projected systems have a GML form".to_string(),
            ));
        };

        root.attributes.push(("xmlns:gml".to_string(), GML_NAMESPACE.to_string()));
        root.attributes.push(("xmlns:xlink".to_string(), XLINK_NAMESPACE.to_string()));
        serialize(&root)
    }

    fn geog_cs_to_xml(&self, ctx: &SrsContext) -> SrsResult<XmlElement> {
        let geogcs = self
            .get_attr_node("GEOGCS")
            .ok_or_else(|| SrsError::UnsupportedSrs("No GEOGCS to export".to_string()))?;

        let mut crs = XmlElement::new("gml:GeographicCRS").with_attribute("gml:id", &gml_id(ctx));
        crs.push(XmlElement::new("gml:srsName").with_text(geogcs.child_value(0).unwrap_or("")));
        if let Some(id) = authority_element(geogcs, "gml:srsID", "crs") {
            crs.push(id);
        }

        let mut ellipsoidal_cs = XmlElement::new("gml:EllipsoidalCS").with_attribute("gml:id", &gml_id(ctx));
        ellipsoidal_cs.push(XmlElement::new("gml:csName").with_text("ellipsoidal"));
        ellipsoidal_cs.push(element_with_urn("gml:csID", "EPSG", "cs", 6402));
        ellipsoidal_cs.push(axis_element(ctx, Axis::Latitude));
        ellipsoidal_cs.push(axis_element(ctx, Axis::Longitude));
        crs.push(XmlElement::new("gml:usesEllipsoidalCS").with_child(ellipsoidal_cs));

        let datum = geogcs
            .child(geogcs.find_child("DATUM").ok_or_else(|| SrsError::CorruptData("GEOGCS has no DATUM".to_string()))?)
            .ok_or_else(|| SrsError::CorruptData("GEOGCS has no DATUM".to_string()))?;

        let mut datum_xml = XmlElement::new("gml:GeodeticDatum").with_attribute("gml:id", &gml_id(ctx));
        datum_xml.push(XmlElement::new("gml:datumName").with_text(datum.child_value(0).unwrap_or("")));
        if let Some(id) = authority_element(datum, "gml:datumID", "datum") {
            datum_xml.push(id);
        }

        let (pm_name, pm_offset) = self.get_prime_meridian();
        let mut meridian = XmlElement::new("gml:PrimeMeridian").with_attribute("gml:id", &gml_id(ctx));
        meridian.push(XmlElement::new("gml:meridianName").with_text(pm_name));
        if let Some(primem) = geogcs.find_child("PRIMEM").and_then(|index| geogcs.child(index)) {
            if let Some(id) = authority_element(primem, "gml:meridianID", "meridian") {
                meridian.push(id);
            }
        }
        let angle = XmlElement::new("gml:angle")
            .with_attribute("gml:uom", UOM_DEGREE)
            .with_text(&format_g16(pm_offset));
        meridian.push(XmlElement::new("gml:greenwichLongitude").with_child(angle));
        datum_xml.push(XmlElement::new("gml:usesPrimeMeridian").with_child(meridian));

        if let Some(spheroid) = datum.find_child("SPHEROID").and_then(|index| datum.child(index)) {
            let mut ellipsoid = XmlElement::new("gml:Ellipsoid").with_attribute("gml:id", &gml_id(ctx));
            ellipsoid.push(XmlElement::new("gml:ellipsoidName").with_text(spheroid.child_value(0).unwrap_or("")));
            if let Some(id) = authority_element(spheroid, "gml:ellipsoidID", "ellipsoid") {
                ellipsoid.push(id);
            }
            ellipsoid.push(
                XmlElement::new("gml:semiMajorAxis")
                    .with_attribute("gml:uom", UOM_METER)
                    .with_text(spheroid.child_value(1).unwrap_or("")),
            );
            let inverse_flattening = XmlElement::new("gml:inverseFlattening")
                .with_attribute("gml:uom", UOM_UNITY)
                .with_text(spheroid.child_value(2).unwrap_or(""));
            ellipsoid.push(XmlElement::new("gml:secondDefiningParameter").with_child(inverse_flattening));
            datum_xml.push(XmlElement::new("gml:usesEllipsoid").with_child(ellipsoid));
        }

        crs.push(XmlElement::new("gml:usesGeodeticDatum").with_child(datum_xml));
        Ok(crs)
    }

    fn proj_cs_to_xml(&self, ctx: &SrsContext) -> SrsResult<XmlElement> {
        let projcs = self
            .get_attr_node("PROJCS")
            .ok_or_else(|| SrsError::UnsupportedSrs("No PROJCS to export".to_string()))?;

        let mut crs = XmlElement::new("gml:ProjectedCRS").with_attribute("gml:id", &gml_id(ctx));
        crs.push(XmlElement::new("gml:srsName").with_text(projcs.child_value(0).unwrap_or("")));
        if let Some(id) = authority_element(projcs, "gml:srsID", "crs") {
            crs.push(id);
        }

        crs.push(XmlElement::new("gml:baseCRS").with_child(self.geog_cs_to_xml(ctx)?));

        // An unhandled method leaves the conversion block empty
        let mut defined_by = XmlElement::new("gml:definedByConversion");
        if let Some(conversion) = self.conversion_to_xml(ctx) {
            defined_by.push(conversion);
        }
        crs.push(defined_by);

        let mut cartesian_cs = XmlElement::new("gml:CartesianCS").with_attribute("gml:id", &gml_id(ctx));
        cartesian_cs.push(XmlElement::new("gml:csName").with_text("Cartesian"));
        cartesian_cs.push(element_with_urn("gml:csID", "EPSG", "cs", 4400));
        cartesian_cs.push(axis_element(ctx, Axis::Easting));
        cartesian_cs.push(axis_element(ctx, Axis::Northing));
        crs.push(XmlElement::new("gml:usesCartesianCS").with_child(cartesian_cs));

        Ok(crs)
    }

    fn conversion_to_xml(&self, ctx: &SrsContext) -> Option<XmlElement> {
        let projection = self.get_attr_value("PROJECTION", 0)?;
        let method = match ProjectionMethod::from_wkt_name(projection) {
            Some(ProjectionMethod::TransverseMercator) => METHOD_TRANSVERSE_MERCATOR,
            Some(ProjectionMethod::LambertConformalConic1SP) => METHOD_LCC_1SP,
            _ => {
                warn!("Unhandled projection method {}", projection);
                return None;
            }
        };

        let mut conversion = XmlElement::new("gml:Conversion").with_attribute("gml:id", &gml_id(ctx));
        conversion.push(XmlElement::new("gml:coordinateOperationName").with_text(projection));
        conversion.push(element_with_urn("gml:usesMethod", "EPSG", "method", method));

        for (measure, default, code, name) in CONVERSION_PARAMETERS {
            let value = XmlElement::new("gml:value")
                .with_attribute("gml:uom", measure.uom())
                .with_text(&format_g16(self.get_norm_proj_parm(name, default)));
            conversion.push(
                XmlElement::new("gml:usesParameterValue")
                    .with_child(value)
                    .with_child(element_with_urn("gml:valueOfParameter", "EPSG", "parameter", code)),
            );
        }

        Some(conversion)
    }

    /// Initialize from a GML coordinate reference system document
    ///
    /// The first top-level `GeographicCRS` or `ProjectedCRS` is read. A
    /// definition that only carries an EPSG identifier is resolved
    /// through the dictionary. The model is left empty on failure.
    ///
    /// # Returns
    /// `CorruptData` for malformed XML or an unrecognised conversion,
    /// `UnsupportedSrs` when no CRS element is found
    pub fn import_from_xml(&mut self, ctx: &SrsContext, xml: &str) -> SrsResult<()> {
        self.clear();

        let result = parse_document(xml).and_then(|document| {
            let crs = document
                .children
                .iter()
                .find(|element| element.name_is("GeographicCRS") || element.name_is("ProjectedCRS"))
                .ok_or_else(|| SrsError::UnsupportedSrs("No GeographicCRS or ProjectedCRS element".to_string()))?;

            if crs.name_is("GeographicCRS") {
                self.import_geog_cs_from_xml(ctx, crs)
            } else {
                self.import_proj_cs_from_xml(ctx, crs)
            }
        });

        if result.is_err() {
            self.clear();
        }
        result
    }

    fn import_geog_cs_from_xml(&mut self, ctx: &SrsContext, crs: &XmlElement) -> SrsResult<()> {
        let geog_name = crs.value_at("srsName").unwrap_or("Unnamed GeogCS");
        let datum = crs.path("usesGeodeticDatum.GeodeticDatum");

        if datum.is_none() {
            if let Some((authority, code)) = xml_authority(crs, "srsID") {
                if authority.eq_ignore_ascii_case("EPSG") {
                    debug!("GML geographic system defined by EPSG:{}", code);
                    let mut geog = SpatialReference::new();
                    geog.import_from_epsg(ctx, code)?;
                    return self.copy_geog_cs_from(&geog);
                }
            }
        }

        let datum_name = datum.and_then(|d| d.value_at("datumName")).unwrap_or("Unnamed Datum");
        let ellipsoid = datum.and_then(|d| d.path("usesEllipsoid.Ellipsoid"));
        let ellipsoid_name = ellipsoid.and_then(|e| e.value_at("ellipsoidName")).unwrap_or("Unnamed Ellipsoid");
        let semi_major = numeric_value(ellipsoid, "semiMajorAxis", constants::WGS84_SEMIMAJOR);
        let inv_flattening = numeric_value(ellipsoid, "secondDefiningParameter.inverseFlattening", 0.0);

        if inv_flattening == 0.0 {
            error!("Ellipsoid inverseFlattening corrupt or missing.");
            return Err(SrsError::CorruptData(
                "Ellipsoid inverseFlattening corrupt or missing".to_string(),
            ));
        }

        let meridian = datum.and_then(|d| d.path("usesPrimeMeridian.PrimeMeridian"));
        let (pm_name, pm_offset) = match meridian {
            Some(meridian) => (
                meridian.value_at("meridianName").unwrap_or("Unnamed Prime Meridian"),
                numeric_value(Some(meridian), "greenwichLongitude.angle", 0.0),
            ),
            None => (constants::PM_GREENWICH, 0.0),
        };

        self.set_geog_cs(
            Some(geog_name),
            Some(datum_name),
            Some(ellipsoid_name),
            semi_major,
            inv_flattening,
            Some(pm_name),
            pm_offset,
            None,
        )?;

        if let Some((authority, code)) = xml_authority(crs, "srsID") {
            self.set_authority("GEOGCS", &authority, code)?;
        }
        if let Some(datum) = datum {
            if let Some((authority, code)) = xml_authority(datum, "datumID") {
                self.set_authority("GEOGCS|DATUM", &authority, code)?;
            }
            if let Some((authority, code)) = xml_authority(datum, "usesPrimeMeridian.PrimeMeridian.meridianID") {
                self.set_authority("GEOGCS|PRIMEM", &authority, code)?;
            }
        }
        if let Some(ellipsoid) = ellipsoid {
            if let Some((authority, code)) = xml_authority(ellipsoid, "ellipsoidID") {
                self.set_authority("GEOGCS|DATUM|SPHEROID", &authority, code)?;
            }
        }

        self.fixup()
    }

    fn import_proj_cs_from_xml(&mut self, ctx: &SrsContext, crs: &XmlElement) -> SrsResult<()> {
        self.set_proj_cs(crs.value_at("srsName").unwrap_or("Unnamed"))?;

        let authority = xml_authority(crs, "srsID");
        if let Some((name, code)) = &authority {
            self.set_authority("PROJCS", name, *code)?;
        }

        let conversion = crs.path("definedByConversion.Conversion");
        let base = crs.path("baseCRS.GeographicCRS");

        if let Some((name, code)) = &authority {
            if name.eq_ignore_ascii_case("EPSG") && (conversion.is_none() || base.is_none()) {
                debug!("GML projected system defined by EPSG:{}", code);
                return self.import_from_epsg(ctx, *code);
            }
        }

        if let Some(base) = base {
            self.import_geog_cs_from_xml(ctx, base)?;
        }

        let conversion = conversion.ok_or_else(|| {
            error!("Unable to find a conversion node under the definedByConversion node of the ProjectedCRS.");
            SrsError::CorruptData("ProjectedCRS has no Conversion".to_string())
        })?;

        let method = epsg_object_code(conversion.child("usesMethod"), "method");
        match method {
            METHOD_TRANSVERSE_MERCATOR => self.set_tm(
                conversion_parameter(conversion, 8801, 0.0),
                conversion_parameter(conversion, 8802, 0.0),
                conversion_parameter(conversion, 8805, 1.0),
                conversion_parameter(conversion, 8806, 0.0),
                conversion_parameter(conversion, 8807, 0.0),
            )?,
            _ => {
                error!("Conversion method {} not recognised.", method);
                return Err(SrsError::CorruptData(format!("Conversion method {} not recognised", method)));
            }
        }

        self.fixup()
    }
}
