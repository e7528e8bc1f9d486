//! PROJ string export

use log::{debug, error};

use crate::bridges::proj4::datum_keyword;
use crate::epsg::epsg_wgs84_transform;
use crate::srs::constants::params;
use crate::srs::context::SrsContext;
use crate::srs::errors::{SrsError, SrsResult};
use crate::srs::model::SpatialReference;
use crate::srs::projections::ProjectionMethod;
use crate::srs::tables::tables;
use crate::utils::number_format::{atof, atoi, format_g16};

/// PROJ ellipsoid keywords recognised by semi-major axis and inverse
/// flattening, with the inverse-flattening tolerance
const ELLIPSOID_MATCHES: [(&str, f64, f64, f64); 18] = [
    ("clrk80", 6378249.145, 293.465, 0.0001),
    ("krass", 6378245.0, 298.3, 0.0001),
    ("intl", 6378388.0, 297.0, 0.0001),
    ("aust_SA", 6378160.0, 298.25, 0.0001),
    ("bessel", 6377397.155, 299.1528128, 0.0001),
    ("bess_nam", 6377483.865, 299.1528128, 0.0001),
    ("GRS67", 6378160.0, 298.247167427, 0.0001),
    ("GRS80", 6378137.0, 298.257222101, 0.000001),
    ("clrk66", 6378206.4, 294.9786982, 0.0001),
    ("mod_airy", 6377340.189, 299.3249646, 0.0001),
    ("airy", 6377563.396, 299.3249646, 0.0001),
    ("helmert", 6378200.0, 298.3, 0.0001),
    ("fschr60m", 6378155.0, 298.3, 0.0001),
    ("evrstSS", 6377298.556, 300.8017, 0.0001),
    ("WGS60", 6378165.0, 298.3, 0.0001),
    ("WGS66", 6378145.0, 298.25, 0.0001),
    ("WGS72", 6378135.0, 298.26, 0.0001),
    ("WGS84", 6378137.0, 298.257223563, 0.000001),
];

/// Accumulates `+key=value` tokens
#[derive(Debug, Default)]
struct ProjStringBuilder {
    tokens: Vec<String>,
}

impl ProjStringBuilder {
    fn flag(&mut self, token: &str) -> &mut Self {
        self.tokens.push(format!("+{}", token));
        self
    }

    fn text(&mut self, key: &str, value: &str) -> &mut Self {
        self.tokens.push(format!("+{}={}", key, value));
        self
    }

    fn number(&mut self, key: &str, value: f64) -> &mut Self {
        self.text(key, &format_g16(value))
    }

    fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    fn finish(self) -> String {
        self.tokens.join(" ")
    }
}

impl SpatialReference {
    /// Translate into a PROJ string
    ///
    /// A `PROJ4` extension on the root is returned verbatim. Local systems
    /// translate to an empty string.
    ///
    /// # Returns
    /// The PROJ string, or `UnsupportedSrs` for an empty model or a
    /// projection with no PROJ equivalent
    pub fn export_to_proj4(&self, ctx: &SrsContext) -> SrsResult<String> {
        let root_value = match self.root_value() {
            Some(value) => value,
            None => {
                error!("No translation for an empty SRS to PROJ.4 format is known.");
                return Err(SrsError::UnsupportedSrs("Empty SRS has no PROJ.4 translation".to_string()));
            }
        };

        if let Some(predefined) = self.get_extension(Some(root_value), "PROJ4") {
            return Ok(predefined.to_string());
        }

        let mut out = ProjStringBuilder::default();
        let projection = self.get_attr_value("PROJECTION", 0);

        match projection {
            None if self.is_geographic() => {
                out.text("proj", "longlat");
            }
            _ if self.is_geocentric() => {
                out.text("proj", "geocent");
            }
            None => return Ok(String::new()),
            Some(name) => match ProjectionMethod::from_wkt_name(name) {
                Some(method) => self.push_projection(&mut out, method, name)?,
                None => {
                    error!("No translation for {} to PROJ.4 format is known.", name);
                    return Err(SrsError::UnsupportedSrs(format!("No PROJ.4 translation for {}", name)));
                }
            },
        }

        self.push_datum(ctx, &mut out);
        self.push_prime_meridian(&mut out);
        self.push_units(&mut out);

        out.flag("no_defs");
        Ok(out.finish())
    }

    /// Projection template for `method`
    fn push_projection(&self, out: &mut ProjStringBuilder, method: ProjectionMethod, name: &str) -> SrsResult<()> {
        let p = |param: &str, default: f64| self.get_norm_proj_parm(param, default);
        let false_easting = p(params::FALSE_EASTING, 0.0);
        let false_northing = p(params::FALSE_NORTHING, 0.0);

        match method {
            ProjectionMethod::CylindricalEqualArea => {
                out.text("proj", "cea")
                    .number("lon_0", p(params::CENTRAL_MERIDIAN, 0.0))
                    .number("lat_ts", p(params::STANDARD_PARALLEL_1, 0.0));
            }
            ProjectionMethod::Bonne => {
                out.text("proj", "bonne")
                    .number("lon_0", p(params::CENTRAL_MERIDIAN, 0.0))
                    .number("lat_1", p(params::STANDARD_PARALLEL_1, 0.0));
            }
            ProjectionMethod::CassiniSoldner | ProjectionMethod::NewZealandMapGrid => {
                let keyword = if method == ProjectionMethod::CassiniSoldner { "cass" } else { "nzmg" };
                out.text("proj", keyword)
                    .number("lat_0", p(params::LATITUDE_OF_ORIGIN, 0.0))
                    .number("lon_0", p(params::CENTRAL_MERIDIAN, 0.0));
            }
            ProjectionMethod::TransverseMercator => {
                if let Some((zone, north)) = self.get_utm_zone() {
                    out.text("proj", "utm").text("zone", &zone.to_string());
                    if !north {
                        out.flag("south");
                    }
                    return Ok(());
                }
                out.text("proj", "tmerc")
                    .number("lat_0", p(params::LATITUDE_OF_ORIGIN, 0.0))
                    .number("lon_0", p(params::CENTRAL_MERIDIAN, 0.0))
                    .number("k", p(params::SCALE_FACTOR, 1.0));
            }
            ProjectionMethod::TransverseMercatorSouthOriented => {
                out.text("proj", "tmerc")
                    .number("lat_0", p(params::LATITUDE_OF_ORIGIN, 0.0))
                    .number("lon_0", p(params::CENTRAL_MERIDIAN, 0.0))
                    .number("k", p(params::SCALE_FACTOR, 1.0))
                    .number("x_0", false_easting)
                    .number("y_0", false_northing)
                    .text("axis", "wsu");
                return Ok(());
            }
            ProjectionMethod::Mercator1SP => {
                let latitude = p(params::LATITUDE_OF_ORIGIN, 0.0);
                let scale = p(params::SCALE_FACTOR, 1.0);
                out.text("proj", "merc").number("lon_0", p(params::CENTRAL_MERIDIAN, 0.0));
                if latitude == 0.0 {
                    out.number("k", scale);
                } else if scale == 1.0 {
                    out.number("lat_ts", latitude);
                } else {
                    error!("Mercator_1SP with scale != 1.0 and latitude of origin != 0, not supported by PROJ.4.");
                    return Err(SrsError::UnsupportedSrs(
                        "Mercator_1SP with scale and latitude of origin has no PROJ.4 translation".to_string(),
                    ));
                }
            }
            ProjectionMethod::Mercator2SP => {
                out.text("proj", "merc")
                    .number("lon_0", p(params::CENTRAL_MERIDIAN, 0.0))
                    .number("lat_ts", p(params::STANDARD_PARALLEL_1, 0.0));
            }
            ProjectionMethod::ObliqueStereographic | ProjectionMethod::Stereographic => {
                let keyword = if method == ProjectionMethod::ObliqueStereographic { "sterea" } else { "stere" };
                out.text("proj", keyword)
                    .number("lat_0", p(params::LATITUDE_OF_ORIGIN, 0.0))
                    .number("lon_0", p(params::CENTRAL_MERIDIAN, 0.0))
                    .number("k", p(params::SCALE_FACTOR, 1.0));
            }
            ProjectionMethod::PolarStereographic => {
                let latitude = p(params::LATITUDE_OF_ORIGIN, 90.0);
                let pole = if latitude >= 0.0 { "90" } else { "-90" };
                out.text("proj", "stere")
                    .text("lat_0", pole)
                    .number("lat_ts", latitude)
                    .number("lon_0", p(params::CENTRAL_MERIDIAN, 0.0))
                    .number("k", p(params::SCALE_FACTOR, 1.0));
            }
            ProjectionMethod::Equirectangular => {
                out.text("proj", "eqc")
                    .number("lat_ts", p(params::STANDARD_PARALLEL_1, 0.0))
                    .number("lat_0", p(params::LATITUDE_OF_ORIGIN, 0.0))
                    .number("lon_0", p(params::CENTRAL_MERIDIAN, 0.0));
            }
            ProjectionMethod::GaussSchreiberTransverseMercator => {
                out.text("proj", "gstmerc")
                    .number("lat_0", p(params::LATITUDE_OF_ORIGIN, -21.116666667))
                    .number("lon_0", p(params::CENTRAL_MERIDIAN, 55.53333333309))
                    .number("k_0", p(params::SCALE_FACTOR, 1.0))
                    .number("x_0", p(params::FALSE_EASTING, 160000.000))
                    .number("y_0", p(params::FALSE_NORTHING, 50000.000));
                return Ok(());
            }
            ProjectionMethod::Gnomonic
            | ProjectionMethod::Orthographic
            | ProjectionMethod::LambertAzimuthalEqualArea
            | ProjectionMethod::AzimuthalEquidistant
            | ProjectionMethod::Polyconic => {
                let keyword = match method {
                    ProjectionMethod::Gnomonic => "gnom",
                    ProjectionMethod::Orthographic => "ortho",
                    ProjectionMethod::LambertAzimuthalEqualArea => "laea",
                    ProjectionMethod::AzimuthalEquidistant => "aeqd",
                    _ => "poly",
                };
                out.text("proj", keyword)
                    .number("lat_0", p(params::LATITUDE_OF_ORIGIN, 0.0))
                    .number("lon_0", p(params::CENTRAL_MERIDIAN, 0.0));
            }
            ProjectionMethod::EquidistantConic => {
                out.text("proj", "eqdc")
                    .number("lat_0", p(params::LATITUDE_OF_CENTER, 0.0))
                    .number("lon_0", p(params::LONGITUDE_OF_CENTER, 0.0))
                    .number("lat_1", p(params::STANDARD_PARALLEL_1, 0.0))
                    .number("lat_2", p(params::STANDARD_PARALLEL_2, 0.0));
            }
            ProjectionMethod::MillerCylindrical => {
                out.text("proj", "mill")
                    .number("lat_0", p(params::LATITUDE_OF_ORIGIN, 0.0))
                    .number("lon_0", p(params::CENTRAL_MERIDIAN, 0.0))
                    .number("x_0", false_easting)
                    .number("y_0", false_northing)
                    .flag("R_A");
                return Ok(());
            }
            ProjectionMethod::VanDerGrinten => {
                out.text("proj", "vandg")
                    .number("lon_0", p(params::CENTRAL_MERIDIAN, 0.0))
                    .number("x_0", false_easting)
                    .number("y_0", false_northing)
                    .flag("R_A");
                return Ok(());
            }
            ProjectionMethod::Mollweide
            | ProjectionMethod::EckertI
            | ProjectionMethod::EckertII
            | ProjectionMethod::EckertIII
            | ProjectionMethod::EckertIV
            | ProjectionMethod::EckertV
            | ProjectionMethod::EckertVI
            | ProjectionMethod::Robinson
            | ProjectionMethod::Sinusoidal
            | ProjectionMethod::GallStereographic
            | ProjectionMethod::GoodeHomolosine => {
                let (keyword, meridian) = match method {
                    ProjectionMethod::Mollweide => ("moll", params::CENTRAL_MERIDIAN),
                    ProjectionMethod::EckertI => ("eck1", params::CENTRAL_MERIDIAN),
                    ProjectionMethod::EckertII => ("eck2", params::CENTRAL_MERIDIAN),
                    ProjectionMethod::EckertIII => ("eck3", params::CENTRAL_MERIDIAN),
                    ProjectionMethod::EckertIV => ("eck4", params::CENTRAL_MERIDIAN),
                    ProjectionMethod::EckertV => ("eck5", params::CENTRAL_MERIDIAN),
                    ProjectionMethod::EckertVI => ("eck6", params::CENTRAL_MERIDIAN),
                    ProjectionMethod::Robinson => ("robin", params::CENTRAL_MERIDIAN),
                    ProjectionMethod::Sinusoidal => ("sinu", params::LONGITUDE_OF_CENTER),
                    ProjectionMethod::GallStereographic => ("gall", params::CENTRAL_MERIDIAN),
                    _ => ("goode", params::CENTRAL_MERIDIAN),
                };
                out.text("proj", keyword).number("lon_0", p(meridian, 0.0));
            }
            ProjectionMethod::AlbersConicEqualArea => {
                out.text("proj", "aea")
                    .number("lat_1", p(params::STANDARD_PARALLEL_1, 0.0))
                    .number("lat_2", p(params::STANDARD_PARALLEL_2, 0.0))
                    .number("lat_0", p(params::LATITUDE_OF_CENTER, 0.0))
                    .number("lon_0", p(params::LONGITUDE_OF_CENTER, 0.0));
            }
            ProjectionMethod::InterruptedGoodeHomolosine => {
                out.text("proj", "igh");
                return Ok(());
            }
            ProjectionMethod::GeostationarySatellite => {
                out.text("proj", "geos")
                    .number("lon_0", p(params::CENTRAL_MERIDIAN, 0.0))
                    .number("h", p(params::SATELLITE_HEIGHT, 35785831.0));
            }
            ProjectionMethod::LambertConformalConic2SP | ProjectionMethod::LambertConformalConic2SPBelgium => {
                out.text("proj", "lcc")
                    .number("lat_1", p(params::STANDARD_PARALLEL_1, 0.0))
                    .number("lat_2", p(params::STANDARD_PARALLEL_2, 0.0))
                    .number("lat_0", p(params::LATITUDE_OF_ORIGIN, 0.0))
                    .number("lon_0", p(params::CENTRAL_MERIDIAN, 0.0));
            }
            ProjectionMethod::LambertConformalConic1SP => {
                let latitude = p(params::LATITUDE_OF_ORIGIN, 0.0);
                out.text("proj", "lcc")
                    .number("lat_1", latitude)
                    .number("lat_0", latitude)
                    .number("lon_0", p(params::CENTRAL_MERIDIAN, 0.0))
                    .number("k_0", p(params::SCALE_FACTOR, 1.0));
            }
            ProjectionMethod::HotineObliqueMercator | ProjectionMethod::HotineObliqueMercatorAzimuthCenter => {
                let azimuth = p(params::AZIMUTH, 0.0);
                let swiss = (azimuth - 90.0).abs() < 0.0001
                    && (p(params::RECTIFIED_GRID_ANGLE, 0.0) - 90.0).abs() < 0.0001;

                if swiss {
                    out.text("proj", "somerc")
                        .number("lat_0", p(params::LATITUDE_OF_ORIGIN, 0.0))
                        .number("lon_0", p(params::CENTRAL_MERIDIAN, 0.0))
                        .number("k_0", p(params::SCALE_FACTOR, 1.0))
                        .number("x_0", false_easting)
                        .number("y_0", false_northing);
                    return Ok(());
                }

                out.text("proj", "omerc")
                    .number("lat_0", p(params::LATITUDE_OF_ORIGIN, 0.0))
                    .number("lonc", p(params::CENTRAL_MERIDIAN, 0.0))
                    .number("alpha", azimuth)
                    .number("k", p(params::SCALE_FACTOR, 1.0))
                    .number("x_0", false_easting)
                    .number("y_0", false_northing);
                if method == ProjectionMethod::HotineObliqueMercator {
                    out.flag("no_uoff");
                }
                if let Some(gamma) = self.norm_proj_parm(params::RECTIFIED_GRID_ANGLE) {
                    out.number("gamma", gamma);
                }
                return Ok(());
            }
            ProjectionMethod::HotineObliqueMercatorTwoPointNaturalOrigin => {
                let either = |primary: &str, fallback: &str| p(primary, p(fallback, 0.0));
                out.text("proj", "omerc")
                    .number("lat_0", p(params::LATITUDE_OF_ORIGIN, 0.0))
                    .number("lon_1", either(params::LONGITUDE_OF_POINT_1, params::LONGITUDE_OF_1ST_POINT))
                    .number("lat_1", either(params::LATITUDE_OF_POINT_1, params::LATITUDE_OF_1ST_POINT))
                    .number("lon_2", either(params::LONGITUDE_OF_POINT_2, params::LONGITUDE_OF_2ND_POINT))
                    .number("lat_2", either(params::LATITUDE_OF_POINT_2, params::LATITUDE_OF_2ND_POINT))
                    .number("k", p(params::SCALE_FACTOR, 1.0));
            }
            ProjectionMethod::Krovak => {
                out.text("proj", "krovak")
                    .number("lat_0", p(params::LATITUDE_OF_CENTER, 0.0))
                    .number("lon_0", p(params::LONGITUDE_OF_CENTER, 0.0))
                    .number("alpha", p(params::AZIMUTH, 0.0))
                    .number("k", p(params::SCALE_FACTOR, 1.0));
            }
            ProjectionMethod::TwoPointEquidistant => {
                out.text("proj", "tpeqd")
                    .number("lat_1", p(params::LATITUDE_OF_1ST_POINT, 0.0))
                    .number("lon_1", p(params::LONGITUDE_OF_1ST_POINT, 0.0))
                    .number("lat_2", p(params::LATITUDE_OF_2ND_POINT, 0.0))
                    .number("lon_2", p(params::LONGITUDE_OF_2ND_POINT, 0.0));
            }
            ProjectionMethod::ImwPolyconic => {
                out.text("proj", "iwm_p")
                    .number("lat_1", p(params::LATITUDE_OF_1ST_POINT, 0.0))
                    .number("lat_2", p(params::LATITUDE_OF_2ND_POINT, 0.0))
                    .number("lon_0", p(params::CENTRAL_MERIDIAN, 0.0));
            }
            ProjectionMethod::WagnerI
            | ProjectionMethod::WagnerII
            | ProjectionMethod::WagnerIV
            | ProjectionMethod::WagnerV
            | ProjectionMethod::WagnerVI
            | ProjectionMethod::WagnerVII => {
                let keyword = match method {
                    ProjectionMethod::WagnerI => "wag1",
                    ProjectionMethod::WagnerII => "wag2",
                    ProjectionMethod::WagnerIV => "wag4",
                    ProjectionMethod::WagnerV => "wag5",
                    ProjectionMethod::WagnerVI => "wag6",
                    _ => "wag7",
                };
                out.text("proj", keyword);
            }
            ProjectionMethod::WagnerIII => {
                out.text("proj", "wag3").number("lat_ts", p(params::LATITUDE_OF_ORIGIN, 0.0));
            }
            ProjectionMethod::QuadrilateralizedSphericalCube => {
                out.text("proj", "qsc")
                    .number("lat_0", p(params::LATITUDE_OF_ORIGIN, 0.0))
                    .number("lon_0", p(params::CENTRAL_MERIDIAN, 0.0));
                return Ok(());
            }
            ProjectionMethod::SwissObliqueCylindrical => {
                out.text("proj", "somerc")
                    .number("lat_0", p(params::LATITUDE_OF_ORIGIN, 0.0))
                    .number("lon_0", p(params::CENTRAL_MERIDIAN, 0.0));
            }
            ProjectionMethod::LabordeObliqueMercator | ProjectionMethod::TunisiaMiningGrid => {
                error!("No translation for {} to PROJ.4 format is known.", name);
                return Err(SrsError::UnsupportedSrs(format!("No PROJ.4 translation for {}", name)));
            }
        }

        out.number("x_0", false_easting).number("y_0", false_northing);
        Ok(())
    }

    /// PROJ ellipsoid keyword, or the raw axes
    fn ellipse_definition(&self) -> Vec<String> {
        let semi_major = self.get_semi_major();
        let inv_flattening = self.get_inv_flattening();

        let matched = ELLIPSOID_MATCHES
            .iter()
            .find(|(_, a, rf, rf_tolerance)| {
                (semi_major - a).abs() < 0.01 && (inv_flattening - rf).abs() < *rf_tolerance
            })
            .map(|(key, _, _, _)| *key)
            .or_else(|| match self.get_attr_value("DATUM", 0) {
                Some(datum) if datum.eq_ignore_ascii_case("North_American_Datum_1927") => Some("clrk66"),
                Some(datum) if datum.eq_ignore_ascii_case("North_American_Datum_1983") => Some("GRS80"),
                _ => None,
            });

        match matched {
            Some(key) => vec![format!("+ellps={}", key)],
            None => vec![
                format!("+a={}", format_g16(semi_major)),
                format!("+b={}", format_g16(self.get_semi_minor())),
            ],
        }
    }

    /// Datum keyword, grids and datum shift
    fn push_datum(&self, ctx: &SrsContext, out: &mut ProjStringBuilder) {
        // The ellipsoid is written at most once, before the first datum token
        let mut ellipse = Some(self.ellipse_definition());
        fn flush_ellipse(out: &mut ProjStringBuilder, ellipse: &mut Option<Vec<String>>) {
            if let Some(tokens) = ellipse.take() {
                out.tokens.extend(tokens);
            }
        }

        let epsg_code = |key: &str| {
            self.get_authority_name(Some(key))
                .filter(|authority| authority.eq_ignore_ascii_case("EPSG"))
                .and_then(|_| self.get_authority_code(Some(key)))
                .map(atoi)
        };
        let datum_code = epsg_code("DATUM").unwrap_or(-1);
        let geog_code = epsg_code("GEOGCS");

        let mut datum = self.get_attr_value("DATUM", 0).and_then(|name| {
            datum_keyword(name, datum_code)
                .map(str::to_string)
                .or_else(|| tables().datum_by_wkt_or_code(name, datum_code).map(|entry| entry.proj.clone()))
        });

        if let Some(grids) = self.get_extension(Some("DATUM"), "PROJ4_GRIDS") {
            flush_ellipse(out, &mut ellipse);
            out.text("nadgrids", grids);
            datum = None;
        }

        if let Some(towgs84) = self.get_attr_node("TOWGS84") {
            let values: Vec<&str> = towgs84.children().iter().map(|child| child.value()).collect();
            let rotations_empty = values.len() >= 7 && values[3..7].iter().all(|value| value.is_empty());

            if values.len() >= 3 && (values.len() < 7 || rotations_empty) {
                flush_ellipse(out, &mut ellipse);
                out.text("towgs84", &values[..3].join(","));
                datum = None;
            } else if values.len() >= 7 {
                flush_ellipse(out, &mut ellipse);
                out.text("towgs84", &values[..7].join(","));
                datum = None;
            }
        } else if let (Some(gcs), None) = (geog_code, datum.as_ref()) {
            let transform = epsg_wgs84_transform(ctx.dictionary.as_ref(), gcs).or_else(|| {
                ctx.native
                    .as_ref()
                    .and_then(|native| native.wgs84_transform(gcs))
                    .map(|values| values.map(format_g16))
            });
            if let Some(transform) = transform {
                debug!("Using EPSG:{} Bursa-Wolf parameters for PROJ.4 export", gcs);
                flush_ellipse(out, &mut ellipse);
                out.text("towgs84", &transform.join(","));
            }
        }

        match datum {
            Some(keyword) => {
                out.text("datum", &keyword);
            }
            None => flush_ellipse(out, &mut ellipse),
        }
    }

    /// `+pm=` for a prime meridian off Greenwich
    fn push_prime_meridian(&self, out: &mut ProjStringBuilder) {
        let offset = match self.get_attr_node("PRIMEM") {
            Some(primem) if primem.child_count() >= 2 => atof(primem.child_value(1).unwrap_or("")),
            _ => 0.0,
        };
        if offset == 0.0 {
            return;
        }

        let code = self
            .get_authority_name(Some("PRIMEM"))
            .filter(|authority| authority.eq_ignore_ascii_case("EPSG"))
            .and_then(|_| self.get_authority_code(Some("PRIMEM")))
            .map(atoi)
            .unwrap_or(-1);

        let by_code = if code > 0 { tables().prime_meridian_by_code(code) } else { None };
        let value = match by_code.or_else(|| tables().prime_meridian_by_offset(offset)) {
            Some(pm) => pm.proj.clone(),
            None => format_g16(offset),
        };
        out.text("pm", &value);
    }

    /// Horizontal units, geoid grids and vertical units
    fn push_units(&self, out: &mut ProjStringBuilder) {
        if !out.contains("+proj=longlat") {
            let (name, factor) = self.get_linear_units();
            match tables().linear_unit_by_factor_or_name(factor, Some(name)) {
                Some(unit) => {
                    out.text("units", &unit.proj);
                }
                None => {
                    out.number("to_meter", factor);
                }
            }
        }

        if let Some(geoids) = self.get_extension(Some("VERT_DATUM"), "PROJ4_GRIDS") {
            out.text("geoidgrids", geoids);
        }

        let vertical_unit = self
            .root()
            .and_then(|root| root.get_node("VERT_CS"))
            .and_then(|vert_cs| vert_cs.get_node("UNIT"))
            .filter(|unit| unit.child_count() >= 2);
        if let Some(unit) = vertical_unit {
            let name = unit.child_value(0).unwrap_or("");
            let factor = atof(unit.child_value(1).unwrap_or(""));
            match tables().linear_unit_by_factor_or_name(factor, Some(name)) {
                Some(known) => {
                    out.text("vunits", &known.proj);
                }
                None => {
                    out.number("vto_meter", factor);
                }
            }
        }
    }
}
