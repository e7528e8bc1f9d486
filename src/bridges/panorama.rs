//! Panorama GIS projection codes
//!
//! Panorama describes a system by a projection code, a datum code, an
//! ellipsoid code and a short parameter list in radians. Parameter slots
//! are: first and second standard parallels, latitude and longitude of
//! the centre, scale factor, false easting, false northing, and for the
//! import only a zone number.

use log::{debug, warn};

use crate::epsg::resolver::ellipsoid_info;
use crate::srs::constants::{datums, params, units};
use crate::srs::context::SrsContext;
use crate::srs::errors::{SrsError, SrsResult};
use crate::srs::model::SpatialReference;
use crate::srs::projections::ProjectionMethod;
use crate::srs::tables::tables;

/// Panorama datum code for Pulkovo 1942
const DATUM_PULKOVO_1942: i64 = 1;
/// Panorama datum code for WGS 84
const DATUM_WGS84: i64 = 2;
/// Panorama ellipsoid code for Krassowsky 1940
const ELLIPSOID_KRASSOWSKY: i64 = 1;
/// Panorama ellipsoid code for WGS 84
const ELLIPSOID_WGS84: i64 = 9;

/// Tolerance when matching an ellipsoid against the Panorama table
const ELLIPSOID_EPSILON: f64 = 1e-10;

/// Width of a six-degree zone in radians
const ZONE_WIDTH: f64 = 0.1047197551196597;
/// Half a zone in radians
const HALF_ZONE: f64 = 0.05235987755982989;

/// Number of parameter slots read by the import, including the zone
const IMPORT_PARAMS: usize = 8;

/// Projection codes of the Panorama scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanoramaProjection {
    None,
    TransverseMercator,
    LambertConformalConic,
    Stereographic,
    AzimuthalEquidistant,
    Mercator,
    Polyconic,
    PolarStereographic,
    Gnomonic,
    Utm,
    WagnerI,
    Mollweide,
    EquidistantConic,
    LambertAzimuthalEqualArea,
    Equirectangular,
    CylindricalEqualArea,
    ImwPolyconic,
    Miller,
}

impl PanoramaProjection {
    pub const ALL: [PanoramaProjection; 18] = [
        PanoramaProjection::None,
        PanoramaProjection::TransverseMercator,
        PanoramaProjection::LambertConformalConic,
        PanoramaProjection::Stereographic,
        PanoramaProjection::AzimuthalEquidistant,
        PanoramaProjection::Mercator,
        PanoramaProjection::Polyconic,
        PanoramaProjection::PolarStereographic,
        PanoramaProjection::Gnomonic,
        PanoramaProjection::Utm,
        PanoramaProjection::WagnerI,
        PanoramaProjection::Mollweide,
        PanoramaProjection::EquidistantConic,
        PanoramaProjection::LambertAzimuthalEqualArea,
        PanoramaProjection::Equirectangular,
        PanoramaProjection::CylindricalEqualArea,
        PanoramaProjection::ImwPolyconic,
        PanoramaProjection::Miller,
    ];

    pub fn code(self) -> i64 {
        match self {
            PanoramaProjection::None => -1,
            PanoramaProjection::TransverseMercator => 1,
            PanoramaProjection::LambertConformalConic => 2,
            PanoramaProjection::Stereographic => 5,
            PanoramaProjection::AzimuthalEquidistant => 6,
            PanoramaProjection::Mercator => 8,
            PanoramaProjection::Polyconic => 10,
            PanoramaProjection::PolarStereographic => 13,
            PanoramaProjection::Gnomonic => 15,
            PanoramaProjection::Utm => 17,
            PanoramaProjection::WagnerI => 18,
            PanoramaProjection::Mollweide => 19,
            PanoramaProjection::EquidistantConic => 20,
            PanoramaProjection::LambertAzimuthalEqualArea => 24,
            PanoramaProjection::Equirectangular => 27,
            PanoramaProjection::CylindricalEqualArea => 28,
            PanoramaProjection::ImwPolyconic => 29,
            PanoramaProjection::Miller => 34,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        PanoramaProjection::ALL.iter().copied().find(|projection| projection.code() == code)
    }
}

/// A system expressed in Panorama codes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanoramaDefinition {
    pub projection: i64,
    pub datum: i64,
    pub ellipsoid: i64,
    /// UTM zone, negative for the southern hemisphere, 0 otherwise
    pub zone: i64,
    /// Parameters in radians and meters
    pub params: [f64; 7],
}

impl Default for PanoramaDefinition {
    fn default() -> Self {
        PanoramaDefinition {
            projection: PanoramaProjection::None.code(),
            datum: 0,
            ellipsoid: 0,
            zone: 0,
            params: [0.0; 7],
        }
    }
}

/// Zone number of a central meridian given in radians
fn zone_from_longitude(longitude: f64) -> i32 {
    ((longitude + HALF_ZONE) / ZONE_WIDTH + 0.5) as i32
}

fn degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

impl SpatialReference {
    /// Initialize from Panorama codes
    ///
    /// # Arguments
    /// * `ctx` - Collaborators; the dictionary resolves datum codes
    /// * `projection` - Panorama projection code
    /// * `datum` - Panorama datum code
    /// * `ellipsoid` - Panorama ellipsoid code, used when the datum is unknown
    /// * `params` - Up to eight parameters; missing slots read as zero
    ///
    /// An unknown projection code gives a local system. Unknown datum and
    /// ellipsoid codes fall back to WGS84 with a warning.
    pub fn import_from_panorama(
        &mut self,
        ctx: &SrsContext,
        projection: i64,
        datum: i64,
        ellipsoid: i64,
        params: &[f64],
    ) -> SrsResult<()> {
        self.clear();

        let mut slots = [0.0; IMPORT_PARAMS];
        for (slot, value) in slots.iter_mut().zip(params) {
            *slot = *value;
        }

        let result = self.import_panorama_slots(ctx, projection, datum, ellipsoid, &slots);
        if result.is_err() {
            self.clear();
        }
        result
    }

    fn import_panorama_slots(
        &mut self,
        ctx: &SrsContext,
        projection: i64,
        datum: i64,
        ellipsoid: i64,
        p: &[f64; IMPORT_PARAMS],
    ) -> SrsResult<()> {
        match PanoramaProjection::from_code(projection) {
            Some(PanoramaProjection::None) => {}
            Some(PanoramaProjection::Utm) => {
                let zone = if p[7] == 0.0 { zone_from_longitude(p[3]) } else { p[7] as i32 };
                self.set_utm(zone.saturating_abs(), zone >= 0)?;
            }
            Some(PanoramaProjection::WagnerI) => self.set_wagner(1, 0.0, p[5], p[6])?,
            Some(PanoramaProjection::Mercator) => self.set_mercator(degrees(p[0]), degrees(p[3]), p[4], p[5], p[6])?,
            Some(PanoramaProjection::PolarStereographic) => {
                self.set_ps(degrees(p[2]), degrees(p[3]), p[4], p[5], p[6])?
            }
            Some(PanoramaProjection::Polyconic) => self.set_polyconic(degrees(p[2]), degrees(p[3]), p[5], p[6])?,
            Some(PanoramaProjection::EquidistantConic) => {
                self.set_ec(degrees(p[0]), degrees(p[1]), degrees(p[2]), degrees(p[3]), p[5], p[6])?
            }
            Some(PanoramaProjection::LambertConformalConic) => {
                self.set_lcc(degrees(p[0]), degrees(p[1]), degrees(p[2]), degrees(p[3]), p[5], p[6])?
            }
            Some(PanoramaProjection::TransverseMercator) => {
                // The false easting carries the zone number
                let (zone, central_meridian) = if p[7] == 0.0 {
                    (zone_from_longitude(p[3]), degrees(p[3]))
                } else {
                    let zone = p[7] as i32;
                    (zone, f64::from(zone) * 6.0 - 3.0)
                };
                let false_easting = f64::from(zone) * 1000000.0 + 500000.0;
                self.set_tm(degrees(p[2]), central_meridian, 1.0, false_easting, p[6])?;
            }
            Some(PanoramaProjection::Stereographic) => {
                self.set_stereographic(degrees(p[2]), degrees(p[3]), p[4], p[5], p[6])?
            }
            Some(PanoramaProjection::AzimuthalEquidistant) => self.set_ae(degrees(p[0]), degrees(p[3]), p[5], p[6])?,
            Some(PanoramaProjection::Gnomonic) => self.set_gnomonic(degrees(p[2]), degrees(p[3]), p[5], p[6])?,
            Some(PanoramaProjection::Mollweide) => self.set_mollweide(degrees(p[3]), p[5], p[6])?,
            Some(PanoramaProjection::LambertAzimuthalEqualArea) => {
                self.set_laea(degrees(p[0]), degrees(p[3]), p[5], p[6])?
            }
            Some(PanoramaProjection::Equirectangular) => {
                self.set_equirectangular(degrees(p[0]), degrees(p[3]), p[5], p[6])?
            }
            Some(PanoramaProjection::CylindricalEqualArea) => self.set_cea(degrees(p[0]), degrees(p[3]), p[5], p[6])?,
            Some(PanoramaProjection::ImwPolyconic) => {
                self.set_iwm_polyconic(degrees(p[0]), degrees(p[1]), degrees(p[3]), p[5], p[6])?
            }
            Some(PanoramaProjection::Miller) => self.set_mc(degrees(p[2]), degrees(p[3]), p[5], p[6])?,
            None => {
                debug!("Unsupported Panorama projection: {}", projection);
                self.set_local_cs(&format!("\"Panorama\" projection number {}", projection))?;
            }
        }

        if !self.is_local() {
            self.set_panorama_datum(ctx, datum, ellipsoid)?;
        }

        if self.is_local() || self.is_projected() {
            self.set_linear_units(units::METER, 1.0)?;
        }

        self.fixup_ordering();
        Ok(())
    }

    fn set_panorama_datum(&mut self, ctx: &SrsContext, datum: i64, ellipsoid: i64) -> SrsResult<()> {
        if let Some(gcs) = tables().panorama_datum_gcs(datum) {
            let mut geog = SpatialReference::new();
            match geog.import_from_epsg(ctx, gcs) {
                Ok(()) => return self.copy_geog_cs_from(&geog),
                Err(e) => warn!("Panorama datum {} maps to EPSG:{} which failed to resolve: {}", datum, gcs, e),
            }
        }

        if let Some(entry) = tables().panorama_ellipsoid(ellipsoid) {
            let (name, semi_major, inv_flattening) = ellipsoid_info(ctx.dictionary.as_ref(), entry.epsg)
                .unwrap_or_else(|_| (entry.name.clone(), entry.semi_major, entry.inv_flattening));

            self.set_geog_cs(
                Some(&format!("Unknown datum based upon the {} ellipsoid", name)),
                Some(&format!("Not specified (based on {} spheroid)", name)),
                Some(&name),
                semi_major,
                inv_flattening,
                None,
                0.0,
                None,
            )?;
            return self.set_authority("SPHEROID", "EPSG", entry.epsg);
        }

        warn!(
            "Wrong datum code {} and ellipsoid code {}. Falling back to use WGS84.",
            datum, ellipsoid
        );
        self.set_well_known_geog_cs("WGS84")
    }

    /// Express this system in Panorama codes
    ///
    /// Projections without a Panorama code degrade to "no projection".
    /// A datum other than Pulkovo 1942 or WGS 84 is described by its
    /// ellipsoid alone.
    ///
    /// # Returns
    /// `UnsupportedSrs` for an empty definition
    pub fn export_to_panorama(&self) -> SrsResult<PanoramaDefinition> {
        if self.root().is_none() {
            return Err(SrsError::UnsupportedSrs("Empty definition has no Panorama form".to_string()));
        }

        let mut definition = PanoramaDefinition::default();
        if !self.is_local() {
            if let Some(projection) = self.get_attr_value("PROJECTION", 0) {
                self.panorama_projection(projection, &mut definition);
            }
        }

        let (datum, ellipsoid) = self.panorama_datum();
        definition.datum = datum;
        definition.ellipsoid = ellipsoid;
        Ok(definition)
    }

    fn panorama_projection(&self, projection: &str, definition: &mut PanoramaDefinition) {
        let angle = |name: &str| self.get_norm_proj_parm(name, 0.0).to_radians();
        let linear = |name: &str| self.get_norm_proj_parm(name, 0.0);
        let p = &mut definition.params;

        let code = match ProjectionMethod::from_wkt_name(projection) {
            Some(ProjectionMethod::Mercator1SP) => {
                p[0] = angle(params::LATITUDE_OF_ORIGIN);
                p[3] = angle(params::CENTRAL_MERIDIAN);
                p[4] = self.get_proj_parm(params::SCALE_FACTOR, 1.0);
                PanoramaProjection::Mercator
            }
            Some(ProjectionMethod::PolarStereographic) => {
                p[2] = angle(params::LATITUDE_OF_ORIGIN);
                p[3] = angle(params::CENTRAL_MERIDIAN);
                p[4] = self.get_proj_parm(params::SCALE_FACTOR, 1.0);
                PanoramaProjection::PolarStereographic
            }
            Some(ProjectionMethod::Polyconic) => {
                p[2] = angle(params::LATITUDE_OF_ORIGIN);
                p[3] = angle(params::CENTRAL_MERIDIAN);
                PanoramaProjection::Polyconic
            }
            Some(ProjectionMethod::EquidistantConic) => {
                p[0] = angle(params::STANDARD_PARALLEL_1);
                p[1] = angle(params::STANDARD_PARALLEL_2);
                p[2] = angle(params::LATITUDE_OF_CENTER);
                p[3] = angle(params::LONGITUDE_OF_CENTER);
                PanoramaProjection::EquidistantConic
            }
            Some(ProjectionMethod::LambertConformalConic2SP) => {
                p[0] = angle(params::STANDARD_PARALLEL_1);
                p[1] = angle(params::STANDARD_PARALLEL_2);
                p[2] = angle(params::LATITUDE_OF_ORIGIN);
                p[3] = angle(params::CENTRAL_MERIDIAN);
                PanoramaProjection::LambertConformalConic
            }
            Some(ProjectionMethod::TransverseMercator) => match self.get_utm_zone() {
                Some((zone, north)) => {
                    definition.zone = if north { i64::from(zone) } else { -i64::from(zone) };
                    PanoramaProjection::Utm
                }
                None => {
                    p[2] = angle(params::LATITUDE_OF_ORIGIN);
                    p[3] = angle(params::CENTRAL_MERIDIAN);
                    p[4] = self.get_proj_parm(params::SCALE_FACTOR, 1.0);
                    PanoramaProjection::TransverseMercator
                }
            },
            Some(ProjectionMethod::WagnerI) => PanoramaProjection::WagnerI,
            Some(ProjectionMethod::Stereographic) => {
                p[2] = angle(params::LATITUDE_OF_ORIGIN);
                p[3] = angle(params::CENTRAL_MERIDIAN);
                p[4] = self.get_proj_parm(params::SCALE_FACTOR, 1.0);
                PanoramaProjection::Stereographic
            }
            Some(ProjectionMethod::AzimuthalEquidistant) => {
                p[0] = angle(params::LATITUDE_OF_CENTER);
                p[3] = angle(params::LONGITUDE_OF_CENTER);
                PanoramaProjection::AzimuthalEquidistant
            }
            Some(ProjectionMethod::Gnomonic) => {
                p[2] = angle(params::LATITUDE_OF_ORIGIN);
                p[3] = angle(params::CENTRAL_MERIDIAN);
                PanoramaProjection::Gnomonic
            }
            Some(ProjectionMethod::Mollweide) => {
                p[3] = angle(params::CENTRAL_MERIDIAN);
                PanoramaProjection::Mollweide
            }
            Some(ProjectionMethod::LambertAzimuthalEqualArea) => {
                p[0] = angle(params::LATITUDE_OF_CENTER);
                p[3] = angle(params::LONGITUDE_OF_CENTER);
                PanoramaProjection::LambertAzimuthalEqualArea
            }
            Some(ProjectionMethod::Equirectangular) => {
                p[0] = angle(params::LATITUDE_OF_ORIGIN);
                p[3] = angle(params::CENTRAL_MERIDIAN);
                PanoramaProjection::Equirectangular
            }
            Some(ProjectionMethod::CylindricalEqualArea) => {
                p[0] = angle(params::STANDARD_PARALLEL_1);
                p[3] = angle(params::CENTRAL_MERIDIAN);
                PanoramaProjection::CylindricalEqualArea
            }
            Some(ProjectionMethod::ImwPolyconic) => {
                p[0] = angle(params::LATITUDE_OF_1ST_POINT);
                p[1] = angle(params::LATITUDE_OF_2ND_POINT);
                p[3] = angle(params::CENTRAL_MERIDIAN);
                PanoramaProjection::ImwPolyconic
            }
            Some(ProjectionMethod::MillerCylindrical) => {
                p[2] = angle(params::LATITUDE_OF_CENTER);
                p[3] = angle(params::LONGITUDE_OF_CENTER);
                PanoramaProjection::Miller
            }
            _ => {
                debug!("Projection \"{}\" has no Panorama code", projection);
                PanoramaProjection::None
            }
        };

        if code != PanoramaProjection::None && code != PanoramaProjection::Utm {
            p[5] = linear(params::FALSE_EASTING);
            p[6] = linear(params::FALSE_NORTHING);
        }
        definition.projection = code.code();
    }

    /// Panorama datum and ellipsoid codes, zero when unmatched
    fn panorama_datum(&self) -> (i64, i64) {
        let datum = match self.get_attr_value("DATUM", 0) {
            Some(datum) => datum,
            None => return (0, 0),
        };

        if datum.eq_ignore_ascii_case("Pulkovo_1942") {
            return (DATUM_PULKOVO_1942, ELLIPSOID_KRASSOWSKY);
        }
        if datum.eq_ignore_ascii_case(datums::WGS84) {
            return (DATUM_WGS84, ELLIPSOID_WGS84);
        }

        let semi_major = self.get_semi_major();
        let inv_flattening = self.get_inv_flattening();
        match tables().panorama_ellipsoids.iter().find(|entry| {
            (semi_major - entry.semi_major).abs() < ELLIPSOID_EPSILON
                && (inv_flattening - entry.inv_flattening).abs() < ELLIPSOID_EPSILON
        }) {
            Some(entry) => (0, entry.index),
            None => {
                debug!("Ellipsoid of datum \"{}\" has no Panorama code", datum);
                (0, 0)
            }
        }
    }
}
