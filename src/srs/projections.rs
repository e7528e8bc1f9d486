//! Projection methods and named projection setters
//!
//! Each setter selects a projection method on the model and stores its
//! parameters in degrees/meters through `set_norm_proj_parm`, in the order
//! the method lists them.

use log::error;

use crate::srs::constants::{params, projections, units};
use crate::srs::errors::{SrsError, SrsResult};
use crate::srs::model::SpatialReference;

/// Projection methods with a canonical WKT name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectionMethod {
    AlbersConicEqualArea,
    AzimuthalEquidistant,
    CassiniSoldner,
    CylindricalEqualArea,
    Bonne,
    EckertI,
    EckertII,
    EckertIII,
    EckertIV,
    EckertV,
    EckertVI,
    EquidistantConic,
    Equirectangular,
    GallStereographic,
    GaussSchreiberTransverseMercator,
    GeostationarySatellite,
    GoodeHomolosine,
    InterruptedGoodeHomolosine,
    Gnomonic,
    HotineObliqueMercatorAzimuthCenter,
    HotineObliqueMercator,
    HotineObliqueMercatorTwoPointNaturalOrigin,
    LabordeObliqueMercator,
    LambertConformalConic1SP,
    LambertConformalConic2SP,
    LambertConformalConic2SPBelgium,
    LambertAzimuthalEqualArea,
    Mercator1SP,
    Mercator2SP,
    MillerCylindrical,
    Mollweide,
    NewZealandMapGrid,
    ObliqueStereographic,
    Orthographic,
    PolarStereographic,
    Polyconic,
    Robinson,
    Sinusoidal,
    Stereographic,
    SwissObliqueCylindrical,
    TransverseMercator,
    TransverseMercatorSouthOriented,
    TunisiaMiningGrid,
    TwoPointEquidistant,
    VanDerGrinten,
    Krovak,
    ImwPolyconic,
    WagnerI,
    WagnerII,
    WagnerIII,
    WagnerIV,
    WagnerV,
    WagnerVI,
    WagnerVII,
    QuadrilateralizedSphericalCube,
}

impl ProjectionMethod {
    pub const ALL: [ProjectionMethod; 55] = [
        ProjectionMethod::AlbersConicEqualArea,
        ProjectionMethod::AzimuthalEquidistant,
        ProjectionMethod::CassiniSoldner,
        ProjectionMethod::CylindricalEqualArea,
        ProjectionMethod::Bonne,
        ProjectionMethod::EckertI,
        ProjectionMethod::EckertII,
        ProjectionMethod::EckertIII,
        ProjectionMethod::EckertIV,
        ProjectionMethod::EckertV,
        ProjectionMethod::EckertVI,
        ProjectionMethod::EquidistantConic,
        ProjectionMethod::Equirectangular,
        ProjectionMethod::GallStereographic,
        ProjectionMethod::GaussSchreiberTransverseMercator,
        ProjectionMethod::GeostationarySatellite,
        ProjectionMethod::GoodeHomolosine,
        ProjectionMethod::InterruptedGoodeHomolosine,
        ProjectionMethod::Gnomonic,
        ProjectionMethod::HotineObliqueMercatorAzimuthCenter,
        ProjectionMethod::HotineObliqueMercator,
        ProjectionMethod::HotineObliqueMercatorTwoPointNaturalOrigin,
        ProjectionMethod::LabordeObliqueMercator,
        ProjectionMethod::LambertConformalConic1SP,
        ProjectionMethod::LambertConformalConic2SP,
        ProjectionMethod::LambertConformalConic2SPBelgium,
        ProjectionMethod::LambertAzimuthalEqualArea,
        ProjectionMethod::Mercator1SP,
        ProjectionMethod::Mercator2SP,
        ProjectionMethod::MillerCylindrical,
        ProjectionMethod::Mollweide,
        ProjectionMethod::NewZealandMapGrid,
        ProjectionMethod::ObliqueStereographic,
        ProjectionMethod::Orthographic,
        ProjectionMethod::PolarStereographic,
        ProjectionMethod::Polyconic,
        ProjectionMethod::Robinson,
        ProjectionMethod::Sinusoidal,
        ProjectionMethod::Stereographic,
        ProjectionMethod::SwissObliqueCylindrical,
        ProjectionMethod::TransverseMercator,
        ProjectionMethod::TransverseMercatorSouthOriented,
        ProjectionMethod::TunisiaMiningGrid,
        ProjectionMethod::TwoPointEquidistant,
        ProjectionMethod::VanDerGrinten,
        ProjectionMethod::Krovak,
        ProjectionMethod::ImwPolyconic,
        ProjectionMethod::WagnerI,
        ProjectionMethod::WagnerII,
        ProjectionMethod::WagnerIII,
        ProjectionMethod::WagnerIV,
        ProjectionMethod::WagnerV,
        ProjectionMethod::WagnerVI,
        ProjectionMethod::WagnerVII,
        ProjectionMethod::QuadrilateralizedSphericalCube,
    ];

    /// Canonical name stored in the `PROJECTION` node
    pub fn wkt_name(&self) -> &'static str {
        match self {
            ProjectionMethod::AlbersConicEqualArea => projections::ALBERS_CONIC_EQUAL_AREA,
            ProjectionMethod::AzimuthalEquidistant => projections::AZIMUTHAL_EQUIDISTANT,
            ProjectionMethod::CassiniSoldner => projections::CASSINI_SOLDNER,
            ProjectionMethod::CylindricalEqualArea => projections::CYLINDRICAL_EQUAL_AREA,
            ProjectionMethod::Bonne => projections::BONNE,
            ProjectionMethod::EckertI => projections::ECKERT_I,
            ProjectionMethod::EckertII => projections::ECKERT_II,
            ProjectionMethod::EckertIII => projections::ECKERT_III,
            ProjectionMethod::EckertIV => projections::ECKERT_IV,
            ProjectionMethod::EckertV => projections::ECKERT_V,
            ProjectionMethod::EckertVI => projections::ECKERT_VI,
            ProjectionMethod::EquidistantConic => projections::EQUIDISTANT_CONIC,
            ProjectionMethod::Equirectangular => projections::EQUIRECTANGULAR,
            ProjectionMethod::GallStereographic => projections::GALL_STEREOGRAPHIC,
            ProjectionMethod::GaussSchreiberTransverseMercator => projections::GAUSS_SCHREIBER_TMERCATOR,
            ProjectionMethod::GeostationarySatellite => projections::GEOSTATIONARY_SATELLITE,
            ProjectionMethod::GoodeHomolosine => projections::GOODE_HOMOLOSINE,
            ProjectionMethod::InterruptedGoodeHomolosine => projections::IGH,
            ProjectionMethod::Gnomonic => projections::GNOMONIC,
            ProjectionMethod::HotineObliqueMercatorAzimuthCenter => projections::HOTINE_OBLIQUE_MERCATOR_AZIMUTH_CENTER,
            ProjectionMethod::HotineObliqueMercator => projections::HOTINE_OBLIQUE_MERCATOR,
            ProjectionMethod::HotineObliqueMercatorTwoPointNaturalOrigin => {
                projections::HOTINE_OBLIQUE_MERCATOR_TWO_POINT_NATURAL_ORIGIN
            }
            ProjectionMethod::LabordeObliqueMercator => projections::LABORDE_OBLIQUE_MERCATOR,
            ProjectionMethod::LambertConformalConic1SP => projections::LAMBERT_CONFORMAL_CONIC_1SP,
            ProjectionMethod::LambertConformalConic2SP => projections::LAMBERT_CONFORMAL_CONIC_2SP,
            ProjectionMethod::LambertConformalConic2SPBelgium => projections::LAMBERT_CONFORMAL_CONIC_2SP_BELGIUM,
            ProjectionMethod::LambertAzimuthalEqualArea => projections::LAMBERT_AZIMUTHAL_EQUAL_AREA,
            ProjectionMethod::Mercator1SP => projections::MERCATOR_1SP,
            ProjectionMethod::Mercator2SP => projections::MERCATOR_2SP,
            ProjectionMethod::MillerCylindrical => projections::MILLER_CYLINDRICAL,
            ProjectionMethod::Mollweide => projections::MOLLWEIDE,
            ProjectionMethod::NewZealandMapGrid => projections::NEW_ZEALAND_MAP_GRID,
            ProjectionMethod::ObliqueStereographic => projections::OBLIQUE_STEREOGRAPHIC,
            ProjectionMethod::Orthographic => projections::ORTHOGRAPHIC,
            ProjectionMethod::PolarStereographic => projections::POLAR_STEREOGRAPHIC,
            ProjectionMethod::Polyconic => projections::POLYCONIC,
            ProjectionMethod::Robinson => projections::ROBINSON,
            ProjectionMethod::Sinusoidal => projections::SINUSOIDAL,
            ProjectionMethod::Stereographic => projections::STEREOGRAPHIC,
            ProjectionMethod::SwissObliqueCylindrical => projections::SWISS_OBLIQUE_CYLINDRICAL,
            ProjectionMethod::TransverseMercator => projections::TRANSVERSE_MERCATOR,
            ProjectionMethod::TransverseMercatorSouthOriented => projections::TRANSVERSE_MERCATOR_SOUTH_ORIENTED,
            ProjectionMethod::TunisiaMiningGrid => projections::TUNISIA_MINING_GRID,
            ProjectionMethod::TwoPointEquidistant => projections::TWO_POINT_EQUIDISTANT,
            ProjectionMethod::VanDerGrinten => projections::VAN_DER_GRINTEN,
            ProjectionMethod::Krovak => projections::KROVAK,
            ProjectionMethod::ImwPolyconic => projections::IMW_POLYCONIC,
            ProjectionMethod::WagnerI => projections::WAGNER_I,
            ProjectionMethod::WagnerII => projections::WAGNER_II,
            ProjectionMethod::WagnerIII => projections::WAGNER_III,
            ProjectionMethod::WagnerIV => projections::WAGNER_IV,
            ProjectionMethod::WagnerV => projections::WAGNER_V,
            ProjectionMethod::WagnerVI => projections::WAGNER_VI,
            ProjectionMethod::WagnerVII => projections::WAGNER_VII,
            ProjectionMethod::QuadrilateralizedSphericalCube => projections::QSC,
        }
    }

    /// Look a method up by its WKT name, case-insensitively
    pub fn from_wkt_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|method| method.wkt_name().eq_ignore_ascii_case(name))
    }
}

impl SpatialReference {
    /// The projection method of a projected system, if recognised
    pub fn projection_method(&self) -> Option<ProjectionMethod> {
        ProjectionMethod::from_wkt_name(self.get_attr_value("PROJECTION", 0)?)
    }

    /// Select `method` and store `parameters` (degrees/meters) in order
    fn set_projected(&mut self, method: ProjectionMethod, parameters: &[(&str, f64)]) -> SrsResult<()> {
        self.set_projection(method.wkt_name())?;
        for (name, value) in parameters {
            self.set_norm_proj_parm(name, *value)?;
        }
        Ok(())
    }

    /// Transverse Mercator
    ///
    /// # Arguments
    /// * `center_lat` - Latitude of origin
    /// * `center_long` - Central meridian
    /// * `scale` - Scale factor at the central meridian
    /// * `false_easting` - False easting in meters
    /// * `false_northing` - False northing in meters
    pub fn set_tm(
        &mut self,
        center_lat: f64,
        center_long: f64,
        scale: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> SrsResult<()> {
        self.set_tm_variant(
            projections::TRANSVERSE_MERCATOR,
            center_lat,
            center_long,
            scale,
            false_easting,
            false_northing,
        )
    }

    /// Transverse Mercator with a caller-chosen method name
    pub fn set_tm_variant(
        &mut self,
        variant_name: &str,
        center_lat: f64,
        center_long: f64,
        scale: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> SrsResult<()> {
        self.set_projection(variant_name)?;
        self.set_norm_proj_parm(params::LATITUDE_OF_ORIGIN, center_lat)?;
        self.set_norm_proj_parm(params::CENTRAL_MERIDIAN, center_long)?;
        self.set_norm_proj_parm(params::SCALE_FACTOR, scale)?;
        self.set_norm_proj_parm(params::FALSE_EASTING, false_easting)?;
        self.set_norm_proj_parm(params::FALSE_NORTHING, false_northing)
    }

    /// Transverse Mercator (South Orientated)
    pub fn set_tmso(
        &mut self,
        center_lat: f64,
        center_long: f64,
        scale: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::TransverseMercatorSouthOriented,
            &[
                (params::LATITUDE_OF_ORIGIN, center_lat),
                (params::CENTRAL_MERIDIAN, center_long),
                (params::SCALE_FACTOR, scale),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    /// Two Point Equidistant
    pub fn set_tped(
        &mut self,
        lat1: f64,
        long1: f64,
        lat2: f64,
        long2: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::TwoPointEquidistant,
            &[
                (params::LATITUDE_OF_1ST_POINT, lat1),
                (params::LONGITUDE_OF_1ST_POINT, long1),
                (params::LATITUDE_OF_2ND_POINT, lat2),
                (params::LONGITUDE_OF_2ND_POINT, long2),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    /// Tunisia Mining Grid
    pub fn set_tmg(&mut self, center_lat: f64, center_long: f64, false_easting: f64, false_northing: f64) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::TunisiaMiningGrid,
            &[
                (params::LATITUDE_OF_ORIGIN, center_lat),
                (params::CENTRAL_MERIDIAN, center_long),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    /// Albers Conic Equal Area
    pub fn set_acea(
        &mut self,
        std_p1: f64,
        std_p2: f64,
        center_lat: f64,
        center_long: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::AlbersConicEqualArea,
            &[
                (params::STANDARD_PARALLEL_1, std_p1),
                (params::STANDARD_PARALLEL_2, std_p2),
                (params::LATITUDE_OF_CENTER, center_lat),
                (params::LONGITUDE_OF_CENTER, center_long),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    /// Azimuthal Equidistant
    pub fn set_ae(&mut self, center_lat: f64, center_long: f64, false_easting: f64, false_northing: f64) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::AzimuthalEquidistant,
            &[
                (params::LATITUDE_OF_CENTER, center_lat),
                (params::LONGITUDE_OF_CENTER, center_long),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    pub fn set_bonne(&mut self, std_p1: f64, central_meridian: f64, false_easting: f64, false_northing: f64) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::Bonne,
            &[
                (params::STANDARD_PARALLEL_1, std_p1),
                (params::CENTRAL_MERIDIAN, central_meridian),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    /// Cylindrical Equal Area
    pub fn set_cea(&mut self, std_p1: f64, central_meridian: f64, false_easting: f64, false_northing: f64) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::CylindricalEqualArea,
            &[
                (params::STANDARD_PARALLEL_1, std_p1),
                (params::CENTRAL_MERIDIAN, central_meridian),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    /// Cassini-Soldner
    pub fn set_cs(&mut self, center_lat: f64, center_long: f64, false_easting: f64, false_northing: f64) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::CassiniSoldner,
            &[
                (params::LATITUDE_OF_ORIGIN, center_lat),
                (params::CENTRAL_MERIDIAN, center_long),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    /// Equidistant Conic
    pub fn set_ec(
        &mut self,
        std_p1: f64,
        std_p2: f64,
        center_lat: f64,
        center_long: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::EquidistantConic,
            &[
                (params::STANDARD_PARALLEL_1, std_p1),
                (params::STANDARD_PARALLEL_2, std_p2),
                (params::LATITUDE_OF_CENTER, center_lat),
                (params::LONGITUDE_OF_CENTER, center_long),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    /// Eckert I to VI
    ///
    /// # Arguments
    /// * `variation` - Variant number, 1 to 6
    pub fn set_eckert(
        &mut self,
        variation: i32,
        central_meridian: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> SrsResult<()> {
        let method = match variation {
            1 => ProjectionMethod::EckertI,
            2 => ProjectionMethod::EckertII,
            3 => ProjectionMethod::EckertIII,
            4 => ProjectionMethod::EckertIV,
            5 => ProjectionMethod::EckertV,
            6 => ProjectionMethod::EckertVI,
            _ => {
                error!("Unsupported Eckert variation ({}).", variation);
                return Err(SrsError::UnsupportedSrs(format!("Eckert variation {}", variation)));
            }
        };

        self.set_projected(
            method,
            &[
                (params::CENTRAL_MERIDIAN, central_meridian),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    pub fn set_eckert_iv(&mut self, central_meridian: f64, false_easting: f64, false_northing: f64) -> SrsResult<()> {
        self.set_eckert(4, central_meridian, false_easting, false_northing)
    }

    pub fn set_eckert_vi(&mut self, central_meridian: f64, false_easting: f64, false_northing: f64) -> SrsResult<()> {
        self.set_eckert(6, central_meridian, false_easting, false_northing)
    }

    pub fn set_equirectangular(
        &mut self,
        center_lat: f64,
        center_long: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::Equirectangular,
            &[
                (params::LATITUDE_OF_ORIGIN, center_lat),
                (params::CENTRAL_MERIDIAN, center_long),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    /// Equirectangular with a standard parallel
    pub fn set_equirectangular2(
        &mut self,
        center_lat: f64,
        center_long: f64,
        std_parallel1: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::Equirectangular,
            &[
                (params::LATITUDE_OF_ORIGIN, center_lat),
                (params::CENTRAL_MERIDIAN, center_long),
                (params::STANDARD_PARALLEL_1, std_parallel1),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    /// Gall Stereographic
    pub fn set_gs(&mut self, central_meridian: f64, false_easting: f64, false_northing: f64) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::GallStereographic,
            &[
                (params::CENTRAL_MERIDIAN, central_meridian),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    /// Goode Homolosine
    pub fn set_gh(&mut self, central_meridian: f64, false_easting: f64, false_northing: f64) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::GoodeHomolosine,
            &[
                (params::CENTRAL_MERIDIAN, central_meridian),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    /// Interrupted Goode Homolosine, which takes no parameters
    pub fn set_igh(&mut self) -> SrsResult<()> {
        self.set_projected(ProjectionMethod::InterruptedGoodeHomolosine, &[])
    }

    /// Geostationary Satellite
    pub fn set_geos(
        &mut self,
        central_meridian: f64,
        satellite_height: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::GeostationarySatellite,
            &[
                (params::CENTRAL_MERIDIAN, central_meridian),
                (params::SATELLITE_HEIGHT, satellite_height),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    pub fn set_gauss_schreiber_tmercator(
        &mut self,
        center_lat: f64,
        center_long: f64,
        scale: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::GaussSchreiberTransverseMercator,
            &[
                (params::LATITUDE_OF_ORIGIN, center_lat),
                (params::CENTRAL_MERIDIAN, center_long),
                (params::SCALE_FACTOR, scale),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    pub fn set_gnomonic(&mut self, center_lat: f64, center_long: f64, false_easting: f64, false_northing: f64) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::Gnomonic,
            &[
                (params::LATITUDE_OF_ORIGIN, center_lat),
                (params::CENTRAL_MERIDIAN, center_long),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    /// Hotine Oblique Mercator with the origin at the projection center
    /// (variant B)
    ///
    /// # Arguments
    /// * `center_lat` - Latitude of the projection center
    /// * `center_long` - Longitude of the projection center
    /// * `azimuth` - Azimuth of the initial line
    /// * `rect_to_skew` - Angle from the rectified to the skew grid
    /// * `scale` - Scale factor on the initial line
    /// * `false_easting` - False easting in meters
    /// * `false_northing` - False northing in meters
    #[allow(clippy::too_many_arguments)]
    pub fn set_homac(
        &mut self,
        center_lat: f64,
        center_long: f64,
        azimuth: f64,
        rect_to_skew: f64,
        scale: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> SrsResult<()> {
        self.set_hom_method(
            ProjectionMethod::HotineObliqueMercatorAzimuthCenter,
            [center_lat, center_long, azimuth, rect_to_skew, scale, false_easting, false_northing],
        )
    }

    /// Hotine Oblique Mercator with the natural origin (variant A)
    #[allow(clippy::too_many_arguments)]
    pub fn set_hom(
        &mut self,
        center_lat: f64,
        center_long: f64,
        azimuth: f64,
        rect_to_skew: f64,
        scale: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> SrsResult<()> {
        self.set_hom_method(
            ProjectionMethod::HotineObliqueMercator,
            [center_lat, center_long, azimuth, rect_to_skew, scale, false_easting, false_northing],
        )
    }

    fn set_hom_method(&mut self, method: ProjectionMethod, values: [f64; 7]) -> SrsResult<()> {
        self.set_projected(
            method,
            &[
                (params::LATITUDE_OF_CENTER, values[0]),
                (params::LONGITUDE_OF_CENTER, values[1]),
                (params::AZIMUTH, values[2]),
                (params::RECTIFIED_GRID_ANGLE, values[3]),
                (params::SCALE_FACTOR, values[4]),
                (params::FALSE_EASTING, values[5]),
                (params::FALSE_NORTHING, values[6]),
            ],
        )
    }

    /// Hotine Oblique Mercator defined by two points on the center line
    #[allow(clippy::too_many_arguments)]
    pub fn set_hom2pno(
        &mut self,
        center_lat: f64,
        lat1: f64,
        long1: f64,
        lat2: f64,
        long2: f64,
        scale: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::HotineObliqueMercatorTwoPointNaturalOrigin,
            &[
                (params::LATITUDE_OF_CENTER, center_lat),
                (params::LATITUDE_OF_POINT_1, lat1),
                (params::LONGITUDE_OF_POINT_1, long1),
                (params::LATITUDE_OF_POINT_2, lat2),
                (params::LONGITUDE_OF_POINT_2, long2),
                (params::SCALE_FACTOR, scale),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    /// International Map of the World Polyconic
    pub fn set_iwm_polyconic(
        &mut self,
        lat1: f64,
        lat2: f64,
        center_long: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::ImwPolyconic,
            &[
                (params::LATITUDE_OF_1ST_POINT, lat1),
                (params::LATITUDE_OF_2ND_POINT, lat2),
                (params::CENTRAL_MERIDIAN, center_long),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn set_krovak(
        &mut self,
        center_lat: f64,
        center_long: f64,
        azimuth: f64,
        pseudo_std_parallel1: f64,
        scale: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::Krovak,
            &[
                (params::LATITUDE_OF_CENTER, center_lat),
                (params::LONGITUDE_OF_CENTER, center_long),
                (params::AZIMUTH, azimuth),
                (params::PSEUDO_STD_PARALLEL_1, pseudo_std_parallel1),
                (params::SCALE_FACTOR, scale),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    /// Lambert Azimuthal Equal Area
    pub fn set_laea(&mut self, center_lat: f64, center_long: f64, false_easting: f64, false_northing: f64) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::LambertAzimuthalEqualArea,
            &[
                (params::LATITUDE_OF_CENTER, center_lat),
                (params::LONGITUDE_OF_CENTER, center_long),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    /// Lambert Conformal Conic with two standard parallels
    pub fn set_lcc(
        &mut self,
        std_p1: f64,
        std_p2: f64,
        center_lat: f64,
        center_long: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> SrsResult<()> {
        self.set_lcc_method(
            ProjectionMethod::LambertConformalConic2SP,
            std_p1,
            std_p2,
            center_lat,
            center_long,
            false_easting,
            false_northing,
        )
    }

    /// Lambert Conformal Conic with one standard parallel
    pub fn set_lcc1sp(
        &mut self,
        center_lat: f64,
        center_long: f64,
        scale: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::LambertConformalConic1SP,
            &[
                (params::LATITUDE_OF_ORIGIN, center_lat),
                (params::CENTRAL_MERIDIAN, center_long),
                (params::SCALE_FACTOR, scale),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    /// Lambert Conformal Conic, Belgian 1972 variant
    pub fn set_lccb(
        &mut self,
        std_p1: f64,
        std_p2: f64,
        center_lat: f64,
        center_long: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> SrsResult<()> {
        self.set_lcc_method(
            ProjectionMethod::LambertConformalConic2SPBelgium,
            std_p1,
            std_p2,
            center_lat,
            center_long,
            false_easting,
            false_northing,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn set_lcc_method(
        &mut self,
        method: ProjectionMethod,
        std_p1: f64,
        std_p2: f64,
        center_lat: f64,
        center_long: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> SrsResult<()> {
        self.set_projected(
            method,
            &[
                (params::STANDARD_PARALLEL_1, std_p1),
                (params::STANDARD_PARALLEL_2, std_p2),
                (params::LATITUDE_OF_ORIGIN, center_lat),
                (params::CENTRAL_MERIDIAN, center_long),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    /// Miller Cylindrical
    pub fn set_mc(&mut self, center_lat: f64, center_long: f64, false_easting: f64, false_northing: f64) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::MillerCylindrical,
            &[
                (params::LATITUDE_OF_CENTER, center_lat),
                (params::LONGITUDE_OF_CENTER, center_long),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    /// Mercator with a scale factor
    ///
    /// A zero latitude of origin is not written.
    pub fn set_mercator(
        &mut self,
        center_lat: f64,
        center_long: f64,
        scale: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> SrsResult<()> {
        self.set_projection(projections::MERCATOR_1SP)?;
        if center_lat != 0.0 {
            self.set_norm_proj_parm(params::LATITUDE_OF_ORIGIN, center_lat)?;
        }
        self.set_norm_proj_parm(params::CENTRAL_MERIDIAN, center_long)?;
        self.set_norm_proj_parm(params::SCALE_FACTOR, scale)?;
        self.set_norm_proj_parm(params::FALSE_EASTING, false_easting)?;
        self.set_norm_proj_parm(params::FALSE_NORTHING, false_northing)
    }

    /// Mercator with a standard parallel
    pub fn set_mercator_2sp(
        &mut self,
        std_p1: f64,
        center_lat: f64,
        center_long: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> SrsResult<()> {
        self.set_projection(projections::MERCATOR_2SP)?;
        self.set_norm_proj_parm(params::STANDARD_PARALLEL_1, std_p1)?;
        if center_lat != 0.0 {
            self.set_norm_proj_parm(params::LATITUDE_OF_ORIGIN, center_lat)?;
        }
        self.set_norm_proj_parm(params::CENTRAL_MERIDIAN, center_long)?;
        self.set_norm_proj_parm(params::FALSE_EASTING, false_easting)?;
        self.set_norm_proj_parm(params::FALSE_NORTHING, false_northing)
    }

    pub fn set_mollweide(&mut self, central_meridian: f64, false_easting: f64, false_northing: f64) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::Mollweide,
            &[
                (params::CENTRAL_MERIDIAN, central_meridian),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    /// New Zealand Map Grid
    pub fn set_nzmg(&mut self, center_lat: f64, center_long: f64, false_easting: f64, false_northing: f64) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::NewZealandMapGrid,
            &[
                (params::LATITUDE_OF_ORIGIN, center_lat),
                (params::CENTRAL_MERIDIAN, center_long),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    /// Oblique Stereographic
    pub fn set_os(
        &mut self,
        origin_lat: f64,
        cm: f64,
        scale: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> SrsResult<()> {
        self.set_scaled_origin(ProjectionMethod::ObliqueStereographic, origin_lat, cm, scale, false_easting, false_northing)
    }

    pub fn set_orthographic(&mut self, center_lat: f64, center_long: f64, false_easting: f64, false_northing: f64) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::Orthographic,
            &[
                (params::LATITUDE_OF_ORIGIN, center_lat),
                (params::CENTRAL_MERIDIAN, center_long),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    pub fn set_polyconic(&mut self, center_lat: f64, center_long: f64, false_easting: f64, false_northing: f64) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::Polyconic,
            &[
                (params::LATITUDE_OF_ORIGIN, center_lat),
                (params::CENTRAL_MERIDIAN, center_long),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    /// Polar Stereographic
    pub fn set_ps(
        &mut self,
        center_lat: f64,
        center_long: f64,
        scale: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> SrsResult<()> {
        self.set_scaled_origin(ProjectionMethod::PolarStereographic, center_lat, center_long, scale, false_easting, false_northing)
    }

    pub fn set_robinson(&mut self, center_long: f64, false_easting: f64, false_northing: f64) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::Robinson,
            &[
                (params::LONGITUDE_OF_CENTER, center_long),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    pub fn set_sinusoidal(&mut self, center_long: f64, false_easting: f64, false_northing: f64) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::Sinusoidal,
            &[
                (params::LONGITUDE_OF_CENTER, center_long),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    pub fn set_stereographic(
        &mut self,
        origin_lat: f64,
        cm: f64,
        scale: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> SrsResult<()> {
        self.set_scaled_origin(ProjectionMethod::Stereographic, origin_lat, cm, scale, false_easting, false_northing)
    }

    fn set_scaled_origin(
        &mut self,
        method: ProjectionMethod,
        origin_lat: f64,
        cm: f64,
        scale: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> SrsResult<()> {
        self.set_projected(
            method,
            &[
                (params::LATITUDE_OF_ORIGIN, origin_lat),
                (params::CENTRAL_MERIDIAN, cm),
                (params::SCALE_FACTOR, scale),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    /// Swiss Oblique Cylindrical
    pub fn set_soc(&mut self, latitude_of_origin: f64, central_meridian: f64, false_easting: f64, false_northing: f64) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::SwissObliqueCylindrical,
            &[
                (params::LATITUDE_OF_CENTER, latitude_of_origin),
                (params::CENTRAL_MERIDIAN, central_meridian),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    /// Van der Grinten
    pub fn set_vdg(&mut self, central_meridian: f64, false_easting: f64, false_northing: f64) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::VanDerGrinten,
            &[
                (params::CENTRAL_MERIDIAN, central_meridian),
                (params::FALSE_EASTING, false_easting),
                (params::FALSE_NORTHING, false_northing),
            ],
        )
    }

    /// Wagner I to VII
    ///
    /// Only Wagner III stores `center_lat`, as its latitude of origin.
    pub fn set_wagner(
        &mut self,
        variation: i32,
        center_lat: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> SrsResult<()> {
        let method = match variation {
            1 => ProjectionMethod::WagnerI,
            2 => ProjectionMethod::WagnerII,
            3 => ProjectionMethod::WagnerIII,
            4 => ProjectionMethod::WagnerIV,
            5 => ProjectionMethod::WagnerV,
            6 => ProjectionMethod::WagnerVI,
            7 => ProjectionMethod::WagnerVII,
            _ => {
                error!("Unsupported Wagner variation ({}).", variation);
                return Err(SrsError::UnsupportedSrs(format!("Wagner variation {}", variation)));
            }
        };

        self.set_projection(method.wkt_name())?;
        if method == ProjectionMethod::WagnerIII {
            self.set_norm_proj_parm(params::LATITUDE_OF_ORIGIN, center_lat)?;
        }
        self.set_norm_proj_parm(params::FALSE_EASTING, false_easting)?;
        self.set_norm_proj_parm(params::FALSE_NORTHING, false_northing)
    }

    /// Quadrilateralized Spherical Cube
    pub fn set_qsc(&mut self, center_lat: f64, center_long: f64) -> SrsResult<()> {
        self.set_projected(
            ProjectionMethod::QuadrilateralizedSphericalCube,
            &[(params::LATITUDE_OF_ORIGIN, center_lat), (params::CENTRAL_MERIDIAN, center_long)],
        )
    }

    /// Universal Transverse Mercator
    ///
    /// An "unnamed" projected system is renamed after the zone. The linear
    /// unit is forced to meters.
    ///
    /// # Arguments
    /// * `zone` - Zone number, 1 to 60
    /// * `north` - Northern hemisphere when true
    ///
    /// # Returns
    /// `Failure` for a zone outside 1 to 60
    pub fn set_utm(&mut self, zone: i32, north: bool) -> SrsResult<()> {
        if !(1..=60).contains(&zone) {
            error!("UTM zone {} is out of range", zone);
            return Err(SrsError::Failure(format!("UTM zone {} is out of range", zone)));
        }

        self.set_tm(
            0.0,
            f64::from(zone) * 6.0 - 183.0,
            0.9996,
            500000.0,
            if north { 0.0 } else { 10000000.0 },
        )?;

        if self
            .get_attr_value("PROJCS", 0)
            .map_or(false, |name| name.eq_ignore_ascii_case("unnamed"))
        {
            let hemisphere = if north { "Northern" } else { "Southern" };
            self.set_node("PROJCS", &format!("UTM Zone {}, {} Hemisphere", zone, hemisphere))?;
        }

        self.set_linear_units(units::METER, 1.0)
    }

    /// Recognise a UTM definition
    ///
    /// # Returns
    /// The zone number and whether it is the northern hemisphere, or
    /// `None` when the projection is not UTM
    pub fn get_utm_zone(&self) -> Option<(i32, bool)> {
        let projection = self.get_attr_value("PROJECTION", 0)?;
        if !projection.eq_ignore_ascii_case(projections::TRANSVERSE_MERCATOR) {
            return None;
        }

        if self.get_norm_proj_parm(params::LATITUDE_OF_ORIGIN, 0.0) != 0.0 {
            return None;
        }
        if self.get_proj_parm(params::SCALE_FACTOR, 1.0) != 0.9996 {
            return None;
        }
        if (self.get_norm_proj_parm(params::FALSE_EASTING, 0.0) - 500000.0).abs() > 0.001 {
            return None;
        }

        let false_northing = self.get_norm_proj_parm(params::FALSE_NORTHING, 0.0);
        if false_northing != 0.0 && (false_northing - 10000000.0).abs() > 0.001 {
            return None;
        }
        let north = false_northing == 0.0;

        let central_meridian = self.get_norm_proj_parm(params::CENTRAL_MERIDIAN, 0.0);
        let zone = (central_meridian + 186.0) / 6.0;

        if (zone - zone.trunc() - 0.5).abs() > 0.00001
            || central_meridian < -177.00001
            || central_meridian > 177.000001
        {
            return None;
        }

        Some((zone.trunc() as i32, north))
    }
}
