//! Spatial reference constants
//!
//! Canonical projection, parameter, unit and datum names used in WKT trees,
//! plus the well-known geographic definitions. Keeping them here avoids
//! scattering string literals through the builders and bridges.

/// Canonical projection method names
pub mod projections {
    pub const ALBERS_CONIC_EQUAL_AREA: &str = "Albers_Conic_Equal_Area";
    pub const AZIMUTHAL_EQUIDISTANT: &str = "Azimuthal_Equidistant";
    pub const CASSINI_SOLDNER: &str = "Cassini_Soldner";
    pub const CYLINDRICAL_EQUAL_AREA: &str = "Cylindrical_Equal_Area";
    pub const BONNE: &str = "Bonne";
    pub const ECKERT_I: &str = "Eckert_I";
    pub const ECKERT_II: &str = "Eckert_II";
    pub const ECKERT_III: &str = "Eckert_III";
    pub const ECKERT_IV: &str = "Eckert_IV";
    pub const ECKERT_V: &str = "Eckert_V";
    pub const ECKERT_VI: &str = "Eckert_VI";
    pub const EQUIDISTANT_CONIC: &str = "Equidistant_Conic";
    pub const EQUIRECTANGULAR: &str = "Equirectangular";
    pub const GALL_STEREOGRAPHIC: &str = "Gall_Stereographic";
    pub const GAUSS_SCHREIBER_TMERCATOR: &str = "Gauss_Schreiber_Transverse_Mercator";
    pub const GEOSTATIONARY_SATELLITE: &str = "Geostationary_Satellite";
    pub const GOODE_HOMOLOSINE: &str = "Goode_Homolosine";
    pub const IGH: &str = "Interrupted_Goode_Homolosine";
    pub const GNOMONIC: &str = "Gnomonic";
    pub const HOTINE_OBLIQUE_MERCATOR_AZIMUTH_CENTER: &str = "Hotine_Oblique_Mercator_Azimuth_Center";
    pub const HOTINE_OBLIQUE_MERCATOR: &str = "Hotine_Oblique_Mercator";
    pub const HOTINE_OBLIQUE_MERCATOR_TWO_POINT_NATURAL_ORIGIN: &str =
        "Hotine_Oblique_Mercator_Two_Point_Natural_Origin";
    pub const LABORDE_OBLIQUE_MERCATOR: &str = "Laborde_Oblique_Mercator";
    pub const LAMBERT_CONFORMAL_CONIC_1SP: &str = "Lambert_Conformal_Conic_1SP";
    pub const LAMBERT_CONFORMAL_CONIC_2SP: &str = "Lambert_Conformal_Conic_2SP";
    pub const LAMBERT_CONFORMAL_CONIC_2SP_BELGIUM: &str = "Lambert_Conformal_Conic_2SP_Belgium";
    pub const LAMBERT_AZIMUTHAL_EQUAL_AREA: &str = "Lambert_Azimuthal_Equal_Area";
    pub const MERCATOR_1SP: &str = "Mercator_1SP";
    pub const MERCATOR_2SP: &str = "Mercator_2SP";
    pub const MILLER_CYLINDRICAL: &str = "Miller_Cylindrical";
    pub const MOLLWEIDE: &str = "Mollweide";
    pub const NEW_ZEALAND_MAP_GRID: &str = "New_Zealand_Map_Grid";
    pub const OBLIQUE_STEREOGRAPHIC: &str = "Oblique_Stereographic";
    pub const ORTHOGRAPHIC: &str = "Orthographic";
    pub const POLAR_STEREOGRAPHIC: &str = "Polar_Stereographic";
    pub const POLYCONIC: &str = "Polyconic";
    pub const ROBINSON: &str = "Robinson";
    pub const SINUSOIDAL: &str = "Sinusoidal";
    pub const STEREOGRAPHIC: &str = "Stereographic";
    pub const SWISS_OBLIQUE_CYLINDRICAL: &str = "Swiss_Oblique_Cylindrical";
    pub const TRANSVERSE_MERCATOR: &str = "Transverse_Mercator";
    pub const TRANSVERSE_MERCATOR_SOUTH_ORIENTED: &str = "Transverse_Mercator_South_Orientated";
    pub const TUNISIA_MINING_GRID: &str = "Tunisia_Mining_Grid";
    pub const TWO_POINT_EQUIDISTANT: &str = "Two_Point_Equidistant";
    pub const VAN_DER_GRINTEN: &str = "VanDerGrinten";
    pub const KROVAK: &str = "Krovak";
    pub const IMW_POLYCONIC: &str = "International_Map_of_the_World_Polyconic";
    pub const WAGNER_I: &str = "Wagner_I";
    pub const WAGNER_II: &str = "Wagner_II";
    pub const WAGNER_III: &str = "Wagner_III";
    pub const WAGNER_IV: &str = "Wagner_IV";
    pub const WAGNER_V: &str = "Wagner_V";
    pub const WAGNER_VI: &str = "Wagner_VI";
    pub const WAGNER_VII: &str = "Wagner_VII";
    pub const QSC: &str = "Quadrilateralized_Spherical_Cube";
}

/// Canonical projection parameter names
pub mod params {
    pub const CENTRAL_MERIDIAN: &str = "central_meridian";
    pub const SCALE_FACTOR: &str = "scale_factor";
    pub const STANDARD_PARALLEL_1: &str = "standard_parallel_1";
    pub const STANDARD_PARALLEL_2: &str = "standard_parallel_2";
    pub const PSEUDO_STD_PARALLEL_1: &str = "pseudo_standard_parallel_1";
    pub const LONGITUDE_OF_CENTER: &str = "longitude_of_center";
    pub const LATITUDE_OF_CENTER: &str = "latitude_of_center";
    pub const LONGITUDE_OF_ORIGIN: &str = "longitude_of_origin";
    pub const LATITUDE_OF_ORIGIN: &str = "latitude_of_origin";
    pub const FALSE_EASTING: &str = "false_easting";
    pub const FALSE_NORTHING: &str = "false_northing";
    pub const AZIMUTH: &str = "azimuth";
    pub const LONGITUDE_OF_POINT_1: &str = "longitude_of_point_1";
    pub const LATITUDE_OF_POINT_1: &str = "latitude_of_point_1";
    pub const LONGITUDE_OF_POINT_2: &str = "longitude_of_point_2";
    pub const LATITUDE_OF_POINT_2: &str = "latitude_of_point_2";
    pub const RECTIFIED_GRID_ANGLE: &str = "rectified_grid_angle";
    pub const SATELLITE_HEIGHT: &str = "satellite_height";
    pub const LATITUDE_OF_1ST_POINT: &str = "Latitude_Of_1st_Point";
    pub const LONGITUDE_OF_1ST_POINT: &str = "Longitude_Of_1st_Point";
    pub const LATITUDE_OF_2ND_POINT: &str = "Latitude_Of_2nd_Point";
    pub const LONGITUDE_OF_2ND_POINT: &str = "Longitude_Of_2nd_Point";
}

/// Unit names and conversion factors
pub mod units {
    pub const METER: &str = "Meter";
    pub const FOOT: &str = "Foot (International)";
    pub const FOOT_CONV: f64 = 0.3048;
    pub const US_FOOT: &str = "Foot_US";
    pub const US_FOOT_CONV: f64 = 0.3048006096012192;

    pub const DEGREE: &str = "degree";
    /// Radians per degree, kept at the precision written into WKT
    pub const DEGREE_CONV: f64 = 0.0174532925199433;
    pub const DEGREE_CONV_TEXT: &str = "0.0174532925199433";
    pub const RADIAN: &str = "radian";
}

/// Datum names
pub mod datums {
    pub const NAD27: &str = "North_American_Datum_1927";
    pub const NAD83: &str = "North_American_Datum_1983";
    pub const WGS72: &str = "WGS_1972";
    pub const WGS84: &str = "WGS_1984";
}

pub const PM_GREENWICH: &str = "Greenwich";

pub const WGS84_SEMIMAJOR: f64 = 6378137.0;
pub const WGS84_INVFLATTENING: f64 = 298.257223563;

/// Well-known geographic definitions
pub mod wkt {
    pub const WGS84: &str = "GEOGCS[\"WGS 84\",DATUM[\"WGS_1984\",SPHEROID[\"WGS 84\",6378137,298.257223563,AUTHORITY[\"EPSG\",\"7030\"]],AUTHORITY[\"EPSG\",\"6326\"]],PRIMEM[\"Greenwich\",0,AUTHORITY[\"EPSG\",\"8901\"]],UNIT[\"degree\",0.0174532925199433,AUTHORITY[\"EPSG\",\"9122\"]],AUTHORITY[\"EPSG\",\"4326\"]]";
    pub const WGS72: &str = "GEOGCS[\"WGS 72\",DATUM[\"WGS_1972\",SPHEROID[\"WGS 72\",6378135,298.26,AUTHORITY[\"EPSG\",\"7043\"]],TOWGS84[0,0,4.5,0,0,0.554,0.2263],AUTHORITY[\"EPSG\",\"6322\"]],PRIMEM[\"Greenwich\",0,AUTHORITY[\"EPSG\",\"8901\"]],UNIT[\"degree\",0.0174532925199433,AUTHORITY[\"EPSG\",\"9108\"]],AUTHORITY[\"EPSG\",\"4322\"]]";
    pub const NAD27: &str = "GEOGCS[\"NAD27\",DATUM[\"North_American_Datum_1927\",SPHEROID[\"Clarke 1866\",6378206.4,294.978698213898,AUTHORITY[\"EPSG\",\"7008\"]],AUTHORITY[\"EPSG\",\"6267\"]],PRIMEM[\"Greenwich\",0,AUTHORITY[\"EPSG\",\"8901\"]],UNIT[\"degree\",0.0174532925199433,AUTHORITY[\"EPSG\",\"9108\"]],AUTHORITY[\"EPSG\",\"4267\"]]";
    pub const NAD83: &str = "GEOGCS[\"NAD83\",DATUM[\"North_American_Datum_1983\",SPHEROID[\"GRS 1980\",6378137,298.257222101,AUTHORITY[\"EPSG\",\"7019\"]],TOWGS84[0,0,0,0,0,0,0],AUTHORITY[\"EPSG\",\"6269\"]],PRIMEM[\"Greenwich\",0,AUTHORITY[\"EPSG\",\"8901\"]],UNIT[\"degree\",0.0174532925199433,AUTHORITY[\"EPSG\",\"9108\"]],AUTHORITY[\"EPSG\",\"4269\"]]";
}

/// WKT keywords recognised as the start of a definition
pub const WKT_ROOT_KEYWORDS: &[&str] = &["PROJCS", "GEOGCS", "COMPD_CS", "GEOCCS", "VERT_CS", "LOCAL_CS"];
