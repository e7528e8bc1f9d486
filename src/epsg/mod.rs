//! EPSG authority resolver
//!
//! Builds coordinate systems from EPSG codes by composing records read
//! through the [`Dictionary`] collaborator.

pub mod dictionary;
pub mod identify;
pub mod resolver;
pub mod uom;

pub(crate) mod tests;

pub use dictionary::{Dictionary, MemoryDictionary, Record};
pub use resolver::{ellipsoid_info, epsg_wgs84_transform};

/// Dictionary table names
pub mod tables {
    pub const UNIT_OF_MEASURE: &str = "unit_of_measure";
    pub const PRIME_MERIDIAN: &str = "prime_meridian";
    pub const ELLIPSOID: &str = "ellipsoid";
    pub const GCS_OVERRIDE: &str = "gcs_override";
    pub const GCS: &str = "gcs";
    pub const PCS_OVERRIDE: &str = "pcs_override";
    pub const PCS: &str = "pcs";
    pub const VERTCS_OVERRIDE: &str = "vertcs_override";
    pub const VERTCS: &str = "vertcs";
    pub const COMPDCS: &str = "compdcs";
    pub const GEOCCS: &str = "geoccs";
    pub const COORDINATE_AXIS: &str = "coordinate_axis";
    pub const STATEPLANE: &str = "stateplane";

    /// Supplementary WKT dictionary file consulted for unknown EPSG codes
    pub const EPSG_WKT_FILE: &str = "epsg.wkt";
}
