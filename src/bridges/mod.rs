//! Format bridges
//!
//! Translators between the node-tree model and foreign encodings: PROJ
//! strings, the GML coordinate-reference dialect and the Panorama code
//! tuple. Each bridge adds `import_from_*`/`export_to_*` methods to
//! `SpatialReference`.

pub mod gml;
pub mod panorama;
pub mod proj4;
pub mod proj4_export;

mod tests;

pub use panorama::PanoramaDefinition;
pub use proj4::ProjTokens;
