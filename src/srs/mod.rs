//! Coordinate system model
//!
//! `SpatialReference` wraps a node tree and offers typed builders, unit
//! normalization, comparison and classification on top of it.

pub mod builders;
pub mod compare;
pub mod constants;
pub mod context;
pub mod errors;
pub mod model;
pub mod norm;
pub mod projections;
pub mod shared;
pub mod tables;
pub mod user_input;

mod tests;

pub use context::SrsContext;
pub use errors::{SrsError, SrsResult};
pub use model::{AxisOrientation, SpatialReference};
pub use projections::ProjectionMethod;
pub use shared::{cleanup, next_gml_id, wgs84, GmlContext};
