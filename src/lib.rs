pub mod node;
pub mod srs;
pub mod epsg;
pub mod bridges;
pub mod io;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::{OutputFormat, SrsKit};

pub use srs::{SpatialReference, SrsContext, SrsError, SrsResult};
pub use epsg::dictionary::{Dictionary, MemoryDictionary, Record};
pub use bridges::PanoramaDefinition;
