//! Native projection library collaborator
//!
//! The PROJ bridge can hand strings to an external projection library to
//! expand `+init=` references, and the exporter can ask it for datum shift
//! parameters. Both calls are optional.

/// Boundary to a native projection library
pub trait NativeProjection: Send + Sync {
    /// Expand a PROJ string into its full form
    ///
    /// # Returns
    /// The expanded string, or `None` when the library cannot resolve it
    fn normalize(&self, proj_string: &str) -> Option<String>;

    /// Bursa-Wolf parameters to WGS84 for an EPSG geographic CS
    fn wgs84_transform(&self, gcs_code: i32) -> Option<[f64; 7]> {
        let _ = gcs_code;
        None
    }
}
