//! Collaborators used while building and translating definitions

use crate::epsg::dictionary::{Dictionary, MemoryDictionary};
use crate::io::{HttpClient, NativeProjection};
use crate::srs::shared::GmlContext;

/// The external services a translation may consult
pub struct SrsContext {
    /// Geodetic dictionary for EPSG and `DICT:` lookups
    pub dictionary: Box<dyn Dictionary>,
    /// Remote retrieval for URL input
    pub http: Option<Box<dyn HttpClient>>,
    /// Native projection library for PROJ normalisation
    pub native: Option<Box<dyn NativeProjection>>,
    /// Identifier source for GML export
    pub gml: GmlContext,
}

impl SrsContext {
    /// A context around `dictionary` with no other collaborators
    pub fn new(dictionary: Box<dyn Dictionary>) -> Self {
        SrsContext {
            dictionary,
            http: None,
            native: None,
            gml: GmlContext::shared(),
        }
    }

    pub fn with_http(mut self, http: Box<dyn HttpClient>) -> Self {
        self.http = Some(http);
        self
    }

    pub fn with_native(mut self, native: Box<dyn NativeProjection>) -> Self {
        self.native = Some(native);
        self
    }

    pub fn with_gml(mut self, gml: GmlContext) -> Self {
        self.gml = gml;
        self
    }
}

impl Default for SrsContext {
    /// An empty in-memory dictionary and no other collaborators
    fn default() -> Self {
        SrsContext::new(Box::new(MemoryDictionary::new()))
    }
}
