use std::fmt;
use std::str::FromStr;
use log::{debug, info};
use crate::bridges::PanoramaDefinition;
use crate::epsg::dictionary::{Dictionary, MemoryDictionary};
use crate::io::{HttpClient, NativeProjection};
use crate::srs::{SpatialReference, SrsContext, SrsError, SrsResult};
use crate::utils::logger::Logger;

/// Encodings a definition can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Wkt,
    PrettyWkt,
    Proj4,
    Xml,
    Panorama,
}

impl FromStr for OutputFormat {
    type Err = SrsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wkt" => Ok(OutputFormat::Wkt),
            "pretty" | "pretty-wkt" => Ok(OutputFormat::PrettyWkt),
            "proj4" | "proj" => Ok(OutputFormat::Proj4),
            "xml" | "gml" => Ok(OutputFormat::Xml),
            "panorama" => Ok(OutputFormat::Panorama),
            other => Err(SrsError::UnsupportedOperation(format!("Unknown output format: {}", other))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Wkt => "wkt",
            OutputFormat::PrettyWkt => "pretty",
            OutputFormat::Proj4 => "proj4",
            OutputFormat::Xml => "xml",
            OutputFormat::Panorama => "panorama",
        };
        write!(f, "{}", name)
    }
}

/// Main interface to the SrsKit library
///
/// Bundles the collaborators every translation needs and exposes the
/// common parse/serialize/compare round trips.
pub struct SrsKit {
    context: SrsContext,
    logger: Logger,
}

impl SrsKit {
    /// Create an instance with an empty dictionary and no file logging
    ///
    /// EPSG codes will not resolve until a dictionary is supplied; WKT,
    /// PROJ strings and the well-known geographic names still work.
    pub fn new() -> Self {
        SrsKit {
            context: SrsContext::default(),
            logger: Logger::disabled(),
        }
    }

    /// Create an instance around prepared collaborators
    pub fn with_context(context: SrsContext) -> Self {
        SrsKit {
            context,
            logger: Logger::disabled(),
        }
    }

    /// Create an instance whose dictionary is loaded from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the dictionary file
    ///
    /// # Returns
    /// A SrsKit instance or an error if the file cannot be read or parsed
    pub fn from_dictionary_file(path: &str) -> SrsResult<Self> {
        let dictionary = MemoryDictionary::from_file(path)?;
        info!("Loaded dictionary from {}", path);
        Ok(SrsKit::with_context(SrsContext::new(Box::new(dictionary))))
    }

    /// Replace the dictionary, keeping the other collaborators
    pub fn set_dictionary(&mut self, dictionary: Box<dyn Dictionary>) {
        self.context.dictionary = dictionary;
    }

    /// Install a client for `http://` definitions
    pub fn with_http(mut self, http: Box<dyn HttpClient>) -> Self {
        self.context.http = Some(http);
        self
    }

    /// Install a native projection library
    pub fn with_native(mut self, native: Box<dyn NativeProjection>) -> Self {
        self.context.native = Some(native);
        self
    }

    /// Record parsed definitions in a log file
    ///
    /// # Arguments
    /// * `log_file` - Path to the log file, truncated on open
    pub fn with_log_file(mut self, log_file: &str) -> SrsResult<Self> {
        self.logger = Logger::new(log_file)?;
        Ok(self)
    }

    /// The collaborators handed to every translation
    pub fn context(&self) -> &SrsContext {
        &self.context
    }

    /// Parse any accepted user-input form
    ///
    /// # Arguments
    /// * `input` - WKT, `EPSG:n`, a URN or URL, a PROJ string, a well-known
    ///   name or a path to a file holding one of these
    ///
    /// # Returns
    /// The parsed definition or the error of the last form tried
    pub fn parse(&self, input: &str) -> SrsResult<SpatialReference> {
        let mut srs = SpatialReference::new();
        srs.set_from_user_input(&self.context, input)?;
        debug!("Parsed '{}' as {}", input, srs.export_to_wkt());
        self.logger.log_block(&format!("Definition of {}", input), &srs.export_to_pretty_wkt(false))?;
        Ok(srs)
    }

    /// Build a definition from an EPSG code
    ///
    /// # Arguments
    /// * `code` - The EPSG code
    /// * `keep_axis_order` - Keep the EPSG axis order instead of stripping
    ///   axes from geographic and projected results
    pub fn from_epsg(&self, code: i32, keep_axis_order: bool) -> SrsResult<SpatialReference> {
        let mut srs = SpatialReference::new();
        if keep_axis_order {
            srs.import_from_epsga(&self.context, code)?;
        } else {
            srs.import_from_epsg(&self.context, code)?;
        }
        Ok(srs)
    }

    /// Build a definition from Panorama codes
    ///
    /// A non-zero `zone` takes precedence over the central meridian.
    pub fn from_panorama(&self, definition: &PanoramaDefinition) -> SrsResult<SpatialReference> {
        let mut params = definition.params.to_vec();
        params.push(definition.zone as f64);

        let mut srs = SpatialReference::new();
        srs.import_from_panorama(
            &self.context,
            definition.projection,
            definition.datum,
            definition.ellipsoid,
            &params,
        )?;
        Ok(srs)
    }

    /// Serialize a definition
    ///
    /// # Arguments
    /// * `srs` - The definition to write
    /// * `format` - Target encoding
    /// * `simplify` - Strip authorities, axes and datum shifts from pretty WKT
    pub fn export(&self, srs: &SpatialReference, format: OutputFormat, simplify: bool) -> SrsResult<String> {
        match format {
            OutputFormat::Wkt => Ok(srs.export_to_wkt()),
            OutputFormat::PrettyWkt => Ok(srs.export_to_pretty_wkt(simplify)),
            OutputFormat::Proj4 => srs.export_to_proj4(&self.context),
            OutputFormat::Xml => srs.export_to_xml(&self.context),
            OutputFormat::Panorama => srs.export_to_panorama().map(|def| format_panorama(&def)),
        }
    }

    /// Parse `input` and write it in another encoding
    pub fn translate(&self, input: &str, format: OutputFormat, simplify: bool) -> SrsResult<String> {
        let srs = self.parse(input)?;
        self.export(&srs, format, simplify)
    }

    /// Whether two user inputs describe the same system
    pub fn is_same(&self, first: &str, second: &str) -> SrsResult<bool> {
        let a = self.parse(first)?;
        let b = self.parse(second)?;
        Ok(a.is_same(&b))
    }
}

impl Default for SrsKit {
    fn default() -> Self {
        SrsKit::new()
    }
}

/// One-line rendering of a Panorama tuple
pub fn format_panorama(definition: &PanoramaDefinition) -> String {
    let params: Vec<String> = definition.params.iter().map(|p| p.to_string()).collect();
    format!(
        "projection={} datum={} ellipsoid={} zone={} params=[{}]",
        definition.projection,
        definition.datum,
        definition.ellipsoid,
        definition.zone,
        params.join(", ")
    )
}
