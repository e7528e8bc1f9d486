//! Utility modules for common functionality
//!
//! Logging, lenient number parsing/printing and DMS angle parsing.

pub mod dms;
pub mod logger;
pub mod number_format;
