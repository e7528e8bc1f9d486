//! Collaborators at the edge of the crate
//!
//! Traits for services the translators consume but do not implement:
//! remote retrieval and a native projection library.

pub mod http;
pub mod projlib;

pub use http::{HttpClient, HttpResponse};
pub use projlib::NativeProjection;
