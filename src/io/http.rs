//! HTTP collaborator for remote definitions
//!
//! No network client ships with the crate. Callers that want URL import
//! plug in their own `HttpClient`.

use crate::srs::errors::SrsResult;

/// Response returned by an `HttpClient`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code, 200 on success
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(body: &str) -> Self {
        HttpResponse { status: 200, body: body.to_string() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Synchronous HTTP retrieval
pub trait HttpClient: Send + Sync {
    /// Fetch `url`
    ///
    /// # Arguments
    /// * `url` - Absolute URL
    /// * `headers` - Extra request headers as name and value pairs
    /// * `timeout` - Timeout in seconds
    fn fetch(&self, url: &str, headers: &[(&str, &str)], timeout: u64) -> SrsResult<HttpResponse>;
}
