//! HTTP utilities for Sleeper API communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

/// Headers sent with every Sleeper request.
///
/// The Sleeper API is public and read-only, so no auth headers are needed.
pub fn default_headers() -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let agent = format!("sleeper-ffl/{}", env!("CARGO_PKG_VERSION"));
    h.insert(USER_AGENT, HeaderValue::from_str(&agent)?);
    Ok(h)
}
