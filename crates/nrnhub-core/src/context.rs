//! Request context with typed parameters.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique request identifier for log correlation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new request ID.
    pub fn generate() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let counter = COUNTER.fetch_add(1, Ordering::Relaxed);

        Self(format!("{:x}-{:x}", nanos, counter))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Query string parameters.
pub type QueryParams = HashMap<String, String>;

/// HTTP headers.
pub type Headers = HashMap<String, String>;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl Method {
    /// Parse from a method name, case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "GET" => Some(Method::Get),
            "POST" => Some(Method::Post),
            "PUT" => Some(Method::Put),
            "DELETE" => Some(Method::Delete),
            "PATCH" => Some(Method::Patch),
            "HEAD" => Some(Method::Head),
            "OPTIONS" => Some(Method::Options),
            _ => None,
        }
    }
}

/// Typed request context passed to workload handlers.
#[derive(Debug)]
pub struct RequestContext {
    /// Unique request identifier.
    pub request_id: RequestId,
    /// HTTP method.
    pub method: Method,
    /// Request path, without the query string.
    pub path: String,
    /// Query string parameters.
    pub query: QueryParams,
    /// HTTP headers.
    pub headers: Headers,
}

impl RequestContext {
    /// Create a new request context from a method and a raw path which may
    /// carry a query string.
    pub fn new(method: Method, path_with_query: impl Into<String>) -> Self {
        let raw = path_with_query.into();
        let (path, query_string) = match raw.split_once('?') {
            Some((p, q)) => (p.to_string(), q),
            None => (raw.clone(), ""),
        };

        Self {
            request_id: RequestId::generate(),
            method,
            path,
            query: parse_query(query_string),
            headers: HashMap::new(),
        }
    }

    /// Attach a header value.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Get a query parameter by name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(|s| s.as_str())
    }

    /// Get a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        let name_lower = name.to_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k.to_lowercase() == name_lower)
            .map(|(_, v)| v.as_str())
    }
}

/// Parse an URL-encoded query string into a map. Later keys win.
fn parse_query(query_string: &str) -> QueryParams {
    query_string
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| match part.split_once('=') {
            Some((k, v)) => (url_decode(k), url_decode(v)),
            None => (url_decode(part), String::new()),
        })
        .collect()
}

/// Minimal percent-decoding for query parameters.
fn url_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).unwrap_or("");
                if let Ok(b) = u8::from_str_radix(hex, 16) {
                    out.push(b);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_unique() {
        let a = RequestId::generate();
        let b = RequestId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_query_parsing() {
        let ctx = RequestContext::new(Method::Get, "/api/ads/inquiries?limit=10&offset=20");
        assert_eq!(ctx.path, "/api/ads/inquiries");
        assert_eq!(ctx.query_param("limit"), Some("10"));
        assert_eq!(ctx.query_param("offset"), Some("20"));
        assert_eq!(ctx.query_param("missing"), None);
    }

    #[test]
    fn test_query_decoding() {
        let ctx = RequestContext::new(Method::Post, "/api/ads/upload?filename=banner%20ad.png");
        assert_eq!(ctx.query_param("filename"), Some("banner ad.png"));
    }

    #[test]
    fn test_header_lookup_case_insensitive() {
        let ctx = RequestContext::new(Method::Get, "/api/ads")
            .with_header("Authorization", "Bearer abc");
        assert_eq!(ctx.header("authorization"), Some("Bearer abc"));
    }

    #[test]
    fn test_method_parse() {
        assert_eq!(Method::from_name("get"), Some(Method::Get));
        assert_eq!(Method::from_name("POST"), Some(Method::Post));
        assert_eq!(Method::from_name("brew"), None);
    }
}
