//! Incoming HTTP request type.

use std::collections::HashMap;

use bytes::Bytes;
use http::{HeaderMap, Uri};

/// An incoming HTTP request with its body already buffered.
///
/// The server builds these from hyper requests; tests and embedders can
/// build them from any `http::Request<Bytes>`:
///
/// ```rust
/// use bytes::Bytes;
/// use tsu_view::Request;
///
/// let req = Request::from(
///     http::Request::builder()
///         .method("OPTIONS")
///         .uri("/users")
///         .body(Bytes::new())
///         .unwrap(),
/// );
/// assert_eq!(req.verb(), "options");
/// ```
#[derive(Debug)]
pub struct Request {
    pub(crate) method: http::Method,
    pub(crate) uri: Uri,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    pub fn method(&self) -> &http::Method { &self.method }
    pub fn uri(&self) -> &Uri { &self.uri }
    pub fn path(&self) -> &str { self.uri.path() }
    pub fn headers(&self) -> &HeaderMap { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }

    /// The request verb, lower-cased (`"get"`, `"options"`, …).
    ///
    /// This is the token view dispatch looks up. Extension methods come back
    /// lower-cased as well and simply match no handler.
    pub fn verb(&self) -> String {
        self.method.as_str().to_ascii_lowercase()
    }

    /// Case-insensitive header lookup. Non-UTF-8 values read as `None`.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/users/{id}`, `req.param("id")` on `/users/42` returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub(crate) fn with_params(mut self, params: HashMap<String, String>) -> Self {
        self.params = params;
        self
    }
}

impl From<http::Request<Bytes>> for Request {
    fn from(req: http::Request<Bytes>) -> Self {
        let (parts, body) = req.into_parts();
        Self {
            method: parts.method,
            uri: parts.uri,
            headers: parts.headers,
            body,
            params: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: &str) -> Request {
        Request::from(
            http::Request::builder()
                .method(method)
                .uri("/users/42?full=1")
                .header("X-Request-Id", "abc")
                .body(Bytes::from_static(b"payload"))
                .unwrap(),
        )
    }

    #[test]
    fn verb_is_lowercased() {
        assert_eq!(request("GET").verb(), "get");
        assert_eq!(request("PROPFIND").verb(), "propfind");
        assert_eq!(request("BREW").verb(), "brew");
    }

    #[test]
    fn accessors() {
        let req = request("POST").with_params(HashMap::from([("id".to_owned(), "42".to_owned())]));
        assert_eq!(req.path(), "/users/42");
        assert_eq!(req.header("x-request-id"), Some("abc"));
        assert_eq!(req.body(), b"payload");
        assert_eq!(req.param("id"), Some("42"));
        assert_eq!(req.param("missing"), None);
    }
}
