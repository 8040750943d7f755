use axum::http::{HeaderMap, Method, Request, Uri};

use fetchgate_core::RequestView;

/// Stand-in for header values that are not visible ASCII. Parses as an
/// unrecognised token, so the policy fails closed on it.
const NON_ASCII_VALUE: &str = "invalid";

/// Borrowed view over an axum/http request.
#[derive(Debug, Clone, Copy)]
pub struct HttpRequestView<'a> {
    method: &'a Method,
    uri: &'a Uri,
    headers: &'a HeaderMap,
}

impl<'a> HttpRequestView<'a> {
    pub fn new<B>(req: &'a Request<B>) -> Self {
        Self {
            method: req.method(),
            uri: req.uri(),
            headers: req.headers(),
        }
    }
}

impl RequestView for HttpRequestView<'_> {
    fn method(&self) -> &str {
        self.method.as_str()
    }

    fn path(&self) -> &str {
        self.uri.path()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .map(|v| v.to_str().unwrap_or(NON_ASCII_VALUE))
    }
}
