//! Request view and the per-request signal extracted from it.

use super::headers::{Dest, Mode, Site, SEC_FETCH_DEST, SEC_FETCH_MODE, SEC_FETCH_SITE};

/// Read-only view of an inbound request, supplied by the hosting pipeline.
///
/// `header` looks names up case-insensitively and returns the first value only.
pub trait RequestView {
    fn method(&self) -> &str;
    fn path(&self) -> &str;
    fn header(&self, name: &str) -> Option<&str>;
}

/// Fetch metadata signal for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub site: Option<Site>,
    pub mode: Option<Mode>,
    pub dest: Option<Dest>,
    pub method: String,
    pub path: String,
}

impl FetchMetadata {
    pub fn from_request(req: &dyn RequestView) -> Self {
        Self {
            site: req.header(SEC_FETCH_SITE).and_then(Site::parse),
            mode: req.header(SEC_FETCH_MODE).and_then(Mode::parse),
            dest: req.header(SEC_FETCH_DEST).and_then(Dest::parse),
            method: req.method().to_string(),
            path: req.path().to_string(),
        }
    }

    pub fn is_safe_method(&self) -> bool {
        matches!(self.method.as_str(), "GET" | "HEAD")
    }

    pub fn is_options(&self) -> bool {
        self.method == "OPTIONS"
    }
}
