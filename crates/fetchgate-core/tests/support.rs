//! Shared test doubles: an in-memory request and a recording logger.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use fetchgate_core::{RequestView, ViolationLogger};

#[derive(Debug, Clone)]
pub struct TestRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
}

impl TestRequest {
    /// Mirrors a browser that always sends all three headers, possibly empty.
    pub fn new(method: &str, path: &str, site: &str, mode: &str, dest: &str) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            headers: vec![
                ("Sec-Fetch-Site".into(), site.into()),
                ("Sec-Fetch-Mode".into(), mode.into()),
                ("Sec-Fetch-Dest".into(), dest.into()),
            ],
        }
    }
}

impl RequestView for TestRequest {
    fn method(&self) -> &str {
        &self.method
    }
    fn path(&self) -> &str {
        &self.path
    }
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Records the method of every request it is handed.
#[derive(Default)]
pub struct MethodLogger {
    reports: Mutex<Vec<String>>,
}

impl MethodLogger {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().unwrap().clone()
    }
}

impl ViolationLogger for MethodLogger {
    fn log(&self, request: &dyn RequestView) {
        self.reports.lock().unwrap().push(request.method().to_string());
    }
}

pub struct Case {
    pub name: &'static str,
    pub method: &'static str,
    pub site: &'static str,
    pub mode: &'static str,
    pub dest: &'static str,
}

const fn case(
    name: &'static str,
    method: &'static str,
    site: &'static str,
    mode: &'static str,
    dest: &'static str,
) -> Case {
    Case { name, method, site, mode, dest }
}

impl Case {
    pub fn request(&self, path: &str) -> TestRequest {
        TestRequest::new(self.method, path, self.site, self.mode, self.dest)
    }
}

pub const ALLOWED: &[Case] = &[
    case("fetch metadata not supported", "GET", "", "", ""),
    case("same origin", "GET", "same-origin", "", ""),
    case("same site", "GET", "same-site", "", ""),
    case("user agent initiated", "GET", "none", "", ""),
    case("preflight missing mode", "OPTIONS", "cross-site", "", ""),
];

pub const ALLOWED_NAV: &[Case] = &[
    case("GET navigate document", "GET", "cross-site", "navigate", "document"),
    case("HEAD navigate document", "HEAD", "cross-site", "navigate", "document"),
    case("GET navigate nested-document", "GET", "cross-site", "navigate", "nested-document"),
    case("HEAD navigate nested-document", "HEAD", "cross-site", "navigate", "nested-document"),
    case("GET nested-navigate document", "GET", "cross-site", "nested-navigate", "document"),
    case("HEAD nested-navigate document", "HEAD", "cross-site", "nested-navigate", "document"),
    case("GET nested-navigate nested-document", "GET", "cross-site", "nested-navigate", "nested-document"),
    case("HEAD nested-navigate nested-document", "HEAD", "cross-site", "nested-navigate", "nested-document"),
];

pub const DISALLOWED_NAV: &[Case] = &[
    case("POST navigate document", "POST", "cross-site", "navigate", "document"),
    case("GET navigate object", "GET", "cross-site", "navigate", "object"),
    case("HEAD navigate embed", "HEAD", "cross-site", "navigate", "embed"),
];

pub const DISALLOWED: &[Case] = &[
    case("POST cors", "POST", "cross-site", "cors", "document"),
    case("POST no-cors", "POST", "cross-site", "no-cors", "nested-document"),
];
