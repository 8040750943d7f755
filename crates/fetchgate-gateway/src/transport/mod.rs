//! Transport adapters (HTTP request -> `RequestView`).

pub mod http;

pub use http::HttpRequestView;
