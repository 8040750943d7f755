//! Fetch metadata signal (Sec-Fetch-Site / Sec-Fetch-Mode / Sec-Fetch-Dest).
//!
//! Header values are parsed into closed enums with an `Other` escape hatch so
//! that unknown tokens from newer browsers never fail parsing. Empty values are
//! treated exactly like a missing header.

pub mod headers;
pub mod request;

pub use headers::{Dest, Mode, Site, SEC_FETCH_DEST, SEC_FETCH_MODE, SEC_FETCH_SITE};
pub use request::{FetchMetadata, RequestView};
