//! Remote catalog access.
//!
//! This module isolates everything that touches the catalog API: the
//! [`CatalogClient`] trait the application layer depends on, the wire
//! decoding, and the HTTP implementation used by the binary.
//!
//! # Modules
//!
//! - [`client`]: Client trait and response decoding
//! - [`http`]: `reqwest`-backed implementation

pub mod client;
pub mod http;

pub use client::{decode_detail, decode_search, CatalogClient};
pub use http::HttpCatalogClient;
