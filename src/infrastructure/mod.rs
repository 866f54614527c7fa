//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module provides the platform-specific utilities the rest of the crate
//! stays agnostic of, currently limited to data directory resolution.

pub mod paths;

pub use paths::{default_data_dir, FAVORITES_FILE};
